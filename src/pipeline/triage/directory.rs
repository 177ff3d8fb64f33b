use std::path::{Path, PathBuf};

use super::types::{DoctorDirectory, DoctorRecord};

/// Doctor directory backed by a JSON array on disk.
///
/// The file is read on every `load_all()` call, so edits show up without a
/// restart.
pub struct JsonFileDirectory {
    path: PathBuf,
}

impl JsonFileDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DoctorDirectory for JsonFileDirectory {
    fn load_all(&self) -> Vec<DoctorRecord> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "Doctor directory file not found");
            return Vec::new();
        }

        let contents = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(path = %self.path.display(), error = %e, "Cannot read doctor directory");
                return Vec::new();
            }
        };

        parse_doctors(&contents).unwrap_or_else(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "Invalid doctor directory JSON");
            Vec::new()
        })
    }
}

/// Parse a JSON array of doctors, skipping entries that fail to deserialize.
fn parse_doctors(contents: &str) -> Result<Vec<DoctorRecord>, serde_json::Error> {
    let items: Vec<serde_json::Value> = serde_json::from_str(contents)?;
    let total = items.len();

    let doctors: Vec<DoctorRecord> = items
        .into_iter()
        .filter_map(|v| serde_json::from_value(v).ok())
        .collect();

    if doctors.len() < total {
        tracing::warn!(
            skipped = total - doctors.len(),
            "Skipped malformed doctor records"
        );
    }

    Ok(doctors)
}

/// In-memory directory, fixed at construction.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    doctors: Vec<DoctorRecord>,
}

impl StaticDirectory {
    pub fn new(doctors: Vec<DoctorRecord>) -> Self {
        Self { doctors }
    }
}

impl DoctorDirectory for StaticDirectory {
    fn load_all(&self) -> Vec<DoctorRecord> {
        self.doctors.clone()
    }
}
