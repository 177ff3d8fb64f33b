use serde::{Deserialize, Serialize};

use super::TriageError;

/// Sampling temperature for both model calls. Low for near-deterministic output.
pub const TRIAGE_TEMPERATURE: f32 = 0.1;

pub const GENERAL_PHYSICIAN: &str = "General Physician";
pub const DEFAULT_DOCTOR_NAME: &str = "Dr. Sahil";
pub const DEFAULT_HOSPITAL: &str = "City Hospital";

/// Structured reading of the patient's concern, produced by the analysis stage.
///
/// The model is asked for this exact shape but nothing enforces it: category and
/// urgency are free text with expected values, and any field may come back
/// empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageAnalysis {
    /// Emergency / Urgent Care / General / Specialist (expected, not enforced).
    pub category: String,
    /// High / Medium / Low (expected, not enforced).
    pub urgency_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precautions: Option<String>,
    pub symptoms: Vec<String>,
    pub doctor_type: String,
    /// Advisory only; never copied into the final result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
    /// Value of a stray `urgency` key. Only the advice prompt reads it;
    /// the result's urgency and emergency flag come from `urgency_level` alone.
    #[serde(default, rename = "urgency", skip_serializing_if = "Option::is_none")]
    pub urgency_alias: Option<String>,
}

impl TriageAnalysis {
    /// The generic analysis used whenever the model output cannot be used.
    pub fn fallback() -> Self {
        Self {
            category: "General".to_string(),
            urgency_level: "Low".to_string(),
            precautions: None,
            symptoms: Vec::new(),
            doctor_type: GENERAL_PHYSICIAN.to_string(),
            reasoning: None,
            urgency_alias: None,
        }
    }

    /// Urgency as shown to the advice model: `urgency_level`, else the alias.
    pub fn prompt_urgency(&self) -> Option<&str> {
        Some(self.urgency_level.as_str())
            .filter(|u| !u.is_empty())
            .or_else(|| self.urgency_alias.as_deref().filter(|u| !u.is_empty()))
    }

    /// Precautions text when the model supplied something other than whitespace.
    pub fn non_blank_precautions(&self) -> Option<&str> {
        self.precautions
            .as_deref()
            .filter(|p| !p.trim().is_empty())
    }
}

/// A doctor entry as stored in the directory source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "specialty")]
    pub specialization: String,
    #[serde(default)]
    pub hospital: String,
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub availability_time: Vec<String>,
}

fn default_true() -> bool {
    true
}

/// Request-scoped copy of the doctor chosen for this response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedDoctor {
    pub name: String,
    pub specialty: String,
    pub hospital: String,
    pub available: bool,
}

impl SuggestedDoctor {
    /// Hardcoded suggestion used when the directory offers nothing suitable.
    pub fn default_doctor() -> Self {
        Self {
            name: DEFAULT_DOCTOR_NAME.to_string(),
            specialty: GENERAL_PHYSICIAN.to_string(),
            hospital: DEFAULT_HOSPITAL.to_string(),
            available: true,
        }
    }

    /// Project a directory record, filling empty fields from the default doctor.
    pub fn from_record(record: &DoctorRecord) -> Self {
        fn or_default(value: &str, default: &str) -> String {
            if value.is_empty() {
                default.to_string()
            } else {
                value.to_string()
            }
        }

        Self {
            name: or_default(&record.name, DEFAULT_DOCTOR_NAME),
            specialty: or_default(&record.specialization, GENERAL_PHYSICIAN),
            hospital: or_default(&record.hospital, DEFAULT_HOSPITAL),
            available: record.available,
        }
    }
}

/// Final, user-facing triage decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageResult {
    pub category: String,
    pub urgency: String,
    pub precaution: String,
    /// Legacy duplicate of `precaution`, kept for older clients.
    pub precautions: String,
    pub medical_advice: String,
    pub suggested_doctor: SuggestedDoctor,
    pub is_emergency: bool,
}

/// Generative language model abstraction (allows mocking).
pub trait LlmClient: Send + Sync {
    /// Submit a single-turn prompt and return the raw completion text.
    ///
    /// Transport and provider failures surface as `ModelUnavailable`, request
    /// timeouts as `ModelTimeout`.
    fn complete(&self, prompt: &str, temperature: f32) -> Result<String, TriageError>;
}

/// Source of doctor records. Implementations never fail: an unreadable source
/// is an empty directory.
pub trait DoctorDirectory: Send + Sync {
    fn load_all(&self) -> Vec<DoctorRecord>;
}
