use std::sync::Arc;

use super::advice::generate_advice;
use super::analysis::analyze;
use super::assemble::assemble;
use super::matcher::match_doctor;
use super::types::{DoctorDirectory, LlmClient, TriageResult};
use super::TriageError;

/// Orchestrates one triage request:
/// analyze → match doctor → advise → assemble.
///
/// Built once at startup and shared across requests; it holds no per-request
/// state, so concurrent calls need no locking.
#[derive(Clone)]
pub struct TriageOrchestrator {
    llm: Arc<dyn LlmClient>,
    directory: Arc<dyn DoctorDirectory>,
}

impl TriageOrchestrator {
    pub fn new(llm: Arc<dyn LlmClient>, directory: Arc<dyn DoctorDirectory>) -> Self {
        Self { llm, directory }
    }

    pub fn directory(&self) -> &dyn DoctorDirectory {
        self.directory.as_ref()
    }

    /// Run the full pipeline. Blocks on two model calls.
    ///
    /// Only empty input is rejected; whitespace is passed to the model as-is.
    /// Model and parsing failures are absorbed by the stage fallbacks.
    pub fn triage(&self, user_input: &str) -> Result<TriageResult, TriageError> {
        if user_input.is_empty() {
            return Err(TriageError::InvalidInput);
        }

        let analysis = analyze(self.llm.as_ref(), user_input);

        let doctors = self.directory.load_all();
        let suggested_doctor = match_doctor(&analysis.doctor_type, &doctors);

        let advice = generate_advice(self.llm.as_ref(), user_input, &analysis);

        let result = assemble(&analysis, &advice, suggested_doctor);

        tracing::info!(
            category = %result.category,
            urgency = %result.urgency,
            is_emergency = result.is_emergency,
            specialty = %result.suggested_doctor.specialty,
            directory_size = doctors.len(),
            "Triage complete"
        );

        Ok(result)
    }
}
