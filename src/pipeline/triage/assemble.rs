use super::types::{SuggestedDoctor, TriageAnalysis, TriageResult};

/// Urgency value that marks a concern as an emergency. Compared exactly.
const EMERGENCY_URGENCY: &str = "High";

/// Combine the stage outputs into the final result.
///
/// Precautions from the analysis win when they carry any non-whitespace text;
/// otherwise the advice text stands in for them.
pub fn assemble(
    analysis: &TriageAnalysis,
    advice: &str,
    suggested_doctor: SuggestedDoctor,
) -> TriageResult {
    let precaution = analysis
        .non_blank_precautions()
        .unwrap_or(advice)
        .to_string();

    TriageResult {
        category: analysis.category.clone(),
        urgency: analysis.urgency_level.clone(),
        precautions: precaution.clone(),
        precaution,
        medical_advice: advice.to_string(),
        suggested_doctor,
        is_emergency: analysis.urgency_level == EMERGENCY_URGENCY,
    }
}
