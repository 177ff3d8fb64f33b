use super::parser::parse_analysis_response;
use super::prompt::build_analysis_prompt;
use super::types::{LlmClient, TriageAnalysis, TRIAGE_TEMPERATURE};

/// Stage 1: classify the concern into a `TriageAnalysis`.
///
/// Exactly one model call. A failed call or an unusable response yields
/// `TriageAnalysis::fallback()`; the failure is only logged.
pub fn analyze(llm: &dyn LlmClient, user_input: &str) -> TriageAnalysis {
    let prompt = build_analysis_prompt(user_input);

    let response = match llm.complete(&prompt, TRIAGE_TEMPERATURE) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, "Symptom analysis call failed, using generic analysis");
            return TriageAnalysis::fallback();
        }
    };

    match parse_analysis_response(&response) {
        Ok(analysis) => analysis,
        Err(e) => {
            tracing::warn!(
                error = %e,
                response_len = response.len(),
                "Unparseable symptom analysis, using generic analysis"
            );
            TriageAnalysis::fallback()
        }
    }
}
