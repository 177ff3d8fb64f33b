use super::prompt::build_advice_prompt;
use super::types::{LlmClient, TriageAnalysis, TRIAGE_TEMPERATURE};

/// Stage 2: free-text professional guidance built on the analysis.
///
/// On a failed call the analysis precautions are reused (or an empty string),
/// so this never fails.
pub fn generate_advice(llm: &dyn LlmClient, user_input: &str, analysis: &TriageAnalysis) -> String {
    let prompt = build_advice_prompt(user_input, analysis);

    match llm.complete(&prompt, TRIAGE_TEMPERATURE) {
        Ok(text) => text.trim().replace("```", ""),
        Err(e) => {
            tracing::warn!(error = %e, "Advice generation failed, reusing precautions");
            analysis.precautions.clone().unwrap_or_default()
        }
    }
}
