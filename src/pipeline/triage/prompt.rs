use super::types::TriageAnalysis;

/// Build the analysis prompt: the model must answer with the six-field JSON object only.
pub fn build_analysis_prompt(user_input: &str) -> String {
    format!(
        r#"
Analyze this medical concern and respond in ONLY valid JSON:
{{
  "category": "Emergency/Urgent Care/General/Specialist",
  "urgencyLevel": "High/Medium/Low",
  "precautions": "Safety steps",
  "symptoms": ["list", "of", "symptoms"],
  "doctorType": "Specialization needed",
  "reasoning": "Why this category"
}}
Concern: "{user_input}"
"#
    )
}

/// Build the advice prompt from the first-stage analysis and the original concern.
pub fn build_advice_prompt(user_input: &str, analysis: &TriageAnalysis) -> String {
    let joined = analysis.symptoms.join(", ");
    let symptoms = non_empty_or(&joined, "N/A");
    let urgency = analysis.prompt_urgency().unwrap_or("Unknown");
    let category = non_empty_or(&analysis.category, "General");

    format!(
        "Given these symptoms: {symptoms}\n\
         Urgency Level: {urgency}\n\
         Category: {category}\n\n\
         Provide professional medical advice for: {user_input}\n\
         Include:\n\
         1. Immediate steps to take\n\
         2. Warning signs to watch for\n\
         3. When to seek emergency care\n\
         Be professional and emphasize safety."
    )
}

fn non_empty_or<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}
