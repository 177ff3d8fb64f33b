//! Symptom triage pipeline.
//!
//! ```text
//! input → analysis (LLM #1) → advice (LLM #2) ┐
//!                          └→ doctor matcher ──┴→ assembler → TriageResult
//! ```
//!
//! Every stage degrades to a deterministic fallback instead of failing, so a
//! non-empty concern always yields a structured result.

pub mod types;
pub mod prompt;
pub mod parser;
pub mod analysis;
pub mod advice;
pub mod matcher;
pub mod assemble;
pub mod directory;
pub mod llm;
pub mod orchestrator;

pub use types::*;
pub use analysis::analyze;
pub use advice::generate_advice;
pub use matcher::match_doctor;
pub use assemble::assemble;
pub use directory::{JsonFileDirectory, StaticDirectory};
pub use llm::{ChatCompletionsClient, MockLlmClient};
pub use orchestrator::TriageOrchestrator;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriageError {
    #[error("No concern text provided")]
    InvalidInput,

    #[error("Language model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Language model timed out after {secs}s")]
    ModelTimeout { secs: u64 },

    #[error("Malformed model output: {0}")]
    MalformedModelOutput(String),

    #[error("Triage failed: {0}")]
    OrchestratorFailure(String),
}
