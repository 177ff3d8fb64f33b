//! Triage agent endpoint.
//!
//! `POST /api/agent/ask`: run the triage pipeline on one concern.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::pipeline::triage::{TriageError, TriageResult};

/// Request body. Clients send the concern under any one of three names.
#[derive(Debug, Default, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
}

impl AskRequest {
    /// First non-empty field in the order `text`, `message`, `prompt`.
    /// Whitespace counts as content.
    pub fn into_concern(self) -> Option<String> {
        [self.text, self.message, self.prompt]
            .into_iter()
            .flatten()
            .find(|t| !t.is_empty())
    }
}

/// `POST /api/agent/ask`
///
/// The pipeline makes two blocking model calls, so it runs on the blocking
/// pool. A panic there is the only way to get a 500 here.
pub async fn ask(
    State(ctx): State<ApiContext>,
    Json(req): Json<AskRequest>,
) -> Result<Json<TriageResult>, ApiError> {
    let concern = req.into_concern().ok_or(TriageError::InvalidInput)?;

    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("triage", %request_id, concern_len = concern.len());
    let orchestrator = ctx.orchestrator.clone();

    let result = tokio::task::spawn_blocking(move || {
        let _entered = span.enter();
        orchestrator.triage(&concern)
    })
    .await
    .map_err(|e| TriageError::OrchestratorFailure(e.to_string()))??;

    Ok(Json(result))
}
