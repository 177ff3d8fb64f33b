//! `GET /api/doctors`: the doctor directory as currently loaded.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::pipeline::triage::DoctorRecord;

/// Records are returned in their normalized `DoctorRecord` form, not as the
/// raw file: a `specialty` key comes back as `specialization`, `available`
/// is filled with its default, unknown keys are dropped, and malformed
/// entries are omitted.
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<DoctorRecord>>, ApiError> {
    let orchestrator = ctx.orchestrator.clone();
    let doctors = tokio::task::spawn_blocking(move || orchestrator.directory().load_all())
        .await
        .map_err(|e| ApiError::Internal(format!("doctor directory task failed: {e}")))?;

    Ok(Json(doctors))
}
