//! Shared types for the HTTP API layer.

use std::sync::Arc;

use crate::pipeline::triage::TriageOrchestrator;

/// Shared context for all API routes.
///
/// Cheap to clone; every handler sees the same orchestrator instance built at
/// startup.
#[derive(Clone)]
pub struct ApiContext {
    pub orchestrator: Arc<TriageOrchestrator>,
}

impl ApiContext {
    pub fn new(orchestrator: TriageOrchestrator) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
        }
    }
}
