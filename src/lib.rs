pub mod api;
pub mod config;
pub mod pipeline;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::pipeline::triage::{ChatCompletionsClient, JsonFileDirectory, TriageOrchestrator};

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("Language model client: {0}")]
    Llm(#[from] pipeline::triage::TriageError),
    #[error("Failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error(transparent)]
    Server(#[from] api::server::ServerError),
}

pub fn run() -> Result<(), StartupError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let cfg = AppConfig::from_env()?;
    if cfg.llm_api_key.is_none() {
        tracing::error!("GROQ_API_KEY is not set; every triage will use the generic fallback");
    }

    // The blocking HTTP client owns its own runtime; build it (and drop it)
    // outside of tokio.
    let llm = Arc::new(ChatCompletionsClient::new(
        &cfg.llm_base_url,
        cfg.llm_api_key.clone(),
        &cfg.llm_model,
        cfg.llm_timeout_secs,
    )?);
    let directory = Arc::new(JsonFileDirectory::new(cfg.doctors_file.clone()));
    tracing::info!(
        model = llm.model(),
        doctors_file = %directory.path().display(),
        "Triage pipeline configured"
    );

    let orchestrator = TriageOrchestrator::new(llm.clone(), directory);
    let ctx = api::ApiContext::new(orchestrator);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(serve_until_ctrl_c(ctx, cfg.bind_addr));
    drop(runtime);
    drop(llm);
    result
}

async fn serve_until_ctrl_c(
    ctx: api::ApiContext,
    addr: std::net::SocketAddr,
) -> Result<(), StartupError> {
    let mut server = api::start_server(ctx, addr).await?;
    tracing::info!("Server running on http://{}", server.addr);

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for ctrl-c, shutting down");
    }

    server.shutdown();
    server.join().await?;
    Ok(())
}
