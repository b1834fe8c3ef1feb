//! Exam Timer - A state-managed HTTP exam server with a self-submitting countdown
//!
//! This is the main entry point for the exam-timer application.

use std::sync::Arc;
use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info};

use exam_timer::{
    api::create_router,
    config::Config,
    exam::QuestionBank,
    state::AppState,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("exam_timer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting exam-timer server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, duration={}s",
          config.host, config.port, config.duration);

    let bank = match &config.questions {
        Some(path) => QuestionBank::load(path)?,
        None => {
            info!("No question bank configured, using the built-in sample");
            QuestionBank::sample()
        }
    };
    info!("Loaded {} questions", bank.len());

    // Create application state
    let state = Arc::new(AppState::new(
        config.port,
        config.host.clone(),
        config.timer_config(),
        bank,
    ));

    // A countdown that cannot render or submit is a setup defect
    state.check_page().context("invalid page configuration")?;

    // Create HTTP router with all endpoints
    let app = create_router(Arc::clone(&state));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /exam/start     - Start the exam and the countdown");
    info!("  GET  /exam/questions - List questions");
    info!("  POST /exam/answers   - Save draft answers");
    info!("  POST /exam/submit    - Submit the exam");
    info!("  GET  /exam/timer     - Current countdown display");
    info!("  GET  /exam/result    - Exam result");
    info!("  GET  /status         - Check current status and timer");
    info!("  GET  /health         - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                error!("Server error: {}", e);
            }
        }
        result = shutdown_signal() => {
            match result {
                Ok(()) => info!("Shutdown signal received"),
                Err(e) => error!("Failed to install signal handler: {}", e),
            }
        }
    }

    // Stop a countdown still in flight
    if let Ok(mut timer) = state.timer.lock() {
        if let Some(handle) = timer.as_mut() {
            handle.dispose();
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
