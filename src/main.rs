//! ds2-profile server binary.

use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ds2_profile::adapters::http::{router, AssessmentHandlers};
use ds2_profile::adapters::{InMemoryAssessmentRepository, JsonFileQuestionBank};
use ds2_profile::config::AppConfig;
use ds2_profile::ports::QuestionBankSource;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!(error = %e, "ds2-profile exited with error");
        eprintln!("ds2-profile: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let bank = JsonFileQuestionBank::new(&config.questionnaire.bank_path)
        .load()
        .await?;

    let repository = Arc::new(InMemoryAssessmentRepository::with_idle_ttl(
        config.questionnaire.session_idle_ttl(),
    ));
    let handlers = AssessmentHandlers::new(Arc::new(bank), repository, config.questionnaire.seed);
    let app = router(handlers, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, log_format = ?config.server.log_format, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.json_logs() {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
}
