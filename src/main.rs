mod config;
mod error;
mod handlers;
mod logging;
mod models;
mod server;
mod services;

use anyhow::Result;
use dotenv::dotenv;
use std::future::Future;
use std::io;
use std::sync::Arc;

use config::AppConfig;
use handlers::ConvertHandler;
use services::{Database, OpenAiService};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = AppConfig::from_env()?;

    logging::init(&config.log_file);
    log::info!("🚀 Starting Diet Convert API...");

    let db = Arc::new(Database::new(&config.database));
    log::info!("✅ PostgreSQL pool configured for {}", config.database.redacted_url());

    let openai = Arc::new(OpenAiService::new(&config.completion));
    log::info!("✅ Completion service initialized with model: {}", openai.model());

    let convert_handler = Arc::new(ConvertHandler::new(openai, db));
    let app = server::create_router(convert_handler);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    log::info!("🌐 Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown(tokio::signal::ctrl_c()))
        .await?;

    Ok(())
}

/// Resolves once `signal` fires. A failed signal registration never resolves,
/// so the server keeps running instead of shutting down right away.
async fn wait_for_shutdown<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    match signal.await {
        Ok(()) => log::info!("🛑 Shutting down..."),
        Err(e) => {
            log::error!("❌ Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
