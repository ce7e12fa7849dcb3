use anyhow::{Context, Result};
use bonafit_coach::api::routes::{create_routes, AppState};
use bonafit_coach::config::{AppConfig, GeminiConfig, RosterSeeder};
use bonafit_coach::services::{Clock, FeedbackService, GeminiClient, RosterStore, SystemClock};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_ansi(config.is_development())
        .with_target(config.is_development())
        .init();

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let roster = RosterSeeder::new(clock.now(), rand::thread_rng()).seed_all();

    let client = GeminiClient::new(GeminiConfig::from_env())?;
    let state = AppState::new(RosterStore::new(roster), FeedbackService::new(client), clock);

    let app = create_routes(state);

    let address = config.server_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!(environment = %config.environment, "BonaFit coach server starting on http://{}", address);
    info!("Health check available at http://{}/health", address);

    axum::serve(listener, app).await?;

    Ok(())
}
