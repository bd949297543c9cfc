mod api_error;
mod chat_response;
mod documents;
mod health;
mod query;
mod query_payload;
mod routes;
mod sessions;
mod state;
mod upload;

use anyhow::Context;
use notes_chat::{Config, GeminiService, GenerativeModel};
use state::AppState;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {}", e);
            eprintln!("Failed to start notes-api: {}", e);
            std::process::exit(1);
        }
    };
    log::info!("Loaded configuration: {:?}", config);

    let gemini = GeminiService::new(&config);
    log::info!("Using Gemini model {}", gemini.model());
    let model: Arc<dyn GenerativeModel> = Arc::new(gemini);

    let bind_addr = config.bind_addr();
    let app = routes::create_routes(AppState::new(config, model));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    log::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
