//! Web front-end for the weather app.
//!
//! Routes a city name through [`weather_core::WeatherService`] and renders
//! the result (or the error page) with embedded Tera templates.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod templates;

use anyhow::Context;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use weather_core::{Config, WeatherService, provider_from_config};

pub use routes::create_router;
pub use state::AppState;
pub use templates::Pages;

/// Build the application state from config.
///
/// Fails when no API key is configured; the server must not start without one.
pub fn build_state(config: &Config) -> anyhow::Result<AppState> {
    let provider = provider_from_config(config)?;
    let weather = WeatherService::new(provider, &config.openweather);
    let pages = Pages::new().context("Failed to compile page templates")?;

    Ok(AppState::new(weather, pages))
}

/// Serve until Ctrl-C.
pub async fn serve(config: &Config, bind: &str) -> anyhow::Result<()> {
    let state = build_state(config)?;
    let app = create_router(state).layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind {bind}"))?;
    info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
    }
}
