use crate::config::ServerConfig;
use crate::error::RelayError;
use crate::signaling::{SignalingService, ws_handler};
use axum::Router;
use axum::routing::get;
use tower_http::services::{ServeDir, ServeFile};

/// Build the HTTP surface: the signaling socket, a health check and the optional front-end.
pub fn build_app(service: SignalingService, config: &ServerConfig) -> Result<Router, RelayError> {
    let mut app = Router::new()
        .route("/ws", get(ws_handler))
        .route("/health", get(health))
        .with_state(service);

    if let Some(dir) = &config.static_dir {
        let index = ServeFile::new(dir.join("index.html"));
        app = app.fallback_service(ServeDir::new(dir).fallback(index));
    }

    Ok(app.layer(config.cors_layer()?))
}

async fn health() -> &'static str {
    "OK"
}
