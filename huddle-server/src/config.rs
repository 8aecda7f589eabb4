//! Server configuration

use crate::error::RelayError;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tower_http::cors::{AllowOrigin, CorsLayer};

#[derive(Parser, Debug, Clone)]
#[command(name = "huddle-server", about = "Signaling relay for peer-to-peer media sessions")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "HUDDLE_BIND", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// Origins allowed to open the signaling socket; any origin when empty
    #[arg(
        long = "allowed-origin",
        env = "HUDDLE_ALLOWED_ORIGINS",
        value_delimiter = ','
    )]
    pub allowed_origins: Vec<String>,

    /// Front-end bundle to serve, with `index.html` as the fallback route
    #[arg(long, env = "HUDDLE_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Default tracing filter, overridden by `RUST_LOG`
    #[arg(long = "log", env = "HUDDLE_LOG", default_value = "info")]
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 3000)),
            allowed_origins: Vec::new(),
            static_dir: None,
            log_filter: "info".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn cors_layer(&self) -> Result<CorsLayer, RelayError> {
        let origin = if self.allowed_origins.is_empty() {
            AllowOrigin::any()
        } else {
            let origins = self
                .allowed_origins
                .iter()
                .map(|origin| {
                    HeaderValue::from_str(origin)
                        .map_err(|_| RelayError::InvalidOrigin(origin.clone()))
                })
                .collect::<Result<Vec<_>, _>>()?;
            AllowOrigin::list(origins)
        };

        Ok(CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([CONTENT_TYPE]))
    }
}
