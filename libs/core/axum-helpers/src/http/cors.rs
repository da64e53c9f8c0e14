use axum::http::{HeaderValue, Method, header};
use core_config::{Environment, server::ServerConfig};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;

/// Creates a CORS layer restricted to the given origins.
///
/// - Methods: GET, POST, PUT, DELETE, PATCH, OPTIONS
/// - Headers: Content-Type, Accept
/// - 1 hour max age
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// Creates a permissive CORS layer for development.
///
/// Allows any origin - **DO NOT USE IN PRODUCTION**.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

/// Picks the CORS layer for the configured origins and environment.
///
/// - origins configured: restricted layer
/// - none configured, development: permissive layer
/// - none configured, production: no CORS layer at all
///
/// # Errors
/// Returns `InvalidInput` if an origin is not a valid header value.
pub fn cors_layer_for(
    server_config: &ServerConfig,
    environment: &Environment,
) -> io::Result<Option<CorsLayer>> {
    if server_config.cors_allowed_origins.is_empty() {
        if environment.is_production() {
            info!("CORS disabled: no allowed origins configured");
            return Ok(None);
        }
        info!("CORS permissive: no allowed origins configured in development");
        return Ok(Some(create_permissive_cors_layer()));
    }

    let origins = server_config
        .cors_allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })?;

    info!(
        "CORS configured with allowed origins: {}",
        server_config.cors_allowed_origins.join(",")
    );
    Ok(Some(create_cors_layer(origins)))
}
