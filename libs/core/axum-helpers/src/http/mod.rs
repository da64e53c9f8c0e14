//! HTTP middleware module.
//!
//! - CORS configuration derived from [`ServerConfig`](core_config::server::ServerConfig)
//! - Security headers
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::{cors_layer_for, security_headers};
//!
//! let mut app = Router::new().layer(axum::middleware::from_fn(security_headers));
//! if let Some(cors) = cors_layer_for(&server_config, &environment)? {
//!     app = app.layer(cors);
//! }
//! ```

pub mod cors;
pub mod security;

pub use cors::{cors_layer_for, create_cors_layer, create_permissive_cors_layer};
pub use security::security_headers;
