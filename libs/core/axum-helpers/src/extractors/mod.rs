//! Custom extractors for Axum handlers.
//!
//! Every rejection is rendered through [`AppError`](crate::errors::AppError)
//! so clients always receive the standard error body.

pub mod validated_json;
pub mod validated_params;

pub use validated_json::{JsonBody, ValidatedJson};
pub use validated_params::{ValidatedPath, ValidatedQuery};
