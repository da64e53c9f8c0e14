//! JSON body extractors that render failures as `AppError`.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Deserialization failures and `Validate` failures both answer 400 with the
/// message "Request body validation failed"; validator field errors are
/// attached as `details`.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreatePlayer {
///     #[validate(length(min = 3, max = 32))]
///     player_id: String,
/// }
///
/// async fn create(ValidatedJson(payload): ValidatedJson<CreatePlayer>) -> String {
///     format!("Creating player: {}", payload.player_id)
/// }
///
/// let app = Router::new().route("/players", post(create));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let JsonBody(data) = JsonBody::<T>::from_request(req, state).await?;

        data.validate()
            .map_err(|e| AppError::ValidationError(e).into_response())?;

        Ok(ValidatedJson(data))
    }
}

/// JSON extractor without validation.
///
/// Behaves like `axum::Json` except that malformed bodies answer 400 with the
/// standard error body instead of axum's plain-text 415/422 rejections.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::JsonExtractorRejection(e).into_response())?;

        Ok(JsonBody(data))
    }
}
