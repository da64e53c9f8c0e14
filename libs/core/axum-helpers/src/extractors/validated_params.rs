//! Query string and path extractors with validation.
//!
//! Constraint failures answer 400 carrying the declared validator message,
//! e.g. "Birth year must be a 4-digit number".

use crate::errors::{AppError, constraint_messages};
use axum::{
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Query string extractor with automatic validation.
///
/// # Example
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct Search {
///     #[validate(length(min = 1, max = 50, message = "Name must be between 1 and 50 characters"))]
///     name: Option<String>,
/// }
///
/// async fn search(ValidatedQuery(q): ValidatedQuery<Search>) -> String { .. }
/// ```
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()).into_response())?;

        validate(value).map(ValidatedQuery)
    }
}

/// Path parameter extractor with automatic validation.
pub struct ValidatedPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()).into_response())?;

        validate(value).map(ValidatedPath)
    }
}

fn validate<T: Validate>(value: T) -> Result<T, Response> {
    value
        .validate()
        .map_err(|e| AppError::BadRequest(constraint_messages(&e)).into_response())?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct Search {
        #[validate(length(min = 1, max = 5, message = "Name must be between 1 and 5 characters"))]
        name: Option<String>,
    }

    #[derive(Deserialize, Validate)]
    struct IdPath {
        #[validate(length(min = 3, message = "Id is too short"))]
        id: String,
    }

    fn app() -> Router {
        Router::new()
            .route(
                "/search",
                get(|ValidatedQuery(q): ValidatedQuery<Search>| async move {
                    q.name.unwrap_or_default()
                }),
            )
            .route(
                "/items/{id}",
                get(|ValidatedPath(p): ValidatedPath<IdPath>| async move { p.id }),
            )
    }

    async fn send(uri: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_query_passes_when_valid() {
        let (status, body) = send("/search?name=doe").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "doe");
    }

    #[tokio::test]
    async fn test_query_absent_optional_passes() {
        let (status, _) = send("/search").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_query_constraint_message_is_returned() {
        let (status, body) = send("/search?name=toolongname").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"], "INVALID_PARAMETER");
        assert_eq!(json["message"], "Name must be between 1 and 5 characters");
    }

    #[tokio::test]
    async fn test_path_constraint_message_is_returned() {
        let (status, body) = send("/items/ab").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["message"], "Id is too short");
    }

    #[tokio::test]
    async fn test_path_passes_when_valid() {
        let (status, body) = send("/items/abc").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "abc");
    }
}
