//! Query string extractor with automatic validation.

use crate::errors::ErrorResponse;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Query string extractor with automatic validation.
///
/// Deserializes query parameters and validates them with the `validator`
/// crate's `Validate` trait. Undeserializable values (e.g. `?page=abc` for
/// a numeric field) and validation failures both produce the standard error
/// envelope with a 400 status, matching [`super::ValidatedJson`] on the
/// body path.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::ValidatedQuery;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct Paging {
///     #[serde(default)]
///     page: u64,
/// }
///
/// async fn list(ValidatedQuery(paging): ValidatedQuery<Paging>) -> String {
///     format!("page {}", paging.page)
/// }
///
/// let app = Router::new().route("/", get(list));
/// ```
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(data) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                let body = ErrorResponse::new(e.body_text());
                (e.status(), axum::Json(body)).into_response()
            })?;

        data.validate().map_err(|e| {
            let body = ErrorResponse::with_error("Request validation failed", e.to_string());
            (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
        })?;

        Ok(ValidatedQuery(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::header, http::Request, routing::get, Router};
    use tower::ServiceExt;

    #[derive(serde::Deserialize, validator::Validate)]
    struct Paging {
        #[serde(default)]
        page: u64,
    }

    async fn echo(ValidatedQuery(paging): ValidatedQuery<Paging>) -> String {
        paging.page.to_string()
    }

    fn app() -> Router {
        Router::new().route("/", get(echo))
    }

    #[tokio::test]
    async fn test_valid_query_passes_through() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/?page=3")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_undeserializable_query_rejected_with_json_envelope() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/?page=abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
        assert_eq!(content_type, "application/json");
    }
}
