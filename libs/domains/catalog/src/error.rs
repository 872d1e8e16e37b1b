use axum::response::{IntoResponse, Response};
use axum_helpers::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// A well-formed id that matched no record. Carries the
    /// operation-specific message shown to the caller.
    #[error("{0}")]
    NotFound(String),

    /// A list query whose page window matched no records.
    #[error("No products were found for the required call.")]
    EmptyPage,

    /// Page numbers are 1-based; 0 is rejected before querying.
    #[error("Invalid page number: {0}. Page numbers start at 1.")]
    InvalidPage(u64),

    #[error("Database error: {0}")]
    Database(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl From<mongodb::error::Error> for CatalogError {
    fn from(err: mongodb::error::Error) -> Self {
        CatalogError::Database(err.to_string())
    }
}

/// Convert CatalogError to ApiError for standardized error envelopes
impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(msg) => ApiError::NotFound(msg),
            CatalogError::EmptyPage => {
                ApiError::NotFound("No products were found for the required call.".to_string())
            }
            CatalogError::InvalidPage(page) => ApiError::BadRequest(format!(
                "Invalid page number: {}. Page numbers start at 1.",
                page
            )),
            CatalogError::Database(msg) => ApiError::Internal {
                message: "An unexpected error occurred.".to_string(),
                error: msg,
            },
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let api_error: ApiError = self.into();
        api_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_maps_to_404() {
        let resp =
            CatalogError::NotFound("Product not found with the given ID.".into()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_empty_page_maps_to_404() {
        let resp = CatalogError::EmptyPage.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_page_maps_to_400() {
        let resp = CatalogError::InvalidPage(0).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_database_maps_to_500() {
        let resp = CatalogError::Database("connection reset".into()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
