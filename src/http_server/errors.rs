//! # Gateway Errors
//!
//! Every failure is a 500. What differs is the body, which depends on the
//! kind of route that failed:
//!
//! - [`PageError`]: pages, fragments and form posts get plain text
//! - [`ApiError`]: JSON lookups get `{"error": ...}`
//! - [`StatusError`]: JSON deletes get `{"success": false}`
//!
//! The cause is logged when the response is built and never sent to the
//! client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use handlebars::RenderError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;

pub const PAGE_ERROR_MESSAGE: &str = "Error fetching data from database.";
pub const API_ERROR_MESSAGE: &str = "Error fetching author data.";

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Template error: {0}")]
    Render(#[from] RenderError),
}

/// Body of the delete endpoints
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StatusResponse {
    pub success: bool,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self { success: true }
    }

    pub fn failure() -> Self {
        Self { success: false }
    }
}

/// JSON error body of the lookup endpoints
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

macro_rules! gateway_error_wrapper {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name(pub GatewayError);

        impl<E> From<E> for $name
        where
            E: Into<GatewayError>,
        {
            fn from(err: E) -> Self {
                Self(err.into())
            }
        }
    };
}

gateway_error_wrapper!(
    /// Failure on an HTML or form route
    PageError
);
gateway_error_wrapper!(
    /// Failure on a JSON lookup route
    ApiError
);
gateway_error_wrapper!(
    /// Failure on a JSON delete route
    StatusError
);

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        error!(error = %self.0, "Database query error");
        (StatusCode::INTERNAL_SERVER_ERROR, PAGE_ERROR_MESSAGE).into_response()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %self.0, "Database query error");
        let body = ErrorResponse {
            error: API_ERROR_MESSAGE.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

impl IntoResponse for StatusError {
    fn into_response(self) -> Response {
        error!(error = %self.0, "Database query error");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(StatusResponse::failure()),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_failure() -> StoreError {
        StoreError::Unavailable("connection reset".to_string())
    }

    #[test]
    fn test_page_error_is_plain_text_500() {
        let response = PageError::from(store_failure()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let content_type = response.headers()["content-type"].to_str().unwrap();
        assert!(content_type.starts_with("text/plain"));
    }

    #[test]
    fn test_api_error_is_json_500() {
        let response = ApiError::from(store_failure()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.headers()["content-type"], "application/json");
    }

    #[test]
    fn test_status_error_is_json_500() {
        let response = StatusError::from(store_failure()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.headers()["content-type"], "application/json");
    }

    #[test]
    fn test_status_response_serialization() {
        let json = serde_json::to_value(StatusResponse::failure()).unwrap();
        assert_eq!(json, serde_json::json!({"success": false}));
    }

    #[test]
    fn test_store_error_message_is_preserved() {
        let err = GatewayError::from(store_failure());
        assert_eq!(err.to_string(), "Store unavailable: connection reset");
    }
}
