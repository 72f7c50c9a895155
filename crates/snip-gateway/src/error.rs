use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use snip_core::StoreError;
use thiserror::Error;
use tracing::error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("url is required")]
    EmptyUrl,
    #[error("malformed request body: {0}")]
    MalformedBody(String),
    #[error("short code is required")]
    MissingShortCode,
    #[error("url not found")]
    NotFound,
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Unknown short codes are reported as `400`, like any other bad input.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::EmptyUrl
            | AppError::MalformedBody(_)
            | AppError::MissingShortCode
            | AppError::NotFound => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound(_) => AppError::NotFound,
            other @ (StoreError::Generation(_) | StoreError::Conflict(_)) => {
                AppError::Internal(other.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::Internal(detail) => {
                error!(error = %detail, "request failed");
                "internal server error".to_string()
            }
            other => other.to_string(),
        };

        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snip_core::GenerationError;

    #[test]
    fn store_errors_map_to_status_codes() {
        let not_found = AppError::from(StoreError::NotFound("abc".to_string()));
        assert!(matches!(not_found, AppError::NotFound));
        assert_eq!(not_found.status(), StatusCode::BAD_REQUEST);

        let generation = AppError::from(StoreError::from(GenerationError::new("no entropy")));
        assert_eq!(generation.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let conflict = AppError::from(StoreError::Conflict("abc".to_string()));
        assert_eq!(conflict.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn internal_detail_is_not_exposed() {
        let response = AppError::Internal("entropy source closed".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
