use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;

use pricing_engine::{CatalogError, GeometryError, PricingError};
use quote_store::StoreError;
use quoter_types::UnknownMaterial;

use crate::intake::IntakeError;
use crate::messages::ErrorResponse;

/// An error ready to leave the service as an HTTP response.
///
/// Status mapping: validation failures are 400, oversized uploads 413,
/// missing materials/quotes 404, rejected geometry 422. Nothing here is
/// retried automatically; recovery is the caller's move.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::PAYLOAD_TOO_LARGE,
            message: message.into(),
        }
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

impl From<IntakeError> for ApiError {
    fn from(err: IntakeError) -> Self {
        match err {
            IntakeError::FileTooLarge { .. } => ApiError::payload_too_large(err.to_string()),
            IntakeError::MissingFilename | IntakeError::UnsupportedFileType { .. } => {
                ApiError::bad_request(err.to_string())
            }
        }
    }
}

impl From<UnknownMaterial> for ApiError {
    fn from(err: UnknownMaterial) -> Self {
        ApiError::not_found(err.to_string())
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        ApiError::not_found(err.to_string())
    }
}

impl From<GeometryError> for ApiError {
    fn from(err: GeometryError) -> Self {
        ApiError::unprocessable(err.to_string())
    }
}

impl From<PricingError> for ApiError {
    fn from(err: PricingError) -> Self {
        ApiError::bad_request(err.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::not_found(err.to_string())
    }
}
