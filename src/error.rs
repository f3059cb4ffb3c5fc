use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Terminal validation outcomes for a transaction submission.
///
/// Every failure is a well-formed caller-input error: the pipeline reports
/// the first failing check and never surfaces a process-level fault. The
/// display strings are part of the wire contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid request.")]
    MalformedRequest,

    #[error("{0} is required.")]
    MissingField(&'static str),

    #[error("Total Amount must be positive value.")]
    InvalidAmount,

    #[error("Access Denied!")]
    AccessDenied,

    #[error("Expired.")]
    Expired,

    #[error("Invalid Signature.")]
    InvalidSignature,

    #[error("Invalid Total Amount.")]
    AmountMismatch,
}

impl ValidationError {
    /// Content errors are 400, authentication-class errors are 401.
    /// No other status classes exist in this service.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ValidationError::MalformedRequest
            | ValidationError::MissingField(_)
            | ValidationError::InvalidAmount
            | ValidationError::AmountMismatch => StatusCode::BAD_REQUEST,
            ValidationError::AccessDenied
            | ValidationError::Expired
            | ValidationError::InvalidSignature => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::warn!(status = status.as_u16(), "transaction rejected: {}", self);

        let body = Json(json!({
            "result": 0,
            "resultmessage": self.to_string(),
        }));

        (status, body).into_response()
    }
}
