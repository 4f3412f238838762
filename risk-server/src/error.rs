//! Error handling
//!
//! Every failure becomes a well-formed 500 carrying safe defaults,
//! so callers can always read `risk_score` and `verdict`.

use axum::{
    extract::rejection::BytesRejection,
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use risk_core::RiskError;
use thiserror::Error;

use crate::models::ErrorResponse;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// No bundle was loaded at startup
    #[error("Model setup failed")]
    ModelsNotLoaded,

    /// Anything else that went wrong while scoring an item
    #[error("{0}")]
    PredictionFailure(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::PredictionFailure(msg) = &self {
            tracing::error!("Prediction error: {}", msg);
        }

        let body = Json(ErrorResponse::new(self.to_string()));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

impl From<RiskError> for AppError {
    fn from(err: RiskError) -> Self {
        AppError::PredictionFailure(err.to_string())
    }
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        AppError::PredictionFailure(rejection.body_text())
    }
}
