//! Prediction handler

use axum::{body::Bytes, extract::rejection::BytesRejection, extract::State, Json};

use crate::{AppState, AppResult};
use crate::models::PredictResponse;

/// Score one content item.
///
/// The body is taken raw so malformed JSON, and a body that cannot be
/// buffered within the size limit, are answered with the same structured
/// error as any other prediction failure.
pub async fn predict(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<Json<PredictResponse>> {
    // Degraded answers before the body is looked at
    state.service.bundle()?;

    let body = body?;
    let prediction = state.service.predict(&body)?;
    Ok(Json(prediction.into()))
}
