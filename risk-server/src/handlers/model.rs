//! Model info handler

use axum::{extract::State, Json};

use crate::{AppState, AppResult};
use crate::models::ModelInfoResponse;

/// Metadata and vocabularies of the loaded bundle
pub async fn info(State(state): State<AppState>) -> AppResult<Json<ModelInfoResponse>> {
    let bundle = state.service.bundle()?;
    Ok(Json(ModelInfoResponse::from(bundle)))
}
