// src/handlers/promotions.rs

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::{
    common::{error::AppError, fields::require_fields},
    config::AppState,
    models::promotion::PromotionPayload,
};

// POST /api/promotions
pub async fn upsert_promotion(
    State(app_state): State<AppState>,
    payload: Result<Json<PromotionPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::InvalidJson(e.body_text()))?;

    require_fields(&[
        ("scheme_id", payload.scheme_id.as_deref()),
        ("title", payload.title.as_deref()),
    ])?;
    let scheme_id = payload.scheme_id.clone().unwrap_or_default();

    let (message, data) = app_state
        .promotion_service
        .upsert(&app_state.db_pool, &scheme_id, payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(json!({ "message": message, "data": data })),
    ))
}

// GET /api/promotions — apenas esquemas habilitados; a vigência sai no
// corpo mas não filtra a listagem.
pub async fn list_promotions(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let promotions = app_state.promotion_service.valid_list().await?;
    Ok((StatusCode::OK, Json(json!({ "data": promotions }))))
}
