// src/handlers/brands.rs

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
    models::brand::BrandPayload,
};

// POST /api/brands
pub async fn upsert_brand(
    State(app_state): State<AppState>,
    payload: Result<Json<BrandPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::InvalidJson(e.body_text()))?;

    require_fields(&[
        ("brand_id", payload.brand_id.as_deref()),
        ("nameEn", payload.name_en.as_deref()),
    ])?;
    let brand_id = payload.brand_id.clone().unwrap_or_default();

    let (message, data) = app_state
        .brand_service
        .upsert(&app_state.db_pool, &brand_id, payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(json!({ "message": message, "data": data })),
    ))
}
