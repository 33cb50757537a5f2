// src/handlers/items.rs

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::{
    common::error::AppError,
    config::AppState,
    models::item::{ItemPayload, ItemResponse},
};

// POST /api/items
#[utoipa::path(
    post,
    path = "/api/items",
    tag = "Itens",
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Item criado ou atualizado", body = ItemResponse),
        (status = 400, description = "skuCode ausente ou JSON inválido")
    )
)]
pub async fn upsert_item(
    State(app_state): State<AppState>,
    payload: Result<Json<ItemPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::InvalidJson(e.body_text()))?;

    // A mensagem nomeia o campo nos dois vocabulários, como o canal espera.
    let item_code = payload
        .sku_code
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .ok_or(AppError::MissingField("skuCode (item_code)"))?
        .to_string();

    let (message, data) = app_state
        .item_service
        .upsert(&app_state.db_pool, &item_code, payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(json!({ "message": message, "data": data })),
    ))
}
