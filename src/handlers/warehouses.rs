// src/handlers/warehouses.rs

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
    models::warehouse::{WarehousePayload, WarehouseResponse},
};

// POST /api/warehouses
#[utoipa::path(
    post,
    path = "/api/warehouses",
    tag = "Depósitos",
    request_body = WarehousePayload,
    responses(
        (status = 200, description = "Depósito criado ou atualizado", body = WarehouseResponse),
        (status = 400, description = "warehouse_name ausente ou JSON inválido")
    )
)]
pub async fn upsert_warehouse(
    State(app_state): State<AppState>,
    payload: Result<Json<WarehousePayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::InvalidJson(e.body_text()))?;

    let warehouse_name = payload
        .warehouse_name
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .ok_or(AppError::MissingField("warehouse_name"))?
        .to_string();

    let (message, data) = app_state
        .warehouse_service
        .upsert(&app_state.db_pool, &warehouse_name, payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(json!({ "message": message, "data": data })),
    ))
}
