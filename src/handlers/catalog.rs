// src/handlers/catalog.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    common::error::AppError,
    config::AppState,
    services::CatalogService,
};

// GET /api/categories
pub async fn list_categories(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let categories = app_state.catalog_service.categories().await?;
    Ok((StatusCode::OK, Json(json!({ "data": categories }))))
}

// GET /api/branches
pub async fn list_branches(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let branches = app_state.catalog_service.branches().await?;
    Ok((StatusCode::OK, Json(json!({ "data": branches }))))
}

#[derive(Debug, Deserialize)]
pub struct ProductsQuery {
    pub product_id: Option<String>,
}

// GET /api/products?product_id=
// Sem envelope: esse endpoint devolve o array puro, contrato do canal.
pub async fn list_products(
    State(app_state): State<AppState>,
    Query(query): Query<ProductsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let products = app_state
        .catalog_service
        .products(&app_state.db_pool, query.product_id.as_deref())
        .await?;
    Ok((StatusCode::OK, Json(products)))
}

#[derive(Debug, Deserialize)]
pub struct SyncQuery {
    pub updated_at: Option<String>,
}

// GET /api/sync/changes?updated_at=
pub async fn sync_changes(
    State(app_state): State<AppState>,
    Query(query): Query<SyncQuery>,
) -> Result<impl IntoResponse, AppError> {
    let raw = query
        .updated_at
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .ok_or(AppError::MissingParam("updated_at"))?;

    let since =
        CatalogService::parse_since(raw).ok_or(AppError::InvalidParam("updated_at"))?;

    let body = app_state.catalog_service.changed_since(since).await?;
    Ok((StatusCode::OK, Json(body)))
}
