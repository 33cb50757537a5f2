// src/handlers/customers.rs

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::{error::AppError, fields::require_fields},
    config::AppState,
    models::customer::{CustomerPayload, CustomerResponse, RegisterCustomerPayload},
};

// =============================================================================
//  ÁREA 1: UPSERT DE CLIENTES (chave natural = customer_id devolvido antes)
// =============================================================================

// POST /api/customers
#[utoipa::path(
    post,
    path = "/api/customers",
    tag = "Clientes",
    request_body = CustomerPayload,
    responses(
        (status = 200, description = "Cliente criado ou atualizado", body = CustomerResponse),
        (status = 400, description = "Campos obrigatórios ausentes ou JSON inválido")
    )
)]
pub async fn upsert_customer(
    State(app_state): State<AppState>,
    payload: Result<Json<CustomerPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    // JSON malformado vira 400 com o detalhe do parser, não 422.
    let Json(payload) = payload.map_err(|e| AppError::InvalidJson(e.body_text()))?;

    // Nada é persistido antes dessa checagem passar.
    require_fields(&[
        ("name", payload.name.as_deref()),
        ("phone", payload.phone.as_deref()),
        ("email", payload.email.as_deref()),
        ("country_code", payload.country_code.as_deref()),
    ])?;

    let (message, data) = app_state
        .customer_service
        .upsert(&app_state.db_pool, payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(json!({ "message": message, "data": data })),
    ))
}

// =============================================================================
//  ÁREA 2: CADASTRO ESTRITO (colisão = 409, nunca merge)
// =============================================================================

// POST /api/customers/register
#[utoipa::path(
    post,
    path = "/api/customers/register",
    tag = "Clientes",
    request_body = RegisterCustomerPayload,
    responses(
        (status = 201, description = "Cliente registrado"),
        (status = 409, description = "Telefone, e-mail ou razão social já cadastrados")
    )
)]
pub async fn register_customer(
    State(app_state): State<AppState>,
    payload: Result<Json<RegisterCustomerPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::InvalidJson(e.body_text()))?;

    require_fields(&[
        ("name", payload.name.as_deref()),
        ("phone", payload.phone.as_deref()),
        ("email", payload.email.as_deref()),
    ])?;
    payload.validate()?;

    let id = app_state
        .customer_service
        .register(&app_state.db_pool, &payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Customer created successfully", "id": id })),
    ))
}

// DELETE /api/customers/{id}
#[utoipa::path(
    delete,
    path = "/api/customers/{id}",
    tag = "Clientes",
    params(("id" = Uuid, Path, description = "Chave do cliente")),
    responses(
        (status = 200, description = "Cliente removido"),
        (status = 404, description = "Cliente não encontrado")
    )
)]
pub async fn delete_customer(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .customer_service
        .delete(&app_state.db_pool, id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Customer deleted successfully" })),
    ))
}

// GET /api/customers
#[utoipa::path(
    get,
    path = "/api/customers",
    tag = "Clientes",
    responses((status = 200, description = "Lista de clientes"))
)]
pub async fn list_customers(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let customers = app_state.customer_service.list().await?;
    Ok((StatusCode::OK, Json(json!({ "data": customers }))))
}
