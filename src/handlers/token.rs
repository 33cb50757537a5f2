// src/handlers/token.rs

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{common::error::AppError, config::AppState, services::token_service::TokenPayload};

// POST /api/token
// Proxy de credenciais: o corpo do provedor volta como chegou quando o
// grant é aceito; recusa vira 401 antes mesmo de sair da aplicação
// quando a app key não resolve.
pub async fn exchange_token(
    State(app_state): State<AppState>,
    payload: Result<Json<TokenPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::InvalidJson(e.body_text()))?;

    let body = app_state.token_service.exchange(&payload).await?;
    Ok((StatusCode::OK, Json(body)))
}
