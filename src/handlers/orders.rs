// src/handlers/orders.rs

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    common::error::AppError,
    config::AppState,
    models::{
        catalog::OrderSummaryRow,
        order::{OrderPayload, OrderResponse},
    },
};

// POST /api/orders
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "Pedidos",
    request_body = OrderPayload,
    responses(
        (status = 200, description = "Pedido criado ou atualizado", body = OrderResponse),
        (status = 400, description = "Sem cliente, sem itens ou nenhum código conhecido")
    )
)]
pub async fn upsert_order(
    State(app_state): State<AppState>,
    payload: Result<Json<OrderPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::InvalidJson(e.body_text()))?;

    if payload
        .user_id
        .as_deref()
        .map_or(true, |v| v.trim().is_empty())
    {
        return Err(AppError::MissingField("user_id"));
    }
    if payload.items.as_deref().map_or(true, |v| v.is_empty()) {
        return Err(AppError::MissingField("items list"));
    }

    let (message, data) = app_state
        .order_service
        .upsert(&app_state.db_pool, payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(json!({ "message": message, "data": data })),
    ))
}

#[derive(Debug, Deserialize)]
pub struct OrdersQuery {
    pub customer_id: Option<String>,
}

// GET /api/orders?customer_id=
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "Pedidos",
    params(("customer_id" = String, Query, description = "Cliente dono dos pedidos")),
    responses(
        (status = 200, description = "Pedidos do cliente, mais recentes primeiro"),
        (status = 400, description = "customer_id ausente")
    )
)]
pub async fn list_orders(
    State(app_state): State<AppState>,
    Query(query): Query<OrdersQuery>,
) -> Result<impl IntoResponse, AppError> {
    let customer_id = query
        .customer_id
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .ok_or(AppError::MissingParam("customer_id"))?;

    let orders = app_state.order_service.list_by_customer(customer_id).await?;

    let data: Vec<_> = orders.iter().map(order_summary_json).collect();

    Ok((StatusCode::OK, Json(json!({ "data": data }))))
}

/// Projeção do resumo de pedido; os nomes de campo são contrato do canal.
fn order_summary_json(o: &OrderSummaryRow) -> Value {
    json!({
        "id": o.id,
        "date": o.date.map(|d| d.to_string()),
        "total": o.total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    #[test]
    fn resumo_de_pedido_usa_as_chaves_do_canal() {
        let row = OrderSummaryRow {
            id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2026, 8, 26),
            total: Decimal::from(150),
        };

        let body = order_summary_json(&row);

        let keys: Vec<_> = body.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["date", "id", "total"]);
        assert_eq!(body["id"], json!(row.id));
        assert_eq!(body["date"], "2026-08-26");
    }

    #[test]
    fn resumo_sem_linhas_tem_data_nula() {
        let row = OrderSummaryRow {
            id: Uuid::new_v4(),
            date: None,
            total: Decimal::ZERO,
        };

        let body = order_summary_json(&row);
        assert!(body["date"].is_null());
    }
}
