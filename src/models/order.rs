// src/models/order.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

pub const DEFAULT_UOM: &str = "Nos";
pub const DEFAULT_WAREHOUSE: &str = "All Warehouses - erp";
pub const DEFAULT_PAYMENT_OPTIONS: &str = "COD";

// --- LINHAS DO BANCO ---

#[derive(Debug, Clone, FromRow)]
pub struct SalesOrder {
    pub id: Uuid,
    pub customer: String,
    pub discount_amount: Decimal,
    pub grand_total: Decimal,
    pub coupon_code: Option<String>,
    pub branch_id: Option<String>,
    pub order_by: i32,
    pub address_display: String,
    pub shipping_address: String,
    pub region: String,
    pub payment_options: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct OrderLine {
    pub item_code: String,
    pub qty: Decimal,
    pub rate: Decimal,
    pub delivery_date: NaiveDate,
    pub uom: String,
    pub warehouse: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct SalesTeamRow {
    pub sales_person: String,
    pub allocated_percentage: Decimal,
}

impl SalesOrder {
    pub fn blank(customer: &str) -> Self {
        Self {
            id: Uuid::nil(),
            customer: customer.to_string(),
            discount_amount: Decimal::ZERO,
            grand_total: Decimal::ZERO,
            coupon_code: None,
            branch_id: None,
            order_by: 1,
            address_display: String::new(),
            shipping_address: String::new(),
            region: String::new(),
            payment_options: DEFAULT_PAYMENT_OPTIONS.to_string(),
            status: "Draft".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}

// --- PAYLOADS ---

#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderPayload {
    // Presente = tentativa de update; ausente = sempre cria.
    pub order_id: Option<String>,
    // Cliente do pedido, no vocabulário do canal.
    pub user_id: Option<String>,
    pub items: Option<Vec<OrderLinePayload>>,
    pub discount_amount: Option<Decimal>,
    pub total: Option<Decimal>,
    pub promotion_code: Option<String>,
    pub branch_id: Option<String>,
    pub orderby: Option<i32>,
    pub address_display: Option<String>,
    pub shipping_address: Option<String>,
    pub region: Option<String>,
    pub payment_options: Option<String>,
    pub sales_man_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct OrderLinePayload {
    pub item_code: Option<String>,
    pub quantity: Option<Decimal>,
    pub price: Option<Decimal>,
    #[schema(value_type = Option<String>, format = Date)]
    pub delivery_date: Option<NaiveDate>,
    pub uom: Option<String>,
    pub warehouse: Option<String>,
}

impl OrderLinePayload {
    /// Materializa a linha com os defaults do contrato.
    pub fn into_line(self, today: NaiveDate) -> OrderLine {
        OrderLine {
            item_code: self.item_code.unwrap_or_default(),
            qty: self.quantity.unwrap_or_default(),
            rate: self.price.unwrap_or_default(),
            delivery_date: self.delivery_date.unwrap_or(today),
            uom: self.uom.unwrap_or_else(|| DEFAULT_UOM.to_string()),
            warehouse: self
                .warehouse
                .unwrap_or_else(|| DEFAULT_WAREHOUSE.to_string()),
        }
    }
}

impl OrderPayload {
    /// Campos escalares: valor do payload ou o que já está salvo.
    pub fn apply_to(&self, order: &mut SalesOrder) {
        if let Some(v) = self.discount_amount {
            order.discount_amount = v;
        }
        if let Some(v) = self.total {
            order.grand_total = v;
        }
        if let Some(v) = &self.promotion_code {
            order.coupon_code = Some(v.clone());
        }
        if let Some(v) = &self.branch_id {
            order.branch_id = Some(v.clone());
        }
        if let Some(v) = self.orderby {
            order.order_by = v;
        }
        if let Some(v) = &self.address_display {
            order.address_display = v.clone();
        }
        if let Some(v) = &self.shipping_address {
            order.shipping_address = v.clone();
        }
        if let Some(v) = &self.region {
            order.region = v.clone();
        }
        if let Some(v) = &self.payment_options {
            order.payment_options = v.clone();
        }
    }

    /// sales_man_name presente vira um time de vendas de uma pessoa a 100%.
    pub fn sales_team(&self) -> Vec<SalesTeamRow> {
        match &self.sales_man_name {
            Some(name) if !name.is_empty() => vec![SalesTeamRow {
                sales_person: name.clone(),
                allocated_percentage: Decimal::from(100),
            }],
            _ => Vec::new(),
        }
    }
}

// --- PROJEÇÃO DE RESPOSTA ---

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub name: Uuid,
    pub customer: String,
    pub grand_total: Decimal,
    pub total_qty: Decimal,
    pub discount_amount: Decimal,
    pub status: String,
    pub items: Vec<OrderLineResponse>,
    pub sales_team: Vec<SalesTeamResponse>,
    pub coupon_code: Option<String>,
    pub orderby: i32,
    // Nome com espaço é contrato do canal e precisa ser preservado.
    #[serde(rename = "billing address")]
    pub billing_address: String,
    pub shipping_address: String,
    pub region: String,
    pub payment_options: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderLineResponse {
    pub item_code: String,
    pub qty: Decimal,
    pub rate: Decimal,
    pub uom: String,
    pub warehouse: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SalesTeamResponse {
    pub sales_person: String,
    pub allocated_percentage: Decimal,
}

impl OrderResponse {
    pub fn from_rows(order: SalesOrder, lines: Vec<OrderLine>, team: Vec<SalesTeamRow>) -> Self {
        let total_qty = lines.iter().map(|l| l.qty).sum();
        Self {
            name: order.id,
            customer: order.customer,
            grand_total: order.grand_total,
            total_qty,
            discount_amount: order.discount_amount,
            status: order.status,
            items: lines
                .into_iter()
                .map(|l| OrderLineResponse {
                    item_code: l.item_code,
                    qty: l.qty,
                    rate: l.rate,
                    uom: l.uom,
                    warehouse: l.warehouse,
                })
                .collect(),
            sales_team: team
                .into_iter()
                .map(|t| SalesTeamResponse {
                    sales_person: t.sales_person,
                    allocated_percentage: t.allocated_percentage,
                })
                .collect(),
            coupon_code: order.coupon_code,
            orderby: order.order_by,
            billing_address: order.address_display,
            shipping_address: order.shipping_address,
            region: order.region,
            payment_options: order.payment_options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linha_recebe_defaults_do_contrato() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 26).unwrap();
        let line = OrderLinePayload {
            item_code: Some("SKU-1".into()),
            quantity: None,
            price: None,
            delivery_date: None,
            uom: None,
            warehouse: None,
        }
        .into_line(today);

        assert_eq!(line.qty, Decimal::ZERO);
        assert_eq!(line.rate, Decimal::ZERO);
        assert_eq!(line.delivery_date, today);
        assert_eq!(line.uom, DEFAULT_UOM);
        assert_eq!(line.warehouse, DEFAULT_WAREHOUSE);
    }

    #[test]
    fn sales_man_name_vira_time_de_uma_pessoa() {
        let payload: OrderPayload =
            serde_json::from_str(r#"{"user_id": "c1", "sales_man_name": "Omar"}"#).unwrap();
        let team = payload.sales_team();
        assert_eq!(team.len(), 1);
        assert_eq!(team[0].sales_person, "Omar");
        assert_eq!(team[0].allocated_percentage, Decimal::from(100));

        let without: OrderPayload = serde_json::from_str(r#"{"user_id": "c1"}"#).unwrap();
        assert!(without.sales_team().is_empty());
    }

    #[test]
    fn resposta_usa_billing_address_com_espaco() {
        let order = SalesOrder {
            id: Uuid::new_v4(),
            customer: "c1".into(),
            discount_amount: Decimal::ZERO,
            grand_total: Decimal::from(50),
            coupon_code: None,
            branch_id: None,
            order_by: 1,
            address_display: "Rua A".into(),
            shipping_address: "Rua B".into(),
            region: "".into(),
            payment_options: DEFAULT_PAYMENT_OPTIONS.into(),
            status: "Draft".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let body = serde_json::to_value(OrderResponse::from_rows(order, vec![], vec![])).unwrap();
        assert!(body.get("billing address").is_some());
        assert_eq!(body["payment_options"], "COD");
    }
}
