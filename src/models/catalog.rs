// src/models/catalog.rs
//
// Projeções somente-leitura consumidas pelas listagens do canal.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, FromRow)]
pub struct CategoryRow {
    pub channel_cat_id: String,
    pub title: String,
}

#[derive(Debug, Serialize, FromRow)]
pub struct CustomerListRow {
    pub id: Uuid,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Serialize, FromRow)]
pub struct BranchRow {
    pub id: Uuid,
    pub name: String,
    pub city: Option<String>,
}

#[derive(Debug, FromRow)]
pub struct OrderSummaryRow {
    pub id: Uuid,
    pub date: Option<NaiveDate>,
    pub total: Decimal,
}

#[derive(Debug, FromRow)]
pub struct ProductRow {
    pub id: Uuid,
    pub item_code: String,
    pub item_name: Option<String>,
    pub standard_rate: Option<Decimal>,
    pub image: Option<String>,
    pub sku: Option<String>,
}

#[derive(Debug, FromRow)]
pub struct ProductBranchRow {
    pub branch_id: Uuid,
    pub branch_name: Option<String>,
    pub warehouse_name: Option<String>,
    pub stock: Option<Decimal>,
}

// Delta "mudou desde": dois tipos de entidade no mesmo envelope.
#[derive(Debug, FromRow)]
pub struct ItemDeltaRow {
    pub item_code: String,
    pub product_name: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
pub struct CustomerDeltaRow {
    pub id: Uuid,
    pub name: String,
    pub updated_at: DateTime<Utc>,
}
