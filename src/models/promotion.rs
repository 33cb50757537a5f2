// src/models/promotion.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct PromotionalScheme {
    pub id: Uuid,
    pub channel_scheme_id: String,
    pub title: String,
    pub apply_on: String,
    pub valid_from: Option<NaiveDate>,
    pub valid_upto: Option<NaiveDate>,
    pub disabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct PriceDiscountSlab {
    pub min_qty: Decimal,
    pub max_qty: Decimal,
    pub rate_or_discount: Decimal,
    pub max_amount: Decimal,
}

#[derive(Debug, Clone, FromRow)]
pub struct ProductDiscountSlab {
    pub min_qty: Decimal,
    pub max_qty: Decimal,
    pub free_item: Option<String>,
    pub free_qty: Decimal,
}

impl PromotionalScheme {
    pub fn blank(channel_scheme_id: &str) -> Self {
        Self {
            id: Uuid::nil(),
            channel_scheme_id: channel_scheme_id.to_string(),
            title: String::new(),
            apply_on: "Item Code".to_string(),
            valid_from: None,
            valid_upto: None,
            disabled: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}

// --- PAYLOAD ---

#[derive(Debug, Deserialize)]
pub struct PromotionPayload {
    pub scheme_id: Option<String>,
    pub title: Option<String>,
    pub apply_on: Option<String>,
    pub valid_from: Option<NaiveDate>,
    pub valid_upto: Option<NaiveDate>,
    pub disabled: Option<bool>,
    #[serde(rename = "priceDiscountSlabs")]
    pub price_discount_slabs: Option<Vec<PriceSlabPayload>>,
    #[serde(rename = "productDiscountSlabs")]
    pub product_discount_slabs: Option<Vec<ProductSlabPayload>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PriceSlabPayload {
    pub min_qty: Option<Decimal>,
    pub max_qty: Option<Decimal>,
    pub rate_or_discount: Option<Decimal>,
    pub max_amount: Option<Decimal>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductSlabPayload {
    pub min_qty: Option<Decimal>,
    pub max_qty: Option<Decimal>,
    pub free_item: Option<String>,
    pub free_qty: Option<Decimal>,
}

impl PromotionPayload {
    pub fn apply_to(&self, scheme: &mut PromotionalScheme) {
        if let Some(v) = &self.title {
            scheme.title = v.clone();
        }
        if let Some(v) = &self.apply_on {
            scheme.apply_on = v.clone();
        }
        if let Some(v) = self.valid_from {
            scheme.valid_from = Some(v);
        }
        if let Some(v) = self.valid_upto {
            scheme.valid_upto = Some(v);
        }
        if let Some(v) = self.disabled {
            scheme.disabled = v;
        }
    }
}

impl PriceSlabPayload {
    pub fn into_row(self) -> PriceDiscountSlab {
        PriceDiscountSlab {
            min_qty: self.min_qty.unwrap_or_default(),
            max_qty: self.max_qty.unwrap_or_default(),
            rate_or_discount: self.rate_or_discount.unwrap_or_default(),
            max_amount: self.max_amount.unwrap_or_default(),
        }
    }
}

impl ProductSlabPayload {
    pub fn into_row(self) -> ProductDiscountSlab {
        ProductDiscountSlab {
            min_qty: self.min_qty.unwrap_or_default(),
            max_qty: self.max_qty.unwrap_or_default(),
            free_item: self.free_item,
            free_qty: self.free_qty.unwrap_or_default(),
        }
    }
}

// --- PROJEÇÕES ---

#[derive(Debug, Serialize)]
pub struct PromotionResponse {
    pub name: Uuid,
    pub scheme_id: String,
    pub title: String,
    pub apply_on: String,
    pub valid_from: Option<String>,
    pub valid_upto: Option<String>,
    pub disabled: bool,
    #[serde(rename = "priceDiscountSlabs")]
    pub price_discount_slabs: Vec<PriceSlabResponse>,
    #[serde(rename = "productDiscountSlabs")]
    pub product_discount_slabs: Vec<ProductSlabResponse>,
}

#[derive(Debug, Serialize)]
pub struct PriceSlabResponse {
    pub min_qty: Decimal,
    pub max_qty: Decimal,
    pub rate_or_discount: Decimal,
    pub max_amount: Decimal,
}

#[derive(Debug, Serialize)]
pub struct ProductSlabResponse {
    pub min_qty: Decimal,
    pub max_qty: Decimal,
    pub free_item: Option<String>,
    pub free_qty: Decimal,
}

impl PromotionResponse {
    pub fn from_rows(
        scheme: PromotionalScheme,
        price_slabs: Vec<PriceDiscountSlab>,
        product_slabs: Vec<ProductDiscountSlab>,
    ) -> Self {
        Self {
            name: scheme.id,
            scheme_id: scheme.channel_scheme_id,
            title: scheme.title,
            apply_on: scheme.apply_on,
            // Datas saem como string, como o canal espera.
            valid_from: scheme.valid_from.map(|d| d.to_string()),
            valid_upto: scheme.valid_upto.map(|d| d.to_string()),
            disabled: scheme.disabled,
            price_discount_slabs: price_slabs
                .into_iter()
                .map(|s| PriceSlabResponse {
                    min_qty: s.min_qty,
                    max_qty: s.max_qty,
                    rate_or_discount: s.rate_or_discount,
                    max_amount: s.max_amount,
                })
                .collect(),
            product_discount_slabs: product_slabs
                .into_iter()
                .map(|s| ProductSlabResponse {
                    min_qty: s.min_qty,
                    max_qty: s.max_qty,
                    free_item: s.free_item,
                    free_qty: s.free_qty,
                })
                .collect(),
        }
    }
}

/// Projeção da listagem de promoções vigentes.
#[derive(Debug, Serialize, FromRow)]
pub struct ValidPromotion {
    pub name: String,
    pub percentage: Option<Decimal>,
    pub value: Option<Decimal>,
    pub valid_from: Option<String>,
    pub valid_upto: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_to_preserva_vigencia_quando_omitida() {
        let mut scheme = PromotionalScheme {
            id: Uuid::new_v4(),
            channel_scheme_id: "PRM-1".into(),
            title: "Ramadan".into(),
            apply_on: "Item Code".into(),
            valid_from: NaiveDate::from_ymd_opt(2026, 2, 1),
            valid_upto: NaiveDate::from_ymd_opt(2026, 3, 1),
            disabled: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let payload: PromotionPayload =
            serde_json::from_str(r#"{"scheme_id": "PRM-1", "disabled": true}"#).unwrap();
        payload.apply_to(&mut scheme);

        assert!(scheme.disabled);
        assert_eq!(scheme.valid_from, NaiveDate::from_ymd_opt(2026, 2, 1));
        assert_eq!(scheme.title, "Ramadan");
    }
}
