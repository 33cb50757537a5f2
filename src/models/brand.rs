// src/models/brand.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct Brand {
    pub id: Uuid,
    pub channel_brand_id: String,
    pub brand: String,
    pub name_ar: Option<String>,
    pub logo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct BrandDefault {
    pub company: Option<String>,
    pub default_warehouse: Option<String>,
    pub default_price_list: Option<String>,
}

impl Brand {
    pub fn blank(channel_brand_id: &str) -> Self {
        Self {
            id: Uuid::nil(),
            channel_brand_id: channel_brand_id.to_string(),
            brand: String::new(),
            name_ar: None,
            logo: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BrandPayload {
    // Chave natural: id da marca no canal.
    pub brand_id: Option<String>,
    #[serde(rename = "nameEn")]
    pub name_en: Option<String>,
    #[serde(rename = "nameAr")]
    pub name_ar: Option<String>,
    pub logo: Option<String>,
    #[serde(rename = "brandDefaults")]
    pub brand_defaults: Option<Vec<BrandDefaultPayload>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BrandDefaultPayload {
    pub company: Option<String>,
    pub default_warehouse: Option<String>,
    pub default_price_list: Option<String>,
}

impl BrandPayload {
    pub fn apply_to(&self, brand: &mut Brand) {
        if let Some(v) = &self.name_en {
            brand.brand = v.clone();
        }
        if let Some(v) = &self.name_ar {
            brand.name_ar = Some(v.clone());
        }
        if let Some(v) = &self.logo {
            brand.logo = Some(v.clone());
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BrandResponse {
    pub name: Uuid,
    pub brand_id: String,
    pub brand: String,
    #[serde(rename = "nameAr")]
    pub name_ar: Option<String>,
    pub logo: Option<String>,
    #[serde(rename = "brandDefaults")]
    pub brand_defaults: Vec<BrandDefaultResponse>,
}

#[derive(Debug, Serialize)]
pub struct BrandDefaultResponse {
    pub company: Option<String>,
    pub default_warehouse: Option<String>,
    pub default_price_list: Option<String>,
}

impl BrandResponse {
    pub fn from_rows(brand: Brand, defaults: Vec<BrandDefault>) -> Self {
        Self {
            name: brand.id,
            brand_id: brand.channel_brand_id,
            brand: brand.brand,
            name_ar: brand.name_ar,
            logo: brand.logo,
            brand_defaults: defaults
                .into_iter()
                .map(|d| BrandDefaultResponse {
                    company: d.company,
                    default_warehouse: d.default_warehouse,
                    default_price_list: d.default_price_list,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_to_parcial() {
        let mut brand = Brand {
            id: Uuid::new_v4(),
            channel_brand_id: "BR-9".into(),
            brand: "Acme".into(),
            name_ar: Some("أكمي".into()),
            logo: Some("https://cdn/logo.png".into()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let payload: BrandPayload =
            serde_json::from_str(r#"{"brand_id": "BR-9", "logo": "https://cdn/novo.png"}"#)
                .unwrap();

        payload.apply_to(&mut brand);

        assert_eq!(brand.brand, "Acme");
        assert_eq!(brand.logo.as_deref(), Some("https://cdn/novo.png"));
        assert!(payload.brand_defaults.is_none());
    }
}
