// src/models/item.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// --- LINHAS DO BANCO ---

#[derive(Debug, Clone, FromRow)]
pub struct Item {
    pub id: Uuid,
    pub item_code: String,
    pub item_name: Option<String>,
    pub description: Option<String>,
    pub brand_id: Option<String>,
    pub item_group: String,
    pub name_ar: Option<String>,
    pub name_hi: Option<String>,
    pub name_ur: Option<String>,
    pub description_ar: Option<String>,
    pub description_hi: Option<String>,
    pub description_ur: Option<String>,
    pub standard_rate: Option<Decimal>,
    pub image: Option<String>,
    pub sku: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct ItemChannelCat {
    pub channel_id: Option<String>,
    pub category_id: Option<String>,
    pub subcategory_id: Option<String>,
}

impl Item {
    pub fn blank(item_code: &str) -> Self {
        Self {
            id: Uuid::nil(),
            item_code: item_code.to_string(),
            item_name: None,
            description: None,
            brand_id: None,
            item_group: "Products".to_string(),
            name_ar: None,
            name_hi: None,
            name_ur: None,
            description_ar: None,
            description_hi: None,
            description_ur: None,
            standard_rate: None,
            image: None,
            sku: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}

// --- PAYLOADS ---

// Mapa de campos externo → interno:
//   nameEn → item_name, brand → brand_id, descriptionEn → description,
//   nameAr/nameHi/nameUr e descriptionAr/Hi/Ur → colunas localizadas.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ItemPayload {
    // Chave natural do item.
    #[serde(rename = "skuCode")]
    pub sku_code: Option<String>,

    #[serde(rename = "nameEn")]
    pub name_en: Option<String>,
    pub brand: Option<String>,
    #[serde(rename = "descriptionEn")]
    pub description_en: Option<String>,
    #[serde(rename = "nameAr")]
    pub name_ar: Option<String>,
    #[serde(rename = "nameHi")]
    pub name_hi: Option<String>,
    #[serde(rename = "nameUr")]
    pub name_ur: Option<String>,
    #[serde(rename = "descriptionAr")]
    pub description_ar: Option<String>,
    #[serde(rename = "descriptionHi")]
    pub description_hi: Option<String>,
    #[serde(rename = "descriptionUr")]
    pub description_ur: Option<String>,

    // Coleções filhas: presença da chave = substituição total.
    #[serde(rename = "channelCatSubCat")]
    pub channel_cat_sub_cat: Option<Vec<ChannelCatPayload>>,
    #[serde(rename = "subCatImg")]
    pub sub_cat_img: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ChannelCatPayload {
    #[serde(rename = "channelid")]
    pub channel_id: Option<String>,
    #[serde(rename = "categoryid")]
    pub category_id: Option<String>,
    #[serde(rename = "subCategoryid")]
    pub subcategory_id: Option<String>,
}

impl ItemPayload {
    /// Update parcial: só os campos presentes no JSON tocam a linha.
    pub fn apply_to(&self, item: &mut Item) {
        if let Some(v) = &self.name_en {
            item.item_name = Some(v.clone());
        }
        if let Some(v) = &self.brand {
            item.brand_id = Some(v.clone());
        }
        if let Some(v) = &self.description_en {
            item.description = Some(v.clone());
        }
        if let Some(v) = &self.name_ar {
            item.name_ar = Some(v.clone());
        }
        if let Some(v) = &self.name_hi {
            item.name_hi = Some(v.clone());
        }
        if let Some(v) = &self.name_ur {
            item.name_ur = Some(v.clone());
        }
        if let Some(v) = &self.description_ar {
            item.description_ar = Some(v.clone());
        }
        if let Some(v) = &self.description_hi {
            item.description_hi = Some(v.clone());
        }
        if let Some(v) = &self.description_ur {
            item.description_ur = Some(v.clone());
        }
    }
}

// --- PROJEÇÃO DE RESPOSTA ---

#[derive(Debug, Serialize, ToSchema)]
pub struct ItemResponse {
    pub name: Uuid,
    pub item_code: String,
    pub item_name: Option<String>,
    pub description: Option<String>,
    pub brand: Option<String>,
    #[serde(rename = "channelCatSubCat")]
    pub channel_cat_sub_cat: Vec<ChannelCatResponse>,
    pub subcatimg: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChannelCatResponse {
    pub channelid: Option<String>,
    pub categoryid: Option<String>,
    pub subcategoryid: Option<String>,
}

impl ItemResponse {
    pub fn from_rows(item: Item, cats: Vec<ItemChannelCat>, media: Vec<String>) -> Self {
        Self {
            name: item.id,
            item_code: item.item_code,
            item_name: item.item_name,
            description: item.description,
            brand: item.brand_id,
            channel_cat_sub_cat: cats
                .into_iter()
                .map(|c| ChannelCatResponse {
                    channelid: c.channel_id,
                    categoryid: c.category_id,
                    subcategoryid: c.subcategory_id,
                })
                .collect(),
            subcatimg: media,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing_item() -> Item {
        Item {
            id: Uuid::new_v4(),
            item_code: "SKU-100".into(),
            item_name: Some("Chá Preto".into()),
            description: Some("Caixa com 25 sachês".into()),
            brand_id: Some("BR-1".into()),
            item_group: "Products".into(),
            name_ar: Some("شاي أسود".into()),
            name_hi: None,
            name_ur: None,
            description_ar: None,
            description_hi: None,
            description_ur: None,
            standard_rate: None,
            image: None,
            sku: Some("100".into()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn empty_payload() -> ItemPayload {
        ItemPayload {
            sku_code: Some("SKU-100".into()),
            name_en: None,
            brand: None,
            description_en: None,
            name_ar: None,
            name_hi: None,
            name_ur: None,
            description_ar: None,
            description_hi: None,
            description_ur: None,
            channel_cat_sub_cat: None,
            sub_cat_img: None,
        }
    }

    #[test]
    fn apply_to_preserva_campos_omitidos() {
        let mut item = existing_item();
        let payload = ItemPayload {
            name_en: Some("Chá Verde".into()),
            ..empty_payload()
        };

        payload.apply_to(&mut item);

        assert_eq!(item.item_name.as_deref(), Some("Chá Verde"));
        assert_eq!(item.brand_id.as_deref(), Some("BR-1"));
        assert_eq!(item.name_ar.as_deref(), Some("شاي أسود"));
    }

    #[test]
    fn mapeia_nomes_externos_do_canal() {
        // O contrato de entrada usa camelCase do canal; o serde faz o remap.
        let payload: ItemPayload = serde_json::from_str(
            r#"{
                "skuCode": "SKU-7",
                "nameEn": "Sugar",
                "descriptionAr": "سكر",
                "channelCatSubCat": [
                    {"channelid": "1", "categoryid": "10", "subCategoryid": "100"}
                ],
                "subCatImg": ["https://cdn/x.png"]
            }"#,
        )
        .unwrap();

        assert_eq!(payload.sku_code.as_deref(), Some("SKU-7"));
        assert_eq!(payload.name_en.as_deref(), Some("Sugar"));
        assert_eq!(payload.description_ar.as_deref(), Some("سكر"));
        let cats = payload.channel_cat_sub_cat.unwrap();
        assert_eq!(cats[0].subcategory_id.as_deref(), Some("100"));
        assert_eq!(payload.sub_cat_img.unwrap(), vec!["https://cdn/x.png"]);
    }

    #[test]
    fn chave_de_filhos_ausente_nao_e_substituicao() {
        let payload = empty_payload();
        // None = não mexe nas filhas; Some(vec![]) = apaga todas.
        assert!(payload.channel_cat_sub_cat.is_none());

        let wipe: ItemPayload =
            serde_json::from_str(r#"{"skuCode": "S", "channelCatSubCat": []}"#).unwrap();
        assert_eq!(wipe.channel_cat_sub_cat.unwrap().len(), 0);
    }
}
