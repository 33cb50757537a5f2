// src/services/catalog_service.rs

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{json, Value};
use sqlx::PgPool;

use crate::{
    common::{
        error::AppError,
        fields::{digits_to_value, force_int},
    },
    db::{CatalogRepository, CustomerRepository, ItemRepository},
    models::catalog::BranchRow,
};

#[derive(Clone)]
pub struct CatalogService {
    repo: CatalogRepository,
    item_repo: ItemRepository,
    customer_repo: CustomerRepository,
}

impl CatalogService {
    pub fn new(
        repo: CatalogRepository,
        item_repo: ItemRepository,
        customer_repo: CustomerRepository,
    ) -> Self {
        Self {
            repo,
            item_repo,
            customer_repo,
        }
    }

    /// Aceita os formatos de timestamp que o canal costuma mandar.
    pub fn parse_since(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
            return Some(naive.and_utc());
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
        }
        None
    }

    /// Categorias com id coagido para inteiro (contrato da listagem).
    pub async fn categories(&self) -> Result<Vec<Value>, AppError> {
        let rows = self.repo.categories().await?;
        rows.into_iter()
            .map(|row| {
                Ok(json!({
                    "id": force_int(&row.channel_cat_id)?,
                    "name": row.title,
                }))
            })
            .collect()
    }

    pub async fn branches(&self) -> Result<Vec<BranchRow>, AppError> {
        self.repo.branches().await
    }

    /// Detalhe de produto(s): galeria de mídia e inventário por filial.
    /// Aqui os ids são assumidos numéricos, diferente das outras listagens.
    pub async fn products(
        &self,
        pool: &PgPool,
        item_code: Option<&str>,
    ) -> Result<Vec<Value>, AppError> {
        let products = self.item_repo.products(item_code).await?;

        let mut out = Vec::with_capacity(products.len());
        for product in products {
            let media = self.item_repo.media(pool, product.id).await?;
            let branches = self.item_repo.product_branches(product.id).await?;

            let branches_inventory: Vec<Value> = branches
                .into_iter()
                .map(|b| {
                    json!({
                        "branch_id": b.branch_id,
                        "branch_name": b.branch_name,
                        "warehouse_name": b.warehouse_name,
                        "stock": b.stock,
                    })
                })
                .collect();

            out.push(json!({
                "product_id": force_int(&product.item_code)?,
                "product_name": product.item_name,
                "sku": match product.sku.as_deref() {
                    Some(sku) => Value::from(force_int(sku)?),
                    None => Value::Null,
                },
                "price": product.standard_rate,
                "main_image": product.image,
                "media": media,
                "branches_inventory": branches_inventory,
            }));
        }
        Ok(out)
    }

    /// Delta "mudou desde": produtos e clientes no mesmo envelope.
    pub async fn changed_since(&self, since: DateTime<Utc>) -> Result<Value, AppError> {
        let items = self.item_repo.changed_since(since).await?;
        let customers = self.customer_repo.changed_since(since).await?;

        let products: Vec<Value> = items
            .into_iter()
            .map(|item| {
                Ok(json!({
                    "product_id": force_int(&item.item_code)?,
                    "product_name": item.product_name,
                    "updated_at": item.updated_at.format("%Y-%m-%d %H:%M:%S%.6f").to_string(),
                }))
            })
            .collect::<Result<_, AppError>>()?;

        // Aqui a coerção é condicional: só vira número se o id for todo
        // dígitos. Inconsistente com a listagem acima, e mantido assim.
        let customers: Vec<Value> = customers
            .into_iter()
            .map(|c| {
                json!({
                    "id": digits_to_value(&c.id.to_string()),
                    "name": c.name,
                    "updated_at": c.updated_at.format("%Y-%m-%d %H:%M:%S%.6f").to_string(),
                })
            })
            .collect();

        Ok(json!({
            "products": products,
            "customers": customers,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_since_aceita_formatos_usuais() {
        assert!(CatalogService::parse_since("2026-08-26T10:00:00Z").is_some());
        assert!(CatalogService::parse_since("2026-08-26 10:00:00").is_some());
        assert!(CatalogService::parse_since("2026-08-26").is_some());
        assert!(CatalogService::parse_since("ontem").is_none());
    }
}
