// src/services/warehouse_service.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::WarehouseRepository,
    models::warehouse::{Warehouse, WarehousePayload, WarehouseResponse},
};

#[derive(Clone)]
pub struct WarehouseService {
    repo: WarehouseRepository,
}

impl WarehouseService {
    pub fn new(repo: WarehouseRepository) -> Self {
        Self { repo }
    }

    /// Upsert pelo warehouse_name.
    pub async fn upsert(
        &self,
        pool: &PgPool,
        warehouse_name: &str,
        payload: WarehousePayload,
    ) -> Result<(&'static str, WarehouseResponse), AppError> {
        let mut tx = pool.begin().await?;

        let existing = self.repo.find_by_name(&mut *tx, warehouse_name).await?;

        let (message, warehouse) = match existing {
            Some(mut warehouse) => {
                payload.apply_to(&mut warehouse);
                let updated = self.repo.update(&mut tx, &warehouse).await?;
                ("Warehouse updated successfully", updated)
            }
            None => {
                let mut warehouse = Warehouse::blank(warehouse_name);
                payload.apply_to(&mut warehouse);
                let inserted = self.repo.insert(&mut tx, &warehouse).await?;
                ("Warehouse created successfully", inserted)
            }
        };

        tx.commit().await?;

        Ok((message, WarehouseResponse::from(warehouse)))
    }
}
