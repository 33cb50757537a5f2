// src/services/brand_service.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::BrandRepository,
    models::brand::{Brand, BrandPayload, BrandResponse},
};

#[derive(Clone)]
pub struct BrandService {
    repo: BrandRepository,
}

impl BrandService {
    pub fn new(repo: BrandRepository) -> Self {
        Self { repo }
    }

    /// Upsert pelo id da marca no canal; brandDefaults presente substitui
    /// a tabela filha por inteiro.
    pub async fn upsert(
        &self,
        pool: &PgPool,
        channel_brand_id: &str,
        payload: BrandPayload,
    ) -> Result<(&'static str, BrandResponse), AppError> {
        let mut tx = pool.begin().await?;

        let existing = self.repo.find_by_channel_id(&mut *tx, channel_brand_id).await?;

        let (message, brand) = match existing {
            Some(mut brand) => {
                payload.apply_to(&mut brand);
                let updated = self.repo.update(&mut tx, &brand).await?;
                ("Brand updated successfully", updated)
            }
            None => {
                let mut brand = Brand::blank(channel_brand_id);
                payload.apply_to(&mut brand);
                let inserted = self.repo.insert(&mut tx, &brand).await?;
                ("Brand created successfully", inserted)
            }
        };

        if let Some(defaults) = &payload.brand_defaults {
            self.repo.replace_defaults(&mut tx, brand.id, defaults).await?;
        }
        let defaults = self.repo.defaults(&mut *tx, brand.id).await?;

        tx.commit().await?;

        Ok((message, BrandResponse::from_rows(brand, defaults)))
    }
}
