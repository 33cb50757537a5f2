// src/services/promotion_service.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::PromotionRepository,
    models::promotion::{
        PromotionPayload, PromotionResponse, PromotionalScheme, ValidPromotion,
    },
};

#[derive(Clone)]
pub struct PromotionService {
    repo: PromotionRepository,
}

impl PromotionService {
    pub fn new(repo: PromotionRepository) -> Self {
        Self { repo }
    }

    /// Upsert pelo id do esquema no canal; cada tabela de slabs é
    /// substituída por inteiro quando a chave vem no payload.
    pub async fn upsert(
        &self,
        pool: &PgPool,
        channel_scheme_id: &str,
        payload: PromotionPayload,
    ) -> Result<(&'static str, PromotionResponse), AppError> {
        let mut tx = pool.begin().await?;

        let existing = self
            .repo
            .find_by_channel_id(&mut *tx, channel_scheme_id)
            .await?;

        let (message, scheme) = match existing {
            Some(mut scheme) => {
                payload.apply_to(&mut scheme);
                let updated = self.repo.update(&mut tx, &scheme).await?;
                ("Promotional Scheme updated successfully", updated)
            }
            None => {
                let mut scheme = PromotionalScheme::blank(channel_scheme_id);
                payload.apply_to(&mut scheme);
                let inserted = self.repo.insert(&mut tx, &scheme).await?;
                ("Promotional Scheme created successfully", inserted)
            }
        };

        if let Some(slabs) = payload.price_discount_slabs {
            let rows: Vec<_> = slabs.into_iter().map(|s| s.into_row()).collect();
            self.repo.replace_price_slabs(&mut tx, scheme.id, &rows).await?;
        }
        if let Some(slabs) = payload.product_discount_slabs {
            let rows: Vec<_> = slabs.into_iter().map(|s| s.into_row()).collect();
            self.repo
                .replace_product_slabs(&mut tx, scheme.id, &rows)
                .await?;
        }

        let price_slabs = self.repo.price_slabs(&mut *tx, scheme.id).await?;
        let product_slabs = self.repo.product_slabs(&mut *tx, scheme.id).await?;

        tx.commit().await?;

        Ok((
            message,
            PromotionResponse::from_rows(scheme, price_slabs, product_slabs),
        ))
    }

    pub async fn valid_list(&self) -> Result<Vec<ValidPromotion>, AppError> {
        self.repo.valid_list().await
    }
}
