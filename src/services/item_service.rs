// src/services/item_service.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::ItemRepository,
    models::item::{Item, ItemPayload, ItemResponse},
};

#[derive(Clone)]
pub struct ItemService {
    repo: ItemRepository,
}

impl ItemService {
    pub fn new(repo: ItemRepository) -> Self {
        Self { repo }
    }

    /// Upsert pelo item_code (skuCode no contrato). Campos ausentes não
    /// tocam o registro; coleções filhas presentes são substituídas por
    /// inteiro, ausentes ficam como estão.
    pub async fn upsert(
        &self,
        pool: &PgPool,
        item_code: &str,
        payload: ItemPayload,
    ) -> Result<(&'static str, ItemResponse), AppError> {
        let mut tx = pool.begin().await?;

        let existing = self.repo.find_by_code(&mut *tx, item_code).await?;

        let (message, item) = match existing {
            Some(mut item) => {
                payload.apply_to(&mut item);
                let updated = self.repo.update(&mut tx, &item).await?;
                ("Item updated successfully", updated)
            }
            None => {
                let mut item = Item::blank(item_code);
                payload.apply_to(&mut item);
                let inserted = self.repo.insert(&mut tx, &item).await?;
                ("Item created successfully", inserted)
            }
        };

        if let Some(cats) = &payload.channel_cat_sub_cat {
            self.repo.replace_channel_cats(&mut tx, item.id, cats).await?;
        }
        if let Some(urls) = &payload.sub_cat_img {
            self.repo.replace_media(&mut tx, item.id, urls).await?;
        }

        let cats = self.repo.channel_cats(&mut *tx, item.id).await?;
        let media = self.repo.media(&mut *tx, item.id).await?;

        tx.commit().await?;

        Ok((message, ItemResponse::from_rows(item, cats, media)))
    }
}
