// src/db/item_repo.rs

use chrono::{DateTime, Utc};
use sqlx::{Executor, PgConnection, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        catalog::{ItemDeltaRow, ProductBranchRow, ProductRow},
        item::{ChannelCatPayload, Item, ItemChannelCat},
    },
};

#[derive(Clone)]
pub struct ItemRepository {
    pool: PgPool,
}

impl ItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_code<'e, E>(
        &self,
        executor: E,
        item_code: &str,
    ) -> Result<Option<Item>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let item = sqlx::query_as::<_, Item>("SELECT * FROM items WHERE item_code = $1")
            .bind(item_code)
            .fetch_optional(executor)
            .await?;
        Ok(item)
    }

    pub async fn insert(&self, conn: &mut PgConnection, item: &Item) -> Result<Item, AppError> {
        let inserted = sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items (
                item_code, item_name, description, brand_id, item_group,
                name_ar, name_hi, name_ur,
                description_ar, description_hi, description_ur
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(&item.item_code)
        .bind(&item.item_name)
        .bind(&item.description)
        .bind(&item.brand_id)
        .bind(&item.item_group)
        .bind(&item.name_ar)
        .bind(&item.name_hi)
        .bind(&item.name_ur)
        .bind(&item.description_ar)
        .bind(&item.description_hi)
        .bind(&item.description_ur)
        .fetch_one(conn)
        .await?;
        Ok(inserted)
    }

    pub async fn update(&self, conn: &mut PgConnection, item: &Item) -> Result<Item, AppError> {
        let updated = sqlx::query_as::<_, Item>(
            r#"
            UPDATE items SET
                item_name = $2, description = $3, brand_id = $4,
                name_ar = $5, name_hi = $6, name_ur = $7,
                description_ar = $8, description_hi = $9, description_ur = $10,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(item.id)
        .bind(&item.item_name)
        .bind(&item.description)
        .bind(&item.brand_id)
        .bind(&item.name_ar)
        .bind(&item.name_hi)
        .bind(&item.name_ur)
        .bind(&item.description_ar)
        .bind(&item.description_hi)
        .bind(&item.description_ur)
        .fetch_one(conn)
        .await?;
        Ok(updated)
    }

    // Substituição destrutiva: apaga todas as filhas e regrava as do payload.
    pub async fn replace_channel_cats(
        &self,
        conn: &mut PgConnection,
        item_id: Uuid,
        rows: &[ChannelCatPayload],
    ) -> Result<(), AppError> {
        sqlx::query("DELETE FROM item_channel_cats WHERE item_id = $1")
            .bind(item_id)
            .execute(&mut *conn)
            .await?;

        for (idx, row) in rows.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO item_channel_cats (item_id, channel_id, category_id, subcategory_id, idx)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(item_id)
            .bind(&row.channel_id)
            .bind(&row.category_id)
            .bind(&row.subcategory_id)
            .bind(idx as i32)
            .execute(&mut *conn)
            .await?;
        }
        Ok(())
    }

    pub async fn replace_media(
        &self,
        conn: &mut PgConnection,
        item_id: Uuid,
        urls: &[String],
    ) -> Result<(), AppError> {
        sqlx::query("DELETE FROM item_media WHERE item_id = $1")
            .bind(item_id)
            .execute(&mut *conn)
            .await?;

        for (idx, url) in urls.iter().enumerate() {
            sqlx::query("INSERT INTO item_media (item_id, media, idx) VALUES ($1, $2, $3)")
                .bind(item_id)
                .bind(url)
                .bind(idx as i32)
                .execute(&mut *conn)
                .await?;
        }
        Ok(())
    }

    pub async fn channel_cats<'e, E>(
        &self,
        executor: E,
        item_id: Uuid,
    ) -> Result<Vec<ItemChannelCat>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let cats = sqlx::query_as::<_, ItemChannelCat>(
            r#"
            SELECT channel_id, category_id, subcategory_id
            FROM item_channel_cats
            WHERE item_id = $1
            ORDER BY idx ASC
            "#,
        )
        .bind(item_id)
        .fetch_all(executor)
        .await?;
        Ok(cats)
    }

    pub async fn media<'e, E>(&self, executor: E, item_id: Uuid) -> Result<Vec<String>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let urls = sqlx::query_scalar::<_, String>(
            "SELECT media FROM item_media WHERE item_id = $1 ORDER BY idx ASC",
        )
        .bind(item_id)
        .fetch_all(executor)
        .await?;
        Ok(urls)
    }

    /// Quais destes códigos existem de fato no cadastro.
    pub async fn existing_codes<'e, E>(
        &self,
        executor: E,
        codes: &[String],
    ) -> Result<Vec<String>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let found =
            sqlx::query_scalar::<_, String>("SELECT item_code FROM items WHERE item_code = ANY($1)")
                .bind(codes)
                .fetch_all(executor)
                .await?;
        Ok(found)
    }

    pub async fn products(&self, item_code: Option<&str>) -> Result<Vec<ProductRow>, AppError> {
        let products = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, item_code, item_name, standard_rate, image, sku
            FROM items
            WHERE $1::TEXT IS NULL OR item_code = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(item_code)
        .fetch_all(&self.pool)
        .await?;
        Ok(products)
    }

    pub async fn product_branches(&self, item_id: Uuid) -> Result<Vec<ProductBranchRow>, AppError> {
        let rows = sqlx::query_as::<_, ProductBranchRow>(
            r#"
            SELECT ib.branch_id,
                   b.branch    AS branch_name,
                   b.warehouse AS warehouse_name,
                   b.stock     AS stock
            FROM item_branches ib
            LEFT JOIN branches b ON b.id = ib.branch_id
            WHERE ib.item_id = $1
            "#,
        )
        .bind(item_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn changed_since(&self, since: DateTime<Utc>) -> Result<Vec<ItemDeltaRow>, AppError> {
        let items = sqlx::query_as::<_, ItemDeltaRow>(
            r#"
            SELECT item_code, item_name AS product_name, updated_at
            FROM items
            WHERE updated_at >= $1
            ORDER BY updated_at ASC
            "#,
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }
}
