// src/db/promotion_repo.rs

use sqlx::{Executor, PgConnection, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::promotion::{
        PriceDiscountSlab, ProductDiscountSlab, PromotionalScheme, ValidPromotion,
    },
};

#[derive(Clone)]
pub struct PromotionRepository {
    pool: PgPool,
}

impl PromotionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_channel_id<'e, E>(
        &self,
        executor: E,
        channel_scheme_id: &str,
    ) -> Result<Option<PromotionalScheme>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let scheme = sqlx::query_as::<_, PromotionalScheme>(
            "SELECT * FROM promotional_schemes WHERE channel_scheme_id = $1",
        )
        .bind(channel_scheme_id)
        .fetch_optional(executor)
        .await?;
        Ok(scheme)
    }

    pub async fn insert(
        &self,
        conn: &mut PgConnection,
        scheme: &PromotionalScheme,
    ) -> Result<PromotionalScheme, AppError> {
        let inserted = sqlx::query_as::<_, PromotionalScheme>(
            r#"
            INSERT INTO promotional_schemes
                (channel_scheme_id, title, apply_on, valid_from, valid_upto, disabled)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&scheme.channel_scheme_id)
        .bind(&scheme.title)
        .bind(&scheme.apply_on)
        .bind(scheme.valid_from)
        .bind(scheme.valid_upto)
        .bind(scheme.disabled)
        .fetch_one(conn)
        .await?;
        Ok(inserted)
    }

    pub async fn update(
        &self,
        conn: &mut PgConnection,
        scheme: &PromotionalScheme,
    ) -> Result<PromotionalScheme, AppError> {
        let updated = sqlx::query_as::<_, PromotionalScheme>(
            r#"
            UPDATE promotional_schemes SET
                title = $2, apply_on = $3, valid_from = $4, valid_upto = $5,
                disabled = $6, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(scheme.id)
        .bind(&scheme.title)
        .bind(&scheme.apply_on)
        .bind(scheme.valid_from)
        .bind(scheme.valid_upto)
        .bind(scheme.disabled)
        .fetch_one(conn)
        .await?;
        Ok(updated)
    }

    pub async fn replace_price_slabs(
        &self,
        conn: &mut PgConnection,
        scheme_id: Uuid,
        slabs: &[PriceDiscountSlab],
    ) -> Result<(), AppError> {
        sqlx::query("DELETE FROM promo_price_discount_slabs WHERE scheme_id = $1")
            .bind(scheme_id)
            .execute(&mut *conn)
            .await?;

        for (idx, slab) in slabs.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO promo_price_discount_slabs
                    (scheme_id, min_qty, max_qty, rate_or_discount, max_amount, idx)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(scheme_id)
            .bind(slab.min_qty)
            .bind(slab.max_qty)
            .bind(slab.rate_or_discount)
            .bind(slab.max_amount)
            .bind(idx as i32)
            .execute(&mut *conn)
            .await?;
        }
        Ok(())
    }

    pub async fn replace_product_slabs(
        &self,
        conn: &mut PgConnection,
        scheme_id: Uuid,
        slabs: &[ProductDiscountSlab],
    ) -> Result<(), AppError> {
        sqlx::query("DELETE FROM promo_product_discount_slabs WHERE scheme_id = $1")
            .bind(scheme_id)
            .execute(&mut *conn)
            .await?;

        for (idx, slab) in slabs.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO promo_product_discount_slabs
                    (scheme_id, min_qty, max_qty, free_item, free_qty, idx)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(scheme_id)
            .bind(slab.min_qty)
            .bind(slab.max_qty)
            .bind(&slab.free_item)
            .bind(slab.free_qty)
            .bind(idx as i32)
            .execute(&mut *conn)
            .await?;
        }
        Ok(())
    }

    pub async fn price_slabs<'e, E>(
        &self,
        executor: E,
        scheme_id: Uuid,
    ) -> Result<Vec<PriceDiscountSlab>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let slabs = sqlx::query_as::<_, PriceDiscountSlab>(
            r#"
            SELECT min_qty, max_qty, rate_or_discount, max_amount
            FROM promo_price_discount_slabs
            WHERE scheme_id = $1
            ORDER BY idx ASC
            "#,
        )
        .bind(scheme_id)
        .fetch_all(executor)
        .await?;
        Ok(slabs)
    }

    pub async fn product_slabs<'e, E>(
        &self,
        executor: E,
        scheme_id: Uuid,
    ) -> Result<Vec<ProductDiscountSlab>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let slabs = sqlx::query_as::<_, ProductDiscountSlab>(
            r#"
            SELECT min_qty, max_qty, free_item, free_qty
            FROM promo_product_discount_slabs
            WHERE scheme_id = $1
            ORDER BY idx ASC
            "#,
        )
        .bind(scheme_id)
        .fetch_all(executor)
        .await?;
        Ok(slabs)
    }

    /// Promoções não desabilitadas, uma linha por slab de preço, com datas
    /// já convertidas para string. O filtro é só o flag; as datas de
    /// vigência saem no corpo sem restringir a consulta.
    pub async fn valid_list(&self) -> Result<Vec<ValidPromotion>, AppError> {
        let promotions = sqlx::query_as::<_, ValidPromotion>(
            r#"
            SELECT s.title                 AS name,
                   p.rate_or_discount      AS percentage,
                   p.max_amount            AS value,
                   s.valid_from::TEXT      AS valid_from,
                   s.valid_upto::TEXT      AS valid_upto
            FROM promotional_schemes s
            LEFT JOIN promo_price_discount_slabs p ON p.scheme_id = s.id
            WHERE s.disabled = FALSE
            ORDER BY s.created_at ASC, p.idx ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(promotions)
    }
}
