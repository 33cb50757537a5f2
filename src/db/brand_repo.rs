// src/db/brand_repo.rs

use sqlx::{Executor, PgConnection, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::brand::{Brand, BrandDefault, BrandDefaultPayload},
};

#[derive(Clone)]
pub struct BrandRepository {
    #[allow(dead_code)]
    pool: PgPool,
}

impl BrandRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_channel_id<'e, E>(
        &self,
        executor: E,
        channel_brand_id: &str,
    ) -> Result<Option<Brand>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let brand = sqlx::query_as::<_, Brand>("SELECT * FROM brands WHERE channel_brand_id = $1")
            .bind(channel_brand_id)
            .fetch_optional(executor)
            .await?;
        Ok(brand)
    }

    pub async fn insert(&self, conn: &mut PgConnection, brand: &Brand) -> Result<Brand, AppError> {
        let inserted = sqlx::query_as::<_, Brand>(
            r#"
            INSERT INTO brands (channel_brand_id, brand, name_ar, logo)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&brand.channel_brand_id)
        .bind(&brand.brand)
        .bind(&brand.name_ar)
        .bind(&brand.logo)
        .fetch_one(conn)
        .await?;
        Ok(inserted)
    }

    pub async fn update(&self, conn: &mut PgConnection, brand: &Brand) -> Result<Brand, AppError> {
        let updated = sqlx::query_as::<_, Brand>(
            r#"
            UPDATE brands SET brand = $2, name_ar = $3, logo = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(brand.id)
        .bind(&brand.brand)
        .bind(&brand.name_ar)
        .bind(&brand.logo)
        .fetch_one(conn)
        .await?;
        Ok(updated)
    }

    pub async fn replace_defaults(
        &self,
        conn: &mut PgConnection,
        brand_id: Uuid,
        defaults: &[BrandDefaultPayload],
    ) -> Result<(), AppError> {
        sqlx::query("DELETE FROM brand_defaults WHERE brand_id = $1")
            .bind(brand_id)
            .execute(&mut *conn)
            .await?;

        for (idx, row) in defaults.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO brand_defaults
                    (brand_id, company, default_warehouse, default_price_list, idx)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(brand_id)
            .bind(&row.company)
            .bind(&row.default_warehouse)
            .bind(&row.default_price_list)
            .bind(idx as i32)
            .execute(&mut *conn)
            .await?;
        }
        Ok(())
    }

    pub async fn defaults<'e, E>(
        &self,
        executor: E,
        brand_id: Uuid,
    ) -> Result<Vec<BrandDefault>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let defaults = sqlx::query_as::<_, BrandDefault>(
            r#"
            SELECT company, default_warehouse, default_price_list
            FROM brand_defaults
            WHERE brand_id = $1
            ORDER BY idx ASC
            "#,
        )
        .bind(brand_id)
        .fetch_all(executor)
        .await?;
        Ok(defaults)
    }
}
