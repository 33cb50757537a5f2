// src/db/warehouse_repo.rs

use sqlx::{Executor, PgConnection, PgPool, Postgres};

use crate::{common::error::AppError, models::warehouse::Warehouse};

#[derive(Clone)]
pub struct WarehouseRepository {
    #[allow(dead_code)]
    pool: PgPool,
}

impl WarehouseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_name<'e, E>(
        &self,
        executor: E,
        warehouse_name: &str,
    ) -> Result<Option<Warehouse>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let warehouse =
            sqlx::query_as::<_, Warehouse>("SELECT * FROM warehouses WHERE warehouse_name = $1")
                .bind(warehouse_name)
                .fetch_optional(executor)
                .await?;
        Ok(warehouse)
    }

    pub async fn insert(
        &self,
        conn: &mut PgConnection,
        warehouse: &Warehouse,
    ) -> Result<Warehouse, AppError> {
        let inserted = sqlx::query_as::<_, Warehouse>(
            r#"
            INSERT INTO warehouses (warehouse_name, address_line_1, region, warehouse_code)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&warehouse.warehouse_name)
        .bind(&warehouse.address_line_1)
        .bind(&warehouse.region)
        .bind(&warehouse.warehouse_code)
        .fetch_one(conn)
        .await?;
        Ok(inserted)
    }

    pub async fn update(
        &self,
        conn: &mut PgConnection,
        warehouse: &Warehouse,
    ) -> Result<Warehouse, AppError> {
        let updated = sqlx::query_as::<_, Warehouse>(
            r#"
            UPDATE warehouses SET
                address_line_1 = $2, region = $3, warehouse_code = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(warehouse.id)
        .bind(&warehouse.address_line_1)
        .bind(&warehouse.region)
        .bind(&warehouse.warehouse_code)
        .fetch_one(conn)
        .await?;
        Ok(updated)
    }
}
