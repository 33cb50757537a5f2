// src/db/catalog_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::catalog::{BranchRow, CategoryRow},
};

#[derive(Clone)]
pub struct CatalogRepository {
    pool: PgPool,
}

impl CatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Categorias do grupo "Products", na ordem de cadastro.
    pub async fn categories(&self) -> Result<Vec<CategoryRow>, AppError> {
        let categories = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT channel_cat_id, title
            FROM categories
            WHERE item_group = 'Products'
            ORDER BY channel_cat_id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(categories)
    }

    pub async fn branches(&self) -> Result<Vec<BranchRow>, AppError> {
        let branches = sqlx::query_as::<_, BranchRow>(
            "SELECT id, branch AS name, city FROM branches ORDER BY branch ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(branches)
    }
}
