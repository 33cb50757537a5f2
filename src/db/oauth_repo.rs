// src/db/oauth_repo.rs

use sqlx::{FromRow, PgPool};

use crate::common::error::AppError;

/// Credenciais OAuth registradas para uma app key do canal.
#[derive(Debug, Clone, FromRow)]
pub struct OauthClient {
    pub client_id: String,
    pub client_secret: String,
}

#[derive(Clone)]
pub struct OauthRepository {
    pool: PgPool,
}

impl OauthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_app_key(&self, app_key: &str) -> Result<Option<OauthClient>, AppError> {
        let client = sqlx::query_as::<_, OauthClient>(
            "SELECT client_id, client_secret FROM oauth_clients WHERE app_key = $1",
        )
        .bind(app_key)
        .fetch_optional(&self.pool)
        .await?;
        Ok(client)
    }
}
