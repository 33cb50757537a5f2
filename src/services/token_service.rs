// src/services/token_service.rs

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{common::error::AppError, db::OauthRepository};

#[derive(Debug, Deserialize)]
pub struct TokenPayload {
    // Chave da aplicação em base64, resolvida para client_id/client_secret.
    pub app_key: Option<String>,
    pub grant_type: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub refresh_token: Option<String>,
}

#[derive(Clone)]
pub struct TokenService {
    repo: OauthRepository,
    http: reqwest::Client,
    token_url: String,
}

impl TokenService {
    pub fn new(repo: OauthRepository, http: reqwest::Client, token_url: String) -> Self {
        Self {
            repo,
            http,
            token_url,
        }
    }

    /// A app key chega em base64; fora do padrão = inválida, e nada de
    /// upstream é contactado nesse caso.
    pub fn decode_app_key(raw: &str) -> Result<String, AppError> {
        let bytes = BASE64.decode(raw).map_err(|_| AppError::InvalidAppKey)?;
        String::from_utf8(bytes).map_err(|_| AppError::InvalidAppKey)
    }

    /// Repassa o grant ao provedor de identidade e traduz o status:
    /// chave inválida → 401 (sem chamada externa), upstream != 200 → 401
    /// com o corpo do upstream, falha de transporte → 500.
    pub async fn exchange(&self, payload: &TokenPayload) -> Result<Value, AppError> {
        let raw_key = payload
            .app_key
            .as_deref()
            .ok_or(AppError::MissingField("app_key"))?;
        let app_key = Self::decode_app_key(raw_key)?;

        let client = self
            .repo
            .find_by_app_key(&app_key)
            .await?
            .ok_or(AppError::InvalidAppKey)?;

        let grant_type = payload.grant_type.as_deref().unwrap_or("password");
        let mut form: Vec<(&str, &str)> = vec![
            ("grant_type", grant_type),
            ("client_id", &client.client_id),
            ("client_secret", &client.client_secret),
        ];
        match grant_type {
            "refresh_token" => {
                let token = payload
                    .refresh_token
                    .as_deref()
                    .ok_or(AppError::MissingField("refresh_token"))?;
                form.push(("refresh_token", token));
            }
            _ => {
                let username = payload
                    .username
                    .as_deref()
                    .ok_or(AppError::MissingField("username"))?;
                let password = payload
                    .password
                    .as_deref()
                    .ok_or(AppError::MissingField("password"))?;
                form.push(("username", username));
                form.push(("password", password));
            }
        }

        // Uma única chamada, sem retry nem backoff.
        let response = self.http.post(&self.token_url).form(&form).send().await?;

        if response.status().is_success() {
            Ok(response.json::<Value>().await?)
        } else {
            let body = response
                .json::<Value>()
                .await
                .unwrap_or_else(|_| json!({ "error": "access_denied" }));
            Err(AppError::UpstreamRejected(body))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_app_key_exige_base64_valido() {
        let encoded = BASE64.encode("minha-chave");
        assert_eq!(TokenService::decode_app_key(&encoded).unwrap(), "minha-chave");

        assert!(matches!(
            TokenService::decode_app_key("%%%nao-e-base64%%%"),
            Err(AppError::InvalidAppKey)
        ));
    }
}
