use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// Toda resposta de erro sai no envelope {"error": ...}, que é o contrato
// que o canal consome.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    // Campos obrigatórios ausentes (ou vazios) no corpo da requisição.
    // A lista entra na mensagem exatamente como o canal espera.
    #[error("Missing required fields: {0}")]
    MissingFields(String),

    #[error("Invalid JSON input: {0}")]
    InvalidJson(String),

    #[error("{0} is required.")]
    MissingField(&'static str),

    #[error("Missing required parameter '{0}'")]
    MissingParam(&'static str),

    #[error("Invalid value for parameter '{0}'")]
    InvalidParam(&'static str),

    #[error("No valid items found for order.")]
    NoValidItems,

    #[error("Invalid app key")]
    InvalidAppKey,

    // O provedor de identidade recusou o grant; repassamos o corpo dele.
    #[error("Upstream rejected the grant")]
    UpstreamRejected(serde_json::Value),

    #[error("Customer not found")]
    CustomerNotFound,

    // Conflito de chave natural na variante estrita de cadastro.
    #[error("{0}")]
    DuplicateCustomer(String),

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Erro na chamada ao provedor de identidade")]
    HttpError(#[from] reqwest::Error),

    // Variante genérica para qualquer outro erro inesperado.
    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }

            // O corpo do upstream volta como chegou, só o status vira 401.
            AppError::UpstreamRejected(body) => {
                return (StatusCode::UNAUTHORIZED, Json(body)).into_response();
            }

            AppError::MissingFields(fields) => (
                StatusCode::BAD_REQUEST,
                format!("Missing required fields: {fields}"),
            ),
            AppError::MissingField(field) => {
                (StatusCode::BAD_REQUEST, format!("{field} is required."))
            }
            AppError::MissingParam(param) => (
                StatusCode::BAD_REQUEST,
                format!("Missing required parameter '{param}'"),
            ),
            AppError::InvalidParam(param) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid value for parameter '{param}'"),
            ),
            AppError::InvalidJson(detail) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid JSON input: {detail}"),
            ),
            AppError::NoValidItems => (
                StatusCode::BAD_REQUEST,
                "No valid items found for order.".to_string(),
            ),
            AppError::InvalidAppKey => (StatusCode::UNAUTHORIZED, "Invalid app key".to_string()),
            AppError::CustomerNotFound => {
                (StatusCode::NOT_FOUND, "Customer not found".to_string())
            }
            AppError::DuplicateCustomer(msg) => (StatusCode::CONFLICT, msg),

            // Todos os outros erros (DatabaseError, HttpError, InternalServerError)
            // viram 500. O detalhe fica no log; o cliente recebe uma mensagem
            // genérica, nunca o texto cru da exceção.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ocorreu um erro inesperado.".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
