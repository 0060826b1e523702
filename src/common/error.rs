// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Erros na fronteira com o webhook (o único backend que existe).
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Falha de rede ao acessar {endpoint}: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("O webhook {endpoint} respondeu com status {status}")]
    Status { endpoint: String, status: u16 },

    #[error("Resposta inválida de {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Registro inválido: {0}")]
    InvalidRecord(String),
}

// Nosso tipo de erro, agora com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("{0} não encontrado")]
    NotFound(&'static str),

    #[error("Já existe uma gravação em andamento")]
    WriteInProgress,

    #[error("Erro ao comunicar com o webhook: {0}")]
    Fetch(#[from] FetchError),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
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
            AppError::NotFound(what) => {
                let body = Json(json!({ "error": format!("{what} não encontrado.") }));
                return (StatusCode::NOT_FOUND, body).into_response();
            }
            AppError::WriteInProgress => (
                StatusCode::CONFLICT,
                "Aguarde a conclusão da gravação anterior.",
            ),
            AppError::Fetch(ref e) => {
                tracing::error!("🔥 Falha na gravação junto ao webhook: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "Não foi possível salvar. Tente novamente.",
                )
            }
            ref e @ AppError::InternalServerError(_) => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Ocorreu um erro inesperado.")
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

/// Monta um erro de validação para um único campo, fora do derive.
pub fn field_error(field: &'static str, code: &'static str, message: &'static str) -> AppError {
    let mut error = validator::ValidationError::new(code);
    error.message = Some(message.into());
    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);
    AppError::ValidationError(errors)
}
