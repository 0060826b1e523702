// src/gateway/client.rs

use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::common::error::FetchError;

/// Cliente HTTP do webhook. Todos os recursos ficam sob a mesma base URL.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    http: Client,
    base_url: String,
}

impl WebhookClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// GET + decodificação do corpo.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                endpoint: path.to_string(),
                source,
            })?;

        let body = Self::read_body(path, response).await?;
        serde_json::from_str(&body).map_err(|source| FetchError::Decode {
            endpoint: path.to_string(),
            source,
        })
    }

    /// GET de uma coleção, decodificada linha a linha. Linha ilegível é
    /// descartada com log; só falha de rede/status/corpo derruba a lista.
    pub async fn get_records<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, FetchError> {
        let rows: Vec<Value> = self.get_json(path).await?;
        Ok(decode_rows(path, rows))
    }

    /// POST do registro inteiro (upsert). O webhook pode responder vazio,
    /// com texto ou com JSON; só JSON é aproveitado.
    pub async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, FetchError> {
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                endpoint: path.to_string(),
                source,
            })?;

        let body = Self::read_body(path, response).await?;
        Ok(serde_json::from_str(&body).unwrap_or(Value::Null))
    }

    pub async fn delete(&self, path: &str, query: &[(&str, &str)]) -> Result<(), FetchError> {
        let response = self
            .http
            .delete(self.url(path))
            .query(query)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                endpoint: path.to_string(),
                source,
            })?;

        Self::read_body(path, response).await.map(|_| ())
    }

    async fn read_body(path: &str, response: reqwest::Response) -> Result<String, FetchError> {
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| FetchError::Transport {
            endpoint: path.to_string(),
            source,
        })
    }
}

pub(crate) fn decode_rows<T: DeserializeOwned>(endpoint: &str, rows: Vec<Value>) -> Vec<T> {
    rows.into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value(row) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(endpoint, index, "Registro ignorado: {}", e);
                None
            }
        })
        .collect()
}

/// O webhook às vezes devolve `[registro]`, às vezes o registro solto.
pub(crate) fn first_record<T: DeserializeOwned>(value: Value) -> Option<T> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .next()
            .and_then(|item| serde_json::from_value(item).ok()),
        Value::Object(_) => serde_json::from_value(value).ok(),
        _ => None,
    }
}
