// src/gateway/service_gateway.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    common::{
        error::FetchError,
        wire::{de_decimal, de_minutes, de_opt_id, de_text, ser_opt_id},
    },
    gateway::client::{first_record, WebhookClient},
    models::{service::Service, status::ActiveStatus},
};

pub const SERVICES_PATH: &str = "servicos";

// Formato exato do webhook: {ID, Nome, Preço, "Duração (min)", Status}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiService {
    #[serde(rename = "ID", default, deserialize_with = "de_opt_id", serialize_with = "ser_opt_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "Nome", default, deserialize_with = "de_text")]
    pub name: String,

    #[serde(rename = "Preço", default, deserialize_with = "de_decimal")]
    pub price: Decimal,

    #[serde(rename = "Duração (min)", default, deserialize_with = "de_minutes")]
    pub duration: u32,

    // "Ativo" | "Desativado"
    #[serde(rename = "Status", default, deserialize_with = "de_text")]
    pub status: String,
}

impl From<ApiService> for Service {
    fn from(api: ApiService) -> Self {
        Service {
            id: api.id.unwrap_or_default(),
            name: api.name,
            price: api.price,
            // Duração inválida ou zerada: o invariante é >= 1
            duration: api.duration.max(1),
            status: if api.status == "Ativo" {
                ActiveStatus::Active
            } else {
                ActiveStatus::Inactive
            },
        }
    }
}

impl From<&Service> for ApiService {
    fn from(service: &Service) -> Self {
        ApiService {
            id: Some(service.id.clone()).filter(|id| !id.is_empty()),
            name: service.name.clone(),
            price: service.price,
            duration: service.duration,
            status: match service.status {
                ActiveStatus::Active => "Ativo",
                ActiveStatus::Inactive => "Desativado",
            }
            .to_string(),
        }
    }
}

#[derive(Clone)]
pub struct ServiceGateway {
    client: WebhookClient,
}

impl ServiceGateway {
    pub fn new(client: WebhookClient) -> Self {
        Self { client }
    }

    /// Leitura que falha vira lista vazia (com log), nunca erro.
    pub async fn list(&self) -> Vec<Service> {
        match self.try_list().await {
            Ok(services) => services,
            Err(e) => {
                tracing::warn!(endpoint = SERVICES_PATH, "Erro ao buscar serviços: {}", e);
                Vec::new()
            }
        }
    }

    pub(crate) async fn try_list(&self) -> Result<Vec<Service>, FetchError> {
        let records: Vec<ApiService> = self.client.get_records(SERVICES_PATH).await?;
        Ok(records.into_iter().map(Service::from).collect())
    }

    // Upsert: com ID atualiza, sem ID cria
    pub async fn save(&self, service: &Service) -> Result<Service, FetchError> {
        let payload = ApiService::from(service);
        let response = self.client.post_json(SERVICES_PATH, &payload).await?;

        tracing::info!(id = %service.id, "✅ Serviço salvo no webhook");
        Ok(first_record::<ApiService>(response)
            .filter(|echo| echo.id.is_some())
            .map(Service::from)
            .unwrap_or_else(|| service.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_wire_record_to_service() {
        let api: ApiService = serde_json::from_str(
            r#"{"ID": 3, "Nome": "Corte", "Preço": 35.5, "Duração (min)": 45, "Status": "Ativo"}"#,
        )
        .unwrap();
        let service = Service::from(api);
        assert_eq!(service.id, "3");
        assert_eq!(service.duration, 45);
        assert_eq!(service.price, Decimal::new(355, 1));
        assert_eq!(service.status, ActiveStatus::Active);
    }

    #[test]
    fn anything_but_ativo_is_inactive_and_duration_is_at_least_one() {
        let api: ApiService = serde_json::from_str(
            r#"{"ID": "4", "Nome": "Pigmentação", "Preço": "80", "Duração (min)": 0, "Status": "Desativado"}"#,
        )
        .unwrap();
        let service = Service::from(api);
        assert_eq!(service.status, ActiveStatus::Inactive);
        assert_eq!(service.duration, 1);
    }

    #[test]
    fn outgoing_record_uses_portuguese_keys() {
        let service = Service {
            id: "7".into(),
            name: "Barba".into(),
            price: Decimal::from(30),
            duration: 30,
            status: ActiveStatus::Inactive,
        };
        let json = serde_json::to_value(ApiService::from(&service)).unwrap();
        assert_eq!(json["ID"], 7);
        assert_eq!(json["Nome"], "Barba");
        assert_eq!(json["Duração (min)"], 30);
        assert_eq!(json["Status"], "Desativado");
    }

    #[test]
    fn new_record_has_no_id() {
        let service = Service {
            id: String::new(),
            name: "Barba".into(),
            price: Decimal::from(30),
            duration: 30,
            status: ActiveStatus::Active,
        };
        let json = serde_json::to_value(ApiService::from(&service)).unwrap();
        assert!(json.get("ID").is_none());
    }
}
