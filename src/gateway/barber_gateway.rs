// src/gateway/barber_gateway.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    common::{
        error::FetchError,
        wire::{de_decimal, de_opt_id, de_opt_text, de_text, ser_opt_id, ser_opt_text},
    },
    gateway::client::{first_record, WebhookClient},
    models::{barber::Barber, status::ActiveStatus},
};

pub const BARBERS_PATH: &str = "barbers";

// {ID, Nome, Especialidade, Status: "Ativo"|"Inativo", Observacoes, Comissao}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiBarber {
    #[serde(rename = "ID", default, deserialize_with = "de_opt_id", serialize_with = "ser_opt_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "Nome", default, deserialize_with = "de_text")]
    pub name: String,

    #[serde(rename = "Especialidade", default, deserialize_with = "de_text")]
    pub specialty: String,

    #[serde(rename = "Status", default, deserialize_with = "de_text")]
    pub status: String,

    #[serde(rename = "Observacoes", default, deserialize_with = "de_opt_text", serialize_with = "ser_opt_text")]
    pub notes: Option<String>,

    #[serde(rename = "Comissao", default, deserialize_with = "de_decimal")]
    pub commission: Decimal,
}

impl From<ApiBarber> for Barber {
    fn from(api: ApiBarber) -> Self {
        Barber {
            id: api.id.unwrap_or_default(),
            name: api.name,
            specialty: api.specialty,
            status: if api.status == "Ativo" {
                ActiveStatus::Active
            } else {
                ActiveStatus::Inactive
            },
            notes: api.notes,
            commission: api.commission.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED),
        }
    }
}

impl From<&Barber> for ApiBarber {
    fn from(barber: &Barber) -> Self {
        ApiBarber {
            id: Some(barber.id.clone()).filter(|id| !id.is_empty()),
            name: barber.name.clone(),
            specialty: barber.specialty.clone(),
            status: match barber.status {
                ActiveStatus::Active => "Ativo",
                ActiveStatus::Inactive => "Inativo",
            }
            .to_string(),
            notes: barber.notes.clone(),
            commission: barber.commission,
        }
    }
}

#[derive(Clone)]
pub struct BarberGateway {
    client: WebhookClient,
}

impl BarberGateway {
    pub fn new(client: WebhookClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Vec<Barber> {
        match self.client.get_records::<ApiBarber>(BARBERS_PATH).await {
            Ok(records) => records.into_iter().map(Barber::from).collect(),
            Err(e) => {
                tracing::warn!(endpoint = BARBERS_PATH, "Erro ao buscar barbeiros: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn save(&self, barber: &Barber) -> Result<Barber, FetchError> {
        let payload = ApiBarber::from(barber);
        let response = self.client.post_json(BARBERS_PATH, &payload).await?;

        tracing::info!(id = %barber.id, "✅ Barbeiro salvo no webhook");
        Ok(first_record::<ApiBarber>(response)
            .filter(|echo| echo.id.is_some())
            .map(Barber::from)
            .unwrap_or_else(|| barber.clone()))
    }
}
