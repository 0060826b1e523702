// src/gateway/appointment_gateway.rs

use std::collections::HashMap;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    common::{
        error::FetchError,
        wire::{de_id, de_opt_id, de_opt_text, de_text, parse_date, parse_time, ser_id, ser_opt_id, DATE_FORMAT, TIME_FORMAT},
    },
    gateway::{
        client::{first_record, WebhookClient},
        service_gateway::{ApiService, SERVICES_PATH},
    },
    models::{appointment::Appointment, service::Service, status::AppointmentStatus},
};

pub const AGENDA_PATH: &str = "agenda";

// {ID, Data, Hora, Cliente, Telefone_Cliente, ID_Servico, Servico,
//  ID_Barbeiro, Barbeiro, Status, Forma_Pagamento?}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiAppointment {
    #[serde(rename = "ID", default, deserialize_with = "de_opt_id", serialize_with = "ser_opt_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    // "yyyy-MM-dd"
    #[serde(rename = "Data", default, deserialize_with = "de_text")]
    pub date: String,

    // "HH:mm"
    #[serde(rename = "Hora", default, deserialize_with = "de_text")]
    pub time: String,

    #[serde(rename = "Cliente", default, deserialize_with = "de_text")]
    pub client: String,

    #[serde(rename = "Telefone_Cliente", default, deserialize_with = "de_text")]
    pub client_phone: String,

    #[serde(rename = "ID_Servico", default, deserialize_with = "de_id", serialize_with = "ser_id")]
    pub service_id: String,

    #[serde(rename = "Servico", default, deserialize_with = "de_text")]
    pub service: String,

    #[serde(rename = "ID_Barbeiro", default, deserialize_with = "de_id", serialize_with = "ser_id")]
    pub barber_id: String,

    #[serde(rename = "Barbeiro", default, deserialize_with = "de_text")]
    pub barber: String,

    #[serde(rename = "Status", default, deserialize_with = "de_text")]
    pub status: String,

    #[serde(rename = "Forma_Pagamento", default, deserialize_with = "de_opt_text", skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
}

impl ApiAppointment {
    fn start(&self) -> Option<NaiveDateTime> {
        Some(parse_date(&self.date)?.and_time(parse_time(&self.time)?))
    }

    /// Junta com os serviços pelo ID: duração e preço vêm do serviço. Um
    /// `ID_Servico` órfão cai no fallback (30 min, preço zero).
    pub fn into_appointment(self, services: &HashMap<&str, &Service>) -> Result<Appointment, FetchError> {
        let start = self.start().ok_or_else(|| {
            FetchError::InvalidRecord(format!(
                "agendamento {:?} com data/hora inválida: {} {}",
                self.id, self.date, self.time
            ))
        })?;
        let service = services.get(self.service_id.as_str());

        Ok(Appointment {
            id: self.id.unwrap_or_default(),
            client_name: self.client,
            client_phone: self.client_phone,
            service_name: if self.service.is_empty() {
                service.map(|s| s.name.clone()).unwrap_or_default()
            } else {
                self.service
            },
            service_id: self.service_id,
            barber_id: self.barber_id,
            barber_name: self.barber,
            end: Appointment::end_for(start, service.map(|s| s.duration)),
            start,
            status: AppointmentStatus::from_wire(&self.status),
            price: service.map(|s| s.price).unwrap_or(Decimal::ZERO),
            payment_method: self.payment_method,
        })
    }
}

impl From<&Appointment> for ApiAppointment {
    fn from(appointment: &Appointment) -> Self {
        ApiAppointment {
            id: Some(appointment.id.clone()).filter(|id| !id.is_empty()),
            date: appointment.start.format(DATE_FORMAT).to_string(),
            time: appointment.start.format(TIME_FORMAT).to_string(),
            client: appointment.client_name.clone(),
            client_phone: appointment.client_phone.clone(),
            service_id: appointment.service_id.clone(),
            service: appointment.service_name.clone(),
            barber_id: appointment.barber_id.clone(),
            barber: appointment.barber_name.clone(),
            status: appointment.status.as_wire().to_string(),
            payment_method: appointment.payment_method.clone(),
        }
    }
}

/// Converte os registros crus; registros ilegíveis são descartados com log.
pub fn adapt_appointments(records: Vec<ApiAppointment>, services: &[Service]) -> Vec<Appointment> {
    let by_id: HashMap<&str, &Service> = services.iter().map(|s| (s.id.as_str(), s)).collect();

    records
        .into_iter()
        .filter_map(|record| match record.into_appointment(&by_id) {
            Ok(appointment) => Some(appointment),
            Err(e) => {
                tracing::warn!("Registro da agenda ignorado: {}", e);
                None
            }
        })
        .collect()
}

#[derive(Clone)]
pub struct AppointmentGateway {
    client: WebhookClient,
}

impl AppointmentGateway {
    pub fn new(client: WebhookClient) -> Self {
        Self { client }
    }

    /// Busca agenda e serviços em paralelo; qualquer falha vira lista vazia.
    pub async fn list(&self) -> Vec<Appointment> {
        let result = tokio::try_join!(
            self.client.get_records::<ApiAppointment>(AGENDA_PATH),
            self.client.get_records::<ApiService>(SERVICES_PATH),
        );

        match result {
            Ok((records, services)) => {
                let services: Vec<Service> = services.into_iter().map(Service::from).collect();
                adapt_appointments(records, &services)
            }
            Err(e) => {
                tracing::warn!(endpoint = AGENDA_PATH, "Erro ao buscar agendamentos: {}", e);
                Vec::new()
            }
        }
    }

    /// Sempre o registro inteiro: confirmar/cancelar = reenviar com outro status.
    pub async fn save(&self, appointment: &Appointment) -> Result<Appointment, FetchError> {
        let payload = ApiAppointment::from(appointment);
        let response = self.client.post_json(AGENDA_PATH, &payload).await?;

        tracing::info!(
            id = %appointment.id,
            status = appointment.status.as_wire(),
            "✅ Agendamento salvo no webhook"
        );

        // O eco do webhook não traz preço/duração; só o ID interessa.
        let echoed_id = first_record::<ApiAppointment>(response).and_then(|echo| echo.id);
        let mut saved = appointment.clone();
        if let Some(id) = echoed_id {
            saved.id = id;
        }
        Ok(saved)
    }
}
