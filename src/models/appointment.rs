// src/models/appointment.rs

use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::common::validation::{validate_not_blank, validate_phone};
use crate::models::status::AppointmentStatus;

/// Duração usada quando o serviço do agendamento não é encontrado.
pub const FALLBACK_DURATION_MINUTES: i64 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[schema(example = "12")]
    pub id: String,

    #[schema(example = "Carlos Silva")]
    pub client_name: String,

    #[schema(example = "(11) 98765-4321")]
    pub client_phone: String,

    pub service_id: String,
    // Nome desnormalizado gravado pelo backend no próprio agendamento
    pub service_name: String,

    pub barber_id: String,
    pub barber_name: String,

    pub start: NaiveDateTime,
    // start + duração do serviço (ou 30 min)
    pub end: NaiveDateTime,

    pub status: AppointmentStatus,

    // Copiado do serviço no momento da leitura
    pub price: Decimal,

    pub payment_method: Option<String>,
}

impl Appointment {
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    pub fn is_canceled(&self) -> bool {
        self.status == AppointmentStatus::Canceled
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == AppointmentStatus::Confirmed
    }

    /// Fim derivado da duração do serviço; sem serviço, vale o fallback de 30 min.
    pub fn end_for(start: NaiveDateTime, service_duration: Option<u32>) -> NaiveDateTime {
        let minutes = service_duration
            .filter(|d| *d >= 1)
            .map(i64::from)
            .unwrap_or(FALLBACK_DURATION_MINUTES);
        start.checked_add_signed(Duration::minutes(minutes)).unwrap_or(start)
    }
}

// O horário vem do calendário (slot clicado) e não é editável no formulário.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentForm {
    #[validate(custom(function = "validate_not_blank", message = "Nome do cliente é obrigatório."))]
    #[schema(example = "Carlos Silva")]
    pub client_name: String,

    #[validate(custom(function = "validate_phone"))]
    #[schema(example = "(11) 98765-4321")]
    pub client_phone: String,

    #[validate(custom(function = "validate_not_blank", message = "Selecione um serviço."))]
    pub service_id: String,

    #[validate(custom(function = "validate_not_blank", message = "Selecione um barbeiro."))]
    pub barber_id: String,

    pub payment_method: Option<String>,

    #[schema(value_type = String, example = "2024-05-06T10:00:00")]
    pub start: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmAppointmentForm {
    #[validate(custom(function = "validate_not_blank", message = "Informe a forma de pagamento."))]
    #[schema(example = "Pix")]
    pub payment_method: String,
}
