// src/models/status.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// --- Enums (os status normalizados; a tradução para o português do webhook
// fica nos gateways) ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ActiveStatus {
    #[default]
    Active,
    Inactive,
}

impl ActiveStatus {
    pub fn is_active(self) -> bool {
        self == ActiveStatus::Active
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Confirmed,
    #[default]
    Pending,
    Canceled,
}

impl AppointmentStatus {
    /// "Confirmado" | "Pendente" | "Cancelado". Qualquer outra coisa vira pendente.
    pub fn from_wire(value: &str) -> Self {
        match value.trim() {
            "Confirmado" => AppointmentStatus::Confirmed,
            "Cancelado" => AppointmentStatus::Canceled,
            _ => AppointmentStatus::Pending,
        }
    }

    pub fn as_wire(self) -> &'static str {
        match self {
            AppointmentStatus::Confirmed => "Confirmado",
            AppointmentStatus::Pending => "Pendente",
            AppointmentStatus::Canceled => "Cancelado",
        }
    }
}
