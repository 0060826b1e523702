// src/models/service.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::common::validation::{validate_not_blank, validate_not_negative};
use crate::models::status::ActiveStatus;
use crate::models::table::SortConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[schema(example = "3")]
    pub id: String,

    #[schema(example = "Corte Masculino")]
    pub name: String,

    #[schema(example = "35.00")]
    pub price: Decimal,

    // Minutos, sempre >= 1
    #[schema(example = 45)]
    pub duration: u32,

    pub status: ActiveStatus,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceForm {
    #[validate(custom(function = "validate_not_blank", message = "Nome do serviço é obrigatório."))]
    #[schema(example = "Corte Masculino")]
    pub name: String,

    #[validate(custom(function = "validate_not_negative"))]
    #[schema(example = "35.00")]
    pub price: Decimal,

    #[validate(range(min = 1, message = "A duração deve ser de pelo menos 1 minuto."))]
    #[schema(example = 30)]
    pub duration: u32,

    #[serde(default)]
    pub status: ActiveStatus,
}

impl ServiceForm {
    pub fn into_service(self, id: Option<String>) -> Service {
        Service {
            id: id.unwrap_or_default(),
            name: self.name.trim().to_string(),
            price: self.price,
            duration: self.duration,
            status: self.status,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ServiceSortKey {
    Name,
    Price,
    Duration,
    Status,
}

/// Linhas já ordenadas e a ordenação aplicada (para o cabeçalho da tabela).
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTable {
    pub rows: Vec<Service>,
    #[schema(value_type = Option<Object>)]
    pub sort: Option<SortConfig<ServiceSortKey>>,
}
