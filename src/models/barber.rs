// src/models/barber.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::common::validation::{validate_not_blank, validate_percentage};
use crate::models::status::ActiveStatus;
use crate::models::table::SortConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Barber {
    #[schema(example = "1")]
    pub id: String,

    #[schema(example = "João Silva")]
    pub name: String,

    #[schema(example = "Cortes clássicos")]
    pub specialty: String,

    pub status: ActiveStatus,

    pub notes: Option<String>,

    // Percentual (0-100) sobre o preço de cada atendimento confirmado
    #[schema(example = "20")]
    pub commission: Decimal,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BarberForm {
    #[validate(custom(function = "validate_not_blank", message = "Nome do barbeiro é obrigatório."))]
    #[schema(example = "João Silva")]
    pub name: String,

    #[validate(custom(function = "validate_not_blank", message = "Especialidade é obrigatória."))]
    #[schema(example = "Barba")]
    pub specialty: String,

    #[serde(default)]
    pub status: ActiveStatus,

    pub notes: Option<String>,

    #[validate(custom(function = "validate_percentage"))]
    #[serde(default)]
    pub commission: Decimal,
}

impl BarberForm {
    pub fn into_barber(self, id: Option<String>) -> Barber {
        Barber {
            id: id.unwrap_or_default(),
            name: self.name.trim().to_string(),
            specialty: self.specialty.trim().to_string(),
            status: self.status,
            notes: self.notes.filter(|n| !n.trim().is_empty()),
            commission: self.commission,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BarberSortKey {
    Name,
    Specialty,
    Status,
    Commission,
}

/// Linhas já ordenadas e a ordenação aplicada (para o cabeçalho da tabela).
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BarberTable {
    pub rows: Vec<Barber>,
    #[schema(value_type = Option<Object>)]
    pub sort: Option<SortConfig<BarberSortKey>>,
}
