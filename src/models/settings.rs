// src/models/settings.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::common::validation::validate_not_blank;

// Catálogo fixo de formas de pagamento aceitas (id, rótulo gravado no webhook)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Pix,
    Cartao,
    Dinheiro,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [PaymentMethod::Pix, PaymentMethod::Cartao, PaymentMethod::Dinheiro];

    pub fn id(self) -> &'static str {
        match self {
            PaymentMethod::Pix => "pix",
            PaymentMethod::Cartao => "cartao",
            PaymentMethod::Dinheiro => "dinheiro",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Pix => "Pix",
            PaymentMethod::Cartao => "Cartão",
            PaymentMethod::Dinheiro => "Dinheiro",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.id() == id)
    }

    /// Comparação sem diferenciar maiúsculas ("PIX", " pix ").
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().to_lowercase();
        Self::ALL.into_iter().find(|m| m.label().to_lowercase() == label)
    }
}

fn validate_payment_methods(ids: &[String]) -> Result<(), ValidationError> {
    if ids.is_empty() {
        let mut err = ValidationError::new("payment_methods");
        err.message = Some("Você deve selecionar pelo menos uma forma de pagamento.".into());
        return Err(err);
    }
    if ids.iter().any(|id| PaymentMethod::from_id(id).is_none()) {
        let mut err = ValidationError::new("payment_methods");
        err.message = Some("Forma de pagamento desconhecida.".into());
        return Err(err);
    }
    Ok(())
}

/// Configuração única da barbearia, lida e gravada sempre por inteiro.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettingsForm {
    #[validate(custom(function = "validate_not_blank", message = "Nome da barbearia é obrigatório."))]
    #[schema(example = "Barbearia AlphaClub")]
    pub barbershop_name: String,

    #[validate(custom(function = "validate_not_blank", message = "Telefone principal é obrigatório."))]
    #[schema(example = "(11) 99999-9999")]
    pub main_phone: String,

    #[validate(custom(function = "validate_not_blank", message = "Endereço é obrigatório."))]
    pub address: String,

    #[validate(custom(function = "validate_not_blank", message = "Horário de funcionamento é obrigatório."))]
    #[schema(example = "Segunda a Sábado, das 9h às 20h")]
    pub operating_hours: String,

    // ids do catálogo: "pix", "cartao", "dinheiro"
    #[validate(custom(function = "validate_payment_methods"))]
    #[schema(example = json!(["pix", "dinheiro"]))]
    pub payment_methods: Vec<String>,

    #[serde(default)]
    pub audio_response: bool,

    #[serde(default)]
    pub send_reactions: bool,
}
