// src/gateway/settings_gateway.rs

use serde::{Deserialize, Serialize};

use crate::{
    common::{error::FetchError, wire::de_text},
    gateway::client::{first_record, WebhookClient},
    models::settings::{PaymentMethod, SettingsForm},
};

pub const CONFIG_PATH: &str = "config";

const YES: &str = "Sim";
const NO: &str = "Não";

// Registro único de configuração, sempre gravado por inteiro.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(rename = "Nome_Barbearia", default, deserialize_with = "de_text")]
    pub barbershop_name: String,

    #[serde(rename = "Telefone_Principal", default, deserialize_with = "de_text")]
    pub main_phone: String,

    #[serde(rename = "Endereco", default, deserialize_with = "de_text")]
    pub address: String,

    #[serde(rename = "Horario_Funcionamento", default, deserialize_with = "de_text")]
    pub operating_hours: String,

    // Rótulos separados por vírgula: "Pix, Dinheiro"
    #[serde(rename = "Formas_Pagamento", default, deserialize_with = "de_text")]
    pub payment_methods: String,

    #[serde(rename = "Responder_Audio", default, deserialize_with = "de_text")]
    pub audio_response: String,

    #[serde(rename = "Enviar_Reacoes", default, deserialize_with = "de_text")]
    pub send_reactions: String,
}

fn is_yes(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case(YES)
}

/// Rótulos desconhecidos são descartados; repetidos contam uma vez.
pub fn map_api_to_form(api: &ApiConfig) -> SettingsForm {
    let mut payment_methods: Vec<String> = Vec::new();
    for method in api.payment_methods.split(',').filter_map(PaymentMethod::from_label) {
        let id = method.id().to_string();
        if !payment_methods.contains(&id) {
            payment_methods.push(id);
        }
    }

    SettingsForm {
        barbershop_name: api.barbershop_name.clone(),
        main_phone: api.main_phone.clone(),
        address: api.address.clone(),
        operating_hours: api.operating_hours.clone(),
        payment_methods,
        audio_response: is_yes(&api.audio_response),
        send_reactions: is_yes(&api.send_reactions),
    }
}

pub fn map_form_to_api(form: &SettingsForm) -> ApiConfig {
    let labels: Vec<&str> = form
        .payment_methods
        .iter()
        .filter_map(|id| PaymentMethod::from_id(id))
        .map(PaymentMethod::label)
        .collect();

    ApiConfig {
        barbershop_name: form.barbershop_name.clone(),
        main_phone: form.main_phone.clone(),
        address: form.address.clone(),
        operating_hours: form.operating_hours.clone(),
        payment_methods: labels.join(", "),
        audio_response: if form.audio_response { YES } else { NO }.to_string(),
        send_reactions: if form.send_reactions { YES } else { NO }.to_string(),
    }
}

#[derive(Clone)]
pub struct SettingsGateway {
    client: WebhookClient,
}

impl SettingsGateway {
    pub fn new(client: WebhookClient) -> Self {
        Self { client }
    }

    /// `None` quando o webhook ainda não tem configuração gravada.
    pub async fn get(&self) -> Result<Option<SettingsForm>, FetchError> {
        let value: serde_json::Value = self.client.get_json(CONFIG_PATH).await?;
        Ok(first_record::<ApiConfig>(value).map(|api| map_api_to_form(&api)))
    }

    pub async fn save(&self, settings: &SettingsForm) -> Result<SettingsForm, FetchError> {
        let payload = map_form_to_api(settings);
        self.client.post_json(CONFIG_PATH, &payload).await?;
        tracing::info!("✅ Configurações salvas no webhook");
        Ok(settings.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn api(methods: &str) -> ApiConfig {
        ApiConfig {
            barbershop_name: "AlphaClub".into(),
            main_phone: "(11) 99999-9999".into(),
            address: "Rua das Tesouras, 123".into(),
            operating_hours: "Seg a Sáb, 9h às 20h".into(),
            payment_methods: methods.into(),
            audio_response: "Sim".into(),
            send_reactions: "Não".into(),
        }
    }

    fn label_set(value: &str) -> HashSet<String> {
        value.split(',').map(|l| l.trim().to_lowercase()).filter(|l| !l.is_empty()).collect()
    }

    #[test]
    fn api_to_form_maps_labels_and_flags() {
        let form = map_api_to_form(&api("Pix, dinheiro ,Boleto"));
        assert_eq!(form.payment_methods, vec!["pix", "dinheiro"]);
        assert!(form.audio_response);
        assert!(!form.send_reactions);
    }

    #[test]
    fn round_trip_preserves_payment_method_set() {
        for methods in ["Dinheiro, Pix", "Cartão,Pix,Dinheiro", "pix", "PIX, Pix"] {
            let original = api(methods);
            let back = map_form_to_api(&map_api_to_form(&original));
            assert_eq!(label_set(&back.payment_methods), label_set(&original.payment_methods));
            assert_eq!(back.audio_response, original.audio_response);
            assert_eq!(back.barbershop_name, original.barbershop_name);
        }
    }

    #[test]
    fn form_to_api_joins_labels() {
        let mut form = map_api_to_form(&api(""));
        form.payment_methods = vec!["cartao".into(), "pix".into()];
        form.send_reactions = true;
        let out = map_form_to_api(&form);
        assert_eq!(out.payment_methods, "Cartão, Pix");
        assert_eq!(out.send_reactions, "Sim");
    }
}
