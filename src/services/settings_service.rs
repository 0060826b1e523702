// src/services/settings_service.rs

use validator::Validate;

use crate::{
    common::error::AppError,
    gateway::SettingsGateway,
    models::{page::LoadState, settings::SettingsForm},
};

#[derive(Clone)]
pub struct SettingsService {
    gateway: SettingsGateway,
}

impl SettingsService {
    pub fn new(gateway: SettingsGateway) -> Self {
        Self { gateway }
    }

    /// Estado da página de configurações. Sem registro no webhook, o
    /// formulário começa em branco.
    pub async fn load(&self) -> LoadState<SettingsForm> {
        let state = LoadState::default().start_loading();
        let result = self.gateway.get().await.map(Option::unwrap_or_default);
        if let Err(e) = &result {
            tracing::warn!("Falha ao carregar as configurações: {}", e);
        }
        state.finish(result)
    }

    // Sempre o objeto inteiro
    pub async fn save(&self, form: SettingsForm) -> Result<SettingsForm, AppError> {
        form.validate()?;
        Ok(self.gateway.save(&form).await?)
    }
}
