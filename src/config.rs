// src/config.rs

use std::env;

use crate::{
    gateway::{AppointmentGateway, BarberGateway, ExpenseGateway, ServiceGateway, SettingsGateway, WebhookClient},
    middleware::write_gate::WriteGate,
    services::{AgendaService, BarberService, CatalogService, FinancialService, ReportService, SettingsService},
};

const DEFAULT_WEBHOOK_BASE_URL: &str = "http://localhost:5678/webhook";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_EXPENSES_PATH: &str = "despesas";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub webhook_base_url: String,
    pub bind_addr: String,
    pub expenses_path: String,
}

impl AppConfig {
    /// Lê o `.env` (se existir) e as variáveis de ambiente.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let webhook_base_url = env::var("WEBHOOK_BASE_URL").unwrap_or_else(|_| {
            tracing::warn!("WEBHOOK_BASE_URL não definida, usando {}", DEFAULT_WEBHOOK_BASE_URL);
            DEFAULT_WEBHOOK_BASE_URL.to_string()
        });
        if !webhook_base_url.starts_with("http://") && !webhook_base_url.starts_with("https://") {
            anyhow::bail!("WEBHOOK_BASE_URL inválida: {webhook_base_url}");
        }

        Ok(Self {
            webhook_base_url,
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            expenses_path: env::var("EXPENSES_PATH").unwrap_or_else(|_| DEFAULT_EXPENSES_PATH.to_string()),
        })
    }
}

// O estado compartilhado por todos os handlers
#[derive(Clone)]
pub struct AppState {
    pub agenda_service: AgendaService,
    pub barber_service: BarberService,
    pub catalog_service: CatalogService,
    pub financial_service: FinancialService,
    pub report_service: ReportService,
    pub settings_service: SettingsService,
    pub write_gate: WriteGate,
}

impl AppState {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().build()?;
        let client = WebhookClient::new(http, config.webhook_base_url.clone());

        // --- Monta o gráfico de dependências ---
        let appointments = AppointmentGateway::new(client.clone());
        let services = ServiceGateway::new(client.clone());
        let barbers = BarberGateway::new(client.clone());
        let expenses = ExpenseGateway::new(client.clone(), config.expenses_path.clone());
        let settings = SettingsGateway::new(client.clone());

        tracing::info!("✅ Webhook configurado em {}", client.base_url());

        Ok(Self {
            agenda_service: AgendaService::new(appointments.clone(), services.clone(), barbers.clone()),
            barber_service: BarberService::new(barbers.clone()),
            catalog_service: CatalogService::new(services),
            financial_service: FinancialService::new(appointments.clone(), barbers, expenses),
            report_service: ReportService::new(appointments),
            settings_service: SettingsService::new(settings),
            write_gate: WriteGate::default(),
        })
    }
}
