// src/services.rs

pub mod agenda_service;
pub mod aggregation;
pub mod barber_service;
pub mod calendar;
pub mod catalog_service;
pub mod financial_service;
pub mod report_service;
pub mod settings_service;

pub use agenda_service::AgendaService;
pub use barber_service::BarberService;
pub use catalog_service::CatalogService;
pub use financial_service::FinancialService;
pub use report_service::ReportService;
pub use settings_service::SettingsService;
