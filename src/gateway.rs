// src/gateway.rs

pub mod appointment_gateway;
pub mod barber_gateway;
pub mod client;
pub mod expense_gateway;
pub mod service_gateway;
pub mod settings_gateway;

pub use appointment_gateway::AppointmentGateway;
pub use barber_gateway::BarberGateway;
pub use client::WebhookClient;
pub use expense_gateway::ExpenseGateway;
pub use service_gateway::ServiceGateway;
pub use settings_gateway::SettingsGateway;
