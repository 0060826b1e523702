// src/handlers.rs

pub mod agenda;
pub mod barbers;
pub mod catalog;
pub mod financial;
pub mod reports;
pub mod settings;
