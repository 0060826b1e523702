// src/models.rs

pub mod appointment;
pub mod barber;
pub mod calendar;
pub mod expense;
pub mod page;
pub mod report;
pub mod service;
pub mod settings;
pub mod status;
pub mod table;
