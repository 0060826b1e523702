// src/models/calendar.rs

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::appointment::Appointment;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GridPlacement {
    // 1 = slot das 09:00. Fora da janela pode ser <= 0 ou > 20.
    pub row_start: i64,
    pub row_span: i64,
    pub top_rem: f64,
    pub height_rem: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum StatusTone {
    Confirmed,
    Pending,
    Canceled,
}

/// Um dos três tratamentos visuais fixos por status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusStyle {
    pub tone: StatusTone,
    #[schema(value_type = String)]
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlacedAppointment {
    pub appointment: Appointment,
    pub placement: GridPlacement,
    pub style: StatusStyle,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DayColumn {
    #[schema(value_type = String, format = Date)]
    pub date: NaiveDate,
    // "seg", "ter", ...
    #[schema(value_type = String)]
    pub weekday: &'static str,
    // "dd/MM"
    pub label: String,
    pub appointments: Vec<PlacedAppointment>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeekView {
    #[schema(value_type = String, format = Date)]
    pub anchor: NaiveDate,
    #[schema(value_type = String, format = Date)]
    pub previous_anchor: NaiveDate,
    #[schema(value_type = String, format = Date)]
    pub next_anchor: NaiveDate,
    // "09:00", "09:30", ..., "18:30"
    pub slots: Vec<String>,
    pub days: Vec<DayColumn>,
}
