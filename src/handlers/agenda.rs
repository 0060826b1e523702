// src/handlers/agenda.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::{
    common::{
        error::{field_error, AppError},
        wire::parse_time,
    },
    config::AppState,
    models::{
        appointment::{Appointment, AppointmentForm, ConfirmAppointmentForm},
        calendar::WeekView,
        page::ModalState,
    },
    services::AgendaService,
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WeekQuery {
    /// Qualquer dia da semana desejada (padrão: hoje)
    #[param(value_type = Option<String>, format = Date)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SlotClickPayload {
    #[schema(value_type = String, format = Date, example = "2024-05-07")]
    pub date: NaiveDate,

    // "HH:mm"
    #[schema(example = "14:30")]
    pub time: String,
}

// GET /api/agenda/week
#[utoipa::path(
    get,
    path = "/api/agenda/week",
    tag = "Agenda",
    params(WeekQuery),
    responses(
        (status = 200, description = "Grade semanal (cancelados omitidos)", body = WeekView)
    )
)]
pub async fn get_week(
    State(app_state): State<AppState>,
    Query(query): Query<WeekQuery>,
) -> Result<impl IntoResponse, AppError> {
    let anchor = query.date.unwrap_or_else(|| Local::now().date_naive());
    let view = app_state.agenda_service.week(anchor).await;
    Ok((StatusCode::OK, Json(view)))
}

// POST /api/agenda/slot-click
#[utoipa::path(
    post,
    path = "/api/agenda/slot-click",
    tag = "Agenda",
    request_body = SlotClickPayload,
    responses(
        (status = 200, description = "Modal de novo agendamento", body = ModalState),
        (status = 400, description = "Horário inválido")
    )
)]
pub async fn slot_click(Json(payload): Json<SlotClickPayload>) -> Result<impl IntoResponse, AppError> {
    let time = parse_time(&payload.time)
        .ok_or_else(|| field_error("time", "invalid", "Horário inválido (use HH:mm)."))?;
    Ok((StatusCode::OK, Json(AgendaService::slot_click(payload.date, time))))
}

// POST /api/agenda/appointments
#[utoipa::path(
    post,
    path = "/api/agenda/appointments",
    tag = "Agenda",
    request_body = AppointmentForm,
    responses(
        (status = 201, description = "Agendamento criado como Pendente", body = Appointment),
        (status = 400, description = "Erro de validação"),
        (status = 409, description = "Outra gravação em andamento"),
        (status = 502, description = "Falha no webhook")
    )
)]
pub async fn create_appointment(
    State(app_state): State<AppState>,
    Json(payload): Json<AppointmentForm>,
) -> Result<impl IntoResponse, AppError> {
    let appointment = app_state.agenda_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(appointment)))
}

// GET /api/agenda/appointments/{id}
#[utoipa::path(
    get,
    path = "/api/agenda/appointments/{id}",
    tag = "Agenda",
    params(("id" = String, Path, description = "ID do agendamento")),
    responses(
        (status = 200, description = "Modal de detalhes", body = ModalState),
        (status = 404, description = "Agendamento não encontrado")
    )
)]
pub async fn get_appointment(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let modal = app_state.agenda_service.detail(&id).await?;
    Ok((StatusCode::OK, Json(modal)))
}

// POST /api/agenda/appointments/{id}/confirm
#[utoipa::path(
    post,
    path = "/api/agenda/appointments/{id}/confirm",
    tag = "Agenda",
    request_body = ConfirmAppointmentForm,
    params(("id" = String, Path, description = "ID do agendamento")),
    responses(
        (status = 200, description = "Agendamento confirmado", body = Appointment),
        (status = 400, description = "Forma de pagamento ausente"),
        (status = 404, description = "Agendamento não encontrado")
    )
)]
pub async fn confirm_appointment(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ConfirmAppointmentForm>,
) -> Result<impl IntoResponse, AppError> {
    let appointment = app_state.agenda_service.confirm(&id, payload).await?;
    Ok((StatusCode::OK, Json(appointment)))
}

// POST /api/agenda/appointments/{id}/cancel
#[utoipa::path(
    post,
    path = "/api/agenda/appointments/{id}/cancel",
    tag = "Agenda",
    params(("id" = String, Path, description = "ID do agendamento")),
    responses(
        (status = 200, description = "Agendamento cancelado", body = Appointment),
        (status = 404, description = "Agendamento não encontrado")
    )
)]
pub async fn cancel_appointment(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let appointment = app_state.agenda_service.cancel(&id).await?;
    Ok((StatusCode::OK, Json(appointment)))
}
