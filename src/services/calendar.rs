// src/services/calendar.rs
//
// Grade semanal da agenda: segunda a domingo, 09:00-19:00 em slots de 30 min.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};

use crate::models::{
    appointment::Appointment,
    calendar::{DayColumn, GridPlacement, PlacedAppointment, StatusStyle, StatusTone, WeekView},
    page::CalendarIntent,
    status::AppointmentStatus,
};

pub const DAY_START_HOUR: u32 = 9;
pub const DAY_END_HOUR: u32 = 19;
pub const SLOT_MINUTES: i64 = 30;
// Altura de um slot na tela (h-20)
pub const SLOT_HEIGHT_REM: f64 = 5.0;

/// Os 7 dias da semana (ISO, começando na segunda) que contêm `anchor`.
/// Nas bordas do calendário os dias encostam em `NaiveDate::MIN`/`MAX`.
pub fn build_week(anchor: NaiveDate) -> [NaiveDate; 7] {
    let monday = anchor
        .checked_sub_signed(Duration::days(i64::from(anchor.weekday().num_days_from_monday())))
        .unwrap_or(NaiveDate::MIN);
    std::array::from_fn(|i| {
        monday
            .checked_add_signed(Duration::days(i as i64))
            .unwrap_or(NaiveDate::MAX)
    })
}

/// Início de cada slot do dia, de 09:00 até 18:30 (20 slots).
pub fn build_slots(day: NaiveDate) -> Vec<NaiveDateTime> {
    let start = day.and_time(NaiveTime::MIN) + Duration::hours(i64::from(DAY_START_HOUR));
    let end = day.and_time(NaiveTime::MIN) + Duration::hours(i64::from(DAY_END_HOUR));

    let mut slots = Vec::new();
    let mut current = start;
    while current < end {
        slots.push(current);
        current += Duration::minutes(SLOT_MINUTES);
    }
    slots
}

/// Linha inicial (1 = 09:00) e quantidade de linhas. Horários fora da janela
/// são calculados do mesmo jeito e podem cair fora da grade.
pub fn place_appointment(appointment: &Appointment) -> GridPlacement {
    let hour = i64::from(appointment.start.hour());
    let minute = i64::from(appointment.start.minute());
    let row_start = (hour - i64::from(DAY_START_HOUR)) * 2 + minute / SLOT_MINUTES + 1;

    let minutes = appointment.duration_minutes();
    // ceil(minutes / 30), nunca menos que 1
    let row_span = ((minutes + SLOT_MINUTES - 1).div_euclid(SLOT_MINUTES)).max(1);

    let offset_minutes = (hour - i64::from(DAY_START_HOUR)) * 60 + minute;
    GridPlacement {
        row_start,
        row_span,
        top_rem: offset_minutes as f64 / SLOT_MINUTES as f64 * SLOT_HEIGHT_REM,
        height_rem: minutes.max(0) as f64 / SLOT_MINUTES as f64 * SLOT_HEIGHT_REM,
    }
}

pub fn on_empty_slot_click(day: NaiveDate, slot_time: NaiveTime) -> CalendarIntent {
    let slot = slot_time
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(slot_time);
    CalendarIntent::CreateAppointment { start: day.and_time(slot) }
}

pub fn on_appointment_click(appointment: &Appointment) -> CalendarIntent {
    CalendarIntent::ShowDetail {
        appointment: Box::new(appointment.clone()),
    }
}

pub fn status_style(status: AppointmentStatus) -> StatusStyle {
    match status {
        AppointmentStatus::Confirmed => StatusStyle { tone: StatusTone::Confirmed, label: "Confirmado" },
        AppointmentStatus::Pending => StatusStyle { tone: StatusTone::Pending, label: "Pendente" },
        AppointmentStatus::Canceled => StatusStyle { tone: StatusTone::Canceled, label: "Cancelado" },
    }
}

fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "seg",
        Weekday::Tue => "ter",
        Weekday::Wed => "qua",
        Weekday::Thu => "qui",
        Weekday::Fri => "sex",
        Weekday::Sat => "sáb",
        Weekday::Sun => "dom",
    }
}

/// Monta a semana inteira. Quem chama já removeu os cancelados.
pub fn week_view(anchor: NaiveDate, appointments: &[Appointment]) -> WeekView {
    let slots = build_slots(anchor)
        .into_iter()
        .map(|slot| slot.format("%H:%M").to_string())
        .collect();

    let days = build_week(anchor)
        .into_iter()
        .map(|date| {
            let mut placed: Vec<PlacedAppointment> = appointments
                .iter()
                .filter(|a| a.start.date() == date)
                .map(|a| PlacedAppointment {
                    appointment: a.clone(),
                    placement: place_appointment(a),
                    style: status_style(a.status),
                })
                .collect();
            placed.sort_by_key(|p| p.appointment.start);

            DayColumn {
                date,
                weekday: weekday_label(date.weekday()),
                label: date.format("%d/%m").to_string(),
                appointments: placed,
            }
        })
        .collect();

    WeekView {
        anchor,
        previous_anchor: anchor.checked_sub_signed(Duration::days(7)).unwrap_or(anchor),
        next_anchor: anchor.checked_add_signed(Duration::days(7)).unwrap_or(anchor),
        slots,
        days,
    }
}
