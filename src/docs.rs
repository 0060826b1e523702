// src/docs.rs

use utoipa::OpenApi;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Barbershop Dashboard",
        description = "Painel da barbearia: agenda, equipe, serviços, financeiro e relatórios"
    ),
    paths(
        // --- Agenda ---
        handlers::agenda::get_week,
        handlers::agenda::slot_click,
        handlers::agenda::create_appointment,
        handlers::agenda::get_appointment,
        handlers::agenda::confirm_appointment,
        handlers::agenda::cancel_appointment,

        // --- Barbers ---
        handlers::barbers::list_barbers,
        handlers::barbers::create_barber,
        handlers::barbers::update_barber,
        handlers::barbers::deactivate_barber,

        // --- Services ---
        handlers::catalog::list_services,
        handlers::catalog::create_service,
        handlers::catalog::update_service,
        handlers::catalog::deactivate_service,

        // --- Financial ---
        handlers::financial::get_summary,
        handlers::financial::list_expenses,
        handlers::financial::create_expense,
        handlers::financial::update_expense,
        handlers::financial::delete_expense,

        // --- Reports ---
        handlers::reports::get_summary,

        // --- Settings ---
        handlers::settings::get_settings,
        handlers::settings::update_settings,
    ),
    components(
        schemas(
            // --- Status ---
            models::status::ActiveStatus,
            models::status::AppointmentStatus,
            models::table::SortDirection,

            // --- Agenda ---
            models::appointment::Appointment,
            models::appointment::AppointmentForm,
            models::appointment::ConfirmAppointmentForm,
            models::calendar::GridPlacement,
            models::calendar::StatusTone,
            models::calendar::StatusStyle,
            models::calendar::PlacedAppointment,
            models::calendar::DayColumn,
            models::calendar::WeekView,
            models::page::CalendarIntent,
            models::page::ModalState,
            handlers::agenda::SlotClickPayload,

            // --- Barbers / Services ---
            models::barber::Barber,
            models::barber::BarberForm,
            models::barber::BarberSortKey,
            models::barber::BarberTable,
            models::service::Service,
            models::service::ServiceForm,
            models::service::ServiceSortKey,
            models::service::ServiceTable,

            // --- Financial / Reports ---
            models::expense::ExpenseCategory,
            models::expense::Expense,
            models::expense::ExpenseForm,
            models::report::DateRange,
            models::report::MetricCard,
            models::report::RankingEntry,
            models::report::HourBucket,
            models::report::PaymentMethodTotal,
            models::report::DailyPoint,
            models::report::FinancialSummary,
            models::report::ReportSummary,

            // --- Settings ---
            models::settings::PaymentMethod,
            models::settings::SettingsForm,
        )
    ),
    tags(
        (name = "Agenda", description = "Grade semanal e agendamentos"),
        (name = "Barbers", description = "Equipe de barbeiros"),
        (name = "Services", description = "Catálogo de serviços"),
        (name = "Financial", description = "Receitas, comissões e despesas"),
        (name = "Reports", description = "Indicadores e rankings do período"),
        (name = "Settings", description = "Configurações da barbearia")
    )
)]
pub struct ApiDoc;
