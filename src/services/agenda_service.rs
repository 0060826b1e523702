// src/services/agenda_service.rs

use chrono::{NaiveDate, NaiveTime};
use validator::Validate;

use crate::{
    common::error::{field_error, AppError},
    gateway::{AppointmentGateway, BarberGateway, ServiceGateway},
    models::{
        appointment::{Appointment, AppointmentForm, ConfirmAppointmentForm},
        calendar::WeekView,
        page::ModalState,
        status::AppointmentStatus,
    },
    services::calendar,
};

#[derive(Clone)]
pub struct AgendaService {
    appointments: AppointmentGateway,
    services: ServiceGateway,
    barbers: BarberGateway,
}

impl AgendaService {
    pub fn new(appointments: AppointmentGateway, services: ServiceGateway, barbers: BarberGateway) -> Self {
        Self {
            appointments,
            services,
            barbers,
        }
    }

    /// Semana que contém `anchor`. Cancelados não aparecem na grade.
    pub async fn week(&self, anchor: NaiveDate) -> WeekView {
        let visible: Vec<Appointment> = self
            .appointments
            .list()
            .await
            .into_iter()
            .filter(|a| !a.is_canceled())
            .collect();
        calendar::week_view(anchor, &visible)
    }

    pub fn slot_click(day: NaiveDate, time: NaiveTime) -> ModalState {
        ModalState::default().open(calendar::on_empty_slot_click(day, time))
    }

    pub async fn detail(&self, id: &str) -> Result<ModalState, AppError> {
        let appointment = self.find(id).await?;
        Ok(ModalState::default().open(calendar::on_appointment_click(&appointment)))
    }

    /// Novo agendamento sai sempre como `Pendente`. Serviço e barbeiro precisam
    /// existir: os nomes são gravados junto com o registro.
    pub async fn create(&self, form: AppointmentForm) -> Result<Appointment, AppError> {
        form.validate()?;

        let (services, barbers) = tokio::join!(self.services.list(), self.barbers.list());

        let service = services
            .iter()
            .find(|s| s.id == form.service_id)
            .ok_or_else(|| field_error("service_id", "unknown", "Serviço não encontrado."))?;
        let barber = barbers
            .iter()
            .find(|b| b.id == form.barber_id)
            .ok_or_else(|| field_error("barber_id", "unknown", "Barbeiro não encontrado."))?;

        let appointment = Appointment {
            id: String::new(),
            client_name: form.client_name.trim().to_string(),
            client_phone: form.client_phone,
            service_id: service.id.clone(),
            service_name: service.name.clone(),
            barber_id: barber.id.clone(),
            barber_name: barber.name.clone(),
            end: Appointment::end_for(form.start, Some(service.duration)),
            start: form.start,
            status: AppointmentStatus::Pending,
            price: service.price,
            payment_method: form.payment_method.filter(|m| !m.trim().is_empty()),
        };

        Ok(self.appointments.save(&appointment).await?)
    }

    pub async fn confirm(&self, id: &str, form: ConfirmAppointmentForm) -> Result<Appointment, AppError> {
        form.validate()?;
        let mut appointment = self.find(id).await?;
        appointment.status = AppointmentStatus::Confirmed;
        appointment.payment_method = Some(form.payment_method.trim().to_string());
        Ok(self.appointments.save(&appointment).await?)
    }

    pub async fn cancel(&self, id: &str) -> Result<Appointment, AppError> {
        let mut appointment = self.find(id).await?;
        appointment.status = AppointmentStatus::Canceled;
        Ok(self.appointments.save(&appointment).await?)
    }

    async fn find(&self, id: &str) -> Result<Appointment, AppError> {
        self.appointments
            .list()
            .await
            .into_iter()
            .find(|a| a.id == id)
            .ok_or(AppError::NotFound("Agendamento"))
    }
}
