// src/services/report_service.rs

use crate::{
    gateway::AppointmentGateway,
    models::report::{DateRange, ReportSummary},
    services::aggregation,
};

#[derive(Clone)]
pub struct ReportService {
    appointments: AppointmentGateway,
}

impl ReportService {
    pub fn new(appointments: AppointmentGateway) -> Self {
        Self { appointments }
    }

    pub async fn summary(&self, range: DateRange) -> ReportSummary {
        let appointments = self.appointments.list().await;
        aggregation::report_summary(&appointments, range)
    }
}
