// src/services/financial_service.rs

use validator::Validate;

use crate::{
    common::error::AppError,
    gateway::{AppointmentGateway, BarberGateway, ExpenseGateway},
    models::{
        expense::{Expense, ExpenseForm},
        report::{DateRange, FinancialSummary},
    },
    services::aggregation,
};

#[derive(Clone)]
pub struct FinancialService {
    appointments: AppointmentGateway,
    barbers: BarberGateway,
    expenses: ExpenseGateway,
}

impl FinancialService {
    pub fn new(appointments: AppointmentGateway, barbers: BarberGateway, expenses: ExpenseGateway) -> Self {
        Self {
            appointments,
            barbers,
            expenses,
        }
    }

    pub async fn summary(&self, range: DateRange) -> FinancialSummary {
        let (appointments, barbers, expenses) = tokio::join!(
            self.appointments.list(),
            self.barbers.list(),
            self.expenses.list(),
        );
        aggregation::financial_summary(&appointments, &expenses, &barbers, range)
    }

    /// Lançamentos do período, mais recentes primeiro.
    pub async fn expenses(&self, range: DateRange) -> Vec<Expense> {
        let mut listed: Vec<Expense> = self
            .expenses
            .list()
            .await
            .into_iter()
            .filter(|e| range.contains_date(e.date))
            .collect();
        listed.sort_by(|a, b| b.date.cmp(&a.date));
        listed
    }

    pub async fn create_expense(&self, form: ExpenseForm) -> Result<Expense, AppError> {
        form.validate()?;
        let expense = form.into_expense(None);
        Ok(self.expenses.save(&expense).await?)
    }

    pub async fn update_expense(&self, id: &str, form: ExpenseForm) -> Result<Expense, AppError> {
        form.validate()?;
        self.ensure_exists(id).await?;
        let expense = form.into_expense(Some(id.to_string()));
        Ok(self.expenses.save(&expense).await?)
    }

    pub async fn delete_expense(&self, id: &str) -> Result<(), AppError> {
        self.ensure_exists(id).await?;
        self.expenses.delete(id).await?;
        Ok(())
    }

    async fn ensure_exists(&self, id: &str) -> Result<(), AppError> {
        if self.expenses.list().await.iter().any(|e| e.id == id) {
            Ok(())
        } else {
            Err(AppError::NotFound("Despesa"))
        }
    }
}
