// src/services/barber_service.rs

use validator::Validate;

use crate::{
    common::error::AppError,
    gateway::BarberGateway,
    models::{
        barber::{Barber, BarberForm, BarberSortKey, BarberTable},
        status::ActiveStatus,
        table::SortConfig,
    },
};

#[derive(Clone)]
pub struct BarberService {
    gateway: BarberGateway,
}

impl BarberService {
    pub fn new(gateway: BarberGateway) -> Self {
        Self { gateway }
    }

    pub async fn table(&self, sort: Option<SortConfig<BarberSortKey>>) -> BarberTable {
        let mut rows = self.gateway.list().await;
        if let Some(config) = sort {
            sort_barbers(&mut rows, config);
        }
        BarberTable { rows, sort }
    }

    pub async fn create(&self, form: BarberForm) -> Result<Barber, AppError> {
        form.validate()?;
        let barber = form.into_barber(None);
        Ok(self.gateway.save(&barber).await?)
    }

    pub async fn update(&self, id: &str, form: BarberForm) -> Result<Barber, AppError> {
        form.validate()?;
        self.find(id).await?;
        let barber = form.into_barber(Some(id.to_string()));
        Ok(self.gateway.save(&barber).await?)
    }

    // Não existe exclusão: desativar = reenviar o registro como inativo
    pub async fn deactivate(&self, id: &str) -> Result<Barber, AppError> {
        let mut barber = self.find(id).await?;
        barber.status = ActiveStatus::Inactive;
        Ok(self.gateway.save(&barber).await?)
    }

    async fn find(&self, id: &str) -> Result<Barber, AppError> {
        self.gateway
            .list()
            .await
            .into_iter()
            .find(|b| b.id == id)
            .ok_or(AppError::NotFound("Barbeiro"))
    }
}

pub fn sort_barbers(rows: &mut [Barber], config: SortConfig<BarberSortKey>) {
    rows.sort_by(|a, b| {
        let ordering = match config.key {
            BarberSortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            BarberSortKey::Specialty => a.specialty.to_lowercase().cmp(&b.specialty.to_lowercase()),
            BarberSortKey::Status => a.status.cmp(&b.status),
            BarberSortKey::Commission => a.commission.cmp(&b.commission),
        };
        config.direction.apply(ordering)
    });
}
