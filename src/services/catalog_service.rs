// src/services/catalog_service.rs
//
// Catálogo de serviços da barbearia (corte, barba, ...).

use validator::Validate;

use crate::{
    common::error::AppError,
    gateway::ServiceGateway,
    models::{
        service::{Service, ServiceForm, ServiceSortKey, ServiceTable},
        status::ActiveStatus,
        table::SortConfig,
    },
};

#[derive(Clone)]
pub struct CatalogService {
    gateway: ServiceGateway,
}

impl CatalogService {
    pub fn new(gateway: ServiceGateway) -> Self {
        Self { gateway }
    }

    pub async fn table(&self, sort: Option<SortConfig<ServiceSortKey>>) -> ServiceTable {
        let mut rows = self.gateway.list().await;
        if let Some(config) = sort {
            sort_services(&mut rows, config);
        }
        ServiceTable { rows, sort }
    }

    pub async fn create(&self, form: ServiceForm) -> Result<Service, AppError> {
        form.validate()?;
        let service = form.into_service(None);
        Ok(self.gateway.save(&service).await?)
    }

    pub async fn update(&self, id: &str, form: ServiceForm) -> Result<Service, AppError> {
        form.validate()?;
        self.find(id).await?;
        let service = form.into_service(Some(id.to_string()));
        Ok(self.gateway.save(&service).await?)
    }

    pub async fn deactivate(&self, id: &str) -> Result<Service, AppError> {
        let mut service = self.find(id).await?;
        service.status = ActiveStatus::Inactive;
        Ok(self.gateway.save(&service).await?)
    }

    async fn find(&self, id: &str) -> Result<Service, AppError> {
        self.gateway
            .list()
            .await
            .into_iter()
            .find(|s| s.id == id)
            .ok_or(AppError::NotFound("Serviço"))
    }
}

pub fn sort_services(rows: &mut [Service], config: SortConfig<ServiceSortKey>) {
    rows.sort_by(|a, b| {
        let ordering = match config.key {
            ServiceSortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            ServiceSortKey::Price => a.price.cmp(&b.price),
            ServiceSortKey::Duration => a.duration.cmp(&b.duration),
            ServiceSortKey::Status => a.status.cmp(&b.status),
        };
        config.direction.apply(ordering)
    });
}
