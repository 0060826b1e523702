// src/handlers/catalog.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::error::AppError,
    config::AppState,
    models::{
        service::{Service, ServiceForm, ServiceSortKey, ServiceTable},
        table::TableQuery,
    },
};

// GET /api/services
#[utoipa::path(
    get,
    path = "/api/services",
    tag = "Services",
    params(
        ("sort" = Option<ServiceSortKey>, Query, description = "Coluna ordenada atualmente"),
        ("direction" = Option<String>, Query, description = "ascending | descending"),
        ("click" = Option<ServiceSortKey>, Query, description = "Coluna clicada (mesma coluna inverte a direção)")
    ),
    responses(
        (status = 200, description = "Tabela de serviços", body = ServiceTable)
    )
)]
pub async fn list_services(
    State(app_state): State<AppState>,
    Query(query): Query<TableQuery<ServiceSortKey>>,
) -> Result<impl IntoResponse, AppError> {
    let table = app_state.catalog_service.table(query.resolve()).await;
    Ok((StatusCode::OK, Json(table)))
}

// POST /api/services
#[utoipa::path(
    post,
    path = "/api/services",
    tag = "Services",
    request_body = ServiceForm,
    responses(
        (status = 201, description = "Serviço cadastrado", body = Service),
        (status = 400, description = "Erro de validação")
    )
)]
pub async fn create_service(
    State(app_state): State<AppState>,
    Json(payload): Json<ServiceForm>,
) -> Result<impl IntoResponse, AppError> {
    let service = app_state.catalog_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(service)))
}

// PUT /api/services/{id}
#[utoipa::path(
    put,
    path = "/api/services/{id}",
    tag = "Services",
    request_body = ServiceForm,
    params(("id" = String, Path, description = "ID do serviço")),
    responses(
        (status = 200, description = "Serviço atualizado", body = Service),
        (status = 400, description = "Erro de validação"),
        (status = 404, description = "Serviço não encontrado")
    )
)]
pub async fn update_service(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ServiceForm>,
) -> Result<impl IntoResponse, AppError> {
    let service = app_state.catalog_service.update(&id, payload).await?;
    Ok((StatusCode::OK, Json(service)))
}

// POST /api/services/{id}/deactivate
#[utoipa::path(
    post,
    path = "/api/services/{id}/deactivate",
    tag = "Services",
    params(("id" = String, Path, description = "ID do serviço")),
    responses(
        (status = 200, description = "Serviço desativado", body = Service),
        (status = 404, description = "Serviço não encontrado")
    )
)]
pub async fn deactivate_service(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = app_state.catalog_service.deactivate(&id).await?;
    Ok((StatusCode::OK, Json(service)))
}
