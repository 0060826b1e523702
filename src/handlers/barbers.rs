// src/handlers/barbers.rs

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
        barber::{Barber, BarberForm, BarberSortKey, BarberTable},
        table::TableQuery,
    },
};

// GET /api/barbers
#[utoipa::path(
    get,
    path = "/api/barbers",
    tag = "Barbers",
    params(
        ("sort" = Option<BarberSortKey>, Query, description = "Coluna ordenada atualmente"),
        ("direction" = Option<String>, Query, description = "ascending | descending"),
        ("click" = Option<BarberSortKey>, Query, description = "Coluna clicada (mesma coluna inverte a direção)")
    ),
    responses(
        (status = 200, description = "Tabela de barbeiros", body = BarberTable)
    )
)]
pub async fn list_barbers(
    State(app_state): State<AppState>,
    Query(query): Query<TableQuery<BarberSortKey>>,
) -> Result<impl IntoResponse, AppError> {
    let table = app_state.barber_service.table(query.resolve()).await;
    Ok((StatusCode::OK, Json(table)))
}

// POST /api/barbers
#[utoipa::path(
    post,
    path = "/api/barbers",
    tag = "Barbers",
    request_body = BarberForm,
    responses(
        (status = 201, description = "Barbeiro cadastrado", body = Barber),
        (status = 400, description = "Erro de validação")
    )
)]
pub async fn create_barber(
    State(app_state): State<AppState>,
    Json(payload): Json<BarberForm>,
) -> Result<impl IntoResponse, AppError> {
    let barber = app_state.barber_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(barber)))
}

// PUT /api/barbers/{id}
#[utoipa::path(
    put,
    path = "/api/barbers/{id}",
    tag = "Barbers",
    request_body = BarberForm,
    params(("id" = String, Path, description = "ID do barbeiro")),
    responses(
        (status = 200, description = "Barbeiro atualizado", body = Barber),
        (status = 400, description = "Erro de validação"),
        (status = 404, description = "Barbeiro não encontrado")
    )
)]
pub async fn update_barber(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<BarberForm>,
) -> Result<impl IntoResponse, AppError> {
    let barber = app_state.barber_service.update(&id, payload).await?;
    Ok((StatusCode::OK, Json(barber)))
}

// POST /api/barbers/{id}/deactivate
#[utoipa::path(
    post,
    path = "/api/barbers/{id}/deactivate",
    tag = "Barbers",
    params(("id" = String, Path, description = "ID do barbeiro")),
    responses(
        (status = 200, description = "Barbeiro desativado", body = Barber),
        (status = 404, description = "Barbeiro não encontrado")
    )
)]
pub async fn deactivate_barber(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let barber = app_state.barber_service.deactivate(&id).await?;
    Ok((StatusCode::OK, Json(barber)))
}
