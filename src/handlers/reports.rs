// src/handlers/reports.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Local;

use crate::{
    common::error::AppError,
    config::AppState,
    models::report::{RangeQuery, ReportSummary},
};

// GET /api/reports/summary
#[utoipa::path(
    get,
    path = "/api/reports/summary",
    tag = "Reports",
    params(RangeQuery),
    responses(
        (status = 200, description = "KPIs e rankings do período (padrão: mês corrente)", body = ReportSummary),
        (status = 400, description = "Período inválido ou maior que 366 dias")
    )
)]
pub async fn get_summary(
    State(app_state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let range = query.resolve(Local::now().date_naive())?;
    let report = app_state.report_service.summary(range).await;
    Ok((StatusCode::OK, Json(report)))
}
