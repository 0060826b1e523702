// src/handlers/financial.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Local;

use crate::{
    common::error::AppError,
    config::AppState,
    models::{
        expense::{Expense, ExpenseForm},
        report::{FinancialSummary, RangeQuery},
    },
};

// GET /api/financial/summary
#[utoipa::path(
    get,
    path = "/api/financial/summary",
    tag = "Financial",
    params(RangeQuery),
    responses(
        (status = 200, description = "Cards, gráficos e despesas do período (padrão: mês corrente)", body = FinancialSummary),
        (status = 400, description = "Período inválido ou maior que 366 dias")
    )
)]
pub async fn get_summary(
    State(app_state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let range = query.resolve(Local::now().date_naive())?;
    let summary = app_state.financial_service.summary(range).await;
    Ok((StatusCode::OK, Json(summary)))
}

// GET /api/financial/expenses
#[utoipa::path(
    get,
    path = "/api/financial/expenses",
    tag = "Financial",
    params(RangeQuery),
    responses(
        (status = 200, description = "Despesas do período, mais recentes primeiro", body = [Expense]),
        (status = 400, description = "Período inválido ou maior que 366 dias")
    )
)]
pub async fn list_expenses(
    State(app_state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let range = query.resolve(Local::now().date_naive())?;
    let expenses = app_state.financial_service.expenses(range).await;
    Ok((StatusCode::OK, Json(expenses)))
}

// POST /api/financial/expenses
#[utoipa::path(
    post,
    path = "/api/financial/expenses",
    tag = "Financial",
    request_body = ExpenseForm,
    responses(
        (status = 201, description = "Despesa lançada", body = Expense),
        (status = 400, description = "Erro de validação")
    )
)]
pub async fn create_expense(
    State(app_state): State<AppState>,
    Json(payload): Json<ExpenseForm>,
) -> Result<impl IntoResponse, AppError> {
    let expense = app_state.financial_service.create_expense(payload).await?;
    Ok((StatusCode::CREATED, Json(expense)))
}

// PUT /api/financial/expenses/{id}
#[utoipa::path(
    put,
    path = "/api/financial/expenses/{id}",
    tag = "Financial",
    request_body = ExpenseForm,
    params(("id" = String, Path, description = "ID da despesa")),
    responses(
        (status = 200, description = "Despesa atualizada", body = Expense),
        (status = 400, description = "Erro de validação"),
        (status = 404, description = "Despesa não encontrada")
    )
)]
pub async fn update_expense(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ExpenseForm>,
) -> Result<impl IntoResponse, AppError> {
    let expense = app_state.financial_service.update_expense(&id, payload).await?;
    Ok((StatusCode::OK, Json(expense)))
}

// DELETE /api/financial/expenses/{id}
#[utoipa::path(
    delete,
    path = "/api/financial/expenses/{id}",
    tag = "Financial",
    params(("id" = String, Path, description = "ID da despesa")),
    responses(
        (status = 204, description = "Despesa removida"),
        (status = 404, description = "Despesa não encontrada")
    )
)]
pub async fn delete_expense(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    app_state.financial_service.delete_expense(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
