// src/handlers/settings.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{common::error::AppError, config::AppState, models::settings::SettingsForm};

// GET /api/settings
#[utoipa::path(
    get,
    path = "/api/settings",
    tag = "Settings",
    responses(
        (status = 200, description = "Estado da página: {\"state\": \"loaded\", \"data\": ...} ou {\"state\": \"failed\", \"data\": mensagem}")
    )
)]
pub async fn get_settings(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let state = app_state.settings_service.load().await;
    Ok((StatusCode::OK, Json(state)))
}

// PUT /api/settings
#[utoipa::path(
    put,
    path = "/api/settings",
    tag = "Settings",
    request_body = SettingsForm,
    responses(
        (status = 200, description = "Configurações salvas", body = SettingsForm),
        (status = 400, description = "Erro de validação")
    )
)]
pub async fn update_settings(
    State(app_state): State<AppState>,
    Json(payload): Json<SettingsForm>,
) -> Result<impl IntoResponse, AppError> {
    let updated = app_state.settings_service.save(payload).await?;
    Ok((StatusCode::OK, Json(updated)))
}
