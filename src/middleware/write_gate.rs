// src/middleware/write_gate.rs
//
// Uma gravação por vez: enquanto um POST/PUT/DELETE está em voo, o próximo
// recebe 409 em vez de ficar na fila.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::Method,
    middleware::Next,
    response::Response,
};
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::{common::error::AppError, config::AppState};

#[derive(Debug, Clone, Default)]
pub struct WriteGate(Arc<Mutex<()>>);

impl WriteGate {
    pub fn try_acquire(&self) -> Result<OwnedMutexGuard<()>, AppError> {
        self.0
            .clone()
            .try_lock_owned()
            .map_err(|_| AppError::WriteInProgress)
    }
}

pub async fn write_guard(
    State(app_state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if matches!(*request.method(), Method::GET | Method::HEAD | Method::OPTIONS) {
        return Ok(next.run(request).await);
    }

    // O guard vive até a resposta ficar pronta
    let _guard = app_state.write_gate.try_acquire().inspect_err(|_| {
        tracing::warn!(method = %request.method(), uri = %request.uri(), "Gravação recusada: outra em andamento");
    })?;
    Ok(next.run(request).await)
}
