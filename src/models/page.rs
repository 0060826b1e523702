// src/models/page.rs
//
// Estado explícito de cada página: carregamento e modal. Substitui os
// booleanos soltos (isLoading, isModalOpen, selected...) por transições.

use chrono::NaiveDateTime;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::appointment::Appointment;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "lowercase")]
pub enum LoadState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T> LoadState<T> {
    // idle/loaded/failed -> loading (recarregar é permitido)
    pub fn start_loading(self) -> Self {
        LoadState::Loading
    }

    /// Só conclui a partir de `Loading`; fora disso a resposta é ignorada.
    pub fn finish<E: ToString>(self, result: Result<T, E>) -> Self {
        match self {
            LoadState::Loading => match result {
                Ok(data) => LoadState::Loaded(data),
                Err(e) => LoadState::Failed(e.to_string()),
            },
            other => other,
        }
    }
}

/// Ação produzida por um clique no calendário.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(tag = "intent", rename_all = "camelCase")]
pub enum CalendarIntent {
    CreateAppointment {
        #[schema(value_type = String)]
        start: NaiveDateTime,
    },
    ShowDetail {
        appointment: Box<Appointment>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
#[serde(tag = "modal", rename_all = "camelCase")]
pub enum ModalState {
    #[default]
    Closed,
    Create {
        #[schema(value_type = String)]
        start: NaiveDateTime,
    },
    Detail {
        appointment: Box<Appointment>,
    },
}

impl ModalState {
    /// Abrir com outro modal já aberto substitui o conteúdo.
    pub fn open(self, intent: CalendarIntent) -> Self {
        match intent {
            CalendarIntent::CreateAppointment { start } => ModalState::Create { start },
            CalendarIntent::ShowDetail { appointment } => ModalState::Detail { appointment },
        }
    }
}
