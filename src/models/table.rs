// src/models/table.rs
//
// Ordenação das tabelas (barbeiros e serviços). Clicar de novo na mesma
// coluna inverte a direção.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortConfig<K> {
    pub key: K,
    pub direction: SortDirection,
}

impl<K: PartialEq + Copy> SortConfig<K> {
    /// Mesma chave: inverte a direção. Chave nova: começa ascendente.
    pub fn request(current: Option<Self>, key: K) -> Self {
        match current {
            Some(config) if config.key == key && config.direction == SortDirection::Ascending => {
                SortConfig { key, direction: SortDirection::Descending }
            }
            _ => SortConfig { key, direction: SortDirection::Ascending },
        }
    }
}

/// `?sort=name&direction=ascending&click=status`: a ordenação atual mais o
/// clique no cabeçalho (opcional).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TableQuery<K> {
    pub sort: Option<K>,
    pub direction: Option<SortDirection>,
    pub click: Option<K>,
}

impl<K> Default for TableQuery<K> {
    fn default() -> Self {
        Self { sort: None, direction: None, click: None }
    }
}

impl<K: PartialEq + Copy> TableQuery<K> {
    pub fn resolve(self) -> Option<SortConfig<K>> {
        let current = self.sort.map(|key| SortConfig {
            key,
            direction: self.direction.unwrap_or_default(),
        });
        match self.click {
            Some(key) => Some(SortConfig::request(current, key)),
            None => current,
        }
    }
}
