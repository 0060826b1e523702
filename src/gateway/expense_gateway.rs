// src/gateway/expense_gateway.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    common::{
        error::FetchError,
        wire::{de_decimal, de_opt_id, de_text, parse_date, ser_opt_id, DATE_FORMAT},
    },
    gateway::client::{first_record, WebhookClient},
    models::expense::{Expense, ExpenseCategory},
};

// {ID, Descricao, Valor, Data, Categoria}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiExpense {
    #[serde(rename = "ID", default, deserialize_with = "de_opt_id", serialize_with = "ser_opt_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "Descricao", default, deserialize_with = "de_text")]
    pub description: String,

    #[serde(rename = "Valor", default, deserialize_with = "de_decimal")]
    pub amount: Decimal,

    #[serde(rename = "Data", default, deserialize_with = "de_text")]
    pub date: String,

    #[serde(rename = "Categoria", default, deserialize_with = "de_text")]
    pub category: String,
}

impl TryFrom<ApiExpense> for Expense {
    type Error = FetchError;

    fn try_from(api: ApiExpense) -> Result<Self, Self::Error> {
        let date = parse_date(&api.date).ok_or_else(|| {
            FetchError::InvalidRecord(format!("despesa {:?} com data inválida: {}", api.id, api.date))
        })?;

        Ok(Expense {
            id: api.id.unwrap_or_default(),
            description: api.description,
            amount: api.amount,
            date,
            category: ExpenseCategory::from_label(&api.category).unwrap_or(ExpenseCategory::Outros),
        })
    }
}

impl From<&Expense> for ApiExpense {
    fn from(expense: &Expense) -> Self {
        ApiExpense {
            id: Some(expense.id.clone()).filter(|id| !id.is_empty()),
            description: expense.description.clone(),
            amount: expense.amount,
            date: expense.date.format(DATE_FORMAT).to_string(),
            category: expense.category.label().to_string(),
        }
    }
}

#[derive(Clone)]
pub struct ExpenseGateway {
    client: WebhookClient,
    path: String,
}

impl ExpenseGateway {
    pub fn new(client: WebhookClient, path: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into(),
        }
    }

    pub async fn list(&self) -> Vec<Expense> {
        match self.client.get_records::<ApiExpense>(&self.path).await {
            Ok(records) => records
                .into_iter()
                .filter_map(|record| match Expense::try_from(record) {
                    Ok(expense) => Some(expense),
                    Err(e) => {
                        tracing::warn!("Despesa ignorada: {}", e);
                        None
                    }
                })
                .collect(),
            Err(e) => {
                tracing::warn!(endpoint = %self.path, "Erro ao buscar despesas: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn save(&self, expense: &Expense) -> Result<Expense, FetchError> {
        let payload = ApiExpense::from(expense);
        let response = self.client.post_json(&self.path, &payload).await?;

        tracing::info!(id = %expense.id, "✅ Despesa salva no webhook");
        Ok(first_record::<ApiExpense>(response)
            .filter(|echo| echo.id.is_some())
            .and_then(|echo| Expense::try_from(echo).ok())
            .unwrap_or_else(|| expense.clone()))
    }

    // DELETE {base}/{path}?ID={id}
    pub async fn delete(&self, id: &str) -> Result<(), FetchError> {
        self.client.delete(&self.path, &[("ID", id)]).await?;
        tracing::info!(id, "🗑️ Despesa removida no webhook");
        Ok(())
    }
}
