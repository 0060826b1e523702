// src/models/expense.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::common::validation::{validate_not_blank, validate_positive};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ExpenseCategory {
    Produtos,
    Infraestrutura,
    Marketing,
    #[serde(rename = "Salários")]
    Salarios,
    Impostos,
    Outros,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 6] = [
        ExpenseCategory::Produtos,
        ExpenseCategory::Infraestrutura,
        ExpenseCategory::Marketing,
        ExpenseCategory::Salarios,
        ExpenseCategory::Impostos,
        ExpenseCategory::Outros,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExpenseCategory::Produtos => "Produtos",
            ExpenseCategory::Infraestrutura => "Infraestrutura",
            ExpenseCategory::Marketing => "Marketing",
            ExpenseCategory::Salarios => "Salários",
            ExpenseCategory::Impostos => "Impostos",
            ExpenseCategory::Outros => "Outros",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,

    #[schema(example = "Compra de pomadas")]
    pub description: String,

    #[schema(example = "120.00")]
    pub amount: Decimal,

    #[schema(value_type = String, format = Date, example = "2024-05-10")]
    pub date: NaiveDate,

    pub category: ExpenseCategory,
}

fn validate_category(val: &str) -> Result<(), ValidationError> {
    if ExpenseCategory::from_label(val).is_none() {
        let mut err = ValidationError::new("category");
        err.message = Some("A categoria é obrigatória.".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseForm {
    #[validate(custom(function = "validate_not_blank", message = "A descrição é obrigatória."))]
    pub description: String,

    #[validate(custom(function = "validate_positive"))]
    pub amount: Decimal,

    #[schema(value_type = String, format = Date, example = "2024-05-10")]
    pub date: NaiveDate,

    #[validate(custom(function = "validate_category"))]
    #[schema(example = "Produtos")]
    pub category: String,
}

impl ExpenseForm {
    pub fn into_expense(self, id: Option<String>) -> Expense {
        Expense {
            id: id.unwrap_or_default(),
            description: self.description.trim().to_string(),
            amount: self.amount,
            date: self.date,
            // Já validado; Outros cobre o impossível
            category: ExpenseCategory::from_label(&self.category).unwrap_or(ExpenseCategory::Outros),
        }
    }
}
