// src/models/report.rs

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::common::error::{field_error, AppError};
use crate::models::expense::Expense;

/// Maior período aceito nas consultas (um ano bissexto).
pub const MAX_RANGE_DAYS: i64 = 366;

/// Intervalo inclusivo de datas; sem `to`, vale um único dia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    #[schema(value_type = String, format = Date)]
    pub from: NaiveDate,
    #[schema(value_type = Option<String>, format = Date)]
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn end(&self) -> NaiveDate {
        self.to.unwrap_or(self.from)
    }

    // from 00:00 <= ts <= fim do último dia
    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        let start = self.from.and_time(NaiveTime::MIN);
        ts >= start && ts.date() <= self.end()
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.end()
    }

    /// Mês corrente, do dia 1 ao último dia: o período padrão das páginas.
    pub fn current_month(today: NaiveDate) -> Self {
        let first = today.with_day(1).unwrap_or(today);
        let last = first
            .checked_add_months(Months::new(1))
            .map(|next| next - Duration::days(1))
            .unwrap_or(first);
        Self::new(first, Some(last))
    }

    /// Todos os dias do intervalo, em ordem. Vazio se `to < from`.
    pub fn days(&self) -> Vec<NaiveDate> {
        self.from.iter_days().take_while(|d| *d <= self.end()).collect()
    }
}

/// Query string `?from=yyyy-MM-dd&to=yyyy-MM-dd`.
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RangeQuery {
    #[param(value_type = Option<String>, format = Date)]
    pub from: Option<NaiveDate>,
    #[param(value_type = Option<String>, format = Date)]
    pub to: Option<NaiveDate>,
}

impl RangeQuery {
    // Sem `from`, vale o mês corrente (o `to` solto é ignorado)
    pub fn resolve(self, today: NaiveDate) -> Result<DateRange, AppError> {
        let Some(from) = self.from else {
            return Ok(DateRange::current_month(today));
        };
        let range = DateRange::new(from, self.to);
        if range.end() < range.from {
            return Err(field_error("to", "range", "A data final não pode ser anterior à inicial."));
        }
        if (range.end() - range.from).num_days() >= MAX_RANGE_DAYS {
            return Err(field_error("to", "range", "O período pode ter no máximo 366 dias."));
        }
        Ok(range)
    }
}

/// Valor do período e variação percentual contra o período anterior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetricCard {
    pub current: Decimal,
    pub previous: Decimal,
    pub percentage_change: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
    pub name: String,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HourBucket {
    // "09:00"
    pub hour: String,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodTotal {
    pub method: String,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyPoint {
    #[schema(value_type = String, format = Date)]
    pub date: NaiveDate,
    // "dd/MM"
    pub label: String,
    pub revenue: Decimal,
    pub expenses: Decimal,
}

// Painel Financeiro: cards, gráficos e lançamentos do período
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub range: DateRange,
    pub previous_range: DateRange,
    pub gross_revenue: MetricCard,
    pub total_commissions: Decimal,
    pub standalone_expenses: Decimal,
    pub total_expenses: MetricCard,
    pub net_profit: MetricCard,
    pub revenue_by_payment_method: Vec<PaymentMethodTotal>,
    pub daily_series: Vec<DailyPoint>,
    pub expenses: Vec<Expense>,
}

// Relatórios: KPIs e rankings do período
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub range: DateRange,
    pub previous_range: DateRange,
    pub total_appointments: MetricCard,
    pub gross_revenue: MetricCard,
    pub top_services: Vec<RankingEntry>,
    pub top_barbers: Vec<RankingEntry>,
    pub busiest_hours: Vec<HourBucket>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
    }

    #[test]
    fn range_end_defaults_to_from() {
        let range = DateRange::new(d(10), None);
        assert_eq!(range.end(), d(10));
        assert_eq!(range.days(), vec![d(10)]);
    }

    #[test]
    fn contains_is_inclusive_until_end_of_day() {
        let range = DateRange::new(d(10), Some(d(12)));
        assert!(range.contains(d(10).and_hms_opt(0, 0, 0).unwrap()));
        assert!(range.contains(d(12).and_hms_milli_opt(23, 59, 59, 999).unwrap()));
        assert!(!range.contains(d(13).and_hms_opt(0, 0, 0).unwrap()));
        assert!(!range.contains(d(9).and_hms_opt(23, 59, 0).unwrap()));
    }

    #[test]
    fn inverted_range_has_no_days() {
        assert!(DateRange::new(d(12), Some(d(10))).days().is_empty());
    }

    #[test]
    fn current_month_spans_whole_month() {
        assert_eq!(DateRange::current_month(d(17)), DateRange::new(d(1), Some(d(31))));
        let feb = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        assert_eq!(
            DateRange::current_month(feb).end(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn query_without_from_defaults_to_current_month() {
        let query = RangeQuery { from: None, to: Some(d(3)) };
        assert_eq!(query.resolve(d(17)).unwrap(), DateRange::new(d(1), Some(d(31))));

        let query = RangeQuery { from: Some(d(5)), to: None };
        assert_eq!(query.resolve(d(17)).unwrap(), DateRange::new(d(5), None));
    }

    #[test]
    fn inverted_query_is_rejected_on_to() {
        let query = RangeQuery { from: Some(d(12)), to: Some(d(10)) };
        match query.resolve(d(17)) {
            Err(AppError::ValidationError(errors)) => {
                assert!(errors.field_errors().contains_key("to"));
            }
            other => panic!("esperava erro de validação, veio {other:?}"),
        }
    }

    #[test]
    fn range_is_capped_at_one_year() {
        let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let full_year = RangeQuery { from: Some(from), to: NaiveDate::from_ymd_opt(2024, 12, 31) };
        assert!(full_year.resolve(d(17)).is_ok());

        let too_long = RangeQuery { from: Some(from), to: NaiveDate::from_ymd_opt(2025, 1, 1) };
        assert!(matches!(too_long.resolve(d(17)), Err(AppError::ValidationError(_))));

        let whole_calendar = RangeQuery {
            from: NaiveDate::from_ymd_opt(1, 1, 1),
            to: NaiveDate::from_ymd_opt(9999, 12, 31),
        };
        assert!(whole_calendar.resolve(d(17)).is_err());
    }
}
