// src/services/aggregation.rs
//
// Agregações do Financeiro e dos Relatórios. Tudo puro: mesmas coleções e
// mesmo período => mesmo resultado.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate, Timelike};
use rust_decimal::Decimal;

use crate::models::{
    appointment::Appointment,
    barber::Barber,
    expense::Expense,
    report::{
        DailyPoint, DateRange, FinancialSummary, HourBucket, MetricCard, PaymentMethodTotal,
        RankingEntry, ReportSummary,
    },
};
use crate::services::calendar::{DAY_END_HOUR, DAY_START_HOUR};

pub const TOP_SERVICES: usize = 5;
pub const TOP_BARBERS: usize = 4;

/// Agendamentos do período, sem os cancelados.
pub fn filter_appointments<'a>(appointments: &'a [Appointment], range: &DateRange) -> Vec<&'a Appointment> {
    appointments
        .iter()
        .filter(|a| !a.is_canceled() && range.contains(a.start))
        .collect()
}

pub fn filter_expenses<'a>(expenses: &'a [Expense], range: &DateRange) -> Vec<&'a Expense> {
    expenses.iter().filter(|e| range.contains_date(e.date)).collect()
}

fn confirmed<'a, 'b>(appointments: &'b [&'a Appointment]) -> impl Iterator<Item = &'a Appointment> + 'b {
    appointments.iter().copied().filter(|a| a.is_confirmed())
}

pub fn gross_revenue(appointments: &[&Appointment]) -> Decimal {
    confirmed(appointments).map(|a| a.price).sum()
}

/// price × comissão/100, se o barbeiro existe e tem comissão > 0.
pub fn commission_for(appointment: &Appointment, barbers: &[Barber]) -> Decimal {
    barbers
        .iter()
        .find(|b| b.id == appointment.barber_id)
        .filter(|b| b.commission > Decimal::ZERO)
        .map(|b| appointment.price * b.commission / Decimal::ONE_HUNDRED)
        .unwrap_or(Decimal::ZERO)
}

pub fn total_commissions(appointments: &[&Appointment], barbers: &[Barber]) -> Decimal {
    confirmed(appointments).map(|a| commission_for(a, barbers)).sum()
}

pub fn standalone_expenses(expenses: &[&Expense]) -> Decimal {
    expenses.iter().map(|e| e.amount).sum()
}

/// Período imediatamente anterior, com o mesmo número de dias. Encosta em
/// `NaiveDate::MIN` em vez de estourar.
pub fn previous_period(range: &DateRange) -> DateRange {
    let length = range.end() - range.from;
    let previous_end = range
        .from
        .checked_sub_signed(Duration::days(1))
        .unwrap_or(NaiveDate::MIN);
    let previous_start = previous_end
        .checked_sub_signed(length)
        .unwrap_or(NaiveDate::MIN);
    DateRange::new(previous_start, Some(previous_end))
}

/// ((atual - anterior) / anterior) × 100, arredondado em 2 casas.
/// Anterior zero: 100 se atual > 0, senão 0.
pub fn percentage_change(current: Decimal, previous: Decimal) -> Decimal {
    if previous.is_zero() {
        return if current > Decimal::ZERO { Decimal::ONE_HUNDRED } else { Decimal::ZERO };
    }
    ((current - previous) / previous * Decimal::ONE_HUNDRED).round_dp(2)
}

fn metric(current: Decimal, previous: Decimal) -> MetricCard {
    MetricCard {
        current,
        previous,
        percentage_change: percentage_change(current, previous),
    }
}

/// Contagem por nome, decrescente; empates mantêm a ordem de aparição.
fn rank_by<'a>(appointments: &[&'a Appointment], key: impl Fn(&'a Appointment) -> &'a str, limit: usize) -> Vec<RankingEntry> {
    let mut entries: Vec<RankingEntry> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for &appointment in appointments {
        let name = key(appointment);
        match index.get(name) {
            Some(&i) => entries[i].value += 1,
            None => {
                index.insert(name, entries.len());
                entries.push(RankingEntry { name: name.to_string(), value: 1 });
            }
        }
    }

    // sort_by é estável
    entries.sort_by(|a, b| b.value.cmp(&a.value));
    entries.truncate(limit);
    entries
}

pub fn top_services(appointments: &[&Appointment], limit: usize) -> Vec<RankingEntry> {
    rank_by(appointments, |a| a.service_name.as_str(), limit)
}

pub fn top_barbers(appointments: &[&Appointment], limit: usize) -> Vec<RankingEntry> {
    rank_by(appointments, |a| a.barber_name.as_str(), limit)
}

/// Agendamentos por hora cheia, 09:00 a 19:00, com zeros.
pub fn busiest_hours(appointments: &[&Appointment]) -> Vec<HourBucket> {
    (DAY_START_HOUR..=DAY_END_HOUR)
        .map(|hour| HourBucket {
            hour: format!("{hour:02}:00"),
            value: appointments.iter().filter(|a| a.start.hour() == hour).count(),
        })
        .collect()
}

pub fn revenue_by_payment_method(appointments: &[&Appointment]) -> Vec<PaymentMethodTotal> {
    let mut totals: Vec<PaymentMethodTotal> = Vec::new();

    for appointment in confirmed(appointments) {
        let Some(method) = appointment
            .payment_method
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
        else {
            continue;
        };

        match totals.iter_mut().find(|t| t.method == method) {
            Some(total) => total.total += appointment.price,
            None => totals.push(PaymentMethodTotal {
                method: method.to_string(),
                total: appointment.price,
            }),
        }
    }

    totals.sort_by(|a, b| b.total.cmp(&a.total));
    totals
}

/// Um ponto por dia do período: receita × (comissões + despesas do dia).
pub fn daily_series(
    appointments: &[&Appointment],
    expenses: &[&Expense],
    barbers: &[Barber],
    range: &DateRange,
) -> Vec<DailyPoint> {
    range
        .days()
        .into_iter()
        .map(|date| {
            let of_day: Vec<&Appointment> = appointments
                .iter()
                .copied()
                .filter(|a| a.start.date() == date)
                .collect();
            let day_expenses: Decimal = expenses
                .iter()
                .filter(|e| e.date == date)
                .map(|e| e.amount)
                .sum();

            DailyPoint {
                date,
                label: date.format("%d/%m").to_string(),
                revenue: gross_revenue(&of_day),
                expenses: total_commissions(&of_day, barbers) + day_expenses,
            }
        })
        .collect()
}

struct Totals {
    revenue: Decimal,
    commissions: Decimal,
    expenses: Decimal,
}

impl Totals {
    fn compute(appointments: &[Appointment], expenses: &[Expense], barbers: &[Barber], range: &DateRange) -> Self {
        let in_range = filter_appointments(appointments, range);
        let commissions = total_commissions(&in_range, barbers);
        Totals {
            revenue: gross_revenue(&in_range),
            commissions,
            expenses: standalone_expenses(&filter_expenses(expenses, range)),
        }
    }

    fn total_expenses(&self) -> Decimal {
        self.commissions + self.expenses
    }

    fn net_profit(&self) -> Decimal {
        self.revenue - self.total_expenses()
    }
}

pub fn financial_summary(
    appointments: &[Appointment],
    expenses: &[Expense],
    barbers: &[Barber],
    range: DateRange,
) -> FinancialSummary {
    let previous_range = previous_period(&range);
    let current = Totals::compute(appointments, expenses, barbers, &range);
    let previous = Totals::compute(appointments, expenses, barbers, &previous_range);

    let in_range = filter_appointments(appointments, &range);
    let expenses_in_range = filter_expenses(expenses, &range);

    // Lançamentos mais recentes primeiro
    let mut listed: Vec<Expense> = expenses_in_range.iter().map(|e| (*e).clone()).collect();
    listed.sort_by(|a, b| b.date.cmp(&a.date));

    FinancialSummary {
        range,
        previous_range,
        gross_revenue: metric(current.revenue, previous.revenue),
        total_commissions: current.commissions,
        standalone_expenses: current.expenses,
        total_expenses: metric(current.total_expenses(), previous.total_expenses()),
        net_profit: metric(current.net_profit(), previous.net_profit()),
        revenue_by_payment_method: revenue_by_payment_method(&in_range),
        daily_series: daily_series(&in_range, &expenses_in_range, barbers, &range),
        expenses: listed,
    }
}

pub fn report_summary(appointments: &[Appointment], range: DateRange) -> ReportSummary {
    let previous_range = previous_period(&range);
    let current = filter_appointments(appointments, &range);
    let previous = filter_appointments(appointments, &previous_range);

    ReportSummary {
        range,
        previous_range,
        total_appointments: metric(Decimal::from(current.len()), Decimal::from(previous.len())),
        gross_revenue: metric(gross_revenue(&current), gross_revenue(&previous)),
        top_services: top_services(&current, TOP_SERVICES),
        top_barbers: top_barbers(&current, TOP_BARBERS),
        busiest_hours: busiest_hours(&current),
    }
}
