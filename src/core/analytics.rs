//! Provides functions for deriving totals and progress from expense records.
//!
//! Everything here is recomputed from the raw records on each call. Amounts
//! are stored in the base unit and converted through a [`Converter`] right
//! before they are summed for display.
use crate::core::currency::Converter;
use crate::core::expense::{Category, Expense};
use crate::core::ledger::Ledger;
use crate::core::settings::Settings;
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;
use tracing::debug;

/// Share of the budget below which the remaining amount is flagged.
const CRITICAL_SHARE: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetHealth {
    Healthy,
    Critical,
}

/// Budget against spend, both in the display currency.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    pub budget: f64,
    pub spent: f64,
    pub remaining: f64,
    pub health: BudgetHealth,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GoalProgress {
    pub goal: f64,
    pub spent: f64,
    /// Headroom left under the goal, never negative.
    pub savings: f64,
    /// Always within `[0, 100]`.
    pub percent: f64,
}

/// One bucket of a chart breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupTotal {
    pub key: String,
    pub total: f64,
    pub percent: f64,
}

/// Everything the dashboard shows, for one reference date.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub today: f64,
    pub total: f64,
    pub monthly: f64,
    pub budget: BudgetStatus,
    pub goal: Option<GoalProgress>,
    pub daily_limit: Option<f64>,
    pub limit_breached: bool,
}

/// Converted sum of all amounts.
pub fn total_spent(expenses: &[Expense], converter: &Converter) -> f64 {
    converter.convert(expenses.iter().map(|e| e.amount).sum())
}

/// Unconverted sum of amounts dated `date`.
pub fn raw_spent_on(expenses: &[Expense], date: NaiveDate) -> f64 {
    expenses
        .iter()
        .filter(|e| e.date == date)
        .map(|e| e.amount)
        .sum()
}

/// Converted sum of amounts dated `date`.
pub fn spent_on(expenses: &[Expense], converter: &Converter, date: NaiveDate) -> f64 {
    converter.convert(raw_spent_on(expenses, date))
}

/// Converted sum of the calendar month containing `reference`.
pub fn monthly_spent(expenses: &[Expense], converter: &Converter, reference: NaiveDate) -> f64 {
    expenses
        .iter()
        .filter(|e| e.date.year() == reference.year() && e.date.month() == reference.month())
        .map(|e| converter.convert(e.amount))
        .sum()
}

pub fn budget_status(ledger: &Ledger, converter: &Converter) -> BudgetStatus {
    let budget = converter.convert(ledger.total_budget);
    let spent = total_spent(&ledger.expenses, converter);
    let remaining = budget - spent;
    let health = if remaining < 0.0 || remaining < budget * CRITICAL_SHARE {
        BudgetHealth::Critical
    } else {
        BudgetHealth::Healthy
    };
    BudgetStatus {
        budget,
        spent,
        remaining,
        health,
    }
}

pub fn goal_progress(goal: Option<f64>, monthly_spent: f64) -> Option<GoalProgress> {
    let goal = goal.filter(|g| *g > 0.0)?;
    let savings = (goal - monthly_spent).max(0.0);
    let percent = (savings / goal * 100.0).min(100.0);
    Some(GoalProgress {
        goal,
        spent: monthly_spent,
        savings,
        percent,
    })
}

/// True only when a limit is set and today's spend is strictly above it.
pub fn daily_limit_breached(limit: Option<f64>, today_spent: f64) -> bool {
    limit.is_some_and(|l| today_spent > l)
}

fn group_by<F>(expenses: &[Expense], converter: &Converter, key_fn: F) -> Vec<GroupTotal>
where
    F: Fn(&Expense) -> String,
{
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for expense in expenses {
        *totals.entry(key_fn(expense)).or_default() += converter.convert(expense.amount);
    }
    let grand_total: f64 = totals.values().sum();
    debug!("Grouped {} records into {} buckets", expenses.len(), totals.len());

    totals
        .into_iter()
        .map(|(key, total)| GroupTotal {
            key,
            total,
            percent: if grand_total > 0.0 {
                total / grand_total * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

/// Totals per ISO date, oldest first.
pub fn group_by_date(expenses: &[Expense], converter: &Converter) -> Vec<GroupTotal> {
    group_by(expenses, converter, |e| e.date.format("%Y-%m-%d").to_string())
}

/// Totals per `yyyy-mm`, oldest first.
pub fn group_by_month(expenses: &[Expense], converter: &Converter) -> Vec<GroupTotal> {
    group_by(expenses, converter, |e| e.date.format("%Y-%m").to_string())
}

/// Totals per category, in category order. Only categories with records appear.
pub fn group_by_category(expenses: &[Expense], converter: &Converter) -> Vec<(Category, GroupTotal)> {
    let grouped = group_by(expenses, converter, |e| e.category.key().to_string());
    let mut by_category: Vec<(Category, GroupTotal)> = grouped
        .into_iter()
        .map(|g| (Category::from(g.key.as_str()), g))
        .collect();
    by_category.sort_by_key(|(c, _)| *c);
    by_category
}

/// Length of a bar scaled against the largest value, which is at least 1.
pub fn bar_length(value: f64, max_value: f64, width: usize) -> usize {
    let scale = max_value.max(1.0);
    ((value / scale) * width as f64).round().clamp(0.0, width as f64) as usize
}

/// Computes the dashboard figures for `today`.
pub fn summarize(
    ledger: &Ledger,
    settings: &Settings,
    converter: &Converter,
    today: NaiveDate,
) -> Summary {
    let today_spent = spent_on(&ledger.expenses, converter, today);
    let monthly = monthly_spent(&ledger.expenses, converter, today);
    let budget = budget_status(ledger, converter);

    Summary {
        today: today_spent,
        total: budget.spent,
        monthly,
        goal: goal_progress(settings.monthly_goal, monthly),
        daily_limit: settings.daily_limit,
        limit_breached: daily_limit_breached(settings.daily_limit, today_spent),
        budget,
    }
}
