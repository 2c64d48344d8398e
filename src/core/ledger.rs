//! The in-memory record store of the active user.
use crate::core::expense::{Category, Expense, ExpenseFields};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

pub const DEFAULT_BUDGET: f64 = 50000.0;

/// Ordered expense records (newest first) plus the total budget, persisted
/// together as one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawSnapshot")]
pub struct Ledger {
    pub expenses: Vec<Expense>,
    pub total_budget: f64,
}

/// Stored shape, where either field may be absent or `null`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSnapshot {
    expenses: Option<Vec<Expense>>,
    total_budget: Option<f64>,
}

impl From<RawSnapshot> for Ledger {
    fn from(raw: RawSnapshot) -> Self {
        let total_budget = match raw.total_budget {
            Some(budget) if budget.is_finite() && budget > 0.0 => budget,
            other => {
                debug!("Snapshot has invalid budget {other:?}");
                DEFAULT_BUDGET
            }
        };
        Ledger {
            expenses: raw.expenses.unwrap_or_default(),
            total_budget,
        }
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::with_budget(DEFAULT_BUDGET)
    }
}

impl Ledger {
    pub fn with_budget(total_budget: f64) -> Self {
        Self {
            expenses: Vec::new(),
            total_budget,
        }
    }

    /// Restores a ledger from its JSON snapshot. Returns `None` when the
    /// snapshot is malformed. A missing, `null` or non-positive budget falls
    /// back to the default and keeps the records.
    pub fn from_snapshot(snapshot: &str) -> Option<Self> {
        match serde_json::from_str::<Ledger>(snapshot) {
            Ok(ledger) => Some(ledger),
            Err(e) => {
                debug!("Snapshot parse error: {}", e);
                None
            }
        }
    }

    pub fn to_snapshot(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Adds a new record at the front and returns it.
    pub fn add(&mut self, fields: ExpenseFields) -> &Expense {
        self.expenses.insert(0, Expense::new(fields));
        &self.expenses[0]
    }

    /// Replaces all fields of the record with `id`. Returns `false` if no such
    /// record exists.
    pub fn edit(&mut self, id: Uuid, fields: ExpenseFields) -> bool {
        match self.expenses.iter_mut().find(|e| e.id == id) {
            Some(expense) => {
                expense.apply(fields);
                true
            }
            None => false,
        }
    }

    /// Removes the record with `id`, returning it if present.
    pub fn delete(&mut self, id: Uuid) -> Option<Expense> {
        let index = self.expenses.iter().position(|e| e.id == id)?;
        Some(self.expenses.remove(index))
    }

    /// Resolves a full id or a unique id prefix. Ambiguous prefixes resolve
    /// to nothing.
    pub fn resolve_id(&self, needle: &str) -> Option<Uuid> {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        if let Ok(id) = Uuid::parse_str(&needle) {
            return self.get(id).map(|e| e.id);
        }
        let simple = needle.replace('-', "");
        let mut matches = self
            .expenses
            .iter()
            .filter(|e| e.id.simple().to_string().starts_with(&simple));
        match (matches.next(), matches.next()) {
            (Some(expense), None) => Some(expense.id),
            _ => None,
        }
    }

    /// Records matching an optional date, then an optional category.
    pub fn filtered(&self, date: Option<NaiveDate>, category: Option<Category>) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|e| date.is_none_or(|d| e.date == d))
            .filter(|e| category.is_none_or(|c| e.category == c))
            .collect()
    }
}
