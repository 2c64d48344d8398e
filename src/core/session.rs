//! The active user's session: records, settings and the store they live in.
//!
//! Every mutating operation validates its input first, then mutates, then
//! overwrites the stored state. A failed validation leaves both memory and
//! storage untouched.
use crate::core::analytics::{self, Summary};
use crate::core::currency::{Converter, Currency, CurrencyTable};
use crate::core::error::{parse_optional_positive, parse_positive, validate_email};
use crate::core::expense::{Expense, ExpenseDraft};
use crate::core::ledger::Ledger;
use crate::core::milestones::{self, Milestones};
use crate::core::settings::{Settings, Theme, parse_stored_amount};
use crate::store::KeyValueStore;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{debug, warn};

/// Storage keys, scoped per user by email.
pub mod keys {
    pub fn snapshot(email: &str) -> String {
        format!("expenseflow_{email}")
    }

    pub fn currency(email: &str) -> String {
        format!("expenseflow_currency_{email}")
    }

    pub fn goal(email: &str) -> String {
        format!("expenseflow_goal_{email}")
    }

    pub fn daily_limit(email: &str) -> String {
        format!("expenseflow_daily_limit_{email}")
    }

    pub fn theme(email: &str) -> String {
        format!("expenseflow_theme_{email}")
    }
}

pub struct Session<'a> {
    store: &'a dyn KeyValueStore,
    user: String,
    ledger: Ledger,
    settings: Settings,
    currencies: CurrencyTable,
}

impl<'a> Session<'a> {
    /// Restores the session for `email`. Missing or corrupt state falls back
    /// to defaults; only storage failures are errors.
    pub fn open(
        store: &'a dyn KeyValueStore,
        email: &str,
        currencies: CurrencyTable,
        default_budget: f64,
    ) -> Result<Self> {
        let user = validate_email(email)?;

        let ledger = match store.get(&keys::snapshot(&user))? {
            Some(snapshot) => Ledger::from_snapshot(&snapshot).unwrap_or_else(|| {
                warn!(user = %user, "Stored expenses are corrupt, starting fresh");
                Ledger::with_budget(default_budget)
            }),
            None => {
                debug!("No stored expenses for {user}");
                Ledger::with_budget(default_budget)
            }
        };

        let currency = match store.get(&keys::currency(&user))? {
            Some(code) => code.parse::<Currency>().unwrap_or_else(|e| {
                warn!(user = %user, "Ignoring stored currency: {e}");
                Currency::default()
            }),
            None => Currency::default(),
        };
        let theme = match store.get(&keys::theme(&user))? {
            Some(theme) => theme.parse::<Theme>().unwrap_or_default(),
            None => Theme::default(),
        };
        let settings = Settings {
            monthly_goal: parse_stored_amount(store.get(&keys::goal(&user))?.as_deref()),
            daily_limit: parse_stored_amount(store.get(&keys::daily_limit(&user))?.as_deref()),
            currency,
            theme,
        };

        debug!(
            "Opened session for {user}: {} expenses, settings {settings:?}",
            ledger.len()
        );
        Ok(Self {
            store,
            user,
            ledger,
            settings,
            currencies,
        })
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn converter(&self) -> Converter {
        self.currencies.converter(self.settings.currency)
    }

    fn save_ledger(&self) -> Result<()> {
        let snapshot = self
            .ledger
            .to_snapshot()
            .context("Failed to serialize expenses")?;
        self.store.put(&keys::snapshot(&self.user), &snapshot)
    }

    fn save_optional(&self, key: &str, value: Option<f64>) -> Result<()> {
        match value {
            Some(v) => self.store.put(key, &v.to_string()),
            None => self.store.remove(key),
        }
    }

    pub fn add_expense(&mut self, draft: &ExpenseDraft) -> Result<Expense> {
        let fields = draft.validate()?;
        let expense = self.ledger.add(fields).clone();
        self.save_ledger()?;
        debug!("Added expense {}", expense.id);
        Ok(expense)
    }

    /// Replaces every field of the record addressed by `id` (full id or
    /// unique prefix). Returns `None` when no record matches.
    pub fn edit_expense(&mut self, id: &str, draft: &ExpenseDraft) -> Result<Option<Expense>> {
        let fields = draft.validate()?;
        let Some(id) = self.ledger.resolve_id(id) else {
            debug!("Edit skipped, no expense matches {id}");
            return Ok(None);
        };
        self.ledger.edit(id, fields);
        self.save_ledger()?;
        Ok(self.ledger.get(id).cloned())
    }

    /// Removes the record addressed by `id`. Returns `None` when no record
    /// matches.
    pub fn delete_expense(&mut self, id: &str) -> Result<Option<Expense>> {
        let Some(id) = self.ledger.resolve_id(id) else {
            debug!("Delete skipped, no expense matches {id}");
            return Ok(None);
        };
        let removed = self.ledger.delete(id);
        self.save_ledger()?;
        Ok(removed)
    }

    pub fn set_budget(&mut self, input: &str) -> Result<f64> {
        let budget = parse_positive(input)?;
        self.ledger.total_budget = budget;
        self.save_ledger()?;
        Ok(budget)
    }

    pub fn set_goal(&mut self, input: &str) -> Result<Option<f64>> {
        let goal = parse_optional_positive(input)?;
        self.settings.monthly_goal = goal;
        self.save_optional(&keys::goal(&self.user), goal)?;
        Ok(goal)
    }

    pub fn set_daily_limit(&mut self, input: &str) -> Result<Option<f64>> {
        let limit = parse_optional_positive(input)?;
        self.settings.daily_limit = limit;
        self.save_optional(&keys::daily_limit(&self.user), limit)?;
        Ok(limit)
    }

    pub fn set_currency(&mut self, input: &str) -> Result<Currency> {
        let currency = input.parse::<Currency>()?;
        self.settings.currency = currency;
        self.store.put(&keys::currency(&self.user), currency.code())?;
        Ok(currency)
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<Theme> {
        self.settings.theme = theme;
        self.store.put(&keys::theme(&self.user), theme.as_str())?;
        Ok(theme)
    }

    pub fn toggle_theme(&mut self) -> Result<Theme> {
        self.set_theme(self.settings.theme.toggled())
    }

    pub fn summary(&self, today: NaiveDate) -> Summary {
        analytics::summarize(&self.ledger, &self.settings, &self.converter(), today)
    }

    pub fn milestones(&self, today: NaiveDate) -> Milestones {
        milestones::evaluate(&self.ledger, &self.settings, &self.converter(), today)
    }
}
