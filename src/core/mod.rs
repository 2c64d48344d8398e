//! Core business logic: records, settings and the aggregation engine

pub mod analytics;
pub mod config;
pub mod currency;
pub mod error;
pub mod expense;
pub mod export;
pub mod ledger;
pub mod log;
pub mod milestones;
pub mod session;
pub mod settings;

// Re-export main types for cleaner imports
pub use currency::{Converter, Currency, CurrencyTable};
pub use error::ValidationError;
pub use expense::{Category, Expense, ExpenseDraft};
pub use ledger::Ledger;
pub use session::Session;
pub use settings::{Settings, Theme};
