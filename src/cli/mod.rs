//! Terminal presentation of the session state.
pub mod charts;
pub mod expenses;
pub mod export;
pub mod goals;
pub mod settings;
pub mod setup;
pub mod summary;
pub mod ui;

use crate::core::Session;
use crate::{AppCommand, ChartKind};
use anyhow::Result;
use chrono::NaiveDate;

/// Runs `command` against the session and returns the text to print.
pub fn dispatch(session: &mut Session, command: AppCommand, today: NaiveDate) -> Result<String> {
    match command {
        AppCommand::Add {
            amount,
            category,
            description,
            date,
        } => expenses::add(session, amount, category, description, date, today),
        AppCommand::Edit {
            id,
            amount,
            category,
            description,
            date,
        } => expenses::edit(session, &id, amount, category, description, date, today),
        AppCommand::Delete { id } => expenses::delete(session, &id, today),
        AppCommand::List {
            category,
            date,
            today: only_today,
        } => expenses::list(session, category.as_deref(), date.as_deref(), only_today, today),
        AppCommand::Summary => Ok(summary::render(session, today)),
        AppCommand::Budget { amount } => settings::budget(session, &amount),
        AppCommand::Goal { amount } => settings::goal(session, &amount, today),
        AppCommand::Limit { amount } => settings::limit(session, &amount, today),
        AppCommand::Currency { code } => settings::currency(session, &code),
        AppCommand::Theme { action } => settings::theme(session, action),
        AppCommand::Chart { kind } => Ok(match kind {
            ChartKind::Daily => charts::daily(session),
            ChartKind::Monthly => charts::monthly(session),
        }),
        AppCommand::Goals => Ok(goals::render(session, today)),
        AppCommand::Export { output } => export::run(session, output, today),
    }
}
