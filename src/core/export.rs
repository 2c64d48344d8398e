//! CSV export of the expense records
use crate::core::expense::Expense;
use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct ExportRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Category")]
    category: &'static str,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Amount")]
    amount: String,
}

/// Human form of a date, e.g. `5 Oct 2026`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

/// Only the free-text description is quoted; embedded quotes are doubled.
fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

/// Writes one row per record in collection order. Amounts stay in the base
/// unit, without a trailing `.0` for whole numbers.
pub fn write_csv<W: Write>(expenses: &[Expense], writer: W) -> Result<()> {
    if expenses.is_empty() {
        bail!("No expenses to export!");
    }

    let mut csv = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_writer(writer);
    for expense in expenses {
        csv.serialize(ExportRow {
            date: format_date(expense.date),
            category: expense.category.name(),
            description: quote(&expense.description),
            amount: expense.amount.to_string(),
        })
        .context("Failed to serialize export row")?;
    }
    csv.flush().context("Failed to finalize export")?;
    Ok(())
}

/// Default export file name for `user` on `today`.
pub fn default_file_name(user: &str, today: NaiveDate) -> String {
    let name = user.split('@').next().unwrap_or(user).replace(' ', "_");
    format!("expenses_{}_{}.csv", name, today.format("%Y-%m-%d"))
}
