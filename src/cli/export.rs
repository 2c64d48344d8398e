use crate::core::Session;
use crate::core::export::{default_file_name, write_csv};
use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Writes every record to `output`, or to a per-user file in the working
/// directory.
pub fn run(session: &Session, output: Option<PathBuf>, today: NaiveDate) -> Result<String> {
    let expenses = &session.ledger().expenses;
    if expenses.is_empty() {
        bail!("No expenses to export!");
    }

    let path = output.unwrap_or_else(|| PathBuf::from(default_file_name(session.user(), today)));
    let file = File::create(&path)
        .with_context(|| format!("Failed to create export file: {}", path.display()))?;
    write_csv(expenses, BufWriter::new(file))?;

    tracing::info!("Exported {} expenses to {}", expenses.len(), path.display());
    Ok(format!(
        "Expenses exported successfully to {}",
        path.display()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CurrencyTable, ExpenseDraft};
    use crate::store::MemoryStore;
    use tempfile::TempDir;

    #[test]
    fn test_export_writes_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("out.csv");
        let store = MemoryStore::new();
        let mut session = Session::open(&store, "demo@example.com", CurrencyTable::default(), 50000.0)?;
        session.add_expense(&ExpenseDraft {
            amount: "99.5".to_string(),
            category: "health".to_string(),
            description: "Pharmacy".to_string(),
            date: "2026-10-19".to_string(),
        })?;

        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let message = run(&session, Some(path.clone()), today)?;
        assert!(message.contains("out.csv"));

        let content = std::fs::read_to_string(&path)?;
        assert_eq!(
            content,
            "Date,Category,Description,Amount\n19 Oct 2026,Healthcare,\"Pharmacy\",99.5\n"
        );
        Ok(())
    }

    #[test]
    fn test_export_without_records_creates_nothing() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("out.csv");
        let store = MemoryStore::new();
        let session = Session::open(&store, "demo@example.com", CurrencyTable::default(), 50000.0)?;

        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let err = run(&session, Some(path.clone()), today).unwrap_err();
        assert_eq!(err.to_string(), "No expenses to export!");
        assert!(!path.exists());
        Ok(())
    }
}
