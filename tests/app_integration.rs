use expenseflow::core::config::AppConfig;
use expenseflow::core::{Category, Currency, CurrencyTable, Session, Theme, ValidationError};
use expenseflow::store::{self, KeyValueStore};
use expenseflow::{AppCommand, ChartKind, ThemeAction};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tracing::info;

const USER: &str = "demo@example.com";

mod test_utils {
    use std::fs;
    use std::path::{Path, PathBuf};

    /// Writes a config pointing the store at `dir` and returns its path.
    pub fn write_config(dir: &Path) -> PathBuf {
        let config_path = dir.join("config.yaml");
        let yaml = format!(
            r#"
user: "demo@example.com"
default_budget: 1000
data_path: "{}"
"#,
            dir.join("data").display()
        );
        fs::write(&config_path, yaml).expect("Failed to write test config");
        config_path
    }
}

fn run(config: &Path, command: AppCommand) -> anyhow::Result<()> {
    expenseflow::run_command(command, config.to_str(), None)
}

fn add(config: &Path, amount: &str, category: &str, description: &str, date: &str) {
    run(
        config,
        AppCommand::Add {
            amount: amount.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            date: Some(date.to_string()),
        },
    )
    .expect("add should succeed");
}

/// Opens the persisted state directly, bypassing the command layer.
fn with_session<T>(config: &Path, f: impl FnOnce(&Session) -> T) -> T {
    let config = AppConfig::load_from_path(config).unwrap();
    let store = store::open(&config).unwrap();
    let session = Session::open(&store, USER, CurrencyTable::default(), config.default_budget).unwrap();
    f(&session)
}

#[test_log::test]
fn test_full_app_flow() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_utils::write_config(temp_dir.path());

    add(&config, "200", "food", "Dinner", "2026-10-19");
    add(&config, "350.75", "transport", "Cab to airport", "2026-10-18");
    add(&config, "1200", "bills", "Electricity", "2026-09-30");

    let (ids, budget) = with_session(&config, |s| {
        let ids: Vec<String> = s.ledger().expenses.iter().map(|e| e.short_id()).collect();
        (ids, s.ledger().total_budget)
    });
    info!(?ids, "Stored expenses");
    assert_eq!(ids.len(), 3);
    assert_eq!(budget, 1000.0);

    for command in [
        AppCommand::Summary,
        AppCommand::List {
            category: Some("food".to_string()),
            date: None,
            today: false,
        },
        AppCommand::Chart {
            kind: ChartKind::Daily,
        },
        AppCommand::Chart {
            kind: ChartKind::Monthly,
        },
        AppCommand::Goals,
    ] {
        run(&config, command).expect("read-only command should succeed");
    }

    // Newest first, so the last one added is the Sep bill
    run(
        &config,
        AppCommand::Edit {
            id: ids[0].clone(),
            amount: "1100".to_string(),
            category: "bills".to_string(),
            description: "Electricity (corrected)".to_string(),
            date: "2026-09-30".to_string(),
        },
    )
    .unwrap();
    run(&config, AppCommand::Delete { id: ids[1].clone() }).unwrap();

    with_session(&config, |s| {
        let expenses = &s.ledger().expenses;
        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses[0].amount, 1100.0);
        assert_eq!(expenses[0].category, Category::Bills);
        assert_eq!(expenses[0].description, "Electricity (corrected)");
        assert_eq!(expenses[1].description, "Dinner");
    });

    let export_path = temp_dir.path().join("export.csv");
    run(
        &config,
        AppCommand::Export {
            output: Some(export_path.clone()),
        },
    )
    .unwrap();
    let csv = fs::read_to_string(&export_path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Date,Category,Description,Amount");
    assert_eq!(
        lines[1],
        r#"30 Sep 2026,Bills & Utilities,"Electricity (corrected)",1100"#
    );
    assert_eq!(lines[2], r#"19 Oct 2026,Food & Dining,"Dinner",200"#);
}

#[test_log::test]
fn test_settings_persist_across_runs() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_utils::write_config(temp_dir.path());

    run(&config, AppCommand::Budget { amount: "2500".to_string() }).unwrap();
    run(&config, AppCommand::Goal { amount: "900".to_string() }).unwrap();
    run(&config, AppCommand::Limit { amount: "150".to_string() }).unwrap();
    run(&config, AppCommand::Currency { code: "USD".to_string() }).unwrap();
    run(
        &config,
        AppCommand::Theme {
            action: ThemeAction::Toggle,
        },
    )
    .unwrap();

    with_session(&config, |s| {
        assert_eq!(s.ledger().total_budget, 2500.0);
        assert_eq!(s.settings().monthly_goal, Some(900.0));
        assert_eq!(s.settings().daily_limit, Some(150.0));
        assert_eq!(s.settings().currency, Currency::Usd);
        assert_eq!(s.settings().theme, Theme::Dark);
    });

    run(&config, AppCommand::Limit { amount: "none".to_string() }).unwrap();
    with_session(&config, |s| assert_eq!(s.settings().daily_limit, None));
}

#[test_log::test]
fn test_invalid_input_is_rejected_without_side_effects() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_utils::write_config(temp_dir.path());

    let err = run(
        &config,
        AppCommand::Add {
            amount: "abc".to_string(),
            category: "food".to_string(),
            description: "Tea".to_string(),
            date: None,
        },
    )
    .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ValidationError>(),
        Some(ValidationError::InvalidAmount(_))
    ));

    let err = run(
        &config,
        AppCommand::Add {
            amount: "10".to_string(),
            category: "food".to_string(),
            description: "   ".to_string(),
            date: None,
        },
    )
    .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ValidationError>(),
        Some(ValidationError::MissingField(_))
    ));

    let err = run(&config, AppCommand::Currency { code: "GBP".to_string() }).unwrap_err();
    assert!(err.downcast_ref::<ValidationError>().is_some());

    let err = run(&config, AppCommand::Export { output: None }).unwrap_err();
    assert_eq!(err.to_string(), "No expenses to export!");

    with_session(&config, |s| {
        assert!(s.ledger().is_empty());
        assert_eq!(s.settings().currency, Currency::Inr);
    });
}

#[test_log::test]
fn test_unknown_id_is_a_noop() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_utils::write_config(temp_dir.path());
    add(&config, "50", "other", "Stamps", "2026-10-01");

    run(&config, AppCommand::Delete { id: "zzzz".to_string() }).unwrap();
    with_session(&config, |s| assert_eq!(s.ledger().len(), 1));
}

#[test_log::test]
fn test_users_do_not_share_state() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = test_utils::write_config(temp_dir.path());
    add(&config_path, "75", "health", "Vitamins", "2026-10-10");

    expenseflow::run_command(AppCommand::Summary, config_path.to_str(), Some("test@example.com"))
        .unwrap();

    let config = AppConfig::load_from_path(&config_path).unwrap();
    let store = store::open(&config).unwrap();
    let other = Session::open(&store, "test@example.com", CurrencyTable::default(), 1000.0).unwrap();
    assert!(other.ledger().is_empty());
    assert!(store.get("expenseflow_demo@example.com").unwrap().is_some());
    assert!(store.get("expenseflow_test@example.com").unwrap().is_none());
}

#[test_log::test]
fn test_missing_explicit_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    let err = run(&temp_dir.path().join("nope.yaml"), AppCommand::Summary).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}
