pub mod cli;
pub mod core;
pub mod store;

use crate::core::Session;
use crate::core::config::AppConfig;
use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Set(core::Theme),
    Toggle,
    Show,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Daily,
    Monthly,
}

#[derive(Debug, Clone)]
pub enum AppCommand {
    Add {
        amount: String,
        category: String,
        description: String,
        date: Option<String>,
    },
    Edit {
        id: String,
        amount: String,
        category: String,
        description: String,
        date: String,
    },
    Delete {
        id: String,
    },
    List {
        category: Option<String>,
        date: Option<String>,
        today: bool,
    },
    Summary,
    Budget {
        amount: String,
    },
    Goal {
        amount: String,
    },
    Limit {
        amount: String,
    },
    Currency {
        code: String,
    },
    Theme {
        action: ThemeAction,
    },
    Chart {
        kind: ChartKind,
    },
    Goals,
    Export {
        output: Option<PathBuf>,
    },
}

/// The current calendar date in UTC, which dates new records and anchors
/// "today" and the current month.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Runs one command for one user and prints its output.
pub fn run_command(
    command: AppCommand,
    config_path: Option<&str>,
    user: Option<&str>,
) -> Result<()> {
    info!("ExpenseFlow starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let user = user
        .map(str::to_string)
        .or_else(|| config.user.clone())
        .context("No user given; pass --user or set `user` in the config file")?;

    let store = store::open(&config)?;
    let mut session = Session::open(
        &store,
        &user,
        config.currencies.clone(),
        config.default_budget,
    )?;
    let today = today();

    let output = cli::dispatch(&mut session, command, today)?;
    println!("{output}");
    Ok(())
}
