use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use expenseflow::core::Theme;
use expenseflow::core::log::init_logging;
use expenseflow::{AppCommand, ChartKind, ThemeAction};
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    /// Email of the account to use, overrides `user` from the config
    #[arg(short, long, global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
    Toggle,
}

#[derive(Clone, Copy, Default, ValueEnum)]
enum ChartArg {
    #[default]
    Daily,
    Monthly,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Record a new expense
    Add {
        #[arg(short, long)]
        amount: String,
        #[arg(short = 'k', long)]
        category: String,
        #[arg(short, long)]
        description: String,
        /// Date as yyyy-mm-dd, defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Replace every field of an expense
    Edit {
        /// Full id or a unique prefix of it
        id: String,
        #[arg(short, long)]
        amount: String,
        #[arg(short = 'k', long)]
        category: String,
        #[arg(short, long)]
        description: String,
        #[arg(long)]
        date: String,
    },
    /// Delete an expense
    Delete {
        /// Full id or a unique prefix of it
        id: String,
    },
    /// List expenses, newest first
    List {
        /// Only this category (`all` for every category)
        #[arg(short = 'k', long)]
        category: Option<String>,
        /// Only this date, as yyyy-mm-dd
        #[arg(long, conflicts_with = "today")]
        date: Option<String>,
        /// Only today's expenses
        #[arg(long)]
        today: bool,
    },
    /// Display the spending dashboard
    Summary,
    /// Set the total budget, in INR
    Budget { amount: String },
    /// Set the monthly savings goal, or `none` to clear it
    Goal { amount: String },
    /// Set the daily spending limit, or `none` to clear it
    Limit { amount: String },
    /// Select the display currency (INR, USD, EUR)
    Currency { code: String },
    /// Show, set or toggle the color theme
    Theme {
        #[arg(value_enum)]
        action: Option<ThemeArg>,
    },
    /// Display a spending bar chart
    Chart {
        #[arg(value_enum, default_value_t)]
        kind: ChartArg,
    },
    /// Display goal progress and badges
    Goals,
    /// Export all expenses as CSV
    Export {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl From<Commands> for AppCommand {
    fn from(cmd: Commands) -> AppCommand {
        match cmd {
            Commands::Add {
                amount,
                category,
                description,
                date,
            } => AppCommand::Add {
                amount,
                category,
                description,
                date,
            },
            Commands::Edit {
                id,
                amount,
                category,
                description,
                date,
            } => AppCommand::Edit {
                id,
                amount,
                category,
                description,
                date,
            },
            Commands::Delete { id } => AppCommand::Delete { id },
            Commands::List {
                category,
                date,
                today,
            } => AppCommand::List {
                category,
                date,
                today,
            },
            Commands::Summary => AppCommand::Summary,
            Commands::Budget { amount } => AppCommand::Budget { amount },
            Commands::Goal { amount } => AppCommand::Goal { amount },
            Commands::Limit { amount } => AppCommand::Limit { amount },
            Commands::Currency { code } => AppCommand::Currency { code },
            Commands::Theme { action } => AppCommand::Theme {
                action: match action {
                    Some(ThemeArg::Light) => ThemeAction::Set(Theme::Light),
                    Some(ThemeArg::Dark) => ThemeAction::Set(Theme::Dark),
                    Some(ThemeArg::Toggle) => ThemeAction::Toggle,
                    None => ThemeAction::Show,
                },
            },
            Commands::Chart { kind } => AppCommand::Chart {
                kind: match kind {
                    ChartArg::Daily => ChartKind::Daily,
                    ChartArg::Monthly => ChartKind::Monthly,
                },
            },
            Commands::Goals => AppCommand::Goals,
            Commands::Export { output } => AppCommand::Export { output },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => expenseflow::cli::setup::setup().map(|path| {
            println!("Created configuration at {}", path.display());
        }),
        Some(cmd) => expenseflow::run_command(
            cmd.into(),
            cli.config_path.as_deref(),
            cli.user.as_deref(),
        ),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
