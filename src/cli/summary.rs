use super::{goals, ui};
use crate::core::{Session, Theme};
use crate::core::analytics::{self, BudgetHealth, Summary};
use crate::core::currency::Converter;
use chrono::NaiveDate;
use comfy_table::Cell;

impl Summary {
    pub fn display_as_table(&self, converter: &Converter, theme: Theme) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![ui::header_cell("", theme), ui::header_cell("Amount", theme)]);

        table.add_row(vec![
            Cell::new("Today's Spending"),
            ui::amount_cell(converter.format(self.today)),
        ]);
        table.add_row(vec![
            Cell::new("Total Spent"),
            ui::amount_cell(converter.format(self.total)),
        ]);
        table.add_row(vec![
            Cell::new("Remaining Budget"),
            ui::health_cell(converter.format(self.budget.remaining), self.budget.health),
        ]);
        table.add_row(vec![
            Cell::new("Total Budget"),
            ui::amount_cell(converter.format(self.budget.budget)),
        ]);
        table.add_row(vec![
            Cell::new("Monthly Goal"),
            ui::amount_cell(converter.format(self.goal.as_ref().map_or(0.0, |g| g.goal))),
        ]);
        table.add_row(vec![
            Cell::new("Daily Limit"),
            ui::amount_cell(converter.format(self.daily_limit.unwrap_or(0.0))),
        ]);

        table.to_string()
    }
}

fn category_table(session: &Session, converter: &Converter) -> Option<String> {
    let breakdown = analytics::group_by_category(&session.ledger().expenses, converter);
    if breakdown.is_empty() {
        return None;
    }

    let theme = session.settings().theme;
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Category", theme),
        ui::header_cell("Spent", theme),
        ui::header_cell("Share (%)", theme),
    ]);
    for (category, group) in breakdown {
        let (name, icon) = category.display_info();
        table.add_row(vec![
            Cell::new(format!("{icon} {name}")),
            ui::amount_cell(converter.format(group.total)),
            ui::amount_cell(format!("{:.1}%", group.percent)),
        ]);
    }
    Some(table.to_string())
}

/// Renders the dashboard for the active user.
pub fn render(session: &Session, today: NaiveDate) -> String {
    let converter = session.converter();
    let summary = session.summary(today);

    let mut output = format!(
        "Dashboard: {}\n\n",
        ui::style_text(session.user(), ui::StyleType::Title)
    );
    output.push_str(&summary.display_as_table(&converter, session.settings().theme));

    let health = match summary.budget.health {
        BudgetHealth::Healthy => "on track",
        BudgetHealth::Critical => "below 20% of budget",
    };
    output.push_str(&format!(
        "\nBudget status: {}",
        ui::style_text(health, ui::health_style(summary.budget.health))
    ));

    if let Some(notice) = goals::limit_notice(session, today) {
        output.push_str(&format!("\n{notice}"));
    }

    if let Some(table) = category_table(session, &converter) {
        output.push_str(&format!(
            "\n\n{}\n{}",
            ui::style_text("Spending by Category", ui::StyleType::TotalLabel),
            table
        ));
    }

    output.push_str(&format!(
        "\n\nExpenses: {}  Currency: {}",
        ui::style_text(&session.ledger().len().to_string(), ui::StyleType::TotalLabel),
        ui::style_text(converter.currency().code(), ui::StyleType::TotalLabel),
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CurrencyTable, ExpenseDraft};
    use crate::store::MemoryStore;

    #[test]
    fn test_render_dashboard_figures() {
        let store = MemoryStore::new();
        let mut session =
            Session::open(&store, "demo@example.com", CurrencyTable::default(), 1000.0).unwrap();
        session
            .add_expense(&ExpenseDraft {
                amount: "200".to_string(),
                category: "food".to_string(),
                description: "Dinner".to_string(),
                date: "2026-10-19".to_string(),
            })
            .unwrap();

        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let out = console::strip_ansi_codes(&render(&session, today)).to_string();
        assert!(out.contains("₹200.00"));
        assert!(out.contains("₹800.00"));
        assert!(out.contains("₹1,000.00"));
        assert!(out.contains("Food & Dining"));
        // Unset goal and limit
        assert!(out.contains("₹0.00"));
    }

    #[test]
    fn test_goal_and_limit_are_shown_in_display_currency() {
        let store = MemoryStore::new();
        let mut session =
            Session::open(&store, "demo@example.com", CurrencyTable::default(), 50000.0).unwrap();
        session.set_currency("USD").unwrap();
        session.set_goal("10").unwrap();
        session.set_daily_limit("5").unwrap();

        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let out = console::strip_ansi_codes(&render(&session, today)).to_string();
        assert!(out.contains("$10.00"));
        assert!(out.contains("$5.00"));
        assert!(out.contains("$600.00"));
    }

    #[test]
    fn test_render_empty_dashboard() {
        let store = MemoryStore::new();
        let session =
            Session::open(&store, "demo@example.com", CurrencyTable::default(), 50000.0).unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let out = console::strip_ansi_codes(&render(&session, today)).to_string();
        assert!(out.contains("₹50,000.00"));
        assert!(!out.contains("Spending by Category"));
    }
}
