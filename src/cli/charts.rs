use super::ui;
use crate::core::Session;
use crate::core::analytics::{self, GroupTotal};
use chrono::NaiveDate;
use comfy_table::Cell;

const BAR_WIDTH: usize = 40;

/// `2026-10` as `Oct '26`. Unparsable keys are shown as is.
fn month_label(key: &str) -> String {
    NaiveDate::parse_from_str(&format!("{key}-01"), "%Y-%m-%d")
        .map(|d| d.format("%b '%y").to_string())
        .unwrap_or_else(|_| key.to_string())
}

fn day_label(key: &str) -> String {
    NaiveDate::parse_from_str(key, "%Y-%m-%d")
        .map(|d| d.format("%-d %b").to_string())
        .unwrap_or_else(|_| key.to_string())
}

fn render_bars(
    session: &Session,
    title: &str,
    groups: &[GroupTotal],
    label: fn(&str) -> String,
) -> String {
    let converter = session.converter();
    let theme = session.settings().theme;
    let max = groups.iter().map(|g| g.total).fold(0.0, f64::max);

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Period", theme),
        ui::header_cell("", theme),
        ui::header_cell("Spent", theme),
        ui::header_cell("Share (%)", theme),
    ]);
    for group in groups {
        let len = analytics::bar_length(group.total, max, BAR_WIDTH);
        table.add_row(vec![
            Cell::new(label(&group.key)),
            ui::bar_cell(len, BAR_WIDTH, theme),
            ui::amount_cell(converter.format(group.total)),
            ui::amount_cell(format!("{:.1}%", group.percent)),
        ]);
    }

    format!(
        "{}\n\n{}",
        ui::style_text(title, ui::StyleType::Title),
        table
    )
}

/// Spend per day, oldest first.
pub fn daily(session: &Session) -> String {
    let groups = analytics::group_by_date(&session.ledger().expenses, &session.converter());
    if groups.is_empty() {
        return "No spending data available".to_string();
    }
    render_bars(session, "Daily Spending", &groups, day_label)
}

/// Spend per calendar month, oldest first.
pub fn monthly(session: &Session) -> String {
    let groups = analytics::group_by_month(&session.ledger().expenses, &session.converter());
    if groups.is_empty() {
        return "No monthly data available".to_string();
    }
    render_bars(session, "Monthly Spending", &groups, month_label)
}
