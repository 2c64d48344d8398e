use super::ui;
use crate::core::Session;
use crate::core::analytics;
use chrono::NaiveDate;

const PROGRESS_WIDTH: usize = 30;

/// Warning line shown while today's spend is above the daily limit.
pub fn limit_notice(session: &Session, today: NaiveDate) -> Option<String> {
    let summary = session.summary(today);
    if !summary.limit_breached {
        return None;
    }
    let limit = summary.daily_limit?;
    Some(ui::style_text(
        &format!(
            "⚠️  You have exceeded your daily limit of {}!",
            session.converter().format(limit)
        ),
        ui::StyleType::Warning,
    ))
}

fn goal_section(session: &Session, today: NaiveDate) -> String {
    let converter = session.converter();
    let theme = session.settings().theme;
    let summary = session.summary(today);

    let mut output = ui::style_text("Monthly Savings Goal", ui::StyleType::TotalLabel);
    match summary.goal {
        Some(progress) => {
            let filled = analytics::bar_length(progress.percent, 100.0, PROGRESS_WIDTH);
            output.push_str(&format!(
                "\n{} {:.0}%\nSaved: {} / Goal: {}\nSpent this month: {}",
                ui::bar(filled, PROGRESS_WIDTH, theme),
                progress.percent,
                converter.format(progress.savings),
                converter.format(progress.goal),
                converter.format(progress.spent),
            ));
        }
        None => output.push_str(&format!(
            "\n{}",
            ui::style_text("No monthly goal set. Use `goal <amount>`.", ui::StyleType::Subtle)
        )),
    }

    output.push_str(&format!(
        "\n\n{}\n",
        ui::style_text("Daily Limit", ui::StyleType::TotalLabel)
    ));
    match summary.daily_limit {
        Some(limit) => {
            output.push_str(&format!(
                "Today: {} / Limit: {}",
                converter.format(summary.today),
                converter.format(limit)
            ));
            if let Some(notice) = limit_notice(session, today) {
                output.push_str(&format!("\n{notice}"));
            }
        }
        None => output.push_str(&ui::style_text(
            "No daily limit set. Use `limit <amount>`.",
            ui::StyleType::Subtle,
        )),
    }
    output
}

fn badge_section(session: &Session, today: NaiveDate) -> String {
    let milestones = session.milestones(today);
    let mut output = ui::style_text("Achievements", ui::StyleType::TotalLabel);
    if milestones.badges.is_empty() {
        output.push_str("\nNo badges yet. Keep tracking!");
    }
    for badge in &milestones.badges {
        output.push_str(&format!(
            "\n{} {} (+{})",
            badge.icon(),
            badge.label(),
            badge.points()
        ));
    }
    output.push_str(&format!(
        "\nPoints: {}",
        ui::style_text(&milestones.points.to_string(), ui::StyleType::Healthy)
    ));
    output
}

/// Renders goal progress, the daily limit and earned badges.
pub fn render(session: &Session, today: NaiveDate) -> String {
    format!(
        "{}\n\n{}\n{}\n\n{}",
        ui::style_text("Goals & Milestones", ui::StyleType::Title),
        goal_section(session, today),
        ui::separator(),
        badge_section(session, today)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CurrencyTable, ExpenseDraft};
    use crate::store::MemoryStore;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn spend(session: &mut Session, amount: &str) {
        session
            .add_expense(&ExpenseDraft {
                amount: amount.to_string(),
                category: "shopping".to_string(),
                description: "Shoes".to_string(),
                date: "2026-10-19".to_string(),
            })
            .unwrap();
    }

    #[test]
    fn test_limit_notice_only_when_breached() {
        let store = MemoryStore::new();
        let mut session =
            Session::open(&store, "demo@example.com", CurrencyTable::default(), 50000.0).unwrap();
        session.set_daily_limit("500").unwrap();
        spend(&mut session, "500");
        assert!(limit_notice(&session, today()).is_none());

        spend(&mut session, "1");
        let notice = limit_notice(&session, today()).unwrap();
        assert!(console::strip_ansi_codes(&notice).contains("daily limit of ₹500.00"));
    }

    #[test]
    fn test_render_goal_progress_and_points() {
        let store = MemoryStore::new();
        let mut session =
            Session::open(&store, "demo@example.com", CurrencyTable::default(), 50000.0).unwrap();
        session.set_goal("1000").unwrap();
        spend(&mut session, "250");

        let out = console::strip_ansi_codes(&render(&session, today())).to_string();
        assert!(out.contains("Saved: ₹750.00 / Goal: ₹1,000.00"));
        assert!(out.contains("75%"));
        assert!(out.contains("Goal Achiever"));
        // Goal Achiever + Goal Set + Budget Keeper
        assert!(out.contains("Points: 140"));
    }
}
