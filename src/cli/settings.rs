use super::{goals, ui};
use crate::ThemeAction;
use crate::core::Session;
use anyhow::Result;
use chrono::NaiveDate;

pub fn budget(session: &mut Session, amount: &str) -> Result<String> {
    let budget = session.set_budget(amount)?;
    Ok(format!(
        "Budget updated to {}",
        ui::style_text(&session.converter().display(budget), ui::StyleType::TotalLabel)
    ))
}

pub fn goal(session: &mut Session, amount: &str, today: NaiveDate) -> Result<String> {
    let output = match session.set_goal(amount)? {
        Some(goal) => format!(
            "Monthly goal set to {}",
            ui::style_text(&session.converter().format(goal), ui::StyleType::TotalLabel)
        ),
        None => "Monthly goal cleared".to_string(),
    };
    let progress = session.summary(today).goal;
    Ok(match progress {
        Some(p) => format!("{output}\nSaved so far this month: {:.0}%", p.percent),
        None => output,
    })
}

pub fn limit(session: &mut Session, amount: &str, today: NaiveDate) -> Result<String> {
    let mut output = match session.set_daily_limit(amount)? {
        Some(limit) => format!(
            "Daily limit set to {}",
            ui::style_text(&session.converter().format(limit), ui::StyleType::TotalLabel)
        ),
        None => "Daily limit cleared".to_string(),
    };
    if let Some(notice) = goals::limit_notice(session, today) {
        output.push('\n');
        output.push_str(&notice);
    }
    Ok(output)
}

pub fn currency(session: &mut Session, code: &str) -> Result<String> {
    let currency = session.set_currency(code)?;
    let converter = session.converter();
    Ok(format!(
        "Display currency set to {} ({})",
        ui::style_text(currency.code(), ui::StyleType::TotalLabel),
        converter.symbol()
    ))
}

pub fn theme(session: &mut Session, action: ThemeAction) -> Result<String> {
    let theme = match action {
        ThemeAction::Set(theme) => session.set_theme(theme)?,
        ThemeAction::Toggle => session.toggle_theme()?,
        ThemeAction::Show => return Ok(format!("Current theme: {}", session.settings().theme)),
    };
    Ok(format!("Theme set to {theme}"))
}
