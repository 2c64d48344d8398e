use super::{goals, ui};
use crate::core::export::format_date;
use crate::core::{Category, Expense, ExpenseDraft, Session, ValidationError};
use anyhow::Result;
use chrono::NaiveDate;
use comfy_table::Cell;

fn with_limit_notice(mut output: String, session: &Session, today: NaiveDate) -> String {
    if let Some(notice) = goals::limit_notice(session, today) {
        output.push('\n');
        output.push_str(&notice);
    }
    output
}

pub fn add(
    session: &mut Session,
    amount: String,
    category: String,
    description: String,
    date: Option<String>,
    today: NaiveDate,
) -> Result<String> {
    let draft = ExpenseDraft {
        amount,
        category,
        description,
        date: date.unwrap_or_else(|| today.format("%Y-%m-%d").to_string()),
    };
    let expense = session.add_expense(&draft)?;
    let output = format!(
        "✅ Expense added successfully! ({} {})",
        ui::style_text(&expense.short_id(), ui::StyleType::Subtle),
        session.converter().display(expense.amount)
    );
    Ok(with_limit_notice(output, session, today))
}

pub fn edit(
    session: &mut Session,
    id: &str,
    amount: String,
    category: String,
    description: String,
    date: String,
    today: NaiveDate,
) -> Result<String> {
    let draft = ExpenseDraft {
        amount,
        category,
        description,
        date,
    };
    match session.edit_expense(id, &draft)? {
        Some(_) => Ok(with_limit_notice(
            "Expense updated successfully!".to_string(),
            session,
            today,
        )),
        None => Ok(format!("No expense found with id {id}")),
    }
}

pub fn delete(session: &mut Session, id: &str, today: NaiveDate) -> Result<String> {
    match session.delete_expense(id)? {
        Some(expense) => Ok(with_limit_notice(
            format!("Deleted \"{}\"", expense.description),
            session,
            today,
        )),
        None => Ok(format!("No expense found with id {id}")),
    }
}

/// Parses the category filter; `all` or nothing means no filter.
fn category_filter(category: Option<&str>) -> Option<Category> {
    category
        .filter(|c| !c.trim().eq_ignore_ascii_case("all"))
        .map(Category::from)
}

pub fn list(
    session: &Session,
    category: Option<&str>,
    date: Option<&str>,
    only_today: bool,
    today: NaiveDate,
) -> Result<String> {
    let date = match date {
        Some(d) => Some(
            NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d")
                .map_err(|_| ValidationError::InvalidDate(d.trim().to_string()))?,
        ),
        None if only_today => Some(today),
        None => None,
    };
    let category = category_filter(category);
    let expenses = session.ledger().filtered(date, category);

    if expenses.is_empty() {
        return Ok(empty_message(date, category));
    }
    Ok(render_table(session, &expenses))
}

fn empty_message(date: Option<NaiveDate>, category: Option<Category>) -> String {
    let hint = if date.is_none() && category.is_none() {
        "Add your first expense to get started!".to_string()
    } else {
        let date_text = date.map_or(String::new(), |d| format!(" for {}", format_date(d)));
        let category_text = category.map_or(String::new(), |c| format!(" in {}", c.name()));
        format!("No expenses found{date_text}{category_text}.")
    };
    format!("📊 No expenses found\n{hint}")
}

fn render_table(session: &Session, expenses: &[&Expense]) -> String {
    let theme = session.settings().theme;
    let converter = session.converter();
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Id", theme),
        ui::header_cell("Date", theme),
        ui::header_cell("Category", theme),
        ui::header_cell("Description", theme),
        ui::header_cell(&format!("Amount ({})", converter.symbol()), theme),
    ]);

    for expense in expenses {
        let (name, icon) = expense.category.display_info();
        table.add_row(vec![
            Cell::new(expense.short_id()),
            Cell::new(format_date(expense.date)),
            Cell::new(format!("{icon} {name}")),
            Cell::new(&expense.description),
            ui::amount_cell(converter.display(expense.amount)),
        ]);
    }

    table.to_string()
}
