use crate::core::Theme;
use crate::core::analytics::BudgetHealth;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    TotalLabel,
    Healthy,
    Critical,
    Warning,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::TotalLabel => style(text).bold(),
        StyleType::Healthy => style(text).green().bold(),
        StyleType::Critical => style(text).red().bold(),
        StyleType::Warning => style(text).yellow().bold(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

pub fn health_style(health: BudgetHealth) -> StyleType {
    match health {
        BudgetHealth::Healthy => StyleType::Healthy,
        BudgetHealth::Critical => StyleType::Critical,
    }
}

fn accent(theme: Theme) -> Color {
    match theme {
        Theme::Light => Color::Blue,
        Theme::Dark => Color::Cyan,
    }
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str, theme: Theme) -> Cell {
    Cell::new(text)
        .fg(accent(theme))
        .add_attribute(Attribute::Bold)
}

/// Right-aligned cell for an already formatted amount.
pub fn amount_cell(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Cell colored by budget health.
pub fn health_cell(text: String, health: BudgetHealth) -> Cell {
    let color = match health {
        BudgetHealth::Healthy => Color::Green,
        BudgetHealth::Critical => Color::Red,
    };
    Cell::new(text)
        .fg(color)
        .add_attribute(Attribute::Bold)
        .set_alignment(CellAlignment::Right)
}

fn bar_parts(len: usize, width: usize) -> (String, String) {
    ("█".repeat(len), "░".repeat(width.saturating_sub(len)))
}

/// A horizontal bar of `len` cells, padded to `width`.
pub fn bar(len: usize, width: usize, theme: Theme) -> String {
    let (filled, empty) = bar_parts(len, width);
    let filled = match theme {
        Theme::Light => style(filled).blue(),
        Theme::Dark => style(filled).cyan(),
    };
    format!("{filled}{}", style(empty).dim())
}

/// Table cell variant of [`bar`], colored through the table instead of
/// escape codes.
pub fn bar_cell(len: usize, width: usize, theme: Theme) -> Cell {
    let (filled, empty) = bar_parts(len, width);
    Cell::new(format!("{filled}{empty}")).fg(accent(theme))
}

/// Returns a separator line matching the terminal width.
pub fn separator() -> String {
    let term_width = console::Term::stdout()
        .size_checked()
        .map(|(_, w)| w as usize)
        .unwrap_or(80);
    "─".repeat(term_width)
}
