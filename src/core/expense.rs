//! Expense records and the form input they are built from.

use crate::core::error::{ValidationError, parse_positive};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Entertainment,
    Bills,
    Health,
    Education,
    Travel,
    Other,
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "food" => Category::Food,
            "transport" => Category::Transport,
            "shopping" => Category::Shopping,
            "entertainment" => Category::Entertainment,
            "bills" => Category::Bills,
            "health" => Category::Health,
            "education" => Category::Education,
            "travel" => Category::Travel,
            _ => Category::Other,
        }
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Category::from(s.as_str())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.key().to_string()
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Entertainment,
        Category::Bills,
        Category::Health,
        Category::Education,
        Category::Travel,
        Category::Other,
    ];

    /// Stored form of the category
    pub fn key(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Shopping => "shopping",
            Category::Entertainment => "entertainment",
            Category::Bills => "bills",
            Category::Health => "health",
            Category::Education => "education",
            Category::Travel => "travel",
            Category::Other => "other",
        }
    }

    /// Returns display name and icon for the category
    pub fn display_info(&self) -> (&'static str, &'static str) {
        match self {
            Category::Food => ("Food & Dining", "🍽"),
            Category::Transport => ("Transportation", "🚗"),
            Category::Shopping => ("Shopping", "🛍"),
            Category::Entertainment => ("Entertainment", "🎬"),
            Category::Bills => ("Bills & Utilities", "💡"),
            Category::Health => ("Healthcare", "🏥"),
            Category::Education => ("Education", "📚"),
            Category::Travel => ("Travel", "✈"),
            Category::Other => ("Other", "📝"),
        }
    }

    pub fn name(&self) -> &'static str {
        self.display_info().0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub amount: f64,
    pub category: Category,
    pub description: String,
    pub date: NaiveDate,
}

impl Expense {
    pub fn new(fields: ExpenseFields) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount: fields.amount,
            category: fields.category,
            description: fields.description,
            date: fields.date,
        }
    }

    /// Replaces every field except the id.
    pub fn apply(&mut self, fields: ExpenseFields) {
        *self = Expense {
            id: self.id,
            amount: fields.amount,
            category: fields.category,
            description: fields.description,
            date: fields.date,
        };
    }

    /// First block of the id, enough to address a record from the command line.
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }
}

/// Validated values of an expense, without identity.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseFields {
    pub amount: f64,
    pub category: Category,
    pub description: String,
    pub date: NaiveDate,
}

/// Raw text of the expense form as the user typed it.
#[derive(Debug, Clone, Default)]
pub struct ExpenseDraft {
    pub amount: String,
    pub category: String,
    pub description: String,
    pub date: String,
}

impl ExpenseDraft {
    /// Validates the whole form; nothing is produced unless every field is valid.
    pub fn validate(&self) -> Result<ExpenseFields, ValidationError> {
        let amount = required(&self.amount, "amount")?;
        let category = required(&self.category, "category")?;
        let description = required(&self.description, "description")?;
        let date = required(&self.date, "date")?;

        let amount = parse_positive(amount)?;
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate(date.to_string()))?;

        Ok(ExpenseFields {
            amount,
            category: Category::from(category),
            description: description.to_string(),
            date,
        })
    }
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(trimmed)
    }
}
