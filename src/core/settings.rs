//! Per-user preferences persisted alongside the ledger
use crate::core::currency::Currency;
use crate::core::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(ValidationError::UnknownTheme(s.trim().to_string())),
        }
    }
}

/// Goal and limit are expressed in the selected display currency; `None`
/// means unset, which is distinct from zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub monthly_goal: Option<f64>,
    pub daily_limit: Option<f64>,
    pub currency: Currency,
    pub theme: Theme,
}

/// Parses a stored goal/limit value. Anything that is not a positive number
/// counts as unset.
pub fn parse_stored_amount(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
}
