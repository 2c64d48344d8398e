//! Display currencies and fixed-rate conversion

use crate::core::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Inr,
    Usd,
    Eur,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Inr, Currency::Usd, Currency::Eur];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Inr => "INR",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    /// Demo rates relative to the base unit (INR); not live quotes.
    fn default_info(&self) -> CurrencyInfo {
        let (symbol, rate) = match self {
            Currency::Inr => ("₹", 1.0),
            Currency::Usd => ("$", 0.012),
            Currency::Eur => ("€", 0.011),
        };
        CurrencyInfo {
            symbol: symbol.to_string(),
            rate,
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "INR" => Ok(Currency::Inr),
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            _ => Err(ValidationError::UnknownCurrency(s.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyInfo {
    pub symbol: String,
    pub rate: f64,
}

/// Lookup table of symbol and rate per currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyTable(BTreeMap<Currency, CurrencyInfo>);

impl Default for CurrencyTable {
    fn default() -> Self {
        CurrencyTable(
            Currency::ALL
                .iter()
                .map(|c| (*c, c.default_info()))
                .collect(),
        )
    }
}

impl CurrencyTable {
    /// Returns the converter for `currency`, using the built-in rate when the
    /// table has no entry for it.
    pub fn converter(&self, currency: Currency) -> Converter {
        let info = self
            .0
            .get(&currency)
            .cloned()
            .unwrap_or_else(|| currency.default_info());
        Converter {
            currency,
            symbol: info.symbol,
            rate: info.rate,
        }
    }
}

/// Converts base-unit amounts into one display currency.
#[derive(Debug, Clone, PartialEq)]
pub struct Converter {
    currency: Currency,
    symbol: String,
    rate: f64,
}

impl Converter {
    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn convert(&self, amount: f64) -> f64 {
        amount * self.rate
    }

    /// Formats an already converted value with the currency symbol.
    pub fn format(&self, value: f64) -> String {
        format!("{}{}", self.symbol, format_grouped(value))
    }

    /// Converts a base-unit amount and formats it.
    pub fn display(&self, amount: f64) -> String {
        self.format(self.convert(amount))
    }
}

/// Formats a number with two fraction digits and Indian digit grouping
/// (`12,34,567.89`).
pub fn format_grouped(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };

    let grouped = if int_part.len() <= 3 {
        int_part.to_string()
    } else {
        let (head, last3) = int_part.split_at(int_part.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(2);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();
        format!("{},{}", groups.join(","), last3)
    };

    format!("{sign}{grouped}.{frac_part}")
}
