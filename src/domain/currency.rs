//! Display currencies. Amounts are held in GBP and converted only when formatted.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::assessment::ResponseSet;
use crate::domain::catalog::ids;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    #[default]
    Gbp,
    Usd,
    Eur,
    Cad,
    Aud,
}

impl Currency {
    /// Parses a lowercase or uppercase code; anything unrecognised is GBP.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "usd" => Currency::Usd,
            "eur" => Currency::Eur,
            "cad" => Currency::Cad,
            "aud" => Currency::Aud,
            _ => Currency::Gbp,
        }
    }

    /// The respondent's preferred currency, GBP when unanswered.
    pub fn from_responses(responses: &ResponseSet) -> Self {
        responses
            .first_selection(ids::CURRENCY_PREFERENCE)
            .map(Self::from_code)
            .unwrap_or_default()
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Gbp => "gbp",
            Currency::Usd => "usd",
            Currency::Eur => "eur",
            Currency::Cad => "cad",
            Currency::Aud => "aud",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Gbp => "£",
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Cad => "C$",
            Currency::Aud => "A$",
        }
    }

    /// Units of this currency per pound sterling.
    pub fn rate_from_gbp(&self) -> f64 {
        match self {
            Currency::Gbp => 1.0,
            Currency::Usd => 1.27,
            Currency::Eur => 1.17,
            Currency::Cad => 1.72,
            Currency::Aud => 1.92,
        }
    }

    /// Converts a GBP amount and renders it in whole units, e.g. `$1,270`.
    pub fn format(&self, amount_gbp: f64) -> String {
        let converted = (amount_gbp * self.rate_from_gbp()).round();
        let sign = if converted < 0.0 { "-" } else { "" };
        format!("{sign}{}{}", self.symbol(), group_thousands(converted.abs() as u64))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Formats a GBP amount in the currency named by `code`.
pub fn format_currency(amount_gbp: f64, code: &str) -> String {
    Currency::from_code(code).format(amount_gbp)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
