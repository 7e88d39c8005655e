//! Display helpers for amounts, dates and names.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// How monetary amounts are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub decimal_separator: char,
    pub group_separator: char,
    /// Place the symbol after the number, separated by a space.
    pub symbol_after: bool,
}

impl CurrencyFormat {
    /// `1 800,00 €`
    #[must_use]
    pub fn euro() -> Self {
        Self {
            symbol: "€".to_string(),
            decimal_separator: ',',
            group_separator: ' ',
            symbol_after: true,
        }
    }

    /// `$1,800.00`
    #[must_use]
    pub fn dollar() -> Self {
        Self {
            symbol: "$".to_string(),
            decimal_separator: '.',
            group_separator: ',',
            symbol_after: false,
        }
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::euro()
    }
}

/// Render `amount` with two decimals, rounding half away from zero.
#[must_use]
pub fn format_currency(amount: Decimal, format: &CurrencyFormat) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = format!("{:.2}", rounded.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let number = format!(
        "{}{}{}",
        group_digits(whole, format.group_separator),
        format.decimal_separator,
        fraction
    );
    let body = if format.symbol_after {
        format!("{number} {}", format.symbol)
    } else {
        format!("{}{number}", format.symbol)
    };
    if negative { format!("-{body}") } else { body }
}

/// Render a `0..=1` ratio as a percentage with one decimal, e.g. `55.6 %`.
#[must_use]
pub fn format_percent(ratio: Decimal) -> String {
    let percent = ratio
        .saturating_mul(Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{percent:.1} %")
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    /// `15/01/2024`
    #[default]
    Numeric,
    /// `15 January 2024`
    Long,
    /// `2024-01-15`
    Iso,
}

#[must_use]
pub fn format_date(date: NaiveDate, style: DateStyle) -> String {
    let pattern = match style {
        DateStyle::Numeric => "%d/%m/%Y",
        DateStyle::Long => "%-d %B %Y",
        DateStyle::Iso => "%Y-%m-%d",
    };
    date.format(pattern).to_string()
}

/// Format a date string from the backend.
///
/// Accepts a plain `YYYY-MM-DD` date or a timestamp; anything else is
/// returned unchanged.
#[must_use]
pub fn format_date_str(raw: &str, style: DateStyle) -> String {
    let trimmed = raw.trim();
    let parsed = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(trimmed).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        });
    parsed.map_or_else(|| raw.to_string(), |date| format_date(date, style))
}

#[must_use]
pub fn full_name(first: &str, last: &str) -> String {
    [first.trim(), last.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
