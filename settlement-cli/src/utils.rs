use rust_decimal::Decimal;
use settlement_core::calculations::common::round_to_won;
use thiserror::Error;

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
#[error("invalid amount '{input}': {source}")]
pub struct ParseAmountError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Normalizes input for decimal parsing: trims whitespace and removes commas
/// (thousands separator).
fn normalize_amount_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a string into a [`Decimal`] won amount.
///
/// Handles comma as thousands separator (e.g. `"50,000,000"`). Empty or
/// whitespace-only input is treated as 0. Logs and returns an error when the
/// input is non-empty but not parseable.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| {
        tracing::error!(input = %s, "invalid amount: {}", e);
        ParseAmountError {
            input: s.to_string(),
            source: e,
        }
    })
}

/// Clap value parser for won amounts: accepts comma separators and refuses
/// negative entries, so the calculator only ever sees non-negative inputs.
pub fn parse_amount(s: &str) -> Result<Decimal, String> {
    let amount = parse_decimal(s).map_err(|e| e.to_string())?;
    if amount.is_sign_negative() {
        return Err("amount must be zero or greater".to_string());
    }
    Ok(amount)
}

/// Formats a won amount as a thousands-grouped whole-won string,
/// e.g. `3,990,000`. Fractional won are rounded half-up for display.
pub fn format_won(amount: Decimal) -> String {
    let rounded = round_to_won(amount);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();
    let int_part = digits.split('.').next().unwrap_or("0");

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let formatted: String = grouped.chars().rev().collect();

    if negative {
        format!("-{formatted}")
    } else {
        formatted
    }
}
