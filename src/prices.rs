//! Prices

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, iso};
use thiserror::Error;

use crate::products::Price;

/// Errors raised while reading a typed price.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PriceError {
    /// Nothing was typed.
    #[error("price is empty")]
    Empty,

    /// The input is not a number.
    #[error("price is not a number")]
    Invalid,
}

/// Accept a comma as decimal separator by replacing the first one with a dot.
pub fn normalize_price_input(input: &str) -> String {
    input.replacen(',', ".", 1)
}

/// Parse a typed price.
///
/// Plain (`25.90`) and scientific (`2.59e1`) notation are accepted; the input
/// is trimmed first.
///
/// # Errors
///
/// - [`PriceError::Empty`]: the trimmed input is empty.
/// - [`PriceError::Invalid`]: the input is not a number.
pub fn parse_price(input: &str) -> Result<Decimal, PriceError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(PriceError::Empty);
    }

    Decimal::from_str(trimmed)
        .or_else(|_err| Decimal::from_scientific(trimmed))
        .map_err(|_err| PriceError::Invalid)
}

/// Format an amount in Brazilian reais, rounded to cents.
pub fn format_brl(amount: Decimal) -> Option<String> {
    let cents = (amount * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()?;

    Some(Money::from_minor(cents, iso::BRL).to_string())
}

/// Display form of a product price.
///
/// Numeric and numeric-like prices are shown as currency, anything else is
/// shown as the API sent it.
pub fn format_price(price: &Price) -> String {
    price
        .amount()
        .and_then(format_brl)
        .unwrap_or_else(|| price.canonical())
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn comma_is_normalised_to_dot() {
        assert_eq!(normalize_price_input("10,50"), "10.50");
        assert_eq!(normalize_price_input("25.90"), "25.90");
    }

    #[test]
    fn parses_plain_and_scientific_notation() -> TestResult {
        assert_eq!(parse_price(" 25.90 ")?, Decimal::new(2590, 2));
        assert_eq!(parse_price("2.5e1")?, Decimal::new(25, 0));

        Ok(())
    }

    #[test]
    fn rejects_empty_and_garbage() {
        assert_eq!(parse_price("   "), Err(PriceError::Empty));
        assert_eq!(parse_price("dez reais"), Err(PriceError::Invalid));
        assert_eq!(parse_price("10,50"), Err(PriceError::Invalid));
    }

    #[test]
    fn numeric_prices_are_formatted_as_currency() {
        let formatted = format_price(&Price::from("10,5"));

        assert!(formatted.contains("R$"), "missing symbol: {formatted}");
        assert!(formatted.ends_with("50"), "missing cents: {formatted}");
    }

    #[test]
    fn non_numeric_prices_are_shown_verbatim() {
        assert_eq!(format_price(&Price::from("sob consulta")), "sob consulta");
    }
}
