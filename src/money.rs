use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("not a number: {0}")]
    NotANumber(String),
    #[error("amount cannot be negative: {0}")]
    Negative(Decimal),
}

/// Parse a user supplied INR amount.
///
/// Accepts plain decimals ("600000", "2.5e5") with surrounding whitespace and
/// optional thousands separators ("6,00,000"). Numbers beyond the decimal
/// range saturate to `Decimal::MAX`, and ones too small to represent become zero.
pub fn parse_inr(input: &str) -> Result<Decimal, MoneyError> {
    let cleaned: String = input.trim().chars().filter(|c| *c != ',').collect();
    let parsed = Decimal::from_str(&cleaned).or_else(|_| Decimal::from_scientific(&cleaned));
    let amount = match parsed {
        Ok(amount) => amount,
        Err(_) => saturating_from_float(&cleaned)
            .ok_or_else(|| MoneyError::NotANumber(input.trim().to_string()))?,
    };
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(MoneyError::Negative(amount));
    }
    Ok(amount.normalize())
}

fn saturating_from_float(text: &str) -> Option<Decimal> {
    let value = text.parse::<f64>().ok().filter(|v| v.is_finite())?;
    let amount = Decimal::from_f64(value).unwrap_or(match (value.abs() >= 1.0, value < 0.0) {
        (true, false) => Decimal::MAX,
        (true, true) => Decimal::MIN,
        (false, _) => Decimal::ZERO,
    });
    Some(amount)
}

pub fn format_inr(amount: Decimal) -> String {
    format!("INR {}", amount.normalize())
}
