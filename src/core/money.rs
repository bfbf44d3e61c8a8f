use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;
use std::str::FromStr;

/// Pence precision for every presented amount
pub const MONEY_SCALE: u32 = 2;

/// Currency symbol used when rendering amounts (GBP only)
pub const CURRENCY_SYMBOL: &str = "£";

/// Largest quantity, unit price, line total or subtotal accepted: 10^15.
///
/// Keeps every pipeline stage far inside `Decimal`'s 96-bit range, so the
/// plain arithmetic operators there can never overflow.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Rounds an amount to pence using round-half-up, always at scale 2.
///
/// `MidpointAwayFromZero` is half-up for the non-negative values the totals
/// pipeline produces. Never use `Decimal::round_dp` here, it rounds half-even.
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}

/// Renders an amount as `£1,234.56`, rounding to pence first.
pub fn format_money(amount: Decimal) -> String {
    let rounded = round_money(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let text = format!("{:.2}", rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    format!(
        "{}{}{}.{}",
        sign,
        CURRENCY_SYMBOL,
        group_thousands(whole),
        fraction
    )
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Converts a raw JSON value (number or numeric string) into an exact `Decimal`.
///
/// Numbers go through their textual form so `0.1` stays exactly `0.1`.
/// Returns `None` for anything that is not a finite decimal.
pub fn decimal_from_json(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s),
        _ => None,
    }
}

/// Parses plain (`12.50`) or scientific (`1.25e1`) notation.
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Text shown in error messages for a value that failed to parse
pub fn describe_json(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
