use rust_decimal::Decimal;
use serde_json::Value;

use crate::core::money::{decimal_from_json, describe_json, MAX_AMOUNT};
use crate::core::ValidationError;
use crate::modules::totals::models::{LineItem, RawLineItem};

/// Validates and coerces raw line items into exact `LineItem`s.
///
/// Stops at the first invalid item. A zero-quantity line is an error rather
/// than being dropped, so data-entry mistakes surface to the user.
///
/// Quantities, prices, line totals and the running subtotal are bounded by
/// `MAX_AMOUNT`; the pipeline relies on that to compute without overflow.
pub fn normalize(raw_items: &[RawLineItem]) -> Result<Vec<LineItem>, ValidationError> {
    let mut items = Vec::with_capacity(raw_items.len());
    let mut subtotal = Decimal::ZERO;

    for (index, raw) in raw_items.iter().enumerate() {
        let item = normalize_item(index, raw)?;
        subtotal = subtotal
            .checked_add(item.line_total())
            .filter(|running| *running <= MAX_AMOUNT)
            .ok_or(ValidationError::SubtotalTooLarge {
                index,
                limit: MAX_AMOUNT,
            })?;
        items.push(item);
    }

    Ok(items)
}

fn normalize_item(index: usize, raw: &RawLineItem) -> Result<LineItem, ValidationError> {
    let description = raw.description.trim();
    if description.is_empty() {
        return Err(ValidationError::EmptyDescription { index });
    }

    let quantity = parse_field(index, "quantity", &raw.quantity)?;
    if quantity <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveQuantity {
            index,
            value: quantity,
        });
    }
    check_bound(index, "quantity", Some(quantity))?;

    let unit_price = parse_field(index, "unit_price", &raw.unit_price)?;
    if unit_price < Decimal::ZERO {
        return Err(ValidationError::NegativeUnitPrice {
            index,
            value: unit_price,
        });
    }
    check_bound(index, "unit_price", Some(unit_price))?;
    check_bound(index, "line_total", quantity.checked_mul(unit_price))?;

    Ok(LineItem::new_unchecked(
        description.to_string(),
        quantity,
        unit_price,
    ))
}

/// `None` is an overflowed product and counts as too large
fn check_bound(index: usize, field: &'static str, value: Option<Decimal>) -> Result<(), ValidationError> {
    match value {
        Some(amount) if amount <= MAX_AMOUNT => Ok(()),
        _ => Err(ValidationError::AmountTooLarge {
            index,
            field,
            limit: MAX_AMOUNT,
        }),
    }
}

fn parse_field(index: usize, field: &'static str, value: &Value) -> Result<Decimal, ValidationError> {
    decimal_from_json(value).ok_or_else(|| ValidationError::InvalidNumber {
        index,
        field,
        value: describe_json(value),
    })
}
