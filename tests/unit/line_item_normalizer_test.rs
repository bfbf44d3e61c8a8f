// Line item normalization: coercion of form input into exact decimals and
// rejection of data-entry mistakes.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;
use sitebooks::core::money::MAX_AMOUNT;
use sitebooks::core::{AppError, ValidationError};
use sitebooks::modules::totals::models::{RawLineItem, TotalsRequest, VatMode};
use sitebooks::modules::totals::services::{compute, normalize, resolve, TotalsService};

proptest! {
    /// Line totals are the exact product, no drift across many lines
    #[test]
    fn test_line_totals_are_exact(
        lines in prop::collection::vec((1i64..1_000_000i64, 0i64..100_000_000i64), 1..50)
    ) {
        let raw: Vec<RawLineItem> = lines
            .iter()
            .map(|(qty, price)| {
                RawLineItem::new(
                    "Materials",
                    Decimal::new(*qty, 2).to_string(),
                    Decimal::new(*price, 2).to_string(),
                )
            })
            .collect();

        let items = normalize(&raw).unwrap();
        prop_assert_eq!(items.len(), lines.len());

        for (item, (qty, price)) in items.iter().zip(lines.iter()) {
            prop_assert_eq!(item.line_total(), Decimal::new(*qty, 2) * Decimal::new(*price, 2));
        }
    }

    /// Any non-positive quantity is rejected with its index
    #[test]
    fn test_non_positive_quantity_always_rejected(
        qty in -1_000_000i64..=0i64,
        position in 0usize..5,
    ) {
        let mut raw = vec![RawLineItem::new("Labour", 1, 100); 5];
        raw[position] = RawLineItem::new("Labour", qty, 100);

        let err = normalize(&raw).unwrap_err();
        prop_assert!(
            matches!(err, ValidationError::NonPositiveQuantity { index, .. } if index == position),
            "unexpected error {:?}", err
        );
    }
}

#[test]
fn test_floating_point_inputs_stay_exact() {
    // 0.1 * 3 is 0.30000000000000004 in binary floating point
    let items = normalize(&[RawLineItem::new("Fixings", 3, 0.1)]).unwrap();
    assert_eq!(items[0].line_total(), dec!(0.3));
}

#[test]
fn test_first_invalid_item_is_reported() {
    let raw = vec![
        RawLineItem::new("Labour", 1, 100),
        RawLineItem::new("Bad price", 1, -1),
        RawLineItem::new("", 1, 100),
    ];

    let err = normalize(&raw).unwrap_err();
    assert_eq!(
        err,
        ValidationError::NegativeUnitPrice {
            index: 1,
            value: dec!(-1)
        }
    );
}

#[test]
fn test_non_numeric_values_rejected() {
    for bad in [json!("NaN"), json!("Infinity"), json!(""), json!(true), json!({"v": 1})] {
        let err = normalize(&[RawLineItem::new("Labour", bad.clone(), 100)]).unwrap_err();
        assert!(
            matches!(err, ValidationError::InvalidNumber { field: "quantity", .. }),
            "{} should be rejected, got {:?}",
            bad,
            err
        );
    }
}

#[test]
fn test_error_message_names_the_line() {
    let err = normalize(&[
        RawLineItem::new("Labour", 1, 100),
        RawLineItem::new("  ", 1, 100),
    ])
    .unwrap_err();
    assert_eq!(err.to_string(), "Line item 1: description cannot be empty");
}

#[test]
fn test_oversized_amounts_are_errors_not_overflows() {
    let service = TotalsService::default();

    let request = TotalsRequest {
        items: vec![RawLineItem::new("Huge", "79228162514264337593543950335", 2)],
        ..Default::default()
    };
    let err = service.calculate(&request).unwrap_err();
    assert!(matches!(
        err,
        AppError::LineItem(ValidationError::AmountTooLarge { index: 0, field: "quantity", .. })
    ));

    let request = TotalsRequest {
        items: vec![RawLineItem::new("Phase", 1, "5e28"); 2],
        ..Default::default()
    };
    assert!(service.calculate(&request).is_err());
}

proptest! {
    /// Any finite amount either normalizes and computes, or is rejected as too large
    #[test]
    fn test_large_amounts_never_overflow(
        lines in prop::collection::vec((1i64..i64::MAX, 0u32..10u32, 0i64..i64::MAX, 0u32..10u32), 1..5),
        cis in 0u32..=100u32,
    ) {
        let raw: Vec<RawLineItem> = lines
            .iter()
            .map(|(qty, qty_exp, price, price_exp)| {
                RawLineItem::new("Item", format!("{}e{}", qty, qty_exp), format!("{}e{}", price, price_exp))
            })
            .collect();

        match normalize(&raw) {
            Ok(items) => {
                let config = resolve(VatMode::Standard20, dec!(0), dec!(5), Decimal::from(cis)).unwrap();
                let totals = compute(&items, &config);
                prop_assert!(totals.subtotal <= MAX_AMOUNT);
                prop_assert!(totals.total_due <= totals.total_before_retention);
            }
            Err(err) => prop_assert!(matches!(
                err,
                ValidationError::AmountTooLarge { .. } | ValidationError::SubtotalTooLarge { .. }
            ), "unexpected error: {:?}", err),
        }
    }
}
