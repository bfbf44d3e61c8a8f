// Property-based tests for the totals pipeline and presentation rounding
//
// Covers the stage identities, monotonicity of deductions, the discount cap,
// VAT-mode exclusivity and idempotent rounding.

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::TestDataFactory;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sitebooks::core::round_money;
use sitebooks::modules::totals::models::{LineItem, RawLineItem, Totals, VatMode};
use sitebooks::modules::totals::services::{compute, normalize, present, resolve, TotalsService};

const PENNY: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Quantities with up to 3 dp, prices in pence
fn line_items() -> impl Strategy<Value = Vec<LineItem>> {
    prop::collection::vec((1u32..100_000u32, 0u32..10_000_000u32), 0..20).prop_map(|lines| {
        let raw: Vec<RawLineItem> = lines
            .into_iter()
            .enumerate()
            .map(|(i, (qty_thousandths, price_pence))| {
                RawLineItem::new(
                    format!("Line {}", i + 1),
                    Decimal::new(qty_thousandths as i64, 3).to_string(),
                    Decimal::new(price_pence as i64, 2).to_string(),
                )
            })
            .collect();
        normalize(&raw).expect("generated items are valid")
    })
}

fn vat_mode() -> impl Strategy<Value = VatMode> {
    prop::sample::select(VatMode::ALL.to_vec())
}

fn money() -> impl Strategy<Value = Decimal> {
    (0u32..5_000_000u32).prop_map(|pence| Decimal::new(pence as i64, 2))
}

fn percent() -> impl Strategy<Value = Decimal> {
    (0u32..=10_000u32).prop_map(|hundredths| Decimal::new(hundredths as i64, 2))
}

fn totals_for(
    items: &[LineItem],
    mode: VatMode,
    discount: Decimal,
    retention: Decimal,
    cis: Decimal,
) -> Totals {
    let config = resolve(mode, discount, retention, cis).expect("valid config");
    compute(items, &config)
}

proptest! {
    /// Unrounded stages satisfy every identity exactly
    #[test]
    fn test_exact_identities(
        items in line_items(),
        mode in vat_mode(),
        discount in money(),
        retention in percent(),
        cis in percent(),
    ) {
        let t = totals_for(&items, mode, discount, retention, cis);

        prop_assert_eq!(t.total_before_retention, t.net_after_discount + t.vat_amount);
        prop_assert_eq!(t.total_after_retention, t.total_before_retention - t.retention);
        prop_assert_eq!(t.total_due, t.total_after_retention - t.cis_deduction);
        prop_assert_eq!(
            t.total_due,
            t.subtotal - t.discount + t.vat_amount - t.retention - t.cis_deduction
        );
    }

    /// Rounded figures stay within one penny of the identities
    #[test]
    fn test_rounded_identities_within_a_penny(
        items in line_items(),
        mode in vat_mode(),
        discount in money(),
        retention in percent(),
        cis in percent(),
    ) {
        let exact = totals_for(&items, mode, discount, retention, cis);
        let p = present(&exact);

        prop_assert!((p.total_before_retention - (p.net_after_discount + p.vat_amount)).abs() <= PENNY);
        prop_assert!((p.total_after_retention - (p.total_before_retention - p.retention)).abs() <= PENNY);
        prop_assert!((p.total_due - (p.total_after_retention - p.cis_deduction)).abs() <= PENNY);

        let identity = exact.subtotal - exact.discount + exact.vat_amount
            - exact.retention - exact.cis_deduction;
        prop_assert!((p.total_due - identity).abs() <= PENNY);
    }

    #[test]
    fn test_larger_discount_never_increases_total_due(
        items in line_items(),
        mode in vat_mode(),
        discount in money(),
        extra in money(),
        retention in percent(),
        cis in percent(),
    ) {
        let base = totals_for(&items, mode, discount, retention, cis);
        let more = totals_for(&items, mode, discount + extra, retention, cis);

        prop_assert!(more.total_due <= base.total_due);
        prop_assert!(present(&more).total_due <= present(&base).total_due);
    }

    #[test]
    fn test_larger_deductions_never_increase_total_due(
        items in line_items(),
        mode in vat_mode(),
        discount in money(),
        (retention_low, retention_high) in (percent(), percent())
            .prop_map(|(a, b)| (a.min(b), a.max(b))),
        (cis_low, cis_high) in (percent(), percent())
            .prop_map(|(a, b)| (a.min(b), a.max(b))),
    ) {
        let base = totals_for(&items, mode, discount, retention_low, cis_low);
        let more_retention = totals_for(&items, mode, discount, retention_high, cis_low);
        let more_cis = totals_for(&items, mode, discount, retention_low, cis_high);

        prop_assert!(more_retention.total_due <= base.total_due);
        prop_assert!(more_cis.total_due <= base.total_due);
    }

    #[test]
    fn test_discount_cap_keeps_net_non_negative(
        items in line_items(),
        mode in vat_mode(),
        overshoot in money(),
    ) {
        let subtotal: Decimal = items.iter().map(LineItem::line_total).sum();
        let t = totals_for(&items, mode, subtotal + overshoot + PENNY, dec!(0), dec!(0));

        prop_assert_eq!(t.discount, subtotal);
        prop_assert_eq!(t.net_after_discount, Decimal::ZERO);
        prop_assert_eq!(t.total_due, Decimal::ZERO);
    }

    #[test]
    fn test_no_vat_modes_charge_nothing(
        items in line_items(),
        discount in money(),
    ) {
        for mode in [VatMode::ZeroRated, VatMode::ReverseCharge20, VatMode::NotRegistered] {
            let t = totals_for(&items, mode, discount, dec!(0), dec!(0));
            prop_assert_eq!(t.vat_amount, Decimal::ZERO);
            prop_assert_eq!(t.total_due, t.net_after_discount);
        }
    }

    #[test]
    fn test_present_is_idempotent(
        items in line_items(),
        mode in vat_mode(),
        discount in money(),
        retention in percent(),
        cis in percent(),
    ) {
        let exact = totals_for(&items, mode, discount, retention, cis);
        let once = present(&exact);

        prop_assert_eq!(present(&once), once);
        prop_assert_eq!(present(&exact), once);
        prop_assert_eq!(once.total_due.scale(), 2);
    }

    #[test]
    fn test_calculation_is_deterministic(
        items in line_items(),
        mode in vat_mode(),
        discount in money(),
        retention in percent(),
        cis in percent(),
    ) {
        let first = totals_for(&items, mode, discount, retention, cis);
        let second = totals_for(&items, mode, discount, retention, cis);
        prop_assert_eq!(first, second);
    }
}

#[test]
fn test_worked_example_standard_vat() {
    let totals = TotalsService::default()
        .calculate(&TestDataFactory::site_request("STANDARD_20", 0, 0))
        .unwrap();

    assert_eq!(totals.subtotal, dec!(7750.00));
    assert_eq!(totals.vat_amount, Some(dec!(1550.00)));
    assert_eq!(totals.total_due, dec!(9300.00));
}

#[test]
fn test_worked_example_retention_and_cis() {
    let totals = TotalsService::default()
        .calculate(&TestDataFactory::site_request("STANDARD_20", 5, 20))
        .unwrap();

    assert_eq!(totals.total_before_retention, dec!(9300.00));
    assert_eq!(totals.retention, dec!(465.00));
    assert_eq!(totals.total_after_retention, dec!(8835.00));
    assert_eq!(totals.cis_deduction, dec!(1767.00));
    assert_eq!(totals.total_due, dec!(7068.00));
}

#[test]
fn test_worked_example_discount_cap_in_every_mode() {
    let items = normalize(&[RawLineItem::new("Kitchen refit", 1, "1000.00")]).unwrap();

    for mode in VatMode::ALL {
        let totals = present(&totals_for(&items, mode, dec!(1500.00), dec!(0), dec!(0)));
        assert_eq!(totals.subtotal, dec!(1000.00));
        assert_eq!(totals.discount, dec!(1000.00));
        assert_eq!(totals.net_after_discount, dec!(0.00));
        assert_eq!(totals.total_due, dec!(0.00));
    }
}

#[test]
fn test_retention_is_withheld_before_cis() {
    // Retention on the VAT-inclusive figure first, then CIS on the remainder.
    let items = normalize(&[RawLineItem::new("Steel frame", 1, "10000")]).unwrap();
    let t = totals_for(&items, VatMode::Standard20, dec!(0), dec!(10), dec!(20));

    assert_eq!(t.retention, dec!(1200));
    assert_eq!(t.cis_deduction, dec!(2160));
    assert_eq!(t.total_due, dec!(8640));
    assert_eq!(round_money(t.total_due).to_string(), "8640.00");
}
