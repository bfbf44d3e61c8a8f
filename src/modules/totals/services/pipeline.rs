use rust_decimal::Decimal;

use crate::modules::totals::models::{LineItem, ResolvedConfig, Totals};

/// Runs the ordered totals stages over validated inputs.
///
/// Every stage consumes the previous stage's exact value; nothing is rounded
/// here. Retention is withheld from the VAT-inclusive total and CIS is taken
/// from what remains after retention. Swapping those two changes the amount
/// due.
pub fn compute(items: &[LineItem], config: &ResolvedConfig) -> Totals {
    let subtotal: Decimal = items.iter().map(LineItem::line_total).sum();

    // Capped: a discount larger than the bill never makes the invoice negative
    let discount = config.discount_amount.min(subtotal);
    let net_after_discount = subtotal - discount;

    let vat_amount = net_after_discount * config.vat_coefficient;
    let total_before_retention = net_after_discount + vat_amount;

    let retention = total_before_retention * config.retention_rate;
    let total_after_retention = total_before_retention - retention;

    let cis_deduction = total_after_retention * config.cis_rate;
    let total_due = total_after_retention - cis_deduction;

    Totals {
        subtotal,
        discount,
        net_after_discount,
        vat_amount,
        total_before_retention,
        retention,
        total_after_retention,
        cis_deduction,
        cis_percent: config.cis_percent,
        total_due,
    }
}
