use rust_decimal::Decimal;

use crate::core::money::{format_money, round_money};
use crate::modules::totals::models::{
    FormattedTotals, LineItem, PresentedLine, ResolvedConfig, Totals, VatDisplay,
};

/// Rounds each money field of the pipeline output to pence, half-up.
///
/// Fields are rounded independently. `total_due` is NOT re-derived from the
/// rounded intermediates, so it may differ by a penny from
/// `total_after_retention - cis_deduction` as displayed.
pub fn present(totals: &Totals) -> Totals {
    Totals {
        subtotal: round_money(totals.subtotal),
        discount: round_money(totals.discount),
        net_after_discount: round_money(totals.net_after_discount),
        vat_amount: round_money(totals.vat_amount),
        total_before_retention: round_money(totals.total_before_retention),
        retention: round_money(totals.retention),
        total_after_retention: round_money(totals.total_after_retention),
        cis_deduction: round_money(totals.cis_deduction),
        cis_percent: totals.cis_percent,
        total_due: round_money(totals.total_due),
    }
}

/// Line as printed: inputs echoed, line total rounded to pence
pub fn present_line(item: &LineItem) -> PresentedLine {
    PresentedLine {
        description: item.description().to_string(),
        quantity: item.quantity(),
        unit_price: item.unit_price(),
        line_total: round_money(item.line_total()),
    }
}

/// Currency strings for each row; the VAT row is dropped when hidden.
pub fn format_totals(totals: &Totals, vat_display: VatDisplay) -> FormattedTotals {
    FormattedTotals {
        subtotal: format_money(totals.subtotal),
        discount: format_money(totals.discount),
        net_after_discount: format_money(totals.net_after_discount),
        vat_amount: vat_display
            .shows_vat_row()
            .then(|| format_money(totals.vat_amount)),
        total_before_retention: format_money(totals.total_before_retention),
        retention: format_money(totals.retention),
        total_after_retention: format_money(totals.total_after_retention),
        cis_deduction: format_money(totals.cis_deduction),
        total_due: format_money(totals.total_due),
    }
}

/// VAT amount as the document shows it, `None` when no row is rendered
pub fn visible_vat(totals: &Totals, config: &ResolvedConfig) -> Option<Decimal> {
    config
        .vat_display
        .shows_vat_row()
        .then_some(totals.vat_amount)
}
