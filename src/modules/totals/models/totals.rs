// Totals produced by the pipeline, plus the shapes handed to the preview,
// PDF and persistence collaborators.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::line_item::PresentedLine;
use super::vat_mode::VatMode;

/// Output of the totals pipeline.
///
/// Every field is derived. The pipeline fills it with exact values; the
/// presenter returns a copy rounded to pence. Never edited in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub net_after_discount: Decimal,
    pub vat_amount: Decimal,
    pub total_before_retention: Decimal,
    pub retention: Decimal,
    pub total_after_retention: Decimal,
    pub cis_deduction: Decimal,
    pub cis_percent: Decimal,
    pub total_due: Decimal,
}

/// Whether the figures are for an invoice or a quote. Both share one engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    #[default]
    Invoice,
    Quote,
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentKind::Invoice => write!(f, "invoice"),
            DocumentKind::Quote => write!(f, "quote"),
        }
    }
}

/// Rounded totals for one document, as returned across the boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentTotals {
    pub document_kind: DocumentKind,
    pub vat_mode: VatMode,
    pub line_items: Vec<PresentedLine>,
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub net_after_discount: Decimal,

    /// Absent when the supplier is not VAT registered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_amount: Option<Decimal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_label: Option<String>,

    pub total_before_retention: Decimal,
    pub retention_percent: Decimal,
    pub retention: Decimal,
    pub total_after_retention: Decimal,
    pub cis_percent: Decimal,
    pub cis_deduction: Decimal,
    pub total_due: Decimal,
    pub reverse_charge_notice_required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse_charge_notice: Option<String>,
}

/// Currency strings for rendering, e.g. `£9,300.00`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedTotals {
    pub subtotal: String,
    pub discount: String,
    pub net_after_discount: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_amount: Option<String>,

    pub total_before_retention: String,
    pub retention: String,
    pub total_after_retention: String,
    pub cis_deduction: String,
    pub total_due: String,
}

/// Response body of the preview endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalsPreview {
    pub totals: DocumentTotals,
    pub formatted: FormattedTotals,
}
