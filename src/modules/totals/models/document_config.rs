use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::vat_mode::{VatDisplay, VatMode};

/// Coefficients consumed by the totals pipeline, produced by the resolver.
///
/// Rates are fractions (`0.05` for 5%); percentages are kept alongside for
/// echoing back on the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    pub vat_mode: VatMode,
    pub vat_coefficient: Decimal,
    pub vat_display: VatDisplay,
    pub discount_amount: Decimal,
    pub retention_percent: Decimal,
    pub retention_rate: Decimal,
    pub cis_percent: Decimal,
    pub cis_rate: Decimal,
}

/// Company-level settings applied when a request leaves a field out.
///
/// Passed explicitly into the totals service; nothing in the engine reads
/// them from the environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentDefaults {
    pub vat_mode: VatMode,
    pub retention_percent: Decimal,
    pub cis_percent: Decimal,
}
