// VAT regimes a construction business can invoice under.
//
// The mode is chosen by the business and supplied as configuration; the engine
// never infers it. Coefficient and display policy are resolved separately so
// the pipeline stays purely numeric.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::ConfigError;

/// Wording printed on every reverse-charge document
pub const REVERSE_CHARGE_NOTICE: &str =
    "Reverse charge: customer to account for VAT to HMRC. VAT Act 1994 Section 55A applies.";

/// Standard UK VAT rate in percent
pub const STANDARD_VAT_PERCENT: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VatMode {
    /// 20% VAT charged on the net amount
    #[default]
    #[serde(rename = "STANDARD_20")]
    Standard20,

    /// Domestic reverse charge: customer accounts for the 20%, document shows £0
    #[serde(rename = "REVERSE_CHARGE_20")]
    ReverseCharge20,

    /// 0% VAT, row still shown
    ZeroRated,

    /// Supplier is not VAT registered, no VAT row at all
    NotRegistered,
}

impl VatMode {
    pub const ALL: [VatMode; 4] = [
        VatMode::Standard20,
        VatMode::ReverseCharge20,
        VatMode::ZeroRated,
        VatMode::NotRegistered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VatMode::Standard20 => "STANDARD_20",
            VatMode::ReverseCharge20 => "REVERSE_CHARGE_20",
            VatMode::ZeroRated => "ZERO_RATED",
            VatMode::NotRegistered => "NOT_REGISTERED",
        }
    }
}

impl std::fmt::Display for VatMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for VatMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        VatMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| ConfigError::UnknownVatMode(s.trim().to_string()))
    }
}

/// How the VAT row appears on a rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VatDisplay {
    /// "VAT @ 20%" row with the charged amount
    Charged { rate_percent: Decimal },
    /// "VAT @ 0%" row showing £0.00
    ZeroRated,
    /// £0.00 row plus the mandatory reverse-charge notice
    ReverseCharge,
    /// No VAT row
    Hidden,
}

impl VatDisplay {
    pub fn shows_vat_row(&self) -> bool {
        !matches!(self, VatDisplay::Hidden)
    }

    pub fn requires_reverse_charge_notice(&self) -> bool {
        matches!(self, VatDisplay::ReverseCharge)
    }

    /// Label for the VAT row, `None` when no row is rendered
    pub fn row_label(&self) -> Option<String> {
        match self {
            VatDisplay::Charged { rate_percent } => {
                Some(format!("VAT @ {}%", rate_percent.normalize()))
            }
            VatDisplay::ZeroRated => Some("VAT @ 0% (zero rated)".to_string()),
            VatDisplay::ReverseCharge => Some("VAT (reverse charge)".to_string()),
            VatDisplay::Hidden => None,
        }
    }

    pub fn notice(&self) -> Option<&'static str> {
        self.requires_reverse_charge_notice()
            .then_some(REVERSE_CHARGE_NOTICE)
    }
}
