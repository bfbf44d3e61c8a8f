use rust_decimal::Decimal;
use serde_json::Value;

use crate::core::money::{decimal_from_json, describe_json};
use crate::core::ConfigError;
use crate::modules::totals::models::{ResolvedConfig, VatDisplay, VatMode, STANDARD_VAT_PERCENT};

const ONE_HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Turns the VAT mode and deduction settings into pipeline coefficients.
///
/// Out-of-range values are rejected, never clamped.
pub fn resolve(
    vat_mode: VatMode,
    discount_amount: Decimal,
    retention_percent: Decimal,
    cis_percent: Decimal,
) -> Result<ResolvedConfig, ConfigError> {
    if discount_amount < Decimal::ZERO {
        return Err(ConfigError::NegativeDiscount(discount_amount));
    }
    check_percent("retention_percent", retention_percent)?;
    check_percent("cis_percent", cis_percent)?;

    let (vat_coefficient, vat_display) = vat_treatment(vat_mode);

    Ok(ResolvedConfig {
        vat_mode,
        vat_coefficient,
        vat_display,
        discount_amount,
        retention_percent,
        retention_rate: retention_percent / ONE_HUNDRED,
        cis_percent,
        cis_rate: cis_percent / ONE_HUNDRED,
    })
}

/// Numeric VAT coefficient and display policy for a mode.
///
/// Reverse charge contributes nothing numerically; only its display differs
/// from zero rating.
pub fn vat_treatment(vat_mode: VatMode) -> (Decimal, VatDisplay) {
    match vat_mode {
        VatMode::Standard20 => (
            STANDARD_VAT_PERCENT / ONE_HUNDRED,
            VatDisplay::Charged {
                rate_percent: STANDARD_VAT_PERCENT,
            },
        ),
        VatMode::ReverseCharge20 => (Decimal::ZERO, VatDisplay::ReverseCharge),
        VatMode::ZeroRated => (Decimal::ZERO, VatDisplay::ZeroRated),
        VatMode::NotRegistered => (Decimal::ZERO, VatDisplay::Hidden),
    }
}

/// Parses a raw JSON setting; `None` means the caller supplied nothing.
pub fn parse_setting(field: &'static str, value: Option<&Value>) -> Result<Option<Decimal>, ConfigError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(raw) => decimal_from_json(raw)
            .map(Some)
            .ok_or_else(|| ConfigError::InvalidNumber {
                field,
                value: describe_json(raw),
            }),
    }
}

fn check_percent(field: &'static str, value: Decimal) -> Result<(), ConfigError> {
    if value < Decimal::ZERO || value > ONE_HUNDRED {
        return Err(ConfigError::PercentOutOfRange { field, value });
    }
    Ok(())
}
