use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::line_item::RawLineItem;
use super::totals::DocumentKind;

/// Boundary input for one totals calculation.
///
/// Configuration fields are optional; missing ones fall back to the
/// `DocumentDefaults` the service was built with. Numbers may arrive as JSON
/// numbers or numeric strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TotalsRequest {
    #[serde(default)]
    pub document_kind: DocumentKind,

    #[serde(default)]
    pub items: Vec<RawLineItem>,

    #[serde(default, alias = "vatMode")]
    pub vat_mode: Option<String>,

    #[serde(default, alias = "discountAmount")]
    pub discount_amount: Option<Value>,

    #[serde(default, alias = "retentionPercent")]
    pub retention_percent: Option<Value>,

    #[serde(default, alias = "cisPercent")]
    pub cis_percent: Option<Value>,
}
