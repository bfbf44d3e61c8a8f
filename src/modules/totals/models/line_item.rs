// Line items as submitted by the invoice/quote forms and as accepted by the
// totals pipeline.
//
// RawLineItem keeps quantity and price as untyped JSON so form values such as
// "2.5" and 2.5 are both accepted; LineItem is the validated, exact form.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A line item exactly as received from a caller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawLineItem {
    #[serde(default)]
    pub description: String,

    /// Number or numeric string
    #[serde(default)]
    pub quantity: Value,

    /// Number or numeric string, accepts `unitPrice` from the web forms
    #[serde(default, alias = "unitPrice")]
    pub unit_price: Value,
}

impl RawLineItem {
    pub fn new(
        description: impl Into<String>,
        quantity: impl Into<Value>,
        unit_price: impl Into<Value>,
    ) -> Self {
        Self {
            description: description.into(),
            quantity: quantity.into(),
            unit_price: unit_price.into(),
        }
    }
}

/// A validated line item. Built only by the normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    description: String,
    quantity: Decimal,
    unit_price: Decimal,
}

impl LineItem {
    pub(crate) fn new_unchecked(description: String, quantity: Decimal, unit_price: Decimal) -> Self {
        Self {
            description,
            quantity,
            unit_price,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Exact `quantity * unit_price`, not rounded
    pub fn line_total(&self) -> Decimal {
        self.quantity * self.unit_price
    }
}

/// A line as printed on a document: rounded line total alongside the inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentedLine {
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}
