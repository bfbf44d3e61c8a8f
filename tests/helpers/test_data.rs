// Test Data Factory
//
// Request payloads built around a typical groundworks job so every target
// exercises the same worked figures (subtotal £7,750.00).

use serde_json::{json, Value};
use sitebooks::modules::totals::models::{RawLineItem, TotalsRequest};

pub struct TestDataFactory;

impl TestDataFactory {
    /// Labour, scaffold and skip hire: 3000 + 2750 + 2000 = 7750
    pub fn site_items() -> Vec<RawLineItem> {
        vec![
            RawLineItem::new("Groundworks labour (hours)", 40, 75),
            RawLineItem::new("Scaffold erection", 1, 2750),
            RawLineItem::new("Skip hire (days)", 20, 100),
        ]
    }

    pub fn site_request(vat_mode: &str, retention: u32, cis: u32) -> TotalsRequest {
        TotalsRequest {
            items: Self::site_items(),
            vat_mode: Some(vat_mode.to_string()),
            discount_amount: Some(json!(0)),
            retention_percent: Some(json!(retention)),
            cis_percent: Some(json!(cis)),
            ..Default::default()
        }
    }

    /// JSON body as the invoice form posts it (camelCase, mixed number/string)
    pub fn site_payload(vat_mode: &str, retention: u32, cis: u32) -> Value {
        json!({
            "document_kind": "invoice",
            "items": [
                {"description": "Groundworks labour (hours)", "quantity": 40, "unitPrice": 75},
                {"description": "Scaffold erection", "quantity": "1", "unitPrice": "2750.00"},
                {"description": "Skip hire (days)", "quantity": 20, "unitPrice": 100}
            ],
            "vatMode": vat_mode,
            "discountAmount": 0,
            "retentionPercent": retention,
            "cisPercent": cis
        })
    }

    pub fn single_item_payload(price: &str, discount: &str, vat_mode: &str) -> Value {
        json!({
            "items": [{"description": "Kitchen refit", "quantity": 1, "unit_price": price}],
            "vat_mode": vat_mode,
            "discount_amount": discount
        })
    }
}
