pub mod document_config;
pub mod line_item;
pub mod request;
pub mod totals;
pub mod vat_mode;

pub use document_config::{DocumentDefaults, ResolvedConfig};
pub use line_item::{LineItem, PresentedLine, RawLineItem};
pub use request::TotalsRequest;
pub use totals::{DocumentKind, DocumentTotals, FormattedTotals, Totals, TotalsPreview};
pub use vat_mode::{VatDisplay, VatMode, REVERSE_CHARGE_NOTICE, STANDARD_VAT_PERCENT};
