pub mod controllers;
pub mod models;
pub mod services;

pub use models::{DocumentTotals, LineItem, RawLineItem, Totals, TotalsRequest, VatMode};
pub use services::TotalsService;
