//! Sitebooks financial document engine
//!
//! Turns invoice/quote line items plus VAT, discount, retention and CIS
//! settings into the amount a client owes, and serves it over HTTP for the
//! preview, PDF and persistence layers.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

use actix_web::web;

// Re-export commonly used types
pub use modules::totals;
pub use modules::totals::{DocumentTotals, TotalsRequest, TotalsService, VatMode};

/// Mount every route under the service root
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(modules::health::controllers::health_controller::configure)
        .service(web::scope("/api").configure(modules::totals::controllers::totals_controller::configure));
}
