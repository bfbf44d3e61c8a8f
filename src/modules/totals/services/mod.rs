pub mod config_resolver;
pub mod normalizer;
pub mod pipeline;
pub mod presenter;
pub mod totals_service;

pub use config_resolver::resolve;
pub use normalizer::normalize;
pub use pipeline::compute;
pub use presenter::{format_totals, present, present_line};
pub use totals_service::TotalsService;
