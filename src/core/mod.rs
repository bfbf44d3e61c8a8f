pub mod error;
pub mod money;

pub use error::{AppError, ConfigError, Result, ValidationError};
pub use money::{format_money, round_money};
