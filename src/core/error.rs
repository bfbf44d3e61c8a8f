use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use rust_decimal::Decimal;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Raised by the line-item normalizer when a raw item cannot become a `LineItem`.
///
/// `index` is the zero-based position of the offending item in the submitted list.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Line item {index}: description cannot be empty")]
    EmptyDescription { index: usize },

    #[error("Line item {index}: {field} must be a finite decimal number, got '{value}'")]
    InvalidNumber {
        index: usize,
        field: &'static str,
        value: String,
    },

    #[error("Line item {index}: quantity must be greater than zero, got {value}")]
    NonPositiveQuantity { index: usize, value: Decimal },

    #[error("Line item {index}: unit_price must be non-negative, got {value}")]
    NegativeUnitPrice { index: usize, value: Decimal },

    #[error("Line item {index}: {field} exceeds the maximum of {limit}")]
    AmountTooLarge {
        index: usize,
        field: &'static str,
        limit: Decimal,
    },

    #[error("Line item {index}: document subtotal exceeds the maximum of {limit}")]
    SubtotalTooLarge { index: usize, limit: Decimal },
}

/// Raised by the configuration resolver for VAT mode and deduction settings.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "Unknown VAT mode '{0}', expected one of STANDARD_20, REVERSE_CHARGE_20, ZERO_RATED, NOT_REGISTERED"
    )]
    UnknownVatMode(String),

    #[error("{field} must be a finite decimal number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("discount_amount cannot be negative, got {0}")]
    NegativeDiscount(Decimal),

    #[error("{field} must be between 0 and 100, got {value}")]
    PercentOutOfRange { field: &'static str, value: Decimal },
}

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// A submitted line item failed validation
    #[error("Validation error: {0}")]
    LineItem(#[from] ValidationError),

    /// VAT mode, discount or deduction settings are invalid
    #[error("Configuration error: {0}")]
    DocumentConfig(#[from] ConfigError),

    /// Service configuration (environment) errors
    #[error("Service configuration error: {0}")]
    Configuration(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Short machine-readable tag included in error bodies
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::LineItem(_) => "validation_error",
            AppError::DocumentConfig(_) => "config_error",
            AppError::Configuration(_) => "service_configuration_error",
            AppError::Json(_) => "invalid_json",
            AppError::Internal(_) => "internal_error",
        }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": {
                "message": self.to_string(),
                "code": status_code.as_u16(),
                "kind": self.kind(),
            }
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::LineItem(_) => StatusCode::BAD_REQUEST,
            AppError::DocumentConfig(_) => StatusCode::BAD_REQUEST,
            AppError::Json(_) => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
