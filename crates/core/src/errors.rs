//! Core error types for the pricing engine.
//!
//! Resolution itself never fails: a missing price is `None` and a missing
//! photo resolves to a fallback path. Errors only exist at the boundaries
//! where untrusted input is parsed (market cookies, settings, catalog data)
//! and where the admin surface writes prices back to storage.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the pricing engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Market '{0}' is not supported")]
    UnknownMarket(String),

    #[error("Currency '{0}' is not supported")]
    UnsupportedCurrency(String),

    #[error("Invalid exchange rate: {0}")]
    InvalidExchangeRate(String),

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Variant catalog is malformed: {0}")]
    Catalog(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown price column '{0}'")]
    UnknownColumn(String),

    #[error("Variant '{variant}' is not allowed for an entity priced by {mode}")]
    VariantNotInMode { variant: String, mode: String },

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::Json(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
