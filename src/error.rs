//! Error types for the pricing core.
//!
//! Pricing itself never fails on numeric grounds: out-of-domain inputs yield
//! NaN or infinite prices. The only typed failures are an unrecognised option
//! type coming from a stringly-typed caller and, when validation is requested,
//! a parameter outside its domain.

use thiserror::Error;

/// Convenience alias for results of the pricing core.
pub type Result<T> = std::result::Result<T, PricingError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// Option type string was neither "call" nor "put".
    #[error("invalid option type '{0}': choose 'call' or 'put'")]
    InvalidOptionType(String),

    /// A parameter that must be strictly positive (or finite) was not.
    #[error("invalid parameter {name}={value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl PricingError {
    pub fn invalid_option_type(raw: impl Into<String>) -> Self {
        Self::InvalidOptionType(raw.into())
    }
}
