//! Error types for the pricing engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PricingError {
    #[error("invalid option type {0:?}: expected \"call\" or \"put\"")]
    InvalidOptionType(String),

    #[error("domain error: {0}")]
    Domain(String),
}

pub type PricingResult<T> = Result<T, PricingError>;

impl PricingError {
    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }
}
