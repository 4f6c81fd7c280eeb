//! Core data types for the pricing engine
//!
//! Defines fundamental types:
//! - OptionType: Call/Put selector
//! - OptionParams: spot, strike, maturity, rate, vol
//! - Greeks: Delta, Gamma, Vega, Theta, Rho
//! - PricingError: typed failures (invalid option type, domain violations)

pub mod error;
pub mod greeks;
pub mod option;
pub mod params;

pub use error::*;
pub use greeks::*;
pub use option::*;
pub use params::*;
