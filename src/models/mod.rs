//! Pricing models
//!
//! - black_scholes: closed-form European pricing and Greeks

pub mod black_scholes;

pub use black_scholes::{d1_d2, greeks, norm_cdf, norm_pdf, price};
