//! # BS Pricer - Black-Scholes Pricing Engine
//!
//! A small, pure pricing library for European options under the Black-Scholes
//! model: fair value plus the five standard Greeks (Delta, Gamma, Vega, Theta,
//! Rho) from closed-form formulas.
//!
//! ## Key Components
//!
//! - **Core types**: `OptionType`, `OptionParams`, `Greeks`, typed errors
//! - **Black-Scholes**: price and Greeks sharing one (d1, d2) computation
//!
//! Every operation is a stateless function of its inputs: no caching, no I/O,
//! no shared mutable state. Calls are safe to issue concurrently, and callers
//! that want a curve (e.g. delta against a spot range for plotting) invoke the
//! engine once per sample point.
//!
//! ## Usage
//!
//! ```rust
//! use bs_pricer::prelude::*;
//!
//! let params = OptionParams::new(100.0, 100.0, 1.0, 0.05, 0.20);
//!
//! let call = bs_price(&params, OptionType::Call).unwrap();
//! let sens = bs_greeks(&params, OptionType::Call).unwrap();
//!
//! assert!((call - 10.4506).abs() < 1e-3);
//! assert!(sens.delta > 0.0 && sens.delta < 1.0);
//! ```
//!
//! ## What This Library Does NOT Do
//!
//! - Implied-volatility solving or model calibration
//! - American or exotic exercise styles
//! - Monte Carlo or PDE pricing
//! - Market-data fetching or any rendering/UI concerns

pub mod core;
pub mod models;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{Greeks, OptionParams, OptionType, PricingError, PricingResult};

    // Black-Scholes
    pub use crate::models::{
        d1_d2, greeks as bs_greeks, norm_cdf, norm_pdf, price as bs_price,
    };
}

// Re-export main types at crate root
pub use crate::core::{PricingError, PricingResult};
