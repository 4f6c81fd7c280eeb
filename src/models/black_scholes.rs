//! Black-Scholes Model
//!
//! Provides:
//! - European option pricing (closed form)
//! - Greeks computation (Delta, Gamma, Vega, Theta, Rho)
//!
//! Price and Greeks share the same (d1, d2) helper so that sensitivities are
//! always consistent with the price for the same inputs. Inputs are validated
//! up front; out-of-domain parameters fail with a typed error rather than
//! producing NaN or infinity.

use std::f64::consts::PI;

use statrs::distribution::{ContinuousCDF, Normal};

use crate::core::{Greeks, OptionParams, OptionType, PricingResult};

/// Standard normal CDF
pub fn norm_cdf(x: f64) -> f64 {
    let normal = Normal::new(0.0, 1.0).unwrap();
    normal.cdf(x)
}

/// Standard normal PDF
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Black-Scholes (d1, d2) pair
///
/// d1 = (ln(S/K) + (r + σ²/2)T) / (σ√T), d2 = d1 − σ√T.
/// Assumes `params` satisfies the domain invariant (see `OptionParams::validate`).
pub fn d1_d2(params: &OptionParams) -> (f64, f64) {
    let sqrt_t = params.maturity.sqrt();
    let d1 = (params.log_moneyness()
        + (params.rate + 0.5 * params.vol * params.vol) * params.maturity)
        / (params.vol * sqrt_t);
    let d2 = d1 - params.vol * sqrt_t;
    (d1, d2)
}

/// Black-Scholes European option price
pub fn price(params: &OptionParams, option_type: OptionType) -> PricingResult<f64> {
    params.validate()?;

    let (d1, d2) = d1_d2(params);
    let df = params.discount_factor();

    let value = match option_type {
        OptionType::Call => params.spot * norm_cdf(d1) - params.strike * df * norm_cdf(d2),
        OptionType::Put => params.strike * df * norm_cdf(-d2) - params.spot * norm_cdf(-d1),
    };

    Ok(value)
}

/// Black-Scholes Greeks
///
/// All five sensitivities are derived from a single (d1, d2) evaluation.
pub fn greeks(params: &OptionParams, option_type: OptionType) -> PricingResult<Greeks> {
    params.validate()?;

    let (d1, d2) = d1_d2(params);
    let df = params.discount_factor();
    let sqrt_t = params.maturity.sqrt();
    let pdf_d1 = norm_pdf(d1);

    let delta = match option_type {
        OptionType::Call => norm_cdf(d1),
        OptionType::Put => norm_cdf(d1) - 1.0,
    };

    // Gamma and vega are identical for calls and puts
    let gamma = pdf_d1 / (params.spot * params.vol * sqrt_t);
    let vega = params.spot * pdf_d1 * sqrt_t;

    let decay = -params.spot * pdf_d1 * params.vol / (2.0 * sqrt_t);
    let carry = params.rate * params.strike * df;
    let theta = match option_type {
        OptionType::Call => decay - carry * norm_cdf(d2),
        OptionType::Put => decay + carry * norm_cdf(-d2),
    };

    let rho = match option_type {
        OptionType::Call => params.strike * params.maturity * df * norm_cdf(d2),
        OptionType::Put => -params.strike * params.maturity * df * norm_cdf(-d2),
    };

    Ok(Greeks::new(delta, gamma, vega, theta, rho))
}
