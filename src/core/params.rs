//! Option parameter set
//!
//! The five scalar inputs of the Black-Scholes model, bundled as an immutable
//! value type. The formulas are undefined for non-positive spot, strike,
//! maturity, or volatility; `validate` rejects those inputs up front instead
//! of letting NaN/infinity leak out of the math.

use serde::{Deserialize, Serialize};

use crate::core::{PricingError, PricingResult};

/// Black-Scholes input parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionParams {
    /// Current price of the underlying (S)
    pub spot: f64,
    /// Exercise price (K)
    pub strike: f64,
    /// Time to expiry in years (T)
    pub maturity: f64,
    /// Continuously-compounded risk-free rate (r), may be negative
    pub rate: f64,
    /// Annualized volatility of log-returns (sigma)
    pub vol: f64,
}

impl OptionParams {
    pub fn new(spot: f64, strike: f64, maturity: f64, rate: f64, vol: f64) -> Self {
        Self {
            spot,
            strike,
            maturity,
            rate,
            vol,
        }
    }

    /// Check the domain invariant: S > 0, K > 0, T > 0, sigma > 0, all finite.
    pub fn validate(&self) -> PricingResult<()> {
        for (name, value) in [
            ("spot", self.spot),
            ("strike", self.strike),
            ("maturity", self.maturity),
            ("rate", self.rate),
            ("vol", self.vol),
        ] {
            if !value.is_finite() {
                return Err(PricingError::domain(format!("{} is not finite: {}", name, value)));
            }
        }

        for (name, value) in [
            ("spot", self.spot),
            ("strike", self.strike),
            ("maturity", self.maturity),
            ("vol", self.vol),
        ] {
            if value <= 0.0 {
                return Err(PricingError::domain(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }

    /// Discount factor e^(-rT)
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }

    /// Log-moneyness: ln(S/K)
    pub fn log_moneyness(&self) -> f64 {
        (self.spot / self.strike).ln()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_params() {
        let params = OptionParams::new(100.0, 100.0, 1.0, 0.05, 0.2);
        assert!(params.validate().is_ok());

        // Negative rates are within the domain
        let params = OptionParams::new(100.0, 100.0, 1.0, -0.01, 0.2);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_non_positive_rejected() {
        let base = OptionParams::new(100.0, 100.0, 1.0, 0.05, 0.2);

        let cases = [
            OptionParams { spot: 0.0, ..base },
            OptionParams { spot: -5.0, ..base },
            OptionParams { strike: 0.0, ..base },
            OptionParams { maturity: 0.0, ..base },
            OptionParams { maturity: -1.0, ..base },
            OptionParams { vol: 0.0, ..base },
            OptionParams { vol: -0.2, ..base },
        ];

        for params in cases {
            match params.validate() {
                Err(PricingError::Domain(_)) => {}
                other => panic!("expected Domain error for {:?}, got {:?}", params, other),
            }
        }
    }

    #[test]
    fn test_non_finite_rejected() {
        let base = OptionParams::new(100.0, 100.0, 1.0, 0.05, 0.2);

        let cases = [
            OptionParams {
                spot: f64::NAN,
                ..base
            },
            OptionParams {
                rate: f64::INFINITY,
                ..base
            },
            OptionParams {
                vol: f64::NEG_INFINITY,
                ..base
            },
        ];

        for params in cases {
            assert!(params.validate().is_err());
        }
    }

    #[test]
    fn test_helpers() {
        let params = OptionParams::new(100.0, 100.0, 1.0, 0.05, 0.2);
        assert!((params.discount_factor() - (-0.05f64).exp()).abs() < 1e-15);
        assert_eq!(params.log_moneyness(), 0.0);
    }
}
