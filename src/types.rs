use std::fmt;
use std::str::FromStr;

use crate::error::{PricingError, Result};

/// European option side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    #[default]
    Call,
    Put,
}

impl OptionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    /// Accepts "call" or "put" in any letter case; anything else is rejected.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(PricingError::invalid_option_type(s)),
        }
    }
}

/// The five scalar Black-Scholes inputs.
///
/// Construction through [`OptionParameters::new`] is unvalidated: spot, strike,
/// maturity and volatility are expected to be strictly positive, but nothing
/// stops a caller from passing zero or negative values. The formulas then
/// produce NaN or infinite results rather than an error. Use
/// [`OptionParameters::validated`] (or [`OptionParameters::validate`]) to reject
/// such inputs up front.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionParameters {
    /// Spot price of the underlying (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to maturity in years (T)
    pub time_to_maturity: f64,
    /// Continuously compounded risk-free rate (r), may be zero or negative
    pub rate: f64,
    /// Annualised volatility (sigma)
    pub volatility: f64,
}

impl OptionParameters {
    /// Creates parameters without any domain checks.
    pub fn new(spot: f64, strike: f64, time_to_maturity: f64, rate: f64, volatility: f64) -> Self {
        Self {
            spot,
            strike,
            time_to_maturity,
            rate,
            volatility,
        }
    }

    /// Creates parameters and rejects values outside the model's domain.
    pub fn validated(
        spot: f64,
        strike: f64,
        time_to_maturity: f64,
        rate: f64,
        volatility: f64,
    ) -> Result<Self> {
        let params = Self::new(spot, strike, time_to_maturity, rate, volatility);
        params.validate()?;
        Ok(params)
    }

    /// Checks S, K, T and sigma are finite and > 0, and r is finite.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("spot", self.spot),
            ("strike", self.strike),
            ("time_to_maturity", self.time_to_maturity),
            ("volatility", self.volatility),
        ] {
            if !value.is_finite() {
                return Err(PricingError::InvalidParameter {
                    name,
                    value,
                    reason: "must be finite",
                });
            }
            if value <= 0.0 {
                return Err(PricingError::InvalidParameter {
                    name,
                    value,
                    reason: "must be > 0",
                });
            }
        }
        if !self.rate.is_finite() {
            return Err(PricingError::InvalidParameter {
                name: "rate",
                value: self.rate,
                reason: "must be finite",
            });
        }
        Ok(())
    }

    /// Copy with a different spot and volatility, used by the surface sweep.
    pub fn with_spot_and_vol(&self, spot: f64, volatility: f64) -> Self {
        Self {
            spot,
            volatility,
            ..*self
        }
    }

    /// Discount factor e^(-rT).
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.time_to_maturity).exp()
    }
}

/// Standardised log-moneyness terms shared by price and Greeks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntermediateTerms {
    pub d1: f64,
    pub d2: f64,
}

impl IntermediateTerms {
    /// d1 = (ln(S/K) + (r + sigma^2/2)T) / (sigma sqrt(T)), d2 = d1 - sigma sqrt(T)
    pub fn compute(params: &OptionParameters) -> Self {
        let OptionParameters {
            spot: s,
            strike: k,
            time_to_maturity: t,
            rate: r,
            volatility: sigma,
        } = *params;

        let vol_sqrt_t = sigma * t.sqrt();
        let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / vol_sqrt_t;
        Self {
            d1,
            d2: d1 - vol_sqrt_t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_type_parses_case_insensitively() {
        assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("PUT".parse::<OptionType>().unwrap(), OptionType::Put);
        assert_eq!(" Call ".parse::<OptionType>().unwrap(), OptionType::Call);
    }

    #[test]
    fn option_type_rejects_unknown() {
        let err = "straddle".parse::<OptionType>().unwrap_err();
        assert_eq!(err, PricingError::InvalidOptionType("straddle".into()));
    }

    #[test]
    fn validation_rejects_non_positive_inputs() {
        assert!(OptionParameters::validated(100.0, 100.0, 1.0, 0.05, 0.2).is_ok());
        assert!(OptionParameters::validated(100.0, 100.0, 1.0, -0.01, 0.2).is_ok());
        assert!(OptionParameters::validated(0.0, 100.0, 1.0, 0.05, 0.2).is_err());
        assert!(OptionParameters::validated(100.0, -5.0, 1.0, 0.05, 0.2).is_err());
        assert!(OptionParameters::validated(100.0, 100.0, 0.0, 0.05, 0.2).is_err());
        assert!(OptionParameters::validated(100.0, 100.0, 1.0, 0.05, 0.0).is_err());
        assert!(OptionParameters::validated(100.0, 100.0, 1.0, f64::NAN, 0.2).is_err());
        assert!(OptionParameters::validated(f64::INFINITY, 100.0, 1.0, 0.05, 0.2).is_err());
    }

    #[test]
    fn validation_reports_offending_field() {
        let err = OptionParameters::validated(100.0, 100.0, 1.0, 0.05, -0.2).unwrap_err();
        match err {
            PricingError::InvalidParameter { name, value, .. } => {
                assert_eq!(name, "volatility");
                assert_eq!(value, -0.2);
            }
            _ => panic!("wrong variant"),
        }
    }

    #[test]
    fn intermediate_terms_reference_values() {
        let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2);
        let terms = IntermediateTerms::compute(&params);
        assert!((terms.d1 - 0.35).abs() < 1e-12);
        assert!((terms.d2 - 0.15).abs() < 1e-12);
    }
}
