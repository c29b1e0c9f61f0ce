// Closed-form Black-Scholes pricing for European calls and puts. No dividend
// term and no early exercise; inputs are taken as-is, so non-positive spot,
// strike, maturity or volatility surface as NaN/Inf in the result.

use crate::error::Result;
use crate::models::utils::normal_cdf;
use crate::types::{IntermediateTerms, OptionParameters, OptionType};

/// d1 and d2 for the given parameters.
pub fn d1_d2(params: &OptionParameters) -> IntermediateTerms {
    IntermediateTerms::compute(params)
}

/// Price of a European option under Black-Scholes assumptions.
///
/// * call: `S·Φ(d1) − K·e^(−rT)·Φ(d2)`
/// * put: `K·e^(−rT)·Φ(−d2) − S·Φ(−d1)`
pub fn price(params: &OptionParameters, option_type: OptionType) -> f64 {
    let IntermediateTerms { d1, d2 } = d1_d2(params);
    let discounted_strike = params.strike * params.discount_factor();

    match option_type {
        OptionType::Call => params.spot * normal_cdf(d1) - discounted_strike * normal_cdf(d2),
        OptionType::Put => discounted_strike * normal_cdf(-d2) - params.spot * normal_cdf(-d1),
    }
}

/// Price with the option type given as text ("call" / "put").
///
/// Fails with [`PricingError::InvalidOptionType`](crate::PricingError::InvalidOptionType)
/// for anything else; there is no default side.
pub fn price_str(params: &OptionParameters, option_type: &str) -> Result<f64> {
    Ok(price(params, option_type.parse()?))
}

/// Price of a European call.
#[allow(non_snake_case)]
pub fn bs_call_price(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    price(&OptionParameters::new(S, K, T, r, sigma), OptionType::Call)
}

/// Price of a European put.
#[allow(non_snake_case)]
pub fn bs_put_price(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    price(&OptionParameters::new(S, K, T, r, sigma), OptionType::Put)
}
