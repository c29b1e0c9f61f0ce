//! Black-Scholes Greeks.
//!
//! Both call and put variants are computed on every call; the caller picks the
//! half it needs. Gamma and vega are the same for either side. Theta is quoted
//! per calendar day, i.e. the annual theta divided by [`DAYS_PER_YEAR`].

use std::fmt;
use std::str::FromStr;

use crate::models::utils::{normal_cdf, normal_pdf};
use crate::types::{IntermediateTerms, OptionParameters, OptionType};

/// Divisor turning annual theta into daily decay.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Names of the eight reported sensitivities, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GreeksKey {
    DeltaCall,
    DeltaPut,
    Gamma,
    Vega,
    ThetaCall,
    ThetaPut,
    RhoCall,
    RhoPut,
}

impl GreeksKey {
    pub const ALL: [GreeksKey; 8] = [
        GreeksKey::DeltaCall,
        GreeksKey::DeltaPut,
        GreeksKey::Gamma,
        GreeksKey::Vega,
        GreeksKey::ThetaCall,
        GreeksKey::ThetaPut,
        GreeksKey::RhoCall,
        GreeksKey::RhoPut,
    ];

    /// Display name, e.g. "Delta Call".
    pub fn label(&self) -> &'static str {
        match self {
            GreeksKey::DeltaCall => "Delta Call",
            GreeksKey::DeltaPut => "Delta Put",
            GreeksKey::Gamma => "Gamma",
            GreeksKey::Vega => "Vega",
            GreeksKey::ThetaCall => "Theta Call",
            GreeksKey::ThetaPut => "Theta Put",
            GreeksKey::RhoCall => "Rho Call",
            GreeksKey::RhoPut => "Rho Put",
        }
    }

    /// Keys relevant to one side: delta, gamma, vega, theta, rho.
    pub fn for_option_type(option_type: OptionType) -> [GreeksKey; 5] {
        match option_type {
            OptionType::Call => [
                GreeksKey::DeltaCall,
                GreeksKey::Gamma,
                GreeksKey::Vega,
                GreeksKey::ThetaCall,
                GreeksKey::RhoCall,
            ],
            OptionType::Put => [
                GreeksKey::DeltaPut,
                GreeksKey::Gamma,
                GreeksKey::Vega,
                GreeksKey::ThetaPut,
                GreeksKey::RhoPut,
            ],
        }
    }
}

impl fmt::Display for GreeksKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GreeksKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        GreeksKey::ALL
            .into_iter()
            .find(|key| key.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow::anyhow!("Unknown Greek name: {}", s))
    }
}

/// The eight Black-Scholes sensitivities for one parameter set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreeksReport {
    /// ∂C/∂S = Φ(d1)
    pub delta_call: f64,
    /// ∂P/∂S = −Φ(−d1)
    pub delta_put: f64,
    /// ∂²V/∂S², same for calls and puts
    pub gamma: f64,
    /// ∂V/∂σ per unit of volatility, same for calls and puts
    pub vega: f64,
    /// Daily call theta
    pub theta_call: f64,
    /// Daily put theta
    pub theta_put: f64,
    /// ∂C/∂r per unit of rate
    pub rho_call: f64,
    /// ∂P/∂r per unit of rate
    pub rho_put: f64,
}

impl GreeksReport {
    pub fn get(&self, key: GreeksKey) -> f64 {
        match key {
            GreeksKey::DeltaCall => self.delta_call,
            GreeksKey::DeltaPut => self.delta_put,
            GreeksKey::Gamma => self.gamma,
            GreeksKey::Vega => self.vega,
            GreeksKey::ThetaCall => self.theta_call,
            GreeksKey::ThetaPut => self.theta_put,
            GreeksKey::RhoCall => self.rho_call,
            GreeksKey::RhoPut => self.rho_put,
        }
    }

    /// Look up a value by its display name ("Delta Call", "gamma", ...).
    pub fn get_by_name(&self, name: &str) -> Option<f64> {
        name.parse::<GreeksKey>().ok().map(|key| self.get(key))
    }

    /// (key, value) pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (GreeksKey, f64)> + '_ {
        GreeksKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }

    /// True when every entry is a finite number.
    pub fn is_finite(&self) -> bool {
        self.iter().all(|(_, v)| v.is_finite())
    }
}

/// Compute all eight Greeks.
///
/// d1 and d2 are recomputed here rather than shared with the pricer, so the
/// two stay independent and stateless.
pub fn greeks(params: &OptionParameters) -> GreeksReport {
    let IntermediateTerms { d1, d2 } = IntermediateTerms::compute(params);
    let OptionParameters {
        spot: s,
        strike: k,
        time_to_maturity: t,
        rate: r,
        volatility: sigma,
    } = *params;

    let sqrt_t = t.sqrt();
    let pdf_d1 = normal_pdf(d1);
    let discounted_strike = k * params.discount_factor();

    // Shared diffusion part of theta
    let theta_decay = -s * pdf_d1 * sigma / (2.0 * sqrt_t);

    GreeksReport {
        delta_call: normal_cdf(d1),
        delta_put: -normal_cdf(-d1),
        gamma: pdf_d1 / (s * sigma * sqrt_t),
        vega: s * pdf_d1 * sqrt_t,
        theta_call: (theta_decay - r * discounted_strike * normal_cdf(d2)) / DAYS_PER_YEAR,
        theta_put: (theta_decay + r * discounted_strike * normal_cdf(-d2)) / DAYS_PER_YEAR,
        rho_call: discounted_strike * t * normal_cdf(d2),
        rho_put: -discounted_strike * t * normal_cdf(-d2),
    }
}
