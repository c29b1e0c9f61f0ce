pub mod bs;
pub mod greeks;

/// Standard normal distribution helpers shared by the pricer and the Greeks
pub mod utils {
    use std::f64::consts::{FRAC_1_SQRT_2, PI};

    /// Standard normal cumulative distribution function Φ(x).
    ///
    /// Written as `0.5 * erfc(-x / sqrt(2))` rather than `0.5 * (1 + erf(..))`
    /// so the lower tail keeps full relative precision instead of cancelling
    /// against 1.
    pub fn normal_cdf(x: f64) -> f64 {
        0.5 * libm::erfc(-x * FRAC_1_SQRT_2)
    }

    /// Standard normal probability density function φ(x)
    pub fn normal_pdf(x: f64) -> f64 {
        (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
    }

}
