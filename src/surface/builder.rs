use tracing::{debug, warn};

use super::{SensitivitySurface, SurfaceConfig};
use crate::models::bs::price;
use crate::types::{OptionParameters, OptionType};

/// `n` evenly spaced values from `start` to `stop`, both ends included.
///
/// The last sample is set to `stop` exactly so the axis bounds do not drift
/// by rounding. `n == 1` yields `[start]`; `n == 0` yields an empty vector.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        stop
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

/// Sweeps the pricer over a spot × volatility grid.
///
/// Holds only the grid shape; every [`build`](SurfaceBuilder::build) recomputes
/// the full grid from scratch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SurfaceBuilder {
    config: SurfaceConfig,
}

impl SurfaceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SurfaceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    pub fn spot_axis(&self, base: &OptionParameters) -> Vec<f64> {
        linspace(
            self.config.lower_factor * base.spot,
            self.config.upper_factor * base.spot,
            self.config.points,
        )
    }

    pub fn vol_axis(&self, base: &OptionParameters) -> Vec<f64> {
        linspace(
            self.config.lower_factor * base.volatility,
            self.config.upper_factor * base.volatility,
            self.config.points,
        )
    }

    /// Price every (spot, vol) pair with strike, maturity and rate held fixed.
    pub fn build(&self, base: &OptionParameters, option_type: OptionType) -> SensitivitySurface {
        let spot_axis = self.spot_axis(base);
        let vol_axis = self.vol_axis(base);

        let grid: Vec<Vec<f64>> = spot_axis
            .iter()
            .map(|&spot| {
                vol_axis
                    .iter()
                    .map(|&vol| price(&base.with_spot_and_vol(spot, vol), option_type))
                    .collect()
            })
            .collect();

        let surface = SensitivitySurface {
            spot_axis,
            vol_axis,
            grid,
            base: *base,
            option_type,
        };

        let non_finite = surface.non_finite_count();
        if non_finite > 0 {
            warn!(
                non_finite,
                option_type = %option_type,
                "surface contains non-finite prices"
            );
        }
        debug!(
            rows = surface.spot_axis.len(),
            cols = surface.vol_axis.len(),
            range = ?surface.min_max(),
            "surface build complete"
        );

        surface
    }
}

/// Build the default 50 × 50 surface spanning 0.5× to 1.5× of spot and volatility.
pub fn build_surface(base: &OptionParameters, option_type: OptionType) -> SensitivitySurface {
    SurfaceBuilder::new().build(base, option_type)
}

/// As [`build_surface`], with the option type given as text.
pub fn build_surface_str(
    base: &OptionParameters,
    option_type: &str,
) -> crate::error::Result<SensitivitySurface> {
    Ok(build_surface(base, option_type.parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints_and_spacing() {
        let xs = linspace(50.0, 150.0, 5);
        assert_eq!(xs, vec![50.0, 75.0, 100.0, 125.0, 150.0]);
        assert!(linspace(1.0, 2.0, 0).is_empty());
        assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
    }

    #[test]
    fn test_linspace_is_ascending_and_exact_at_bounds() {
        let xs = linspace(0.1, 0.3, 50);
        assert_eq!(xs.len(), 50);
        assert_eq!(xs[0], 0.1);
        assert_eq!(xs[49], 0.3);
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_custom_config_shape() {
        let base = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2);
        let builder = SurfaceBuilder::with_config(SurfaceConfig::coarse());
        let surface = builder.build(&base, OptionType::Put);
        assert_eq!(surface.dims(), (11, 11));
        assert_eq!(surface.spot_axis[5], 100.0);
        assert!((surface.vol_axis[5] - 0.2).abs() < 1e-15);
    }

    #[test]
    fn test_call_prices_increase_along_both_axes() {
        let base = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2);
        let surface = build_surface(&base, OptionType::Call);
        for row in &surface.grid {
            assert!(row.windows(2).all(|w| w[0] < w[1]));
        }
        for j in 0..surface.vol_axis.len() {
            for i in 1..surface.spot_axis.len() {
                assert!(surface.grid[i][j] > surface.grid[i - 1][j]);
            }
        }
    }

    #[test]
    fn test_string_option_type() {
        let base = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2);
        assert!(build_surface_str(&base, "put").is_ok());
        assert!(build_surface_str(&base, "straddle").is_err());
    }

    #[test]
    fn test_min_max_skips_non_finite() {
        // ln(S/K) is NaN for a negative strike
        let base = OptionParameters::new(100.0, -100.0, 1.0, 0.05, 0.2);
        let surface = build_surface(&base, OptionType::Call);
        assert_eq!(surface.non_finite_count(), 2500);
        assert_eq!(surface.min_max(), None);
    }
}
