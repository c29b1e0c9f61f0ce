//! Spot/volatility price-sensitivity surface
//!
//! Sweeps the Black-Scholes pricer over an evenly spaced grid of spot prices
//! and volatilities around a base parameter set. Rows follow the spot axis,
//! columns the volatility axis.

pub mod builder;
pub mod types;

pub use builder::*;
pub use types::*;

/// Grid shape and sweep range for a [`SensitivitySurface`].
///
/// Both axes use the same number of points and the same relative range
/// `[lower_factor × base, upper_factor × base]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SurfaceConfig {
    /// Samples per axis (default: 50)
    pub points: usize,
    /// Lower bound as a multiple of the base value (default: 0.5)
    pub lower_factor: f64,
    /// Upper bound as a multiple of the base value (default: 1.5)
    pub upper_factor: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            points: DEFAULT_AXIS_POINTS,
            lower_factor: 0.5,
            upper_factor: 1.5,
        }
    }
}

impl SurfaceConfig {
    /// Coarse grid for quick previews
    pub fn coarse() -> Self {
        Self {
            points: 11,
            ..Self::default()
        }
    }
}

/// Samples per axis of the dashboard surface.
pub const DEFAULT_AXIS_POINTS: usize = 50;
