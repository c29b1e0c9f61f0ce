//! # bs-surface-lib: Black-Scholes Pricing, Greeks and Sensitivity Surfaces
//!
//! `bs-surface-lib` prices European options in closed form under the
//! Black-Scholes model, reports the standard risk sensitivities, and sweeps the
//! price over a grid of spot prices and volatilities to build a sensitivity
//! heatmap.
//!
//! ## Core Features
//!
//! - **Pricer**: closed-form call and put prices with an accurate Φ
//! - **Greeks**: delta, gamma, vega, daily theta and rho for both sides at once
//! - **Sensitivity surface**: 50 × 50 price grid over 0.5×–1.5× spot and volatility
//! - **Dashboard**: formatted price and Greeks text, SVG heatmap and CSV export
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_surface_lib::{build_surface, greeks, price, OptionParameters, OptionType};
//!
//! let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2);
//!
//! let call = price(&params, OptionType::Call);
//! assert!((call - 10.45).abs() < 0.01);
//!
//! let report = greeks(&params);
//! assert!((report.delta_call - 0.6368).abs() < 1e-4);
//!
//! let surface = build_surface(&params, OptionType::Call);
//! assert_eq!(surface.dims(), (50, 50));
//! ```
//!
//! ## Input Domain
//!
//! Spot, strike, maturity and volatility must be strictly positive for the
//! formulas to be defined. [`OptionParameters::new`] does not check this and
//! out-of-domain inputs produce NaN or infinite results; use
//! [`OptionParameters::validated`] or [`ValidationMode::Strict`] to reject them.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod config;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod models;
pub mod render;
pub mod report;
pub mod surface;
pub mod types;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Value types and errors
pub use error::{PricingError, Result};
pub use types::{IntermediateTerms, OptionParameters, OptionType};

// Pricing core
pub use models::bs::{bs_call_price, bs_put_price, d1_d2, price, price_str};
pub use models::greeks::{greeks, GreeksKey, GreeksReport, DAYS_PER_YEAR};
pub use models::utils::{normal_cdf, normal_pdf};
pub use surface::{
    build_surface, build_surface_str, linspace, SensitivitySurface, SurfaceBuilder,
    SurfaceConfig, DEFAULT_AXIS_POINTS,
};

// Dashboard pipeline and presentation
pub use config::{DashboardConfig, DefaultInputs};
pub use dashboard::{
    evaluate, evaluate_dashboard, DashboardInputs, DashboardOutput, DashboardResults,
    ValidationMode,
};
pub use export::{read_surface_csv, write_surface_csv, write_surface_csv_file};
pub use render::{render_heatmap_svg, render_heatmap_svg_string, HeatmapConfig};
pub use report::{format_greeks, format_price, INCOMPLETE_INPUT_MESSAGE};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured dashboard settings.
///
/// - [`standard()`]: 50 × 50 surface, inputs priced as given
/// - [`strict()`]: as standard, but rejects non-positive S, K, T or sigma
/// - [`preview()`]: 11 × 11 surface and a smaller image
pub mod default_configs {
    use crate::config::DashboardConfig;

    /// Standard dashboard configuration.
    ///
    /// ```rust
    /// use bs_surface_lib::default_configs;
    ///
    /// let config = default_configs::standard();
    /// assert_eq!(config.surface.points, 50);
    /// ```
    pub fn standard() -> DashboardConfig {
        DashboardConfig::standard()
    }

    /// Strict input validation.
    pub fn strict() -> DashboardConfig {
        DashboardConfig::strict()
    }

    /// Coarse grid for quick checks.
    pub fn preview() -> DashboardConfig {
        DashboardConfig::preview()
    }
}
