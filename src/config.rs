use crate::dashboard::{DashboardInputs, ValidationMode};
use crate::render::HeatmapConfig;
use crate::surface::SurfaceConfig;
use crate::types::{OptionParameters, OptionType};

/// Initial form values, matching the defaults a user sees before editing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefaultInputs {
    #[cfg_attr(feature = "serde", serde(default = "default_spot"))]
    pub spot: f64,

    #[cfg_attr(feature = "serde", serde(default = "default_strike"))]
    pub strike: f64,

    /// Years
    #[cfg_attr(feature = "serde", serde(default = "default_time_to_maturity"))]
    pub time_to_maturity: f64,

    #[cfg_attr(feature = "serde", serde(default = "default_rate"))]
    pub rate: f64,

    #[cfg_attr(feature = "serde", serde(default = "default_volatility"))]
    pub volatility: f64,

    #[cfg_attr(feature = "serde", serde(default))]
    pub option_type: OptionType,
}

impl Default for DefaultInputs {
    fn default() -> Self {
        Self {
            spot: default_spot(),
            strike: default_strike(),
            time_to_maturity: default_time_to_maturity(),
            rate: default_rate(),
            volatility: default_volatility(),
            option_type: OptionType::default(),
        }
    }
}

impl DefaultInputs {
    pub fn parameters(&self) -> OptionParameters {
        OptionParameters::new(
            self.spot,
            self.strike,
            self.time_to_maturity,
            self.rate,
            self.volatility,
        )
    }

    /// Form state with every field filled from these defaults.
    pub fn to_inputs(&self) -> DashboardInputs {
        DashboardInputs::complete(&self.parameters(), self.option_type)
    }
}

/// Top-level dashboard configuration.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DashboardConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    pub inputs: DefaultInputs,

    /// Sensitivity grid shape
    #[cfg_attr(feature = "serde", serde(default))]
    pub surface: SurfaceConfig,

    /// Whether out-of-domain inputs are rejected or priced as-is
    #[cfg_attr(feature = "serde", serde(default))]
    pub validation: ValidationMode,

    #[cfg_attr(feature = "serde", serde(default))]
    pub heatmap: HeatmapConfig,
}

impl DashboardConfig {
    /// Standard 50 × 50 dashboard, permissive inputs
    pub fn standard() -> Self {
        Self::default()
    }

    /// Rejects non-positive spot, strike, maturity or volatility
    pub fn strict() -> Self {
        Self {
            validation: ValidationMode::Strict,
            ..Self::default()
        }
    }

    /// Coarse grid and small image for quick checks
    pub fn preview() -> Self {
        Self {
            surface: SurfaceConfig::coarse(),
            heatmap: HeatmapConfig {
                width: 640,
                height: 480,
                ..HeatmapConfig::default()
            },
            ..Self::default()
        }
    }
}

#[cfg(feature = "serde")]
impl DashboardConfig {
    /// Parse a TOML document; absent keys take their defaults.
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.check()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        use anyhow::Context;

        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loading dashboard config");
        Self::from_toml_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }
}

impl DashboardConfig {
    /// Sanity checks that serde cannot express.
    pub fn check(&self) -> anyhow::Result<()> {
        let s = &self.surface;
        if s.points == 0 {
            anyhow::bail!("surface.points must be at least 1");
        }
        if !(s.lower_factor.is_finite() && s.upper_factor.is_finite())
            || s.lower_factor > s.upper_factor
        {
            anyhow::bail!(
                "surface range [{}, {}] must be finite and ascending",
                s.lower_factor,
                s.upper_factor
            );
        }
        if self.heatmap.width == 0 || self.heatmap.height == 0 {
            anyhow::bail!("heatmap dimensions must be non-zero");
        }
        Ok(())
    }
}

fn default_spot() -> f64 {
    100.0
}

fn default_strike() -> f64 {
    100.0
}

fn default_time_to_maturity() -> f64 {
    1.0
}

fn default_rate() -> f64 {
    0.05
}

fn default_volatility() -> f64 {
    0.2
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = DashboardConfig::from_toml_str("").unwrap();
        assert_eq!(config, DashboardConfig::standard());
        assert_eq!(config.surface.points, 50);
        assert_eq!(config.inputs.spot, 100.0);
        assert_eq!(config.validation, ValidationMode::Permissive);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = DashboardConfig::from_toml_str(
            r#"
validation = "strict"

[inputs]
spot = 120.0
option_type = "put"

[surface]
points = 21
"#,
        )
        .unwrap();
        assert_eq!(config.validation, ValidationMode::Strict);
        assert_eq!(config.inputs.spot, 120.0);
        assert_eq!(config.inputs.strike, 100.0);
        assert_eq!(config.inputs.option_type, OptionType::Put);
        assert_eq!(config.surface.points, 21);
        assert_eq!(config.surface.upper_factor, 1.5);
    }

    #[test]
    fn unknown_option_type_is_rejected() {
        let err = DashboardConfig::from_toml_str("[inputs]\noption_type = \"straddle\"\n");
        assert!(err.is_err());
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = DashboardConfig::from_toml_str(
            "[surface]\nlower_factor = 2.0\nupper_factor = 1.0\n",
        );
        assert!(err.is_err());
    }

    #[test]
    fn presets_differ_where_expected() {
        assert_eq!(DashboardConfig::strict().validation, ValidationMode::Strict);
        assert_eq!(DashboardConfig::preview().surface.points, 11);
        assert!(DashboardConfig::preview().check().is_ok());
    }
}
