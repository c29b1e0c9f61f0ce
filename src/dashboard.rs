//! One evaluation of the pricing dashboard.
//!
//! Takes the form state (five possibly-missing numbers and an option type),
//! and runs pricer, Greeks and surface sweep in sequence. Nothing is cached
//! between calls, so evaluations may run concurrently on any thread.

use tracing::{debug, warn};

use crate::config::DashboardConfig;
use crate::error::Result;
use crate::models::bs::price;
use crate::models::greeks::{greeks, GreeksReport};
use crate::report::{format_greeks, format_price, INCOMPLETE_INPUT_MESSAGE};
use crate::surface::{SensitivitySurface, SurfaceBuilder};
use crate::types::{OptionParameters, OptionType};

/// How out-of-domain inputs (non-positive S, K, T or sigma) are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ValidationMode {
    /// Price anyway; results may be NaN or infinite.
    #[default]
    Permissive,
    /// Reject with [`PricingError::InvalidParameter`](crate::PricingError::InvalidParameter).
    Strict,
}

/// Raw form state. `None` marks a field the user has not filled in.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashboardInputs {
    pub spot: Option<f64>,
    pub strike: Option<f64>,
    pub time_to_maturity: Option<f64>,
    pub rate: Option<f64>,
    pub volatility: Option<f64>,
    pub option_type: OptionType,
}

impl DashboardInputs {
    pub fn complete(params: &OptionParameters, option_type: OptionType) -> Self {
        Self {
            spot: Some(params.spot),
            strike: Some(params.strike),
            time_to_maturity: Some(params.time_to_maturity),
            rate: Some(params.rate),
            volatility: Some(params.volatility),
            option_type,
        }
    }

    /// Parameters, or `None` while any field is still empty.
    pub fn parameters(&self) -> Option<OptionParameters> {
        Some(OptionParameters::new(
            self.spot?,
            self.strike?,
            self.time_to_maturity?,
            self.rate?,
            self.volatility?,
        ))
    }
}

/// Everything the dashboard displays for one set of inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardOutput {
    /// At least one input missing; nothing was computed.
    Incomplete { message: &'static str },
    Ready(Box<DashboardResults>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardResults {
    pub params: OptionParameters,
    pub option_type: OptionType,
    pub price: f64,
    /// Price to two decimals
    pub price_text: String,
    pub greeks: GreeksReport,
    /// "Name: value" lines, four decimals
    pub greeks_text: String,
    pub surface: SensitivitySurface,
}

impl DashboardOutput {
    pub fn is_ready(&self) -> bool {
        matches!(self, DashboardOutput::Ready(_))
    }

    pub fn results(&self) -> Option<&DashboardResults> {
        match self {
            DashboardOutput::Ready(results) => Some(results.as_ref()),
            DashboardOutput::Incomplete { .. } => None,
        }
    }

    /// The price line as shown to the user.
    pub fn price_text(&self) -> &str {
        match self {
            DashboardOutput::Ready(results) => results.price_text.as_str(),
            DashboardOutput::Incomplete { message } => *message,
        }
    }

    /// The Greeks block as shown to the user; empty while incomplete.
    pub fn greeks_text(&self) -> &str {
        match self {
            DashboardOutput::Ready(results) => results.greeks_text.as_str(),
            DashboardOutput::Incomplete { .. } => "",
        }
    }
}

/// Price, Greeks and sensitivity surface for complete parameters.
pub fn evaluate(
    params: &OptionParameters,
    option_type: OptionType,
    config: &DashboardConfig,
) -> Result<DashboardResults> {
    if config.validation == ValidationMode::Strict {
        params.validate()?;
    }

    let option_price = price(params, option_type);
    let report = greeks(params);
    let surface = SurfaceBuilder::with_config(config.surface).build(params, option_type);

    if !option_price.is_finite() || !report.is_finite() {
        warn!(
            ?params,
            option_type = %option_type,
            price = option_price,
            "non-finite result from unvalidated inputs"
        );
    }
    debug!(price = option_price, option_type = %option_type, "dashboard evaluated");

    Ok(DashboardResults {
        params: *params,
        option_type,
        price: option_price,
        price_text: format_price(option_price),
        greeks_text: format_greeks(&report),
        greeks: report,
        surface,
    })
}

/// Evaluate the form state; missing inputs short-circuit to
/// [`DashboardOutput::Incomplete`].
pub fn evaluate_dashboard(
    inputs: &DashboardInputs,
    config: &DashboardConfig,
) -> Result<DashboardOutput> {
    let Some(params) = inputs.parameters() else {
        debug!("skipping evaluation, inputs incomplete");
        return Ok(DashboardOutput::Incomplete {
            message: INCOMPLETE_INPUT_MESSAGE,
        });
    };

    let results = evaluate(&params, inputs.option_type, config)?;
    Ok(DashboardOutput::Ready(Box::new(results)))
}
