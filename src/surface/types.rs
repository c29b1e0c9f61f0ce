use crate::types::{OptionParameters, OptionType};

/// Option prices over a (spot, volatility) grid.
///
/// `grid[i][j]` is the price at `spot_axis[i]` and `vol_axis[j]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensitivitySurface {
    /// Spot prices, ascending
    pub spot_axis: Vec<f64>,
    /// Volatilities, ascending
    pub vol_axis: Vec<f64>,
    /// Prices, one row per spot and one column per volatility
    pub grid: Vec<Vec<f64>>,
    /// Parameters the sweep was centred on
    pub base: OptionParameters,
    pub option_type: OptionType,
}

impl SensitivitySurface {
    /// (rows, columns) = (spot samples, volatility samples)
    pub fn dims(&self) -> (usize, usize) {
        (self.spot_axis.len(), self.vol_axis.len())
    }

    pub fn value_at(&self, spot_idx: usize, vol_idx: usize) -> Option<f64> {
        self.grid.get(spot_idx)?.get(vol_idx).copied()
    }

    /// Iterate `(spot, vol, price)` in row-major order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.spot_axis
            .iter()
            .zip(self.grid.iter())
            .flat_map(move |(&spot, row)| {
                self.vol_axis
                    .iter()
                    .zip(row.iter())
                    .map(move |(&vol, &price)| (spot, vol, price))
            })
    }

    /// Smallest and largest finite price, or `None` if there is none.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        self.grid
            .iter()
            .flatten()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Number of NaN or infinite cells.
    pub fn non_finite_count(&self) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|v| !v.is_finite())
            .count()
    }
}
