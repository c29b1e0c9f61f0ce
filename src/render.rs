//! SVG heatmap of a [`SensitivitySurface`].
//!
//! Volatility runs along x, spot along y, and price is mapped onto a Viridis
//! colour ramp with a colour bar to the right of the chart.

use std::path::Path;

use anyhow::{anyhow, Result};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;

use crate::surface::SensitivitySurface;

/// Colour used for cells whose price is NaN or infinite.
const NON_FINITE_COLOR: RGBColor = RGBColor(190, 190, 190);

/// Viridis control points, evenly spaced on [0, 1].
const VIRIDIS: [(u8, u8, u8); 5] = [
    (68, 1, 84),
    (59, 82, 139),
    (33, 145, 140),
    (94, 201, 98),
    (253, 231, 37),
];

const COLORBAR_WIDTH: i32 = 140;
const COLORBAR_STEPS: usize = 100;

/// Image size and labels for the heatmap.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HeatmapConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub colorbar_title: String,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 768,
            title: "Option Price Sensitivity".to_string(),
            x_label: "Volatility".to_string(),
            y_label: "Spot Price".to_string(),
            colorbar_title: "Option Price".to_string(),
        }
    }
}

/// Map `t` in [0, 1] onto the Viridis ramp; values outside are clamped.
pub fn viridis(t: f64) -> RGBColor {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let scaled = t * (VIRIDIS.len() - 1) as f64;
    let idx = (scaled.floor() as usize).min(VIRIDIS.len() - 2);
    let frac = scaled - idx as f64;

    let (r0, g0, b0) = VIRIDIS[idx];
    let (r1, g1, b1) = VIRIDIS[idx + 1];
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
    RGBColor(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
}

/// Lower and upper edge of the cell centred on each axis sample.
fn cell_edges(axis: &[f64]) -> Vec<(f64, f64)> {
    let half = match axis {
        [] => return Vec::new(),
        [only] => (only.abs() * 0.05).max(1e-9),
        [first, second, ..] => (second - first) / 2.0,
    };
    axis.iter().map(|&v| (v - half, v + half)).collect()
}

fn price_range(surface: &SensitivitySurface) -> (f64, f64) {
    match surface.min_max() {
        Some((lo, hi)) if hi > lo => (lo, hi),
        Some((lo, _)) => (lo - 0.5, lo + 0.5),
        None => (0.0, 1.0),
    }
}

fn draw_heatmap<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    surface: &SensitivitySurface,
    config: &HeatmapConfig,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let x_cells = cell_edges(&surface.vol_axis);
    let y_cells = cell_edges(&surface.spot_axis);
    let (x_lo, x_hi) = (x_cells[0].0, x_cells[x_cells.len() - 1].1);
    let (y_lo, y_hi) = (y_cells[0].0, y_cells[y_cells.len() - 1].1);
    let (p_lo, p_hi) = price_range(surface);
    let color_of = |price: f64| {
        if price.is_finite() {
            viridis((price - p_lo) / (p_hi - p_lo))
        } else {
            NON_FINITE_COLOR
        }
    };

    let (main_area, bar_area) = root.split_horizontally(config.width as i32 - COLORBAR_WIDTH);

    let mut chart = ChartBuilder::on(&main_area)
        .margin(20)
        .caption(&config.title, ("sans-serif", 30))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(&config.x_label)
        .y_desc(&config.y_label)
        .draw()?;

    chart.draw_series(surface.grid.iter().zip(&y_cells).flat_map(|(row, &(y0, y1))| {
        row.iter()
            .zip(&x_cells)
            .map(move |(&price, &(x0, x1))| {
                Rectangle::new([(x0, y0), (x1, y1)], color_of(price).filled())
            })
    }))?;

    let mut bar = ChartBuilder::on(&bar_area)
        .margin_top(70)
        .margin_bottom(60)
        .margin_right(20)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..1.0, p_lo..p_hi)?;

    bar.configure_mesh()
        .disable_mesh()
        .disable_x_axis()
        .y_desc(&config.colorbar_title)
        .draw()?;

    let step = (p_hi - p_lo) / COLORBAR_STEPS as f64;
    bar.draw_series((0..COLORBAR_STEPS).map(|i| {
        let lo = p_lo + step * i as f64;
        Rectangle::new(
            [(0.0, lo), (1.0, lo + step)],
            viridis((i as f64 + 0.5) / COLORBAR_STEPS as f64).filled(),
        )
    }))?;

    root.present()?;
    Ok(())
}

fn check_drawable(surface: &SensitivitySurface, config: &HeatmapConfig) -> Result<()> {
    let (rows, cols) = surface.dims();
    if rows == 0 || cols == 0 {
        return Err(anyhow!("Cannot render an empty surface"));
    }
    if surface.grid.len() != rows || surface.grid.iter().any(|row| row.len() != cols) {
        return Err(anyhow!("Surface grid does not match its axes"));
    }
    if config.width as i32 <= COLORBAR_WIDTH || config.height == 0 {
        return Err(anyhow!(
            "Heatmap size {}x{} is too small",
            config.width,
            config.height
        ));
    }
    Ok(())
}

/// Write the heatmap to an SVG file.
pub fn render_heatmap_svg(
    surface: &SensitivitySurface,
    config: &HeatmapConfig,
    path: impl AsRef<Path>,
) -> Result<()> {
    check_drawable(surface, config)?;
    let path = path.as_ref();
    let root = SVGBackend::new(path, (config.width, config.height)).into_drawing_area();
    draw_heatmap(&root, surface, config)?;
    tracing::debug!(path = %path.display(), "heatmap written");
    Ok(())
}

/// Render the heatmap into an in-memory SVG document.
pub fn render_heatmap_svg_string(
    surface: &SensitivitySurface,
    config: &HeatmapConfig,
) -> Result<String> {
    check_drawable(surface, config)?;
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (config.width, config.height))
            .into_drawing_area();
        draw_heatmap(&root, surface, config)?;
    }
    Ok(svg)
}
