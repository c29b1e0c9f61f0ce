//! CSV export of sensitivity surfaces
//!
//! One record per grid cell in long format, rows ordered by spot then volatility:
//!
//! ```text
//! spot,volatility,price
//! 50,0.1,0.0000012
//! ...
//! ```

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::surface::SensitivitySurface;

/// Write the surface as `spot,volatility,price` records.
pub fn write_surface_csv<W: Write>(surface: &SensitivitySurface, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["spot", "volatility", "price"])?;
    for (spot, vol, price) in surface.points() {
        wtr.write_record(&[spot.to_string(), vol.to_string(), price.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_surface_csv_file(surface: &SensitivitySurface, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    write_surface_csv(surface, file)?;
    tracing::debug!(path = %path.display(), "surface csv written");
    Ok(())
}

/// Read back a file written by [`write_surface_csv`] as `(spot, vol, price)` triples.
pub fn read_surface_csv<R: std::io::Read>(reader: R) -> Result<Vec<(f64, f64, f64)>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    let mut points = Vec::new();
    for record in rdr.deserialize() {
        let row: (f64, f64, f64) = record?;
        points.push(row);
    }
    Ok(points)
}
