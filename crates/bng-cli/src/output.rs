//! # Output Formatting
//!
//! Text output is one result per line: `x y` for coordinates, the bare
//! reference for grid references. JSON output is a single array in input
//! order, with `null` in place of any input that failed under
//! `--keep-going`.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use bng_core::Coordinate;

/// Output format for conversion results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One result per line.
    #[default]
    Text,
    /// A JSON array.
    Json,
}

/// Write converted coordinates.
pub fn write_coordinates(
    out: &mut dyn Write,
    format: OutputFormat,
    coords: &[Option<Coordinate>],
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for coord in coords.iter().flatten() {
                writeln!(out, "{} {}", coord.x, coord.y)?;
            }
        }
        OutputFormat::Json => write_json(out, coords)?,
    }
    Ok(())
}

/// Write converted grid references.
pub fn write_grid_references(
    out: &mut dyn Write,
    format: OutputFormat,
    gridrefs: &[Option<String>],
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for gridref in gridrefs.iter().flatten() {
                writeln!(out, "{gridref}")?;
            }
        }
        OutputFormat::Json => write_json(out, gridrefs)?,
    }
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
