//! # bng-cli — Command-Line Grid Reference Converter
//!
//! Provides the `bng` binary, a thin adapter over the two conversions in
//! `bng-core`. No conversion logic lives here.
//!
//! ## Subcommands
//!
//! - `bng to-osgb36` — grid references to `x y` coordinates.
//! - `bng from-osgb36` — `x,y` coordinates to grid references.
//!
//! ```bash
//! bng to-osgb36 NT2755072950 HU431392
//! bng from-osgb36 --figs 4 327550,672950
//! printf 'SV0101\nTQ2999\n' | bng --format json to-osgb36
//! ```
//!
//! ## Exit Codes
//!
//! - `0` — every input converted.
//! - `1` — at least one input failed to convert.
//! - `2` — bad command line or configuration.

pub mod config;
pub mod convert;
pub mod output;

use std::io::BufRead;

use anyhow::{Context, Result};

/// Exit code when every input converted.
pub const EXIT_OK: u8 = 0;

/// Exit code when any input failed to convert.
pub const EXIT_CONVERSION_FAILED: u8 = 1;

/// Exit code for configuration errors.
pub const EXIT_USAGE: u8 = 2;

/// Inputs from the command line, or one per non-blank stdin line when
/// none were given.
pub fn collect_inputs(args: &[String], stdin: &mut dyn BufRead) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args.to_vec());
    }
    let mut inputs = Vec::new();
    for line in stdin.lines() {
        let line = line.context("failed to read input from stdin")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            inputs.push(trimmed.to_string());
        }
    }
    tracing::debug!(count = inputs.len(), "read inputs from stdin");
    Ok(inputs)
}
