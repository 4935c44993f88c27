//! # Conversion Subcommands
//!
//! `to-osgb36` and `from-osgb36`. Both read inputs from the command line
//! or, when none are given, from stdin one per line.
//!
//! By default the first bad input aborts the run with no output. With
//! `--keep-going` every input is attempted, failures are reported on
//! stderr, and the exit code is 1 if any input failed.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;

use bng_core::{
    from_osgb36, from_osgb36_batch, to_osgb36_batch, to_osgb36_each, Coordinate, Figures,
};

use crate::config::Settings;
use crate::output::{write_coordinates, write_grid_references};
use crate::{collect_inputs, EXIT_CONVERSION_FAILED, EXIT_OK};

/// Arguments for `bng to-osgb36`.
#[derive(Args, Debug)]
pub struct ToOsgb36Args {
    /// Grid references, e.g. NT275729. Read from stdin when omitted.
    pub gridrefs: Vec<String>,

    /// Convert every input and report failures instead of stopping.
    #[arg(long)]
    pub keep_going: bool,
}

/// Arguments for `bng from-osgb36`.
#[derive(Args, Debug)]
pub struct FromOsgb36Args {
    /// Coordinates as "x,y" pairs, e.g. 327550,672950. Read from stdin
    /// when omitted. Values starting with '-' must follow `--`.
    pub coords: Vec<String>,

    /// Figures in the output reference: 4, 6, 8 or 10.
    #[arg(long, value_parser = parse_figures)]
    pub figs: Option<Figures>,

    /// Convert every input and report failures instead of stopping.
    #[arg(long)]
    pub keep_going: bool,
}

fn parse_figures(raw: &str) -> Result<Figures, String> {
    let figs: i64 = raw.parse().map_err(|e| format!("{e}"))?;
    Figures::try_from(figs).map_err(|e| e.to_string())
}

/// Execute `bng to-osgb36`.
pub fn run_to_osgb36(
    args: &ToOsgb36Args,
    settings: &Settings,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<u8> {
    let inputs = collect_inputs(&args.gridrefs, stdin)?;
    tracing::info!(count = inputs.len(), "converting grid references");

    if !args.keep_going {
        let coords = to_osgb36_batch(&inputs).context("grid reference conversion failed")?;
        let coords: Vec<Option<Coordinate>> = coords.into_iter().map(Some).collect();
        write_coordinates(out, settings.format, &coords)?;
        return Ok(EXIT_OK);
    }

    let mut failed = 0usize;
    let mut coords = Vec::with_capacity(inputs.len());
    for (input, result) in inputs.iter().zip(to_osgb36_each(&inputs)) {
        match result {
            Ok(coord) => coords.push(Some(coord)),
            Err(e) => {
                failed += 1;
                writeln!(err, "{input}: {e}")?;
                coords.push(None);
            }
        }
    }
    write_coordinates(out, settings.format, &coords)?;
    Ok(exit_code(failed))
}

/// Execute `bng from-osgb36`.
pub fn run_from_osgb36(
    args: &FromOsgb36Args,
    settings: &Settings,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<u8> {
    let inputs = collect_inputs(&args.coords, stdin)?;
    let figs = args.figs.unwrap_or(settings.figs);
    tracing::info!(count = inputs.len(), %figs, "converting coordinates");

    if !args.keep_going {
        let coords = inputs
            .iter()
            .map(|input| input.parse::<Coordinate>())
            .collect::<Result<Vec<_>, _>>()
            .context("coordinate parsing failed")?;
        let gridrefs =
            from_osgb36_batch(coords, figs.count()).context("coordinate conversion failed")?;
        let gridrefs: Vec<Option<String>> = gridrefs.into_iter().map(Some).collect();
        write_grid_references(out, settings.format, &gridrefs)?;
        return Ok(EXIT_OK);
    }

    let mut failed = 0usize;
    let mut gridrefs = Vec::with_capacity(inputs.len());
    for input in &inputs {
        let result = input
            .parse::<Coordinate>()
            .and_then(|coord| from_osgb36(coord, figs.count()));
        match result {
            Ok(gridref) => gridrefs.push(Some(gridref)),
            Err(e) => {
                failed += 1;
                writeln!(err, "{input}: {e}")?;
                gridrefs.push(None);
            }
        }
    }
    write_grid_references(out, settings.format, &gridrefs)?;
    Ok(exit_code(failed))
}

fn exit_code(failed: usize) -> u8 {
    if failed == 0 {
        EXIT_OK
    } else {
        tracing::warn!(failed, "some inputs failed to convert");
        EXIT_CONVERSION_FAILED
    }
}
