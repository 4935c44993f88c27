//! # Region Table — 100 km Grid Squares
//!
//! The British National Grid divides its 700 km × 1300 km extent into 91
//! squares of 100 km, each named by two letters. This module holds the one
//! lookup table shared by both conversion directions.
//!
//! ## Orientation
//!
//! The table literal below is authored the way the grid is drawn on a map:
//! row 0 is the northernmost band (`HL`..`JM`) and the last row is the
//! southernmost (`SV`..`TW`). At build time the rows are reversed and the
//! table transposed so that `squares[x_index][y_index]` names the square
//! whose south-west corner is `(100_000 · x_index, 100_000 · y_index)`.
//!
//! The table is built once per process behind a [`OnceLock`] and never
//! mutated afterwards, so concurrent readers need no locking.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::BngError;

/// Side length of a 100 km grid square, in metres.
pub const SQUARE_SIZE: i64 = 100_000;

/// Number of 100 km squares west to east.
pub const TABLE_COLUMNS: usize = 7;

/// Number of 100 km squares south to north.
pub const TABLE_ROWS: usize = 13;

/// Total number of valid region codes.
pub const REGION_COUNT: usize = TABLE_COLUMNS * TABLE_ROWS;

/// Region codes as drawn on the map, northernmost row first.
const REGIONS: [[&str; TABLE_COLUMNS]; TABLE_ROWS] = [
    ["HL", "HM", "HN", "HO", "HP", "JL", "JM"],
    ["HQ", "HR", "HS", "HT", "HU", "JQ", "JR"],
    ["HV", "HW", "HX", "HY", "HZ", "JV", "JW"],
    ["NA", "NB", "NC", "ND", "NE", "OA", "OB"],
    ["NF", "NG", "NH", "NJ", "NK", "OF", "OG"],
    ["NL", "NM", "NN", "NO", "NP", "OL", "OM"],
    ["NQ", "NR", "NS", "NT", "NU", "OQ", "OR"],
    ["NV", "NW", "NX", "NY", "NZ", "OV", "OW"],
    ["SA", "SB", "SC", "SD", "SE", "TA", "TB"],
    ["SF", "SG", "SH", "SJ", "SK", "TF", "TG"],
    ["SL", "SM", "SN", "SO", "SP", "TL", "TM"],
    ["SQ", "SR", "SS", "ST", "SU", "TQ", "TR"],
    ["SV", "SW", "SX", "SY", "SZ", "TV", "TW"],
];

/// South-west corner of a 100 km square, in absolute OSGB36 metres.
///
/// Both components are non-negative multiples of [`SQUARE_SIZE`]. Offsets
/// only come out of the table, so the type serializes but never
/// deserializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridSquareOffset {
    /// Easting of the square's south-west corner.
    pub x: i64,
    /// Northing of the square's south-west corner.
    pub y: i64,
}

/// A two-letter code naming one of the 91 squares in the table.
///
/// A `RegionCode` can only be obtained from the table, so holding one
/// proves membership. The code always renders as two uppercase letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionCode {
    code: &'static str,
    column: u8,
    row: u8,
}

impl RegionCode {
    /// Look up a region code, accepting either case.
    ///
    /// # Errors
    ///
    /// Returns [`BngError::InvalidRegionCode`] if `code` is not one of the
    /// 91 squares in the table.
    pub fn new(code: &str) -> Result<Self, BngError> {
        RegionTable::global().lookup(code)
    }

    /// The canonical uppercase two-letter code.
    pub fn as_str(&self) -> &'static str {
        self.code
    }

    /// West-to-east index of this square, in `0..7`.
    pub fn x_index(&self) -> usize {
        usize::from(self.column)
    }

    /// South-to-north index of this square, in `0..13`.
    pub fn y_index(&self) -> usize {
        usize::from(self.row)
    }

    /// South-west corner of this square.
    pub fn offset(&self) -> GridSquareOffset {
        GridSquareOffset {
            x: i64::from(self.column) * SQUARE_SIZE,
            y: i64::from(self.row) * SQUARE_SIZE,
        }
    }
}

impl std::fmt::Display for RegionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}

impl std::str::FromStr for RegionCode {
    type Err = BngError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for RegionCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.code)
    }
}

impl<'de> Deserialize<'de> for RegionCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(&raw).map_err(serde::de::Error::custom)
    }
}

/// Lookup table between region codes and 100 km square indices.
#[derive(Debug)]
pub struct RegionTable {
    /// Indexed `[x_index][y_index]`.
    squares: [[RegionCode; TABLE_ROWS]; TABLE_COLUMNS],
    by_code: HashMap<&'static str, RegionCode>,
}

impl RegionTable {
    /// The process-wide table, built on first use.
    pub fn global() -> &'static RegionTable {
        static TABLE: OnceLock<RegionTable> = OnceLock::new();
        TABLE.get_or_init(RegionTable::build)
    }

    fn build() -> Self {
        let placeholder = RegionCode {
            code: "",
            column: 0,
            row: 0,
        };
        let mut squares = [[placeholder; TABLE_ROWS]; TABLE_COLUMNS];
        let mut by_code = HashMap::with_capacity(REGION_COUNT);

        // Reverse so row 0 is the southernmost band, then transpose.
        for (row, codes) in REGIONS.iter().rev().enumerate() {
            for (column, code) in codes.iter().enumerate() {
                let region = RegionCode {
                    code: *code,
                    column: column as u8,
                    row: row as u8,
                };
                squares[column][row] = region;
                by_code.insert(*code, region);
            }
        }

        tracing::trace!(regions = by_code.len(), "built 100 km region table");
        Self { squares, by_code }
    }

    fn lookup(&self, code: &str) -> Result<RegionCode, BngError> {
        let upper = code.to_ascii_uppercase();
        self.by_code
            .get(upper.as_str())
            .copied()
            .ok_or(BngError::InvalidRegionCode(upper))
    }

    /// South-west corner of the square named by `code` (either case).
    ///
    /// # Errors
    ///
    /// Returns [`BngError::InvalidRegionCode`] if the code is not in the table.
    pub fn offset_for(&self, code: &str) -> Result<GridSquareOffset, BngError> {
        self.lookup(code).map(|region| region.offset())
    }

    /// Region code for the square at the given indices.
    ///
    /// # Errors
    ///
    /// Returns [`BngError::CoordinateOutOfRegion`] carrying the south-west
    /// corner of the requested square when either index falls outside
    /// `[0, 7) × [0, 13)`.
    pub fn code_for(&self, x_index: i64, y_index: i64) -> Result<RegionCode, BngError> {
        let out_of_region = || BngError::CoordinateOutOfRegion {
            x: x_index.saturating_mul(SQUARE_SIZE),
            y: y_index.saturating_mul(SQUARE_SIZE),
        };
        let column = usize::try_from(x_index).map_err(|_| out_of_region())?;
        let row = usize::try_from(y_index).map_err(|_| out_of_region())?;
        self.squares
            .get(column)
            .and_then(|rows| rows.get(row))
            .copied()
            .ok_or_else(out_of_region)
    }

    /// All region codes, column by column from the west, south to north
    /// within each column.
    pub fn codes(&self) -> impl Iterator<Item = RegionCode> + '_ {
        self.squares.iter().flat_map(|column| column.iter().copied())
    }
}
