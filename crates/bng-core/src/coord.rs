//! # OSGB36 Coordinates — Formatting
//!
//! Encodes absolute easting/northing pairs into grid references.
//!
//! The 100 km square is found by flooring each component to a multiple of
//! 100 000 m and looking the indices up in the [`RegionTable`]. The offset
//! within the square is then floored to the requested precision, never
//! rounded: `(529900, 199900)` at 4 figures is `TQ2999`, not `TQ3000`.
//!
//! Any square present in the table is accepted, including squares that lie
//! entirely at sea.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BngError;
use crate::gridref::GridReference;
use crate::precision::Figures;
use crate::region::{RegionCode, RegionTable, SQUARE_SIZE};

/// Easting and northing in metres from the OSGB36 false origin.
///
/// Components are signed so that negative input can be represented and
/// rejected with [`BngError::CoordinateOutOfRegion`] rather than wrapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// Easting in metres.
    pub x: i64,
    /// Northing in metres.
    pub y: i64,
}

impl Coordinate {
    /// Create a coordinate from an easting and northing.
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Create a coordinate from fractional metres, flooring each component.
    ///
    /// # Errors
    ///
    /// Returns [`BngError::MalformedCoordinate`] if either component is NaN
    /// or infinite.
    pub fn from_f64(x: f64, y: f64) -> Result<Self, BngError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(BngError::MalformedCoordinate(format!("({x}, {y})")));
        }
        // `as` saturates, and anything that large is out of region anyway.
        Ok(Self::new(x.floor() as i64, y.floor() as i64))
    }

    /// The coordinate as an `(x, y)` tuple.
    pub fn as_tuple(&self) -> (i64, i64) {
        (self.x, self.y)
    }

    /// The 100 km square containing this coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`BngError::CoordinateOutOfRegion`] if either component is
    /// negative or the square lies outside the 7 × 13 table.
    pub fn region(&self) -> Result<RegionCode, BngError> {
        let out_of_region = BngError::CoordinateOutOfRegion {
            x: self.x,
            y: self.y,
        };
        if self.x < 0 || self.y < 0 {
            return Err(out_of_region);
        }
        RegionTable::global()
            .code_for(self.x / SQUARE_SIZE, self.y / SQUARE_SIZE)
            .map_err(|_| out_of_region)
    }

    /// Encode this coordinate as a grid reference at the given precision.
    ///
    /// # Errors
    ///
    /// Returns [`BngError::CoordinateOutOfRegion`] if the coordinate is not
    /// covered by the region table.
    pub fn to_grid_reference(&self, figures: Figures) -> Result<GridReference, BngError> {
        let region = self.region()?;
        self.grid_reference_in(region, figures)
    }

    fn grid_reference_in(
        &self,
        region: RegionCode,
        figures: Figures,
    ) -> Result<GridReference, BngError> {
        let offset = region.offset();
        let divisor = figures.divisor();
        let out_of_region = || BngError::CoordinateOutOfRegion {
            x: self.x,
            y: self.y,
        };
        let easting = u32::try_from((self.x - offset.x) / divisor).map_err(|_| out_of_region())?;
        let northing =
            u32::try_from((self.y - offset.y) / divisor).map_err(|_| out_of_region())?;
        GridReference::new(region, easting, northing, figures)
    }
}

impl From<(i64, i64)> for Coordinate {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[i64; 2]> for Coordinate {
    fn from([x, y]: [i64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (i64, i64) {
    fn from(coord: Coordinate) -> Self {
        coord.as_tuple()
    }
}

impl TryFrom<&[i64]> for Coordinate {
    type Error = BngError;

    fn try_from(values: &[i64]) -> Result<Self, Self::Error> {
        match values {
            [x, y] => Ok(Self::new(*x, *y)),
            other => Err(BngError::MalformedCoordinate(format!("{other:?}"))),
        }
    }
}

impl FromStr for Coordinate {
    type Err = BngError;

    /// Parse `"x,y"`, `"x y"` or `"(x, y)"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || BngError::MalformedCoordinate(s.to_string());

        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);

        let parts: Vec<&str> = inner
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();
        let values = parts
            .iter()
            .map(|part| part.parse::<i64>().map_err(|_| malformed()))
            .collect::<Result<Vec<_>, _>>()?;

        Self::try_from(values.as_slice()).map_err(|_| malformed())
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Serialize for Coordinate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        [self.x, self.y].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = Vec::<i64>::deserialize(deserializer)?;
        Self::try_from(raw.as_slice()).map_err(serde::de::Error::custom)
    }
}

/// Convert an OSGB36 coordinate to a grid reference with `figs` figures.
///
/// The region is checked before the precision, so a coordinate outside the
/// grid reports [`BngError::CoordinateOutOfRegion`] even when `figs` is also
/// invalid.
///
/// ```
/// let gridref = bng_core::from_osgb36((327550, 672950), 6).unwrap();
/// assert_eq!(gridref, "NT275729");
/// ```
///
/// # Errors
///
/// - [`BngError::CoordinateOutOfRegion`] if the coordinate is negative or
///   outside the region table.
/// - [`BngError::InvalidPrecision`] if `figs` is not 4, 6, 8 or 10.
pub fn from_osgb36(coords: impl Into<Coordinate>, figs: u8) -> Result<String, BngError> {
    let coord = coords.into();
    let region = coord.region()?;
    let figures = Figures::try_from(figs)?;
    Ok(coord.grid_reference_in(region, figures)?.to_string())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::gridref::to_osgb36;
    use proptest::prelude::*;

    fn in_region() -> impl Strategy<Value = Coordinate> {
        (0i64..700_000, 0i64..1_300_000).prop_map(|(x, y)| Coordinate::new(x, y))
    }

    fn any_figures() -> impl Strategy<Value = Figures> {
        prop::sample::select(Figures::all())
    }

    proptest! {
        /// Ten figures carry whole metres, so the round trip is exact.
        #[test]
        fn ten_figure_round_trip_is_lossless(coord in in_region()) {
            let gridref = from_osgb36(coord, 10).unwrap();
            prop_assert_eq!(to_osgb36(&gridref).unwrap(), coord);
        }

        /// Coarser precisions floor: never above the input, and within one
        /// unit of the last digit below it.
        #[test]
        fn round_trip_floors_within_one_unit(coord in in_region(), figures in any_figures()) {
            let gridref = from_osgb36(coord, figures.count()).unwrap();
            let back = to_osgb36(&gridref).unwrap();
            let unit = figures.divisor();
            prop_assert!(back.x <= coord.x && coord.x - back.x < unit);
            prop_assert!(back.y <= coord.y && coord.y - back.y < unit);
        }

        /// Output length is always two letters plus the requested figures.
        #[test]
        fn output_has_requested_length(coord in in_region(), figures in any_figures()) {
            let gridref = from_osgb36(coord, figures.count()).unwrap();
            prop_assert_eq!(gridref.len(), 2 + usize::from(figures.count()));
        }

        /// Negative components never format.
        #[test]
        fn negative_coordinates_rejected(x in i64::MIN..0, y in any::<i64>()) {
            prop_assert!(
                matches!(
                    from_osgb36((x, y), 6),
                    Err(BngError::CoordinateOutOfRegion { .. })
                ),
                "negative easting accepted"
            );
            prop_assert!(
                matches!(
                    from_osgb36((y, x), 6),
                    Err(BngError::CoordinateOutOfRegion { .. })
                ),
                "negative northing accepted"
            );
        }

        /// Parsing arbitrary text never panics.
        #[test]
        fn parser_never_panics(input in "\\PC{0,16}") {
            let _ = to_osgb36(&input);
        }
    }
}
