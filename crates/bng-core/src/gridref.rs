//! # Grid References — Parsing
//!
//! Decodes alphanumeric references such as `NT2755072950` into absolute
//! OSGB36 eastings and northings.
//!
//! A reference is a two-letter [`RegionCode`] followed by 4, 6, 8 or 10
//! digits. The digit string is split at its midpoint: the first half is the
//! easting within the 100 km square, the second half the northing, both in
//! units of [`Figures::divisor`] metres. Letters are accepted in either
//! case; nothing else (whitespace, separators, signs) is tolerated.
//!
//! All arithmetic is integer arithmetic, so every reference decodes to
//! an exact whole-metre coordinate.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::coord::Coordinate;
use crate::error::BngError;
use crate::precision::Figures;
use crate::region::{RegionCode, SQUARE_SIZE};

/// A validated grid reference.
///
/// The easting and northing are the digit values within the 100 km square,
/// not absolute metres. Use [`GridReference::to_coordinate`] for those.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridReference {
    region: RegionCode,
    easting: u32,
    northing: u32,
    figures: Figures,
}

impl GridReference {
    /// Assemble a reference from its parts.
    ///
    /// # Errors
    ///
    /// Returns [`BngError::MalformedGridRef`] if either digit value does not
    /// fit in `figures.digits_per_axis()` digits.
    pub fn new(
        region: RegionCode,
        easting: u32,
        northing: u32,
        figures: Figures,
    ) -> Result<Self, BngError> {
        let limit = axis_limit(figures);
        if i64::from(easting) >= limit || i64::from(northing) >= limit {
            return Err(BngError::MalformedGridRef(format!(
                "{region} {easting} {northing} ({figures} figures)"
            )));
        }
        Ok(Self {
            region,
            easting,
            northing,
            figures,
        })
    }

    /// The 100 km square this reference lies in.
    pub fn region(&self) -> RegionCode {
        self.region
    }

    /// Easting digits within the square.
    pub fn easting(&self) -> u32 {
        self.easting
    }

    /// Northing digits within the square.
    pub fn northing(&self) -> u32 {
        self.northing
    }

    /// Precision of this reference.
    pub fn figures(&self) -> Figures {
        self.figures
    }

    /// Absolute coordinate of the reference's south-west corner.
    pub fn to_coordinate(&self) -> Coordinate {
        let offset = self.region.offset();
        let scale = self.figures.divisor();
        Coordinate::new(
            i64::from(self.easting) * scale + offset.x,
            i64::from(self.northing) * scale + offset.y,
        )
    }
}

/// One past the largest digit value for a single axis.
fn axis_limit(figures: Figures) -> i64 {
    SQUARE_SIZE / figures.divisor()
}

impl FromStr for GridReference {
    type Err = BngError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || BngError::MalformedGridRef(s.to_string());

        let (letters, digits) = match (s.get(..2), s.get(2..)) {
            (Some(letters), Some(digits)) => (letters, digits),
            _ => return Err(malformed()),
        };
        if !letters.bytes().all(|b| b.is_ascii_alphabetic())
            || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(malformed());
        }
        let figures = Figures::from_digit_count(digits.len()).ok_or_else(malformed)?;

        let region = RegionCode::new(letters)?;

        let (easting, northing) = digits.split_at(figures.digits_per_axis());
        let easting = easting.parse().map_err(|_| malformed())?;
        let northing = northing.parse().map_err(|_| malformed())?;

        Ok(Self {
            region,
            easting,
            northing,
            figures,
        })
    }
}

impl std::fmt::Display for GridReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.figures.digits_per_axis();
        write!(
            f,
            "{}{:0width$}{:0width$}",
            self.region, self.easting, self.northing
        )
    }
}

impl Serialize for GridReference {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GridReference {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Convert a grid reference to an OSGB36 coordinate.
///
/// ```
/// let coord = bng_core::to_osgb36("NT2755072950").unwrap();
/// assert_eq!(coord.as_tuple(), (327550, 672950));
/// ```
///
/// # Errors
///
/// - [`BngError::MalformedGridRef`] if the input is not two letters followed
///   by 4, 6, 8 or 10 digits.
/// - [`BngError::InvalidRegionCode`] if the letters do not name a square.
pub fn to_osgb36(gridref: &str) -> Result<Coordinate, BngError> {
    let parsed: GridReference = gridref.parse()?;
    Ok(parsed.to_coordinate())
}
