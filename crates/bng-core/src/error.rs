//! # Error Types
//!
//! One error family for every conversion failure. Each variant is a
//! distinct kind so callers can tell a badly formed grid reference apart
//! from a well formed one that names a square outside the national grid.
//!
//! All errors are raised synchronously and never retried internally. Batch
//! operations surface the first failing element unchanged.

use thiserror::Error;

/// Error raised by grid reference and coordinate conversions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BngError {
    /// Input does not match two letters followed by 4, 6, 8 or 10 digits.
    #[error(
        "Valid gridref inputs are 4, 6, 8 or 10-fig references as strings \
         e.g. \"NN123321\", or lists/arrays of strings. [{0}]"
    )]
    MalformedGridRef(String),

    /// Two-letter prefix is well formed but is not a 100 km square.
    #[error("Invalid 100 km grid square code: {0}")]
    InvalidRegionCode(String),

    /// Input is not a two-element ordered numeric pair.
    #[error(
        "Valid inputs are x, y pairs e.g. (651409, 313177), \
         or lists of x, y pairs. [{0}]"
    )]
    MalformedCoordinate(String),

    /// Coordinate is negative or its 100 km square lies outside the table.
    #[error("Coordinate location outside UK region: ({x}, {y})")]
    CoordinateOutOfRegion {
        /// Easting in metres.
        x: i64,
        /// Northing in metres.
        y: i64,
    },

    /// Precision is not one of 4, 6, 8 or 10 figures.
    #[error("Valid inputs for figs are 4, 6, 8 or 10 (got {0})")]
    InvalidPrecision(i64),
}

/// Payload-free discriminant of [`BngError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`BngError::MalformedGridRef`].
    MalformedGridRef,
    /// See [`BngError::InvalidRegionCode`].
    InvalidRegionCode,
    /// See [`BngError::MalformedCoordinate`].
    MalformedCoordinate,
    /// See [`BngError::CoordinateOutOfRegion`].
    CoordinateOutOfRegion,
    /// See [`BngError::InvalidPrecision`].
    InvalidPrecision,
}

impl BngError {
    /// Returns the kind of this error, for matching without payloads.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedGridRef(_) => ErrorKind::MalformedGridRef,
            Self::InvalidRegionCode(_) => ErrorKind::InvalidRegionCode,
            Self::MalformedCoordinate(_) => ErrorKind::MalformedCoordinate,
            Self::CoordinateOutOfRegion { .. } => ErrorKind::CoordinateOutOfRegion,
            Self::InvalidPrecision(_) => ErrorKind::InvalidPrecision,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_gridref_message_echoes_input() {
        let err = BngError::MalformedGridRef("Not a grid reference".into());
        let msg = err.to_string();
        assert!(msg.starts_with("Valid gridref inputs are"));
        assert!(msg.ends_with("[Not a grid reference]"));
    }

    #[test]
    fn test_invalid_region_message() {
        let err = BngError::InvalidRegionCode("AA".into());
        assert_eq!(err.to_string(), "Invalid 100 km grid square code: AA");
    }

    #[test]
    fn test_out_of_region_message() {
        let err = BngError::CoordinateOutOfRegion { x: -1, y: 0 };
        assert_eq!(
            err.to_string(),
            "Coordinate location outside UK region: (-1, 0)"
        );
    }

    #[test]
    fn test_precision_message() {
        let err = BngError::InvalidPrecision(3);
        assert!(err.to_string().starts_with("Valid inputs for figs are"));
    }

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(
            BngError::MalformedCoordinate("x".into()).kind(),
            ErrorKind::MalformedCoordinate
        );
        assert_eq!(
            BngError::CoordinateOutOfRegion { x: 0, y: 0 }.kind(),
            ErrorKind::CoordinateOutOfRegion
        );
        assert_eq!(BngError::InvalidPrecision(1).kind(), ErrorKind::InvalidPrecision);
    }
}
