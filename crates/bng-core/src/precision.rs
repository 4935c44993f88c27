//! # Precision — Grid Reference Figures
//!
//! A grid reference carries an even number of digits after its region
//! code: half for the easting, half for the northing. The total digit count
//! ("figures") fixes the resolution of the reference.
//!
//! | Figures | Digits per axis | Resolution |
//! |---------|-----------------|------------|
//! | 4       | 2               | 1 km       |
//! | 6       | 3               | 100 m      |
//! | 8       | 4               | 10 m       |
//! | 10      | 5               | 1 m        |

use serde::{Deserialize, Serialize};

use crate::error::BngError;

/// Default output precision for [`crate::from_osgb36`].
pub const DEFAULT_FIGURES: u8 = 6;

/// Number of figures in a grid reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Figures {
    /// 4-figure reference (1 km squares).
    Four,
    /// 6-figure reference (100 m squares).
    #[default]
    Six,
    /// 8-figure reference (10 m squares).
    Eight,
    /// 10-figure reference (1 m squares).
    Ten,
}

impl Figures {
    /// All supported precisions, coarsest first.
    pub fn all() -> &'static [Figures] {
        &[Self::Four, Self::Six, Self::Eight, Self::Ten]
    }

    /// Total digit count after the region code.
    pub fn count(self) -> u8 {
        match self {
            Self::Four => 4,
            Self::Six => 6,
            Self::Eight => 8,
            Self::Ten => 10,
        }
    }

    /// Digits given to each of easting and northing.
    pub fn digits_per_axis(self) -> usize {
        usize::from(self.count() / 2)
    }

    /// Metres represented by one unit of the last digit.
    pub fn divisor(self) -> i64 {
        match self {
            Self::Four => 1000,
            Self::Six => 100,
            Self::Eight => 10,
            Self::Ten => 1,
        }
    }

    /// Precision for a digit string of `len` characters, if supported.
    pub fn from_digit_count(len: usize) -> Option<Self> {
        match len {
            4 => Some(Self::Four),
            6 => Some(Self::Six),
            8 => Some(Self::Eight),
            10 => Some(Self::Ten),
            _ => None,
        }
    }
}

impl TryFrom<i64> for Figures {
    type Error = BngError;

    fn try_from(figs: i64) -> Result<Self, Self::Error> {
        usize::try_from(figs)
            .ok()
            .and_then(Self::from_digit_count)
            .ok_or(BngError::InvalidPrecision(figs))
    }
}

impl TryFrom<u8> for Figures {
    type Error = BngError;

    fn try_from(figs: u8) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(figs))
    }
}

impl From<Figures> for u8 {
    fn from(figs: Figures) -> u8 {
        figs.count()
    }
}

impl std::fmt::Display for Figures {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.count())
    }
}

impl Serialize for Figures {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.count())
    }
}

impl<'de> Deserialize<'de> for Figures {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        Self::try_from(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_six() {
        assert_eq!(Figures::default(), Figures::Six);
        assert_eq!(Figures::default().count(), DEFAULT_FIGURES);
    }

    #[test]
    fn test_try_from_valid() {
        for figs in Figures::all() {
            assert_eq!(Figures::try_from(figs.count()).unwrap(), *figs);
        }
    }

    #[test]
    fn test_try_from_invalid() {
        for figs in [-1i64, 0, 1, 3, 5, 11, 12] {
            assert_eq!(
                Figures::try_from(figs).unwrap_err(),
                BngError::InvalidPrecision(figs)
            );
        }
    }

    #[test]
    fn test_divisor_matches_digits() {
        for figs in Figures::all() {
            let expected = 10i64.pow(5 - figs.digits_per_axis() as u32);
            assert_eq!(figs.divisor(), expected);
        }
    }

    #[test]
    fn test_serde_as_integer() {
        assert_eq!(serde_json::to_string(&Figures::Eight).unwrap(), "8");
        assert_eq!(serde_json::from_str::<Figures>("10").unwrap(), Figures::Ten);
        assert!(serde_json::from_str::<Figures>("7").is_err());
    }
}
