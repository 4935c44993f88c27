//! # Batch Conversion
//!
//! Element-wise adapters over the scalar conversions. Output order and
//! length always match the input.
//!
//! The strict variants stop at the first invalid element and return its
//! error; no partial result is produced. The `*_each` variants convert
//! every element and report one `Result` per input.
//!
//! Fixed-size arrays keep their shape through [`to_osgb36_array`] and
//! [`from_osgb36_array`].

use crate::coord::{from_osgb36, Coordinate};
use crate::error::BngError;
use crate::gridref::to_osgb36;

/// Convert a sequence of grid references, failing on the first bad one.
///
/// ```
/// let coords = bng_core::to_osgb36_batch(["HU431392", "SJ637560", "TV374354"]).unwrap();
/// let xs: Vec<i64> = coords.iter().map(|c| c.x).collect();
/// assert_eq!(xs, [443100, 363700, 537400]);
/// ```
pub fn to_osgb36_batch<I, S>(gridrefs: I) -> Result<Vec<Coordinate>, BngError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    gridrefs
        .into_iter()
        .enumerate()
        .map(|(index, gridref)| {
            to_osgb36(gridref.as_ref()).map_err(|e| {
                tracing::debug!(index, error = %e, "grid reference batch aborted");
                e
            })
        })
        .collect()
}

/// Convert a sequence of coordinates, failing on the first bad one.
pub fn from_osgb36_batch<I, C>(coords: I, figs: u8) -> Result<Vec<String>, BngError>
where
    I: IntoIterator<Item = C>,
    C: Into<Coordinate>,
{
    coords
        .into_iter()
        .enumerate()
        .map(|(index, coord)| {
            from_osgb36(coord, figs).map_err(|e| {
                tracing::debug!(index, error = %e, "coordinate batch aborted");
                e
            })
        })
        .collect()
}

/// Convert every grid reference, keeping per-element failures.
pub fn to_osgb36_each<I, S>(gridrefs: I) -> Vec<Result<Coordinate, BngError>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    gridrefs
        .into_iter()
        .map(|gridref| to_osgb36(gridref.as_ref()))
        .collect()
}

/// Convert every coordinate, keeping per-element failures.
pub fn from_osgb36_each<I, C>(coords: I, figs: u8) -> Vec<Result<String, BngError>>
where
    I: IntoIterator<Item = C>,
    C: Into<Coordinate>,
{
    coords
        .into_iter()
        .map(|coord| from_osgb36(coord, figs))
        .collect()
}

/// Convert a fixed-size array of grid references into an array of the
/// same length.
pub fn to_osgb36_array<const N: usize, S: AsRef<str>>(
    gridrefs: [S; N],
) -> Result<[Coordinate; N], BngError> {
    let mut out = [Coordinate::default(); N];
    for (slot, gridref) in out.iter_mut().zip(gridrefs.iter()) {
        *slot = to_osgb36(gridref.as_ref())?;
    }
    Ok(out)
}

/// Convert a fixed-size array of coordinates into an array of grid
/// references of the same length.
pub fn from_osgb36_array<const N: usize, C: Into<Coordinate>>(
    coords: [C; N],
    figs: u8,
) -> Result<[String; N], BngError> {
    let mut out: [String; N] = std::array::from_fn(|_| String::new());
    for (slot, coord) in out.iter_mut().zip(coords) {
        *slot = from_osgb36(coord, figs)?;
    }
    Ok(out)
}
