//! # bng-core — British National Grid References
//!
//! Converts between alphanumeric grid references (`NT275729`) and numeric
//! OSGB36 easting/northing pairs (`(327500, 672900)`).
//!
//! ## Public Surface
//!
//! - [`to_osgb36`] — grid reference string to [`Coordinate`].
//! - [`from_osgb36`] — coordinate to grid reference string at 4, 6, 8 or
//!   10 figures.
//! - [`batch`] — ordered element-wise versions of both, strict and
//!   best-effort, plus fixed-size array forms.
//!
//! Both directions share one immutable [`RegionTable`] mapping the 91
//! two-letter 100 km square codes to their south-west corners.
//!
//! ## Scope
//!
//! No datum transformation (WGS84 ↔ OSGB36) and no land/sea check: any
//! square in the table is a valid square.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Logging goes through `tracing`; the crate never installs a subscriber.

pub mod batch;
pub mod coord;
pub mod error;
pub mod gridref;
pub mod precision;
pub mod region;

// Re-export primary types for ergonomic imports.
pub use batch::{
    from_osgb36_array, from_osgb36_batch, from_osgb36_each, to_osgb36_array, to_osgb36_batch,
    to_osgb36_each,
};
pub use coord::{from_osgb36, Coordinate};
pub use error::{BngError, ErrorKind};
pub use gridref::{to_osgb36, GridReference};
pub use precision::{Figures, DEFAULT_FIGURES};
pub use region::{GridSquareOffset, RegionCode, RegionTable, REGION_COUNT, SQUARE_SIZE};
