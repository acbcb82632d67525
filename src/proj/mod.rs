pub mod common;
pub mod constants;
pub mod ellipsoid;
pub mod transverse_mercator;

use crate::coords::{GeodeticCoordinate, PlanarCoordinate};
use crate::error::ConversionError;

/// Trait for map projections between one datum's ellipsoid and its grid.
pub trait Projection: Send + Sync {
    /// Forward: (lat, lon) degrees -> (easting, northing) metres. Height is carried.
    fn project(&self, coord: &GeodeticCoordinate) -> PlanarCoordinate;

    /// Inverse: (easting, northing) metres -> (lat, lon) degrees. Height is carried.
    fn unproject(&self, coord: &PlanarCoordinate) -> Result<GeodeticCoordinate, ConversionError>;

    fn ellipsoid(&self) -> &ellipsoid::Ellipsoid;
}
