//! Coordinate value types passed between pipeline stages.

use serde::{Deserialize, Serialize};

/// Ellipsoidal position on some datum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeodeticCoordinate {
    /// Decimal degrees, positive north
    pub latitude: f64,
    /// Decimal degrees, positive east
    pub longitude: f64,
    /// Metres above the ellipsoid
    pub height: f64,
}

impl GeodeticCoordinate {
    pub const fn new(latitude: f64, longitude: f64, height: f64) -> Self {
        Self {
            latitude,
            longitude,
            height,
        }
    }

    /// Sea-level position from decimal degrees.
    pub const fn from_degrees(latitude: f64, longitude: f64) -> Self {
        Self::new(latitude, longitude, 0.0)
    }

    /// (lat_rad, lon_rad)
    pub fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

/// Grid position (easting/northing) on a projected plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanarCoordinate {
    pub easting: f64,
    pub northing: f64,
    /// Carried through unchanged by the projection
    pub height: f64,
}

impl PlanarCoordinate {
    pub const fn new(easting: f64, northing: f64, height: f64) -> Self {
        Self {
            easting,
            northing,
            height,
        }
    }

    pub const fn flat(easting: f64, northing: f64) -> Self {
        Self::new(easting, northing, 0.0)
    }
}

/// Earth-centred, earth-fixed position in metres.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cartesian {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Cartesian {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}
