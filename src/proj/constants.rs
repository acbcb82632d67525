//! Named Transverse Mercator parameter bundles.

use crate::error::ConversionError;
use crate::proj::ellipsoid::{Ellipsoid, AIRY_1830};

/// True origin, false origin and ellipsoid of one Transverse Mercator grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionConstants {
    pub name: &'static str,
    /// Scale factor on the central meridian (F0)
    pub scale_factor: f64,
    /// True origin latitude (degrees)
    pub true_origin_latitude: f64,
    /// True origin longitude, the central meridian (degrees)
    pub true_origin_longitude: f64,
    /// Easting of the true origin (E0, metres)
    pub false_easting: f64,
    /// Northing of the true origin (N0, metres)
    pub false_northing: f64,
    pub ellipsoid: Ellipsoid,
}

pub const OS_NATIONAL_GRID_NAME: &str = "OS National Grid";

pub const OS_NATIONAL_GRID: ProjectionConstants = ProjectionConstants {
    name: OS_NATIONAL_GRID_NAME,
    scale_factor: 0.999_601_271_7,
    true_origin_latitude: 49.0,
    true_origin_longitude: -2.0,
    false_easting: 400_000.0,
    false_northing: -100_000.0,
    ellipsoid: AIRY_1830,
};

const KNOWN: &[ProjectionConstants] = &[OS_NATIONAL_GRID];

impl ProjectionConstants {
    pub fn by_name(name: &str) -> Result<&'static ProjectionConstants, ConversionError> {
        KNOWN
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| ConversionError::unknown("projection", name))
    }

    pub fn n(&self) -> f64 {
        self.ellipsoid.n
    }

    pub fn e2(&self) -> f64 {
        self.ellipsoid.e2
    }
}
