use serde::{Deserialize, Serialize};

use crate::error::ConversionError;

/// Reference ellipsoid parameters, all derived from the two axis lengths.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EllipsoidAxes", into = "EllipsoidAxes")]
pub struct Ellipsoid {
    /// Semi-major axis (metres)
    pub a: f64,
    /// Semi-minor axis (metres)
    pub b: f64,
    /// Flattening: (a - b) / a
    pub f: f64,
    /// Inverse flattening: a / (a - b)
    pub inv_f: f64,
    /// First eccentricity squared: (a² - b²) / a²
    pub e2: f64,
    /// Second eccentricity squared: (a² - b²) / b²
    pub ep2: f64,
    /// Third flattening: (a - b) / (a + b)
    pub n: f64,
}

/// Serialised form of an ellipsoid table row.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct EllipsoidAxes {
    semi_major_axis: f64,
    semi_minor_axis: f64,
}

impl Ellipsoid {
    pub const fn from_axes(a: f64, b: f64) -> Self {
        let a2 = a * a;
        let b2 = b * b;
        Self {
            a,
            b,
            f: (a - b) / a,
            inv_f: a / (a - b),
            e2: (a2 - b2) / a2,
            ep2: (a2 - b2) / b2,
            n: (a - b) / (a + b),
        }
    }

    /// Validating constructor for axes that come from outside the crate.
    pub fn try_from_axes(a: f64, b: f64) -> Result<Self, ConversionError> {
        if !(a.is_finite() && b.is_finite()) || !(a > b && b > 0.0) {
            return Err(ConversionError::InvalidParameter(format!(
                "ellipsoid axes must satisfy a > b > 0, got a = {a}, b = {b}"
            )));
        }
        Ok(Self::from_axes(a, b))
    }

    /// First eccentricity (sqrt is not const).
    pub fn eccentricity(&self) -> f64 {
        self.e2.sqrt()
    }

    pub fn second_eccentricity(&self) -> f64 {
        self.ep2.sqrt()
    }
}

impl TryFrom<EllipsoidAxes> for Ellipsoid {
    type Error = ConversionError;

    fn try_from(axes: EllipsoidAxes) -> Result<Self, Self::Error> {
        Self::try_from_axes(axes.semi_major_axis, axes.semi_minor_axis)
    }
}

impl From<Ellipsoid> for EllipsoidAxes {
    fn from(ellipsoid: Ellipsoid) -> Self {
        Self {
            semi_major_axis: ellipsoid.a,
            semi_minor_axis: ellipsoid.b,
        }
    }
}

pub const AIRY_1830: Ellipsoid = Ellipsoid::from_axes(6_377_563.396, 6_356_256.909);
pub const WGS84: Ellipsoid = Ellipsoid::from_axes(6_378_137.0, 6_356_752.314_2);
