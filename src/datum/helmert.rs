//! Seven-parameter Helmert similarity transform on ECEF positions.

use serde::{Deserialize, Serialize};

use crate::coords::Cartesian;

/// Transform from a datum to WGS84, in the units the tables are published in.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HelmertParameters {
    /// tx, ty, tz (metres)
    pub translation: [f64; 3],
    /// rx, ry, rz (arc-seconds)
    pub rotation: [f64; 3],
    /// Scale correction (parts per million)
    pub scale_ppm: f64,
}

impl HelmertParameters {
    pub const IDENTITY: HelmertParameters = HelmertParameters {
        translation: [0.0; 3],
        rotation: [0.0; 3],
        scale_ppm: 0.0,
    };

    /// Every component sign-inverted.
    pub fn negated(&self) -> Self {
        Self {
            translation: self.translation.map(|t| -t),
            rotation: self.rotation.map(|r| -r),
            scale_ppm: -self.scale_ppm,
        }
    }

    pub fn rotation_radians(&self) -> [f64; 3] {
        self.rotation.map(|r| (r / 3600.0).to_radians())
    }

    pub fn scale_unitless(&self) -> f64 {
        self.scale_ppm / 1e6
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Datum → WGS84, parameters as published
    Forward,
    /// WGS84 → datum, small-angle approximation by sign inversion
    Inverse,
}

pub fn transform(point: Cartesian, params: &HelmertParameters, direction: Direction) -> Cartesian {
    let params = match direction {
        Direction::Forward => *params,
        Direction::Inverse => params.negated(),
    };

    let [tx, ty, tz] = params.translation;
    let [rx, ry, rz] = params.rotation_radians();
    let s1 = 1.0 + params.scale_unitless();
    let Cartesian { x, y, z } = point;

    Cartesian::new(
        tx + x * s1 - y * rz + z * ry,
        ty + x * rz + y * s1 - z * rx,
        tz - x * ry + y * rx + z * s1,
    )
}
