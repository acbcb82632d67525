//! Geodetic ⇄ ECEF conversion on a given ellipsoid.

use crate::coords::{Cartesian, GeodeticCoordinate};
use crate::error::ConversionError;
use crate::proj::ellipsoid::Ellipsoid;
use crate::settings::ConversionSettings;

pub fn to_cartesian(coord: &GeodeticCoordinate, ellipsoid: &Ellipsoid) -> Cartesian {
    let (phi, lam) = coord.to_radians();
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_lam, cos_lam) = lam.sin_cos();
    let h = coord.height;

    // Prime vertical radius of curvature
    let nu = ellipsoid.a / (1.0 - ellipsoid.e2 * sin_phi * sin_phi).sqrt();

    Cartesian::new(
        (nu + h) * cos_phi * cos_lam,
        (nu + h) * cos_phi * sin_lam,
        ((1.0 - ellipsoid.e2) * nu + h) * sin_phi,
    )
}

/// Iterative latitude refinement until successive estimates agree to
/// `geodetic_precision_m / a` radians.
pub fn to_geodetic(
    point: &Cartesian,
    ellipsoid: &Ellipsoid,
    settings: &ConversionSettings,
) -> Result<GeodeticCoordinate, ConversionError> {
    let a = ellipsoid.a;
    let e2 = ellipsoid.e2;
    let precision = settings.geodetic_precision_m / a;

    let p = point.x.hypot(point.y);
    let mut phi = point.z.atan2(p * (1.0 - e2));

    for iteration in 1..=settings.max_iterations {
        let sin_phi = phi.sin();
        let nu = a / (1.0 - e2 * sin_phi * sin_phi).sqrt();
        let previous = phi;
        phi = (point.z + e2 * nu * sin_phi).atan2(p);

        if (phi - previous).abs() <= precision {
            tracing::trace!(iterations = iteration, "geodetic latitude converged");
            let lam = point.y.atan2(point.x);
            return Ok(GeodeticCoordinate::new(
                phi.to_degrees(),
                lam.to_degrees(),
                p / phi.cos() - nu,
            ));
        }
    }

    tracing::warn!(
        x = point.x,
        y = point.y,
        z = point.z,
        iterations = settings.max_iterations,
        "geodetic latitude did not converge"
    );
    Err(ConversionError::NonConvergence {
        solver: "geodetic latitude",
        iterations: settings.max_iterations,
    })
}
