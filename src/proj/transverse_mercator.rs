//! Transverse Mercator projection, Ordnance Survey series formulation.
//!
//! Forward uses the closed-form series of the OS guide (Annex C) in terms I–VI
//! and rounds the grid position to whole metres. Inverse recovers the footpoint
//! latitude by fixed-point iteration on the meridional arc, then applies terms
//! VII–XIIA. Accurate to about a millimetre within the National Grid extent.

use crate::coords::{GeodeticCoordinate, PlanarCoordinate};
use crate::error::ConversionError;
use crate::proj::common::{meridional_arc, radii_of_curvature};
use crate::proj::constants::{ProjectionConstants, OS_NATIONAL_GRID};
use crate::proj::ellipsoid::Ellipsoid;
use crate::proj::Projection;
use crate::settings::ConversionSettings;

pub struct TransverseMercator {
    constants: ProjectionConstants,
    settings: ConversionSettings,
    // Precomputed constants
    phi0: f64, // true origin latitude (radians)
    lam0: f64, // central meridian (radians)
    a_f0: f64, // a·F0
}

impl TransverseMercator {
    pub fn new(constants: ProjectionConstants, settings: ConversionSettings) -> Self {
        Self {
            phi0: constants.true_origin_latitude.to_radians(),
            lam0: constants.true_origin_longitude.to_radians(),
            a_f0: constants.ellipsoid.a * constants.scale_factor,
            constants,
            settings,
        }
    }

    /// The British National Grid on Airy 1830 with default solver settings.
    pub fn os_national_grid() -> Self {
        Self::new(OS_NATIONAL_GRID, ConversionSettings::default())
    }

    /// Look up a named constants bundle and build the projection for it.
    pub fn by_name(name: &str, settings: ConversionSettings) -> Result<Self, ConversionError> {
        let constants = ProjectionConstants::by_name(name)?;
        Ok(Self::new(*constants, settings))
    }

    pub fn constants(&self) -> &ProjectionConstants {
        &self.constants
    }

    /// Footpoint latitude φ' for which N − N0 − M(φ') vanishes.
    fn footpoint_latitude(&self, northing: f64) -> Result<f64, ConversionError> {
        let n0 = self.constants.false_northing;
        let tolerance = self.settings.unproject_tolerance_m;

        let mut phi = self.phi0;
        let mut m = 0.0;
        let mut iterations = 0;
        loop {
            let residual = northing - n0 - m;
            // NaN never satisfies this, so degenerate input runs into the cap
            if residual.abs() < tolerance {
                tracing::trace!(iterations, "footpoint latitude converged");
                return Ok(phi);
            }
            if iterations >= self.settings.max_iterations {
                tracing::warn!(northing, iterations, "footpoint latitude did not converge");
                return Err(ConversionError::NonConvergence {
                    solver: "meridional arc latitude",
                    iterations,
                });
            }
            phi += residual / self.a_f0;
            m = meridional_arc(&self.constants, phi);
            iterations += 1;
        }
    }
}

impl Projection for TransverseMercator {
    fn project(&self, coord: &GeodeticCoordinate) -> PlanarCoordinate {
        let (phi, lam) = coord.to_radians();

        let sin_phi = phi.sin();
        let cos_phi = phi.cos();
        let tan2 = phi.tan().powi(2);
        let tan4 = tan2 * tan2;
        let (nu, rho, eta2) = radii_of_curvature(&self.constants, phi);
        let m = meridional_arc(&self.constants, phi);

        let i = m + self.constants.false_northing;
        let ii = nu / 2.0 * sin_phi * cos_phi;
        let iii = nu / 24.0 * sin_phi * cos_phi.powi(3) * (5.0 - tan2 + 9.0 * eta2);
        let iiia = nu / 720.0 * sin_phi * cos_phi.powi(5) * (61.0 - 58.0 * tan2 + tan4);
        let iv = nu * cos_phi;
        let v = nu / 6.0 * cos_phi.powi(3) * (nu / rho - tan2);
        let vi = nu / 120.0
            * cos_phi.powi(5)
            * (5.0 - 18.0 * tan2 + tan4 + 14.0 * eta2 - 58.0 * tan2 * eta2);

        let dl = lam - self.lam0;
        let dl2 = dl * dl;

        let northing = i + ii * dl2 + iii * dl2.powi(2) + iiia * dl2.powi(3);
        let easting = self.constants.false_easting + iv * dl + v * dl.powi(3) + vi * dl.powi(5);

        // Whole metres, the resolution of a 10-digit grid reference
        PlanarCoordinate::new(easting.round(), northing.round(), coord.height)
    }

    fn unproject(&self, coord: &PlanarCoordinate) -> Result<GeodeticCoordinate, ConversionError> {
        let phi1 = self.footpoint_latitude(coord.northing)?;

        let cos_phi = phi1.cos();
        let sec_phi = 1.0 / cos_phi;
        let tan_phi = phi1.tan();
        let tan2 = tan_phi * tan_phi;
        let tan4 = tan2 * tan2;
        let tan6 = tan4 * tan2;
        let (nu, rho, eta2) = radii_of_curvature(&self.constants, phi1);
        let nu3 = nu.powi(3);
        let nu5 = nu.powi(5);

        let vii = tan_phi / (2.0 * rho * nu);
        let viii = tan_phi / (24.0 * rho * nu3) * (5.0 + 3.0 * tan2 + eta2 - 9.0 * tan2 * eta2);
        let ix = tan_phi / (720.0 * rho * nu5) * (61.0 + 90.0 * tan2 + 45.0 * tan4);
        let x = sec_phi / nu;
        let xi = sec_phi / (6.0 * nu3) * (nu / rho + 2.0 * tan2);
        let xii = sec_phi / (120.0 * nu5) * (5.0 + 28.0 * tan2 + 24.0 * tan4);
        let xiia = sec_phi / (5040.0 * nu.powi(7)) * (61.0 + 662.0 * tan2 + 1320.0 * tan4 + 720.0 * tan6);

        let de = coord.easting - self.constants.false_easting;
        let de2 = de * de;

        let phi = phi1 - vii * de2 + viii * de2.powi(2) - ix * de2.powi(3);
        let lam = self.lam0 + x * de - xi * de.powi(3) + xii * de.powi(5) - xiia * de.powi(7);

        Ok(GeodeticCoordinate::new(
            phi.to_degrees(),
            lam.to_degrees(),
            coord.height,
        ))
    }

    fn ellipsoid(&self) -> &Ellipsoid {
        &self.constants.ellipsoid
    }
}
