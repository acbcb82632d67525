//! Common helpers for the National Grid projection series.

use super::constants::ProjectionConstants;

/// Meridional arc from the true origin latitude to `phi` (radians), scaled by F0.
///
/// Series in powers of n truncated after n³ (OS Annex C, equation C3).
pub fn meridional_arc(constants: &ProjectionConstants, phi: f64) -> f64 {
    let n = constants.n();
    let n2 = n * n;
    let n3 = n2 * n;
    let phi0 = constants.true_origin_latitude.to_radians();
    let b = constants.ellipsoid.b;

    let d = phi - phi0;
    let s = phi + phi0;

    let ma = (1.0 + n + 5.0 / 4.0 * n2 + 5.0 / 4.0 * n3) * d;
    let mb = (3.0 * n + 3.0 * n2 + 21.0 / 8.0 * n3) * d.sin() * s.cos();
    let mc = (15.0 / 8.0 * n2 + 15.0 / 8.0 * n3) * (2.0 * d).sin() * (2.0 * s).cos();
    let md = 35.0 / 24.0 * n3 * (3.0 * d).sin() * (3.0 * s).cos();

    b * constants.scale_factor * (ma - mb + mc - md)
}

/// Transverse (ν) and meridional (ρ) radii of curvature at `phi`, scaled by F0,
/// and η² = ν/ρ − 1.
pub fn radii_of_curvature(constants: &ProjectionConstants, phi: f64) -> (f64, f64, f64) {
    let a_f0 = constants.ellipsoid.a * constants.scale_factor;
    let e2 = constants.e2();
    let sin_phi = phi.sin();
    let w = 1.0 - e2 * sin_phi * sin_phi;

    let nu = a_f0 / w.sqrt();
    let rho = a_f0 * (1.0 - e2) / w.powf(1.5);
    (nu, rho, nu / rho - 1.0)
}
