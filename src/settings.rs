//! Solver configuration shared by the iterative stages.

use serde::{Deserialize, Serialize};

/// Bounds and tolerances for the two iterative solvers.
///
/// Embeds in a caller's configuration file; missing fields fall back to the
/// defaults.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionSettings {
    /// Maximum refinements per solver before reporting non-convergence.
    pub max_iterations: usize,
    /// Cartesian to geodetic stop criterion, in metres along the semi-major axis.
    pub geodetic_precision_m: f64,
    /// Transverse Mercator inverse stop criterion on the northing residual (metres).
    pub unproject_tolerance_m: f64,
}

impl Default for ConversionSettings {
    fn default() -> Self {
        Self {
            max_iterations: 64,
            geodetic_precision_m: 4.0,
            unproject_tolerance_m: 1e-5,
        }
    }
}
