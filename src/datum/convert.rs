//! Datum-to-datum conversion of geodetic coordinates.
//!
//! geodetic (from) → ECEF → Helmert → ECEF → geodetic (to). The Helmert step
//! is chosen by datum identity: straight to WGS84, inverted from WGS84, or via
//! WGS84 when neither end is WGS84.

use crate::coords::{Cartesian, GeodeticCoordinate};
use crate::datum::cartesian::{to_cartesian, to_geodetic};
use crate::datum::helmert::{transform, Direction};
use crate::datum::tables::Datum;
use crate::error::ConversionError;
use crate::settings::ConversionSettings;

#[derive(Clone, Copy, Debug, Default)]
pub struct EllipsoidConverter {
    settings: ConversionSettings,
}

impl EllipsoidConverter {
    pub fn new(settings: ConversionSettings) -> Self {
        Self { settings }
    }

    pub fn convert(
        &self,
        coord: &GeodeticCoordinate,
        from: &Datum,
        to: &Datum,
    ) -> Result<GeodeticCoordinate, ConversionError> {
        let xyz = to_cartesian(coord, &from.ellipsoid);
        let shifted = self.shift(xyz, from, to);
        to_geodetic(&shifted, &to.ellipsoid, &self.settings)
    }

    fn shift(&self, xyz: Cartesian, from: &Datum, to: &Datum) -> Cartesian {
        if to.is_wgs84() {
            tracing::debug!(from = %from.id, "helmert forward to WGS84");
            transform(xyz, &from.helmert, Direction::Forward)
        } else if from.is_wgs84() {
            tracing::debug!(to = %to.id, "helmert inverse from WGS84");
            transform(xyz, &to.helmert, Direction::Inverse)
        } else {
            tracing::debug!(from = %from.id, to = %to.id, "helmert via WGS84");
            let wgs84 = transform(xyz, &from.helmert, Direction::Forward);
            transform(wgs84, &to.helmert, Direction::Inverse)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datum::helmert::HelmertParameters;
    use crate::datum::tables::ParameterTables;
    use approx::assert_abs_diff_eq;

    fn datums() -> (Datum, Datum) {
        let tables = ParameterTables::builtin();
        (tables.datum("OSGB36").unwrap(), tables.datum("WGS84").unwrap())
    }

    #[test]
    fn test_osgb36_to_wgs84_worked_example() {
        let (osgb, wgs) = datums();
        let converter = EllipsoidConverter::default();
        let g = converter
            .convert(&GeodeticCoordinate::new(52.657_568_3, 1.717_908_1, 0.0), &osgb, &wgs)
            .unwrap();
        assert_abs_diff_eq!(g.latitude, 52.657_976_6, epsilon = 1e-6);
        assert_abs_diff_eq!(g.longitude, 1.716_038_4, epsilon = 1e-6);
        assert_abs_diff_eq!(g.height, 44.70, epsilon = 0.05);
    }

    #[test]
    fn test_round_trip_within_helmert_approximation() {
        let (osgb, wgs) = datums();
        let converter = EllipsoidConverter::default();
        let cases: &[(f64, f64, f64)] = &[
            (52.657_976_6, 1.716_038_4, 44.7),
            (51.477_8, -0.001_5, 0.0),
            (56.796_891, -5.003_675, 1_345.0),
            (50.066, -5.715, 20.0),
            (58.644, -3.070, 10.0),
        ];
        for &(lat, lon, h) in cases {
            let start = GeodeticCoordinate::new(lat, lon, h);
            let there = converter.convert(&start, &wgs, &osgb).unwrap();
            let back = converter.convert(&there, &osgb, &wgs).unwrap();
            // about 1e-6° is 10 cm
            assert_abs_diff_eq!(back.latitude, lat, epsilon = 1e-6);
            assert_abs_diff_eq!(back.longitude, lon, epsilon = 1e-6);
            assert_abs_diff_eq!(back.height, h, epsilon = 0.1);

            let there = converter.convert(&start, &osgb, &wgs).unwrap();
            let back = converter.convert(&there, &wgs, &osgb).unwrap();
            assert_abs_diff_eq!(back.latitude, lat, epsilon = 1e-6);
            assert_abs_diff_eq!(back.longitude, lon, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_wgs84_to_wgs84_is_identity() {
        let (_, wgs) = datums();
        let converter = EllipsoidConverter::default();
        let start = GeodeticCoordinate::new(53.0, -1.5, 100.0);
        let g = converter.convert(&start, &wgs, &wgs).unwrap();
        assert_abs_diff_eq!(g.latitude, 53.0, epsilon = 1e-7);
        assert_abs_diff_eq!(g.longitude, -1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(g.height, 100.0, epsilon = 0.01);
    }

    #[test]
    fn test_via_wgs84_chains_forward_into_inverse() {
        // Two non-WGS84 datums on the same ellipsoid and parameters: the chained
        // composition cancels, whereas inverting from the untransformed point
        // would move it by the full translation.
        let (osgb, _) = datums();
        let mut twin = osgb.clone();
        twin.id = "OSGB36_TWIN".to_string();

        let converter = EllipsoidConverter::default();
        let start = GeodeticCoordinate::new(54.0, -2.5, 50.0);
        let g = converter.convert(&start, &osgb, &twin).unwrap();
        assert_abs_diff_eq!(g.latitude, 54.0, epsilon = 1e-6);
        assert_abs_diff_eq!(g.longitude, -2.5, epsilon = 1e-6);
        assert_abs_diff_eq!(g.height, 50.0, epsilon = 0.1);
    }

    #[test]
    fn test_via_wgs84_matches_two_step_conversion() {
        let (osgb, wgs) = datums();
        let other = Datum {
            id: "TEST".to_string(),
            name: "Test datum".to_string(),
            helmert: HelmertParameters {
                translation: [-87.0, -98.0, -121.0],
                rotation: [0.0; 3],
                scale_ppm: 0.0,
            },
            ..wgs.clone()
        };
        let converter = EllipsoidConverter::default();
        let start = GeodeticCoordinate::new(52.0, -1.0, 0.0);

        let direct = converter.convert(&start, &osgb, &other).unwrap();
        let via = converter.convert(&start, &osgb, &wgs).unwrap();
        let stepped = converter.convert(&via, &wgs, &other).unwrap();
        assert_abs_diff_eq!(direct.latitude, stepped.latitude, epsilon = 1e-7);
        assert_abs_diff_eq!(direct.longitude, stepped.longitude, epsilon = 1e-7);
        assert_abs_diff_eq!(direct.height, stepped.height, epsilon = 0.01);
    }

    #[test]
    fn test_nan_input_is_non_convergence() {
        let (osgb, wgs) = datums();
        let converter = EllipsoidConverter::default();
        let err = converter
            .convert(&GeodeticCoordinate::new(f64::NAN, 0.0, 0.0), &wgs, &osgb)
            .unwrap_err();
        assert!(matches!(err, ConversionError::NonConvergence { .. }));
    }
}
