//! End-to-end conversions between National Grid references,
//! OSGB36 eastings/northings and WGS84 latitude/longitude.

use crate::coords::{GeodeticCoordinate, PlanarCoordinate};
use crate::datum::tables::{Datum, ParameterTables, OSGB36_ID, WGS84_ID};
use crate::datum::EllipsoidConverter;
use crate::error::ConversionError;
use crate::grid::{self, EncodedReference};
use crate::proj::constants::OS_NATIONAL_GRID;
use crate::proj::transverse_mercator::TransverseMercator;
use crate::proj::Projection;
use crate::settings::ConversionSettings;

/// Grid ⇄ WGS84 conversions through the OSGB36 datum.
///
/// Each operation composes the grid codec, the National Grid projection and
/// the datum converter with no further logic.
pub struct ConversionPipeline {
    projection: Box<dyn Projection>,
    converter: EllipsoidConverter,
    grid_datum: Datum,
    wgs84: Datum,
}

impl ConversionPipeline {
    /// Built-in tables, OS National Grid, default solver settings.
    pub fn new() -> Result<Self, ConversionError> {
        Self::with_tables(ParameterTables::builtin(), ConversionSettings::default())
    }

    pub fn with_tables(
        tables: &ParameterTables,
        settings: ConversionSettings,
    ) -> Result<Self, ConversionError> {
        let projection = TransverseMercator::new(OS_NATIONAL_GRID, settings);
        let grid_datum = tables.datum(OSGB36_ID)?;
        let wgs84 = tables.datum(WGS84_ID)?;
        Ok(Self::from_parts(
            Box::new(projection),
            EllipsoidConverter::new(settings),
            grid_datum,
            wgs84,
        ))
    }

    /// Assemble a pipeline from its stages, e.g. another datum region.
    pub fn from_parts(
        projection: Box<dyn Projection>,
        converter: EllipsoidConverter,
        grid_datum: Datum,
        wgs84: Datum,
    ) -> Self {
        Self {
            projection,
            converter,
            grid_datum,
            wgs84,
        }
    }

    pub fn grid_ref_to_wgs84(&self, reference: &str) -> Result<GeodeticCoordinate, ConversionError> {
        let en = grid::decode(reference)?;
        self.east_north_to_wgs84(&en)
    }

    pub fn east_north_to_wgs84(
        &self,
        en: &PlanarCoordinate,
    ) -> Result<GeodeticCoordinate, ConversionError> {
        let grid_lat_lon = self.projection.unproject(en)?;
        self.converter.convert(&grid_lat_lon, &self.grid_datum, &self.wgs84)
    }

    pub fn wgs84_to_grid_ref(
        &self,
        lat_lon: &GeodeticCoordinate,
        digits: u8,
    ) -> Result<EncodedReference, ConversionError> {
        let en = self.wgs84_to_east_north(lat_lon)?;
        grid::encode(&en, digits)
    }

    pub fn wgs84_to_east_north(
        &self,
        lat_lon: &GeodeticCoordinate,
    ) -> Result<PlanarCoordinate, ConversionError> {
        let grid_lat_lon = self.converter.convert(lat_lon, &self.wgs84, &self.grid_datum)?;
        Ok(self.projection.project(&grid_lat_lon))
    }

    pub fn projection(&self) -> &dyn Projection {
        self.projection.as_ref()
    }

    pub fn converter(&self) -> &EllipsoidConverter {
        &self.converter
    }

    pub fn grid_datum(&self) -> &Datum {
        &self.grid_datum
    }

    pub fn wgs84(&self) -> &Datum {
        &self.wgs84
    }
}
