//! Read-only ellipsoid and datum parameter tables.
//!
//! The built-in tables carry WGS84 and OSGB36. Callers with their own tables
//! load them from JSON; every reference is checked at load time so lookups on a
//! loaded table only fail for names that are not in it.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::datum::helmert::HelmertParameters;
use crate::error::ConversionError;
use crate::proj::ellipsoid::{Ellipsoid, AIRY_1830, WGS84};

pub const WGS84_ID: &str = "WGS84";
pub const OSGB36_ID: &str = "OSGB36";

/// OSGB36 → WGS84, "GB - Great Britain" region.
pub const OSGB36_GB: HelmertParameters = HelmertParameters {
    translation: [446.448, -125.157, 542.06],
    rotation: [0.1502, 0.247, 0.8421],
    scale_ppm: -20.4894,
};

/// A datum resolved to its ellipsoid and one region's transform.
#[derive(Clone, Debug, PartialEq)]
pub struct Datum {
    pub id: String,
    pub name: String,
    pub ellipsoid_id: String,
    pub ellipsoid: Ellipsoid,
    pub region: String,
    pub helmert: HelmertParameters,
}

impl Datum {
    /// Identity check on the datum, not its ellipsoid.
    pub fn is_wgs84(&self) -> bool {
        self.id == WGS84_ID
    }
}

/// One datum row: its reference ellipsoid and transforms per named region.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DatumDefinition {
    pub name: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub epsg_id: Option<u32>,
    pub reference_ellipsoid: String,
    pub default_region: String,
    pub regions: BTreeMap<String, HelmertParameters>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParameterTables {
    ellipsoids: BTreeMap<String, Ellipsoid>,
    datums: BTreeMap<String, DatumDefinition>,
}

static BUILTIN: OnceLock<ParameterTables> = OnceLock::new();

impl ParameterTables {
    /// Process-wide built-in tables, built on first use.
    pub fn builtin() -> &'static ParameterTables {
        BUILTIN.get_or_init(|| {
            let ellipsoids = BTreeMap::from([
                ("AIRY_1830".to_string(), AIRY_1830),
                ("WGS_84".to_string(), WGS84),
            ]);

            let wgs84 = DatumDefinition {
                name: "WGS 1984".to_string(),
                synonyms: Vec::new(),
                epsg_id: Some(4326),
                reference_ellipsoid: "WGS_84".to_string(),
                default_region: "Global Definition".to_string(),
                regions: BTreeMap::from([(
                    "Global Definition".to_string(),
                    HelmertParameters::IDENTITY,
                )]),
            };
            let osgb36 = DatumDefinition {
                name: "Ordnance Survey - Great Britain (1936)".to_string(),
                synonyms: vec!["OSGB".to_string()],
                epsg_id: Some(4277),
                reference_ellipsoid: "AIRY_1830".to_string(),
                default_region: "GB - Great Britain".to_string(),
                regions: BTreeMap::from([("GB - Great Britain".to_string(), OSGB36_GB)]),
            };
            let datums = BTreeMap::from([
                (WGS84_ID.to_string(), wgs84),
                (OSGB36_ID.to_string(), osgb36),
            ]);

            ParameterTables { ellipsoids, datums }
        })
    }

    /// Parse and validate tables from JSON.
    ///
    /// ```json
    /// {
    ///   "ellipsoids": { "AIRY_1830": { "semi_major_axis": 6377563.396, "semi_minor_axis": 6356256.909 } },
    ///   "datums": { "OSGB36": { "name": "...", "reference_ellipsoid": "AIRY_1830",
    ///               "default_region": "GB", "regions": { "GB": { "translation": [..], "rotation": [..], "scale_ppm": .. } } } }
    /// }
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConversionError> {
        let tables: ParameterTables = serde_json::from_str(json)?;
        tables.validate()?;
        tracing::debug!(
            ellipsoids = tables.ellipsoids.len(),
            datums = tables.datums.len(),
            "loaded parameter tables"
        );
        Ok(tables)
    }

    fn validate(&self) -> Result<(), ConversionError> {
        for (id, def) in &self.datums {
            if !self.ellipsoids.contains_key(&def.reference_ellipsoid) {
                return Err(ConversionError::InvalidParameter(format!(
                    "datum {id} references unknown ellipsoid {}",
                    def.reference_ellipsoid
                )));
            }
            if !def.regions.contains_key(&def.default_region) {
                return Err(ConversionError::InvalidParameter(format!(
                    "datum {id} default region {} has no parameters",
                    def.default_region
                )));
            }
        }
        Ok(())
    }

    pub fn ellipsoid(&self, name: &str) -> Result<&Ellipsoid, ConversionError> {
        self.ellipsoids
            .get(name)
            .ok_or_else(|| ConversionError::unknown("ellipsoid", name))
    }

    /// Datum by identifier or synonym, using its default region.
    pub fn datum(&self, name: &str) -> Result<Datum, ConversionError> {
        let (id, def) = self.definition(name)?;
        self.resolve(id, def, &def.default_region)
    }

    pub fn datum_in_region(&self, name: &str, region: &str) -> Result<Datum, ConversionError> {
        let (id, def) = self.definition(name)?;
        self.resolve(id, def, region)
    }

    pub fn datum_by_epsg(&self, code: u32) -> Result<Datum, ConversionError> {
        let (id, def) = self
            .datums
            .iter()
            .find(|(_, def)| def.epsg_id == Some(code))
            .ok_or_else(|| ConversionError::unknown("datum", format!("EPSG:{code}")))?;
        self.resolve(id, def, &def.default_region)
    }

    pub fn datum_ids(&self) -> impl Iterator<Item = &str> {
        self.datums.keys().map(String::as_str)
    }

    fn definition(&self, name: &str) -> Result<(&String, &DatumDefinition), ConversionError> {
        if let Some(entry) = self.datums.get_key_value(name) {
            return Ok(entry);
        }
        self.datums
            .iter()
            .find(|(id, def)| {
                id.eq_ignore_ascii_case(name)
                    || def.synonyms.iter().any(|s| s.eq_ignore_ascii_case(name))
            })
            .ok_or_else(|| ConversionError::unknown("datum", name))
    }

    fn resolve(
        &self,
        id: &str,
        def: &DatumDefinition,
        region: &str,
    ) -> Result<Datum, ConversionError> {
        let helmert = def
            .regions
            .get(region)
            .ok_or_else(|| ConversionError::unknown("datum region", format!("{id}/{region}")))?;
        let ellipsoid = self.ellipsoid(&def.reference_ellipsoid)?;
        Ok(Datum {
            id: id.to_string(),
            name: def.name.clone(),
            ellipsoid_id: def.reference_ellipsoid.clone(),
            ellipsoid: *ellipsoid,
            region: region.to_string(),
            helmert: *helmert,
        })
    }
}
