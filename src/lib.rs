//! Conversions between Ordnance Survey National Grid references and WGS84.
//!
//! ```
//! use osgb_convert::{ConversionPipeline, GeodeticCoordinate};
//!
//! let pipeline = ConversionPipeline::new()?;
//! let wgs84 = pipeline.grid_ref_to_wgs84("TG 51409 13177")?;
//! assert!((wgs84.latitude - 52.658).abs() < 1e-3);
//!
//! let reference = pipeline.wgs84_to_grid_ref(&GeodeticCoordinate::from_degrees(52.658, 1.716), 6)?;
//! assert_eq!(reference.as_str(), "TG 514 131");
//! # Ok::<(), osgb_convert::ConversionError>(())
//! ```

pub mod coords;
pub mod datum;
pub mod error;
pub mod grid;
pub mod pipeline;
pub mod proj;
pub mod settings;

pub use coords::{Cartesian, GeodeticCoordinate, PlanarCoordinate};
pub use error::ConversionError;
pub use grid::EncodedReference;
pub use pipeline::ConversionPipeline;
pub use settings::ConversionSettings;
