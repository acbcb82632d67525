pub mod cartesian;
pub mod convert;
pub mod helmert;
pub mod tables;

pub use convert::EllipsoidConverter;
pub use helmert::{Direction, HelmertParameters};
pub use tables::{Datum, DatumDefinition, ParameterTables};
