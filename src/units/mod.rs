
//! The measurement unit data model: sanctioned simple units, SI
//! prefixes, single and compound units, mixed-unit sequences, and the
//! canonical-identifier wrapper [`MeasureUnit`].

pub mod compound;
pub mod measure_unit;
pub mod parsing;
pub mod prefix;
pub mod sequence;
pub mod simple;
pub mod single;

pub use compound::CompoundUnit;
pub use measure_unit::{MeasureUnit, UnitComplexity, UnitError};
pub use prefix::SiPrefix;
pub use sequence::SequenceUnit;
pub use simple::SimpleUnitId;
pub use single::{InvalidPowerError, SingleUnit};
