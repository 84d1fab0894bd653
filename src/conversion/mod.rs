
//! Affine unit conversion: pairwise converters composed from a rate
//! table, and chained converters that decompose a quantity into mixed
//! units such as "foot+inch".

pub mod complex;
pub mod converter;
pub mod rates;

use crate::units::UnitError;

use thiserror::Error;

pub use complex::{ComplexUnitsConverter, Measure};
pub use converter::{Convertibility, UnitConverter};
pub use rates::{ConversionRate, ConversionRates, StandardRates};

/// Error produced while building or applying converters.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConversionError {
  /// The source and target units reduce to different physical
  /// dimensions, e.g. meter vs. gram.
  #[error("Cannot convert between {from_unit:?} and {to_unit:?}")]
  IncompatibleUnits {
    from_unit: String,
    to_unit: String,
  },
  /// The rate table has no entry for a unit.
  #[error("No conversion rate known for {unit:?}")]
  MissingRate {
    unit: String,
  },
  /// A mixed-unit converter was requested with no target units.
  #[error("Cannot build a converter without target units")]
  NoTargetUnits,
  #[error(transparent)]
  Unit(#[from] UnitError),
}
