
use super::compound::CompoundUnit;
use super::parsing::{ParseError, Parser};
use super::prefix::SiPrefix;
use super::sequence::SequenceUnit;
use super::single::{InvalidPowerError, SingleUnit};

use serde::Serialize;
use thiserror::Error;

use std::fmt::{self, Display, Formatter};

/// A measurement unit held in its canonical identifier form, such as
/// "kilometer-per-hour" or "foot+inch". Constructing one normalizes
/// the identifier (parse, then rebuild), so equal units compare equal
/// as strings.
///
/// All accessors re-parse the identifier on demand; a `MeasureUnit` is
/// an immutable value object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MeasureUnit {
  identifier: String,
}

/// How much structure a unit identifier carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnitComplexity {
  /// Exactly one single unit, e.g. "kilometer".
  Single,
  /// One slice with several single units, e.g. "meter-per-second".
  Compound,
  /// Multiple '+'-joined slices, e.g. "foot+inch".
  Sequence,
}

/// Error produced by [`MeasureUnit`] operations: either the
/// identifier (or operand) fails to parse, or the result cannot be
/// written back out as an identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UnitError {
  #[error(transparent)]
  Parse(#[from] ParseError),
  #[error(transparent)]
  InvalidPower(#[from] InvalidPowerError),
}

impl MeasureUnit {
  /// Parses an identifier into its canonical form.
  pub fn parse(identifier: &str) -> Result<MeasureUnit, UnitError> {
    let sequence = Parser::new(identifier).get_only_sequence_unit()?;
    MeasureUnit::from_sequence(&sequence)
  }

  pub fn from_single(unit: &SingleUnit) -> Result<MeasureUnit, UnitError> {
    Ok(MeasureUnit { identifier: unit.identifier()? })
  }

  pub fn from_compound(unit: &CompoundUnit) -> Result<MeasureUnit, UnitError> {
    Ok(MeasureUnit { identifier: unit.identifier()? })
  }

  pub fn from_sequence(unit: &SequenceUnit) -> Result<MeasureUnit, UnitError> {
    Ok(MeasureUnit { identifier: unit.identifier()? })
  }

  pub fn identifier(&self) -> &str {
    &self.identifier
  }

  /// Classifies the identifier as single, compound, or sequence.
  pub fn complexity(&self) -> Result<UnitComplexity, UnitError> {
    let sequence = self.sequence()?;
    Ok(if sequence.len() > 1 {
      UnitComplexity::Sequence
    } else if sequence.units().first().is_some_and(|c| c.is_single()) {
      UnitComplexity::Single
    } else {
      UnitComplexity::Compound
    })
  }

  /// The parsed sequence form of this unit.
  pub fn sequence(&self) -> Result<SequenceUnit, UnitError> {
    Ok(Parser::new(&self.identifier).get_only_sequence_unit()?)
  }

  /// The parsed compound form. Fails with an unexpected-token-count
  /// error when the unit is a multi-slice sequence.
  pub fn compound(&self) -> Result<CompoundUnit, UnitError> {
    Ok(Parser::new(&self.identifier).get_only_compound_unit()?)
  }

  fn only_single(&self) -> Result<SingleUnit, UnitError> {
    Ok(Parser::new(&self.identifier).get_only_single_unit()?)
  }

  /// The SI prefix of this unit. Requires the unit to be a single
  /// unit.
  pub fn si_prefix(&self) -> Result<SiPrefix, UnitError> {
    Ok(self.only_single()?.prefix)
  }

  /// Returns a copy of this single unit with its SI prefix replaced.
  pub fn with_si_prefix(&self, prefix: SiPrefix) -> Result<MeasureUnit, UnitError> {
    let mut unit = self.only_single()?;
    unit.prefix = prefix;
    MeasureUnit::from_single(&unit)
  }

  /// The signed power of this unit. Requires the unit to be a single
  /// unit.
  pub fn power(&self) -> Result<i32, UnitError> {
    Ok(self.only_single()?.power)
  }

  /// Returns a copy of this single unit with its power replaced.
  /// Powers of magnitude 0 or greater than 15 cannot be written down
  /// and are rejected.
  pub fn with_power(&self, power: i32) -> Result<MeasureUnit, UnitError> {
    let mut unit = self.only_single()?;
    unit.power = power;
    MeasureUnit::from_single(&unit)
  }

  /// The reciprocal of this compound unit: numerator and denominator
  /// trade places.
  pub fn reciprocal(&self) -> Result<MeasureUnit, UnitError> {
    let compound = self.compound()?;
    MeasureUnit::from_compound(&compound.reciprocal())
  }

  /// The product of this compound unit and `other`, merging entries
  /// that share (simple unit, prefix) within each of the numerator
  /// and denominator lists. `other` must itself be a single compound
  /// unit.
  pub fn product(&self, other: &MeasureUnit) -> Result<MeasureUnit, UnitError> {
    let mut compound = self.compound()?;
    for single_unit in other.compound()?.single_units() {
      compound.append(single_unit);
    }
    MeasureUnit::from_compound(&compound)
  }

  /// Decomposes this compound unit into its constituent single units,
  /// numerator entries first.
  pub fn single_units(&self) -> Result<Vec<SingleUnit>, UnitError> {
    Ok(self.compound()?.single_units())
  }

  /// Decomposes this (possibly mixed) unit into its ordered compound
  /// slices, each as its own `MeasureUnit`.
  pub fn compound_units(&self) -> Result<Vec<MeasureUnit>, UnitError> {
    self.sequence()?
      .units()
      .iter()
      .map(MeasureUnit::from_compound)
      .collect()
  }
}

impl Display for MeasureUnit {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.identifier)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::units::simple::SimpleUnitId;

  fn meter_unit() -> SimpleUnitId {
    SimpleUnitId::from_name("meter").unwrap()
  }

  #[test]
  fn test_parse_normalizes() {
    let unit = MeasureUnit::parse("meter-meter").unwrap();
    assert_eq!(unit.identifier(), "square-meter");
    let unit = MeasureUnit::parse("").unwrap();
    assert_eq!(unit.identifier(), "one");
  }

  #[test]
  fn test_canonical_round_trip() {
    for id in ["meter", "kilometer-per-hour", "foot+inch", "one"] {
      let unit = MeasureUnit::parse(id).unwrap();
      assert_eq!(unit.identifier(), id);
      assert_eq!(MeasureUnit::parse(unit.identifier()).unwrap(), unit);
    }
  }

  #[test]
  fn test_complexity() {
    assert_eq!(MeasureUnit::parse("meter").unwrap().complexity(), Ok(UnitComplexity::Single));
    assert_eq!(
      MeasureUnit::parse("square-kilometer").unwrap().complexity(),
      Ok(UnitComplexity::Single),
    );
    assert_eq!(
      MeasureUnit::parse("meter-per-second").unwrap().complexity(),
      Ok(UnitComplexity::Compound),
    );
    assert_eq!(
      MeasureUnit::parse("foot+inch").unwrap().complexity(),
      Ok(UnitComplexity::Sequence),
    );
  }

  #[test]
  fn test_si_prefix_accessors() {
    let unit = MeasureUnit::parse("kilometer").unwrap();
    assert_eq!(unit.si_prefix(), Ok(SiPrefix::Kilo));
    let unit = unit.with_si_prefix(SiPrefix::Centi).unwrap();
    assert_eq!(unit.identifier(), "centimeter");
    let unit = unit.with_si_prefix(SiPrefix::One).unwrap();
    assert_eq!(unit.identifier(), "meter");
  }

  #[test]
  fn test_si_prefix_requires_single_unit() {
    let unit = MeasureUnit::parse("meter-per-second").unwrap();
    assert!(matches!(
      unit.si_prefix(),
      Err(UnitError::Parse(ParseError::UnexpectedTokenCount { .. })),
    ));
  }

  #[test]
  fn test_power_accessors() {
    let unit = MeasureUnit::parse("square-meter").unwrap();
    assert_eq!(unit.power(), Ok(2));
    assert_eq!(unit.with_power(3).unwrap().identifier(), "cubic-meter");
    assert_eq!(unit.with_power(10).unwrap().identifier(), "p10-meter");
    assert_eq!(unit.with_power(1).unwrap().identifier(), "meter");
    assert_eq!(unit.with_power(-1).unwrap().identifier(), "one-per-meter");
  }

  #[test]
  fn test_with_power_rejects_unwritable_powers() {
    let unit = MeasureUnit::parse("meter").unwrap();
    assert!(matches!(unit.with_power(0), Err(UnitError::InvalidPower(_))));
    assert!(matches!(unit.with_power(16), Err(UnitError::InvalidPower(_))));
  }

  #[test]
  fn test_reciprocal() {
    let unit = MeasureUnit::parse("meter-per-second").unwrap();
    let recip = unit.reciprocal().unwrap();
    assert_eq!(recip.identifier(), "second-per-meter");
    assert_eq!(recip.reciprocal().unwrap(), unit);
  }

  #[test]
  fn test_product() {
    let meter = MeasureUnit::parse("meter").unwrap();
    let per_second = MeasureUnit::parse("one-per-second").unwrap();
    let speed = meter.product(&per_second).unwrap();
    assert_eq!(speed.identifier(), "meter-per-second");

    // Merging happens per-list: meter * meter = square-meter.
    let area = meter.product(&meter).unwrap();
    assert_eq!(area.identifier(), "square-meter");
  }

  #[test]
  fn test_product_rejects_sequence_operand() {
    let meter = MeasureUnit::parse("meter").unwrap();
    let mixed = MeasureUnit::parse("foot+inch").unwrap();
    assert!(meter.product(&mixed).is_err());
  }

  #[test]
  fn test_single_units() {
    let unit = MeasureUnit::parse("meter-per-second").unwrap();
    let singles = unit.single_units().unwrap();
    assert_eq!(singles.len(), 2);
    assert_eq!(singles[0].simple_unit, meter_unit());
    assert_eq!(singles[0].power, 1);
    assert_eq!(singles[1].power, -1);
  }

  #[test]
  fn test_compound_units() {
    let unit = MeasureUnit::parse("foot+inch").unwrap();
    let slices = unit.compound_units().unwrap();
    assert_eq!(slices.len(), 2);
    assert_eq!(slices[0].identifier(), "foot");
    assert_eq!(slices[1].identifier(), "inch");
  }
}
