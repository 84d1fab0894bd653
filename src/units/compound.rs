
use super::single::{SingleUnit, InvalidPowerError};

use serde::Serialize;

/// A formal product and quotient of single units, e.g.
/// "kilogram-meter-per-square-second". The numerator holds units with
/// non-negative power, the denominator units with negative power.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct CompoundUnit {
  // Within one list, no two entries share (simple_unit, prefix); such
  // entries merge by summing their powers. The numerator and
  // denominator never cancel against each other, even for identical
  // units.
  numerator: Vec<SingleUnit>,
  denominator: Vec<SingleUnit>,
}

impl CompoundUnit {
  pub fn new() -> CompoundUnit {
    CompoundUnit::default()
  }

  pub fn numerator(&self) -> &[SingleUnit] {
    &self.numerator
  }

  pub fn denominator(&self) -> &[SingleUnit] {
    &self.denominator
  }

  /// All single units of the compound, numerator first, with their
  /// signed powers.
  pub fn single_units(&self) -> Vec<SingleUnit> {
    self.numerator.iter().chain(&self.denominator).cloned().collect()
  }

  pub fn is_empty(&self) -> bool {
    self.numerator.is_empty() && self.denominator.is_empty()
  }

  /// Whether the compound consists of exactly one single unit.
  pub fn is_single(&self) -> bool {
    self.numerator.len() + self.denominator.len() == 1
  }

  /// Adds a single unit to the product. Negative powers go to the
  /// denominator. If the target list already holds an entry with the
  /// same (simple unit, prefix), the powers are summed instead of
  /// appending a duplicate.
  pub fn append(&mut self, single_unit: SingleUnit) {
    let list = if single_unit.power >= 0 {
      &mut self.numerator
    } else {
      &mut self.denominator
    };
    for candidate in list.iter_mut() {
      if candidate.simple_unit == single_unit.simple_unit && candidate.prefix == single_unit.prefix {
        candidate.power += single_unit.power;
        return;
      }
    }
    list.push(single_unit);
  }

  /// The reciprocal of `self`: numerator and denominator trade places,
  /// with every power negated so the list invariants keep holding.
  pub fn reciprocal(self) -> CompoundUnit {
    let negate = |units: Vec<SingleUnit>| {
      units.into_iter()
        .map(|mut u| {
          u.power = -u.power;
          u
        })
        .collect()
    };
    CompoundUnit {
      numerator: negate(self.denominator),
      denominator: negate(self.numerator),
    }
  }

  pub(crate) fn append_to(&self, out: &mut String) -> Result<(), InvalidPowerError> {
    if self.numerator.is_empty() {
      out.push_str("one");
    } else {
      append_list(&self.numerator, out)?;
    }
    if !self.denominator.is_empty() {
      out.push_str("-per-");
      append_list(&self.denominator, out)?;
    }
    Ok(())
  }

  /// The canonical identifier for this compound unit. An empty
  /// compound serializes to "one".
  pub fn identifier(&self) -> Result<String, InvalidPowerError> {
    let mut out = String::new();
    self.append_to(&mut out)?;
    Ok(out)
  }
}

fn append_list(units: &[SingleUnit], out: &mut String) -> Result<(), InvalidPowerError> {
  for (i, unit) in units.iter().enumerate() {
    if i > 0 {
      out.push('-');
    }
    unit.append_to(out)?;
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::units::prefix::SiPrefix;
  use crate::units::simple::SimpleUnitId;

  fn single(name: &str, power: i32, prefix: SiPrefix) -> SingleUnit {
    SingleUnit {
      power,
      prefix,
      simple_unit: SimpleUnitId::from_name(name).unwrap(),
    }
  }

  #[test]
  fn test_empty_compound_is_one() {
    let unit = CompoundUnit::new();
    assert!(unit.is_empty());
    assert!(!unit.is_single());
    assert_eq!(unit.identifier(), Ok("one".to_owned()));
  }

  #[test]
  fn test_append_routes_by_power_sign() {
    let mut unit = CompoundUnit::new();
    unit.append(single("meter", 1, SiPrefix::One));
    unit.append(single("second", -1, SiPrefix::One));
    assert_eq!(unit.numerator().len(), 1);
    assert_eq!(unit.denominator().len(), 1);
    assert_eq!(unit.identifier(), Ok("meter-per-second".to_owned()));
  }

  #[test]
  fn test_append_merges_matching_units() {
    let mut unit = CompoundUnit::new();
    unit.append(single("meter", 1, SiPrefix::One));
    unit.append(single("meter", 1, SiPrefix::One));
    assert_eq!(unit.numerator(), &[single("meter", 2, SiPrefix::One)]);
    assert_eq!(unit.identifier(), Ok("square-meter".to_owned()));
  }

  #[test]
  fn test_append_does_not_merge_across_prefixes() {
    let mut unit = CompoundUnit::new();
    unit.append(single("meter", 1, SiPrefix::One));
    unit.append(single("meter", 1, SiPrefix::Kilo));
    assert_eq!(unit.numerator().len(), 2);
    assert_eq!(unit.identifier(), Ok("meter-kilometer".to_owned()));
  }

  #[test]
  fn test_numerator_and_denominator_never_cancel() {
    let mut unit = CompoundUnit::new();
    unit.append(single("meter", 1, SiPrefix::One));
    unit.append(single("meter", -1, SiPrefix::One));
    assert_eq!(unit.numerator().len(), 1);
    assert_eq!(unit.denominator().len(), 1);
    assert_eq!(unit.identifier(), Ok("meter-per-meter".to_owned()));
  }

  #[test]
  fn test_reciprocal() {
    let mut unit = CompoundUnit::new();
    unit.append(single("meter", 1, SiPrefix::One));
    unit.append(single("second", -1, SiPrefix::One));
    let recip = unit.reciprocal();
    assert_eq!(recip.identifier(), Ok("second-per-meter".to_owned()));
  }

  #[test]
  fn test_reciprocal_is_self_inverse() {
    let mut unit = CompoundUnit::new();
    unit.append(single("meter", 2, SiPrefix::Kilo));
    unit.append(single("second", -1, SiPrefix::One));
    unit.append(single("gram", -1, SiPrefix::Milli));
    assert_eq!(unit.clone().reciprocal().reciprocal(), unit);
  }

  #[test]
  fn test_denominator_only_compound() {
    let mut unit = CompoundUnit::new();
    unit.append(single("second", -1, SiPrefix::One));
    assert_eq!(unit.identifier(), Ok("one-per-second".to_owned()));
  }
}
