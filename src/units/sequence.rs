
use super::compound::CompoundUnit;
use super::single::InvalidPowerError;

use serde::Serialize;

/// An ordered sum of compound units, e.g. "foot+inch". The order of
/// the slices is whatever the caller (or the source text) supplied;
/// nothing here re-sorts them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct SequenceUnit {
  units: Vec<CompoundUnit>,
}

impl SequenceUnit {
  pub fn new() -> SequenceUnit {
    SequenceUnit::default()
  }

  pub fn push(&mut self, unit: CompoundUnit) {
    self.units.push(unit);
  }

  pub fn units(&self) -> &[CompoundUnit] {
    &self.units
  }

  pub fn into_units(self) -> Vec<CompoundUnit> {
    self.units
  }

  pub fn is_empty(&self) -> bool {
    self.units.is_empty()
  }

  pub fn len(&self) -> usize {
    self.units.len()
  }

  /// The canonical identifier, slices joined by '+'. An empty
  /// sequence serializes to "one".
  pub fn identifier(&self) -> Result<String, InvalidPowerError> {
    if self.units.is_empty() {
      return Ok("one".to_owned());
    }
    let mut out = String::new();
    for (i, unit) in self.units.iter().enumerate() {
      if i > 0 {
        out.push('+');
      }
      unit.append_to(&mut out)?;
    }
    Ok(out)
  }
}

impl From<CompoundUnit> for SequenceUnit {
  fn from(unit: CompoundUnit) -> Self {
    SequenceUnit { units: vec![unit] }
  }
}

impl FromIterator<CompoundUnit> for SequenceUnit {
  fn from_iter<I: IntoIterator<Item = CompoundUnit>>(iter: I) -> Self {
    SequenceUnit { units: iter.into_iter().collect() }
  }
}
