
use super::prefix::SiPrefix;
use super::simple::SimpleUnitId;

use serde::Serialize;
use thiserror::Error;

use std::fmt::Write;

/// One sanctioned simple unit together with an SI prefix and a signed
/// integer power, e.g. the "square-kilometer" in
/// "square-kilometer-per-hour".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SingleUnit {
  pub power: i32,
  pub prefix: SiPrefix,
  pub simple_unit: SimpleUnitId,
}

/// Error produced when serializing a unit whose power has no
/// identifier spelling. Only powers with magnitude 1 through 15 can be
/// written down.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Power {power} cannot be written in a unit identifier")]
pub struct InvalidPowerError {
  pub power: i32,
}

impl SingleUnit {
  /// The neutral single unit, corresponding to the identifier "one".
  pub fn neutral() -> SingleUnit {
    SingleUnit {
      power: 1,
      prefix: SiPrefix::One,
      simple_unit: SimpleUnitId::ONE,
    }
  }

  pub fn is_neutral(&self) -> bool {
    self.simple_unit.is_one()
  }

  /// Appends this unit's identifier to `out`, without any sign
  /// handling: the power prefix is written for the power's magnitude.
  /// The neutral unit always serializes as "one", suppressing any
  /// prefix or power it happens to carry.
  pub(crate) fn append_to(&self, out: &mut String) -> Result<(), InvalidPowerError> {
    if self.is_neutral() {
      out.push_str("one");
      return Ok(());
    }
    let magnitude = self.power.unsigned_abs();
    match magnitude {
      0 => return Err(InvalidPowerError { power: self.power }),
      1 => {}
      2 => out.push_str("square-"),
      3 => out.push_str("cubic-"),
      4..=15 => {
        // Infallible: writing to a String cannot fail.
        let _ = write!(out, "p{}-", magnitude);
      }
      _ => return Err(InvalidPowerError { power: self.power }),
    }
    if !self.prefix.is_one() {
      out.push_str(self.prefix.name());
    }
    out.push_str(self.simple_unit.name());
    Ok(())
  }

  /// The standalone identifier for this unit. A negative power is
  /// expressed by prepending "one-per-", so `second^-1` serializes as
  /// "one-per-second".
  pub fn identifier(&self) -> Result<String, InvalidPowerError> {
    let mut out = String::new();
    if self.power < 0 {
      out.push_str("one-per-");
    }
    self.append_to(&mut out)?;
    Ok(out)
  }
}

impl Default for SingleUnit {
  fn default() -> Self {
    SingleUnit::neutral()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn meter(power: i32, prefix: SiPrefix) -> SingleUnit {
    SingleUnit {
      power,
      prefix,
      simple_unit: SimpleUnitId::from_name("meter").unwrap(),
    }
  }

  #[test]
  fn test_identifier_simple() {
    assert_eq!(meter(1, SiPrefix::One).identifier(), Ok("meter".to_owned()));
    assert_eq!(meter(1, SiPrefix::Kilo).identifier(), Ok("kilometer".to_owned()));
  }

  #[test]
  fn test_identifier_with_power() {
    assert_eq!(meter(2, SiPrefix::One).identifier(), Ok("square-meter".to_owned()));
    assert_eq!(meter(3, SiPrefix::Centi).identifier(), Ok("cubic-centimeter".to_owned()));
    assert_eq!(meter(4, SiPrefix::One).identifier(), Ok("p4-meter".to_owned()));
    assert_eq!(meter(10, SiPrefix::One).identifier(), Ok("p10-meter".to_owned()));
    assert_eq!(meter(15, SiPrefix::One).identifier(), Ok("p15-meter".to_owned()));
  }

  #[test]
  fn test_identifier_negative_power() {
    assert_eq!(meter(-1, SiPrefix::One).identifier(), Ok("one-per-meter".to_owned()));
    assert_eq!(meter(-2, SiPrefix::Kilo).identifier(), Ok("one-per-square-kilometer".to_owned()));
  }

  #[test]
  fn test_identifier_invalid_power() {
    assert_eq!(meter(0, SiPrefix::One).identifier(), Err(InvalidPowerError { power: 0 }));
    assert_eq!(meter(16, SiPrefix::One).identifier(), Err(InvalidPowerError { power: 16 }));
    assert_eq!(meter(-16, SiPrefix::One).identifier(), Err(InvalidPowerError { power: -16 }));
  }

  #[test]
  fn test_neutral_suppresses_prefix_and_power() {
    let unit = SingleUnit {
      power: 3,
      prefix: SiPrefix::Kilo,
      simple_unit: SimpleUnitId::ONE,
    };
    assert_eq!(unit.identifier(), Ok("one".to_owned()));
  }
}
