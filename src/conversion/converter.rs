
use super::rates::ConversionRates;
use super::ConversionError;
use crate::units::compound::CompoundUnit;
use crate::units::measure_unit::MeasureUnit;
use crate::units::parsing::parse_compound_unit;
use crate::units::prefix::SiPrefix;
use crate::units::simple::SimpleUnitId;
use crate::units::single::SingleUnit;
use crate::units::UnitError;

use itertools::Itertools;

use std::collections::HashMap;

/// How two units relate dimensionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convertibility {
  /// Same dimension, e.g. meter and foot.
  Convertible,
  /// Exactly inverse dimensions, e.g. meter-per-second and
  /// second-per-meter, or mile-per-gallon and liter-per-100kilometer.
  Reciprocal,
  Inconvertible,
}

/// An immutable affine transform between two compound units, composed
/// from the source→base and base→target rates.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitConverter {
  rate: f64,
  offset: f64,
  reciprocal: bool,
}

/// A compound unit reduced to base units: the summed power of each
/// base simple unit, and the total factor toward those base units
/// (with all SI prefixes folded in).
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BaseDecomposition {
  pub powers: HashMap<SimpleUnitId, i32>,
  pub factor: f64,
}

impl BaseDecomposition {
  pub(crate) fn of<R: ConversionRates>(
    unit: &CompoundUnit,
    rates: &R,
  ) -> Result<BaseDecomposition, ConversionError> {
    let mut powers: HashMap<SimpleUnitId, i32> = HashMap::new();
    let mut factor = 1.0;
    for single_unit in unit.single_units() {
      let rate = rates.rate(single_unit.simple_unit, single_unit.prefix)?;
      factor *= rate.factor.powi(single_unit.power);
      let base = parse_compound_unit(&rate.base_unit).map_err(UnitError::from)?;
      for base_single in base.single_units() {
        if base_single.simple_unit.is_one() {
          continue;
        }
        let power = base_single.power * single_unit.power;
        factor *= base_single.prefix.factor().powi(power);
        *powers.entry(base_single.simple_unit).or_insert(0) += power;
      }
    }
    powers.retain(|_, power| *power != 0);
    Ok(BaseDecomposition { powers, factor })
  }

  fn is_inverse_of(&self, other: &BaseDecomposition) -> bool {
    self.powers.len() == other.powers.len()
      && self.powers.iter().all(|(unit, power)| other.powers.get(unit) == Some(&-power))
  }

  /// The canonical identifier of the base dimension, base units in
  /// name order, e.g. `"gram-square-meter-per-square-second"` for any
  /// energy unit. The dimensionless decomposition reads `"one"`.
  pub(crate) fn base_identifier(&self) -> Result<String, UnitError> {
    let mut compound = CompoundUnit::new();
    for (&simple_unit, &power) in self.powers.iter().sorted_by_key(|(unit, _)| unit.name()) {
      compound.append(SingleUnit {
        power,
        prefix: SiPrefix::One,
        simple_unit,
      });
    }
    Ok(compound.identifier()?)
  }
}

// Offsets only apply between two bare power-1 single units; celsius
// in any compound position is treated as a pure scale.
fn lone_unit_offset<R: ConversionRates>(
  unit: &CompoundUnit,
  rates: &R,
) -> Result<f64, ConversionError> {
  match unit.single_units().as_slice() {
    [single_unit] if single_unit.power == 1 => {
      Ok(rates.rate(single_unit.simple_unit, single_unit.prefix)?.offset)
    }
    _ => Ok(0.0),
  }
}

impl UnitConverter {
  /// Composes the affine transform from `source` to `target`. Fails
  /// when the two units reduce to unrelated base dimensions.
  pub fn new<R: ConversionRates>(
    source: &MeasureUnit,
    target: &MeasureUnit,
    rates: &R,
  ) -> Result<UnitConverter, ConversionError> {
    let source_compound = source.compound()?;
    let target_compound = target.compound()?;
    let source_base = BaseDecomposition::of(&source_compound, rates)?;
    let target_base = BaseDecomposition::of(&target_compound, rates)?;

    if source_base.powers == target_base.powers {
      let source_offset = lone_unit_offset(&source_compound, rates)?;
      let target_offset = lone_unit_offset(&target_compound, rates)?;
      Ok(UnitConverter {
        rate: source_base.factor / target_base.factor,
        offset: (source_offset - target_offset) / target_base.factor,
        reciprocal: false,
      })
    } else if source_base.is_inverse_of(&target_base) {
      Ok(UnitConverter {
        rate: source_base.factor * target_base.factor,
        offset: 0.0,
        reciprocal: true,
      })
    } else {
      Err(ConversionError::IncompatibleUnits {
        from_unit: source.identifier().to_owned(),
        to_unit: target.identifier().to_owned(),
      })
    }
  }

  /// Classifies the dimensional relationship between two units
  /// without building a converter.
  pub fn convertibility<R: ConversionRates>(
    source: &MeasureUnit,
    target: &MeasureUnit,
    rates: &R,
  ) -> Result<Convertibility, ConversionError> {
    let source_base = BaseDecomposition::of(&source.compound()?, rates)?;
    let target_base = BaseDecomposition::of(&target.compound()?, rates)?;
    if source_base.powers == target_base.powers {
      Ok(Convertibility::Convertible)
    } else if source_base.is_inverse_of(&target_base) {
      Ok(Convertibility::Reciprocal)
    } else {
      Ok(Convertibility::Inconvertible)
    }
  }

  pub fn convert(&self, value: f64) -> f64 {
    if self.reciprocal {
      1.0 / (value * self.rate)
    } else {
      value * self.rate + self.offset
    }
  }
}
