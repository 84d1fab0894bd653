
use super::converter::UnitConverter;
use super::rates::ConversionRates;
use super::ConversionError;
use crate::units::measure_unit::MeasureUnit;

use itertools::Itertools;
use serde::Serialize;

use std::cmp::Ordering;
use std::iter;

/// A numeric quantity tagged with its unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measure {
  pub value: f64,
  pub unit: MeasureUnit,
}

/// Converts a quantity into an ordered list of target units, floored
/// through all but the smallest: 2 meter against `[foot, inch]` comes
/// out as 6 foot 6.74016 inch.
///
/// The target slices are sorted by descending physical magnitude at
/// construction; ties (and unorderable pairs) keep their construction
/// order. Internally a chain of pairwise converters links the input
/// unit to the largest slice and each slice to the next.
#[derive(Debug, Clone)]
pub struct ComplexUnitsConverter {
  units: Vec<MeasureUnit>,
  converters: Vec<UnitConverter>,
}

impl ComplexUnitsConverter {
  /// Builds a converter from `input_unit` to the slices of
  /// `output_unit` (a possibly mixed unit such as "foot+inch").
  pub fn new<R: ConversionRates>(
    input_unit: &MeasureUnit,
    output_unit: &MeasureUnit,
    rates: &R,
  ) -> Result<ComplexUnitsConverter, ConversionError> {
    ComplexUnitsConverter::from_units(input_unit, output_unit.compound_units()?, rates)
  }

  /// Builds a converter from `input_unit` to an explicit target list.
  /// The list may arrive in any order; it is sorted here.
  pub fn from_units<R: ConversionRates>(
    input_unit: &MeasureUnit,
    mut units: Vec<MeasureUnit>,
    rates: &R,
  ) -> Result<ComplexUnitsConverter, ConversionError> {
    if units.is_empty() {
      return Err(ConversionError::NoTargetUnits);
    }

    // Descending magnitude: a is larger than b if converting 1.0 of a
    // into b yields more than 1.0. The sort is stable, so equal-sized
    // (or inconvertible) pairs keep their construction order.
    units.sort_by(|a, b| match UnitConverter::new(a, b, rates) {
      Ok(converter) => match converter.convert(1.0).partial_cmp(&1.0) {
        Some(Ordering::Greater) => Ordering::Less,
        Some(Ordering::Less) => Ordering::Greater,
        _ => Ordering::Equal,
      },
      Err(_) => Ordering::Equal,
    });

    let converters = iter::once(input_unit)
      .chain(units.iter())
      .tuple_windows()
      .map(|(source, target)| UnitConverter::new(source, target, rates))
      .collect::<Result<Vec<_>, _>>()?;

    Ok(ComplexUnitsConverter { units, converters })
  }

  /// The target units, largest first.
  pub fn units(&self) -> &[MeasureUnit] {
    &self.units
  }

  /// Converts `quantity` through the chain. Every slice except the
  /// last emits the floored whole value and passes its fractional
  /// remainder on; the last slice keeps the fraction. A negative
  /// quantity negates every emitted value.
  pub fn convert(&self, quantity: f64) -> Vec<Measure> {
    let sign = if quantity < 0.0 { -1.0 } else { 1.0 };
    let mut value = self.converters[0].convert(quantity.abs());
    let mut measures = Vec::with_capacity(self.units.len());
    for (i, unit) in self.units.iter().enumerate() {
      if i + 1 == self.units.len() {
        measures.push(Measure { value: sign * value, unit: unit.clone() });
      } else {
        let whole = value.floor();
        measures.push(Measure { value: sign * whole, unit: unit.clone() });
        value = self.converters[i + 1].convert(value - whole);
      }
    }
    measures
  }

  /// Whether `quantity` converts to at least `limit`, where `limit`
  /// is expressed in the largest target unit. Only the first pairwise
  /// converter runs; nothing is decomposed.
  pub fn greater_than_or_equal(&self, quantity: f64, limit: f64) -> bool {
    self.converters[0].convert(quantity) >= limit
  }
}
