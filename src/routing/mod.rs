
//! Locale- and usage-driven selection among candidate output units.
//! A router resolves the input unit's physical category, fetches the
//! ordered preference list for (category, locale region, usage), and
//! picks the first candidate whose activation threshold the routed
//! quantity meets.

pub mod preferences;

use crate::conversion::converter::BaseDecomposition;
use crate::conversion::{ComplexUnitsConverter, ConversionError, ConversionRates, Measure};
use crate::units::measure_unit::MeasureUnit;
use crate::units::UnitError;

use phf::phf_map;
use serde::Serialize;
use thiserror::Error;

pub use preferences::{region_of, MapBasedPreferences, UnitPreference, UnitPreferences};

/// Error produced while building or querying a router.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RoutingError {
  /// The preference table has no entry for the usage (after region
  /// and usage fallback).
  #[error("No unit preferences for usage {usage:?} in category {category:?}")]
  UnsupportedUsage {
    category: String,
    usage: String,
  },
  /// The input unit's base dimension maps to no known physical
  /// category.
  #[error("No physical category known for unit {unit:?}")]
  UnknownCategory {
    unit: String,
  },
  #[error(transparent)]
  Unit(#[from] UnitError),
  #[error(transparent)]
  Conversion(#[from] ConversionError),
}

// Physical category per canonical base-dimension identifier, as
// produced by BaseDecomposition::base_identifier.
static CATEGORIES: phf::Map<&'static str, &'static str> = phf_map! {
  "one" => "portion",
  "meter" => "length",
  "square-meter" => "area",
  "cubic-meter" => "volume",
  "gram" => "mass",
  "second" => "duration",
  "kelvin" => "temperature",
  "radian" => "angle",
  "bit" => "digital",
  "hertz" => "frequency",
  "ampere" => "electric-current",
  "mole" => "substance-amount",
  "lux" => "illuminance",
  "em" => "typographic-width",
  "pixel" => "graphics",
  "meter-per-second" => "speed",
  "meter-per-square-second" => "acceleration",
  "gram-meter-per-square-second" => "force",
  "gram-square-meter-per-square-second" => "energy",
  "gram-square-meter-per-cubic-second" => "power",
  "gram-per-meter-square-second" => "pressure",
  "gram-square-meter-per-ampere-cubic-second" => "voltage",
  "gram-square-meter-per-square-ampere-cubic-second" => "resistance",
};

/// Resolves the physical category ("length", "speed", ...) of a unit
/// from its base-dimension decomposition.
pub fn physical_category<R: ConversionRates>(
  unit: &MeasureUnit,
  rates: &R,
) -> Result<String, RoutingError> {
  let base = BaseDecomposition::of(&unit.compound()?, rates)?;
  let identifier = base.base_identifier()?;
  match CATEGORIES.get(identifier.as_str()) {
    Some(category) => Ok((*category).to_owned()),
    None => Err(RoutingError::UnknownCategory {
      unit: unit.identifier().to_owned(),
    }),
  }
}

/// One routing candidate: the converter toward its target unit, the
/// activation limit (expressed in the target's largest slice), and
/// the precision skeleton to carry through.
#[derive(Debug, Clone)]
struct ConverterPreference {
  converter: ComplexUnitsConverter,
  limit: Option<f64>,
  skeleton: String,
  target_unit: MeasureUnit,
}

impl ConverterPreference {
  fn matches(&self, quantity: f64) -> bool {
    match self.limit {
      Some(limit) => self.converter.greater_than_or_equal(quantity, limit),
      None => true,
    }
  }
}

/// The routed quantity decomposed into the selected unit, plus the
/// formatting hints copied from the winning preference entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
  pub measures: Vec<Measure>,
  pub skeleton: String,
  pub output_unit: MeasureUnit,
}

/// Routes quantities of one input unit to the locale- and
/// usage-appropriate output unit. Immutable and reusable once built.
///
/// The preference list is used in the order the table supplies it
/// (ascending limits, catch-all last); the first candidate whose
/// limit holds wins, and the final candidate is the fallback.
#[derive(Debug, Clone)]
pub struct UnitsRouter {
  preferences: Vec<ConverterPreference>,
  output_units: Vec<MeasureUnit>,
}

impl UnitsRouter {
  pub fn new<R: ConversionRates, P: UnitPreferences>(
    input_unit: &MeasureUnit,
    locale: &str,
    usage: &str,
    rates: &R,
    preferences: &P,
  ) -> Result<UnitsRouter, RoutingError> {
    let category = physical_category(input_unit, rates)?;
    let region = region_of(locale);
    let entries = preferences.preferences(&category, usage, &region)?;
    if entries.is_empty() {
      return Err(RoutingError::UnsupportedUsage { category, usage: usage.to_owned() });
    }

    let mut converter_preferences = Vec::with_capacity(entries.len());
    let mut output_units = Vec::new();
    for entry in entries {
      let target_unit = MeasureUnit::parse(&entry.unit)?;
      let converter = ComplexUnitsConverter::new(input_unit, &target_unit, rates)?;
      output_units.push(target_unit.clone());
      converter_preferences.push(ConverterPreference {
        converter,
        limit: entry.limit,
        skeleton: entry.skeleton,
        target_unit,
      });
    }
    Ok(UnitsRouter {
      preferences: converter_preferences,
      output_units,
    })
  }

  /// Selects the first candidate whose limit `quantity` meets (a
  /// candidate without a limit always matches) and converts through
  /// it; when no candidate matches, the last one is the fallback.
  pub fn route(&self, quantity: f64) -> RouteResult {
    let chosen = self.preferences.iter()
      .find(|preference| preference.matches(quantity))
      .unwrap_or_else(|| &self.preferences[self.preferences.len() - 1]);
    RouteResult {
      measures: chosen.converter.convert(quantity),
      skeleton: chosen.skeleton.clone(),
      output_unit: chosen.target_unit.clone(),
    }
  }

  /// One (possibly mixed) target unit per candidate, in preference
  /// order. Quantity-independent; meant for UI introspection.
  pub fn output_units(&self) -> Vec<MeasureUnit> {
    self.output_units.clone()
  }
}
