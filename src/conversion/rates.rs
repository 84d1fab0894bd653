
use super::ConversionError;
use crate::units::prefix::SiPrefix;
use crate::units::simple::SimpleUnitId;

use phf::phf_map;

/// An affine mapping from one prefixed simple unit to base units:
/// `value_in_base = value * factor + offset`. The base is itself a
/// (possibly compound) unit identifier, e.g. `"meter"` for `"foot"` or
/// `"kilogram-meter-per-square-second"` for `"newton"`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRate {
  pub base_unit: String,
  pub factor: f64,
  pub offset: f64,
}

/// The conversion-rate table collaborator. Implementations resolve a
/// prefixed simple unit to its affine rate against the base units of
/// its physical dimension.
pub trait ConversionRates {
  fn rate(&self, unit: SimpleUnitId, prefix: SiPrefix) -> Result<ConversionRate, ConversionError>;
}

impl<T: ConversionRates + ?Sized> ConversionRates for &T {
  fn rate(&self, unit: SimpleUnitId, prefix: SiPrefix) -> Result<ConversionRate, ConversionError> {
    (**self).rate(unit, prefix)
  }
}

// (base unit identifier, factor, offset) per sanctioned simple unit.
// Factors follow the CLDR conversion data; offsets appear only in the
// temperature family.
static STANDARD_RATES: phf::Map<&'static str, (&'static str, f64, f64)> = phf_map! {
  // dimensionless
  "one" => ("one", 1.0, 0.0),
  "percent" => ("one", 0.01, 0.0),
  "permille" => ("one", 0.001, 0.0),
  "permyriad" => ("one", 0.0001, 0.0),
  "permillion" => ("one", 0.000001, 0.0),
  "karat" => ("one", 0.041666666666666664, 0.0),

  // length
  "meter" => ("meter", 1.0, 0.0),
  "100kilometer" => ("meter", 100000.0, 0.0),
  "astronomical-unit" => ("meter", 149597870700.0, 0.0),
  "fathom" => ("meter", 1.8288, 0.0),
  "foot" => ("meter", 0.3048, 0.0),
  "furlong" => ("meter", 201.168, 0.0),
  "inch" => ("meter", 0.0254, 0.0),
  "light-year" => ("meter", 9460730472580800.0, 0.0),
  "mile" => ("meter", 1609.344, 0.0),
  "mile-scandinavian" => ("meter", 10000.0, 0.0),
  "nautical-mile" => ("meter", 1852.0, 0.0),
  "parsec" => ("meter", 30856775814913672.0, 0.0),
  "point" => ("meter", 0.0003527777777777778, 0.0),
  "solar-radius" => ("meter", 695700000.0, 0.0),
  "yard" => ("meter", 0.9144, 0.0),

  // area
  "acre" => ("square-meter", 4046.8564224, 0.0),
  "dunam" => ("square-meter", 1000.0, 0.0),
  "hectare" => ("square-meter", 10000.0, 0.0),

  // mass
  "gram" => ("kilogram", 0.001, 0.0),
  "carat" => ("kilogram", 0.0002, 0.0),
  "dalton" => ("kilogram", 1.66053878283e-27, 0.0),
  "earth-mass" => ("kilogram", 5.9722e24, 0.0),
  "metric-ton" => ("kilogram", 1000.0, 0.0),
  "ounce" => ("kilogram", 0.028349523125, 0.0),
  "ounce-troy" => ("kilogram", 0.0311034768, 0.0),
  "pound" => ("kilogram", 0.45359237, 0.0),
  "solar-mass" => ("kilogram", 1.98847e30, 0.0),
  "stone" => ("kilogram", 6.35029318, 0.0),
  "ton" => ("kilogram", 907.18474, 0.0),

  // duration
  "second" => ("second", 1.0, 0.0),
  "minute" => ("second", 60.0, 0.0),
  "hour" => ("second", 3600.0, 0.0),
  "day" => ("second", 86400.0, 0.0),
  "day-person" => ("second", 86400.0, 0.0),
  "week" => ("second", 604800.0, 0.0),
  "week-person" => ("second", 604800.0, 0.0),
  "month" => ("second", 2629746.0, 0.0),
  "month-person" => ("second", 2629746.0, 0.0),
  "year" => ("second", 31556952.0, 0.0),
  "year-person" => ("second", 31556952.0, 0.0),
  "decade" => ("second", 315569520.0, 0.0),
  "century" => ("second", 3155695200.0, 0.0),

  // temperature
  "kelvin" => ("kelvin", 1.0, 0.0),
  "celsius" => ("kelvin", 1.0, 273.15),
  "fahrenheit" => ("kelvin", 0.5555555555555556, 255.37222222222223),
  "generic" => ("kelvin", 1.0, 0.0),

  // volume
  "liter" => ("cubic-meter", 0.001, 0.0),
  "barrel" => ("cubic-meter", 0.158987294928, 0.0),
  "bushel" => ("cubic-meter", 0.03523907016688, 0.0),
  "cup" => ("cubic-meter", 0.0002365882365, 0.0),
  "cup-metric" => ("cubic-meter", 0.00025, 0.0),
  "fluid-ounce" => ("cubic-meter", 0.0000295735295625, 0.0),
  "fluid-ounce-imperial" => ("cubic-meter", 0.0000284130625, 0.0),
  "gallon" => ("cubic-meter", 0.003785411784, 0.0),
  "gallon-imperial" => ("cubic-meter", 0.00454609, 0.0),
  "pint" => ("cubic-meter", 0.000473176473, 0.0),
  "pint-metric" => ("cubic-meter", 0.0005, 0.0),
  "quart" => ("cubic-meter", 0.000946352946, 0.0),
  "tablespoon" => ("cubic-meter", 0.00001478676478125, 0.0),
  "teaspoon" => ("cubic-meter", 0.00000492892159375, 0.0),

  // angle
  "radian" => ("radian", 1.0, 0.0),
  "degree" => ("radian", 0.017453292519943295, 0.0),
  "arc-minute" => ("radian", 0.0002908882086657216, 0.0),
  "arc-second" => ("radian", 0.000004848136811095360, 0.0),
  "revolution" => ("radian", 6.283185307179586, 0.0),

  // digital
  "bit" => ("bit", 1.0, 0.0),
  "byte" => ("bit", 8.0, 0.0),

  // energy
  "joule" => ("kilogram-square-meter-per-square-second", 1.0, 0.0),
  "british-thermal-unit" => ("kilogram-square-meter-per-square-second", 1055.06, 0.0),
  "calorie" => ("kilogram-square-meter-per-square-second", 4.184, 0.0),
  "electronvolt" => ("kilogram-square-meter-per-square-second", 1.602176634e-19, 0.0),
  "foodcalorie" => ("kilogram-square-meter-per-square-second", 4184.0, 0.0),
  "therm-us" => ("kilogram-square-meter-per-square-second", 105480400.0, 0.0),

  // power
  "watt" => ("kilogram-square-meter-per-cubic-second", 1.0, 0.0),
  "horsepower" => ("kilogram-square-meter-per-cubic-second", 745.69987158227, 0.0),
  "solar-luminosity" => ("kilogram-square-meter-per-cubic-second", 3.828e26, 0.0),

  // pressure
  "pascal" => ("kilogram-per-meter-square-second", 1.0, 0.0),
  "atmosphere" => ("kilogram-per-meter-square-second", 101325.0, 0.0),
  "bar" => ("kilogram-per-meter-square-second", 100000.0, 0.0),
  "inch-hg" => ("kilogram-per-meter-square-second", 3386.389, 0.0),
  "meter-of-mercury" => ("kilogram-per-meter-square-second", 133322.387415, 0.0),

  // force
  "newton" => ("kilogram-meter-per-square-second", 1.0, 0.0),
  "pound-force" => ("kilogram-meter-per-square-second", 4.4482216152605, 0.0),
  "g-force" => ("meter-per-square-second", 9.80665, 0.0),

  // speed
  "knot" => ("meter-per-second", 0.5144444444444445, 0.0),

  // electricity
  "ampere" => ("ampere", 1.0, 0.0),
  "volt" => ("kilogram-square-meter-per-ampere-cubic-second", 1.0, 0.0),
  "ohm" => ("kilogram-square-meter-per-square-ampere-cubic-second", 1.0, 0.0),

  // frequency
  "hertz" => ("hertz", 1.0, 0.0),

  // miscellaneous base units of their own dimension
  "mole" => ("mole", 1.0, 0.0),
  "lux" => ("lux", 1.0, 0.0),
  "em" => ("em", 1.0, 0.0),
  "pixel" => ("pixel", 1.0, 0.0),
  "dot" => ("pixel", 1.0, 0.0),
};

/// The built-in rate table covering every sanctioned simple unit. An
/// SI prefix scales the factor by the prefix's power of ten; offsets
/// are never scaled.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRates;

impl ConversionRates for StandardRates {
  fn rate(&self, unit: SimpleUnitId, prefix: SiPrefix) -> Result<ConversionRate, ConversionError> {
    match STANDARD_RATES.get(unit.name()) {
      Some(&(base_unit, factor, offset)) => Ok(ConversionRate {
        base_unit: base_unit.to_owned(),
        factor: factor * prefix.factor(),
        offset,
      }),
      None => Err(ConversionError::MissingRate {
        unit: format!("{}{}", prefix.name(), unit.name()),
      }),
    }
  }
}
