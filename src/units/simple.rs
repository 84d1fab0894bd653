
use serde::Serialize;

/// The sanctioned simple-unit names, in ASCII order, except that the
/// neutral unit "one" is always index 0. Unit identifiers may only be
/// built out of these names (plus SI prefixes, power prefixes, and the
/// compound operators).
pub const SIMPLE_UNIT_NAMES: [&str; 100] = [
  "one", // must stay at index 0
  "100kilometer",
  "acre",
  "ampere",
  "arc-minute",
  "arc-second",
  "astronomical-unit",
  "atmosphere",
  "bar",
  "barrel",
  "bit",
  "british-thermal-unit",
  "bushel",
  "byte",
  "calorie",
  "carat",
  "celsius",
  "century",
  "cup",
  "cup-metric",
  "dalton",
  "day",
  "day-person",
  "decade",
  "degree",
  "dot", // as in "dot-per-inch"
  "dunam",
  "earth-mass",
  "electronvolt",
  "em",
  "fahrenheit",
  "fathom",
  "fluid-ounce",
  "fluid-ounce-imperial",
  "foodcalorie",
  "foot",
  "furlong",
  "g-force",
  "gallon",
  "gallon-imperial",
  "generic", // as in "temperature-generic"
  "gram",
  "hectare",
  "hertz",
  "horsepower",
  "hour",
  "inch",
  "inch-hg",
  "joule",
  "karat",
  "kelvin",
  "knot",
  "light-year",
  "liter",
  "lux",
  "meter",
  "meter-of-mercury",
  "metric-ton",
  "mile",
  "mile-scandinavian",
  "minute",
  "mole",
  "month",
  "month-person",
  "nautical-mile",
  "newton",
  "ohm",
  "ounce",
  "ounce-troy",
  "parsec",
  "pascal",
  "percent",
  "permille",
  "permillion",
  "permyriad",
  "pint",
  "pint-metric",
  "pixel",
  "point",
  "pound",
  "pound-force",
  "quart",
  "radian",
  "revolution",
  "second",
  "solar-luminosity",
  "solar-mass",
  "solar-radius",
  "stone",
  "tablespoon",
  "teaspoon",
  "therm-us",
  "ton",
  "volt",
  "watt",
  "week",
  "week-person",
  "yard",
  "year",
  "year-person",
];

/// An index into [`SIMPLE_UNIT_NAMES`]. Index 0 is the neutral unit
/// "one", which never carries a prefix or a power when serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SimpleUnitId(u16);

impl SimpleUnitId {
  /// The neutral unit "one".
  pub const ONE: SimpleUnitId = SimpleUnitId(0);

  /// Looks up a sanctioned unit by its exact name.
  pub fn from_name(name: &str) -> Option<SimpleUnitId> {
    SIMPLE_UNIT_NAMES.iter()
      .position(|n| *n == name)
      .map(|i| SimpleUnitId(i as u16))
  }

  pub(crate) fn from_index(index: usize) -> Option<SimpleUnitId> {
    if index < SIMPLE_UNIT_NAMES.len() {
      Some(SimpleUnitId(index as u16))
    } else {
      None
    }
  }

  pub fn index(self) -> usize {
    self.0 as usize
  }

  pub fn name(self) -> &'static str {
    SIMPLE_UNIT_NAMES[self.index()]
  }

  pub fn is_one(self) -> bool {
    self == SimpleUnitId::ONE
  }
}
