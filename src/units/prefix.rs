
use serde::Serialize;

/// A decimal SI prefix, such as "kilo" or "milli". `SiPrefix::One` is
/// the absent prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum SiPrefix {
  Yotta,
  Zetta,
  Exa,
  Peta,
  Tera,
  Giga,
  Mega,
  Kilo,
  Hecto,
  Deka,
  #[default]
  One,
  Deci,
  Centi,
  Milli,
  Micro,
  Nano,
  Pico,
  Femto,
  Atto,
  Zepto,
  Yocto,
}

impl SiPrefix {
  /// Every prefix other than the trivial `SiPrefix::One`, in
  /// descending order of magnitude.
  pub const ALL: [SiPrefix; 20] = [
    SiPrefix::Yotta,
    SiPrefix::Zetta,
    SiPrefix::Exa,
    SiPrefix::Peta,
    SiPrefix::Tera,
    SiPrefix::Giga,
    SiPrefix::Mega,
    SiPrefix::Kilo,
    SiPrefix::Hecto,
    SiPrefix::Deka,
    SiPrefix::Deci,
    SiPrefix::Centi,
    SiPrefix::Milli,
    SiPrefix::Micro,
    SiPrefix::Nano,
    SiPrefix::Pico,
    SiPrefix::Femto,
    SiPrefix::Atto,
    SiPrefix::Zepto,
    SiPrefix::Yocto,
  ];

  /// The power of ten this prefix multiplies its unit by.
  pub fn exponent(self) -> i32 {
    match self {
      SiPrefix::Yotta => 24,
      SiPrefix::Zetta => 21,
      SiPrefix::Exa => 18,
      SiPrefix::Peta => 15,
      SiPrefix::Tera => 12,
      SiPrefix::Giga => 9,
      SiPrefix::Mega => 6,
      SiPrefix::Kilo => 3,
      SiPrefix::Hecto => 2,
      SiPrefix::Deka => 1,
      SiPrefix::One => 0,
      SiPrefix::Deci => -1,
      SiPrefix::Centi => -2,
      SiPrefix::Milli => -3,
      SiPrefix::Micro => -6,
      SiPrefix::Nano => -9,
      SiPrefix::Pico => -12,
      SiPrefix::Femto => -15,
      SiPrefix::Atto => -18,
      SiPrefix::Zepto => -21,
      SiPrefix::Yocto => -24,
    }
  }

  /// Inverse of [`SiPrefix::exponent`]. Returns `None` for exponents
  /// with no named prefix (such as 4 or -5).
  pub fn from_exponent(exponent: i32) -> Option<SiPrefix> {
    if exponent == 0 {
      return Some(SiPrefix::One);
    }
    SiPrefix::ALL.into_iter().find(|p| p.exponent() == exponent)
  }

  /// The spelled-out prefix name, as it appears inside a unit
  /// identifier. The trivial prefix has an empty name.
  pub fn name(self) -> &'static str {
    match self {
      SiPrefix::Yotta => "yotta",
      SiPrefix::Zetta => "zetta",
      SiPrefix::Exa => "exa",
      SiPrefix::Peta => "peta",
      SiPrefix::Tera => "tera",
      SiPrefix::Giga => "giga",
      SiPrefix::Mega => "mega",
      SiPrefix::Kilo => "kilo",
      SiPrefix::Hecto => "hecto",
      SiPrefix::Deka => "deka",
      SiPrefix::One => "",
      SiPrefix::Deci => "deci",
      SiPrefix::Centi => "centi",
      SiPrefix::Milli => "milli",
      SiPrefix::Micro => "micro",
      SiPrefix::Nano => "nano",
      SiPrefix::Pico => "pico",
      SiPrefix::Femto => "femto",
      SiPrefix::Atto => "atto",
      SiPrefix::Zepto => "zepto",
      SiPrefix::Yocto => "yocto",
    }
  }

  /// The multiplier this prefix applies, as a float.
  pub fn factor(self) -> f64 {
    10f64.powi(self.exponent())
  }

  pub fn is_one(self) -> bool {
    self == SiPrefix::One
  }
}
