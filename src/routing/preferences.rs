
use super::RoutingError;

use serde::Serialize;

use std::collections::HashMap;

/// One entry of a preference list: a target unit identifier (possibly
/// mixed, e.g. "foot+inch"), the quantity threshold at which the
/// entry activates (`None` activates always), and the precision
/// skeleton the caller should format with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitPreference {
  pub unit: String,
  pub limit: Option<f64>,
  pub skeleton: String,
}

impl UnitPreference {
  pub fn new(unit: &str, limit: Option<f64>, skeleton: &str) -> UnitPreference {
    UnitPreference {
      unit: unit.to_owned(),
      limit,
      skeleton: skeleton.to_owned(),
    }
  }
}

/// The unit-preference table collaborator. The returned list is
/// expected to arrive in ascending limit order with the no-limit
/// catch-all last; the router trusts that order and never re-sorts.
pub trait UnitPreferences {
  fn preferences(
    &self,
    category: &str,
    usage: &str,
    region: &str,
  ) -> Result<Vec<UnitPreference>, RoutingError>;
}

impl<T: UnitPreferences + ?Sized> UnitPreferences for &T {
  fn preferences(
    &self,
    category: &str,
    usage: &str,
    region: &str,
  ) -> Result<Vec<UnitPreference>, RoutingError> {
    (**self).preferences(category, usage, region)
  }
}

/// In-memory preference table keyed by (category, region, usage).
/// Lookup falls back from the requested region to the world region
/// "001", and from the requested usage to "default", in that order.
#[derive(Debug, Clone, Default)]
pub struct MapBasedPreferences {
  table: HashMap<(String, String, String), Vec<UnitPreference>>,
}

impl MapBasedPreferences {
  pub fn new() -> MapBasedPreferences {
    MapBasedPreferences::default()
  }

  pub fn insert(
    &mut self,
    category: &str,
    region: &str,
    usage: &str,
    preferences: Vec<UnitPreference>,
  ) {
    self.table.insert(
      (category.to_owned(), region.to_owned(), usage.to_owned()),
      preferences,
    );
  }

  fn get(&self, category: &str, region: &str, usage: &str) -> Option<&Vec<UnitPreference>> {
    self.table.get(&(category.to_owned(), region.to_owned(), usage.to_owned()))
  }
}

impl UnitPreferences for MapBasedPreferences {
  fn preferences(
    &self,
    category: &str,
    usage: &str,
    region: &str,
  ) -> Result<Vec<UnitPreference>, RoutingError> {
    self.get(category, region, usage)
      .or_else(|| self.get(category, "001", usage))
      .or_else(|| self.get(category, region, "default"))
      .or_else(|| self.get(category, "001", "default"))
      .cloned()
      .ok_or_else(|| RoutingError::UnsupportedUsage {
        category: category.to_owned(),
        usage: usage.to_owned(),
      })
  }
}

/// Extracts the region subtag from a BCP 47 locale tag, e.g. "US"
/// from "en-US" or "419" from "es-419". A locale without a region
/// resolves to the world region "001".
pub fn region_of(locale: &str) -> String {
  let mut subtags = locale.split(['-', '_']);
  subtags.next(); // language
  for subtag in subtags {
    // A singleton starts an extension; the region cannot follow it.
    if subtag.len() == 1 {
      break;
    }
    if subtag.len() == 2 && subtag.bytes().all(|b| b.is_ascii_alphabetic()) {
      return subtag.to_ascii_uppercase();
    }
    if subtag.len() == 3 && subtag.bytes().all(|b| b.is_ascii_digit()) {
      return subtag.to_owned();
    }
  }
  "001".to_owned()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn table() -> MapBasedPreferences {
    let mut preferences = MapBasedPreferences::new();
    preferences.insert("length", "US", "road", vec![
      UnitPreference::new("mile", Some(1.0), ""),
      UnitPreference::new("foot", None, ""),
    ]);
    preferences.insert("length", "001", "road", vec![
      UnitPreference::new("kilometer", None, ""),
    ]);
    preferences.insert("length", "001", "default", vec![
      UnitPreference::new("meter", None, ""),
    ]);
    preferences
  }

  #[test]
  fn test_exact_lookup() {
    let prefs = table().preferences("length", "road", "US").unwrap();
    assert_eq!(prefs.len(), 2);
    assert_eq!(prefs[0].unit, "mile");
  }

  #[test]
  fn test_region_falls_back_to_world() {
    let prefs = table().preferences("length", "road", "FR").unwrap();
    assert_eq!(prefs.len(), 1);
    assert_eq!(prefs[0].unit, "kilometer");
  }

  #[test]
  fn test_usage_falls_back_to_default() {
    let prefs = table().preferences("length", "hiking", "US").unwrap();
    assert_eq!(prefs[0].unit, "meter");
  }

  #[test]
  fn test_unsupported_usage() {
    let err = table().preferences("mass", "default", "US").unwrap_err();
    assert!(matches!(err, RoutingError::UnsupportedUsage { .. }));
  }

  #[test]
  fn test_region_of() {
    assert_eq!(region_of("en-US"), "US");
    assert_eq!(region_of("en_US"), "US");
    assert_eq!(region_of("es-419"), "419");
    assert_eq!(region_of("zh-Hant-TW"), "TW");
    assert_eq!(region_of("de"), "001");
    assert_eq!(region_of("en-u-ca-gregory"), "001");
    assert_eq!(region_of(""), "001");
  }
}
