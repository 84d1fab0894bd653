
use crate::conversion::ConversionError;
use crate::routing::RoutingError;
use crate::units::parsing::ParseError;
use crate::units::single::InvalidPowerError;
use crate::units::UnitError;

use thiserror::Error;

/// Any error the crate can produce, for callers who do not care which
/// subsystem failed.
#[derive(Debug, Clone, Error)]
pub enum Error {
  #[error(transparent)]
  Parse(#[from] ParseError),
  #[error(transparent)]
  InvalidPower(#[from] InvalidPowerError),
  #[error(transparent)]
  Unit(#[from] UnitError),
  #[error(transparent)]
  Conversion(#[from] ConversionError),
  #[error(transparent)]
  Routing(#[from] RoutingError),
}
