
//! Measurement-unit identifier parsing, conversion, and routing.
//!
//! Unit identifiers follow the CLDR grammar: sanctioned simple-unit
//! names ("meter", "foot"), optional SI prefixes ("kilo") and power
//! prefixes ("square-", "p4-"), joined by `-`, `-per-`, and `+`.
//!
//! The three subsystems build on each other:
//!
//! * [`units`]: the data model and the identifier parser/builder.
//!   [`units::MeasureUnit`] is the canonical entry point.
//! * [`conversion`]: affine converters between dimensionally
//!   compatible units, including mixed-unit decomposition
//!   (2 meter becomes 6 foot 6.74016 inch).
//! * [`routing`]: locale/usage-based selection among candidate
//!   output units, driven by a preference table.
//!
//! ```
//! use measure_units::conversion::{ComplexUnitsConverter, StandardRates};
//! use measure_units::units::MeasureUnit;
//!
//! # fn main() -> Result<(), measure_units::Error> {
//! let meter = MeasureUnit::parse("meter")?;
//! let foot_and_inch = MeasureUnit::parse("foot+inch")?;
//! let converter = ComplexUnitsConverter::new(&meter, &foot_and_inch, &StandardRates)?;
//! let measures = converter.convert(2.0);
//! assert_eq!(measures[0].value, 6.0);
//! # Ok(())
//! # }
//! ```

pub mod conversion;
pub mod error;
pub mod routing;
pub mod units;

pub use error::Error;
