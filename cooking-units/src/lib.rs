//! Canonical cooking units: synonym normalization and in-family conversion.
//!
//! This crate owns the fixed unit vocabulary of the pantry engine. Raw unit
//! tokens as they appear in recipe text ("pounds", "Tbsp.", "cloves")
//! normalize to one canonical symbol each, tagged with the family it
//! converts within (mass, volume, count). Conversion is linear through one
//! base unit per family and refuses to cross families: without knowing an
//! ingredient's density there is no honest mass↔volume factor.
//!
//! The synonym table is embedded data (`src/data/units.json`); teaching the
//! engine a new spelling is a data edit, not a code change.
//!
//! # Example
//!
//! ```
//! use cooking_units::{convert, normalize_unit, CanonicalUnit};
//!
//! assert_eq!(normalize_unit("pounds"), CanonicalUnit::Lb);
//! let grams = convert(2.0, CanonicalUnit::Lb, CanonicalUnit::G).unwrap();
//! assert!((grams - 907.184).abs() < 1e-9);
//! ```

mod convert;
mod units;

pub use convert::{convert, ConversionError};
pub use units::{lookup_unit, normalize_unit, unit_spellings, CanonicalUnit, UnitFamily};
