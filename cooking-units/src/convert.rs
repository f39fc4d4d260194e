//! Conversion between canonical units of the same family.
//!
//! Each family converts linearly through its base unit (grams,
//! milliliters, pieces). Cross-family requests are a typed error the
//! caller decides how to degrade on; the engine never guesses a density.

use crate::units::CanonicalUnit;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("cannot convert {from} to {to}: incompatible unit families")]
    Incompatible {
        from: CanonicalUnit,
        to: CanonicalUnit,
    },
}

/// Convert an amount between two canonical units.
///
/// Returns [`ConversionError::Incompatible`] when the units belong to
/// different families. Conversion is linear and reversible: A→B→A
/// reproduces the input within floating-point tolerance.
pub fn convert(
    amount: f64,
    from: CanonicalUnit,
    to: CanonicalUnit,
) -> Result<f64, ConversionError> {
    if from.family() != to.family() {
        return Err(ConversionError::Incompatible { from, to });
    }
    if from == to {
        return Ok(amount);
    }
    Ok(amount * from.to_base() / to.to_base())
}
