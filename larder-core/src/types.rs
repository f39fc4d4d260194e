//! Boundary types shared with the persistence and UI collaborators.

use cooking_units::CanonicalUnit;
use serde::{Deserialize, Serialize};

/// One pantry row, as supplied by the persistence layer.
///
/// The engine never creates or deletes rows; it only proposes a new
/// quantity through a [`DeductionOutcome`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub name: String,
    /// Current stock in `unit`. Non-negative.
    pub quantity: f64,
    pub unit: CanonicalUnit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl InventoryItem {
    pub fn new(name: impl Into<String>, quantity: f64, unit: CanonicalUnit) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit,
            category: None,
        }
    }
}

/// How a deduction amount was computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionMethod {
    /// The recipe quantity converted cleanly into the row's unit.
    UnitConverted,
    /// The quantity was missing or its unit family does not reach the
    /// row's; one count of the row's own unit was deducted per serving.
    CountFallback,
}

/// Proposed deduction for one recipe ingredient line.
///
/// `resulting_quantity` is clamped at zero and `deducted_amount` capped at
/// the row's current stock; no outcome ever drives inventory negative.
/// Unmatched lines keep `matched == false` and propose no change; the
/// caller surfaces those as "ingredient not tracked".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeductionOutcome {
    /// The raw ingredient line this outcome answers for.
    pub line: String,
    pub matched: bool,
    /// Index of the matched row in the inventory snapshot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_index: Option<usize>,
    pub deducted_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resulting_quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<DeductionMethod>,
    /// Similarity score the matcher used (1.0 for containment matches).
    pub match_score: f64,
}
