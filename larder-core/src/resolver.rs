//! Deduction resolution: parse → match → normalize → convert.
//!
//! Every line produces a well-formed [`DeductionOutcome`]; ambiguity
//! resolves to the safest option. An unmatched name is a no-op the caller
//! must surface, and a quantity whose unit family cannot reach the row's
//! unit triggers the count-fallback: one unit of the row's own measure per
//! serving ("2 cloves garlic" against garlic tracked in grams).

use crate::line_parser::{parse_line, ParsedLine};
use crate::matcher::find_best_match;
use crate::types::{DeductionMethod, DeductionOutcome, InventoryItem};
use cooking_units::{convert, normalize_unit};

/// Reconcile a cooked recipe's ingredient lines against an inventory
/// snapshot.
///
/// Returns one outcome per line, in input order. Quantities are proposed,
/// never applied; the caller owns persistence of the results.
pub fn reconcile(
    lines: &[String],
    inventory: &[InventoryItem],
    servings: f64,
) -> Vec<DeductionOutcome> {
    let servings = sanitize_servings(servings);
    lines
        .iter()
        .map(|line| resolve(line, inventory, servings))
        .collect()
}

/// Reconcile a single ingredient line.
pub fn reconcile_line(
    line: &str,
    inventory: &[InventoryItem],
    servings: f64,
) -> DeductionOutcome {
    resolve(line, inventory, sanitize_servings(servings))
}

fn sanitize_servings(servings: f64) -> f64 {
    if servings.is_finite() && servings > 0.0 {
        servings
    } else {
        tracing::warn!(servings, "servings multiplier not positive, using 1");
        1.0
    }
}

fn resolve(line: &str, inventory: &[InventoryItem], servings: f64) -> DeductionOutcome {
    let parsed = parse_line(line);
    let found = find_best_match(&parsed.residual_name, inventory);

    let Some(index) = found.item_index else {
        tracing::debug!(line, score = found.score, "no inventory row for line");
        return DeductionOutcome {
            line: line.to_string(),
            matched: false,
            item_index: None,
            deducted_amount: 0.0,
            resulting_quantity: None,
            method: None,
            match_score: found.score,
        };
    };
    let item = &inventory[index];

    let (requested, method) = requested_amount(&parsed, item, servings);
    let deducted = requested.min(item.quantity);
    let resulting = (item.quantity - requested).max(0.0);

    tracing::debug!(
        line,
        item = %item.name,
        deducted,
        resulting,
        method = ?method,
        "deduction resolved"
    );

    DeductionOutcome {
        line: line.to_string(),
        matched: true,
        item_index: Some(index),
        deducted_amount: deducted,
        resulting_quantity: Some(resulting),
        method: Some(method),
        match_score: found.score,
    }
}

/// How much of the row's own unit the line asks for, and the method tag.
///
/// The fallback always deducts one unit of the row's own measure per
/// serving, regardless of any parsed magnitude (see DESIGN.md).
fn requested_amount(
    parsed: &ParsedLine,
    item: &InventoryItem,
    servings: f64,
) -> (f64, DeductionMethod) {
    let Some(magnitude) = parsed.magnitude else {
        return (servings, DeductionMethod::CountFallback);
    };
    let from = normalize_unit(parsed.raw_unit.as_deref().unwrap_or(""));
    match convert(magnitude, from, item.unit) {
        Ok(in_item_unit) => (in_item_unit * servings, DeductionMethod::UnitConverted),
        Err(err) => {
            tracing::debug!(item = %item.name, %err, "count fallback");
            (servings, DeductionMethod::CountFallback)
        }
    }
}
