//! Scenario tests for the reconciliation pipeline.
//!
//! Each case is a JSON file in `fixtures/reconcile/`:
//!
//! ```json
//! {
//!   "servings": 1.0,
//!   "inventory": [ { "name": "Tomato", "quantity": 6.0, "unit": "pcs" } ],
//!   "lines": ["3 tomatoes"],
//!   "expected": [ { "line": "3 tomatoes", "matched": true, ... } ]
//! }
//! ```
//!
//! Expected outcomes compare field-by-field with a small relative
//! tolerance on the float fields, since converted amounts come out of
//! rate-table arithmetic.

use glob::glob;
use larder_core::{reconcile, DeductionOutcome, InventoryItem};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
struct TestCase {
    servings: f64,
    inventory: Vec<InventoryItem>,
    lines: Vec<String>,
    expected: Vec<DeductionOutcome>,
}

const FLOAT_TOLERANCE: f64 = 1e-9;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= FLOAT_TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

fn outcomes_match(actual: &DeductionOutcome, expected: &DeductionOutcome) -> bool {
    actual.line == expected.line
        && actual.matched == expected.matched
        && actual.item_index == expected.item_index
        && actual.method == expected.method
        && close(actual.deducted_amount, expected.deducted_amount)
        && close(actual.match_score, expected.match_score)
        && match (actual.resulting_quantity, expected.resulting_quantity) {
            (Some(a), Some(b)) => close(a, b),
            (None, None) => true,
            _ => false,
        }
}

fn load_test_cases() -> Vec<(String, TestCase)> {
    let pattern = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/reconcile")
        .join("*.json");

    let mut cases = Vec::new();
    for entry in glob(&pattern.to_string_lossy()).expect("Failed to read glob pattern") {
        let path = entry.expect("Failed to read directory entry");
        let name = path.file_stem().unwrap().to_string_lossy().into_owned();
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
        let case: TestCase = serde_json::from_str(&content)
            .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e));
        cases.push((name, case));
    }

    // Sort by name for deterministic ordering
    cases.sort_by(|a, b| a.0.cmp(&b.0));
    cases
}

#[test]
fn test_reconcile_fixtures() {
    let cases = load_test_cases();
    assert!(!cases.is_empty(), "no fixtures found");

    let mut failures = Vec::new();

    for (name, case) in &cases {
        let actual = reconcile(&case.lines, &case.inventory, case.servings);

        if actual.len() != case.expected.len()
            || actual
                .iter()
                .zip(&case.expected)
                .any(|(a, e)| !outcomes_match(a, e))
        {
            failures.push((name.clone(), case.expected.clone(), actual));
        }
    }

    if !failures.is_empty() {
        let mut msg = format!(
            "\n{} failures across {} fixtures:\n",
            failures.len(),
            cases.len()
        );
        for (name, expected, actual) in &failures {
            msg.push_str(&format!("\n=== {} ===\n", name));
            msg.push_str(&format!("Expected: {:#?}\n", expected));
            msg.push_str(&format!("Actual:   {:#?}\n", actual));
        }
        panic!("{}", msg);
    }
}

/// Every fixture outcome, whatever its method, must keep inventory
/// non-negative and cap the deduction at the row's stock.
#[test]
fn test_fixtures_never_go_negative() {
    for (name, case) in load_test_cases() {
        for outcome in reconcile(&case.lines, &case.inventory, case.servings) {
            if let Some(resulting) = outcome.resulting_quantity {
                assert!(resulting >= 0.0, "{name}: negative quantity");
            }
            if let Some(index) = outcome.item_index {
                assert!(
                    outcome.deducted_amount <= case.inventory[index].quantity + 1e-9,
                    "{name}: deducted more than stocked"
                );
            }
        }
    }
}
