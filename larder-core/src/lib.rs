//! Smart inventory reconciliation for the pantry app.
//!
//! Takes the free-form ingredient lines of a cooked recipe (as an LLM
//! emits them) and a user's pantry snapshot, and proposes one deduction
//! per line in each matched row's own unit. When the recipe's unit family
//! cannot reach the row's unit, the engine degrades to a count deduction
//! instead of failing; when no row matches, it proposes nothing and says
//! so. Every outcome carries a method tag so callers can tell the user
//! which compromise was made.
//!
//! The engine is pure and synchronous: no I/O, no shared state, inputs
//! are snapshots and outputs are proposals. Persistence of the resulting
//! quantities belongs to the caller.
//!
//! # Example
//!
//! ```
//! use cooking_units::CanonicalUnit;
//! use larder_core::{reconcile, DeductionMethod, InventoryItem};
//!
//! let inventory = vec![InventoryItem::new("Tomato", 6.0, CanonicalUnit::Pcs)];
//! let lines = vec!["3 tomatoes".to_string()];
//!
//! let outcomes = reconcile(&lines, &inventory, 1.0);
//! assert_eq!(outcomes[0].method, Some(DeductionMethod::UnitConverted));
//! assert_eq!(outcomes[0].resulting_quantity, Some(3.0));
//! ```

pub mod categorizer;
pub mod line_parser;
pub mod matcher;
pub mod resolver;
pub mod types;

pub use categorizer::categorize;
pub use line_parser::{parse_line, parse_lines, ParsedLine};
pub use matcher::{find_best_match, MatchResult, MATCH_THRESHOLD};
pub use resolver::{reconcile, reconcile_line};
pub use types::{DeductionMethod, DeductionOutcome, InventoryItem};
