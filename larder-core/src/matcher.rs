//! Inventory matching for residual ingredient names.
//!
//! Two stages, in tie-break order: substring containment of normalized
//! names wins outright; otherwise the highest token-overlap (Jaccard)
//! score wins, gated by a fixed threshold. Ties keep the earliest
//! inventory row, so repeated runs on the same snapshot are reproducible.
//! Below the threshold the result is unmatched: the engine never guesses
//! a row under ambiguity.

use crate::types::InventoryItem;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Minimum token-overlap score for a non-containment match.
pub const MATCH_THRESHOLD: f64 = 0.5;

/// Containment is only trusted when the shorter name has some substance.
const MIN_CONTAINMENT_LEN: usize = 3;

/// Outcome of matching one residual name against the inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Index of the accepted row, or `None` when nothing cleared the bar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_index: Option<usize>,
    /// The score that decision was based on (1.0 for containment).
    pub score: f64,
}

impl MatchResult {
    pub fn is_match(&self) -> bool {
        self.item_index.is_some()
    }

    fn unmatched(score: f64) -> Self {
        Self {
            item_index: None,
            score,
        }
    }
}

/// Find the best inventory row for a residual ingredient name.
pub fn find_best_match(query: &str, inventory: &[InventoryItem]) -> MatchResult {
    let query_norm = normalize_name(query);
    if query_norm.is_empty() || inventory.is_empty() {
        return MatchResult::unmatched(0.0);
    }

    for (index, item) in inventory.iter().enumerate() {
        if names_contain(&query_norm, &normalize_name(&item.name)) {
            return MatchResult {
                item_index: Some(index),
                score: 1.0,
            };
        }
    }

    let mut best_index = None;
    let mut best_score = 0.0;
    for (index, item) in inventory.iter().enumerate() {
        let score = token_overlap(&query_norm, &normalize_name(&item.name));
        if score > best_score {
            best_score = score;
            best_index = Some(index);
        }
    }

    if best_score >= MATCH_THRESHOLD {
        MatchResult {
            item_index: best_index,
            score: best_score,
        }
    } else {
        MatchResult::unmatched(best_score)
    }
}

/// Normalize a name for comparison: lowercase, punctuation to spaces,
/// whitespace collapsed, plural suffixes stripped per token.
pub fn normalize_name(name: &str) -> String {
    let cleaned: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    cleaned
        .split_whitespace()
        .map(singularize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip a small fixed set of plural suffixes. Not a stemmer: both sides
/// of every comparison get the same treatment, so the output only has to
/// be consistent, not a dictionary word.
fn singularize(token: &str) -> String {
    if let Some(stem) = token.strip_suffix("ies") {
        if stem.len() >= 2 {
            return format!("{stem}y");
        }
    }
    if let Some(stem) = token.strip_suffix("oes") {
        if stem.len() >= 3 {
            return format!("{stem}o");
        }
    }
    if token.len() >= 4 && !token.ends_with("ss") {
        if let Some(stem) = token.strip_suffix('s') {
            return stem.to_string();
        }
    }
    token.to_string()
}

/// Substring containment in either direction over normalized names.
fn names_contain(a: &str, b: &str) -> bool {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    short.len() >= MIN_CONTAINMENT_LEN && long.contains(short)
}

/// Fraction of shared tokens over the union of tokens (Jaccard index).
fn token_overlap(a: &str, b: &str) -> f64 {
    let ta: BTreeSet<&str> = a.split_whitespace().collect();
    let tb: BTreeSet<&str> = b.split_whitespace().collect();
    if ta.is_empty() || tb.is_empty() {
        return 0.0;
    }
    let shared = ta.intersection(&tb).count();
    let union = ta.union(&tb).count();
    shared as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use cooking_units::CanonicalUnit;

    fn inventory(names: &[&str]) -> Vec<InventoryItem> {
        names
            .iter()
            .map(|name| InventoryItem::new(*name, 1.0, CanonicalUnit::Pcs))
            .collect()
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("Boneless Chicken Breast"), "boneless chicken breast");
        assert_eq!(normalize_name("  Sun-Dried Tomatoes "), "sun dried tomato");
        assert_eq!(normalize_name("berries"), "berry");
        assert_eq!(normalize_name("eggs"), "egg");
    }

    #[test]
    fn test_plural_and_singular_compare_equal() {
        assert_eq!(normalize_name("tomatoes"), normalize_name("tomato"));
        assert_eq!(normalize_name("cherries"), normalize_name("cherry"));
        assert_eq!(normalize_name("cheeses"), normalize_name("cheese"));
    }

    #[test]
    fn test_containment_beats_token_overlap() {
        let inv = inventory(&["Chickpeas", "Boneless Chicken Breast"]);
        let result = find_best_match("chicken", &inv);
        assert_eq!(result.item_index, Some(1));
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn test_containment_both_directions() {
        let inv = inventory(&["Tomato"]);
        assert_eq!(find_best_match("cherry tomato", &inv).item_index, Some(0));

        let inv = inventory(&["Organic Bananas"]);
        assert_eq!(find_best_match("banana", &inv).item_index, Some(0));
    }

    #[test]
    fn test_token_overlap_handles_reordered_words() {
        let inv = inventory(&["white rice"]);
        let result = find_best_match("rice, white", &inv);
        assert_eq!(result.item_index, Some(0));
        assert_eq!(result.score, 1.0); // containment on the joined form fails, overlap is total
    }

    #[test]
    fn test_unrelated_names_do_not_match() {
        let inv = inventory(&["Rice", "Pasta"]);
        let result = find_best_match("chicken", &inv);
        assert_eq!(result.item_index, None);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_below_threshold_is_unmatched() {
        let inv = inventory(&["sweet paprika sauce blend"]);
        let result = find_best_match("smoked paprika", &inv);
        assert!(result.item_index.is_none());
        assert!(result.score > 0.0);
        assert!(result.score < MATCH_THRESHOLD);
    }

    #[test]
    fn test_tie_keeps_first_row() {
        // 2 of 4 tokens shared with both rows; the earlier one wins.
        let inv = inventory(&["green bell pepper", "yellow bell pepper"]);
        let result = find_best_match("red bell pepper", &inv);
        assert_eq!(result.item_index, Some(0));
        assert_eq!(result.score, 0.5);
    }

    #[test]
    fn test_short_fragments_cannot_claim_by_containment() {
        let inv = inventory(&["Pasta"]);
        let result = find_best_match("a", &inv);
        assert!(result.item_index.is_none());
    }

    #[test]
    fn test_empty_inventory() {
        let result = find_best_match("chicken", &[]);
        assert!(result.item_index.is_none());
        assert_eq!(result.score, 0.0);
    }
}
