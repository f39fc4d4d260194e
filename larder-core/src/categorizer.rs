//! Pantry category detection for inventory ingestion.
//!
//! Receipt-OCR rows often arrive without a category; this maps an item
//! name to one of a fixed set of labels by keyword matching. Categories
//! are checked in priority order ("frozen chicken" is frozen, not meat),
//! keywords match on whole words only ('ice' must not fire inside
//! 'rice'), and anything unrecognized lands in "pantry".
//!
//! Keyword data is loaded from `data/categories.json` at compile time.

use serde::Deserialize;
use std::sync::LazyLock;

/// The raw JSON structure of the categories data file.
#[derive(Deserialize)]
struct CategoriesData {
    categories: Vec<CategoryEntry>,
}

#[derive(Deserialize)]
struct CategoryEntry {
    name: String,
    keywords: Vec<String>,
}

/// Category list in priority order, keywords pre-normalized for
/// whole-word containment checks.
static CATEGORIES: LazyLock<Vec<(String, Vec<String>)>> = LazyLock::new(|| {
    let data: CategoriesData = serde_json::from_str(include_str!("data/categories.json"))
        .expect("categories.json should be valid JSON");
    data.categories
        .into_iter()
        .map(|entry| {
            let keywords = entry
                .keywords
                .into_iter()
                .map(|kw| format!(" {} ", normalize(&kw)))
                .collect();
            (entry.name, keywords)
        })
        .collect()
});

/// Convert a category name to a static str so callers get a cheap label.
fn category_to_static(category: &str) -> &'static str {
    const LABELS: &[&str] = &[
        "frozen",
        "beverages",
        "dairy",
        "meat",
        "produce",
        "pantry",
    ];
    LABELS
        .iter()
        .copied()
        .find(|label| *label == category)
        .unwrap_or("pantry")
}

/// Lowercase and reduce to alphanumeric words separated by single spaces.
fn normalize(s: &str) -> String {
    let cleaned: String = s
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Categorize an item name into a pantry category.
///
/// Returns "pantry" when nothing matches; dry goods and cans have no
/// keyword list of their own.
pub fn categorize(name: &str) -> &'static str {
    let padded = format!(" {} ", normalize(name));
    for (category, keywords) in CATEGORIES.iter() {
        if keywords.iter().any(|kw| padded.contains(kw.as_str())) {
            return category_to_static(category);
        }
    }
    "pantry"
}
