//! Canonical unit symbols and the raw-token synonym table.
//!
//! Synonyms are loaded from `data/units.json` at compile time. Every entry
//! maps a spelling ("tablespoons", "lbs", "cloves") to one canonical
//! symbol; count-like container words (can, bunch, head, clove, …) all
//! collapse to `pcs`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// A grouping of mutually convertible units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitFamily {
    Mass,
    Volume,
    Count,
}

/// Canonical unit symbols used internally after synonym resolution.
///
/// Serializes as the symbol string ("g", "tbsp", "fl oz"), which is also
/// the form the persistence layer stores on inventory rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalUnit {
    G,
    Kg,
    Oz,
    Lb,
    Ml,
    L,
    Tsp,
    Tbsp,
    Cup,
    #[serde(rename = "fl oz")]
    FlOz,
    Pcs,
}

impl CanonicalUnit {
    /// Every canonical unit, mass then volume then count.
    pub const ALL: &'static [CanonicalUnit] = &[
        CanonicalUnit::G,
        CanonicalUnit::Kg,
        CanonicalUnit::Oz,
        CanonicalUnit::Lb,
        CanonicalUnit::Ml,
        CanonicalUnit::L,
        CanonicalUnit::Tsp,
        CanonicalUnit::Tbsp,
        CanonicalUnit::Cup,
        CanonicalUnit::FlOz,
        CanonicalUnit::Pcs,
    ];

    pub fn family(self) -> UnitFamily {
        match self {
            CanonicalUnit::G | CanonicalUnit::Kg | CanonicalUnit::Oz | CanonicalUnit::Lb => {
                UnitFamily::Mass
            }
            CanonicalUnit::Ml
            | CanonicalUnit::L
            | CanonicalUnit::Tsp
            | CanonicalUnit::Tbsp
            | CanonicalUnit::Cup
            | CanonicalUnit::FlOz => UnitFamily::Volume,
            CanonicalUnit::Pcs => UnitFamily::Count,
        }
    }

    /// Factor to the family base unit (grams, milliliters, or pieces).
    pub fn to_base(self) -> f64 {
        match self {
            CanonicalUnit::G => 1.0,
            CanonicalUnit::Kg => 1000.0,
            CanonicalUnit::Oz => 28.3495,
            CanonicalUnit::Lb => 453.592,
            CanonicalUnit::Ml => 1.0,
            CanonicalUnit::L => 1000.0,
            CanonicalUnit::Tsp => 4.92892,
            CanonicalUnit::Tbsp => 14.7868,
            CanonicalUnit::Cup => 236.588,
            CanonicalUnit::FlOz => 29.5735,
            CanonicalUnit::Pcs => 1.0,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            CanonicalUnit::G => "g",
            CanonicalUnit::Kg => "kg",
            CanonicalUnit::Oz => "oz",
            CanonicalUnit::Lb => "lb",
            CanonicalUnit::Ml => "ml",
            CanonicalUnit::L => "l",
            CanonicalUnit::Tsp => "tsp",
            CanonicalUnit::Tbsp => "tbsp",
            CanonicalUnit::Cup => "cup",
            CanonicalUnit::FlOz => "fl oz",
            CanonicalUnit::Pcs => "pcs",
        }
    }

    pub fn from_symbol(s: &str) -> Option<Self> {
        CanonicalUnit::ALL
            .iter()
            .copied()
            .find(|unit| unit.symbol() == s)
    }
}

impl fmt::Display for CanonicalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The raw JSON structure of the units data file.
#[derive(Deserialize)]
struct UnitsData {
    synonyms: HashMap<String, String>,
}

/// Spelling -> canonical unit, resolved once from the embedded data file.
static SYNONYMS: LazyLock<HashMap<String, CanonicalUnit>> = LazyLock::new(|| {
    let data: UnitsData = serde_json::from_str(include_str!("data/units.json"))
        .expect("units.json should be valid JSON");
    data.synonyms
        .into_iter()
        .map(|(spelling, symbol)| {
            let unit = CanonicalUnit::from_symbol(&symbol).unwrap_or_else(|| {
                panic!("units.json maps {spelling:?} to unknown symbol {symbol:?}")
            });
            (spelling, unit)
        })
        .collect()
});

/// Spellings sorted by length descending so multi-word forms
/// ("fluid ounces") are tried before their prefixes ("fl", "ounces") when
/// scanning text. Secondary alphabetical sort keeps the order deterministic.
static SPELLINGS_SORTED: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut spellings: Vec<&'static str> = SYNONYMS.keys().map(String::as_str).collect();
    spellings.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    spellings
});

/// Every recognized unit spelling, longest first.
///
/// Parsers scan this list to decide whether the token after a quantity is
/// a unit at all; tokens outside the vocabulary belong to the ingredient
/// name.
pub fn unit_spellings() -> &'static [&'static str] {
    &SPELLINGS_SORTED
}

/// Look up a raw unit token without applying the count default.
///
/// Case-insensitive; surrounding whitespace and a trailing period
/// ("Tbsp.") are ignored.
pub fn lookup_unit(token: &str) -> Option<CanonicalUnit> {
    let cleaned = token.trim().trim_end_matches('.').to_lowercase();
    if cleaned.is_empty() {
        return None;
    }
    SYNONYMS.get(&cleaned).copied()
}

/// Normalize a raw unit token to its canonical unit.
///
/// Empty and unrecognized tokens normalize to `pcs`: anything the table
/// does not know is counted, which is what lets the resolver fall back to
/// a count deduction instead of failing. Total over all inputs.
pub fn normalize_unit(token: &str) -> CanonicalUnit {
    lookup_unit(token).unwrap_or(CanonicalUnit::Pcs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_mass_units() {
        assert_eq!(normalize_unit("lbs"), CanonicalUnit::Lb);
        assert_eq!(normalize_unit("pounds"), CanonicalUnit::Lb);
        assert_eq!(normalize_unit("ounce"), CanonicalUnit::Oz);
        assert_eq!(normalize_unit("kilograms"), CanonicalUnit::Kg);
        assert_eq!(normalize_unit("g"), CanonicalUnit::G);
    }

    #[test]
    fn test_normalize_volume_units() {
        assert_eq!(normalize_unit("cups"), CanonicalUnit::Cup);
        assert_eq!(normalize_unit("tablespoon"), CanonicalUnit::Tbsp);
        assert_eq!(normalize_unit("tsps"), CanonicalUnit::Tsp);
        assert_eq!(normalize_unit("litres"), CanonicalUnit::L);
        assert_eq!(normalize_unit("fluid ounces"), CanonicalUnit::FlOz);
    }

    #[test]
    fn test_normalize_count_words() {
        assert_eq!(normalize_unit("piece"), CanonicalUnit::Pcs);
        assert_eq!(normalize_unit("cloves"), CanonicalUnit::Pcs);
        assert_eq!(normalize_unit("bunches"), CanonicalUnit::Pcs);
        assert_eq!(normalize_unit("can"), CanonicalUnit::Pcs);
    }

    #[test]
    fn test_normalize_is_case_insensitive_and_ignores_period() {
        assert_eq!(normalize_unit("Tbsp."), CanonicalUnit::Tbsp);
        assert_eq!(normalize_unit("LBS"), CanonicalUnit::Lb);
        assert_eq!(normalize_unit(" cup "), CanonicalUnit::Cup);
    }

    #[test]
    fn test_unknown_and_empty_default_to_pcs() {
        assert_eq!(normalize_unit("handwavium"), CanonicalUnit::Pcs);
        assert_eq!(normalize_unit(""), CanonicalUnit::Pcs);
        assert_eq!(lookup_unit("handwavium"), None);
        assert_eq!(lookup_unit(""), None);
    }

    #[test]
    fn test_spellings_sorted_longest_first() {
        let spellings = unit_spellings();
        assert!(!spellings.is_empty());
        for pair in spellings.windows(2) {
            assert!(pair[0].len() >= pair[1].len());
        }
    }

    #[test]
    fn test_symbol_round_trip() {
        for &unit in CanonicalUnit::ALL {
            assert_eq!(CanonicalUnit::from_symbol(unit.symbol()), Some(unit));
            assert_eq!(normalize_unit(unit.symbol()), unit);
        }
    }

    #[test]
    fn test_serde_uses_symbols() {
        let json = serde_json::to_string(&CanonicalUnit::FlOz).unwrap();
        assert_eq!(json, "\"fl oz\"");
        let unit: CanonicalUnit = serde_json::from_str("\"tbsp\"").unwrap();
        assert_eq!(unit, CanonicalUnit::Tbsp);
    }
}
