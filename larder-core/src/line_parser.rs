//! Ingredient line parsing.
//!
//! Decomposes a raw recipe line (e.g. "1 1/2 lbs chicken breast, diced")
//! into a magnitude, a raw unit token, and the residual ingredient name.
//! Parsing is best effort and never fails: worst case the whole cleaned
//! line becomes the residual name and the magnitude stays absent.
//!
//! A token after the quantity is consumed as a unit only when it is a
//! known spelling from the unit vocabulary. Anything else ("large",
//! "ripe") belongs to the ingredient name, where the matcher can see it.

use serde::{Deserialize, Serialize};

/// Parsed form of one recipe ingredient line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedLine {
    pub raw_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magnitude: Option<f64>,
    /// The unit token as written, trailing period dropped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_unit: Option<String>,
    /// The line with quantity and unit stripped; never empty.
    pub residual_name: String,
}

/// Leading decoration characters stripped before parsing.
const BULLETS: &[char] = &['-', '*', '•', '·', '>', '–'];

/// Unicode vulgar fractions and their decimal values.
const VULGAR_FRACTIONS: &[(char, f64)] = &[
    ('½', 0.5),
    ('⅓', 1.0 / 3.0),
    ('⅔', 2.0 / 3.0),
    ('¼', 0.25),
    ('¾', 0.75),
    ('⅕', 0.2),
    ('⅖', 0.4),
    ('⅗', 0.6),
    ('⅘', 0.8),
    ('⅙', 1.0 / 6.0),
    ('⅚', 5.0 / 6.0),
    ('⅛', 0.125),
    ('⅜', 0.375),
    ('⅝', 0.625),
    ('⅞', 0.875),
];

/// Parse a single recipe ingredient line.
pub fn parse_line(raw: &str) -> ParsedLine {
    let cleaned = clean_line(raw);
    if cleaned.is_empty() {
        return ParsedLine {
            raw_text: raw.to_string(),
            magnitude: None,
            raw_unit: None,
            residual_name: raw.trim().to_string(),
        };
    }

    let (body, asides) = strip_parentheticals(&cleaned);
    let body = body.trim();

    let (mut magnitude, rest) = match parse_number_prefix(body) {
        Some((value, used)) => (Some(value), body[used..].trim_start()),
        None => (None, body),
    };

    let (mut raw_unit, rest) = if magnitude.is_some() {
        extract_unit(rest)
    } else {
        (None, rest)
    };

    // Quantities also show up as a parenthetical after the name
    // ("Chicken Breast (4 oz, sliced)"); adopt one when the body itself
    // carried no quantity.
    if magnitude.is_none() {
        for aside in &asides {
            if let Some((value, used)) = parse_number_prefix(aside) {
                let (unit, _) = extract_unit(aside[used..].trim_start());
                magnitude = Some(value);
                raw_unit = unit;
                break;
            }
        }
    }

    let mut residual_name = collapse_whitespace(strip_leading_filler(rest));
    if residual_name.is_empty() {
        // Quantity-only lines like "2 cups": keep the whole cleaned line
        // as the name so the invariant (name never empty) holds.
        residual_name = collapse_whitespace(body);
    }
    if residual_name.is_empty() {
        residual_name = raw.trim().to_string();
    }

    ParsedLine {
        raw_text: raw.to_string(),
        magnitude,
        raw_unit,
        residual_name,
    }
}

/// Parse a batch of lines, skipping blank ones.
pub fn parse_lines(lines: &[String]) -> Vec<ParsedLine> {
    lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| parse_line(line))
        .collect()
}

/// Strip surrounding whitespace, leading bullet decorations, and list
/// ordinals.
fn clean_line(raw: &str) -> String {
    let s = raw
        .trim()
        .trim_start_matches(|c: char| BULLETS.contains(&c) || c.is_whitespace());
    strip_ordinal(s).trim().to_string()
}

/// Strip a leading list ordinal: "3)" always, "3." only when whitespace
/// and another digit follow ("1. 2 cups flour"). "1.5 cups" is a quantity.
fn strip_ordinal(s: &str) -> &str {
    let digits = s.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 || digits > 2 {
        return s;
    }
    let rest = &s[digits..];
    if let Some(r) = rest.strip_prefix(')') {
        return r.trim_start();
    }
    if let Some(r) = rest.strip_prefix('.') {
        if r.starts_with(char::is_whitespace) {
            let r = r.trim_start();
            if r.starts_with(|c: char| c.is_ascii_digit()) {
                return r;
            }
        }
    }
    s
}

/// Remove parenthetical asides, returning the remaining text and the
/// aside contents. An unbalanced "(" is left in place.
fn strip_parentheticals(s: &str) -> (String, Vec<String>) {
    let mut body = String::with_capacity(s.len());
    let mut asides = Vec::new();
    let mut rest = s;
    while let Some(start) = rest.find('(') {
        let after = &rest[start + 1..];
        let Some(end) = after.find(')') else {
            break;
        };
        body.push_str(&rest[..start]);
        asides.push(after[..end].trim().to_string());
        rest = &after[end + 1..];
    }
    body.push_str(rest);
    (body, asides)
}

/// One scanned number: its value, bytes consumed, and whether it was
/// written as a fraction (which matters for "1-1/2" style mixed numbers).
struct NumberToken {
    value: f64,
    len: usize,
    fractional: bool,
}

fn vulgar_value(c: char) -> Option<f64> {
    VULGAR_FRACTIONS
        .iter()
        .find(|(frac, _)| *frac == c)
        .map(|(_, value)| *value)
}

/// Scan one number at the start of `s`: integer, decimal, ASCII fraction,
/// unicode fraction, or integer immediately followed by a unicode
/// fraction ("2½").
fn scan_number(s: &str) -> Option<NumberToken> {
    let first = s.chars().next()?;

    if let Some(value) = vulgar_value(first) {
        return Some(NumberToken {
            value,
            len: first.len_utf8(),
            fractional: true,
        });
    }
    if !first.is_ascii_digit() {
        return None;
    }

    let digits_end = s
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(s.len());
    let digit_str = &s[..digits_end];
    let after = &s[digits_end..];

    if !digit_str.contains('.') {
        // "2½"
        if let Some(c) = after.chars().next() {
            if let Some(frac) = vulgar_value(c) {
                let whole: f64 = digit_str.parse().ok()?;
                return Some(NumberToken {
                    value: whole + frac,
                    len: digits_end + c.len_utf8(),
                    fractional: true,
                });
            }
        }
        // "3/4"
        if let Some(after_slash) = after.strip_prefix('/') {
            let den_end = after_slash
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(after_slash.len());
            if den_end > 0 {
                let num: f64 = digit_str.parse().ok()?;
                let den: f64 = after_slash[..den_end].parse().ok()?;
                if den == 0.0 {
                    return None;
                }
                return Some(NumberToken {
                    value: num / den,
                    len: digits_end + 1 + den_end,
                    fractional: true,
                });
            }
        }
    }

    let value: f64 = digit_str.parse().ok()?;
    Some(NumberToken {
        value,
        len: digits_end,
        fractional: false,
    })
}

/// Parse a leading numeric expression and return its value and the bytes
/// consumed.
///
/// On top of single numbers this handles mixed numbers ("1 1/2", "1-1/2",
/// "2½") and ranges ("1-2", "1 to 2", "1 or 2"), which resolve to the
/// midpoint of their bounds.
fn parse_number_prefix(s: &str) -> Option<(f64, usize)> {
    let first = scan_number(s)?;
    let rest = &s[first.len..];

    // Mixed number with a space: "1 1/2".
    if !first.fractional {
        let trimmed = rest.trim_start();
        let ws = rest.len() - trimmed.len();
        if ws > 0 {
            if let Some(next) = scan_number(trimmed) {
                if next.fractional {
                    return Some((first.value + next.value, first.len + ws + next.len));
                }
            }
        }
    }

    // Hyphen, spaces tolerated: a fraction written tight against it is a
    // mixed number ("1-1/2"), anything else is a range ("1-2", "1 - 2").
    let tight = rest.trim_start();
    if let Some(hyphen) = tight.chars().next().filter(|c| *c == '-' || *c == '–') {
        let pre_ws = rest.len() - tight.len();
        let after = tight[hyphen.len_utf8()..].trim_start();
        let mid_ws = tight.len() - hyphen.len_utf8() - after.len();
        if let Some(next) = scan_number(after) {
            let len = first.len + pre_ws + hyphen.len_utf8() + mid_ws + next.len;
            let value = if next.fractional && !first.fractional && pre_ws == 0 && mid_ws == 0 {
                first.value + next.value
            } else {
                (first.value + next.value) / 2.0
            };
            return Some((value, len));
        }
    }

    // Worded ranges: "1 to 2", "1 or 2".
    let trimmed = rest.trim_start();
    let ws = rest.len() - trimmed.len();
    if ws > 0 {
        for word in ["to", "or"] {
            if trimmed.len() > word.len()
                && trimmed.is_char_boundary(word.len())
                && trimmed[..word.len()].eq_ignore_ascii_case(word)
            {
                let after_word = &trimmed[word.len()..];
                let after_trimmed = after_word.trim_start();
                let ws2 = after_word.len() - after_trimmed.len();
                if ws2 > 0 {
                    if let Some(next) = scan_number(after_trimmed) {
                        let len = first.len + ws + word.len() + ws2 + next.len;
                        return Some(((first.value + next.value) / 2.0, len));
                    }
                }
            }
        }
    }

    Some((first.value, first.len))
}

/// Extract a known unit token from the start of `s`.
///
/// Spellings are tried longest first with a word-boundary check, so
/// "tablespoons" wins over "tbs" and "l" cannot eat into "lemon". Returns
/// the token as written (trailing period dropped) and the remainder.
fn extract_unit(s: &str) -> (Option<String>, &str) {
    let s = s.trim_start();
    let lower = s.to_lowercase();
    for &spelling in cooking_units::unit_spellings() {
        if !lower.starts_with(spelling) {
            continue;
        }
        if !s.is_char_boundary(spelling.len()) {
            continue;
        }
        let after = &s[spelling.len()..];
        if !after.is_empty()
            && !after.starts_with(|c: char| c.is_whitespace() || c == '.' || c == ',')
        {
            continue;
        }
        let token = s[..spelling.len()].to_string();
        let rest = after
            .trim_start_matches('.')
            .trim_start_matches(',')
            .trim_start();
        return (Some(token), rest);
    }
    (None, s)
}

/// Trim connective filler left over after removing the quantity and unit
/// ("2 cups of flour" → "flour").
fn strip_leading_filler(s: &str) -> &str {
    let rest = s.trim_start_matches(|c: char| {
        c.is_whitespace() || matches!(c, ',' | '-' | '–' | ':' | ';')
    });
    let bytes = rest.as_bytes();
    if bytes.len() > 3
        && bytes[0].eq_ignore_ascii_case(&b'o')
        && bytes[1].eq_ignore_ascii_case(&b'f')
        && bytes[2].is_ascii_whitespace()
    {
        return rest[3..].trim_start();
    }
    rest
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
