//! Candidate kind classification
//!
//! Tries three productions against the text remaining after flag and
//! modifier extraction, in priority order, first match wins:
//!
//! 1. Arbitrary property: the entire text is `[name:value]`.
//! 2. Arbitrary value: a `-[` split with the text ending in `]`.
//! 3. Plain utility: the entire text is the name.
//!
//! The property production must span the whole string and the arbitrary
//! value production requires a literal `-[`, so the two almost never
//! collide; the property check runs first to resolve the narrow cases
//! where they could.
//!
//! The arbitrary value split uses the leftmost `-[` occurrence. A utility
//! name that itself contains `-[` before the value bracket would be
//! mis-split; names like that do not occur in practice and the leftmost
//! policy keeps the scan single-pass.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::uclass::ast::CandidateKind;

/// Whole-string arbitrary property: `[name:value]` with no whitespace in
/// the value and nothing outside the brackets.
static ARBITRARY_PROPERTY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[([a-zA-Z0-9_-]+):(\S+)\]$").unwrap());

/// Classify the remaining base text into one of the three candidate kinds.
pub fn classify(text: &str) -> CandidateKind {
    if let Some(caps) = ARBITRARY_PROPERTY.captures(text) {
        return CandidateKind::Property {
            name: caps[1].to_string(),
            value: caps[2].to_string(),
        };
    }

    if let Some((name, interior)) = split_arbitrary_value(text) {
        let (value_type, value) = match interior.split_once(':') {
            Some((tag, value)) => (tag.to_string(), value.to_string()),
            None => ("any".to_string(), interior.to_string()),
        };
        return CandidateKind::Custom {
            name: name.to_string(),
            value,
            value_type,
        };
    }

    CandidateKind::Utility {
        name: text.to_string(),
    }
}

/// Split `name-[interior]` at the leftmost `-[`, requiring the text to
/// end with the closing bracket.
fn split_arbitrary_value(text: &str) -> Option<(&str, &str)> {
    let start = text.find("-[")?;
    if !text.ends_with(']') {
        return None;
    }
    Some((&text[..start], &text[start + 2..text.len() - 1]))
}
