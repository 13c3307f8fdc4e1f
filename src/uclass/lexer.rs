//! Separator-aware splitter for utility tokens
//!
//! This module divides a raw token into a base segment and an ordered list
//! of variant segments. The separator character does double duty in the
//! token grammar: it chains variants, and it can appear inside bracketed
//! literal values where it must not be treated as a separator
//! (`[&:hover]:underline` is one variant plus a base, not three segments).
//!
//! Splitting is a single left-to-right scan with a bracket depth counter.
//! A separator occurrence is a split point only at depth zero.
//!
//! The rationale for the explicit scanner over a lookahead pattern:
//! - A lookahead pattern re-scans to the next bracket at every separator
//!   occurrence, which degrades badly on adversarial input.
//! - The depth counter gives single-pass, bounded-time behavior and makes
//!   the nesting rule explicit in the code instead of the pattern.

use crate::uclass::ast::Variant;

/// Split a raw token on every separator occurrence at bracket depth zero.
///
/// Always returns at least one segment. The returned slices borrow from
/// `raw` and cover it exactly, in order, with separators removed.
pub fn split_on_separator<'a>(raw: &'a str, separator: &str) -> Vec<&'a str> {
    let bytes = raw.as_bytes();
    let sep = separator.as_bytes();
    let mut segments = Vec::new();
    let mut depth: usize = 0;
    let mut start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b'[' => {
                depth += 1;
                pos += 1;
            }
            b']' => {
                depth = depth.saturating_sub(1);
                pos += 1;
            }
            _ if depth == 0 && bytes[pos..].starts_with(sep) => {
                segments.push(&raw[start..pos]);
                pos += sep.len();
                start = pos;
            }
            _ => pos += 1,
        }
    }
    segments.push(&raw[start..]);
    segments
}

/// Split a raw token into its base segment and variant list.
///
/// The rightmost segment is the base candidate; all preceding segments, in
/// original left-to-right order, become the variants.
pub fn split_variants<'a>(raw: &'a str, separator: &str) -> (&'a str, Vec<Variant>) {
    let mut segments = split_on_separator(raw, separator);
    let base = segments.pop().unwrap_or(raw);
    let variants = segments.into_iter().map(classify_variant).collect();
    (base, variants)
}

/// Classify one variant segment: a segment wrapped in brackets is an
/// arbitrary variant carrying the unwrapped text, anything else is a
/// plain name.
pub fn classify_variant(segment: &str) -> Variant {
    if segment.len() >= 2 && segment.starts_with('[') && segment.ends_with(']') {
        Variant::Arbitrary(segment[1..segment.len() - 1].to_string())
    } else {
        Variant::Named(segment.to_string())
    }
}
