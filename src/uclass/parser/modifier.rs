//! Trailing modifier extraction
//!
//! A modifier is a trailing `/value` on the base segment, adjusting the
//! base utility (an opacity fraction, a line-height). Two forms exist,
//! tried in priority order and both anchored at the end of the string:
//! a bracketed literal (`/[0.5]`) and a bare name (`/50`).
//!
//! The greedy prefix capture means only the last slash-delimited segment
//! is ever treated as a modifier. A name that legitimately contains a
//! slash with no following value is indistinguishable from "no modifier"
//! unless the modifier is bracketed.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::uclass::ast::Modifier;

/// Trailing bracketed modifier, e.g. `text-red-500/[0.5]`
static BRACKETED_MODIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*)/\[([^\[\]]+)\]$").unwrap());

/// Trailing bare modifier, e.g. `text-red-500/50`
static BARE_MODIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.*)/([^\[\]]+)$").unwrap());

/// Strip a trailing modifier from the base segment, if present.
///
/// Returns the truncated text and the extracted modifier. No match leaves
/// the text unchanged.
pub fn strip_modifier(base: &str) -> (&str, Option<Modifier>) {
    if let Some(caps) = BRACKETED_MODIFIER.captures(base) {
        let rest = caps.get(1).unwrap().as_str();
        let literal = caps.get(2).unwrap().as_str();
        return (&base[..rest.len()], Some(Modifier::Arbitrary(literal.to_string())));
    }

    if let Some(caps) = BARE_MODIFIER.captures(base) {
        let rest = caps.get(1).unwrap().as_str();
        let name = caps.get(2).unwrap().as_str();
        return (&base[..rest.len()], Some(Modifier::Named(name.to_string())));
    }

    (base, None)
}
