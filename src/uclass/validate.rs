//! Validation gate and rule-engine collaborator contracts
//!
//! The gate rejects structurally well-formed but semantically invalid
//! candidates and normalizes accepted values. Every rejection, whatever
//! the cause, collapses into the single uniform "no candidate" outcome;
//! callers treat that as a normal result, never as a failure.
//!
//! Acceptance rules:
//! - Property candidates need a name starting with a lowercase letter,
//!   `_`, or `-`, or the rule engine must independently accept the
//!   (name, value) pair as a parsable declaration.
//! - Property candidates whose `name:value` declaration looks like a URI
//!   are rejected; source markup carrying absolute or protocol-relative
//!   URLs produces tokens of exactly that shape.
//! - Custom candidates need the rule engine to accept the value.
//! - Accepted property and custom values are replaced by the engine's
//!   normalized form. Utility candidates carry no value and are never
//!   normalized.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::uclass::ast::{Candidate, CandidateKind};

/// Contract consumed from the downstream CSS rule-generation engine.
///
/// The parser core never judges value validity or normalization rules on
/// its own; it calls out through this trait. [`DefaultEngine`] is a
/// stand-alone implementation for use without a full engine.
pub trait RuleEngine {
    /// Governs acceptance of arbitrary (custom-kind) values.
    fn is_valid_arbitrary_value(&self, value: &str) -> bool;

    /// Secondary acceptance path for property candidates whose name fails
    /// the fast first-character check.
    fn is_parsable_css_value(&self, name: &str, value: &str) -> bool;

    /// Canonicalize an accepted property or custom value.
    fn normalize(&self, value: &str) -> String;
}

/// Property name idents accepted by [`DefaultEngine::is_parsable_css_value`]
static CSS_IDENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-{0,2}[A-Za-z_][A-Za-z0-9_-]*$").unwrap());

/// Default rule engine: delimiter-balance checking for arbitrary values
/// and underscore-to-space whitespace canonicalization.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEngine;

impl RuleEngine for DefaultEngine {
    fn is_valid_arbitrary_value(&self, value: &str) -> bool {
        if value.is_empty() {
            return false;
        }

        let mut round = 0i32;
        let mut square = 0i32;
        let mut curly = 0i32;
        let mut in_single = false;
        let mut in_double = false;
        let mut escaped = false;

        for c in value.chars() {
            if escaped {
                escaped = false;
                continue;
            }
            match c {
                '\\' => escaped = true,
                '\'' if !in_double => in_single = !in_single,
                '"' if !in_single => in_double = !in_double,
                _ if in_single || in_double => {}
                // A bare semicolon would terminate the declaration and
                // smuggle further declarations into the output.
                ';' => return false,
                '(' => round += 1,
                ')' => {
                    round -= 1;
                    if round < 0 {
                        return false;
                    }
                }
                '[' => square += 1,
                ']' => {
                    square -= 1;
                    if square < 0 {
                        return false;
                    }
                }
                '{' => curly += 1,
                '}' => {
                    curly -= 1;
                    if curly < 0 {
                        return false;
                    }
                }
                _ => {}
            }
        }

        round == 0 && square == 0 && curly == 0 && !in_single && !in_double && !escaped
    }

    fn is_parsable_css_value(&self, name: &str, value: &str) -> bool {
        CSS_IDENT.is_match(name) && self.is_valid_arbitrary_value(value)
    }

    fn normalize(&self, value: &str) -> String {
        // Underscores stand in for spaces inside a whitespace-free token;
        // `\_` keeps a literal underscore.
        let mut unescaped = String::with_capacity(value.len());
        let mut chars = value.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\\' if chars.peek() == Some(&'_') => {
                    chars.next();
                    unescaped.push('_');
                }
                '_' => unescaped.push(' '),
                _ => unescaped.push(c),
            }
        }

        // Collapse whitespace runs and trim the ends.
        let mut normalized = String::with_capacity(unescaped.len());
        let mut pending_space = false;
        for c in unescaped.trim().chars() {
            if c.is_whitespace() {
                pending_space = true;
            } else {
                if pending_space {
                    normalized.push(' ');
                    pending_space = false;
                }
                normalized.push(c);
            }
        }
        normalized
    }
}

/// Run the validation gate over a structurally parsed candidate.
///
/// Returns the candidate with its value normalized, or `None` when any
/// acceptance rule rejects it.
pub fn validate<E: RuleEngine>(mut candidate: Candidate, engine: &E) -> Option<Candidate> {
    match &candidate.kind {
        CandidateKind::Property { name, value } => {
            if !is_valid_property_name(name) && !engine.is_parsable_css_value(name, value) {
                return None;
            }
            if looks_like_uri(&format!("{}:{}", name, value)) {
                return None;
            }
        }
        CandidateKind::Custom { value, .. } => {
            if !engine.is_valid_arbitrary_value(value) {
                return None;
            }
        }
        CandidateKind::Utility { .. } => {}
    }

    match &mut candidate.kind {
        CandidateKind::Property { value, .. } | CandidateKind::Custom { value, .. } => {
            *value = engine.normalize(value);
        }
        CandidateKind::Utility { .. } => {}
    }

    Some(candidate)
}

/// Fast first-character check for custom property names.
fn is_valid_property_name(name: &str) -> bool {
    matches!(name.chars().next(), Some(c) if c.is_ascii_lowercase() || c == '_' || c == '-')
}

/// Check whether a `name:value` declaration is actually a URI.
///
/// A `name:` prefix turns an embedded absolute URL into an opaque path,
/// so when the whole declaration has no host the text after the first
/// colon gets a second parse attempt. Parse failures are recovered
/// locally as "not URI-like".
pub fn looks_like_uri(declaration: &str) -> bool {
    // Quick bailout for obvious non-URIs. Schemes without a `//` part
    // won't be caught, which is acceptable here.
    if !declaration.contains("://") {
        return false;
    }

    if parses_with_host(declaration) {
        return true;
    }

    declaration
        .split_once(':')
        .is_some_and(|(_, rest)| parses_with_host(rest))
}

fn parses_with_host(input: &str) -> bool {
    match Url::parse(input) {
        Ok(url) => !url.scheme().is_empty() && url.host_str().is_some_and(|host| !host.is_empty()),
        Err(_) => false,
    }
}
