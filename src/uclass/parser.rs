//! Structural parse of a single utility token
//!
//! This module turns one raw token into an unvalidated [`Candidate`]:
//! split off the variants, strip the flag characters, peel a trailing
//! modifier, then classify what remains. Semantic acceptance (property
//! name rules, the URI guard, arbitrary value validity, normalization)
//! happens afterwards in the validation gate.

pub mod classify;
pub mod flags;
pub mod modifier;

use crate::uclass::ast::Candidate;
use crate::uclass::config::ParseConfig;
use crate::uclass::lexer::split_variants;

/// Parse the structure of a raw token. Structural parsing never fails:
/// any text is at worst a plain utility with an odd name. Rejection is
/// the validation gate's job.
pub fn parse_structure(raw: &str, config: &ParseConfig) -> Candidate {
    let (base, variants) = split_variants(raw, &config.separator);
    let (base, flag) = flags::strip_flags(base);
    let (base, modifier) = modifier::strip_modifier(base);
    let kind = classify::classify(base);

    Candidate {
        raw: raw.to_string(),
        prefix: config.prefix.clone(),
        negative: flag.negative,
        important: flag.important,
        variants,
        modifiers: modifier.into_iter().collect(),
        kind,
    }
}
