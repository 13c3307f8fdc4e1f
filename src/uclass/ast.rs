//! Candidate data model for the uclass format
//!
//! This module defines the structured result of parsing one raw utility
//! token. A candidate carries the attributes shared by every token kind
//! (raw text, flags, variants, modifiers) plus a tagged kind with the
//! per-kind payload, so downstream consumers get exhaustive matching
//! instead of runtime tag checks.

use serde::{Deserialize, Serialize};

/// Data-type tags the downstream rule engine understands for arbitrary
/// values. The classifier records tags verbatim; this set exists so that
/// downstream stages can validate the tag if they need to.
pub const DATA_TYPES: &[&str] = &[
    "any",
    "color",
    "length",
    "percentage",
    "number",
    "line-width",
    "image",
    "url",
    "position",
    "shadow",
    "absolute-size",
    "relative-size",
    "generic-name",
    "family-name",
];

/// Check whether a data-type tag belongs to the known set.
pub fn is_known_data_type(tag: &str) -> bool {
    DATA_TYPES.contains(&tag)
}

/// The structured result of parsing one raw utility token.
///
/// `raw` is never empty. `variants` preserves the left-to-right order of
/// the separator-delimited segments in the original token. `modifiers`
/// holds at most one entry in the current design, but is modeled as a
/// sequence for forward compatibility with stacked modifiers.
///
/// The configured `prefix` is recorded on every candidate but is not
/// stripped from the token text; a non-empty prefix has no effect on
/// parsing outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub raw: String,
    pub prefix: String,
    pub negative: bool,
    pub important: bool,
    pub variants: Vec<Variant>,
    pub modifiers: Vec<Modifier>,
    #[serde(flatten)]
    pub kind: CandidateKind,
}

/// The three mutually exclusive kinds of candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CandidateKind {
    /// A plain named utility, e.g. `text-red-500`. Never carries a value.
    Utility { name: String },
    /// An arbitrary property declaration, e.g. `[background-color:red]`.
    Property { name: String, value: String },
    /// A named utility with an arbitrary value, e.g. `bg-[#bada55]`.
    /// `value_type` is the embedded data-type tag, or `"any"` when the
    /// bracket interior carries no tag.
    Custom {
        name: String,
        value: String,
        value_type: String,
    },
}

/// A condition/selector segment chained before the base utility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Variant {
    /// A plain variant name, resolved downstream (e.g. `hover`).
    Named(String),
    /// A bracketed literal selector/condition, stored unwrapped.
    Arbitrary(String),
}

/// A trailing value attached after `/`, adjusting the base utility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Modifier {
    Named(String),
    /// A bracketed literal, stored unwrapped.
    Arbitrary(String),
}

impl Candidate {
    /// The utility/property name of this candidate, whatever its kind.
    pub fn name(&self) -> &str {
        match &self.kind {
            CandidateKind::Utility { name } => name,
            CandidateKind::Property { name, .. } => name,
            CandidateKind::Custom { name, .. } => name,
        }
    }

    /// The value payload, if the kind carries one.
    pub fn value(&self) -> Option<&str> {
        match &self.kind {
            CandidateKind::Utility { .. } => None,
            CandidateKind::Property { value, .. } => Some(value),
            CandidateKind::Custom { value, .. } => Some(value),
        }
    }

    /// The data-type tag, present only on custom candidates.
    pub fn value_type(&self) -> Option<&str> {
        match &self.kind {
            CandidateKind::Custom { value_type, .. } => Some(value_type),
            _ => None,
        }
    }

    pub fn is_utility(&self) -> bool {
        matches!(self.kind, CandidateKind::Utility { .. })
    }

    pub fn is_property(&self) -> bool {
        matches!(self.kind, CandidateKind::Property { .. })
    }

    pub fn is_custom(&self) -> bool {
        matches!(self.kind, CandidateKind::Custom { .. })
    }
}
