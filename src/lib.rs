//! # uclass
//!
//! A parser for utility class tokens.
//!
//! Given a single raw token taken from source markup (`hover:bg-[#bada55]/50`)
//! and a small configuration (a variant separator and an optional name
//! prefix), uclass produces a canonical structured [Candidate](uclass::Candidate)
//! describing what that token means, or determines that the token is not
//! a recognizable utility at all.
//!
//! ```text
//! use uclass::uclass::{CandidateParser, ParseConfig};
//!
//! let mut parser = CandidateParser::new(ParseConfig::default())?;
//! let candidate = parser.parse("hover:focus:text-red-500");
//! ```
//!
//! The candidate is the sole input to a downstream CSS-rule-generation
//! engine, consumed through the [RuleEngine](uclass::RuleEngine) trait.

pub mod uclass;
