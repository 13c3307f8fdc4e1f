//! Candidate processing API
//!
//! This module ties the pipeline together behind the cache: splitter,
//! flag stripper, modifier parser, classifier, and validation gate, in
//! that order, orchestrated by [`CandidateParser`]. It also provides the
//! source-token extraction and output formatting used by the CLI.
//!
//! The pipeline is synchronous and single-threaded: every stage is a pure
//! function of its inputs except the cache write. A parser shared across
//! threads needs external synchronization, or one parser per execution
//! context.

use std::fmt;

use serde::Serialize;

use crate::uclass::ast::{Candidate, CandidateKind, Modifier, Variant};
use crate::uclass::cache::CandidateCache;
use crate::uclass::config::{ConfigError, ParseConfig};
use crate::uclass::parser::parse_structure;
use crate::uclass::validate::{validate, DefaultEngine, RuleEngine};

/// Parser for utility class tokens.
///
/// Owns its configuration, rule engine, and memoization cache. The cache
/// key is the raw token text, so a parser never outlives its
/// configuration; build a new parser to change separator or prefix.
#[derive(Debug, Clone)]
pub struct CandidateParser<E: RuleEngine = DefaultEngine> {
    config: ParseConfig,
    engine: E,
    cache: CandidateCache,
}

impl CandidateParser<DefaultEngine> {
    /// Build a parser with the default rule engine.
    ///
    /// Fails on a configuration whose separator cannot delimit tokens;
    /// that is an unusable setup, not a bad input token.
    pub fn new(config: ParseConfig) -> Result<Self, ConfigError> {
        CandidateParser::with_engine(config, DefaultEngine)
    }
}

impl<E: RuleEngine> CandidateParser<E> {
    /// Build a parser around a caller-supplied rule engine.
    pub fn with_engine(config: ParseConfig, engine: E) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(CandidateParser {
            config,
            engine,
            cache: CandidateCache::new(),
        })
    }

    /// Parse one raw token into a candidate, or `None` when the token is
    /// not a recognizable utility. Both outcomes are memoized; a repeat
    /// lookup short-circuits the whole pipeline.
    pub fn parse(&mut self, raw: &str) -> Option<Candidate> {
        if raw.is_empty() {
            return None;
        }

        if let Some(outcome) = self.cache.lookup(raw) {
            return outcome.clone();
        }

        let outcome = self.parse_uncached(raw);
        self.cache.store(raw, outcome.clone());
        outcome
    }

    fn parse_uncached(&self, raw: &str) -> Option<Candidate> {
        let candidate = parse_structure(raw, &self.config);
        validate(candidate, &self.engine)
    }

    /// Parse every token extracted from a source text, pairing each raw
    /// token with its outcome.
    pub fn parse_source(&mut self, source: &str) -> Vec<(String, Option<Candidate>)> {
        extract_tokens(source)
            .into_iter()
            .map(|token| {
                let outcome = self.parse(token);
                (token.to_string(), outcome)
            })
            .collect()
    }

    /// Drop all memoized outcomes.
    pub fn reset_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }
}

/// Extract raw token candidates from source markup.
///
/// Tokens are runs of characters between whitespace and the markup
/// delimiters that commonly enclose class attributes. This is a coarse
/// front door: anything extracted still has to survive the parser, and a
/// non-candidate token is a normal outcome, not noise to pre-filter.
pub fn extract_tokens(source: &str) -> Vec<&str> {
    source
        .split(|c: char| c.is_whitespace() || matches!(c, '"' | '\'' | '`' | '<' | '>' | '='))
        .filter(|token| !token.is_empty())
        .collect()
}

/// Output formats for processed candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Parse a format name like "simple", "json", or "yaml".
    pub fn from_string(format: &str) -> Result<Self, ProcessError> {
        match format {
            "simple" => Ok(OutputFormat::Simple),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            _ => Err(ProcessError::InvalidFormat(format.to_string())),
        }
    }

    pub fn available() -> Vec<&'static str> {
        vec!["simple", "json", "yaml"]
    }
}

/// Errors that can occur while formatting or reading input for the CLI.
#[derive(Debug, Clone)]
pub enum ProcessError {
    InvalidFormat(String),
    Serialize(String),
    Io(String),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
            ProcessError::Io(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for ProcessError {}

#[derive(Serialize)]
struct Entry<'a> {
    raw: &'a str,
    candidate: Option<&'a Candidate>,
}

/// Format parse outcomes in the requested output format.
pub fn format_outcomes(
    outcomes: &[(String, Option<Candidate>)],
    format: &OutputFormat,
) -> Result<String, ProcessError> {
    match format {
        OutputFormat::Simple => {
            let mut result = String::new();
            for (raw, outcome) in outcomes {
                result.push_str(&simple_line(raw, outcome.as_ref()));
                result.push('\n');
            }
            Ok(result)
        }
        OutputFormat::Json => {
            let entries: Vec<Entry> = outcomes
                .iter()
                .map(|(raw, outcome)| Entry {
                    raw,
                    candidate: outcome.as_ref(),
                })
                .collect();
            serde_json::to_string_pretty(&entries)
                .map_err(|e| ProcessError::Serialize(e.to_string()))
        }
        OutputFormat::Yaml => {
            let entries: Vec<Entry> = outcomes
                .iter()
                .map(|(raw, outcome)| Entry {
                    raw,
                    candidate: outcome.as_ref(),
                })
                .collect();
            serde_yaml::to_string(&entries).map_err(|e| ProcessError::Serialize(e.to_string()))
        }
    }
}

/// One tag-style line per token, in the spirit of token stream dumps.
fn simple_line(raw: &str, outcome: Option<&Candidate>) -> String {
    let candidate = match outcome {
        Some(candidate) => candidate,
        None => return format!("<none:{}>", raw),
    };

    let mut line = String::new();
    for variant in &candidate.variants {
        match variant {
            Variant::Named(name) => line.push_str(&format!("<variant:{}>", name)),
            Variant::Arbitrary(text) => line.push_str(&format!("<variant:[{}]>", text)),
        }
    }
    if candidate.important {
        line.push_str("<important>");
    }
    if candidate.negative {
        line.push_str("<negative>");
    }
    match &candidate.kind {
        CandidateKind::Utility { name } => line.push_str(&format!("<utility:{}>", name)),
        CandidateKind::Property { name, value } => {
            line.push_str(&format!("<property:{}={}>", name, value))
        }
        CandidateKind::Custom {
            name,
            value,
            value_type,
        } => line.push_str(&format!("<custom:{}={} type={}>", name, value, value_type)),
    }
    for modifier in &candidate.modifiers {
        match modifier {
            Modifier::Named(name) => line.push_str(&format!("<modifier:{}>", name)),
            Modifier::Arbitrary(text) => line.push_str(&format!("<modifier:[{}]>", text)),
        }
    }
    line
}
