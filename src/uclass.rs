//! Main module for the uclass library functionality

pub mod ast;
pub mod cache;
pub mod config;
pub mod lexer;
pub mod parser;
pub mod processor;
pub mod testing;
pub mod validate;

pub use ast::{is_known_data_type, Candidate, CandidateKind, Modifier, Variant, DATA_TYPES};
pub use cache::CandidateCache;
pub use config::{ConfigError, ParseConfig};
pub use processor::{extract_tokens, format_outcomes, CandidateParser, OutputFormat, ProcessError};
pub use validate::{DefaultEngine, RuleEngine};
