//! Memoization behavior of the candidate parser
//!
//! Outcomes, including negative ones, are computed once per raw token.
//! The counting engine makes collaborator invocations observable, so
//! these tests pin that a cache hit short-circuits the whole pipeline.

use uclass::uclass::testing::CountingEngine;
use uclass::uclass::{CandidateParser, ParseConfig};

fn parser() -> CandidateParser<CountingEngine> {
    CandidateParser::with_engine(ParseConfig::default(), CountingEngine::new()).unwrap()
}

#[test]
fn positive_outcomes_are_computed_once() {
    let mut parser = parser();

    let first = parser.parse("bg-[#bada55]");
    assert!(first.is_some());
    assert_eq!(parser.engine().arbitrary_value_calls.get(), 1);
    assert_eq!(parser.engine().normalize_calls.get(), 1);

    let second = parser.parse("bg-[#bada55]");
    assert_eq!(first, second);
    // Cache hit: no further collaborator calls.
    assert_eq!(parser.engine().arbitrary_value_calls.get(), 1);
    assert_eq!(parser.engine().normalize_calls.get(), 1);
}

#[test]
fn negative_outcomes_are_cached_too() {
    let mut parser = parser();

    // Unbalanced arbitrary value: rejected by the engine.
    assert_eq!(parser.parse("bg-[var(--x]"), None);
    let calls_after_first = parser.engine().total_calls();
    assert!(calls_after_first > 0);

    assert_eq!(parser.parse("bg-[var(--x]"), None);
    assert_eq!(parser.engine().total_calls(), calls_after_first);
    assert_eq!(parser.cache_len(), 1);
}

#[test]
fn utility_tokens_never_touch_the_engine() {
    let mut parser = parser();
    assert!(parser.parse("hover:text-red-500").is_some());
    assert_eq!(parser.engine().total_calls(), 0);
}

#[test]
fn reset_cache_recomputes() {
    let mut parser = parser();

    parser.parse("bg-[#bada55]");
    assert_eq!(parser.cache_len(), 1);

    parser.reset_cache();
    assert_eq!(parser.cache_len(), 0);

    parser.parse("bg-[#bada55]");
    assert_eq!(parser.engine().arbitrary_value_calls.get(), 2);
}

#[test]
fn distinct_tokens_get_distinct_entries() {
    let mut parser = parser();
    parser.parse("mt-4");
    parser.parse("-mt-4");
    parser.parse("!mt-4");
    assert_eq!(parser.cache_len(), 3);
}

#[test]
fn empty_token_is_not_cached() {
    let mut parser = parser();
    assert_eq!(parser.parse(""), None);
    assert_eq!(parser.cache_len(), 0);
    assert_eq!(parser.engine().total_calls(), 0);
}
