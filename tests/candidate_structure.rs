//! Structural parsing cases for the candidate pipeline
//!
//! Covers the observable contract of the parser end to end: variant
//! order, flag extraction, modifier forms, the three candidate kinds,
//! and the uniform "no candidate" outcome for rejected tokens.

use rstest::rstest;

use uclass::uclass::{Candidate, CandidateParser, CandidateKind, Modifier, ParseConfig, Variant};

fn parse(raw: &str) -> Option<Candidate> {
    let mut parser = CandidateParser::new(ParseConfig::default()).unwrap();
    parser.parse(raw)
}

#[test]
fn chained_variants_keep_source_order() {
    let candidate = parse("hover:focus:text-red-500").unwrap();
    assert_eq!(
        candidate.variants,
        vec![
            Variant::Named("hover".to_string()),
            Variant::Named("focus".to_string()),
        ]
    );
    assert_eq!(
        candidate.kind,
        CandidateKind::Utility {
            name: "text-red-500".to_string()
        }
    );
}

#[test]
fn negative_utility() {
    let candidate = parse("-mt-4").unwrap();
    assert!(candidate.negative);
    assert!(!candidate.important);
    assert_eq!(
        candidate.kind,
        CandidateKind::Utility {
            name: "mt-4".to_string()
        }
    );
}

#[test]
fn important_utility() {
    let candidate = parse("!text-red-500").unwrap();
    assert!(candidate.important);
    assert!(!candidate.negative);
    assert_eq!(candidate.name(), "text-red-500");
}

#[test]
fn arbitrary_property() {
    let candidate = parse("[background-color:red]").unwrap();
    assert_eq!(
        candidate.kind,
        CandidateKind::Property {
            name: "background-color".to_string(),
            value: "red".to_string(),
        }
    );
}

#[test]
fn arbitrary_value_without_tag() {
    let candidate = parse("bg-[#bada55]").unwrap();
    assert_eq!(
        candidate.kind,
        CandidateKind::Custom {
            name: "bg".to_string(),
            value: "#bada55".to_string(),
            value_type: "any".to_string(),
        }
    );
}

#[test]
fn arbitrary_value_with_tag() {
    let candidate = parse("bg-[length:200px]").unwrap();
    assert_eq!(
        candidate.kind,
        CandidateKind::Custom {
            name: "bg".to_string(),
            value: "200px".to_string(),
            value_type: "length".to_string(),
        }
    );
}

#[rstest]
#[case("text-red-500/50", Modifier::Named("50".to_string()))]
#[case("text-red-500/[0.5]", Modifier::Arbitrary("0.5".to_string()))]
fn trailing_modifiers(#[case] raw: &str, #[case] expected: Modifier) {
    let candidate = parse(raw).unwrap();
    assert_eq!(candidate.modifiers, vec![expected]);
    assert_eq!(candidate.name(), "text-red-500");
}

#[test]
fn no_modifier_leaves_sequence_empty() {
    let candidate = parse("text-red-500").unwrap();
    assert!(candidate.modifiers.is_empty());
}

#[rstest]
#[case("[src:https://example.com]")] // URI-like declaration
#[case("[9color:red]")] // invalid property name
#[case("bg-[var(--x]")] // unbalanced arbitrary value
#[case("bg-[red;blue]")] // declaration injection
fn rejected_tokens_yield_no_candidate(#[case] raw: &str) {
    assert_eq!(parse(raw), None);
}

#[test]
fn underscores_normalize_to_spaces_in_values() {
    let candidate = parse("grid-cols-[1fr_2fr]").unwrap();
    assert_eq!(candidate.value(), Some("1fr 2fr"));
}

#[test]
fn utility_names_are_never_normalized() {
    let candidate = parse("snake_case_utility").unwrap();
    assert_eq!(candidate.name(), "snake_case_utility");
}

#[test]
fn custom_separator() {
    let mut parser = CandidateParser::new(ParseConfig::new("__", "")).unwrap();
    let candidate = parser.parse("hover__focus__text-red-500").unwrap();
    assert_eq!(
        candidate.variants,
        vec![
            Variant::Named("hover".to_string()),
            Variant::Named("focus".to_string()),
        ]
    );
    assert_eq!(candidate.name(), "text-red-500");
}

#[test]
fn arbitrary_variant_preserves_literal() {
    let candidate = parse("[&:nth-child(3)]:underline").unwrap();
    assert_eq!(
        candidate.variants,
        vec![Variant::Arbitrary("&:nth-child(3)".to_string())]
    );
    assert_eq!(candidate.name(), "underline");
}

#[test]
fn full_stack_token() {
    let candidate = parse("sm:hover:!-inset-x-4/[50%]").unwrap();
    assert_eq!(
        candidate.variants,
        vec![
            Variant::Named("sm".to_string()),
            Variant::Named("hover".to_string()),
        ]
    );
    assert!(candidate.important);
    assert!(candidate.negative);
    assert_eq!(
        candidate.modifiers,
        vec![Modifier::Arbitrary("50%".to_string())]
    );
    assert_eq!(candidate.name(), "inset-x-4");
    assert_eq!(candidate.raw, "sm:hover:!-inset-x-4/[50%]");
}

#[test]
fn prefix_is_recorded_on_every_candidate() {
    let mut parser = CandidateParser::new(ParseConfig::new(":", "tw-")).unwrap();
    let candidate = parser.parse("tw-mt-4").unwrap();
    assert_eq!(candidate.prefix, "tw-");
    // The prefix stays in the utility name; parsing outcomes do not
    // depend on it.
    assert_eq!(candidate.name(), "tw-mt-4");
}

#[test]
fn purity_same_token_twice_is_structurally_identical() {
    let mut parser = CandidateParser::new(ParseConfig::default()).unwrap();
    let first = parser.parse("hover:bg-[#bada55]/50");
    let second = parser.parse("hover:bg-[#bada55]/50");
    assert_eq!(first, second);
    assert!(first.is_some());
}
