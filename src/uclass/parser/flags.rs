//! Important / negative flag stripping
//!
//! Flags stack in a fixed order at the front of the base segment:
//! `!` (important) first, then `-` (negative), then the position where a
//! configured prefix would sit, then a second possible `-` (negative for
//! prefixed utilities). The prefix itself is recorded elsewhere and never
//! stripped here, so the post-prefix check runs at the same position as
//! the pre-prefix one and is idempotent with it.

/// Boolean flags stripped from the front of a base segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    pub important: bool,
    pub negative: bool,
}

/// Strip leading flag characters and return the remaining text.
pub fn strip_flags(base: &str) -> (&str, Flags) {
    let mut rest = base;
    let mut flags = Flags::default();

    if let Some(stripped) = rest.strip_prefix('!') {
        flags.important = true;
        rest = stripped;
    }

    // Negative before the prefix position
    if let Some(stripped) = rest.strip_prefix('-') {
        flags.negative = true;
        rest = stripped;
    }

    // Negative after the prefix position
    if let Some(stripped) = rest.strip_prefix('-') {
        flags.negative = true;
        rest = stripped;
    }

    (rest, flags)
}
