//! Test support utilities
//!
//! Helpers shared by unit and integration tests. The counting engine
//! wraps the default rule engine and records how often each collaborator
//! entry point runs, which is how tests observe that cached outcomes
//! never re-invoke validation.

use std::cell::Cell;

use crate::uclass::validate::{DefaultEngine, RuleEngine};

/// A rule engine that counts collaborator invocations.
#[derive(Debug, Default)]
pub struct CountingEngine {
    inner: DefaultEngine,
    pub arbitrary_value_calls: Cell<usize>,
    pub parsable_calls: Cell<usize>,
    pub normalize_calls: Cell<usize>,
}

impl CountingEngine {
    pub fn new() -> Self {
        CountingEngine::default()
    }

    /// Total collaborator invocations across all entry points.
    pub fn total_calls(&self) -> usize {
        self.arbitrary_value_calls.get() + self.parsable_calls.get() + self.normalize_calls.get()
    }
}

impl RuleEngine for CountingEngine {
    fn is_valid_arbitrary_value(&self, value: &str) -> bool {
        self.arbitrary_value_calls
            .set(self.arbitrary_value_calls.get() + 1);
        self.inner.is_valid_arbitrary_value(value)
    }

    fn is_parsable_css_value(&self, name: &str, value: &str) -> bool {
        self.parsable_calls.set(self.parsable_calls.get() + 1);
        self.inner.is_parsable_css_value(name, value)
    }

    fn normalize(&self, value: &str) -> String {
        self.normalize_calls.set(self.normalize_calls.get() + 1);
        self.inner.normalize(value)
    }
}
