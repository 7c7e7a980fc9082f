//! Mock grammar checker for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::{GrammarChecker, GrammarError, GrammarIssue};

/// Reports a fixed number of issues for every text, or fails.
#[derive(Debug, Default)]
pub struct MockGrammarChecker {
    issues: usize,
    fail: bool,
    calls: AtomicUsize,
}

impl MockGrammarChecker {
    pub fn with_issues(issues: usize) -> Self {
        Self {
            issues,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl GrammarChecker for MockGrammarChecker {
    fn check(&self, _text: &str) -> Result<Vec<GrammarIssue>, GrammarError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(GrammarError::RequestFailed {
                reason: "mock grammar backend unavailable".to_string(),
            });
        }

        Ok((0..self.issues)
            .map(|i| GrammarIssue::new("MOCK_RULE", format!("mock issue {i}"), i, 1))
            .collect())
    }
}
