//! Grammar checking for the fluency scorer.
//!
//! Two backends implement [`GrammarChecker`]:
//! - [`LanguageToolChecker`] talks to a LanguageTool server over HTTP.
//! - [`RuleChecker`] runs a small offline rule set; used when no server is configured.
//!
//! Build the configured backend once with [`build_checker`] and share it.

pub mod config;
pub mod error;
pub mod languagetool;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod rules;

#[cfg(test)]
mod tests;

pub use config::GrammarConfig;
pub use error::GrammarError;
pub use languagetool::LanguageToolChecker;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockGrammarChecker;
pub use rules::RuleChecker;

use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

/// One flagged problem in a checked text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrammarIssue {
    pub rule_id: String,
    pub message: String,
    /// Offset of the flagged span, as reported by the backend.
    pub offset: usize,
    pub length: usize,
}

impl GrammarIssue {
    pub fn new(rule_id: &str, message: String, offset: usize, length: usize) -> Self {
        Self {
            rule_id: rule_id.to_string(),
            message,
            offset,
            length,
        }
    }
}

/// Flags grammar and spelling problems in a text.
///
/// Implementations are shared across scoring calls and must not mutate
/// state observable through `check`.
pub trait GrammarChecker: Send + Sync {
    fn check(&self, text: &str) -> Result<Vec<GrammarIssue>, GrammarError>;
}

impl<T: GrammarChecker + ?Sized> GrammarChecker for Arc<T> {
    fn check(&self, text: &str) -> Result<Vec<GrammarIssue>, GrammarError> {
        (**self).check(text)
    }
}

/// Builds the backend selected by `config`.
pub fn build_checker(config: &GrammarConfig) -> Result<Arc<dyn GrammarChecker>, GrammarError> {
    match &config.languagetool_url {
        Some(url) => Ok(Arc::new(LanguageToolChecker::new(url, &config.language)?)),
        None => {
            warn!("No LanguageTool URL configured, using built-in grammar rules");
            Ok(Arc::new(RuleChecker::new()))
        }
    }
}
