use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, info};

use super::error::GrammarError;
use super::{GrammarChecker, GrammarIssue};

/// Client for a LanguageTool server (`POST {base}/v2/check`).
///
/// Requests carry no timeout; callers needing cancellation wrap the call.
pub struct LanguageToolChecker {
    client: Client,
    endpoint: String,
    language: String,
}

impl std::fmt::Debug for LanguageToolChecker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageToolChecker")
            .field("endpoint", &self.endpoint)
            .field("language", &self.language)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CheckResponse {
    #[serde(default)]
    matches: Vec<CheckMatch>,
}

#[derive(Debug, Deserialize)]
struct CheckMatch {
    #[serde(default)]
    message: String,
    #[serde(default)]
    offset: usize,
    #[serde(default)]
    length: usize,
    #[serde(default)]
    rule: Option<CheckRule>,
}

#[derive(Debug, Deserialize)]
struct CheckRule {
    #[serde(default)]
    id: String,
}

impl CheckResponse {
    pub(crate) fn into_issues(self) -> Vec<GrammarIssue> {
        self.matches
            .into_iter()
            .map(|m| GrammarIssue {
                rule_id: m.rule.map(|r| r.id).unwrap_or_default(),
                message: m.message,
                offset: m.offset,
                length: m.length,
            })
            .collect()
    }
}

impl LanguageToolChecker {
    pub fn new(base_url: &str, language: &str) -> Result<Self, GrammarError> {
        let base = base_url.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(GrammarError::InvalidConfig {
                reason: "LanguageTool URL cannot be empty".to_string(),
            });
        }
        if language.trim().is_empty() {
            return Err(GrammarError::InvalidConfig {
                reason: "language cannot be empty".to_string(),
            });
        }

        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| GrammarError::InvalidConfig {
                reason: format!("failed to build HTTP client: {}", e),
            })?;

        let endpoint = format!("{}/v2/check", base);
        info!(endpoint = %endpoint, language, "Using LanguageTool grammar backend");

        Ok(Self {
            client,
            endpoint,
            language: language.trim().to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

impl GrammarChecker for LanguageToolChecker {
    fn check(&self, text: &str) -> Result<Vec<GrammarIssue>, GrammarError> {
        let response: CheckResponse = self
            .client
            .post(&self.endpoint)
            .form(&[("text", text), ("language", self.language.as_str())])
            .send()?
            .error_for_status()?
            .json()?;

        let issues = response.into_issues();
        debug!(
            text_len = text.len(),
            issues = issues.len(),
            "LanguageTool check complete"
        );
        Ok(issues)
    }
}
