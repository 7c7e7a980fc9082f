use crate::constants::DEFAULT_LANGUAGE;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Selects and configures the grammar backend.
pub struct GrammarConfig {
    /// LanguageTool server base URL. `None` selects the built-in rule checker.
    pub languagetool_url: Option<String>,
    /// LanguageTool language code.
    pub language: String,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            languagetool_url: None,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl GrammarConfig {
    pub const ENV_LANGUAGETOOL_URL: &'static str = "TITLE_REWARD_LANGUAGETOOL_URL";
    pub const ENV_LANGUAGE: &'static str = "TITLE_REWARD_LANGUAGE";

    pub fn from_env() -> Self {
        let languagetool_url = std::env::var(Self::ENV_LANGUAGETOOL_URL)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let language = std::env::var(Self::ENV_LANGUAGE)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        Self {
            languagetool_url,
            language,
        }
    }

    pub fn languagetool<S: Into<String>>(url: S) -> Self {
        Self {
            languagetool_url: Some(url.into()),
            ..Default::default()
        }
    }

    pub fn with_language<S: Into<String>>(mut self, language: S) -> Self {
        self.language = language.into();
        self
    }
}
