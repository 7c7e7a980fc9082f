//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `TITLE_REWARD_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

use crate::constants::DEFAULT_LANGUAGE;
use crate::embedding::SentenceConfig;
use crate::grammar::GrammarConfig;
use crate::scoring::WeightProfile;

/// Reward engine configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `TITLE_REWARD_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Sentence encoder directory (BERT + tokenizer). `None` runs the stub embedder.
    pub embedding_model_path: Option<PathBuf>,

    /// LanguageTool server base URL. `None` uses the built-in grammar rules.
    pub languagetool_url: Option<String>,

    /// LanguageTool language code. Default: `en-US`.
    pub language: String,

    /// Criterion weights. Default: `0.25 / 0.15 / 0.20 / 0.25 / 0.15`.
    pub weights: WeightProfile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            embedding_model_path: None,
            languagetool_url: None,
            language: DEFAULT_LANGUAGE.to_string(),
            weights: WeightProfile::default(),
        }
    }
}

impl Config {
    const ENV_EMBEDDING_MODEL_PATH: &'static str = SentenceConfig::ENV_MODEL_PATH;
    const ENV_LANGUAGETOOL_URL: &'static str = GrammarConfig::ENV_LANGUAGETOOL_URL;
    const ENV_LANGUAGE: &'static str = GrammarConfig::ENV_LANGUAGE;
    const ENV_WEIGHTS: &'static str = "TITLE_REWARD_WEIGHTS";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let embedding_model_path =
            Self::parse_optional_string_from_env(Self::ENV_EMBEDDING_MODEL_PATH)
                .map(PathBuf::from);
        let languagetool_url = Self::parse_optional_string_from_env(Self::ENV_LANGUAGETOOL_URL);
        let language = Self::parse_optional_string_from_env(Self::ENV_LANGUAGE)
            .unwrap_or(defaults.language);
        let weights = Self::parse_weights_from_env(defaults.weights)?;

        Ok(Self {
            embedding_model_path,
            languagetool_url,
            language,
            weights,
        })
    }

    /// Validates paths (does not load any model).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.embedding_model_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        Ok(())
    }

    /// Sentence embedder settings; stub mode when no model path is set.
    pub fn sentence_config(&self) -> SentenceConfig {
        match &self.embedding_model_path {
            Some(path) => SentenceConfig::new(path.clone()),
            None => SentenceConfig::stub(),
        }
    }

    pub fn grammar_config(&self) -> GrammarConfig {
        GrammarConfig {
            languagetool_url: self.languagetool_url.clone(),
            language: self.language.clone(),
        }
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_weights_from_env(default: WeightProfile) -> Result<WeightProfile, ConfigError> {
        let Some(value) = Self::parse_optional_string_from_env(Self::ENV_WEIGHTS) else {
            return Ok(default);
        };

        let map: HashMap<String, f64> =
            serde_json::from_str(&value).map_err(|e| ConfigError::InvalidWeights {
                value: value.clone(),
                reason: e.to_string(),
            })?;

        WeightProfile::from_map(&map).map_err(|e| ConfigError::InvalidWeights {
            value,
            reason: e.to_string(),
        })
    }
}
