use serde::{Deserialize, Serialize};

use crate::i18n::{Locale, MissingKeyPolicy};

/// Front-end configuration, embedded into the WASM bundle as `studio.toml`.
///
/// Every section is optional; missing sections and fields take the
/// defaults below, so an empty document is a valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StudioConfig {
    #[serde(default)]
    pub i18n: I18nConfig,
    #[serde(default)]
    pub shell: ShellConfig,
    #[serde(default)]
    pub agent: AgentConfig,
}

impl StudioConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let cfg: StudioConfig =
            toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse `text`, falling back to defaults when it is malformed.
    pub fn from_toml_str_or_default(text: &str) -> Self {
        match Self::from_toml_str(text) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(error = %e, "invalid studio config, using defaults");
                Self::default()
            }
        }
    }

    /// Semantic validation for settings that are not fully expressible via type checks.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.i18n.validate()?;
        self.shell.validate()?;
        self.agent.validate()?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("parse: {0}")]
    Parse(String),
    #[error("validation: {0}")]
    Invalid(String),
}

// ---------------------------------------------------------------------------
// Section structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct I18nConfig {
    /// Languages offered by the language switch, in menu order.
    #[serde(default = "default_supported")]
    pub supported: Vec<Locale>,
    /// Used when detection fails and as the second link of the lookup chain.
    #[serde(default = "default_fallback")]
    pub fallback: Locale,
    /// Bundle URL template; `{{lng}}` is replaced by the language code.
    #[serde(default = "default_load_path")]
    pub load_path: String,
    #[serde(default)]
    pub missing_key: MissingKeyPolicy,
    /// Extra attempts after the first failed bundle fetch.
    #[serde(default = "default_retries")]
    pub retries: u32,
    #[serde(default = "default_fetch_timeout_ms")]
    pub fetch_timeout_ms: u32,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            supported: default_supported(),
            fallback: default_fallback(),
            load_path: default_load_path(),
            missing_key: MissingKeyPolicy::default(),
            retries: default_retries(),
            fetch_timeout_ms: default_fetch_timeout_ms(),
        }
    }
}

impl I18nConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.supported.is_empty() {
            return Err(ConfigError::Invalid(
                "i18n.supported must not be empty".to_string(),
            ));
        }
        if !self.supported.contains(&self.fallback) {
            return Err(ConfigError::Invalid(format!(
                "i18n.fallback '{}' is not in i18n.supported",
                self.fallback.code()
            )));
        }
        if !self.load_path.contains(crate::i18n::LNG_PLACEHOLDER) {
            return Err(ConfigError::Invalid(format!(
                "i18n.load_path must contain {}",
                crate::i18n::LNG_PLACEHOLDER
            )));
        }
        if self.fetch_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "i18n.fetch_timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_supported() -> Vec<Locale> {
    Locale::all().to_vec()
}
fn default_fallback() -> Locale {
    Locale::En
}
fn default_load_path() -> String {
    "/locales/{{lng}}/translation.json".into()
}
fn default_retries() -> u32 {
    1
}
fn default_fetch_timeout_ms() -> u32 {
    5_000
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShellConfig {
    #[serde(default = "default_expanded_width")]
    pub expanded_width: u32,
    #[serde(default = "default_collapsed_width")]
    pub collapsed_width: u32,
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u32,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            expanded_width: default_expanded_width(),
            collapsed_width: default_collapsed_width(),
            transition_ms: default_transition_ms(),
        }
    }
}

impl ShellConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.collapsed_width == 0 || self.collapsed_width >= self.expanded_width {
            return Err(ConfigError::Invalid(format!(
                "shell.collapsed_width ({}) must be non-zero and below shell.expanded_width ({})",
                self.collapsed_width, self.expanded_width
            )));
        }
        Ok(())
    }
}

fn default_expanded_width() -> u32 {
    240
}
fn default_collapsed_width() -> u32 {
    72
}
fn default_transition_ms() -> u32 {
    150
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentConfig {
    /// Delay before the simulated assistant reply is appended.
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u32,
    #[serde(default = "default_reply_text")]
    pub reply_text: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
            reply_text: default_reply_text(),
        }
    }
}

impl AgentConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.reply_delay_ms == 0 {
            return Err(ConfigError::Invalid(
                "agent.reply_delay_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_reply_delay_ms() -> u32 {
    1_000
}
fn default_reply_text() -> String {
    "I'm processing your request. This is a simulated response from the RAG-enabled agent."
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let cfg = StudioConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, StudioConfig::default());
        assert_eq!(cfg.shell.expanded_width, 240);
        assert_eq!(cfg.shell.collapsed_width, 72);
        assert_eq!(cfg.agent.reply_delay_ms, 1_000);
        assert_eq!(cfg.i18n.load_path, "/locales/{{lng}}/translation.json");
        assert_eq!(cfg.i18n.missing_key, MissingKeyPolicy::RawKey);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = StudioConfig::from_toml_str(
            r#"
            [i18n]
            missing_key = "empty"
            retries = 3

            [agent]
            reply_delay_ms = 250
            "#,
        )
        .unwrap();
        assert_eq!(cfg.i18n.missing_key, MissingKeyPolicy::Empty);
        assert_eq!(cfg.i18n.retries, 3);
        assert_eq!(cfg.i18n.fallback, Locale::En);
        assert_eq!(cfg.agent.reply_delay_ms, 250);
        assert_eq!(cfg.shell, ShellConfig::default());
    }

    #[test]
    fn load_path_without_placeholder_is_rejected() {
        let err = StudioConfig::from_toml_str(
            r#"
            [i18n]
            load_path = "/locales/en.json"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn fallback_must_be_supported() {
        let err = StudioConfig::from_toml_str(
            r#"
            [i18n]
            supported = ["ja"]
            fallback = "en"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("i18n.fallback"));
    }

    #[test]
    fn inverted_widths_are_rejected() {
        let err = StudioConfig::from_toml_str(
            r#"
            [shell]
            expanded_width = 60
            collapsed_width = 72
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_document_falls_back_to_defaults() {
        let cfg = StudioConfig::from_toml_str_or_default("[shell\nexpanded_width = ");
        assert_eq!(cfg, StudioConfig::default());
    }
}
