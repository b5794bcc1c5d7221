/// Configuration types for the editor core.
///
/// This module defines the options that tune the document store and the
/// playback controller, and a bundle that can be loaded from YAML or JSON.
use crate::common::{Error, IdStrategy, Result};
use crate::presentation::Theme;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Options for the [`DocumentStore`](crate::presentation::DocumentStore).
///
/// # Examples
///
/// ```rust
/// use slidedeck::common::IdStrategy;
/// use slidedeck::config::StoreOptions;
///
/// let options = StoreOptions::new()
///     .with_history_limit(20)
///     .with_id_strategy(IdStrategy::Sequential);
/// assert_eq!(options.history_limit, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreOptions {
    /// Maximum number of undo steps kept for the current presentation
    pub history_limit: usize,
    /// How identifiers are minted
    pub id_strategy: IdStrategy,
    /// Theme given to newly created presentations
    pub default_theme: Theme,
    /// Title of slides added after the first one
    pub new_slide_title: String,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            history_limit: 100,
            id_strategy: IdStrategy::Random,
            default_theme: Theme::default(),
            new_slide_title: "New Slide".to_string(),
        }
    }
}

impl StoreOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of undo steps kept. `0` turns history off.
    #[inline]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    #[inline]
    pub fn with_id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.id_strategy = strategy;
        self
    }

    #[inline]
    pub fn with_default_theme(mut self, theme: Theme) -> Self {
        self.default_theme = theme;
        self
    }

    #[inline]
    pub fn with_new_slide_title(mut self, title: impl Into<String>) -> Self {
        self.new_slide_title = title.into();
        self
    }
}

/// Options for the playback controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackOptions {
    /// Length of the slide transition in milliseconds
    pub transition_ms: u64,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self { transition_ms: 300 }
    }
}

impl PlaybackOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_transition(mut self, duration: Duration) -> Self {
        self.transition_ms = duration.as_millis().min(u64::MAX as u128) as u64;
        self
    }

    /// The transition length as a [`Duration`].
    #[inline]
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

/// All editor core options, loadable from a config file.
///
/// Missing sections and fields take their defaults.
///
/// # Examples
///
/// ```rust
/// use slidedeck::config::EditorConfig;
///
/// let config = EditorConfig::from_yaml_str("playback:\n  transition_ms: 150\n").unwrap();
/// assert_eq!(config.playback.transition_ms, 150);
/// assert_eq!(config.store.history_limit, 100);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub store: StoreOptions,
    pub playback: PlaybackOptions,
}

impl EditorConfig {
    /// Parse a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_saphyr::from_str(yaml).map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    /// Parse a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self).map_err(|e| Error::Yaml(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.store.history_limit, 100);
        assert_eq!(config.store.id_strategy, IdStrategy::Random);
        assert_eq!(config.playback.transition(), Duration::from_millis(300));
    }

    #[test]
    fn test_partial_json() {
        let config = EditorConfig::from_json_str(
            r##"{"store":{"id_strategy":"sequential","default_theme":{"primaryColor":"#000000","secondaryColor":"#111111","fontFamily":"Serif","darkMode":true}}}"##,
        )
        .unwrap();
        assert_eq!(config.store.id_strategy, IdStrategy::Sequential);
        assert!(config.store.default_theme.dark_mode);
        assert_eq!(config.store.new_slide_title, "New Slide");
        assert_eq!(config.playback, PlaybackOptions::default());
    }

    #[test]
    fn test_invalid_config() {
        let err = EditorConfig::from_json_str(r#"{"playback":{"transition_ms":"slow"}}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(EditorConfig::from_yaml_str("").unwrap(), EditorConfig::default());
    }

    #[test]
    fn test_builder() {
        let playback = PlaybackOptions::new().with_transition(Duration::from_millis(120));
        assert_eq!(playback.transition_ms, 120);
        let store = StoreOptions::new().with_new_slide_title("Untitled");
        assert_eq!(store.new_slide_title, "Untitled");
    }
}
