//! Engine configuration structures and loaders.
use std::path::Path;

use serde::{Deserialize, Serialize};

use menu_core::placeholder::ServerProvider;
use menu_core::{ActionDefaults, PlaceholderConfig};

use crate::api::{Result, RuntimeError};

/// Tunables for one [`crate::MenuEngine`].
///
/// Every field has a default, so a config file only needs the values it
/// changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub placeholders: PlaceholderConfig,
    pub actions: ActionDefaults,
    /// Recent tick samples averaged for `%server_tps%`.
    pub tps_sample_window: usize,
    /// Maximum nesting of `sequence` actions inside one sequence.
    pub max_sequence_depth: usize,
}

impl EngineConfig {
    pub const DEFAULT_MAX_SEQUENCE_DEPTH: usize = 16;

    pub fn new() -> Self {
        Self {
            placeholders: PlaceholderConfig::default(),
            actions: ActionDefaults::default(),
            tps_sample_window: ServerProvider::DEFAULT_WINDOW,
            max_sequence_depth: Self::DEFAULT_MAX_SEQUENCE_DEPTH,
        }
    }

    /// Parses a RON document.
    pub fn from_ron_str(content: &str) -> Result<Self> {
        let config: EngineConfig = ron::from_str(content).map_err(RuntimeError::ConfigParse)?;
        config.validate()
    }

    /// Loads a RON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| RuntimeError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&content)
    }

    /// Applies environment overrides read through `lookup`.
    ///
    /// Variables:
    /// - `MENU_PLACEHOLDER_MARKER` - single marker character (default: `%`)
    /// - `MENU_TPS_WINDOW` - tick samples averaged for TPS (default: 100)
    /// - `MENU_MAX_SEQUENCE_DEPTH` - nested sequence limit (default: 16)
    ///
    /// Unparsable values are ignored.
    pub fn apply_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(marker) = read_var::<char, _>(&lookup, "MENU_PLACEHOLDER_MARKER") {
            if !marker.is_whitespace() {
                self.placeholders.marker = marker;
            }
        }

        if let Some(window) = read_var::<usize, _>(&lookup, "MENU_TPS_WINDOW") {
            self.tps_sample_window = window.max(1);
        }

        if let Some(depth) = read_var::<usize, _>(&lookup, "MENU_MAX_SEQUENCE_DEPTH") {
            self.max_sequence_depth = depth;
        }

        self
    }

    /// Applies overrides from the process environment.
    pub fn with_process_env(self) -> Self {
        self.apply_env(|key| std::env::var(key).ok())
    }

    fn validate(self) -> Result<Self> {
        if self.placeholders.marker.is_whitespace() {
            return Err(RuntimeError::InvalidConfig(
                "placeholder marker must not be whitespace".to_string(),
            ));
        }
        if self.tps_sample_window == 0 {
            return Err(RuntimeError::InvalidConfig(
                "tps_sample_window must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn read_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_documents_keep_defaults() {
        let config = EngineConfig::from_ron_str("(max_sequence_depth: 4)").unwrap();
        assert_eq!(config.max_sequence_depth, 4);
        assert_eq!(config.tps_sample_window, 100);
        assert_eq!(config.placeholders.marker, '%');
        assert_eq!(config.actions.title_stay, 70);
    }

    #[test]
    fn nested_sections_parse() {
        let config = EngineConfig::from_ron_str(
            "(placeholders: (marker: '$'), actions: (sound_volume: 0.5, previous_menu_key: \"back_to\"))",
        )
        .unwrap();
        assert_eq!(config.placeholders.marker, '$');
        assert_eq!(config.actions.sound_volume, 0.5);
        assert_eq!(config.actions.previous_menu_key, "back_to");
        assert_eq!(config.actions.sound_pitch, 1.0);
    }

    #[test]
    fn invalid_documents_are_rejected() {
        assert!(matches!(
            EngineConfig::from_ron_str("(max_sequence_depth: \"deep\")"),
            Err(RuntimeError::ConfigParse(_))
        ));
        assert!(matches!(
            EngineConfig::from_ron_str("(tps_sample_window: 0)"),
            Err(RuntimeError::InvalidConfig(_))
        ));
    }

    #[test]
    fn environment_overrides_apply() {
        let env = |key: &str| match key {
            "MENU_PLACEHOLDER_MARKER" => Some("#".to_string()),
            "MENU_TPS_WINDOW" => Some("0".to_string()),
            "MENU_MAX_SEQUENCE_DEPTH" => Some("not a number".to_string()),
            _ => None,
        };
        let config = EngineConfig::default().apply_env(env);
        assert_eq!(config.placeholders.marker, '#');
        assert_eq!(config.tps_sample_window, 1);
        assert_eq!(config.max_sequence_depth, 16);
    }
}
