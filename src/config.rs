//! Mask configuration persistence
//!
//! Stores named templates and editing defaults in `~/.config/maskfield/config.yaml`

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::mask::{MaskedBuffer, Template, TemplateError};

/// Name of the template that is always available
pub const PHONE_TEMPLATE: &str = "phone";

/// Mask configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskConfig {
    /// Filler character for empty variable slots
    #[serde(default = "default_placeholder")]
    pub placeholder: char,

    /// Start new buffers in overtype mode
    #[serde(default)]
    pub overtype: bool,

    /// Template used when none is named
    #[serde(default = "default_template_name")]
    pub default_template: String,

    /// Named mask patterns (see [`Template::parse`])
    #[serde(default = "builtin_templates")]
    pub templates: BTreeMap<String, String>,
}

fn default_placeholder() -> char {
    ' '
}

fn default_template_name() -> String {
    PHONE_TEMPLATE.to_string()
}

fn builtin_templates() -> BTreeMap<String, String> {
    [
        (PHONE_TEMPLATE, "(###)###-####"),
        ("date", "##/##/####"),
        ("time", "##:##"),
        ("zip", "#####-####"),
    ]
    .into_iter()
    .map(|(name, pattern)| (name.to_string(), pattern.to_string()))
    .collect()
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            overtype: false,
            default_template: default_template_name(),
            templates: builtin_templates(),
        }
    }
}

/// Errors that can occur when loading or using a mask configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    UnknownTemplate(String),
    InvalidTemplate { name: String, error: TemplateError },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::UnknownTemplate(name) => write!(f, "Unknown template: {}", name),
            ConfigError::InvalidTemplate { name, error } => {
                write!(f, "Invalid template {}: {}", name, error)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl MaskConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::parse(&content)
    }

    /// Parse config from a YAML string. The phone template is always present.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: MaskConfig =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config
            .templates
            .entry(PHONE_TEMPLATE.to_string())
            .or_insert_with(|| "(###)###-####".to_string());
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| ConfigError::IoError("No config directory available".to_string()))?;
        self.save_to(&path)
    }

    /// Save config to a specific file
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| ConfigError::ParseError(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content).map_err(|e| {
            ConfigError::IoError(format!("Failed to write config to {}: {}", path.display(), e))
        })?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Build the named template (or the default one)
    pub fn template(&self, name: Option<&str>) -> Result<Template, ConfigError> {
        let name = name.unwrap_or(self.default_template.as_str());
        let pattern = self
            .templates
            .get(name)
            .ok_or_else(|| ConfigError::UnknownTemplate(name.to_string()))?;
        Template::parse(pattern, self.placeholder).map_err(|error| ConfigError::InvalidTemplate {
            name: name.to_string(),
            error,
        })
    }

    /// Create a buffer for the named template, honoring the overtype default
    pub fn buffer(&self, name: Option<&str>) -> Result<MaskedBuffer, ConfigError> {
        let template = self.template(name)?;
        Ok(self.buffer_for(Arc::new(template)))
    }

    /// Create a buffer for an already built template, honoring the overtype default
    pub fn buffer_for(&self, template: Arc<Template>) -> MaskedBuffer {
        let mut buffer = MaskedBuffer::new(template);
        if self.overtype {
            buffer.set_overtype(true);
        }
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MaskConfig::default();
        assert_eq!(config.placeholder, ' ');
        assert!(!config.overtype);
        assert_eq!(config.default_template, "phone");
        assert_eq!(config.template(None).unwrap(), Template::phone());
    }

    #[test]
    fn test_parse_partial_yaml() {
        let config = MaskConfig::parse("overtype: true\n").unwrap();
        assert!(config.overtype);
        assert_eq!(config.placeholder, ' ');
        assert!(config.templates.contains_key("date"));
    }

    #[test]
    fn test_parse_keeps_phone() {
        let config = MaskConfig::parse("templates:\n  serial: \"AAAA-AAAA\"\n").unwrap();
        assert!(config.templates.contains_key("phone"));
        assert!(config.templates.contains_key("serial"));
        assert!(!config.templates.contains_key("date"));
    }

    #[test]
    fn test_parse_error() {
        let result = MaskConfig::parse("placeholder: [1, 2]\n");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_unknown_template() {
        let config = MaskConfig::default();
        assert_eq!(
            config.template(Some("nope")),
            Err(ConfigError::UnknownTemplate("nope".to_string()))
        );
    }

    #[test]
    fn test_invalid_template() {
        let config = MaskConfig::parse("placeholder: \"0\"\n").unwrap();
        assert!(matches!(
            config.template(None),
            Err(ConfigError::InvalidTemplate { .. })
        ));
    }

    #[test]
    fn test_buffer_honors_overtype() {
        let config = MaskConfig {
            overtype: true,
            ..MaskConfig::default()
        };
        let buffer = config.buffer(Some("date")).unwrap();
        assert!(buffer.is_overtype());
        assert_eq!(buffer.content(), "  /  /    ");
        assert_eq!(buffer.selection_range(), 0..1);
    }
}
