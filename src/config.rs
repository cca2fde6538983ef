//! Configuration management for the resume matcher

use crate::error::{Result, ResumeMatcherError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Multi-word phrases recognised as single keywords when no configuration overrides them.
pub const DEFAULT_KNOWN_PHRASES: [&str; 7] = [
    "machine learning",
    "deep learning",
    "data analysis",
    "project management",
    "natural language processing",
    "sql server",
    "visual studio",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub keywords: KeywordConfig,
    #[serde(default)]
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordConfig {
    pub known_phrases: Vec<String>,
    /// Single tokens must be strictly longer than this to become keywords.
    pub min_token_length: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Keep extracted document text in memory, keyed by path.
    pub cache_extracted_text: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub include_tips: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            known_phrases: DEFAULT_KNOWN_PHRASES.iter().map(|p| p.to_string()).collect(),
            min_token_length: 2,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            cache_extracted_text: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            include_tips: true,
            color_output: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keywords: KeywordConfig::default(),
            input: InputConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load from the default location, writing the defaults out on first use.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| ResumeMatcherError::Configuration(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeMatcherError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-matcher")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.keywords.known_phrases.len(), 7);
        assert!(config.keywords.known_phrases.contains(&"sql server".to_string()));
        assert_eq!(config.keywords.min_token_length, 2);
        assert_eq!(config.output.format, OutputFormat::Console);
    }

    #[test]
    fn test_load_writes_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.keywords.known_phrases.len(), 7);
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.keywords.known_phrases = vec!["rust async".to_string()];
        config.keywords.min_token_length = 3;
        config.output.format = OutputFormat::Json;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.keywords.known_phrases, vec!["rust async".to_string()]);
        assert_eq!(loaded.keywords.min_token_length, 3);
        assert_eq!(loaded.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_output_format_written_lowercase() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.output.format = OutputFormat::Markdown;
        config.save_to(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("format = \"markdown\""));
    }

    #[test]
    fn test_hand_written_config_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[keywords]
known_phrases = ["SQL Server"]
min_token_length = 2

[output]
format = "json"
detailed = false
include_tips = true
color_output = false
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        // A missing [input] table falls back to its defaults.
        assert!(config.input.cache_extracted_text);
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "keywords = 12").unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(ResumeMatcherError::Configuration(_))));
    }
}
