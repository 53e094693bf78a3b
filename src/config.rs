use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::corpus::{
    CorpusMarkers, CorpusParser, DEFAULT_BODY_CLOSE, DEFAULT_BODY_MARKER, DEFAULT_SUBJECT_CLOSE,
    DEFAULT_SUBJECT_MARKER,
};
use crate::error::{Result, SpamFilterError};
use crate::report::ReportFormat;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    #[serde(default = "default_subject_marker")]
    pub subject_marker: String,
    #[serde(default = "default_body_marker")]
    pub body_marker: String,
    #[serde(default = "default_subject_close")]
    pub subject_close: String,
    #[serde(default = "default_body_close")]
    pub body_close: String,
    #[serde(default = "default_strip_closing_markers")]
    pub strip_closing_markers: bool,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            subject_marker: default_subject_marker(),
            body_marker: default_body_marker(),
            subject_close: default_subject_close(),
            body_close: default_body_close(),
            strip_closing_markers: default_strip_closing_markers(),
        }
    }
}

impl CorpusConfig {
    pub fn markers(&self) -> CorpusMarkers {
        CorpusMarkers {
            subject: self.subject_marker.clone(),
            body: self.body_marker.clone(),
            subject_close: self.subject_close.clone(),
            body_close: self.body_close.clone(),
        }
    }

    /// Build the parser described by this section
    pub fn parser(&self) -> Result<CorpusParser> {
        CorpusParser::new(&self.markers(), self.strip_closing_markers)
    }
}

/// Corpus file locations; anything left unset is asked for at run time
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PathsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub train_spam: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub train_ham: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_spam: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_ham: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: ReportFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_path: Option<PathBuf>,
}

fn default_subject_marker() -> String {
    DEFAULT_SUBJECT_MARKER.to_string()
}

fn default_body_marker() -> String {
    DEFAULT_BODY_MARKER.to_string()
}

fn default_subject_close() -> String {
    DEFAULT_SUBJECT_CLOSE.to_string()
}

fn default_body_close() -> String {
    DEFAULT_BODY_CLOSE.to_string()
}

fn default_strip_closing_markers() -> bool {
    true
}

impl Config {
    pub async fn load(path: &Path) -> Result<Self> {
        // If file doesn't exist, return default config with warning
        if !path.exists() {
            tracing::warn!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| SpamFilterError::ConfigError(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            SpamFilterError::ConfigError(format!("Failed to parse config file: {}", e))
        })?;

        config.validate()?;

        tracing::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    pub async fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    SpamFilterError::ConfigError(format!(
                        "Failed to create config directory: {}",
                        e
                    ))
                })?;
            }
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            SpamFilterError::ConfigError(format!("Failed to serialize config: {}", e))
        })?;

        tokio::fs::write(path, content)
            .await
            .map_err(|e| SpamFilterError::ConfigError(format!("Failed to write config file: {}", e)))?;

        tracing::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let corpus = &self.corpus;

        if corpus.subject_marker.is_empty() {
            return Err(SpamFilterError::ConfigError(
                "corpus.subject_marker cannot be empty".to_string(),
            ));
        }
        if corpus.body_marker.is_empty() {
            return Err(SpamFilterError::ConfigError(
                "corpus.body_marker cannot be empty".to_string(),
            ));
        }
        if corpus.subject_marker == corpus.body_marker {
            return Err(SpamFilterError::ConfigError(format!(
                "corpus.subject_marker and corpus.body_marker must differ (both are '{}')",
                corpus.subject_marker
            )));
        }
        if corpus.strip_closing_markers
            && (corpus.subject_close.is_empty() || corpus.body_close.is_empty())
        {
            return Err(SpamFilterError::ConfigError(
                "corpus.subject_close and corpus.body_close cannot be empty while strip_closing_markers is enabled".to_string(),
            ));
        }

        for (name, path) in [
            ("train_spam", &self.paths.train_spam),
            ("train_ham", &self.paths.train_ham),
            ("test_spam", &self.paths.test_spam),
            ("test_ham", &self.paths.test_ham),
        ] {
            if matches!(path, Some(p) if p.as_os_str().is_empty()) {
                return Err(SpamFilterError::ConfigError(format!(
                    "paths.{} cannot be an empty path",
                    name
                )));
            }
        }

        tracing::debug!("Configuration validation passed");
        Ok(())
    }

    /// Create an example configuration file
    pub async fn create_example(path: &Path) -> Result<()> {
        let config = Self::default();
        config.save(path).await
    }
}
