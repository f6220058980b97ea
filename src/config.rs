//! Application Configuration
//!
//! Optional user settings stored in TOML format. A missing file means
//! defaults; a broken file is reported and also falls back to defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub site: SiteConfig,
    pub carousel: CarouselConfig,
    pub reveal: RevealConfig,
}

/// Page content settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Logo mark and window title
    pub name: String,
    /// Address behind the contact action
    pub contact_email: String,
    /// Directory the catalogue image files are resolved against
    pub art_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "My Sketchbook".to_string(),
            contact_email: "alphakouanda@gmail.com".to_string(),
            art_dir: PathBuf::from("art"),
        }
    }
}

/// Hero carousel settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Unmounting the carousel also drops its timer
    pub enabled: bool,
    /// Time between automatic advances
    pub delay_ms: u64,
    /// Cross-fade duration
    pub speed_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            delay_ms: 5000,
            speed_ms: 600,
        }
    }
}

impl CarouselConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn speed(&self) -> Duration {
        Duration::from_millis(self.speed_ms)
    }
}

/// Scroll reveal settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Visible fraction that counts as entering the viewport
    pub threshold: f32,
    pub duration_ms: u64,
    /// Starting downward offset in logical pixels
    pub offset: f32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.2,
            duration_ms: 600,
            offset: 24.0,
        }
    }
}

impl RevealConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl AppConfig {
    /// Reject values the controllers cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.carousel.delay_ms == 0 {
            return Err(ConfigError::Invalid("carousel.delay_ms must be positive".into()));
        }
        if self.carousel.speed_ms >= self.carousel.delay_ms {
            return Err(ConfigError::Invalid(
                "carousel.speed_ms must be shorter than carousel.delay_ms".into(),
            ));
        }
        if !(self.reveal.threshold > 0.0 && self.reveal.threshold <= 1.0) {
            return Err(ConfigError::Invalid("reveal.threshold must be in (0, 1]".into()));
        }
        Ok(())
    }
}

/// Get the path where the config file is expected
/// - Linux: ~/.config/sketchbook/config.toml
/// - macOS: ~/Library/Application Support/sketchbook/config.toml
/// - Windows: %APPDATA%\sketchbook\config.toml
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push("sketchbook");
        path.push("config.toml");
        path
    })
}

/// Load configuration from file
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Load the user's config, falling back to defaults on any problem
pub fn load_or_default() -> AppConfig {
    let Some(path) = default_path() else {
        tracing::info!("no config directory available, using defaults");
        return AppConfig::default();
    };

    if !path.exists() {
        tracing::info!(path = %path.display(), "no config file, using defaults");
        return AppConfig::default();
    }

    match load_config(&path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "loaded config");
            config
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring config");
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.carousel.delay(), Duration::from_millis(5000));
        assert_eq!(config.carousel.speed(), Duration::from_millis(600));
        assert_eq!(config.reveal.threshold, 0.2);
    }

    #[test]
    fn test_written_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = AppConfig::default();
        config.carousel.delay_ms = 8000;
        config.site.art_dir = PathBuf::from("/srv/art");

        std::fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();
        assert_eq!(load_config(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[carousel]\ndelay_ms = 3000\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.carousel.delay_ms, 3000);
        assert_eq!(config.carousel.speed_ms, 600);
        assert_eq!(config.site, SiteConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = AppConfig::default();
        config.carousel.speed_ms = 5000;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = AppConfig::default();
        config.carousel.delay_ms = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.reveal.threshold = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[carousel\n").unwrap();

        assert!(matches!(load_config(&path), Err(ConfigError::Parse(_))));
    }
}
