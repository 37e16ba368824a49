//! Application configuration.
//!
//! Settings come from an optional JSON file; command line flags override
//! individual fields afterwards.

use crate::stats::SIGNIFICANCE_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("significance threshold must lie strictly between 0 and 1, got {0}")]
    InvalidThreshold(f64),
    #[error("image size must be non-zero, got {width}x{height}")]
    InvalidImageSize { width: u32, height: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// CSV dataset analysed at start-up.
    pub dataset_path: PathBuf,
    pub significance_threshold: f64,
    /// Size of exported scatter PNGs, in pixels.
    pub png_width: u32,
    pub png_height: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("seven_train.csv"),
            significance_threshold: SIGNIFICANCE_THRESHOLD,
            png_width: 1000,
            png_height: 600,
        }
    }
}

impl AppConfig {
    /// Read and validate a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let alpha = self.significance_threshold;
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(ConfigError::InvalidThreshold(alpha));
        }
        if self.png_width == 0 || self.png_height == 0 {
            return Err(ConfigError::InvalidImageSize {
                width: self.png_width,
                height: self.png_height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(AppConfig::from_json_str("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_override() {
        let config = AppConfig::from_json_str(
            r#"{ "dataset_path": "data/train.csv", "significance_threshold": 0.01 }"#,
        )
        .unwrap();
        assert_eq!(config.dataset_path, PathBuf::from("data/train.csv"));
        assert_eq!(config.significance_threshold, 0.01);
        assert_eq!(config.png_width, 1000);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            AppConfig::from_json_str(r#"{ "font_family": "MS Gothic" }"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn threshold_out_of_range_is_rejected() {
        for bad in ["0.0", "1.0", "-0.5", "2"] {
            let json = format!(r#"{{ "significance_threshold": {bad} }}"#);
            assert!(matches!(
                AppConfig::from_json_str(&json),
                Err(ConfigError::InvalidThreshold(_))
            ));
        }
    }

    #[test]
    fn zero_image_size_is_rejected() {
        assert!(matches!(
            AppConfig::from_json_str(r#"{ "png_width": 0 }"#),
            Err(ConfigError::InvalidImageSize { .. })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            AppConfig::from_file(Path::new("/definitely/not/here.json")),
            Err(ConfigError::Io { .. })
        ));
    }
}
