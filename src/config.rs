//! TOML configuration for the `inspect` tool.
//!
//! Every section and key is optional:
//!
//! ```toml
//! [output]
//! pretty = true
//!
//! [export]
//! delimiter = ";"
//! null_marker = "NULL"
//!
//! [google]
//! success_status = "success"
//!
//! [lookup]
//! custom_url = "https://lookup.example.com/reverse?lat={lat}&lng={lng}"
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::Result;
use crate::google::{ConversionOptions, DEFAULT_SUCCESS_STATUS};
use crate::models::CoordinateQuery;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub export: ExportConfig,
    pub google: GoogleConfig,
    pub lookup: LookupConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output
    pub pretty: bool,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ExportConfig {
    pub delimiter: char,
    /// Cell text for explicit nulls (absent fields are always empty)
    pub null_marker: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            null_marker: String::new(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GoogleConfig {
    pub success_status: String,
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            success_status: DEFAULT_SUCCESS_STATUS.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct LookupConfig {
    /// URL template of a lookup endpoint, with `{lat}` and `{lng}` (or
    /// `{long}`) placeholders. Empty when none is configured.
    pub custom_url: String,
}

impl LookupConfig {
    /// The template filled with a query's coordinates, if one is configured
    pub fn url_for(&self, query: &CoordinateQuery) -> Option<String> {
        if self.custom_url.is_empty() {
            None
        } else {
            Some(query.fill_template(&self.custom_url))
        }
    }
}

impl GoogleConfig {
    pub fn conversion_options(&self) -> ConversionOptions {
        ConversionOptions {
            success_status: self.success_status.clone(),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: Config = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.as_ref().display());
        Ok(config)
    }

    /// Load from a file when given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::load(None).unwrap();
        assert!(!config.output.pretty);
        assert_eq!(config.export.delimiter, ',');
        assert_eq!(config.export.null_marker, "");
        assert_eq!(config.google.success_status, "success");
        assert!(config.lookup.custom_url.is_empty());
        assert_eq!(config.lookup.url_for(&CoordinateQuery::new(1.0, 2.0)), None);
    }

    #[test]
    fn test_lookup_url() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[lookup]\ncustom_url = \"https://lookup.example.com/rev/{{lat}}/{{long}}\""
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(
            config.lookup.url_for(&CoordinateQuery::new(21.5, 105.25)),
            Some("https://lookup.example.com/rev/21.5/105.25".to_string())
        );
        assert_eq!(config.export.delimiter, ',');
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[export]\ndelimiter = \";\"\nnull_marker = \"NULL\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.export.delimiter, ';');
        assert_eq!(config.export.null_marker, "NULL");
        assert!(!config.output.pretty);
        assert_eq!(config.google.conversion_options().success_status, "success");
    }

    #[test]
    fn test_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\npretty = \"yes\"").unwrap();

        assert!(matches!(
            Config::load_from_file(file.path()),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Config::load_from_file("/nonexistent/geobridge.toml"),
            Err(Error::Io(_))
        ));
    }
}
