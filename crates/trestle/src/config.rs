//! Workspace configuration file handling.
//!
//! An optional `trestle.yaml` in the working directory supplies default
//! paths and the cost-match tolerance. CLI flags override its values; a
//! missing file just means defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::error::{Error, Result};

/// Name of the configuration file
pub const CONFIG_FILE_NAME: &str = "trestle.yaml";

/// Default input document path
pub const DEFAULT_INPUT: &str = "input.json";

/// Default results document path
pub const DEFAULT_OUTPUT: &str = "output.json";

/// Default CSV report path
pub const DEFAULT_CSV: &str = "analysis_results.csv";

/// Default cost-match tolerance
pub const DEFAULT_TOLERANCE: f64 = 0.001;

/// Configuration file structure for trestle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrestleConfig {
    /// Default input document path
    #[serde(default = "default_input")]
    pub input: String,

    /// Default results document path
    #[serde(default = "default_output")]
    pub output: String,

    /// Default CSV report path
    #[serde(default = "default_csv")]
    pub csv: String,

    /// Tolerance used when comparing engine costs
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

fn default_input() -> String {
    DEFAULT_INPUT.to_string()
}

fn default_output() -> String {
    DEFAULT_OUTPUT.to_string()
}

fn default_csv() -> String {
    DEFAULT_CSV.to_string()
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

impl TrestleConfig {
    /// Load configuration from a file
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be read and
    /// [`Error::Config`] naming the file when it does not parse.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        serde_yaml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))
    }

    /// Load `trestle.yaml` from `dir`, or fall back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when a present file does not parse; an
    /// absent file is not an error.
    pub async fn load_or_default(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(&path).await
    }

    /// Save configuration to a file
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when serialization fails and [`Error::Io`]
    /// when the file cannot be written.
    pub async fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Config(format!("YAML error: {e}")))?;
        fs::write(path, content).await?;
        Ok(())
    }
}

impl Default for TrestleConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            csv: default_csv(),
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}
