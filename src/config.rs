//! Build configuration.
//!
//! A config file supplies option defaults for a build. Command-line flags
//! override anything it sets.
//!
//! ## Formats
//!
//! Both JSON and TOML are accepted; the file extension picks the parser
//! (`.toml` → TOML, anything else → JSON).
//!
//! ```json
//! {
//!   "input": "content/",
//!   "stylesheet": "https://cdn.jsdelivr.net/npm/water.css@2/out/water.css",
//!   "lang": "fr-CA"
//! }
//! ```
//!
//! ```toml
//! input = "content/"
//! stylesheet = "/style.css"
//! lang = "en-CA"
//! output = "dist"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::document::DEFAULT_LANG;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
    #[error("Missing 'input' option")]
    MissingInput,
}

/// Options read from a config file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Source file or directory.
    pub input: Option<String>,
    /// URL of a stylesheet linked from every page.
    pub stylesheet: Option<String>,
    /// Value of the `lang` attribute on the root element.
    pub lang: String,
    /// Output root directory.
    pub output: String,
}

fn default_output() -> String {
    "dist".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            input: None,
            stylesheet: None,
            lang: DEFAULT_LANG.to_string(),
            output: default_output(),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lang.trim().is_empty() {
            return Err(ConfigError::Validation("lang must not be empty".into()));
        }
        if self.output.trim().is_empty() {
            return Err(ConfigError::Validation("output must not be empty".into()));
        }
        Ok(())
    }

    /// The input path, which a build cannot do without.
    pub fn require_input(&self) -> Result<PathBuf, ConfigError> {
        self.input
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .ok_or(ConfigError::MissingInput)
    }
}

/// Parse config text in the format implied by `path`.
pub fn parse_config(path: &Path, content: &str) -> Result<SiteConfig, ConfigError> {
    let is_toml = path
        .extension()
        .map(|e| e.eq_ignore_ascii_case("toml"))
        .unwrap_or(false);
    let config: SiteConfig = if is_toml {
        toml::from_str(content)?
    } else {
        serde_json::from_str(content)?
    };
    config.validate()?;
    Ok(config)
}

/// Load and validate a config file.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(path, &content)
}

/// Returns a fully-commented stock config file.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Silkie Configuration
# =====================
# Save as silkie.toml and pass it with `silkie build --config silkie.toml`.
# Command-line flags override every value set here.

# Source file (.txt or .md) or a directory of them.
# input = "content/"

# URL of a stylesheet linked from every generated page. Omit for none.
# stylesheet = "/style.css"

# Language of the generated documents.
lang = "en-CA"

# Directory the site is written to.
output = "dist"
"##
}

// =============================================================================
// Tests
// =============================================================================
