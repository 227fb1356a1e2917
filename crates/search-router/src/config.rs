// File: src/config.rs
// Purpose: Configuration parsing from router.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::view::Theme;
use crate::MatchOptions;

/// Router configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub routing: RoutingConfig,

    #[serde(default)]
    pub routes: RoutesConfig,

    #[serde(default)]
    pub theme: Theme,
}

/// Matching behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Whether static segments ignore case (default: true)
    #[serde(default = "default_true")]
    pub case_insensitive: bool,

    /// Whether `/explore/` is rejected instead of treated as `/explore`
    #[serde(default = "default_false")]
    pub strict_trailing_slash: bool,

    /// Whether parameter values are percent-decoded (default: true)
    #[serde(default = "default_true")]
    pub decode_params: bool,

    /// Chained redirects the navigator follows before giving up
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
}

/// Paths of the three rules, in evaluation order after the root redirect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutesConfig {
    /// Where `/` redirects to
    #[serde(default = "default_landing")]
    pub landing: String,

    /// Exact path of the standalone editor
    #[serde(default = "default_editor")]
    pub editor: String,

    /// Template of the generic page rule
    #[serde(default = "default_page")]
    pub page: String,
}

// Default values
pub(crate) fn default_landing() -> String {
    "/explore".to_string()
}

fn default_editor() -> String {
    "/editor".to_string()
}

fn default_page() -> String {
    "/:page/:dataset_id?".to_string()
}

pub(crate) fn default_max_redirects() -> usize {
    8
}

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            case_insensitive: true,
            strict_trailing_slash: false,
            decode_params: true,
            max_redirects: default_max_redirects(),
        }
    }
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            landing: default_landing(),
            editor: default_editor(),
            page: default_page(),
        }
    }
}

impl RoutingConfig {
    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            case_insensitive: self.case_insensitive,
            strict_trailing_slash: self.strict_trailing_slash,
            decode_params: self.decode_params,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!("no config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from default path (./router.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("router.toml")
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.routing.case_insensitive);
        assert!(!config.routing.strict_trailing_slash);
        assert!(config.routing.decode_params);
        assert_eq!(config.routing.max_redirects, 8);
        assert_eq!(config.routes.landing, "/explore");
        assert_eq!(config.routes.editor, "/editor");
        assert_eq!(config.routes.page, "/:page/:dataset_id?");
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_sections() {
        let toml = r#"
            [routing]
            case_insensitive = false

            [routes]
            landing = "/search"
        "#;
        let config = Config::from_toml(toml).unwrap();
        assert!(!config.routing.case_insensitive);
        assert!(config.routing.decode_params);
        assert_eq!(config.routes.landing, "/search");
        assert_eq!(config.routes.editor, "/editor");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(Config::from_toml("[routing\ncase_insensitive = 1").is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = Config::load("/nonexistent/router.toml").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_match_options_follow_routing_section() {
        let routing = RoutingConfig {
            strict_trailing_slash: true,
            ..RoutingConfig::default()
        };
        let options = routing.match_options();
        assert!(options.strict_trailing_slash);
        assert!(options.case_insensitive);
    }
}
