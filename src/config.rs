//! Configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. User config: `~/.config/ctorgen/config.toml` (XDG) or platform config dir
//! 2. Project config: `.ctorgen.toml`
//! 3. Environment variables: `CTORGEN_*`
//!
//! # Intended Usage
//!
//! Project config (`.ctorgen.toml` next to the manifest):
//! ```toml
//! [naming]
//! strip_prefix = "_"
//! lowercase_first = true
//!
//! [output]
//! dir = "generated"
//! ```
//!
//! The naming table controls how a backing field name becomes a constructor
//! parameter name. The default convention strips a single leading underscore
//! (`_someString` becomes `someString`) and otherwise lower-cases the first
//! letter.

use std::ops::Deref;
use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

/// Boxed wrapper for figment::Error to reduce Result size on the stack.
#[derive(Debug)]
pub struct ConfigError(Box<figment::Error>);

impl Deref for ConfigError {
    type Target = figment::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub naming: NamingConvention,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Backing-field-to-parameter-name derivation rule.
///
/// The rule is deliberately explicit and configurable rather than hard-coded
/// to one codebase convention: strip a single leading `strip_prefix` if the
/// field carries one, otherwise lower-case the first letter when
/// `lowercase_first` is set.
#[derive(Debug, Clone, Deserialize)]
pub struct NamingConvention {
    /// Prefix stripped once from the front of a field name (default `_`).
    /// Set to an empty string to disable stripping.
    #[serde(default = "default_strip_prefix")]
    pub strip_prefix: String,
    /// Lower-case the first letter of field names that carry no prefix.
    #[serde(default = "default_lowercase_first")]
    pub lowercase_first: bool,
}

fn default_strip_prefix() -> String {
    "_".to_string()
}

fn default_lowercase_first() -> bool {
    true
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self {
            strip_prefix: default_strip_prefix(),
            lowercase_first: default_lowercase_first(),
        }
    }
}

impl NamingConvention {
    /// Derives the constructor parameter name for a backing field.
    pub fn parameter_name(&self, field_name: &str) -> String {
        if !self.strip_prefix.is_empty() {
            if let Some(stripped) = field_name.strip_prefix(&self.strip_prefix) {
                if !stripped.is_empty() {
                    return stripped.to_string();
                }
            }
        }
        if self.lowercase_first {
            let mut chars = field_name.chars();
            match chars.next() {
                Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        } else {
            field_name.to_string()
        }
    }
}

/// Output location for generated units.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory generated units are written into.
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("generated")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

impl Config {
    /// Load config with layered resolution (user → project → env).
    pub fn load() -> Result<Self, ConfigError> {
        let user_config = Self::user_config_path();

        Figment::new()
            // Layer 1: User config (lowest priority)
            .merge(Toml::file(user_config))
            // Layer 2: Project config
            .merge(Toml::file(".ctorgen.toml"))
            // Layer 3: Environment variables (highest priority)
            .merge(Env::prefixed("CTORGEN_").split("_"))
            .extract()
            .map_err(ConfigError::from)
    }

    /// User config path: ~/.config/ctorgen/config.toml (XDG) or platform config dir.
    fn user_config_path() -> PathBuf {
        // Prefer XDG config location (~/.config) on all platforms
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home.join(".config").join("ctorgen").join("config.toml");
            if xdg_path.exists() {
                return xdg_path;
            }
        }
        // Fall back to platform-specific config dir
        dirs::config_dir()
            .map(|p| p.join("ctorgen").join("config.toml"))
            .unwrap_or_default()
    }
}
