//! Configuration types and loading for autoimport
//!
//! The configuration lives in `autoimport.toml` (or `.json`, `.yaml`, `.yml`)
//! at the project root. Every field has a default, so an empty file is a
//! valid (if idle) configuration.

use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

use autoimport_fs::{ConfigStore, NormalizedPath};

use crate::error::{Error, Result};

/// Configuration file names, in lookup order.
pub const CONFIG_FILE_NAMES: [&str; 4] = [
    "autoimport.toml",
    "autoimport.json",
    "autoimport.yaml",
    "autoimport.yml",
];

/// Generated module name used when none is configured.
pub const DEFAULT_OUTPUT: &str = "imports.js";

/// Source dialect handed to the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// JavaScript, including JSX
    #[default]
    JavaScript,
    TypeScript,
    Tsx,
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::JavaScript => write!(f, "javascript"),
            Dialect::TypeScript => write!(f, "typescript"),
            Dialect::Tsx => write!(f, "tsx"),
        }
    }
}

/// Parser settings passed through to the declaration parser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParserConfig {
    #[serde(default)]
    pub dialect: Dialect,
    /// Whether `export function f` and `export class C` contribute their names
    #[serde(default = "default_true")]
    pub declaration_names: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            declaration_names: true,
        }
    }
}

/// Extension lists used to classify files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtensionConfig {
    /// Files parsed for named exports
    #[serde(default = "default_script_extensions")]
    pub script: Vec<String>,
    /// Files imported for their side effects only
    #[serde(default = "default_include_extensions")]
    pub include: Vec<String>,
}

fn default_script_extensions() -> Vec<String> {
    vec![".js".into(), ".jsx".into(), ".mjs".into()]
}

fn default_include_extensions() -> Vec<String> {
    vec![".css".into()]
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self {
            script: default_script_extensions(),
            include: default_include_extensions(),
        }
    }
}

/// One rule of the template custom handler.
///
/// `code` and `exports` may use `{path}` (the specifier as written in the
/// generated module) and `{name}` (the file stem).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomRule {
    /// Case-insensitive file name suffix, e.g. `.html`
    pub suffix: String,
    /// Code appended to the generated module
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Identifiers added to the global export set
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exports: Vec<String>,
}

/// Complete synchronization configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Roots whose files feed the generated module
    #[serde(default)]
    pub import: Vec<String>,
    /// Roots whose files receive the generated import line
    #[serde(default)]
    pub modify: Vec<String>,
    /// Generated module name relative to the project root; `false` disables it
    #[serde(default = "default_output", with = "output_setting")]
    pub output: Option<String>,
    /// Names the generated module had before, still recognized when purging
    #[serde(default)]
    pub previous_outputs: Vec<String>,
    /// Regular expressions; a root-relative path matching any is skipped
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Prepended to every path imported by the generated module
    #[serde(default)]
    pub specifier_prefix: String,
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub extensions: ExtensionConfig,
    #[serde(default)]
    pub custom: Vec<CustomRule>,
}

fn default_output() -> Option<String> {
    Some(DEFAULT_OUTPUT.to_string())
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            import: Vec::new(),
            modify: Vec::new(),
            output: default_output(),
            previous_outputs: Vec::new(),
            exclude: Vec::new(),
            specifier_prefix: String::new(),
            parser: ParserConfig::default(),
            extensions: ExtensionConfig::default(),
            custom: Vec::new(),
        }
    }
}

impl SyncConfig {
    /// Starter configuration written by `autoimport init`.
    pub fn starter() -> Self {
        Self {
            import: vec!["src/lib".into()],
            modify: vec!["src/pages".into()],
            ..Self::default()
        }
    }

    /// Reject configurations the engine cannot run with.
    pub fn validate(&self) -> Result<()> {
        if let Some(output) = &self.output {
            let normalized = NormalizedPath::new(output);
            if normalized.as_str().starts_with('/') || normalized.as_str().contains(':') {
                return Err(Error::InvalidConfig {
                    message: format!("output must be relative to the project root, got {output:?}"),
                });
            }
            if normalized.as_str().split('/').any(|segment| segment == "..") {
                return Err(Error::InvalidConfig {
                    message: format!("output must stay inside the project root, got {output:?}"),
                });
            }
        }

        for pattern in &self.exclude {
            Regex::new(pattern).map_err(|e| Error::InvalidPattern {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;
        }

        Ok(())
    }
}

/// Locate and load the configuration file in `root`.
pub fn load_config(root: &NormalizedPath) -> Result<SyncConfig> {
    let store = ConfigStore::new();
    let path = store
        .locate(root, &CONFIG_FILE_NAMES)
        .ok_or_else(|| Error::ConfigNotFound {
            path: root.to_native(),
        })?;

    let config: SyncConfig = store.load(&path)?;
    config.validate()?;
    Ok(config)
}

/// `output = "name"` or `output = false`.
mod output_setting {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::DEFAULT_OUTPUT;

    #[derive(Serialize, Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Name(String),
        Enabled(bool),
    }

    pub fn serialize<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(name) => Raw::Name(name.clone()).serialize(serializer),
            None => Raw::Enabled(false).serialize(serializer),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Name(name) if !name.trim().is_empty() => Some(name),
            Raw::Name(_) | Raw::Enabled(false) => None,
            Raw::Enabled(true) => Some(DEFAULT_OUTPUT.to_string()),
        })
    }
}
