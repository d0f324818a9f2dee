use std::fmt;
use std::fs;
use std::str::FromStr;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;

use crate::error::{Result, ScaffoldError};

pub const DEFAULT_BASE_PATH: &str = "flask_modular_api_template";
pub const DEFAULT_MODULES: &[&str] = &["authentication", "billing", "notifications"];

/// How per-module logic is laid out in the generated project.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ArchitectureMode {
    /// Native Python service packages under `app/services`.
    #[default]
    Services,
    /// Cross-language bridge stubs under `app/bridge`.
    Bridge,
}

impl ArchitectureMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArchitectureMode::Services => "services",
            ArchitectureMode::Bridge => "bridge",
        }
    }
}

impl fmt::Display for ArchitectureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArchitectureMode {
    type Err = ScaffoldError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "services" => Ok(ArchitectureMode::Services),
            "bridge" => Ok(ArchitectureMode::Bridge),
            other => Err(ScaffoldError::InvalidConfiguration {
                mode: other.to_owned(),
            }),
        }
    }
}

/// Fully resolved inputs for a single scaffold run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScaffoldConfig {
    pub base_path: Utf8PathBuf,
    pub modules: Vec<String>,
    pub mode: ArchitectureMode,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            base_path: Utf8PathBuf::from(DEFAULT_BASE_PATH),
            modules: DEFAULT_MODULES.iter().map(|m| (*m).to_owned()).collect(),
            mode: ArchitectureMode::default(),
        }
    }
}

/// On-disk configuration document. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub base_path: Option<Utf8PathBuf>,
    pub modules: Option<Vec<String>>,
    pub architecture_mode: Option<String>,
}

/// Values supplied on the command line; `None` leaves the lower layer in place.
#[derive(Debug, Default)]
pub struct Overrides {
    pub base_path: Option<Utf8PathBuf>,
    pub modules: Option<Vec<String>>,
    pub mode: Option<String>,
}

/// Load a configuration file from disk and deserialize it.
pub fn load_from_path(path: &Utf8Path) -> anyhow::Result<FileConfig> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading config {}", path))?;
    toml::from_str(&raw).with_context(|| format!("parsing config {}", path))
}

/// Layer defaults, then the config file, then command-line overrides.
///
/// The architecture mode is validated here, so an unknown value is rejected
/// before any plan is built or any file is touched.
pub fn resolve(file: Option<FileConfig>, overrides: Overrides) -> Result<ScaffoldConfig> {
    let defaults = ScaffoldConfig::default();
    let file = file.unwrap_or_default();

    let base_path = overrides
        .base_path
        .or(file.base_path)
        .unwrap_or(defaults.base_path);
    let modules = overrides
        .modules
        .or(file.modules)
        .unwrap_or(defaults.modules);
    let mode = match overrides.mode.or(file.architecture_mode) {
        Some(raw) => raw.parse()?,
        None => defaults.mode,
    };

    Ok(ScaffoldConfig {
        base_path,
        modules,
        mode,
    })
}
