//! Configuration file support.
//!
//! An optional `hpyconf.toml` at the repository root overrides the fixed
//! defaults: artifact target paths for the stamping step, and the host
//! implementation (or the interpreter executable to probe) for plan
//! assembly. A missing file means defaults; an unreadable or unparseable
//! file is reported and ignored.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::stamp::ArtifactLayout;

/// Name of the per-project configuration file.
pub const CONFIG_FILE_NAME: &str = "hpyconf.toml";

/// hpyconf configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Version stamping settings
    pub stamp: StampConfig,

    /// Build plan settings
    pub plan: PlanConfig,
}

/// Settings for the version stamping step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StampConfig {
    /// Target path of the native descriptor, relative to the repository root
    pub header: Option<PathBuf>,

    /// Target path of the package descriptor, relative to the repository root
    pub module: Option<PathBuf>,
}

/// Settings for build plan assembly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanConfig {
    /// Host implementation identifier (skips the interpreter probe)
    pub implementation: Option<String>,

    /// Interpreter executable to probe when no implementation is configured
    pub python: Option<String>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if the file is missing
    /// or broken.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// The artifact layout with any configured overrides applied.
    pub fn layout(&self) -> ArtifactLayout {
        let mut layout = ArtifactLayout::default();
        if let Some(ref header) = self.stamp.header {
            layout.header = header.clone();
        }
        if let Some(ref module) = self.stamp.module {
            layout.module = module.clone();
        }
        layout
    }
}

/// Load the project configuration for a repository root.
pub fn load_config(root: &Path) -> Config {
    Config::load_or_default(&root.join(CONFIG_FILE_NAME))
}
