//! Version resolution and stamping.
//!
//! The pre-build version hook: resolve the version and revision from source
//! control and materialize them into the two generated artifacts. Runs on
//! every build invocation, not only on release tags, so the artifacts always
//! reflect the checkout being built.

mod artifact;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::VersionInfo;
use crate::scm;

pub use artifact::{
    render_header, render_module, write_artifacts, ArtifactLayout, DEFAULT_HEADER_PATH,
    DEFAULT_MODULE_PATH,
};

/// Result of a stamping run.
#[derive(Debug, Clone)]
pub struct StampOutcome {
    /// The resolved version data
    pub info: VersionInfo,

    /// Absolute path of the written native descriptor
    pub header: PathBuf,

    /// Absolute path of the written package descriptor
    pub module: PathBuf,
}

/// Resolve the version data for the repository at `root` and write both
/// artifacts.
///
/// Version derivation failures and artifact write failures propagate; a
/// failed revision query does not (the sentinel is recorded instead).
pub fn materialize(root: &Path, layout: &ArtifactLayout) -> Result<StampOutcome> {
    let version = scm::derive_version(root)
        .with_context(|| format!("failed to derive a version for {}", root.display()))?;
    let git_revision = scm::describe_revision(root);
    let info = VersionInfo::new(version, git_revision);

    tracing::debug!(
        "resolved version {} (revision {})",
        info.version,
        info.git_revision
    );

    write_artifacts(root, layout, &info)?;

    Ok(StampOutcome {
        header: layout.header_path(root),
        module: layout.module_path(root),
        info,
    })
}

/// The version-hook callback run by the external build orchestrator.
///
/// Materializes the version artifacts as a side effect and returns an empty
/// configuration-override mapping: the caller keeps its default version
/// handling.
pub fn version_hook(root: &Path, layout: &ArtifactLayout) -> Result<BTreeMap<String, String>> {
    materialize(root, layout)?;
    Ok(BTreeMap::new())
}
