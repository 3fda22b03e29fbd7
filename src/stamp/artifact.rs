//! Generated version artifacts.
//!
//! Two fixed-format text files embed the resolved [`VersionInfo`]: a
//! preprocessor header for the compiled extension and a module of plain
//! assignments for the installed package. Both are fully overwritten on
//! every build so they can never lag behind the current resolution.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::VersionInfo;
use crate::util::fs::write_string;

/// Default target path of the native descriptor, relative to the
/// repository root.
pub const DEFAULT_HEADER_PATH: &str = "hpy/devel/include/common/version.h";

/// Default target path of the package descriptor, relative to the
/// repository root.
pub const DEFAULT_MODULE_PATH: &str = "hpy/devel/version.py";

/// Where the two generated artifacts are written, relative to the
/// repository root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactLayout {
    /// Native descriptor (preprocessor constants)
    pub header: PathBuf,

    /// Package descriptor (module-level assignments)
    pub module: PathBuf,
}

impl Default for ArtifactLayout {
    fn default() -> Self {
        ArtifactLayout {
            header: PathBuf::from(DEFAULT_HEADER_PATH),
            module: PathBuf::from(DEFAULT_MODULE_PATH),
        }
    }
}

impl ArtifactLayout {
    /// Absolute path of the native descriptor under `root`.
    pub fn header_path(&self, root: &Path) -> PathBuf {
        root.join(&self.header)
    }

    /// Absolute path of the package descriptor under `root`.
    pub fn module_path(&self, root: &Path) -> PathBuf {
        root.join(&self.module)
    }
}

/// Render the native descriptor: two `#define` constants behind a
/// generation-provenance comment.
pub fn render_header(info: &VersionInfo) -> String {
    format!(
        "// automatically generated by hpyconf stamp\n\
         #define HPY_VERSION \"{}\"\n\
         #define HPY_GIT_REVISION \"{}\"\n",
        info.version, info.git_revision
    )
}

/// Render the package descriptor: two module-level assignments behind a
/// generation-provenance comment.
pub fn render_module(info: &VersionInfo) -> String {
    format!(
        "# automatically generated by hpyconf stamp\n\
         __version__ = \"{}\"\n\
         __git_revision__ = \"{}\"\n",
        info.version, info.git_revision
    )
}

/// Write both artifacts, replacing any previous content.
///
/// A failed write (permissions, missing directory) is fatal: the build
/// cannot proceed without consistent version artifacts.
pub fn write_artifacts(root: &Path, layout: &ArtifactLayout, info: &VersionInfo) -> Result<()> {
    write_string(&layout.header_path(root), &render_header(info))?;
    write_string(&layout.module_path(root), &render_module(info))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use semver::Version;
    use tempfile::TempDir;

    fn info() -> VersionInfo {
        VersionInfo::new(Version::new(1, 2, 3), "v1.2.3-0-gabcdef1")
    }

    #[test]
    fn test_render_header() {
        assert_eq!(
            render_header(&info()),
            "// automatically generated by hpyconf stamp\n\
             #define HPY_VERSION \"1.2.3\"\n\
             #define HPY_GIT_REVISION \"v1.2.3-0-gabcdef1\"\n"
        );
    }

    #[test]
    fn test_render_module() {
        assert_eq!(
            render_module(&info()),
            "# automatically generated by hpyconf stamp\n\
             __version__ = \"1.2.3\"\n\
             __git_revision__ = \"v1.2.3-0-gabcdef1\"\n"
        );
    }

    #[test]
    fn test_both_renderings_quote_identical_values() {
        let info = info();
        let header = render_header(&info);
        let module = render_module(&info);

        for value in [info.version.to_string(), info.git_revision.clone()] {
            let quoted = format!("\"{}\"", value);
            assert!(header.contains(&quoted));
            assert!(module.contains(&quoted));
        }
    }

    #[test]
    fn test_write_artifacts_overwrites_stale_content() {
        let tmp = TempDir::new().unwrap();
        let layout = ArtifactLayout {
            header: PathBuf::from("version.h"),
            module: PathBuf::from("version.py"),
        };

        std::fs::write(tmp.path().join("version.h"), "stale content\n").unwrap();
        write_artifacts(tmp.path(), &layout, &info()).unwrap();

        let header = std::fs::read_to_string(tmp.path().join("version.h")).unwrap();
        assert!(!header.contains("stale"));
        assert!(header.starts_with("// automatically generated"));
    }

    #[test]
    fn test_write_artifacts_fails_on_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let layout = ArtifactLayout::default();

        // hpy/devel/... does not exist under the temp root
        assert!(write_artifacts(tmp.path(), &layout, &info()).is_err());
    }
}
