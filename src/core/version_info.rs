//! Resolved version data for a single build invocation.

use semver::Version;

use crate::scm::UNKNOWN_REVISION;

/// The version identifier and source-control revision resolved for a build.
///
/// Created fresh on every invocation and never mutated afterwards; the only
/// persistent form is the pair of generated artifacts written by the
/// stamping step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    /// Semantic version derived from tags and commit distance.
    pub version: Version,

    /// Output of the revision-description query (tag, distance, abbreviated
    /// hash, dirty marker), or the `__UNKNOWN__` sentinel when the query
    /// failed.
    pub git_revision: String,
}

impl VersionInfo {
    /// Create version info from a derived version and a revision descriptor.
    pub fn new(version: Version, git_revision: impl Into<String>) -> Self {
        VersionInfo {
            version,
            git_revision: git_revision.into(),
        }
    }

    /// Whether the revision query produced a real descriptor rather than
    /// the sentinel.
    pub fn revision_known(&self) -> bool {
        self.git_revision != UNKNOWN_REVISION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revision_known() {
        let info = VersionInfo::new(Version::new(1, 2, 3), "v1.2.3-0-gabcdef1");
        assert!(info.revision_known());

        let unknown = VersionInfo::new(Version::new(1, 2, 3), UNKNOWN_REVISION);
        assert!(!unknown.revision_known());
    }
}
