//! Revision description via the external `git describe` query.

use std::path::Path;

use crate::util::process::{find_git, ProcessBuilder};

/// Sentinel recorded when the revision query fails.
pub const UNKNOWN_REVISION: &str = "__UNKNOWN__";

/// Fixed arguments of the revision query: abbreviated hash of at least 7
/// characters, dirty marker, always-output fallback, prefer tags, long
/// (tag-distance-hash) format.
pub const DESCRIBE_ARGS: &[&str] = &[
    "describe",
    "--abbrev=7",
    "--dirty",
    "--always",
    "--tags",
    "--long",
];

/// Describe the current revision of the repository at `root`.
///
/// Returns the trimmed output of `git describe`, or [`UNKNOWN_REVISION`]
/// when the query cannot be run or fails. Revision metadata being
/// unavailable must never abort a build, so every failure is downgraded to
/// the sentinel and logged.
pub fn describe_revision(root: &Path) -> String {
    let Some(git) = find_git() else {
        tracing::warn!("git executable not found; recording revision as {}", UNKNOWN_REVISION);
        return UNKNOWN_REVISION.to_string();
    };

    match ProcessBuilder::new(&git)
        .args(DESCRIBE_ARGS)
        .cwd(root)
        .exec_and_check()
    {
        Ok(output) => {
            let revision = String::from_utf8_lossy(&output.stdout).trim().to_string();
            if revision.is_empty() {
                UNKNOWN_REVISION.to_string()
            } else {
                revision
            }
        }
        Err(e) => {
            tracing::warn!(
                "revision query failed ({:#}); recording revision as {}",
                e,
                UNKNOWN_REVISION
            );
            UNKNOWN_REVISION.to_string()
        }
    }
}
