//! Source-control-aware version derivation.
//!
//! The derived version follows the tag history of the repository:
//!
//! - HEAD exactly on a version tag with a clean worktree: the tag's version.
//! - Commits past the last tag (or a dirty worktree): the next patch level
//!   with a `dev.<distance>` pre-release and a `g<hash>` build metadata
//!   (plus `.dirty` when the worktree has uncommitted changes).
//! - No tags at all: `0.1.0-dev.<commit count>` with the same metadata.
//!
//! Unlike the revision description, version derivation has no sentinel
//! fallback: a missing repository or an unparseable tag aborts the build,
//! since no valid version can be defaulted.

use std::path::{Path, PathBuf};

use git2::{DescribeFormatOptions, DescribeOptions, Repository, StatusOptions};
use semver::{BuildMetadata, Prerelease, Version};
use thiserror::Error;

/// Error during version derivation.
#[derive(Debug, Error)]
pub enum ScmError {
    #[error("not a git repository (or any parent): {path}")]
    NoRepository { path: PathBuf },

    #[error("repository has no commits on HEAD")]
    NoCommits,

    #[error("cannot parse tag `{tag}` as a semantic version")]
    UnparsableTag {
        tag: String,
        #[source]
        source: semver::Error,
    },

    #[error("unexpected describe output `{output}`")]
    UnparsableDescribe { output: String },

    #[error(transparent)]
    Git(#[from] git2::Error),
}

/// Derive the semantic version for the repository at `root`.
pub fn derive_version(root: &Path) -> Result<Version, ScmError> {
    let repo = Repository::discover(root).map_err(|_| ScmError::NoRepository {
        path: root.to_path_buf(),
    })?;

    let head = repo
        .head()
        .and_then(|head| head.peel_to_commit())
        .map_err(|_| ScmError::NoCommits)?;

    // full object ids are hex, so the first 7 characters are a stable
    // abbreviation regardless of repository config
    let short_hash = head.id().to_string()[..7].to_string();
    let dirty = worktree_dirty(&repo)?;

    match describe_head(&repo) {
        Some(output) => {
            let (tag, distance) = parse_long_describe(&output)
                .ok_or_else(|| ScmError::UnparsableDescribe {
                    output: output.clone(),
                })?;
            let base = parse_tag_version(tag)?;

            if distance == 0 && !dirty {
                Ok(base)
            } else {
                Ok(guess_next(&base, distance, &short_hash, dirty))
            }
        }
        None => {
            // no tag reachable from HEAD
            let distance = commit_count(&repo)?;
            Ok(attach_dev(Version::new(0, 1, 0), distance, &short_hash, dirty))
        }
    }
}

/// Describe HEAD against tags, in long (tag-distance-hash) format.
fn describe_head(repo: &Repository) -> Option<String> {
    let mut opts = DescribeOptions::new();
    opts.describe_tags();
    let describe = repo.describe(&opts).ok()?;

    let mut format = DescribeFormatOptions::new();
    format.always_use_long_format(true).abbreviated_size(7);
    describe.format(Some(&format)).ok()
}

/// Whether tracked files have uncommitted changes.
fn worktree_dirty(repo: &Repository) -> Result<bool, git2::Error> {
    let mut opts = StatusOptions::new();
    opts.include_untracked(false).include_ignored(false);
    let statuses = repo.statuses(Some(&mut opts))?;
    Ok(!statuses.is_empty())
}

/// Count the commits reachable from HEAD.
fn commit_count(repo: &Repository) -> Result<u64, git2::Error> {
    let mut walk = repo.revwalk()?;
    walk.push_head()?;
    Ok(walk.count() as u64)
}

/// Split long describe output `<tag>-<distance>-g<hash>` into tag and
/// distance. Tags may themselves contain dashes, so parsing works from the
/// right.
fn parse_long_describe(output: &str) -> Option<(&str, u64)> {
    let mut parts = output.trim().rsplitn(3, '-');
    let hash = parts.next()?;
    let distance = parts.next()?.parse::<u64>().ok()?;
    let tag = parts.next()?;

    if !hash.starts_with('g') {
        return None;
    }
    Some((tag, distance))
}

/// Parse a tag name as a semantic version, tolerating a leading `v`.
fn parse_tag_version(tag: &str) -> Result<Version, ScmError> {
    let stripped = tag.strip_prefix('v').unwrap_or(tag);
    Version::parse(stripped).map_err(|e| ScmError::UnparsableTag {
        tag: tag.to_string(),
        source: e,
    })
}

/// Guess the next version after `base`: bump the patch level and mark it as
/// a development pre-release.
fn guess_next(base: &Version, distance: u64, short_hash: &str, dirty: bool) -> Version {
    attach_dev(
        Version::new(base.major, base.minor, base.patch + 1),
        distance,
        short_hash,
        dirty,
    )
}

fn attach_dev(mut version: Version, distance: u64, short_hash: &str, dirty: bool) -> Version {
    // `dev.N` and `g<hex>[.dirty]` are always valid semver identifiers
    version.pre = Prerelease::new(&format!("dev.{}", distance)).unwrap();
    let metadata = if dirty {
        format!("g{}.dirty", short_hash)
    } else {
        format!("g{}", short_hash)
    };
    version.build = BuildMetadata::new(&metadata).unwrap();
    version
}
