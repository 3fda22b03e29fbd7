//! Source-control queries: version derivation and revision description.

pub mod describe;
pub mod version;

pub use describe::{describe_revision, UNKNOWN_REVISION};
pub use version::{derive_version, ScmError};
