//! hpyconf - build-time configuration generator for the HPy native extension
//!
//! This crate provides the two steps an external build orchestrator runs
//! before compiling the universal extension: resolving the package version
//! from source control and stamping it into generated artifacts, and
//! assembling the conditional build plan (which native sources to compile,
//! under which compiler flags).

pub mod core;
pub mod plan;
pub mod scm;
pub mod stamp;
pub mod util;

pub use crate::core::{Implementation, VersionInfo};
pub use crate::plan::{BuildPlan, ExtensionDescriptor};
pub use crate::stamp::ArtifactLayout;
