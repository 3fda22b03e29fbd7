//! Core types: resolved version data and host interpreter identity.

pub mod interp;
pub mod version_info;

pub use interp::Implementation;
pub use version_info::VersionInfo;
