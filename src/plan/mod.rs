//! Build plan assembly.
//!
//! A BuildPlan describes the native extensions to compile for a build
//! invocation: which source files, include directories, and compiler flags.
//! It is a pure function of two inputs - the host interpreter implementation
//! and whether the debug environment variable is present - and is consumed
//! by the external build orchestrator as a declarative JSON structure.

pub mod universal;

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::core::Implementation;
use crate::plan::universal::universal_extension;

/// Environment variable whose presence (any value, including empty)
/// selects the debug compile-argument set.
pub const DEBUG_ENV_VAR: &str = "HPY_DEBUG";

/// Extra compile arguments for debug builds: debug symbols, no
/// optimization, assertions forced active.
pub const DEBUG_COMPILE_ARGS: &[&str] = &["-g", "-O0", "-UNDEBUG"];

/// A complete build plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildPlan {
    /// Extensions to compile, in order. Empty for every implementation
    /// other than the reference one.
    pub extensions: Vec<ExtensionDescriptor>,
}

/// A native extension to compile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionDescriptor {
    /// Import name of the extension module
    pub name: String,

    /// Source files, in compilation order
    pub sources: Vec<PathBuf>,

    /// Include directories
    pub include_dirs: Vec<PathBuf>,

    /// Extra compile arguments
    pub compile_args: Vec<String>,
}

impl BuildPlan {
    /// Compute the build plan for a host implementation and debug mode.
    ///
    /// Total over both inputs: an unrecognized implementation yields an
    /// empty plan, never an error.
    pub fn compute(implementation: &Implementation, debug: bool) -> Self {
        let extensions = if implementation.is_reference() {
            vec![universal_extension(debug)]
        } else {
            tracing::debug!(
                "no extension planned for implementation `{}`",
                implementation
            );
            Vec::new()
        };

        BuildPlan { extensions }
    }

    /// Compute the build plan with debug mode taken from the environment.
    pub fn from_env(implementation: &Implementation) -> Self {
        Self::compute(implementation, debug_requested())
    }

    /// Get the number of planned extensions.
    pub fn extension_count(&self) -> usize {
        self.extensions.len()
    }

    /// Serialize the plan to JSON for the build orchestrator.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

/// Whether the debug environment variable is present (with any value).
pub fn debug_requested() -> bool {
    std::env::var_os(DEBUG_ENV_VAR).is_some()
}

/// The extra compile arguments selected by the debug mode.
pub fn debug_compile_args(debug: bool) -> Vec<String> {
    if debug {
        DEBUG_COMPILE_ARGS.iter().map(|s| s.to_string()).collect()
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::universal::UNIVERSAL_ABI_FLAG;

    #[test]
    fn test_reference_implementation_plans_one_extension() {
        let plan = BuildPlan::compute(&Implementation::CPython, false);
        assert_eq!(plan.extension_count(), 1);
        assert_eq!(plan.extensions[0].name, "hpy.universal");
    }

    #[test]
    fn test_other_implementations_plan_nothing() {
        for implementation in [
            Implementation::PyPy,
            Implementation::GraalPy,
            Implementation::Other("ironpython".to_string()),
        ] {
            let plan = BuildPlan::compute(&implementation, false);
            assert!(plan.extensions.is_empty());
        }
    }

    #[test]
    fn test_release_compile_args_are_abi_flag_only() {
        let plan = BuildPlan::compute(&Implementation::CPython, false);
        let args = &plan.extensions[0].compile_args;

        assert_eq!(args, &vec![UNIVERSAL_ABI_FLAG.to_string()]);
        for flag in DEBUG_COMPILE_ARGS {
            assert!(!args.contains(&flag.to_string()));
        }
    }

    #[test]
    fn test_debug_compile_args_extend_abi_flag() {
        let plan = BuildPlan::compute(&Implementation::CPython, true);
        let args = &plan.extensions[0].compile_args;

        assert!(args.contains(&UNIVERSAL_ABI_FLAG.to_string()));
        for flag in DEBUG_COMPILE_ARGS {
            assert!(args.contains(&flag.to_string()));
        }
        assert_eq!(args.len(), 1 + DEBUG_COMPILE_ARGS.len());
    }

    #[test]
    fn test_debug_mode_does_not_affect_non_reference_plans() {
        let plan = BuildPlan::compute(&Implementation::PyPy, true);
        assert!(plan.extensions.is_empty());
    }

    #[test]
    fn test_debug_compile_args_helper() {
        assert!(debug_compile_args(false).is_empty());
        assert_eq!(debug_compile_args(true), vec!["-g", "-O0", "-UNDEBUG"]);
    }

    #[test]
    fn test_plan_serialization_round_trips() {
        let plan = BuildPlan::compute(&Implementation::CPython, true);

        let json = plan.to_json(false).unwrap();
        let deserialized: BuildPlan = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.extension_count(), 1);
        assert_eq!(
            deserialized.extensions[0].sources,
            plan.extensions[0].sources
        );
    }

    #[test]
    fn test_empty_plan_serializes_to_empty_extension_list() {
        let plan = BuildPlan::compute(&Implementation::PyPy, false);
        let json = plan.to_json(false).unwrap();
        assert_eq!(json, r#"{"extensions":[]}"#);
    }
}
