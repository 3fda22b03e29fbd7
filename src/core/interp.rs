//! Host interpreter implementation identity.
//!
//! The universal extension is only built for the reference implementation;
//! every other implementation gets an empty build plan. The original system
//! ran inside the target interpreter and read the identifier directly, so as
//! a standalone tool the identifier is an input: callers pass it explicitly
//! or ask [`Implementation::detect`] to probe an interpreter executable.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::util::process::{find_python, ProcessBuilder};

/// Identifier of the reference implementation.
pub const REFERENCE_IMPLEMENTATION: &str = "cpython";

/// A host interpreter implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Implementation {
    /// The reference implementation - the only one the extension targets.
    CPython,
    PyPy,
    GraalPy,
    /// Any implementation this tool has no special knowledge of.
    Other(String),
}

impl Implementation {
    /// Parse an implementation identifier. Never fails; unknown names map
    /// to [`Implementation::Other`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "cpython" => Implementation::CPython,
            "pypy" => Implementation::PyPy,
            "graalpy" => Implementation::GraalPy,
            other => Implementation::Other(other.to_string()),
        }
    }

    /// The canonical identifier, as reported by the interpreter itself.
    pub fn name(&self) -> &str {
        match self {
            Implementation::CPython => REFERENCE_IMPLEMENTATION,
            Implementation::PyPy => "pypy",
            Implementation::GraalPy => "graalpy",
            Implementation::Other(name) => name,
        }
    }

    /// Whether this is the reference implementation the extension is built for.
    pub fn is_reference(&self) -> bool {
        matches!(self, Implementation::CPython)
    }

    /// Probe an interpreter executable for its implementation name.
    ///
    /// Runs `<python> -c "import sys; print(sys.implementation.name)"` and
    /// parses the output, the same way compiler identity is probed with
    /// `cc --version` in other build tools.
    pub fn detect(python: &str) -> Result<Self> {
        let exe = find_python(python)
            .with_context(|| format!("interpreter `{}` not found in PATH", python))?;

        let output = ProcessBuilder::new(&exe)
            .args(["-c", "import sys; print(sys.implementation.name)"])
            .exec_and_check()
            .with_context(|| format!("failed to query `{}` for its implementation", exe.display()))?;

        let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if name.is_empty() {
            bail!(
                "`{}` reported an empty implementation name",
                exe.display()
            );
        }

        tracing::debug!("detected implementation `{}` via {}", name, exe.display());
        Ok(Implementation::from_name(&name))
    }
}

impl FromStr for Implementation {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Implementation::from_name(s))
    }
}

impl fmt::Display for Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
