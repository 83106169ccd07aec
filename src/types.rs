//! Shared data model for one bundling run.

use std::fmt;
use std::path::{Path, PathBuf};

/// A module that finished traversal: its identity and the stripped body
/// ready for concatenation. Result Sequence entries are append-only and
/// unique per path.
#[derive(Debug, Clone)]
pub struct BundledModule {
    /// Normalized module identity
    pub path: PathBuf,
    /// Module body with import/export syntax removed
    pub stripped: String,
}

/// A recoverable condition encountered during traversal.
///
/// Diagnostics never abort the run; they are collected by the walker and
/// rendered informationally by the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// An import resolved to an identity the reader could not locate.
    /// The subtree is not expanded; sibling imports continue.
    MissingModule {
        path: PathBuf,
        imported_from: Option<PathBuf>,
    },
    /// An import reached a module that is still being resolved. The
    /// cyclic edge is not re-descended; traversal continues.
    CycleDetected {
        path: PathBuf,
        imported_from: Option<PathBuf>,
    },
}

impl Diagnostic {
    pub fn kind(&self) -> &'static str {
        match self {
            Diagnostic::MissingModule { .. } => "missing-module",
            Diagnostic::CycleDetected { .. } => "cycle-detected",
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Diagnostic::MissingModule { path, .. } => path,
            Diagnostic::CycleDetected { path, .. } => path,
        }
    }

    pub fn imported_from(&self) -> Option<&Path> {
        match self {
            Diagnostic::MissingModule { imported_from, .. } => imported_from.as_deref(),
            Diagnostic::CycleDetected { imported_from, .. } => imported_from.as_deref(),
        }
    }

    pub fn is_cycle(&self) -> bool {
        matches!(self, Diagnostic::CycleDetected { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingModule {
                path,
                imported_from: Some(from),
            } => write!(
                f,
                "module not found: {} (imported from {})",
                path.display(),
                from.display()
            ),
            Diagnostic::MissingModule {
                path,
                imported_from: None,
            } => write!(f, "entry module not found: {}", path.display()),
            Diagnostic::CycleDetected {
                path,
                imported_from: Some(from),
            } => write!(
                f,
                "circular import: {} -> {} (already being resolved, not expanded)",
                from.display(),
                path.display()
            ),
            Diagnostic::CycleDetected {
                path,
                imported_from: None,
            } => write!(
                f,
                "circular import: {} (already being resolved, not expanded)",
                path.display()
            ),
        }
    }
}
