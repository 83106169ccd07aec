//! Import specifier resolution.
//!
//! Maps a specifier string to the canonical module identity it names.
//! Resolution is purely lexical: no filesystem access, no reliance on the
//! ambient working directory. Whether the identity exists on disk is the
//! reader's concern, not the resolver's.

use std::path::{Component, Path, PathBuf};

/// Resolves import specifiers to canonical module paths.
#[derive(Debug, Clone)]
pub struct SpecifierResolver {
    /// Module file extension without the dot, e.g. "js"
    ext: String,
}

impl Default for SpecifierResolver {
    fn default() -> Self {
        Self::new("js")
    }
}

impl SpecifierResolver {
    pub fn new(ext: &str) -> Self {
        Self {
            ext: ext.to_string(),
        }
    }

    /// Resolve a specifier against the importing module's directory.
    ///
    /// Relative specifiers (`./x`, `../y`) are joined to `importing_dir`
    /// and normalized. Anything else is an opaque absolute or package
    /// identity and passes through unchanged. Either way, the module
    /// extension is appended when the specifier omits it.
    pub fn resolve(&self, specifier: &str, importing_dir: &Path) -> PathBuf {
        let path = if specifier.starts_with("./") || specifier.starts_with("../") {
            normalize_path(&importing_dir.join(specifier))
        } else {
            PathBuf::from(specifier)
        };

        let suffix = format!(".{}", self.ext);
        if path.as_os_str().to_string_lossy().ends_with(&suffix) {
            path
        } else {
            let mut os = path.into_os_string();
            os.push(&suffix);
            PathBuf::from(os)
        }
    }
}

/// Lexically normalize a path: drop `.` segments, fold `..` into the
/// preceding segment, collapse redundant separators. Never touches the
/// filesystem, so the result is deterministic for nonexistent paths too.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                // Leading `..` segments in a relative path are kept
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}
