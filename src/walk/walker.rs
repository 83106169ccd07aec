//! Dependency graph traversal.
//!
//! Depth-first walk over the import graph with a cycle guard: each module
//! descends into its dependencies before its own body is appended, so the
//! result sequence is emitted dependencies-first. Traversal state (the
//! done and in-progress sets) is owned by one walker per run and persists
//! across multiple entry points within that run.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::resolve::{normalize_path, SpecifierResolver};
use crate::syntax::{extract_imports, strip_module_syntax};
use crate::types::{BundledModule, Diagnostic};
use crate::walk::ModuleReader;

/// Import chains deeper than this abort the run. Real dependency graphs
/// stay far below it; hitting the ceiling means a runaway import chain.
pub const MAX_DEPTH: usize = 256;

/// Unrecoverable traversal failures. Missing modules and cycles are not
/// errors; they become [`Diagnostic`]s and the walk continues.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("maximum import depth ({limit}) exceeded at {}", .path.display())]
    DepthExceeded { path: PathBuf, limit: usize },
}

/// Walks the import graph from one or more entry modules, producing the
/// emission-ordered sequence of stripped module bodies.
pub struct DependencyWalker<'a> {
    reader: &'a dyn ModuleReader,
    resolver: SpecifierResolver,
    /// Modules whose bodies are already in `modules`
    done: HashSet<PathBuf>,
    /// Modules currently being resolved, for cycle detection
    in_progress: HashSet<PathBuf>,
    modules: Vec<BundledModule>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> DependencyWalker<'a> {
    pub fn new(reader: &'a dyn ModuleReader, resolver: SpecifierResolver) -> Self {
        Self {
            reader,
            resolver,
            done: HashSet::new(),
            in_progress: HashSet::new(),
            modules: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Walk the graph reachable from `entry`, appending to the result
    /// sequence. May be called once per entry point; the done set spans
    /// the whole run, so modules shared between entries are emitted once.
    pub fn walk(&mut self, entry: &Path) -> Result<(), WalkError> {
        let entry = normalize_path(entry);
        self.visit(&entry, None, 0)
    }

    /// Modules emitted so far, in dependency-first order.
    pub fn modules(&self) -> &[BundledModule] {
        &self.modules
    }

    /// Recoverable conditions encountered so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consume the walker, yielding the result sequence and diagnostics.
    pub fn into_parts(self) -> (Vec<BundledModule>, Vec<Diagnostic>) {
        (self.modules, self.diagnostics)
    }

    fn visit(
        &mut self,
        path: &Path,
        imported_from: Option<&Path>,
        depth: usize,
    ) -> Result<(), WalkError> {
        if depth > MAX_DEPTH {
            return Err(WalkError::DepthExceeded {
                path: path.to_path_buf(),
                limit: MAX_DEPTH,
            });
        }

        // Already emitted via some earlier path: nothing to do.
        if self.done.contains(path) {
            return Ok(());
        }

        // Still being resolved further up the call chain: a cycle. Record
        // it and do not descend again; the module may still be emitted
        // later along a different path, or not at all.
        if self.in_progress.contains(path) {
            self.diagnostics.push(Diagnostic::CycleDetected {
                path: path.to_path_buf(),
                imported_from: imported_from.map(Path::to_path_buf),
            });
            return Ok(());
        }

        let source = match self.reader.read(path) {
            Ok(source) => source,
            Err(_) => {
                // Failure is local to this identity; siblings continue.
                self.diagnostics.push(Diagnostic::MissingModule {
                    path: path.to_path_buf(),
                    imported_from: imported_from.map(Path::to_path_buf),
                });
                return Ok(());
            }
        };

        self.in_progress.insert(path.to_path_buf());

        let importing_dir = path.parent().unwrap_or_else(|| Path::new(""));
        let dependencies: Vec<PathBuf> = extract_imports(&source)
            .iter()
            .map(|specifier| self.resolver.resolve(specifier, importing_dir))
            .collect();

        // Source order governs ordering among independent subtrees.
        for dependency in &dependencies {
            self.visit(dependency, Some(path), depth + 1)?;
        }

        self.modules.push(BundledModule {
            path: path.to_path_buf(),
            stripped: strip_module_syntax(&source),
        });
        self.in_progress.remove(path);
        self.done.insert(path.to_path_buf());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io;

    struct MemoryReader(HashMap<PathBuf, String>);

    impl MemoryReader {
        fn new(modules: &[(&str, &str)]) -> Self {
            Self(
                modules
                    .iter()
                    .map(|(path, source)| (PathBuf::from(path), source.to_string()))
                    .collect(),
            )
        }
    }

    impl ModuleReader for MemoryReader {
        fn read(&self, path: &Path) -> io::Result<String> {
            self.0
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such module"))
        }
    }

    fn walk_all(reader: &MemoryReader, entry: &str) -> (Vec<BundledModule>, Vec<Diagnostic>) {
        let mut walker = DependencyWalker::new(reader, SpecifierResolver::default());
        walker.walk(Path::new(entry)).unwrap();
        walker.into_parts()
    }

    fn position(modules: &[BundledModule], path: &str) -> usize {
        modules
            .iter()
            .position(|m| m.path == PathBuf::from(path))
            .unwrap_or_else(|| panic!("{} not emitted", path))
    }

    #[test]
    fn test_single_module() {
        let reader = MemoryReader::new(&[("src/index.js", "const x = 1;\n")]);
        let (modules, diagnostics) = walk_all(&reader, "src/index.js");

        assert_eq!(modules.len(), 1);
        assert_eq!(modules[0].path, PathBuf::from("src/index.js"));
        assert_eq!(modules[0].stripped, "const x = 1;\n");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_dependency_emitted_before_dependent() {
        let reader = MemoryReader::new(&[
            (
                "src/index.js",
                "import { helper } from \"./util\";\nhelper();\n",
            ),
            ("src/util.js", "export function helper() {}\n"),
        ]);
        let (modules, diagnostics) = walk_all(&reader, "src/index.js");

        assert_eq!(modules.len(), 2);
        assert!(position(&modules, "src/util.js") < position(&modules, "src/index.js"));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_diamond_emits_each_module_once() {
        let reader = MemoryReader::new(&[
            (
                "src/index.js",
                "import \"./a\";\nimport \"./b\";\nmain();\n",
            ),
            ("src/a.js", "import { s } from \"./shared\";\n"),
            ("src/b.js", "import { s } from \"./shared\";\n"),
            ("src/shared.js", "export const s = 1;\n"),
        ]);
        let (modules, diagnostics) = walk_all(&reader, "src/index.js");

        assert_eq!(modules.len(), 4);
        let shared = position(&modules, "src/shared.js");
        assert!(shared < position(&modules, "src/a.js"));
        assert!(shared < position(&modules, "src/b.js"));
        assert_eq!(position(&modules, "src/index.js"), 3);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_import_order_governs_sibling_order() {
        let reader = MemoryReader::new(&[
            (
                "src/index.js",
                "import \"./second\";\nimport \"./first\";\n",
            ),
            ("src/second.js", "two();\n"),
            ("src/first.js", "one();\n"),
        ]);
        let (modules, _) = walk_all(&reader, "src/index.js");

        assert!(position(&modules, "src/second.js") < position(&modules, "src/first.js"));
    }

    #[test]
    fn test_cycle_terminates_with_single_diagnostic() {
        let reader = MemoryReader::new(&[
            ("src/a.js", "import \"./b\";\nexport const a = 1;\n"),
            ("src/b.js", "import \"./a\";\nexport const b = 2;\n"),
        ]);
        let (modules, diagnostics) = walk_all(&reader, "src/a.js");

        assert_eq!(modules.len(), 2);
        assert!(position(&modules, "src/b.js") < position(&modules, "src/a.js"));
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].is_cycle());
        assert_eq!(diagnostics[0].path(), Path::new("src/a.js"));
    }

    #[test]
    fn test_missing_module_is_recoverable() {
        let reader = MemoryReader::new(&[(
            "src/index.js",
            "import \"./missing\";\nimport \"./real\";\nmain();\n",
        ), ("src/real.js", "real();\n")]);
        let (modules, diagnostics) = walk_all(&reader, "src/index.js");

        // The missing subtree is skipped; the sibling and the importer
        // are still emitted.
        assert_eq!(modules.len(), 2);
        assert!(position(&modules, "src/real.js") < position(&modules, "src/index.js"));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind(), "missing-module");
        assert_eq!(diagnostics[0].path(), Path::new("src/missing.js"));
        assert_eq!(
            diagnostics[0].imported_from(),
            Some(Path::new("src/index.js"))
        );
    }

    #[test]
    fn test_missing_entry_is_recoverable() {
        let reader = MemoryReader::new(&[]);
        let (modules, diagnostics) = walk_all(&reader, "src/index.js");

        assert!(modules.is_empty());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind(), "missing-module");
        assert_eq!(diagnostics[0].imported_from(), None);
    }

    #[test]
    fn test_done_set_spans_multiple_entries() {
        let reader = MemoryReader::new(&[
            ("src/a.js", "import { s } from \"./shared\";\n"),
            ("src/b.js", "import { s } from \"./shared\";\n"),
            ("src/shared.js", "export const s = 1;\n"),
        ]);
        let mut walker = DependencyWalker::new(&reader, SpecifierResolver::default());
        walker.walk(Path::new("src/a.js")).unwrap();
        walker.walk(Path::new("src/b.js")).unwrap();
        let (modules, diagnostics) = walker.into_parts();

        assert_eq!(modules.len(), 3);
        assert_eq!(
            modules
                .iter()
                .filter(|m| m.path == PathBuf::from("src/shared.js"))
                .count(),
            1
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_already_walked_entry_is_a_no_op() {
        let reader = MemoryReader::new(&[("src/a.js", "const a = 1;\n")]);
        let mut walker = DependencyWalker::new(&reader, SpecifierResolver::default());
        walker.walk(Path::new("src/a.js")).unwrap();
        walker.walk(Path::new("src/a.js")).unwrap();
        let (modules, diagnostics) = walker.into_parts();

        assert_eq!(modules.len(), 1);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_depth_ceiling_aborts() {
        // m0 -> m1 -> ... -> m299, deeper than MAX_DEPTH
        let sources: Vec<(String, String)> = (0..300)
            .map(|i| {
                let body = if i < 299 {
                    format!("import \"./m{}\";\n", i + 1)
                } else {
                    "const end = true;\n".to_string()
                };
                (format!("src/m{}.js", i), body)
            })
            .collect();
        let reader = MemoryReader(
            sources
                .into_iter()
                .map(|(p, s)| (PathBuf::from(p), s))
                .collect(),
        );

        let mut walker = DependencyWalker::new(&reader, SpecifierResolver::default());
        let result = walker.walk(Path::new("src/m0.js"));
        assert!(matches!(result, Err(WalkError::DepthExceeded { .. })));
    }
}
