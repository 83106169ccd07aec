//! Import specifier extraction.
//!
//! Finds every import declaration in a module's raw text and returns the
//! quoted specifiers in source order. That order drives traversal, so it
//! determines the final ordering among independent subtrees.

use once_cell::sync::Lazy;
use regex::Regex;

// Matches every import form at the start of a line and captures the source
// clause: `import x from "m"`, `import { a, b } from "m"` (brace list may
// span lines), `import * as ns from "m"`, and the bare `import "m"`.
// Line-anchored, so imports inside string literals or comments that happen
// to start a line are still matched; this is a known text-level limitation.
static IMPORT_SPECIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^[ \t]*import\s+(?:[^;'"]*?from\s*)?["']([^"']+)["']"#).unwrap()
});

/// Extract raw import specifiers from module text, in source order.
pub fn extract_imports(content: &str) -> Vec<String> {
    IMPORT_SPECIFIER
        .captures_iter(content)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
        .collect()
}
