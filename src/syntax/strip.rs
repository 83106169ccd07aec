//! Module-boundary syntax removal.
//!
//! Deletes import declarations and unwraps export modifiers so the
//! remaining text can be concatenated into one scope. This is a
//! text-level transform: it does not parse or validate the result, and
//! matching inside string literals or comments is a known open gap.
//! Removal deletes the declaration including its `;` terminator but
//! leaves the surrounding text (including the trailing newline) intact.

use once_cell::sync::Lazy;
use regex::Regex;

// import foo from "./m";  /  import foo, { a } from "./m";  /
// import foo, * as ns from "./m";
static DEFAULT_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?m)^[ \t]*import[ \t]+[A-Za-z_$][\w$]*[ \t]*(?:,[ \t]*(?:\{[^}]*\}|\*[ \t]*as[ \t]+[A-Za-z_$][\w$]*))?[ \t]*from[ \t]*["'][^"']*["'][ \t]*;?"#,
    )
    .unwrap()
});

// import { a, b } from "./m";  -- the brace list may span multiple lines
static NAMED_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^[ \t]*import[ \t]*\{[^}]*\}\s*from[ \t]*["'][^"']*["'][ \t]*;?"#).unwrap()
});

// import * as ns from "./m";
static NAMESPACE_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?m)^[ \t]*import[ \t]+\*[ \t]*as[ \t]+[A-Za-z_$][\w$]*[ \t]+from[ \t]*["'][^"']*["'][ \t]*;?"#,
    )
    .unwrap()
});

// import "./m";
static SIDE_EFFECT_IMPORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?m)^[ \t]*import[ \t]*["'][^"']*["'][ \t]*;?"#).unwrap());

// export default <expression or declaration>
static EXPORT_DEFAULT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^([ \t]*)export[ \t]+default\b[ \t]*").unwrap());

// export <declaration> -- the declaration itself is kept
static EXPORT_DECL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^([ \t]*)export[ \t]+((?:async[ \t]+)?(?:const|let|var|function|class)\b)")
        .unwrap()
});

/// Remove import declarations and unwrap export modifiers.
///
/// Idempotent: once stripped, no import/export tokens remain for the
/// patterns to match, so a second pass is a no-op.
pub fn strip_module_syntax(content: &str) -> String {
    let stripped = NAMED_IMPORT.replace_all(content, "");
    let stripped = NAMESPACE_IMPORT.replace_all(&stripped, "");
    let stripped = DEFAULT_IMPORT.replace_all(&stripped, "");
    let stripped = SIDE_EFFECT_IMPORT.replace_all(&stripped, "");
    let stripped = EXPORT_DEFAULT.replace_all(&stripped, "${1}");
    let stripped = EXPORT_DECL.replace_all(&stripped, "${1}${2}");
    stripped.into_owned()
}
