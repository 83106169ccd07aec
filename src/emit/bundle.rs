//! Bundle concatenation.

use crate::types::BundledModule;

/// Concatenate the result sequence into the final bundle text.
///
/// Each module contributes a provenance marker line naming its identity,
/// followed by its stripped body ending in a newline. Pure and
/// deterministic; no filtering or further transformation happens here.
pub fn emit_bundle(modules: &[BundledModule]) -> String {
    let mut output = String::new();

    for module in modules {
        output.push_str(&format!("// ---- File: {} ----\n", module.path.display()));
        output.push_str(&module.stripped);
        if !module.stripped.ends_with('\n') {
            output.push('\n');
        }
    }

    output
}
