mod imports;
mod strip;

pub use imports::extract_imports;
pub use strip::strip_module_syntax;
