mod specifier;

pub use specifier::{normalize_path, SpecifierResolver};
