mod bundle;
pub mod json;

pub use bundle::emit_bundle;
pub use json::JsonReport;
