//! jsmerge bundles ESM JavaScript modules into a single file.
//!
//! Starting from an entry module, it resolves the import graph, orders
//! modules so every dependency is emitted before its dependents, strips
//! import/export syntax, and concatenates the stripped bodies with a
//! provenance marker per module.

pub mod cli;
pub mod emit;
pub mod resolve;
pub mod scan;
pub mod syntax;
pub mod types;
pub mod walk;
