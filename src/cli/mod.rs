mod args;
mod bundle;

pub use args::Args;
pub use bundle::run_bundle;
