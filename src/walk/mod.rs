mod reader;
mod walker;

pub use reader::{FsReader, ModuleReader};
pub use walker::{DependencyWalker, WalkError, MAX_DEPTH};
