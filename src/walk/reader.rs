use std::fs;
use std::io;
use std::path::Path;

/// Read collaborator for the dependency walker.
///
/// A missing module is a recoverable condition at the walker level, so
/// the contract is an `io::Result` rather than a hard failure.
pub trait ModuleReader {
    fn read(&self, path: &Path) -> io::Result<String>;
}

/// Reads module text from the local filesystem.
pub struct FsReader;

impl ModuleReader for FsReader {
    fn read(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}
