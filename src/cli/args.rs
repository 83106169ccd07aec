use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "jsmerge",
    version,
    about = "Bundle ESM JavaScript modules into a single file by resolving the import graph"
)]
pub struct Args {
    /// Entry module path
    #[arg(default_value = "src/index.js")]
    pub input: PathBuf,

    /// Output bundle path (overwritten if it exists)
    #[arg(default_value = "bundle.js")]
    pub output: PathBuf,

    /// Module file extension (without the dot)
    #[arg(long, default_value = "js")]
    pub ext: String,

    /// Write a machine-readable bundle report to this path
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Per-module progress and a coverage report
    #[arg(short, long)]
    pub verbose: bool,
}
