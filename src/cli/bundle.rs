use anyhow::{bail, Context, Result};
use console::{style, Emoji};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::Args;
use crate::emit::{emit_bundle, JsonReport};
use crate::resolve::{normalize_path, SpecifierResolver};
use crate::scan::scan_directory;
use crate::walk::{DependencyWalker, FsReader};

static BUNDLING: Emoji<'_, '_> = Emoji("📦 ", "");
static SUCCESS: Emoji<'_, '_> = Emoji("✅ ", "");
static WARNING: Emoji<'_, '_> = Emoji("⚠️  ", "");
static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "");

pub fn run_bundle(args: &Args) -> Result<()> {
    let root = match args.input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !root.is_dir() {
        bail!("invalid root directory: {}", root.display());
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(format!("{}Bundling {}...", BUNDLING, args.input.display()));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let reader = FsReader;
    let mut walker = DependencyWalker::new(&reader, SpecifierResolver::new(&args.ext));
    let walked = walker.walk(&args.input);
    pb.finish_and_clear();
    walked?;

    let (modules, diagnostics) = walker.into_parts();

    if args.verbose {
        for module in &modules {
            println!("Processed: {}", module.path.display());
        }
    }
    for diagnostic in &diagnostics {
        println!("{}{}", WARNING, style(diagnostic).yellow());
    }

    let bundle = emit_bundle(&modules);
    fs::write(&args.output, &bundle)
        .with_context(|| format!("failed to write bundle to {}", args.output.display()))?;

    if let Some(json_path) = &args.json {
        let report = JsonReport::new(&[args.input.as_path()], &modules, &diagnostics, bundle.len());
        fs::write(json_path, report.to_json())
            .with_context(|| format!("failed to write report to {}", json_path.display()))?;
    }

    println!(
        "\n{}Bundled {} modules into {}",
        SUCCESS,
        style(modules.len()).green(),
        style(args.output.display()).cyan()
    );
    if !diagnostics.is_empty() {
        println!(
            "  Warnings:        {}",
            style(diagnostics.len()).yellow()
        );
    }

    if args.verbose {
        let candidates = scan_directory(root, &args.ext);
        let bundled: HashSet<PathBuf> = modules.iter().map(|m| m.path.clone()).collect();
        let reached = candidates
            .iter()
            .filter(|p| bundled.contains(&normalize_path(p)))
            .count();
        println!(
            "\n{}Coverage: {} of {} candidate modules under {} reached from the entry point",
            INFO,
            reached,
            candidates.len(),
            root.display()
        );
    }

    Ok(())
}
