//! Machine-readable bundle report (`--json`).

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

use crate::types::{BundledModule, Diagnostic};

#[derive(Serialize)]
pub struct JsonReport {
    pub version: String,
    pub generated_at: DateTime<Utc>,
    pub entry_points: Vec<String>,
    pub modules: Vec<ModuleEntry>,
    pub diagnostics: Vec<DiagnosticEntry>,
    pub stats: BundleStats,
}

#[derive(Serialize)]
pub struct ModuleEntry {
    pub order: usize,
    pub path: String,
    pub bytes: usize,
}

#[derive(Serialize)]
pub struct DiagnosticEntry {
    pub kind: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imported_from: Option<String>,
}

#[derive(Serialize)]
pub struct BundleStats {
    pub modules_emitted: usize,
    pub missing_modules: usize,
    pub cycles_detected: usize,
    pub output_bytes: usize,
}

impl JsonReport {
    pub fn new(
        entry_points: &[&Path],
        modules: &[BundledModule],
        diagnostics: &[Diagnostic],
        output_bytes: usize,
    ) -> Self {
        let module_entries = modules
            .iter()
            .enumerate()
            .map(|(order, m)| ModuleEntry {
                order,
                path: m.path.display().to_string(),
                bytes: m.stripped.len(),
            })
            .collect();

        let diagnostic_entries = diagnostics
            .iter()
            .map(|d| DiagnosticEntry {
                kind: d.kind().to_string(),
                path: d.path().display().to_string(),
                imported_from: d.imported_from().map(|p| p.display().to_string()),
            })
            .collect();

        let cycles_detected = diagnostics.iter().filter(|d| d.is_cycle()).count();

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
            entry_points: entry_points
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            modules: module_entries,
            diagnostics: diagnostic_entries,
            stats: BundleStats {
                modules_emitted: modules.len(),
                missing_modules: diagnostics.len() - cycles_detected,
                cycles_detected,
                output_bytes,
            },
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
