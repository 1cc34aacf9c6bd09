//! Run statistics and console reporting.
//!
//! The reporter owns all console output of a run: the startup banner,
//! per-document notices, and the closing tally. Informational lines go to
//! stdout, failure notices to stderr. In JSON mode the human-oriented lines
//! are suppressed so stdout carries exactly one JSON document.

pub mod json;

use std::path::Path;

use serde::Serialize;

use crate::fixer::FixConfig;
use crate::workspace::Workspace;

/// Counters accumulated across a whole run.
///
/// Increment-only while the pipeline runs; read once at the end for the
/// summary. In dry-run mode `files_fixed` counts the files that *would*
/// change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStatistics {
    /// Documents considered, including ones that failed to parse.
    pub files_processed: usize,
    /// Documents whose tree changed (and were written, unless dry-run).
    pub files_fixed: usize,
    /// Documents skipped because they were unreadable or invalid C#.
    pub parse_failures: usize,
    /// Rewrites that could not be persisted.
    pub write_failures: usize,
}

impl RunStatistics {
    /// True when any per-document failure occurred.
    pub fn has_failures(&self) -> bool {
        self.parse_failures > 0 || self.write_failures > 0
    }
}

/// Console sink for progress and summary output.
pub struct Reporter {
    verbose: bool,
    dry_run: bool,
    json: bool,
}

impl Reporter {
    pub fn new(verbose: bool, dry_run: bool, json: bool) -> Self {
        Self {
            verbose,
            dry_run,
            json,
        }
    }

    fn info(&self, line: &str) {
        if !self.json {
            println!("{line}");
        }
    }

    /// Startup banner: what will run, against what, in which mode.
    pub fn banner(&self, config: &FixConfig) {
        self.info("csfix starting...");
        self.info(&format!("  Project: {}", config.root.display()));
        self.info(&format!("  Fix usings: {}", config.fix_usings));
        self.info(&format!("  Dry run: {}", config.dry_run));
        self.info("");
    }

    /// Non-fatal notice; stderr, so JSON stdout stays clean.
    pub fn warning(&self, message: &str) {
        eprintln!("  ⚠ {message}");
    }

    /// Reports the resolved workspace and the project about to be processed.
    pub fn workspace_loaded(&self, workspace: &Workspace) {
        for warning in &workspace.warnings {
            self.warning(warning);
        }
        self.info(&format!("  Target: {}", workspace.target.display()));
        let project = workspace.primary_project();
        self.info(&format!(
            "  Project loaded: {} ({} documents)",
            project.name,
            project.documents.len()
        ));
        self.info("");
    }

    /// Notes solution projects beyond the first, which this run ignores.
    pub fn skipped_projects(&self, count: usize) {
        self.info(&format!(
            "  Note: solution has {count} more project(s); only the first is processed. \
             Run once per project for full coverage."
        ));
    }

    /// Per-file change notice, verbose mode only.
    pub fn document_fixed(&self, path: &Path) {
        if self.verbose && !self.json {
            let verb = if self.dry_run { "Would fix" } else { "Fixed" };
            println!("  ✓ {verb}: {}", file_name(path));
        }
    }

    /// A document that could not be read or parsed. Always reported;
    /// the run continues.
    pub fn document_failure(&self, path: &Path, detail: &str) {
        if self.verbose {
            eprintln!("  ⚠ Skipped {}: {detail}", path.display());
        } else {
            eprintln!("  ⚠ Skipped {}", file_name(path));
        }
    }

    /// A rewrite that could not be written back.
    pub fn write_failure(&self, path: &Path, detail: &str) {
        eprintln!("  ⚠ Failed to write {}: {detail}", path.display());
    }

    /// Final tally. Always emitted, even after per-document failures.
    pub fn summary(&self, stats: &RunStatistics) {
        if self.json {
            println!("{}", json::render(stats, self.dry_run));
            return;
        }

        println!();
        println!("✓ Processing complete");
        println!("  Files processed: {}", stats.files_processed);
        println!("  Files fixed: {}", stats.files_fixed);
        if stats.parse_failures > 0 {
            println!("  Files skipped (parse errors): {}", stats.parse_failures);
        }
        if stats.write_failures > 0 {
            println!("  Files not written (write errors): {}", stats.write_failures);
        }
        if self.dry_run && stats.files_fixed > 0 {
            println!();
            println!("  (Dry run - no files were modified)");
        }
    }
}

/// Short display name for per-file notices.
fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
