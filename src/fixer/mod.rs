//! The fixer pipeline: orchestrates parse → analyze → rewrite → persist
//! for every document in the selected project.
//!
//! Each document moves through `Loaded → Parsed → Analyzed →
//! (Unchanged | Rewritten) → (Persisted | Reported-only)`; parse and write
//! failures are terminal per-document states that never abort the batch.
//! Only a workspace-level failure is fatal, and it happens before any
//! document is touched.
//!
//! Documents are processed strictly one at a time, in enumeration order.

pub mod format;
pub mod rewrite;

use std::path::PathBuf;

use crate::analysis::{self, SemanticModel};
use crate::parser::{CSharpParser, Document};
use crate::report::{Reporter, RunStatistics};
use crate::workspace::{Workspace, WorkspaceError};

/// Run configuration, assembled from the CLI surface.
///
/// There is no ambient state: everything the pipeline needs travels in
/// here, and [`run`] can be called from tests with a synthetic config.
#[derive(Debug, Clone)]
pub struct FixConfig {
    /// Project/solution file, or directory to search for one.
    pub root: PathBuf,
    /// When false, the whole removal pass is skipped and every document
    /// reports unchanged.
    pub fix_usings: bool,
    /// Compute and report changes without writing any file.
    pub dry_run: bool,
    /// Per-file change notices and failure detail.
    pub verbose: bool,
    /// Emit the final summary as JSON instead of text.
    pub json: bool,
}

impl Default for FixConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            fix_usings: true,
            dry_run: false,
            verbose: false,
            json: false,
        }
    }
}

/// Terminal state of one document's trip through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentOutcome {
    /// No unused directives; nothing written.
    Unchanged,
    /// Rewritten and persisted.
    Fixed,
    /// Rewritten but not persisted (dry-run).
    WouldFix,
    /// Rewritten but the write failed; original file intact.
    WriteFailed,
}

/// A document after the load/parse phase.
enum DocumentSlot {
    Parsed(Document),
    /// Unreadable or syntactically invalid; counted as processed, never
    /// changed.
    Failed,
}

/// Runs the whole pipeline for `config`, returning the final statistics.
///
/// Fatal errors ([`WorkspaceError`]) mean no document was modified. All
/// per-document failures are absorbed into the statistics instead.
pub fn run(config: &FixConfig) -> Result<RunStatistics, WorkspaceError> {
    let reporter = Reporter::new(config.verbose, config.dry_run, config.json);
    reporter.banner(config);

    let workspace = Workspace::load(&config.root)?;
    reporter.workspace_loaded(&workspace);
    if workspace.projects.len() > 1 {
        reporter.skipped_projects(workspace.projects.len() - 1);
    }
    let project = workspace.primary_project();

    let mut parser = CSharpParser::new().map_err(|e| WorkspaceError::LoadFailure {
        path: workspace.target.clone(),
        reason: e.to_string(),
    })?;

    // Phase one: load and parse everything, so the semantic model sees the
    // whole project before any document is judged.
    let mut slots: Vec<DocumentSlot> = Vec::with_capacity(project.documents.len());
    for path in &project.documents {
        let slot = match Document::load(path) {
            Ok(mut doc) => match doc.parse(&mut parser) {
                Ok(()) => DocumentSlot::Parsed(doc),
                Err(e) => {
                    reporter.document_failure(path, &e.to_string());
                    DocumentSlot::Failed
                }
            },
            Err(e) => {
                reporter.document_failure(path, &e.to_string());
                DocumentSlot::Failed
            }
        };
        slots.push(slot);
    }

    let model = SemanticModel::build(slots.iter().filter_map(|s| match s {
        DocumentSlot::Parsed(doc) => Some(doc),
        DocumentSlot::Failed => None,
    }));

    // Phase two: fix documents one at a time.
    let mut stats = RunStatistics::default();
    for slot in &slots {
        stats.files_processed += 1;
        match slot {
            DocumentSlot::Failed => stats.parse_failures += 1,
            DocumentSlot::Parsed(doc) => {
                let outcome = process_document(doc, &model, config, &reporter);
                record_outcome(&mut stats, outcome);
            }
        }
    }

    reporter.summary(&stats);
    Ok(stats)
}

/// Folds one document's terminal state into the run counters.
fn record_outcome(stats: &mut RunStatistics, outcome: DocumentOutcome) {
    match outcome {
        DocumentOutcome::Unchanged => {}
        DocumentOutcome::Fixed | DocumentOutcome::WouldFix => stats.files_fixed += 1,
        DocumentOutcome::WriteFailed => stats.write_failures += 1,
    }
}

/// Analyzes one parsed document and persists the rewrite when applicable.
fn process_document(
    doc: &Document,
    model: &SemanticModel,
    config: &FixConfig,
    reporter: &Reporter,
) -> DocumentOutcome {
    if !config.fix_usings {
        return DocumentOutcome::Unchanged;
    }

    let unused = analysis::find_unused(doc, model);
    if unused.is_empty() {
        return DocumentOutcome::Unchanged;
    }

    let spans: Vec<(usize, usize)> = unused
        .iter()
        .map(|u| (u.start_byte, u.end_byte))
        .collect();
    let rewritten = format::normalize(&rewrite::remove_spans(doc.text(), &spans));
    if rewritten == doc.text() {
        return DocumentOutcome::Unchanged;
    }

    if config.dry_run {
        reporter.document_fixed(doc.path());
        return DocumentOutcome::WouldFix;
    }

    match std::fs::write(doc.path(), &rewritten) {
        Ok(()) => {
            reporter.document_fixed(doc.path());
            DocumentOutcome::Fixed
        }
        Err(e) => {
            reporter.write_failure(doc.path(), &e.to_string());
            DocumentOutcome::WriteFailed
        }
    }
}
