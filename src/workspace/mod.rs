//! Workspace loading for csfix.
//!
//! A workspace is the loaded representation of a C# project or solution:
//! the description file that was found, the projects it expands to, and the
//! source documents each project owns.
//!
//! # Locating the workspace
//!
//! Given a root path, the loader tries, in order:
//!
//! 1. the path itself, if it already names a `.csproj` or `.sln` file
//! 2. a `.sln` file directly in the given directory
//! 3. a `.csproj` file directly in the given directory
//! 4. a `.csproj` anywhere below the given directory (recursive search)
//!
//! Each tier is deterministic: directory entries are considered in
//! lexicographic order and the first match wins. If no tier matches the run
//! fails before any document is touched.

pub mod project;
pub mod solution;

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

pub use project::Project;

/// Errors that can occur while locating or loading a workspace.
///
/// All of these are fatal: a run that cannot open its workspace performs no
/// file writes.
#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    /// No `.csproj` or `.sln` file could be located from the root path.
    #[error("no .csproj or .sln file found under {0}")]
    NoWorkspaceFound(PathBuf),

    /// A project or solution file was found but could not be loaded.
    #[error("failed to load {path}: {reason}")]
    LoadFailure { path: PathBuf, reason: String },

    /// Underlying filesystem error while reading a description file.
    #[error("failed to read workspace file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for workspace operations.
pub type WorkspaceResult<T> = Result<T, WorkspaceError>;

/// The loaded representation of a project or solution.
#[derive(Debug)]
pub struct Workspace {
    /// The project or solution file the loader settled on.
    pub target: PathBuf,
    /// Projects in declaration order. A `.csproj` target yields exactly one.
    pub projects: Vec<Project>,
    /// Non-fatal notices collected during load (e.g. solution entries whose
    /// project file is missing). The reporter decides how to surface them.
    pub warnings: Vec<String>,
}

impl Workspace {
    /// Locates and loads the workspace for `root`.
    ///
    /// `root` may name a `.csproj`/`.sln` file directly or a directory to
    /// search. Solutions expand to their full project list; entries whose
    /// project file is missing on disk are skipped with a warning.
    pub fn load(root: &Path) -> WorkspaceResult<Self> {
        let target = find_workspace_file(root)?;
        let mut warnings = Vec::new();

        let projects = if has_extension(&target, "sln") {
            let entries = solution::parse_file(&target)?;
            let mut projects = Vec::new();
            for entry in entries {
                match Project::load(&entry.path) {
                    Ok(project) => projects.push(project),
                    Err(e) => {
                        warnings.push(format!(
                            "skipping solution project {}: {}",
                            entry.path.display(),
                            e
                        ));
                    }
                }
            }
            if projects.is_empty() {
                return Err(WorkspaceError::LoadFailure {
                    path: target,
                    reason: "solution contains no loadable C# projects".to_string(),
                });
            }
            projects
        } else {
            vec![Project::load(&target)?]
        };

        Ok(Self {
            target,
            projects,
            warnings,
        })
    }

    /// The project this run will process.
    ///
    /// Only the first project of a solution is handled; callers needing
    /// multi-project coverage run the tool once per project.
    pub fn primary_project(&self) -> &Project {
        &self.projects[0]
    }
}

/// Resolves the project/solution file to load for `root`.
///
/// See the module docs for the search cascade. Returns
/// [`WorkspaceError::NoWorkspaceFound`] when nothing matches.
pub fn find_workspace_file(root: &Path) -> WorkspaceResult<PathBuf> {
    if root.is_file() && (has_extension(root, "csproj") || has_extension(root, "sln")) {
        return Ok(root.to_path_buf());
    }

    if root.is_dir() {
        if let Some(sln) = first_in_dir(root, "sln")? {
            return Ok(sln);
        }
        if let Some(csproj) = first_in_dir(root, "csproj")? {
            return Ok(csproj);
        }
        if let Some(csproj) = first_recursive(root, "csproj") {
            return Ok(csproj);
        }
    }

    Err(WorkspaceError::NoWorkspaceFound(root.to_path_buf()))
}

/// First file with the given extension directly inside `dir`,
/// in lexicographic order.
fn first_in_dir(dir: &Path, ext: &str) -> WorkspaceResult<Option<PathBuf>> {
    let mut matches: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && has_extension(p, ext))
        .collect();
    matches.sort();
    Ok(matches.into_iter().next())
}

/// First file with the given extension anywhere below `dir`,
/// in lexicographic walk order.
fn first_recursive(dir: &Path, ext: &str) -> Option<PathBuf> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_ignored_dir(e))
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .find(|p| p.is_file() && has_extension(p, ext))
}

/// Directories never worth descending into when searching for sources
/// or project files.
pub(crate) fn is_ignored_dir(entry: &walkdir::DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }

    let name = entry.file_name().to_string_lossy();
    matches!(name.as_ref(), "bin" | "obj" | ".git" | ".vs")
}

/// Case-insensitive extension check.
fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}
