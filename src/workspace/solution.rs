//! Minimal `.sln` file parsing.
//!
//! Solution files are line-oriented: each project is declared by a line of
//! the form
//!
//! ```text
//! Project("{TYPE-GUID}") = "Name", "Relative\Path\To.csproj", "{PROJECT-GUID}"
//! ```
//!
//! Only the name and path are needed here; everything else in the file
//! (configurations, nesting, global sections) is ignored. No MSBuild
//! evaluation takes place.

use std::path::{Path, PathBuf};

use super::{WorkspaceError, WorkspaceResult};

/// One project declaration from a solution file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionEntry {
    /// The project name as declared in the solution.
    pub name: String,
    /// Absolute path to the project file.
    pub path: PathBuf,
}

/// Parses the solution file at `path`, returning its C# project entries
/// in declaration order.
pub fn parse_file(path: &Path) -> WorkspaceResult<Vec<SolutionEntry>> {
    let content = std::fs::read_to_string(path)?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    let entries = parse_str(&content, base);
    if entries.is_empty() {
        return Err(WorkspaceError::LoadFailure {
            path: path.to_path_buf(),
            reason: "no project declarations found in solution".to_string(),
        });
    }
    Ok(entries)
}

/// Parses solution text, resolving project paths against `base`.
///
/// Entries that do not reference a `.csproj` file (solution folders,
/// other project types) are dropped.
pub fn parse_str(content: &str, base: &Path) -> Vec<SolutionEntry> {
    content
        .lines()
        .filter_map(parse_project_line)
        .filter(|(_, rel)| rel.to_ascii_lowercase().ends_with(".csproj"))
        .map(|(name, rel)| SolutionEntry {
            name,
            path: base.join(normalize_separators(&rel)),
        })
        .collect()
}

/// Extracts `(name, relative path)` from a single `Project(...) = ...` line.
fn parse_project_line(line: &str) -> Option<(String, String)> {
    let line = line.trim_start();
    if !line.starts_with("Project(") {
        return None;
    }

    let rhs = line.split_once('=')?.1;
    let mut fields = rhs.split(',').map(unquote);
    let name = fields.next()?;
    let rel = fields.next()?;
    if name.is_empty() || rel.is_empty() {
        return None;
    }
    Some((name, rel))
}

/// Strips surrounding whitespace and double quotes from a solution field.
fn unquote(field: &str) -> String {
    field.trim().trim_matches('"').to_string()
}

/// Solution files use Windows separators regardless of host platform.
fn normalize_separators(rel: &str) -> PathBuf {
    rel.split('\\').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_SLN: &str = concat!(
        "Microsoft Visual Studio Solution File, Format Version 12.00\n",
        "# Visual Studio Version 17\n",
        "Project(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"Api\", \"src\\Api\\Api.csproj\", \"{0A1B2C3D-0000-0000-0000-000000000001}\"\n",
        "EndProject\n",
        "Project(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"Core\", \"src\\Core\\Core.csproj\", \"{0A1B2C3D-0000-0000-0000-000000000002}\"\n",
        "EndProject\n",
        "Project(\"{2150E333-8FDC-42A3-9474-1A3956D46DE8}\") = \"docs\", \"docs\", \"{0A1B2C3D-0000-0000-0000-000000000003}\"\n",
        "EndProject\n",
        "Global\n",
        "EndGlobal\n",
    );

    #[test]
    fn test_parses_projects_in_order() {
        let entries = parse_str(SAMPLE_SLN, Path::new("/repo"));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Api");
        assert_eq!(entries[1].name, "Core");
    }

    #[test]
    fn test_normalizes_windows_separators() {
        let entries = parse_str(SAMPLE_SLN, Path::new("/repo"));
        assert_eq!(entries[0].path, Path::new("/repo/src/Api/Api.csproj"));
    }

    #[test]
    fn test_skips_solution_folders() {
        let entries = parse_str(SAMPLE_SLN, Path::new("/repo"));
        assert!(entries.iter().all(|e| e.name != "docs"));
    }

    #[test]
    fn test_empty_solution_yields_no_entries() {
        let entries = parse_str("Global\nEndGlobal\n", Path::new("."));
        assert!(entries.is_empty());
    }

    #[test]
    fn test_ignores_malformed_project_lines() {
        let entries = parse_str("Project(\"{X}\") garbage without equals\n", Path::new("."));
        assert!(entries.is_empty());
    }
}
