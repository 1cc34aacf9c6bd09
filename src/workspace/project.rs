//! Project loading and document enumeration.
//!
//! A project is one `.csproj` and the C# source documents that belong to it.
//! Documents are discovered SDK-style: every `.cs` file under the project
//! file's directory is an implicit compile item. The project file itself is
//! only sanity-checked, never evaluated as MSBuild.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{is_ignored_dir, WorkspaceError, WorkspaceResult};

/// A named unit owning an ordered set of source documents.
#[derive(Debug)]
pub struct Project {
    /// Project name, taken from the project file stem.
    pub name: String,
    /// Absolute path of the `.csproj` file.
    pub file: PathBuf,
    /// Directory the document search is rooted at.
    pub root_dir: PathBuf,
    /// Paths of the project's `.cs` documents, lexicographically sorted.
    pub documents: Vec<PathBuf>,
}

impl Project {
    /// Loads the project at `path` and enumerates its documents.
    ///
    /// Fails with [`WorkspaceError::LoadFailure`] if the file is missing or
    /// does not look like an MSBuild project.
    pub fn load(path: &Path) -> WorkspaceResult<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| WorkspaceError::LoadFailure {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        if !content.contains("<Project") {
            return Err(WorkspaceError::LoadFailure {
                path: path.to_path_buf(),
                reason: "file does not contain a <Project> element".to_string(),
            });
        }

        let root_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unnamed".to_string());

        let documents = enumerate_documents(&root_dir);

        Ok(Self {
            name,
            file: path.to_path_buf(),
            root_dir,
            documents,
        })
    }
}

/// Collects every `.cs` file under `root`, skipping build output and VCS
/// directories, sorted for deterministic processing order.
fn enumerate_documents(root: &Path) -> Vec<PathBuf> {
    let mut documents: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !is_ignored_dir(e))
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| e.eq_ignore_ascii_case("cs"))
        })
        .collect();
    documents.sort();
    documents
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_enumerates_sorted_documents() {
        let tmp = TempDir::new().unwrap();
        let csproj = touch(tmp.path(), "App.csproj", "<Project Sdk=\"Microsoft.NET.Sdk\"/>");
        touch(tmp.path(), "Zebra.cs", "class Zebra { }");
        touch(tmp.path(), "Alpha.cs", "class Alpha { }");
        touch(tmp.path(), "Services/Svc.cs", "class Svc { }");

        let project = Project::load(&csproj).unwrap();

        assert_eq!(project.name, "App");
        assert_eq!(project.documents.len(), 3);
        assert_eq!(project.documents[0].file_name().unwrap(), "Alpha.cs");
    }

    #[test]
    fn test_load_skips_build_output() {
        let tmp = TempDir::new().unwrap();
        let csproj = touch(tmp.path(), "App.csproj", "<Project/>");
        touch(tmp.path(), "Program.cs", "class Program { }");
        touch(tmp.path(), "obj/Debug/Program.g.cs", "class Generated { }");
        touch(tmp.path(), "bin/Debug/Copy.cs", "class Copy { }");

        let project = Project::load(&csproj).unwrap();
        assert_eq!(project.documents.len(), 1);
    }

    #[test]
    fn test_load_ignores_non_source_files() {
        let tmp = TempDir::new().unwrap();
        let csproj = touch(tmp.path(), "App.csproj", "<Project/>");
        touch(tmp.path(), "notes.txt", "not code");
        touch(tmp.path(), "Program.cs", "class Program { }");

        let project = Project::load(&csproj).unwrap();
        assert_eq!(project.documents.len(), 1);
    }

    #[test]
    fn test_load_rejects_non_project_file() {
        let tmp = TempDir::new().unwrap();
        let bogus = touch(tmp.path(), "App.csproj", "this is not msbuild");

        let result = Project::load(&bogus);
        assert!(matches!(result, Err(WorkspaceError::LoadFailure { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Project::load(Path::new("/nonexistent/App.csproj"));
        assert!(matches!(result, Err(WorkspaceError::LoadFailure { .. })));
    }
}
