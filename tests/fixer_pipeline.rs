//! End-to-end pipeline tests over real on-disk workspaces.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use csfix::{run, FixConfig, WorkspaceError};

const MINIMAL_CSPROJ: &str = "<Project Sdk=\"Microsoft.NET.Sdk\"></Project>";

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}

fn project_with(files: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "App.csproj", MINIMAL_CSPROJ);
    for (name, contents) in files {
        write_file(tmp.path(), name, contents);
    }
    tmp
}

fn config_for(root: &Path) -> FixConfig {
    FixConfig {
        root: root.to_path_buf(),
        ..FixConfig::default()
    }
}

const SCENARIO_SOURCE: &str = concat!(
    "using System;\n",
    "using System.Text;\n",
    "\n",
    "class Program\n",
    "{\n",
    "    static void Main()\n",
    "    {\n",
    "        Console.WriteLine(\"hello\");\n",
    "    }\n",
    "}\n",
);

#[test]
fn removes_unused_using_and_keeps_used_one() {
    let tmp = project_with(&[("A.cs", SCENARIO_SOURCE)]);

    let stats = run(&config_for(tmp.path())).unwrap();

    assert_eq!(stats.files_processed, 1);
    assert_eq!(stats.files_fixed, 1);

    let after = fs::read_to_string(tmp.path().join("A.cs")).unwrap();
    assert!(!after.contains("using System.Text;"));
    assert!(after.contains("using System;"));
    assert!(after.contains("Console.WriteLine"));
}

#[test]
fn second_run_is_idempotent() {
    let tmp = project_with(&[("A.cs", SCENARIO_SOURCE)]);
    let config = config_for(tmp.path());

    run(&config).unwrap();
    let after_first = fs::read_to_string(tmp.path().join("A.cs")).unwrap();

    let stats = run(&config).unwrap();
    let after_second = fs::read_to_string(tmp.path().join("A.cs")).unwrap();

    assert_eq!(stats.files_fixed, 0);
    assert_eq!(after_first, after_second);
}

#[test]
fn used_directive_survives_textual_reference() {
    // "Widgets" appears in the body, so the directive must survive even
    // though nothing semantically binds through it.
    let source = concat!(
        "using Vendor.Widgets;\n",
        "\n",
        "class A\n",
        "{\n",
        "    // draws the Widgets panel\n",
        "    void Draw() { }\n",
        "}\n",
    );
    let tmp = project_with(&[("A.cs", source)]);

    let stats = run(&config_for(tmp.path())).unwrap();

    assert_eq!(stats.files_fixed, 0);
    let after = fs::read_to_string(tmp.path().join("A.cs")).unwrap();
    assert!(after.contains("using Vendor.Widgets;"));
}

#[test]
fn unreferenced_directive_is_removed() {
    let source = "using Vendor.Widgets;\n\nclass A { }\n";
    let tmp = project_with(&[("A.cs", source)]);

    let stats = run(&config_for(tmp.path())).unwrap();

    assert_eq!(stats.files_fixed, 1);
    let after = fs::read_to_string(tmp.path().join("A.cs")).unwrap();
    assert!(!after.contains("using"));
    assert!(after.contains("class A"));
}

#[test]
fn dry_run_reports_without_writing() {
    let tmp = project_with(&[("A.cs", SCENARIO_SOURCE)]);
    let before = fs::read(tmp.path().join("A.cs")).unwrap();

    let dry_stats = run(&FixConfig {
        dry_run: true,
        ..config_for(tmp.path())
    })
    .unwrap();

    let after = fs::read(tmp.path().join("A.cs")).unwrap();
    assert_eq!(before, after, "dry run must not touch file bytes");
    assert_eq!(dry_stats.files_fixed, 1);

    // The dry run predicted exactly what a real run performs.
    let real_stats = run(&config_for(tmp.path())).unwrap();
    assert_eq!(real_stats.files_fixed, dry_stats.files_fixed);
}

#[test]
fn no_fix_usings_is_a_pass_through() {
    let tmp = project_with(&[("A.cs", SCENARIO_SOURCE)]);
    let before = fs::read(tmp.path().join("A.cs")).unwrap();

    let stats = run(&FixConfig {
        fix_usings: false,
        ..config_for(tmp.path())
    })
    .unwrap();

    assert_eq!(stats.files_processed, 1);
    assert_eq!(stats.files_fixed, 0);
    assert_eq!(fs::read(tmp.path().join("A.cs")).unwrap(), before);
}

#[test]
fn broken_file_does_not_abort_the_batch() {
    let broken = "using Vendor.Gone1;\nclass Broken { int x = ; ";
    let mut files: Vec<(String, String)> = vec![("Broken.cs".to_string(), broken.to_string())];
    for i in 0..9 {
        files.push((
            format!("Valid{i}.cs"),
            format!("using Vendor.Orphan{i};\n\nclass Valid{i} {{ }}\n"),
        ));
    }
    let refs: Vec<(&str, &str)> = files
        .iter()
        .map(|(n, c)| (n.as_str(), c.as_str()))
        .collect();
    let tmp = project_with(&refs);
    let broken_before = fs::read(tmp.path().join("Broken.cs")).unwrap();

    let stats = run(&config_for(tmp.path())).unwrap();

    assert_eq!(stats.files_processed, 10);
    assert_eq!(stats.files_fixed, 9);
    assert_eq!(stats.parse_failures, 1);

    // The invalid file keeps its unused using untouched.
    assert_eq!(fs::read(tmp.path().join("Broken.cs")).unwrap(), broken_before);
    for i in 0..9 {
        let after = fs::read_to_string(tmp.path().join(format!("Valid{i}.cs"))).unwrap();
        assert!(!after.contains("using"), "Valid{i}.cs still has its using");
    }
}

#[test]
fn fatal_when_no_workspace_exists() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "readme.md", "no projects here");

    let result = run(&config_for(tmp.path()));
    assert!(matches!(result, Err(WorkspaceError::NoWorkspaceFound(_))));
}

#[test]
fn solution_processes_only_first_project() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "Alpha/Alpha.csproj", MINIMAL_CSPROJ);
    write_file(
        tmp.path(),
        "Alpha/A.cs",
        "using Vendor.Widgets;\n\nclass A { }\n",
    );
    write_file(tmp.path(), "Beta/Beta.csproj", MINIMAL_CSPROJ);
    write_file(
        tmp.path(),
        "Beta/B.cs",
        "using Vendor.Widgets;\n\nclass B { }\n",
    );
    write_file(
        tmp.path(),
        "app.sln",
        concat!(
            "Microsoft Visual Studio Solution File, Format Version 12.00\n",
            "Project(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"Alpha\", \"Alpha\\Alpha.csproj\", \"{11111111-1111-1111-1111-111111111111}\"\n",
            "EndProject\n",
            "Project(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"Beta\", \"Beta\\Beta.csproj\", \"{22222222-2222-2222-2222-222222222222}\"\n",
            "EndProject\n",
        ),
    );

    let stats = run(&config_for(tmp.path())).unwrap();

    assert_eq!(stats.files_processed, 1);
    assert_eq!(stats.files_fixed, 1);

    let alpha = fs::read_to_string(tmp.path().join("Alpha/A.cs")).unwrap();
    let beta = fs::read_to_string(tmp.path().join("Beta/B.cs")).unwrap();
    assert!(!alpha.contains("using Vendor.Widgets;"));
    assert!(beta.contains("using Vendor.Widgets;"), "second project untouched");
}

#[test]
fn accepts_exact_project_file_path() {
    let tmp = project_with(&[("A.cs", SCENARIO_SOURCE)]);

    let stats = run(&config_for(&tmp.path().join("App.csproj"))).unwrap();
    assert_eq!(stats.files_processed, 1);
    assert_eq!(stats.files_fixed, 1);
}

#[test]
fn cross_file_type_reference_keeps_directive() {
    let tmp = project_with(&[
        (
            "Invoice.cs",
            "namespace Acme.Billing\n{\n    public class Invoice { }\n}\n",
        ),
        (
            "Main.cs",
            concat!(
                "using Acme.Billing;\n",
                "\n",
                "class Main\n",
                "{\n",
                "    Invoice Current() { return new Invoice(); }\n",
                "}\n",
            ),
        ),
    ]);

    let stats = run(&config_for(tmp.path())).unwrap();

    assert_eq!(stats.files_fixed, 0);
    let main = fs::read_to_string(tmp.path().join("Main.cs")).unwrap();
    assert!(main.contains("using Acme.Billing;"));
}

#[test]
fn aliased_directive_used_through_alias_survives() {
    // Neither "Vendor" nor "Storage" appears in the body; only the alias does.
    let source = concat!(
        "using Files = Vendor.Storage;\n",
        "\n",
        "class A\n",
        "{\n",
        "    void M() { Files.Bucket.Open(); }\n",
        "}\n",
    );
    let tmp = project_with(&[("A.cs", source)]);

    let stats = run(&config_for(tmp.path())).unwrap();

    assert_eq!(stats.files_fixed, 0);
    let after = fs::read_to_string(tmp.path().join("A.cs")).unwrap();
    assert!(after.contains("using Files = Vendor.Storage;"));
}

#[test]
fn file_scoped_namespace_type_keeps_directive() {
    // "Core" never appears in Main.cs, so survival requires the model to
    // see IClock inside the file-scoped Acme.Core namespace.
    let tmp = project_with(&[
        (
            "Clock.cs",
            "namespace Acme.Core;\n\npublic interface IClock { }\n",
        ),
        (
            "Main.cs",
            concat!(
                "using Acme.Core;\n",
                "\n",
                "class Main\n",
                "{\n",
                "    IClock Now() { return null; }\n",
                "}\n",
            ),
        ),
    ]);

    let stats = run(&config_for(tmp.path())).unwrap();

    assert_eq!(stats.files_fixed, 0);
    let main = fs::read_to_string(tmp.path().join("Main.cs")).unwrap();
    assert!(main.contains("using Acme.Core;"));
}
