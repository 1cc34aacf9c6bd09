use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use csfix::FixConfig;

#[derive(Parser)]
#[command(name = "csfix")]
#[command(version)]
#[command(about = "Batch C# source fixer that removes unused using directives", long_about = None)]
struct Cli {
    /// Path to a .csproj or .sln file, or a directory to search
    #[arg(short = 'p', long = "project", default_value = ".")]
    project: PathBuf,

    /// Skip the unused-using removal pass entirely
    #[arg(long)]
    no_fix_usings: bool,

    /// Report what would be fixed without writing any files
    #[arg(short = 'd', long)]
    dry_run: bool,

    /// Show per-file detail and full error context
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Print the final summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = FixConfig {
        root: cli.project,
        fix_usings: !cli.no_fix_usings,
        dry_run: cli.dry_run,
        verbose: cli.verbose,
        json: cli.json,
    };

    match csfix::run(&config).context("workspace could not be loaded") {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.verbose {
                eprintln!("❌ Error: {e:?}");
            } else {
                eprintln!("❌ Error: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}
