//! csfix - batch C# source fixer that removes unused `using` directives.
//!
//! This crate loads a C# project or solution, parses every source document
//! with tree-sitter, decides which `using` directives are provably unused,
//! removes them, and rewrites the touched files in canonical formatting.

pub mod analysis;
pub mod fixer;
pub mod parser;
pub mod report;
pub mod workspace;

pub use fixer::{run, FixConfig};
pub use report::RunStatistics;
pub use workspace::WorkspaceError;
