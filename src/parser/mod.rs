//! Document model for csfix.
//!
//! Each C# source file becomes a [`Document`]: its path, its immutable
//! original text, and a lazily computed tree-sitter syntax tree. On top of
//! the tree the model exposes the derived views the analyzer needs:
//!
//! - every `using` directive with its name, alias, modifiers, and span
//! - every identifier token outside the using directives (the "body")
//! - every type declaration with its containing namespace
//!
//! # Example
//!
//! ```ignore
//! use csfix::parser::{CSharpParser, Document};
//!
//! let mut parser = CSharpParser::new()?;
//! let mut doc = Document::load(Path::new("Program.cs"))?;
//! doc.parse(&mut parser)?;
//!
//! for using in doc.usings() {
//!     println!("line {}: using {}", using.line, using.name);
//! }
//! ```

pub mod document;
pub mod usings;

use tree_sitter::{Node, Parser, Tree};

pub use document::Document;
pub use usings::UsingDirective;

/// Errors that can occur while reading or parsing a single document.
///
/// These are all recoverable at the batch level: a failing document is
/// counted as processed, reported, and left untouched.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// Failed to read the file from disk (includes non-UTF-8 content).
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not syntactically valid C#.
    #[error("failed to parse {path}")]
    ParseFailure { path: String },

    /// Tree-sitter rejected the C# grammar. Effectively unreachable with a
    /// matching grammar version, but surfaced rather than panicking.
    #[error("tree-sitter language initialization failed")]
    LanguageInit,
}

/// Result type alias for document operations.
pub type DocumentResult<T> = Result<T, DocumentError>;

/// A configured tree-sitter parser for C#.
///
/// tree-sitter parsers are stateful and reusable; one instance serves the
/// whole batch.
pub struct CSharpParser {
    inner: Parser,
}

impl CSharpParser {
    /// Creates a parser with the C# grammar installed.
    pub fn new() -> DocumentResult<Self> {
        let mut inner = Parser::new();
        inner
            .set_language(&tree_sitter_c_sharp::LANGUAGE.into())
            .map_err(|_| DocumentError::LanguageInit)?;
        Ok(Self { inner })
    }

    /// Parses `source`, returning the tree even when it contains errors.
    /// Callers decide whether an erroneous tree is acceptable.
    pub(crate) fn parse(&mut self, source: &str) -> Option<Tree> {
        self.inner.parse(source, None)
    }
}

/// Collects every node of the given kind below `root`, in document order.
///
/// Syntax kinds are tree-sitter's tagged node variants; this is the single
/// traversal primitive the rest of the crate builds on.
pub fn collect_nodes_of_kind<'t>(root: Node<'t>, kind: &str) -> Vec<Node<'t>> {
    let mut found = Vec::new();
    let mut cursor = root.walk();

    'walk: loop {
        let node = cursor.node();
        if node.kind() == kind {
            found.push(node);
        }

        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                continue 'walk;
            }
            if !cursor.goto_parent() {
                break 'walk;
            }
        }
    }

    found
}

/// The text a node spans within `source`.
pub(crate) fn node_text<'a>(node: &Node, source: &'a str) -> Option<&'a str> {
    source.get(node.start_byte()..node.end_byte())
}
