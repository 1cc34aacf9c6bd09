//! The per-file document: raw text plus derived syntax artifacts.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tree_sitter::Tree;

use super::usings::{self, UsingDirective};
use super::{collect_nodes_of_kind, node_text, CSharpParser, DocumentError, DocumentResult};

/// One source file within a workspace.
///
/// The original text is immutable; a rewrite produces a new text that
/// replaces the file on disk, never this in-memory copy. The syntax tree is
/// computed once on demand and is only considered valid when it parsed
/// without errors.
#[derive(Debug)]
pub struct Document {
    path: PathBuf,
    text: String,
    tree: Option<Tree>,
}

impl Document {
    /// Reads the document at `path` from disk.
    pub fn load(path: &Path) -> DocumentResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_source(path, text))
    }

    /// Creates a document from in-memory source, mainly for tests.
    pub fn from_source(path: &Path, text: impl Into<String>) -> Self {
        Self {
            path: path.to_path_buf(),
            text: text.into(),
            tree: None,
        }
    }

    /// The document's file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The original source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Parses the document, caching the tree.
    ///
    /// A tree containing error or missing nodes means the file is not valid
    /// C#; it is reported as [`DocumentError::ParseFailure`] and the cached
    /// tree stays empty so later views see an unparsed document.
    pub fn parse(&mut self, parser: &mut CSharpParser) -> DocumentResult<()> {
        if self.tree.is_some() {
            return Ok(());
        }

        let tree = parser
            .parse(&self.text)
            .filter(|t| !t.root_node().has_error())
            .ok_or_else(|| DocumentError::ParseFailure {
                path: self.path.display().to_string(),
            })?;

        self.tree = Some(tree);
        Ok(())
    }

    /// The cached syntax tree, if [`Document::parse`] succeeded.
    pub fn tree(&self) -> Option<&Tree> {
        self.tree.as_ref()
    }

    /// Every `using` directive in the document, in source order.
    /// Empty when the document is unparsed.
    pub fn usings(&self) -> Vec<UsingDirective> {
        match &self.tree {
            Some(tree) => usings::extract(tree.root_node(), &self.text),
            None => Vec::new(),
        }
    }

    /// Every identifier token occurring outside the using directives.
    ///
    /// This is the name population the semantic model binds against;
    /// member accesses contribute both sides (`Console.WriteLine` yields
    /// `Console` and `WriteLine`).
    pub fn body_identifiers(&self) -> HashSet<String> {
        let Some(tree) = &self.tree else {
            return HashSet::new();
        };

        let using_spans: Vec<(usize, usize)> =
            collect_nodes_of_kind(tree.root_node(), "using_directive")
                .iter()
                .map(|n| (n.start_byte(), n.end_byte()))
                .collect();

        collect_nodes_of_kind(tree.root_node(), "identifier")
            .iter()
            .filter(|n| {
                let start = n.start_byte();
                !using_spans.iter().any(|&(s, e)| start >= s && start < e)
            })
            .filter_map(|n| node_text(n, &self.text))
            .map(str::to_string)
            .collect()
    }

    /// `(namespace, type name)` pairs for every type declared in the
    /// document. Types outside any namespace report an empty namespace.
    pub fn declarations(&self) -> Vec<(String, String)> {
        let Some(tree) = &self.tree else {
            return Vec::new();
        };

        const TYPE_KINDS: [&str; 6] = [
            "class_declaration",
            "struct_declaration",
            "interface_declaration",
            "enum_declaration",
            "record_declaration",
            "delegate_declaration",
        ];

        let mut declarations = Vec::new();
        for kind in TYPE_KINDS {
            for node in collect_nodes_of_kind(tree.root_node(), kind) {
                let Some(name_node) = node.child_by_field_name("name") else {
                    continue;
                };
                let Some(name) = node_text(&name_node, &self.text) else {
                    continue;
                };
                declarations.push((self.containing_namespace(node), name.to_string()));
            }
        }
        declarations
    }

    /// Dotted namespace path scoping `node`, outermost first.
    ///
    /// Block namespaces enclose their types; a file-scoped namespace
    /// declaration sits as a preceding sibling under the compilation unit
    /// and scopes everything after it.
    fn containing_namespace(&self, node: tree_sitter::Node) -> String {
        let mut segments = Vec::new();
        let mut top = node;
        let mut current = node.parent();

        while let Some(parent) = current {
            if parent.kind() == "namespace_declaration" {
                if let Some(name) = parent
                    .child_by_field_name("name")
                    .and_then(|n| node_text(&n, &self.text))
                {
                    segments.push(name.to_string());
                }
            }
            top = parent;
            current = parent.parent();
        }

        for scoped in collect_nodes_of_kind(top, "file_scoped_namespace_declaration") {
            if scoped.start_byte() <= node.start_byte() {
                if let Some(name) = scoped
                    .child_by_field_name("name")
                    .and_then(|n| node_text(&n, &self.text))
                {
                    segments.push(name.to_string());
                }
            }
        }

        segments.reverse();
        segments.join(".")
    }
}
