//! Extraction of `using` directives from a parsed tree.

use tree_sitter::Node;

use super::{collect_nodes_of_kind, node_text};

/// One `using` directive as it appears in a document.
///
/// Ephemeral: recomputed on every analysis pass and only meaningful for the
/// tree version it was extracted from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsingDirective {
    /// The imported dotted name (`System.Text` in `using System.Text;`).
    /// Empty when the name could not be extracted.
    pub name: String,
    /// Alias introduced by `using Alias = Some.Name;`, if any.
    pub alias: Option<String>,
    /// `global using` directive, affecting the whole compilation.
    pub is_global: bool,
    /// `using static` directive, importing a type's members.
    pub is_static: bool,
    /// Byte span of the whole directive within the document text.
    pub start_byte: usize,
    /// Exclusive end of the directive's byte span.
    pub end_byte: usize,
    /// 1-based source line of the directive.
    pub line: usize,
}

impl UsingDirective {
    /// Last segment of the dotted name (`A.B.C` → `C`).
    /// `None` when the name is empty.
    pub fn last_segment(&self) -> Option<&str> {
        self.name.rsplit('.').next().filter(|s| !s.is_empty())
    }
}

/// Extracts every using directive below `root`, in source order.
pub fn extract(root: Node, source: &str) -> Vec<UsingDirective> {
    collect_nodes_of_kind(root, "using_directive")
        .iter()
        .map(|node| parse_directive(node, source))
        .collect()
}

/// Reads the parts of one `using_directive` node.
///
/// Children are, in grammar order: optional `global`, `using`, optional
/// `static`, optional alias (a `name:` field identifier followed by `=`),
/// the imported name, `;`.
fn parse_directive(node: &Node, source: &str) -> UsingDirective {
    let mut is_global = false;
    let mut is_static = false;
    let mut has_equals = false;

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "global" => is_global = true,
            "static" => is_static = true,
            "=" => has_equals = true,
            _ => {}
        }
    }

    // The alias identifier carries the `name:` field; it only denotes an
    // alias when an `=` token actually follows it.
    let alias_node = if has_equals {
        node.child_by_field_name("name")
    } else {
        None
    };
    let alias = alias_node
        .and_then(|n| node_text(&n, source))
        .map(str::to_string);

    // The imported path is the last name-like child that is not the alias.
    let mut name = String::new();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if matches!(
            child.kind(),
            "identifier" | "qualified_name" | "alias_qualified_name" | "generic_name"
        ) && alias_node.map(|a| a.id()) != Some(child.id())
        {
            if let Some(text) = node_text(&child, source) {
                name = text.to_string();
            }
        }
    }

    UsingDirective {
        name,
        alias,
        is_global,
        is_static,
        start_byte: node.start_byte(),
        end_byte: node.end_byte(),
        line: node.start_position().row + 1,
    }
}
