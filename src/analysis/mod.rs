//! Usage analysis: deciding which `using` directives are provably unused.
//!
//! The classifier is deliberately biased toward false negatives: keeping a
//! directive that is actually dead costs nothing, while removing one that is
//! needed breaks the build. A directive is removed only when every clause
//! below fails to mark it used:
//!
//! 1. **Lexical** - its last dotted segment occurs anywhere in the document
//!    text outside the directive's own span. Comments, string literals, and
//!    other using lines all count; an incidental substring collision keeps
//!    the directive alive.
//! 2. **Alias** - the directive declares an alias and the alias name appears
//!    among the document's body identifiers.
//! 3. **Semantic** - some body identifier binds to a type of the imported
//!    namespace, either declared in this project or listed in the built-in
//!    table of well-known framework namespaces. This is what keeps
//!    `using System;` alive in a file that only mentions `Console`.
//! 4. **Scope** - `global using` and `using static` directives are always
//!    kept: their effect cannot be judged from one document's text.
//!
//! A directive whose name could not be extracted is kept as well.

pub mod framework;

use std::collections::{HashMap, HashSet};

use crate::parser::{Document, UsingDirective};

/// The per-directive classification outcome.
///
/// Valid only for the tree version it was computed against; never cached
/// across a rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Usage {
    /// Some clause marked the directive as referenced; it must survive.
    Used,
    /// No clause fired; the directive may be removed.
    Unused,
}

/// Project-wide name binding context.
///
/// Built once per run from every successfully parsed document, then shared
/// read-only across the batch. Maps each namespace declared in the project
/// to the type names it contains; lookups fall through to the framework
/// table for namespaces the project does not declare.
#[derive(Debug, Default)]
pub struct SemanticModel {
    declared: HashMap<String, HashSet<String>>,
}

impl SemanticModel {
    /// Builds the model from the parsed documents of a project.
    /// Unparsed documents contribute nothing.
    pub fn build<'a>(documents: impl IntoIterator<Item = &'a Document>) -> Self {
        let mut declared: HashMap<String, HashSet<String>> = HashMap::new();
        for doc in documents {
            for (namespace, type_name) in doc.declarations() {
                declared.entry(namespace).or_default().insert(type_name);
            }
        }
        Self { declared }
    }

    /// True when `ident` names a type of `namespace`, per project
    /// declarations or the well-known framework table.
    pub fn binds(&self, namespace: &str, ident: &str) -> bool {
        if let Some(types) = self.declared.get(namespace) {
            if types.contains(ident) {
                return true;
            }
        }
        framework::namespace_types(namespace)
            .is_some_and(|types| types.contains(&ident))
    }
}

/// Classifies a single directive against its document.
pub fn classify(
    directive: &UsingDirective,
    text: &str,
    body_identifiers: &HashSet<String>,
    model: &SemanticModel,
) -> Usage {
    // Scope clause: effects reach beyond what this document's text shows.
    if directive.is_global || directive.is_static {
        return Usage::Used;
    }

    // Keep when in doubt.
    let Some(segment) = directive.last_segment() else {
        return Usage::Used;
    };

    if occurs_outside_span(text, segment, directive.start_byte, directive.end_byte) {
        return Usage::Used;
    }

    if let Some(alias) = &directive.alias {
        if body_identifiers.contains(alias) {
            return Usage::Used;
        }
    }

    if body_identifiers
        .iter()
        .any(|ident| model.binds(&directive.name, ident))
    {
        return Usage::Used;
    }

    Usage::Unused
}

/// The directives of `doc` that are provably unused, in source order.
///
/// An unparsed document yields no directives, which the pipeline treats as
/// "nothing to remove".
pub fn find_unused(doc: &Document, model: &SemanticModel) -> Vec<UsingDirective> {
    let body_identifiers = doc.body_identifiers();
    doc.usings()
        .into_iter()
        .filter(|u| classify(u, doc.text(), &body_identifiers, model) == Usage::Unused)
        .collect()
}

/// True when `needle` occurs in `text` starting at any position outside
/// `[start, end)`.
fn occurs_outside_span(text: &str, needle: &str, start: usize, end: usize) -> bool {
    text.match_indices(needle).any(|(at, _)| at < start || at >= end)
}
