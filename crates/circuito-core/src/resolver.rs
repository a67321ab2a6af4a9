//! Namespace-aware element lookup.
//!
//! Circuit documents are expected to live in a single namespace, but the URI is not fixed: it is
//! taken from the root element when declared, and falls back to [`DEFAULT_NAMESPACE`]
//! otherwise. The namespace is detected once when the [`Resolver`] is built; every lookup made
//! through that resolver is bound to it.
//!
//! Paths are dot-separated element names (`"geografia.origen"`). Each step matches any
//! descendant of the previous step, like `.//c:geografia//c:origen` in XPath. Results are always
//! in document order and never contain the same element twice.

use crate::{Error, Result};
use roxmltree::{Document, Node};

/// Namespace assumed when the root element does not declare one.
pub const DEFAULT_NAMESPACE: &str = "http://www.uniovi.es/circuito";

/// Parses circuit XML text, mapping parser failures to [`Error::MalformedDocument`].
pub fn parse_document(text: &str) -> Result<Document<'_>> {
    Ok(Document::parse(text)?)
}

#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a, 'input> {
    doc: &'a Document<'input>,
    namespace: &'a str,
}

impl<'a, 'input> Resolver<'a, 'input> {
    pub fn new(doc: &'a Document<'input>) -> Self {
        let namespace = doc
            .root_element()
            .tag_name()
            .namespace()
            .unwrap_or(DEFAULT_NAMESPACE);
        tracing::debug!(namespace, "resolved document namespace");
        Self { doc, namespace }
    }

    pub fn namespace(&self) -> &'a str {
        self.namespace
    }

    pub fn root(&self) -> Node<'a, 'input> {
        self.doc.root_element()
    }

    /// Returns `true` when `node` is an element called `name` in the resolved namespace.
    pub fn is_named(&self, node: Node<'a, 'input>, name: &str) -> bool {
        node.is_element()
            && node.tag_name().name() == name
            && node.tag_name().namespace() == Some(self.namespace)
    }

    pub fn find(&self, path: &str) -> Option<Node<'a, 'input>> {
        self.find_in(self.root(), path)
    }

    pub fn find_all(&self, path: &str) -> Vec<Node<'a, 'input>> {
        self.find_all_in(self.root(), path)
    }

    /// First element under `scope` (exclusive) matching `path`.
    pub fn find_in(&self, scope: Node<'a, 'input>, path: &str) -> Option<Node<'a, 'input>> {
        let steps = split_path(path);
        let (last, parents) = steps.split_last()?;
        scope
            .descendants()
            .skip(1)
            .find(|n| self.is_named(*n, last) && self.ancestors_match(*n, scope, parents))
    }

    /// Every element under `scope` (exclusive) matching `path`, in document order.
    pub fn find_all_in(&self, scope: Node<'a, 'input>, path: &str) -> Vec<Node<'a, 'input>> {
        let steps = split_path(path);
        let Some((last, parents)) = steps.split_last() else {
            return Vec::new();
        };
        scope
            .descendants()
            .skip(1)
            .filter(|n| self.is_named(*n, last) && self.ancestors_match(*n, scope, parents))
            .collect()
    }

    /// Direct child element of `node` called `name`.
    pub fn child(&self, node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
        node.children().find(|c| self.is_named(*c, name))
    }

    pub fn find_text(&self, path: &str) -> Option<&'a str> {
        self.find(path).and_then(text)
    }

    pub fn child_text(&self, node: Node<'a, 'input>, name: &str) -> Option<&'a str> {
        self.child(node, name).and_then(text)
    }

    // Descendant combinators only need a greedy right-to-left walk: the closest ancestor
    // matching the innermost remaining step is always a valid choice.
    fn ancestors_match(
        &self,
        node: Node<'a, 'input>,
        scope: Node<'a, 'input>,
        steps: &[&str],
    ) -> bool {
        let mut remaining = steps.iter().rev().peekable();
        for ancestor in node.ancestors().skip(1) {
            if ancestor == scope {
                break;
            }
            let Some(step) = remaining.peek() else {
                break;
            };
            if self.is_named(ancestor, step) {
                remaining.next();
            }
        }
        remaining.peek().is_none()
    }
}

fn split_path(path: &str) -> Vec<&str> {
    path.split('.').map(str::trim).filter(|s| !s.is_empty()).collect()
}

/// Trimmed text content of `node`, or `None` when it is empty.
pub fn text<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    let t = node.text()?.trim();
    if t.is_empty() { None } else { Some(t) }
}

/// Parses the trimmed text of `node` as a finite float.
///
/// Absent or non-numeric text is a fatal [`Error::MalformedNumericValue`]; callers decide
/// whether the element itself is optional before calling this.
pub fn number(node: Node<'_, '_>) -> Result<f64> {
    let raw = node.text().unwrap_or_default().trim();
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(Error::MalformedNumericValue {
            field: node.tag_name().name().to_string(),
            value: raw.to_string(),
        }),
    }
}
