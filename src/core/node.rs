//! The configuration tree and the view the report builder reads from.

use super::path;
use crate::sources::Provider;

/// A named node in the configuration tree.
///
/// A node has a key that is unique among its siblings (compared
/// case-insensitively), an optional scalar value, and an ordered list of
/// children. Child order is declaration order.
///
/// # Examples
///
/// ```rust
/// use config_provenance::core::ConfigNode;
///
/// let logging = ConfigNode::new("Logging").with_child(
///     ConfigNode::new("LogLevel").with_child(ConfigNode::with_value("Default", "Information")),
/// );
///
/// let default = logging.find("LogLevel:Default").unwrap();
/// assert_eq!(default.value(), Some("Information"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigNode {
    key: String,
    value: Option<String>,
    children: Vec<ConfigNode>,
}

impl ConfigNode {
    /// Create a section with no value and no children.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
            children: Vec::new(),
        }
    }

    /// Create a node holding a scalar value.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
            children: Vec::new(),
        }
    }

    /// Append a child, merging into an existing sibling with the same key.
    pub fn with_child(mut self, child: ConfigNode) -> Self {
        self.add_child(child);
        self
    }

    /// The node's key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The node's scalar value, if any.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Children in declaration order.
    pub fn children(&self) -> &[ConfigNode] {
        &self.children
    }

    /// Whether this node has no children and a non-empty value.
    ///
    /// A node with both children and a value is not a leaf; only its
    /// children are rendered in a report.
    pub fn is_leaf_with_value(&self) -> bool {
        self.children.is_empty() && self.value.as_deref().is_some_and(|v| !v.is_empty())
    }

    /// Direct child by key (case-insensitive).
    pub fn child(&self, key: &str) -> Option<&ConfigNode> {
        self.children.iter().find(|c| path::eq_ignore_case(&c.key, key))
    }

    /// Descendant by relative path (case-insensitive).
    pub fn find(&self, relative: &str) -> Option<&ConfigNode> {
        find_in(&self.children, relative)
    }

    pub(crate) fn set_value(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }

    /// Existing child with `key`, or a new empty one appended at the end.
    pub(crate) fn child_entry(&mut self, key: &str) -> &mut ConfigNode {
        child_entry(&mut self.children, key)
    }

    fn add_child(&mut self, child: ConfigNode) {
        let ConfigNode {
            key,
            value,
            children,
        } = child;
        let existing = child_entry(&mut self.children, &key);
        if let Some(value) = value {
            existing.value = Some(value);
        }
        for grandchild in children {
            existing.add_child(grandchild);
        }
    }
}

/// Find a node under `nodes` by path (case-insensitive).
pub(crate) fn find_in<'a>(nodes: &'a [ConfigNode], relative: &str) -> Option<&'a ConfigNode> {
    let mut segments = path::segments(relative);
    let first = segments.next()?;
    let mut current = nodes.iter().find(|n| path::eq_ignore_case(&n.key, first))?;
    for segment in segments {
        current = current.child(segment)?;
    }
    Some(current)
}

pub(crate) fn child_entry<'a>(nodes: &'a mut Vec<ConfigNode>, key: &str) -> &'a mut ConfigNode {
    match nodes.iter().position(|n| path::eq_ignore_case(&n.key, key)) {
        Some(index) => &mut nodes[index],
        None => {
            nodes.push(ConfigNode::new(key));
            let last = nodes.len() - 1;
            &mut nodes[last]
        }
    }
}

/// A read-only view of a configuration, as consumed by the report builder.
///
/// Any type exposing a list of top-level sections can be rendered. Types that
/// also know which providers contributed their values (see
/// [`ConfigRoot`](crate::core::ConfigRoot)) return them from
/// [`providers`](Configuration::providers), lowest precedence first; all other
/// views render without provenance.
pub trait Configuration {
    /// Top-level sections in declaration order.
    fn children(&self) -> &[ConfigNode];

    /// Providers in precedence order (lowest first), if this view has them.
    fn providers(&self) -> Option<Vec<&dyn Provider>> {
        None
    }
}

impl Configuration for ConfigNode {
    fn children(&self) -> &[ConfigNode] {
        &self.children
    }
}

impl Configuration for [ConfigNode] {
    fn children(&self) -> &[ConfigNode] {
        self
    }
}

impl Configuration for Vec<ConfigNode> {
    fn children(&self) -> &[ConfigNode] {
        self
    }
}
