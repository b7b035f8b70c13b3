//! Directory-structure tree component.
//!
//! Renders an illustrative, statically-authored tree of labeled nodes
//! (typically a project file layout) with a per-node expand/collapse
//! affordance. The authored tree is immutable; toggle state is an
//! ephemeral overlay owned by the caller ([`TreeState`]) and resets when
//! a fresh state is constructed, matching a page reload.

use std::collections::HashSet;
use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::component::{Component, ComponentArgs};
use crate::util::escape_html;

/// Node in a directory tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeNode {
    /// Display label (e.g., `pages/`).
    pub label: String,
    /// Short annotation shown next to the label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Authored initial state for nodes with children.
    pub expanded: bool,
    /// Child nodes, in authored order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a leaf node.
    #[must_use]
    pub fn leaf(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Create a directory node with children, expanded by default.
    #[must_use]
    pub fn dir(label: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            label: label.into(),
            expanded: true,
            children,
            ..Self::default()
        }
    }

    /// Attach an annotation.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Set the authored initial toggle state.
    #[must_use]
    pub fn collapsed(mut self) -> Self {
        self.expanded = false;
        self
    }
}

/// Ephemeral per-render toggle state for a [`DirectoryTree`].
///
/// Stores which nodes the user has toggled away from their authored
/// default, keyed by node id (the `data-node` attribute in the rendered
/// HTML). Toggling a node twice removes the override, so the rendered
/// visibility returns exactly to the authored state.
#[derive(Clone, Debug, Default)]
pub struct TreeState {
    toggled: HashSet<String>,
}

impl TreeState {
    /// Create a fresh state with every node at its authored default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a single node's expand/collapse state.
    ///
    /// Only the node itself is affected; siblings and (authored state of)
    /// descendants are untouched.
    pub fn toggle(&mut self, id: &str) {
        if !self.toggled.remove(id) {
            self.toggled.insert(id.to_owned());
        }
    }

    /// Whether a node renders expanded given its authored default.
    #[must_use]
    pub fn is_expanded(&self, id: &str, default_expanded: bool) -> bool {
        default_expanded != self.toggled.contains(id)
    }
}

/// Directory-structure tree display.
///
/// Holds the authored node tree and renders it with a given
/// [`TreeState`]. Node ids are index paths (`"0"`, `"0.2"`, `"0.2.1"`)
/// assigned in authored order; they are stable across renders because
/// the tree itself never changes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirectoryTree {
    nodes: Vec<TreeNode>,
}

impl DirectoryTree {
    /// Create a tree from root nodes.
    #[must_use]
    pub fn new(nodes: Vec<TreeNode>) -> Self {
        Self { nodes }
    }

    /// Root nodes in authored order.
    #[must_use]
    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    /// Render with every node at its authored default state.
    #[must_use]
    pub fn render(&self) -> String {
        self.render_with(&TreeState::new())
    }

    /// Render with the given toggle state.
    ///
    /// Collapsed subtrees are rendered `hidden`, not removed, so toggling
    /// client-side only flips visibility.
    #[must_use]
    pub fn render_with(&self, state: &TreeState) -> String {
        let mut out = String::new();
        out.push_str(r#"<ul class="dir-tree">"#);
        for (i, node) in self.nodes.iter().enumerate() {
            render_node(node, &i.to_string(), state, &mut out);
        }
        out.push_str("</ul>");
        out
    }
}

fn render_node(node: &TreeNode, id: &str, state: &TreeState, out: &mut String) {
    let expanded = state.is_expanded(id, node.expanded);
    write!(out, r#"<li class="dir-tree-node" data-node="{id}">"#).unwrap();

    if node.children.is_empty() {
        write!(
            out,
            r#"<span class="dir-tree-label">{}</span>"#,
            escape_html(&node.label)
        )
        .unwrap();
    } else {
        write!(
            out,
            r#"<button type="button" class="dir-tree-toggle" aria-expanded="{expanded}">{}</button>"#,
            escape_html(&node.label)
        )
        .unwrap();
    }

    if let Some(note) = &node.note {
        write!(
            out,
            r#"<span class="dir-tree-note">{}</span>"#,
            escape_html(note)
        )
        .unwrap();
    }

    if !node.children.is_empty() {
        let hidden = if expanded { "" } else { " hidden" };
        write!(out, r#"<ul class="dir-tree-children"{hidden}>"#).unwrap();
        for (i, child) in node.children.iter().enumerate() {
            render_node(child, &format!("{id}.{i}"), state, out);
        }
        out.push_str("</ul>");
    }

    out.push_str("</li>");
}

impl Component for DirectoryTree {
    fn name(&self) -> &'static str {
        "directory-tree"
    }

    fn render(&self, _args: &ComponentArgs) -> String {
        self.render()
    }
}
