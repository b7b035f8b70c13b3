//! Sidebar navigation trees and prefix resolution.
//!
//! The sidebar is a mapping from URL-path prefixes to ordered lists of
//! navigation nodes. Given the current page path, [`Sidebar::resolve`]
//! picks the mapping whose prefix matches, most specific prefix first.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Node in a sidebar navigation tree.
///
/// A node is either a **group** (non-empty `items`; `link` is ignored for
/// navigation) or a **leaf** (no `items`). Leaves with an empty or absent
/// `link` are separator/placeholder rows: tolerated, rendered as plain
/// text rather than rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarItem {
    /// Display text.
    pub text: String,
    /// Link target path. Absent or empty for group headers and separators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Child nodes, in authored order. Non-empty only on groups.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<SidebarItem>,
    /// Whether the group can be toggled by the user.
    pub collapsible: bool,
    /// Initial toggle state for collapsible groups.
    pub collapsed: bool,
}

/// Classification of a sidebar node.
///
/// Derived from the node's shape rather than stored, so every node is
/// always exactly one of the two.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// Node with children; any `link` is ignored for navigation.
    Group,
    /// Node without children; navigates via `link` when non-empty.
    Leaf,
}

impl SidebarItem {
    /// Create a leaf node with text and link.
    #[must_use]
    pub fn leaf(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: Some(link.into()),
            ..Self::default()
        }
    }

    /// Create a group node with text and children.
    #[must_use]
    pub fn group(text: impl Into<String>, items: Vec<SidebarItem>) -> Self {
        Self {
            text: text.into(),
            items,
            ..Self::default()
        }
    }

    /// Mark the group as collapsible, with the given initial state.
    #[must_use]
    pub fn with_collapsible(mut self, collapsed: bool) -> Self {
        self.collapsible = true;
        self.collapsed = collapsed;
        self
    }

    /// Classify this node as group or leaf.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        if self.items.is_empty() {
            NodeKind::Leaf
        } else {
            NodeKind::Group
        }
    }

    /// Whether this node is a separator/placeholder row.
    ///
    /// Separators are leaves with an empty or absent link. They render as
    /// non-clickable text.
    #[must_use]
    pub fn is_separator(&self) -> bool {
        self.kind() == NodeKind::Leaf && self.link.as_deref().is_none_or(str::is_empty)
    }

    /// The navigation target, if this node has a usable one.
    ///
    /// Returns `None` for groups and separators.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        if self.kind() == NodeKind::Group {
            return None;
        }
        self.link.as_deref().filter(|l| !l.is_empty())
    }
}

/// Sidebar mapping from path prefixes to navigation trees.
///
/// Deserialized from the `[theme.sidebar]` configuration table. Keys are
/// URL-path prefixes (e.g., `/guide/`); values are the ordered top-level
/// groups shown when the current page falls under that prefix.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sidebar(BTreeMap<String, Vec<SidebarItem>>);

/// Resolved sidebar for a page, serializable for the frontend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Navigation {
    /// The prefix that matched the page path.
    pub prefix: String,
    /// Top-level navigation nodes for that prefix, in authored order.
    pub items: Vec<SidebarItem>,
}

impl Sidebar {
    /// Create an empty sidebar.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a prefix mapping, replacing any existing one.
    pub fn insert(&mut self, prefix: impl Into<String>, items: Vec<SidebarItem>) {
        self.0.insert(prefix.into(), items);
    }

    /// Whether no prefixes are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over configured `(prefix, items)` mappings.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[SidebarItem])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Resolve the sidebar for a page path.
    ///
    /// Selects the mapping whose prefix matches `path`, longest prefix
    /// winning. A path without the trailing slash still matches its own
    /// prefix (`/guide` matches the `/guide/` mapping). Returns `None`
    /// when no configured prefix matches.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<Navigation> {
        let (prefix, items) = self
            .0
            .iter()
            .filter(|(prefix, _)| prefix_matches(prefix, path))
            .max_by_key(|(prefix, _)| prefix.len())?;

        tracing::debug!(prefix = %prefix, path = %path, "Resolved sidebar");

        Some(Navigation {
            prefix: prefix.clone(),
            items: items.clone(),
        })
    }
}

/// Whether a configured prefix matches a page path.
fn prefix_matches(prefix: &str, path: &str) -> bool {
    path.starts_with(prefix) || prefix.strip_suffix('/') == Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_sidebar() -> Sidebar {
        let mut sidebar = Sidebar::new();
        sidebar.insert(
            "/",
            vec![SidebarItem::group(
                "Welcome",
                vec![SidebarItem::leaf("Introduction", "/")],
            )],
        );
        sidebar.insert(
            "/NuxtDocs/",
            vec![SidebarItem::group(
                "Core",
                vec![SidebarItem::leaf("Routing", "/NuxtDocs/Routing")],
            )],
        );
        sidebar.insert(
            "/NuxtDocs/advanced/",
            vec![SidebarItem::group(
                "Advanced",
                vec![SidebarItem::leaf("Hooks", "/NuxtDocs/advanced/Hooks")],
            )],
        );
        sidebar
    }

    #[test]
    fn test_kind_classification() {
        let leaf = SidebarItem::leaf("Routing", "/guide/routing");
        assert_eq!(leaf.kind(), NodeKind::Leaf);

        let group = SidebarItem::group("Core", vec![leaf.clone()]);
        assert_eq!(group.kind(), NodeKind::Group);

        // A group with a link is still a group; the link is ignored.
        let mut linked_group = SidebarItem::group("Core", vec![leaf]);
        linked_group.link = Some("/guide/".to_owned());
        assert_eq!(linked_group.kind(), NodeKind::Group);
        assert_eq!(linked_group.target(), None);
    }

    #[test]
    fn test_separator_rows() {
        let separator = SidebarItem {
            text: String::new(),
            link: Some(String::new()),
            ..SidebarItem::default()
        };
        assert!(separator.is_separator());
        assert_eq!(separator.target(), None);

        let no_link = SidebarItem {
            text: "heading only".to_owned(),
            ..SidebarItem::default()
        };
        assert!(no_link.is_separator());

        let leaf = SidebarItem::leaf("Routing", "/guide/routing");
        assert!(!leaf.is_separator());
        assert_eq!(leaf.target(), Some("/guide/routing"));
    }

    #[test]
    fn test_resolve_exact_scenario() {
        let sidebar = sample_sidebar();
        let nav = sidebar.resolve("/NuxtDocs/Routing").unwrap();

        assert_eq!(nav.prefix, "/NuxtDocs/");
        assert_eq!(nav.items.len(), 1);
        assert_eq!(nav.items[0].text, "Core");
        assert_eq!(nav.items[0].items[0].text, "Routing");
        assert_eq!(
            nav.items[0].items[0].link.as_deref(),
            Some("/NuxtDocs/Routing")
        );
    }

    #[test]
    fn test_resolve_longest_prefix_wins() {
        let sidebar = sample_sidebar();
        let nav = sidebar.resolve("/NuxtDocs/advanced/Hooks").unwrap();
        assert_eq!(nav.prefix, "/NuxtDocs/advanced/");
        assert_eq!(nav.items[0].text, "Advanced");
    }

    #[test]
    fn test_resolve_falls_back_to_root() {
        let sidebar = sample_sidebar();
        let nav = sidebar.resolve("/other/page").unwrap();
        assert_eq!(nav.prefix, "/");
        assert_eq!(nav.items[0].text, "Welcome");
    }

    #[test]
    fn test_resolve_without_trailing_slash() {
        let sidebar = sample_sidebar();
        let nav = sidebar.resolve("/NuxtDocs").unwrap();
        assert_eq!(nav.prefix, "/NuxtDocs/");
    }

    #[test]
    fn test_resolve_no_match() {
        let mut sidebar = Sidebar::new();
        sidebar.insert("/guide/", Vec::new());
        assert_eq!(sidebar.resolve("/reference/api"), None);
    }

    #[test]
    fn test_authored_order_preserved() {
        let items = vec![
            SidebarItem::leaf("Second declared first", "/b"),
            SidebarItem::leaf("First declared second", "/a"),
            SidebarItem::leaf("First declared second", "/a"),
        ];
        let group = SidebarItem::group("Core", items.clone());
        // No sorting, no deduplication.
        assert_eq!(group.items, items);
    }

    #[test]
    fn test_deserialize_sidebar_table() {
        let toml = r#"
[["/NuxtDocs/"]]
text = "Core"

[["/NuxtDocs/".items]]
text = "Routing"
link = "/NuxtDocs/Routing"

[["/NuxtDocs/".items]]
text = ""
link = ""

[["/NuxtDocs/".items]]
text = "Auto Import"
link = "/NuxtDocs/AutoImport"
"#;
        let sidebar: Sidebar = toml::from_str(toml).unwrap();
        let nav = sidebar.resolve("/NuxtDocs/Routing").unwrap();
        let core = &nav.items[0];
        assert_eq!(core.items.len(), 3);
        assert!(core.items[1].is_separator());
    }

    #[test]
    fn test_navigation_serializes_for_frontend() {
        let sidebar = sample_sidebar();
        let nav = sidebar.resolve("/NuxtDocs/Routing").unwrap();
        let json = serde_json::to_value(&nav).unwrap();

        assert_eq!(json["prefix"], "/NuxtDocs/");
        assert_eq!(json["items"][0]["text"], "Core");
        assert_eq!(json["items"][0]["items"][0]["link"], "/NuxtDocs/Routing");
        // Leaves serialize without an empty items array.
        assert!(json["items"][0]["items"][0].get("items").is_none());
    }
}
