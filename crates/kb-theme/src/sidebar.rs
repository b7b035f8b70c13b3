//! HTML rendering for the navigation model.
//!
//! Renders top navigation entries and resolved sidebar trees to HTML in
//! authored order. Group nodes honor their `collapsible`/`collapsed`
//! flags; leaves with an empty link render as non-clickable text rather
//! than a broken anchor.

use std::fmt::Write;

use kb_nav::{NavEntry, Navigation, NodeKind, SidebarItem};

use crate::util::escape_html;

/// Render the top navigation bar.
///
/// The entry matching `current_path` (per [`NavEntry::is_active`]) gets
/// an `active` class.
#[must_use]
pub fn render_nav(entries: &[NavEntry], current_path: &str) -> String {
    let mut out = String::new();
    out.push_str(r#"<nav class="top-nav">"#);
    for entry in entries {
        let class = if entry.is_active(current_path) {
            "nav-link active"
        } else {
            "nav-link"
        };
        write!(
            out,
            r#"<a class="{class}" href="{}">{}</a>"#,
            escape_html(&entry.link),
            escape_html(&entry.text)
        )
        .unwrap();
    }
    out.push_str("</nav>");
    out
}

/// Render a resolved sidebar.
#[must_use]
pub fn render_navigation(nav: &Navigation) -> String {
    let mut out = String::new();
    write!(
        out,
        r#"<aside class="sidebar" data-prefix="{}">"#,
        escape_html(&nav.prefix)
    )
    .unwrap();
    out.push_str(&render_sidebar(&nav.items));
    out.push_str("</aside>");
    out
}

/// Render a list of sidebar nodes in authored order.
#[must_use]
pub fn render_sidebar(items: &[SidebarItem]) -> String {
    let mut out = String::new();
    out.push_str(r#"<ul class="sidebar-items">"#);
    for item in items {
        render_item(item, &mut out);
    }
    out.push_str("</ul>");
    out
}

fn render_item(item: &SidebarItem, out: &mut String) {
    out.push_str(r#"<li class="sidebar-item">"#);
    match item.kind() {
        NodeKind::Group => render_group(item, out),
        NodeKind::Leaf => render_leaf(item, out),
    }
    out.push_str("</li>");
}

fn render_group(item: &SidebarItem, out: &mut String) {
    let text = escape_html(&item.text);
    if item.collapsible {
        let open = if item.collapsed { "" } else { " open" };
        write!(
            out,
            r#"<details class="sidebar-group"{open}><summary class="sidebar-group-title">{text}</summary>"#
        )
        .unwrap();
    } else {
        write!(
            out,
            r#"<section class="sidebar-group"><p class="sidebar-group-title">{text}</p>"#
        )
        .unwrap();
    }

    for child in &item.items {
        render_item(child, out);
    }

    out.push_str(if item.collapsible {
        "</details>"
    } else {
        "</section>"
    });
}

fn render_leaf(item: &SidebarItem, out: &mut String) {
    match item.target() {
        Some(link) => write!(
            out,
            r#"<a class="sidebar-link" href="{}">{}</a>"#,
            escape_html(link),
            escape_html(&item.text)
        )
        .unwrap(),
        // Separator/placeholder row: plain text, never a broken anchor.
        None => write!(
            out,
            r#"<span class="sidebar-text">{}</span>"#,
            escape_html(&item.text)
        )
        .unwrap(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kb_nav::Sidebar;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_nav_marks_active_entry() {
        let entries = vec![
            NavEntry::new("Home", "/"),
            NavEntry::new("Nuxt3", "/NuxtDocs/").with_active_match("/NuxtDocs/"),
        ];
        let html = render_nav(&entries, "/NuxtDocs/Routing");

        assert!(html.contains(r#"<a class="nav-link" href="/">Home</a>"#));
        assert!(html.contains(r#"<a class="nav-link active" href="/NuxtDocs/">Nuxt3</a>"#));
    }

    #[test]
    fn test_render_sidebar_scenario() {
        let mut sidebar = Sidebar::new();
        sidebar.insert(
            "/NuxtDocs/",
            vec![SidebarItem::group(
                "Core",
                vec![SidebarItem::leaf("Routing", "/NuxtDocs/Routing")],
            )],
        );
        sidebar.insert(
            "/LaravelDocs/",
            vec![SidebarItem::group(
                "Laravel Core",
                vec![SidebarItem::leaf("Routing", "/LaravelDocs/Routing")],
            )],
        );

        let nav = sidebar.resolve("/NuxtDocs/Routing").unwrap();
        let html = render_navigation(&nav);

        assert!(html.contains(r#"data-prefix="/NuxtDocs/""#));
        assert!(html.contains("Core"));
        assert!(html.contains(r#"<a class="sidebar-link" href="/NuxtDocs/Routing">Routing</a>"#));
        // Entries from other prefix mappings must not leak in.
        assert!(!html.contains("Laravel Core"));
        assert!(!html.contains("/LaravelDocs/Routing"));
    }

    #[test]
    fn test_empty_link_renders_as_text() {
        let items = vec![SidebarItem {
            text: "Advanced topics".to_owned(),
            link: Some(String::new()),
            ..SidebarItem::default()
        }];
        let html = render_sidebar(&items);

        assert!(html.contains(r#"<span class="sidebar-text">Advanced topics</span>"#));
        assert!(!html.contains("<a "));
    }

    #[test]
    fn test_collapsible_group_renders_details() {
        let group =
            SidebarItem::group("Core", vec![SidebarItem::leaf("Routing", "/r")])
                .with_collapsible(false);
        let html = render_sidebar(&[group]);
        assert!(html.contains(r#"<details class="sidebar-group" open>"#));
        assert!(html.contains("<summary"));
    }

    #[test]
    fn test_collapsed_group_starts_closed() {
        let group =
            SidebarItem::group("Core", vec![SidebarItem::leaf("Routing", "/r")])
                .with_collapsible(true);
        let html = render_sidebar(&[group]);
        assert!(html.contains(r#"<details class="sidebar-group">"#));
        assert!(!html.contains(" open>"));
    }

    #[test]
    fn test_non_collapsible_group_is_static() {
        let group = SidebarItem::group("Core", vec![SidebarItem::leaf("Routing", "/r")]);
        let html = render_sidebar(&[group]);
        assert!(html.contains(r#"<section class="sidebar-group">"#));
        assert!(!html.contains("<details"));
    }

    #[test]
    fn test_nested_groups_render_in_order() {
        let items = vec![SidebarItem::group(
            "Outer",
            vec![
                SidebarItem::leaf("First", "/a"),
                SidebarItem::group("Inner", vec![SidebarItem::leaf("Second", "/b")]),
            ],
        )];
        let html = render_sidebar(&items);

        let first = html.find("First").unwrap();
        let second = html.find("Second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_links_and_labels_escaped() {
        let items = vec![SidebarItem::leaf("A & B", "/a?x=1&y=2")];
        let html = render_sidebar(&items);
        assert_eq!(
            html,
            r#"<ul class="sidebar-items"><li class="sidebar-item"><a class="sidebar-link" href="/a?x=1&amp;y=2">A &amp; B</a></li></ul>"#
        );
    }
}
