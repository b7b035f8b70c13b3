//! Generic section wrapper component.

use std::fmt::Write;

use crate::component::{Component, ComponentArgs};
use crate::util::escape_html;

/// Titled container wrapping arbitrary documentation content.
///
/// Renders a fixed layout with no interactive state: the title as a
/// heading (HTML-escaped, since it is authored text) and the body
/// verbatim (it is already rendered by the host). An empty title omits
/// the heading element entirely.
#[derive(Clone, Copy, Debug, Default)]
pub struct Section;

impl Section {
    /// Render a section with the given title and body.
    #[must_use]
    pub fn render(title: &str, body: &str) -> String {
        let mut out = String::new();
        out.push_str(r#"<section class="custom-section">"#);
        if !title.is_empty() {
            write!(
                out,
                r#"<div class="custom-section-title">{}</div>"#,
                escape_html(title)
            )
            .unwrap();
        }
        write!(out, r#"<div class="custom-section-body">{body}</div>"#).unwrap();
        out.push_str("</section>");
        out
    }
}

impl Component for Section {
    fn name(&self) -> &'static str {
        "section"
    }

    fn render(&self, args: &ComponentArgs) -> String {
        Self::render(&args.title, &args.body)
    }
}
