//! Theme layer for KB documentation sites.
//!
//! Renders the navigation model from [`kb-nav`](kb_nav) to HTML and
//! provides the presentational components that documentation content can
//! reference by name:
//!
//! - [`DirectoryTree`]: an illustrative file-layout tree with per-node
//!   expand/collapse affordance
//! - [`Section`]: a titled container wrapping arbitrary content
//!
//! Components implement the [`Component`] trait and are registered into a
//! [`ComponentRegistry`] under their name, mirroring how a host framework
//! exposes a global component namespace to content pages.
//!
//! All rendering here is synchronous and stateless apart from the
//! ephemeral [`TreeState`] owned by the caller: the navigation model is
//! immutable, and every render pass reads it without coordination.

mod component;
mod section;
mod sidebar;
mod tree;
mod util;

pub use component::{Component, ComponentArgs, ComponentRegistry};
pub use section::Section;
pub use sidebar::{render_nav, render_navigation, render_sidebar};
pub use tree::{DirectoryTree, TreeNode, TreeState};
pub use util::escape_html;
