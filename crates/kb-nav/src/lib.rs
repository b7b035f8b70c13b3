//! Navigation tree model for KB.
//!
//! Provides the statically-declared navigation structure a documentation
//! site hands to its renderer: top navigation entries ([`NavEntry`]) and
//! a sidebar mapping from URL-path prefixes to ordered navigation trees
//! ([`Sidebar`], [`SidebarItem`]).
//!
//! # Architecture
//!
//! The whole structure is built once from configuration and never mutated
//! afterwards. The only operation with any logic is [`Sidebar::resolve`],
//! which selects the sidebar tree for the current page by longest-prefix
//! match. Everything else is plain data handed to the rendering layer.
//!
//! Authored order is preserved exactly: children render in the order they
//! were declared, with no sorting or deduplication. Placeholder rows with
//! an empty `link` are legitimate separator entries and are kept as-is;
//! the rendering layer decides how to display them.

mod nav;
mod sidebar;

pub use nav::NavEntry;
pub use sidebar::{Navigation, NodeKind, Sidebar, SidebarItem};
