//! Component trait and registry.
//!
//! Content pages reference presentational components by name. The host
//! framework looks them up in a [`ComponentRegistry`] and calls
//! [`Component::render`] with the arguments authored inline.

use std::collections::HashMap;

/// Arguments passed to a component from a content page.
///
/// `title` is the authored heading (may be empty); `body` is the nested
/// content, already rendered by the host. Components must pass the body
/// through verbatim.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ComponentArgs {
    /// Heading text for the component.
    pub title: String,
    /// Nested content, rendered by the host framework.
    pub body: String,
}

impl ComponentArgs {
    /// Create arguments with a title and body.
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Named presentational component rendering to an HTML string.
///
/// Components hold only their authored, static data. Per-render UI state
/// (like expand/collapse toggles) lives with the caller, not the
/// component; see [`TreeState`](crate::TreeState).
pub trait Component: Send {
    /// Component name used for registration and lookup.
    fn name(&self) -> &str;

    /// Render the component to HTML.
    fn render(&self, args: &ComponentArgs) -> String;
}

/// Registry of components keyed by name.
///
/// Registration replaces any existing component with the same name, so a
/// site can override a built-in component.
#[derive(Default)]
pub struct ComponentRegistry {
    components: HashMap<String, Box<dyn Component>>,
}

impl ComponentRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component under its own name.
    pub fn register<C: Component + 'static>(&mut self, component: C) {
        self.components
            .insert(component.name().to_owned(), Box::new(component));
    }

    /// Look up a component by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn Component> {
        self.components.get(name).map(Box::as_ref)
    }

    /// Render a registered component.
    ///
    /// Returns `None` when no component with that name is registered.
    #[must_use]
    pub fn render(&self, name: &str, args: &ComponentArgs) -> Option<String> {
        self.get(name).map(|c| c.render(args))
    }

    /// Registered component names, sorted for stable output.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.components.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
