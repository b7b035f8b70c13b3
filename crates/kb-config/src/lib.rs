//! Configuration management for KB.
//!
//! Parses `kb.toml` site configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! The configuration is the single static value a documentation site
//! hands to its host framework at build time: site identity (`title`,
//! `description`, `lang`, `base`), page `head` tags, the `[theme]`
//! section (top navigation, sidebar trees, social links, footer,
//! search provider) and the `[markdown]` section (highlighting themes,
//! line numbers).
//!
//! Validation is deliberately light: placeholder sidebar rows with an
//! empty `link` are a legitimate authoring pattern and always pass.
//! Only non-empty links are checked for well-formedness.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use kb_nav::{NavEntry, Sidebar, SidebarItem};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "kb.toml";

/// Site configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site title.
    pub title: String,
    /// Site description for page metadata.
    pub description: String,
    /// Content language tag (e.g., `en-US`, `zh-CN`).
    pub lang: String,
    /// Base URL path prefix the site is served under.
    pub base: String,
    /// Extra tags for the document head.
    pub head: Vec<HeadTag>,
    /// Theme configuration.
    pub theme: ThemeConfig,
    /// Markdown rendering options passed to the host framework.
    pub markdown: MarkdownConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Documentation".to_owned(),
            description: String::new(),
            lang: "en-US".to_owned(),
            base: "/".to_owned(),
            head: Vec::new(),
            theme: ThemeConfig::default(),
            markdown: MarkdownConfig::default(),
            config_path: None,
        }
    }
}

/// Tag descriptor for the document head.
///
/// Authored as `[[head]]` entries, e.g.:
///
/// ```toml
/// [[head]]
/// tag = "meta"
/// attrs = { name = "theme-color", content = "#42b983" }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HeadTag {
    /// Tag name (e.g., `meta`, `link`).
    pub tag: String,
    /// Tag attributes.
    pub attrs: BTreeMap<String, String>,
}

/// Theme configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Logo asset path.
    pub logo: Option<String>,
    /// Top navigation bar entries.
    pub nav: Vec<NavEntry>,
    /// Sidebar trees keyed by path prefix.
    pub sidebar: Sidebar,
    /// Social links shown in the navigation bar.
    pub social_links: Vec<SocialLink>,
    /// Footer content.
    pub footer: Option<FooterConfig>,
    /// Search configuration.
    pub search: Option<SearchConfig>,
}

/// Social link entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    /// Icon name (e.g., `github`).
    pub icon: String,
    /// Link URL.
    pub link: String,
}

/// Footer content.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    /// Footer message line.
    pub message: String,
    /// Copyright line.
    pub copyright: String,
}

/// Search configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Search provider name.
    pub provider: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            provider: "local".to_owned(),
        }
    }
}

/// Markdown rendering options.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Syntax-highlighting theme names.
    pub theme: CodeTheme,
    /// Render line numbers in code blocks.
    pub line_numbers: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            theme: CodeTheme::default(),
            line_numbers: false,
        }
    }
}

/// Light/dark syntax-highlighting theme pair.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CodeTheme {
    /// Theme used in light mode.
    pub light: String,
    /// Theme used in dark mode.
    pub dark: String,
}

impl Default for CodeTheme {
    fn default() -> Self {
        Self {
            light: "github-light".to_owned(),
            dark: "github-dark".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a non-empty link to be a well-formed target.
///
/// Accepts site paths (starting with `/`) and absolute `http(s)` URLs.
/// Whitespace anywhere in the value is rejected. Empty values are the
/// caller's responsibility; placeholder rows never reach this check.
fn require_well_formed_link(link: &str, field: &str) -> Result<(), ConfigError> {
    if link.chars().any(char::is_whitespace) {
        return Err(ConfigError::Validation(format!(
            "{field} contains whitespace: {link:?}"
        )));
    }
    if !link.starts_with('/') && !link.starts_with("http://") && !link.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with / or http(s)://: {link:?}"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `kb.toml` in the current directory and parents,
    /// falling back to defaults when nothing is found.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist, or if
    /// parsing or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)
        } else {
            Ok(Self::default())
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks the `base` prefix shape and that every non-empty nav and
    /// sidebar link is well-formed. Empty links (separator/placeholder
    /// rows) always pass. Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any check fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_base()?;
        self.validate_nav()?;
        self.validate_sidebar()?;
        Ok(())
    }

    fn validate_base(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.base, "base")?;
        if !self.base.starts_with('/') || !self.base.ends_with('/') {
            return Err(ConfigError::Validation(format!(
                "base must start and end with /: {:?}",
                self.base
            )));
        }
        Ok(())
    }

    fn validate_nav(&self) -> Result<(), ConfigError> {
        for entry in &self.theme.nav {
            if !entry.link.is_empty() {
                require_well_formed_link(&entry.link, "theme.nav link")?;
            }
        }
        Ok(())
    }

    fn validate_sidebar(&self) -> Result<(), ConfigError> {
        fn check_items(items: &[SidebarItem], prefix: &str) -> Result<(), ConfigError> {
            for item in items {
                if let Some(link) = item.link.as_deref()
                    && !link.is_empty()
                {
                    require_well_formed_link(
                        link,
                        &format!("theme.sidebar[{prefix:?}] link"),
                    )?;
                }
                check_items(&item.items, prefix)?;
            }
            Ok(())
        }

        for (prefix, items) in self.theme.sidebar.entries() {
            check_items(items, prefix)?;
        }
        Ok(())
    }
}
