//! Configuration management for docnav.
//!
//! Parses `docnav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.url`
//! - `footer[].items[].href`
//! - `navbar[].href`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override sidebars file.
    pub sidebars: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docnav.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site URL configuration.
    pub site: SiteConfig,
    /// Documentation configuration (paths are relative strings from TOML).
    #[serde(default)]
    docs: DocsConfigRaw,
    /// Footer columns in display order.
    pub footer: Vec<FooterSectionConfig>,
    /// Navbar entries in display order.
    pub navbar: Vec<NavbarItemConfig>,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    #[allow(clippy::derivable_impls)]
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site URL configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Public site URL (e.g. `https://docs.usehexis.com`).
    pub url: Option<String>,
    /// URL prefix of the whole site.
    pub base_url: String,
    /// URL prefix of the docs, below `base_url`.
    pub route_base_path: String,
    /// Copyright line shown under the footer columns.
    pub footer_copyright: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: None,
            base_url: "/".to_owned(),
            route_base_path: "/".to_owned(),
            footer_copyright: None,
        }
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
    sidebars: Option<String>,
    report_orphans: Option<bool>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Source directory for markdown files.
    pub source_dir: PathBuf,
    /// Sidebars file (`.yaml`, `.yml` or `.json`).
    pub sidebars: PathBuf,
    /// Whether to warn about pages no sidebar references.
    pub report_orphans: bool,
}

/// Footer column.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterSectionConfig {
    /// Column heading.
    pub title: String,
    /// Entries in display order.
    #[serde(default)]
    pub items: Vec<FooterItemConfig>,
}

/// Footer entry as written in TOML.
///
/// Exactly one of `href`, `doc` and `category` must be set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterItemConfig {
    /// Link text.
    pub label: Option<String>,
    /// Static URL.
    pub href: Option<String>,
    /// Document id.
    pub doc: Option<String>,
    /// Top-level sidebar category label.
    pub category: Option<String>,
}

/// Target of a validated footer entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterItemTarget<'a> {
    /// Static URL.
    Href(&'a str),
    /// Document id.
    Doc(&'a str),
    /// Top-level sidebar category label.
    Category(&'a str),
}

impl FooterItemConfig {
    /// The single target of this entry, or `None` if zero or several are set.
    #[must_use]
    pub fn target(&self) -> Option<FooterItemTarget<'_>> {
        match (&self.href, &self.doc, &self.category) {
            (Some(href), None, None) => Some(FooterItemTarget::Href(href)),
            (None, Some(doc), None) => Some(FooterItemTarget::Doc(doc)),
            (None, None, Some(category)) => Some(FooterItemTarget::Category(category)),
            _ => None,
        }
    }
}

/// Navbar entry as written in TOML.
///
/// Exactly one of `sidebar`, `href`, `doc` and `category` must be set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavbarItemConfig {
    /// Link text.
    pub label: Option<String>,
    /// Side of the bar.
    #[serde(default)]
    pub position: NavbarPosition,
    /// Sidebar id.
    pub sidebar: Option<String>,
    /// Static URL.
    pub href: Option<String>,
    /// Document id.
    pub doc: Option<String>,
    /// Top-level sidebar category label.
    pub category: Option<String>,
}

/// Side of the navbar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavbarPosition {
    /// Left side (default).
    #[default]
    Left,
    /// Right side.
    Right,
}

/// Target of a validated navbar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarItemTarget<'a> {
    /// Sidebar id.
    Sidebar(&'a str),
    /// Static URL.
    Href(&'a str),
    /// Document id.
    Doc(&'a str),
    /// Top-level sidebar category label.
    Category(&'a str),
}

impl NavbarItemConfig {
    /// The single target of this entry, or `None` if zero or several are set.
    #[must_use]
    pub fn target(&self) -> Option<NavbarItemTarget<'_>> {
        match (&self.sidebar, &self.href, &self.doc, &self.category) {
            (Some(sidebar), None, None, None) => Some(NavbarItemTarget::Sidebar(sidebar)),
            (None, Some(href), None, None) => Some(NavbarItemTarget::Href(href)),
            (None, None, Some(doc), None) => Some(NavbarItemTarget::Doc(doc)),
            (None, None, None, Some(category)) => Some(NavbarItemTarget::Category(category)),
            _ => None,
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
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.url`").
        field: String,
        /// Error message (e.g., "${`DOCS_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

/// Require a URL path prefix to start with `/`.
fn require_url_path(path: &str, field: &str) -> Result<(), ConfigError> {
    if !path.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "{field} must start with /"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docnav.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(sidebars) = &settings.sidebars {
            self.docs_resolved.sidebars.clone_from(sidebars);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_from(current)
    }

    /// Search for config file in `start` and its parents.
    fn discover_from(mut current: PathBuf) -> Option<PathBuf> {
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

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            docs: DocsConfigRaw::default(),
            footer: Vec::new(),
            navbar: Vec::new(),
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
                sidebars: base.join("sidebars.yaml"),
                report_orphans: true,
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before validation
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading and resolution
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are properly set and contain valid values.
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_footer()?;
        self.validate_navbar()?;
        Ok(())
    }

    /// Validate site configuration.
    fn validate_site(&self) -> Result<(), ConfigError> {
        if let Some(ref url) = self.site.url {
            require_non_empty(url, "site.url")?;
            require_http_url(url, "site.url")?;
        }
        require_url_path(&self.site.base_url, "site.base_url")?;
        require_url_path(&self.site.route_base_path, "site.route_base_path")?;
        if let Some(ref copyright) = self.site.footer_copyright {
            require_non_empty(copyright, "site.footer_copyright")?;
        }
        Ok(())
    }

    /// Validate footer configuration.
    fn validate_footer(&self) -> Result<(), ConfigError> {
        for (i, section) in self.footer.iter().enumerate() {
            require_non_empty(&section.title, &format!("footer[{i}].title"))?;

            for (j, item) in section.items.iter().enumerate() {
                let field = format!("footer[{i}].items[{j}]");
                let Some(target) = item.target() else {
                    return Err(ConfigError::Validation(format!(
                        "{field} must set exactly one of href, doc or category"
                    )));
                };
                if let Some(ref label) = item.label {
                    require_non_empty(label, &format!("{field}.label"))?;
                }
                if let FooterItemTarget::Href(href) = target {
                    require_non_empty(href, &format!("{field}.href"))?;
                    if item.label.is_none() {
                        return Err(ConfigError::Validation(format!(
                            "{field} links to {href} and needs a label"
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Validate navbar configuration.
    fn validate_navbar(&self) -> Result<(), ConfigError> {
        for (i, item) in self.navbar.iter().enumerate() {
            let field = format!("navbar[{i}]");
            let Some(target) = item.target() else {
                return Err(ConfigError::Validation(format!(
                    "{field} must set exactly one of sidebar, href, doc or category"
                )));
            };
            if let Some(ref label) = item.label {
                require_non_empty(label, &format!("{field}.label"))?;
            }
            match target {
                NavbarItemTarget::Sidebar(sidebar) => {
                    require_non_empty(sidebar, &format!("{field}.sidebar"))?;
                }
                NavbarItemTarget::Href(href) => {
                    require_non_empty(href, &format!("{field}.href"))?;
                    if item.label.is_none() {
                        return Err(ConfigError::Validation(format!(
                            "{field} links to {href} and needs a label"
                        )));
                    }
                }
                NavbarItemTarget::Doc(_) | NavbarItemTarget::Category(_) => {}
            }
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref url) = self.site.url {
            self.site.url = Some(expand::expand_env(url, "site.url")?);
        }

        for (i, section) in self.footer.iter_mut().enumerate() {
            for (j, item) in section.items.iter_mut().enumerate() {
                if let Some(ref href) = item.href {
                    let field = format!("footer[{i}].items[{j}].href");
                    item.href = Some(expand::expand_env(href, &field)?);
                }
            }
        }

        for (i, item) in self.navbar.iter_mut().enumerate() {
            if let Some(ref href) = item.href {
                let field = format!("navbar[{i}].href");
                item.href = Some(expand::expand_env(href, &field)?);
            }
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.docs_resolved = DocsConfig {
            source_dir: resolve(self.docs.source_dir.as_deref(), "docs"),
            sidebars: resolve(self.docs.sidebars.as_deref(), "sidebars.yaml"),
            report_orphans: self.docs.report_orphans.unwrap_or(true),
        };
    }
}
