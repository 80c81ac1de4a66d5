//! Human-authored sidebar descriptions.
//!
//! A sidebars file maps sidebar ids to item lists. Each item is either a
//! bare document id, a doc object, or a category:
//!
//! ```yaml
//! docsSidebar:
//!   - intro
//!   - type: doc
//!     id: script-lifecycle
//!     label: Lifecycle
//!   - type: category
//!     label: API Reference
//!     collapsed: false
//!     items:
//!       - api/core
//!       - api/player
//! ```
//!
//! Items that match none of these shapes are kept as
//! [`ItemSpec::Malformed`] so the builder can report where they are.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::SidebarsError;

/// `type: doc` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum DocTag {
    Doc,
}

/// `type: category` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum CategoryTag {
    Category,
}

/// One element of a sidebar item list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ItemSpec {
    /// Bare document id (`"api/core"`).
    Id(String),
    /// `{type: doc, id, label?}`.
    Doc(DocSpec),
    /// `{type?: category, label, collapsed?, collapsible?, link?, items}`.
    Category(CategorySpec),
    /// Anything else, kept verbatim for error reporting.
    ///
    /// A YAML value so that any input deserializes, including mappings
    /// with non-string keys.
    Malformed(serde_yaml::Value),
}

/// Doc object form of a sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocSpec {
    #[serde(rename = "type")]
    kind: DocTag,
    /// Document id.
    pub id: String,
    /// Sidebar label override.
    #[serde(default)]
    pub label: Option<String>,
}

/// Category landing page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", deny_unknown_fields)]
pub enum CategoryLinkSpec {
    /// Landing page is an existing document.
    Doc {
        /// Document id.
        id: String,
    },
}

/// Category descriptor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategorySpec {
    #[serde(rename = "type", default)]
    kind: Option<CategoryTag>,
    /// Display label.
    pub label: String,
    /// Whether the category starts collapsed (default: `true`).
    #[serde(default)]
    pub collapsed: Option<bool>,
    /// Whether the category can be collapsed at all (default: `true`).
    #[serde(default)]
    pub collapsible: Option<bool>,
    /// Optional landing page.
    #[serde(default)]
    pub link: Option<CategoryLinkSpec>,
    /// Child items, in display order.
    pub items: Vec<ItemSpec>,
}

impl ItemSpec {
    /// Bare document reference.
    #[must_use]
    pub fn doc(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    /// Document reference with a label override.
    #[must_use]
    pub fn labeled_doc(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Doc(DocSpec {
            kind: DocTag::Doc,
            id: id.into(),
            label: Some(label.into()),
        })
    }

    /// Category with default flags.
    #[must_use]
    pub fn category(label: impl Into<String>, items: Vec<ItemSpec>) -> Self {
        Self::Category(CategorySpec::new(label, items))
    }
}

impl CategorySpec {
    /// Category with default flags and no landing page.
    #[must_use]
    pub fn new(label: impl Into<String>, items: Vec<ItemSpec>) -> Self {
        Self {
            kind: None,
            label: label.into(),
            collapsed: None,
            collapsible: None,
            link: None,
            items,
        }
    }

    /// Set the `collapsed` flag.
    #[must_use]
    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = Some(collapsed);
        self
    }

    /// Set the `collapsible` flag.
    #[must_use]
    pub fn collapsible(mut self, collapsible: bool) -> Self {
        self.collapsible = Some(collapsible);
        self
    }

    /// Set the landing page document.
    #[must_use]
    pub fn link(mut self, id: impl Into<String>) -> Self {
        self.link = Some(CategoryLinkSpec::Doc { id: id.into() });
        self
    }
}

impl From<CategorySpec> for ItemSpec {
    fn from(spec: CategorySpec) -> Self {
        Self::Category(spec)
    }
}

/// Explain why a value did not match any item shape.
///
/// Re-parses mapping values strictly against the shape their `type` field
/// asks for, so messages read like "unknown field `colapsed`".
pub(crate) fn describe_malformed(value: &serde_yaml::Value) -> String {
    use serde_yaml::Value;

    match value {
        Value::Mapping(map) => {
            if let Some(key) = map.keys().find(|key| !key.is_string()) {
                return format!("mapping keys must be strings, found {}", kind_of(key));
            }
            match map.get("type").and_then(Value::as_str) {
                Some("doc") => strict_error::<DocSpec>(value),
                Some("category") | None => strict_error::<CategorySpec>(value),
                Some(other) => format!("unsupported item type `{other}`"),
            }
        }
        Value::String(_) => "unexpected string".to_owned(),
        other => format!(
            "expected a document id or a category, found {}",
            kind_of(other)
        ),
    }
}

fn kind_of(value: &serde_yaml::Value) -> &'static str {
    use serde_yaml::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

fn strict_error<T: for<'de> Deserialize<'de>>(value: &serde_yaml::Value) -> String {
    match serde_yaml::from_value::<T>(value.clone()) {
        Ok(_) => "unexpected item shape".to_owned(),
        Err(e) => e.to_string(),
    }
}

/// All sidebars of a site, keyed by sidebar id.
///
/// Sidebar ids iterate in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct SidebarsSpec {
    sidebars: BTreeMap<String, Vec<ItemSpec>>,
}

impl SidebarsSpec {
    /// Create an empty set of sidebars.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a sidebar.
    #[must_use]
    pub fn with_sidebar(mut self, id: impl Into<String>, items: Vec<ItemSpec>) -> Self {
        self.sidebars.insert(id.into(), items);
        self
    }

    /// Parse a YAML sidebars document.
    ///
    /// # Errors
    ///
    /// Returns [`SidebarsError::Parse`] if the YAML is not a map of lists.
    pub fn from_yaml_str(content: &str) -> Result<Self, SidebarsError> {
        serde_yaml::from_str(content).map_err(|e| SidebarsError::Parse {
            path: None,
            message: e.to_string(),
        })
    }

    /// Parse a JSON sidebars document.
    ///
    /// # Errors
    ///
    /// Returns [`SidebarsError::Parse`] if the JSON is not an object of arrays.
    pub fn from_json_str(content: &str) -> Result<Self, SidebarsError> {
        serde_json::from_str(content).map_err(|e| SidebarsError::Parse {
            path: None,
            message: e.to_string(),
        })
    }

    /// Load a sidebars file, choosing the format by extension.
    ///
    /// `.json` files are parsed as JSON, `.yml` and `.yaml` as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`SidebarsError`] if the file cannot be read, has an
    /// unsupported extension, or fails to parse.
    pub fn load(path: &Path) -> Result<Self, SidebarsError> {
        let content = fs::read_to_string(path).map_err(|source| SidebarsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        let parsed = match extension.as_str() {
            "json" => Self::from_json_str(&content),
            "yml" | "yaml" => Self::from_yaml_str(&content),
            _ => return Err(SidebarsError::UnsupportedFormat(path.to_path_buf())),
        };

        parsed.map_err(|e| e.with_path(path))
    }

    /// Items of one sidebar.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&[ItemSpec]> {
        self.sidebars.get(id).map(Vec::as_slice)
    }

    /// Iterate sidebars in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ItemSpec])> {
        self.sidebars
            .iter()
            .map(|(id, items)| (id.as_str(), items.as_slice()))
    }

    /// Number of sidebars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sidebars.len()
    }

    /// True if there are no sidebars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sidebars.is_empty()
    }
}
