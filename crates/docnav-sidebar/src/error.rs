//! Sidebar error types.

use std::fmt;
use std::path::{Path, PathBuf};

use docnav_catalog::DocumentId;

/// One step from a parent to a child node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment {
    /// Position in an item list.
    Item(usize),
    /// A category's landing page link.
    Link,
}

/// Position of a node: sidebar id plus the steps from the root.
///
/// Displayed as `docsSidebar[2].items[0]`, or `docsSidebar[2].link` for a
/// category landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePath {
    sidebar: String,
    segments: Vec<PathSegment>,
}

impl NodePath {
    /// Path of a sidebar root.
    #[must_use]
    pub fn root(sidebar: impl Into<String>) -> Self {
        Self {
            sidebar: sidebar.into(),
            segments: Vec::new(),
        }
    }

    /// Path of the `index`-th child of this node.
    #[must_use]
    pub fn item(&self, index: usize) -> Self {
        self.with(PathSegment::Item(index))
    }

    /// Path of this category's landing link.
    #[must_use]
    pub fn link(&self) -> Self {
        self.with(PathSegment::Link)
    }

    fn with(&self, segment: PathSegment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self {
            sidebar: self.sidebar.clone(),
            segments,
        }
    }

    /// Sidebar id.
    #[must_use]
    pub fn sidebar(&self) -> &str {
        &self.sidebar
    }

    /// Steps from the sidebar root.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sidebar)?;
        for (depth, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Item(index) if depth == 0 => write!(f, "[{index}]")?,
                PathSegment::Item(index) => write!(f, ".items[{index}]")?,
                PathSegment::Link => f.write_str(".link")?,
            }
        }
        Ok(())
    }
}

/// Navigation tree validation error.
///
/// Every variant identifies the offending node so the authoring error can
/// be located.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// A category has zero items.
    #[error("{path}: category \"{label}\" has no items")]
    EmptyCategory {
        /// Category position.
        path: NodePath,
        /// Category label.
        label: String,
    },
    /// A document is referenced more than once in one tree.
    #[error("{path}: document `{id}` is already referenced at {first}")]
    DuplicateReference {
        /// Position of the repeated reference.
        path: NodePath,
        /// Position of the first reference.
        first: NodePath,
        /// Repeated document.
        id: DocumentId,
    },
    /// A document id is not in the catalog.
    #[error("{path}: unknown document `{id}`")]
    UnknownDocument {
        /// Reference position.
        path: NodePath,
        /// Missing document.
        id: DocumentId,
    },
    /// An element is neither a document reference nor a category.
    #[error("{path}: malformed node: {reason}")]
    MalformedNode {
        /// Element position.
        path: NodePath,
        /// What is wrong with it.
        reason: String,
    },
    /// A sidebar has no items at all.
    #[error("sidebar `{sidebar}` has no items")]
    EmptySidebar {
        /// Sidebar id.
        sidebar: String,
    },
}

impl BuildError {
    /// Position of the offending node, if the error concerns one node.
    #[must_use]
    pub fn path(&self) -> Option<&NodePath> {
        match self {
            Self::EmptyCategory { path, .. }
            | Self::DuplicateReference { path, .. }
            | Self::UnknownDocument { path, .. }
            | Self::MalformedNode { path, .. } => Some(path),
            Self::EmptySidebar { .. } => None,
        }
    }
}

/// Error loading a sidebars file.
#[derive(Debug, thiserror::Error)]
pub enum SidebarsError {
    /// I/O error reading the file.
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        /// Sidebars file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// File extension is not `.json`, `.yml` or `.yaml`.
    #[error("Unsupported sidebars format: {} (expected .json, .yml or .yaml)", .0.display())]
    UnsupportedFormat(PathBuf),
    /// File content does not parse.
    #[error("Sidebars parse error{}: {message}", .path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default())]
    Parse {
        /// Sidebars file, when parsed from disk.
        path: Option<PathBuf>,
        /// Parser message.
        message: String,
    },
}

impl SidebarsError {
    /// Attach the file path to a parse error.
    #[must_use]
    pub(crate) fn with_path(self, file: &Path) -> Self {
        match self {
            Self::Parse { path: None, message } => Self::Parse {
                path: Some(file.to_path_buf()),
                message,
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_path_display() {
        let root = NodePath::root("docsSidebar");
        assert_eq!(root.to_string(), "docsSidebar");
        assert_eq!(root.item(2).to_string(), "docsSidebar[2]");
        assert_eq!(root.item(2).item(0).to_string(), "docsSidebar[2].items[0]");
        assert_eq!(root.item(2).link().to_string(), "docsSidebar[2].link");
        assert_eq!(
            root.item(1).item(3).item(0).to_string(),
            "docsSidebar[1].items[3].items[0]"
        );
    }

    #[test]
    fn test_node_path_accessors() {
        let path = NodePath::root("docs").item(4).link();
        assert_eq!(path.sidebar(), "docs");
        assert_eq!(path.segments(), &[PathSegment::Item(4), PathSegment::Link]);
    }

    #[test]
    fn test_build_error_messages() {
        let err = BuildError::EmptyCategory {
            path: NodePath::root("docs").item(1),
            label: "X".to_owned(),
        };
        assert_eq!(err.to_string(), "docs[1]: category \"X\" has no items");

        let err = BuildError::DuplicateReference {
            path: NodePath::root("docs").item(1).item(0),
            first: NodePath::root("docs").item(0),
            id: DocumentId::new("api/core").unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "docs[1].items[0]: document `api/core` is already referenced at docs[0]"
        );
        assert_eq!(err.path(), Some(&NodePath::root("docs").item(1).item(0)));
    }

    #[test]
    fn test_parse_error_with_path() {
        let err = SidebarsError::Parse {
            path: None,
            message: "expected a map".to_owned(),
        };
        assert_eq!(err.to_string(), "Sidebars parse error: expected a map");

        let err = err.with_path(Path::new("sidebars.yaml"));
        assert_eq!(
            err.to_string(),
            "Sidebars parse error in sidebars.yaml: expected a map"
        );
    }
}
