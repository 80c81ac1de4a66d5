//! Catalog trait and error types.
//!
//! The catalog is the read-only set of content pages a site knows about.
//! Navigation building only asks it whether a [`DocumentId`] exists and,
//! for rendering, what its title, label and slug are.

use std::path::PathBuf;

use serde::Serialize;

use crate::document_id::{DocumentId, InvalidDocumentId};

/// One known content page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInfo {
    /// Document id (path without extension, or front matter override).
    pub id: DocumentId,
    /// Page title from front matter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Label shown in the sidebar, if different from the title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar_label: Option<String>,
    /// URL slug override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Source file relative to the docs directory. `None` for in-memory entries.
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl DocumentInfo {
    /// Create a bare entry with no front matter.
    #[must_use]
    pub fn new(id: DocumentId) -> Self {
        Self {
            id,
            title: None,
            sidebar_label: None,
            slug: None,
            source_path: None,
        }
    }

    /// Label for navigation: `sidebar_label`, then `title`, then the id.
    #[must_use]
    pub fn label(&self) -> &str {
        self.sidebar_label
            .as_deref()
            .or(self.title.as_deref())
            .unwrap_or(self.id.as_str())
    }
}

/// Catalog error.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Docs directory does not exist.
    #[error("Docs directory not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error while reading the docs directory.
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        /// File or directory being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// Front matter block could not be parsed.
    #[error("Invalid front matter in {}: {message}", .path.display())]
    FrontMatter {
        /// Source file.
        path: PathBuf,
        /// Parser message.
        message: String,
    },
    /// A file or front matter produced an invalid id.
    #[error("Invalid document id for {}: {source}", .path.display())]
    InvalidId {
        /// Source file.
        path: PathBuf,
        /// Validation failure.
        #[source]
        source: InvalidDocumentId,
    },
    /// Two documents share one id.
    #[error("Duplicate document id `{id}`")]
    DuplicateId {
        /// The shared id.
        id: DocumentId,
    },
}

/// Read-only set of known documents.
///
/// Implementations return documents sorted by id so every consumer sees a
/// deterministic order.
pub trait Catalog: Send + Sync {
    /// Look up a document by id.
    fn get(&self, id: &DocumentId) -> Option<&DocumentInfo>;

    /// All documents, sorted by id.
    fn documents(&self) -> &[DocumentInfo];

    /// Check if a document exists.
    fn contains(&self, id: &DocumentId) -> bool {
        self.get(id).is_some()
    }

    /// Number of documents.
    fn len(&self) -> usize {
        self.documents().len()
    }

    /// True if the catalog has no documents.
    fn is_empty(&self) -> bool {
        self.documents().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(id: &str) -> DocumentInfo {
        DocumentInfo::new(DocumentId::new(id).unwrap())
    }

    #[test]
    fn test_label_falls_back_to_id() {
        assert_eq!(info("api/core").label(), "api/core");
    }

    #[test]
    fn test_label_prefers_sidebar_label() {
        let doc = DocumentInfo {
            title: Some("Core API".to_owned()),
            sidebar_label: Some("Core".to_owned()),
            ..info("api/core")
        };
        assert_eq!(doc.label(), "Core");

        let doc = DocumentInfo {
            sidebar_label: None,
            ..doc
        };
        assert_eq!(doc.label(), "Core API");
    }

    #[test]
    fn test_serialize_skips_missing_fields() {
        let doc = DocumentInfo {
            sidebar_label: Some("Core".to_owned()),
            source_path: Some(PathBuf::from("api/core.md")),
            ..info("api/core")
        };

        let json = serde_json::to_value(&doc).unwrap();

        assert_eq!(json["id"], "api/core");
        assert_eq!(json["sidebarLabel"], "Core");
        assert!(json.get("title").is_none());
        assert!(json.get("sourcePath").is_none());
    }

    #[test]
    fn test_error_messages_name_the_file() {
        let err = CatalogError::FrontMatter {
            path: PathBuf::from("api/core.md"),
            message: "bad indentation".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid front matter in api/core.md: bad indentation"
        );

        let err = CatalogError::DuplicateId {
            id: DocumentId::new("intro").unwrap(),
        };
        assert_eq!(err.to_string(), "Duplicate document id `intro`");
    }
}
