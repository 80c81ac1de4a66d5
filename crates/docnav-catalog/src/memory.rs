//! In-memory catalog.
//!
//! Provides [`MemoryCatalog`] for tests and for callers that already know
//! their document set (e.g. from a build manifest).

use std::collections::HashMap;

use crate::catalog::{Catalog, CatalogError, DocumentInfo};
use crate::document_id::DocumentId;

/// Catalog backed by a sorted `Vec` with an id index.
///
/// # Example
///
/// ```ignore
/// use docnav_catalog::{Catalog, DocumentId, MemoryCatalog};
///
/// let catalog = MemoryCatalog::new()
///     .with_document("intro")
///     .with_document("api/core");
///
/// assert!(catalog.contains(&DocumentId::new("api/core").unwrap()));
/// ```
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    documents: Vec<DocumentInfo>,
    index: HashMap<DocumentId, usize>,
}

impl MemoryCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a list of document entries.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two entries share an id.
    pub fn from_documents(
        documents: impl IntoIterator<Item = DocumentInfo>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for doc in documents {
            catalog.insert(doc)?;
        }
        Ok(catalog)
    }

    /// Insert one document, keeping the list sorted by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if the id is already present.
    pub fn insert(&mut self, doc: DocumentInfo) -> Result<(), CatalogError> {
        if self.index.contains_key(&doc.id) {
            return Err(CatalogError::DuplicateId { id: doc.id });
        }
        let pos = self
            .documents
            .partition_point(|existing| existing.id < doc.id);
        self.documents.insert(pos, doc);
        self.reindex();
        Ok(())
    }

    /// Add a bare document by id.
    ///
    /// # Panics
    ///
    /// Panics if the id is invalid or already present.
    #[must_use]
    pub fn with_document(self, id: &str) -> Self {
        let id = DocumentId::new(id).unwrap();
        self.with_info(DocumentInfo::new(id))
    }

    /// Add a document entry.
    ///
    /// # Panics
    ///
    /// Panics if the id is already present.
    #[must_use]
    pub fn with_info(mut self, doc: DocumentInfo) -> Self {
        self.insert(doc).unwrap();
        self
    }

    fn reindex(&mut self) {
        self.index = self
            .documents
            .iter()
            .enumerate()
            .map(|(i, doc)| (doc.id.clone(), i))
            .collect();
    }
}

impl Catalog for MemoryCatalog {
    fn get(&self, id: &DocumentId) -> Option<&DocumentInfo> {
        self.index.get(id).map(|&i| &self.documents[i])
    }

    fn documents(&self) -> &[DocumentInfo] {
        &self.documents
    }
}
