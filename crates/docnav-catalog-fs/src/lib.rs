//! Filesystem content catalog for docnav.
//!
//! [`FsCatalog`] walks a docs directory and registers every `.md` / `.mdx`
//! file as a document. The document id is the relative path without its
//! extension; an `id` in the YAML front matter replaces the file-name part.
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), docnav_catalog::CatalogError> {
//! use std::path::PathBuf;
//! use docnav_catalog::Catalog;
//! use docnav_catalog_fs::FsCatalog;
//!
//! let catalog = FsCatalog::load(PathBuf::from("docs"))?;
//! for doc in catalog.documents() {
//!     println!("{}: {}", doc.id, doc.label());
//! }
//! # Ok(())
//! # }
//! ```

mod front_matter;
mod scanner;

use std::fs;
use std::path::{Path, PathBuf};

use docnav_catalog::{Catalog, CatalogError, DocumentId, DocumentInfo, MemoryCatalog};

use crate::front_matter::parse_front_matter;
use crate::scanner::{DocumentRef, Scanner, join_id};

/// Catalog built from a docs directory.
#[derive(Debug)]
pub struct FsCatalog {
    source_dir: PathBuf,
    inner: MemoryCatalog,
}

impl FsCatalog {
    /// Scan `source_dir` and build the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the directory is missing or unreadable,
    /// a front matter block is malformed, an id is invalid, or two files
    /// resolve to the same id.
    pub fn load(source_dir: PathBuf) -> Result<Self, CatalogError> {
        let refs = Scanner::new(source_dir.clone()).scan()?;

        let mut inner = MemoryCatalog::new();
        for doc_ref in &refs {
            inner.insert(build_document(&source_dir, doc_ref)?)?;
        }

        tracing::debug!(
            source_dir = %source_dir.display(),
            documents = inner.len(),
            "Scanned docs directory"
        );

        Ok(Self { source_dir, inner })
    }

    /// Docs directory this catalog was loaded from.
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }
}

impl Catalog for FsCatalog {
    fn get(&self, id: &DocumentId) -> Option<&DocumentInfo> {
        self.inner.get(id)
    }

    fn documents(&self) -> &[DocumentInfo] {
        self.inner.documents()
    }
}

/// Read one document file and resolve its id and front matter.
fn build_document(source_dir: &Path, doc_ref: &DocumentRef) -> Result<DocumentInfo, CatalogError> {
    let abs_path = source_dir.join(&doc_ref.rel_path);
    let content = fs::read_to_string(&abs_path).map_err(|source| CatalogError::Io {
        path: abs_path.clone(),
        source,
    })?;

    let front_matter =
        parse_front_matter(&content).map_err(|message| CatalogError::FrontMatter {
            path: doc_ref.rel_path.clone(),
            message,
        })?;

    let raw_id = match front_matter.id.as_deref() {
        Some(custom) if custom.contains('/') => {
            return Err(CatalogError::FrontMatter {
                path: doc_ref.rel_path.clone(),
                message: format!("id {custom:?} cannot contain '/'"),
            });
        }
        Some(custom) => {
            let dir = doc_ref
                .path_id
                .rsplit_once('/')
                .map_or("", |(dir, _)| dir);
            join_id(dir, custom)
        }
        None => doc_ref.path_id.clone(),
    };

    let id = DocumentId::new(raw_id).map_err(|source| CatalogError::InvalidId {
        path: doc_ref.rel_path.clone(),
        source,
    })?;

    Ok(DocumentInfo {
        id,
        title: front_matter.title,
        sidebar_label: front_matter.sidebar_label,
        slug: front_matter.slug,
        source_path: Some(doc_ref.rel_path.clone()),
    })
}
