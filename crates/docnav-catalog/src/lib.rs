//! Content catalog abstraction for docnav.
//!
//! This crate provides the [`Catalog`] trait: the read-only set of content
//! pages that navigation trees are validated against. This enables:
//!
//! - **Unit testing** sidebars without touching the filesystem
//! - **Backend flexibility** (docs directory, build manifest)
//!
//! # Architecture
//!
//! The crate provides:
//! - [`DocumentId`], the validated page slug shared by every docnav crate
//! - [`Catalog`] trait with `get()`, `contains()` and `documents()`
//! - [`MemoryCatalog`] for tests and manifests (behind `memory` feature flag)
//!
//! The filesystem backend lives in `docnav-catalog-fs`.

mod catalog;
mod document_id;
#[cfg(any(test, feature = "memory"))]
mod memory;

pub use catalog::{Catalog, CatalogError, DocumentInfo};
pub use document_id::{DocumentId, InvalidDocumentId};
#[cfg(any(test, feature = "memory"))]
pub use memory::MemoryCatalog;
