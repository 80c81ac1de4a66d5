//! Document URLs.

use docnav_catalog::{Catalog, DocumentId, DocumentInfo};

/// Maps documents to site URLs.
///
/// A document is served at `base_url + route_base_path + path`, where `path`
/// is the front matter `slug` if set, else the document id.
///
/// # Example
///
/// ```ignore
/// let routes = Routes::new("/", "/docs/");
/// assert_eq!(routes.doc_href(&info), "/docs/api/core");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Routes {
    base_url: String,
    route_base_path: String,
}

impl Default for Routes {
    fn default() -> Self {
        Self::new("/", "/")
    }
}

impl Routes {
    /// Create routes for a site prefix and a docs prefix.
    #[must_use]
    pub fn new(base_url: impl Into<String>, route_base_path: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            route_base_path: route_base_path.into(),
        }
    }

    /// URL of a catalog document.
    ///
    /// Slugs starting with `/` are absolute within the docs prefix; other
    /// slugs resolve against the document's directory, honouring `..`.
    #[must_use]
    pub fn doc_href(&self, doc: &DocumentInfo) -> String {
        let path = match doc.slug.as_deref() {
            Some(slug) if slug.starts_with('/') => resolve_relative_path(slug, ""),
            Some(slug) => resolve_relative_path(slug, doc.id.dir()),
            None => doc.id.as_str().to_owned(),
        };
        self.join(&path)
    }

    /// URL of a document looked up in `catalog`.
    ///
    /// Falls back to the id as path for documents the catalog does not know.
    #[must_use]
    pub fn href<C: Catalog + ?Sized>(&self, id: &DocumentId, catalog: &C) -> String {
        match catalog.get(id) {
            Some(doc) => self.doc_href(doc),
            None => self.join(id.as_str()),
        }
    }

    fn join(&self, path: &str) -> String {
        let segments: Vec<&str> = [self.base_url.as_str(), self.route_base_path.as_str(), path]
            .into_iter()
            .flat_map(|part| part.split('/'))
            .filter(|s| !s.is_empty())
            .collect();
        format!("/{}", segments.join("/"))
    }
}

/// Resolve a relative path against a base directory.
///
/// Handles `.` (current) and `..` (parent); `..` at the root is ignored.
fn resolve_relative_path(relative: &str, base: &str) -> String {
    let mut segments: Vec<&str> = base.split('/').filter(|s| !s.is_empty()).collect();

    for component in relative.split('/') {
        match component {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            _ => segments.push(component),
        }
    }

    segments.join("/")
}
