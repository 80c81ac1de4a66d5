//! Document discovery by filesystem walking.
//!
//! The Scanner only identifies files that could be documents. Reading
//! front matter and assigning ids happens in [`FsCatalog`](crate::FsCatalog).

use std::fs;
use std::path::{Path, PathBuf};

use docnav_catalog::CatalogError;

/// Extensions recognized as documents.
const DOC_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Reference to a document source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DocumentRef {
    /// Id derived from the path (e.g. "intro", "api/core").
    pub path_id: String,
    /// Path relative to the docs directory.
    pub rel_path: PathBuf,
}

/// Discovers document files by walking the docs directory.
///
/// Skips hidden entries (`.`-prefixed) and partials (`_`-prefixed files and
/// directories), logging each at debug level.
pub(crate) struct Scanner {
    source_dir: PathBuf,
}

impl Scanner {
    pub fn new(source_dir: PathBuf) -> Self {
        Self { source_dir }
    }

    /// Scan the docs directory and return document references.
    ///
    /// References are returned in path order.
    pub fn scan(&self) -> Result<Vec<DocumentRef>, CatalogError> {
        if !self.source_dir.is_dir() {
            return Err(CatalogError::NotFound(self.source_dir.clone()));
        }
        let mut refs = Vec::new();
        self.scan_directory(&self.source_dir, "", &mut refs)?;
        refs.sort_by(|a, b| a.rel_path.cmp(&b.rel_path));
        Ok(refs)
    }

    fn scan_directory(
        &self,
        dir_path: &Path,
        id_prefix: &str,
        refs: &mut Vec<DocumentRef>,
    ) -> Result<(), CatalogError> {
        let entries = fs::read_dir(dir_path).map_err(|source| CatalogError::Io {
            path: dir_path.to_path_buf(),
            source,
        })?;

        for entry in entries {
            let entry = entry.map_err(|source| CatalogError::Io {
                path: dir_path.to_path_buf(),
                source,
            })?;
            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                tracing::warn!(path = %entry.path().display(), "Skipping non-UTF-8 file name");
                continue;
            };
            if name.starts_with('.') || name.starts_with('_') {
                tracing::debug!(path = %entry.path().display(), "Skipping hidden or partial entry");
                continue;
            }

            let path = entry.path();
            let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());

            if is_dir {
                let child_prefix = join_id(id_prefix, &name);
                self.scan_directory(&path, &child_prefix, refs)?;
            } else if let Some(stem) = doc_stem(&name) {
                let rel_path = path
                    .strip_prefix(&self.source_dir)
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|_| PathBuf::from(&name));
                refs.push(DocumentRef {
                    path_id: join_id(id_prefix, stem),
                    rel_path,
                });
            }
        }

        Ok(())
    }
}

/// File name without its document extension, or `None` for non-documents.
fn doc_stem(name: &str) -> Option<&str> {
    let (stem, ext) = name.rsplit_once('.')?;
    DOC_EXTENSIONS.contains(&ext).then_some(stem)
}

/// Join an id prefix and a segment with `/`.
pub(crate) fn join_id(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_owned()
    } else {
        format!("{prefix}/{segment}")
    }
}
