//! Navigation tree builder.
//!
//! Turns human-authored [`ItemSpec`] lists into validated
//! [`NavigationTree`]s. The builder is a single pre-order pass that stops at
//! the first error; no partial tree is ever returned.
//!
//! # Example
//!
//! ```ignore
//! use docnav_catalog::MemoryCatalog;
//! use docnav_sidebar::{ItemSpec, build};
//!
//! let catalog = MemoryCatalog::new()
//!     .with_document("intro")
//!     .with_document("api/core");
//! let items = vec![
//!     ItemSpec::doc("intro"),
//!     ItemSpec::category("API", vec![ItemSpec::doc("api/core")]),
//! ];
//!
//! let tree = build("docsSidebar", &items, &catalog)?;
//! assert_eq!(tree.flatten().len(), 2);
//! ```

use std::collections::HashMap;

use docnav_catalog::{Catalog, DocumentId, DocumentInfo};

use crate::error::{BuildError, NodePath};
use crate::spec::{CategoryLinkSpec, CategorySpec, ItemSpec, SidebarsSpec, describe_malformed};
use crate::tree::{Category, DocLeaf, NavNode, NavigationTree};

/// Build and validate one sidebar.
///
/// # Errors
///
/// Returns the first [`BuildError`] found in pre-order: empty categories,
/// repeated documents, documents missing from `catalog`, or elements that
/// are not well-formed items.
pub fn build<C: Catalog + ?Sized>(
    sidebar_id: &str,
    items: &[ItemSpec],
    catalog: &C,
) -> Result<NavigationTree, BuildError> {
    if items.is_empty() {
        return Err(BuildError::EmptySidebar {
            sidebar: sidebar_id.to_owned(),
        });
    }

    let mut builder = TreeBuilder {
        catalog,
        seen: HashMap::new(),
    };
    let root = NodePath::root(sidebar_id);
    let nodes = builder.build_items(&root, items)?;

    tracing::debug!(
        sidebar = sidebar_id,
        documents = builder.seen.len(),
        "Built navigation tree"
    );

    Ok(NavigationTree::new(sidebar_id.to_owned(), nodes))
}

/// Build every sidebar of a sidebars file against one catalog.
///
/// # Errors
///
/// Returns the first [`BuildError`], in sidebar id order.
pub fn build_all<C: Catalog + ?Sized>(
    spec: &SidebarsSpec,
    catalog: &C,
) -> Result<Sidebars, BuildError> {
    let trees = spec
        .iter()
        .map(|(id, items)| build(id, items, catalog))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Sidebars { trees })
}

/// All validated sidebars of a site, in sidebar id order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sidebars {
    trees: Vec<NavigationTree>,
}

impl Sidebars {
    /// Sidebar by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&NavigationTree> {
        self.trees.iter().find(|tree| tree.id() == id)
    }

    /// Iterate sidebars in id order.
    pub fn iter(&self) -> impl Iterator<Item = &NavigationTree> {
        self.trees.iter()
    }

    /// Number of sidebars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    /// True if there are no sidebars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// Catalog documents no sidebar references.
    #[must_use]
    pub fn orphans<'c, C: Catalog + ?Sized>(&self, catalog: &'c C) -> Vec<&'c DocumentInfo> {
        orphans(self.trees.iter(), catalog)
    }
}

/// Catalog documents not referenced by any of `trees`, in catalog order.
///
/// Orphans are allowed; callers decide whether to report them.
#[must_use]
pub fn orphans<'t, 'c, C: Catalog + ?Sized>(
    trees: impl IntoIterator<Item = &'t NavigationTree>,
    catalog: &'c C,
) -> Vec<&'c DocumentInfo> {
    let trees: Vec<_> = trees.into_iter().collect();
    catalog
        .documents()
        .iter()
        .filter(|doc| !trees.iter().any(|tree| tree.contains(&doc.id)))
        .collect()
}

struct TreeBuilder<'a, C: ?Sized> {
    catalog: &'a C,
    /// First position of every document reference seen so far.
    seen: HashMap<DocumentId, NodePath>,
}

impl<C: Catalog + ?Sized> TreeBuilder<'_, C> {
    fn build_items(
        &mut self,
        parent: &NodePath,
        items: &[ItemSpec],
    ) -> Result<Vec<NavNode>, BuildError> {
        items
            .iter()
            .enumerate()
            .map(|(index, item)| self.build_item(parent.item(index), item))
            .collect()
    }

    fn build_item(&mut self, path: NodePath, item: &ItemSpec) -> Result<NavNode, BuildError> {
        match item {
            ItemSpec::Id(raw) => {
                let id = self.reference(&path, raw)?;
                Ok(NavNode::Leaf(DocLeaf { id, label: None }))
            }
            ItemSpec::Doc(doc) => {
                if doc.label.as_deref().is_some_and(|l| l.trim().is_empty()) {
                    return Err(BuildError::MalformedNode {
                        path,
                        reason: "doc label cannot be empty".to_owned(),
                    });
                }
                let id = self.reference(&path, &doc.id)?;
                Ok(NavNode::Leaf(DocLeaf {
                    id,
                    label: doc.label.clone(),
                }))
            }
            ItemSpec::Category(category) => self.build_category(path, category),
            ItemSpec::Malformed(value) => Err(BuildError::MalformedNode {
                reason: describe_malformed(value),
                path,
            }),
        }
    }

    fn build_category(
        &mut self,
        path: NodePath,
        spec: &CategorySpec,
    ) -> Result<NavNode, BuildError> {
        if spec.label.trim().is_empty() {
            return Err(BuildError::MalformedNode {
                path,
                reason: "category label cannot be empty".to_owned(),
            });
        }

        let collapsible = spec.collapsible.unwrap_or(true);
        let collapsed = match (collapsible, spec.collapsed) {
            (false, Some(true)) => {
                return Err(BuildError::MalformedNode {
                    path,
                    reason: format!(
                        "category \"{}\" cannot be collapsed when collapsible is false",
                        spec.label
                    ),
                });
            }
            (false, _) => false,
            (true, collapsed) => collapsed.unwrap_or(true),
        };

        let link = match &spec.link {
            Some(CategoryLinkSpec::Doc { id }) => Some(self.reference(&path.link(), id)?),
            None => None,
        };

        if spec.items.is_empty() {
            return Err(BuildError::EmptyCategory {
                path,
                label: spec.label.clone(),
            });
        }

        let children = self.build_items(&path, &spec.items)?;

        Ok(NavNode::Category(Category {
            label: spec.label.clone(),
            collapsed,
            collapsible,
            link,
            children,
        }))
    }

    /// Validate one document reference: syntax, catalog membership, uniqueness.
    fn reference(&mut self, path: &NodePath, raw: &str) -> Result<DocumentId, BuildError> {
        let id = DocumentId::new(raw).map_err(|e| BuildError::MalformedNode {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        if !self.catalog.contains(&id) {
            return Err(BuildError::UnknownDocument {
                path: path.clone(),
                id,
            });
        }

        if let Some(first) = self.seen.get(&id) {
            return Err(BuildError::DuplicateReference {
                path: path.clone(),
                first: first.clone(),
                id,
            });
        }

        self.seen.insert(id.clone(), path.clone());
        Ok(id)
    }
}
