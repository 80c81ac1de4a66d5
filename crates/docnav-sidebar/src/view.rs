//! Renderer-facing sidebar view.
//!
//! Resolves labels and URLs of a [`NavigationTree`] so a front end can draw
//! the sidebar without access to the catalog.

use serde::Serialize;

use docnav_catalog::{Catalog, DocumentId};

use crate::routes::Routes;
use crate::tree::{Category, DocLeaf, NavNode, NavigationTree};

/// Sidebar entry with resolved label and URL.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SidebarItem {
    /// Page link.
    Link {
        /// Display label.
        label: String,
        /// Page URL.
        href: String,
        /// Linked document.
        #[serde(rename = "docId")]
        doc_id: DocumentId,
    },
    /// Collapsible group.
    Category {
        /// Display label.
        label: String,
        /// Initial state.
        collapsed: bool,
        /// Whether the group can be toggled.
        collapsible: bool,
        /// Landing page URL.
        #[serde(skip_serializing_if = "Option::is_none")]
        href: Option<String>,
        /// Child entries.
        items: Vec<SidebarItem>,
    },
}

/// Resolved sidebar, ready to serialize for the renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarView {
    /// Sidebar id.
    pub id: String,
    /// Top-level entries.
    pub items: Vec<SidebarItem>,
}

impl SidebarView {
    /// Resolve every node of `tree`.
    ///
    /// Link labels come from the sidebar entry, then the document's
    /// `sidebar_label`, then its `title`, then the document id.
    #[must_use]
    pub fn new<C: Catalog + ?Sized>(tree: &NavigationTree, catalog: &C, routes: &Routes) -> Self {
        let resolver = Resolver { catalog, routes };
        Self {
            id: tree.id().to_owned(),
            items: tree.items().iter().map(|n| resolver.node(n)).collect(),
        }
    }
}

struct Resolver<'a, C: ?Sized> {
    catalog: &'a C,
    routes: &'a Routes,
}

impl<C: Catalog + ?Sized> Resolver<'_, C> {
    fn node(&self, node: &NavNode) -> SidebarItem {
        match node {
            NavNode::Leaf(leaf) => self.leaf(leaf),
            NavNode::Category(category) => self.category(category),
        }
    }

    fn leaf(&self, leaf: &DocLeaf) -> SidebarItem {
        let label = leaf.label.clone().unwrap_or_else(|| {
            self.catalog
                .get(&leaf.id)
                .map_or_else(|| leaf.id.to_string(), |doc| doc.label().to_owned())
        });
        SidebarItem::Link {
            label,
            href: self.routes.href(&leaf.id, self.catalog),
            doc_id: leaf.id.clone(),
        }
    }

    fn category(&self, category: &Category) -> SidebarItem {
        SidebarItem::Category {
            label: category.label.clone(),
            collapsed: category.collapsed,
            collapsible: category.collapsible,
            href: category
                .link
                .as_ref()
                .map(|id| self.routes.href(id, self.catalog)),
            items: category.children.iter().map(|n| self.node(n)).collect(),
        }
    }
}
