//! Validated navigation trees.
//!
//! A [`NavigationTree`] is produced once by the builder and never mutated.
//! Renderers get read-only access through the accessors below.

use serde::Serialize;

use docnav_catalog::DocumentId;

/// Direct reference to one document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DocLeaf {
    /// Referenced document.
    pub id: DocumentId,
    /// Sidebar label override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Named, collapsible grouping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Display label.
    pub label: String,
    /// Whether the category starts collapsed.
    pub collapsed: bool,
    /// Whether the category can be collapsed.
    pub collapsible: bool,
    /// Landing page document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<DocumentId>,
    /// Child nodes in display order. Never empty.
    #[serde(rename = "items")]
    pub children: Vec<NavNode>,
}

/// One entry in a navigation tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NavNode {
    /// Page reference.
    #[serde(rename = "doc")]
    Leaf(DocLeaf),
    /// Grouping of nodes.
    Category(Category),
}

impl Category {
    /// First document of this category in reading order.
    ///
    /// This is the landing page if there is one, otherwise the first leaf
    /// found by pre-order traversal.
    #[must_use]
    pub fn first_doc(&self) -> Option<&DocumentId> {
        self.link
            .as_ref()
            .or_else(|| self.children.iter().find_map(NavNode::first_doc))
    }

    /// Documents of this category in reading order.
    #[must_use]
    pub fn flatten(&self) -> Vec<DocumentId> {
        let mut out = Vec::new();
        collect_category(self, &mut out);
        out
    }
}

impl NavNode {
    /// First document reachable from this node in reading order.
    #[must_use]
    pub fn first_doc(&self) -> Option<&DocumentId> {
        match self {
            Self::Leaf(leaf) => Some(&leaf.id),
            Self::Category(category) => category.first_doc(),
        }
    }
}

/// Validated, ordered sidebar structure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavigationTree {
    id: String,
    items: Vec<NavNode>,
}

impl NavigationTree {
    /// Assemble a tree from already validated nodes.
    pub(crate) fn new(id: String, items: Vec<NavNode>) -> Self {
        Self { id, items }
    }

    /// Sidebar id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Top-level nodes in display order.
    #[must_use]
    pub fn items(&self) -> &[NavNode] {
        &self.items
    }

    /// Reading order of the tree.
    ///
    /// See [`flatten`].
    #[must_use]
    pub fn flatten(&self) -> Vec<DocumentId> {
        flatten(self)
    }

    /// True if the tree references `id` as a leaf or landing page.
    #[must_use]
    pub fn contains(&self, id: &DocumentId) -> bool {
        self.items.iter().any(|node| node_contains(node, id))
    }

    /// Top-level category with the given label.
    #[must_use]
    pub fn category(&self, label: &str) -> Option<&Category> {
        self.items.iter().find_map(|node| match node {
            NavNode::Category(category) if category.label == label => Some(category),
            _ => None,
        })
    }

    /// Labels of the categories enclosing a document, outermost first.
    ///
    /// A category's own landing page is enclosed by that category.
    /// Returns `None` if the document is not in the tree.
    #[must_use]
    pub fn breadcrumbs(&self, id: &DocumentId) -> Option<Vec<&str>> {
        let mut trail = Vec::new();
        self.items
            .iter()
            .any(|node| find_trail(node, id, &mut trail))
            .then_some(trail)
    }
}

/// Linear reading order of a tree.
///
/// Pre-order traversal emitting only documents: a category's landing page
/// comes before its children, category labels are skipped.
#[must_use]
pub fn flatten(tree: &NavigationTree) -> Vec<DocumentId> {
    let mut out = Vec::new();
    for node in &tree.items {
        collect_node(node, &mut out);
    }
    out
}

fn collect_node(node: &NavNode, out: &mut Vec<DocumentId>) {
    match node {
        NavNode::Leaf(leaf) => out.push(leaf.id.clone()),
        NavNode::Category(category) => collect_category(category, out),
    }
}

fn collect_category(category: &Category, out: &mut Vec<DocumentId>) {
    if let Some(link) = &category.link {
        out.push(link.clone());
    }
    for child in &category.children {
        collect_node(child, out);
    }
}

fn node_contains(node: &NavNode, id: &DocumentId) -> bool {
    match node {
        NavNode::Leaf(leaf) => &leaf.id == id,
        NavNode::Category(category) => {
            category.link.as_ref() == Some(id)
                || category.children.iter().any(|c| node_contains(c, id))
        }
    }
}

fn find_trail<'a>(node: &'a NavNode, id: &DocumentId, trail: &mut Vec<&'a str>) -> bool {
    match node {
        NavNode::Leaf(leaf) => &leaf.id == id,
        NavNode::Category(category) => {
            trail.push(&category.label);
            if category.link.as_ref() == Some(id)
                || category.children.iter().any(|c| find_trail(c, id, trail))
            {
                return true;
            }
            trail.pop();
            false
        }
    }
}
