//! Previous/next links derived from the reading order.

use std::collections::HashMap;

use serde::Serialize;

use docnav_catalog::DocumentId;

use crate::tree::NavigationTree;

/// Neighbours of one document in reading order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageLinks<'a> {
    /// Document before this one. `None` for the first document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<&'a DocumentId>,
    /// Document after this one. `None` for the last document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<&'a DocumentId>,
}

/// Pagination index for one navigation tree.
#[derive(Clone, Debug)]
pub struct Pagination {
    order: Vec<DocumentId>,
    positions: HashMap<DocumentId, usize>,
}

impl Pagination {
    /// Index the reading order of `tree`.
    #[must_use]
    pub fn new(tree: &NavigationTree) -> Self {
        let order = tree.flatten();
        let positions = order
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i))
            .collect();
        Self { order, positions }
    }

    /// Links for `id`, or `None` if the document is not in the tree.
    #[must_use]
    pub fn get(&self, id: &DocumentId) -> Option<PageLinks<'_>> {
        let &pos = self.positions.get(id)?;
        Some(PageLinks {
            previous: pos.checked_sub(1).and_then(|i| self.order.get(i)),
            next: self.order.get(pos + 1),
        })
    }

    /// Reading order the links are derived from.
    #[must_use]
    pub fn order(&self) -> &[DocumentId] {
        &self.order
    }
}
