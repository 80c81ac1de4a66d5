//! Top navigation bar resolved against the sidebars.
//!
//! Navbar entries point at whole sidebars, documents, top-level categories
//! or static URLs. Everything except static URLs is checked against the
//! built trees, so a renamed sidebar or a moved page fails the build instead
//! of rendering a dead link.

use serde::Serialize;

use docnav_catalog::{Catalog, DocumentId, InvalidDocumentId};

use crate::footer::{category_landing, doc_label, is_external};
use crate::routes::Routes;
use crate::tree::{NavNode, NavigationTree};

/// Side of the bar an entry is rendered on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavbarPosition {
    /// Left side (default).
    #[default]
    Left,
    /// Right side.
    Right,
}

/// What a navbar entry points at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavbarTarget {
    /// Whole sidebar, linked through its first document.
    Sidebar(String),
    /// Document that must be in a sidebar.
    Doc(String),
    /// Top-level sidebar category, linked through its first document.
    Category(String),
    /// Static URL.
    Href(String),
}

/// One configured navbar entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavbarEntry {
    /// Link text. Required for [`NavbarTarget::Href`].
    pub label: Option<String>,
    /// Link target.
    pub target: NavbarTarget,
    /// Side of the bar.
    pub position: NavbarPosition,
}

/// Resolved navbar link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavbarLink {
    /// Link text.
    pub label: String,
    /// Target URL.
    pub href: String,
    /// True for links leaving the site.
    pub external: bool,
    /// Side of the bar.
    pub position: NavbarPosition,
}

/// Navbar resolution error.
#[derive(Debug, thiserror::Error)]
pub enum NavbarError {
    /// No sidebar has this id.
    #[error("navbar[{index}]: unknown sidebar \"{sidebar}\"")]
    UnknownSidebar {
        /// Entry position.
        index: usize,
        /// Requested sidebar id.
        sidebar: String,
    },
    /// No sidebar has a top-level category with this label.
    #[error("navbar[{index}]: no top-level sidebar category \"{category}\"")]
    UnknownCategory {
        /// Entry position.
        index: usize,
        /// Requested category label.
        category: String,
    },
    /// Document is not referenced by any sidebar.
    #[error("navbar[{index}]: document `{id}` is not in any sidebar")]
    DocNotInSidebar {
        /// Entry position.
        index: usize,
        /// Requested document.
        id: DocumentId,
    },
    /// Document id is not well-formed.
    #[error("navbar[{index}]: {source}")]
    InvalidDoc {
        /// Entry position.
        index: usize,
        /// Validation failure.
        #[source]
        source: InvalidDocumentId,
    },
    /// Static link without a label.
    #[error("navbar[{index}]: link to {href} needs a label")]
    MissingLabel {
        /// Entry position.
        index: usize,
        /// Link URL.
        href: String,
    },
}

/// Resolve configured navbar entries against the site's sidebars.
///
/// A sidebar entry links to the first document of that sidebar and, without
/// an explicit label, takes that document's label. Documents and categories
/// are looked up the same way as for the footer.
///
/// # Errors
///
/// Returns the first [`NavbarError`] in entry order.
pub fn resolve_navbar<'t, C: Catalog + ?Sized>(
    entries: &[NavbarEntry],
    trees: impl IntoIterator<Item = &'t NavigationTree>,
    catalog: &C,
    routes: &Routes,
) -> Result<Vec<NavbarLink>, NavbarError> {
    let trees: Vec<_> = trees.into_iter().collect();
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let (label, href) = resolve_target(index, entry, &trees, catalog, routes)?;
            Ok(NavbarLink {
                external: is_external(&href),
                label,
                href,
                position: entry.position,
            })
        })
        .collect()
}

fn resolve_target<C: Catalog + ?Sized>(
    index: usize,
    entry: &NavbarEntry,
    trees: &[&NavigationTree],
    catalog: &C,
    routes: &Routes,
) -> Result<(String, String), NavbarError> {
    match &entry.target {
        NavbarTarget::Sidebar(sidebar) => {
            let first = trees
                .iter()
                .find(|tree| tree.id() == sidebar.as_str())
                .and_then(|tree| tree.items().iter().find_map(NavNode::first_doc))
                .ok_or_else(|| NavbarError::UnknownSidebar {
                    index,
                    sidebar: sidebar.clone(),
                })?;
            let label = entry
                .label
                .clone()
                .unwrap_or_else(|| doc_label(first, catalog));
            Ok((label, routes.href(first, catalog)))
        }
        NavbarTarget::Doc(raw) => {
            let id = DocumentId::new(raw.as_str())
                .map_err(|source| NavbarError::InvalidDoc { index, source })?;
            if !trees.iter().any(|tree| tree.contains(&id)) {
                return Err(NavbarError::DocNotInSidebar { index, id });
            }
            let label = entry
                .label
                .clone()
                .unwrap_or_else(|| doc_label(&id, catalog));
            Ok((label, routes.href(&id, catalog)))
        }
        NavbarTarget::Category(name) => {
            let (category, first) =
                category_landing(trees, name).ok_or_else(|| NavbarError::UnknownCategory {
                    index,
                    category: name.clone(),
                })?;
            let label = entry
                .label
                .clone()
                .unwrap_or_else(|| category.label.clone());
            Ok((label, routes.href(first, catalog)))
        }
        NavbarTarget::Href(href) => {
            let label = entry.label.clone().ok_or_else(|| NavbarError::MissingLabel {
                index,
                href: href.clone(),
            })?;
            Ok((label, href.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use docnav_catalog::MemoryCatalog;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::builder::build;
    use crate::spec::ItemSpec;

    fn catalog() -> MemoryCatalog {
        MemoryCatalog::new()
            .with_document("intro")
            .with_document("api/core")
            .with_document("guides/best-practices")
    }

    fn tree(catalog: &MemoryCatalog) -> NavigationTree {
        let items = vec![
            ItemSpec::doc("intro"),
            ItemSpec::category("API Reference", vec![ItemSpec::doc("api/core")]),
            ItemSpec::category("Guides", vec![ItemSpec::doc("guides/best-practices")]),
        ];
        build("docsSidebar", &items, catalog).unwrap()
    }

    fn entry(label: Option<&str>, target: NavbarTarget, position: NavbarPosition) -> NavbarEntry {
        NavbarEntry {
            label: label.map(str::to_owned),
            target,
            position,
        }
    }

    fn link(label: &str, href: &str, external: bool, position: NavbarPosition) -> NavbarLink {
        NavbarLink {
            label: label.to_owned(),
            href: href.to_owned(),
            external,
            position,
        }
    }

    #[test]
    fn test_resolve_hexis_navbar() {
        let catalog = catalog();
        let tree = tree(&catalog);
        let entries = vec![
            entry(
                Some("API Reference"),
                NavbarTarget::Sidebar("docsSidebar".to_owned()),
                NavbarPosition::Left,
            ),
            entry(
                Some("Guides"),
                NavbarTarget::Doc("guides/best-practices".to_owned()),
                NavbarPosition::Left,
            ),
            entry(
                Some("Discord"),
                NavbarTarget::Href("https://discord.gg/TNVyFgBqYz".to_owned()),
                NavbarPosition::Right,
            ),
            entry(
                Some("Website"),
                NavbarTarget::Href("https://usehexis.com".to_owned()),
                NavbarPosition::Right,
            ),
        ];

        let navbar = resolve_navbar(&entries, [&tree], &catalog, &Routes::default()).unwrap();

        assert_eq!(
            navbar,
            vec![
                link("API Reference", "/intro", false, NavbarPosition::Left),
                link(
                    "Guides",
                    "/guides/best-practices",
                    false,
                    NavbarPosition::Left
                ),
                link(
                    "Discord",
                    "https://discord.gg/TNVyFgBqYz",
                    true,
                    NavbarPosition::Right
                ),
                link("Website", "https://usehexis.com", true, NavbarPosition::Right),
            ]
        );
    }

    #[test]
    fn test_default_labels() {
        let catalog = catalog();
        let tree = tree(&catalog);
        let entries = vec![
            entry(
                None,
                NavbarTarget::Sidebar("docsSidebar".to_owned()),
                NavbarPosition::Left,
            ),
            entry(
                None,
                NavbarTarget::Category("API Reference".to_owned()),
                NavbarPosition::Left,
            ),
        ];

        let navbar = resolve_navbar(&entries, [&tree], &catalog, &Routes::default()).unwrap();

        let labels: Vec<_> = navbar.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["intro", "API Reference"]);
        assert_eq!(navbar[1].href, "/api/core");
    }

    #[test]
    fn test_unknown_sidebar() {
        let catalog = catalog();
        let tree = tree(&catalog);
        let entries = vec![
            entry(
                Some("Guides"),
                NavbarTarget::Doc("guides/best-practices".to_owned()),
                NavbarPosition::Left,
            ),
            entry(
                Some("API Reference"),
                NavbarTarget::Sidebar("apiSidebar".to_owned()),
                NavbarPosition::Left,
            ),
        ];

        let err = resolve_navbar(&entries, [&tree], &catalog, &Routes::default()).unwrap_err();

        assert!(matches!(err, NavbarError::UnknownSidebar { index: 1, .. }));
        assert_eq!(err.to_string(), "navbar[1]: unknown sidebar \"apiSidebar\"");
    }

    #[test]
    fn test_unknown_category() {
        let catalog = catalog();
        let tree = tree(&catalog);
        let entries = vec![entry(
            None,
            NavbarTarget::Category("Tutorials".to_owned()),
            NavbarPosition::Left,
        )];

        let err = resolve_navbar(&entries, [&tree], &catalog, &Routes::default()).unwrap_err();

        assert!(matches!(err, NavbarError::UnknownCategory { .. }));
    }

    #[test]
    fn test_doc_not_in_sidebar() {
        let catalog = catalog().with_document("drafts/unlisted");
        let tree = tree(&catalog);
        let entries = vec![entry(
            None,
            NavbarTarget::Doc("drafts/unlisted".to_owned()),
            NavbarPosition::Left,
        )];

        let err = resolve_navbar(&entries, [&tree], &catalog, &Routes::default()).unwrap_err();

        assert!(matches!(err, NavbarError::DocNotInSidebar { .. }));
    }

    #[test]
    fn test_href_without_label() {
        let catalog = catalog();
        let tree = tree(&catalog);
        let entries = vec![entry(
            None,
            NavbarTarget::Href("https://usehexis.com".to_owned()),
            NavbarPosition::Right,
        )];

        let err = resolve_navbar(&entries, [&tree], &catalog, &Routes::default()).unwrap_err();

        assert!(matches!(err, NavbarError::MissingLabel { index: 0, .. }));
    }

    #[test]
    fn test_link_serializes_position() {
        let json = serde_json::to_value(link(
            "Discord",
            "https://discord.gg/TNVyFgBqYz",
            true,
            NavbarPosition::Right,
        ))
        .unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "label": "Discord",
                "href": "https://discord.gg/TNVyFgBqYz",
                "external": true,
                "position": "right"
            })
        );
    }
}
