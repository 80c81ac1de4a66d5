//! Footer links resolved against the navigation.
//!
//! Footer entries name documents and top-level categories instead of
//! hard-coded URLs, so renaming or moving a page cannot leave a stale link
//! behind. Static external links are passed through.

use serde::Serialize;

use docnav_catalog::{Catalog, DocumentId, InvalidDocumentId};

use crate::routes::Routes;
use crate::tree::{Category, NavigationTree};

/// What a footer entry points at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FooterTarget {
    /// Static URL, usually external.
    Href(String),
    /// Document that must be in a sidebar.
    Doc(String),
    /// Top-level sidebar category, linked through its first document.
    Category(String),
}

/// One configured footer entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FooterEntry {
    /// Link text. Required for [`FooterTarget::Href`].
    pub label: Option<String>,
    /// Link target.
    pub target: FooterTarget,
}

/// Configured footer column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FooterSectionSpec {
    /// Column heading.
    pub title: String,
    /// Entries in display order.
    pub items: Vec<FooterEntry>,
}

/// Resolved footer column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FooterSection {
    /// Column heading.
    pub title: String,
    /// Links in display order.
    pub items: Vec<FooterLink>,
}

/// Resolved footer link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FooterLink {
    /// Link text.
    pub label: String,
    /// Target URL.
    pub href: String,
    /// True for links leaving the site (opened in a new tab).
    pub external: bool,
}

/// Resolved footer: link columns plus an optional copyright line.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Footer {
    /// Columns in display order.
    pub sections: Vec<FooterSection>,
    /// Copyright notice, passed through verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

/// Footer resolution error.
#[derive(Debug, thiserror::Error)]
pub enum FooterError {
    /// No sidebar has a top-level category with this label.
    #[error("footer section \"{section}\": no top-level sidebar category \"{category}\"")]
    UnknownCategory {
        /// Section title.
        section: String,
        /// Requested category label.
        category: String,
    },
    /// Document is not referenced by any sidebar.
    #[error("footer section \"{section}\": document `{id}` is not in any sidebar")]
    DocNotInSidebar {
        /// Section title.
        section: String,
        /// Requested document.
        id: DocumentId,
    },
    /// Document id is not well-formed.
    #[error("footer section \"{section}\": {source}")]
    InvalidDoc {
        /// Section title.
        section: String,
        /// Validation failure.
        #[source]
        source: InvalidDocumentId,
    },
    /// Static link without a label.
    #[error("footer section \"{section}\": link to {href} needs a label")]
    MissingLabel {
        /// Section title.
        section: String,
        /// Link URL.
        href: String,
    },
}

/// Resolve configured footer sections against the site's sidebars.
///
/// Documents may live in any of `trees`. Categories are looked up at the top
/// level of each tree in turn; the first match wins.
///
/// # Errors
///
/// Returns the first [`FooterError`] in section order.
pub fn resolve_footer<'t, C: Catalog + ?Sized>(
    sections: &[FooterSectionSpec],
    trees: impl IntoIterator<Item = &'t NavigationTree>,
    catalog: &C,
    routes: &Routes,
) -> Result<Vec<FooterSection>, FooterError> {
    let trees: Vec<_> = trees.into_iter().collect();
    sections
        .iter()
        .map(|section| {
            let items = section
                .items
                .iter()
                .map(|entry| resolve_entry(&section.title, entry, &trees, catalog, routes))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(FooterSection {
                title: section.title.clone(),
                items,
            })
        })
        .collect()
}

fn resolve_entry<C: Catalog + ?Sized>(
    section: &str,
    entry: &FooterEntry,
    trees: &[&NavigationTree],
    catalog: &C,
    routes: &Routes,
) -> Result<FooterLink, FooterError> {
    match &entry.target {
        FooterTarget::Href(href) => {
            let label = entry.label.clone().ok_or_else(|| FooterError::MissingLabel {
                section: section.to_owned(),
                href: href.clone(),
            })?;
            Ok(FooterLink {
                label,
                href: href.clone(),
                external: is_external(href),
            })
        }
        FooterTarget::Doc(raw) => {
            let id = DocumentId::new(raw.as_str()).map_err(|source| FooterError::InvalidDoc {
                section: section.to_owned(),
                source,
            })?;
            if !trees.iter().any(|tree| tree.contains(&id)) {
                return Err(FooterError::DocNotInSidebar {
                    section: section.to_owned(),
                    id,
                });
            }
            Ok(FooterLink {
                label: entry
                    .label
                    .clone()
                    .unwrap_or_else(|| doc_label(&id, catalog)),
                href: routes.href(&id, catalog),
                external: false,
            })
        }
        FooterTarget::Category(name) => {
            let (category, first) =
                category_landing(trees, name).ok_or_else(|| FooterError::UnknownCategory {
                    section: section.to_owned(),
                    category: name.clone(),
                })?;
            Ok(FooterLink {
                label: entry.label.clone().unwrap_or_else(|| category.label.clone()),
                href: routes.href(first, catalog),
                external: false,
            })
        }
    }
}

/// First top-level category called `label` that leads to a document.
pub(crate) fn category_landing<'t>(
    trees: &[&'t NavigationTree],
    label: &str,
) -> Option<(&'t Category, &'t DocumentId)> {
    trees
        .iter()
        .filter_map(|tree| tree.category(label))
        .find_map(|category| category.first_doc().map(|first| (category, first)))
}

/// Catalog label of a document, or its id when the catalog lacks it.
pub(crate) fn doc_label<C: Catalog + ?Sized>(id: &DocumentId, catalog: &C) -> String {
    catalog
        .get(id)
        .map_or_else(|| id.to_string(), |doc| doc.label().to_owned())
}

pub(crate) fn is_external(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://") || href.starts_with("//")
}

#[cfg(test)]
mod tests {
    use docnav_catalog::{DocumentInfo, MemoryCatalog};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::builder::build;
    use crate::spec::ItemSpec;

    fn catalog() -> MemoryCatalog {
        MemoryCatalog::new()
            .with_info(DocumentInfo {
                title: Some("Introduction".to_owned()),
                slug: Some("/".to_owned()),
                ..DocumentInfo::new(DocumentId::new("intro").unwrap())
            })
            .with_document("api/core")
            .with_document("guides/best-practices")
            .with_document("quick-reference")
            .with_document("drafts/unlisted")
    }

    fn tree(catalog: &MemoryCatalog) -> NavigationTree {
        let items = vec![
            ItemSpec::doc("intro"),
            ItemSpec::category("API Reference", vec![ItemSpec::doc("api/core")]),
            ItemSpec::category("Guides", vec![ItemSpec::doc("guides/best-practices")]),
            ItemSpec::doc("quick-reference"),
        ];
        build("docsSidebar", &items, catalog).unwrap()
    }

    fn entry(label: Option<&str>, target: FooterTarget) -> FooterEntry {
        FooterEntry {
            label: label.map(str::to_owned),
            target,
        }
    }

    fn section(title: &str, items: Vec<FooterEntry>) -> FooterSectionSpec {
        FooterSectionSpec {
            title: title.to_owned(),
            items,
        }
    }

    fn link(label: &str, href: &str, external: bool) -> FooterLink {
        FooterLink {
            label: label.to_owned(),
            href: href.to_owned(),
            external,
        }
    }

    #[test]
    fn test_resolve_hexis_footer() {
        let catalog = catalog();
        let tree = tree(&catalog);
        let sections = vec![
            section(
                "Documentation",
                vec![
                    entry(
                        Some("Getting Started"),
                        FooterTarget::Doc("intro".to_owned()),
                    ),
                    entry(None, FooterTarget::Category("API Reference".to_owned())),
                    entry(None, FooterTarget::Category("Guides".to_owned())),
                ],
            ),
            section(
                "Community",
                vec![entry(
                    Some("Discord"),
                    FooterTarget::Href("https://discord.gg/TNVyFgBqYz".to_owned()),
                )],
            ),
            section(
                "More",
                vec![
                    entry(
                        Some("Main Website"),
                        FooterTarget::Href("https://usehexis.com".to_owned()),
                    ),
                    entry(
                        Some("Quick Reference"),
                        FooterTarget::Doc("quick-reference".to_owned()),
                    ),
                ],
            ),
        ];

        let footer = resolve_footer(&sections, [&tree], &catalog, &Routes::default()).unwrap();

        assert_eq!(
            footer,
            vec![
                FooterSection {
                    title: "Documentation".to_owned(),
                    items: vec![
                        link("Getting Started", "/", false),
                        link("API Reference", "/api/core", false),
                        link("Guides", "/guides/best-practices", false),
                    ],
                },
                FooterSection {
                    title: "Community".to_owned(),
                    items: vec![link("Discord", "https://discord.gg/TNVyFgBqYz", true)],
                },
                FooterSection {
                    title: "More".to_owned(),
                    items: vec![
                        link("Main Website", "https://usehexis.com", true),
                        link("Quick Reference", "/quick-reference", false),
                    ],
                },
            ]
        );
    }

    #[test]
    fn test_doc_label_defaults_to_catalog_label() {
        let catalog = catalog();
        let tree = tree(&catalog);
        let sections = vec![section(
            "Docs",
            vec![entry(None, FooterTarget::Doc("intro".to_owned()))],
        )];

        let footer = resolve_footer(&sections, [&tree], &catalog, &Routes::default()).unwrap();

        assert_eq!(footer[0].items[0].label, "Introduction");
    }

    #[test]
    fn test_unknown_category() {
        let catalog = catalog();
        let tree = tree(&catalog);
        let sections = vec![section(
            "Docs",
            vec![entry(None, FooterTarget::Category("Tutorials".to_owned()))],
        )];

        let err = resolve_footer(&sections, [&tree], &catalog, &Routes::default()).unwrap_err();

        assert!(matches!(err, FooterError::UnknownCategory { .. }));
        assert_eq!(
            err.to_string(),
            "footer section \"Docs\": no top-level sidebar category \"Tutorials\""
        );
    }

    #[test]
    fn test_doc_not_in_sidebar() {
        let catalog = catalog();
        let tree = tree(&catalog);
        let sections = vec![section(
            "Docs",
            vec![entry(None, FooterTarget::Doc("drafts/unlisted".to_owned()))],
        )];

        let err = resolve_footer(&sections, [&tree], &catalog, &Routes::default()).unwrap_err();

        assert!(matches!(err, FooterError::DocNotInSidebar { .. }));
    }

    #[test]
    fn test_href_without_label() {
        let catalog = catalog();
        let tree = tree(&catalog);
        let sections = vec![section(
            "Community",
            vec![entry(
                None,
                FooterTarget::Href("https://discord.gg/TNVyFgBqYz".to_owned()),
            )],
        )];

        let err = resolve_footer(&sections, [&tree], &catalog, &Routes::default()).unwrap_err();

        assert!(matches!(err, FooterError::MissingLabel { .. }));
    }

    #[test]
    fn test_invalid_doc_id() {
        let catalog = catalog();
        let tree = tree(&catalog);
        let sections = vec![section(
            "Docs",
            vec![entry(None, FooterTarget::Doc("/absolute".to_owned()))],
        )];

        let err = resolve_footer(&sections, [&tree], &catalog, &Routes::default()).unwrap_err();

        assert!(matches!(err, FooterError::InvalidDoc { .. }));
    }

    #[test]
    fn test_footer_copyright_is_optional_in_json() {
        let sections = vec![FooterSection {
            title: "Community".to_owned(),
            items: vec![link("Discord", "https://discord.gg/TNVyFgBqYz", true)],
        }];
        let footer = Footer {
            sections: sections.clone(),
            copyright: None,
        };
        let json = serde_json::to_value(&footer).unwrap();
        assert!(json.get("copyright").is_none());

        let footer = Footer {
            sections,
            copyright: Some("Copyright © 2026 A5 Software LLC.".to_owned()),
        };
        let json = serde_json::to_value(&footer).unwrap();
        assert_eq!(json["copyright"], "Copyright © 2026 A5 Software LLC.");
        assert_eq!(json["sections"][0]["items"][0]["label"], "Discord");
    }

    #[test]
    fn test_relative_href_is_internal() {
        assert!(!is_external("/quick-reference"));
        assert!(is_external("//cdn.example.com"));
        assert!(is_external("https://usehexis.com"));
    }
}
