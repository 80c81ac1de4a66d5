//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod flatten;
pub(crate) mod footer;
pub(crate) mod navbar;
pub(crate) mod sidebar;

use std::path::PathBuf;

use clap::Args;
use docnav_catalog::Catalog;
use docnav_catalog_fs::FsCatalog;
use docnav_config::{
    CliSettings, Config, FooterItemTarget, FooterSectionConfig, NavbarItemConfig,
    NavbarItemTarget,
};
use docnav_sidebar::{
    Footer, FooterEntry, FooterSectionSpec, FooterTarget, NavbarEntry, NavbarLink,
    NavbarPosition, NavbarTarget, NavigationTree, Routes, Sidebars, SidebarsSpec, build_all,
    resolve_footer, resolve_navbar,
};

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use flatten::FlattenArgs;
pub(crate) use footer::FooterArgs;
pub(crate) use navbar::NavbarArgs;
pub(crate) use sidebar::SidebarArgs;

/// Arguments shared by every command.
#[derive(Args)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Sidebars file (overrides config).
    #[arg(long)]
    sidebars: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Loaded and validated site navigation.
pub(crate) struct Site {
    pub config: Config,
    pub catalog: FsCatalog,
    pub sidebars: Sidebars,
}

impl SiteArgs {
    /// Load configuration, scan the docs directory and build every sidebar.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the three steps fails.
    pub(crate) fn load(&self) -> Result<Site, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir.clone(),
            sidebars: self.sidebars.clone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let catalog = FsCatalog::load(config.docs_resolved.source_dir.clone())?;
        let spec = SidebarsSpec::load(&config.docs_resolved.sidebars)?;
        let sidebars = build_all(&spec, &catalog)?;

        tracing::info!(
            sidebars = sidebars.len(),
            documents = catalog.len(),
            "Navigation loaded"
        );

        Ok(Site {
            config,
            catalog,
            sidebars,
        })
    }
}

impl Site {
    /// URL mapping from the `[site]` section.
    pub(crate) fn routes(&self) -> Routes {
        Routes::new(
            self.config.site.base_url.clone(),
            self.config.site.route_base_path.clone(),
        )
    }

    /// Sidebar by id, or the only sidebar when no id is given.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Validation` if the id is unknown, or if no id is
    /// given and the sidebars file defines more than one sidebar.
    pub(crate) fn tree(&self, id: Option<&str>) -> Result<&NavigationTree, CliError> {
        if let Some(id) = id {
            return self
                .sidebars
                .get(id)
                .ok_or_else(|| CliError::Validation(format!("Unknown sidebar: {id}")));
        }

        let mut trees = self.sidebars.iter();
        match (trees.next(), trees.next()) {
            (Some(tree), None) => Ok(tree),
            (None, _) => Err(CliError::Validation("No sidebars defined".to_owned())),
            (Some(_), Some(_)) => {
                let ids: Vec<_> = self.sidebars.iter().map(NavigationTree::id).collect();
                Err(CliError::Validation(format!(
                    "Several sidebars defined ({}), pass --sidebar",
                    ids.join(", ")
                )))
            }
        }
    }

    /// Footer sections from config, resolved against every sidebar, plus the
    /// configured copyright line.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Validation` for an entry without a single target
    /// and `CliError::Footer` if an entry does not resolve.
    pub(crate) fn footer(&self) -> Result<Footer, CliError> {
        let specs = footer_specs(&self.config.footer)?;
        let sections = resolve_footer(
            &specs,
            self.sidebars.iter(),
            &self.catalog,
            &self.routes(),
        )?;
        Ok(Footer {
            sections,
            copyright: self.config.site.footer_copyright.clone(),
        })
    }

    /// Navbar entries from config, resolved against every sidebar.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Validation` for an entry without a single target
    /// and `CliError::Navbar` if an entry does not resolve.
    pub(crate) fn navbar(&self) -> Result<Vec<NavbarLink>, CliError> {
        let entries = navbar_entries(&self.config.navbar)?;
        let navbar = resolve_navbar(
            &entries,
            self.sidebars.iter(),
            &self.catalog,
            &self.routes(),
        )?;
        Ok(navbar)
    }
}

/// Convert validated footer config into resolver input.
fn footer_specs(sections: &[FooterSectionConfig]) -> Result<Vec<FooterSectionSpec>, CliError> {
    sections
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let items = section
                .items
                .iter()
                .enumerate()
                .map(|(j, item)| {
                    let target = match item.target() {
                        Some(FooterItemTarget::Href(href)) => FooterTarget::Href(href.to_owned()),
                        Some(FooterItemTarget::Doc(doc)) => FooterTarget::Doc(doc.to_owned()),
                        Some(FooterItemTarget::Category(name)) => {
                            FooterTarget::Category(name.to_owned())
                        }
                        None => {
                            return Err(CliError::Validation(format!(
                                "footer[{i}].items[{j}] must set exactly one of href, doc or category"
                            )));
                        }
                    };
                    Ok(FooterEntry {
                        label: item.label.clone(),
                        target,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(FooterSectionSpec {
                title: section.title.clone(),
                items,
            })
        })
        .collect()
}

/// Convert validated navbar config into resolver input.
fn navbar_entries(items: &[NavbarItemConfig]) -> Result<Vec<NavbarEntry>, CliError> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let target = match item.target() {
                Some(NavbarItemTarget::Sidebar(id)) => NavbarTarget::Sidebar(id.to_owned()),
                Some(NavbarItemTarget::Href(href)) => NavbarTarget::Href(href.to_owned()),
                Some(NavbarItemTarget::Doc(doc)) => NavbarTarget::Doc(doc.to_owned()),
                Some(NavbarItemTarget::Category(name)) => NavbarTarget::Category(name.to_owned()),
                None => {
                    return Err(CliError::Validation(format!(
                        "navbar[{i}] must set exactly one of sidebar, href, doc or category"
                    )));
                }
            };
            let position = match item.position {
                docnav_config::NavbarPosition::Left => NavbarPosition::Left,
                docnav_config::NavbarPosition::Right => NavbarPosition::Right,
            };
            Ok(NavbarEntry {
                label: item.label.clone(),
                target,
                position,
            })
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use std::fs;
    use std::path::Path;

    use docnav_config::FooterItemConfig;
    use docnav_sidebar::NavbarError;
    use pretty_assertions::assert_eq;

    use super::*;

    /// Write a small site: config, sidebars file and docs directory.
    pub(crate) fn write_site(root: &Path, sidebars: &str) {
        fs::write(
            root.join("docnav.toml"),
            r#"
[site]
url = "https://docs.usehexis.com"
footer_copyright = "Copyright © 2026 A5 Software LLC."

[[footer]]
title = "Documentation"
items = [
  { label = "Getting Started", doc = "intro" },
  { category = "API Reference" },
]

[[footer]]
title = "Community"
items = [{ label = "Discord", href = "https://discord.gg/TNVyFgBqYz" }]

[[navbar]]
sidebar = "docsSidebar"
label = "API Reference"

[[navbar]]
href = "https://usehexis.com"
label = "Website"
position = "right"
"#,
        )
        .unwrap();
        fs::write(root.join("sidebars.yaml"), sidebars).unwrap();

        let docs = root.join("docs");
        fs::create_dir_all(docs.join("api")).unwrap();
        fs::write(
            docs.join("intro.md"),
            "---\ntitle: Introduction\nslug: /\n---\n# Intro\n",
        )
        .unwrap();
        fs::write(docs.join("api/core.md"), "---\ntitle: Core API\n---\n").unwrap();
        fs::write(docs.join("api/player.md"), "# Player\n").unwrap();
    }

    pub(crate) const SIDEBARS: &str = "docsSidebar:
  - intro
  - type: category
    label: API Reference
    collapsed: false
    items:
      - api/core
      - api/player
";

    pub(crate) fn site_args(root: &Path) -> SiteArgs {
        SiteArgs {
            config: Some(root.join("docnav.toml")),
            source_dir: None,
            sidebars: None,
            verbose: false,
        }
    }

    #[test]
    fn test_load_site() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_site(temp_dir.path(), SIDEBARS);

        let site = site_args(temp_dir.path()).load().unwrap();

        let tree = site.tree(None).unwrap();
        let order: Vec<_> = tree.flatten().iter().map(ToString::to_string).collect();
        assert_eq!(order, vec!["intro", "api/core", "api/player"]);
    }

    #[test]
    fn test_load_site_reports_build_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_site(temp_dir.path(), "docsSidebar:\n  - intro\n  - api/missing\n");

        let err = site_args(temp_dir.path()).load().err().unwrap();

        assert!(matches!(err, CliError::Build(_)));
        assert_eq!(
            err.to_string(),
            "docsSidebar[1]: unknown document `api/missing`"
        );
    }

    #[test]
    fn test_sidebars_override() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_site(temp_dir.path(), SIDEBARS);
        let other = temp_dir.path().join("other.json");
        fs::write(&other, r#"{"mini": ["intro"]}"#).unwrap();
        let mut args = site_args(temp_dir.path());
        args.sidebars = Some(other);

        let site = args.load().unwrap();

        assert!(site.tree(Some("mini")).is_ok());
        assert!(site.tree(Some("docsSidebar")).is_err());
    }

    #[test]
    fn test_tree_requires_id_with_several_sidebars() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_site(temp_dir.path(), "a:\n  - intro\nb:\n  - api/core\n");

        let site = site_args(temp_dir.path()).load().unwrap();

        let err = site.tree(None).err().unwrap();
        assert_eq!(
            err.to_string(),
            "Several sidebars defined (a, b), pass --sidebar"
        );
        assert_eq!(site.tree(Some("b")).unwrap().id(), "b");
    }

    #[test]
    fn test_footer() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_site(temp_dir.path(), SIDEBARS);

        let site = site_args(temp_dir.path()).load().unwrap();
        let footer = site.footer().unwrap();

        let hrefs: Vec<_> = footer
            .sections
            .iter()
            .flat_map(|section| section.items.iter().map(|l| l.href.as_str()))
            .collect();
        assert_eq!(hrefs, vec!["/", "/api/core", "https://discord.gg/TNVyFgBqYz"]);
        assert_eq!(
            footer.copyright.as_deref(),
            Some("Copyright © 2026 A5 Software LLC.")
        );
    }

    #[test]
    fn test_footer_specs_rejects_item_without_target() {
        let sections = vec![FooterSectionConfig {
            title: "More".to_owned(),
            items: vec![FooterItemConfig {
                label: Some("Nowhere".to_owned()),
                href: None,
                doc: None,
                category: None,
            }],
        }];

        let err = footer_specs(&sections).unwrap_err();

        assert!(matches!(err, CliError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "footer[0].items[0] must set exactly one of href, doc or category"
        );
    }

    #[test]
    fn test_navbar() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_site(temp_dir.path(), SIDEBARS);

        let site = site_args(temp_dir.path()).load().unwrap();
        let navbar = site.navbar().unwrap();

        let links: Vec<_> = navbar
            .iter()
            .map(|link| (link.label.as_str(), link.href.as_str(), link.position))
            .collect();
        assert_eq!(
            links,
            vec![
                ("API Reference", "/", NavbarPosition::Left),
                ("Website", "https://usehexis.com", NavbarPosition::Right),
            ]
        );
    }

    #[test]
    fn test_navbar_unknown_sidebar() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_site(temp_dir.path(), SIDEBARS);

        let mut site = site_args(temp_dir.path()).load().unwrap();
        site.config.navbar[0].sidebar = Some("apiSidebar".to_owned());
        let err = site.navbar().unwrap_err();

        assert!(matches!(
            err,
            CliError::Navbar(NavbarError::UnknownSidebar { .. })
        ));
        assert_eq!(err.to_string(), "navbar[0]: unknown sidebar \"apiSidebar\"");
    }

    #[test]
    fn test_navbar_entries_rejects_item_without_target() {
        let items = vec![NavbarItemConfig {
            label: Some("Nowhere".to_owned()),
            position: docnav_config::NavbarPosition::Right,
            sidebar: None,
            href: None,
            doc: None,
            category: None,
        }];

        let err = navbar_entries(&items).unwrap_err();

        assert_eq!(
            err.to_string(),
            "navbar[0] must set exactly one of sidebar, href, doc or category"
        );
    }
}
