//! Sidebar navigation for docnav.
//!
//! This crate turns a declarative sidebars file into validated, ordered
//! navigation trees and answers the questions a documentation renderer asks
//! of them:
//! - [`build`] / [`build_all`]: validate item lists against a [`Catalog`]
//! - [`flatten`]: linear reading order
//! - [`Pagination`]: previous/next links
//! - [`NavigationTree::breadcrumbs`]: enclosing categories of a page
//! - [`SidebarView`]: labels and URLs resolved for the front end
//! - [`resolve_footer`]: footer links checked against the sidebars
//! - [`resolve_navbar`]: navbar links checked against the sidebars
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::Path;
//! use docnav_catalog::MemoryCatalog;
//! use docnav_sidebar::{SidebarsSpec, build_all};
//!
//! let catalog = MemoryCatalog::new().with_document("intro");
//! let spec = SidebarsSpec::load(Path::new("sidebars.yaml"))?;
//! let sidebars = build_all(&spec, &catalog)?;
//!
//! for tree in sidebars.iter() {
//!     println!("{}: {:?}", tree.id(), tree.flatten());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`Catalog`]: docnav_catalog::Catalog

mod builder;
mod error;
mod footer;
mod navbar;
mod pagination;
mod routes;
mod spec;
mod tree;
mod view;

pub use builder::{Sidebars, build, build_all, orphans};
pub use error::{BuildError, NodePath, PathSegment, SidebarsError};
pub use footer::{
    Footer, FooterEntry, FooterError, FooterLink, FooterSection, FooterSectionSpec, FooterTarget,
    resolve_footer,
};
pub use navbar::{
    NavbarEntry, NavbarError, NavbarLink, NavbarPosition, NavbarTarget, resolve_navbar,
};
pub use pagination::{PageLinks, Pagination};
pub use routes::Routes;
pub use spec::{CategoryLinkSpec, CategorySpec, DocSpec, ItemSpec, SidebarsSpec};
pub use tree::{Category, DocLeaf, NavNode, NavigationTree, flatten};
pub use view::{SidebarItem, SidebarView};
