//! `docnav sidebar` command implementation.

use clap::Args;
use docnav_sidebar::SidebarView;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    #[command(flatten)]
    pub site: SiteArgs,

    /// Sidebar id (required when several sidebars are defined).
    #[arg(long)]
    sidebar: Option<String>,
}

impl SidebarArgs {
    /// Execute the sidebar command.
    ///
    /// # Errors
    ///
    /// Returns an error if the site fails to load or the sidebar is unknown.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site = self.site.load()?;
        let tree = site.tree(self.sidebar.as_deref())?;
        output.json(&SidebarView::new(tree, &site.catalog, &site.routes()))
    }
}
