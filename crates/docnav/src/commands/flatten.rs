//! `docnav flatten` command implementation.

use clap::Args;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the flatten command.
#[derive(Args)]
pub(crate) struct FlattenArgs {
    #[command(flatten)]
    pub site: SiteArgs,

    /// Sidebar id (required when several sidebars are defined).
    #[arg(long)]
    sidebar: Option<String>,

    /// Print a JSON array instead of one id per line.
    #[arg(long)]
    json: bool,
}

impl FlattenArgs {
    /// Execute the flatten command.
    ///
    /// # Errors
    ///
    /// Returns an error if the site fails to load or the sidebar is unknown.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site = self.site.load()?;
        let order = site.tree(self.sidebar.as_deref())?.flatten();

        if self.json {
            return output.json(&order);
        }
        for id in &order {
            output.data(id.as_str())?;
        }
        Ok(())
    }
}
