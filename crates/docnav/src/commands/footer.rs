//! `docnav footer` command implementation.

use clap::Args;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the footer command.
#[derive(Args)]
pub(crate) struct FooterArgs {
    #[command(flatten)]
    pub site: SiteArgs,
}

impl FooterArgs {
    /// Execute the footer command.
    ///
    /// # Errors
    ///
    /// Returns an error if the site fails to load or a footer entry does not
    /// resolve.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site = self.site.load()?;
        output.json(&site.footer()?)
    }
}
