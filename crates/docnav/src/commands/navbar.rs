//! `docnav navbar` command implementation.

use clap::Args;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the navbar command.
#[derive(Args)]
pub(crate) struct NavbarArgs {
    #[command(flatten)]
    pub site: SiteArgs,
}

impl NavbarArgs {
    /// Execute the navbar command.
    ///
    /// # Errors
    ///
    /// Returns an error if the site fails to load or a navbar entry does not
    /// resolve.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site = self.site.load()?;
        output.json(&site.navbar()?)
    }
}
