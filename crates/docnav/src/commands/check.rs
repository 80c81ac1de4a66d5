//! `docnav check` command implementation.

use clap::Args;
use docnav_catalog::Catalog;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub site: SiteArgs,

    /// Treat documents missing from every sidebar as an error.
    #[arg(long)]
    deny_orphans: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if a sidebar, the footer or the navbar fails
    /// validation, or if `--deny-orphans` is set and orphaned documents exist.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site = self.site.load()?;

        output.info(&format!(
            "Source directory: {}",
            site.config.docs_resolved.source_dir.display()
        ));
        output.info(&format!(
            "Sidebars file: {}",
            site.config.docs_resolved.sidebars.display()
        ));

        for tree in site.sidebars.iter() {
            output.highlight(&format!(
                "{}: {} documents",
                tree.id(),
                tree.flatten().len()
            ));
        }

        let footer = site.footer()?;
        if !footer.sections.is_empty() {
            let links: usize = footer
                .sections
                .iter()
                .map(|section| section.items.len())
                .sum();
            output.info(&format!(
                "Footer: {} sections, {links} links",
                footer.sections.len()
            ));
        }

        let navbar = site.navbar()?;
        if !navbar.is_empty() {
            output.info(&format!("Navbar: {} links", navbar.len()));
        }

        let orphans = site.sidebars.orphans(&site.catalog);
        if site.config.docs_resolved.report_orphans || self.deny_orphans {
            for doc in &orphans {
                output.warning(&format!("Not in any sidebar: {}", doc.id));
            }
        }
        if self.deny_orphans && !orphans.is_empty() {
            return Err(CliError::Validation(format!(
                "{} documents are not in any sidebar",
                orphans.len()
            )));
        }

        output.success(&format!(
            "Checked {} documents in {} sidebars",
            site.catalog.len(),
            site.sidebars.len()
        ));
        Ok(())
    }
}
