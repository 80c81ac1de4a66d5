//! docnav CLI - documentation site navigation.
//!
//! Provides commands for:
//! - `check`: Validate every sidebar against the docs directory
//! - `flatten`: Print the reading order of a sidebar
//! - `footer`: Print the resolved footer links as JSON
//! - `navbar`: Print the resolved navbar links as JSON
//! - `sidebar`: Print the renderer view of a sidebar as JSON

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, FlattenArgs, FooterArgs, NavbarArgs, SidebarArgs};
use output::Output;

/// docnav - Documentation site navigation.
#[derive(Parser)]
#[command(name = "docnav", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate sidebars and report orphaned pages.
    Check(CheckArgs),
    /// Print the reading order of a sidebar.
    Flatten(FlattenArgs),
    /// Print resolved footer sections as JSON.
    Footer(FooterArgs),
    /// Print resolved navbar links as JSON.
    Navbar(NavbarArgs),
    /// Print a sidebar with resolved labels and URLs as JSON.
    Sidebar(SidebarArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Check(args) => args.site.verbose,
            Self::Flatten(args) => args.site.verbose,
            Self::Footer(args) => args.site.verbose,
            Self::Navbar(args) => args.site.verbose,
            Self::Sidebar(args) => args.site.verbose,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Flatten(args) => args.execute(),
        Commands::Footer(args) => args.execute(),
        Commands::Navbar(args) => args.execute(),
        Commands::Sidebar(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
