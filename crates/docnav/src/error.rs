//! CLI error types.

use docnav_catalog::CatalogError;
use docnav_config::ConfigError;
use docnav_sidebar::{BuildError, FooterError, NavbarError, SidebarsError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Catalog(#[from] CatalogError),

    #[error("{0}")]
    Sidebars(#[from] SidebarsError),

    #[error("{0}")]
    Build(#[from] BuildError),

    #[error("{0}")]
    Footer(#[from] FooterError),

    #[error("{0}")]
    Navbar(#[from] NavbarError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),
}
