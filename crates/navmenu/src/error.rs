//! Registry error type.

use navmenu_config::ConfigError;
use navmenu_tree::MenuError;

/// Error returned by [`Menu`](crate::Menu) operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Building, searching or rendering a menu failed.
    #[error(transparent)]
    Menu(#[from] MenuError),
    /// Loading the configuration failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// No list is registered under this handler name.
    #[error("Unknown menu handler: {0}")]
    UnknownHandler(String),
}
