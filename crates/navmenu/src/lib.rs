//! Registry of named navigation menus.
//!
//! [`Menu`] owns one [`MenuTree`] arena and maps handler names to the root
//! lists inside it. A [`MenuHandler`] is a view over one or more of those
//! names: rendering a handler renders each of its lists, on top of the global
//! defaults loaded by [`navmenu_config`].
//!
//! # Example
//!
//! ```
//! use navmenu::{Menu, OptionsPatch, Whitespace};
//! use navmenu_config::Config;
//!
//! let mut menu = Menu::new(Config::default());
//! let main = menu.handler("main");
//! menu.list("main")?.add("/", "Home")?.add("/about", "About")?;
//!
//! let html = menu.render(&main, &OptionsPatch::new().whitespace(Whitespace::Compact))?;
//! assert_eq!(
//!     html,
//!     r#"<ul><li><a href="/">Home</a></li><li><a href="/about">About</a></li></ul>"#
//! );
//! # Ok::<(), navmenu::Error>(())
//! ```

mod error;
mod registry;

pub use error::Error;
pub use registry::{Menu, MenuHandler};

pub use navmenu_tree::{
    Attributes, Item, ItemId, ItemKind, ItemList, ItemSpec, ListBuilder, ListId, MenuError,
    MenuTree, OptionsPatch, RenderOptions, Whitespace,
};
