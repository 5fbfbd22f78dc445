//! Nested navigation menus rendered to HTML.
//!
//! A menu is a tree of item lists. Each [`ItemList`] holds ordered items,
//! each item is a link or a raw markup fragment, and an item may own a
//! sub-menu. All lists and items of a tree live in one [`MenuTree`] arena and
//! are addressed by [`ListId`] / [`ItemId`] handles.
//!
//! # Architecture
//!
//! - Building goes through [`ListBuilder`] (`&mut MenuTree`), which keeps the
//!   structure a tree: a sub-menu has one owner and never contains its owner.
//! - Rendering and lookup take `&MenuTree`, so a built tree can be shared.
//! - Options are layered with [`OptionsPatch`] on top of a base
//!   [`RenderOptions`]; see the [`options`] module for the merge order.
//!
//! # Example
//!
//! ```
//! use navmenu_tree::{ItemSpec, MenuTree, OptionsPatch, Whitespace};
//!
//! let mut tree = MenuTree::new();
//! let guides = tree.new_list();
//! tree.list_mut(guides)?.add("/guides/setup", "Setup")?;
//!
//! let main = tree.named_list("main");
//! tree.list_mut(main)?
//!     .add("/", "Home")?
//!     .add_with("/guides", "Guides", ItemSpec::new().children(guides))?;
//!
//! let html = tree.render(main, &OptionsPatch::new().whitespace(Whitespace::Compact))?;
//! assert_eq!(
//!     html,
//!     concat!(
//!         r#"<ul><li><a href="/">Home</a></li>"#,
//!         r#"<li><a href="/guides">Guides</a>"#,
//!         r#"<ul><li><a href="/guides/setup">Setup</a></li></ul></li></ul>"#,
//!     )
//! );
//! # Ok::<(), navmenu_tree::MenuError>(())
//! ```

mod error;
mod find;
pub mod options;
mod prefix;
mod render;
mod tree;

pub use error::MenuError;
pub use navmenu_markup::Attributes;
pub use options::{OptionsPatch, RenderOptions, Whitespace};
pub use tree::{Item, ItemId, ItemKind, ItemList, ItemSpec, ListBuilder, ListId, MenuTree};
