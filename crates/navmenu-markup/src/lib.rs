//! HTML element emission for navigation menus.
//!
//! This crate is the lowest layer of navmenu. It knows nothing about menus:
//! given a tag name, an [`Attributes`] map and inner content it produces the
//! serialized element, escaping attribute values along the way. Attribute
//! names are not escaped; callers check them with [`is_valid_attribute_name`].
//!
//! # Example
//!
//! ```
//! use navmenu_markup::{Attributes, element};
//!
//! let mut attrs = Attributes::new();
//! attrs.set("class", "nav");
//! assert_eq!(element("ul", &attrs, "items"), r#"<ul class="nav">items</ul>"#);
//! ```

mod attributes;
mod element;

pub use attributes::Attributes;
pub use element::{element, escape_html, is_valid_attribute_name, is_valid_tag, link};
