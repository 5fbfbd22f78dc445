//! Rendering options and their layered merge.
//!
//! [`RenderOptions`] is the fully resolved configuration used while
//! rendering one list or item. [`OptionsPatch`] is a partial configuration
//! stored on lists and items or passed at render time. Resolution starts from
//! a base [`RenderOptions`] and applies patches in order:
//!
//! ```text
//! inherited ⊕ list options ⊕ render-time overrides     (per list)
//! list effective ⊕ item options ⊕ render-time overrides (per item)
//! ```
//!
//! Scalar values in a patch replace the base value. Attribute maps merge key
//! by key.

use navmenu_markup::{Attributes, is_valid_attribute_name, is_valid_tag};

use crate::error::MenuError;

/// Whitespace layout of rendered markup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Whitespace {
    /// Indented, one element per line.
    #[default]
    Pretty,
    /// No indentation and no line breaks.
    Compact,
}

/// Fully resolved rendering options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Element wrapping each list.
    pub list_element: String,
    /// Attributes of the list element.
    pub list_attributes: Attributes,
    /// Element wrapping each item.
    pub item_element: String,
    /// Attributes of the item element.
    pub item_attributes: Attributes,
    /// Attributes of the anchor emitted for link items.
    pub link_attributes: Attributes,
    /// Deepest level that is rendered. `0` means unlimited.
    pub max_depth: usize,
    /// Whitespace layout.
    pub whitespace: Whitespace,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            list_element: "ul".to_owned(),
            list_attributes: Attributes::new(),
            item_element: "li".to_owned(),
            item_attributes: Attributes::new(),
            link_attributes: Attributes::new(),
            max_depth: 0,
            whitespace: Whitespace::Pretty,
        }
    }
}

impl RenderOptions {
    /// Apply a patch on top of these options.
    pub fn apply(&mut self, patch: &OptionsPatch) {
        if let Some(element) = &patch.list_element {
            self.list_element.clone_from(element);
        }
        if let Some(element) = &patch.item_element {
            self.item_element.clone_from(element);
        }
        if let Some(max_depth) = patch.max_depth {
            self.max_depth = max_depth;
        }
        if let Some(whitespace) = patch.whitespace {
            self.whitespace = whitespace;
        }
        self.list_attributes.merge(&patch.list_attributes);
        self.item_attributes.merge(&patch.item_attributes);
        self.link_attributes.merge(&patch.link_attributes);
    }

    /// Return a copy with `patch` applied.
    #[must_use]
    pub fn merged(&self, patch: &OptionsPatch) -> Self {
        let mut merged = self.clone();
        merged.apply(patch);
        merged
    }

    /// Check that element names are usable tags and attribute names are
    /// usable attribute names.
    ///
    /// # Errors
    ///
    /// Returns `MenuError::Configuration` naming the offending option.
    pub fn validate(&self) -> Result<(), MenuError> {
        require_tag(&self.list_element, "list_element")?;
        require_tag(&self.item_element, "item_element")?;
        require_attribute_names(&self.list_attributes, "list_attributes")?;
        require_attribute_names(&self.item_attributes, "item_attributes")?;
        require_attribute_names(&self.link_attributes, "link_attributes")?;
        Ok(())
    }
}

fn require_attribute_names(attributes: &Attributes, option: &str) -> Result<(), MenuError> {
    if let Some((name, _)) = attributes
        .iter()
        .find(|(name, _)| !is_valid_attribute_name(name))
    {
        return Err(MenuError::Configuration(format!(
            "{option} contains an invalid attribute name {name:?}"
        )));
    }
    Ok(())
}

fn require_tag(tag: &str, option: &str) -> Result<(), MenuError> {
    if !is_valid_tag(tag) {
        return Err(MenuError::Configuration(format!(
            "{option} must be a valid element name, got {tag:?}"
        )));
    }
    Ok(())
}

/// Partial rendering options.
///
/// Unset scalars leave the base value untouched; attribute entries are
/// overlaid individually.
///
/// ```
/// use navmenu_tree::{OptionsPatch, RenderOptions};
///
/// let patch = OptionsPatch::new().list_element("ol").max_depth(2);
/// let options = RenderOptions::default().merged(&patch);
/// assert_eq!(options.list_element, "ol");
/// assert_eq!(options.item_element, "li");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct OptionsPatch {
    /// Element wrapping each list.
    pub list_element: Option<String>,
    /// Attributes of the list element, overlaid per key.
    pub list_attributes: Attributes,
    /// Element wrapping each item.
    pub item_element: Option<String>,
    /// Attributes of the item element, overlaid per key.
    pub item_attributes: Attributes,
    /// Attributes of the anchor emitted for link items, overlaid per key.
    pub link_attributes: Attributes,
    /// Deepest level that is rendered. `0` means unlimited.
    pub max_depth: Option<usize>,
    /// Whitespace layout.
    pub whitespace: Option<Whitespace>,
}

impl OptionsPatch {
    /// Empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the list element.
    #[must_use]
    pub fn list_element(mut self, tag: impl Into<String>) -> Self {
        self.list_element = Some(tag.into());
        self
    }

    /// Set one list attribute.
    #[must_use]
    pub fn list_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.list_attributes.set(key, value);
        self
    }

    /// Set the item element.
    #[must_use]
    pub fn item_element(mut self, tag: impl Into<String>) -> Self {
        self.item_element = Some(tag.into());
        self
    }

    /// Set one item attribute.
    #[must_use]
    pub fn item_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.item_attributes.set(key, value);
        self
    }

    /// Set one link attribute.
    #[must_use]
    pub fn link_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.link_attributes.set(key, value);
        self
    }

    /// Set the depth limit. `0` means unlimited.
    #[must_use]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Set the whitespace layout.
    #[must_use]
    pub fn whitespace(mut self, whitespace: Whitespace) -> Self {
        self.whitespace = Some(whitespace);
        self
    }

    /// Overlay `other` on this patch. Values set in `other` win.
    pub fn merge(&mut self, other: &Self) {
        if other.list_element.is_some() {
            self.list_element.clone_from(&other.list_element);
        }
        if other.item_element.is_some() {
            self.item_element.clone_from(&other.item_element);
        }
        if other.max_depth.is_some() {
            self.max_depth = other.max_depth;
        }
        if other.whitespace.is_some() {
            self.whitespace = other.whitespace;
        }
        self.list_attributes.merge(&other.list_attributes);
        self.item_attributes.merge(&other.item_attributes);
        self.link_attributes.merge(&other.link_attributes);
    }

    /// True if the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.list_element, "ul");
        assert_eq!(options.item_element, "li");
        assert_eq!(options.max_depth, 0);
        assert_eq!(options.whitespace, Whitespace::Pretty);
        assert!(options.list_attributes.is_empty());
    }

    #[test]
    fn test_apply_overrides_scalars() {
        let patch = OptionsPatch::new()
            .list_element("ol")
            .item_element("dt")
            .max_depth(3)
            .whitespace(Whitespace::Compact);

        let options = RenderOptions::default().merged(&patch);

        assert_eq!(options.list_element, "ol");
        assert_eq!(options.item_element, "dt");
        assert_eq!(options.max_depth, 3);
        assert_eq!(options.whitespace, Whitespace::Compact);
    }

    #[test]
    fn test_apply_merges_attributes_key_by_key() {
        let base = RenderOptions::default().merged(
            &OptionsPatch::new()
                .list_attribute("class", "nav")
                .list_attribute("id", "main"),
        );

        let options = base.merged(&OptionsPatch::new().list_attribute("class", "nav-dark"));

        assert_eq!(options.list_attributes.get("class"), Some("nav-dark"));
        assert_eq!(options.list_attributes.get("id"), Some("main"));
    }

    #[test]
    fn test_empty_patch_changes_nothing() {
        let base = RenderOptions::default();
        assert!(OptionsPatch::new().is_empty());
        assert_eq!(base.merged(&OptionsPatch::new()), base);
    }

    #[test]
    fn test_patch_merge_later_wins() {
        let mut patch = OptionsPatch::new().list_element("ol").max_depth(1);
        patch.merge(&OptionsPatch::new().max_depth(4).link_attribute("rel", "nofollow"));

        assert_eq!(patch.list_element.as_deref(), Some("ol"));
        assert_eq!(patch.max_depth, Some(4));
        assert_eq!(patch.link_attributes.get("rel"), Some("nofollow"));
    }

    #[test]
    fn test_validate_rejects_bad_tags() {
        let options = RenderOptions::default().merged(&OptionsPatch::new().item_element("l i"));

        let err = options.validate().unwrap_err();

        assert!(matches!(err, MenuError::Configuration(_)));
        assert!(err.to_string().contains("item_element"));
    }

    #[test]
    fn test_validate_rejects_bad_attribute_names() {
        for patch in [
            OptionsPatch::new().list_attribute("a b", "x"),
            OptionsPatch::new().item_attribute(r#"x="1"><script"#, "x"),
            OptionsPatch::new().link_attribute("", "x"),
        ] {
            let err = RenderOptions::default().merged(&patch).validate().unwrap_err();
            assert!(
                matches!(err, MenuError::Configuration(_)),
                "Expected MenuError::Configuration, got {err:?}"
            );
        }
    }

    #[test]
    fn test_validate_accepts_data_attributes() {
        let options = RenderOptions::default().merged(
            &OptionsPatch::new()
                .list_attribute("data-menu", "main")
                .link_attribute("aria-current", "page"),
        );
        options.validate().unwrap();
    }

    #[test]
    fn test_validate_accepts_defaults() {
        RenderOptions::default().validate().unwrap();
    }
}
