//! Recursive menu rendering.
//!
//! Each list resolves its options as `inherited ⊕ list ⊕ overrides`, renders
//! its items in order and wraps them in the list element. Items resolve
//! `list ⊕ item ⊕ overrides` and hand that down as the inherited layer of
//! their sub-menu, one level deeper.
//!
//! Depth starts at 1 on the list passed to [`MenuTree::render`]. A level
//! deeper than a non-zero `max_depth` renders as the empty string.

use navmenu_markup::{element, link};

use crate::error::MenuError;
use crate::options::{OptionsPatch, RenderOptions, Whitespace};
use crate::tree::{ItemId, ItemKind, ListId, MenuTree};

impl MenuTree {
    /// Render `list` and its sub-menus on top of the default options.
    ///
    /// # Errors
    ///
    /// Returns `MenuError::Configuration` for invalid element names,
    /// `MenuError::Structural` if a cycle is found and
    /// `MenuError::InvalidArgument` for an unknown handle.
    pub fn render(&self, list: ListId, overrides: &OptionsPatch) -> Result<String, MenuError> {
        self.render_with(list, &RenderOptions::default(), overrides)
    }

    /// Render `list` with `base` as the lowest option layer.
    ///
    /// `overrides` is applied at every level, after the list's own options.
    ///
    /// # Errors
    ///
    /// Same as [`render`](Self::render).
    pub fn render_with(
        &self,
        list: ListId,
        base: &RenderOptions,
        overrides: &OptionsPatch,
    ) -> Result<String, MenuError> {
        let mut renderer = Renderer {
            tree: self,
            overrides,
            path: Vec::new(),
        };
        let html = renderer.render_list(list, base, 1)?;
        tracing::debug!(list = list.index(), bytes = html.len(), "Rendered menu");
        Ok(html)
    }
}

struct Renderer<'a> {
    tree: &'a MenuTree,
    overrides: &'a OptionsPatch,
    /// Lists on the current descent, for cycle detection.
    path: Vec<ListId>,
}

impl Renderer<'_> {
    fn render_list(
        &mut self,
        id: ListId,
        inherited: &RenderOptions,
        depth: usize,
    ) -> Result<String, MenuError> {
        if self.path.contains(&id) {
            return Err(MenuError::Structural(format!(
                "cycle detected while rendering list #{}",
                id.index()
            )));
        }
        let node = self.tree.list_node(id)?;

        let mut options = inherited.merged(&node.options);
        options.apply(self.overrides);

        if options.max_depth > 0 && depth > options.max_depth {
            tracing::debug!(
                list = id.index(),
                depth,
                max_depth = options.max_depth,
                "Depth limit reached"
            );
            return Ok(String::new());
        }
        options.validate()?;

        self.path.push(id);
        let mut contents = String::new();
        for &item in &node.items {
            contents.push_str(&self.render_item(item, &options, depth)?);
        }
        self.path.pop();

        Ok(match options.whitespace {
            Whitespace::Compact => {
                element(&options.list_element, &options.list_attributes, &contents)
            }
            Whitespace::Pretty => {
                let indent = list_indent(depth);
                let inner = format!("\n{contents}{indent}");
                format!(
                    "{indent}{}\n",
                    element(&options.list_element, &options.list_attributes, &inner)
                )
            }
        })
    }

    fn render_item(
        &mut self,
        id: ItemId,
        list_options: &RenderOptions,
        depth: usize,
    ) -> Result<String, MenuError> {
        let node = self.tree.item_node(id)?;
        let mut options = list_options.merged(&node.options);
        options.apply(self.overrides);
        options.validate()?;

        let mut content = match &node.kind {
            ItemKind::Link { url, title } => {
                let href = self.tree.prefixed_url(node.owner, url)?;
                link(&href, title, &options.link_attributes)
            }
            ItemKind::Raw { html } => html.clone(),
        };

        let children = match node.children {
            Some(child) if self.tree.item_has_children(node) => {
                self.render_list(child, &options, depth + 1)?
            }
            _ => String::new(),
        };

        Ok(match options.whitespace {
            Whitespace::Compact => {
                content.push_str(&children);
                element(&options.item_element, &options.item_attributes, &content)
            }
            Whitespace::Pretty => {
                let indent = format!("{}\t", list_indent(depth));
                if !children.is_empty() {
                    content.push('\n');
                    content.push_str(&children);
                    content.push_str(&indent);
                }
                format!(
                    "{indent}{}\n",
                    element(&options.item_element, &options.item_attributes, &content)
                )
            }
        })
    }
}

/// Indentation of the list element at `depth`: each level nests a list
/// inside an item, so it moves two tabs right.
fn list_indent(depth: usize) -> String {
    "\t".repeat(2 * (depth - 1))
}
