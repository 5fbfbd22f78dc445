//! Arena of item lists and items.
//!
//! # Architecture
//!
//! Lists and items are stored in two flat vectors owned by [`MenuTree`] and
//! addressed by [`ListId`] / [`ItemId`]. The owner and parent relations are
//! plain indices:
//! - a list owns its items (`ListNode::items`)
//! - an item owns at most one child list (`ItemNode::children`)
//! - a list is owned by at most one item (`ListNode::parent_item`)
//!
//! Every mutation goes through [`ListBuilder`], which keeps both directions
//! consistent and refuses edits that would turn the tree into a graph.

use navmenu_markup::Attributes;

use crate::error::MenuError;
use crate::options::OptionsPatch;

/// Handle to an item list inside a [`MenuTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListId(usize);

impl ListId {
    /// Arena index of this list.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Handle to an item inside a [`MenuTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(usize);

impl ItemId {
    /// Arena index of this item.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// What an item renders as.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemKind {
    /// Hyperlink with a display title.
    Link {
        /// Link target, before prefixing.
        url: String,
        /// Display title (escaped on output).
        title: String,
    },
    /// Pre-formatted markup inserted verbatim.
    Raw {
        /// Markup fragment.
        html: String,
    },
}

#[derive(Clone, Debug, Default)]
pub(crate) struct ListNode {
    pub(crate) name: Option<String>,
    pub(crate) items: Vec<ItemId>,
    pub(crate) parent_item: Option<ItemId>,
    pub(crate) prefix: Option<String>,
    pub(crate) prefix_from_parents: bool,
    pub(crate) prefix_from_root: bool,
    pub(crate) options: OptionsPatch,
}

#[derive(Clone, Debug)]
pub(crate) struct ItemNode {
    pub(crate) owner: ListId,
    pub(crate) kind: ItemKind,
    pub(crate) children: Option<ListId>,
    pub(crate) options: OptionsPatch,
}

/// Optional parts of a new item.
///
/// ```
/// use navmenu_tree::{ItemSpec, MenuTree};
///
/// let mut tree = MenuTree::new();
/// let sub = tree.new_list();
/// tree.list_mut(sub)?.add("/guide/setup", "Setup")?;
///
/// let root = tree.new_list();
/// tree.list_mut(root)?.add_with(
///     "/guide",
///     "Guide",
///     ItemSpec::new().children(sub).item_attribute("class", "open"),
/// )?;
/// assert!(tree.list(root)?.items().next().unwrap().has_children());
/// # Ok::<(), navmenu_tree::MenuError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct ItemSpec {
    children: Option<ListId>,
    link_attributes: Attributes,
    item_attributes: Attributes,
    item_element: Option<String>,
}

impl ItemSpec {
    /// Spec with no sub-menu, attributes or element override.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `list` as the item's sub-menu.
    #[must_use]
    pub fn children(mut self, list: ListId) -> Self {
        self.children = Some(list);
        self
    }

    /// Attribute on the item's anchor. Ignored for raw items.
    #[must_use]
    pub fn link_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.link_attributes.set(key, value);
        self
    }

    /// Attribute on the item's wrapping element.
    #[must_use]
    pub fn item_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.item_attributes.set(key, value);
        self
    }

    /// Wrapping element for this item only.
    #[must_use]
    pub fn item_element(mut self, tag: impl Into<String>) -> Self {
        self.item_element = Some(tag.into());
        self
    }
}

/// Arena holding every list and item of one or more menu trees.
#[derive(Clone, Debug, Default)]
pub struct MenuTree {
    lists: Vec<ListNode>,
    items: Vec<ItemNode>,
}

impl MenuTree {
    /// Empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty, unnamed root list.
    pub fn new_list(&mut self) -> ListId {
        self.lists.push(ListNode::default());
        ListId(self.lists.len() - 1)
    }

    /// Create an empty root list with a name.
    pub fn named_list(&mut self, name: impl Into<String>) -> ListId {
        let id = self.new_list();
        self.lists[id.0].name = Some(name.into());
        id
    }

    /// Number of lists in the arena.
    #[must_use]
    pub fn list_count(&self) -> usize {
        self.lists.len()
    }

    /// Read-only view of a list.
    ///
    /// # Errors
    ///
    /// Returns `MenuError::InvalidArgument` if `id` is not from this arena.
    pub fn list(&self, id: ListId) -> Result<ItemList<'_>, MenuError> {
        self.list_node(id)?;
        Ok(ItemList { tree: self, id })
    }

    /// Read-only view of an item.
    ///
    /// # Errors
    ///
    /// Returns `MenuError::InvalidArgument` if `id` is not from this arena.
    pub fn item(&self, id: ItemId) -> Result<Item<'_>, MenuError> {
        self.item_node(id)?;
        Ok(Item { tree: self, id })
    }

    /// Mutable builder for a list.
    ///
    /// # Errors
    ///
    /// Returns `MenuError::InvalidArgument` if `id` is not from this arena.
    pub fn list_mut(&mut self, id: ListId) -> Result<ListBuilder<'_>, MenuError> {
        self.list_node(id)?;
        Ok(ListBuilder { tree: self, id })
    }

    pub(crate) fn list_node(&self, id: ListId) -> Result<&ListNode, MenuError> {
        self.lists
            .get(id.0)
            .ok_or_else(|| MenuError::InvalidArgument(format!("unknown list #{}", id.0)))
    }

    pub(crate) fn item_node(&self, id: ItemId) -> Result<&ItemNode, MenuError> {
        self.items
            .get(id.0)
            .ok_or_else(|| MenuError::InvalidArgument(format!("unknown item #{}", id.0)))
    }

    /// True if `item` owns a non-empty child list.
    pub(crate) fn item_has_children(&self, item: &ItemNode) -> bool {
        item.children
            .and_then(|child| self.lists.get(child.0))
            .is_some_and(|list| !list.items.is_empty())
    }

    /// Ancestor lists of `id`, nearest first, excluding `id` itself.
    ///
    /// Walks `parent_item -> owner` links. A walk longer than the arena means
    /// the links form a cycle.
    pub(crate) fn ancestors(&self, id: ListId) -> Result<Vec<ListId>, MenuError> {
        let mut ancestors = Vec::new();
        let mut current = self.list_node(id)?;
        while let Some(parent_item) = current.parent_item {
            let owner = self.item_node(parent_item)?.owner;
            if ancestors.len() >= self.lists.len() {
                return Err(MenuError::Structural(format!(
                    "cycle detected above list #{}",
                    id.0
                )));
            }
            ancestors.push(owner);
            current = self.list_node(owner)?;
        }
        Ok(ancestors)
    }

    fn push_item(
        &mut self,
        owner: ListId,
        kind: ItemKind,
        spec: ItemSpec,
        with_link_attributes: bool,
    ) -> Result<ItemId, MenuError> {
        if let Some(child) = spec.children {
            self.check_adoptable(owner, child)?;
        }

        let options = OptionsPatch {
            item_element: spec.item_element,
            item_attributes: spec.item_attributes,
            link_attributes: if with_link_attributes {
                spec.link_attributes
            } else {
                Attributes::new()
            },
            ..OptionsPatch::default()
        };

        let id = ItemId(self.items.len());
        self.items.push(ItemNode {
            owner,
            kind,
            children: spec.children,
            options,
        });
        if let Some(child) = spec.children {
            self.lists[child.0].parent_item = Some(id);
        }
        self.lists[owner.0].items.push(id);
        Ok(id)
    }

    /// Check that `child` may become the sub-menu of a new item in `owner`.
    fn check_adoptable(&self, owner: ListId, child: ListId) -> Result<(), MenuError> {
        let child_node = self.list_node(child)?;
        if child_node.parent_item.is_some() {
            return Err(MenuError::Structural(format!(
                "list #{} already belongs to another item",
                child.0
            )));
        }
        if child == owner || self.ancestors(owner)?.contains(&child) {
            return Err(MenuError::Structural(format!(
                "list #{} cannot be nested inside itself",
                child.0
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
impl MenuTree {
    /// Wire `list` under `item` without any checks, for exercising the
    /// traversal guards.
    pub(crate) fn link_unchecked(&mut self, item: ItemId, list: ListId) {
        self.items[item.0].children = Some(list);
        self.lists[list.0].parent_item = Some(item);
    }
}

/// Read-only view of one list.
#[derive(Clone, Copy)]
pub struct ItemList<'a> {
    tree: &'a MenuTree,
    id: ListId,
}

impl<'a> ItemList<'a> {
    fn node(&self) -> &'a ListNode {
        &self.tree.lists[self.id.0]
    }

    /// Handle of this list.
    #[must_use]
    pub fn id(&self) -> ListId {
        self.id
    }

    /// Name used by `find` and as a prefix fallback.
    #[must_use]
    pub fn name(&self) -> Option<&'a str> {
        self.node().name.as_deref()
    }

    /// Prefix set on this list, if any.
    #[must_use]
    pub fn prefix(&self) -> Option<&'a str> {
        self.node().prefix.as_deref()
    }

    /// True if links take the prefixes of all ancestor lists.
    #[must_use]
    pub fn prefixes_from_parents(&self) -> bool {
        self.node().prefix_from_parents
    }

    /// True if links take the prefix of the topmost list.
    #[must_use]
    pub fn prefixes_from_root(&self) -> bool {
        self.node().prefix_from_root
    }

    /// Options stored on this list.
    #[must_use]
    pub fn options(&self) -> &'a OptionsPatch {
        &self.node().options
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.node().items.len()
    }

    /// True if the list has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.node().items.is_empty()
    }

    /// Items in rendering order.
    pub fn items(self) -> impl Iterator<Item = Item<'a>> {
        let tree = self.tree;
        self.node().items.iter().map(move |&id| Item { tree, id })
    }

    /// The item owning this list, if it is a sub-menu.
    #[must_use]
    pub fn parent_item(&self) -> Option<Item<'a>> {
        self.node().parent_item.map(|id| Item {
            tree: self.tree,
            id,
        })
    }
}

/// Read-only view of one item.
#[derive(Clone, Copy)]
pub struct Item<'a> {
    tree: &'a MenuTree,
    id: ItemId,
}

impl<'a> Item<'a> {
    fn node(&self) -> &'a ItemNode {
        &self.tree.items[self.id.0]
    }

    /// Handle of this item.
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Link or raw markup.
    #[must_use]
    pub fn kind(&self) -> &'a ItemKind {
        &self.node().kind
    }

    /// The list containing this item.
    #[must_use]
    pub fn owner(&self) -> ItemList<'a> {
        ItemList {
            tree: self.tree,
            id: self.node().owner,
        }
    }

    /// The item's sub-menu, empty or not.
    #[must_use]
    pub fn children(&self) -> Option<ItemList<'a>> {
        self.node().children.map(|id| ItemList {
            tree: self.tree,
            id,
        })
    }

    /// True iff the item owns a non-empty sub-menu.
    #[must_use]
    pub fn has_children(&self) -> bool {
        self.tree.item_has_children(self.node())
    }

    /// Options stored on this item.
    #[must_use]
    pub fn options(&self) -> &'a OptionsPatch {
        &self.node().options
    }
}

/// Mutable access to one list, with chainable builder methods.
///
/// ```
/// use navmenu_tree::MenuTree;
///
/// let mut tree = MenuTree::new();
/// let main = tree.new_list();
/// tree.list_mut(main)?
///     .name("main")
///     .add("/", "Home")?
///     .add("/about", "About")?
///     .raw("<hr>")?;
/// assert_eq!(tree.list(main)?.len(), 3);
/// # Ok::<(), navmenu_tree::MenuError>(())
/// ```
pub struct ListBuilder<'a> {
    tree: &'a mut MenuTree,
    id: ListId,
}

impl ListBuilder<'_> {
    /// Handle of the list being built.
    #[must_use]
    pub fn id(&self) -> ListId {
        self.id
    }

    fn node_mut(&mut self) -> &mut ListNode {
        &mut self.tree.lists[self.id.0]
    }

    /// Append a link item.
    ///
    /// # Errors
    ///
    /// Returns `MenuError::InvalidArgument` if `url` or `title` is empty.
    pub fn add(
        &mut self,
        url: impl Into<String>,
        title: impl Into<String>,
    ) -> Result<&mut Self, MenuError> {
        self.add_with(url, title, ItemSpec::default())
    }

    /// Append a link item with a sub-menu, attributes or element override.
    ///
    /// # Errors
    ///
    /// Returns `MenuError::InvalidArgument` if `url` or `title` is empty, and
    /// `MenuError::Structural` if the sub-menu already has an owner or would
    /// contain this list.
    pub fn add_with(
        &mut self,
        url: impl Into<String>,
        title: impl Into<String>,
        spec: ItemSpec,
    ) -> Result<&mut Self, MenuError> {
        let url = url.into();
        let title = title.into();
        if url.is_empty() {
            return Err(MenuError::InvalidArgument(
                "link url cannot be empty".to_owned(),
            ));
        }
        if title.is_empty() {
            return Err(MenuError::InvalidArgument(format!(
                "link title for {url:?} cannot be empty"
            )));
        }
        self.tree
            .push_item(self.id, ItemKind::Link { url, title }, spec, true)?;
        Ok(self)
    }

    /// Append a raw markup item.
    ///
    /// # Errors
    ///
    /// Returns `MenuError::InvalidArgument` if `html` is empty.
    pub fn raw(&mut self, html: impl Into<String>) -> Result<&mut Self, MenuError> {
        self.raw_with(html, ItemSpec::default())
    }

    /// Append a raw markup item with a sub-menu, attributes or element
    /// override. Link attributes in `spec` are dropped.
    ///
    /// # Errors
    ///
    /// Same as [`add_with`](Self::add_with).
    pub fn raw_with(
        &mut self,
        html: impl Into<String>,
        spec: ItemSpec,
    ) -> Result<&mut Self, MenuError> {
        let html = html.into();
        if html.is_empty() {
            return Err(MenuError::InvalidArgument(
                "raw item html cannot be empty".to_owned(),
            ));
        }
        self.tree
            .push_item(self.id, ItemKind::Raw { html }, spec, false)?;
        Ok(self)
    }

    /// Move every item of `other` to the end of this list.
    ///
    /// `other` is left empty; its items (and their sub-menus) now belong here.
    ///
    /// # Errors
    ///
    /// Returns `MenuError::Structural` if `other` is this list or one of its
    /// ancestors.
    pub fn attach(&mut self, other: ListId) -> Result<&mut Self, MenuError> {
        self.tree.list_node(other)?;
        if other == self.id || self.tree.ancestors(self.id)?.contains(&other) {
            return Err(MenuError::Structural(format!(
                "list #{} cannot be attached into its own subtree",
                other.0
            )));
        }

        let moved = std::mem::take(&mut self.tree.lists[other.0].items);
        for &item in &moved {
            self.tree.items[item.0].owner = self.id;
        }
        self.node_mut().items.extend(moved);
        Ok(self)
    }

    /// Set or replace the list name.
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.node_mut().name = Some(name.into());
        self
    }

    /// Prefix link URLs of this list with `prefix`.
    pub fn prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.node_mut().prefix = Some(prefix.into());
        self
    }

    /// Prefix link URLs with the prefixes (or names) of all ancestor lists.
    pub fn prefix_from_parents(&mut self) -> &mut Self {
        self.node_mut().prefix_from_parents = true;
        self
    }

    /// Prefix link URLs with the prefix (or name) of the topmost list.
    pub fn prefix_from_root(&mut self) -> &mut Self {
        self.node_mut().prefix_from_root = true;
        self
    }

    /// Overlay `patch` on the options stored for this list.
    pub fn options(&mut self, patch: &OptionsPatch) -> &mut Self {
        self.node_mut().options.merge(patch);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn titles(tree: &MenuTree, list: ListId) -> Vec<String> {
        tree.list(list)
            .unwrap()
            .items()
            .map(|item| match item.kind() {
                ItemKind::Link { title, .. } => title.clone(),
                ItemKind::Raw { html } => html.clone(),
            })
            .collect()
    }

    #[test]
    fn test_add_preserves_order() {
        let mut tree = MenuTree::new();
        let list = tree.new_list();
        tree.list_mut(list)
            .unwrap()
            .add("/a", "A")
            .unwrap()
            .raw("<hr>")
            .unwrap()
            .add("/b", "B")
            .unwrap();

        assert_eq!(titles(&tree, list), vec!["A", "<hr>", "B"]);
    }

    #[test]
    fn test_add_sets_parent_item_of_children() {
        let mut tree = MenuTree::new();
        let sub = tree.new_list();
        tree.list_mut(sub).unwrap().add("/a/b", "B").unwrap();
        let root = tree.new_list();
        tree.list_mut(root)
            .unwrap()
            .add_with("/a", "A", ItemSpec::new().children(sub))
            .unwrap();

        let item = tree.list(root).unwrap().items().next().unwrap();
        let parent = tree.list(sub).unwrap().parent_item().unwrap();

        assert_eq!(parent.id(), item.id());
        assert_eq!(item.children().unwrap().id(), sub);
        assert_eq!(parent.owner().id(), root);
    }

    #[test]
    fn test_raw_sets_parent_item_of_children() {
        let mut tree = MenuTree::new();
        let sub = tree.new_list();
        let root = tree.new_list();
        tree.list_mut(root)
            .unwrap()
            .raw_with("<span>Group</span>", ItemSpec::new().children(sub))
            .unwrap();

        let parent = tree.list(sub).unwrap().parent_item().unwrap();
        assert_eq!(parent.owner().id(), root);
    }

    #[test]
    fn test_raw_drops_link_attributes() {
        let mut tree = MenuTree::new();
        let list = tree.new_list();
        tree.list_mut(list)
            .unwrap()
            .raw_with("<hr>", ItemSpec::new().link_attribute("class", "x"))
            .unwrap();

        let item = tree.list(list).unwrap().items().next().unwrap();
        assert!(item.options().link_attributes.is_empty());
    }

    #[test]
    fn test_has_children_false_for_empty_sub_menu() {
        let mut tree = MenuTree::new();
        let sub = tree.new_list();
        let root = tree.new_list();
        tree.list_mut(root)
            .unwrap()
            .add_with("/a", "A", ItemSpec::new().children(sub))
            .unwrap()
            .add("/b", "B")
            .unwrap();

        let items: Vec<_> = tree.list(root).unwrap().items().collect();
        assert!(!items[0].has_children());
        assert!(items[0].children().is_some());
        assert!(!items[1].has_children());
    }

    #[test]
    fn test_add_rejects_empty_title() {
        let mut tree = MenuTree::new();
        let list = tree.new_list();

        let err = tree.list_mut(list).unwrap().add("/a", "").err().unwrap();

        assert!(matches!(err, MenuError::InvalidArgument(_)));
        assert!(tree.list(list).unwrap().is_empty());
    }

    #[test]
    fn test_add_rejects_empty_url() {
        let mut tree = MenuTree::new();
        let list = tree.new_list();

        let err = tree.list_mut(list).unwrap().add("", "A").err().unwrap();

        assert!(matches!(err, MenuError::InvalidArgument(_)));
    }

    #[test]
    fn test_raw_rejects_empty_html() {
        let mut tree = MenuTree::new();
        let list = tree.new_list();

        let err = tree.list_mut(list).unwrap().raw("").err().unwrap();

        assert!(matches!(err, MenuError::InvalidArgument(_)));
    }

    #[test]
    fn test_unknown_handle_rejected() {
        let mut other = MenuTree::new();
        other.new_list();
        let foreign = other.new_list();
        let tree = MenuTree::new();

        assert!(matches!(
            tree.list(foreign).err().unwrap(),
            MenuError::InvalidArgument(_)
        ));
    }

    #[test]
    fn test_children_cannot_be_own_list() {
        let mut tree = MenuTree::new();
        let list = tree.new_list();

        let err = tree
            .list_mut(list)
            .unwrap()
            .add_with("/a", "A", ItemSpec::new().children(list))
            .err()
            .unwrap();

        assert!(matches!(err, MenuError::Structural(_)));
        assert!(tree.list(list).unwrap().is_empty());
    }

    #[test]
    fn test_children_cannot_be_ancestor() {
        let mut tree = MenuTree::new();
        let sub = tree.new_list();
        let root = tree.new_list();
        tree.list_mut(root)
            .unwrap()
            .add_with("/a", "A", ItemSpec::new().children(sub))
            .unwrap();

        let err = tree
            .list_mut(sub)
            .unwrap()
            .add_with("/a/root", "Root", ItemSpec::new().children(root))
            .err()
            .unwrap();

        assert!(matches!(err, MenuError::Structural(_)));
    }

    #[test]
    fn test_children_cannot_have_two_owners() {
        let mut tree = MenuTree::new();
        let sub = tree.new_list();
        let root = tree.new_list();
        tree.list_mut(root)
            .unwrap()
            .add_with("/a", "A", ItemSpec::new().children(sub))
            .unwrap();

        let err = tree
            .list_mut(root)
            .unwrap()
            .add_with("/b", "B", ItemSpec::new().children(sub))
            .err()
            .unwrap();

        assert!(matches!(err, MenuError::Structural(_)));
        assert_eq!(tree.list(root).unwrap().len(), 1);
    }

    #[test]
    fn test_attach_moves_items() {
        let mut tree = MenuTree::new();
        let a = tree.new_list();
        let b = tree.new_list();
        tree.list_mut(a).unwrap().add("/1", "One").unwrap();
        tree.list_mut(b)
            .unwrap()
            .add("/2", "Two")
            .unwrap()
            .add("/3", "Three")
            .unwrap();

        tree.list_mut(a).unwrap().attach(b).unwrap();

        assert_eq!(titles(&tree, a), vec!["One", "Two", "Three"]);
        assert!(tree.list(b).unwrap().is_empty());
        assert!(tree.list(a).unwrap().items().all(|item| item.owner().id() == a));
    }

    #[test]
    fn test_attach_keeps_sub_menus_linked() {
        let mut tree = MenuTree::new();
        let sub = tree.new_list();
        tree.list_mut(sub).unwrap().add("/x/y", "Y").unwrap();
        let b = tree.new_list();
        tree.list_mut(b)
            .unwrap()
            .add_with("/x", "X", ItemSpec::new().children(sub))
            .unwrap();
        let a = tree.new_list();

        tree.list_mut(a).unwrap().attach(b).unwrap();

        let parent = tree.list(sub).unwrap().parent_item().unwrap();
        assert_eq!(parent.owner().id(), a);
    }

    #[test]
    fn test_attach_self_rejected() {
        let mut tree = MenuTree::new();
        let a = tree.new_list();
        tree.list_mut(a).unwrap().add("/1", "One").unwrap();

        let err = tree.list_mut(a).unwrap().attach(a).err().unwrap();

        assert!(matches!(err, MenuError::Structural(_)));
        assert_eq!(tree.list(a).unwrap().len(), 1);
    }

    #[test]
    fn test_attach_ancestor_rejected() {
        let mut tree = MenuTree::new();
        let sub = tree.new_list();
        let root = tree.new_list();
        tree.list_mut(root)
            .unwrap()
            .add_with("/a", "A", ItemSpec::new().children(sub))
            .unwrap();

        let err = tree.list_mut(sub).unwrap().attach(root).err().unwrap();

        assert!(matches!(err, MenuError::Structural(_)));
        assert_eq!(tree.list(root).unwrap().len(), 1);
    }

    #[test]
    fn test_name_and_prefix_setters() {
        let mut tree = MenuTree::new();
        let list = tree.named_list("first");
        tree.list_mut(list)
            .unwrap()
            .name("main")
            .prefix("docs")
            .prefix_from_parents()
            .prefix_from_root();

        let view = tree.list(list).unwrap();
        assert_eq!(view.name(), Some("main"));
        assert_eq!(view.prefix(), Some("docs"));
        assert!(view.prefixes_from_parents());
        assert!(view.prefixes_from_root());
    }

    #[test]
    fn test_options_setter_merges() {
        let mut tree = MenuTree::new();
        let list = tree.new_list();
        tree.list_mut(list)
            .unwrap()
            .options(&OptionsPatch::new().list_element("ol"))
            .options(&OptionsPatch::new().item_element("dt"));

        let options = tree.list(list).unwrap().options();
        assert_eq!(options.list_element.as_deref(), Some("ol"));
        assert_eq!(options.item_element.as_deref(), Some("dt"));
    }

    #[test]
    fn test_ancestors_nearest_first() {
        let mut tree = MenuTree::new();
        let c = tree.new_list();
        let b = tree.new_list();
        tree.list_mut(b)
            .unwrap()
            .add_with("/b", "B", ItemSpec::new().children(c))
            .unwrap();
        let a = tree.new_list();
        tree.list_mut(a)
            .unwrap()
            .add_with("/a", "A", ItemSpec::new().children(b))
            .unwrap();

        assert_eq!(tree.ancestors(c).unwrap(), vec![b, a]);
        assert!(tree.ancestors(a).unwrap().is_empty());
    }
}
