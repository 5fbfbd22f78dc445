//! Name lookup across a menu tree.

use crate::error::MenuError;
use crate::tree::{ListId, MenuTree};

impl MenuTree {
    /// Find lists named any of `names` in the tree rooted at `list`.
    ///
    /// Names are searched one after another. For each name the search is
    /// depth-first and pre-order: `list` itself, then the sub-menu of each of
    /// its items. A list matching several names appears once per name.
    ///
    /// ```
    /// use navmenu_tree::{ItemSpec, MenuTree};
    ///
    /// let mut tree = MenuTree::new();
    /// let sub = tree.named_list("guides");
    /// tree.list_mut(sub)?.add("/guides/setup", "Setup")?;
    /// let root = tree.named_list("main");
    /// tree.list_mut(root)?.add_with("/guides", "Guides", ItemSpec::new().children(sub))?;
    ///
    /// assert_eq!(tree.find(root, ["guides"])?, vec![sub]);
    /// # Ok::<(), navmenu_tree::MenuError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `MenuError::Structural` if a cycle is found and
    /// `MenuError::InvalidArgument` for an unknown handle.
    pub fn find<I, S>(&self, list: ListId, names: I) -> Result<Vec<ListId>, MenuError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut results = Vec::new();
        let mut path = Vec::new();
        for name in names {
            self.find_into(list, name.as_ref(), &mut results, &mut path)?;
        }
        Ok(results)
    }

    /// Find lists named `name`. Shorthand for a single-name [`find`](Self::find).
    ///
    /// # Errors
    ///
    /// Same as [`find`](Self::find).
    pub fn find_name(&self, list: ListId, name: &str) -> Result<Vec<ListId>, MenuError> {
        self.find(list, [name])
    }

    fn find_into(
        &self,
        id: ListId,
        name: &str,
        results: &mut Vec<ListId>,
        path: &mut Vec<ListId>,
    ) -> Result<(), MenuError> {
        if path.contains(&id) {
            return Err(MenuError::Structural(format!(
                "cycle detected while searching list #{}",
                id.index()
            )));
        }
        let node = self.list_node(id)?;
        if node.name.as_deref() == Some(name) {
            results.push(id);
        }

        path.push(id);
        for &item in &node.items {
            let item = self.item_node(item)?;
            if let Some(child) = item.children
                && self.item_has_children(item)
            {
                self.find_into(child, name, results, path)?;
            }
        }
        path.pop();
        Ok(())
    }
}
