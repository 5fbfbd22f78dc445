//! Named menu registry.

use std::path::Path;

use navmenu_config::Config;
use navmenu_tree::{ListBuilder, ListId, MenuTree, OptionsPatch, RenderOptions};

use crate::error::Error;

/// A view over one or more registered menus, by name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuHandler {
    handles: Vec<String>,
}

impl MenuHandler {
    /// Names this handler covers, in order.
    #[must_use]
    pub fn handles(&self) -> &[String] {
        &self.handles
    }
}

/// Registry of named menus sharing one arena and one set of defaults.
#[derive(Debug, Default)]
pub struct Menu {
    tree: MenuTree,
    /// Registered lists, in registration order.
    lists: Vec<(String, ListId)>,
    config: Config,
}

impl Menu {
    /// Create an empty registry rendering on top of `config`'s defaults.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            tree: MenuTree::new(),
            lists: Vec::new(),
            config,
        }
    }

    /// Create a registry from a config file, or from a discovered
    /// `menu.toml` when `config_path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the configuration cannot be loaded.
    pub fn load(config_path: Option<&Path>) -> Result<Self, Error> {
        Ok(Self::new(Config::load(config_path, None)?))
    }

    /// Handler for `name`, registering an empty list named `name` if needed.
    pub fn handler(&mut self, name: &str) -> MenuHandler {
        self.ensure_list(name);
        MenuHandler {
            handles: vec![name.to_owned()],
        }
    }

    /// Handler covering several names, registering missing ones.
    pub fn handlers<I, S>(&mut self, names: I) -> MenuHandler
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let handles = names
            .into_iter()
            .map(|name| {
                self.ensure_list(name.as_ref());
                name.as_ref().to_owned()
            })
            .collect();
        MenuHandler { handles }
    }

    /// Handler covering every registered name, in registration order.
    #[must_use]
    pub fn all_handlers(&self) -> MenuHandler {
        MenuHandler {
            handles: self.lists.iter().map(|(name, _)| name.clone()).collect(),
        }
    }

    /// Create a new list that is not registered under any handler.
    ///
    /// Use it as a sub-menu, attach it, or register it with
    /// [`set_item_list`](Self::set_item_list).
    pub fn items(&mut self, name: Option<&str>) -> ListId {
        match name {
            Some(name) => self.tree.named_list(name),
            None => self.tree.new_list(),
        }
    }

    /// Register `list` under `name`, replacing any previous registration.
    ///
    /// # Errors
    ///
    /// Returns `Error::Menu` if `list` does not belong to this registry.
    pub fn set_item_list(&mut self, name: &str, list: ListId) -> Result<(), Error> {
        self.tree.list(list)?;
        match self.lists.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = list,
            None => self.lists.push((name.to_owned(), list)),
        }
        Ok(())
    }

    /// List registered under `name`.
    #[must_use]
    pub fn item_list(&self, name: &str) -> Option<ListId> {
        self.lists
            .iter()
            .find_map(|(n, id)| (n == name).then_some(*id))
    }

    /// Every registration, in order.
    pub fn item_lists(&self) -> impl Iterator<Item = (&str, ListId)> {
        self.lists.iter().map(|(name, id)| (name.as_str(), *id))
    }

    /// Drop every registered menu.
    pub fn reset(&mut self) {
        tracing::info!(handlers = self.lists.len(), "Resetting menu registry");
        self.lists.clear();
        self.tree = MenuTree::new();
    }

    /// Builder for the list registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownHandler` if nothing is registered under `name`.
    pub fn list(&mut self, name: &str) -> Result<ListBuilder<'_>, Error> {
        let id = self
            .item_list(name)
            .ok_or_else(|| Error::UnknownHandler(name.to_owned()))?;
        Ok(self.tree.list_mut(id)?)
    }

    /// The arena holding every list of this registry.
    #[must_use]
    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    /// Mutable access to the arena, for building sub-menus.
    pub fn tree_mut(&mut self) -> &mut MenuTree {
        &mut self.tree
    }

    /// Global default render options.
    #[must_use]
    pub fn options(&self) -> RenderOptions {
        self.config.defaults()
    }

    /// One global default option by key (e.g. `max_depth`).
    #[must_use]
    pub fn option(&self, key: &str) -> Option<toml::Value> {
        self.config.option(key)
    }

    /// Render every list of `handler`, concatenated in handle order.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownHandler` for a name that is not registered
    /// (e.g. after [`reset`](Self::reset)) and `Error::Menu` if rendering fails.
    pub fn render(&self, handler: &MenuHandler, overrides: &OptionsPatch) -> Result<String, Error> {
        let defaults = self.config.defaults();
        let mut html = String::new();
        for name in handler.handles() {
            let id = self
                .item_list(name)
                .ok_or_else(|| Error::UnknownHandler(name.clone()))?;
            html.push_str(&self.tree.render_with(id, &defaults, overrides)?);
        }
        Ok(html)
    }

    /// Find lists named any of `names` under every list of `handler`.
    ///
    /// # Errors
    ///
    /// Same as [`render`](Self::render).
    pub fn find<I, S>(&self, handler: &MenuHandler, names: I) -> Result<Vec<ListId>, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<S> = names.into_iter().collect();
        let mut results = Vec::new();
        for handle in handler.handles() {
            let id = self
                .item_list(handle)
                .ok_or_else(|| Error::UnknownHandler(handle.clone()))?;
            results.extend(self.tree.find(id, names.iter().map(|name| name.as_ref()))?);
        }
        Ok(results)
    }

    fn ensure_list(&mut self, name: &str) -> ListId {
        if let Some(id) = self.item_list(name) {
            return id;
        }
        let id = self.tree.named_list(name);
        tracing::debug!(handler = name, "Registered menu handler");
        self.lists.push((name.to_owned(), id));
        id
    }
}
