//! Link URL prefixing.
//!
//! The effective prefix of a link is taken from the list owning it:
//! 1. the list's own prefix, if set
//! 2. with `prefix_from_parents`, every ancestor list's prefix (or name),
//!    root first
//! 3. with `prefix_from_root`, the topmost list's prefix (or name)
//!
//! External and fragment-only URLs are never prefixed.

use crate::error::MenuError;
use crate::tree::{ListId, ListNode, MenuTree};

impl MenuTree {
    /// Resolve the prefix applied to links owned by `list`.
    pub(crate) fn url_prefix(&self, list: ListId) -> Result<Option<String>, MenuError> {
        let node = self.list_node(list)?;
        if let Some(prefix) = &node.prefix {
            return Ok(Some(prefix.clone()));
        }

        if node.prefix_from_parents {
            let ancestors = self.ancestors(list)?;
            let mut segments = Vec::with_capacity(ancestors.len());
            for &ancestor in ancestors.iter().rev() {
                if let Some(segment) = prefix_or_name(self.list_node(ancestor)?) {
                    segments.push(segment);
                }
            }
            return Ok(join_segments(&segments));
        }

        if node.prefix_from_root {
            let root = self.ancestors(list)?.last().copied().unwrap_or(list);
            return Ok(prefix_or_name(self.list_node(root)?).map(str::to_owned));
        }

        Ok(None)
    }

    /// Apply the prefix of `list` to `url`.
    pub(crate) fn prefixed_url(&self, list: ListId, url: &str) -> Result<String, MenuError> {
        if is_external(url) {
            return Ok(url.to_owned());
        }
        Ok(match self.url_prefix(list)? {
            Some(prefix) => join_url(&prefix, url),
            None => url.to_owned(),
        })
    }
}

fn prefix_or_name(node: &ListNode) -> Option<&str> {
    node.prefix.as_deref().or(node.name.as_deref())
}

/// Join prefix segments with single slashes, keeping a leading slash on
/// the first segment.
fn join_segments(segments: &[&str]) -> Option<String> {
    let mut joined = String::new();
    for (i, segment) in segments.iter().enumerate() {
        let segment = if i == 0 {
            segment.trim_end_matches('/')
        } else {
            segment.trim_matches('/')
        };
        if segment.is_empty() && i > 0 {
            continue;
        }
        if i > 0 && !joined.is_empty() {
            joined.push('/');
        }
        joined.push_str(segment);
    }
    if joined.is_empty() { None } else { Some(joined) }
}

fn join_url(prefix: &str, url: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        return url.to_owned();
    }
    format!("{prefix}/{}", url.trim_start_matches('/'))
}

/// URLs that point outside the menu's own path space.
fn is_external(url: &str) -> bool {
    url.starts_with("http://")
        || url.starts_with("https://")
        || url.starts_with("//")
        || url.starts_with("mailto:")
        || url.starts_with("tel:")
        || url.starts_with('#')
}
