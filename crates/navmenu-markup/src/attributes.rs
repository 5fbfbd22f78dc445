//! HTML attribute maps.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::element::escape_html;

/// Ordered set of HTML attributes.
///
/// Keys are kept sorted so rendered output is deterministic regardless of
/// the order attributes were set in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Attributes(BTreeMap<String, String>);

impl Attributes {
    /// Create an empty attribute map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Builder-style variant of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Get an attribute value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Remove an attribute, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// Overlay `other` on top of `self`, key by key. Values in `other` win.
    pub fn merge(&mut self, other: &Self) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// True if no attribute is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over `(name, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Write ` name="value"` pairs to `out`, skipping names in `skip`.
    ///
    /// Values are escaped. Names are written as-is and must be checked with
    /// [`is_valid_attribute_name`](crate::is_valid_attribute_name) first.
    pub(crate) fn write_to(&self, out: &mut String, skip: &[&str]) {
        for (key, value) in self.iter() {
            if skip.contains(&key) {
                continue;
            }
            let _ = write!(out, r#" {}="{}""#, key, escape_html(value));
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
