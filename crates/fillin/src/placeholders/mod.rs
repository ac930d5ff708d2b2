//! Placeholder storage and template expansion
//!
//! [`Placeholders`] is the core type: a map from placeholder name to
//! replacement text, expanded into `%name%` tokens by [`apply`]. Values are
//! coerced to text once, when registered, so the map only ever holds strings.
//!
//! [`apply`]: Placeholders::apply

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::builder::Builder;
use crate::error::Result;
use crate::value::PlaceholderValue;

mod scan;

#[cfg(test)]
mod tests;

/// A named set of placeholders expanded into `%name%` tokens.
///
/// Entries are unordered and keys are unique; registering a name twice keeps
/// the last value. Expansion is a single left-to-right scan, so the result
/// never depends on map iteration order and replacement values are never
/// re-expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Placeholders {
    entries: HashMap<String, String>,
}

impl Placeholders {
    /// Create an empty placeholder set.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Create an empty placeholder set.
    ///
    /// Equivalent to [`Placeholders::new`]; reads better at call sites that
    /// expand a template with nothing registered.
    pub fn empty() -> Self {
        Self::new()
    }

    /// Create a set holding a single placeholder.
    ///
    /// ```rust
    /// use fillin::Placeholders;
    ///
    /// let result = Placeholders::single("name", "World").apply("Hello, %name%!");
    /// assert_eq!(result, "Hello, World!");
    /// ```
    pub fn single(name: impl Into<String>, value: impl PlaceholderValue) -> Self {
        Builder::with(name, value).build()
    }

    /// Start a fluent [`Builder`] for a fresh placeholder set.
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Register a placeholder, overwriting any previous value under `name`.
    ///
    /// The value is coerced to text on insertion: `Option::None` becomes the
    /// literal text `null`, everything else its natural textual
    /// representation (see [`PlaceholderValue`]). A zero-length name is
    /// accepted but can never match a template token, because the empty token
    /// `%%` always passes through unchanged.
    pub fn add(&mut self, name: impl Into<String>, value: impl PlaceholderValue) {
        self.entries.insert(name.into(), value.into_text());
    }

    /// Expand every registered `%name%` token in `template`.
    ///
    /// Matching is literal and case-sensitive. Tokens whose name is not
    /// registered, the empty token `%%`, and unbalanced delimiters all pass
    /// through unchanged. Replacement values are inserted verbatim and never
    /// re-scanned, so a value containing `%other%` does not trigger a second
    /// expansion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fillin::Placeholders;
    ///
    /// let mut placeholders = Placeholders::new();
    /// placeholders.add("player", "Alice");
    /// placeholders.add("score", 42);
    ///
    /// let line = placeholders.apply("%player% scored %score% points");
    /// assert_eq!(line, "Alice scored 42 points");
    ///
    /// // Unknown tokens are left in place, delimiters included.
    /// assert_eq!(placeholders.apply("%rank% unknown"), "%rank% unknown");
    /// ```
    pub fn apply(&self, template: &str) -> String {
        scan::expand(template, &self.entries)
    }

    /// Expand like [`apply`](Placeholders::apply), but fail on unknown names.
    ///
    /// Every well-formed `%name%` token must be registered; the first one
    /// that is not aborts expansion with
    /// [`ExpandError::UnknownPlaceholder`](crate::ExpandError). Malformed
    /// input (`%%`, unbalanced `%`) still passes through unchanged.
    pub fn apply_strict(&self, template: &str) -> Result<String> {
        scan::expand_strict(template, &self.entries)
    }

    /// Read-only view of the registered entries.
    ///
    /// This is a live borrow of the underlying map; mutation through it is
    /// rejected at compile time.
    pub fn placeholders(&self) -> &HashMap<String, String> {
        &self.entries
    }

    /// Look up the replacement text registered under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Whether an entry is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl Default for Placeholders {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, V> Extend<(N, V)> for Placeholders
where
    N: Into<String>,
    V: PlaceholderValue,
{
    fn extend<I: IntoIterator<Item = (N, V)>>(&mut self, pairs: I) {
        for (name, value) in pairs {
            self.add(name, value);
        }
    }
}

impl<N, V> FromIterator<(N, V)> for Placeholders
where
    N: Into<String>,
    V: PlaceholderValue,
{
    /// Collect a placeholder set from `(name, value)` pairs.
    ///
    /// ```rust
    /// use fillin::Placeholders;
    ///
    /// let placeholders: Placeholders =
    ///     [("a", "1"), ("b", "2")].into_iter().collect();
    /// assert_eq!(placeholders.apply("%a%%b%"), "12");
    /// ```
    fn from_iter<I: IntoIterator<Item = (N, V)>>(pairs: I) -> Self {
        let mut placeholders = Placeholders::new();
        placeholders.extend(pairs);
        placeholders
    }
}
