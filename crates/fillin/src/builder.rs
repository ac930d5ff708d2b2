//! Fluent construction for placeholder sets

use crate::error::Result;
use crate::placeholders::Placeholders;
use crate::value::PlaceholderValue;

/// Fluent builder accumulating entries into a fresh [`Placeholders`].
///
/// `build` consumes the builder, so a returned set can never be mutated
/// through the builder that produced it.
///
/// ```rust
/// use fillin::Builder;
///
/// let placeholders = Builder::new()
///     .add("player", "Alice")
///     .add("score", 42)
///     .build();
/// assert_eq!(placeholders.apply("%player%: %score%"), "Alice: 42");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Builder {
    placeholders: Placeholders,
}

impl Builder {
    /// Start with an empty placeholder set.
    pub fn new() -> Self {
        Self {
            placeholders: Placeholders::new(),
        }
    }

    /// Start with a single placeholder already registered.
    pub fn with(name: impl Into<String>, value: impl PlaceholderValue) -> Self {
        Self::new().add(name, value)
    }

    /// Register a placeholder and return the builder for chaining.
    ///
    /// Delegates to [`Placeholders::add`]: the value is coerced to text and
    /// a duplicate name keeps the last value.
    pub fn add(mut self, name: impl Into<String>, value: impl PlaceholderValue) -> Self {
        self.placeholders.add(name, value);
        self
    }

    /// Expand `template` against the entries accumulated so far, without
    /// finalizing the builder.
    pub fn apply(&self, template: &str) -> String {
        self.placeholders.apply(template)
    }

    /// Strict counterpart of [`apply`](Builder::apply); see
    /// [`Placeholders::apply_strict`].
    pub fn apply_strict(&self, template: &str) -> Result<String> {
        self.placeholders.apply_strict(template)
    }

    /// Finish building and hand back the placeholder set.
    pub fn build(self) -> Placeholders {
        self.placeholders
    }
}
