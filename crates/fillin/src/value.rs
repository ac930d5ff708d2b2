//! Value coercion at the registration boundary
//!
//! Every entry point that accepts a replacement value goes through
//! [`PlaceholderValue`], so the map only ever stores owned text and the
//! expansion path needs no per-value handling.

use std::borrow::Cow;

/// Text stored for a null-equivalent value.
pub(crate) const NULL_TEXT: &str = "null";

/// A value that can be registered as a placeholder replacement.
///
/// The coercion rule: `Option::None` becomes the literal text `null`; any
/// other value becomes its natural textual representation. Implement this
/// for your own types to register them directly:
///
/// ```rust
/// use fillin::{PlaceholderValue, Placeholders};
///
/// struct Coins(u32);
///
/// impl PlaceholderValue for Coins {
///     fn into_text(self) -> String {
///         format!("{}c", self.0)
///     }
/// }
///
/// let result = Placeholders::single("price", Coins(250)).apply("Costs %price%");
/// assert_eq!(result, "Costs 250c");
/// ```
pub trait PlaceholderValue {
    /// Coerce the value into the text stored in the map.
    fn into_text(self) -> String;
}

impl PlaceholderValue for String {
    fn into_text(self) -> String {
        self
    }
}

impl PlaceholderValue for &str {
    fn into_text(self) -> String {
        self.to_string()
    }
}

impl PlaceholderValue for &String {
    fn into_text(self) -> String {
        self.clone()
    }
}

impl PlaceholderValue for Cow<'_, str> {
    fn into_text(self) -> String {
        self.into_owned()
    }
}

/// `None` is the null-equivalent: it coerces to the literal text `null`.
impl<T: PlaceholderValue> PlaceholderValue for Option<T> {
    fn into_text(self) -> String {
        match self {
            Some(value) => value.into_text(),
            None => NULL_TEXT.to_string(),
        }
    }
}

macro_rules! display_placeholder_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PlaceholderValue for $ty {
                fn into_text(self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_placeholder_value!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);
