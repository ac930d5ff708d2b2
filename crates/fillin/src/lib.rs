//! fillin - literal `%name%` placeholder expansion
//!
//! This crate maintains a named set of placeholders with string values and
//! expands occurrences of those placeholders inside caller-supplied template
//! strings. It is meant to be embedded: user-facing messages, log line
//! formatting, localization glue.
//!
//! ## Philosophy
//!
//! - **Pure text substitution**: no control structures, no formatting
//!   directives, no escaping syntax
//! - **Literal matching**: names match case-sensitively, metacharacters in
//!   names and values are never interpreted
//! - **Single pass**: replacement values are inserted verbatim and never
//!   re-scanned, so expansion cannot chain and the result does not depend on
//!   map iteration order
//!
//! ## Syntax
//!
//! A placeholder token is `%name%` - the literal ASCII percent sign on both
//! sides of the name. Tokens whose name is not registered, the empty token
//! `%%`, and unbalanced delimiters all pass through unchanged.
//!
//! ## Example
//!
//! ```rust
//! use fillin::Placeholders;
//!
//! let greeting = Placeholders::builder()
//!     .add("player", "Alice")
//!     .add("score", 42)
//!     .build()
//!     .apply("%player% scored %score% points");
//! assert_eq!(greeting, "Alice scored 42 points");
//! ```

pub mod builder;
pub mod error;
pub mod placeholders;
pub mod value;

// Re-export commonly used types
pub use builder::Builder;
pub use error::{ExpandError, Result};
pub use placeholders::Placeholders;
pub use value::PlaceholderValue;
