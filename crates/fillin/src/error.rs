use thiserror::Error;

/// Errors surfaced by strict expansion
///
/// Lenient [`apply`](crate::Placeholders::apply) never fails: unknown and
/// malformed tokens pass through unchanged. The strict variant reports
/// unknown tokens instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpandError {
    /// A well-formed token named a placeholder with no registered entry
    #[error("unknown placeholder '%{name}%' in template")]
    UnknownPlaceholder {
        /// The name between the delimiters
        name: String,
    },
}

pub type Result<T> = std::result::Result<T, ExpandError>;
