//! Error types for route table compilation.

use thiserror::Error;

/// Configuration errors raised while building a [`Router`](crate::Router).
///
/// None of these are produced at request time. A request that matches no
/// route is answered with a 404 response instead.
#[derive(Debug, Error)]
pub enum RouterError {
    /// The route key is not of the form `"<METHOD> <path>"`.
    #[error("malformed route key {key:?}: expected \"<METHOD> <path>\"")]
    MalformedRouteKey { key: String },

    /// A parametric route key has no `%d` placeholder.
    #[error("parametric route {key:?} has no %d placeholder")]
    MissingPlaceholder { key: String },

    /// A parametric route key has more than one `%d` placeholder.
    #[error("parametric route {key:?} has {count} %d placeholders, expected one")]
    MultiplePlaceholders { key: String, count: usize },

    /// The compiled pattern was rejected by the regex engine.
    #[error("invalid route pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Result type alias for router construction.
pub type Result<T> = std::result::Result<T, RouterError>;
