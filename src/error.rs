use std::num::ParseFloatError;
use thiserror::Error;

/// Crate-specific error enum.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    /// The vector string is not wrapped in parentheses.
    #[error("vector string is not parenthesized: {0:?}")]
    MissingParentheses(String),

    /// The vector string does not have the expected number of components.
    #[error("expected {expected} vector components, found {found}")]
    ComponentCount {
        /// The number of components the vector type requires.
        expected: usize,
        /// The number of components found in the string.
        found: usize,
    },

    /// A component contains characters outside the unsigned decimal set.
    ///
    /// Components are limited to digits and dots, so signs, exponents, and
    /// stray whitespace all land here.
    #[error("invalid characters in vector component: {0:?}")]
    InvalidComponent(String),

    /// A component is made of digits and dots but is not a decimal number,
    /// e.g. `1.2.3`.
    #[error("unparseable vector component {raw:?}: {source}")]
    UnparseableComponent {
        /// The component text.
        raw: String,
        /// The underlying float parse error.
        source: ParseFloatError,
    },
}
