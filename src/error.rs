use thiserror::Error;

/// Errors that can occur when building a [`TypedDictionary`](crate::TypedDictionary)
///
/// Reads and writes through typed keys never fail; only bulk construction can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    /// Two initializer entries share the same raw name
    #[error("duplicate key in dictionary initializer: {0}")]
    DuplicateKey(String),
}
