/*!
 * Error types for the canalias library.
 *
 * This module contains the custom error type for alias generation,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors raised while building an alias.
///
/// Every variant is an argument-validation failure: detection is
/// fail-fast and there are no partial results. The normalizer itself
/// never fails, so this type only surfaces from [`create_alias`].
///
/// [`create_alias`]: crate::alias_builder::create_alias
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AliasError {
    /// The role field was empty after trimming
    #[error("role cannot be empty")]
    EmptyRole,

    /// The flags field contained a character outside '0'..='9'
    #[error("flags must be all decimal digits or empty, got '{0}'")]
    FlagsNotDigits(String),

    /// The flags field exceeded the maximum length
    #[error("flags must be at most 10 digits, got {len}")]
    FlagsTooLong {
        /// Number of digits supplied
        len: usize,
    },

    /// No first-person pronoun is known for the requested language
    #[error("no translation for 'me' in language {0}")]
    NoPronoun(String),

    /// No scope template is known for the requested language
    #[error("no scope template for language {0}")]
    NoScopeTemplate(String),

    /// No main alias template is known for the requested language
    #[error("no alias template for language {0}")]
    NoMainTemplate(String),
}
