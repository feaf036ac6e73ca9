/*!
 * # canalias
 *
 * A Rust library for generating canonical, URL-safe aliases for a person
 * acting in a role, optionally within an organization, rendered in one of
 * eleven languages.
 *
 * ## Features
 *
 * - Unicode slug normalization: NFKC composition, full Unicode
 *   lowercasing, punctuation-aware word boundaries, hyphen-delimited
 *   output
 * - Per-language alias templates with first-person pronoun substitution,
 *   flag canonicalization, and organization scope phrases
 * - Fixed language set: en, fr, es, de, pt, ja, zh, ko, ar, he, ru
 * - Pure, synchronous, and thread-safe: immutable tables, no I/O
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `normalizer`: Unicode-to-slug normalization pipeline
 * - `alias_builder`: validation, templating, and alias assembly
 * - `language_utils`: the supported language set and its literal tables
 * - `errors`: custom error types for the library
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod alias_builder;
pub mod errors;
pub mod language_utils;
pub mod normalizer;

// Re-export main types for easier usage
pub use alias_builder::{MAX_FLAGS_LEN, ME_PLACEHOLDER, create_alias};
pub use errors::AliasError;
pub use language_utils::AliasLanguage;
pub use normalizer::normalize;
