/*!
 * Unicode normalization pipeline for alias slugs.
 *
 * Converts arbitrary Unicode text into a lowercase, ASCII-hyphen
 * delimited slug safe for use as an identifier fragment. The pipeline
 * never fails; input with no word content normalizes to the empty
 * string.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

// Punctuation that marks a word boundary and becomes a space: dashes,
// paired and initial/final quotes and brackets, connectors, plus the
// ampersand, full-stop/comma and apostrophe variants that appear between
// words in the supported scripts.
static WORD_BOUNDARY_PUNCT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{Pd}\p{Pi}\p{Pf}\p{Ps}\p{Pe}\p{Pc}&﹠＆.,‚،․。﹒．｡'’‘‚‛＇]").unwrap()
});

// Characters that vanish without leaving a boundary: controls and format
// characters, all symbol classes, punctuation not already mapped to a
// space, and combining marks. \p{C} also covers private-use, unassigned
// and surrogate codepoints; surrogates cannot occur in a &str.
static DISCARDED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{C}\p{S}\p{P}\p{M}]").unwrap());

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalize arbitrary Unicode text into a slug.
///
/// Applies, in order: NFKC composition, full Unicode lowercasing,
/// replacement of word-boundary punctuation with spaces, stripping of
/// edge whitespace, deletion of residual symbol/punctuation/mark
/// characters, and collapsing of every whitespace run into a single
/// ASCII hyphen.
///
/// Boundary punctuation must become spaces before the residual classes
/// are deleted: a dash separates words, while a currency sign just
/// disappears.
pub fn normalize(text: &str) -> String {
    let composed: String = text.nfkc().collect();
    let lowered = composed.to_lowercase();

    let spaced = WORD_BOUNDARY_PUNCT.replace_all(&lowered, " ");
    let trimmed = spaced.trim();
    let kept = DISCARDED.replace_all(trimmed, "");

    WHITESPACE_RUN.replace_all(&kept, "-").into_owned()
}
