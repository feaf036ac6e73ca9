/*!
 * Alias assembly: validation, per-language templating, normalization.
 *
 * Builds the pre-normalization phrase from the request fields and the
 * language tables, then delegates to the normalizer. All failures are
 * argument-validation errors raised at the point of detection.
 */

use log::{debug, trace};

use crate::errors::AliasError;
use crate::language_utils::AliasLanguage;
use crate::normalizer::normalize;

/// Value of `who` that stands for the calling subject.
///
/// An empty (or absent) `who` field means "me": the builder substitutes
/// the language's first-person pronoun. Pass a non-empty `who` to name
/// someone else.
pub const ME_PLACEHOLDER: &str = "";

/// Maximum number of digits allowed in `flags`.
pub const MAX_FLAGS_LEN: usize = 10;

/// Build a normalized alias for a person acting in a role.
///
/// `language` is an ISO 639-1 code from the supported set. `flags` is an
/// optional digit string encoding boolean attributes; digits are sorted
/// by codepoint so flag order never changes the alias. `who` names the
/// subject, with [`ME_PLACEHOLDER`] (or `None`) meaning the caller.
/// `role` is required. `scope` optionally names an organization,
/// attached with the language's own preposition or joining convention.
///
/// All fields are trimmed before use; `None` is treated as empty.
/// Identical inputs always produce identical output.
///
/// # Errors
///
/// Returns [`AliasError`] when `role` is empty after trimming, when
/// `flags` contains a non-digit or exceeds [`MAX_FLAGS_LEN`] digits, or
/// when `language` is not supported by a table the request needs.
pub fn create_alias(
    language: &str,
    flags: Option<&str>,
    who: Option<&str>,
    role: &str,
    scope: Option<&str>,
) -> Result<String, AliasError> {
    let flags = flags.unwrap_or_default().trim();
    let who = who.unwrap_or_default().trim();
    let role = role.trim();
    let scope = scope.unwrap_or_default().trim();

    debug!(
        "Building alias: language={}, flags={}, scoped={}",
        language,
        !flags.is_empty(),
        !scope.is_empty()
    );

    if role.is_empty() {
        return Err(AliasError::EmptyRole);
    }
    if !flags.is_empty() && !flags.chars().all(|c| c.is_ascii_digit()) {
        return Err(AliasError::FlagsNotDigits(flags.to_string()));
    }
    // All-ASCII digits passed, so byte length equals digit count
    if flags.len() > MAX_FLAGS_LEN {
        return Err(AliasError::FlagsTooLong { len: flags.len() });
    }

    // Resolved once; each use site still reports which table was missing
    let lang = AliasLanguage::from_code(language);

    let who = if who == ME_PLACEHOLDER {
        lang.ok_or_else(|| AliasError::NoPronoun(language.to_string()))?
            .pronoun()
            .to_string()
    } else {
        who.to_string()
    };

    // Sorted digits plus the single space separating them from `who`
    let flags = if flags.is_empty() {
        String::new()
    } else {
        let mut digits: Vec<char> = flags.chars().collect();
        digits.sort_unstable();
        let mut sorted: String = digits.into_iter().collect();
        sorted.push(' ');
        sorted
    };

    // The leading space separates the scope phrase from the role; any
    // further spacing or joining hyphen belongs to the language table
    let scope = if scope.is_empty() {
        String::new()
    } else {
        let template = lang
            .ok_or_else(|| AliasError::NoScopeTemplate(language.to_string()))?
            .scope_template();
        format!(" {}", fill_placeholders(template, &[("org", scope)]))
    };

    let template = lang
        .ok_or_else(|| AliasError::NoMainTemplate(language.to_string()))?
        .main_template();

    let phrase = fill_placeholders(
        template,
        &[
            ("flags", &flags),
            ("who", &who),
            ("role", role),
            ("scope", &scope),
        ],
    );
    trace!("Assembled phrase before normalization: {}", phrase);

    Ok(normalize(&phrase))
}

/// Replace `{name}` placeholders in a single left-to-right pass.
///
/// Substituted values are never re-scanned, so field content that looks
/// like a placeholder passes through literally. Unknown placeholders and
/// unmatched braces are kept as-is.
fn fill_placeholders(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        rest = &rest[open..];
        let Some(close) = rest.find('}') else {
            break;
        };
        let name = &rest[1..close];
        match values.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[..=close]),
        }
        rest = &rest[close + 1..];
    }
    out.push_str(rest);
    out
}
