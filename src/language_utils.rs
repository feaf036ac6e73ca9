/*!
 * Language support for alias generation.
 *
 * This module defines the fixed set of languages an alias can be
 * rendered in, parsing of ISO 639-1 codes into that set, and the
 * per-language literal tables: first-person pronouns, main alias
 * templates, and scope templates.
 */

use std::fmt;

use isolang::Language;

/// Languages an alias can be rendered in.
///
/// Variants map one-to-one to ISO 639-1 codes. Every table lookup is an
/// exhaustive match on this enum, so a language outside the set can only
/// fail at code-parsing time — there is no fallback language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AliasLanguage {
    /// English (en)
    English,
    /// French (fr)
    French,
    /// Spanish (es)
    Spanish,
    /// German (de)
    German,
    /// Portuguese (pt)
    Portuguese,
    /// Japanese (ja)
    Japanese,
    /// Chinese (zh)
    Chinese,
    /// Korean (ko)
    Korean,
    /// Arabic (ar)
    Arabic,
    /// Hebrew (he)
    Hebrew,
    /// Russian (ru)
    Russian,
}

impl AliasLanguage {
    /// All supported languages, in table order.
    pub const ALL: [AliasLanguage; 11] = [
        AliasLanguage::English,
        AliasLanguage::French,
        AliasLanguage::Spanish,
        AliasLanguage::German,
        AliasLanguage::Portuguese,
        AliasLanguage::Japanese,
        AliasLanguage::Chinese,
        AliasLanguage::Korean,
        AliasLanguage::Arabic,
        AliasLanguage::Hebrew,
        AliasLanguage::Russian,
    ];

    /// Parse an ISO 639-1 code into a supported language.
    ///
    /// Matching is exact: the code must be the lowercase two-letter form,
    /// with no surrounding whitespace. Returns `None` for anything else.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::English),
            "fr" => Some(Self::French),
            "es" => Some(Self::Spanish),
            "de" => Some(Self::German),
            "pt" => Some(Self::Portuguese),
            "ja" => Some(Self::Japanese),
            "zh" => Some(Self::Chinese),
            "ko" => Some(Self::Korean),
            "ar" => Some(Self::Arabic),
            "he" => Some(Self::Hebrew),
            "ru" => Some(Self::Russian),
            _ => None,
        }
    }

    /// ISO 639-1 code for this language.
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::French => "fr",
            Self::Spanish => "es",
            Self::German => "de",
            Self::Portuguese => "pt",
            Self::Japanese => "ja",
            Self::Chinese => "zh",
            Self::Korean => "ko",
            Self::Arabic => "ar",
            Self::Hebrew => "he",
            Self::Russian => "ru",
        }
    }

    /// English display name, resolved through the ISO 639 registry.
    pub fn english_name(self) -> &'static str {
        Language::from_639_1(self.code())
            .map(|lang| lang.to_name())
            .unwrap_or(self.code())
    }

    /// First-person pronoun substituted when an alias refers to the
    /// calling subject.
    pub fn pronoun(self) -> &'static str {
        match self {
            Self::English => "me",
            Self::French => "moi",
            Self::Spanish => "yo",
            Self::German => "ich",
            Self::Portuguese => "eu",
            Self::Japanese => "私",
            Self::Chinese => "我",
            Self::Korean => "나",
            Self::Arabic => "أنا",
            Self::Hebrew => "אני",
            Self::Russian => "я",
        }
    }

    /// Main alias template, with `{flags}`, `{who}`, `{role}` and
    /// `{scope}` placeholders. Word order and connecting words are
    /// per-language; CJK templates join without spaces.
    pub fn main_template(self) -> &'static str {
        match self {
            Self::English => "{flags}{who} as {role}{scope}",
            Self::French => "{flags}{who} comme {role}{scope}",
            Self::Spanish => "{flags}{who} como {role}{scope}",
            Self::German => "{flags}{who} als {role}{scope}",
            Self::Portuguese => "{flags}{who} como {role}{scope}",
            Self::Japanese => "{flags}{who}として{role}{scope}",
            Self::Chinese => "{flags}{who}作为{role}{scope}",
            Self::Korean => "{flags}{who}로서{role}{scope}",
            Self::Arabic => "{flags}{who} بصفتي {role}{scope}",
            Self::Hebrew => "{flags}{who} בתור {role}{scope}",
            Self::Russian => "{flags}{who} как {role}{scope}",
        }
    }

    /// Scope phrase template, with an `{org}` placeholder.
    ///
    /// Leading spaces and joining hyphens are part of the table: most
    /// languages attach the scope word with a space, the CJK variants
    /// join with a hyphen and no space, Hebrew prefixes directly.
    pub fn scope_template(self) -> &'static str {
        match self {
            Self::English => " at {org}",
            Self::French => " à {org}",
            Self::Spanish => " en {org}",
            Self::German => " bei {org}",
            Self::Portuguese => " na {org}",
            Self::Japanese => "に-{org}",
            Self::Chinese => "在-{org}",
            Self::Korean => "-{org}",
            Self::Arabic => " في {org}",
            Self::Hebrew => " ב{org}",
            Self::Russian => " в {org}",
        }
    }
}

impl fmt::Display for AliasLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
