/*!
 * Tests for the Unicode normalization pipeline
 */

use canalias::normalize;

/// Test basic lowercasing and hyphen joining
#[test]
fn test_normalize_withPlainWords_shouldLowercaseAndHyphenate() {
    assert_eq!(normalize("Editor"), "editor");
    assert_eq!(
        normalize("Chief Executive Officer"),
        "chief-executive-officer"
    );
    assert_eq!(normalize("  padded  words  "), "padded-words");
}

/// Test that full-width input collapses to its standard-width equivalent
#[test]
fn test_normalize_withFullWidthText_shouldMatchStandardWidth() {
    assert_eq!(normalize("Ｅｄｉｔｏｒ"), "editor");
    assert_eq!(normalize("Ｅｄｉｔｏｒ"), normalize("Editor"));
}

/// Test NFKC compatibility composition
#[test]
fn test_normalize_withCompatibilityChars_shouldComposeViaNfkc() {
    // the fi ligature decomposes, circled digits become plain digits
    assert_eq!(normalize("ﬁnance"), "finance");
    assert_eq!(normalize("①"), "1");
    // a combining acute composes into the precomposed letter
    assert_eq!(normalize("re\u{0301}sume\u{0301}"), "résumé");
}

/// Test punctuation that separates words
#[test]
fn test_normalize_withBoundaryPunctuation_shouldBecomeHyphens() {
    assert_eq!(normalize("rock & roll"), "rock-roll");
    assert_eq!(normalize("state-of-the-art"), "state-of-the-art");
    assert_eq!(normalize("don't panic"), "don-t-panic");
    assert_eq!(normalize("A.B.C"), "a-b-c");
    assert_eq!(normalize("foo_bar"), "foo-bar");
    assert_eq!(normalize("«quoted»"), "quoted");
    assert_eq!(normalize("（parens）"), "parens");
    assert_eq!(normalize("first。second"), "first-second");
}

/// Test characters that vanish without creating a word boundary
#[test]
fn test_normalize_withSymbolsAndMarks_shouldDeleteWithoutBoundary() {
    assert_eq!(normalize("wow!"), "wow");
    assert_eq!(normalize("price $5"), "price-5");
    assert_eq!(normalize("100%"), "100");
    // a math symbol between letters leaves no boundary behind
    assert_eq!(normalize("a+b"), "ab");
    assert_eq!(normalize("hello 😀 world"), "hello-world");
    // an orphaned combining mark is dropped
    assert_eq!(normalize("\u{0301}x"), "x");
}

/// Test whitespace handling across scripts
#[test]
fn test_normalize_withUnicodeWhitespace_shouldCollapseToSingleHyphen() {
    assert_eq!(normalize("a\u{3000}b"), "a-b");
    assert_eq!(normalize("a \t \u{00A0} b"), "a-b");
    assert_eq!(normalize("one  two   three"), "one-two-three");
}

/// Test degenerate inputs: empty output is valid, not an error
#[test]
fn test_normalize_withNoWordContent_shouldReturnEmptyString() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("   "), "");
    assert_eq!(normalize("!!!"), "");
    assert_eq!(normalize("& - &"), "");
}

/// Test that letters from non-Latin scripts survive untouched
#[test]
fn test_normalize_withNonLatinScripts_shouldPreserveLetters() {
    assert_eq!(normalize("Générale"), "générale");
    assert_eq!(normalize("общий директор"), "общий-директор");
    assert_eq!(normalize("私として編集者"), "私として編集者");
    assert_eq!(normalize("مدير عام"), "مدير-عام");
    assert_eq!(normalize("אני בתור עורך"), "אני-בתור-עורך");
}

/// Test idempotence over representative inputs
#[test]
fn test_normalize_appliedTwice_shouldBeIdempotent() {
    let samples = [
        "Chief Executive Officer",
        "Ｄｉｒｅｃｔｅｕｒ Général",
        "rock & roll",
        "общий директор",
        "02 moi comme Directeur général  à Crédit Agricole",
        "私として編集者",
        "me as editor  at Acme Corp",
    ];
    for sample in samples {
        let once = normalize(sample);
        assert_eq!(normalize(&once), once, "not idempotent for {:?}", sample);
    }
}

/// Test that no disallowed characters survive normalization
#[test]
fn test_normalize_withMessyInput_shouldEmitOnlyWordCharsAndHyphens() {
    let inputs = [
        "Hello, World! — foo@bar",
        "Tabs\tand\nnewlines",
        "emoji 🎉 soup 🍜",
        "currency €42 £7",
        "quotes “inside” «outside»",
        "control\u{0007}chars\u{200B}here",
    ];
    for input in inputs {
        let slug = normalize(input);
        for c in slug.chars() {
            assert!(
                c == '-' || c.is_alphanumeric(),
                "disallowed char {:?} in {:?} (from {:?})",
                c,
                slug,
                input
            );
        }
    }
}
