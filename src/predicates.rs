//! Reference predicates over candidate strings.
//!
//! All of these are plain `fn(&str) -> bool`, so they can be passed straight
//! to the engine. Letter handling is ASCII Latin only: accented and non-Latin
//! letters are treated like punctuation and dropped.

/// Returns true when the candidate reads the same backwards once everything
/// but `[A-Za-z]` is removed and case is folded.
///
/// A candidate with no Latin letters at all is not a palindrome.
pub fn is_palindrome(candidate: &str) -> bool {
    let letters = regex!("[^A-Za-z]").replace_all(candidate, "");
    if letters.is_empty() {
        return false;
    }
    let folded = letters.to_ascii_lowercase();
    folded.bytes().eq(folded.bytes().rev())
}

/// Accepts every candidate. Useful for counting the full arrangement space.
pub fn accept_all(_candidate: &str) -> bool {
    true
}

/// Returns true when the candidate contains at least `N` Latin letters.
pub fn has_min_letters<const N: usize>(candidate: &str) -> bool {
    candidate.bytes().filter(u8::is_ascii_alphabetic).count() >= N
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palindrome_examples() {
        // (expected, candidate)
        let cases: Vec<(bool, &str)> = vec![
            (true, "a"),
            (true, "abba"),
            (true, "baab"),
            (true, "GimliIlmig"),
            (true, "FiliIlif"),
            (true, "ab123ba"),
            (true, "Madam, I'm Adam"),
            (true, "A man, a plan, a canal: Panama"),
            (false, "ab"),
            (false, "Mark"),
            (false, "GimliFili"),
            (false, ""),
            (false, "   "),
            (false, "12321"),
        ];

        for (expected, candidate) in cases {
            assert_eq!(is_palindrome(candidate), expected, "candidate: {candidate:?}");
        }
    }

    #[test]
    fn non_latin_letters_are_ignored() {
        // 'é' is dropped, leaving "ab" + "a" = "aba".
        assert!(is_palindrome("abéa"));
        // Only non-Latin letters left means nothing to compare.
        assert!(!is_palindrome("ééé"));
        assert!(!is_palindrome("日本日"));
    }

    #[test]
    fn min_letters_counts_latin_only() {
        assert!(has_min_letters::<3>("a1b2c3"));
        assert!(!has_min_letters::<3>("ab"));
        assert!(!has_min_letters::<1>("éé"));
        assert!(has_min_letters::<0>(""));
    }

    #[test]
    fn accept_all_accepts_everything() {
        assert!(accept_all(""));
        assert!(accept_all("anything"));
    }
}
