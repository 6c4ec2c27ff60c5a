// Character classification for word boundaries.
//
// UI strings are checked only on ASCII letter runs; accented letters, digits
// and symbols all count as "not a letter" and, being invalid boundaries,
// cause the surrounding run to be skipped.

// ---------------------------------------------------------------------------
// Boundary character sets
// ---------------------------------------------------------------------------

/// Non-whitespace characters a word may directly follow.
const LEADING_MARKS: &[char] = &['*', '\'', '"', '`'];

/// Non-whitespace characters a word may directly precede.
const TRAILING_MARKS: &[char] = &['\'', '"', '`', '.', '!', '?', ',', ';', ':'];

/// Separators that join two words, as in `and/or` or `add-on`.
const JOINERS: &[char] = &['/', '-'];

/// Returns `true` for characters that can be part of a checked word.
#[inline]
pub fn is_word_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Returns `true` if a word may start right after `c`.
///
/// Joiners are not covered here: whether a word may follow `/` or `-`
/// depends on the character before the joiner.
pub fn is_leading_boundary(c: char) -> bool {
    c.is_whitespace() || LEADING_MARKS.contains(&c)
}

/// Returns `true` if a word may end right before `c`.
///
/// As with [`is_leading_boundary`], joiners need lookahead and are handled
/// by the caller.
pub fn is_trailing_boundary(c: char) -> bool {
    c.is_whitespace() || TRAILING_MARKS.contains(&c)
}

/// Returns `true` for `/` and `-`.
#[inline]
pub fn is_joiner(c: char) -> bool {
    JOINERS.contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_letters_are_word_letters() {
        assert!(is_word_letter('q'));
        assert!(is_word_letter('Q'));
    }

    #[test]
    fn accented_letters_are_not_word_letters() {
        assert!(!is_word_letter('\u{00E9}'));
        assert!(!is_word_letter('\u{00C4}'));
    }

    #[test]
    fn digits_are_not_boundaries() {
        assert!(!is_word_letter('7'));
        assert!(!is_leading_boundary('7'));
        assert!(!is_trailing_boundary('7'));
    }

    #[test]
    fn whitespace_bounds_both_sides() {
        for c in [' ', '\t', '\n', '\u{00A0}'] {
            assert!(is_leading_boundary(c));
            assert!(is_trailing_boundary(c));
        }
    }

    #[test]
    fn quotes_bound_both_sides() {
        for c in ['\'', '"', '`'] {
            assert!(is_leading_boundary(c));
            assert!(is_trailing_boundary(c));
        }
    }

    #[test]
    fn star_only_leads() {
        assert!(is_leading_boundary('*'));
        assert!(!is_trailing_boundary('*'));
    }

    #[test]
    fn sentence_punctuation_only_trails() {
        for c in ['.', '!', '?', ',', ';', ':'] {
            assert!(is_trailing_boundary(c));
            assert!(!is_leading_boundary(c));
        }
    }

    #[test]
    fn brackets_are_not_boundaries() {
        for c in ['(', ')', '[', ']', '{', '}'] {
            assert!(!is_leading_boundary(c));
            assert!(!is_trailing_boundary(c));
        }
    }

    #[test]
    fn joiners() {
        assert!(is_joiner('/'));
        assert!(is_joiner('-'));
        assert!(!is_joiner('_'));
        assert!(!is_word_letter('-'));
    }
}
