// Static exception set: words always accepted without asking the dictionary.

mod words;

use std::sync::LazyLock;

use hashbrown::HashSet;

use self::words::CATEGORIES;

static EXCEPTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    CATEGORIES
        .iter()
        .flat_map(|category| category.iter().copied())
        .collect()
});

/// Returns `true` if `word` is on the allow-list.
///
/// `word` must already be lowercased; entries are stored in lowercase only.
pub fn is_exception(word: &str) -> bool {
    EXCEPTIONS.contains(word)
}

/// Number of distinct allow-listed words.
pub fn len() -> usize {
    EXCEPTIONS.len()
}

/// Iterate over all allow-listed words, in no particular order.
pub fn iter() -> impl Iterator<Item = &'static str> {
    EXCEPTIONS.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::words::*;
    use super::*;

    #[test]
    fn every_entry_is_lowercase() {
        for word in iter() {
            assert_eq!(word, word.to_lowercase(), "mixed-case entry: {word}");
        }
    }

    #[test]
    fn no_entry_is_empty_or_padded() {
        for word in iter() {
            assert!(!word.is_empty());
            assert_eq!(word, word.trim(), "padded entry: {word:?}");
        }
    }

    #[test]
    fn categories_do_not_overlap() {
        let total: usize = CATEGORIES.iter().map(|c| c.len()).sum();
        assert_eq!(total, len());
    }

    #[test]
    fn list_is_large() {
        assert!(len() > 800);
    }

    #[test]
    fn known_jargon_is_accepted() {
        for word in ["vertices", "backface", "fullscreen", "ffmpeg", "gltf", "xbox", "doesn"] {
            assert!(is_exception(word), "{word} should be allow-listed");
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(is_exception("vertices"));
        assert!(!is_exception("Vertices"));
    }

    #[test]
    fn ordinary_misspelling_is_not_accepted() {
        assert!(!is_exception("wrnogly"));
        assert!(!is_exception(""));
    }

    #[test]
    fn file_formats_are_in_the_set() {
        for word in FILE_FORMATS {
            assert!(is_exception(word));
        }
    }
}
