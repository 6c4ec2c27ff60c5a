// Word splitting for UI strings.
//
// A word is a run of ASCII letters that sits between valid boundaries:
//
//   before: start of text, whitespace, one of * ' " `, or a / or - that
//           itself follows a letter
//   after:  end of text, whitespace, one of ' " ` . ! ? , ; :, or a / or -
//           followed (after optional whitespace) by a letter
//
// Runs that touch anything else (digits, brackets, underscores, accented
// letters) are skipped entirely. Accepted runs are then cut at each new
// uppercase group, so `CamelCaseWord` gives three words while `HTMLParser`
// stays whole.

use msgspell_core::character::{
    is_joiner, is_leading_boundary, is_trailing_boundary, is_word_letter,
};

/// Lazy iterator over the checkable words of a text.
///
/// Created by [`words`]. Every item is a non-empty substring of the input,
/// yielded in order of appearance.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    text: &'a str,
    /// Byte offset where the search for the next letter run resumes.
    pos: usize,
    /// Remaining part `(start, end)` of an accepted run still being cut
    /// into segments.
    pending: Option<(usize, usize)>,
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            if let Some((start, end)) = self.pending {
                let seg_end = segment_end(self.text.as_bytes(), start, end);
                self.pending = (seg_end < end).then_some((seg_end, end));
                return Some(&self.text[start..seg_end]);
            }

            let (start, end) = next_letter_run(self.text.as_bytes(), self.pos)?;
            self.pos = end;
            if starts_at_boundary(self.text, start) && ends_at_boundary(self.text, end) {
                self.pending = Some((start, end));
            }
        }
    }
}

/// Iterate over the checkable words of `text`.
pub fn words(text: &str) -> Words<'_> {
    Words {
        text,
        pos: 0,
        pending: None,
    }
}

/// Split `text` into checkable words.
///
/// Returns an empty vector for empty text or text without letters.
pub fn split_words(text: &str) -> Vec<&str> {
    words(text).collect()
}

/// Find the next maximal run of ASCII letters at or after byte `from`.
///
/// Works on bytes: ASCII letters are always single-byte in UTF-8 and never
/// appear inside a multi-byte sequence, so both ends fall on char boundaries.
fn next_letter_run(bytes: &[u8], from: usize) -> Option<(usize, usize)> {
    let start = from + bytes[from..].iter().position(u8::is_ascii_alphabetic)?;
    let end = bytes[start..]
        .iter()
        .position(|b| !b.is_ascii_alphabetic())
        .map_or(bytes.len(), |len| start + len);
    Some((start, end))
}

/// End of the segment beginning at `start`: uppercase letters, then
/// lowercase letters. Never returns `start` for a non-empty run.
fn segment_end(bytes: &[u8], start: usize, end: usize) -> usize {
    let mut i = start;
    while i < end && bytes[i].is_ascii_uppercase() {
        i += 1;
    }
    while i < end && bytes[i].is_ascii_lowercase() {
        i += 1;
    }
    i
}

fn starts_at_boundary(text: &str, start: usize) -> bool {
    let mut before = text[..start].chars().rev();
    match before.next() {
        None => true,
        Some(c) if is_leading_boundary(c) => true,
        Some(c) if is_joiner(c) => before.next().is_some_and(is_word_letter),
        Some(_) => false,
    }
}

fn ends_at_boundary(text: &str, end: usize) -> bool {
    let mut after = text[end..].chars();
    match after.next() {
        None => true,
        Some(c) if is_trailing_boundary(c) => true,
        Some(c) if is_joiner(c) => after
            .find(|c| !c.is_whitespace())
            .is_some_and(is_word_letter),
        Some(_) => false,
    }
}
