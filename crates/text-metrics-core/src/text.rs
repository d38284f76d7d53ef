//! Word and sentence counting.
//!
//! Both counters trim the input, append a single trailing space as a
//! sentinel, and make one pass over the characters. Neither allocates
//! beyond the sentinel copy.

/// Count words as maximal runs of non-whitespace characters.
///
/// A word is counted when a non-whitespace run ends, so empty and
/// all-whitespace input yields 0.
pub fn count_words(text: &str) -> usize {
    let mut count = 0;
    let mut in_whitespace = true;

    for ch in with_sentinel(text).chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                count += 1;
                in_whitespace = true;
            }
        } else {
            in_whitespace = false;
        }
    }

    count
}

/// Count sentence boundaries.
///
/// A terminal mark (`.`, `?`, `!`) arms a pending boundary; the boundary
/// is counted at the next whitespace. A letter seen before that whitespace
/// disarms it, so `e.g.` in the middle of a run and `3.5x` do not split.
/// Repeated marks (`?!`, `...`) still count once.
pub fn count_sentences(text: &str) -> usize {
    let mut count = 0;
    let mut pending_boundary = false;

    for ch in with_sentinel(text).chars() {
        if is_sentence_terminator(ch) {
            pending_boundary = true;
        } else if ch.is_alphabetic() {
            pending_boundary = false;
        } else if pending_boundary && ch.is_whitespace() {
            count += 1;
            pending_boundary = false;
        }
    }

    count
}

/// Trimmed text plus one trailing space.
fn with_sentinel(text: &str) -> String {
    let trimmed = text.trim();
    let mut out = String::with_capacity(trimmed.len() + 1);
    out.push_str(trimmed);
    out.push(' ');
    out
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}
