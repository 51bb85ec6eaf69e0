//! Text manipulation utilities for working with workflow documents.

/// Check if a character is considered part of a word (identifier).
///
/// Uses Unicode Standard Annex #31 rules for identifier characters, plus `-`,
/// which GitHub allows in job ids, step ids and input names.
#[inline]
pub fn is_word_character(c: char) -> bool {
    unicode_ident::is_xid_continue(c) || c == '-'
}

/// Byte offset of the end of the line containing `offset`.
///
/// The returned offset points at the line terminator (`\n` or `\r`), or at the
/// end of the text when the caret sits on the last line.
pub fn caret_line_end(text: &str, offset: usize) -> usize {
    let offset = floor_char_boundary(text, offset);
    text[offset..]
        .find(['\n', '\r'])
        .map(|pos| offset + pos)
        .unwrap_or(text.len())
}

/// Byte offset of the start of the line containing `offset`.
pub fn caret_line_start(text: &str, offset: usize) -> usize {
    let offset = floor_char_boundary(text, offset);
    text[..offset]
        .rfind(['\n', '\r'])
        .map(|pos| pos + 1)
        .unwrap_or(0)
}

/// Extract the word that ends exactly at the cursor.
///
/// Returns an empty string when the character before the cursor is not a word
/// character.
///
/// # Example
/// ```
/// use actionsense::core::text_utils::extract_word_before_cursor;
///
/// let line = "needs: bui";
/// assert_eq!(extract_word_before_cursor(line, 10), "bui");
/// assert_eq!(extract_word_before_cursor(line, 6), "");
/// ```
pub fn extract_word_before_cursor(text: &str, offset: usize) -> &str {
    let offset = floor_char_boundary(text, offset);
    let before = &text[..offset];
    let start = before
        .char_indices()
        .rev()
        .take_while(|(_, c)| is_word_character(*c))
        .last()
        .map(|(i, _)| i)
        .unwrap_or(offset);
    &before[start..]
}

/// Case-insensitive subsequence match used to filter completion candidates.
///
/// Every character of `prefix` must appear in `candidate` in order, and the
/// first character must match the first character of the candidate. An empty
/// prefix matches everything.
pub fn fuzzy_matches(prefix: &str, candidate: &str) -> bool {
    let mut wanted = prefix.chars().flat_map(char::to_lowercase).peekable();
    let mut available = candidate.chars().flat_map(char::to_lowercase);

    match (wanted.next(), available.next()) {
        (None, _) => return true,
        (Some(_), None) => return false,
        (Some(first), Some(head)) if first != head => return false,
        _ => {}
    }

    for c in available {
        match wanted.peek() {
            Some(next) if *next == c => {
                wanted.next();
            }
            Some(_) => {}
            None => break,
        }
    }
    wanted.peek().is_none()
}

fn floor_char_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
