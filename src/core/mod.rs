pub mod text_utils;

pub use text_utils::{
    caret_line_end, caret_line_start, extract_word_before_cursor, fuzzy_matches, is_word_character,
};
