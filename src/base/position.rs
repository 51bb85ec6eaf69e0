/// Line/column positions for editor requests
///
/// Editors address the caret either by byte offset or by 0-indexed line and
/// column. Everything inside the crate works on offsets; [`LineIndex`]
/// converts at the boundary.
use text_size::TextSize;

/// A position in source code (0-indexed, column counted in chars)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Maps between byte offsets and line/column positions for one text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Byte offset of the first character of every line.
    line_starts: Vec<TextSize>,
    len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        for (offset, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(TextSize::new(offset as u32 + 1));
            }
        }
        Self {
            line_starts,
            len: TextSize::of(text),
        }
    }

    /// Number of lines (a trailing newline opens an empty last line).
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a line/column position to a byte offset.
    ///
    /// Columns past the end of the line clamp to the line end; lines past the
    /// end of the text return `None`.
    pub fn offset(&self, text: &str, position: Position) -> Option<TextSize> {
        let start = *self.line_starts.get(position.line)?;
        let line_end = self
            .line_starts
            .get(position.line + 1)
            .map(|next| *next - TextSize::new(1))
            .unwrap_or(self.len);
        let line = &text[usize::from(start)..usize::from(line_end)];
        let column_bytes: usize = line
            .chars()
            .take(position.column)
            .map(char::len_utf8)
            .sum();
        Some(start + TextSize::new(column_bytes as u32))
    }

    /// Convert a byte offset to a line/column position.
    pub fn position(&self, text: &str, offset: TextSize) -> Position {
        let offset = offset.min(self.len);
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let start = usize::from(self.line_starts[line]);
        let column = text[start..usize::from(offset)].chars().count();
        Position::new(line, column)
    }
}
