//! Byte offset to line conversion.

use text_size::{TextRange, TextSize};

/// Precomputed line starts for a source text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<TextSize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        for (offset, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(TextSize::new(offset as u32 + 1));
            }
        }
        Self { line_starts }
    }

    /// 1-based line number of an offset.
    pub fn line(&self, offset: TextSize) -> u32 {
        match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx as u32 + 1,
            Err(idx) => idx as u32,
        }
    }

    /// 1-based line number of the start of a range.
    pub fn line_of(&self, range: TextRange) -> u32 {
        self.line(range.start())
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
