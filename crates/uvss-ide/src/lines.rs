use line_index::{LineCol, LineIndex};
use text_size::TextRange;

use crate::ClassifiedSpan;

/// Zero-based line and UTF-8 column bounds of a span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineSpan {
    pub start: LineCol,
    pub end: LineCol,
}

/// Converts offsets of one source text to line/column pairs.
pub struct LineSpans {
    index: LineIndex,
}

impl LineSpans {
    pub fn new(text: &str) -> Self {
        Self { index: LineIndex::new(text) }
    }

    pub fn range(&self, range: TextRange) -> LineSpan {
        let start = self.index.line_col(range.start());
        let end = self.index.line_col(range.end());
        LineSpan { start, end }
    }

    pub fn spans<'s>(
        &'s self,
        spans: &'s [ClassifiedSpan],
    ) -> impl Iterator<Item = (LineSpan, &'s ClassifiedSpan)> + 's {
        spans.iter().map(|span| (self.range(span.range), span))
    }
}
