//! Editor-facing services built on the syntax tree: classification for
//! highlighting and line/column conversion.

mod classify;
mod lines;

pub use classify::{Classification, ClassifiedSpan, classify};
pub use line_index::LineCol;
pub use lines::{LineSpan, LineSpans};
