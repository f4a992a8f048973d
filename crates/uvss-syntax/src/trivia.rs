//! Trivia pieces attached to tokens.

use text_size::TextSize;
use triomphe::ThinArc;

use crate::SyntaxKind;

/// Kinds of trivia stored alongside tokens.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TriviaPieceKind {
    Whitespace,
    EndOfLine,
    SingleLineComment,
    /// A `/* ... */` comment, kept as one structureless piece even when it
    /// spans several lines.
    MultiLineComment,
}

impl TriviaPieceKind {
    pub const fn syntax_kind(self) -> SyntaxKind {
        match self {
            Self::Whitespace => SyntaxKind::WHITESPACE_TRIVIA,
            Self::EndOfLine => SyntaxKind::END_OF_LINE_TRIVIA,
            Self::SingleLineComment => SyntaxKind::SINGLE_LINE_COMMENT_TRIVIA,
            Self::MultiLineComment => SyntaxKind::MULTI_LINE_COMMENT_TRIVIA,
        }
    }

    pub const fn is_comment(self) -> bool {
        matches!(self, Self::SingleLineComment | Self::MultiLineComment)
    }
}

/// A trivia fragment with its kind and length.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TriviaPiece {
    pub kind: TriviaPieceKind,
    pub len: TextSize,
}

impl TriviaPiece {
    /// Creates a new trivia piece with the given kind and length.
    pub fn new(kind: TriviaPieceKind, len: TextSize) -> Self {
        Self { kind, len }
    }
}

/// An immutable, cheaply clonable list of trivia pieces.
///
/// The total length lives in the header so `len` never walks the pieces.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct Trivia {
    ptr: Option<ThinArc<TextSize, TriviaPiece>>,
}

impl std::fmt::Debug for Trivia {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trivia")
            .field("pieces", &self.pieces())
            .field("total_len", &self.len())
            .finish()
    }
}

impl Default for Trivia {
    fn default() -> Self {
        Self::empty()
    }
}

impl Trivia {
    pub fn new(pieces: &[TriviaPiece]) -> Self {
        if pieces.is_empty() {
            return Self::empty();
        }
        let total_len = pieces.iter().map(|piece| piece.len).sum();
        Self { ptr: Some(ThinArc::from_header_and_slice(total_len, pieces)) }
    }

    pub const fn empty() -> Self {
        Self { ptr: None }
    }

    pub fn len(&self) -> TextSize {
        match self.ptr {
            None => TextSize::new(0),
            Some(ref ptr) => ptr.header.header,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ptr.is_none()
    }

    pub fn pieces(&self) -> &[TriviaPiece] {
        match &self.ptr {
            None => &[],
            Some(ptr) => &ptr.slice,
        }
    }

    pub fn has_comment(&self) -> bool {
        self.pieces().iter().any(|piece| piece.kind.is_comment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece(kind: TriviaPieceKind, len: u32) -> TriviaPiece {
        TriviaPiece::new(kind, len.into())
    }

    #[test]
    fn total_len_is_cached() {
        let trivia = Trivia::new(&[
            piece(TriviaPieceKind::MultiLineComment, 7),
            piece(TriviaPieceKind::Whitespace, 1),
            piece(TriviaPieceKind::EndOfLine, 2),
        ]);

        assert_eq!(trivia.len(), TextSize::new(10));
        assert_eq!(trivia.pieces().len(), 3);
        assert!(trivia.has_comment());
    }

    #[test]
    fn empty_trivia_does_not_allocate() {
        let trivia = Trivia::new(&[]);
        assert!(trivia.is_empty());
        assert_eq!(trivia, Trivia::empty());
        assert_eq!(trivia.len(), TextSize::new(0));
        assert!(trivia.pieces().is_empty());
    }

    #[test]
    fn trivia_kinds_map_to_syntax_kinds() {
        assert_eq!(TriviaPieceKind::EndOfLine.syntax_kind(), SyntaxKind::END_OF_LINE_TRIVIA);
        assert!(TriviaPieceKind::MultiLineComment.syntax_kind().is_comment());
        assert!(!TriviaPieceKind::Whitespace.is_comment());
    }
}
