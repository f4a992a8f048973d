//! Depth-first visitor over elements and trivia.

use crate::{NodeOrToken, SyntaxElement, SyntaxTrivia};

/// Callbacks for [`walk`].
///
/// Implementors usually `match` on [`SyntaxElement::kind`]; keep that match
/// exhaustive so a new kind cannot be silently ignored.
pub trait Visitor<'a> {
    fn visit(&mut self, element: SyntaxElement<'a>);

    fn visit_trivia(&mut self, trivia: SyntaxTrivia<'a>) {
        let _ = trivia;
    }
}

/// Pre-order walk: a token's leading trivia, the token, then its trailing
/// trivia; a composite before each of its non-empty slots, in slot order.
///
/// Every trivia piece under `element` is visited exactly once.
pub fn walk<'a, V: Visitor<'a> + ?Sized>(element: SyntaxElement<'a>, visitor: &mut V) {
    match element {
        NodeOrToken::Token(token) => {
            for trivia in token.leading_trivia() {
                visitor.visit_trivia(trivia);
            }
            visitor.visit(element);
            for trivia in token.trailing_trivia() {
                visitor.visit_trivia(trivia);
            }
        }
        NodeOrToken::Node(node) => {
            visitor.visit(element);
            for child in node.children() {
                walk(child, visitor);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SyntaxKind::*;
    use crate::{Builder, SyntaxKind, Trivia, TriviaPiece, TriviaPieceKind};

    #[derive(Default)]
    struct Recorder(Vec<(SyntaxKind, bool)>);

    impl<'a> Visitor<'a> for Recorder {
        fn visit(&mut self, element: SyntaxElement<'a>) {
            self.0.push((element.kind(), false));
        }

        fn visit_trivia(&mut self, trivia: SyntaxTrivia<'a>) {
            self.0.push((trivia.kind(), true));
        }
    }

    #[test]
    fn trivia_surrounds_its_token() {
        let mut builder = Builder::new();
        let leading = Trivia::new(&[
            TriviaPiece::new(TriviaPieceKind::MultiLineComment, 7.into()),
            TriviaPiece::new(TriviaPieceKind::Whitespace, 1.into()),
        ]);
        let trailing = Trivia::new(&[TriviaPiece::new(TriviaPieceKind::Whitespace, 1.into())]);
        let star = builder.token(leading, ASTERISK, 1.into(), trailing);
        let eof = builder.token(Trivia::empty(), EOF, 0.into(), Trivia::empty());
        let list = builder.node(LIST, [Some(star.into())]);
        let root = builder.node(DOCUMENT, [Some(list.into()), Some(eof.into())]);
        let tree = builder.finish("/* c */ * ", root);

        let mut recorder = Recorder::default();
        walk(NodeOrToken::Node(tree.root()), &mut recorder);
        assert_eq!(
            recorder.0,
            [
                (DOCUMENT, false),
                (LIST, false),
                (MULTI_LINE_COMMENT_TRIVIA, true),
                (WHITESPACE_TRIVIA, true),
                (ASTERISK, false),
                (WHITESPACE_TRIVIA, true),
                (EOF, false),
            ]
        );
    }
}
