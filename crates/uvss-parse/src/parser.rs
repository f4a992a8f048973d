use drop_bomb::DropBomb;
use text_size::TextRange;
use uvss_errors::{Diagnostic, DiagnosticCode, Diagnostics};
use uvss_syntax::SyntaxKind::{self, *};
use uvss_syntax::{Builder, ElementId, NodeId, SyntaxSet, SyntaxTree, TokenId};
use uvss_tokenizer::{Token, Tokenized};

pub(crate) struct Parser<'a> {
    text: &'a str,
    tokens: Vec<Token>,
    pos: usize,
    builder: Builder,
    diagnostics: Diagnostics,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        let Tokenized { tokens, diagnostics } = uvss_tokenizer::tokenize(text);
        Self { text, tokens, pos: 0, builder: Builder::new(), diagnostics }
    }

    pub(crate) fn token_count(&self) -> usize {
        self.tokens.len()
    }

    fn current(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    pub(crate) fn peek_kind(&self) -> SyntaxKind {
        self.current().kind
    }

    pub(crate) fn nth_kind(&self, n: usize) -> SyntaxKind {
        self.tokens.get(self.pos + n).map_or(EOF, |token| token.kind)
    }

    pub(crate) fn at(&self, kind: SyntaxKind) -> bool {
        self.peek_kind() == kind
    }

    pub(crate) fn at_set(&self, set: &SyntaxSet) -> bool {
        set.contains(self.peek_kind())
    }

    pub(crate) fn at_eof(&self) -> bool {
        self.at(EOF)
    }

    pub(crate) fn current_range(&self) -> TextRange {
        self.current().range
    }

    pub(crate) fn current_text(&self) -> &'a str {
        &self.text[self.current_range()]
    }

    /// True when no trivia separates the previous token from the current one.
    pub(crate) fn adjacent(&self) -> bool {
        self.pos > 0
            && self.tokens[self.pos - 1].trailing.is_empty()
            && self.current().leading.is_empty()
    }

    pub(crate) fn bump(&mut self) -> TokenId {
        let kind = self.peek_kind();
        self.bump_as(kind)
    }

    /// Consumes the current token, storing it with `kind`; used to demote
    /// keywords in name positions.
    pub(crate) fn bump_as(&mut self, kind: SyntaxKind) -> TokenId {
        assert!(self.pos < self.tokens.len(), "cannot advance past the end of input");
        let Token { leading, range, trailing, .. } = self.tokens[self.pos].clone();
        self.pos += 1;
        self.builder.token(leading, kind, range.len(), trailing)
    }

    /// Consumes `count` tokens as one token of `kind`. Inner trivia becomes
    /// part of the token text.
    pub(crate) fn bump_merged(&mut self, kind: SyntaxKind, count: usize) -> TokenId {
        assert!(count > 0 && self.pos + count <= self.tokens.len());
        let first = &self.tokens[self.pos];
        let last = &self.tokens[self.pos + count - 1];
        let len = last.range.end() - first.range.start();
        let (leading, trailing) = (first.leading.clone(), last.trailing.clone());
        self.pos += count;
        tracing::trace!(?kind, count, "merged tokens");
        self.builder.token(leading, kind, len, trailing)
    }

    pub(crate) fn eat(&mut self, kind: SyntaxKind) -> Option<TokenId> {
        self.at(kind).then(|| self.bump())
    }

    pub(crate) fn expect(&mut self, kind: SyntaxKind) -> TokenId {
        if self.at(kind) {
            self.bump()
        } else {
            self.missing(kind, format!("expected {}", kind.describe()))
        }
    }

    /// Accepts an identifier or any keyword, stored as `IDENTIFIER`.
    pub(crate) fn expect_name(&mut self) -> TokenId {
        if self.peek_kind().is_name() {
            self.bump_as(IDENTIFIER)
        } else {
            self.missing(IDENTIFIER, "expected identifier")
        }
    }

    /// Synthesizes a zero-width `kind` token at the current position.
    pub(crate) fn missing(&mut self, kind: SyntaxKind, message: impl Into<String>) -> TokenId {
        let at = self.current_range().start();
        tracing::trace!(?kind, offset = u32::from(at), "inserted missing token");
        self.error(DiagnosticCode::MissingToken, message, TextRange::empty(at));
        self.builder.missing(kind)
    }

    /// A missing token without its own diagnostic.
    pub(crate) fn missing_silent(&mut self, kind: SyntaxKind) -> TokenId {
        self.builder.missing(kind)
    }

    pub(crate) fn error(
        &mut self,
        code: DiagnosticCode,
        message: impl Into<String>,
        range: TextRange,
    ) {
        self.diagnostics.push(Diagnostic::error(code, message, range));
    }

    pub(crate) fn warning(
        &mut self,
        code: DiagnosticCode,
        message: impl Into<String>,
        range: TextRange,
    ) {
        self.diagnostics.push(Diagnostic::warning(code, message, range));
    }

    pub(crate) fn node<const N: usize>(
        &mut self,
        kind: SyntaxKind,
        slots: [Option<ElementId>; N],
    ) -> NodeId {
        self.builder.node(kind, slots)
    }

    pub(crate) fn start_list(&self) -> ListMarker {
        ListMarker::new()
    }

    pub(crate) fn finish(self, root: NodeId) -> (SyntaxTree, Diagnostics) {
        let Parser { text, builder, mut diagnostics, .. } = self;
        diagnostics.sort();
        (builder.finish(text, root), diagnostics)
    }
}

/// Children of a `LIST` or `ERROR` node under construction.
pub(crate) struct ListMarker {
    items: Vec<Option<ElementId>>,
    bomb: DropBomb,
}

impl ListMarker {
    fn new() -> Self {
        Self { items: Vec::new(), bomb: DropBomb::new("ListMarker must be completed") }
    }

    pub(crate) fn push(&mut self, element: impl Into<ElementId>) {
        self.items.push(Some(element.into()));
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Builds the list; an empty list becomes an empty slot.
    pub(crate) fn complete(mut self, p: &mut Parser<'_>) -> Option<ElementId> {
        self.bomb.defuse();
        if self.items.is_empty() {
            return None;
        }
        Some(p.builder.node(LIST, std::mem::take(&mut self.items)).into())
    }

    /// Builds an `ERROR` node from the skipped tokens.
    pub(crate) fn complete_error(mut self, p: &mut Parser<'_>) -> NodeId {
        self.bomb.defuse();
        p.builder.node(ERROR, std::mem::take(&mut self.items))
    }
}
