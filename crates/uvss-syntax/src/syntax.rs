//! Public syntax tree API: the owned tree and lifetime-bound handles into it.

use std::fmt::{self, Write as _};
use std::hash::{Hash, Hasher};

use text_size::{TextRange, TextSize};

use crate::nodes::{ElementId, NodeData, NodeId, TokenData, TokenId};
use crate::{SyntaxKind, TriviaPiece, TriviaPieceKind};

/// Owned syntax tree for a single source text.
///
/// Every element is exclusively owned by its parent composite, positions are
/// fixed, and nothing changes after [`crate::Builder::finish`], so the tree can
/// be shared across threads and walked concurrently.
pub struct SyntaxTree {
    pub(crate) text: Box<str>,
    pub(crate) tokens: Box<[TokenData]>,
    pub(crate) nodes: Box<[NodeData]>,
    pub(crate) slots: Box<[Option<ElementId>]>,
    pub(crate) document_order: Box<[TokenId]>,
    pub(crate) root: NodeId,
}

impl SyntaxTree {
    /// Returns the root syntax node.
    #[inline]
    pub fn root(&self) -> SyntaxNode<'_> {
        SyntaxNode { tree: self, id: self.root }
    }

    /// Returns the full source text for this tree.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns every token, including missing ones, in document order.
    pub fn tokens(&self) -> impl DoubleEndedIterator<Item = SyntaxToken<'_>> + ExactSizeIterator {
        self.document_order.iter().map(move |&id| SyntaxToken { tree: self, id })
    }

    pub fn node(&self, id: NodeId) -> SyntaxNode<'_> {
        assert!(id.index() < self.nodes.len(), "{id:?} does not belong to this tree");
        SyntaxNode { tree: self, id }
    }

    pub fn token(&self, id: TokenId) -> SyntaxToken<'_> {
        assert!(id.index() < self.tokens.len(), "{id:?} does not belong to this tree");
        SyntaxToken { tree: self, id }
    }

    /// Finds the token(s) whose full range, trivia included, covers `offset`.
    ///
    /// Zero-width tokens are never reported.
    pub fn token_at_offset(&self, offset: TextSize) -> TokenAtOffset<SyntaxToken<'_>> {
        let index = self.document_order.partition_point(|&id| {
            let token = &self.tokens[id.index()];
            token.position + token.full_width() <= offset
        });

        let previous = self.document_order[..index]
            .iter()
            .rev()
            .map(|&id| self.token(id))
            .find(|token| token.full_width() != TextSize::new(0));

        let current = self
            .document_order
            .get(index)
            .map(|&id| self.token(id))
            .filter(|token| token.position() <= offset);

        match (previous, current) {
            (Some(left), Some(right)) if right.position() == offset => {
                TokenAtOffset::Between(left, right)
            }
            (_, Some(token)) => TokenAtOffset::Single(token),
            (Some(left), None) if left.full_text_range().end() == offset => {
                TokenAtOffset::Single(left)
            }
            _ => TokenAtOffset::None,
        }
    }

    fn slots_of(&self, id: NodeId) -> &[Option<ElementId>] {
        &self.slots[self.nodes[id.index()].slot_range()]
    }

    fn element(&self, id: ElementId) -> SyntaxElement<'_> {
        match id {
            NodeOrToken::Node(id) => NodeOrToken::Node(SyntaxNode { tree: self, id }),
            NodeOrToken::Token(id) => NodeOrToken::Token(SyntaxToken { tree: self, id }),
        }
    }
}

impl fmt::Debug for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntaxTree")
            .field("text_len", &self.text.len())
            .field("nodes", &self.nodes.len())
            .field("tokens", &self.tokens.len())
            .finish_non_exhaustive()
    }
}

/// Token handle tied to the lifetime of the tree.
#[derive(Clone, Copy)]
pub struct SyntaxToken<'a> {
    tree: &'a SyntaxTree,
    id: TokenId,
}

impl<'a> SyntaxToken<'a> {
    #[inline]
    fn data(self) -> &'a TokenData {
        &self.tree.tokens[self.id.index()]
    }

    #[inline]
    pub fn id(self) -> TokenId {
        self.id
    }

    #[inline]
    pub fn tree(self) -> &'a SyntaxTree {
        self.tree
    }

    /// Returns this token's kind.
    #[inline]
    pub fn kind(self) -> SyntaxKind {
        self.data().kind
    }

    /// True for placeholders inserted by error recovery.
    #[inline]
    pub fn is_missing(self) -> bool {
        self.data().missing
    }

    /// Absolute start of the token, leading trivia included.
    #[inline]
    pub fn position(self) -> TextSize {
        self.data().position
    }

    #[inline]
    pub fn full_width(self) -> TextSize {
        self.data().full_width()
    }

    /// Width of the token text alone.
    #[inline]
    pub fn width(self) -> TextSize {
        self.data().text_len
    }

    #[inline]
    pub fn leading_trivia_width(self) -> TextSize {
        self.data().leading.len()
    }

    #[inline]
    pub fn trailing_trivia_width(self) -> TextSize {
        self.data().trailing.len()
    }

    /// Range of the token text, trivia excluded.
    #[inline]
    pub fn text_range(self) -> TextRange {
        TextRange::at(self.position() + self.leading_trivia_width(), self.width())
    }

    /// Range of the token text and its trivia.
    #[inline]
    pub fn full_text_range(self) -> TextRange {
        TextRange::at(self.position(), self.full_width())
    }

    /// Returns the token text, trivia excluded.
    #[inline]
    pub fn text(self) -> &'a str {
        &self.tree.text[self.text_range()]
    }

    #[inline]
    pub fn full_text(self) -> &'a str {
        &self.tree.text[self.full_text_range()]
    }

    /// Returns the composite that owns this token.
    #[inline]
    pub fn parent(self) -> SyntaxNode<'a> {
        let id = self.data().parent.expect("finished trees have no detached tokens");
        SyntaxNode { tree: self.tree, id }
    }

    /// Returns the owning composite and all of its ancestors.
    pub fn ancestors(self) -> impl Iterator<Item = SyntaxNode<'a>> + Clone {
        self.parent().ancestors()
    }

    pub fn prev_token(self) -> Option<Self> {
        let order = self.data().order.checked_sub(1)?;
        let id = self.tree.document_order[order as usize];
        Some(Self { tree: self.tree, id })
    }

    pub fn next_token(self) -> Option<Self> {
        let id = *self.tree.document_order.get(self.data().order as usize + 1)?;
        Some(Self { tree: self.tree, id })
    }

    pub fn leading_trivia(self) -> TriviaIter<'a> {
        TriviaIter {
            token: self,
            pieces: self.data().leading.pieces().iter(),
            offset: self.position(),
        }
    }

    pub fn trailing_trivia(self) -> TriviaIter<'a> {
        TriviaIter {
            token: self,
            pieces: self.data().trailing.pieces().iter(),
            offset: self.text_range().end(),
        }
    }

    pub fn has_comments(self) -> bool {
        self.data().leading.has_comment() || self.data().trailing.has_comment()
    }
}

impl PartialEq for SyntaxToken<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for SyntaxToken<'_> {}

impl Hash for SyntaxToken<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.tree, state);
        self.id.hash(state);
    }
}

impl fmt::Debug for SyntaxToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{:?}", self.kind(), self.full_text_range())?;
        if self.is_missing() {
            f.write_str(" (missing)")
        } else {
            write!(f, " {:?}", self.text())
        }
    }
}

/// A single trivia piece, located in the source.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SyntaxTrivia<'a> {
    token: SyntaxToken<'a>,
    piece: TriviaPiece,
    position: TextSize,
}

impl<'a> SyntaxTrivia<'a> {
    /// Returns the trivia kind as a [`SyntaxKind`].
    #[inline]
    pub fn kind(self) -> SyntaxKind {
        self.piece.kind.syntax_kind()
    }

    #[inline]
    pub fn piece_kind(self) -> TriviaPieceKind {
        self.piece.kind
    }

    #[inline]
    pub fn is_comment(self) -> bool {
        self.piece.kind.is_comment()
    }

    #[inline]
    pub fn position(self) -> TextSize {
        self.position
    }

    #[inline]
    pub fn width(self) -> TextSize {
        self.piece.len
    }

    #[inline]
    pub fn text_range(self) -> TextRange {
        TextRange::at(self.position, self.piece.len)
    }

    #[inline]
    pub fn text(self) -> &'a str {
        &self.token.tree.text[self.text_range()]
    }

    /// The token this trivia is attached to.
    #[inline]
    pub fn token(self) -> SyntaxToken<'a> {
        self.token
    }
}

impl fmt::Debug for SyntaxTrivia<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{:?} {:?}", self.kind(), self.text_range(), self.text())
    }
}

/// Iterator over the trivia on one side of a token.
#[derive(Clone)]
pub struct TriviaIter<'a> {
    token: SyntaxToken<'a>,
    pieces: std::slice::Iter<'a, TriviaPiece>,
    offset: TextSize,
}

impl<'a> Iterator for TriviaIter<'a> {
    type Item = SyntaxTrivia<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let piece = *self.pieces.next()?;
        let position = self.offset;
        self.offset += piece.len;
        Some(SyntaxTrivia { token: self.token, piece, position })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pieces.size_hint()
    }
}

impl ExactSizeIterator for TriviaIter<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.pieces.len()
    }
}

/// Node handle tied to the lifetime of the tree.
#[derive(Clone, Copy)]
pub struct SyntaxNode<'a> {
    tree: &'a SyntaxTree,
    id: NodeId,
}

impl<'a> SyntaxNode<'a> {
    #[inline]
    fn data(self) -> &'a NodeData {
        &self.tree.nodes[self.id.index()]
    }

    #[inline]
    pub fn id(self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn tree(self) -> &'a SyntaxTree {
        self.tree
    }

    /// Returns this node's kind.
    #[inline]
    pub fn kind(self) -> SyntaxKind {
        self.data().kind
    }

    /// Composites are never missing; only tokens are.
    #[inline]
    pub fn is_missing(self) -> bool {
        false
    }

    /// Absolute start of the node, leading trivia included.
    #[inline]
    pub fn position(self) -> TextSize {
        self.data().position
    }

    #[inline]
    pub fn full_width(self) -> TextSize {
        self.data().full_width
    }

    pub fn leading_trivia_width(self) -> TextSize {
        self.first_present_token().map_or(TextSize::new(0), SyntaxToken::leading_trivia_width)
    }

    pub fn trailing_trivia_width(self) -> TextSize {
        self.last_present_token().map_or(TextSize::new(0), SyntaxToken::trailing_trivia_width)
    }

    /// Full width minus the leading trivia of the first present token and the
    /// trailing trivia of the last one. Missing tokens carry no trivia, so
    /// they never decide where the text starts or ends.
    pub fn width(self) -> TextSize {
        self.text_range().len()
    }

    pub fn text_range(self) -> TextRange {
        let full = self.full_text_range();
        let start = full.start() + self.leading_trivia_width();
        let end = full.end() - self.trailing_trivia_width();
        TextRange::new(start, end.max(start))
    }

    #[inline]
    pub fn full_text_range(self) -> TextRange {
        TextRange::at(self.position(), self.full_width())
    }

    pub fn text(self) -> &'a str {
        &self.tree.text[self.text_range()]
    }

    pub fn full_text(self) -> &'a str {
        &self.tree.text[self.full_text_range()]
    }

    /// Returns the owning composite, or `None` for the root.
    #[inline]
    pub fn parent(self) -> Option<Self> {
        let id = self.data().parent?;
        Some(Self { tree: self.tree, id })
    }

    /// Returns this node and its ancestors, innermost first.
    pub fn ancestors(self) -> impl Iterator<Item = SyntaxNode<'a>> + Clone {
        std::iter::successors(Some(self), |node| node.parent())
    }

    #[inline]
    pub fn slot_count(self) -> usize {
        self.data().slot_count as usize
    }

    /// Returns the child in slot `index`, `None` for an empty slot.
    ///
    /// # Panics
    ///
    /// If `index` is not below [`SyntaxNode::slot_count`].
    #[track_caller]
    pub fn slot(self, index: usize) -> Option<SyntaxElement<'a>> {
        let slots = self.tree.slots_of(self.id);
        assert!(
            index < slots.len(),
            "slot {index} is out of range for {:?} with {} slots",
            self.kind(),
            slots.len()
        );
        slots[index].map(|id| self.tree.element(id))
    }

    /// Returns every slot in order, empty ones included.
    pub fn slots(self) -> impl ExactSizeIterator<Item = Option<SyntaxElement<'a>>> + Clone {
        let tree = self.tree;
        tree.slots_of(self.id).iter().map(move |slot| slot.map(|id| tree.element(id)))
    }

    /// Returns the children in order, skipping empty slots.
    pub fn children(self) -> impl DoubleEndedIterator<Item = SyntaxElement<'a>> + Clone {
        let tree = self.tree;
        tree.slots_of(self.id).iter().flatten().map(move |&id| tree.element(id))
    }

    pub fn child_nodes(self) -> impl DoubleEndedIterator<Item = SyntaxNode<'a>> + Clone {
        self.children().filter_map(NodeOrToken::into_node)
    }

    /// Returns the first token in document order, missing tokens included.
    pub fn first_token(self) -> Option<SyntaxToken<'a>> {
        self.children().find_map(|child| match child {
            NodeOrToken::Node(node) => node.first_token(),
            NodeOrToken::Token(token) => Some(token),
        })
    }

    pub fn last_token(self) -> Option<SyntaxToken<'a>> {
        self.children().rev().find_map(|child| match child {
            NodeOrToken::Node(node) => node.last_token(),
            NodeOrToken::Token(token) => Some(token),
        })
    }

    fn first_present_token(self) -> Option<SyntaxToken<'a>> {
        self.children().find_map(|child| match child {
            NodeOrToken::Node(node) => node.first_present_token(),
            NodeOrToken::Token(token) => (!token.is_missing()).then_some(token),
        })
    }

    fn last_present_token(self) -> Option<SyntaxToken<'a>> {
        self.children().rev().find_map(|child| match child {
            NodeOrToken::Node(node) => node.last_present_token(),
            NodeOrToken::Token(token) => (!token.is_missing()).then_some(token),
        })
    }

    /// Leading trivia of the first token that is not missing.
    pub fn leading_trivia(self) -> Option<TriviaIter<'a>> {
        self.first_present_token().map(SyntaxToken::leading_trivia)
    }

    /// Trailing trivia of the last token that is not missing.
    pub fn trailing_trivia(self) -> Option<TriviaIter<'a>> {
        self.last_present_token().map(SyntaxToken::trailing_trivia)
    }

    pub fn descendant_tokens(self) -> impl Iterator<Item = SyntaxToken<'a>> {
        self.preorder().filter_map(|event| match event {
            WalkEvent::Token(token) => Some(token),
            WalkEvent::Enter(_) | WalkEvent::Leave(_) => None,
        })
    }

    pub fn descendants(self) -> impl Iterator<Item = SyntaxNode<'a>> {
        self.preorder().filter_map(|event| match event {
            WalkEvent::Enter(node) => Some(node),
            WalkEvent::Leave(_) | WalkEvent::Token(_) => None,
        })
    }

    /// Returns a preorder iterator over nodes and tokens.
    #[inline]
    pub fn preorder(self) -> Preorder<'a> {
        Preorder::new(self)
    }

    /// Indented one-line-per-element dump, used by snapshot tests and the CLI.
    pub fn debug_tree(self) -> String {
        let mut buf = String::new();
        let mut indent = 0;
        for event in self.preorder() {
            match event {
                WalkEvent::Enter(node) => {
                    writeln!(buf, "{:indent$}{node:?}", "").unwrap();
                    indent += 2;
                }
                WalkEvent::Leave(_) => indent -= 2,
                WalkEvent::Token(token) => writeln!(buf, "{:indent$}{token:?}", "").unwrap(),
            }
        }
        buf
    }
}

impl PartialEq for SyntaxNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for SyntaxNode<'_> {}

impl Hash for SyntaxNode<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.tree, state);
        self.id.hash(state);
    }
}

impl fmt::Debug for SyntaxNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{:?}", self.kind(), self.full_text_range())
    }
}

/// Either a composite or a token.
pub type SyntaxElement<'a> = NodeOrToken<SyntaxNode<'a>, SyntaxToken<'a>>;

impl<'a> SyntaxElement<'a> {
    pub fn kind(self) -> SyntaxKind {
        match self {
            NodeOrToken::Node(node) => node.kind(),
            NodeOrToken::Token(token) => token.kind(),
        }
    }

    pub fn is_missing(self) -> bool {
        match self {
            NodeOrToken::Node(node) => node.is_missing(),
            NodeOrToken::Token(token) => token.is_missing(),
        }
    }

    pub fn position(self) -> TextSize {
        match self {
            NodeOrToken::Node(node) => node.position(),
            NodeOrToken::Token(token) => token.position(),
        }
    }

    pub fn full_width(self) -> TextSize {
        match self {
            NodeOrToken::Node(node) => node.full_width(),
            NodeOrToken::Token(token) => token.full_width(),
        }
    }

    pub fn width(self) -> TextSize {
        match self {
            NodeOrToken::Node(node) => node.width(),
            NodeOrToken::Token(token) => token.width(),
        }
    }

    pub fn leading_trivia_width(self) -> TextSize {
        match self {
            NodeOrToken::Node(node) => node.leading_trivia_width(),
            NodeOrToken::Token(token) => token.leading_trivia_width(),
        }
    }

    pub fn trailing_trivia_width(self) -> TextSize {
        match self {
            NodeOrToken::Node(node) => node.trailing_trivia_width(),
            NodeOrToken::Token(token) => token.trailing_trivia_width(),
        }
    }

    pub fn text_range(self) -> TextRange {
        match self {
            NodeOrToken::Node(node) => node.text_range(),
            NodeOrToken::Token(token) => token.text_range(),
        }
    }

    pub fn full_text_range(self) -> TextRange {
        match self {
            NodeOrToken::Node(node) => node.full_text_range(),
            NodeOrToken::Token(token) => token.full_text_range(),
        }
    }

    pub fn text(self) -> &'a str {
        match self {
            NodeOrToken::Node(node) => node.text(),
            NodeOrToken::Token(token) => token.text(),
        }
    }

    pub fn full_text(self) -> &'a str {
        match self {
            NodeOrToken::Node(node) => node.full_text(),
            NodeOrToken::Token(token) => token.full_text(),
        }
    }

    pub fn parent(self) -> Option<SyntaxNode<'a>> {
        match self {
            NodeOrToken::Node(node) => node.parent(),
            NodeOrToken::Token(token) => Some(token.parent()),
        }
    }

    /// Tokens have no slots.
    pub fn slot_count(self) -> usize {
        match self {
            NodeOrToken::Node(node) => node.slot_count(),
            NodeOrToken::Token(_) => 0,
        }
    }

    /// # Panics
    ///
    /// If `index` is out of range; tokens have no slots at all.
    #[track_caller]
    pub fn slot(self, index: usize) -> Option<SyntaxElement<'a>> {
        match self {
            NodeOrToken::Node(node) => node.slot(index),
            NodeOrToken::Token(token) => {
                panic!("slot {index} is out of range for token {:?}", token.kind())
            }
        }
    }
}

/// Preorder traversal over nodes and tokens.
#[derive(Clone)]
pub struct Preorder<'a> {
    stack: Vec<(SyntaxNode<'a>, usize)>,
    root: Option<SyntaxNode<'a>>,
}

impl<'a> Preorder<'a> {
    #[inline]
    fn new(start: SyntaxNode<'a>) -> Preorder<'a> {
        Preorder { stack: Vec::with_capacity(32), root: Some(start) }
    }

    /// Skips the subtree of the node that was just entered.
    pub fn skip_subtree(&mut self) {
        self.stack.pop();
    }
}

impl<'a> Iterator for Preorder<'a> {
    type Item = WalkEvent<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stack.is_empty() {
            let root = self.root.take()?;
            self.stack.push((root, 0));
            return Some(WalkEvent::Enter(root));
        }

        loop {
            let top = self.stack.last_mut()?;

            let node = top.0;
            let index = top.1;
            if index == node.slot_count() {
                self.stack.pop();
                return Some(WalkEvent::Leave(node));
            }
            top.1 += 1;

            match node.slot(index) {
                None => continue,
                Some(NodeOrToken::Node(child)) => {
                    self.stack.push((child, 0));
                    return Some(WalkEvent::Enter(child));
                }
                Some(NodeOrToken::Token(token)) => return Some(WalkEvent::Token(token)),
            }
        }
    }
}

/// Preorder walk event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkEvent<'a> {
    Enter(SyntaxNode<'a>),
    Leave(SyntaxNode<'a>),
    Token(SyntaxToken<'a>),
}

/// Node-or-token wrapper used throughout the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeOrToken<N, T> {
    Node(N),
    Token(T),
}

impl<N, T> NodeOrToken<N, T> {
    pub fn into_node(self) -> Option<N> {
        match self {
            NodeOrToken::Node(node) => Some(node),
            NodeOrToken::Token(_) => None,
        }
    }

    pub fn into_token(self) -> Option<T> {
        match self {
            NodeOrToken::Node(_) => None,
            NodeOrToken::Token(token) => Some(token),
        }
    }

    pub fn as_node(&self) -> Option<&N> {
        match self {
            NodeOrToken::Node(node) => Some(node),
            NodeOrToken::Token(_) => None,
        }
    }

    pub fn as_token(&self) -> Option<&T> {
        match self {
            NodeOrToken::Node(_) => None,
            NodeOrToken::Token(token) => Some(token),
        }
    }
}

/// There might be zero, one or two tokens at a given offset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenAtOffset<T> {
    None,
    Single(T),
    /// Offset is exactly where one token ends and the next begins.
    Between(T, T),
}

impl<T> TokenAtOffset<T> {
    pub fn map<F: Fn(T) -> U, U>(self, f: F) -> TokenAtOffset<U> {
        match self {
            TokenAtOffset::None => TokenAtOffset::None,
            TokenAtOffset::Single(it) => TokenAtOffset::Single(f(it)),
            TokenAtOffset::Between(l, r) => TokenAtOffset::Between(f(l), f(r)),
        }
    }

    pub fn right_biased(self) -> Option<T> {
        match self {
            Self::None => None,
            Self::Single(token) => Some(token),
            Self::Between(_, right) => Some(right),
        }
    }

    pub fn left_biased(self) -> Option<T> {
        match self {
            Self::None => None,
            Self::Single(token) => Some(token),
            Self::Between(left, _) => Some(left),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SyntaxKind::*;
    use crate::{Builder, Trivia};

    fn trivia(kind: TriviaPieceKind, len: u32) -> Trivia {
        Trivia::new(&[TriviaPiece::new(kind, len.into())])
    }

    /// `// hi\nbutton { }`, an empty rule set behind a comment.
    fn rule_set() -> SyntaxTree {
        let text = "// hi\nbutton { }";
        let mut builder = Builder::new();
        let leading = Trivia::new(&[
            TriviaPiece::new(TriviaPieceKind::SingleLineComment, 5.into()),
            TriviaPiece::new(TriviaPieceKind::EndOfLine, 1.into()),
        ]);
        let name = builder.token(leading, IDENTIFIER, 6.into(), trivia(TriviaPieceKind::Whitespace, 1));
        let sub_part = builder.node(SELECTOR_SUB_PART, [None, Some(name.into()), None]);
        let subs = builder.node(LIST, [Some(sub_part.into())]);
        let part = builder.node(SELECTOR_PART, [Some(subs.into())]);
        let parts = builder.node(LIST, [Some(part.into())]);
        let selector = builder.node(SELECTOR, [Some(parts.into())]);
        let selectors = builder.node(LIST, [Some(selector.into())]);
        let open =
            builder.token(Trivia::empty(), LEFT_BRACE, 1.into(), trivia(TriviaPieceKind::Whitespace, 1));
        let close = builder.token(Trivia::empty(), RIGHT_BRACE, 1.into(), Trivia::empty());
        let block = builder.node(BLOCK, [Some(open.into()), None, Some(close.into())]);
        let rule_set = builder.node(RULE_SET, [Some(selectors.into()), Some(block.into())]);
        let content = builder.node(LIST, [Some(rule_set.into())]);
        let eof = builder.token(Trivia::empty(), EOF, 0.into(), Trivia::empty());
        let root = builder.node(DOCUMENT, [Some(content.into()), Some(eof.into())]);
        builder.finish(text, root)
    }

    #[test]
    fn widths_and_ranges() {
        let tree = rule_set();
        let root = tree.root();
        assert_eq!(root.full_text(), "// hi\nbutton { }");
        assert_eq!(root.text(), "button { }");
        assert_eq!(root.leading_trivia_width(), TextSize::new(6));

        let block = root.descendants().find(|node| node.kind() == BLOCK).unwrap();
        assert_eq!(block.position(), TextSize::new(13));
        assert_eq!(block.full_width(), TextSize::new(3));
        assert_eq!(block.width(), TextSize::new(3));
        assert_eq!(block.slot_count(), 3);
        assert!(block.slot(1).is_none());
        assert_eq!(block.children().count(), 2);
    }

    #[test]
    fn trivia_is_positioned() {
        let tree = rule_set();
        let name = tree.tokens().next().unwrap();
        let trivia: Vec<_> = name.leading_trivia().map(|t| (t.kind(), t.text())).collect();
        assert_eq!(trivia, [(SINGLE_LINE_COMMENT_TRIVIA, "// hi"), (END_OF_LINE_TRIVIA, "\n")]);
        let trailing: Vec<_> = name.trailing_trivia().map(|t| t.text_range()).collect();
        assert_eq!(trailing, [TextRange::new(12.into(), 13.into())]);
        assert!(name.has_comments());
    }

    #[test]
    fn parents_and_ancestors() {
        let tree = rule_set();
        let name = tree.tokens().next().unwrap();
        let kinds: Vec<_> = name.ancestors().map(SyntaxNode::kind).collect();
        assert_eq!(
            kinds,
            [SELECTOR_SUB_PART, LIST, SELECTOR_PART, LIST, SELECTOR, LIST, RULE_SET, LIST, DOCUMENT]
        );
        assert_eq!(tree.root().parent(), None);
    }

    #[test]
    fn token_navigation() {
        let tree = rule_set();
        let tokens: Vec<_> = tree.tokens().collect();
        assert_eq!(tokens[1].prev_token(), Some(tokens[0]));
        assert_eq!(tokens[1].next_token(), Some(tokens[2]));
        assert_eq!(tokens[3].next_token(), None);
        assert_eq!(tree.root().first_token(), Some(tokens[0]));
        assert_eq!(tree.root().last_token().map(SyntaxToken::kind), Some(EOF));
    }

    #[test]
    fn token_at_offset() {
        let tree = rule_set();
        let at = |offset: u32| tree.token_at_offset(offset.into()).map(SyntaxToken::kind);
        assert_eq!(at(0), TokenAtOffset::Single(IDENTIFIER));
        assert_eq!(at(13), TokenAtOffset::Between(IDENTIFIER, LEFT_BRACE));
        assert_eq!(at(16), TokenAtOffset::Single(RIGHT_BRACE));
    }

    #[test]
    #[should_panic(expected = "slot 3 is out of range")]
    fn slot_out_of_range_panics() {
        let tree = rule_set();
        let block = tree.root().descendants().find(|node| node.kind() == BLOCK).unwrap();
        block.slot(3);
    }

    #[test]
    fn debug_tree() {
        let tree = rule_set();
        expect_test::expect![[r#"
            DOCUMENT@0..16
              LIST@0..16
                RULE_SET@0..16
                  LIST@0..13
                    SELECTOR@0..13
                      LIST@0..13
                        SELECTOR_PART@0..13
                          LIST@0..13
                            SELECTOR_SUB_PART@0..13
                              IDENTIFIER@0..13 "button"
                  BLOCK@13..16
                    LEFT_BRACE@13..15 "{"
                    RIGHT_BRACE@15..16 "}"
              EOF@16..16 ""
        "#]]
        .assert_eq(&tree.root().debug_tree());
    }
}
