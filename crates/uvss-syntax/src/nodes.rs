//! Flat arena storage for tokens and composite nodes.
//!
//! Elements refer to each other through `u32` ids; a finished tree owns every
//! arena, so handles only borrow it.

use std::fmt;

use text_size::TextSize;

use crate::{NodeOrToken, SyntaxKind, Trivia};

/// Index of a composite node inside its tree.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

/// Index of a token inside its tree.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenId(u32);

/// Either kind of child a slot can hold.
pub type ElementId = NodeOrToken<NodeId, TokenId>;

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index.try_into().expect("too many nodes"))
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl TokenId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index.try_into().expect("too many tokens"))
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Debug for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenId({})", self.0)
    }
}

impl From<NodeId> for ElementId {
    fn from(id: NodeId) -> Self {
        NodeOrToken::Node(id)
    }
}

impl From<TokenId> for ElementId {
    fn from(id: TokenId) -> Self {
        NodeOrToken::Token(id)
    }
}

pub(crate) struct TokenData {
    pub(crate) kind: SyntaxKind,
    pub(crate) missing: bool,
    pub(crate) leading: Trivia,
    pub(crate) text_len: TextSize,
    pub(crate) trailing: Trivia,
    /// `None` only while the tree is being built.
    pub(crate) parent: Option<NodeId>,
    /// Filled in by `Builder::finish`.
    pub(crate) position: TextSize,
    /// Index into the tree's document-order token table.
    pub(crate) order: u32,
}

impl TokenData {
    pub(crate) fn full_width(&self) -> TextSize {
        self.leading.len() + self.text_len + self.trailing.len()
    }
}

pub(crate) struct NodeData {
    pub(crate) kind: SyntaxKind,
    pub(crate) slots_start: u32,
    pub(crate) slot_count: u32,
    pub(crate) parent: Option<NodeId>,
    pub(crate) full_width: TextSize,
    /// Filled in by `Builder::finish`.
    pub(crate) position: TextSize,
}

impl NodeData {
    pub(crate) fn slot_range(&self) -> std::ops::Range<usize> {
        let start = self.slots_start as usize;
        start..start + self.slot_count as usize
    }
}
