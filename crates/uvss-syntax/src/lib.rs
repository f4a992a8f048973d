//! Lossless, immutable syntax tree for UVSS with parent links and attached trivia.
//!
//! Trees are assembled bottom-up by [`Builder`], which is the only place a
//! parent is assigned. Once finished, positions are fixed and the tree is
//! navigated through `Copy` handles that borrow it.

/// Typed views over composite nodes.
pub mod ast;
mod builder;
mod nodes;
mod syntax;
mod syntax_kind;
mod syntax_set;
mod trivia;
mod visit;

pub use builder::Builder;
pub use nodes::{ElementId, NodeId, TokenId};
pub use syntax::{
    NodeOrToken, Preorder, SyntaxElement, SyntaxNode, SyntaxToken, SyntaxTree, SyntaxTrivia,
    TokenAtOffset, TriviaIter, WalkEvent,
};
pub use syntax_kind::SyntaxKind;
pub use syntax_set::SyntaxSet;
pub use trivia::{Trivia, TriviaPiece, TriviaPieceKind};
pub use visit::{Visitor, walk};
