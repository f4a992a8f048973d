//! Error-tolerant parser for UVSS.
//!
//! [`parse`] never fails: malformed input still yields a complete tree, with
//! missing tokens synthesized and unexpected ones wrapped in `ERROR` nodes,
//! alongside the diagnostics explaining what was repaired.

use uvss_errors::Diagnostics;
use uvss_syntax::ast::{AstNode as _, Document};
use uvss_syntax::{SyntaxNode, SyntaxTree};

mod grammar;
mod parser;

/// The result of parsing one source text.
#[derive(Debug)]
pub struct Parse {
    tree: SyntaxTree,
    diagnostics: Diagnostics,
}

impl Parse {
    pub fn tree(&self) -> &SyntaxTree {
        &self.tree
    }

    pub fn root(&self) -> SyntaxNode<'_> {
        self.tree.root()
    }

    pub fn document(&self) -> Document<'_> {
        Document::cast(self.tree.root()).expect("the root is always a document")
    }

    /// Lexical and syntax diagnostics, ordered by position.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_parts(self) -> (SyntaxTree, Diagnostics) {
        (self.tree, self.diagnostics)
    }
}

#[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
pub fn parse(text: &str) -> Parse {
    let mut parser = parser::Parser::new(text);
    let token_count = parser.token_count();
    let root = grammar::document::document(&mut parser);
    let (tree, diagnostics) = parser.finish(root);
    tracing::debug!(tokens = token_count, diagnostics = diagnostics.len(), "parsed document");
    Parse { tree, diagnostics }
}
