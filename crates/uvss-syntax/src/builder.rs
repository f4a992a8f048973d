//! Bottom-up construction of the immutable syntax tree.

use text_size::{TextLen as _, TextSize};

use crate::nodes::{ElementId, NodeData, NodeId, TokenData, TokenId};
use crate::{NodeOrToken, SyntaxKind, SyntaxTree, Trivia};

const DEFAULT_TREE_SIZE: usize = 1024;

/// Builds a [`SyntaxTree`] from the leaves up.
///
/// Tokens are created first; composites are created from already-built
/// children, and [`Builder::node`] is the only place a child learns its
/// parent. Positions are unknown until [`Builder::finish`] places the tree.
pub struct Builder {
    tokens: Vec<TokenData>,
    nodes: Vec<NodeData>,
    slots: Vec<Option<ElementId>>,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    pub fn new() -> Self {
        Self {
            tokens: Vec::with_capacity(DEFAULT_TREE_SIZE),
            nodes: Vec::with_capacity(DEFAULT_TREE_SIZE / 2),
            slots: Vec::with_capacity(DEFAULT_TREE_SIZE),
        }
    }

    /// Adds a token with its leading and trailing trivia.
    #[track_caller]
    pub fn token(
        &mut self,
        leading: Trivia,
        kind: SyntaxKind,
        text_len: TextSize,
        trailing: Trivia,
    ) -> TokenId {
        assert!(kind.is_token(), "`{kind:?}` is not a token kind");
        self.push_token(TokenData {
            kind,
            missing: false,
            leading,
            text_len,
            trailing,
            parent: None,
            position: TextSize::new(0),
            order: 0,
        })
    }

    /// Adds a zero-width placeholder for a token the source does not contain.
    #[track_caller]
    pub fn missing(&mut self, kind: SyntaxKind) -> TokenId {
        assert!(kind.is_token(), "`{kind:?}` is not a token kind");
        self.push_token(TokenData {
            kind,
            missing: true,
            leading: Trivia::empty(),
            text_len: TextSize::new(0),
            trailing: Trivia::empty(),
            parent: None,
            position: TextSize::new(0),
            order: 0,
        })
    }

    fn push_token(&mut self, token: TokenData) -> TokenId {
        let id = TokenId::new(self.tokens.len());
        self.tokens.push(token);
        id
    }

    /// Creates a composite that takes ownership of `slots`, in order.
    ///
    /// # Panics
    ///
    /// If `kind` has a fixed slot count that differs from the number of
    /// slots, or if any child already has a parent.
    #[track_caller]
    pub fn node(
        &mut self,
        kind: SyntaxKind,
        slots: impl IntoIterator<Item = Option<ElementId>>,
    ) -> NodeId {
        assert!(kind.is_composite(), "`{kind:?}` is not a composite kind");

        let id = NodeId::new(self.nodes.len());
        let slots_start = self.slots.len();
        let mut full_width = TextSize::new(0);

        for slot in slots {
            if let Some(child) = slot {
                self.attach(child, id);
                full_width += self.full_width(child);
            }
            self.slots.push(slot);
        }

        let slot_count = self.slots.len() - slots_start;
        if let Some(expected) = kind.fixed_slot_count() {
            assert_eq!(
                slot_count, expected as usize,
                "`{kind:?}` has {expected} slots, {slot_count} were given"
            );
        }

        self.nodes.push(NodeData {
            kind,
            slots_start: slots_start.try_into().expect("too many slots"),
            slot_count: slot_count.try_into().expect("too many slots"),
            parent: None,
            full_width,
            position: TextSize::new(0),
        });
        id
    }

    #[track_caller]
    fn attach(&mut self, child: ElementId, parent: NodeId) {
        let slot = match child {
            NodeOrToken::Node(node) => &mut self.nodes[node.index()].parent,
            NodeOrToken::Token(token) => &mut self.tokens[token.index()].parent,
        };
        if let Some(existing) = *slot {
            panic!("{child:?} is already attached to {existing:?}");
        }
        *slot = Some(parent);
    }

    /// Width of an element built so far, trivia included.
    pub fn full_width(&self, element: ElementId) -> TextSize {
        match element {
            NodeOrToken::Node(node) => self.nodes[node.index()].full_width,
            NodeOrToken::Token(token) => self.tokens[token.index()].full_width(),
        }
    }

    pub fn kind(&self, element: ElementId) -> SyntaxKind {
        match element {
            NodeOrToken::Node(node) => self.nodes[node.index()].kind,
            NodeOrToken::Token(token) => self.tokens[token.index()].kind,
        }
    }

    /// Places the tree rooted at `root` over `text` and freezes it.
    ///
    /// # Panics
    ///
    /// If `root` has a parent, any element is left unattached, or the tree
    /// does not span `text` exactly.
    #[track_caller]
    pub fn finish(self, text: impl Into<Box<str>>, root: NodeId) -> SyntaxTree {
        let text = text.into();
        let Self { mut tokens, mut nodes, slots } = self;

        assert!(nodes[root.index()].parent.is_none(), "the root must not have a parent");
        if let Some(index) = tokens.iter().position(|token| token.parent.is_none()) {
            panic!("{:?} was never attached to the tree", TokenId::new(index));
        }
        if let Some(index) = nodes
            .iter()
            .enumerate()
            .position(|(index, node)| index != root.index() && node.parent.is_none())
        {
            panic!("{:?} was never attached to the tree", NodeId::new(index));
        }
        assert_eq!(
            nodes[root.index()].full_width,
            text.text_len(),
            "the tree does not span the source text"
        );

        let mut document_order = Vec::with_capacity(tokens.len());
        let mut stack = vec![(ElementId::Node(root), TextSize::new(0))];
        let mut children = Vec::new();

        while let Some((element, position)) = stack.pop() {
            match element {
                NodeOrToken::Token(id) => {
                    let token = &mut tokens[id.index()];
                    token.position = position;
                    token.order = document_order.len().try_into().expect("too many tokens");
                    document_order.push(id);

                    let start = position + token.leading.len();
                    let end = start + token.text_len;
                    assert!(
                        text.is_char_boundary(start.into()) && text.is_char_boundary(end.into()),
                        "{id:?} does not start and end on character boundaries"
                    );
                }
                NodeOrToken::Node(id) => {
                    nodes[id.index()].position = position;

                    let mut offset = position;
                    for child in slots[nodes[id.index()].slot_range()].iter().flatten() {
                        children.push((*child, offset));
                        offset += match *child {
                            NodeOrToken::Node(child) => nodes[child.index()].full_width,
                            NodeOrToken::Token(child) => tokens[child.index()].full_width(),
                        };
                    }
                    stack.extend(children.drain(..).rev());
                }
            }
        }

        SyntaxTree {
            text,
            tokens: tokens.into_boxed_slice(),
            nodes: nodes.into_boxed_slice(),
            slots: slots.into_boxed_slice(),
            document_order: document_order.into_boxed_slice(),
            root,
        }
    }
}
