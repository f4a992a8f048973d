use crate::SyntaxKind::{self, *};
use crate::{NodeOrToken, SyntaxElement, SyntaxNode, SyntaxToken};

pub trait AstNode<'a>: Copy {
    fn can_cast(kind: SyntaxKind) -> bool;

    fn cast(syntax: SyntaxNode<'a>) -> Option<Self>
    where
        Self: Sized;

    fn syntax(self) -> SyntaxNode<'a>;
}

fn token(syntax: SyntaxNode<'_>, index: usize) -> Option<SyntaxToken<'_>> {
    syntax.slot(index)?.into_token()
}

fn node<'a, N: AstNode<'a>>(syntax: SyntaxNode<'a>, index: usize) -> Option<N> {
    syntax.slot(index)?.into_node().and_then(N::cast)
}

fn list_elements(syntax: SyntaxNode<'_>, index: usize) -> impl Iterator<Item = SyntaxElement<'_>> {
    syntax
        .slot(index)
        .and_then(NodeOrToken::into_node)
        .filter(|list| list.kind() == LIST)
        .into_iter()
        .flat_map(SyntaxNode::children)
}

fn list<'a, N: AstNode<'a>>(syntax: SyntaxNode<'a>, index: usize) -> impl Iterator<Item = N> {
    list_elements(syntax, index).filter_map(NodeOrToken::into_node).filter_map(N::cast)
}

/// Tokens of a separated list, separators and error nodes left out.
fn list_tokens(syntax: SyntaxNode<'_>, index: usize) -> impl Iterator<Item = SyntaxToken<'_>> {
    list_elements(syntax, index)
        .filter_map(NodeOrToken::into_token)
        .filter(|token| token.kind() != COMMA)
}

macro_rules! ast_node {
    (@accessor $lt:lifetime $accessor:ident, $index:literal, token) => {
        pub fn $accessor(self) -> Option<SyntaxToken<$lt>> {
            token(self.0, $index)
        }
    };
    (@accessor $lt:lifetime $accessor:ident, $index:literal, tokens) => {
        pub fn $accessor(self) -> impl Iterator<Item = SyntaxToken<$lt>> {
            list_tokens(self.0, $index)
        }
    };
    (@accessor $lt:lifetime $accessor:ident, $index:literal, elements) => {
        pub fn $accessor(self) -> impl Iterator<Item = SyntaxElement<$lt>> {
            list_elements(self.0, $index)
        }
    };
    (@accessor $lt:lifetime $accessor:ident, $index:literal, list $ty:ident) => {
        pub fn $accessor(self) -> impl Iterator<Item = $ty<$lt>> {
            list(self.0, $index)
        }
    };
    (@accessor $lt:lifetime $accessor:ident, $index:literal, node $ty:ident) => {
        pub fn $accessor(self) -> Option<$ty<$lt>> {
            node(self.0, $index)
        }
    };
    (
        $(#[$attr:meta])*
        $name:ident($kind:ident) {
            $($accessor:ident: $index:literal => $shape:ident $($ty:ident)?),* $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name<'a>(SyntaxNode<'a>);

        impl<'a> AstNode<'a> for $name<'a> {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == $kind
            }

            fn cast(syntax: SyntaxNode<'a>) -> Option<Self> {
                Self::can_cast(syntax.kind()).then_some(Self(syntax))
            }

            fn syntax(self) -> SyntaxNode<'a> {
                self.0
            }
        }

        impl<'a> $name<'a> {
            $(ast_node!(@accessor 'a $accessor, $index, $shape $($ty)?);)*
        }
    };
}

macro_rules! ast_enum {
    (
        $(#[$attr:meta])*
        $name:ident { $($variant:ident),+ $(,)? }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name<'a> {
            $($variant($variant<'a>),)+
        }

        impl<'a> AstNode<'a> for $name<'a> {
            fn can_cast(kind: SyntaxKind) -> bool {
                $($variant::can_cast(kind))||+
            }

            fn cast(syntax: SyntaxNode<'a>) -> Option<Self> {
                $(if let Some(it) = $variant::cast(syntax) {
                    return Some(Self::$variant(it));
                })+
                None
            }

            fn syntax(self) -> SyntaxNode<'a> {
                match self {
                    $(Self::$variant(it) => it.syntax(),)+
                }
            }
        }
    };
}

ast_node! {
    /// Root of every parse.
    Document(DOCUMENT) {
        items: 0 => list DocumentItem,
        eof: 1 => token,
    }
}

ast_node! {
    /// `selectors { … }`
    RuleSet(RULE_SET) {
        selectors: 0 => list SelectorWithNavigationExpression,
        body: 1 => node Block,
    }
}

ast_node! {
    Block(BLOCK) {
        open_brace: 0 => token,
        elements: 1 => elements,
        close_brace: 2 => token,
    }
}

ast_node! {
    SelectorWithNavigationExpression(SELECTOR_WITH_NAVIGATION_EXPRESSION) {
        selector: 0 => node Selector,
        navigation_expression: 1 => node NavigationExpression,
    }
}

ast_node! {
    /// Selector parts interleaved with explicit combinator tokens.
    Selector(SELECTOR) {
        components: 0 => elements,
        parts: 0 => list SelectorPart,
    }
}

ast_node! {
    SelectorPart(SELECTOR_PART) {
        sub_parts: 0 => list SelectorSubPart,
        pseudo_classes: 0 => list PseudoClass,
    }
}

ast_node! {
    /// A type name, `.class`, `#name` or `*`, optionally followed by `!`.
    SelectorSubPart(SELECTOR_SUB_PART) {
        leading_qualifier: 0 => token,
        text: 1 => token,
        trailing_qualifier: 2 => token,
    }
}

ast_node! {
    PseudoClass(PSEUDO_CLASS) {
        colon: 0 => token,
        class_name: 1 => token,
    }
}

ast_node! {
    SelectorWithParentheses(SELECTOR_WITH_PARENTHESES) {
        open_paren: 0 => token,
        selector: 1 => node Selector,
        close_paren: 2 => token,
    }
}

ast_node! {
    /// `| property[index] as Type`
    NavigationExpression(NAVIGATION_EXPRESSION) {
        pipe: 0 => token,
        property_name: 1 => node PropertyName,
        indexer: 2 => node NavigationExpressionIndexer,
        as_keyword: 3 => token,
        type_name: 4 => token,
    }
}

ast_node! {
    NavigationExpressionIndexer(NAVIGATION_EXPRESSION_INDEXER) {
        open_bracket: 0 => token,
        index: 1 => token,
        close_bracket: 2 => token,
    }
}

ast_node! {
    PropertyName(PROPERTY_NAME) {
        owner: 0 => token,
        period: 1 => token,
        name: 2 => token,
    }
}

ast_node! {
    EventName(EVENT_NAME) {
        owner: 0 => token,
        period: 1 => token,
        name: 2 => token,
    }
}

ast_node! {
    /// `name: value [!important];`
    Rule(RULE) {
        property_name: 0 => node PropertyName,
        colon: 1 => token,
        value: 2 => node Value,
        qualifier: 3 => token,
        semicolon: 4 => token,
    }
}

ast_node! {
    PropertyValue(PROPERTY_VALUE) {
        content: 0 => token,
    }
}

ast_node! {
    PropertyValueWithBraces(PROPERTY_VALUE_WITH_BRACES) {
        open_brace: 0 => token,
        content: 1 => token,
        close_brace: 2 => token,
    }
}

ast_node! {
    Transition(TRANSITION) {
        transition_keyword: 0 => token,
        arguments: 1 => node TransitionArgumentList,
        colon: 2 => token,
        value: 3 => node Value,
        qualifier: 4 => token,
        semicolon: 5 => token,
    }
}

ast_node! {
    TransitionArgumentList(TRANSITION_ARGUMENT_LIST) {
        open_paren: 0 => token,
        arguments: 1 => tokens,
        close_paren: 2 => token,
    }
}

ast_node! {
    PropertyTrigger(PROPERTY_TRIGGER) {
        trigger_keyword: 0 => token,
        property_keyword: 1 => token,
        evaluations: 2 => list PropertyTriggerEvaluation,
        qualifier: 3 => token,
        body: 4 => node Block,
    }
}

ast_node! {
    PropertyTriggerEvaluation(PROPERTY_TRIGGER_EVALUATION) {
        property_name: 0 => node PropertyName,
        comparison: 1 => token,
        value: 2 => node Value,
    }
}

ast_node! {
    EventTrigger(EVENT_TRIGGER) {
        trigger_keyword: 0 => token,
        event_keyword: 1 => token,
        event_name: 2 => node EventName,
        arguments: 3 => node EventTriggerArgumentList,
        qualifier: 4 => token,
        body: 5 => node Block,
    }
}

ast_node! {
    EventTriggerArgumentList(EVENT_TRIGGER_ARGUMENT_LIST) {
        open_paren: 0 => token,
        arguments: 1 => tokens,
        close_paren: 2 => token,
    }
}

ast_node! {
    PlayStoryboardTriggerAction(PLAY_STORYBOARD_TRIGGER_ACTION) {
        keyword: 0 => token,
        selector: 1 => node SelectorWithParentheses,
        value: 2 => node Value,
        semicolon: 3 => token,
    }
}

ast_node! {
    PlaySfxTriggerAction(PLAY_SFX_TRIGGER_ACTION) {
        keyword: 0 => token,
        value: 1 => node Value,
        semicolon: 2 => token,
    }
}

ast_node! {
    SetTriggerAction(SET_TRIGGER_ACTION) {
        keyword: 0 => token,
        property_name: 1 => node PropertyName,
        selector: 2 => node SelectorWithParentheses,
        value: 3 => node Value,
        semicolon: 4 => token,
    }
}

ast_node! {
    /// `@name [loop] { targets }`
    Storyboard(STORYBOARD) {
        at_sign: 0 => token,
        name: 1 => token,
        loop_behavior: 2 => token,
        body: 3 => node Block,
    }
}

ast_node! {
    StoryboardTarget(STORYBOARD_TARGET) {
        target_keyword: 0 => token,
        type_name: 1 => token,
        selector: 2 => node SelectorWithParentheses,
        body: 3 => node Block,
    }
}

ast_node! {
    Animation(ANIMATION) {
        animation_keyword: 0 => token,
        property_name: 1 => node PropertyName,
        navigation_expression: 2 => node NavigationExpression,
        body: 3 => node Block,
    }
}

ast_node! {
    AnimationKeyframe(ANIMATION_KEYFRAME) {
        keyframe_keyword: 0 => token,
        time: 1 => token,
        easing: 2 => token,
        value: 3 => node PropertyValueWithBraces,
    }
}

ast_enum! {
    Value { PropertyValue, PropertyValueWithBraces }
}

ast_enum! {
    Trigger { PropertyTrigger, EventTrigger }
}

ast_enum! {
    /// Top-level content; triggers here are parsed but reported as misplaced.
    DocumentItem { RuleSet, Storyboard, PropertyTrigger, EventTrigger }
}

ast_enum! {
    RuleSetItem { Rule, Transition, PropertyTrigger, EventTrigger }
}

ast_enum! {
    TriggerAction { PlayStoryboardTriggerAction, PlaySfxTriggerAction, SetTriggerAction }
}

impl<'a> Block<'a> {
    /// Items of the block that cast to `N`; error nodes are skipped.
    pub fn items<N: AstNode<'a>>(self) -> impl Iterator<Item = N> {
        list(self.0, 1)
    }
}

impl<'a> RuleSet<'a> {
    pub fn items(self) -> impl Iterator<Item = RuleSetItem<'a>> {
        self.body().into_iter().flat_map(Block::items::<RuleSetItem<'a>>)
    }

    pub fn rules(self) -> impl Iterator<Item = Rule<'a>> {
        self.body().into_iter().flat_map(Block::items::<Rule<'a>>)
    }
}

impl<'a> Trigger<'a> {
    pub fn body(self) -> Option<Block<'a>> {
        match self {
            Trigger::PropertyTrigger(it) => it.body(),
            Trigger::EventTrigger(it) => it.body(),
        }
    }

    pub fn actions(self) -> impl Iterator<Item = TriggerAction<'a>> {
        self.body().into_iter().flat_map(Block::items::<TriggerAction<'a>>)
    }
}

impl<'a> Storyboard<'a> {
    pub fn targets(self) -> impl Iterator<Item = StoryboardTarget<'a>> {
        self.body().into_iter().flat_map(Block::items::<StoryboardTarget<'a>>)
    }
}

impl<'a> StoryboardTarget<'a> {
    pub fn animations(self) -> impl Iterator<Item = Animation<'a>> {
        self.body().into_iter().flat_map(Block::items::<Animation<'a>>)
    }
}

impl<'a> Animation<'a> {
    pub fn keyframes(self) -> impl Iterator<Item = AnimationKeyframe<'a>> {
        self.body().into_iter().flat_map(Block::items::<AnimationKeyframe<'a>>)
    }
}

impl<'a> Value<'a> {
    /// The merged value token; missing when the source had no value.
    pub fn content(self) -> Option<SyntaxToken<'a>> {
        match self {
            Value::PropertyValue(it) => it.content(),
            Value::PropertyValueWithBraces(it) => it.content(),
        }
    }
}

impl<'a> PropertyName<'a> {
    /// The property name as written, without the owner qualification.
    pub fn text(self) -> &'a str {
        self.name().map_or("", SyntaxToken::text)
    }

    pub fn is_attached(self) -> bool {
        self.owner().is_some()
    }
}
