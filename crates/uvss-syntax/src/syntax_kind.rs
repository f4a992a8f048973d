#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u16)]
pub enum SyntaxKind {
    WHITESPACE_TRIVIA,
    END_OF_LINE_TRIVIA,
    SINGLE_LINE_COMMENT_TRIVIA,
    MULTI_LINE_COMMENT_TRIVIA,

    LEFT_BRACE,
    RIGHT_BRACE,
    LEFT_PAREN,
    RIGHT_PAREN,
    LEFT_BRACKET,
    RIGHT_BRACKET,
    COLON,
    SEMICOLON,
    COMMA,
    PERIOD,
    HASH,
    AT_SIGN,
    ASTERISK,
    EXCLAMATION_MARK,
    PIPE,
    PLUS,
    MINUS,
    SLASH,
    PERCENT,
    EQUALS,
    NOT_EQUALS,
    LESS_THAN,
    LESS_THAN_EQUALS,
    GREATER_THAN,
    GREATER_THAN_EQUALS,
    GREATER_THAN_GREATER_THAN,
    GREATER_THAN_QUESTION_MARK,

    IDENTIFIER,
    NUMBER,
    STRING,
    PROPERTY_VALUE_TOKEN,

    ANIMATION_KW,
    AS_KW,
    EVENT_KW,
    HANDLED_KW,
    IMPORTANT_KW,
    KEYFRAME_KW,
    PLAY_SFX_KW,
    PLAY_STORYBOARD_KW,
    PROPERTY_KW,
    SET_KW,
    SET_HANDLED_KW,
    TARGET_KW,
    TRANSITION_KW,
    TRIGGER_KW,

    UNKNOWN,
    EOF,

    DOCUMENT,
    LIST,
    ERROR,
    BLOCK,
    RULE_SET,
    RULE,
    SELECTOR,
    SELECTOR_PART,
    SELECTOR_SUB_PART,
    PSEUDO_CLASS,
    SELECTOR_WITH_PARENTHESES,
    SELECTOR_WITH_NAVIGATION_EXPRESSION,
    NAVIGATION_EXPRESSION,
    NAVIGATION_EXPRESSION_INDEXER,
    PROPERTY_NAME,
    EVENT_NAME,
    PROPERTY_VALUE,
    PROPERTY_VALUE_WITH_BRACES,
    PROPERTY_TRIGGER,
    PROPERTY_TRIGGER_EVALUATION,
    EVENT_TRIGGER,
    EVENT_TRIGGER_ARGUMENT_LIST,
    PLAY_STORYBOARD_TRIGGER_ACTION,
    PLAY_SFX_TRIGGER_ACTION,
    SET_TRIGGER_ACTION,
    TRANSITION,
    TRANSITION_ARGUMENT_LIST,
    STORYBOARD,
    STORYBOARD_TARGET,
    ANIMATION,
    ANIMATION_KEYFRAME,
}

use SyntaxKind::*;

impl SyntaxKind {
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            WHITESPACE_TRIVIA
                | END_OF_LINE_TRIVIA
                | SINGLE_LINE_COMMENT_TRIVIA
                | MULTI_LINE_COMMENT_TRIVIA
        )
    }

    pub const fn is_comment(self) -> bool {
        matches!(self, SINGLE_LINE_COMMENT_TRIVIA | MULTI_LINE_COMMENT_TRIVIA)
    }

    pub const fn is_keyword(self) -> bool {
        self as u16 >= ANIMATION_KW as u16 && self as u16 <= TRIGGER_KW as u16
    }

    /// Kinds that occupy a single token in the tree.
    pub const fn is_token(self) -> bool {
        !self.is_trivia() && (self as u16) < DOCUMENT as u16
    }

    pub const fn is_composite(self) -> bool {
        self as u16 >= DOCUMENT as u16
    }

    /// Tokens that may stand in for an identifier where a name is expected.
    pub const fn is_name(self) -> bool {
        matches!(self, IDENTIFIER) || self.is_keyword()
    }

    pub const fn is_comparison_operator(self) -> bool {
        matches!(
            self,
            EQUALS
                | NOT_EQUALS
                | LESS_THAN
                | LESS_THAN_EQUALS
                | GREATER_THAN
                | GREATER_THAN_EQUALS
        )
    }

    pub const fn is_selector_combinator(self) -> bool {
        matches!(self, GREATER_THAN | GREATER_THAN_GREATER_THAN | GREATER_THAN_QUESTION_MARK)
    }

    /// Number of slots every node of this kind has.
    ///
    /// `None` for tokens, trivia and the variable-length `LIST` and `ERROR`.
    pub const fn fixed_slot_count(self) -> Option<u32> {
        let count = match self {
            DOCUMENT => 2,
            BLOCK => 3,
            RULE_SET => 2,
            RULE => 5,
            SELECTOR => 1,
            SELECTOR_PART => 1,
            SELECTOR_SUB_PART => 3,
            PSEUDO_CLASS => 2,
            SELECTOR_WITH_PARENTHESES => 3,
            SELECTOR_WITH_NAVIGATION_EXPRESSION => 2,
            NAVIGATION_EXPRESSION => 5,
            NAVIGATION_EXPRESSION_INDEXER => 3,
            PROPERTY_NAME => 3,
            EVENT_NAME => 3,
            PROPERTY_VALUE => 1,
            PROPERTY_VALUE_WITH_BRACES => 3,
            PROPERTY_TRIGGER => 5,
            PROPERTY_TRIGGER_EVALUATION => 3,
            EVENT_TRIGGER => 6,
            EVENT_TRIGGER_ARGUMENT_LIST => 3,
            PLAY_STORYBOARD_TRIGGER_ACTION => 4,
            PLAY_SFX_TRIGGER_ACTION => 3,
            SET_TRIGGER_ACTION => 5,
            TRANSITION => 6,
            TRANSITION_ARGUMENT_LIST => 3,
            STORYBOARD => 4,
            STORYBOARD_TARGET => 4,
            ANIMATION => 4,
            ANIMATION_KEYFRAME => 4,
            _ => return None,
        };
        Some(count)
    }

    pub fn from_keyword(text: &str) -> Option<Self> {
        let kind = match text {
            "animation" => ANIMATION_KW,
            "as" => AS_KW,
            "event" => EVENT_KW,
            "handled" => HANDLED_KW,
            "important" => IMPORTANT_KW,
            "keyframe" => KEYFRAME_KW,
            "play-sfx" => PLAY_SFX_KW,
            "play-storyboard" => PLAY_STORYBOARD_KW,
            "property" => PROPERTY_KW,
            "set" => SET_KW,
            "set-handled" => SET_HANDLED_KW,
            "target" => TARGET_KW,
            "transition" => TRANSITION_KW,
            "trigger" => TRIGGER_KW,
            _ => return None,
        };
        Some(kind)
    }

    /// Source text of punctuation and keywords, used in diagnostics.
    pub const fn describe(self) -> &'static str {
        match self {
            LEFT_BRACE => "'{'",
            RIGHT_BRACE => "'}'",
            LEFT_PAREN => "'('",
            RIGHT_PAREN => "')'",
            LEFT_BRACKET => "'['",
            RIGHT_BRACKET => "']'",
            COLON => "':'",
            SEMICOLON => "';'",
            COMMA => "','",
            PERIOD => "'.'",
            HASH => "'#'",
            AT_SIGN => "'@'",
            ASTERISK => "'*'",
            EXCLAMATION_MARK => "'!'",
            PIPE => "'|'",
            PLUS => "'+'",
            MINUS => "'-'",
            SLASH => "'/'",
            PERCENT => "'%'",
            EQUALS => "'='",
            NOT_EQUALS => "'<>'",
            LESS_THAN => "'<'",
            LESS_THAN_EQUALS => "'<='",
            GREATER_THAN => "'>'",
            GREATER_THAN_EQUALS => "'>='",
            GREATER_THAN_GREATER_THAN => "'>>'",
            GREATER_THAN_QUESTION_MARK => "'>?'",
            IDENTIFIER => "identifier",
            NUMBER => "number",
            STRING => "string",
            PROPERTY_VALUE_TOKEN => "property value",
            ANIMATION_KW => "'animation'",
            AS_KW => "'as'",
            EVENT_KW => "'event'",
            HANDLED_KW => "'handled'",
            IMPORTANT_KW => "'important'",
            KEYFRAME_KW => "'keyframe'",
            PLAY_SFX_KW => "'play-sfx'",
            PLAY_STORYBOARD_KW => "'play-storyboard'",
            PROPERTY_KW => "'property'",
            SET_KW => "'set'",
            SET_HANDLED_KW => "'set-handled'",
            TARGET_KW => "'target'",
            TRANSITION_KW => "'transition'",
            TRIGGER_KW => "'trigger'",
            UNKNOWN => "unknown character",
            EOF => "end of input",
            WHITESPACE_TRIVIA | END_OF_LINE_TRIVIA => "whitespace",
            SINGLE_LINE_COMMENT_TRIVIA | MULTI_LINE_COMMENT_TRIVIA => "comment",
            _ => "syntax node",
        }
    }
}
