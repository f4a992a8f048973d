use text_size::{TextRange, TextSize};
use uvss_syntax::SyntaxKind::*;
use uvss_syntax::ast::{
    AnimationKeyframe, AstNode as _, EventName, NavigationExpression, PropertyName, Rule, Selector,
    Storyboard, StoryboardTarget,
};
use uvss_syntax::{NodeOrToken, SyntaxElement, SyntaxNode, SyntaxToken, SyntaxTrivia, Visitor};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    Comment,
    Number,
    Keyword,
    Selector,
    PropertyName,
    PropertyValue,
    Storyboard,
    TypeName,
}

/// A classified region of source text, trivia excluded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassifiedSpan {
    pub range: TextRange,
    pub classification: Classification,
}

/// Classifies the tree under `root`. Spans are ordered by start offset.
pub fn classify(root: SyntaxNode<'_>) -> Vec<ClassifiedSpan> {
    let mut classifier = Classifier::default();
    uvss_syntax::walk(NodeOrToken::Node(root), &mut classifier);
    classifier.spans.sort_by_key(|span| span.range.start());
    classifier.spans
}

#[derive(Default)]
struct Classifier {
    spans: Vec<ClassifiedSpan>,
}

impl Classifier {
    fn push(&mut self, element: Option<SyntaxElement<'_>>, classification: Classification) {
        let Some(element) = element else { return };
        if element.is_missing() || element.width() == TextSize::new(0) {
            return;
        }
        self.spans.push(ClassifiedSpan { range: element.text_range(), classification });
    }

    fn push_token(&mut self, token: Option<SyntaxToken<'_>>, classification: Classification) {
        self.push(token.map(NodeOrToken::Token), classification);
    }

    fn qualified_name(&mut self, owner: Option<SyntaxToken<'_>>, name: Option<SyntaxToken<'_>>) {
        self.push_token(owner, Classification::TypeName);
        self.push_token(name, Classification::PropertyName);
    }
}

impl<'a> Visitor<'a> for Classifier {
    fn visit(&mut self, element: SyntaxElement<'a>) {
        let node = match element {
            NodeOrToken::Token(token) => {
                let classification = match token.kind() {
                    NUMBER => Classification::Number,
                    PROPERTY_VALUE_TOKEN => Classification::PropertyValue,
                    kind if kind.is_keyword() => Classification::Keyword,
                    _ => return,
                };
                self.push(Some(element), classification);
                return;
            }
            NodeOrToken::Node(node) => node,
        };

        match node.kind() {
            SELECTOR => {
                if let Some(selector) = Selector::cast(node) {
                    for component in selector.components() {
                        self.push(Some(component), Classification::Selector);
                    }
                }
            }
            RULE => {
                if let Some(rule) = Rule::cast(node) {
                    self.push_token(rule.colon(), Classification::PropertyName);
                }
            }
            PROPERTY_NAME => {
                if let Some(name) = PropertyName::cast(node) {
                    self.qualified_name(name.owner(), name.name());
                }
            }
            EVENT_NAME => {
                if let Some(name) = EventName::cast(node) {
                    self.qualified_name(name.owner(), name.name());
                }
            }
            STORYBOARD => {
                if let Some(storyboard) = Storyboard::cast(node) {
                    self.push_token(storyboard.at_sign(), Classification::Storyboard);
                    self.push_token(storyboard.name(), Classification::Storyboard);
                    self.push_token(storyboard.loop_behavior(), Classification::Storyboard);
                }
            }
            STORYBOARD_TARGET => {
                if let Some(target) = StoryboardTarget::cast(node) {
                    self.push_token(target.type_name(), Classification::TypeName);
                }
            }
            ANIMATION_KEYFRAME => {
                if let Some(keyframe) = AnimationKeyframe::cast(node) {
                    self.push_token(keyframe.easing(), Classification::Keyword);
                }
            }
            NAVIGATION_EXPRESSION => {
                if let Some(navigation) = NavigationExpression::cast(node) {
                    self.push_token(navigation.type_name(), Classification::TypeName);
                }
            }
            DOCUMENT
            | LIST
            | ERROR
            | BLOCK
            | RULE_SET
            | SELECTOR_PART
            | SELECTOR_SUB_PART
            | PSEUDO_CLASS
            | SELECTOR_WITH_PARENTHESES
            | SELECTOR_WITH_NAVIGATION_EXPRESSION
            | NAVIGATION_EXPRESSION_INDEXER
            | PROPERTY_VALUE
            | PROPERTY_VALUE_WITH_BRACES
            | PROPERTY_TRIGGER
            | PROPERTY_TRIGGER_EVALUATION
            | EVENT_TRIGGER
            | EVENT_TRIGGER_ARGUMENT_LIST
            | PLAY_STORYBOARD_TRIGGER_ACTION
            | PLAY_SFX_TRIGGER_ACTION
            | SET_TRIGGER_ACTION
            | TRANSITION
            | TRANSITION_ARGUMENT_LIST
            | ANIMATION => {}
            WHITESPACE_TRIVIA
            | END_OF_LINE_TRIVIA
            | SINGLE_LINE_COMMENT_TRIVIA
            | MULTI_LINE_COMMENT_TRIVIA
            | LEFT_BRACE
            | RIGHT_BRACE
            | LEFT_PAREN
            | RIGHT_PAREN
            | LEFT_BRACKET
            | RIGHT_BRACKET
            | COLON
            | SEMICOLON
            | COMMA
            | PERIOD
            | HASH
            | AT_SIGN
            | ASTERISK
            | EXCLAMATION_MARK
            | PIPE
            | PLUS
            | MINUS
            | SLASH
            | PERCENT
            | EQUALS
            | NOT_EQUALS
            | LESS_THAN
            | LESS_THAN_EQUALS
            | GREATER_THAN
            | GREATER_THAN_EQUALS
            | GREATER_THAN_GREATER_THAN
            | GREATER_THAN_QUESTION_MARK
            | IDENTIFIER
            | NUMBER
            | STRING
            | PROPERTY_VALUE_TOKEN
            | ANIMATION_KW
            | AS_KW
            | EVENT_KW
            | HANDLED_KW
            | IMPORTANT_KW
            | KEYFRAME_KW
            | PLAY_SFX_KW
            | PLAY_STORYBOARD_KW
            | PROPERTY_KW
            | SET_KW
            | SET_HANDLED_KW
            | TARGET_KW
            | TRANSITION_KW
            | TRIGGER_KW
            | UNKNOWN
            | EOF => unreachable!("{:?} is not a composite kind", node.kind()),
        }
    }

    fn visit_trivia(&mut self, trivia: SyntaxTrivia<'a>) {
        if trivia.is_comment() {
            self.spans.push(ClassifiedSpan {
                range: trivia.text_range(),
                classification: Classification::Comment,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use expect_test::{Expect, expect};

    use super::*;

    fn check(text: &str, expect: Expect) {
        let parse = uvss_parse::parse(text);
        let actual: String = classify(parse.root())
            .into_iter()
            .map(|span| {
                format!("{:?} {:?} {:?}\n", span.range, span.classification, &text[span.range])
            })
            .collect();
        expect.assert_eq(&actual);
    }

    #[test]
    fn leading_comment() {
        let parse = uvss_parse::parse("/* c */ button {}");
        let first = parse.tree().tokens().next().unwrap();
        let leading: String = first.leading_trivia().map(|trivia| trivia.text()).collect();
        assert_eq!(leading, "/* c */ ");

        let comments: Vec<_> = classify(parse.root())
            .into_iter()
            .filter(|span| span.classification == Classification::Comment)
            .collect();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].range, TextRange::new(0.into(), 7.into()));
    }

    #[test]
    fn rule_set() {
        check(
            "Button.primary > #icon { Grid.column: 1 !important; } // done",
            expect![[r##"
                0..14 Selector "Button.primary"
                15..16 Selector ">"
                17..22 Selector "#icon"
                25..29 TypeName "Grid"
                30..36 PropertyName "column"
                36..37 PropertyName ":"
                38..39 PropertyValue "1"
                40..50 Keyword "!important"
                54..61 Comment "// done"
            "##]],
        );
    }

    #[test]
    fn trigger() {
        check(
            "button { trigger event Mouse.Click { set Opacity 0.5; } }",
            expect![[r##"
                0..6 Selector "button"
                9..16 Keyword "trigger"
                17..22 Keyword "event"
                23..28 TypeName "Mouse"
                29..34 PropertyName "Click"
                37..40 Keyword "set"
                41..48 PropertyName "Opacity"
                49..52 PropertyValue "0.5"
            "##]],
        );
    }

    #[test]
    fn storyboard() {
        check(
            "@fade loop { target Panel { animation Opacity { keyframe 10 ease-in { 1 } } } }",
            expect![[r##"
                0..1 Storyboard "@"
                1..5 Storyboard "fade"
                6..10 Storyboard "loop"
                13..19 Keyword "target"
                20..25 TypeName "Panel"
                28..37 Keyword "animation"
                38..45 PropertyName "Opacity"
                48..56 Keyword "keyframe"
                57..59 Number "10"
                60..67 Keyword "ease-in"
                70..71 PropertyValue "1"
            "##]],
        );
    }

    #[test]
    fn missing_elements_are_skipped() {
        check(
            "button { color: }",
            expect![[r##"
                0..6 Selector "button"
                9..14 PropertyName "color"
                14..15 PropertyName ":"
            "##]],
        );
    }

    #[test]
    fn missing_pseudo_class_name() {
        check(
            "button:  { }",
            expect![[r##"
                0..7 Selector "button:"
            "##]],
        );
    }
}
