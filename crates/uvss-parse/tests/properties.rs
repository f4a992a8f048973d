//! Structural guarantees every parse result keeps, valid input or not.

use std::collections::HashSet;
use std::thread;

use text_size::{TextRange, TextSize};
use uvss_parse::parse;
use uvss_syntax::SyntaxKind::{DOCUMENT, RULE, SELECTOR_PART};
use uvss_syntax::{NodeOrToken, SyntaxElement, SyntaxNode, SyntaxTree};

const CORPUS: &[&str] = &[
    "",
    "   \n\t",
    "// comment only",
    "button { background-color: #ff0000; }",
    "button { background-color: #ff0000;",
    "button {",
    "{ } } {",
    "Button.foo #bar > .baz:hover, *! { width: 10 !important; }",
    "Button | Content.Items [2] as ListBox { }",
    "a, { }",
    ", , ,",
    "button { trigger property foo = 1, bar <> 2 important { play-storyboard @anim; } }",
    "trigger property foo = 1 { }",
    "button { trigger event Mouse.Click (handled, bogus,) { set x (#y) z; play-sfx } }",
    "button { trigger property { set } }",
    "button { transition (a b,): fade !important; transition: x; }",
    "@fade loop { target Button (#foo) { animation Opacity { keyframe 0 ease-in { 0.0 } } } }",
    "@ { target { animation { keyframe { } } } }",
    "@board bounce { } @",
    "button { margin: { 1 { 2 } 3 ; }",
    "button { 42; color: red; } } button { }",
    "button { color: \"unterminated\n}",
    "/* unterminated comment",
    "button\r\n{\r\n  color: red; // trailing\r\n}\r\n",
    "button { color: red ¤ blue; }",
    "button { color: red }",
    "button:  { }",
    "button { trigger property foo = 1  }",
    "| as [ ] ( ) < <= >= >> >? <> ! . # : ;",
    "\u{feff}button { }",
];

fn elements(root: SyntaxNode<'_>) -> impl Iterator<Item = SyntaxElement<'_>> {
    root.preorder().filter_map(|event| match event {
        uvss_syntax::WalkEvent::Enter(node) => Some(NodeOrToken::Node(node)),
        uvss_syntax::WalkEvent::Token(token) => Some(NodeOrToken::Token(token)),
        uvss_syntax::WalkEvent::Leave(_) => None,
    })
}

#[test]
fn round_trip() {
    for &text in CORPUS {
        let parse = parse(text);
        assert_eq!(parse.root().full_text(), text);

        let concatenated: String = parse.tree().tokens().map(|token| token.full_text()).collect();
        assert_eq!(concatenated, text);
    }
}

#[test]
fn positions_are_coherent() {
    for &text in CORPUS {
        let parse = parse(text);
        let root = parse.root();
        assert_eq!(root.position(), TextSize::from(0));
        assert_eq!(root.full_width(), TextSize::of(text));

        let mut offset = TextSize::from(0);
        for token in parse.tree().tokens() {
            assert_eq!(token.position(), offset, "{text:?}: {token:?}");
            offset += token.full_width();
        }
        assert_eq!(offset, TextSize::of(text));

        for node in root.descendants() {
            if let Some(first) = node.first_token() {
                assert_eq!(node.position(), first.position(), "{text:?}: {node:?}");
            }
            assert!(node.full_text_range().end() <= TextSize::of(text));
        }
    }
}

#[test]
fn widths_add_up() {
    for &text in CORPUS {
        let parse = parse(text);
        for node in parse.root().descendants() {
            let sum: TextSize = node.children().map(SyntaxElement::full_width).sum();
            assert_eq!(node.full_width(), sum, "{text:?}: {node:?}");
            assert_eq!(
                node.full_width(),
                node.leading_trivia_width() + node.width() + node.trailing_trivia_width(),
                "{text:?}: {node:?}"
            );
        }
        for token in parse.tree().tokens() {
            assert_eq!(
                token.full_width(),
                token.leading_trivia_width() + token.width() + token.trailing_trivia_width()
            );
            let trivia: TextSize = token
                .leading_trivia()
                .chain(token.trailing_trivia())
                .map(|trivia| trivia.width())
                .sum();
            assert_eq!(trivia + token.width(), token.full_width());
        }
    }
}

#[test]
fn text_range_spans_present_tokens() {
    for &text in CORPUS {
        let parse = parse(text);
        for node in parse.root().descendants() {
            let mut present = node.descendant_tokens().filter(|token| !token.is_missing());
            let Some(first) = present.next() else {
                assert_eq!(node.width(), TextSize::from(0), "{text:?}: {node:?}");
                continue;
            };
            let last = present.last().unwrap_or(first);
            assert_eq!(
                node.text_range(),
                TextRange::new(first.text_range().start(), last.text_range().end()),
                "{text:?}: {node:?}"
            );
        }
    }
}

#[test]
fn missing_edge_tokens_do_not_widen_nodes() {
    let unterminated = parse("button { color: red }");
    let rule = unterminated.root().descendants().find(|node| node.kind() == RULE).unwrap();
    assert!(rule.last_token().unwrap().is_missing());
    assert_eq!(rule.text(), "color: red");
    assert_eq!(rule.width(), TextSize::from(10));
    assert_eq!(rule.trailing_trivia_width(), TextSize::from(1));

    let pseudo_class = parse("button:  { }");
    let part = pseudo_class.root().descendants().find(|node| node.kind() == SELECTOR_PART).unwrap();
    assert_eq!(part.text(), "button:");

    for node in pseudo_class.root().descendants().filter(|node| node.kind() != DOCUMENT) {
        let node_text = node.text();
        assert_eq!(node_text, node_text.trim(), "{node:?}");
    }
}

#[test]
fn every_element_has_one_parent() {
    for &text in CORPUS {
        let parse = parse(text);
        let root = parse.root();
        assert_eq!(root.parent(), None);

        let mut seen = HashSet::new();
        for element in elements(root) {
            assert!(seen.insert(element), "{text:?}: {element:?} reached twice");
            if let Some(parent) = element.parent() {
                assert!(parent.children().any(|child| child == element));
            } else {
                assert_eq!(element, NodeOrToken::Node(root));
            }
        }
        assert_eq!(
            seen.iter().filter(|element| element.as_token().is_some()).count(),
            parse.tree().tokens().len()
        );
    }
}

#[test]
fn clean_parses_have_no_missing_tokens() {
    for &text in CORPUS {
        let parse = parse(text);
        let missing = parse.tree().tokens().filter(|token| token.is_missing()).count();
        if !parse.diagnostics().has_errors() {
            assert_eq!(missing, 0, "{text:?}");
        }
        if missing > 0 {
            assert!(parse.diagnostics().has_errors(), "{text:?}");
        }
    }
}

#[test]
fn fixed_nodes_keep_their_slot_count() {
    for &text in CORPUS {
        let parse = parse(text);
        for node in parse.root().descendants() {
            if let Some(expected) = node.kind().fixed_slot_count() {
                assert_eq!(node.slot_count(), expected as usize, "{text:?}: {node:?}");
            }
        }
    }
}

#[test]
fn concurrent_traversal() {
    let trees: Vec<SyntaxTree> = CORPUS.iter().map(|text| parse(text).into_parts().0).collect();
    let expected: Vec<usize> = trees.iter().map(|tree| elements(tree.root()).count()).collect();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    trees.iter().map(|tree| elements(tree.root()).count()).collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
