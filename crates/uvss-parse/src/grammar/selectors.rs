//! Selectors. Whether `.`, `#`, `:` and `!` continue a part or start a new
//! one depends only on trivia between tokens; nothing here looks at element
//! types.

use text_size::TextRange;
use uvss_errors::DiagnosticCode;
use uvss_syntax::SyntaxKind::*;
use uvss_syntax::{ElementId, NodeId, SyntaxSet, TokenId};

use super::{NAMES, qualified_name, some};
use crate::parser::Parser;

pub(crate) const PART_START: SyntaxSet =
    SyntaxSet::new([PERIOD, HASH, ASTERISK, COLON]).union(&NAMES);

const COMBINATORS: SyntaxSet =
    SyntaxSet::new([GREATER_THAN, GREATER_THAN_GREATER_THAN, GREATER_THAN_QUESTION_MARK]);

/// `SELECTOR`: parts and explicit combinators; juxtaposed parts imply the
/// descendant combinator.
pub(crate) fn selector(p: &mut Parser<'_>) -> NodeId {
    let mut components = p.start_list();
    loop {
        if p.at_set(&COMBINATORS) {
            components.push(p.bump());
        } else if p.at_set(&PART_START) {
            components.push(selector_part(p));
        } else {
            break;
        }
    }

    if components.is_empty() {
        let at = TextRange::empty(p.current_range().start());
        p.error(DiagnosticCode::MissingToken, "expected selector", at);
    }
    let components = components.complete(p);
    p.node(SELECTOR, [components])
}

fn selector_part(p: &mut Parser<'_>) -> NodeId {
    let mut sub_parts = p.start_list();
    sub_parts.push(sub_part(p));
    while p.adjacent() && p.at_set(&SyntaxSet::new([PERIOD, HASH, COLON])) {
        sub_parts.push(sub_part(p));
    }
    let sub_parts = sub_parts.complete(p);
    p.node(SELECTOR_PART, [sub_parts])
}

fn sub_part(p: &mut Parser<'_>) -> NodeId {
    if p.at(COLON) {
        let colon = p.bump();
        let class_name = adjacent_name(p);
        return p.node(PSEUDO_CLASS, [some(colon), some(class_name)]);
    }

    let (leading, text) = match p.peek_kind() {
        PERIOD | HASH => {
            let qualifier = p.bump();
            (some(qualifier), adjacent_name(p))
        }
        ASTERISK => (None, p.bump()),
        _ => (None, p.expect_name()),
    };
    let trailing = if p.adjacent() { p.eat(EXCLAMATION_MARK).map(ElementId::from) } else { None };

    p.node(SELECTOR_SUB_PART, [leading, some(text), trailing])
}

/// A name that must touch the preceding qualifier.
fn adjacent_name(p: &mut Parser<'_>) -> TokenId {
    if p.adjacent() && p.at_set(&NAMES) {
        p.bump_as(IDENTIFIER)
    } else {
        p.missing(IDENTIFIER, "expected identifier")
    }
}

/// `( selector )`
pub(crate) fn selector_with_parentheses(p: &mut Parser<'_>) -> NodeId {
    let open = p.expect(LEFT_PAREN);
    let selector = selector(p);
    let close = p.expect(RIGHT_PAREN);
    p.node(SELECTOR_WITH_PARENTHESES, [some(open), some(selector), some(close)])
}

/// A selector optionally followed by a navigation expression.
pub(crate) fn selector_with_navigation_expression(p: &mut Parser<'_>) -> NodeId {
    let selector = selector(p);
    let navigation = p.at(PIPE).then(|| navigation_expression(p));
    p.node(SELECTOR_WITH_NAVIGATION_EXPRESSION, [some(selector), navigation.map(ElementId::from)])
}

/// `| owner.property [index] as Type`
pub(crate) fn navigation_expression(p: &mut Parser<'_>) -> NodeId {
    let pipe = p.expect(PIPE);
    let property_name = qualified_name(p, PROPERTY_NAME);
    let indexer = p.at(LEFT_BRACKET).then(|| {
        let open = p.bump();
        let index = p.expect(NUMBER);
        let close = p.expect(RIGHT_BRACKET);
        p.node(NAVIGATION_EXPRESSION_INDEXER, [some(open), some(index), some(close)])
    });
    let as_keyword = p.expect(AS_KW);
    let type_name = p.expect_name();

    p.node(
        NAVIGATION_EXPRESSION,
        [
            some(pipe),
            some(property_name),
            indexer.map(ElementId::from),
            some(as_keyword),
            some(type_name),
        ],
    )
}
