use uvss_syntax::SyntaxKind::*;
use uvss_syntax::{ElementId, NodeId};

use super::selectors::{PART_START, selector_with_navigation_expression};
use super::values::{ValueContext, value};
use super::{NAMES, block, qualified_name, qualifier, separated, some, triggers};
use crate::parser::Parser;

/// `selector, selector { items }`
pub(crate) fn rule_set(p: &mut Parser<'_>) -> NodeId {
    let mut selectors = p.start_list();
    separated(
        p,
        &mut selectors,
        |p| p.at_set(&PART_START),
        "selector",
        |p| selector_with_navigation_expression(p).into(),
    );
    let selectors = selectors.complete(p);
    let body = block(p, &NAMES, rule_set_item);
    p.node(RULE_SET, [selectors, some(body)])
}

fn rule_set_item(p: &mut Parser<'_>) -> NodeId {
    match p.peek_kind() {
        TRIGGER_KW => triggers::trigger(p),
        TRANSITION_KW if p.nth_kind(1) == LEFT_PAREN => transition(p),
        _ => rule(p),
    }
}

/// `owner.name: value [!important];`
fn rule(p: &mut Parser<'_>) -> NodeId {
    let property_name = qualified_name(p, PROPERTY_NAME);
    let colon = p.expect(COLON);
    let value = value(p, ValueContext::Rule);
    let qualifier = qualifier(p).map(ElementId::from);
    let semicolon = p.expect(SEMICOLON);
    p.node(RULE, [some(property_name), some(colon), some(value), qualifier, some(semicolon)])
}

/// `transition (group, from, to): value [!important];`
fn transition(p: &mut Parser<'_>) -> NodeId {
    let keyword = p.bump();
    let arguments = transition_arguments(p);
    let colon = p.expect(COLON);
    let value = value(p, ValueContext::Rule);
    let qualifier = qualifier(p).map(ElementId::from);
    let semicolon = p.expect(SEMICOLON);
    p.node(
        TRANSITION,
        [some(keyword), some(arguments), some(colon), some(value), qualifier, some(semicolon)],
    )
}

fn transition_arguments(p: &mut Parser<'_>) -> NodeId {
    let open = p.expect(LEFT_PAREN);
    let mut arguments = p.start_list();
    separated(
        p,
        &mut arguments,
        |p| p.at_set(&NAMES),
        "transition argument",
        |p| p.bump_as(IDENTIFIER).into(),
    );
    let arguments = arguments.complete(p);
    let close = p.expect(RIGHT_PAREN);
    p.node(TRANSITION_ARGUMENT_LIST, [some(open), arguments, some(close)])
}
