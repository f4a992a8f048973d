use text_size::TextRange;
use uvss_errors::DiagnosticCode;
use uvss_syntax::SyntaxKind::*;
use uvss_syntax::{ElementId, NodeId, SyntaxSet};

use super::selectors::selector_with_parentheses;
use super::values::{ValueContext, value};
use super::{block, qualified_name, qualifier, separated, some};
use crate::parser::Parser;

const ACTION_START: SyntaxSet = SyntaxSet::new([PLAY_STORYBOARD_KW, PLAY_SFX_KW, SET_KW]);

/// `trigger property …` or `trigger event …`.
pub(crate) fn trigger(p: &mut Parser<'_>) -> NodeId {
    if p.nth_kind(1) == EVENT_KW { event_trigger(p) } else { property_trigger(p) }
}

/// `trigger property a = 1, b <> 2 [important] { actions }`
fn property_trigger(p: &mut Parser<'_>) -> NodeId {
    let trigger = p.expect(TRIGGER_KW);
    let property = p.expect(PROPERTY_KW);

    let mut evaluations = p.start_list();
    separated(
        p,
        &mut evaluations,
        |p| p.peek_kind().is_name() && !p.at(IMPORTANT_KW),
        "property evaluation",
        |p| evaluation(p).into(),
    );
    if evaluations.is_empty() {
        let at = TextRange::empty(p.current_range().start());
        p.error(DiagnosticCode::MissingToken, "expected property evaluation", at);
    }
    let evaluations = evaluations.complete(p);

    let qualifier = qualifier(p).map(ElementId::from);
    let body = block(p, &ACTION_START, action);
    p.node(PROPERTY_TRIGGER, [some(trigger), some(property), evaluations, qualifier, some(body)])
}

fn evaluation(p: &mut Parser<'_>) -> NodeId {
    let property_name = qualified_name(p, PROPERTY_NAME);
    let comparison = if p.peek_kind().is_comparison_operator() {
        p.bump()
    } else {
        p.missing(EQUALS, "expected comparison operator")
    };
    let value = value(p, ValueContext::Evaluation);
    p.node(PROPERTY_TRIGGER_EVALUATION, [some(property_name), some(comparison), some(value)])
}

/// `trigger event Owner.Event [(handled, set-handled)] [important] { actions }`
fn event_trigger(p: &mut Parser<'_>) -> NodeId {
    let trigger = p.expect(TRIGGER_KW);
    let event = p.expect(EVENT_KW);
    let event_name = qualified_name(p, EVENT_NAME);
    let arguments = p.at(LEFT_PAREN).then(|| event_arguments(p)).map(ElementId::from);
    let qualifier = qualifier(p).map(ElementId::from);
    let body = block(p, &ACTION_START, action);
    p.node(
        EVENT_TRIGGER,
        [some(trigger), some(event), some(event_name), arguments, qualifier, some(body)],
    )
}

fn event_arguments(p: &mut Parser<'_>) -> NodeId {
    let open = p.bump();
    let mut arguments = p.start_list();
    separated(
        p,
        &mut arguments,
        |p| p.peek_kind().is_name(),
        "event trigger argument",
        |p| {
            if !matches!(p.peek_kind(), HANDLED_KW | SET_HANDLED_KW) {
                let message = format!(
                    "unexpected event trigger argument '{}', expected 'handled' or 'set-handled'",
                    p.current_text()
                );
                let range = p.current_range();
                p.error(DiagnosticCode::UnexpectedToken, message, range);
            }
            p.bump().into()
        },
    );
    let arguments = arguments.complete(p);
    let close = p.expect(RIGHT_PAREN);
    p.node(EVENT_TRIGGER_ARGUMENT_LIST, [some(open), arguments, some(close)])
}

fn action(p: &mut Parser<'_>) -> NodeId {
    match p.peek_kind() {
        PLAY_STORYBOARD_KW => {
            let keyword = p.bump();
            let selector = p.at(LEFT_PAREN).then(|| selector_with_parentheses(p));
            let value = value(p, ValueContext::Action);
            let semicolon = p.eat(SEMICOLON).map(ElementId::from);
            p.node(
                PLAY_STORYBOARD_TRIGGER_ACTION,
                [some(keyword), selector.map(ElementId::from), some(value), semicolon],
            )
        }
        PLAY_SFX_KW => {
            let keyword = p.bump();
            let value = value(p, ValueContext::Action);
            let semicolon = p.eat(SEMICOLON).map(ElementId::from);
            p.node(PLAY_SFX_TRIGGER_ACTION, [some(keyword), some(value), semicolon])
        }
        _ => {
            let keyword = p.expect(SET_KW);
            let property_name = qualified_name(p, PROPERTY_NAME);
            let selector = p.at(LEFT_PAREN).then(|| selector_with_parentheses(p));
            let value = value(p, ValueContext::Action);
            let semicolon = p.eat(SEMICOLON).map(ElementId::from);
            p.node(
                SET_TRIGGER_ACTION,
                [
                    some(keyword),
                    some(property_name),
                    selector.map(ElementId::from),
                    some(value),
                    semicolon,
                ],
            )
        }
    }
}
