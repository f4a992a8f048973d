use uvss_errors::DiagnosticCode;
use uvss_syntax::SyntaxKind::*;
use uvss_syntax::{ElementId, NodeId, SyntaxSet};

use super::selectors::{navigation_expression, selector_with_parentheses};
use super::values::value_with_braces;
use super::{NAMES, block, opt_name, qualified_name, some};
use crate::parser::Parser;

const LOOP_BEHAVIORS: [&str; 3] = ["none", "loop", "reverse"];

/// `@name [loop] { targets }`
pub(crate) fn storyboard(p: &mut Parser<'_>) -> NodeId {
    let at_sign = p.expect(AT_SIGN);
    let name = p.expect_name();

    let loop_behavior = if p.at_set(&NAMES) {
        let text = p.current_text();
        if !LOOP_BEHAVIORS.iter().any(|known| known.eq_ignore_ascii_case(text)) {
            let range = p.current_range();
            p.warning(
                DiagnosticCode::UnknownLoopBehavior,
                format!("unknown loop behavior '{text}', expected 'none', 'loop' or 'reverse'"),
                range,
            );
        }
        Some(p.bump_as(IDENTIFIER))
    } else {
        None
    };

    let body = block(p, &SyntaxSet::new([TARGET_KW]), target);
    p.node(STORYBOARD, [some(at_sign), some(name), loop_behavior.map(ElementId::from), some(body)])
}

/// `target [Type] [(selector)] { animations }`
fn target(p: &mut Parser<'_>) -> NodeId {
    let keyword = p.expect(TARGET_KW);
    let type_name = opt_name(p).map(ElementId::from);
    let selector = p.at(LEFT_PAREN).then(|| selector_with_parentheses(p)).map(ElementId::from);
    let body = block(p, &SyntaxSet::new([ANIMATION_KW]), animation);
    p.node(STORYBOARD_TARGET, [some(keyword), type_name, selector, some(body)])
}

/// `animation owner.property [| navigation] { keyframes }`
fn animation(p: &mut Parser<'_>) -> NodeId {
    let keyword = p.expect(ANIMATION_KW);
    let property_name = qualified_name(p, PROPERTY_NAME);
    let navigation = p.at(PIPE).then(|| navigation_expression(p)).map(ElementId::from);
    let body = block(p, &SyntaxSet::new([KEYFRAME_KW]), keyframe);
    p.node(ANIMATION, [some(keyword), some(property_name), navigation, some(body)])
}

/// `keyframe time [easing] { value }`
fn keyframe(p: &mut Parser<'_>) -> NodeId {
    let keyword = p.expect(KEYFRAME_KW);
    let time = p.expect(NUMBER);
    let easing = opt_name(p).map(ElementId::from);
    let value = value_with_braces(p);
    p.node(ANIMATION_KEYFRAME, [some(keyword), some(time), easing, some(value)])
}
