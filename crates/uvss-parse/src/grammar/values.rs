use uvss_syntax::NodeId;
use uvss_syntax::SyntaxKind::*;

use super::some;
use crate::parser::Parser;

/// Where a plain value ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ValueContext {
    /// Rule and transition values: `;`, `}` or a qualifier.
    Rule,
    /// Trigger evaluations: also `,`, the body's `{` and the start of the
    /// next evaluation.
    Evaluation,
    /// Trigger actions: `;` or `}`.
    Action,
}

impl ValueContext {
    /// Whether the `n`th token from the current one ends the value.
    fn ends_at(self, p: &Parser<'_>, n: usize) -> bool {
        match p.nth_kind(n) {
            EOF | SEMICOLON | RIGHT_BRACE => true,
            IMPORTANT_KW => self != Self::Action,
            EXCLAMATION_MARK => {
                self != Self::Action && p.nth_kind(n + 1) == IMPORTANT_KW
            }
            COMMA | LEFT_BRACE => self == Self::Evaluation,
            // The next evaluation, when its comma is missing.
            kind if self == Self::Evaluation && n > 0 && kind.is_name() => {
                p.nth_kind(n + 1).is_comparison_operator()
                    || (p.nth_kind(n + 1) == PERIOD && p.nth_kind(n + 3).is_comparison_operator())
            }
            _ => false,
        }
    }
}

/// `PROPERTY_VALUE_WITH_BRACES` when the value opens with `{` (outside
/// evaluations), otherwise a merged `PROPERTY_VALUE`.
pub(crate) fn value(p: &mut Parser<'_>, context: ValueContext) -> NodeId {
    if p.at(LEFT_BRACE) && context != ValueContext::Evaluation {
        return value_with_braces(p);
    }

    let mut count = 0;
    while !context.ends_at(p, count) {
        count += 1;
    }

    let content = if count == 0 {
        p.missing(PROPERTY_VALUE_TOKEN, "expected property value")
    } else {
        p.bump_merged(PROPERTY_VALUE_TOKEN, count)
    };
    p.node(PROPERTY_VALUE, [some(content)])
}

/// `{ … }` whose balanced content becomes one opaque value token.
pub(crate) fn value_with_braces(p: &mut Parser<'_>) -> NodeId {
    if !p.at(LEFT_BRACE) {
        let open = p.missing(LEFT_BRACE, "expected '{'");
        let content = p.missing_silent(PROPERTY_VALUE_TOKEN);
        let close = p.missing_silent(RIGHT_BRACE);
        return p.node(PROPERTY_VALUE_WITH_BRACES, [some(open), some(content), some(close)]);
    }

    let open = p.bump();

    let mut depth = 0usize;
    let mut count = 0;
    loop {
        match p.nth_kind(count) {
            EOF => break,
            RIGHT_BRACE if depth == 0 => break,
            RIGHT_BRACE => depth -= 1,
            LEFT_BRACE => depth += 1,
            _ => {}
        }
        count += 1;
    }

    let content = if count == 0 {
        p.missing(PROPERTY_VALUE_TOKEN, "expected property value")
    } else {
        p.bump_merged(PROPERTY_VALUE_TOKEN, count)
    };
    let close = p.expect(RIGHT_BRACE);

    p.node(PROPERTY_VALUE_WITH_BRACES, [some(open), some(content), some(close)])
}
