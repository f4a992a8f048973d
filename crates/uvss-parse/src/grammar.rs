//! Recursive-descent productions. Every production returns the id of the node
//! it built; slots are assembled only through `Parser::node`.

use uvss_errors::DiagnosticCode;
use uvss_syntax::SyntaxKind::{self, *};
use uvss_syntax::{ElementId, NodeId, SyntaxSet, TokenId};

use crate::parser::{ListMarker, Parser};

pub(crate) mod document;
mod rules;
mod selectors;
mod storyboards;
mod triggers;
mod values;

pub(crate) const KEYWORDS: SyntaxSet = SyntaxSet::new([
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
]);

/// Tokens accepted in name positions.
pub(crate) const NAMES: SyntaxSet = SyntaxSet::new([IDENTIFIER]).union(&KEYWORDS);

fn some(id: impl Into<ElementId>) -> Option<ElementId> {
    Some(id.into())
}

/// `{ items }`. Without a `{` both braces are synthesized with a single
/// diagnostic and nothing is consumed.
pub(crate) fn block(
    p: &mut Parser<'_>,
    item_start: &SyntaxSet,
    mut item: impl FnMut(&mut Parser<'_>) -> NodeId,
) -> NodeId {
    if !p.at(LEFT_BRACE) {
        let open = p.missing(LEFT_BRACE, "expected '{'");
        let close = p.missing_silent(RIGHT_BRACE);
        return p.node(BLOCK, [some(open), None, some(close)]);
    }

    let open = p.bump();
    let mut content = p.start_list();
    while !p.at(RIGHT_BRACE) && !p.at_eof() {
        if p.at_set(item_start) {
            content.push(item(p));
        } else {
            content.push(error_until(p, item_start));
        }
    }
    let content = content.complete(p);
    let close = p.expect(RIGHT_BRACE);

    p.node(BLOCK, [some(open), content, some(close)])
}

/// Wraps unexpected tokens in an `ERROR` node.
///
/// The current token is always consumed. Skipping then stops before the next
/// item start, a `}` or the end of input. Nested `{ … }` groups are skipped
/// whole and a `;` ends the error.
pub(crate) fn error_until(p: &mut Parser<'_>, item_start: &SyntaxSet) -> NodeId {
    let found = p.peek_kind();
    let range = p.current_range();
    p.error(DiagnosticCode::UnexpectedToken, format!("unexpected {}", found.describe()), range);

    let mut skipped = p.start_list();
    loop {
        match p.peek_kind() {
            EOF => break,
            RIGHT_BRACE if !skipped.is_empty() => break,
            kind if !skipped.is_empty() && item_start.contains(kind) => break,
            LEFT_BRACE => skip_group(p, &mut skipped),
            SEMICOLON => {
                skipped.push(p.bump());
                break;
            }
            _ => skipped.push(p.bump()),
        }
    }
    tracing::trace!(?found, "skipped unexpected tokens");

    skipped.complete_error(p)
}

/// Consumes a balanced `{ … }` group, or everything up to the end of input.
fn skip_group(p: &mut Parser<'_>, skipped: &mut ListMarker) {
    let mut depth = 0usize;
    loop {
        match p.peek_kind() {
            EOF => return,
            LEFT_BRACE => depth += 1,
            RIGHT_BRACE => depth -= 1,
            _ => {}
        }
        skipped.push(p.bump());
        if depth == 0 {
            return;
        }
    }
}

/// A greedy comma-separated list. Items are parsed while `item_start`
/// matches; a missing comma between two items is synthesized.
pub(crate) fn separated(
    p: &mut Parser<'_>,
    list: &mut ListMarker,
    item_start: impl Fn(&Parser<'_>) -> bool,
    what: &str,
    mut item: impl FnMut(&mut Parser<'_>) -> ElementId,
) {
    if !item_start(p) {
        return;
    }

    loop {
        list.push(item(p));

        if let Some(comma) = p.eat(COMMA) {
            list.push(comma);
            if !item_start(p) {
                let range = p.current_range();
                p.error(
                    DiagnosticCode::UnexpectedToken,
                    format!("expected {what} after ','"),
                    range,
                );
                return;
            }
        } else if item_start(p) {
            list.push(p.missing(COMMA, "expected ','"));
        } else {
            return;
        }
    }
}

/// `owner.name` or `name`, as `PROPERTY_NAME` or `EVENT_NAME`.
pub(crate) fn qualified_name(p: &mut Parser<'_>, kind: SyntaxKind) -> NodeId {
    let first = p.expect_name();
    if p.at(PERIOD) && p.nth_kind(1).is_name() {
        let period = p.bump();
        let name = p.bump_as(IDENTIFIER);
        p.node(kind, [some(first), some(period), some(name)])
    } else {
        p.node(kind, [None, None, some(first)])
    }
}

/// `important` or `!important`, merged into one `IMPORTANT_KW` token.
pub(crate) fn qualifier(p: &mut Parser<'_>) -> Option<TokenId> {
    match p.peek_kind() {
        IMPORTANT_KW => Some(p.bump()),
        EXCLAMATION_MARK if p.nth_kind(1) == IMPORTANT_KW => Some(p.bump_merged(IMPORTANT_KW, 2)),
        _ => None,
    }
}

/// An optional name stored as `IDENTIFIER`.
pub(crate) fn opt_name(p: &mut Parser<'_>) -> Option<TokenId> {
    p.at_set(&NAMES).then(|| p.bump_as(IDENTIFIER))
}
