use uvss_errors::DiagnosticCode;
use uvss_syntax::SyntaxKind::*;
use uvss_syntax::{NodeId, SyntaxSet};

use super::selectors::PART_START;
use super::{error_until, rules, some, storyboards, triggers};
use crate::parser::Parser;

const ITEM_START: SyntaxSet = SyntaxSet::new([AT_SIGN]).union(&PART_START);

pub(crate) fn document(p: &mut Parser<'_>) -> NodeId {
    let mut items = p.start_list();
    while !p.at_eof() {
        let item = match p.peek_kind() {
            TRIGGER_KW => misplaced_trigger(p),
            AT_SIGN => storyboards::storyboard(p),
            kind if PART_START.contains(kind) => rules::rule_set(p),
            _ => error_until(p, &ITEM_START),
        };
        items.push(item);
    }
    let items = items.complete(p);
    let eof = p.bump();
    p.node(DOCUMENT, [items, some(eof)])
}

/// Triggers only take effect inside rule sets; a top-level one is still
/// parsed so its structure is available.
fn misplaced_trigger(p: &mut Parser<'_>) -> NodeId {
    let range = p.current_range();
    p.error(DiagnosticCode::UnexpectedToken, "triggers must appear inside a rule set", range);
    triggers::trigger(p)
}
