//! Unit-suffix scanning after numeric literals.
//!
//! Invoked immediately after the grammar's core lexer recognizes a numeric
//! literal. A unit is always an unbroken run of letters (`px`, `vmin`) or a
//! single `%` glued to the number; whitespace in between means "separate
//! identifier", not a unit (`10 px` is not `10px`). Treating the whole run
//! as one token lets the grammar model dimensioned literals uniformly
//! regardless of the specific unit.

use csslex_core::{CanShift, ExternalTokenizer, TokenScan, TokenTag};

use crate::classify::{is_letter_like, is_whitespace, PERCENT};

/// Scan an optional unit suffix and emit [`Unit`](TokenTag::Unit).
///
/// Declines when the code point behind the current position is whitespace.
/// Otherwise `%` is consumed as a one-code-point unit, and a letter-like
/// code point starts a maximal greedy letter-like run consumed as one unit.
/// No backtracking once a run starts.
pub fn scan_unit(scan: &mut TokenScan<'_>, _stack: &dyn CanShift) {
    if is_whitespace(scan.peek(-1)) {
        return;
    }
    let next = scan.current();
    if next == PERCENT {
        scan.advance();
        scan.accept(TokenTag::Unit);
    } else if is_letter_like(next) {
        scan.advance();
        while is_letter_like(scan.current()) {
            scan.advance();
        }
        scan.accept(TokenTag::Unit);
    }
}

/// The `unit_token` external-token slot.
pub static UNIT_TOKEN: ExternalTokenizer = ExternalTokenizer::new("unit_token", scan_unit);
