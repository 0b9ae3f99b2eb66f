//! Identifier / custom-property / callee disambiguation.
//!
//! CSS identifiers, custom-property names (`--foo`) and call targets
//! (`foo(`) are lexically identical runs of identifier-shaped characters.
//! One code point of lookahead at the terminator plus a stack query resolves
//! the ambiguity without duplicating the identifier shape three times in the
//! grammar.

use csslex_core::{CanShift, ExternalTokenizer, TokenScan, TokenTag};

use crate::classify::{is_digit, is_letter_like, DASH, PAREN_L, UNDERSCORE};

/// Scan an identifier-shaped run and classify it.
///
/// Per step at code-point offset `i`:
///
/// 1. Match letter-like, `-`, `_`, or — only once inside the identifier —
///    a digit.
/// 2. On match, mark the scan as inside the identifier unless the character
///    is a lone leading dash (a dash prefix alone is not yet an
///    identifier), count consecutive dashes while still in the leading
///    prefix, and consume.
/// 3. On the first non-match, decline if nothing identifier-forming was
///    ever seen. Otherwise the terminator decides the class:
///    `(` means [`Callee`](TokenTag::Callee); exactly two leading dashes in
///    a state that can shift one means
///    [`VariableName`](TokenTag::VariableName); anything else is a plain
///    [`Identifier`](TokenTag::Identifier). The terminator itself is never
///    consumed.
pub fn scan_identifier(scan: &mut TokenScan<'_>, stack: &dyn CanShift) {
    let mut inside = false;
    let mut leading_dashes = 0;
    let mut i = 0;
    loop {
        let next = scan.current();
        if is_letter_like(next) || next == DASH || next == UNDERSCORE || (inside && is_digit(next))
        {
            if !inside && (next != DASH || i > 0) {
                inside = true;
            }
            if leading_dashes == i && next == DASH {
                leading_dashes += 1;
            }
            scan.advance();
        } else {
            if inside {
                let tag = if next == PAREN_L {
                    TokenTag::Callee
                } else if leading_dashes == 2 && stack.can_shift(TokenTag::VariableName) {
                    TokenTag::VariableName
                } else {
                    TokenTag::Identifier
                };
                scan.accept(tag);
            }
            break;
        }
        i += 1;
    }
}

/// The `identifiers` external-token slot.
pub static IDENTIFIERS: ExternalTokenizer = ExternalTokenizer::new("identifiers", scan_identifier);
