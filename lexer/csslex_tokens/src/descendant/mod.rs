//! Implicit descendant-combinator detection.
//!
//! `div p` means "descendant combinator between `div` and `p`", while the
//! same whitespace elsewhere is insignificant. The grammar cannot see this
//! distinction — it depends on one code point of lookbehind — so this slot
//! emits a zero-width token that tells the parser an implicit combinator
//! sits between two adjacent selector components.

use csslex_core::{CanShift, ExternalTokenizer, TokenScan, TokenTag};

use crate::classify::{
    is_letter_like, is_whitespace, BRACKET_L, COLON, DASH, HASH, PERIOD, UNDERSCORE,
};

/// Emit a zero-width [`DescendantCombinator`](TokenTag::DescendantCombinator)
/// when whitespace separates two selector components.
///
/// Fires only when the code point immediately behind the current position is
/// whitespace AND the next code point can start a selector (letter-like,
/// `_`, `#`, `.`, `[`, `:`, or `-`). Otherwise declines and plain
/// whitespace skipping applies. The cursor never advances; the token marks
/// a position, not a span.
pub fn scan_descendant(scan: &mut TokenScan<'_>, _stack: &dyn CanShift) {
    if !is_whitespace(scan.peek(-1)) {
        return;
    }
    let next = scan.current();
    if is_letter_like(next)
        || matches!(next, UNDERSCORE | HASH | PERIOD | BRACKET_L | COLON | DASH)
    {
        scan.accept(TokenTag::DescendantCombinator);
    }
}

/// The `descendant` external-token slot.
pub static DESCENDANT: ExternalTokenizer = ExternalTokenizer::new("descendant", scan_descendant);
