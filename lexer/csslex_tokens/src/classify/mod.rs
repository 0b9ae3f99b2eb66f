//! Character classification shared by the tokenizers.
//!
//! Pure, total predicates over a single code point. All of them are `false`
//! for the EOI code point (`0`), which is what terminates every scanning
//! loop at end of input.

/// `-`
pub(crate) const DASH: u32 = '-' as u32;
/// `_`
pub(crate) const UNDERSCORE: u32 = '_' as u32;
/// `(`
pub(crate) const PAREN_L: u32 = '(' as u32;
/// `[`
pub(crate) const BRACKET_L: u32 = '[' as u32;
/// `:`
pub(crate) const COLON: u32 = ':' as u32;
/// `.`
pub(crate) const PERIOD: u32 = '.' as u32;
/// `#`
pub(crate) const HASH: u32 = '#' as u32;
/// `%`
pub(crate) const PERCENT: u32 = '%' as u32;

/// Letter-like code points: ASCII letters, or anything at U+00A1 and above.
///
/// The `>= 161` boundary is the grammar's intentionally coarse substitute
/// for Unicode letter classification — everything above the Latin-1
/// control/punctuation range counts as a letter. It over-accepts (digits,
/// punctuation and symbols from non-Latin blocks all pass) and that is
/// deliberate: conformance with the grammar beats classification accuracy,
/// so the boundary is preserved exactly rather than corrected.
#[inline]
pub fn is_letter_like(cp: u32) -> bool {
    matches!(cp, 65..=90 | 97..=122) || cp >= 161
}

/// ASCII digits `0-9` only.
#[inline]
pub fn is_digit(cp: u32) -> bool {
    matches!(cp, 48..=57)
}

/// The grammar's whitespace set.
///
/// ASCII whitespace (tab through carriage return, space), NEL, NBSP, and
/// the Unicode space separators the grammar lists: Ogham space mark, the
/// U+2000 range, line and paragraph separators, narrow no-break space,
/// medium mathematical space, and ideographic space. Note U+200B
/// (zero-width space) is deliberately absent.
#[inline]
pub fn is_whitespace(cp: u32) -> bool {
    matches!(
        cp,
        9..=13 | 32 | 133 | 160 | 5760 | 8192..=8202 | 8232 | 8233 | 8239 | 8287 | 12288
    )
}

#[cfg(test)]
mod tests;
