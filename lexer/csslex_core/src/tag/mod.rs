//! Token tags, spans, and the parser stack query seam.
//!
//! [`TokenTag`] is the closed set of token classes the external tokenizers
//! can resolve; everything else in the grammar is handled by its table-driven
//! lexer. "No token" is not a tag — a scan that declines simply produces no
//! [`Token`].

use bitflags::bitflags;

/// Token classes resolved by external tokenizers.
///
/// The first three are lexically identical identifier shapes told apart by
/// one code point of lookahead and grammar context; the last two exist only
/// because the grammar cannot express them with regular lookahead at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenTag {
    /// A plain CSS identifier.
    Identifier = 0,
    /// A custom-property name: an identifier with exactly two leading
    /// dashes, in a grammar state that can shift one.
    VariableName = 1,
    /// An identifier immediately followed by `(` — a function-call target.
    Callee = 2,
    /// The implicit selector combinator between two selector components
    /// separated only by whitespace. Always zero width.
    DescendantCombinator = 3,
    /// A unit suffix attached to a numeric literal (`px`, `%`, ...).
    Unit = 4,
}

/// Size assertion: tags travel in token streams and must stay one byte.
const _: () = assert!(std::mem::size_of::<TokenTag>() == 1);

impl TokenTag {
    /// Grammar-facing name of the tag.
    pub fn name(self) -> &'static str {
        match self {
            Self::Identifier => "Identifier",
            Self::VariableName => "VariableName",
            Self::Callee => "Callee",
            Self::DescendantCombinator => "DescendantCombinator",
            Self::Unit => "Unit",
        }
    }

    /// Whether a token of this tag may cover an empty span.
    ///
    /// `DescendantCombinator` is the only zero-width token: it marks a
    /// position, not a stretch of text. Every other tag must consume input.
    pub fn can_be_empty(self) -> bool {
        matches!(self, Self::DescendantCombinator)
    }
}

/// A token accepted by an external tokenizer.
///
/// `start..end` is a byte range into the source. `start == end` only for
/// [`TokenTag::DescendantCombinator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    /// Token class.
    pub tag: TokenTag,
    /// Byte offset where the token starts.
    pub start: u32,
    /// Byte offset one past the last byte of the token.
    pub end: u32,
}

impl Token {
    /// Length of the token in bytes.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Returns `true` for zero-width tokens.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

bitflags! {
    /// A set of [`TokenTag`]s, used to answer stack queries.
    ///
    /// One bit per tag; the bit positions follow the tag discriminants.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct TagSet: u8 {
        /// [`TokenTag::Identifier`].
        const IDENTIFIER = 1 << 0;
        /// [`TokenTag::VariableName`].
        const VARIABLE_NAME = 1 << 1;
        /// [`TokenTag::Callee`].
        const CALLEE = 1 << 2;
        /// [`TokenTag::DescendantCombinator`].
        const DESCENDANT_COMBINATOR = 1 << 3;
        /// [`TokenTag::Unit`].
        const UNIT = 1 << 4;
    }
}

impl From<TokenTag> for TagSet {
    fn from(tag: TokenTag) -> Self {
        Self::from_bits_truncate(1u8 << (tag as u8))
    }
}

/// Read-only query into the parser's current shift-table state.
///
/// Supplied by the grammar engine per scan, answering "can the current state
/// accept a token of tag T next". The tokenizers use it only to tell
/// [`TokenTag::VariableName`] from [`TokenTag::Identifier`]; everything else
/// is decided from the text alone.
pub trait CanShift {
    /// Returns `true` if the parser can shift a token of `tag` at the
    /// current position.
    fn can_shift(&self, tag: TokenTag) -> bool;
}

/// A fixed set of shiftable tags. Stands in for a live parser stack in
/// drivers and tests.
impl CanShift for TagSet {
    fn can_shift(&self, tag: TokenTag) -> bool {
        self.contains(TagSet::from(tag))
    }
}

#[cfg(test)]
mod tests;
