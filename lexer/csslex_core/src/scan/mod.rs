//! The single-scan accept protocol and tokenizer registration.
//!
//! A [`TokenScan`] is the view an external tokenizer gets for the duration
//! of exactly one invocation: a private cursor snapshot plus the right to
//! accept at most one token. Declining — finishing the scan without
//! accepting — is the normal negative outcome, not an error; the driver's
//! own position is unaffected because the scan worked on a [`Cursor`] copy
//! all along.
//!
//! Driver-contract violations (accepting twice, advancing after accepting,
//! advancing past end of input) are integration defects, not runtime
//! conditions, and fail loudly through assertions.

use crate::cursor::Cursor;
use crate::tag::{CanShift, Token, TokenTag};

/// One external-tokenizer invocation over a cursor snapshot.
///
/// Constructed by the driver at a grammar-marked ambiguous position, handed
/// to the tokenizer, then resolved with [`into_token()`](Self::into_token).
#[derive(Debug)]
pub struct TokenScan<'a> {
    cursor: Cursor<'a>,
    /// Byte offset where this scan began; accepted tokens start here.
    start: u32,
    accepted: Option<TokenTag>,
}

impl<'a> TokenScan<'a> {
    /// Begin a scan at the cursor's current position.
    pub fn new(cursor: Cursor<'a>) -> Self {
        let start = cursor.pos();
        Self {
            cursor,
            start,
            accepted: None,
        }
    }

    /// Code point at the current position, or [`EOI`](crate::EOI).
    #[inline]
    pub fn current(&self) -> u32 {
        self.cursor.current()
    }

    /// Code point `delta` code points away, or [`EOI`](crate::EOI) off
    /// either end. Negative deltas look behind the current position.
    #[inline]
    pub fn peek(&self, delta: i32) -> u32 {
        self.cursor.peek(delta)
    }

    /// Consume one code point.
    ///
    /// # Contract
    ///
    /// Must not be called after [`accept()`](Self::accept) — an accepted
    /// token's span is final — and must not run past end of input.
    #[inline]
    pub fn advance(&mut self) {
        debug_assert!(
            self.accepted.is_none(),
            "external tokenizer advanced after accepting a token"
        );
        self.cursor.advance();
    }

    /// Accept a token of `tag` covering everything consumed so far.
    ///
    /// Terminates the scan: exactly one token per invocation.
    ///
    /// # Panics
    ///
    /// Panics if a token was already accepted in this scan, or (in debug
    /// builds) if the span is empty for a tag that must consume input.
    pub fn accept(&mut self, tag: TokenTag) {
        assert!(
            self.accepted.is_none(),
            "external tokenizer accepted two tokens in one scan"
        );
        debug_assert!(
            self.cursor.pos() > self.start || tag.can_be_empty(),
            "zero-width {} token",
            tag.name()
        );
        self.accepted = Some(tag);
    }

    /// Byte offset where this scan began.
    #[inline]
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Resolve the scan: the accepted token, or `None` for a decline.
    pub fn into_token(self) -> Option<Token> {
        self.accepted.map(|tag| Token {
            tag,
            start: self.start,
            end: self.cursor.pos(),
        })
    }
}

/// A hand-written tokenizer registered under a grammar-defined slot.
///
/// The grammar engine invokes the slot's scan function exactly at source
/// positions it marks as lexically ambiguous for that slot. The function
/// either accepts one token or declines by returning without accepting.
#[derive(Clone, Copy, Debug)]
pub struct ExternalTokenizer {
    name: &'static str,
    scan: fn(&mut TokenScan<'_>, &dyn CanShift),
}

impl ExternalTokenizer {
    /// Register a scan function under `name`.
    pub const fn new(name: &'static str, scan: fn(&mut TokenScan<'_>, &dyn CanShift)) -> Self {
        Self { name, scan }
    }

    /// Grammar-facing slot name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run one scan at the cursor's position against the given stack state.
    ///
    /// Returns the accepted token, or `None` when the tokenizer declined.
    /// The caller's own cursor is unaffected either way; the scan consumes
    /// a [`Cursor`] snapshot.
    pub fn scan_at(&self, cursor: Cursor<'_>, stack: &dyn CanShift) -> Option<Token> {
        let mut scan = TokenScan::new(cursor);
        (self.scan)(&mut scan, stack);
        scan.into_token()
    }
}
