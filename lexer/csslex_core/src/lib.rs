//! Engine-facing plumbing for CSS external tokenizers.
//!
//! A table-driven grammar engine calls hand-written tokenizers at source
//! positions it marks as lexically ambiguous. This crate supplies everything
//! those tokenizers need from the engine side:
//!
//! - [`SourceBuffer`]: sentinel-terminated source text,
//! - [`Cursor`]: a `Copy` code-point cursor with one-code-point lookbehind,
//! - [`TokenTag`] / [`Token`]: the closed set of externally resolved tokens,
//! - [`TokenScan`]: the single-scan accept protocol (at most one token per
//!   invocation; declining is not an error),
//! - [`CanShift`]: the read-only parser stack query used to disambiguate
//!   tokens that are lexically identical but grammar-context-dependent,
//! - [`ExternalTokenizer`]: the named slot a tokenizer registers under.
//!
//! The grammar engine itself (LR table walking, incremental reparse, tree
//! construction) lives on the far side of these seams and is not part of
//! this crate.

mod cursor;
mod scan;
mod source_buffer;
mod tag;

pub use cursor::{Cursor, EOI};
pub use scan::{ExternalTokenizer, TokenScan};
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
pub use tag::{CanShift, TagSet, Token, TokenTag};
