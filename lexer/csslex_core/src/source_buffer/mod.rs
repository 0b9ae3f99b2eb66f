//! Sentinel-terminated source buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! allowing scanners to detect end of input without explicit bounds
//! checking. The total buffer size is rounded up to the next 64-byte
//! boundary for cache-line alignment, which also provides safe padding for
//! lookahead reads near the end of the buffer.
//!
//! # Encoding Detection
//!
//! Construction takes `&str`, so the content is always valid UTF-8.
//! Two things can still slip through that the grammar engine wants to know
//! about, and both are recorded as [`EncodingIssue`] values rather than
//! errors:
//! - a leading U+FEFF byte order mark,
//! - interior null bytes (U+0000), which read as the EOI code point and
//!   would otherwise be indistinguishable from end of input to a scanner.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// UTF-8 encoding of U+FEFF, the byte order mark.
const BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
///
/// The sentinel byte at `source_len` is always `0x00`, as is the cache-line
/// padding after it, so cursor reads past the end of the source are safe and
/// yield the EOI code point.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
    /// Encoding issues detected during construction.
    encoding_issues: Vec<EncodingIssue>,
}

/// Encoding issue detected during source buffer construction.
///
/// Carries the kind, byte position, and byte length of the problematic
/// sequence. The integration layer turns these into diagnostics; nothing in
/// this crate treats them as fatal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    /// What kind of encoding issue was detected.
    pub kind: EncodingIssueKind,
    /// Byte position in the source where the issue was found.
    pub pos: u32,
    /// Byte length of the problematic sequence.
    pub len: u32,
}

/// Kind of encoding issue detected in source content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// U+FEFF at the start of the source.
    LeadingBom,
    /// Null byte (U+0000) in source content. Reads as EOI to scanners.
    InteriorNull,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from source text.
    ///
    /// Copies the source bytes into a cache-line-aligned buffer with a
    /// `0x00` sentinel byte appended, and scans for encoding issues.
    ///
    /// Sources larger than `u32::MAX` bytes saturate `source_len`; callers
    /// with ~4 GiB stylesheets have other problems, and the engine rejects
    /// oversized documents upstream.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len();

        // Round up to the next 64-byte boundary (minimum: source + sentinel).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // Zero-filled allocation: the sentinel and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        let mut encoding_issues = Vec::new();
        detect_encoding_issues(source_bytes, &mut encoding_issues);

        Self {
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
            encoding_issues,
        }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Create a [`Cursor`] positioned at `pos`.
    ///
    /// This is how the grammar engine enters a scan at an ambiguous
    /// position.
    ///
    /// # Contract
    ///
    /// `pos` must be at most `len()` and must fall on a UTF-8 character
    /// boundary. Positions handed out by the engine always satisfy this.
    pub fn cursor_at(&self, pos: u32) -> Cursor<'_> {
        Cursor::at(&self.buf, self.source_len, pos)
    }

    /// Length of the source content in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Encoding issues detected during construction.
    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }
}

/// Detect a leading BOM and interior null bytes.
fn detect_encoding_issues(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    if source.starts_with(&BOM) {
        issues.push(EncodingIssue {
            kind: EncodingIssueKind::LeadingBom,
            pos: 0,
            len: BOM.len() as u32,
        });
    }

    // memchr for SIMD-accelerated null byte search.
    let mut offset = 0;
    while let Some(pos) = memchr::memchr(0, &source[offset..]) {
        let absolute = offset + pos;
        if let Ok(p) = u32::try_from(absolute) {
            issues.push(EncodingIssue {
                kind: EncodingIssueKind::InteriorNull,
                pos: p,
                len: 1,
            });
        }
        offset = absolute + 1;
    }
}
