//! Code-point cursor over a sentinel-terminated buffer.
//!
//! External tokenizers make their decisions on Unicode code points (the
//! grammar's letter classification is the code-point rule `cp >= 161`), so
//! the cursor decodes UTF-8 on the fly instead of exposing bytes. Positions
//! remain byte offsets: token spans handed back to the grammar engine are
//! byte ranges into the original source.
//!
//! End of input reads as the code point `0` ([`EOI`]), the sentinel byte
//! guaranteed by [`SourceBuffer`](crate::SourceBuffer). So does lookbehind
//! past the start of the source. Every character class the tokenizers test
//! against excludes `0`, so scans terminate naturally at either edge without
//! an out-of-band sentinel type in the hot path.

/// Code point returned at end of input and for out-of-range lookbehind.
///
/// Interior null bytes in the source also read as `EOI`; to a tokenizer the
/// distinction never matters, since `0` is in no character class and both
/// cases mean "stop here, this is not my token".
pub const EOI: u32 = 0;

/// `Copy` cursor reading code points from a sentinel-terminated buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor) or
/// [`SourceBuffer::cursor_at()`](crate::SourceBuffer::cursor_at). Being
/// [`Copy`], a scan can work on its own snapshot and simply discard it when
/// it declines — the driver's position is untouched by construction.
///
/// # Invariant
///
/// `buf` must be sentinel-terminated: `buf[source_len] == 0x00`, with only
/// `0x00` padding after it, and `pos` always rests on a UTF-8 character
/// boundary. Both are guaranteed by `SourceBuffer` construction and by
/// advancing one whole code point at a time.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

/// Size assertion: Cursor should be <= 24 bytes on 64-bit platforms.
/// &[u8] = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        Self::at(buf, source_len, 0)
    }

    /// Create a new cursor at byte position `pos`.
    ///
    /// # Contract
    ///
    /// `buf[source_len]` must be `0x00` (sentinel), all bytes after it must
    /// also be `0x00`, and `pos` must be a character boundary at or before
    /// `source_len`.
    pub(crate) fn at(buf: &'a [u8], source_len: u32, pos: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        debug_assert!(pos <= source_len, "cursor position {pos} past end of source");
        debug_assert!(
            pos >= source_len || !is_continuation(buf[pos as usize]),
            "cursor position {pos} not on a character boundary"
        );
        Self {
            buf,
            pos,
            source_len,
        }
    }

    /// Returns the code point at the current position, or [`EOI`] at end of
    /// input.
    #[inline]
    pub fn current(&self) -> u32 {
        self.decode_at(self.pos)
    }

    /// Returns the code point `delta` code points away from the current
    /// position, or [`EOI`] when the offset runs off either end of the
    /// source.
    ///
    /// Negative deltas look behind: `peek(-1)` is the code point whose
    /// encoding ends at the current position. `peek(0)` is
    /// [`current()`](Self::current).
    pub fn peek(&self, delta: i32) -> u32 {
        let mut p = self.pos;
        if delta >= 0 {
            for _ in 0..delta {
                if p >= self.source_len {
                    return EOI;
                }
                p += utf8_char_width(self.buf[p as usize]);
            }
        } else {
            for _ in 0..delta.unsigned_abs() {
                if p == 0 {
                    return EOI;
                }
                p = self.prev_boundary(p);
            }
        }
        self.decode_at(p)
    }

    /// Advance the cursor by one code point.
    ///
    /// # Contract
    ///
    /// Must not be called at end of input.
    #[inline]
    pub fn advance(&mut self) {
        debug_assert!(!self.is_eoi(), "advance past end of input");
        self.pos += utf8_char_width(self.buf[self.pos as usize]);
    }

    /// Returns `true` if the cursor has reached end of input.
    ///
    /// Interior null bytes read as [`EOI`] but are not end of input; the
    /// cursor can advance past them.
    #[inline]
    pub fn is_eoi(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source content (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Decode the code point starting at byte position `p`.
    ///
    /// Returns [`EOI`] for positions at or past the end of the source.
    /// The buffer was constructed from `&str`, so any in-range boundary
    /// position starts a valid UTF-8 sequence and the continuation bytes are
    /// in bounds (a character starting before `source_len` ends at or before
    /// it).
    fn decode_at(&self, p: u32) -> u32 {
        if p >= self.source_len {
            return EOI;
        }
        let p = p as usize;
        let b0 = u32::from(self.buf[p]);
        debug_assert!(
            !is_continuation(self.buf[p]),
            "decode at non-boundary position {p}"
        );
        match b0 {
            0x00..=0x7F => b0,
            0xC0..=0xDF => ((b0 & 0x1F) << 6) | cont(self.buf[p + 1]),
            0xE0..=0xEF => {
                ((b0 & 0x0F) << 12) | (cont(self.buf[p + 1]) << 6) | cont(self.buf[p + 2])
            }
            _ => {
                ((b0 & 0x07) << 18)
                    | (cont(self.buf[p + 1]) << 12)
                    | (cont(self.buf[p + 2]) << 6)
                    | cont(self.buf[p + 3])
            }
        }
    }

    /// Byte position where the code point ending at `p` starts.
    ///
    /// Walks back over at most three continuation bytes. `p` must be a
    /// character boundary greater than zero.
    fn prev_boundary(&self, p: u32) -> u32 {
        debug_assert!(p > 0, "no boundary before position 0");
        let mut q = p - 1;
        while q > 0 && is_continuation(self.buf[q as usize]) {
            q -= 1;
        }
        q
    }
}

/// Returns the number of bytes in the UTF-8 character starting with `byte`.
///
/// - `0xC0..=0xDF`: 2 bytes
/// - `0xE0..=0xEF`: 3 bytes
/// - `0xF0..=0xF7`: 4 bytes
/// - Everything else (ASCII, continuation, invalid): 1 byte
#[inline]
fn utf8_char_width(byte: u8) -> u32 {
    match byte {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

/// Returns `true` for UTF-8 continuation bytes (`0b10xx_xxxx`).
#[inline]
fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Low six payload bits of a continuation byte.
#[inline]
fn cont(byte: u8) -> u32 {
    u32::from(byte & 0x3F)
}
