//! Forward code-point cursor with bounded pushback.
//!
//! Scanners read strictly left to right. The only backwards motion is
//! [`Cursor::backup`], which may push back at most the code points consumed
//! since the last committed token boundary — enough to resolve the
//! lookahead ambiguities the scanners need (radix-literal prefixes,
//! dot-operator attempts) without ever seeking arbitrarily.
//!
//! EOF is represented as `None` from [`Cursor::read`] and is idempotent:
//! reading past the end repeatedly returns `None` without advancing.

/// Forward cursor over a source window.
///
/// The cursor tracks two byte offsets: the committed token start and the
/// current read position. [`Cursor::token_text`] yields the slice between
/// them, which becomes the text of the token being built.
///
/// The cursor is [`Copy`], enabling cheap snapshots.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Source window being scanned.
    input: &'a str,
    /// Byte offset of the current token start.
    start: u32,
    /// Current read position (byte offset).
    pos: u32,
}

/// Size assertion: &str = 16 (fat pointer), u32 + u32 = 8 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

#[allow(
    clippy::cast_possible_truncation,
    reason = "window length is bounded by u32 at construction; char widths are <= 4"
)]
impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `input`.
    ///
    /// # Panics
    ///
    /// Panics if the window is larger than `u32::MAX` bytes. Editor buffer
    /// windows are far below that.
    pub fn new(input: &'a str) -> Self {
        assert!(
            u32::try_from(input.len()).is_ok(),
            "source window exceeds u32 range"
        );
        Self {
            input,
            start: 0,
            pos: 0,
        }
    }

    /// Consume and return the next code point, or `None` at EOF.
    ///
    /// Reading at EOF is idempotent: the position does not advance.
    #[inline]
    pub fn read(&mut self) -> Option<char> {
        let c = self.input[self.pos as usize..].chars().next()?;
        self.pos += c.len_utf8() as u32;
        Some(c)
    }

    /// The next code point without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.input[self.pos as usize..].chars().next()
    }

    /// The code point after the next one, without consuming.
    #[inline]
    pub fn peek2(&self) -> Option<char> {
        self.input[self.pos as usize..].chars().nth(1)
    }

    /// Push back the last `n` code points returned by [`read`](Self::read).
    ///
    /// # Contract
    ///
    /// Only code points consumed since the last [`commit`](Self::commit) may
    /// be pushed back. Backing up past the token boundary is a programming
    /// error in the scanner, not a recoverable condition.
    pub fn backup(&mut self, n: usize) {
        for _ in 0..n {
            debug_assert!(self.pos > self.start, "backup past token boundary");
            self.pos -= 1;
            while !self.input.is_char_boundary(self.pos as usize) {
                self.pos -= 1;
            }
        }
    }

    /// Number of code points consumed since the last token boundary.
    ///
    /// Counts by walking the consumed slice, so the cost is linear in the
    /// token length. Hosts measuring tokens on a hot path should prefer the
    /// byte length of [`token_text`](Self::token_text); this accessor exists
    /// for hosts that address their buffers in code points.
    pub fn consumed_len(&self) -> usize {
        self.token_text().chars().count()
    }

    /// The text consumed since the last token boundary.
    #[inline]
    pub fn token_text(&self) -> &'a str {
        &self.input[self.start as usize..self.pos as usize]
    }

    /// Commit the current position as the next token boundary.
    #[inline]
    pub fn commit(&mut self) {
        self.start = self.pos;
    }

    /// Current read position (byte offset into the window).
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// `true` once every code point of the window has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos as usize >= self.input.len()
    }

    /// Consume code points while `pred` holds.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8() as u32;
        }
    }

    /// Advance to the earliest occurrence of one of three ASCII bytes,
    /// returning the matched character without consuming it. Returns `None`
    /// and positions the cursor at EOF when no needle occurs.
    ///
    /// SIMD-accelerated via `memchr3`; used to skip comment bodies, which
    /// are the longest uniform runs editor sources contain.
    ///
    /// # Contract
    ///
    /// All three needles must be ASCII so the found position is a character
    /// boundary.
    pub fn skip_to_any3(&mut self, a: u8, b: u8, c: u8) -> Option<char> {
        debug_assert!(a.is_ascii() && b.is_ascii() && c.is_ascii());
        let rest = &self.input.as_bytes()[self.pos as usize..];
        match memchr::memchr3(a, b, c, rest) {
            Some(offset) => {
                self.pos += offset as u32;
                Some(rest[offset] as char)
            }
            None => {
                self.pos = self.input.len() as u32;
                None
            }
        }
    }
}
