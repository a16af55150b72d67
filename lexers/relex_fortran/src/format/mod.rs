//! Source-form tracking: columns, blank-line-so-far, and the line width
//! limit.
//!
//! Fixed-form rules are column addressed, so the scanner keeps a 1-based
//! column for the next unread character alongside a flag saying whether the
//! current line is still blank. Both travel through the saved lexer state so
//! a resumed scanner mid-line keeps applying the column rules correctly.

/// Source-form settings for one lexing session.
#[derive(Clone, Copy, Debug)]
pub struct FortranConfig {
    /// Free form when `true`, fixed (column-addressed) form when `false`.
    pub free_format: bool,
    /// Text past this column turns into a forced line comment.
    pub max_column: u16,
}

impl Default for FortranConfig {
    fn default() -> Self {
        Self {
            free_format: true,
            max_column: 132,
        }
    }
}

impl FortranConfig {
    /// Fixed-form settings with the default width limit.
    #[must_use]
    pub fn fixed() -> Self {
        Self {
            free_format: false,
            ..Self::default()
        }
    }
}

/// Per-character column bookkeeping with an undo journal.
///
/// Every [`advance`](Self::advance) records the prior position so that
/// scanner backups can be mirrored with [`retreat`](Self::retreat). The
/// journal only spans the token being scanned; it is cleared on
/// [`commit`](Self::commit).
#[derive(Debug)]
pub struct FormatContext {
    free_format: bool,
    max_column: u16,
    column: u16,
    line_blank: bool,
    journal: Vec<(u16, bool)>,
}

impl FormatContext {
    #[must_use]
    pub fn new(config: &FortranConfig) -> Self {
        Self::resume(config, 1, true)
    }

    /// Rebuilds the context at a saved mid-line position.
    #[must_use]
    pub fn resume(config: &FortranConfig, column: u16, line_blank: bool) -> Self {
        Self {
            free_format: config.free_format,
            max_column: config.max_column,
            column: column.max(1),
            line_blank,
            journal: Vec::new(),
        }
    }

    #[must_use]
    pub fn free_format(&self) -> bool {
        self.free_format
    }

    /// 1-based column of the next unread character.
    #[must_use]
    pub fn column(&self) -> u16 {
        self.column
    }

    /// `true` while the current line holds only blanks so far.
    #[must_use]
    pub fn line_blank(&self) -> bool {
        self.line_blank
    }

    /// `true` once the next unread character would sit past the width limit.
    #[must_use]
    pub fn over_limit(&self) -> bool {
        self.column > self.max_column
    }

    /// Records one consumed character.
    pub fn advance(&mut self, c: char) {
        self.journal.push((self.column, self.line_blank));
        match c {
            '\n' => {
                self.column = 1;
                self.line_blank = true;
            }
            '\t' => {
                // A fixed-form tab in the label field jumps straight to the
                // statement field.
                if !self.free_format && self.column <= 6 {
                    self.column = 7;
                } else {
                    self.column = self.column.saturating_add(1);
                }
            }
            ' ' | '\r' => {
                self.column = self.column.saturating_add(1);
            }
            _ => {
                self.column = self.column.saturating_add(1);
                self.line_blank = false;
            }
        }
    }

    /// Rewinds the last `n` recorded characters.
    pub fn retreat(&mut self, n: usize) {
        debug_assert!(n <= self.journal.len());
        for _ in 0..n {
            if let Some((column, line_blank)) = self.journal.pop() {
                self.column = column;
                self.line_blank = line_blank;
            }
        }
    }

    /// Drops the undo journal at a token boundary.
    pub fn commit(&mut self) {
        self.journal.clear();
    }
}
