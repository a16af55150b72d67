//! Restartable Fortran token scanner.
//!
//! Handles both source forms. Free form is plain left-to-right scanning;
//! fixed form adds the column-addressed rules: a comment letter in column 1,
//! a continuation character in column 6 of an otherwise blank line prefix,
//! and tab expansion into the statement field. Text past the configured
//! width limit degrades to a forced line comment.
//!
//! The persisted state packs the local automaton together with the column
//! and the blank-line flag, so a scanner resumed mid-line keeps applying the
//! column rules exactly as the uninterrupted scan would.

use relex_core::{Cursor, KeywordFilter, LexerState, Scanner, Token};

use crate::format::{FormatContext, FortranConfig};
use crate::token_id::FortranTokenId;

/// Resume state persisted between buffer windows.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
enum FortranState {
    Init = 0,
    InLineCommentFixed = 1,
    InLineCommentFree = 2,
    /// Forced comment caused by the width limit; ends with the line.
    ForcedComment = 3,
    InStringSingle = 4,
    InStringDouble = 5,
    InStringSingleEscape = 6,
    InStringDoubleEscape = 7,
    /// The previous token was a word, so a directly following `'` is an
    /// apostrophe token rather than a character-literal opener.
    PendingApostrophe = 8,
    /// Inside a `B`/`O`/`Z` radix literal; base, quote kind, and validity so
    /// far travel in the payload bits.
    InRadix = 9,
}

impl FortranState {
    fn from_bits(bits: u32) -> Self {
        match bits {
            1 => FortranState::InLineCommentFixed,
            2 => FortranState::InLineCommentFree,
            3 => FortranState::ForcedComment,
            4 => FortranState::InStringSingle,
            5 => FortranState::InStringDouble,
            6 => FortranState::InStringSingleEscape,
            7 => FortranState::InStringDoubleEscape,
            8 => FortranState::PendingApostrophe,
            9 => FortranState::InRadix,
            _ => FortranState::Init,
        }
    }

    fn bits(self) -> u8 {
        self as u8
    }
}

/// Persisted-state layout: local automaton in the low bits, the
/// line-not-blank flag above it, the radix-literal payload next, the 1-based
/// column in the upper half.
const STATE_MASK: u32 = 0x1F;
const LINE_DIRTY: u32 = 1 << 5;
const RADIX_BASE_SHIFT: u32 = 6;
const RADIX_BASE_MASK: u32 = 0b11 << RADIX_BASE_SHIFT;
const RADIX_DOUBLE_QUOTE: u32 = 1 << 8;
const RADIX_INVALID: u32 = 1 << 9;
const COLUMN_SHIFT: u32 = 16;

/// Base of a `B`/`O`/`Z` radix literal.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
enum RadixBase {
    Binary = 0,
    Octal = 1,
    Hex = 2,
}

impl RadixBase {
    fn from_bits(bits: u32) -> Self {
        match bits {
            1 => RadixBase::Octal,
            2 => RadixBase::Hex,
            _ => RadixBase::Binary,
        }
    }

    fn digit_ok(self, c: char) -> bool {
        match self {
            RadixBase::Binary => matches!(c, '0' | '1'),
            RadixBase::Octal => matches!(c, '0'..='7'),
            RadixBase::Hex => c.is_ascii_hexdigit(),
        }
    }

    fn ids(self) -> (FortranTokenId, FortranTokenId) {
        match self {
            RadixBase::Binary => (
                FortranTokenId::BinaryLiteral,
                FortranTokenId::ErrInvalidBinaryLiteral,
            ),
            RadixBase::Octal => (
                FortranTokenId::OctalLiteral,
                FortranTokenId::ErrInvalidOctalLiteral,
            ),
            RadixBase::Hex => (
                FortranTokenId::HexLiteral,
                FortranTokenId::ErrInvalidHexLiteral,
            ),
        }
    }
}

/// A radix literal in flight, persisted across buffer windows.
#[derive(Clone, Copy, Debug)]
struct RadixRun {
    base: RadixBase,
    quote: char,
    invalid: bool,
}

fn is_word_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

fn is_word_part(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

fn is_exponent_letter(c: char) -> bool {
    matches!(c, 'e' | 'E' | 'd' | 'D' | 'q' | 'Q')
}

/// Hand-written scanner for Fortran source, fixed or free form.
pub struct FortranScanner<'a> {
    cursor: Cursor<'a>,
    filter: &'a dyn KeywordFilter<FortranTokenId>,
    state: FortranState,
    fmt: FormatContext,
    radix: RadixRun,
}

impl<'a> FortranScanner<'a> {
    pub fn new(
        input: &'a str,
        filter: &'a dyn KeywordFilter<FortranTokenId>,
        config: &FortranConfig,
    ) -> Self {
        Self::resume(input, filter, config, LexerState::INITIAL)
    }

    /// Construct over a later buffer window, continuing from a persisted
    /// state.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "the column occupies exactly the 16 bits above COLUMN_SHIFT"
    )]
    pub fn resume(
        input: &'a str,
        filter: &'a dyn KeywordFilter<FortranTokenId>,
        config: &FortranConfig,
        state: LexerState,
    ) -> Self {
        let bits = state.bits();
        let column = (bits >> COLUMN_SHIFT) as u16;
        let line_blank = bits & LINE_DIRTY == 0;
        Self {
            cursor: Cursor::new(input),
            filter,
            state: FortranState::from_bits(bits & STATE_MASK),
            fmt: FormatContext::resume(config, column, line_blank),
            radix: RadixRun {
                base: RadixBase::from_bits((bits & RADIX_BASE_MASK) >> RADIX_BASE_SHIFT),
                quote: if bits & RADIX_DOUBLE_QUOTE == 0 { '\'' } else { '"' },
                invalid: bits & RADIX_INVALID != 0,
            },
        }
    }

    /// Consume one code point, keeping the column bookkeeping in step.
    fn read(&mut self) -> Option<char> {
        let c = self.cursor.read();
        if let Some(c) = c {
            self.fmt.advance(c);
        }
        c
    }

    /// Push back the last `n` code points, column bookkeeping included.
    fn backup(&mut self, n: usize) {
        self.cursor.backup(n);
        self.fmt.retreat(n);
    }

    fn token(&self, id: FortranTokenId) -> Token<'a, FortranTokenId> {
        Token::new(id, self.cursor.token_text())
    }

    fn split(&mut self, id: FortranTokenId, state: FortranState) -> Token<'a, FortranTokenId> {
        self.state = state;
        Token::split(id, self.cursor.token_text())
    }

    /// Comment body up to (not including) the line end.
    fn finish_line_comment(
        &mut self,
        id: FortranTokenId,
        resume: FortranState,
    ) -> Token<'a, FortranTokenId> {
        loop {
            match self.cursor.peek() {
                None => return self.split(id, resume),
                Some('\n') => {
                    self.state = FortranState::Init;
                    return self.token(id);
                }
                Some(_) => {
                    self.read();
                }
            }
        }
    }

    /// Quoted literal body after the opening quote.
    ///
    /// Doubled quotes do not continue the literal: `"a"""` is two string
    /// tokens. A backslash escapes the next character; an unescaped line
    /// break abandons the literal as an incomplete-string error with the
    /// break pushed back.
    fn finish_string(&mut self, quote: char, pending_escape: bool) -> Token<'a, FortranTokenId> {
        let (open_state, escape_state) = if quote == '\'' {
            (FortranState::InStringSingle, FortranState::InStringSingleEscape)
        } else {
            (FortranState::InStringDouble, FortranState::InStringDoubleEscape)
        };
        if pending_escape && self.read().is_none() {
            return self.split(FortranTokenId::StringLiteral, escape_state);
        }
        loop {
            match self.read() {
                None => return self.split(FortranTokenId::StringLiteral, open_state),
                Some(c) if c == quote => {
                    self.state = FortranState::Init;
                    return self.token(FortranTokenId::StringLiteral);
                }
                Some('\\') => {
                    if self.read().is_none() {
                        return self.split(FortranTokenId::StringLiteral, escape_state);
                    }
                }
                Some('\n' | '\r') => {
                    self.backup(1);
                    self.state = FortranState::Init;
                    return self.token(FortranTokenId::ErrIncompleteStringLiteral);
                }
                Some(_) => {}
            }
        }
    }

    /// Radix literal opener: the prefix letter is consumed, the quote and a
    /// first hex digit are known to follow.
    fn finish_radix(&mut self, prefix: char) -> Token<'a, FortranTokenId> {
        let base = match prefix.to_ascii_lowercase() {
            'b' => RadixBase::Binary,
            'o' => RadixBase::Octal,
            _ => RadixBase::Hex,
        };
        let quote = match self.read() {
            Some(q) => q,
            None => return self.token(FortranTokenId::Identifier),
        };
        self.radix = RadixRun {
            base,
            quote,
            invalid: false,
        };
        self.finish_radix_body()
    }

    /// Digits of a radix literal up to the closing quote. Digits outside the
    /// base degrade the whole literal to its error kind; a line end before
    /// the close does the same, while buffer end suspends the literal.
    fn finish_radix_body(&mut self) -> Token<'a, FortranTokenId> {
        let (ok_id, err_id) = self.radix.base.ids();
        loop {
            // Crossing the width limit abandons the literal; the line tail
            // becomes a forced comment on the next call.
            if self.fmt.over_limit() {
                self.state = FortranState::Init;
                return self.token(err_id);
            }
            match self.read() {
                None => {
                    let id = if self.radix.invalid { err_id } else { ok_id };
                    return self.split(id, FortranState::InRadix);
                }
                Some(c) if c == self.radix.quote => {
                    self.state = FortranState::Init;
                    return self.token(if self.radix.invalid { err_id } else { ok_id });
                }
                Some('\n' | '\r') => {
                    self.backup(1);
                    self.state = FortranState::Init;
                    return self.token(err_id);
                }
                Some(c) => {
                    if !self.radix.base.digit_ok(c) {
                        self.radix.invalid = true;
                    }
                }
            }
        }
    }

    fn eat_digits(&mut self) {
        while !self.fmt.over_limit()
            && matches!(self.cursor.peek(), Some(c) if c.is_ascii_digit())
        {
            self.read();
        }
    }

    /// Optional `_kind` suffix on a numeric literal.
    fn eat_kind_suffix(&mut self) {
        if !self.fmt.over_limit() && self.cursor.peek() == Some('_') {
            self.read();
            while !self.fmt.over_limit()
                && matches!(self.cursor.peek(), Some(c) if is_word_part(c))
            {
                self.read();
            }
        }
    }

    /// Exponent attempt after the mantissa. Consumes nothing unless the
    /// exponent has at least one digit.
    fn eat_exponent(&mut self) -> bool {
        if self.fmt.over_limit() {
            return false;
        }
        if !matches!(self.cursor.peek(), Some(c) if is_exponent_letter(c)) {
            return false;
        }
        self.read();
        let mut taken = 1;
        if matches!(self.cursor.peek(), Some('+' | '-')) {
            self.read();
            taken += 1;
        }
        if matches!(self.cursor.peek(), Some(c) if c.is_ascii_digit()) {
            self.eat_digits();
            true
        } else {
            self.backup(taken);
            false
        }
    }

    /// Fraction digits after the decimal point, then exponent and kind.
    fn finish_real(&mut self) -> Token<'a, FortranTokenId> {
        self.eat_digits();
        self.eat_exponent();
        self.eat_kind_suffix();
        self.token(FortranTokenId::RealLiteral)
    }

    /// Numeric literal starting with a digit.
    fn finish_number(&mut self) -> Token<'a, FortranTokenId> {
        self.eat_digits();
        // Crossing the width limit closes the number; the line tail becomes
        // a forced comment on the next call.
        if self.fmt.over_limit() {
            return self.token(FortranTokenId::IntLiteral);
        }
        match self.cursor.peek() {
            Some('.') => {
                self.read();
                match self.cursor.peek() {
                    // A letter after the point starts a dot operator
                    // (`1.gt.2`), so the point is not part of the number.
                    Some(c) if c.is_alphabetic() => {
                        self.backup(1);
                        self.token(FortranTokenId::IntLiteral)
                    }
                    Some(c) if c.is_ascii_digit() => self.finish_real(),
                    _ => self.finish_real(),
                }
            }
            Some(c) if is_exponent_letter(c) => {
                if self.eat_exponent() {
                    self.eat_kind_suffix();
                    self.token(FortranTokenId::RealLiteral)
                } else {
                    self.token(FortranTokenId::IntLiteral)
                }
            }
            Some('_') => {
                self.eat_kind_suffix();
                // A point after the kind cannot continue the number.
                if self.cursor.peek() == Some('.') {
                    self.token(FortranTokenId::ErrInvalidInteger)
                } else {
                    self.token(FortranTokenId::IntLiteral)
                }
            }
            _ => self.token(FortranTokenId::IntLiteral),
        }
    }

    /// Classify the letters of a dot-operator attempt.
    fn dot_operator(lower: &str) -> Option<FortranTokenId> {
        Some(match lower {
            "eq" => FortranTokenId::DotEq,
            "ne" => FortranTokenId::DotNe,
            "lt" => FortranTokenId::DotLt,
            "le" => FortranTokenId::DotLe,
            "gt" => FortranTokenId::DotGt,
            "ge" => FortranTokenId::DotGe,
            "not" => FortranTokenId::DotNot,
            "and" => FortranTokenId::DotAnd,
            "or" => FortranTokenId::DotOr,
            "eqv" => FortranTokenId::DotEqv,
            "neqv" => FortranTokenId::DotNeqv,
            "true" => FortranTokenId::DotTrue,
            "false" => FortranTokenId::DotFalse,
            _ => return None,
        })
    }

    /// `.` was consumed: dot operator, real fraction, or a bare point.
    fn finish_dot(&mut self) -> Token<'a, FortranTokenId> {
        let mut letters = String::new();
        loop {
            if self.fmt.over_limit() {
                break;
            }
            match self.cursor.peek() {
                Some(c) if c.is_ascii_alphabetic() && letters.len() < 5 => {
                    self.read();
                    letters.push(c.to_ascii_lowercase());
                }
                Some('.') if !letters.is_empty() => {
                    self.read();
                    if let Some(id) = Self::dot_operator(&letters) {
                        return self.token(id);
                    }
                    // `.xyz.` is no operator; re-lex from after the first
                    // point.
                    self.backup(letters.len() + 1);
                    return self.token(FortranTokenId::Dot);
                }
                _ => break,
            }
        }
        if letters.is_empty() && matches!(self.cursor.peek(), Some(c) if c.is_ascii_digit()) {
            return self.finish_real();
        }
        self.backup(letters.len());
        self.token(FortranTokenId::Dot)
    }

    /// Identifier or keyword; the following token may be an apostrophe.
    fn finish_word(&mut self) -> Token<'a, FortranTokenId> {
        // The width limit closes the word mid-run; the tail is dead text.
        while !self.fmt.over_limit()
            && matches!(self.cursor.peek(), Some(c) if is_word_part(c))
        {
            self.read();
        }
        let text = self.cursor.token_text();
        let id = self
            .filter
            .check(text)
            .unwrap_or(FortranTokenId::Identifier);
        self.state = if self.fmt.over_limit() {
            FortranState::Init
        } else {
            FortranState::PendingApostrophe
        };
        Token::new(id, text)
    }

    fn finish_blank_run(&mut self) -> Token<'a, FortranTokenId> {
        while !self.fmt.over_limit() && matches!(self.cursor.peek(), Some(' ' | '\t' | '\r')) {
            self.read();
        }
        self.token(FortranTokenId::Whitespace)
    }

    /// One token from the initial state; `c` was read at column `col` with
    /// the line blank so far iff `line_blank`.
    #[allow(
        clippy::too_many_lines,
        reason = "single flat dispatch over every leading character class"
    )]
    fn dispatch(&mut self, c: char, col: u16, line_blank: bool) -> Token<'a, FortranTokenId> {
        let fixed = !self.fmt.free_format();

        // Column-addressed fixed-form rules come before everything else.
        if fixed && col == 1 && matches!(c, 'c' | 'C' | '*') {
            return self.finish_line_comment(
                FortranTokenId::LineCommentFixed,
                FortranState::InLineCommentFixed,
            );
        }
        if fixed
            && col == 6
            && line_blank
            && !matches!(c, ' ' | '\t' | '0' | '\n' | '\r')
        {
            return self.token(FortranTokenId::LineContinuationFixed);
        }

        match c {
            ' ' | '\t' | '\r' => self.finish_blank_run(),
            '\n' => self.token(FortranTokenId::NewLine),
            '!' => self.finish_line_comment(
                FortranTokenId::LineCommentFree,
                FortranState::InLineCommentFree,
            ),
            '\'' | '"' => self.finish_string(c, false),
            '0'..='9' => self.finish_number(),
            'b' | 'B' | 'o' | 'O' | 'z' | 'Z'
                if matches!(self.cursor.peek(), Some('\'' | '"'))
                    && matches!(self.cursor.peek2(), Some(d) if d.is_ascii_hexdigit()) =>
            {
                self.finish_radix(c)
            }
            '.' => self.finish_dot(),
            '*' => {
                if self.cursor.peek() == Some('*') {
                    self.read();
                    self.token(FortranTokenId::Power)
                } else {
                    self.token(FortranTokenId::Star)
                }
            }
            '/' => match self.cursor.peek() {
                Some('/') => {
                    self.read();
                    self.token(FortranTokenId::Concat)
                }
                Some('=') => {
                    self.read();
                    self.token(FortranTokenId::SlashEq)
                }
                _ => self.token(FortranTokenId::Slash),
            },
            '=' => match self.cursor.peek() {
                Some('=') => {
                    self.read();
                    self.token(FortranTokenId::EqEq)
                }
                Some('>') => {
                    self.read();
                    self.token(FortranTokenId::EqGt)
                }
                _ => self.token(FortranTokenId::Eq),
            },
            '<' => {
                if self.cursor.peek() == Some('=') {
                    self.read();
                    self.token(FortranTokenId::LtEq)
                } else {
                    self.token(FortranTokenId::Lt)
                }
            }
            '>' => {
                if self.cursor.peek() == Some('=') {
                    self.read();
                    self.token(FortranTokenId::GtEq)
                } else {
                    self.token(FortranTokenId::Gt)
                }
            }
            ':' => {
                if self.cursor.peek() == Some(':') {
                    self.read();
                    self.token(FortranTokenId::DoubleColon)
                } else {
                    self.token(FortranTokenId::Colon)
                }
            }
            '+' => self.token(FortranTokenId::Plus),
            '-' => self.token(FortranTokenId::Minus),
            '(' => self.token(FortranTokenId::LParen),
            ')' => self.token(FortranTokenId::RParen),
            ',' => self.token(FortranTokenId::Comma),
            ';' => self.token(FortranTokenId::Semicolon),
            '%' => self.token(FortranTokenId::Percent),
            '&' => self.token(FortranTokenId::Amp),
            c if is_word_start(c) => self.finish_word(),
            _ => self.token(FortranTokenId::ErrInvalidChar),
        }
    }
}

impl<'a> Scanner<'a> for FortranScanner<'a> {
    type Id = FortranTokenId;

    fn next_token(&mut self) -> Option<Token<'a, FortranTokenId>> {
        self.cursor.commit();
        self.fmt.commit();
        if self.cursor.is_eof() {
            return None;
        }
        match self.state {
            FortranState::Init => {}
            FortranState::InLineCommentFixed => {
                return Some(self.finish_line_comment(
                    FortranTokenId::LineCommentFixed,
                    FortranState::InLineCommentFixed,
                ));
            }
            FortranState::InLineCommentFree => {
                return Some(self.finish_line_comment(
                    FortranTokenId::LineCommentFree,
                    FortranState::InLineCommentFree,
                ));
            }
            FortranState::ForcedComment => {
                return Some(self.finish_line_comment(
                    FortranTokenId::LineCommentFixed,
                    FortranState::ForcedComment,
                ));
            }
            FortranState::InStringSingle => return Some(self.finish_string('\'', false)),
            FortranState::InStringDouble => return Some(self.finish_string('"', false)),
            FortranState::InStringSingleEscape => return Some(self.finish_string('\'', true)),
            FortranState::InStringDoubleEscape => return Some(self.finish_string('"', true)),
            FortranState::InRadix => return Some(self.finish_radix_body()),
            FortranState::PendingApostrophe => {
                self.state = FortranState::Init;
                if self.cursor.peek() == Some('\'') {
                    self.read();
                    return Some(self.token(FortranTokenId::ApostropheChar));
                }
            }
        }
        // Past the width limit the rest of the line is dead text.
        if self.fmt.over_limit() && !matches!(self.cursor.peek(), Some('\n')) {
            return Some(self.finish_line_comment(
                FortranTokenId::LineCommentFixed,
                FortranState::ForcedComment,
            ));
        }
        let col = self.fmt.column();
        let line_blank = self.fmt.line_blank();
        let c = self.read()?;
        Some(self.dispatch(c, col, line_blank))
    }

    fn state(&self) -> LexerState {
        let mut bits = u32::from(self.state.bits());
        if !self.fmt.line_blank() {
            bits |= LINE_DIRTY;
        }
        if self.state == FortranState::InRadix {
            bits |= u32::from(self.radix.base as u8) << RADIX_BASE_SHIFT;
            if self.radix.quote == '"' {
                bits |= RADIX_DOUBLE_QUOTE;
            }
            if self.radix.invalid {
                bits |= RADIX_INVALID;
            }
        }
        bits |= u32::from(self.fmt.column()) << COLUMN_SHIFT;
        LexerState::from_bits(bits)
    }
}
