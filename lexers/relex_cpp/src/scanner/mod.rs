//! Restartable C/C++ token scanner.
//!
//! One token per call, dispatched on the first character. The scanner never
//! fails: malformed input degrades to error-kind tokens or split tokens
//! ([`Part::Start`](relex_core::Part)), and the host re-requests completion
//! from a later buffer using the persisted [`LexerState`].
//!
//! Escaped newlines (`\` followed by a line break) are transparent inside
//! identifiers, literals, and directives: `ch\`⏎`ar` still classifies as the
//! `char` keyword, while its token text keeps the raw spelling.

use relex_core::{Cursor, KeywordFilter, LexerState, Scanner, Token};

use crate::token_id::CppTokenId;

/// Resume state persisted between buffer windows.
///
/// `Init` means no construct is open. Every other variant names the
/// construct a previous window left unfinished.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub(crate) enum CppState {
    Init = 0,
    InLineComment = 1,
    InDoxygenLineComment = 2,
    InBlockComment = 3,
    InDoxygenComment = 4,
    InString = 5,
    InStringEscape = 6,
    InChar = 7,
    InCharEscape = 8,
    InRawString = 9,
    InDirective = 10,
    InDirectiveComment = 11,
    InDirectiveLineComment = 12,
    InDirectiveString = 13,
    InDirectiveStringEscape = 14,
    InDirectiveChar = 15,
    InDirectiveCharEscape = 16,
    InSysInclude = 17,
    InUserInclude = 18,
}

impl CppState {
    pub(crate) fn from_bits(bits: u32) -> Self {
        match bits {
            1 => CppState::InLineComment,
            2 => CppState::InDoxygenLineComment,
            3 => CppState::InBlockComment,
            4 => CppState::InDoxygenComment,
            5 => CppState::InString,
            6 => CppState::InStringEscape,
            7 => CppState::InChar,
            8 => CppState::InCharEscape,
            9 => CppState::InRawString,
            10 => CppState::InDirective,
            11 => CppState::InDirectiveComment,
            12 => CppState::InDirectiveLineComment,
            13 => CppState::InDirectiveString,
            14 => CppState::InDirectiveStringEscape,
            15 => CppState::InDirectiveChar,
            16 => CppState::InDirectiveCharEscape,
            17 => CppState::InSysInclude,
            18 => CppState::InUserInclude,
            _ => CppState::Init,
        }
    }

    pub(crate) fn bits(self) -> u8 {
        self as u8
    }
}

/// Whether the scanner treats `#` as the start of a whole-line directive
/// token or lexes directive content token by token (for the wrapping
/// preprocessor scanner).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Mode {
    Source,
    Directive,
}

/// Outcome of skipping a quoted literal embedded in a directive body.
enum DirectiveLiteral {
    Closed,
    LineEnd,
    Eof,
    EofEscape,
}

/// Outcome of skipping a line comment embedded in a directive body.
enum DirectiveLineComment {
    Newline,
    Eof,
}

fn is_ident_start(c: char) -> bool {
    c == '_' || c == '$' || c.is_alphabetic()
}

fn is_ident_part(c: char) -> bool {
    c == '_' || c == '$' || c.is_alphanumeric()
}

/// Hand-written scanner for C and C++ source.
///
/// The keyword filter decides which spellings are live, so the same scanner
/// serves both languages: construct it with [`CppKeywords`](crate::CppKeywords)
/// or [`CKeywords`](crate::CKeywords).
pub struct CppScanner<'a> {
    cursor: Cursor<'a>,
    filter: &'a dyn KeywordFilter<CppTokenId>,
    state: CppState,
    mode: Mode,
    /// Inside an `#include` directive: `<...>` and `"..."` are include
    /// targets rather than operator/literal sequences.
    in_include: bool,
    /// Escape-stripped spelling of the last identifier, used for keyword
    /// classification while the token keeps its raw slice.
    scratch: String,
}

impl<'a> CppScanner<'a> {
    pub fn new(input: &'a str, filter: &'a dyn KeywordFilter<CppTokenId>) -> Self {
        Self::resume(input, filter, LexerState::INITIAL)
    }

    /// Construct over a later buffer window, continuing from a persisted
    /// state.
    pub fn resume(
        input: &'a str,
        filter: &'a dyn KeywordFilter<CppTokenId>,
        state: LexerState,
    ) -> Self {
        Self {
            cursor: Cursor::new(input),
            filter,
            state: CppState::from_bits(state.bits()),
            mode: Mode::Source,
            in_include: false,
            scratch: String::new(),
        }
    }

    pub(crate) fn directive_mode(
        input: &'a str,
        filter: &'a dyn KeywordFilter<CppTokenId>,
        state: LexerState,
    ) -> Self {
        let mut scanner = Self::resume(input, filter, state);
        scanner.mode = Mode::Directive;
        scanner
    }

    pub(crate) fn set_include_scan(&mut self, on: bool) {
        self.in_include = on;
    }

    /// Escape-stripped text of the most recent identifier token.
    pub(crate) fn last_word(&self) -> &str {
        &self.scratch
    }

    fn token(&self, id: CppTokenId) -> Token<'a, CppTokenId> {
        Token::new(id, self.cursor.token_text())
    }

    fn split(&mut self, id: CppTokenId, state: CppState) -> Token<'a, CppTokenId> {
        self.state = state;
        Token::split(id, self.cursor.token_text())
    }

    /// Consume a line break following a just-read backslash, if any.
    fn eat_escaped_newline(&mut self) {
        match self.cursor.peek() {
            Some('\n') => {
                self.cursor.read();
            }
            Some('\r') => {
                self.cursor.read();
                if self.cursor.peek() == Some('\n') {
                    self.cursor.read();
                }
            }
            _ => {}
        }
    }

    fn finish_slash(&mut self) -> Token<'a, CppTokenId> {
        match self.cursor.peek() {
            Some('/') => {
                self.cursor.read();
                let id = match self.cursor.peek() {
                    Some('/' | '!') => CppTokenId::DoxygenLineComment,
                    _ => CppTokenId::LineComment,
                };
                self.finish_line_comment(id)
            }
            Some('*') => {
                self.cursor.read();
                match self.cursor.peek() {
                    Some('*') => {
                        self.cursor.read();
                        if self.cursor.peek() == Some('/') {
                            // `/**/` is an ordinary empty block comment
                            self.cursor.read();
                            self.token(CppTokenId::BlockComment)
                        } else {
                            self.finish_block_comment(CppTokenId::DoxygenComment)
                        }
                    }
                    Some('!') => self.finish_block_comment(CppTokenId::DoxygenComment),
                    _ => self.finish_block_comment(CppTokenId::BlockComment),
                }
            }
            Some('=') => {
                self.cursor.read();
                self.token(CppTokenId::SlashEq)
            }
            _ => self.token(CppTokenId::Slash),
        }
    }

    /// Body of a line comment. The terminating newline is not part of the
    /// comment; escaped newlines continue it.
    fn finish_line_comment(&mut self, id: CppTokenId) -> Token<'a, CppTokenId> {
        loop {
            match self.cursor.skip_to_any3(b'\n', b'\r', b'\\') {
                None => {
                    let resume = if id == CppTokenId::DoxygenLineComment {
                        CppState::InDoxygenLineComment
                    } else {
                        CppState::InLineComment
                    };
                    return self.split(id, resume);
                }
                Some('\\') => {
                    self.cursor.read();
                    self.eat_escaped_newline();
                }
                Some(_) => {
                    self.state = CppState::Init;
                    return self.token(id);
                }
            }
        }
    }

    /// Body of a block comment, after the opening has been consumed.
    fn finish_block_comment(&mut self, id: CppTokenId) -> Token<'a, CppTokenId> {
        loop {
            match self.cursor.skip_to_any3(b'*', b'*', b'*') {
                None => {
                    let resume = if id == CppTokenId::DoxygenComment {
                        CppState::InDoxygenComment
                    } else {
                        CppState::InBlockComment
                    };
                    return self.split(id, resume);
                }
                Some(_) => {
                    self.cursor.read();
                    if self.cursor.peek() == Some('/') {
                        self.cursor.read();
                        self.state = CppState::Init;
                        return self.token(id);
                    }
                }
            }
        }
    }

    /// Quoted literal body after the opening quote. An escaped newline
    /// continues the literal; an unescaped one abandons it as a split token
    /// with the newline left for the next call.
    fn finish_text_literal(&mut self, quote: char, pending_escape: bool) -> Token<'a, CppTokenId> {
        let (id, open_state, escape_state) = if quote == '"' {
            (
                CppTokenId::StringLiteral,
                CppState::InString,
                CppState::InStringEscape,
            )
        } else {
            (
                CppTokenId::CharLiteral,
                CppState::InChar,
                CppState::InCharEscape,
            )
        };
        if pending_escape {
            match self.cursor.read() {
                None => return self.split(id, escape_state),
                Some('\r') => {
                    if self.cursor.peek() == Some('\n') {
                        self.cursor.read();
                    }
                }
                Some(_) => {}
            }
        }
        loop {
            match self.cursor.read() {
                None => return self.split(id, open_state),
                Some(c) if c == quote => {
                    self.state = CppState::Init;
                    return self.token(id);
                }
                Some('\\') => match self.cursor.read() {
                    None => return self.split(id, escape_state),
                    Some('\r') => {
                        if self.cursor.peek() == Some('\n') {
                            self.cursor.read();
                        }
                    }
                    Some(_) => {}
                },
                Some('\n' | '\r') => {
                    self.cursor.backup(1);
                    self.state = CppState::Init;
                    return Token::split(id, self.cursor.token_text());
                }
                Some(_) => {}
            }
        }
    }

    /// Raw string after the opening quote: `delim ( body ) delim "`.
    fn finish_raw_string(&mut self) -> Token<'a, CppTokenId> {
        let mut delim = String::new();
        loop {
            match self.cursor.read() {
                None => return self.split(CppTokenId::RawStringLiteral, CppState::InRawString),
                Some('(') => break,
                Some('\n' | '\r') => {
                    // malformed header; give up at the line break
                    self.cursor.backup(1);
                    self.state = CppState::Init;
                    return Token::split(CppTokenId::RawStringLiteral, self.cursor.token_text());
                }
                Some(c) => delim.push(c),
            }
        }
        loop {
            match self.cursor.skip_to_any3(b')', b')', b')') {
                None => return self.split(CppTokenId::RawStringLiteral, CppState::InRawString),
                Some(_) => {
                    self.cursor.read();
                    let mark = self.cursor;
                    if self.match_raw_close(&delim) {
                        self.state = CppState::Init;
                        return self.token(CppTokenId::RawStringLiteral);
                    }
                    self.cursor = mark;
                }
            }
        }
    }

    fn match_raw_close(&mut self, delim: &str) -> bool {
        for d in delim.chars() {
            if self.cursor.peek() == Some(d) {
                self.cursor.read();
            } else {
                return false;
            }
        }
        if self.cursor.peek() == Some('"') {
            self.cursor.read();
            true
        } else {
            false
        }
    }

    /// Continuation of a raw string split by a buffer boundary. The close
    /// delimiter does not survive the packed state, so the continuation runs
    /// to the next quote.
    fn resume_raw_string(&mut self) -> Token<'a, CppTokenId> {
        match self.cursor.skip_to_any3(b'"', b'"', b'"') {
            None => self.split(CppTokenId::RawStringLiteral, CppState::InRawString),
            Some(_) => {
                self.cursor.read();
                self.state = CppState::Init;
                self.token(CppTokenId::RawStringLiteral)
            }
        }
    }

    /// Identifier tail plus keyword classification over the escape-stripped
    /// spelling.
    fn finish_identifier(&mut self) -> Token<'a, CppTokenId> {
        loop {
            match self.cursor.peek() {
                Some(c) if is_ident_part(c) => {
                    self.cursor.read();
                }
                Some('\\') if matches!(self.cursor.peek2(), Some('\n' | '\r')) => {
                    self.cursor.read();
                    self.eat_escaped_newline();
                }
                _ => break,
            }
        }
        let raw = self.cursor.token_text();
        self.scratch.clear();
        if raw.contains('\\') {
            let mut chars = raw.chars().peekable();
            while let Some(c) = chars.next() {
                if c == '\\' {
                    match chars.peek() {
                        Some('\n') => {
                            chars.next();
                            continue;
                        }
                        Some('\r') => {
                            chars.next();
                            if chars.peek() == Some(&'\n') {
                                chars.next();
                            }
                            continue;
                        }
                        _ => {}
                    }
                }
                self.scratch.push(c);
            }
        } else {
            self.scratch.push_str(raw);
        }
        match self.filter.check(&self.scratch) {
            Some(id) => Token::new(id, raw),
            None => Token::new(CppTokenId::Identifier, raw),
        }
    }

    /// `L`/`u`/`U` may prefix a string, char, or raw string literal.
    fn finish_prefix_or_identifier(&mut self, first: char) -> Token<'a, CppTokenId> {
        match self.cursor.peek() {
            Some('"') => {
                self.cursor.read();
                return self.finish_text_literal('"', false);
            }
            Some('\'') => {
                self.cursor.read();
                return self.finish_text_literal('\'', false);
            }
            Some('R') if self.cursor.peek2() == Some('"') => {
                self.cursor.read();
                self.cursor.read();
                return self.finish_raw_string();
            }
            Some('8') if first == 'u' => {
                self.cursor.read();
                match self.cursor.peek() {
                    Some('"') => {
                        self.cursor.read();
                        return self.finish_text_literal('"', false);
                    }
                    Some('\'') => {
                        self.cursor.read();
                        return self.finish_text_literal('\'', false);
                    }
                    Some('R') if self.cursor.peek2() == Some('"') => {
                        self.cursor.read();
                        self.cursor.read();
                        return self.finish_raw_string();
                    }
                    _ => {}
                }
            }
            _ => {}
        }
        self.finish_identifier()
    }

    fn finish_number(&mut self, first: char) -> Token<'a, CppTokenId> {
        if first == '0' && matches!(self.cursor.peek(), Some('x' | 'X')) {
            self.cursor.read();
            self.cursor.eat_while(|c| c.is_ascii_hexdigit());
            return self.finish_int_suffix();
        }
        self.cursor.eat_while(|c| c.is_ascii_digit());
        if self.cursor.peek() == Some('.') {
            self.cursor.read();
            return self.finish_fraction();
        }
        if matches!(self.cursor.peek(), Some('e' | 'E')) {
            return self.finish_exponent();
        }
        self.finish_int_suffix()
    }

    /// Digits after the decimal point, then exponent and suffix.
    fn finish_fraction(&mut self) -> Token<'a, CppTokenId> {
        self.cursor.eat_while(|c| c.is_ascii_digit());
        if matches!(self.cursor.peek(), Some('e' | 'E')) {
            return self.finish_exponent();
        }
        self.finish_float_suffix()
    }

    /// An exponent needs a digit after the optional sign; otherwise the `e`
    /// belongs to a following identifier and the number closes without it.
    fn finish_exponent(&mut self) -> Token<'a, CppTokenId> {
        let mark = self.cursor;
        self.cursor.read();
        if matches!(self.cursor.peek(), Some('+' | '-')) {
            self.cursor.read();
        }
        if matches!(self.cursor.peek(), Some(c) if c.is_ascii_digit()) {
            self.cursor.eat_while(|c| c.is_ascii_digit());
            self.finish_float_suffix()
        } else {
            self.cursor = mark;
            if self.cursor.token_text().contains('.') {
                self.finish_float_suffix()
            } else {
                self.finish_int_suffix()
            }
        }
    }

    fn finish_float_suffix(&mut self) -> Token<'a, CppTokenId> {
        let id = match self.cursor.peek() {
            Some('f' | 'F') => {
                self.cursor.read();
                CppTokenId::FloatLiteral
            }
            Some('l' | 'L') => {
                self.cursor.read();
                CppTokenId::DoubleLiteral
            }
            _ => CppTokenId::DoubleLiteral,
        };
        self.token(id)
    }

    /// Integer suffix: at most one `u`/`U` and up to two `l`/`L`, in any
    /// order.
    fn finish_int_suffix(&mut self) -> Token<'a, CppTokenId> {
        let mut unsigned = false;
        let mut longs = 0u8;
        loop {
            match self.cursor.peek() {
                Some('u' | 'U') if !unsigned => {
                    self.cursor.read();
                    unsigned = true;
                }
                Some('l' | 'L') if longs < 2 => {
                    self.cursor.read();
                    longs += 1;
                }
                _ => break,
            }
        }
        let id = match (unsigned, longs) {
            (false, 0) => CppTokenId::IntLiteral,
            (false, 1) => CppTokenId::LongLiteral,
            (false, _) => CppTokenId::LongLongLiteral,
            (true, 0) => CppTokenId::UnsignedLiteral,
            (true, 1) => CppTokenId::UnsignedLongLiteral,
            (true, _) => CppTokenId::UnsignedLongLongLiteral,
        };
        self.token(id)
    }

    /// Rest of the physical line as one directive token, skipping nested
    /// comments and literals so their content cannot terminate the line
    /// early. The terminating newline is part of the token.
    fn finish_directive_body(&mut self) -> Token<'a, CppTokenId> {
        loop {
            let Some(c) = self.cursor.read() else {
                return self.split(CppTokenId::PreprocessorDirective, CppState::InDirective);
            };
            match c {
                '\n' => break,
                '\r' => {
                    if self.cursor.peek() == Some('\n') {
                        self.cursor.read();
                    }
                    break;
                }
                '\\' => self.eat_escaped_newline(),
                '/' => match self.cursor.peek() {
                    Some('*') => {
                        self.cursor.read();
                        if !self.skip_directive_block_comment() {
                            return self.split(
                                CppTokenId::PreprocessorDirective,
                                CppState::InDirectiveComment,
                            );
                        }
                    }
                    Some('/') => {
                        self.cursor.read();
                        match self.skip_directive_line_comment() {
                            DirectiveLineComment::Newline => break,
                            DirectiveLineComment::Eof => {
                                return self.split(
                                    CppTokenId::PreprocessorDirective,
                                    CppState::InDirectiveLineComment,
                                );
                            }
                        }
                    }
                    _ => {}
                },
                '"' => {
                    if let Some(token) = self.directive_literal_outcome('"') {
                        return token;
                    }
                }
                '\'' => {
                    if let Some(token) = self.directive_literal_outcome('\'') {
                        return token;
                    }
                }
                _ => {}
            }
        }
        self.state = CppState::Init;
        self.token(CppTokenId::PreprocessorDirective)
    }

    /// Skip a literal inside a directive; `Some(token)` means the buffer
    /// ended inside it and a split token must be emitted.
    fn directive_literal_outcome(&mut self, quote: char) -> Option<Token<'a, CppTokenId>> {
        let (open_state, escape_state) = if quote == '"' {
            (CppState::InDirectiveString, CppState::InDirectiveStringEscape)
        } else {
            (CppState::InDirectiveChar, CppState::InDirectiveCharEscape)
        };
        match self.skip_directive_literal(quote) {
            DirectiveLiteral::Closed | DirectiveLiteral::LineEnd => None,
            DirectiveLiteral::Eof => {
                Some(self.split(CppTokenId::PreprocessorDirective, open_state))
            }
            DirectiveLiteral::EofEscape => {
                Some(self.split(CppTokenId::PreprocessorDirective, escape_state))
            }
        }
    }

    /// Skip to the literal's closing quote. An unescaped line break leaves
    /// the break unconsumed and ends the literal (the directive then
    /// terminates through its normal newline rule).
    fn skip_directive_literal(&mut self, quote: char) -> DirectiveLiteral {
        loop {
            match self.cursor.read() {
                None => return DirectiveLiteral::Eof,
                Some(c) if c == quote => return DirectiveLiteral::Closed,
                Some('\\') => match self.cursor.read() {
                    None => return DirectiveLiteral::EofEscape,
                    Some('\r') => {
                        if self.cursor.peek() == Some('\n') {
                            self.cursor.read();
                        }
                    }
                    Some(_) => {}
                },
                Some('\n' | '\r') => {
                    self.cursor.backup(1);
                    return DirectiveLiteral::LineEnd;
                }
                Some(_) => {}
            }
        }
    }

    /// `true` when the comment closed within this buffer.
    fn skip_directive_block_comment(&mut self) -> bool {
        loop {
            match self.cursor.skip_to_any3(b'*', b'*', b'*') {
                None => return false,
                Some(_) => {
                    self.cursor.read();
                    if self.cursor.peek() == Some('/') {
                        self.cursor.read();
                        return true;
                    }
                }
            }
        }
    }

    /// Line comment inside a directive: the newline that closes the comment
    /// closes the directive too, unless escaped.
    fn skip_directive_line_comment(&mut self) -> DirectiveLineComment {
        loop {
            match self.cursor.skip_to_any3(b'\n', b'\r', b'\\') {
                None => return DirectiveLineComment::Eof,
                Some('\\') => {
                    self.cursor.read();
                    self.eat_escaped_newline();
                }
                Some('\r') => {
                    self.cursor.read();
                    if self.cursor.peek() == Some('\n') {
                        self.cursor.read();
                    }
                    return DirectiveLineComment::Newline;
                }
                Some(_) => {
                    self.cursor.read();
                    return DirectiveLineComment::Newline;
                }
            }
        }
    }

    /// Include target: everything up to the closing delimiter, the end of
    /// the line, or the end of the buffer.
    fn finish_include(&mut self, id: CppTokenId, close: char) -> Token<'a, CppTokenId> {
        loop {
            match self.cursor.read() {
                None => {
                    let resume = if close == '>' {
                        CppState::InSysInclude
                    } else {
                        CppState::InUserInclude
                    };
                    return self.split(id, resume);
                }
                Some(c) if c == close => break,
                Some('\\') => self.eat_escaped_newline(),
                Some('\n') => {
                    self.state = CppState::Init;
                    return Token::split(id, self.cursor.token_text());
                }
                Some('\r') => {
                    if self.cursor.peek() == Some('\n') {
                        self.cursor.read();
                    }
                    self.state = CppState::Init;
                    return Token::split(id, self.cursor.token_text());
                }
                Some(_) => {}
            }
        }
        self.state = CppState::Init;
        self.token(id)
    }

    /// Continue a directive body after a resume sub-state.
    fn resume_directive(&mut self, sub: CppState) -> Token<'a, CppTokenId> {
        match sub {
            CppState::InDirectiveComment => {
                if !self.skip_directive_block_comment() {
                    return self.split(
                        CppTokenId::PreprocessorDirective,
                        CppState::InDirectiveComment,
                    );
                }
            }
            CppState::InDirectiveLineComment => match self.skip_directive_line_comment() {
                DirectiveLineComment::Newline => {
                    self.state = CppState::Init;
                    return self.token(CppTokenId::PreprocessorDirective);
                }
                DirectiveLineComment::Eof => {
                    return self.split(
                        CppTokenId::PreprocessorDirective,
                        CppState::InDirectiveLineComment,
                    );
                }
            },
            CppState::InDirectiveString | CppState::InDirectiveStringEscape => {
                if sub == CppState::InDirectiveStringEscape && self.cursor.read().is_none() {
                    return self.split(
                        CppTokenId::PreprocessorDirective,
                        CppState::InDirectiveStringEscape,
                    );
                }
                if let Some(token) = self.directive_literal_outcome('"') {
                    return token;
                }
            }
            CppState::InDirectiveChar | CppState::InDirectiveCharEscape => {
                if sub == CppState::InDirectiveCharEscape && self.cursor.read().is_none() {
                    return self.split(
                        CppTokenId::PreprocessorDirective,
                        CppState::InDirectiveCharEscape,
                    );
                }
                if let Some(token) = self.directive_literal_outcome('\'') {
                    return token;
                }
            }
            _ => {}
        }
        self.finish_directive_body()
    }

    #[allow(
        clippy::too_many_lines,
        reason = "single first-character dispatch over the full token inventory"
    )]
    fn dispatch(&mut self, c: char) -> Token<'a, CppTokenId> {
        use CppTokenId::*;
        match c {
            ' ' | '\t' | '\x0b' | '\x0c' => {
                self.cursor
                    .eat_while(|c| matches!(c, ' ' | '\t' | '\x0b' | '\x0c'));
                self.token(Whitespace)
            }
            '\n' => self.token(NewLine),
            '\r' => {
                if self.cursor.peek() == Some('\n') {
                    self.cursor.read();
                }
                self.token(NewLine)
            }
            '\\' => match self.cursor.peek() {
                Some('\n' | '\r') => {
                    self.eat_escaped_newline();
                    self.token(EscapedLine)
                }
                _ => self.token(BackSlash),
            },
            '/' => self.finish_slash(),
            '"' => {
                if self.in_include {
                    self.finish_include(PreprocessorUserInclude, '"')
                } else {
                    self.finish_text_literal('"', false)
                }
            }
            '\'' => self.finish_text_literal('\'', false),
            '#' => match self.mode {
                Mode::Source => self.finish_directive_body(),
                Mode::Directive => {
                    if self.cursor.peek() == Some('#') {
                        self.cursor.read();
                        self.token(DblSharp)
                    } else {
                        self.token(Sharp)
                    }
                }
            },
            '%' => match self.cursor.peek() {
                Some(':') => {
                    self.cursor.read();
                    match self.mode {
                        Mode::Source => self.finish_directive_body(),
                        Mode::Directive => self.token(PreprocessorStartAlt),
                    }
                }
                Some('=') => {
                    self.cursor.read();
                    self.token(PercentEq)
                }
                _ => self.token(Percent),
            },
            '<' if self.in_include => self.finish_include(PreprocessorSysInclude, '>'),
            '0'..='9' => self.finish_number(c),
            '.' => match self.cursor.peek() {
                Some(d) if d.is_ascii_digit() => self.finish_fraction(),
                Some('.') if self.cursor.peek2() == Some('.') => {
                    self.cursor.read();
                    self.cursor.read();
                    self.token(Ellipsis)
                }
                Some('*') => {
                    self.cursor.read();
                    self.token(DotMbr)
                }
                _ => self.token(Dot),
            },
            'R' if self.cursor.peek() == Some('"') => {
                self.cursor.read();
                self.finish_raw_string()
            }
            'L' | 'u' | 'U' => self.finish_prefix_or_identifier(c),
            '=' => {
                if self.cursor.peek() == Some('=') {
                    self.cursor.read();
                    self.token(EqEq)
                } else {
                    self.token(Eq)
                }
            }
            '!' => {
                if self.cursor.peek() == Some('=') {
                    self.cursor.read();
                    self.token(NotEq)
                } else {
                    self.token(Not)
                }
            }
            '~' => self.token(Tilde),
            '<' => match self.cursor.peek() {
                Some('=') => {
                    self.cursor.read();
                    self.token(LtEq)
                }
                Some('<') => {
                    self.cursor.read();
                    if self.cursor.peek() == Some('=') {
                        self.cursor.read();
                        self.token(LtLtEq)
                    } else {
                        self.token(LtLt)
                    }
                }
                _ => self.token(Lt),
            },
            '>' => match self.cursor.peek() {
                Some('=') => {
                    self.cursor.read();
                    self.token(GtEq)
                }
                Some('>') => {
                    self.cursor.read();
                    if self.cursor.peek() == Some('=') {
                        self.cursor.read();
                        self.token(GtGtEq)
                    } else {
                        self.token(GtGt)
                    }
                }
                _ => self.token(Gt),
            },
            '&' => match self.cursor.peek() {
                Some('&') => {
                    self.cursor.read();
                    self.token(AmpAmp)
                }
                Some('=') => {
                    self.cursor.read();
                    self.token(AmpEq)
                }
                _ => self.token(Amp),
            },
            '|' => match self.cursor.peek() {
                Some('|') => {
                    self.cursor.read();
                    self.token(BarBar)
                }
                Some('=') => {
                    self.cursor.read();
                    self.token(BarEq)
                }
                _ => self.token(Bar),
            },
            '^' => {
                if self.cursor.peek() == Some('=') {
                    self.cursor.read();
                    self.token(CaretEq)
                } else {
                    self.token(Caret)
                }
            }
            '+' => match self.cursor.peek() {
                Some('+') => {
                    self.cursor.read();
                    self.token(PlusPlus)
                }
                Some('=') => {
                    self.cursor.read();
                    self.token(PlusEq)
                }
                _ => self.token(Plus),
            },
            '-' => match self.cursor.peek() {
                Some('-') => {
                    self.cursor.read();
                    self.token(MinusMinus)
                }
                Some('=') => {
                    self.cursor.read();
                    self.token(MinusEq)
                }
                Some('>') => {
                    self.cursor.read();
                    if self.cursor.peek() == Some('*') {
                        self.cursor.read();
                        self.token(ArrowMbr)
                    } else {
                        self.token(Arrow)
                    }
                }
                _ => self.token(Minus),
            },
            '*' => match self.cursor.peek() {
                Some('/') => {
                    // stray comment close outside any comment
                    self.cursor.read();
                    self.token(InvalidCommentEnd)
                }
                Some('=') => {
                    self.cursor.read();
                    self.token(StarEq)
                }
                _ => self.token(Star),
            },
            ':' => {
                if self.cursor.peek() == Some(':') {
                    self.cursor.read();
                    self.token(Scope)
                } else {
                    self.token(Colon)
                }
            }
            ';' => self.token(Semicolon),
            ',' => self.token(Comma),
            '?' => self.token(Question),
            '(' => self.token(LParen),
            ')' => self.token(RParen),
            '{' => self.token(LBrace),
            '}' => self.token(RBrace),
            '[' => self.token(LBracket),
            ']' => self.token(RBracket),
            '@' => self.token(At),
            c if is_ident_start(c) => self.finish_identifier(),
            _ => self.token(ErrInvalidChar),
        }
    }
}

impl<'a> Scanner<'a> for CppScanner<'a> {
    type Id = CppTokenId;

    fn next_token(&mut self) -> Option<Token<'a, CppTokenId>> {
        self.cursor.commit();
        if self.cursor.is_eof() {
            return None;
        }
        match self.state {
            CppState::Init => {}
            CppState::InLineComment => {
                return Some(self.finish_line_comment(CppTokenId::LineComment));
            }
            CppState::InDoxygenLineComment => {
                return Some(self.finish_line_comment(CppTokenId::DoxygenLineComment));
            }
            CppState::InBlockComment => {
                return Some(self.finish_block_comment(CppTokenId::BlockComment));
            }
            CppState::InDoxygenComment => {
                return Some(self.finish_block_comment(CppTokenId::DoxygenComment));
            }
            CppState::InString => return Some(self.finish_text_literal('"', false)),
            CppState::InStringEscape => return Some(self.finish_text_literal('"', true)),
            CppState::InChar => return Some(self.finish_text_literal('\'', false)),
            CppState::InCharEscape => return Some(self.finish_text_literal('\'', true)),
            CppState::InRawString => return Some(self.resume_raw_string()),
            CppState::InDirective
            | CppState::InDirectiveComment
            | CppState::InDirectiveLineComment
            | CppState::InDirectiveString
            | CppState::InDirectiveStringEscape
            | CppState::InDirectiveChar
            | CppState::InDirectiveCharEscape => {
                let sub = self.state;
                return Some(self.resume_directive(sub));
            }
            CppState::InSysInclude => {
                return Some(self.finish_include(CppTokenId::PreprocessorSysInclude, '>'));
            }
            CppState::InUserInclude => {
                return Some(self.finish_include(CppTokenId::PreprocessorUserInclude, '"'));
            }
        }
        let c = self.cursor.read()?;
        Some(self.dispatch(c))
    }

    fn state(&self) -> LexerState {
        LexerState::from_bits(u32::from(self.state.bits()))
    }
}

#[cfg(test)]
mod tests;
