//! Sub-lexer for the text of a documentation comment.
//!
//! Hosts feed it the full text of a `DoxygenComment` or
//! `DoxygenLineComment` token. Everything that is not a tag, HTML tag,
//! identifier, or control symbol lumps into `OtherText` runs, whitespace
//! included.

use relex_core::{Cursor, LexerState, Scanner, Token, TokenCategory, TokenId};

/// Token ids produced by [`DoxygenScanner`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum DoxygenTokenId {
    /// `@tag` or `\tag`.
    Tag,
    /// `<b>`, `</em>`, ...
    HtmlTag,
    /// `<` as the very first character: documentation for the preceding
    /// member (`//!< ...` style).
    PointerMark,
    Dot,
    Hash,
    Ident,
    OtherText,
}

impl TokenId for DoxygenTokenId {
    fn category(self) -> TokenCategory {
        match self {
            DoxygenTokenId::Tag => TokenCategory::Keyword,
            DoxygenTokenId::Ident => TokenCategory::Identifier,
            DoxygenTokenId::Dot | DoxygenTokenId::Hash | DoxygenTokenId::PointerMark => {
                TokenCategory::Operator
            }
            DoxygenTokenId::HtmlTag | DoxygenTokenId::OtherText => TokenCategory::Comment,
        }
    }

    fn fixed_text(self) -> Option<&'static str> {
        match self {
            DoxygenTokenId::Dot => Some("."),
            DoxygenTokenId::Hash => Some("#"),
            DoxygenTokenId::PointerMark => Some("<"),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
enum DoxygenState {
    Init = 0,
    Other = 1,
}

/// `true` for characters that start a token of their own and therefore end
/// an `OtherText` run.
fn is_token_start(c: char) -> bool {
    matches!(c, '@' | '\\' | '.' | '#' | '<' | '_') || c.is_alphabetic()
}

fn is_ident_part(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Scanner over documentation-comment text.
pub struct DoxygenScanner<'a> {
    cursor: Cursor<'a>,
    state: DoxygenState,
}

impl<'a> DoxygenScanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::resume(input, LexerState::INITIAL)
    }

    pub fn resume(input: &'a str, state: LexerState) -> Self {
        let state = if state.bits() == 0 {
            DoxygenState::Init
        } else {
            DoxygenState::Other
        };
        Self {
            cursor: Cursor::new(input),
            state,
        }
    }

    fn token(&self, id: DoxygenTokenId) -> Token<'a, DoxygenTokenId> {
        Token::new(id, self.cursor.token_text())
    }

    /// `@tag` / `\tag`; the marker alone falls through to text.
    fn finish_tag(&mut self) -> Token<'a, DoxygenTokenId> {
        self.cursor.eat_while(|c| c.is_alphabetic());
        self.token(DoxygenTokenId::Tag)
    }

    /// `<name>` or `</name>`; anything malformed stays text.
    fn finish_html_tag(&mut self) -> Token<'a, DoxygenTokenId> {
        if self.cursor.peek() == Some('/') {
            self.cursor.read();
        }
        self.cursor.eat_while(|c| c.is_alphanumeric());
        if self.cursor.peek() == Some('>') {
            self.cursor.read();
            self.token(DoxygenTokenId::HtmlTag)
        } else {
            self.finish_other_text()
        }
    }

    fn finish_other_text(&mut self) -> Token<'a, DoxygenTokenId> {
        while let Some(c) = self.cursor.peek() {
            if is_token_start(c) {
                break;
            }
            self.cursor.read();
        }
        self.token(DoxygenTokenId::OtherText)
    }
}

impl<'a> Scanner<'a> for DoxygenScanner<'a> {
    type Id = DoxygenTokenId;

    fn next_token(&mut self) -> Option<Token<'a, DoxygenTokenId>> {
        self.cursor.commit();
        let at_start = self.state == DoxygenState::Init && self.cursor.pos() == 0;
        let c = self.cursor.read()?;
        self.state = DoxygenState::Other;
        Some(match c {
            '<' if at_start => self.token(DoxygenTokenId::PointerMark),
            '@' | '\\' => {
                if self.cursor.peek().is_some_and(char::is_alphabetic) {
                    self.finish_tag()
                } else {
                    self.finish_other_text()
                }
            }
            '<' => {
                if matches!(self.cursor.peek(), Some('/')) || self.cursor.peek().is_some_and(char::is_alphabetic)
                {
                    self.finish_html_tag()
                } else {
                    self.finish_other_text()
                }
            }
            '.' => self.token(DoxygenTokenId::Dot),
            '#' => self.token(DoxygenTokenId::Hash),
            c if c == '_' || c.is_alphabetic() => {
                self.cursor.eat_while(is_ident_part);
                self.token(DoxygenTokenId::Ident)
            }
            _ => self.finish_other_text(),
        })
    }

    fn state(&self) -> LexerState {
        LexerState::from_bits(u32::from(self.state as u8))
    }
}

#[cfg(test)]
mod tests;
