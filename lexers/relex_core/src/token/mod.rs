//! The immutable result of one scan step.
//!
//! A [`Token`] couples a language-specific id with the text it covered and a
//! completeness marker. Tokens whose spelling is statically known (single
//! operators, punctuation) are *flyweights*: they carry a `&'static str`
//! instead of a slice of the input, so hosts can intern or compare them
//! without touching the source buffer.

use crate::state::LexerState;

/// Coarse classification shared by every language's token inventory.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TokenCategory {
    Whitespace,
    Comment,
    Identifier,
    Keyword,
    Operator,
    Literal,
    Preprocessor,
    Error,
}

/// A language's token id inventory.
///
/// Implemented by closed `enum`s in the language crates. `fixed_text`
/// returns the statically known spelling for flyweight-eligible ids.
pub trait TokenId: Copy + Eq + std::fmt::Debug {
    fn category(self) -> TokenCategory;
    fn fixed_text(self) -> Option<&'static str>;
}

/// Completeness of a token.
///
/// [`Part::Start`] marks a *split token*: the construct was not closed
/// within the current buffer window. The host persists the scanner state and
/// requests continuation once more input is available.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Part {
    Complete,
    Start,
}

/// Token text: a flyweight constant or a slice of the scanned window.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TokenText<'a> {
    Fixed(&'static str),
    Slice(&'a str),
}

impl<'a> TokenText<'a> {
    #[inline]
    pub fn as_str(&self) -> &'a str {
        match self {
            TokenText::Fixed(s) => s,
            TokenText::Slice(s) => s,
        }
    }

    /// `true` when this text is a flyweight constant.
    pub fn is_fixed(&self) -> bool {
        matches!(self, TokenText::Fixed(_))
    }
}

/// One token produced by a scanner.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Token<'a, K: TokenId> {
    id: K,
    text: TokenText<'a>,
    part: Part,
}

impl<'a, K: TokenId> Token<'a, K> {
    /// Build a complete token, choosing flyweight text when the id's fixed
    /// spelling matches the scanned slice exactly.
    ///
    /// The equality check matters: a keyword spelled with an embedded
    /// escaped newline (`ch\<NL>ar`) still classifies as the keyword but
    /// must keep its raw slice text.
    pub fn new(id: K, text: &'a str) -> Self {
        let text = match id.fixed_text() {
            Some(fixed) if fixed == text => TokenText::Fixed(fixed),
            _ => TokenText::Slice(text),
        };
        Self {
            id,
            text,
            part: Part::Complete,
        }
    }

    /// Build a split token ([`Part::Start`]). Split tokens are never
    /// flyweights: their text is by definition a fragment.
    pub fn split(id: K, text: &'a str) -> Self {
        Self {
            id,
            text: TokenText::Slice(text),
            part: Part::Start,
        }
    }

    /// Rebuild this token under a different id, keeping text and
    /// completeness. Used by wrapping scanners that re-classify tokens the
    /// inner scanner produced.
    pub fn with_id(self, id: K) -> Self {
        let text = match id.fixed_text() {
            Some(fixed) if fixed == self.text.as_str() => TokenText::Fixed(fixed),
            _ => TokenText::Slice(self.text.as_str()),
        };
        Self {
            id,
            text,
            part: self.part,
        }
    }

    #[inline]
    pub fn id(&self) -> K {
        self.id
    }

    #[inline]
    pub fn text(&self) -> &'a str {
        self.text.as_str()
    }

    #[inline]
    pub fn token_text(&self) -> TokenText<'a> {
        self.text
    }

    #[inline]
    pub fn part(&self) -> Part {
        self.part
    }

    #[inline]
    pub fn category(&self) -> TokenCategory {
        self.id.category()
    }

    pub fn is_complete(&self) -> bool {
        self.part == Part::Complete
    }
}

/// The host-facing contract every scanner implements.
///
/// `next_token` returning `None` means the current buffer window is
/// exhausted — not necessarily end of file. `state` may be queried after any
/// call and persisted; constructing a scanner over later input with that
/// state resumes scanning with identical results.
pub trait Scanner<'a> {
    type Id: TokenId;

    fn next_token(&mut self) -> Option<Token<'a, Self::Id>>;
    fn state(&self) -> LexerState;
}

#[cfg(test)]
mod tests;
