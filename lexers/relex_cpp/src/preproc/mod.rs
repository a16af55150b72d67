//! Preprocessor-directive scanner layered over the C/C++ scanner.
//!
//! The wrapped [`CppScanner`] runs in directive mode (directive content is
//! lexed token by token) while this layer tracks *where within the
//! directive* the cursor is and re-classifies identifier tokens by that
//! position: directive names after `#`, the `defined` operator inside
//! conditionals, include targets, pragma and OpenMP keywords.
//!
//! The persisted state packs the coarse position together with the wrapped
//! scanner's state via [`compose`]/[`decompose`], so suspending
//! mid-directive and mid-literal simultaneously is representable.

use relex_core::{
    compose, decompose, KeywordFilter, LexerState, NoKeywords, Scanner, TableFilter, Token,
    TokenCategory,
};

use crate::keywords::{CKeywords, CppKeywords, DIRECTIVES, OMP_KEYWORDS, PRAGMA_KEYWORDS};
use crate::scanner::CppScanner;
use crate::token_id::CppTokenId;

static NO_KEYWORDS: NoKeywords = NoKeywords;
static CPP_KEYWORDS: CppKeywords = CppKeywords;
static C_KEYWORDS: CKeywords = CKeywords;

/// Coarse position within a directive.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
enum DirectivePosition {
    Init = 0,
    DirectiveName = 1,
    Expression = 2,
    IncludeDirective = 3,
    Pragma = 4,
    Omp = 5,
    Other = 6,
}

impl DirectivePosition {
    fn from_bits(bits: u8) -> Self {
        match bits {
            1 => DirectivePosition::DirectiveName,
            2 => DirectivePosition::Expression,
            3 => DirectivePosition::IncludeDirective,
            4 => DirectivePosition::Pragma,
            5 => DirectivePosition::Omp,
            6 => DirectivePosition::Other,
            _ => DirectivePosition::Init,
        }
    }

    fn bits(self) -> u8 {
        self as u8
    }
}

/// The keyword sets a [`PreprocScanner`] consults, assembled once per
/// language and shared across scanner instances.
pub struct PreprocFilters {
    directives: TableFilter<CppTokenId>,
    pragmas: TableFilter<CppTokenId>,
    omp: TableFilter<CppTokenId>,
    keywords: &'static dyn KeywordFilter<CppTokenId>,
}

impl PreprocFilters {
    pub fn cpp() -> Self {
        Self::with_keywords(&CPP_KEYWORDS)
    }

    pub fn c() -> Self {
        Self::with_keywords(&C_KEYWORDS)
    }

    fn with_keywords(keywords: &'static dyn KeywordFilter<CppTokenId>) -> Self {
        Self {
            directives: TableFilter::new(DIRECTIVES),
            pragmas: TableFilter::new(PRAGMA_KEYWORDS),
            omp: TableFilter::new(OMP_KEYWORDS),
            keywords,
        }
    }
}

/// Scanner over the content of a single preprocessor directive.
pub struct PreprocScanner<'a> {
    inner: CppScanner<'a>,
    position: DirectivePosition,
    filters: &'a PreprocFilters,
}

impl<'a> PreprocScanner<'a> {
    pub fn new(input: &'a str, filters: &'a PreprocFilters) -> Self {
        Self::resume(input, filters, LexerState::INITIAL)
    }

    /// Construct over a later buffer window, continuing from a persisted
    /// (composed) state.
    pub fn resume(input: &'a str, filters: &'a PreprocFilters, state: LexerState) -> Self {
        let (outer, inner_state) = decompose(state);
        let position = DirectivePosition::from_bits(outer);
        let mut inner = CppScanner::directive_mode(input, &NO_KEYWORDS, inner_state);
        if position == DirectivePosition::IncludeDirective {
            inner.set_include_scan(true);
        }
        Self {
            inner,
            position,
            filters,
        }
    }

    fn classify(&mut self, token: Token<'a, CppTokenId>) -> Token<'a, CppTokenId> {
        use DirectivePosition as P;
        if matches!(
            token.category(),
            TokenCategory::Whitespace | TokenCategory::Comment
        ) {
            return token;
        }
        match self.position {
            P::Init => {
                self.position = P::DirectiveName;
                match token.id() {
                    CppTokenId::Sharp => token.with_id(CppTokenId::PreprocessorStart),
                    _ => token,
                }
            }
            P::DirectiveName => {
                if token.id() != CppTokenId::Identifier {
                    self.position = P::Other;
                    return token;
                }
                match self.filters.directives.check(self.inner.last_word()) {
                    Some(id) => {
                        self.position = match id {
                            CppTokenId::PreprocessorIf | CppTokenId::PreprocessorElif => {
                                P::Expression
                            }
                            CppTokenId::PreprocessorInclude
                            | CppTokenId::PreprocessorIncludeNext => {
                                self.inner.set_include_scan(true);
                                P::IncludeDirective
                            }
                            CppTokenId::PreprocessorPragma => P::Pragma,
                            _ => P::Other,
                        };
                        token.with_id(id)
                    }
                    None => {
                        self.position = P::Other;
                        token.with_id(CppTokenId::PreprocessorIdentifier)
                    }
                }
            }
            P::Expression => {
                if token.id() != CppTokenId::Identifier {
                    return token;
                }
                let word = self.inner.last_word();
                if word == "defined" {
                    return token.with_id(CppTokenId::PreprocessorDefined);
                }
                match self.filters.pragmas.check(word) {
                    Some(id) => token.with_id(id),
                    None => token.with_id(CppTokenId::PreprocessorIdentifier),
                }
            }
            P::Pragma => {
                if token.id() != CppTokenId::Identifier {
                    self.position = P::Other;
                    return token;
                }
                if self.inner.last_word() == "omp" {
                    self.position = P::Omp;
                    return token.with_id(CppTokenId::PragmaOmpStart);
                }
                self.position = P::Other;
                match self.filters.pragmas.check(self.inner.last_word()) {
                    Some(id) => token.with_id(id),
                    None => self.general_or_identifier(token),
                }
            }
            P::Omp => {
                if token.id() != CppTokenId::Identifier {
                    return token;
                }
                match self.filters.omp.check(self.inner.last_word()) {
                    Some(id) => token.with_id(id),
                    None => self.general_or_identifier(token),
                }
            }
            P::IncludeDirective | P::Other => {
                if token.id() != CppTokenId::Identifier {
                    return token;
                }
                self.general_or_identifier(token)
            }
        }
    }

    fn general_or_identifier(&self, token: Token<'a, CppTokenId>) -> Token<'a, CppTokenId> {
        match self.filters.keywords.check(self.inner.last_word()) {
            Some(id) => token.with_id(id),
            None => token.with_id(CppTokenId::PreprocessorIdentifier),
        }
    }
}

impl<'a> Scanner<'a> for PreprocScanner<'a> {
    type Id = CppTokenId;

    fn next_token(&mut self) -> Option<Token<'a, CppTokenId>> {
        let token = self.inner.next_token()?;
        Some(self.classify(token))
    }

    fn state(&self) -> LexerState {
        compose(self.position.bits(), self.inner.state())
    }
}

#[cfg(test)]
mod tests;
