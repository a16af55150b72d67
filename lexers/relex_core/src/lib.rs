//! Shared primitives for restartable, incremental editor lexers.
//!
//! The language scanners (C/C++, preprocessor, Fortran, Doxygen) all follow
//! the same discipline: they tokenize a bounded window of source text, can be
//! suspended after any token, and resume later from a persisted
//! [`LexerState`] with results identical to an uninterrupted scan. This crate
//! holds the pieces they share:
//!
//! - [`Cursor`]: a forward, code-point cursor with bounded pushback.
//! - [`Token`] / [`TokenId`] / [`TokenText`]: the immutable scan result,
//!   with flyweight text for tokens whose spelling is statically known.
//! - [`LexerState`]: the opaque persisted resume state, plus
//!   [`compose`]/[`decompose`] for layered scanners.
//! - [`KeywordFilter`]: the injected identifier-classification seam.
//!
//! Lexing at this layer never fails: malformed input degrades to error token
//! kinds or split tokens ([`Part::Start`]), never to a panic or an `Err`.

pub mod cursor;
pub mod filter;
pub mod state;
pub mod token;

pub use cursor::Cursor;
pub use filter::{KeywordFilter, NoKeywords, TableFilter};
pub use state::{compose, decompose, LexerState, INNER_BITS};
pub use token::{Part, Scanner, Token, TokenCategory, TokenId, TokenText};
