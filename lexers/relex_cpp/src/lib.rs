//! Restartable lexers for C/C++ source, the preprocessor-directive
//! sub-grammar, and Doxygen documentation comments.
//!
//! Three scanners live here, all built on `relex_core`:
//!
//! - [`CppScanner`]: the base token scanner. At the top level a `#` (or the
//!   alternate `%:`) swallows the rest of the physical line as one
//!   `PreprocessorDirective` token, correctly skipping comments and string
//!   literals nested inside the directive.
//! - [`PreprocScanner`]: lexes the *inside* of such a directive. It layers a
//!   coarse directive-position state machine over the base scanner and
//!   re-classifies identifiers by position (directive name, conditional
//!   expression, include target, pragma/OpenMP).
//! - [`DoxygenScanner`]: a two-state tag/text classifier for the interior of
//!   documentation comments.
//!
//! All three are restartable: suspend after any token, persist
//! [`relex_core::LexerState`], resume over a later window.

pub mod doxygen;
pub mod keywords;
pub mod preproc;
pub mod scanner;
pub mod token_id;

pub use doxygen::{DoxygenScanner, DoxygenTokenId};
pub use keywords::{CKeywords, CppKeywords};
pub use preproc::{PreprocFilters, PreprocScanner};
pub use scanner::CppScanner;
pub use token_id::CppTokenId;
