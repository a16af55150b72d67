//! Restartable, character-level Fortran scanner.
//!
//! Supports both source forms: fixed form (column 1 comments, column 6
//! continuation markers) and free form, plus the column-limit rule that
//! turns overlong line tails into comments. Column bookkeeping survives
//! suspension: the persisted state packs the scanner state together with
//! the current column and line-blankness.

pub mod format;
pub mod keywords;
pub mod scanner;
pub mod token_id;

pub use format::{FormatContext, FortranConfig};
pub use keywords::FortranKeywords;
pub use scanner::FortranScanner;
pub use token_id::FortranTokenId;
