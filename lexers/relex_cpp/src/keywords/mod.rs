//! Keyword tables and filters for C and C++.
//!
//! Lookup is a length-bucketed match: bucketing by byte length first lets
//! the compiler turn each arm into a handful of fixed-width comparisons,
//! and the first-byte guard rejects the overwhelmingly common
//! non-keyword identifier in one branch.
//!
//! The directive-name, pragma, and OpenMP sets are separate tables because
//! they only apply in specific preprocessor positions; see
//! [`PreprocFilters`](crate::preproc::PreprocFilters).

use crate::token_id::CppTokenId;
use relex_core::KeywordFilter;

/// Look up a C++ keyword (including the iso646 alternate operator
/// spellings). Returns `None` for ordinary identifiers.
pub fn cpp_keyword(text: &str) -> Option<CppTokenId> {
    use CppTokenId::*;
    let first = *text.as_bytes().first()?;
    // Every C++ keyword starts with a lowercase letter.
    if !first.is_ascii_lowercase() {
        return None;
    }
    let id = match text.len() {
        2 => match text {
            "do" => Do,
            "if" => If,
            "or" => AlternateOr,
            _ => return None,
        },
        3 => match text {
            "and" => AlternateAnd,
            "asm" => Asm,
            "for" => For,
            "int" => Int,
            "new" => New,
            "not" => AlternateNot,
            "try" => Try,
            "xor" => AlternateXor,
            _ => return None,
        },
        4 => match text {
            "auto" => Auto,
            "bool" => Bool,
            "case" => Case,
            "char" => Char,
            "else" => Else,
            "enum" => Enum,
            "goto" => Goto,
            "long" => Long,
            "this" => This,
            "true" => True,
            "void" => Void,
            _ => return None,
        },
        5 => match text {
            "bitor" => AlternateBitor,
            "break" => Break,
            "catch" => Catch,
            "class" => Class,
            "compl" => AlternateCompl,
            "const" => Const,
            "false" => False,
            "final" => Final,
            "float" => Float,
            "or_eq" => AlternateOrEq,
            "short" => Short,
            "throw" => Throw,
            "union" => Union,
            "using" => Using,
            "while" => While,
            _ => return None,
        },
        6 => match text {
            "and_eq" => AlternateAndEq,
            "bitand" => AlternateBitand,
            "delete" => Delete,
            "double" => Double,
            "export" => Export,
            "extern" => Extern,
            "friend" => Friend,
            "import" => Import,
            "inline" => Inline,
            "module" => Module,
            "not_eq" => AlternateNotEq,
            "public" => Public,
            "return" => Return,
            "signed" => Signed,
            "sizeof" => Sizeof,
            "static" => Static,
            "struct" => Struct,
            "switch" => Switch,
            "typeid" => Typeid,
            "typeof" => Typeof,
            "xor_eq" => AlternateXorEq,
            _ => return None,
        },
        7 => match text {
            "alignas" => Alignas,
            "alignof" => Alignof,
            "char8_t" => Char8T,
            "concept" => Concept,
            "default" => Default,
            "finally" => Finally,
            "fortran" => Fortran,
            "mutable" => Mutable,
            "nullptr" => Nullptr,
            "private" => Private,
            "typedef" => Typedef,
            "virtual" => Virtual,
            "wchar_t" => WcharT,
            _ => return None,
        },
        8 => match text {
            "char16_t" => Char16T,
            "char32_t" => Char32T,
            "continue" => Continue,
            "co_await" => CoAwait,
            "co_yield" => CoYield,
            "decltype" => Decltype,
            "explicit" => Explicit,
            "noexcept" => Noexcept,
            "operator" => Operator,
            "override" => Override,
            "register" => Register,
            "requires" => Requires,
            "restrict" => Restrict,
            "template" => Template,
            "typename" => Typename,
            "unsigned" => Unsigned,
            "volatile" => Volatile,
            _ => return None,
        },
        9 => match text {
            "consteval" => Consteval,
            "constexpr" => Constexpr,
            "constinit" => Constinit,
            "co_return" => CoReturn,
            "namespace" => Namespace,
            "protected" => Protected,
            _ => return None,
        },
        10 => match text {
            "const_cast" => ConstCast,
            _ => return None,
        },
        11 => match text {
            "static_cast" => StaticCast,
            _ => return None,
        },
        12 => match text {
            "dynamic_cast" => DynamicCast,
            "thread_local" => ThreadLocal,
            _ => return None,
        },
        13 => match text {
            "static_assert" => StaticAssert,
            "typeof_unqual" => TypeofUnqual,
            _ => return None,
        },
        16 => match text {
            "reinterpret_cast" => ReinterpretCast,
            _ => return None,
        },
        _ => return None,
    };
    Some(id)
}

/// Look up a C keyword. The C table shares spellings with C++ where the two
/// languages agree and adds the `_Capitalized` C11/C23 keywords.
pub fn c_keyword(text: &str) -> Option<CppTokenId> {
    use CppTokenId::*;
    let first = *text.as_bytes().first()?;
    if !first.is_ascii_lowercase() && first != b'_' {
        return None;
    }
    let id = match text.len() {
        2 => match text {
            "do" => Do,
            "if" => If,
            _ => return None,
        },
        3 => match text {
            "asm" => Asm,
            "for" => For,
            "int" => Int,
            _ => return None,
        },
        4 => match text {
            "auto" => Auto,
            "bool" => Bool,
            "case" => Case,
            "char" => Char,
            "else" => Else,
            "enum" => Enum,
            "goto" => Goto,
            "long" => Long,
            "true" => True,
            "void" => Void,
            _ => return None,
        },
        5 => match text {
            "break" => Break,
            "const" => Const,
            "false" => False,
            "float" => Float,
            "short" => Short,
            "union" => Union,
            "while" => While,
            "_Bool" => CBool,
            _ => return None,
        },
        6 => match text {
            "double" => Double,
            "extern" => Extern,
            "inline" => Inline,
            "return" => Return,
            "signed" => Signed,
            "sizeof" => Sizeof,
            "static" => Static,
            "struct" => Struct,
            "switch" => Switch,
            "typeof" => Typeof,
            _ => return None,
        },
        7 => match text {
            "default" => Default,
            "fortran" => Fortran,
            "typedef" => Typedef,
            "_Atomic" => CAtomic,
            "_BitInt" => CBitInt,
            "_Pragma" => CPragma,
            _ => return None,
        },
        8 => match text {
            "continue" => Continue,
            "register" => Register,
            "restrict" => Restrict,
            "unsigned" => Unsigned,
            "volatile" => Volatile,
            "_Alignas" => CAlignas,
            "_Alignof" => CAlignof,
            "_Complex" => CComplex,
            "_Generic" => CGeneric,
            _ => return None,
        },
        9 => match text {
            "_Noreturn" => CNoreturn,
            _ => return None,
        },
        10 => match text {
            "_Decimal32" => CDecimal32,
            "_Decimal64" => CDecimal64,
            "_Imaginary" => CImaginary,
            _ => return None,
        },
        11 => match text {
            "_Decimal128" => CDecimal128,
            _ => return None,
        },
        13 => match text {
            "typeof_unqual" => TypeofUnqual,
            "_Thread_local" => CThreadLocal,
            _ => return None,
        },
        14 => match text {
            "_Static_assert" => CStaticAssert,
            _ => return None,
        },
        _ => return None,
    };
    Some(id)
}

/// C++ keyword filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct CppKeywords;

impl KeywordFilter<CppTokenId> for CppKeywords {
    fn check(&self, text: &str) -> Option<CppTokenId> {
        cpp_keyword(text)
    }
}

/// C keyword filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct CKeywords;

impl KeywordFilter<CppTokenId> for CKeywords {
    fn check(&self, text: &str) -> Option<CppTokenId> {
        c_keyword(text)
    }
}

/// Directive names, applied only in the `DirectiveName` position.
pub const DIRECTIVES: &[(&str, CppTokenId)] = &[
    ("define", CppTokenId::PreprocessorDefine),
    ("undef", CppTokenId::PreprocessorUndef),
    ("include", CppTokenId::PreprocessorInclude),
    ("include_next", CppTokenId::PreprocessorIncludeNext),
    ("if", CppTokenId::PreprocessorIf),
    ("ifdef", CppTokenId::PreprocessorIfdef),
    ("ifndef", CppTokenId::PreprocessorIfndef),
    ("elif", CppTokenId::PreprocessorElif),
    ("else", CppTokenId::PreprocessorElse),
    ("endif", CppTokenId::PreprocessorEndif),
    ("pragma", CppTokenId::PreprocessorPragma),
    ("error", CppTokenId::PreprocessorError),
    ("warning", CppTokenId::PreprocessorWarning),
    ("line", CppTokenId::PreprocessorLine),
];

/// Non-OpenMP pragma keywords.
pub const PRAGMA_KEYWORDS: &[(&str, CppTokenId)] = &[
    ("once", CppTokenId::PragmaKeyword),
    ("pack", CppTokenId::PragmaKeyword),
    ("push", CppTokenId::PragmaKeyword),
    ("pop", CppTokenId::PragmaKeyword),
    ("warning", CppTokenId::PragmaKeyword),
    ("message", CppTokenId::PragmaKeyword),
    ("region", CppTokenId::PragmaKeyword),
    ("endregion", CppTokenId::PragmaKeyword),
];

/// OpenMP clause and construct keywords, applied after `#pragma omp`.
pub const OMP_KEYWORDS: &[(&str, CppTokenId)] = &[
    ("atomic", CppTokenId::PragmaOmpKeyword),
    ("barrier", CppTokenId::PragmaOmpKeyword),
    ("collapse", CppTokenId::PragmaOmpKeyword),
    ("copyin", CppTokenId::PragmaOmpKeyword),
    ("copyprivate", CppTokenId::PragmaOmpKeyword),
    ("critical", CppTokenId::PragmaOmpKeyword),
    ("default", CppTokenId::PragmaOmpKeyword),
    ("final", CppTokenId::PragmaOmpKeyword),
    ("firstprivate", CppTokenId::PragmaOmpKeyword),
    ("flush", CppTokenId::PragmaOmpKeyword),
    ("for", CppTokenId::PragmaOmpKeyword),
    ("if", CppTokenId::PragmaOmpKeyword),
    ("lastprivate", CppTokenId::PragmaOmpKeyword),
    ("master", CppTokenId::PragmaOmpKeyword),
    ("mergeable", CppTokenId::PragmaOmpKeyword),
    ("nowait", CppTokenId::PragmaOmpKeyword),
    ("num_threads", CppTokenId::PragmaOmpKeyword),
    ("ordered", CppTokenId::PragmaOmpKeyword),
    ("parallel", CppTokenId::PragmaOmpKeyword),
    ("private", CppTokenId::PragmaOmpKeyword),
    ("reduction", CppTokenId::PragmaOmpKeyword),
    ("schedule", CppTokenId::PragmaOmpKeyword),
    ("sections", CppTokenId::PragmaOmpKeyword),
    ("shared", CppTokenId::PragmaOmpKeyword),
    ("single", CppTokenId::PragmaOmpKeyword),
    ("task", CppTokenId::PragmaOmpKeyword),
    ("taskwait", CppTokenId::PragmaOmpKeyword),
    ("threadprivate", CppTokenId::PragmaOmpKeyword),
    ("untied", CppTokenId::PragmaOmpKeyword),
];
