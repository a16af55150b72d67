//! C/C++ token inventory.
//!
//! One closed enum covers both languages; which keyword spellings are live
//! is decided by the injected keyword filter, not by the scanner, so a C
//! filter simply never returns the C++-only ids.

use relex_core::{TokenCategory, TokenId};

/// Token ids produced by [`CppScanner`](crate::CppScanner) and
/// [`PreprocScanner`](crate::PreprocScanner).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CppTokenId {
    // Whitespace
    Whitespace,
    NewLine,
    EscapedLine,

    // Comments
    LineComment,
    DoxygenLineComment,
    BlockComment,
    DoxygenComment,

    Identifier,

    // Literals
    IntLiteral,
    LongLiteral,
    LongLongLiteral,
    UnsignedLiteral,
    UnsignedLongLiteral,
    UnsignedLongLongLiteral,
    FloatLiteral,
    DoubleLiteral,
    CharLiteral,
    StringLiteral,
    RawStringLiteral,

    // Operators and separators
    Eq,
    EqEq,
    NotEq,
    Not,
    Tilde,
    Lt,
    LtEq,
    LtLt,
    LtLtEq,
    Gt,
    GtEq,
    GtGt,
    GtGtEq,
    Amp,
    AmpAmp,
    AmpEq,
    Bar,
    BarBar,
    BarEq,
    Caret,
    CaretEq,
    Plus,
    PlusPlus,
    PlusEq,
    Minus,
    MinusMinus,
    MinusEq,
    Star,
    StarEq,
    Slash,
    SlashEq,
    Percent,
    PercentEq,
    Arrow,
    ArrowMbr,
    Dot,
    DotMbr,
    Ellipsis,
    Scope,
    Colon,
    Semicolon,
    Comma,
    Question,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    At,
    BackSlash,

    // Preprocessor
    PreprocessorStart,
    PreprocessorStartAlt,
    PreprocessorDirective,
    PreprocessorIdentifier,
    PreprocessorDefine,
    PreprocessorUndef,
    PreprocessorInclude,
    PreprocessorIncludeNext,
    PreprocessorIf,
    PreprocessorIfdef,
    PreprocessorIfndef,
    PreprocessorElif,
    PreprocessorElse,
    PreprocessorEndif,
    PreprocessorPragma,
    PreprocessorError,
    PreprocessorWarning,
    PreprocessorLine,
    PreprocessorDefined,
    PreprocessorUserInclude,
    PreprocessorSysInclude,
    Sharp,
    DblSharp,
    PragmaOmpStart,
    PragmaOmpKeyword,
    PragmaKeyword,

    // Keywords (C++ and shared-with-C spellings)
    Alignas,
    Alignof,
    Asm,
    Auto,
    Bool,
    Break,
    Case,
    Catch,
    Char,
    Char8T,
    Char16T,
    Char32T,
    Class,
    Concept,
    Const,
    ConstCast,
    Consteval,
    Constexpr,
    Constinit,
    Continue,
    CoAwait,
    CoReturn,
    CoYield,
    Decltype,
    Default,
    Delete,
    Do,
    Double,
    DynamicCast,
    Else,
    Enum,
    Explicit,
    Export,
    Extern,
    False,
    Final,
    Finally,
    Float,
    For,
    Fortran,
    Friend,
    Goto,
    If,
    Import,
    Inline,
    Int,
    Long,
    Module,
    Mutable,
    Namespace,
    New,
    Noexcept,
    Nullptr,
    Operator,
    Override,
    Private,
    Protected,
    Public,
    Register,
    ReinterpretCast,
    Requires,
    Restrict,
    Return,
    Short,
    Signed,
    Sizeof,
    Static,
    StaticAssert,
    StaticCast,
    Struct,
    Switch,
    Template,
    This,
    ThreadLocal,
    Throw,
    True,
    Try,
    Typedef,
    Typeid,
    Typename,
    Typeof,
    TypeofUnqual,
    Union,
    Unsigned,
    Using,
    Virtual,
    Void,
    Volatile,
    WcharT,
    While,

    // C underscore keywords
    CAlignas,
    CAlignof,
    CAtomic,
    CBitInt,
    CBool,
    CComplex,
    CDecimal32,
    CDecimal64,
    CDecimal128,
    CGeneric,
    CImaginary,
    CNoreturn,
    CPragma,
    CStaticAssert,
    CThreadLocal,

    // Alternate operator spellings (iso646)
    AlternateAnd,
    AlternateAndEq,
    AlternateBitand,
    AlternateBitor,
    AlternateCompl,
    AlternateNot,
    AlternateNotEq,
    AlternateOr,
    AlternateOrEq,
    AlternateXor,
    AlternateXorEq,

    // Errors
    InvalidCommentEnd,
    ErrInvalidChar,
}

impl TokenId for CppTokenId {
    fn category(self) -> TokenCategory {
        use CppTokenId::*;
        match self {
            Whitespace | NewLine | EscapedLine => TokenCategory::Whitespace,

            LineComment | DoxygenLineComment | BlockComment | DoxygenComment => {
                TokenCategory::Comment
            }

            Identifier => TokenCategory::Identifier,

            IntLiteral | LongLiteral | LongLongLiteral | UnsignedLiteral
            | UnsignedLongLiteral | UnsignedLongLongLiteral | FloatLiteral | DoubleLiteral
            | CharLiteral | StringLiteral | RawStringLiteral => TokenCategory::Literal,

            Eq | EqEq | NotEq | Not | Tilde | Lt | LtEq | LtLt | LtLtEq | Gt | GtEq | GtGt
            | GtGtEq | Amp | AmpAmp | AmpEq | Bar | BarBar | BarEq | Caret | CaretEq | Plus
            | PlusPlus | PlusEq | Minus | MinusMinus | MinusEq | Star | StarEq | Slash
            | SlashEq | Percent | PercentEq | Arrow | ArrowMbr | Dot | DotMbr | Ellipsis
            | Scope | Colon | Semicolon | Comma | Question | LParen | RParen | LBrace
            | RBrace | LBracket | RBracket | At | BackSlash | AlternateAnd | AlternateAndEq
            | AlternateBitand | AlternateBitor | AlternateCompl | AlternateNot
            | AlternateNotEq | AlternateOr | AlternateOrEq | AlternateXor | AlternateXorEq => {
                TokenCategory::Operator
            }

            PreprocessorStart | PreprocessorStartAlt | PreprocessorDirective
            | PreprocessorIdentifier | PreprocessorDefine | PreprocessorUndef
            | PreprocessorInclude | PreprocessorIncludeNext | PreprocessorIf
            | PreprocessorIfdef | PreprocessorIfndef | PreprocessorElif | PreprocessorElse
            | PreprocessorEndif | PreprocessorPragma | PreprocessorError
            | PreprocessorWarning | PreprocessorLine | PreprocessorDefined
            | PreprocessorUserInclude | PreprocessorSysInclude | Sharp | DblSharp
            | PragmaOmpStart | PragmaOmpKeyword | PragmaKeyword => TokenCategory::Preprocessor,

            Alignas | Alignof | Asm | Auto | Bool | Break | Case | Catch | Char | Char8T
            | Char16T | Char32T | Class | Concept | Const | ConstCast | Consteval
            | Constexpr | Constinit | Continue | CoAwait | CoReturn | CoYield | Decltype
            | Default | Delete | Do | Double | DynamicCast | Else | Enum | Explicit
            | Export | Extern | False | Final | Finally | Float | For | Fortran | Friend
            | Goto | If | Import | Inline | Int | Long | Module | Mutable | Namespace | New
            | Noexcept | Nullptr | Operator | Override | Private | Protected | Public
            | Register | ReinterpretCast | Requires | Restrict | Return | Short | Signed
            | Sizeof | Static | StaticAssert | StaticCast | Struct | Switch | Template
            | This | ThreadLocal | Throw | True | Try | Typedef | Typeid | Typename
            | Typeof | TypeofUnqual | Union | Unsigned | Using | Virtual | Void | Volatile
            | WcharT | While | CAlignas | CAlignof | CAtomic | CBitInt | CBool | CComplex
            | CDecimal32 | CDecimal64 | CDecimal128 | CGeneric | CImaginary | CNoreturn
            | CPragma | CStaticAssert | CThreadLocal => TokenCategory::Keyword,

            InvalidCommentEnd | ErrInvalidChar => TokenCategory::Error,
        }
    }

    fn fixed_text(self) -> Option<&'static str> {
        use CppTokenId::*;
        Some(match self {
            Eq => "=",
            EqEq => "==",
            NotEq => "!=",
            Not => "!",
            Tilde => "~",
            Lt => "<",
            LtEq => "<=",
            LtLt => "<<",
            LtLtEq => "<<=",
            Gt => ">",
            GtEq => ">=",
            GtGt => ">>",
            GtGtEq => ">>=",
            Amp => "&",
            AmpAmp => "&&",
            AmpEq => "&=",
            Bar => "|",
            BarBar => "||",
            BarEq => "|=",
            Caret => "^",
            CaretEq => "^=",
            Plus => "+",
            PlusPlus => "++",
            PlusEq => "+=",
            Minus => "-",
            MinusMinus => "--",
            MinusEq => "-=",
            Star => "*",
            StarEq => "*=",
            Slash => "/",
            SlashEq => "/=",
            Percent => "%",
            PercentEq => "%=",
            Arrow => "->",
            ArrowMbr => "->*",
            Dot => ".",
            DotMbr => ".*",
            Ellipsis => "...",
            Scope => "::",
            Colon => ":",
            Semicolon => ";",
            Comma => ",",
            Question => "?",
            LParen => "(",
            RParen => ")",
            LBrace => "{",
            RBrace => "}",
            LBracket => "[",
            RBracket => "]",
            At => "@",
            BackSlash => "\\",
            InvalidCommentEnd => "*/",

            PreprocessorStart | Sharp => "#",
            PreprocessorStartAlt => "%:",
            DblSharp => "##",
            PreprocessorDefine => "define",
            PreprocessorUndef => "undef",
            PreprocessorInclude => "include",
            PreprocessorIncludeNext => "include_next",
            PreprocessorIf => "if",
            PreprocessorIfdef => "ifdef",
            PreprocessorIfndef => "ifndef",
            PreprocessorElif => "elif",
            PreprocessorElse => "else",
            PreprocessorEndif => "endif",
            PreprocessorPragma => "pragma",
            PreprocessorError => "error",
            PreprocessorWarning => "warning",
            PreprocessorLine => "line",
            PreprocessorDefined => "defined",
            PragmaOmpStart => "omp",

            Alignas => "alignas",
            Alignof => "alignof",
            Asm => "asm",
            Auto => "auto",
            Bool => "bool",
            Break => "break",
            Case => "case",
            Catch => "catch",
            Char => "char",
            Char8T => "char8_t",
            Char16T => "char16_t",
            Char32T => "char32_t",
            Class => "class",
            Concept => "concept",
            Const => "const",
            ConstCast => "const_cast",
            Consteval => "consteval",
            Constexpr => "constexpr",
            Constinit => "constinit",
            Continue => "continue",
            CoAwait => "co_await",
            CoReturn => "co_return",
            CoYield => "co_yield",
            Decltype => "decltype",
            Default => "default",
            Delete => "delete",
            Do => "do",
            Double => "double",
            DynamicCast => "dynamic_cast",
            Else => "else",
            Enum => "enum",
            Explicit => "explicit",
            Export => "export",
            Extern => "extern",
            False => "false",
            Final => "final",
            Finally => "finally",
            Float => "float",
            For => "for",
            Fortran => "fortran",
            Friend => "friend",
            Goto => "goto",
            If => "if",
            Import => "import",
            Inline => "inline",
            Int => "int",
            Long => "long",
            Module => "module",
            Mutable => "mutable",
            Namespace => "namespace",
            New => "new",
            Noexcept => "noexcept",
            Nullptr => "nullptr",
            Operator => "operator",
            Override => "override",
            Private => "private",
            Protected => "protected",
            Public => "public",
            Register => "register",
            ReinterpretCast => "reinterpret_cast",
            Requires => "requires",
            Restrict => "restrict",
            Return => "return",
            Short => "short",
            Signed => "signed",
            Sizeof => "sizeof",
            Static => "static",
            StaticAssert => "static_assert",
            StaticCast => "static_cast",
            Struct => "struct",
            Switch => "switch",
            Template => "template",
            This => "this",
            ThreadLocal => "thread_local",
            Throw => "throw",
            True => "true",
            Try => "try",
            Typedef => "typedef",
            Typeid => "typeid",
            Typename => "typename",
            Typeof => "typeof",
            TypeofUnqual => "typeof_unqual",
            Union => "union",
            Unsigned => "unsigned",
            Using => "using",
            Virtual => "virtual",
            Void => "void",
            Volatile => "volatile",
            WcharT => "wchar_t",
            While => "while",

            CAlignas => "_Alignas",
            CAlignof => "_Alignof",
            CAtomic => "_Atomic",
            CBitInt => "_BitInt",
            CBool => "_Bool",
            CComplex => "_Complex",
            CDecimal32 => "_Decimal32",
            CDecimal64 => "_Decimal64",
            CDecimal128 => "_Decimal128",
            CGeneric => "_Generic",
            CImaginary => "_Imaginary",
            CNoreturn => "_Noreturn",
            CPragma => "_Pragma",
            CStaticAssert => "_Static_assert",
            CThreadLocal => "_Thread_local",

            AlternateAnd => "and",
            AlternateAndEq => "and_eq",
            AlternateBitand => "bitand",
            AlternateBitor => "bitor",
            AlternateCompl => "compl",
            AlternateNot => "not",
            AlternateNotEq => "not_eq",
            AlternateOr => "or",
            AlternateOrEq => "or_eq",
            AlternateXor => "xor",
            AlternateXorEq => "xor_eq",

            _ => return None,
        })
    }
}
