//! Fortran token inventory.
//!
//! Keywords cover the Fortran 95 surface the original highlighter knew,
//! including its historical spelling quirk (`equivalance`) and the
//! C-interoperability type names. Keyword classification is
//! case-insensitive; the fixed spellings below are the lowercase forms, so
//! an uppercase keyword token keeps its raw slice text.

use relex_core::{TokenCategory, TokenId};

/// Token ids produced by [`FortranScanner`](crate::FortranScanner).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum FortranTokenId {
    Whitespace,
    NewLine,

    /// Whole-line comment introduced by `c`/`C`/`*` in column 1.
    LineCommentFixed,
    /// `!` comment, recognized in both source forms.
    LineCommentFree,
    /// Non-blank, non-`0` character in column 6 of an otherwise blank line
    /// prefix (fixed form).
    LineContinuationFixed,

    Identifier,
    /// `'` directly after an identifier (not a string start).
    ApostropheChar,

    // Literals
    IntLiteral,
    RealLiteral,
    BinaryLiteral,
    OctalLiteral,
    HexLiteral,
    StringLiteral,

    // Dot operators (`.true.`/`.false.` are literals)
    DotEq,
    DotNe,
    DotLt,
    DotLe,
    DotGt,
    DotGe,
    DotNot,
    DotAnd,
    DotOr,
    DotEqv,
    DotNeqv,
    DotTrue,
    DotFalse,

    // Operators and separators
    Power,
    Star,
    Concat,
    Slash,
    SlashEq,
    EqEq,
    Eq,
    EqGt,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Plus,
    Minus,
    LParen,
    RParen,
    Comma,
    Colon,
    DoubleColon,
    Semicolon,
    Percent,
    Amp,
    Dot,

    // Keywords
    KwAllocatable,
    KwAllocate,
    KwApostrophe,
    KwAssignment,
    KwBackspace,
    KwBind,
    KwBlock,
    KwBlockdata,
    KwCall,
    KwCase,
    KwCharacter,
    KwClose,
    KwCommon,
    KwComplex,
    KwContains,
    KwContinue,
    KwCycle,
    KwData,
    KwDeallocate,
    KwDefault,
    KwDimension,
    KwDo,
    KwDouble,
    KwDoubleprecision,
    KwElemental,
    KwElse,
    KwElseif,
    KwElsewhere,
    KwEnd,
    KwEndassociate,
    KwEndblock,
    KwEndblockdata,
    KwEnddo,
    KwEndenum,
    KwEndfile,
    KwEndforall,
    KwEndfunction,
    KwEndif,
    KwEndinterface,
    KwEndmap,
    KwEndmodule,
    KwEndprogram,
    KwEndselect,
    KwEndstructure,
    KwEndsubroutine,
    KwEndtype,
    KwEndunion,
    KwEndwhere,
    KwEntry,
    KwEquivalence,
    KwExit,
    KwExternal,
    KwForall,
    KwFormat,
    KwFunction,
    KwGo,
    KwGoto,
    KwIf,
    KwImplicit,
    KwIn,
    KwInclude,
    KwInout,
    KwInquire,
    KwInteger,
    KwIntent,
    KwInterface,
    KwIntrinsic,
    KwKind,
    KwLen,
    KwLogical,
    KwMap,
    KwModule,
    KwNamelist,
    KwNone,
    KwNullify,
    KwOnly,
    KwOpen,
    KwOperator,
    KwOptional,
    KwOut,
    KwParameter,
    KwPointer,
    KwPrecision,
    KwPrint,
    KwPrivate,
    KwProcedure,
    KwProgram,
    KwPublic,
    KwPure,
    KwQuote,
    KwRead,
    KwReal,
    KwRecursive,
    KwResult,
    KwReturn,
    KwRewind,
    KwSave,
    KwSelect,
    KwSelectcase,
    KwSelecttype,
    KwSequence,
    KwStat,
    KwStop,
    KwStructure,
    KwSubroutine,
    KwTarget,
    KwThen,
    KwTo,
    KwType,
    KwUnion,
    KwUse,
    KwWhere,
    KwWhile,
    KwWrite,

    // C interoperability type names
    KwInt,
    KwShort,
    KwLong,
    KwSigned,
    KwUnsigned,
    KwSizeT,
    KwInt8T,
    KwInt16T,
    KwInt32T,
    KwInt64T,
    KwIntLeast8T,
    KwIntLeast16T,
    KwIntLeast32T,
    KwIntLeast64T,
    KwIntFast8T,
    KwIntFast16T,
    KwIntFast32T,
    KwIntFast64T,
    KwIntmaxT,
    KwIntptrT,
    KwFloat,
    KwChar,

    // Errors
    ErrInvalidChar,
    ErrIncompleteStringLiteral,
    ErrInvalidBinaryLiteral,
    ErrInvalidOctalLiteral,
    ErrInvalidHexLiteral,
    ErrInvalidInteger,
}

impl TokenId for FortranTokenId {
    fn category(self) -> TokenCategory {
        use FortranTokenId::*;
        match self {
            Whitespace | NewLine | LineContinuationFixed => TokenCategory::Whitespace,

            LineCommentFixed | LineCommentFree => TokenCategory::Comment,

            Identifier => TokenCategory::Identifier,

            IntLiteral | RealLiteral | BinaryLiteral | OctalLiteral | HexLiteral
            | StringLiteral | DotTrue | DotFalse => TokenCategory::Literal,

            DotEq | DotNe | DotLt | DotLe | DotGt | DotGe | DotNot | DotAnd | DotOr | DotEqv
            | DotNeqv | Power | Star | Concat | Slash | SlashEq | EqEq | Eq | EqGt | Lt
            | LtEq | Gt | GtEq | Plus | Minus | LParen | RParen | Comma | Colon
            | DoubleColon | Semicolon | Percent | Amp | Dot | ApostropheChar => {
                TokenCategory::Operator
            }

            ErrInvalidChar | ErrIncompleteStringLiteral | ErrInvalidBinaryLiteral
            | ErrInvalidOctalLiteral | ErrInvalidHexLiteral | ErrInvalidInteger => {
                TokenCategory::Error
            }

            _ => TokenCategory::Keyword,
        }
    }

    #[allow(
        clippy::too_many_lines,
        reason = "one arm per fixed keyword and operator spelling"
    )]
    fn fixed_text(self) -> Option<&'static str> {
        use FortranTokenId::*;
        Some(match self {
            ApostropheChar => "'",
            DotEq => ".eq.",
            DotNe => ".ne.",
            DotLt => ".lt.",
            DotLe => ".le.",
            DotGt => ".gt.",
            DotGe => ".ge.",
            DotNot => ".not.",
            DotAnd => ".and.",
            DotOr => ".or.",
            DotEqv => ".eqv.",
            DotNeqv => ".neqv.",
            DotTrue => ".true.",
            DotFalse => ".false.",
            Power => "**",
            Star => "*",
            Concat => "//",
            Slash => "/",
            SlashEq => "/=",
            EqEq => "==",
            Eq => "=",
            EqGt => "=>",
            Lt => "<",
            LtEq => "<=",
            Gt => ">",
            GtEq => ">=",
            Plus => "+",
            Minus => "-",
            LParen => "(",
            RParen => ")",
            Comma => ",",
            Colon => ":",
            DoubleColon => "::",
            Semicolon => ";",
            Percent => "%",
            Amp => "&",
            Dot => ".",

            KwAllocatable => "allocatable",
            KwAllocate => "allocate",
            KwApostrophe => "apostrophe",
            KwAssignment => "assignment",
            KwBackspace => "backspace",
            KwBind => "bind",
            KwBlock => "block",
            KwBlockdata => "blockdata",
            KwCall => "call",
            KwCase => "case",
            KwCharacter => "character",
            KwClose => "close",
            KwCommon => "common",
            KwComplex => "complex",
            KwContains => "contains",
            KwContinue => "continue",
            KwCycle => "cycle",
            KwData => "data",
            KwDeallocate => "deallocate",
            KwDefault => "default",
            KwDimension => "dimension",
            KwDo => "do",
            KwDouble => "double",
            KwDoubleprecision => "doubleprecision",
            KwElemental => "elemental",
            KwElse => "else",
            KwElseif => "elseif",
            KwElsewhere => "elsewhere",
            KwEnd => "end",
            KwEndassociate => "endassociate",
            KwEndblock => "endblock",
            KwEndblockdata => "endblockdata",
            KwEnddo => "enddo",
            KwEndenum => "endenum",
            KwEndfile => "endfile",
            KwEndforall => "endforall",
            KwEndfunction => "endfunction",
            KwEndif => "endif",
            KwEndinterface => "endinterface",
            KwEndmap => "endmap",
            KwEndmodule => "endmodule",
            KwEndprogram => "endprogram",
            KwEndselect => "endselect",
            KwEndstructure => "endstructure",
            KwEndsubroutine => "endsubroutine",
            KwEndtype => "endtype",
            KwEndunion => "endunion",
            KwEndwhere => "endwhere",
            KwEntry => "entry",
            KwEquivalence => "equivalence",
            KwExit => "exit",
            KwExternal => "external",
            KwForall => "forall",
            KwFormat => "format",
            KwFunction => "function",
            KwGo => "go",
            KwGoto => "goto",
            KwIf => "if",
            KwImplicit => "implicit",
            KwIn => "in",
            KwInclude => "include",
            KwInout => "inout",
            KwInquire => "inquire",
            KwInteger => "integer",
            KwIntent => "intent",
            KwInterface => "interface",
            KwIntrinsic => "intrinsic",
            KwKind => "kind",
            KwLen => "len",
            KwLogical => "logical",
            KwMap => "map",
            KwModule => "module",
            KwNamelist => "namelist",
            KwNone => "none",
            KwNullify => "nullify",
            KwOnly => "only",
            KwOpen => "open",
            KwOperator => "operator",
            KwOptional => "optional",
            KwOut => "out",
            KwParameter => "parameter",
            KwPointer => "pointer",
            KwPrecision => "precision",
            KwPrint => "print",
            KwPrivate => "private",
            KwProcedure => "procedure",
            KwProgram => "program",
            KwPublic => "public",
            KwPure => "pure",
            KwQuote => "quote",
            KwRead => "read",
            KwReal => "real",
            KwRecursive => "recursive",
            KwResult => "result",
            KwReturn => "return",
            KwRewind => "rewind",
            KwSave => "save",
            KwSelect => "select",
            KwSelectcase => "selectcase",
            KwSelecttype => "selecttype",
            KwSequence => "sequence",
            KwStat => "stat",
            KwStop => "stop",
            KwStructure => "structure",
            KwSubroutine => "subroutine",
            KwTarget => "target",
            KwThen => "then",
            KwTo => "to",
            KwType => "type",
            KwUnion => "union",
            KwUse => "use",
            KwWhere => "where",
            KwWhile => "while",
            KwWrite => "write",

            KwInt => "int",
            KwShort => "short",
            KwLong => "long",
            KwSigned => "signed",
            KwUnsigned => "unsigned",
            KwSizeT => "size_t",
            KwInt8T => "int8_t",
            KwInt16T => "int16_t",
            KwInt32T => "int32_t",
            KwInt64T => "int64_t",
            KwIntLeast8T => "int_least8_t",
            KwIntLeast16T => "int_least16_t",
            KwIntLeast32T => "int_least32_t",
            KwIntLeast64T => "int_least64_t",
            KwIntFast8T => "int_fast8_t",
            KwIntFast16T => "int_fast16_t",
            KwIntFast32T => "int_fast32_t",
            KwIntFast64T => "int_fast64_t",
            KwIntmaxT => "intmax_t",
            KwIntptrT => "intptr_t",
            KwFloat => "float",
            KwChar => "char",

            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests;
