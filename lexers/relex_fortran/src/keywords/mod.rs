//! Case-insensitive Fortran keyword classification.

use relex_core::KeywordFilter;

use crate::token_id::FortranTokenId;

/// Classifies an already-lowercased word as a Fortran keyword.
///
/// The table keeps the original highlighter's spelling quirk: the
/// misspelled `equivalance` classifies as [`FortranTokenId::KwEquivalence`]
/// alongside the correct spelling.
#[allow(
    clippy::too_many_lines,
    reason = "one arm per keyword spelling"
)]
#[must_use]
pub fn fortran_keyword(lower: &str) -> Option<FortranTokenId> {
    use FortranTokenId::*;
    Some(match lower {
        "allocatable" => KwAllocatable,
        "allocate" => KwAllocate,
        "apostrophe" => KwApostrophe,
        "assignment" => KwAssignment,
        "backspace" => KwBackspace,
        "bind" => KwBind,
        "block" => KwBlock,
        "blockdata" => KwBlockdata,
        "call" => KwCall,
        "case" => KwCase,
        "character" => KwCharacter,
        "close" => KwClose,
        "common" => KwCommon,
        "complex" => KwComplex,
        "contains" => KwContains,
        "continue" => KwContinue,
        "cycle" => KwCycle,
        "data" => KwData,
        "deallocate" => KwDeallocate,
        "default" => KwDefault,
        "dimension" => KwDimension,
        "do" => KwDo,
        "double" => KwDouble,
        "doubleprecision" => KwDoubleprecision,
        "elemental" => KwElemental,
        "else" => KwElse,
        "elseif" => KwElseif,
        "elsewhere" => KwElsewhere,
        "end" => KwEnd,
        "endassociate" => KwEndassociate,
        "endblock" => KwEndblock,
        "endblockdata" => KwEndblockdata,
        "enddo" => KwEnddo,
        "endenum" => KwEndenum,
        "endfile" => KwEndfile,
        "endforall" => KwEndforall,
        "endfunction" => KwEndfunction,
        "endif" => KwEndif,
        "endinterface" => KwEndinterface,
        "endmap" => KwEndmap,
        "endmodule" => KwEndmodule,
        "endprogram" => KwEndprogram,
        "endselect" => KwEndselect,
        "endstructure" => KwEndstructure,
        "endsubroutine" => KwEndsubroutine,
        "endtype" => KwEndtype,
        "endunion" => KwEndunion,
        "endwhere" => KwEndwhere,
        "entry" => KwEntry,
        "equivalence" | "equivalance" => KwEquivalence,
        "exit" => KwExit,
        "external" => KwExternal,
        "forall" => KwForall,
        "format" => KwFormat,
        "function" => KwFunction,
        "go" => KwGo,
        "goto" => KwGoto,
        "if" => KwIf,
        "implicit" => KwImplicit,
        "in" => KwIn,
        "include" => KwInclude,
        "inout" => KwInout,
        "inquire" => KwInquire,
        "integer" => KwInteger,
        "intent" => KwIntent,
        "interface" => KwInterface,
        "intrinsic" => KwIntrinsic,
        "kind" => KwKind,
        "len" => KwLen,
        "logical" => KwLogical,
        "map" => KwMap,
        "module" => KwModule,
        "namelist" => KwNamelist,
        "none" => KwNone,
        "nullify" => KwNullify,
        "only" => KwOnly,
        "open" => KwOpen,
        "operator" => KwOperator,
        "optional" => KwOptional,
        "out" => KwOut,
        "parameter" => KwParameter,
        "pointer" => KwPointer,
        "precision" => KwPrecision,
        "print" => KwPrint,
        "private" => KwPrivate,
        "procedure" => KwProcedure,
        "program" => KwProgram,
        "public" => KwPublic,
        "pure" => KwPure,
        "quote" => KwQuote,
        "read" => KwRead,
        "real" => KwReal,
        "recursive" => KwRecursive,
        "result" => KwResult,
        "return" => KwReturn,
        "rewind" => KwRewind,
        "save" => KwSave,
        "select" => KwSelect,
        "selectcase" => KwSelectcase,
        "selecttype" => KwSelecttype,
        "sequence" => KwSequence,
        "stat" => KwStat,
        "stop" => KwStop,
        "structure" => KwStructure,
        "subroutine" => KwSubroutine,
        "target" => KwTarget,
        "then" => KwThen,
        "to" => KwTo,
        "type" => KwType,
        "union" => KwUnion,
        "use" => KwUse,
        "where" => KwWhere,
        "while" => KwWhile,
        "write" => KwWrite,

        "int" => KwInt,
        "short" => KwShort,
        "long" => KwLong,
        "signed" => KwSigned,
        "unsigned" => KwUnsigned,
        "size_t" => KwSizeT,
        "int8_t" => KwInt8T,
        "int16_t" => KwInt16T,
        "int32_t" => KwInt32T,
        "int64_t" => KwInt64T,
        "int_least8_t" => KwIntLeast8T,
        "int_least16_t" => KwIntLeast16T,
        "int_least32_t" => KwIntLeast32T,
        "int_least64_t" => KwIntLeast64T,
        "int_fast8_t" => KwIntFast8T,
        "int_fast16_t" => KwIntFast16T,
        "int_fast32_t" => KwIntFast32T,
        "int_fast64_t" => KwIntFast64T,
        "intmax_t" => KwIntmaxT,
        "intptr_t" => KwIntptrT,
        "float" => KwFloat,
        "char" => KwChar,

        _ => return None,
    })
}

/// The standard Fortran keyword set, matched case-insensitively.
pub struct FortranKeywords;

impl KeywordFilter<FortranTokenId> for FortranKeywords {
    fn check(&self, text: &str) -> Option<FortranTokenId> {
        if text.is_ascii() {
            fortran_keyword(&text.to_ascii_lowercase())
        } else {
            None
        }
    }
}
