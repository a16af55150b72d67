use pretty_assertions::assert_eq;
use relex_core::{TokenCategory, TokenId};

use super::FortranTokenId;

#[test]
fn categories() {
    assert_eq!(
        FortranTokenId::Whitespace.category(),
        TokenCategory::Whitespace
    );
    assert_eq!(
        FortranTokenId::LineContinuationFixed.category(),
        TokenCategory::Whitespace
    );
    assert_eq!(
        FortranTokenId::LineCommentFixed.category(),
        TokenCategory::Comment
    );
    assert_eq!(FortranTokenId::KwDo.category(), TokenCategory::Keyword);
    assert_eq!(FortranTokenId::KwInt8T.category(), TokenCategory::Keyword);
    assert_eq!(FortranTokenId::DotAnd.category(), TokenCategory::Operator);
    assert_eq!(FortranTokenId::DotTrue.category(), TokenCategory::Literal);
    assert_eq!(FortranTokenId::DotFalse.category(), TokenCategory::Literal);
    assert_eq!(
        FortranTokenId::StringLiteral.category(),
        TokenCategory::Literal
    );
    assert_eq!(
        FortranTokenId::ErrInvalidInteger.category(),
        TokenCategory::Error
    );
}

#[test]
fn fixed_text_spellings() {
    assert_eq!(FortranTokenId::Power.fixed_text(), Some("**"));
    assert_eq!(FortranTokenId::Concat.fixed_text(), Some("//"));
    assert_eq!(FortranTokenId::EqGt.fixed_text(), Some("=>"));
    assert_eq!(FortranTokenId::DoubleColon.fixed_text(), Some("::"));
    assert_eq!(FortranTokenId::DotNeqv.fixed_text(), Some(".neqv."));
    assert_eq!(FortranTokenId::KwEquivalence.fixed_text(), Some("equivalence"));
    assert_eq!(
        FortranTokenId::KwIntLeast64T.fixed_text(),
        Some("int_least64_t")
    );
    assert_eq!(FortranTokenId::Identifier.fixed_text(), None);
    assert_eq!(FortranTokenId::IntLiteral.fixed_text(), None);
    assert_eq!(FortranTokenId::ErrInvalidChar.fixed_text(), None);
}
