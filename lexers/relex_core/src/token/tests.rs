use super::{Part, Token, TokenCategory, TokenId, TokenText};
use pretty_assertions::assert_eq;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum TestId {
    Plus,
    Ident,
    Str,
}

impl TokenId for TestId {
    fn category(self) -> TokenCategory {
        match self {
            TestId::Plus => TokenCategory::Operator,
            TestId::Ident => TokenCategory::Identifier,
            TestId::Str => TokenCategory::Literal,
        }
    }

    fn fixed_text(self) -> Option<&'static str> {
        match self {
            TestId::Plus => Some("+"),
            TestId::Ident | TestId::Str => None,
        }
    }
}

#[test]
fn fixed_text_match_produces_flyweight() {
    let t = Token::new(TestId::Plus, "+");
    assert!(t.token_text().is_fixed());
    assert_eq!(t.text(), "+");
    assert_eq!(t.part(), Part::Complete);
}

#[test]
fn mismatched_text_falls_back_to_slice() {
    // A keyword spelled with an escaped newline keeps its raw slice.
    let t = Token::new(TestId::Plus, "+\\\n");
    assert!(!t.token_text().is_fixed());
    assert_eq!(t.text(), "+\\\n");
}

#[test]
fn flyweights_of_same_id_compare_equal() {
    let a = Token::new(TestId::Plus, "+");
    let b = Token::new(TestId::Plus, "+");
    assert_eq!(a, b);
    assert_eq!(a.text(), b.text());
}

#[test]
fn split_tokens_are_never_flyweights() {
    let t = Token::split(TestId::Str, "\"abc");
    assert_eq!(t.part(), Part::Start);
    assert!(!t.is_complete());
    assert!(!t.token_text().is_fixed());
}

#[test]
fn with_id_keeps_text_and_part() {
    let t = Token::new(TestId::Ident, "x").with_id(TestId::Str);
    assert_eq!(t.id(), TestId::Str);
    assert_eq!(t.text(), "x");
    assert_eq!(t.part(), Part::Complete);

    let s = Token::split(TestId::Ident, "abc").with_id(TestId::Str);
    assert_eq!(s.part(), Part::Start);
}

#[test]
fn category_delegates_to_id() {
    assert_eq!(Token::new(TestId::Plus, "+").category(), TokenCategory::Operator);
    assert_eq!(
        Token::new(TestId::Ident, "x").category(),
        TokenCategory::Identifier
    );
}

#[test]
fn token_text_as_str_matches_either_variant() {
    assert_eq!(TokenText::Fixed("+").as_str(), "+");
    assert_eq!(TokenText::Slice("abc").as_str(), "abc");
}
