#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;

fn pairs(input: &str) -> Vec<(DoxygenTokenId, &str)> {
    let mut scanner = DoxygenScanner::new(input);
    let mut out = Vec::new();
    while let Some(token) = scanner.next_token() {
        out.push((token.id(), token.text()));
    }
    out
}

#[test]
fn tag_and_identifier() {
    use DoxygenTokenId::*;
    assert_eq!(
        pairs("/** @see X */"),
        vec![
            (OtherText, "/** "),
            (Tag, "@see"),
            (OtherText, " "),
            (Ident, "X"),
            (OtherText, " */"),
        ]
    );
}

#[test]
fn backslash_tags() {
    use DoxygenTokenId::*;
    assert_eq!(
        pairs("\\param n count"),
        vec![
            (Tag, "\\param"),
            (OtherText, " "),
            (Ident, "n"),
            (OtherText, " "),
            (Ident, "count"),
        ]
    );
}

#[test]
fn pointer_mark_only_at_start() {
    use DoxygenTokenId::*;
    let tokens = pairs("< trailing doc");
    assert_eq!(tokens[0], (PointerMark, "<"));
    // later `<` with no tag name stays text
    let tokens = pairs("a < b");
    assert_eq!(
        tokens,
        vec![(Ident, "a"), (OtherText, " "), (OtherText, "< "), (Ident, "b")]
    );
}

#[test]
fn html_tags() {
    use DoxygenTokenId::*;
    assert_eq!(
        pairs("x <b>y</b>"),
        vec![
            (Ident, "x"),
            (OtherText, " "),
            (HtmlTag, "<b>"),
            (Ident, "y"),
            (HtmlTag, "</b>"),
        ]
    );
    // unterminated html tag degrades to text
    let tokens = pairs("a <b x");
    assert_eq!(tokens[2].0, OtherText);
}

#[test]
fn control_symbols() {
    use DoxygenTokenId::*;
    assert_eq!(
        pairs("A#b.c"),
        vec![(Ident, "A"), (Hash, "#"), (Ident, "b"), (Dot, "."), (Ident, "c")]
    );
}

#[test]
fn lexing_is_lossless() {
    let input = "/*! \\brief Text with <em>markup</em>, A::B#m and @p arg. */";
    let rebuilt: String = pairs(input).iter().map(|(_, text)| *text).collect();
    assert_eq!(rebuilt, input);
}

#[test]
fn resumed_scanner_does_not_mark_pointer() {
    let mut first = DoxygenScanner::new("x");
    while first.next_token().is_some() {}
    let mut second = DoxygenScanner::resume("< y", first.state());
    let token = second.next_token().unwrap();
    assert_eq!(token.id(), DoxygenTokenId::OtherText);
}
