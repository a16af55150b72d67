#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::keywords::CppKeywords;
use pretty_assertions::assert_eq;
use relex_core::Part;

static KEYWORDS: CppKeywords = CppKeywords;

fn lex(input: &str) -> Vec<Token<'_, CppTokenId>> {
    let mut scanner = CppScanner::new(input, &KEYWORDS);
    let mut out = Vec::new();
    while let Some(token) = scanner.next_token() {
        out.push(token);
    }
    out
}

fn ids(input: &str) -> Vec<CppTokenId> {
    lex(input).iter().map(Token::id).collect()
}

#[test]
fn keywords_and_identifiers() {
    use CppTokenId::*;
    let tokens = lex("char x;");
    let pairs: Vec<(CppTokenId, &str)> = tokens.iter().map(|t| (t.id(), t.text())).collect();
    assert_eq!(
        pairs,
        vec![
            (Char, "char"),
            (Whitespace, " "),
            (Identifier, "x"),
            (Semicolon, ";"),
        ]
    );
    assert!(tokens[0].token_text().is_fixed());
    assert!(!tokens[2].token_text().is_fixed());
}

#[test]
fn escaped_newline_inside_keyword() {
    let tokens = lex("ch\\\nar x");
    assert_eq!(tokens[0].id(), CppTokenId::Char);
    assert_eq!(tokens[0].text(), "ch\\\nar");
    assert!(!tokens[0].token_text().is_fixed());
}

#[test]
fn dollar_and_unicode_identifiers() {
    use CppTokenId::*;
    assert_eq!(ids("$a1 mød"), vec![Identifier, Whitespace, Identifier]);
}

#[test]
fn comment_kinds() {
    use CppTokenId::*;
    assert_eq!(ids("/**/"), vec![BlockComment]);
    assert_eq!(ids("/***/"), vec![DoxygenComment]);
    assert_eq!(ids("/*! d */"), vec![DoxygenComment]);
    assert_eq!(ids("/* a */"), vec![BlockComment]);
    assert_eq!(ids("/** d */"), vec![DoxygenComment]);
}

#[test]
fn line_comment_ends_before_newline() {
    use CppTokenId::*;
    let tokens = lex("// hi\nx");
    assert_eq!(tokens[0].id(), LineComment);
    assert_eq!(tokens[0].text(), "// hi");
    assert_eq!(tokens[1].id(), NewLine);
    assert_eq!(ids("/// d\n"), vec![DoxygenLineComment, NewLine]);
    assert_eq!(ids("//! d\n"), vec![DoxygenLineComment, NewLine]);
}

#[test]
fn comment_at_buffer_end_is_split() {
    let tokens = lex("// tail");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].part(), Part::Start);

    let tokens = lex("/* open");
    assert_eq!(tokens[0].id(), CppTokenId::BlockComment);
    assert_eq!(tokens[0].part(), Part::Start);
}

#[test]
fn stray_comment_close() {
    assert_eq!(ids("*/"), vec![CppTokenId::InvalidCommentEnd]);
}

#[test]
fn block_comment_resumes_across_buffers() {
    let mut first = CppScanner::new("/* one", &KEYWORDS);
    let head = first.next_token().unwrap();
    assert_eq!(head.part(), Part::Start);
    assert!(first.next_token().is_none());

    let mut second = CppScanner::resume(" two */x", &KEYWORDS, first.state());
    let tail = second.next_token().unwrap();
    assert_eq!(tail.id(), CppTokenId::BlockComment);
    assert_eq!(tail.text(), " two */");
    assert_eq!(tail.part(), Part::Complete);
    assert_eq!(second.next_token().unwrap().id(), CppTokenId::Identifier);
}

#[test]
fn string_literals() {
    use CppTokenId::*;
    assert_eq!(ids("\"abc\""), vec![StringLiteral]);
    assert_eq!(ids("L\"w\""), vec![StringLiteral]);
    assert_eq!(ids("u8\"x\""), vec![StringLiteral]);
    let tokens = lex("\"a\\\nb\"");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].part(), Part::Complete);
}

#[test]
fn unterminated_string_at_newline() {
    let tokens = lex("\"ab\nx");
    assert_eq!(tokens[0].id(), CppTokenId::StringLiteral);
    assert_eq!(tokens[0].text(), "\"ab");
    assert_eq!(tokens[0].part(), Part::Start);
    assert_eq!(tokens[1].id(), CppTokenId::NewLine);
    assert_eq!(tokens[2].id(), CppTokenId::Identifier);
}

#[test]
fn string_resumes_across_buffers() {
    let mut first = CppScanner::new("\"ab", &KEYWORDS);
    assert_eq!(first.next_token().unwrap().part(), Part::Start);

    let mut second = CppScanner::resume("cd\"", &KEYWORDS, first.state());
    let tail = second.next_token().unwrap();
    assert_eq!(tail.id(), CppTokenId::StringLiteral);
    assert_eq!(tail.text(), "cd\"");
    assert_eq!(tail.part(), Part::Complete);
}

#[test]
fn string_split_after_escape_keeps_escape_pending() {
    // The buffer ends right after a backslash; the first character of the
    // next window is escaped, so the quote there does not close early.
    let mut first = CppScanner::new("\"ab\\", &KEYWORDS);
    assert_eq!(first.next_token().unwrap().part(), Part::Start);

    let mut second = CppScanner::resume("\"c\"", &KEYWORDS, first.state());
    let tail = second.next_token().unwrap();
    assert_eq!(tail.text(), "\"c\"");
    assert_eq!(tail.part(), Part::Complete);
}

#[test]
fn char_literals() {
    use CppTokenId::*;
    assert_eq!(ids("'a'"), vec![CharLiteral]);
    let tokens = lex("L'w'");
    assert_eq!(tokens[0].id(), CharLiteral);
    assert_eq!(tokens[0].text(), "L'w'");
}

#[test]
fn raw_string_literals() {
    let tokens = lex("R\"(ab)\"");
    assert_eq!(tokens[0].id(), CppTokenId::RawStringLiteral);
    assert_eq!(tokens[0].text(), "R\"(ab)\"");

    // a `)"` that does not match the delimiter stays inside the body
    let tokens = lex("R\"d(a)\" b)d\"");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].text(), "R\"d(a)\" b)d\"");
}

#[test]
fn integer_suffixes() {
    use CppTokenId::*;
    assert_eq!(ids("0L"), vec![LongLiteral]);
    assert_eq!(ids("0LL"), vec![LongLongLiteral]);
    assert_eq!(ids("6u"), vec![UnsignedLiteral]);
    assert_eq!(ids("1UL"), vec![UnsignedLongLiteral]);
    assert_eq!(ids("2ull"), vec![UnsignedLongLongLiteral]);
    assert_eq!(ids("10lu"), vec![UnsignedLongLiteral]);
    assert_eq!(ids("42"), vec![IntLiteral]);
}

#[test]
fn float_literals() {
    use CppTokenId::*;
    assert_eq!(ids("7e3"), vec![DoubleLiteral]);
    assert_eq!(ids("1.5f"), vec![FloatLiteral]);
    assert_eq!(ids(".3"), vec![DoubleLiteral]);
    assert_eq!(ids("1.5"), vec![DoubleLiteral]);
    assert_eq!(ids("2.0e-3"), vec![DoubleLiteral]);
}

#[test]
fn hex_literal_stops_at_non_hex_digit() {
    let tokens = lex("0Xbcg");
    assert_eq!(tokens[0].id(), CppTokenId::IntLiteral);
    assert_eq!(tokens[0].text(), "0Xbc");
    assert_eq!(tokens[1].id(), CppTokenId::Identifier);
    assert_eq!(tokens[1].text(), "g");
}

#[test]
fn exponent_without_digits_closes_the_number() {
    use CppTokenId::*;
    assert_eq!(ids("7e+"), vec![IntLiteral, Identifier, Plus]);
}

#[test]
fn operators() {
    use CppTokenId::*;
    assert_eq!(ids("a->b"), vec![Identifier, Arrow, Identifier]);
    assert_eq!(ids("x<<=1"), vec![Identifier, LtLtEq, IntLiteral]);
    assert_eq!(ids("a::b"), vec![Identifier, Scope, Identifier]);
    assert_eq!(ids("p->*q"), vec![Identifier, ArrowMbr, Identifier]);
    assert_eq!(ids("f(...)"), vec![Identifier, LParen, Ellipsis, RParen]);
    assert_eq!(ids("a.*b"), vec![Identifier, DotMbr, Identifier]);
    assert_eq!(ids("n%=2"), vec![Identifier, PercentEq, IntLiteral]);
}

#[test]
fn newline_folding() {
    let tokens = lex("\r\n");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].id(), CppTokenId::NewLine);
    assert_eq!(tokens[0].text(), "\r\n");
}

#[test]
fn escaped_line() {
    use CppTokenId::*;
    assert_eq!(ids("\\\n"), vec![EscapedLine]);
    assert_eq!(ids("\\x"), vec![BackSlash, Identifier]);
}

#[test]
fn directive_consumes_whole_line_including_newline() {
    let tokens = lex("#include <a.h>\nint x;");
    assert_eq!(tokens[0].id(), CppTokenId::PreprocessorDirective);
    assert_eq!(tokens[0].text(), "#include <a.h>\n");
    assert_eq!(tokens[1].id(), CppTokenId::Int);
}

#[test]
fn directive_skips_nested_literals_and_comments() {
    // the `/*` inside the string must not open a comment; the real block
    // comment may span a newline without ending the directive
    let tokens = lex("#define C 1 \"/*\" /* \n@see C */\nz");
    assert_eq!(tokens[0].id(), CppTokenId::PreprocessorDirective);
    assert_eq!(tokens[0].text(), "#define C 1 \"/*\" /* \n@see C */\n");
    assert_eq!(tokens[1].id(), CppTokenId::Identifier);
    assert_eq!(tokens[1].text(), "z");
}

#[test]
fn directive_continues_over_escaped_newline() {
    let tokens = lex("#de\\\nfine X\n");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].text(), "#de\\\nfine X\n");
}

#[test]
fn directive_unterminated_string_ends_at_newline() {
    let tokens = lex("#define X \"open\ny");
    assert_eq!(tokens[0].id(), CppTokenId::PreprocessorDirective);
    assert_eq!(tokens[0].text(), "#define X \"open\n");
    assert_eq!(tokens[1].id(), CppTokenId::Identifier);
}

#[test]
fn directive_resumes_inside_block_comment() {
    let mut first = CppScanner::new("#if X /* note", &KEYWORDS);
    let head = first.next_token().unwrap();
    assert_eq!(head.id(), CppTokenId::PreprocessorDirective);
    assert_eq!(head.part(), Part::Start);

    let mut second = CppScanner::resume(" more */ 1\n", &KEYWORDS, first.state());
    let tail = second.next_token().unwrap();
    assert_eq!(tail.id(), CppTokenId::PreprocessorDirective);
    assert_eq!(tail.text(), " more */ 1\n");
    assert_eq!(tail.part(), Part::Complete);
}

#[test]
fn percent_colon_starts_a_directive() {
    let tokens = lex("%:define Y\n");
    assert_eq!(tokens[0].id(), CppTokenId::PreprocessorDirective);
    assert_eq!(tokens[0].text(), "%:define Y\n");
}

#[test]
fn invalid_character() {
    let tokens = lex("€");
    assert_eq!(tokens[0].id(), CppTokenId::ErrInvalidChar);
}

#[test]
fn lexing_is_lossless() {
    let input = "int main() { return \"a\\\nb\" /* c */ + 1.5f; }\n#define X 1\n";
    let rebuilt: String = lex(input).iter().map(Token::text).collect();
    assert_eq!(rebuilt, input);
}

#[test]
fn restart_matches_single_pass() {
    let input = "char s[] = \"split here\"; // tail\nint n = 0x1F;\n";
    let whole = lex(input);

    // split the buffer at every token boundary and re-lex the remainder
    let mut scanner = CppScanner::new(input, &KEYWORDS);
    let mut offset = 0usize;
    let mut prefix: Vec<(CppTokenId, String)> = Vec::new();
    loop {
        let state = scanner.state();
        let resumed_tokens: Vec<(CppTokenId, String)> = {
            let mut resumed = CppScanner::resume(&input[offset..], &KEYWORDS, state);
            let mut out = prefix.clone();
            while let Some(t) = resumed.next_token() {
                out.push((t.id(), t.text().to_string()));
            }
            out
        };
        let expected: Vec<(CppTokenId, String)> = whole
            .iter()
            .map(|t| (t.id(), t.text().to_string()))
            .collect();
        assert_eq!(resumed_tokens, expected, "restart at byte offset {offset}");

        let Some(token) = scanner.next_token() else {
            break;
        };
        offset += token.text().len();
        prefix.push((token.id(), token.text().to_string()));
    }
}

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod props {
    use super::{lex, Token};
    use proptest::prelude::*;

    proptest! {
        /// Concatenated token texts reproduce the input, whatever it holds.
        #[test]
        fn scanning_is_lossless(
            s in "[a-zA-Z0-9_ .'\"!\t\r\n*/=<>:%&(),;+#R\\\\€-]{0,48}",
        ) {
            let rebuilt: String = lex(&s).iter().map(Token::text).collect();
            prop_assert_eq!(rebuilt, s);
        }
    }
}
