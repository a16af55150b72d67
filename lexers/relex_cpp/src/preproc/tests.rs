#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;
use relex_core::Part;

fn lex<'a>(input: &'a str, filters: &'a PreprocFilters) -> Vec<Token<'a, CppTokenId>> {
    let mut scanner = PreprocScanner::new(input, filters);
    let mut out = Vec::new();
    while let Some(token) = scanner.next_token() {
        out.push(token);
    }
    out
}

fn pairs<'a>(input: &'a str, filters: &'a PreprocFilters) -> Vec<(CppTokenId, &'a str)> {
    lex(input, filters).iter().map(|t| (t.id(), t.text())).collect()
}

#[test]
fn define_with_string_body() {
    use CppTokenId::*;
    let filters = PreprocFilters::cpp();
    assert_eq!(
        pairs("#define X \"/*\"", &filters),
        vec![
            (PreprocessorStart, "#"),
            (PreprocessorDefine, "define"),
            (Whitespace, " "),
            (PreprocessorIdentifier, "X"),
            (Whitespace, " "),
            (StringLiteral, "\"/*\""),
        ]
    );
}

#[test]
fn include_target_is_one_token() {
    use CppTokenId::*;
    let filters = PreprocFilters::cpp();
    assert_eq!(
        pairs("#include <foo.h>", &filters),
        vec![
            (PreprocessorStart, "#"),
            (PreprocessorInclude, "include"),
            (Whitespace, " "),
            (PreprocessorSysInclude, "<foo.h>"),
        ]
    );
    let tokens = lex("#include \"bar.h\"", &filters);
    assert_eq!(tokens.last().unwrap().id(), PreprocessorUserInclude);
    assert_eq!(tokens.last().unwrap().text(), "\"bar.h\"");
}

#[test]
fn unterminated_include_target_splits_and_resumes() {
    let filters = PreprocFilters::cpp();
    let mut first = PreprocScanner::new("#include <foo.h", &filters);
    let mut last = None;
    while let Some(token) = first.next_token() {
        last = Some(token);
    }
    let head = last.unwrap();
    assert_eq!(head.id(), CppTokenId::PreprocessorSysInclude);
    assert_eq!(head.text(), "<foo.h");
    assert_eq!(head.part(), Part::Start);

    let mut second = PreprocScanner::resume(">", &filters, first.state());
    let tail = second.next_token().unwrap();
    assert_eq!(tail.id(), CppTokenId::PreprocessorSysInclude);
    assert_eq!(tail.text(), ">");
    assert_eq!(tail.part(), Part::Complete);
}

#[test]
fn defined_operator_in_conditional() {
    use CppTokenId::*;
    let filters = PreprocFilters::cpp();
    let ids: Vec<CppTokenId> = lex("#if defined(X) && Y", &filters)
        .iter()
        .map(Token::id)
        .collect();
    assert_eq!(
        ids,
        vec![
            PreprocessorStart,
            PreprocessorIf,
            Whitespace,
            PreprocessorDefined,
            LParen,
            PreprocessorIdentifier,
            RParen,
            Whitespace,
            AmpAmp,
            Whitespace,
            PreprocessorIdentifier,
        ]
    );
}

#[test]
fn openmp_pragma_keywords() {
    use CppTokenId::*;
    let filters = PreprocFilters::cpp();
    let substantive: Vec<(CppTokenId, &str)> = pairs("#pragma omp parallel private(i)", &filters)
        .into_iter()
        .filter(|(id, _)| *id != Whitespace)
        .collect();
    assert_eq!(
        substantive,
        vec![
            (PreprocessorStart, "#"),
            (PreprocessorPragma, "pragma"),
            (PragmaOmpStart, "omp"),
            (PragmaOmpKeyword, "parallel"),
            (PragmaOmpKeyword, "private"),
            (LParen, "("),
            (PreprocessorIdentifier, "i"),
            (RParen, ")"),
        ]
    );
}

#[test]
fn plain_pragma_keyword() {
    use CppTokenId::*;
    let filters = PreprocFilters::cpp();
    let ids: Vec<CppTokenId> = lex("#pragma once", &filters)
        .iter()
        .map(Token::id)
        .filter(|id| *id != Whitespace)
        .collect();
    assert_eq!(ids, vec![PreprocessorStart, PreprocessorPragma, PragmaKeyword]);
}

#[test]
fn general_keywords_apply_in_directive_body() {
    let filters = PreprocFilters::cpp();
    let ids: Vec<CppTokenId> = lex("#define Y int", &filters)
        .iter()
        .map(Token::id)
        .collect();
    assert!(ids.contains(&CppTokenId::Int));
    assert!(ids.contains(&CppTokenId::PreprocessorIdentifier));
}

#[test]
fn stringize_and_paste_operators() {
    use CppTokenId::*;
    let filters = PreprocFilters::cpp();
    let ids: Vec<CppTokenId> = lex("#define C(a,b) a##b #a", &filters)
        .iter()
        .map(Token::id)
        .collect();
    assert!(ids.contains(&DblSharp));
    assert!(ids.contains(&Sharp));
}

#[test]
fn escaped_newline_in_directive_name() {
    let filters = PreprocFilters::cpp();
    let tokens = lex("#de\\\nfine X", &filters);
    let define = tokens
        .iter()
        .find(|t| t.id() == CppTokenId::PreprocessorDefine)
        .unwrap();
    assert_eq!(define.text(), "de\\\nfine");
    assert!(!define.token_text().is_fixed());
}

#[test]
fn c_filter_rejects_cpp_keywords_in_body() {
    let filters = PreprocFilters::c();
    let ids: Vec<CppTokenId> = lex("#define Z class", &filters)
        .iter()
        .map(Token::id)
        .collect();
    assert!(!ids.contains(&CppTokenId::Class));
    let filters = PreprocFilters::cpp();
    let ids: Vec<CppTokenId> = lex("#define Z class", &filters)
        .iter()
        .map(Token::id)
        .collect();
    assert!(ids.contains(&CppTokenId::Class));
}

#[test]
fn restart_mid_directive_matches_single_pass() {
    let filters = PreprocFilters::cpp();
    let input = "#if defined(AB) && CD";
    let whole: Vec<(CppTokenId, String)> = lex(input, &filters)
        .iter()
        .map(|t| (t.id(), t.text().to_string()))
        .collect();

    // split after every token boundary and compare the combined stream
    let mut scanner = PreprocScanner::new(input, &filters);
    let mut offset = 0usize;
    let mut prefix: Vec<(CppTokenId, String)> = Vec::new();
    loop {
        let mut resumed = PreprocScanner::resume(&input[offset..], &filters, scanner.state());
        let mut combined = prefix.clone();
        while let Some(t) = resumed.next_token() {
            combined.push((t.id(), t.text().to_string()));
        }
        assert_eq!(combined, whole, "restart at byte offset {offset}");

        let Some(token) = scanner.next_token() else {
            break;
        };
        offset += token.text().len();
        prefix.push((token.id(), token.text().to_string()));
    }
}
