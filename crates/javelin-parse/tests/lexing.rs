use javelin_parse::{Channel, Lexer, Tok, TokKind};

fn lex_all(src: &str) -> Vec<Tok> {
    let mut lexer = Lexer::new(src);
    let mut toks = Vec::new();
    loop {
        let tok = lexer.next_token();
        let done = tok.kind == TokKind::Eof;
        toks.push(tok);
        if done {
            break;
        }
    }
    toks
}

fn kinds(src: &str) -> Vec<TokKind> {
    lex_all(src).iter().map(|t| t.kind).collect()
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(
        kinds("class Foo int doubled while whilex"),
        vec![
            TokKind::KwClass,
            TokKind::Ident,
            TokKind::KwInt,
            TokKind::Ident,
            TokKind::KwWhile,
            TokKind::Ident,
            TokKind::Eof,
        ]
    );
}

#[test]
fn multi_char_symbols_win_over_prefixes() {
    assert_eq!(
        kinds(">>>= >>= <<= ... :: -> >= =="),
        vec![
            TokKind::UShrAssign,
            TokKind::ShrAssign,
            TokKind::ShlAssign,
            TokKind::Ellipsis,
            TokKind::ColonColon,
            TokKind::Arrow,
            TokKind::Ge,
            TokKind::EqEq,
            TokKind::Eof,
        ]
    );
}

#[test]
fn no_plain_shift_operators() {
    // the symbol table has no `>>`; it lexes as two `>`
    assert_eq!(
        kinds("a >> b"),
        vec![
            TokKind::Ident,
            TokKind::Gt,
            TokKind::Gt,
            TokKind::Ident,
            TokKind::Eof,
        ]
    );
}

#[test]
fn numbers_with_fraction_and_exponent() {
    let toks = lex_all("42 3.14 2e10 1.5e-3 7.e");
    let texts: Vec<&str> = toks.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts[0], "42");
    assert_eq!(texts[1], "3.14");
    assert_eq!(texts[2], "2e10");
    assert_eq!(texts[3], "1.5e-3");
    // `7.e` is a number, a dot, and an identifier: the fraction and exponent
    // need at least one digit
    assert_eq!(toks[4].kind, TokKind::Number);
    assert_eq!(texts[4], "7");
    assert_eq!(toks[5].kind, TokKind::Dot);
    assert_eq!(toks[6].kind, TokKind::Ident);
}

#[test]
fn string_and_char_literals_keep_raw_text() {
    let toks = lex_all(r#""hi \"there\"" 'a' '\n'"#);
    assert_eq!(toks[0].kind, TokKind::Str);
    assert_eq!(toks[0].text, r#""hi \"there\"""#);
    assert_eq!(toks[1].kind, TokKind::Char);
    assert_eq!(toks[1].text, "'a'");
    assert_eq!(toks[2].kind, TokKind::Char);
    assert_eq!(toks[2].text, r"'\n'");
}

#[test]
fn unterminated_string_degrades_to_unknown() {
    let toks = lex_all("\"abc");
    assert_eq!(toks[0].kind, TokKind::Unknown);
    assert_eq!(toks[0].text, "\"");
    assert_eq!(toks[1].kind, TokKind::Ident);
    assert_eq!(toks[1].text, "abc");
}

#[test]
fn unterminated_block_comment_is_not_a_comment() {
    assert_eq!(
        kinds("/* oops"),
        vec![TokKind::Slash, TokKind::Star, TokKind::Ident, TokKind::Eof]
    );
}

#[test]
fn comments_ride_the_hidden_channel() {
    let toks = lex_all("a // line\nb /* block */ c");
    let visible: Vec<TokKind> = toks
        .iter()
        .filter(|t| t.channel == Channel::Default)
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        visible,
        vec![TokKind::Ident, TokKind::Ident, TokKind::Ident, TokKind::Eof]
    );
    let hidden: Vec<&str> = toks
        .iter()
        .filter(|t| t.channel == Channel::Hidden)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(hidden, vec!["// line", "/* block */"]);
}

#[test]
fn unknown_fallback_never_stalls() {
    let toks = lex_all("#$ok");
    assert_eq!(toks[0].kind, TokKind::Unknown);
    assert_eq!(toks[0].text, "#");
    assert_eq!(toks[1].kind, TokKind::Unknown);
    assert_eq!(toks[1].text, "$");
    assert_eq!(toks[2].kind, TokKind::Ident);
}

#[test]
fn line_and_column_tracking() {
    let toks = lex_all("ab\n  cd /*x\ny*/ efg");
    assert_eq!((toks[0].line, toks[0].column), (1, 0)); // ab
    assert_eq!((toks[1].line, toks[1].column), (2, 2)); // cd
    assert_eq!((toks[2].line, toks[2].column), (2, 5)); // comment start
    assert_eq!((toks[3].line, toks[3].column), (3, 4)); // efg, after the comment's newline
}

#[test]
fn tokens_partition_the_input() {
    let src = "public class P {\n  // note\n  int x = 1; ??\n}\n";
    let toks = lex_all(src);

    let mut pos = 0usize;
    for tok in &toks {
        if tok.kind == TokKind::Eof {
            break;
        }
        let start = tok.span.start as usize;
        let end = tok.span.end as usize;
        // the gap before each token is whitespace only
        assert!(src[pos..start].chars().all(char::is_whitespace));
        assert_eq!(&src[start..end], tok.text);
        assert!(end <= src.len());
        pos = end;
    }
    assert!(src[pos..].chars().all(char::is_whitespace));
}

#[test]
fn eof_is_idempotent() {
    let mut lexer = Lexer::new("x");
    assert_eq!(lexer.next_token().kind, TokKind::Ident);
    let first = lexer.next_token();
    assert_eq!(first.kind, TokKind::Eof);
    for _ in 0..3 {
        let again = lexer.next_token();
        assert_eq!(again.kind, TokKind::Eof);
        assert_eq!(again.span, first.span);
    }
}
