use javelin_parse::{parse_str, SyntaxError, TokKind};

#[test]
fn missing_semicolon_is_an_error() {
    let err = parse_str("<mem>", "class C { int x }").unwrap_err().to_string();
    assert!(err.contains("expected Semicolon"), "unexpected message: {err}");
}

#[test]
fn unclosed_class_body_names_the_class() {
    let err = parse_str("<mem>", "class Point { int x;")
        .unwrap_err()
        .to_string();
    assert!(err.contains("Point"), "unexpected message: {err}");
    assert!(err.contains("expected RBrace"), "unexpected message: {err}");
}

#[test]
fn unclosed_method_body_names_the_method() {
    let err = parse_str("<mem>", "class C { void m() { if (x < 1) { } ")
        .unwrap_err()
        .to_string();
    assert!(err.contains("body of method `m`"), "unexpected message: {err}");
}

#[test]
fn error_is_structured_and_positioned() {
    let err = parse_str("<mem>", "class Point { int x;").unwrap_err();
    let syn = err
        .downcast_ref::<SyntaxError>()
        .expect("a SyntaxError under the anyhow boundary");
    assert_eq!(syn.expected, TokKind::RBrace);
    assert_eq!(syn.found, TokKind::Eof);
    assert_eq!(syn.line, 1);
}

#[test]
fn error_carries_the_offending_line() {
    let err = parse_str("<mem>", "class C {\n  int x\n}").unwrap_err();
    let syn = err.downcast_ref::<SyntaxError>().expect("a SyntaxError");
    assert_eq!(syn.expected, TokKind::Semicolon);
    assert_eq!(syn.line, 3);
}

#[test]
fn expression_at_eof_is_an_error() {
    let err = parse_str("<mem>", "class C { int x = ").unwrap_err().to_string();
    assert!(err.contains("found Eof"), "unexpected message: {err}");
}

#[test]
fn missing_for_separator_is_an_error() {
    let err = parse_str("<mem>", "class C { void m() { for (int i = 0 i < 3; i++) { } } }")
        .unwrap_err()
        .to_string();
    assert!(err.contains("expected Semicolon"), "unexpected message: {err}");
}
