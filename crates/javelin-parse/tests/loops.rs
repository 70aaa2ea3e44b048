use javelin_ast::ast::{AssignOp, BinOp, Expr, Member, StepOp, Stmt};
use javelin_parse::parse_str;

fn body(stmts: &str) -> Vec<Stmt> {
    let unit = parse_str("<mem>", &format!("class T {{ void m() {{ {} }} }}", stmts))
        .expect("parse ok");
    let Member::Method(m) = &unit.types[0].members[0] else {
        panic!("expected a method");
    };
    m.body.clone()
}

#[test]
fn classic_three_clause_loop() {
    let stmts = body("for (int i = 0; i < 10; i++) { sum = sum + i; }");
    let Stmt::ForClassic {
        init,
        cond,
        update,
        body,
    } = &stmts[0]
    else {
        panic!("expected a classic for loop");
    };
    assert!(matches!(init.as_deref(), Some(Stmt::Local(d)) if d.name == "i"));
    assert!(matches!(
        cond,
        Some(Expr::Binary { op: BinOp::Lt, .. })
    ));
    assert!(matches!(
        update.as_deref(),
        Some(Stmt::Expr(Expr::Postfix {
            op: StepOp::Inc,
            ..
        }))
    ));
    assert_eq!(body.len(), 1);
}

#[test]
fn all_clauses_may_be_absent() {
    let stmts = body("for (;;) { }");
    let Stmt::ForClassic {
        init,
        cond,
        update,
        body,
    } = &stmts[0]
    else {
        panic!("expected a classic for loop");
    };
    assert!(init.is_none());
    assert!(cond.is_none());
    assert!(update.is_none());
    assert!(body.is_empty());
}

#[test]
fn init_may_be_a_plain_assignment() {
    let stmts = body("for (i = 0; i < n; i++) { }");
    let Stmt::ForClassic { init, .. } = &stmts[0] else {
        panic!("expected a classic for loop");
    };
    assert!(matches!(
        init.as_deref(),
        Some(Stmt::Assign {
            op: AssignOp::Set,
            ..
        })
    ));
}

#[test]
fn compound_update_clause() {
    let stmts = body("for (int i = 0; i < n; i += 2) { }");
    let Stmt::ForClassic { update, .. } = &stmts[0] else {
        panic!("expected a classic for loop");
    };
    assert!(matches!(
        update.as_deref(),
        Some(Stmt::Assign {
            op: AssignOp::Add,
            ..
        })
    ));
}

#[test]
fn colon_in_the_header_selects_the_range_form() {
    let stmts = body("for (String s : names) { count = count + 1; }");
    let Stmt::ForRange {
        var,
        iterable,
        body,
    } = &stmts[0]
    else {
        panic!("expected a range loop");
    };
    assert_eq!(var.ty.name, "String");
    assert_eq!(var.name, "s");
    assert!(matches!(iterable, Expr::Ident(n) if n == "names"));
    assert_eq!(body.len(), 1);
}

#[test]
fn range_form_over_a_member_expression() {
    let stmts = body("for (int v : box.items()) { }");
    let Stmt::ForRange { iterable, .. } = &stmts[0] else {
        panic!("expected a range loop");
    };
    assert!(matches!(iterable, Expr::Call { .. }));
}

#[test]
fn single_statement_loop_body() {
    let stmts = body("for (int i = 0; i < 3; i++) sum = sum + i;");
    let Stmt::ForClassic { body, .. } = &stmts[0] else {
        panic!("expected a classic for loop");
    };
    assert!(matches!(body[0], Stmt::Assign { .. }));
}
