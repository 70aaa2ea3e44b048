//! Python source generation from the parsed AST.
//!
//! `generate` is a pure function from tree to text: indentation is an
//! explicit depth parameter threaded through the emit calls, so unrelated
//! invocations share no state. Structural rewrites that cannot be resolved
//! (irregular `for` headers, inline increment expressions) degrade to
//! semantically faithful fallback forms instead of erroring.

use javelin_ast::ast::{
    AssignOp, BinOp, ClassDecl, CompilationUnit, ElseArm, Expr, FieldDecl, IfStmt, LocalDecl,
    Member, MethodDecl, Param, Stmt, StepOp, SwitchArm, TypeRef,
};

const INDENT: &str = "    ";

pub fn generate(unit: &CompilationUnit) -> String {
    let mut classes = Vec::new();
    for class in &unit.types {
        let mut out = String::new();
        emit_class(&mut out, 0, class);
        classes.push(out.trim_end().to_string());
    }
    let mut text = classes.join("\n\n");
    if !text.is_empty() {
        text.push('\n');
    }
    text
}

fn line(out: &mut String, depth: usize, text: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(text);
    out.push('\n');
}

fn emit_class(out: &mut String, depth: usize, class: &ClassDecl) {
    line(out, depth, &format!("class {}:", class.name));
    if class.members.is_empty() {
        line(out, depth + 1, "pass");
        return;
    }
    for member in &class.members {
        match member {
            Member::Field(field) => emit_field(out, depth + 1, field),
            Member::Method(method) => emit_method(out, depth + 1, method),
        }
    }
}

fn emit_field(out: &mut String, depth: usize, field: &FieldDecl) {
    line(out, depth, &declaration(&field.ty, &field.name, &field.init));
}

fn emit_method(out: &mut String, depth: usize, method: &MethodDecl) {
    if method.modifiers.is_static() {
        line(out, depth, "@staticmethod");
    }

    let mut params: Vec<String> = Vec::new();
    if !method.modifiers.is_static() {
        params.push("self".to_string());
    }
    for Param { ty, name } in &method.params {
        params.push(format!("{}: {}", name, map_type(ty)));
    }

    line(
        out,
        depth,
        &format!(
            "def {}({}) -> {}:",
            method.name,
            params.join(", "),
            map_type(&method.ret)
        ),
    );
    emit_suite(out, depth + 1, &method.body);
}

/// An indented statement list; an empty one becomes `pass`.
fn emit_suite(out: &mut String, depth: usize, stmts: &[Stmt]) {
    if stmts.is_empty() {
        line(out, depth, "pass");
        return;
    }
    for stmt in stmts {
        emit_stmt(out, depth, stmt);
    }
}

fn emit_stmt(out: &mut String, depth: usize, stmt: &Stmt) {
    match stmt {
        Stmt::Local(decl) => line(out, depth, &declaration(&decl.ty, &decl.name, &decl.init)),
        Stmt::If(if_stmt) => emit_if(out, depth, if_stmt),
        Stmt::While { cond, body } => {
            line(out, depth, &format!("while {}:", expr_src(cond)));
            emit_suite(out, depth + 1, body);
        }
        Stmt::DoWhile { body, cond } => {
            // run-at-least-once loop: negated-condition break check at the end
            line(out, depth, "while True:");
            for s in body {
                emit_stmt(out, depth + 1, s);
            }
            line(out, depth + 1, &format!("if not ({}):", expr_src(cond)));
            line(out, depth + 2, "break");
        }
        Stmt::ForClassic {
            init,
            cond,
            update,
            body,
        } => emit_for_classic(out, depth, init, cond, update, body),
        Stmt::ForRange {
            var,
            iterable,
            body,
        } => {
            line(
                out,
                depth,
                &format!("for {} in {}:", var.name, expr_src(iterable)),
            );
            emit_suite(out, depth + 1, body);
        }
        Stmt::Switch { subject, arms } => {
            line(out, depth, &format!("match {}:", expr_src(subject)));
            if arms.is_empty() {
                line(out, depth + 1, "case _:");
                line(out, depth + 2, "pass");
                return;
            }
            for arm in arms {
                match arm {
                    SwitchArm::Case { value, body } => {
                        line(out, depth + 1, &format!("case {}:", expr_src(value)));
                        emit_suite(out, depth + 2, body);
                    }
                    SwitchArm::Default { body } => {
                        line(out, depth + 1, "case _:");
                        emit_suite(out, depth + 2, body);
                    }
                }
            }
        }
        Stmt::Return(None) => line(out, depth, "return"),
        Stmt::Return(Some(value)) => line(out, depth, &format!("return {}", expr_src(value))),
        Stmt::Break => line(out, depth, "break"),
        Stmt::Continue => line(out, depth, "continue"),
        Stmt::Block(stmts) => {
            // Python has no bare block statement; inline at the same depth
            for s in stmts {
                emit_stmt(out, depth, s);
            }
        }
        Stmt::Assign { target, op, value } => {
            let sign = match op {
                AssignOp::Set => "=",
                AssignOp::Add => "+=",
                AssignOp::Sub => "-=",
                AssignOp::Mul => "*=",
                AssignOp::Div => "/=",
                AssignOp::Mod => "%=",
            };
            line(
                out,
                depth,
                &format!("{} {} {}", expr_src(target), sign, expr_src(value)),
            );
        }
        Stmt::Expr(expr) => emit_expr_stmt(out, depth, expr),
    }
}

/// Statement-position expressions. Increment and decrement have no Python
/// operator and become augmented assignments here; unknown nodes become an
/// inert diagnostic comment.
fn emit_expr_stmt(out: &mut String, depth: usize, expr: &Expr) {
    match expr {
        Expr::Prefix { op, expr } | Expr::Postfix { op, expr } => {
            let sign = match op {
                StepOp::Inc => "+=",
                StepOp::Dec => "-=",
            };
            line(out, depth, &format!("{} {} 1", expr_src(expr), sign));
        }
        Expr::Unknown(text) => line(out, depth, &format!("# unknown: {}", text)),
        _ => line(out, depth, &expr_src(expr)),
    }
}

fn emit_if(out: &mut String, depth: usize, if_stmt: &IfStmt) {
    line(out, depth, &format!("if {}:", expr_src(&if_stmt.cond)));
    emit_suite(out, depth + 1, &if_stmt.then_branch);

    // walk the else chain iteratively so chained `else if` flattens to elif
    let mut next = if_stmt.else_branch.as_deref();
    while let Some(arm) = next {
        match arm {
            ElseArm::ElseIf(nested) => {
                line(out, depth, &format!("elif {}:", expr_src(&nested.cond)));
                emit_suite(out, depth + 1, &nested.then_branch);
                next = nested.else_branch.as_deref();
            }
            ElseArm::Else(stmts) => {
                line(out, depth, "else:");
                emit_suite(out, depth + 1, stmts);
                next = None;
            }
        }
    }
}

// ======= counting-loop inference =======

struct Counting {
    var: String,
    start: String,
    stop: String,
    step: i64,
}

fn emit_for_classic(
    out: &mut String,
    depth: usize,
    init: &Option<Box<Stmt>>,
    cond: &Option<Expr>,
    update: &Option<Box<Stmt>>,
    body: &[Stmt],
) {
    if let Some(counting) = counting_loop(init, cond, update) {
        let range = if counting.step == 1 {
            format!("range({}, {})", counting.start, counting.stop)
        } else {
            format!(
                "range({}, {}, {})",
                counting.start, counting.stop, counting.step
            )
        };
        line(out, depth, &format!("for {} in {}:", counting.var, range));
        emit_suite(out, depth + 1, body);
        return;
    }

    // irregular header: initializer, a plain while loop, update at the end
    if let Some(init) = init {
        emit_stmt(out, depth, init);
    }
    match cond {
        Some(cond) => line(out, depth, &format!("while {}:", expr_src(cond))),
        None => line(out, depth, "while True:"),
    }
    if body.is_empty() && update.is_none() {
        line(out, depth + 1, "pass");
        return;
    }
    for s in body {
        emit_stmt(out, depth + 1, s);
    }
    if let Some(update) = update {
        emit_stmt(out, depth + 1, update);
    }
}

/// Recognize `for (v = start; v < end; v += step)` shapes. Resolving the
/// loop variable, the end bound with a `<` or `<=` comparator, and a
/// constant step is required; anything else falls back to the while form.
fn counting_loop(
    init: &Option<Box<Stmt>>,
    cond: &Option<Expr>,
    update: &Option<Box<Stmt>>,
) -> Option<Counting> {
    let (var, start) = match init.as_deref()? {
        Stmt::Local(LocalDecl {
            name,
            init: Some(value),
            ..
        }) => (name.clone(), expr_src(value)),
        Stmt::Assign {
            target: Expr::Ident(name),
            op: AssignOp::Set,
            value,
        } => (name.clone(), expr_src(value)),
        _ => return None,
    };

    let (op, end) = match cond.as_ref()? {
        Expr::Binary { op, lhs, rhs } if matches!(op, BinOp::Lt | BinOp::Le) => {
            match lhs.as_ref() {
                Expr::Ident(name) if *name == var => (*op, rhs.as_ref()),
                _ => return None,
            }
        }
        _ => return None,
    };

    let step = step_of(update.as_deref()?, &var)?;

    // `<=` includes the bound itself: push the stop past the last hit value
    let stop = if op == BinOp::Le {
        match int_literal(end) {
            Some(n) => (n + step).to_string(),
            None => format!("{} + {}", expr_src(end), step),
        }
    } else {
        expr_src(end)
    };

    Some(Counting {
        var,
        start,
        stop,
        step,
    })
}

/// Constant step of the update clause: `v++`/`v--` (either fixity) count as
/// one, `v += k` / `v -= k` and `v = v + k` / `v = v - k` with an integer
/// literal as k. Anything else is not a counting update.
fn step_of(update: &Stmt, var: &str) -> Option<i64> {
    match update {
        Stmt::Expr(Expr::Prefix { op, expr }) | Stmt::Expr(Expr::Postfix { op, expr }) => {
            match expr.as_ref() {
                Expr::Ident(name) if name == var => Some(match op {
                    StepOp::Inc => 1,
                    StepOp::Dec => -1,
                }),
                _ => None,
            }
        }
        Stmt::Assign {
            target: Expr::Ident(name),
            op: op @ (AssignOp::Add | AssignOp::Sub),
            value,
        } if name == var => {
            let k = int_literal(value)?;
            Some(if *op == AssignOp::Add { k } else { -k })
        }
        Stmt::Assign {
            target: Expr::Ident(name),
            op: AssignOp::Set,
            value:
                Expr::Binary {
                    op: op @ (BinOp::Add | BinOp::Sub),
                    lhs,
                    rhs,
                },
        } if name == var => {
            match lhs.as_ref() {
                Expr::Ident(lhs_name) if lhs_name == var => {}
                _ => return None,
            }
            let k = int_literal(rhs)?;
            Some(if *op == BinOp::Add { k } else { -k })
        }
        _ => None,
    }
}

fn int_literal(expr: &Expr) -> Option<i64> {
    match expr {
        Expr::Literal(text) => text.parse().ok(),
        _ => None,
    }
}

// ======= declarations and types =======

/// `name = init` when initialized, otherwise an annotated declaration backed
/// by the per-type default value.
fn declaration(ty: &TypeRef, name: &str, init: &Option<Expr>) -> String {
    match init {
        Some(expr) => format!("{} = {}", name, expr_src(expr)),
        None => format!("{}: {} = {}", name, map_type(ty), default_value(ty)),
    }
}

fn map_type(ty: &TypeRef) -> String {
    let mut mapped = match ty.name.as_str() {
        "int" | "long" | "short" | "byte" => "int".to_string(),
        "float" | "double" => "float".to_string(),
        "boolean" => "bool".to_string(),
        "char" | "String" => "str".to_string(),
        "void" => "None".to_string(),
        other => other.to_string(),
    };
    for _ in 0..ty.dims {
        mapped = format!("list[{}]", mapped);
    }
    mapped
}

fn default_value(ty: &TypeRef) -> &'static str {
    if ty.dims > 0 {
        return "[]";
    }
    match ty.name.as_str() {
        "int" | "long" | "short" | "byte" => "0",
        "float" | "double" => "0.0",
        "boolean" => "False",
        "char" | "String" => "\"\"",
        _ => "None",
    }
}

// ======= expressions =======

fn expr_src(expr: &Expr) -> String {
    match expr {
        Expr::Literal(text) => format_literal(text),
        Expr::Ident(name) => name.clone(),
        Expr::Member { base, name } => format!("{}.{}", expr_src(base), name),
        Expr::Call { callee, args } => {
            // conventional console output collapses to the print builtin,
            // keeping only the first argument
            if let Expr::Member { name, .. } = callee.as_ref() {
                if name == "println" || name == "print" {
                    let first = args.first().map(expr_src).unwrap_or_default();
                    return format!("print({})", first);
                }
            }
            let args: Vec<String> = args.iter().map(expr_src).collect();
            format!("{}({})", expr_src(callee), args.join(", "))
        }
        Expr::Binary { op, lhs, rhs } => {
            let prec = bin_prec(*op);
            format!(
                "{} {} {}",
                operand_src(lhs, prec, false),
                bin_str(*op),
                operand_src(rhs, prec, true)
            )
        }
        // no increment operator exists in the target; inside a larger
        // expression only the operand itself can be rendered
        Expr::Prefix { expr, .. } | Expr::Postfix { expr, .. } => expr_src(expr),
        Expr::Unknown(text) => text.split_once(':').map(|(_, t)| t).unwrap_or(text).to_string(),
    }
}

/// Parenthesize a binary operand when its operator binds weaker than the
/// parent, or equally on the right-hand side; the parsed grouping survives
/// even though the tree carries no parenthesis nodes.
fn operand_src(expr: &Expr, parent_prec: u8, right: bool) -> String {
    let rendered = expr_src(expr);
    if let Expr::Binary { op, .. } = expr {
        let prec = bin_prec(*op);
        if prec < parent_prec || (prec == parent_prec && right) {
            return format!("({})", rendered);
        }
    }
    rendered
}

/// Literal text classification is a heuristic over the raw token text: the
/// grammar attaches no literal kind, so a bare word that is not a numeric or
/// quoted form and not a boolean/null word is rendered as a quoted string.
fn format_literal(text: &str) -> String {
    if text.starts_with('"') || text.starts_with('\'') {
        return text.to_string();
    }
    if text.bytes().next().is_some_and(|b| b.is_ascii_digit()) {
        return text.to_string();
    }
    match text {
        "true" => "True".to_string(),
        "false" => "False".to_string(),
        "null" => "None".to_string(),
        _ => format!("\"{}\"", text.replace('"', "\\\"")),
    }
}

fn bin_prec(op: BinOp) -> u8 {
    match op {
        BinOp::Mul | BinOp::Div | BinOp::Mod => 60,
        BinOp::Add | BinOp::Sub => 50,
        BinOp::Gt | BinOp::Lt | BinOp::Ge | BinOp::Le => 40,
        BinOp::Eq | BinOp::Ne => 30,
        BinOp::And => 20,
        BinOp::Or => 10,
    }
}

fn bin_str(op: BinOp) -> &'static str {
    match op {
        BinOp::Mul => "*",
        BinOp::Div => "/",
        BinOp::Mod => "%",
        BinOp::Add => "+",
        BinOp::Sub => "-",
        BinOp::Gt => ">",
        BinOp::Lt => "<",
        BinOp::Ge => ">=",
        BinOp::Le => "<=",
        BinOp::Eq => "==",
        BinOp::Ne => "!=",
        BinOp::And => "and",
        BinOp::Or => "or",
    }
}
