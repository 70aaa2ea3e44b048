use crate::buffer::TokenStream;
use crate::error::SyntaxError;
use crate::lexer::Lexer;
use crate::token::{Channel, Tok, TokKind};
use anyhow::Result;
use javelin_ast::ast::{
    AssignOp, BinOp, ClassDecl, CompilationUnit, ElseArm, Expr, FieldDecl, IfStmt, LocalDecl,
    Member, MethodDecl, Modifier, Modifiers, Param, Stmt, StepOp, SwitchArm, TypeRef,
};

pub fn parse_str(_file: &str, src: &str) -> Result<CompilationUnit> {
    let mut p = Parser::new(src);
    Ok(p.parse()?)
}

struct Parser<'a> {
    buf: TokenStream<'a>,
    cur: Tok,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        let mut buf = TokenStream::new(Lexer::new(src));
        let cur = buf
            .lookahead(1)
            .cloned()
            .expect("lookahead(1) always resolves");
        Self { buf, cur }
    }

    /// Re-read the one-token lookahead, skipping comment tokens that a
    /// permissive buffer may have let through.
    fn sync(&mut self) {
        loop {
            let t = self
                .buf
                .lookahead(1)
                .expect("lookahead(1) always resolves");
            if t.kind == TokKind::Comment || t.channel == Channel::Hidden {
                self.buf.consume();
                continue;
            }
            self.cur = t.clone();
            break;
        }
    }

    fn advance(&mut self) {
        self.buf.consume();
        self.sync();
    }

    fn at(&self, kind: TokKind) -> bool {
        self.cur.kind == kind
    }

    fn at_eof(&self) -> bool {
        self.at(TokKind::Eof)
    }

    fn expect(&mut self, kind: TokKind) -> Result<Tok, SyntaxError> {
        if self.at(kind) {
            let t = self.cur.clone();
            self.advance();
            Ok(t)
        } else {
            Err(SyntaxError::new(kind, &self.cur))
        }
    }

    fn accept(&mut self, kind: TokKind) -> bool {
        if self.at(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Kind of the k-th lookahead token; `peek(1)` is the current token.
    fn peek(&mut self, k: usize) -> TokKind {
        self.buf
            .lookahead(k)
            .map(|t| t.kind)
            .unwrap_or(TokKind::Eof)
    }

    // ======= compilation unit / declarations =======

    fn parse(&mut self) -> Result<CompilationUnit, SyntaxError> {
        let mut types = Vec::new();
        while !self.at_eof() {
            if self.cur.kind.is_modifier() || self.at(TokKind::KwClass) {
                if let Some(class) = self.type_declaration()? {
                    types.push(class);
                    continue;
                }
            }
            // stray top-level token: skip best-effort
            if !self.at_eof() {
                self.advance();
            }
        }
        Ok(CompilationUnit { types })
    }

    fn type_declaration(&mut self) -> Result<Option<ClassDecl>, SyntaxError> {
        let modifiers = self.modifiers();
        if self.at(TokKind::KwClass) {
            return Ok(Some(self.class_declaration(modifiers)?));
        }
        Ok(None)
    }

    fn modifiers(&mut self) -> Modifiers {
        let mut mods = Vec::new();
        loop {
            let m = match self.cur.kind {
                TokKind::KwPublic => Modifier::Public,
                TokKind::KwPrivate => Modifier::Private,
                TokKind::KwProtected => Modifier::Protected,
                TokKind::KwStatic => Modifier::Static,
                TokKind::KwFinal => Modifier::Final,
                TokKind::KwAbstract => Modifier::Abstract,
                _ => break,
            };
            mods.push(m);
            self.advance();
        }
        Modifiers(mods)
    }

    fn class_declaration(&mut self, modifiers: Modifiers) -> Result<ClassDecl, SyntaxError> {
        self.expect(TokKind::KwClass)?;
        let name = self.expect(TokKind::Ident)?.text;
        self.expect(TokKind::LBrace)?;

        let mut members = Vec::new();
        while !self.at(TokKind::RBrace) {
            if self.at_eof() {
                return Err(SyntaxError::new(TokKind::RBrace, &self.cur)
                    .in_context(format!("class body of `{}`", name)));
            }
            if self.cur.kind.is_modifier()
                || self.cur.kind.is_type_keyword()
                || self.at(TokKind::Ident)
            {
                if self.looks_like_method() {
                    members.push(Member::Method(self.method_declaration()?));
                } else {
                    members.push(Member::Field(self.field_declaration()?));
                }
            } else {
                // other constructs inside the class body: skip
                self.advance();
            }
        }
        self.expect(TokKind::RBrace)?;

        Ok(ClassDecl {
            modifiers,
            name,
            members,
        })
    }

    /// A member is a method iff, after any modifiers, a type-or-identifier
    /// token (plus `[]` suffixes) is followed by a name and `(`.
    fn looks_like_method(&mut self) -> bool {
        let mut i = 1;
        while self.peek(i).is_modifier() {
            i += 1;
        }
        let ty = self.peek(i);
        if !(ty.is_type_keyword() || ty == TokKind::Ident) {
            return false;
        }
        i += 1;
        while self.peek(i) == TokKind::LBrack && self.peek(i + 1) == TokKind::RBrack {
            i += 2;
        }
        self.peek(i) == TokKind::Ident && self.peek(i + 1) == TokKind::LParen
    }

    /// Declared type: a primitive keyword or a nominal identifier, with any
    /// number of `[]` suffixes folded in.
    fn type_ref(&mut self) -> Result<TypeRef, SyntaxError> {
        if !(self.cur.kind.is_type_keyword() || self.at(TokKind::Ident)) {
            return Err(SyntaxError::new(TokKind::Ident, &self.cur));
        }
        let name = self.cur.text.clone();
        self.advance();
        let mut dims = 0;
        while self.accept(TokKind::LBrack) {
            self.expect(TokKind::RBrack)?;
            dims += 1;
        }
        Ok(TypeRef { name, dims })
    }

    fn field_declaration(&mut self) -> Result<FieldDecl, SyntaxError> {
        let modifiers = self.modifiers();
        let ty = self.type_ref()?;
        let name = self.expect(TokKind::Ident)?.text;
        let init = if self.accept(TokKind::Eq) {
            Some(self.parse_expression(0)?)
        } else {
            None
        };
        self.expect(TokKind::Semicolon)?;
        Ok(FieldDecl {
            modifiers,
            ty,
            name,
            init,
        })
    }

    fn method_declaration(&mut self) -> Result<MethodDecl, SyntaxError> {
        let modifiers = self.modifiers();
        let ret = self.type_ref()?;
        let name = self.expect(TokKind::Ident)?.text;

        self.expect(TokKind::LParen)?;
        let params = self.parameter_list()?;
        self.expect(TokKind::RParen)?;

        // a bodyless declaration (abstract method) ends at `;`
        let body = if self.accept(TokKind::Semicolon) {
            Vec::new()
        } else {
            self.block(format!("body of method `{}`", name))?
        };

        Ok(MethodDecl {
            modifiers,
            ret,
            name,
            params,
            body,
        })
    }

    fn parameter_list(&mut self) -> Result<Vec<Param>, SyntaxError> {
        let mut params = Vec::new();
        while !self.at(TokKind::RParen) && !self.at_eof() {
            if self.cur.kind.is_modifier() {
                // unexpected modifiers in params are skipped
                self.advance();
                continue;
            }
            let ty = self.type_ref()?;
            let name = if self.at(TokKind::Ident) {
                let n = self.cur.text.clone();
                self.advance();
                n
            } else {
                "arg".to_string()
            };
            params.push(Param { ty, name });
            if !self.accept(TokKind::Comma) {
                break;
            }
        }
        Ok(params)
    }

    // ======= blocks and statements =======

    fn block(&mut self, context: String) -> Result<Vec<Stmt>, SyntaxError> {
        self.expect(TokKind::LBrace)?;
        let mut stmts = Vec::new();
        while !self.at(TokKind::RBrace) {
            if self.at_eof() {
                return Err(SyntaxError::new(TokKind::RBrace, &self.cur).in_context(context));
            }
            stmts.push(self.statement()?);
        }
        self.expect(TokKind::RBrace)?;
        Ok(stmts)
    }

    /// A loop or branch body: a braced block or a single statement.
    fn branch_body(&mut self) -> Result<Vec<Stmt>, SyntaxError> {
        if self.at(TokKind::LBrace) {
            self.block("block".to_string())
        } else {
            Ok(vec![self.statement()?])
        }
    }

    fn statement(&mut self) -> Result<Stmt, SyntaxError> {
        let kind = self.cur.kind;
        match kind {
            TokKind::KwIf => Ok(Stmt::If(self.if_statement()?)),
            TokKind::KwSwitch => self.switch_statement(),
            TokKind::KwFor => self.for_statement(),
            TokKind::KwWhile => {
                self.advance();
                self.expect(TokKind::LParen)?;
                let cond = self.parse_expression(0)?;
                self.expect(TokKind::RParen)?;
                let body = self.branch_body()?;
                Ok(Stmt::While { cond, body })
            }
            TokKind::KwDo => {
                self.advance();
                let body = self.branch_body()?;
                self.expect(TokKind::KwWhile)?;
                self.expect(TokKind::LParen)?;
                let cond = self.parse_expression(0)?;
                self.expect(TokKind::RParen)?;
                self.expect(TokKind::Semicolon)?;
                Ok(Stmt::DoWhile { body, cond })
            }
            TokKind::KwBreak => {
                self.advance();
                self.expect(TokKind::Semicolon)?;
                Ok(Stmt::Break)
            }
            TokKind::KwContinue => {
                self.advance();
                self.expect(TokKind::Semicolon)?;
                Ok(Stmt::Continue)
            }
            TokKind::KwReturn => {
                self.advance();
                let value = if self.at(TokKind::Semicolon) {
                    None
                } else {
                    Some(self.parse_expression(0)?)
                };
                self.expect(TokKind::Semicolon)?;
                Ok(Stmt::Return(value))
            }
            TokKind::LBrace => Ok(Stmt::Block(self.block("block".to_string())?)),
            k if k.is_type_keyword() => {
                let decl = self.local_declaration()?;
                self.expect(TokKind::Semicolon)?;
                Ok(Stmt::Local(decl))
            }
            TokKind::Ident if self.local_decl_ahead() => {
                let decl = self.local_declaration()?;
                self.expect(TokKind::Semicolon)?;
                Ok(Stmt::Local(decl))
            }
            _ => {
                let stmt = self.simple_statement()?;
                self.expect(TokKind::Semicolon)?;
                Ok(stmt)
            }
        }
    }

    /// `IDENT IDENT` opens a class-typed local, `IDENT [` an array-typed one.
    fn local_decl_ahead(&mut self) -> bool {
        matches!(self.peek(2), TokKind::Ident | TokKind::LBrack)
    }

    fn local_declaration(&mut self) -> Result<LocalDecl, SyntaxError> {
        let ty = self.type_ref()?;
        let name = self.expect(TokKind::Ident)?.text;
        let init = if self.accept(TokKind::Eq) {
            Some(self.parse_expression(0)?)
        } else {
            None
        };
        Ok(LocalDecl { ty, name, init })
    }

    /// Expression statement or assignment, without the trailing `;` so the
    /// same path serves both statement position and `for` header clauses.
    /// The expression and assignment forms share one parse: only when the
    /// parsed expression is followed by an assignment operator is it
    /// reinterpreted as an assignment target.
    fn simple_statement(&mut self) -> Result<Stmt, SyntaxError> {
        let expr = self.parse_expression(0)?;
        if let Some(op) = assign_op(self.cur.kind) {
            self.advance();
            let value = self.parse_expression(0)?;
            return Ok(Stmt::Assign {
                target: expr,
                op,
                value,
            });
        }
        Ok(Stmt::Expr(expr))
    }

    fn if_statement(&mut self) -> Result<IfStmt, SyntaxError> {
        self.expect(TokKind::KwIf)?;
        self.expect(TokKind::LParen)?;
        let cond = self.parse_expression(0)?;
        self.expect(TokKind::RParen)?;
        let then_branch = self.branch_body()?;

        let else_branch = if self.accept(TokKind::KwElse) {
            if self.at(TokKind::KwIf) {
                Some(Box::new(ElseArm::ElseIf(self.if_statement()?)))
            } else {
                Some(Box::new(ElseArm::Else(self.branch_body()?)))
            }
        } else {
            None
        };

        Ok(IfStmt {
            cond,
            then_branch,
            else_branch,
        })
    }

    fn for_statement(&mut self) -> Result<Stmt, SyntaxError> {
        self.expect(TokKind::KwFor)?;
        self.expect(TokKind::LParen)?;

        if self.range_loop_ahead() {
            let ty = self.type_ref()?;
            let name = self.expect(TokKind::Ident)?.text;
            self.expect(TokKind::Colon)?;
            let iterable = self.parse_expression(0)?;
            self.expect(TokKind::RParen)?;
            let body = self.branch_body()?;
            return Ok(Stmt::ForRange {
                var: Param { ty, name },
                iterable,
                body,
            });
        }

        // classic three-clause form; the sub-parsers leave the separating
        // `;` for this caller to consume
        let init = if self.at(TokKind::Semicolon) {
            None
        } else if self.cur.kind.is_type_keyword()
            || (self.at(TokKind::Ident) && self.local_decl_ahead())
        {
            Some(Box::new(Stmt::Local(self.local_declaration()?)))
        } else {
            Some(Box::new(self.simple_statement()?))
        };
        self.expect(TokKind::Semicolon)?;

        let cond = if self.at(TokKind::Semicolon) {
            None
        } else {
            Some(self.parse_expression(0)?)
        };
        self.expect(TokKind::Semicolon)?;

        let update = if self.at(TokKind::RParen) {
            None
        } else {
            Some(Box::new(self.simple_statement()?))
        };
        self.expect(TokKind::RParen)?;

        let body = self.branch_body()?;
        Ok(Stmt::ForClassic {
            init,
            cond,
            update,
            body,
        })
    }

    /// Distinguish `for (Type x : xs)` from the classic form by scanning the
    /// header for a `:` before the first `;` or `)`.
    fn range_loop_ahead(&mut self) -> bool {
        let mut i = 1;
        loop {
            match self.peek(i) {
                TokKind::Colon => return true,
                TokKind::Semicolon | TokKind::RParen | TokKind::Eof => return false,
                _ => i += 1,
            }
        }
    }

    fn switch_statement(&mut self) -> Result<Stmt, SyntaxError> {
        self.expect(TokKind::KwSwitch)?;
        self.expect(TokKind::LParen)?;
        let subject = self.parse_expression(0)?;
        self.expect(TokKind::RParen)?;
        self.expect(TokKind::LBrace)?;

        let mut arms = Vec::new();
        while !self.at(TokKind::RBrace) {
            if self.at_eof() {
                return Err(SyntaxError::new(TokKind::RBrace, &self.cur)
                    .in_context("switch body".to_string()));
            }
            if self.accept(TokKind::KwCase) {
                let value = self.parse_expression(0)?;
                self.expect(TokKind::Colon)?;
                let body = self.case_body()?;
                arms.push(SwitchArm::Case { value, body });
            } else if self.accept(TokKind::KwDefault) {
                self.expect(TokKind::Colon)?;
                let body = self.case_body()?;
                arms.push(SwitchArm::Default { body });
            } else {
                // stray token between arms: skip
                self.advance();
            }
        }
        self.expect(TokKind::RBrace)?;

        Ok(Stmt::Switch { subject, arms })
    }

    /// Statements of one arm, collected greedily until the next label or the
    /// closing brace. A trailing `break;` terminates the arm and is consumed
    /// without being recorded; fallthrough between arms is not modeled.
    fn case_body(&mut self) -> Result<Vec<Stmt>, SyntaxError> {
        let mut stmts = Vec::new();
        loop {
            let kind = self.cur.kind;
            match kind {
                TokKind::KwCase | TokKind::KwDefault | TokKind::RBrace | TokKind::Eof => break,
                TokKind::KwBreak if self.peek(2) == TokKind::Semicolon => {
                    self.advance();
                    self.advance();
                    break;
                }
                _ => stmts.push(self.statement()?),
            }
        }
        Ok(stmts)
    }

    // ======= expressions (precedence climbing) =======
    //
    // Binding strength (strong -> weak):
    //   60: * / %
    //   50: + -
    //   40: < > <= >=
    //   30: == !=
    //   20: &&
    //   10: ||
    // All binary operators are left-associative: the right operand is parsed
    // with min_prec one above the operator's own precedence.

    fn parse_expression(&mut self, min_prec: u8) -> Result<Expr, SyntaxError> {
        let mut left = self.parse_primary()?;
        loop {
            let Some((op, prec)) = binary_op(self.cur.kind) else {
                break;
            };
            if prec < min_prec {
                break;
            }
            self.advance();
            let right = self.parse_expression(prec + 1)?;
            left = Expr::Binary {
                op,
                lhs: Box::new(left),
                rhs: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_primary(&mut self) -> Result<Expr, SyntaxError> {
        match self.cur.kind {
            TokKind::LParen => {
                self.advance();
                let inner = self.parse_expression(0)?;
                self.expect(TokKind::RParen)?;
                Ok(inner)
            }
            TokKind::Number | TokKind::Str | TokKind::Char => {
                let text = self.cur.text.clone();
                self.advance();
                Ok(Expr::Literal(text))
            }
            TokKind::PlusPlus | TokKind::MinusMinus => {
                let op = if self.at(TokKind::PlusPlus) {
                    StepOp::Inc
                } else {
                    StepOp::Dec
                };
                self.advance();
                let expr = self.parse_primary()?;
                Ok(Expr::Prefix {
                    op,
                    expr: Box::new(expr),
                })
            }
            TokKind::Ident => {
                let text = self.cur.text.clone();
                self.advance();
                // `true`, `false` and `null` are not keywords in the lexer
                // table; they surface here as word literals
                if matches!(text.as_str(), "true" | "false" | "null") {
                    return Ok(Expr::Literal(text));
                }
                self.primary_chain(Expr::Ident(text))
            }
            TokKind::Eof => Err(SyntaxError::new(TokKind::Ident, &self.cur)),
            _ => {
                let placeholder = format!("{:?}:{}", self.cur.kind, self.cur.text);
                self.advance();
                Ok(Expr::Unknown(placeholder))
            }
        }
    }

    /// Continue an identifier with `.member`, `(args)` and postfix `++`/`--`
    /// links, any number of times (`a.b().c++` nests Member/Call/Postfix).
    fn primary_chain(&mut self, mut base: Expr) -> Result<Expr, SyntaxError> {
        loop {
            if self.accept(TokKind::Dot) {
                if !self.at(TokKind::Ident) {
                    // malformed member access: stop the chain
                    break;
                }
                let name = self.cur.text.clone();
                self.advance();
                base = Expr::Member {
                    base: Box::new(base),
                    name,
                };
            } else if self.at(TokKind::LParen) {
                self.advance();
                let mut args = Vec::new();
                if !self.at(TokKind::RParen) {
                    args.push(self.parse_expression(0)?);
                    while self.accept(TokKind::Comma) {
                        args.push(self.parse_expression(0)?);
                    }
                }
                self.expect(TokKind::RParen)?;
                base = Expr::Call {
                    callee: Box::new(base),
                    args,
                };
            } else if self.at(TokKind::PlusPlus) || self.at(TokKind::MinusMinus) {
                let op = if self.at(TokKind::PlusPlus) {
                    StepOp::Inc
                } else {
                    StepOp::Dec
                };
                self.advance();
                base = Expr::Postfix {
                    op,
                    expr: Box::new(base),
                };
            } else {
                break;
            }
        }
        Ok(base)
    }
}

fn binary_op(kind: TokKind) -> Option<(BinOp, u8)> {
    let entry = match kind {
        TokKind::Star => (BinOp::Mul, 60),
        TokKind::Slash => (BinOp::Div, 60),
        TokKind::Percent => (BinOp::Mod, 60),
        TokKind::Plus => (BinOp::Add, 50),
        TokKind::Minus => (BinOp::Sub, 50),
        TokKind::Gt => (BinOp::Gt, 40),
        TokKind::Lt => (BinOp::Lt, 40),
        TokKind::Ge => (BinOp::Ge, 40),
        TokKind::Le => (BinOp::Le, 40),
        TokKind::EqEq => (BinOp::Eq, 30),
        TokKind::BangEq => (BinOp::Ne, 30),
        TokKind::AndAnd => (BinOp::And, 20),
        TokKind::OrOr => (BinOp::Or, 10),
        _ => return None,
    };
    Some(entry)
}

fn assign_op(kind: TokKind) -> Option<AssignOp> {
    let op = match kind {
        TokKind::Eq => AssignOp::Set,
        TokKind::PlusEq => AssignOp::Add,
        TokKind::MinusEq => AssignOp::Sub,
        TokKind::StarEq => AssignOp::Mul,
        TokKind::SlashEq => AssignOp::Div,
        TokKind::PercentEq => AssignOp::Mod,
        _ => return None,
    };
    Some(op)
}
