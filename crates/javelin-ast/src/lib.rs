pub mod span {
    use serde::Serialize;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
    pub struct Span {
        pub start: u32,
        pub end: u32,
    }
}

pub mod ast {
    use serde::Serialize;

    /// Root of a parsed source file: the top-level class declarations.
    #[derive(Debug, Serialize)]
    pub struct CompilationUnit {
        pub types: Vec<ClassDecl>,
    }

    #[derive(Debug, Serialize)]
    pub struct ClassDecl {
        pub modifiers: Modifiers,
        pub name: String,
        pub members: Vec<Member>,
    }

    #[derive(Debug, Serialize)]
    pub enum Member {
        Field(FieldDecl),
        Method(MethodDecl),
    }

    /// Declaration modifiers, decided once at parse time.
    #[derive(Debug, Clone, Default, Serialize)]
    pub struct Modifiers(pub Vec<Modifier>);

    impl Modifiers {
        pub fn contains(&self, m: Modifier) -> bool {
            self.0.contains(&m)
        }

        pub fn is_static(&self) -> bool {
            self.contains(Modifier::Static)
        }

        pub fn is_empty(&self) -> bool {
            self.0.is_empty()
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    pub enum Modifier {
        Public,
        Private,
        Protected,
        Static,
        Final,
        Abstract,
    }

    /// A declared source type: base name plus the number of `[]` suffixes.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct TypeRef {
        pub name: String,
        pub dims: usize,
    }

    impl TypeRef {
        pub fn plain(name: impl Into<String>) -> Self {
            Self {
                name: name.into(),
                dims: 0,
            }
        }
    }

    #[derive(Debug, Serialize)]
    pub struct FieldDecl {
        pub modifiers: Modifiers,
        pub ty: TypeRef,
        pub name: String,
        pub init: Option<Expr>,
    }

    #[derive(Debug, Serialize)]
    pub struct MethodDecl {
        pub modifiers: Modifiers,
        pub ret: TypeRef,
        pub name: String,
        pub params: Vec<Param>,
        pub body: Vec<Stmt>,
    }

    #[derive(Debug, Clone, Serialize)]
    pub struct Param {
        pub ty: TypeRef,
        pub name: String,
    }

    /// A local `type name [= init];` declaration.
    #[derive(Debug, Clone, Serialize)]
    pub struct LocalDecl {
        pub ty: TypeRef,
        pub name: String,
        pub init: Option<Expr>,
    }

    #[derive(Debug, Clone, Serialize)]
    pub enum Stmt {
        Local(LocalDecl),
        If(IfStmt),
        While {
            cond: Expr,
            body: Vec<Stmt>,
        },
        DoWhile {
            body: Vec<Stmt>,
            cond: Expr,
        },
        /// Three-clause counting loop; any clause may be absent.
        ForClassic {
            init: Option<Box<Stmt>>,
            cond: Option<Expr>,
            update: Option<Box<Stmt>>,
            body: Vec<Stmt>,
        },
        /// `for (Type name : iterable)` element iteration.
        ForRange {
            var: Param,
            iterable: Expr,
            body: Vec<Stmt>,
        },
        Switch {
            subject: Expr,
            arms: Vec<SwitchArm>,
        },
        Return(Option<Expr>),
        Break,
        Continue,
        Block(Vec<Stmt>),
        Assign {
            target: Expr,
            op: AssignOp,
            value: Expr,
        },
        Expr(Expr),
    }

    #[derive(Debug, Clone, Serialize)]
    pub struct IfStmt {
        pub cond: Expr,
        pub then_branch: Vec<Stmt>,
        pub else_branch: Option<Box<ElseArm>>,
    }

    #[derive(Debug, Clone, Serialize)]
    pub enum ElseArm {
        ElseIf(IfStmt),
        Else(Vec<Stmt>),
    }

    #[derive(Debug, Clone, Serialize)]
    pub enum SwitchArm {
        Case { value: Expr, body: Vec<Stmt> },
        Default { body: Vec<Stmt> },
    }

    #[derive(Debug, Clone, Serialize)]
    pub enum Expr {
        /// Raw literal text as it appeared in the source (quotes included for
        /// string and char literals). No literal-kind tag is attached; the
        /// generator classifies the text when formatting.
        Literal(String),
        Ident(String),
        Member {
            base: Box<Expr>,
            name: String,
        },
        Call {
            callee: Box<Expr>,
            args: Vec<Expr>,
        },
        Binary {
            op: BinOp,
            lhs: Box<Expr>,
            rhs: Box<Expr>,
        },
        Prefix {
            op: StepOp,
            expr: Box<Expr>,
        },
        Postfix {
            op: StepOp,
            expr: Box<Expr>,
        },
        /// Placeholder for a token the expression grammar did not recognize.
        Unknown(String),
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    pub enum BinOp {
        // multiplicative
        Mul,
        Div,
        Mod,
        // additive
        Add,
        Sub,
        // relational
        Gt,
        Lt,
        Ge,
        Le,
        // equality
        Eq,
        Ne,
        // logical
        And,
        Or,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    pub enum AssignOp {
        Set,
        Add,
        Sub,
        Mul,
        Div,
        Mod,
    }

    /// Increment/decrement, shared by the prefix and postfix forms.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    pub enum StepOp {
        Inc,
        Dec,
    }
}
