use javelin_ast::span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokKind {
    Eof,
    /// Comment text; carried on the hidden channel.
    Comment,
    /// Unrecognized input character, one per token.
    Unknown,
    // literals / names
    Str,
    Char,
    Number,
    Ident,
    // keywords
    KwAbstract,
    KwAssert,
    KwBoolean,
    KwBreak,
    KwByte,
    KwCase,
    KwCatch,
    KwChar,
    KwClass,
    KwContinue,
    KwDefault,
    KwDo,
    KwDouble,
    KwElse,
    KwEnum,
    KwExtends,
    KwFinal,
    KwFinally,
    KwFloat,
    KwFor,
    KwIf,
    KwImplements,
    KwImport,
    KwInstanceof,
    KwInt,
    KwInterface,
    KwLong,
    KwNative,
    KwNew,
    KwPackage,
    KwPrivate,
    KwProtected,
    KwPublic,
    KwReturn,
    KwShort,
    KwStatic,
    KwStrictfp,
    KwSuper,
    KwSwitch,
    KwSynchronized,
    KwThis,
    KwThrow,
    KwThrows,
    KwTransient,
    KwTry,
    KwVoid,
    KwVolatile,
    KwWhile,
    // multi-character operators
    UShrAssign, // >>>=
    ShrAssign,  // >>=
    ShlAssign,  // <<=
    EqEq,
    Le,
    Ge,
    BangEq,
    AndAnd,
    OrOr,
    PlusPlus,
    MinusMinus,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    AmpEq,
    PipeEq,
    CaretEq,
    PercentEq,
    Arrow,
    ColonColon,
    Ellipsis,
    // single-character punctuation
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBrack,
    RBrack,
    Semicolon,
    Comma,
    Dot,
    Eq,
    Gt,
    Lt,
    Bang,
    Tilde,
    Question,
    Colon,
    Plus,
    Minus,
    Star,
    Slash,
    Amp,
    Pipe,
    Caret,
    Percent,
    At,
}

impl TokKind {
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            TokKind::KwPublic
                | TokKind::KwPrivate
                | TokKind::KwProtected
                | TokKind::KwStatic
                | TokKind::KwFinal
                | TokKind::KwAbstract
        )
    }

    /// Primitive type keywords that can open a declaration.
    pub fn is_type_keyword(self) -> bool {
        matches!(
            self,
            TokKind::KwInt
                | TokKind::KwLong
                | TokKind::KwShort
                | TokKind::KwByte
                | TokKind::KwFloat
                | TokKind::KwDouble
                | TokKind::KwBoolean
                | TokKind::KwChar
                | TokKind::KwVoid
        )
    }
}

/// Token visibility: hidden tokens consume input and keep positions honest
/// but are invisible to the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Default,
    Hidden,
}

#[derive(Debug, Clone)]
pub struct Tok {
    pub kind: TokKind,
    pub text: String,
    pub channel: Channel,
    pub span: Span,
    /// 1-based line of the token start.
    pub line: u32,
    /// 0-based column of the token start.
    pub column: u32,
}

pub fn keyword(text: &str) -> Option<TokKind> {
    let k = match text {
        "abstract" => TokKind::KwAbstract,
        "assert" => TokKind::KwAssert,
        "boolean" => TokKind::KwBoolean,
        "break" => TokKind::KwBreak,
        "byte" => TokKind::KwByte,
        "case" => TokKind::KwCase,
        "catch" => TokKind::KwCatch,
        "char" => TokKind::KwChar,
        "class" => TokKind::KwClass,
        "continue" => TokKind::KwContinue,
        "default" => TokKind::KwDefault,
        "do" => TokKind::KwDo,
        "double" => TokKind::KwDouble,
        "else" => TokKind::KwElse,
        "enum" => TokKind::KwEnum,
        "extends" => TokKind::KwExtends,
        "final" => TokKind::KwFinal,
        "finally" => TokKind::KwFinally,
        "float" => TokKind::KwFloat,
        "for" => TokKind::KwFor,
        "if" => TokKind::KwIf,
        "implements" => TokKind::KwImplements,
        "import" => TokKind::KwImport,
        "instanceof" => TokKind::KwInstanceof,
        "int" => TokKind::KwInt,
        "interface" => TokKind::KwInterface,
        "long" => TokKind::KwLong,
        "native" => TokKind::KwNative,
        "new" => TokKind::KwNew,
        "package" => TokKind::KwPackage,
        "private" => TokKind::KwPrivate,
        "protected" => TokKind::KwProtected,
        "public" => TokKind::KwPublic,
        "return" => TokKind::KwReturn,
        "short" => TokKind::KwShort,
        "static" => TokKind::KwStatic,
        "strictfp" => TokKind::KwStrictfp,
        "super" => TokKind::KwSuper,
        "switch" => TokKind::KwSwitch,
        "synchronized" => TokKind::KwSynchronized,
        "this" => TokKind::KwThis,
        "throw" => TokKind::KwThrow,
        "throws" => TokKind::KwThrows,
        "transient" => TokKind::KwTransient,
        "try" => TokKind::KwTry,
        "void" => TokKind::KwVoid,
        "volatile" => TokKind::KwVolatile,
        "while" => TokKind::KwWhile,
        _ => return None,
    };
    Some(k)
}

/// Operator and punctuation table, longest entries first so that multi-char
/// operators win over their prefixes (`>>>=` before `>=` before `>`).
/// Note there is no plain `<<`/`>>`/`>>>`: `a >> b` lexes as two `>`.
pub const SYMBOLS: &[(&str, TokKind)] = &[
    (">>>=", TokKind::UShrAssign),
    (">>=", TokKind::ShrAssign),
    ("<<=", TokKind::ShlAssign),
    ("...", TokKind::Ellipsis),
    ("==", TokKind::EqEq),
    ("<=", TokKind::Le),
    (">=", TokKind::Ge),
    ("!=", TokKind::BangEq),
    ("&&", TokKind::AndAnd),
    ("||", TokKind::OrOr),
    ("++", TokKind::PlusPlus),
    ("--", TokKind::MinusMinus),
    ("+=", TokKind::PlusEq),
    ("-=", TokKind::MinusEq),
    ("*=", TokKind::StarEq),
    ("/=", TokKind::SlashEq),
    ("&=", TokKind::AmpEq),
    ("|=", TokKind::PipeEq),
    ("^=", TokKind::CaretEq),
    ("%=", TokKind::PercentEq),
    ("->", TokKind::Arrow),
    ("::", TokKind::ColonColon),
    ("{", TokKind::LBrace),
    ("}", TokKind::RBrace),
    ("(", TokKind::LParen),
    (")", TokKind::RParen),
    ("[", TokKind::LBrack),
    ("]", TokKind::RBrack),
    (";", TokKind::Semicolon),
    (",", TokKind::Comma),
    (".", TokKind::Dot),
    ("=", TokKind::Eq),
    (">", TokKind::Gt),
    ("<", TokKind::Lt),
    ("!", TokKind::Bang),
    ("~", TokKind::Tilde),
    ("?", TokKind::Question),
    (":", TokKind::Colon),
    ("+", TokKind::Plus),
    ("-", TokKind::Minus),
    ("*", TokKind::Star),
    ("/", TokKind::Slash),
    ("&", TokKind::Amp),
    ("|", TokKind::Pipe),
    ("^", TokKind::Caret),
    ("%", TokKind::Percent),
    ("@", TokKind::At),
];
