use crate::token::{keyword, Channel, Tok, TokKind, SYMBOLS};
use javelin_ast::span::Span;

/// Scanner over a fully materialized source text. Total: every byte of input
/// is consumed by exactly one token (whitespace is skipped in-line), and
/// unrecognized characters degrade to one-character `Unknown` tokens instead
/// of failing. Once the input is exhausted, `next_token` keeps returning the
/// same `Eof` token.
pub struct Lexer<'a> {
    src: &'a str,
    pos: usize,
    line: u32,
    col: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            line: 1,
            col: 0,
        }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    /// Advance the cursor over `len` bytes, updating line/column bookkeeping.
    /// Text containing newlines bumps the line count and resets the column to
    /// the length of the tail segment.
    fn advance(&mut self, len: usize) {
        let eaten = &self.src[self.pos..self.pos + len];
        self.pos += len;
        let newlines = eaten.bytes().filter(|&b| b == b'\n').count();
        if newlines > 0 {
            self.line += newlines as u32;
            let tail = eaten.rsplit('\n').next().unwrap_or("");
            self.col = tail.len() as u32;
        } else {
            self.col += len as u32;
        }
    }

    fn make(&mut self, kind: TokKind, len: usize, channel: Channel) -> Tok {
        let start = self.pos;
        let line = self.line;
        let column = self.col;
        self.advance(len);
        Tok {
            kind,
            text: self.src[start..self.pos].to_string(),
            channel,
            span: Span {
                start: start as u32,
                end: self.pos as u32,
            },
            line,
            column,
        }
    }

    pub fn next_token(&mut self) -> Tok {
        loop {
            // whitespace produces no token but still advances positions
            let ws = self
                .rest()
                .bytes()
                .take_while(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'))
                .count();
            if ws > 0 {
                self.advance(ws);
                continue;
            }

            if self.pos >= self.src.len() {
                return Tok {
                    kind: TokKind::Eof,
                    text: "<EOF>".to_string(),
                    channel: Channel::Default,
                    span: Span {
                        start: self.pos as u32,
                        end: self.pos as u32,
                    },
                    line: self.line,
                    column: self.col,
                };
            }

            let rest = self.rest();

            if let Some(len) = match_comment(rest) {
                return self.make(TokKind::Comment, len, Channel::Hidden);
            }
            if let Some(len) = match_string(rest) {
                return self.make(TokKind::Str, len, Channel::Default);
            }
            if let Some(len) = match_char_lit(rest) {
                return self.make(TokKind::Char, len, Channel::Default);
            }
            if let Some(len) = match_number(rest) {
                return self.make(TokKind::Number, len, Channel::Default);
            }
            if let Some(len) = match_ident(rest) {
                let kind = keyword(&rest[..len]).unwrap_or(TokKind::Ident);
                return self.make(kind, len, Channel::Default);
            }
            if let Some((len, kind)) = match_symbol(rest) {
                return self.make(kind, len, Channel::Default);
            }

            // unrecognized character: emit it as Unknown so scanning never stalls
            let len = rest.chars().next().map(char::len_utf8).unwrap_or(1);
            return self.make(TokKind::Unknown, len, Channel::Default);
        }
    }
}

/// `// ...` to end of line, or a closed `/* ... */`. An unterminated block
/// comment does not match; the leading `/` then lexes as a symbol.
fn match_comment(rest: &str) -> Option<usize> {
    if let Some(tail) = rest.strip_prefix("//") {
        let body = tail.find('\n').unwrap_or(tail.len());
        return Some(2 + body);
    }
    if let Some(tail) = rest.strip_prefix("/*") {
        return tail.find("*/").map(|i| 2 + i + 2);
    }
    None
}

/// `"(\.|[^"\])*"`; unterminated strings do not match, so the opening quote
/// falls through to the Unknown fallback.
fn match_string(rest: &str) -> Option<usize> {
    if !rest.starts_with('"') {
        return None;
    }
    let bytes = rest.as_bytes();
    let mut i = 1;
    while i < bytes.len() {
        match bytes[i] {
            b'"' => return Some(i + 1),
            b'\\' => i += 2,
            _ => i += 1,
        }
    }
    None
}

/// A single character or escape pair between single quotes.
fn match_char_lit(rest: &str) -> Option<usize> {
    let mut chars = rest.chars();
    if chars.next() != Some('\'') {
        return None;
    }
    match chars.next()? {
        '\\' => {
            let escaped = chars.next()?;
            (chars.next() == Some('\'')).then(|| 3 + escaped.len_utf8())
        }
        '\'' | '\n' => None,
        c => (chars.next() == Some('\'')).then(|| 2 + c.len_utf8()),
    }
}

/// Integer or decimal with an optional exponent. The fraction and exponent
/// parts only match when they carry at least one digit.
fn match_number(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let int = digits(0);
    if int == 0 {
        return None;
    }
    let mut len = int;

    if bytes.get(len) == Some(&b'.') {
        let frac = digits(len + 1);
        if frac > 0 {
            len += 1 + frac;
        }
    }

    if matches!(bytes.get(len), Some(b'e' | b'E')) {
        let mut exp = len + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits(exp);
        if exp_digits > 0 {
            len = exp + exp_digits;
        }
    }

    Some(len)
}

fn match_ident(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    if !(bytes[0].is_ascii_alphabetic() || bytes[0] == b'_') {
        return None;
    }
    Some(
        bytes
            .iter()
            .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_')
            .count(),
    )
}

fn match_symbol(rest: &str) -> Option<(usize, TokKind)> {
    SYMBOLS
        .iter()
        .find(|(text, _)| rest.starts_with(text))
        .map(|(text, kind)| (text.len(), *kind))
}
