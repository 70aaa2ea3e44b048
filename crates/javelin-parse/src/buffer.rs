use crate::lexer::Lexer;
use crate::token::{Channel, Tok, TokKind};
use std::collections::VecDeque;

/// Bounded forward-lookahead window between the tokenizer and the analyzer.
/// Hidden-channel tokens are dropped while the window fills, so
/// `lookahead(1)` always reflects the next unconsumed grammar-visible token.
pub struct TokenStream<'a> {
    lexer: Lexer<'a>,
    window: VecDeque<Tok>,
}

impl<'a> TokenStream<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self {
            lexer,
            window: VecDeque::new(),
        }
    }

    fn fill(&mut self, n: usize) {
        while self.window.len() < n {
            let tok = self.lexer.next_token();
            if tok.channel == Channel::Hidden {
                continue;
            }
            self.window.push_back(tok);
        }
    }

    /// The k-th upcoming token without consuming it; `k = 1` is the next
    /// unconsumed token, `k = 0` the neutral empty probe. The tokenizer is
    /// idempotent at end of input, so every `k >= 1` resolves (to `Eof` past
    /// the end).
    pub fn lookahead(&mut self, k: usize) -> Option<&Tok> {
        if k == 0 {
            return None;
        }
        self.fill(k);
        self.window.get(k - 1)
    }

    /// Advance past exactly one token. Consuming past EOF is a usage error.
    pub fn consume(&mut self) {
        self.fill(1);
        let front = self.window.front().expect("window filled to one token");
        assert!(front.kind != TokKind::Eof, "cannot consume past EOF");
        self.window.pop_front();
    }
}
