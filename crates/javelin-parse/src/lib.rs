#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]

mod buffer;
mod error;
mod lexer;
mod parser;
mod token;

pub use buffer::TokenStream;
pub use error::SyntaxError;
pub use lexer::Lexer;
pub use parser::parse_str;
pub use token::{Channel, Tok, TokKind};
