//! Lexical analyzer for PixArLang: turns UTF-8 source text into a finite
//! stream of [`Token`]s terminated by `Eof`, failing fast with a [`LexError`]
//! at the first byte that starts no valid token.

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

pub use error::LexError;
pub use lexer::Lexer;
pub use token::{Colour, Token, TokenKind};
