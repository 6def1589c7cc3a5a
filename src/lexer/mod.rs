//! Lexical analysis.
//!
//! The lexer turns source text into tokens one at a time, on demand. It
//! handles:
//!
//! - Keywords and identifiers (letters and underscores)
//! - Integer and string literals
//! - One and two character operators and punctuation
//! - Illegal characters, which become `ILLEGAL` tokens rather than errors

pub mod lexer;
pub mod tokens;
