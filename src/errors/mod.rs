//! Error types produced while parsing.
//!
//! Each error carries the source position of the token that triggered it.
//! The lexer never fails; every error here is raised by the parser.

pub mod errors;

#[cfg(test)]
mod tests;
