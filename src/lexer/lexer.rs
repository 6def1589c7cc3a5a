use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{Position, Span, MK_TOKEN};

use super::tokens::{lookup_identifier, Token, TokenKind};

lazy_static! {
    static ref IDENTIFIER_PATTERN: Regex = Regex::new("^[a-zA-Z_]+").unwrap();
    static ref INTEGER_PATTERN: Regex = Regex::new("^[0-9]+").unwrap();
}

/// On-demand tokenizer over a complete source string.
///
/// Each call to [`Lexer::next_token`] scans exactly one token. Once the input
/// is exhausted every further call returns an `EOF` token.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            file: file_name,
        }
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.at() {
            None => MK_TOKEN!(TokenKind::EOF, String::new(), self.span_from(self.pos)),
            Some(b'"') => self.read_string(),
            Some(b'=') if self.peek_char() == Some(b'=') => self.read_fixed(TokenKind::Equals, 2),
            Some(b'=') => self.read_fixed(TokenKind::Assignment, 1),
            Some(b'!') if self.peek_char() == Some(b'=') => self.read_fixed(TokenKind::NotEquals, 2),
            Some(b'!') => self.read_fixed(TokenKind::Not, 1),
            Some(byte) => match TokenKind::from_punctuation(byte) {
                Some(kind) => self.read_fixed(kind, 1),
                None if byte.is_ascii_alphabetic() || byte == b'_' => self.read_identifier(),
                None if byte.is_ascii_digit() => self.read_integer(),
                None => self.read_illegal(),
            },
        };

        trace!(kind = %token.kind, literal = %token.literal, offset = token.span.start.0, "token");
        token
    }

    fn at(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    fn peek_char(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos + 1).copied()
    }

    fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.source.len());
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.at(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    fn span_from(&self, start: usize) -> Span {
        Span {
            start: Position(start as u32, Rc::clone(&self.file)),
            end: Position(self.pos as u32, Rc::clone(&self.file)),
        }
    }

    /// Consumes `len` bytes as a token of `kind`, using them as its literal.
    fn read_fixed(&mut self, kind: TokenKind, len: usize) -> Token {
        let start = self.pos;
        let literal = self.remainder()[..len].to_string();
        self.advance_n(len);

        MK_TOKEN!(kind, literal, self.span_from(start))
    }

    fn read_identifier(&mut self) -> Token {
        let len = IDENTIFIER_PATTERN
            .find(self.remainder())
            .map_or(1, |matched| matched.end());
        let kind = lookup_identifier(&self.remainder()[..len]);

        self.read_fixed(kind, len)
    }

    fn read_integer(&mut self) -> Token {
        let len = INTEGER_PATTERN
            .find(self.remainder())
            .map_or(1, |matched| matched.end());

        self.read_fixed(TokenKind::Integer, len)
    }

    /// Reads through the closing quote, or to the end of input when there is none.
    fn read_string(&mut self) -> Token {
        let start = self.pos;
        let content_start = start + 1;
        let content = &self.source[content_start..];

        let (literal, consumed) = match content.find('"') {
            Some(close) => (content[..close].to_string(), close + 2),
            None => (content.to_string(), content.len() + 1),
        };
        self.advance_n(consumed);

        MK_TOKEN!(TokenKind::String, literal, self.span_from(start))
    }

    fn read_illegal(&mut self) -> Token {
        let len = self.remainder().chars().next().map_or(1, char::len_utf8);
        self.read_fixed(TokenKind::Illegal, len)
    }
}

/// Scans a whole source, returning every token up to and including `EOF`.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let at_end = token.is(TokenKind::EOF);
        tokens.push(token);

        if at_end {
            return tokens;
        }
    }
}
