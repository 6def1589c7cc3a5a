//! Parser state and entry points.
//!
//! The parser pulls tokens from its lexer on demand and keeps exactly two of
//! them: `current`, the token being parsed, and `peek`, the one after it.
//! Handlers are registered per token kind in lookup tables when the parser is
//! built:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::{collections::HashMap, mem};

use tracing::{debug, trace};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position, Span,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of tokens, advanced one token at a time
    lexer: Lexer,
    /// The token being parsed
    current: Token,
    /// One-token lookahead
    peek: Token,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Unmatched `{` tokens behind `current`
    block_depth: usize,
    /// Expressions currently being parsed, innermost included
    nesting: usize,
}

/// Deepest expression nesting accepted before parsing gives up with an error.
pub const MAX_NESTING_DEPTH: usize = 256;

impl Parser {
    /// Creates a parser and primes `current` and `peek` from the lexer.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current,
            peek,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            block_depth: 0,
            nesting: 0,
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Shifts `peek` into `current`, pulls a fresh `peek` from the lexer and
    /// returns the previous current token.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        let peek = mem::replace(&mut self.peek, next);
        self.block_depth = self.block_depth_after_current();
        mem::replace(&mut self.current, peek)
    }

    /// Advances only if the next token is `kind`, so `current` becomes it.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) with the new current token, otherwise an
    /// `UnexpectedPeek` error positioned at the offending token.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.peek.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedPeek {
                    expected: expected_kind,
                    received: self.peek.kind,
                },
                self.peek.span.start.clone(),
            ));
        }

        self.advance();
        Ok(self.current.clone())
    }

    /// Consumes the next token when it is `kind`; absence is not an error.
    pub fn advance_if_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek.is(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Block depth once `current` has been consumed.
    fn block_depth_after_current(&self) -> usize {
        match self.current.kind {
            TokenKind::OpenCurly => self.block_depth + 1,
            TokenKind::CloseCurly => self.block_depth.saturating_sub(1),
            _ => self.block_depth,
        }
    }

    /// Skips ahead to the last token of the broken statement.
    ///
    /// Stops outside any open block, either on a `;` or just before a `let`
    /// or `return`, or at `EOF`. Blocks entered before or during the skip are
    /// consumed through their closing `}`.
    pub fn synchronize(&mut self) {
        while !self.current.is(TokenKind::EOF) {
            if self.block_depth_after_current() == 0
                && (self.current.is(TokenKind::Semicolon)
                    || matches!(self.peek.kind, TokenKind::Let | TokenKind::Return))
            {
                break;
            }

            self.advance();
        }

        trace!(offset = self.current.span.start.0, "synchronized");
    }

    /// Records one more level of expression nesting.
    ///
    /// Fails once `MAX_NESTING_DEPTH` is exceeded; the level is not entered
    /// and must not be left.
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.nesting >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.nesting += 1;
        Ok(())
    }

    pub fn leave_nesting(&mut self) {
        self.nesting -= 1;
    }

    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power_lookup
            .get(&self.peek.kind)
            .copied()
            .unwrap_or(BindingPower::Lowest)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the start of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    /// Span from `start` to the end of the current token.
    pub fn span_from(&self, start: Position) -> Span {
        Span {
            start,
            end: self.current.span.end.clone(),
        }
    }

    /// Parses every statement up to `EOF`.
    ///
    /// A statement that fails to parse is dropped, its error is recorded and
    /// parsing resumes at the next statement, so one pass reports every
    /// independent error.
    pub fn parse_program(mut self) -> (Program, Vec<Error>) {
        let mut program = Program::default();
        let mut errors = vec![];

        while !self.current.is(TokenKind::EOF) {
            match parse_stmt(&mut self) {
                Ok(stmt) => {
                    trace!(%stmt, "parsed statement");
                    program.statements.push(stmt);
                }
                Err(error) => {
                    debug!(%error, offset = error.get_position().0, "skipping statement");
                    errors.push(error);
                    self.synchronize();
                }
            }

            self.advance();
        }

        debug!(
            file = %self.lexer.file(),
            statements = program.len(),
            errors = errors.len(),
            "parsed program"
        );

        (program, errors)
    }
}

/// Parses a complete source into a program and the errors found along the way.
///
/// # Arguments
///
/// * `source` - The source text
/// * `file` - Name used in positions, `"shell"` when absent
pub fn parse(source: String, file: Option<String>) -> (Program, Vec<Error>) {
    Parser::new(Lexer::new(source, file)).parse_program()
}
