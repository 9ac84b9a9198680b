//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct: the token cursor with one
//! token of lookahead (plus arbitrary peeking), the statement lookup table,
//! the diagnostics collected so far, and panic-mode recovery.
//!
//! Parsing functions return `Result` and bail out with `?` on the first
//! mismatch, so a half-built node never escapes. The error is caught at the
//! nearest statement boundary (top level or inside a block), recorded, and
//! the parser discards tokens until a synchronization point.

use std::collections::HashMap;

use log::{debug, trace, warn};

use crate::{
    ast::ast::{File, Node},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{
    lookups::{create_token_lookups, StmtHandler, StmtLookup, SYNCHRONIZATION_TOKENS},
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// The parser borrows the token sequence; it never owns or mutates tokens.
pub struct Parser<'a> {
    /// The list of tokens to parse
    tokens: &'a [Token],
    /// Current position in the token stream
    pos: usize,
    /// Returned once the stream is exhausted
    eof: Token,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Diagnostics reported so far
    errors: Vec<Error>,
}

impl<'a> Parser<'a> {
    /// Creates a new Parser instance with its statement table registered.
    pub fn new(tokens: &'a [Token]) -> Self {
        let eof_position = tokens
            .last()
            .map(|token| token.position.clone())
            .unwrap_or_else(Position::null);

        let mut parser = Parser {
            tokens,
            pos: 0,
            eof: Token {
                kind: TokenKind::EOF,
                value: String::new(),
                position: eof_position,
            },
            stmt_lookup: HashMap::new(),
            errors: vec![],
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.peek_token(0)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the token `depth` places ahead; depth 0 is the current token.
    pub fn peek_token(&self, depth: usize) -> &Token {
        self.tokens.get(self.pos + depth).unwrap_or(&self.eof)
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> &Token {
        let index = self.pos;
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        self.tokens.get(index).unwrap_or(&self.eof)
    }

    /// Consumes the current token if it has the expected kind.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise an
    /// `UnexpectedToken` error pointing at the current token.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    found: token.kind,
                },
                token.position.clone(),
            ));
        }
        Ok(self.advance().clone())
    }

    /// Consumes the current token if its kind is one of `kinds`.
    pub fn match_token(&mut self, kinds: &[TokenKind]) -> Option<TokenKind> {
        let kind = self.current_token_kind();
        if kind != TokenKind::EOF && kinds.contains(&kind) {
            self.advance();
            Some(kind)
        } else {
            None
        }
    }

    /// Checks the current token kind without consuming it.
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_token_kind() == kind
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Skips stray `;` tokens at a statement boundary.
    pub fn skip_semicolons(&mut self) {
        while self.match_token(&[TokenKind::Semicolon]).is_some() {}
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    pub fn errors_reported(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn report(&mut self, error: Error) {
        warn!("{}", error);
        self.errors.push(error);
    }

    /// Discards tokens until a synchronization point.
    ///
    /// `;`, `,`, `(` and `)` are consumed, a `{` is consumed together with
    /// everything up to its matching `}`, and a `}` is left for the enclosing
    /// block to close.
    pub fn synchronize(&mut self) {
        while self.has_tokens() {
            if !self.current_token().is_one_of_many(SYNCHRONIZATION_TOKENS) {
                self.advance();
                continue;
            }
            match self.current_token_kind() {
                TokenKind::RBrace => {}
                TokenKind::LBrace => self.skip_braced_group(),
                _ => {
                    self.advance();
                }
            }
            break;
        }
        trace!("resynchronized at {}", self.current_token());
    }

    fn skip_braced_group(&mut self) {
        let mut depth = 0usize;
        while self.has_tokens() {
            match self.advance().kind {
                TokenKind::LBrace => depth += 1,
                TokenKind::RBrace => {
                    depth -= 1;
                    if depth == 0 {
                        return;
                    }
                }
                _ => {}
            }
        }
    }

    /// Parses one statement, recording and recovering from any error.
    pub fn parse_statement_recovering(&mut self) -> Option<Node> {
        let start = self.pos;
        match parse_stmt(self) {
            Ok(node) => Some(node),
            Err(error) => {
                self.report(error);
                self.synchronize();
                if self.pos == start && self.has_tokens() {
                    self.advance();
                }
                None
            }
        }
    }

    /// Parses every top-level statement until the end of the token stream.
    pub fn parse(&mut self) -> File {
        self.pos = 0;
        self.errors.clear();

        let mut statements = vec![];
        loop {
            self.skip_semicolons();
            if !self.has_tokens() {
                break;
            }
            if let Some(statement) = self.parse_statement_recovering() {
                statements.push(statement);
            }
        }

        debug!(
            "parsed {} top-level statements with {} errors",
            statements.len(),
            self.errors.len()
        );
        File { statements }
    }
}

/// Parses a token sequence into a `File`, returning the diagnostics alongside.
///
/// The parse always runs to the end of the tokens; a non-empty error list
/// means the tree is a best-effort reconstruction.
pub fn parse(tokens: &[Token]) -> (File, Vec<Error>) {
    let mut parser = Parser::new(tokens);
    let file = parser.parse();
    (file, parser.into_errors())
}
