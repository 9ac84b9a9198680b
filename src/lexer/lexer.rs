use std::{fs, path::Path, rc::Rc};

use lazy_static::lazy_static;
use log::{debug, trace, warn};
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::tokens::{
    Token, TokenKind, DOUBLE_CHAR_OPERATORS, RESERVED_LOOKUP, SINGLE_CHAR_OPERATORS,
    TRIPLE_CHAR_OPERATORS,
};

/// Handles the construct matched at the cursor. `Err` ends lexing.
pub type RegexHandler = fn(&mut Lexer, &str) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Tried in order; the first pattern matching at the cursor wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^[ \t\r\n\x0B\x0C]+").unwrap(), handler: whitespace_handler },
        RegexPattern { regex: Regex::new(r"^//").unwrap(), handler: line_comment_handler },
        RegexPattern { regex: Regex::new(r"^/\*").unwrap(), handler: block_comment_handler },
        RegexPattern { regex: Regex::new("^\"").unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new("^'").unwrap(), handler: character_handler },
        RegexPattern { regex: Regex::new(r"^[0-9][0-9.]*").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"^[[:punct:]]").unwrap(), handler: operator_handler },
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    /// Byte offset of the cursor.
    pos: usize,
    line: u32,
    /// Byte offset of the first character of the current line.
    line_start: usize,
    file: Rc<String>,
    errors: Vec<Error>,
}

impl Lexer {
    /// Lexer over raw source text. Without a name the source is reported as `<source>`.
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = Rc::new(file.unwrap_or_else(|| String::from("<source>")));

        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            line: 1,
            line_start: 0,
            file: file_name,
            errors: vec![],
        }
    }

    /// Lexer over the contents of the file at `path`.
    pub fn from_file(path: &Path) -> Result<Lexer, Error> {
        let name = path.to_string_lossy().into_owned();
        match fs::read_to_string(path) {
            Ok(source) => Ok(Lexer::new(source, Some(name))),
            Err(error) => Err(Error::new(
                ErrorImpl::FileRead {
                    file: name.clone(),
                    reason: error.to_string(),
                },
                Position::new(0, 0, Rc::new(name)),
            )),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
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

    fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    fn push(&mut self, token: Token) {
        trace!("token {}", token);
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Position of the byte at `offset`, which must lie on the current line.
    pub fn position_at(&self, offset: usize) -> Position {
        Position::new(
            self.line,
            (offset - self.line_start + 1) as u32,
            Rc::clone(&self.file),
        )
    }

    pub fn position(&self) -> Position {
        self.position_at(self.pos)
    }

    pub fn report(&mut self, error_impl: ErrorImpl, position: Position) {
        let error = Error::new(error_impl, position);
        warn!("{}", error);
        self.errors.push(error);
    }

    /// Consumes one character, keeping the line bookkeeping current.
    fn bump(&mut self) -> Option<char> {
        let c = self.at()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.line_start = self.pos;
        }
        Some(c)
    }

    fn unexpected_eof(&self) -> Error {
        Error::new(ErrorImpl::UnexpectedEndOfFile, self.position())
    }

    /// Converts the whole source into tokens, always ending with an `EOF` token.
    ///
    /// Malformed input is reported and skipped; only a construct cut off by the
    /// end of input stops the scan early.
    pub fn tokenize(&mut self) -> Vec<Token> {
        self.tokens.clear();
        self.errors.clear();
        self.pos = 0;
        self.line = 1;
        self.line_start = 0;

        while !self.at_eof() {
            let matched = PATTERNS
                .iter()
                .find_map(|pattern| {
                    pattern
                        .regex
                        .find(self.remainder())
                        .map(|found| (pattern.handler, found.end()))
                });

            let result = match matched {
                Some((handler, end)) => {
                    let text = self.source[self.pos..self.pos + end].to_string();
                    handler(self, &text)
                }
                None => {
                    self.unexpected_character();
                    Ok(())
                }
            };

            if let Err(error) = result {
                warn!("{}", error);
                self.errors.push(error);
                break;
            }
        }

        let eof = MK_TOKEN!(TokenKind::EOF, String::new(), self.position());
        self.tokens.push(eof);
        debug!(
            "tokenized {} into {} tokens with {} errors",
            self.file,
            self.tokens.len(),
            self.errors.len()
        );

        std::mem::take(&mut self.tokens)
    }

    fn unexpected_character(&mut self) {
        let position = self.position();
        if let Some(character) = self.bump() {
            self.report(ErrorImpl::UnexpectedCharacter { character }, position);
        }
    }
}

fn whitespace_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    for _ in matched.chars() {
        lexer.bump();
    }
    Ok(())
}

fn line_comment_handler(lexer: &mut Lexer, _matched: &str) -> Result<(), Error> {
    // The newline itself is left to the whitespace handler.
    let length = lexer.remainder().find('\n').unwrap_or(lexer.remainder().len());
    lexer.advance_n(length);
    Ok(())
}

// The first `*/` closes the comment; block comments do not nest.
fn block_comment_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    lexer.advance_n(matched.len());

    while !lexer.remainder().starts_with("*/") {
        if lexer.bump().is_none() {
            return Err(lexer.unexpected_eof());
        }
    }

    lexer.advance_n(2);
    Ok(())
}

fn string_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let start = lexer.position();
    lexer.advance_n(matched.len());

    // Escapes are kept verbatim; only `\"` is prevented from closing the literal.
    let mut string_literal = String::new();
    let mut escaped = false;
    loop {
        let Some(c) = lexer.bump() else {
            return Err(lexer.unexpected_eof());
        };
        if c == '"' && !escaped {
            break;
        }
        escaped = c == '\\' && !escaped;
        string_literal.push(c);
    }

    lexer.push(MK_TOKEN!(TokenKind::String, string_literal, start));
    Ok(())
}

fn character_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let start = lexer.position();
    lexer.advance_n(matched.len());

    let mut character = String::new();
    let first = lexer.bump().ok_or_else(|| lexer.unexpected_eof())?;
    character.push(first);
    if first == '\\' {
        character.push(lexer.bump().ok_or_else(|| lexer.unexpected_eof())?);
    }

    let closing_position = lexer.position();
    let closing = lexer.bump().ok_or_else(|| lexer.unexpected_eof())?;
    if closing != '\'' {
        lexer.report(ErrorImpl::MalformedCharacter { found: closing }, closing_position);
        loop {
            match lexer.bump() {
                Some('\'') => break,
                Some(_) => continue,
                None => return Err(lexer.unexpected_eof()),
            }
        }
    }

    lexer.push(MK_TOKEN!(TokenKind::Character, character, start));
    Ok(())
}

// Extra decimal points are reported; the token keeps only the text before the first of them.
fn number_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let start = lexer.pos;

    let mut is_real = false;
    let mut valid_len = matched.len();
    for (offset, c) in matched.char_indices() {
        if c == '.' {
            if is_real {
                lexer.report(
                    ErrorImpl::TooManyDecimalPoints {
                        literal: matched.to_string(),
                    },
                    lexer.position_at(start + offset),
                );
                valid_len = valid_len.min(offset);
            }
            is_real = true;
        }
    }

    let kind = if is_real {
        TokenKind::RealNumber
    } else {
        TokenKind::Integer
    };

    lexer.push(MK_TOKEN!(
        kind,
        matched[..valid_len].to_string(),
        lexer.position_at(start)
    ));
    lexer.advance_n(matched.len());
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    if let Some(kind) = RESERVED_LOOKUP.get(matched) {
        lexer.push(MK_TOKEN!(*kind, String::new(), lexer.position()));
    } else {
        lexer.push(MK_TOKEN!(
            TokenKind::Identifier,
            matched.to_string(),
            lexer.position()
        ));
    }

    lexer.advance_n(matched.len());
    Ok(())
}

fn operator_handler(lexer: &mut Lexer, _matched: &str) -> Result<(), Error> {
    let tables = [
        (3, &*TRIPLE_CHAR_OPERATORS),
        (2, &*DOUBLE_CHAR_OPERATORS),
        (1, &*SINGLE_CHAR_OPERATORS),
    ];

    for (length, table) in tables {
        let Some(spelling) = lexer.remainder().get(..length) else {
            continue;
        };
        if let Some(kind) = table.get(spelling) {
            lexer.push(MK_TOKEN!(*kind, String::new(), lexer.position()));
            lexer.advance_n(length);
            return Ok(());
        }
    }

    let position = lexer.position();
    if let Some(operator) = lexer.bump() {
        lexer.report(ErrorImpl::UnknownOperator { operator }, position);
    }
    Ok(())
}
