#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use log::debug;

use crate::{
    ast::ast::File,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::Lexer,
    parser::parser::Parser,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod semantic;

extern crate regex;

/// A location in a source buffer. Line and column are 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(line: u32, column: u32, file: Rc<String>) -> Self {
        Position { line, column, file }
    }

    pub fn null() -> Self {
        Position::new(0, 0, Rc::new(String::from("<null>")))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Everything a run of the front end produces: the tree and the diagnostics of both phases.
#[derive(Debug)]
pub struct ParseResult {
    pub file: File,
    pub lexer_errors: Vec<Error>,
    pub parser_errors: Vec<Error>,
}

impl ParseResult {
    pub fn lexer_errors_reported(&self) -> bool {
        !self.lexer_errors.is_empty()
    }

    pub fn parser_errors_reported(&self) -> bool {
        !self.parser_errors.is_empty()
    }

    pub fn errors_reported(&self) -> bool {
        self.lexer_errors_reported() || self.parser_errors_reported()
    }

    /// All diagnostics, lexical ones first.
    pub fn errors(&self) -> impl Iterator<Item = &Error> {
        self.lexer_errors.iter().chain(self.parser_errors.iter())
    }
}

/// Lexes and parses `source` in one go.
pub fn parse_source(source: String, file: Option<String>) -> ParseResult {
    let mut lexer = Lexer::new(source, file);
    let tokens = lexer.tokenize();

    let mut parser = Parser::new(&tokens);
    let file = parser.parse();
    debug!(
        "parsed {} top-level statements ({} lexer errors, {} parser errors)",
        file.statements.len(),
        lexer.errors().len(),
        parser.errors().len()
    );

    ParseResult {
        file,
        lexer_errors: lexer.into_errors(),
        parser_errors: parser.into_errors(),
    }
}

/// Returns the text of the 1-based `line` of `source`, without its line break.
pub fn get_line_at_position(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }
    source
        .split('\n')
        .nth(line as usize - 1)
        .map(|text| text.trim_end_matches('\r'))
}

/// Renders a diagnostic together with the source line it points at.
pub fn render_error(error: &Error, source: &str) -> String {
    /*
        error: message
        -> final.tez
           |
        20 | let a = #;
           | --------^
    */

    let position = error.get_position();
    let mut rendered = String::new();

    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("Error: {}\n", error.get_internal_error()));
    } else {
        rendered.push_str(&format!(
            "Error: {} ({})\n",
            error.get_internal_error(),
            error.get_tip()
        ));
    }
    rendered.push_str(&format!("-> {}\n", position));

    let Some(line_text) = get_line_at_position(source, position.line) else {
        return rendered;
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    rendered.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    rendered.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize).saturating_sub(removed_whitespace).max(1);
    rendered.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    rendered
}

pub fn display_error(error: &Error, source: &str) {
    eprint!("{}", render_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (&string[start..], start)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nsecond\r\n\nTesting { }\n";
        assert_eq!(super::get_line_at_position(source, 1), Some("Hello, world!"));
        assert_eq!(super::get_line_at_position(source, 2), Some("second"));
        assert_eq!(super::get_line_at_position(source, 4), Some("Testing { }"));
        assert_eq!(super::get_line_at_position(source, 0), None);
        assert_eq!(super::get_line_at_position(source, 9), None);
    }

    #[test]
    fn test_render_error_points_at_column() {
        let source = "func main() {\n    let a : int = #;\n}\n";
        let error = Error::new(
            ErrorImpl::UnknownOperator { operator: '#' },
            Position::new(2, 19, Rc::new(String::from("main.tez"))),
        );

        let rendered = super::render_error(&error, source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: unknown operator '#' (`#` is not an operator of the language)");
        assert_eq!(lines[1], "-> main.tez:2:19");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | let a : int = #;");
        assert_eq!(lines[4], "  | --------------^");
    }

    #[test]
    fn test_parse_source_collects_both_phases() {
        let result = super::parse_source(String::from("let x : int = 5 @;"), None);

        assert!(result.lexer_errors_reported());
        assert!(!result.parser_errors_reported());
        assert!(result.errors_reported());
        assert_eq!(result.file.statements.len(), 1);
        assert_eq!(result.errors().count(), 1);
    }
}
