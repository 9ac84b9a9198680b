use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("namespace", TokenKind::Namespace);
        map.insert("func", TokenKind::Func);
        map.insert("return", TokenKind::Return);
        map.insert("var", TokenKind::Var);
        map.insert("let", TokenKind::Let);
        map.insert("struct", TokenKind::Struct);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("do", TokenKind::Do);
        map.insert("for", TokenKind::For);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("null", TokenKind::Null);
        map.insert("enum", TokenKind::Enum);
        map.insert("union", TokenKind::Union);
        map.insert("break", TokenKind::Break);
        map.insert("continue", TokenKind::Continue);
        map.insert("using", TokenKind::Using);
        map.insert("as", TokenKind::As);
        map.insert("new", TokenKind::New);
        map.insert("free", TokenKind::Free);
        map.insert("asm", TokenKind::Asm);
        map
    };

    pub static ref SINGLE_CHAR_OPERATORS: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("{", TokenKind::LBrace);
        map.insert("}", TokenKind::RBrace);
        map.insert("(", TokenKind::LParen);
        map.insert(")", TokenKind::RParen);
        map.insert("[", TokenKind::LBracket);
        map.insert("]", TokenKind::RBracket);
        map.insert("+", TokenKind::Plus);
        map.insert("-", TokenKind::Minus);
        map.insert("*", TokenKind::Asterisk);
        map.insert("/", TokenKind::Slash);
        map.insert("&", TokenKind::Ampersand);
        map.insert("|", TokenKind::BitwiseOr);
        map.insert("^", TokenKind::Caret);
        map.insert("%", TokenKind::Modulo);
        map.insert("!", TokenKind::Bang);
        map.insert("=", TokenKind::Equals);
        map.insert(">", TokenKind::Greater);
        map.insert("<", TokenKind::Less);
        map.insert(";", TokenKind::Semicolon);
        map.insert(":", TokenKind::Colon);
        map.insert(",", TokenKind::Comma);
        map.insert(".", TokenKind::Dot);
        map
    };

    pub static ref DOUBLE_CHAR_OPERATORS: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("&&", TokenKind::LogicalAnd);
        map.insert("||", TokenKind::LogicalOr);
        map.insert("<<", TokenKind::BitwiseShiftLeft);
        map.insert(">>", TokenKind::BitwiseShiftRight);
        map.insert("+=", TokenKind::PlusEquals);
        map.insert("-=", TokenKind::MinusEquals);
        map.insert("*=", TokenKind::MultiplyEquals);
        map.insert("/=", TokenKind::DivideEquals);
        map.insert("%=", TokenKind::ModuloEquals);
        map.insert("!=", TokenKind::BangEquals);
        map.insert("&=", TokenKind::AndEquals);
        map.insert("|=", TokenKind::OrEquals);
        map.insert("^=", TokenKind::XorEquals);
        map.insert("==", TokenKind::EqualsEquals);
        map.insert(">=", TokenKind::GreaterEquals);
        map.insert("<=", TokenKind::LessEquals);
        map.insert("->", TokenKind::Arrow);
        map.insert("::", TokenKind::ScopeResolution);
        map
    };

    pub static ref TRIPLE_CHAR_OPERATORS: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("<<=", TokenKind::LeftShiftEquals);
        map.insert(">>=", TokenKind::RightShiftEquals);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,

    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Semicolon,
    Colon,
    Comma,
    Dot,

    Plus,
    Minus,
    Asterisk,
    Slash,
    Modulo,
    Ampersand,
    BitwiseOr,
    Caret,
    Bang,
    Equals,
    Greater,
    Less,
    LogicalAnd,
    LogicalOr,
    BitwiseShiftLeft,
    BitwiseShiftRight,
    PlusEquals,
    MinusEquals,
    MultiplyEquals,
    DivideEquals,
    ModuloEquals,
    BangEquals,
    AndEquals,
    OrEquals,
    XorEquals,
    EqualsEquals,
    GreaterEquals,
    LessEquals,
    Arrow,
    ScopeResolution,
    LeftShiftEquals,
    RightShiftEquals,

    Identifier,
    Integer,
    RealNumber,
    String,
    Character,

    // Reserved
    Namespace,
    Func,
    Return,
    Var,
    Let,
    Struct,
    If,
    Else,
    While,
    Do,
    For,
    True,
    False,
    Null,
    Enum,
    Union,
    Break,
    Continue,
    Using,
    As,
    New,
    Free,
    Asm,
}

impl TokenKind {
    /// The canonical upper-case name of the kind, as used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::EOF => "EOF",
            TokenKind::LBrace => "L_BRACE",
            TokenKind::RBrace => "R_BRACE",
            TokenKind::LParen => "L_PAREN",
            TokenKind::RParen => "R_PAREN",
            TokenKind::LBracket => "L_BRACKET",
            TokenKind::RBracket => "R_BRACKET",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Colon => "COLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Slash => "SLASH",
            TokenKind::Modulo => "MODULO",
            TokenKind::Ampersand => "AMPERSAND",
            TokenKind::BitwiseOr => "BITWISE_OR",
            TokenKind::Caret => "CARET",
            TokenKind::Bang => "BANG",
            TokenKind::Equals => "EQUALS",
            TokenKind::Greater => "GREATER",
            TokenKind::Less => "LESS",
            TokenKind::LogicalAnd => "LOGICAL_AND",
            TokenKind::LogicalOr => "LOGICAL_OR",
            TokenKind::BitwiseShiftLeft => "BITWISE_SHIFT_LEFT",
            TokenKind::BitwiseShiftRight => "BITWISE_SHIFT_RIGHT",
            TokenKind::PlusEquals => "PLUS_EQUALS",
            TokenKind::MinusEquals => "MINUS_EQUALS",
            TokenKind::MultiplyEquals => "MULTIPLY_EQUALS",
            TokenKind::DivideEquals => "DIVIDE_EQUALS",
            TokenKind::ModuloEquals => "MODULO_EQUALS",
            TokenKind::BangEquals => "BANG_EQUALS",
            TokenKind::AndEquals => "AND_EQUALS",
            TokenKind::OrEquals => "OR_EQUALS",
            TokenKind::XorEquals => "XOR_EQUALS",
            TokenKind::EqualsEquals => "EQUALS_EQUALS",
            TokenKind::GreaterEquals => "GREATER_EQUALS",
            TokenKind::LessEquals => "LESS_EQUALS",
            TokenKind::Arrow => "ARROW",
            TokenKind::ScopeResolution => "SCOPE_RESOLUTION",
            TokenKind::LeftShiftEquals => "LEFT_SHIFT_EQUALS",
            TokenKind::RightShiftEquals => "RIGHT_SHIFT_EQUALS",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Integer => "INTEGER",
            TokenKind::RealNumber => "REAL_NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Character => "CHARACTER",
            TokenKind::Namespace => "KW_NAMESPACE",
            TokenKind::Func => "KW_FUNC",
            TokenKind::Return => "KW_RETURN",
            TokenKind::Var => "KW_VAR",
            TokenKind::Let => "KW_LET",
            TokenKind::Struct => "KW_STRUCT",
            TokenKind::If => "KW_IF",
            TokenKind::Else => "KW_ELSE",
            TokenKind::While => "KW_WHILE",
            TokenKind::Do => "KW_DO",
            TokenKind::For => "KW_FOR",
            TokenKind::True => "KW_TRUE",
            TokenKind::False => "KW_FALSE",
            TokenKind::Null => "KW_NULL",
            TokenKind::Enum => "KW_ENUM",
            TokenKind::Union => "KW_UNION",
            TokenKind::Break => "KW_BREAK",
            TokenKind::Continue => "KW_CONTINUE",
            TokenKind::Using => "KW_USING",
            TokenKind::As => "KW_AS",
            TokenKind::New => "KW_NEW",
            TokenKind::Free => "KW_FREE",
            TokenKind::Asm => "KW_ASM",
        }
    }

    /// The fixed source spelling of operators and keywords.
    ///
    /// Literal kinds have no fixed spelling and return an empty string.
    pub fn spelling(&self) -> &'static str {
        match self {
            TokenKind::EOF
            | TokenKind::Identifier
            | TokenKind::Integer
            | TokenKind::RealNumber
            | TokenKind::String
            | TokenKind::Character => "",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Modulo => "%",
            TokenKind::Ampersand => "&",
            TokenKind::BitwiseOr => "|",
            TokenKind::Caret => "^",
            TokenKind::Bang => "!",
            TokenKind::Equals => "=",
            TokenKind::Greater => ">",
            TokenKind::Less => "<",
            TokenKind::LogicalAnd => "&&",
            TokenKind::LogicalOr => "||",
            TokenKind::BitwiseShiftLeft => "<<",
            TokenKind::BitwiseShiftRight => ">>",
            TokenKind::PlusEquals => "+=",
            TokenKind::MinusEquals => "-=",
            TokenKind::MultiplyEquals => "*=",
            TokenKind::DivideEquals => "/=",
            TokenKind::ModuloEquals => "%=",
            TokenKind::BangEquals => "!=",
            TokenKind::AndEquals => "&=",
            TokenKind::OrEquals => "|=",
            TokenKind::XorEquals => "^=",
            TokenKind::EqualsEquals => "==",
            TokenKind::GreaterEquals => ">=",
            TokenKind::LessEquals => "<=",
            TokenKind::Arrow => "->",
            TokenKind::ScopeResolution => "::",
            TokenKind::LeftShiftEquals => "<<=",
            TokenKind::RightShiftEquals => ">>=",
            TokenKind::Namespace => "namespace",
            TokenKind::Func => "func",
            TokenKind::Return => "return",
            TokenKind::Var => "var",
            TokenKind::Let => "let",
            TokenKind::Struct => "struct",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::Do => "do",
            TokenKind::For => "for",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Null => "null",
            TokenKind::Enum => "enum",
            TokenKind::Union => "union",
            TokenKind::Break => "break",
            TokenKind::Continue => "continue",
            TokenKind::Using => "using",
            TokenKind::As => "as",
            TokenKind::New => "new",
            TokenKind::Free => "free",
            TokenKind::Asm => "asm",
        }
    }

    pub fn is_keyword(&self) -> bool {
        RESERVED_LOOKUP.get(self.spelling()) == Some(self)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Payload of identifiers and literals; empty for fixed spellings.
    pub value: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.value.is_empty() {
            write!(f, "{} {}", self.position, self.kind)
        } else {
            write!(f, "{} {} ({})", self.position, self.kind, self.value)
        }
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}
