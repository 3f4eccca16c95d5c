use crate::lexer::TokenKind;
use thiserror::Error;

/// Failure while scanning the input into tokens.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    #[error("expected '{expected}' after '{found}' at offset {offset}")]
    IncompleteOperator {
        found: char,
        expected: char,
        offset: usize,
    },
    #[error("malformed number literal '{text}' at offset {offset}")]
    MalformedNumber { text: String, offset: usize },
}

/// Failure while building the AST.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("empty expression")]
    Empty,
    #[error("empty parentheses at offset {offset}")]
    EmptyGroup { offset: usize },
    #[error("unclosed '(' at offset {offset}")]
    UnclosedParen { offset: usize },
    #[error("unmatched ')' at offset {offset}")]
    UnmatchedCloseParen { offset: usize },
    #[error("operator '{op}' at offset {offset} has no right operand")]
    MissingOperand { op: TokenKind, offset: usize },
    #[error("unexpected '{found}' at offset {offset}, expected {expected}")]
    UnexpectedToken {
        found: String,
        offset: usize,
        expected: &'static str,
    },
    #[error("comparison at offset {offset} cannot be chained; use '&&' or parentheses")]
    ChainedComparison { offset: usize },
    #[error("expression nesting exceeds the limit of {limit}")]
    TooDeep { limit: usize },
}

/// Failure while evaluating a parsed expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("type mismatch: '{op}' is not defined for {found}")]
    TypeMismatch { op: &'static str, found: String },
    #[error("undefined variable: {0}")]
    UndefinedVariable(String),
}

/// Any failure of the parse-then-evaluate pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Error::Parse(ParseError::Lex(e))
    }
}
