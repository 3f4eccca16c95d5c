use crate::error::LexError;
use log::trace;
use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

/// Kind of a lexical token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Variable name, e.g. `hitsAna_energy`.
    Ident,
    /// Floating point literal, e.g. `2.5` or `1e-3`.
    Num,
    LParen,
    RParen,
    Star,
    Slash,
    Plus,
    Minus,
    Lt,
    Gt,
    Le,
    Ge,
    EqEq,
    NotEq,
    AndAnd,
    OrOr,
    Not,
}

impl TokenKind {
    /// Source spelling of an operator or parenthesis; a descriptive word for
    /// identifiers and numbers.
    pub fn symbol(self) -> &'static str {
        match self {
            TokenKind::Ident => "identifier",
            TokenKind::Num => "number",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Le => "<=",
            TokenKind::Ge => ">=",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::AndAnd => "&&",
            TokenKind::OrOr => "||",
            TokenKind::Not => "!",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A token with its source text and the byte offset where it starts.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, offset: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            offset,
        }
    }

    fn op(kind: TokenKind, offset: usize) -> Self {
        Self::new(kind, kind.symbol(), offset)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Scans `input` into a token sequence.
///
/// Whitespace separates tokens. Operator characters end the word being
/// accumulated; every other character is part of a word. A word starting with
/// a digit or `.` must be a valid, finite floating point literal; anything
/// else is an identifier.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input).tokenize()
}

pub(crate) struct Lexer<'a> {
    src: &'a str,
    chars: Peekable<CharIndices<'a>>,
    /// Start of the pending word, if any. Words are always contiguous.
    word: Option<usize>,
    word_end: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self {
            src,
            chars: src.char_indices().peekable(),
            word: None,
            word_end: 0,
            tokens: Vec::new(),
        }
    }

    pub(crate) fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        while let Some((i, c)) = self.chars.next() {
            match c {
                c if c.is_whitespace() => self.flush()?,
                '(' => self.single(TokenKind::LParen, i)?,
                ')' => self.single(TokenKind::RParen, i)?,
                '*' => self.single(TokenKind::Star, i)?,
                '/' => self.single(TokenKind::Slash, i)?,
                // exponent sign of a literal such as 1e-3
                '+' | '-' if self.in_exponent() => self.extend(i, c),
                '+' => self.single(TokenKind::Plus, i)?,
                '-' => self.single(TokenKind::Minus, i)?,
                '<' => {
                    let kind = if self.bump_if('=') { TokenKind::Le } else { TokenKind::Lt };
                    self.single(kind, i)?
                }
                '>' => {
                    let kind = if self.bump_if('=') { TokenKind::Ge } else { TokenKind::Gt };
                    self.single(kind, i)?
                }
                '!' => {
                    let kind = if self.bump_if('=') { TokenKind::NotEq } else { TokenKind::Not };
                    self.single(kind, i)?
                }
                '=' => self.pair(c, '=', TokenKind::EqEq, i)?,
                '&' => self.pair(c, '&', TokenKind::AndAnd, i)?,
                '|' => self.pair(c, '|', TokenKind::OrOr, i)?,
                _ => self.extend(i, c),
            }
        }
        self.flush()?;
        trace!("tokens: {:?}", self.tokens);
        Ok(self.tokens)
    }

    fn bump_if(&mut self, expected: char) -> bool {
        if self.chars.peek().map(|&(_, c)| c) == Some(expected) {
            self.chars.next();
            true
        } else {
            false
        }
    }

    fn single(&mut self, kind: TokenKind, offset: usize) -> Result<(), LexError> {
        self.flush()?;
        self.tokens.push(Token::op(kind, offset));
        Ok(())
    }

    /// Two-character operator whose second character is mandatory.
    fn pair(
        &mut self,
        first: char,
        second: char,
        kind: TokenKind,
        offset: usize,
    ) -> Result<(), LexError> {
        self.flush()?;
        if !self.bump_if(second) {
            return Err(LexError::IncompleteOperator {
                found: first,
                expected: second,
                offset,
            });
        }
        self.tokens.push(Token::op(kind, offset));
        Ok(())
    }

    fn extend(&mut self, offset: usize, c: char) {
        if self.word.is_none() {
            self.word = Some(offset);
        }
        self.word_end = offset + c.len_utf8();
    }

    /// Whether the pending word is a mantissa followed by `e`/`E`.
    fn in_exponent(&self) -> bool {
        let Some(start) = self.word else {
            return false;
        };
        let word = &self.src[start..self.word_end];
        let Some(mantissa) = word.strip_suffix(['e', 'E']) else {
            return false;
        };
        mantissa.bytes().any(|b| b.is_ascii_digit())
            && mantissa.bytes().all(|b| b.is_ascii_digit() || b == b'.')
    }

    fn flush(&mut self) -> Result<(), LexError> {
        let Some(start) = self.word.take() else {
            return Ok(());
        };
        let text = &self.src[start..self.word_end];
        let kind = if text.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
            if !text.parse::<f64>().is_ok_and(f64::is_finite) {
                return Err(LexError::MalformedNumber {
                    text: text.to_string(),
                    offset: start,
                });
            }
            TokenKind::Num
        } else {
            TokenKind::Ident
        };
        self.tokens.push(Token::new(kind, text, start));
        Ok(())
    }
}
