use crate::ast::{BinaryOp, Node, UnaryOp};
use crate::error::{LexError, ParseError};
use crate::lexer::{Token, TokenKind, tokenize};
use crate::render::render;
use log::debug;

/// Maximum nesting of parentheses, prefix operators and chained binary
/// operators, which bounds the height of every parsed tree.
pub const MAX_DEPTH: usize = 256;

/// Tokenizes and parses `input` into an expression tree.
pub fn parse(input: &str) -> Result<Node, ParseError> {
    let tokens = tokenize(input)?;
    parse_tokens(&tokens)
}

/// Parses an already tokenized expression.
pub fn parse_tokens(tokens: &[Token]) -> Result<Node, ParseError> {
    let node = Parser::new(tokens).parse()?;
    debug!("parsed expression: {}", render(&node));
    Ok(node)
}

/// Precedence-climbing parser over a token slice.
///
/// `+` and `-` are binary when they follow a complete operand and unary
/// otherwise, so no lookahead is needed to tell them apart.
pub(crate) struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
    depth: usize,
}

impl<'t> Parser<'t> {
    pub(crate) fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Option<&'t Token> {
        let tok = self.tokens.get(self.pos);
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    /// The token `back` positions before the cursor.
    fn behind(&self, back: usize) -> Option<&'t Token> {
        self.pos.checked_sub(back).and_then(|i| self.tokens.get(i))
    }

    pub(crate) fn parse(mut self) -> Result<Node, ParseError> {
        if self.tokens.is_empty() {
            return Err(ParseError::Empty);
        }
        let node = self.expression(0)?;
        match self.peek() {
            None => Ok(node),
            Some(tok) if tok.kind == TokenKind::RParen => {
                Err(ParseError::UnmatchedCloseParen { offset: tok.offset })
            }
            Some(tok) => Err(unexpected(tok, "an operator")),
        }
    }

    /// Parses an operand followed by every binary operator binding at least
    /// as tight as `min_prec`. The right side of an operator is parsed one
    /// level tighter, which groups equal precedence from the left.
    fn expression(&mut self, min_prec: u8) -> Result<Node, ParseError> {
        let mut node = self.operand()?;
        let depth = self.depth;
        while let Some(tok) = self.peek() {
            let Some(op) = binary_op(tok.kind) else {
                break;
            };
            let prec = op.precedence();
            if prec < min_prec {
                break;
            }
            if op.is_comparison()
                && matches!(&node, Node::Binary { op: prev, .. } if prev.is_comparison())
            {
                return Err(ParseError::ChainedComparison { offset: tok.offset });
            }
            self.bump();
            // each operator wraps the tree built so far one level deeper
            self.descend()?;
            let rhs = self.expression(prec + 1)?;
            node = Node::binary(op, node, rhs);
        }
        self.depth = depth;
        Ok(node)
    }

    fn operand(&mut self) -> Result<Node, ParseError> {
        let Some(tok) = self.bump() else {
            return Err(self.dangling());
        };
        match tok.kind {
            TokenKind::Num => number(tok).map(Node::Number),
            TokenKind::Ident => Ok(Node::Ident(tok.text.clone())),
            TokenKind::LParen => self.group(tok),
            TokenKind::Plus => self.prefix(UnaryOp::Plus),
            TokenKind::Minus => self.prefix(UnaryOp::Minus),
            TokenKind::Not => self.prefix(UnaryOp::Not),
            TokenKind::RParen => Err(self.misplaced_close(tok)),
            _ => Err(unexpected(tok, "a number, identifier, '(' or prefix operator")),
        }
    }

    fn prefix(&mut self, op: UnaryOp) -> Result<Node, ParseError> {
        let operand = self.nested(|p| p.expression(op.precedence() + 1))?;
        Ok(Node::unary(op, operand))
    }

    fn group(&mut self, open: &Token) -> Result<Node, ParseError> {
        let inner = self.nested(|p| p.expression(0))?;
        match self.bump() {
            Some(tok) if tok.kind == TokenKind::RParen => Ok(Node::group(inner)),
            Some(tok) => Err(unexpected(tok, "an operator or ')'")),
            None => Err(ParseError::UnclosedParen {
                offset: open.offset,
            }),
        }
    }

    fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        self.descend()?;
        let out = f(self);
        self.depth -= 1;
        out
    }

    fn descend(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::TooDeep { limit: MAX_DEPTH });
        }
        self.depth += 1;
        Ok(())
    }

    /// Input ended where an operand was required.
    fn dangling(&self) -> ParseError {
        match self.behind(1) {
            None => ParseError::Empty,
            Some(prev) if prev.kind == TokenKind::LParen => ParseError::UnclosedParen {
                offset: prev.offset,
            },
            Some(prev) => ParseError::MissingOperand {
                op: prev.kind,
                offset: prev.offset,
            },
        }
    }

    /// A `)` found where an operand was required.
    fn misplaced_close(&self, close: &Token) -> ParseError {
        match self.behind(2) {
            None => ParseError::UnmatchedCloseParen {
                offset: close.offset,
            },
            Some(prev) if prev.kind == TokenKind::LParen => ParseError::EmptyGroup {
                offset: prev.offset,
            },
            Some(prev) => ParseError::MissingOperand {
                op: prev.kind,
                offset: prev.offset,
            },
        }
    }
}

fn binary_op(kind: TokenKind) -> Option<BinaryOp> {
    let op = match kind {
        TokenKind::Star => BinaryOp::Mul,
        TokenKind::Slash => BinaryOp::Div,
        TokenKind::Plus => BinaryOp::Add,
        TokenKind::Minus => BinaryOp::Sub,
        TokenKind::Lt => BinaryOp::Lt,
        TokenKind::Gt => BinaryOp::Gt,
        TokenKind::Le => BinaryOp::Le,
        TokenKind::Ge => BinaryOp::Ge,
        TokenKind::EqEq => BinaryOp::Eq,
        TokenKind::NotEq => BinaryOp::Ne,
        TokenKind::AndAnd => BinaryOp::And,
        TokenKind::OrOr => BinaryOp::Or,
        _ => return None,
    };
    Some(op)
}

// Tokens handed to `parse_tokens` may not come from the lexer, so the
// literal is validated again here.
fn number(tok: &Token) -> Result<f64, ParseError> {
    match tok.text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ParseError::Lex(LexError::MalformedNumber {
            text: tok.text.clone(),
            offset: tok.offset,
        })),
    }
}

fn unexpected(tok: &Token, expected: &'static str) -> ParseError {
    ParseError::UnexpectedToken {
        found: tok.text.clone(),
        offset: tok.offset,
        expected,
    }
}
