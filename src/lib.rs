mod ast;
mod bindings;
mod collect;
mod error;
mod eval;
mod expression;
mod lexer;
mod parser;
mod render;
mod value;

pub use ast::{BinaryOp, Node, UnaryOp};
pub use bindings::Bindings;
pub use collect::collect_vars;
pub use error::{Error, EvalError, LexError, ParseError};
pub use eval::{Evaluator, MissingVariable, evaluate};
pub use expression::Expression;
pub use lexer::{Token, TokenKind, tokenize};
pub use parser::{MAX_DEPTH, parse, parse_tokens};
pub use render::render;
pub use value::{Value, ValueKind};

/// Parses `input` and evaluates it against `bindings` in one step.
///
/// Use [`Expression`] instead when the same expression is evaluated more
/// than once.
pub fn eval_str<B>(input: &str, bindings: &B) -> Result<Value, Error>
where
    B: Bindings + ?Sized,
{
    let node = parse(input)?;
    Ok(evaluate(&node, bindings)?)
}
