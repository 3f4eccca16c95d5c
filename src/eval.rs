use crate::ast::{BinaryOp, Node, UnaryOp};
use crate::bindings::Bindings;
use crate::error::EvalError;
use crate::value::Value;
use log::debug;

/// What to do when an identifier has no binding.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum MissingVariable {
    /// Fail with [`EvalError::UndefinedVariable`].
    #[default]
    Fail,
    /// Use the given number in place of the missing value.
    Substitute(f64),
}

/// Tree-walking evaluator. Holds only configuration, so one evaluator can be
/// shared by any number of expressions and threads.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Evaluator {
    missing: MissingVariable,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_missing(missing: MissingVariable) -> Self {
        Self { missing }
    }

    pub fn missing(&self) -> MissingVariable {
        self.missing
    }

    /// Evaluates `node` against `bindings`. The first error aborts the walk.
    pub fn eval<B>(&self, node: &Node, bindings: &B) -> Result<Value, EvalError>
    where
        B: Bindings + ?Sized,
    {
        match node {
            Node::Number(v) => Ok(Value::Number(*v)),
            Node::Ident(name) => self.variable(name, bindings),
            Node::Group(inner) => self.eval(inner, bindings),
            Node::Unary { op, operand } => {
                let v = self.eval(operand, bindings)?;
                unary(*op, v)
            }
            Node::Binary { op, left, right } => {
                // both sides are always evaluated, including for && and ||
                let l = self.eval(left, bindings)?;
                let r = self.eval(right, bindings)?;
                binary(*op, l, r)
            }
        }
    }

    fn variable<B>(&self, name: &str, bindings: &B) -> Result<Value, EvalError>
    where
        B: Bindings + ?Sized,
    {
        match (bindings.lookup(name), self.missing) {
            (Some(v), _) => Ok(Value::Number(v)),
            (None, MissingVariable::Substitute(v)) => {
                debug!("variable '{name}' is unbound, substituting {v}");
                Ok(Value::Number(v))
            }
            (None, MissingVariable::Fail) => Err(EvalError::UndefinedVariable(name.to_string())),
        }
    }
}

/// Evaluates `node` with the default configuration.
pub fn evaluate<B>(node: &Node, bindings: &B) -> Result<Value, EvalError>
where
    B: Bindings + ?Sized,
{
    Evaluator::new().eval(node, bindings)
}

fn unary(op: UnaryOp, v: Value) -> Result<Value, EvalError> {
    match (op, v) {
        (UnaryOp::Plus, Value::Number(x)) => Ok(Value::Number(x)),
        (UnaryOp::Minus, Value::Number(x)) => Ok(Value::Number(-x)),
        (UnaryOp::Not, Value::Boolean(b)) => Ok(Value::Boolean(!b)),
        (op, v) => Err(EvalError::TypeMismatch {
            op: op.symbol(),
            found: v.kind().to_string(),
        }),
    }
}

fn binary(op: BinaryOp, l: Value, r: Value) -> Result<Value, EvalError> {
    use Value::{Boolean, Number};
    let out = match (op, l, r) {
        (BinaryOp::Mul, Number(a), Number(b)) => Number(a * b),
        (BinaryOp::Div, Number(a), Number(b)) => Number(a / b),
        (BinaryOp::Add, Number(a), Number(b)) => Number(a + b),
        (BinaryOp::Sub, Number(a), Number(b)) => Number(a - b),
        (BinaryOp::Lt, Number(a), Number(b)) => Boolean(a < b),
        (BinaryOp::Gt, Number(a), Number(b)) => Boolean(a > b),
        (BinaryOp::Le, Number(a), Number(b)) => Boolean(a <= b),
        (BinaryOp::Ge, Number(a), Number(b)) => Boolean(a >= b),
        (BinaryOp::Eq, Number(a), Number(b)) => Boolean(a == b),
        (BinaryOp::Eq, Boolean(a), Boolean(b)) => Boolean(a == b),
        (BinaryOp::Ne, Number(a), Number(b)) => Boolean(a != b),
        (BinaryOp::Ne, Boolean(a), Boolean(b)) => Boolean(a != b),
        (BinaryOp::And, Boolean(a), Boolean(b)) => Boolean(a && b),
        (BinaryOp::Or, Boolean(a), Boolean(b)) => Boolean(a || b),
        (op, l, r) => {
            return Err(EvalError::TypeMismatch {
                op: op.symbol(),
                found: format!("{} and {}", l.kind(), r.kind()),
            });
        }
    };
    Ok(out)
}
