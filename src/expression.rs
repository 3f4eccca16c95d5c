use crate::ast::Node;
use crate::bindings::Bindings;
use crate::collect::collect_vars;
use crate::error::{EvalError, ParseError};
use crate::eval::Evaluator;
use crate::parser::parse;
use crate::render::render;
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

/// A parsed expression bundled with its source text and the variables it
/// references. Parse once, then evaluate against as many bindings as needed,
/// from any thread.
#[derive(Clone, Debug, PartialEq)]
pub struct Expression {
    source: String,
    root: Node,
    /// Variables in left-to-right first-appearance order.
    variables: Vec<String>,
}

impl Expression {
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let root = parse(source)?;
        let variables = collect_vars(&root);
        Ok(Self {
            source: source.to_string(),
            root,
            variables,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Evaluates with the default [`Evaluator`]; unbound variables fail.
    pub fn eval<B>(&self, bindings: &B) -> Result<Value, EvalError>
    where
        B: Bindings + ?Sized,
    {
        self.eval_with(&Evaluator::new(), bindings)
    }

    pub fn eval_with<B>(&self, evaluator: &Evaluator, bindings: &B) -> Result<Value, EvalError>
    where
        B: Bindings + ?Sized,
    {
        evaluator.eval(&self.root, bindings)
    }

    /// S-expression form of the parsed tree, see [`render`].
    pub fn render(&self) -> String {
        render(&self.root)
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
