use std::fmt;

/// Expression tree. Every node owns its children; a parsed tree is never
/// mutated and can be evaluated any number of times.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Prefix operator (`-x`, `+x`, `!x`).
    Unary { op: UnaryOp, operand: Box<Node> },
    /// Infix operator (`a + b`, `a < b`, `a && b`, ...).
    Binary {
        op: BinaryOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    /// Numeric literal (e.g. 1, 3.14).
    Number(f64),
    /// Variable reference, resolved against the bindings at evaluation time.
    Ident(String),
    /// Explicitly parenthesised sub-expression. Transparent for evaluation.
    Group(Box<Node>),
}

impl Node {
    pub fn unary(op: UnaryOp, operand: Node) -> Self {
        Node::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: BinaryOp, left: Node, right: Node) -> Self {
        Node::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Node::Ident(name.into())
    }

    pub fn group(inner: Node) -> Self {
        Node::Group(Box::new(inner))
    }
}

/// Prefix operator of a [`Node::Unary`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Plus,
    Minus,
    Not,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
            UnaryOp::Not => "!",
        }
    }

    /// Signs bind tighter than any binary operator (`-a * b` is `(-a) * b`);
    /// `!` sits with the logical operators (`!a < b` is `!(a < b)`).
    pub fn precedence(self) -> u8 {
        match self {
            UnaryOp::Plus | UnaryOp::Minus => 10,
            UnaryOp::Not => 6,
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Infix operator of a [`Node::Binary`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Mul,
    Div,
    Add,
    Sub,
    Lt,
    Gt,
    Le,
    Ge,
    Eq,
    Ne,
    And,
    Or,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::Le => "<=",
            BinaryOp::Ge => ">=",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        }
    }

    /// Binding strength; higher binds tighter. Parentheses sit above all of
    /// these at 10.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Mul | BinaryOp::Div => 9,
            BinaryOp::Add | BinaryOp::Sub => 8,
            BinaryOp::Lt
            | BinaryOp::Gt
            | BinaryOp::Le
            | BinaryOp::Ge
            | BinaryOp::Eq
            | BinaryOp::Ne => 7,
            BinaryOp::And | BinaryOp::Or => 6,
        }
    }

    pub fn is_comparison(self) -> bool {
        self.precedence() == 7
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
