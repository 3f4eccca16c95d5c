use crate::ast::Node;
use std::fmt;

/// Renders `node` in fully parenthesised prefix form, e.g.
/// `a + b < c && !d` becomes `(&& (< (+ a b) c) (! d))`.
///
/// Groups keep their parentheses around the inner rendering, so `(a + b) * c`
/// becomes `(* ((+ a b)) c)`.
pub fn render(node: &Node) -> String {
    SExpr(node).to_string()
}

struct SExpr<'a>(&'a Node);

impl fmt::Display for SExpr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Node::Unary { op, operand } => write!(f, "({op} {})", SExpr(operand)),
            Node::Binary { op, left, right } => {
                write!(f, "({op} {} {})", SExpr(left), SExpr(right))
            }
            Node::Number(v) => write!(f, "{v}"),
            Node::Ident(name) => f.write_str(name),
            Node::Group(inner) => write!(f, "({})", SExpr(inner)),
        }
    }
}

/// Infix source form. Only groups are parenthesised, so re-parsing the
/// output of a parsed tree yields the same tree.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Unary { op, operand } => write!(f, "{op}{operand}"),
            Node::Binary { op, left, right } => write!(f, "{left} {op} {right}"),
            Node::Number(v) => write!(f, "{v}"),
            Node::Ident(name) => f.write_str(name),
            Node::Group(inner) => write!(f, "({inner})"),
        }
    }
}
