use crate::ast::Node;
use std::collections::HashSet;

/// Identifiers referenced by `node`, in left-to-right first-appearance order,
/// each listed once.
pub fn collect_vars(node: &Node) -> Vec<String> {
    fn walk(node: &Node, seen: &mut HashSet<String>, out: &mut Vec<String>) {
        match node {
            Node::Number(_) => {}
            Node::Ident(name) => {
                if seen.insert(name.clone()) {
                    out.push(name.clone());
                }
            }
            Node::Unary { operand, .. } => walk(operand, seen, out),
            Node::Group(inner) => walk(inner, seen, out),
            Node::Binary { left, right, .. } => {
                walk(left, seen, out);
                walk(right, seen, out);
            }
        }
    }
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    walk(node, &mut seen, &mut out);
    out
}
