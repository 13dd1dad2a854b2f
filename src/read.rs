use crate::{
    error::EvalError,
    syntax::{NodeKind, SyntaxNode},
    value::{SExpr, Value},
};

/// Convert a syntax tree into a value
///
/// Number literals that do not fit in an `i64` become error values. Nothing
/// else is checked here; malformed arithmetic is left to the evaluator.
pub fn read<N>(node: &N) -> Value
where
    N: SyntaxNode,
{
    match node.kind() {
        NodeKind::Number => read_number(node.text()),
        NodeKind::Symbol => Value::symbol(node.text()),
        NodeKind::Group | NodeKind::Punct | NodeKind::Raw => {
            Value::Expression(read_children(node))
        }
    }
}

fn read_number(text: &str) -> Value {
    match text.parse::<i64>() {
        Ok(n) => Value::Number(n),
        Err(_) => EvalError::InvalidNumber.into(),
    }
}

fn read_children<N>(node: &N) -> SExpr
where
    N: SyntaxNode,
{
    node.children()
        .filter(|child| !matches!(child.kind(), NodeKind::Punct | NodeKind::Raw))
        .fold(SExpr::new(), |expr, child| expr.append(read(&child)))
}
