use std::{fmt, iter::FromIterator, slice, vec};

use itertools::Itertools;

/// A runtime value
///
/// Each value has exactly one owner. Moving a value out of an [`SExpr`]
/// (with [`SExpr::pop`] or [`SExpr::take`]) hands ownership to the caller,
/// and dropping a value drops everything it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Number(i64),
    Symbol(String),
    /// A terminal value carrying a message. Never evaluated further.
    Error(String),
    Expression(SExpr),
}

impl Value {
    pub fn number(n: i64) -> Self {
        Value::Number(n)
    }
    pub fn symbol(text: impl Into<String>) -> Self {
        Value::Symbol(text.into())
    }
    pub fn error(message: impl Into<String>) -> Self {
        Value::Error(message.into())
    }
    /// An empty S-expression
    pub fn sexpr() -> Self {
        Value::Expression(SExpr::new())
    }
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<SExpr> for Value {
    fn from(expr: SExpr) -> Self {
        Value::Expression(expr)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Symbol(sym) => write!(f, "{}", sym),
            Value::Error(message) => write!(f, "Error: {}", message),
            Value::Expression(expr) => write!(f, "{}", expr),
        }
    }
}

/// The children of an S-expression, in insertion order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SExpr {
    cells: Vec<Value>,
}

impl SExpr {
    pub fn new() -> Self {
        SExpr::default()
    }
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.cells.iter()
    }
    /// Append a child, returning the grown expression
    pub fn append(mut self, child: Value) -> Self {
        self.push(child);
        self
    }
    pub fn push(&mut self, child: Value) {
        self.cells.push(child);
    }
    /// Remove the child at `index`, shifting later children left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn pop(&mut self, index: usize) -> Value {
        assert!(
            index < self.cells.len(),
            "pop index {} out of range for s-expression of length {}",
            index,
            self.cells.len()
        );
        self.cells.remove(index)
    }
    /// Remove the child at `index` and discard the rest of the expression.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn take(mut self, index: usize) -> Value {
        self.pop(index)
    }
}

impl FromIterator<Value> for SExpr {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        SExpr {
            cells: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for SExpr {
    type Item = Value;
    type IntoIter = vec::IntoIter<Value>;
    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a SExpr {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;
    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl fmt::Display for SExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({})", self.cells.iter().join(" "))
    }
}
