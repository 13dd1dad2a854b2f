use std::{fmt, str::FromStr};

use crate::{
    error::EvalError,
    value::{SExpr, Value},
};

/// The arithmetic operators an S-expression can start with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl FromStr for Builtin {
    type Err = EvalError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "+" => Builtin::Add,
            "-" => Builtin::Sub,
            "*" => Builtin::Mul,
            "/" => Builtin::Div,
            "%" => Builtin::Rem,
            op => return Err(EvalError::UnknownOperator(op.into())),
        })
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let op = match self {
            Builtin::Add => "+",
            Builtin::Sub => "-",
            Builtin::Mul => "*",
            Builtin::Div => "/",
            Builtin::Rem => "%",
        };
        write!(f, "{}", op)
    }
}

impl Builtin {
    /// Fold one more operand into the accumulator
    pub fn apply(self, x: i64, y: i64) -> Result<i64, EvalError> {
        match self {
            Builtin::Add => x.checked_add(y).ok_or(EvalError::Overflow),
            Builtin::Sub => x.checked_sub(y).ok_or(EvalError::Overflow),
            Builtin::Mul => x.checked_mul(y).ok_or(EvalError::Overflow),
            Builtin::Div | Builtin::Rem if y == 0 => Err(EvalError::DivisionByZero),
            // i64::MIN / -1 is the only remaining failure
            Builtin::Div => x.checked_div(y).ok_or(EvalError::Overflow),
            Builtin::Rem => x.checked_rem(y).ok_or(EvalError::Overflow),
        }
    }
}

pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Reduces values to their simplest form
///
/// An `Evaluator` only carries configuration. Each call to [`Evaluator::eval`]
/// is independent of every other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluator {
    /// The deepest S-expression nesting that will be evaluated. The input
    /// itself is at depth 0.
    pub max_depth: usize,
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Evaluator {
    pub fn with_max_depth(max_depth: usize) -> Self {
        Evaluator { max_depth }
    }
    pub fn eval(&self, value: Value) -> Value {
        self.eval_at(value, 0)
    }
    fn eval_at(&self, value: Value, depth: usize) -> Value {
        match value {
            Value::Expression(expr) => self.eval_sexpr(expr, depth),
            value => value,
        }
    }
    fn eval_sexpr(&self, expr: SExpr, depth: usize) -> Value {
        if depth > self.max_depth {
            return EvalError::TooDeep(self.max_depth).into();
        }
        tracing::trace!(%expr, depth, "reducing s-expression");
        let expr: SExpr = expr
            .into_iter()
            .map(|cell| self.eval_at(cell, depth + 1))
            .collect();
        if let Some(i) = expr.iter().position(Value::is_error) {
            return expr.take(i);
        }
        match expr.len() {
            0 => return expr.into(),
            1 => return expr.take(0),
            _ => {}
        }
        let mut operands = expr;
        match operands.pop(0) {
            Value::Symbol(op) => builtin_op(operands, &op),
            _ => EvalError::MissingLeadingSymbol.into(),
        }
    }
}

/// Evaluate with the default configuration
pub fn eval(value: Value) -> Value {
    Evaluator::default().eval(value)
}

/// Apply the operator named `op` to a list of operands
///
/// Every operand must be a number; this is checked before any arithmetic
/// happens. `-` with a single operand negates it. The fold stops at the first
/// division by zero or overflow. An empty operand list is returned unchanged.
pub fn builtin_op(operands: SExpr, op: &str) -> Value {
    let numbers = match operands
        .iter()
        .map(Value::as_number)
        .collect::<Option<Vec<i64>>>()
    {
        Some(numbers) => numbers,
        None => return EvalError::NonNumericOperand.into(),
    };
    let builtin = match op.parse::<Builtin>() {
        Ok(builtin) => builtin,
        Err(e) => return e.into(),
    };
    let mut numbers = numbers.into_iter();
    let first = match numbers.next() {
        Some(first) => first,
        None => return operands.into(),
    };
    let result = if builtin == Builtin::Sub && numbers.len() == 0 {
        first.checked_neg().ok_or(EvalError::Overflow)
    } else {
        numbers.try_fold(first, |x, y| builtin.apply(x, y))
    };
    tracing::trace!(%builtin, ?result, "applied builtin");
    match result {
        Ok(n) => Value::Number(n),
        Err(e) => e.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sexpr(cells: Vec<Value>) -> Value {
        Value::Expression(cells.into_iter().collect())
    }

    fn call(op: &str, args: &[i64]) -> Value {
        sexpr(
            std::iter::once(Value::symbol(op))
                .chain(args.iter().copied().map(Value::number))
                .collect(),
        )
    }

    fn err(e: EvalError) -> Value {
        Value::error(e.to_string())
    }

    #[test]
    fn atoms_evaluate_to_themselves() {
        assert_eq!(eval(Value::number(3)), Value::number(3));
        assert_eq!(eval(Value::symbol("+")), Value::symbol("+"));
        assert_eq!(eval(Value::error("kept")), Value::error("kept"));
    }

    #[test]
    fn arithmetic() {
        assert_eq!(eval(call("+", &[1, 2, 3])), Value::number(6));
        assert_eq!(eval(call("-", &[10, 3, 2])), Value::number(5));
        assert_eq!(eval(call("*", &[2, 3, 4])), Value::number(24));
        assert_eq!(eval(call("/", &[-7, 2])), Value::number(-3));
        assert_eq!(eval(call("%", &[-7, 2])), Value::number(-1));
        assert_eq!(eval(call("-", &[5])), Value::number(-5));
        assert_eq!(eval(call("+", &[5])), Value::number(5));
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(eval(call("/", &[1, 0])), err(EvalError::DivisionByZero));
        assert_eq!(eval(call("/", &[8, 2, 0, 1])), err(EvalError::DivisionByZero));
        assert_eq!(eval(call("%", &[8, 0])), err(EvalError::DivisionByZero));
    }

    #[test]
    fn overflow_is_an_error() {
        assert_eq!(eval(call("+", &[i64::MAX, 1])), err(EvalError::Overflow));
        assert_eq!(eval(call("*", &[i64::MIN, 2])), err(EvalError::Overflow));
        assert_eq!(eval(call("-", &[i64::MIN])), err(EvalError::Overflow));
        assert_eq!(eval(call("/", &[i64::MIN, -1])), err(EvalError::Overflow));
    }

    #[test]
    fn non_numeric_operand() {
        let expr = sexpr(vec![Value::symbol("+"), Value::number(1), Value::symbol("foo")]);
        assert_eq!(eval(expr), err(EvalError::NonNumericOperand));
        let expr = sexpr(vec![Value::symbol("*"), Value::number(1), Value::sexpr()]);
        assert_eq!(eval(expr), err(EvalError::NonNumericOperand));
    }

    #[test]
    fn missing_leading_symbol() {
        assert_eq!(
            eval(sexpr(vec![Value::number(1), Value::number(2), Value::number(3)])),
            err(EvalError::MissingLeadingSymbol)
        );
    }

    #[test]
    fn unknown_operator() {
        assert_eq!(
            eval(call("foo", &[1, 2])),
            err(EvalError::UnknownOperator("foo".into()))
        );
        // operand types are checked first
        let expr = sexpr(vec![Value::symbol("foo"), Value::symbol("bar"), Value::number(1)]);
        assert_eq!(eval(expr), err(EvalError::NonNumericOperand));
    }

    #[test]
    fn empty_and_singleton() {
        assert_eq!(eval(Value::sexpr()), Value::sexpr());
        assert_eq!(eval(sexpr(vec![Value::number(7)])), Value::number(7));
        assert_eq!(
            eval(sexpr(vec![sexpr(vec![sexpr(vec![Value::symbol("%")])])])),
            Value::symbol("%")
        );
        assert_eq!(eval(sexpr(vec![Value::sexpr()])), Value::sexpr());
    }

    #[test]
    fn first_error_wins() {
        let expr = sexpr(vec![
            Value::symbol("+"),
            Value::number(1),
            call("/", &[2, 0]),
            sexpr(vec![Value::number(1), Value::number(2)]),
        ]);
        assert_eq!(eval(expr), err(EvalError::DivisionByZero));
    }

    #[test]
    fn depth_limit() {
        let nested = sexpr(vec![sexpr(vec![Value::number(1)])]);
        assert_eq!(Evaluator::with_max_depth(1).eval(nested.clone()), Value::number(1));
        assert_eq!(
            Evaluator::with_max_depth(0).eval(nested),
            err(EvalError::TooDeep(0))
        );
    }

    #[test]
    fn builtin_op_directly() {
        let operands: SExpr = vec![Value::number(9), Value::number(3)].into_iter().collect();
        assert_eq!(builtin_op(operands, "/"), Value::number(3));
        assert_eq!(builtin_op(SExpr::new(), "+"), Value::sexpr());
    }

    #[test]
    fn builtin_round_trips_through_text() {
        for op in &["+", "-", "*", "/", "%"] {
            assert_eq!(op.parse::<Builtin>().unwrap().to_string(), *op);
        }
    }
}
