use crate::value::Value;

/// Every condition the reader or evaluator can detect.
///
/// None of these abort evaluation. They are turned into [`Value::Error`]
/// carrying the `Display` text and propagate upward as ordinary values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("Invalid number: Over- or underflow!")]
    InvalidNumber,
    #[error("Division by zero!")]
    DivisionByZero,
    #[error("Cannot operate on non-number!")]
    NonNumericOperand,
    #[error("S-Expression does not start with symbol!")]
    MissingLeadingSymbol,
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),
    #[error("Integer overflow!")]
    Overflow,
    #[error("Expression nested deeper than {0}!")]
    TooDeep(usize),
}

impl From<EvalError> for Value {
    fn from(error: EvalError) -> Self {
        tracing::debug!(%error, "produced error value");
        Value::Error(error.to_string())
    }
}
