//! A small S-expression calculator
//!
//! Input is parsed with a pest grammar, read into [`Value`]s, and reduced by
//! the [`Evaluator`] using the built-in arithmetic operators `+ - * / %`.
//! Every failure the evaluator detects is itself a [`Value::Error`].

pub mod error;
pub mod eval;
pub mod parse;
pub mod read;
pub mod syntax;
pub mod value;

pub use crate::{
    error::EvalError,
    eval::{eval, Evaluator},
    parse::{parse, ParseResult},
    read::read,
    value::{SExpr, Value},
};

/// Parse, read and evaluate one line of input
pub fn read_eval(input: &str, evaluator: &Evaluator) -> ParseResult<Value> {
    let root = parse(input)?;
    Ok(evaluator.eval(read(&root)))
}
