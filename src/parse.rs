#![allow(clippy::upper_case_acronyms)]

use pest::{
    error::Error as PestError,
    iterators::{Pair, Pairs},
    Parser,
};

use crate::syntax::{NodeKind, SyntaxNode};

pub type ParseResult<T> = Result<T, PestError<Rule>>;

#[derive(pest_derive::Parser)]
#[grammar = "grammar.pest"]
struct LispyParser;

/// Parse a line of input, returning the root `lispy` pair
pub fn parse(input: &str) -> ParseResult<Pair<Rule>> {
    let mut pairs = LispyParser::parse(Rule::lispy, input)?;
    // `lispy` is anchored by SOI and EOI, so a successful parse yields exactly one root
    Ok(pairs.next().expect("lispy rule produced no pair"))
}

impl<'i> SyntaxNode for Pair<'i, Rule> {
    type Children = Pairs<'i, Rule>;
    fn kind(&self) -> NodeKind {
        match self.as_rule() {
            Rule::number => NodeKind::Number,
            Rule::symbol => NodeKind::Symbol,
            Rule::sexpr | Rule::lispy => NodeKind::Group,
            Rule::lparen | Rule::rparen => NodeKind::Punct,
            _ => NodeKind::Raw,
        }
    }
    fn tag(&self) -> String {
        format!("{:?}", self.as_rule())
    }
    fn text(&self) -> &str {
        self.as_str()
    }
    fn children(&self) -> Self::Children {
        self.clone().into_inner()
    }
}
