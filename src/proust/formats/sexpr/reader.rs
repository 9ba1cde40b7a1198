//! S-expression reader
//!
//! Parses exported blocks back into a plain node structure. Used to check that
//! an export describes the tree it came from; it does not rebuild a [`UnitTree`].
//!
//! [`UnitTree`]: crate::proust::ast::UnitTree

use crate::proust::ast::{MetaValue, Metadata, Unit, UnitKind};
use chumsky::prelude::*;
use std::ops::Range;
use thiserror::Error;

type ParserError = Simple<char>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed S-expression at {span:?}: {message}")]
pub struct SExprError {
    pub span: Range<usize>,
    pub message: String,
}

impl From<ParserError> for SExprError {
    fn from(error: ParserError) -> Self {
        SExprError {
            span: error.span(),
            message: error.to_string(),
        }
    }
}

/// One parsed unit: the kind, id and text the block spells out.
///
/// Terminals carry `text` and no `id`; non-terminals the opposite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SExprNode {
    pub kind: UnitKind,
    pub id: Option<String>,
    pub text: Option<String>,
    pub metadata: Metadata,
    pub children: Vec<SExprNode>,
}

impl SExprNode {
    /// The node an export of `unit` is expected to parse into.
    pub fn from_unit(unit: Unit<'_>) -> Self {
        if unit.is_terminal() {
            SExprNode {
                kind: unit.kind(),
                id: None,
                text: Some(unit.text().to_string()),
                metadata: unit.metadata().clone(),
                children: Vec::new(),
            }
        } else {
            SExprNode {
                kind: unit.kind(),
                id: Some(unit.id()),
                text: None,
                metadata: unit.metadata().clone(),
                children: unit.children().map(SExprNode::from_unit).collect(),
            }
        }
    }

    /// Number of nodes in this subtree, itself included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(SExprNode::node_count).sum::<usize>()
    }
}

/// Parse exactly one block.
pub fn parse_sexpr(source: &str) -> Result<SExprNode, SExprError> {
    node()
        .padded()
        .then_ignore(end())
        .parse(source)
        .map_err(first_error)
}

/// Parse a sequence of blocks, as written by a multi-paragraph export.
pub fn parse_sexpr_all(source: &str) -> Result<Vec<SExprNode>, SExprError> {
    node()
        .padded()
        .repeated()
        .then_ignore(end())
        .parse(source)
        .map_err(first_error)
}

fn first_error(errors: Vec<ParserError>) -> SExprError {
    errors
        .into_iter()
        .next()
        .map(SExprError::from)
        .unwrap_or_else(|| SExprError {
            span: 0..0,
            message: "no parse".to_string(),
        })
}

fn node() -> impl Parser<char, SExprNode, Error = ParserError> {
    recursive(|node| {
        let kind = filter(|c: &char| c.is_ascii_uppercase())
            .repeated()
            .at_least(1)
            .collect::<String>()
            .try_map(|name, span| {
                UnitKind::from_name(&name)
                    .ok_or_else(|| Simple::custom(span, format!("unknown unit kind '{name}'")))
            });

        let id = just(":id").padded().ignore_then(string_literal());
        let metadata = just(":metadata").padded().ignore_then(metadata());

        kind.then(id.or_not())
            .then(string_literal().padded().or_not())
            .then(metadata.or_not())
            .then(node.padded().repeated())
            .delimited_by(just('(').padded(), just(')').padded())
            .map(|((((kind, id), text), metadata), children)| SExprNode {
                kind,
                id,
                text,
                metadata: metadata.unwrap_or_default(),
                children,
            })
    })
}

fn string_literal() -> impl Parser<char, String, Error = ParserError> + Clone {
    let escape = just('\\').ignore_then(one_of("\\\""));

    filter(|c: &char| *c != '\\' && *c != '"')
        .or(escape)
        .repeated()
        .delimited_by(just('"'), just('"'))
        .collect::<String>()
}

fn metadata() -> impl Parser<char, Metadata, Error = ParserError> + Clone {
    let key = just(':').ignore_then(
        filter(|c: &char| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
            .repeated()
            .at_least(1)
            .collect::<String>(),
    );

    let int = just('-')
        .or_not()
        .then(text::int(10))
        .try_map(|(sign, digits): (Option<char>, String), span| {
            let literal = match sign {
                Some(_) => format!("-{digits}"),
                None => digits,
            };
            literal
                .parse::<i64>()
                .map(MetaValue::Int)
                .map_err(|e| Simple::custom(span, e.to_string()))
        });

    let value = choice((
        string_literal().map(MetaValue::Text),
        just("true").to(MetaValue::Bool(true)),
        just("false").to(MetaValue::Bool(false)),
        int,
    ));

    key.then_ignore(text::whitespace())
        .then(value)
        .padded()
        .separated_by(just(','))
        .delimited_by(just('{'), just('}'))
        .map(|entries| {
            entries
                .into_iter()
                .fold(Metadata::new(), |mut metadata, (key, value)| {
                    metadata.insert(&key, value);
                    metadata
                })
        })
}
