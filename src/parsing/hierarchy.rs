//! BVH hierarchy parser
//!
//! Grammar (over the tokens from [`crate::lexing::tokens`]):
//!
//! ```text
//! file     := "HIERARCHY" node
//! node     := ("ROOT" | "JOINT") name "{" "OFFSET" vec3 channels? child* "}"
//! channels := "CHANNELS" count chtype{count}
//! child    := node | endsite
//! endsite  := "End" "Site" "{" "OFFSET" vec3 "}"
//! ```
//!
//! Parsing happens in two steps. The chumsky grammar builds an intermediate tree that still
//! carries the byte ranges of channel declarations, taking every word after `CHANNELS <n>` as a
//! channel name. The conversion step then checks each declared count against the names that
//! followed it and looks every name up in the channel table, so count mismatches and unknown
//! channels get their own errors pointing at the offending token.
//!
//! Only the hierarchy is read: tokens after the root joint's closing brace (the MOTION section in
//! complete files) are never looked at.

use chumsky::prelude::*;
use chumsky::Stream;
use std::ops::Range;
use tracing::{debug, trace};

use crate::ast::{ChannelType, HierarchyNode, SourceLocation, Vector3};
use crate::error::ParseError;
use crate::lexing::tokens::{tokenize_with_spans, Token};

/// Type alias for parser error
pub type TokenError = Simple<Token>;

/// A `CHANNELS` declaration before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelsWithSpans {
    pub declared: usize,
    pub declared_span: Range<usize>,
    pub names: Vec<(String, Range<usize>)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JointWithSpans {
    pub name: String,
    pub offset: Vector3,
    pub channels: Option<ChannelsWithSpans>,
    pub children: Vec<ChildWithSpans>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChildWithSpans {
    Joint(JointWithSpans),
    EndSite(Vector3),
}

fn unexpected(span: Range<usize>, token: Token) -> TokenError {
    Simple::expected_input_found(span, Vec::new(), Some(token))
}

fn number() -> impl Parser<Token, f32, Error = TokenError> + Clone {
    filter_map(|span, token| match token {
        Token::Number(text) => match text.parse::<f32>() {
            Ok(value) if value.is_finite() => Ok(value),
            Ok(_) => Err(Simple::custom(
                span,
                format!("number '{}' is out of range", text),
            )),
            Err(e) => Err(Simple::custom(
                span,
                format!("invalid number '{}': {}", text, e),
            )),
        },
        other => Err(unexpected(span, other)),
    })
    .labelled("number")
}

fn count() -> impl Parser<Token, usize, Error = TokenError> + Clone {
    filter_map(|span, token| match token {
        Token::Number(text) => text
            .parse::<usize>()
            .map_err(|e| Simple::custom(span, format!("invalid count '{}': {}", text, e))),
        other => Err(unexpected(span, other)),
    })
    .labelled("channel count")
}

/// Any single token other than a brace. Numbers and keywords (`JOINT Site`) are names here too.
fn joint_name() -> impl Parser<Token, String, Error = TokenError> + Clone {
    filter_map(|span, token| match token {
        Token::Word(name) | Token::Number(name) => Ok(name),
        Token::OpenBrace | Token::CloseBrace => Err(unexpected(span, token)),
        keyword if keyword.is_keyword() => Ok(keyword.to_string()),
        other => Err(unexpected(span, other)),
    })
    .labelled("joint name")
}

fn word() -> impl Parser<Token, String, Error = TokenError> + Clone {
    filter_map(|span, token| match token {
        Token::Word(word) => Ok(word),
        other => Err(unexpected(span, other)),
    })
}

fn vector3() -> impl Parser<Token, Vector3, Error = TokenError> + Clone {
    number()
        .then(number())
        .then(number())
        .map(|((x, y), z)| Vector3::new(x, y, z))
}

fn offset() -> impl Parser<Token, Vector3, Error = TokenError> + Clone {
    just(Token::Offset).ignore_then(vector3())
}

fn channels() -> impl Parser<Token, ChannelsWithSpans, Error = TokenError> + Clone {
    just(Token::Channels)
        .ignore_then(count().map_with_span(|declared, span| (declared, span)))
        .then(word().map_with_span(|name, span| (name, span)).repeated())
        .map(|((declared, declared_span), names)| ChannelsWithSpans {
            declared,
            declared_span,
            names,
        })
}

fn end_site() -> impl Parser<Token, Vector3, Error = TokenError> + Clone {
    just(Token::End)
        .ignore_then(just(Token::Site))
        .ignore_then(just(Token::OpenBrace))
        .ignore_then(offset())
        .then_ignore(just(Token::CloseBrace))
}

/// A `ROOT` or `JOINT` block with everything nested inside it.
pub fn joint() -> impl Parser<Token, JointWithSpans, Error = TokenError> + Clone {
    recursive(|joint| {
        let child = joint
            .map(ChildWithSpans::Joint)
            .or(end_site().map(ChildWithSpans::EndSite));

        just(Token::Root)
            .or(just(Token::Joint))
            .ignore_then(joint_name())
            .then_ignore(just(Token::OpenBrace))
            .then(offset())
            .then(channels().or_not())
            .then(child.repeated())
            .then_ignore(just(Token::CloseBrace))
            .map(|(((name, offset), channels), children)| JointWithSpans {
                name,
                offset,
                channels,
                children,
            })
    })
}

pub fn hierarchy_file() -> impl Parser<Token, JointWithSpans, Error = TokenError> + Clone {
    just(Token::Hierarchy).ignore_then(joint())
}

fn convert_channels(
    channels: ChannelsWithSpans,
    source: &SourceLocation,
) -> Result<Vec<ChannelType>, ParseError> {
    if channels.names.len() != channels.declared {
        return Err(ParseError::ArityMismatch {
            position: source.byte_to_position(channels.declared_span.start),
            what: "channels",
            declared: channels.declared,
            found: channels.names.len(),
        });
    }

    channels
        .names
        .into_iter()
        .map(|(name, span)| {
            ChannelType::from_literal(&name).ok_or_else(|| ParseError::UnknownChannel {
                position: source.byte_to_position(span.start),
                name,
            })
        })
        .collect()
}

/// Validate channel declarations and build the final tree.
pub fn convert_joint(
    joint: JointWithSpans,
    source: &SourceLocation,
) -> Result<HierarchyNode, ParseError> {
    let channels = match joint.channels {
        Some(channels) => convert_channels(channels, source)?,
        None => Vec::new(),
    };

    let children = joint
        .children
        .into_iter()
        .map(|child| match child {
            ChildWithSpans::Joint(joint) => convert_joint(joint, source),
            ChildWithSpans::EndSite(offset) => Ok(HierarchyNode::end_site(offset)),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(HierarchyNode::new(joint.name, joint.offset, channels, children))
}

/// Parse the `HIERARCHY` section of a BVH file into its root joint.
pub fn parse_hierarchy(source: &str) -> Result<HierarchyNode, ParseError> {
    let location = SourceLocation::new(source);

    let tokens = tokenize_with_spans(source).map_err(|offset| ParseError::Lex {
        position: location.byte_to_position(offset),
    })?;
    trace!(tokens = tokens.len(), "tokenized hierarchy");

    let end = source.len();
    let root = hierarchy_file()
        .parse(Stream::from_iter(end..end, tokens.into_iter()))
        .map_err(|errors| ParseError::from_simple_errors(errors, &location))?;

    let root = convert_joint(root, &location)?;
    debug!(
        joints = root.node_count(),
        channels = root.channel_count(),
        "parsed hierarchy"
    );
    Ok(root)
}
