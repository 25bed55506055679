//! VPD pose data parser
//!
//! Grammar:
//!
//! ```text
//! file   := header record{count}
//! header := "Vocaloid Pose Data file" ownerfile ";" count ";"
//! record := "Bone" digits "{" name vec3 ";" quat ";" "}"
//! vec3   := decimal "," decimal "," decimal
//! quat   := decimal "," decimal "," decimal "," decimal
//! ```
//!
//! Line comments (`// ...`) and whitespace may surround the header fields, each numeric group
//! and each record. Input after the last declared record is not inspected.

use chumsky::prelude::*;
use tracing::debug;

use super::options::{OwnerFileRule, ParseOptions};
use crate::ast::{PoseNode, Quaternion, SourceLocation, Vector3};
use crate::error::ParseError;
use crate::lexing::combinators::{
    non_whitespace_token, padded_with_comments, parse_chars, signed_decimal, unsigned_integer,
    CharError,
};

pub const SIGNATURE: &str = "Vocaloid Pose Data file";

fn vector3() -> impl Parser<char, Vector3, Error = CharError> + Clone {
    signed_decimal()
        .then_ignore(just(','))
        .then(signed_decimal())
        .then_ignore(just(','))
        .then(signed_decimal())
        .map(|((x, y), z)| Vector3::new(x, y, z))
}

fn quaternion() -> impl Parser<char, Quaternion, Error = CharError> + Clone {
    signed_decimal()
        .then_ignore(just(','))
        .then(signed_decimal())
        .then_ignore(just(','))
        .then(signed_decimal())
        .then_ignore(just(','))
        .then(signed_decimal())
        .map(|(((x, y), z), w)| Quaternion::new(x, y, z, w))
}

/// `name;` where the name has to satisfy `rule`.
fn owner_file(rule: OwnerFileRule) -> impl Parser<char, String, Error = CharError> + Clone {
    filter(|c: &char| !c.is_whitespace() && *c != ';')
        .repeated()
        .at_least(1)
        .collect::<String>()
        .labelled("owner file name")
        .try_map(move |name, span| {
            if rule.accepts(&name) {
                Ok(name)
            } else {
                Err(Simple::custom(
                    span,
                    format!("owner file '{}' does not match {}", name, rule.describe()),
                ))
            }
        })
        .then_ignore(just(';'))
}

/// One `Bone<N>{...}` block. The index is consumed but not kept.
pub fn pose_record() -> impl Parser<char, PoseNode, Error = CharError> + Clone {
    just("Bone")
        .ignore_then(text::digits(10))
        .ignore_then(just('{'))
        .ignore_then(non_whitespace_token())
        .then(padded_with_comments(vector3().then_ignore(just(';'))))
        .then(padded_with_comments(quaternion().then_ignore(just(';'))))
        .then_ignore(just('}'))
        .map(|((name, translation), rotation)| PoseNode::new(name, translation, rotation))
}

/// The file signature, owner file and declared record count. Yields the count.
pub fn pose_header(options: &ParseOptions) -> impl Parser<char, usize, Error = CharError> + Clone {
    just(SIGNATURE)
        .ignore_then(padded_with_comments(owner_file(options.owner_file.clone())))
        .ignore_then(padded_with_comments(
            unsigned_integer().then_ignore(just(';')),
        ))
}

/// Header followed by exactly as many records as it declares.
pub fn pose_file(options: &ParseOptions) -> impl Parser<char, Vec<PoseNode>, Error = CharError> {
    pose_header(options).then_with(|count| {
        padded_with_comments(pose_record())
            .repeated()
            .exactly(count)
    })
}

/// Parse a complete pose file with default options.
pub fn parse_pose_data(source: &str) -> Result<Vec<PoseNode>, ParseError> {
    parse_pose_data_with(source, &ParseOptions::default())
}

pub fn parse_pose_data_with(
    source: &str,
    options: &ParseOptions,
) -> Result<Vec<PoseNode>, ParseError> {
    let poses = parse_chars(pose_file(options), source)
        .map_err(|errors| ParseError::from_simple_errors(errors, &SourceLocation::new(source)))?;
    debug!(records = poses.len(), "parsed pose data");
    Ok(poses)
}
