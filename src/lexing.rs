//! Lexical layer
//!
//! The two formats are lexed differently:
//!
//!     VPD pose files are character oriented ("Bone0{Name" has no separator between the index,
//!     the brace and the name), so they are parsed directly over characters with the small
//!     combinators in [combinators].
//!
//!     BVH hierarchy files are whitespace separated keywords and numbers, so they go through a
//!     logos tokenizer ([tokens]) first and the parser works on the resulting token stream.
//!
//! Both paths carry byte ranges into the original text, so errors from either parser point at
//! the same kind of offset.

pub mod combinators;
pub mod tokens;

pub use combinators::{
    line_comment, non_whitespace_token, padded_with_comments, parse_chars, signed_decimal,
    skip_trivia, unsigned_integer,
};
pub use tokens::{tokenize_with_spans, Token};
