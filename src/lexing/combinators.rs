//! Character-level parser combinators shared by the pose parser.

use chumsky::prelude::*;
use chumsky::Stream;

/// Type alias for parser error
pub type CharError = Simple<char>;

/// Run `parser` over `source` with byte-offset spans.
///
/// Parsing a `&str` directly gives char-index spans; this feeds `char_indices` instead so error
/// spans line up with [`SourceLocation`](crate::ast::SourceLocation). Input after whatever
/// `parser` consumes is left unchecked.
pub fn parse_chars<T, P>(parser: P, source: &str) -> Result<T, Vec<CharError>>
where
    P: Parser<char, T, Error = CharError>,
{
    let end = source.len();
    let chars = source
        .char_indices()
        .map(|(offset, c)| (c, offset..offset + c.len_utf8()));
    parser.parse(Stream::from_iter(end..end, chars))
}

/// `//` followed by everything up to, not including, the next line break.
pub fn line_comment() -> impl Parser<char, (), Error = CharError> + Clone {
    just("//")
        .ignore_then(filter(|c: &char| *c != '\r' && *c != '\n').repeated())
        .ignored()
        .labelled("line comment")
}

/// Zero or more line comments or single whitespace characters.
pub fn skip_trivia() -> impl Parser<char, (), Error = CharError> + Clone {
    line_comment()
        .or(filter(|c: &char| c.is_whitespace()).ignored())
        .repeated()
        .ignored()
}

/// Wrap `parser` so trivia before and after it is consumed. The result is the inner
/// parser's result.
pub fn padded_with_comments<T, P>(parser: P) -> impl Parser<char, T, Error = CharError> + Clone
where
    P: Parser<char, T, Error = CharError> + Clone,
{
    skip_trivia().ignore_then(parser).then_ignore(skip_trivia())
}

/// Optional `-` then `digits`, `digits.digits` or `.digits`, read as `f32`.
pub fn signed_decimal() -> impl Parser<char, f32, Error = CharError> + Clone {
    let with_integer_part = text::digits(10)
        .then(just('.').ignore_then(text::digits(10)).or_not())
        .map(|(integer, fraction): (String, Option<String>)| match fraction {
            Some(fraction) => format!("{}.{}", integer, fraction),
            None => integer,
        });
    let fraction_only = just('.')
        .ignore_then(text::digits(10))
        .map(|fraction: String| format!("0.{}", fraction));

    just('-')
        .or_not()
        .then(with_integer_part.or(fraction_only))
        .try_map(|(sign, digits), span| {
            let literal = match sign {
                Some(_) => format!("-{}", digits),
                None => digits,
            };
            match literal.parse::<f32>() {
                Ok(value) if value.is_finite() => Ok(value),
                Ok(_) => Err(Simple::custom(
                    span,
                    format!("number '{}' is out of range", literal),
                )),
                Err(e) => Err(Simple::custom(
                    span,
                    format!("invalid number '{}': {}", literal, e),
                )),
            }
        })
        .labelled("signed decimal")
}

/// One or more ASCII digits read as `usize`.
pub fn unsigned_integer() -> impl Parser<char, usize, Error = CharError> + Clone {
    text::digits(10)
        .try_map(|digits: String, span| {
            digits
                .parse::<usize>()
                .map_err(|e| Simple::custom(span, format!("invalid count '{}': {}", digits, e)))
        })
        .labelled("unsigned integer")
}

/// One or more consecutive non-whitespace characters.
pub fn non_whitespace_token() -> impl Parser<char, String, Error = CharError> + Clone {
    filter(|c: &char| !c.is_whitespace())
        .repeated()
        .at_least(1)
        .collect::<String>()
        .labelled("name")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0.071834", 0.071834)]
    #[case("-0.5", -0.5)]
    #[case("12", 12.0)]
    #[case("-7", -7.0)]
    #[case(".25", 0.25)]
    #[case("-.25", -0.25)]
    #[case("0.795784", 0.795784)]
    fn test_signed_decimal_values(#[case] input: &str, #[case] expected: f32) {
        let value = parse_chars(signed_decimal().then_ignore(end()), input).unwrap();
        assert_eq!(value, expected);
    }

    #[test]
    fn test_signed_decimal_negative_zero_keeps_sign() {
        let value = parse_chars(signed_decimal(), "-0.000000").unwrap();
        assert_eq!(value, 0.0);
        assert!(value.is_sign_negative());
    }

    #[rstest]
    #[case("-")]
    #[case("")]
    #[case("abc")]
    #[case("+1.0")]
    #[case("-.")]
    #[case("111111111111111111111111111111111111111111111111111111111111")]
    #[case("-1000000000000000000000000000000000000000.0")]
    fn test_signed_decimal_rejects(#[case] input: &str) {
        assert!(parse_chars(signed_decimal(), input).is_err());
    }

    #[test]
    fn test_signed_decimal_stops_before_separator() {
        let (value, rest) = parse_chars(
            signed_decimal().then(filter(|_: &char| true).repeated().collect::<String>()),
            "1.5,2",
        )
        .unwrap();
        assert_eq!(value, 1.5);
        assert_eq!(rest, ",2");
    }

    #[test]
    fn test_bare_minus_error_points_after_sign() {
        let errors = parse_chars(signed_decimal(), "-;").unwrap_err();
        assert_eq!(errors[0].span().start, 1);
        assert_eq!(errors[0].found(), Some(&';'));
    }

    #[test]
    fn test_line_comment_stops_at_line_break() {
        let rest = parse_chars(
            line_comment().ignore_then(filter(|_: &char| true).repeated().collect::<String>()),
            "// trans x,y,z\nnext",
        )
        .unwrap();
        assert_eq!(rest, "\nnext");

        let rest = parse_chars(
            line_comment().ignore_then(filter(|_: &char| true).repeated().collect::<String>()),
            "// comment\r\nnext",
        )
        .unwrap();
        assert_eq!(rest, "\r\nnext");
    }

    #[test]
    fn test_line_comment_requires_marker() {
        assert!(parse_chars(line_comment(), "/ not a comment").is_err());
        assert!(parse_chars(line_comment(), "x").is_err());
    }

    #[test]
    fn test_padded_with_comments_skips_both_sides() {
        let input = "  // leading\n\t 42 // trailing\r\n\n";
        let value = parse_chars(padded_with_comments(unsigned_integer()).then_ignore(end()), input)
            .unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_padded_with_comments_without_trivia() {
        let value = parse_chars(padded_with_comments(unsigned_integer()), "7").unwrap();
        assert_eq!(value, 7);
    }

    #[test]
    fn test_unsigned_integer_overflow_is_error() {
        let errors = parse_chars(unsigned_integer(), "99999999999999999999999999").unwrap_err();
        assert!(!errors.is_empty());
        assert_eq!(parse_chars(unsigned_integer(), "14").unwrap(), 14);
    }

    #[test]
    fn test_non_whitespace_token() {
        let name = parse_chars(non_whitespace_token(), "右親指１\n0.0").unwrap();
        assert_eq!(name, "右親指１");
        assert!(parse_chars(non_whitespace_token(), " leading").is_err());
    }

    #[test]
    fn test_spans_are_byte_offsets() {
        let errors = parse_chars(
            non_whitespace_token().ignore_then(just(';')),
            "右 x",
        )
        .unwrap_err();
        // "右" is three bytes long
        assert_eq!(errors[0].span(), 3..4);
    }
}
