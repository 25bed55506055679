//! Token definitions for the BVH hierarchy format
//!
//! The hierarchy section is a stream of whitespace separated keywords, braces, numbers and
//! names, which maps directly onto a logos lexer. Channel names are not keywords: they lex as
//! [`Token::Word`] and are checked against the channel table by the parser, so an unknown
//! channel is reported as such instead of as a lexing failure.
use logos::Logos;
use std::fmt;
use std::ops::Range;

#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    #[token("HIERARCHY")]
    Hierarchy,
    #[token("ROOT")]
    Root,
    #[token("JOINT")]
    Joint,
    #[token("End")]
    End,
    #[token("Site")]
    Site,
    #[token("OFFSET")]
    Offset,
    #[token("CHANNELS")]
    Channels,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,

    // Exporters write plain decimals, but exponents (1.5e-05) show up too
    #[regex(r"-?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?", |lex| lex.slice().to_owned(), priority = 3)]
    Number(String),

    // Names, channel literals, and anything past the hierarchy such as MOTION data
    #[regex(r"[^ \t\r\n\f{}]+", |lex| lex.slice().to_owned(), priority = 1)]
    Word(String),
}

impl Token {
    pub fn is_keyword(&self) -> bool {
        !matches!(self, Token::Number(_) | Token::Word(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Hierarchy => f.write_str("HIERARCHY"),
            Token::Root => f.write_str("ROOT"),
            Token::Joint => f.write_str("JOINT"),
            Token::End => f.write_str("End"),
            Token::Site => f.write_str("Site"),
            Token::Offset => f.write_str("OFFSET"),
            Token::Channels => f.write_str("CHANNELS"),
            Token::OpenBrace => f.write_str("{"),
            Token::CloseBrace => f.write_str("}"),
            Token::Number(text) | Token::Word(text) => f.write_str(text),
        }
    }
}

/// Tokenize `source`, pairing each token with its byte range.
///
/// Returns the byte offset of the first input logos could not match as the error.
pub fn tokenize_with_spans(source: &str) -> Result<Vec<(Token, Range<usize>)>, usize> {
    let mut tokens = Vec::new();
    for (token, span) in Token::lexer(source).spanned() {
        match token {
            Ok(token) => tokens.push((token, span)),
            Err(()) => return Err(span.start),
        }
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize_with_spans(source)
            .unwrap()
            .into_iter()
            .map(|(token, _)| token)
            .collect()
    }

    #[test]
    fn test_keywords_and_braces() {
        assert_eq!(
            kinds("HIERARCHY\nROOT Hips\n{\n}"),
            vec![
                Token::Hierarchy,
                Token::Root,
                Token::Word("Hips".to_string()),
                Token::OpenBrace,
                Token::CloseBrace,
            ]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            kinds("OFFSET -0.000000 12 1.5e-05"),
            vec![
                Token::Offset,
                Token::Number("-0.000000".to_string()),
                Token::Number("12".to_string()),
                Token::Number("1.5e-05".to_string()),
            ]
        );
    }

    #[test]
    fn test_channels_are_words() {
        assert_eq!(
            kinds("CHANNELS 2 Xposition Zrotation"),
            vec![
                Token::Channels,
                Token::Number("2".to_string()),
                Token::Word("Xposition".to_string()),
                Token::Word("Zrotation".to_string()),
            ]
        );
    }

    #[test]
    fn test_keyword_prefix_names_are_words() {
        assert_eq!(
            kinds("JOINT EndEffector ROOTS"),
            vec![
                Token::Joint,
                Token::Word("EndEffector".to_string()),
                Token::Word("ROOTS".to_string()),
            ]
        );
    }

    #[test]
    fn test_end_site_is_two_tokens() {
        assert_eq!(kinds("End Site"), vec![Token::End, Token::Site]);
    }

    #[test]
    fn test_braces_split_words() {
        assert_eq!(
            kinds("Hips{"),
            vec![Token::Word("Hips".to_string()), Token::OpenBrace]
        );
    }

    #[test]
    fn test_spans_are_byte_ranges() {
        let tokens = tokenize_with_spans("ROOT  Hips").unwrap();
        assert_eq!(tokens[0].1, 0..4);
        assert_eq!(tokens[1].1, 6..10);
    }

    #[test]
    fn test_motion_section_tokenizes() {
        let tokens = tokenize_with_spans("MOTION\nFrames: 1\nFrame Time: 0.033333\n0 0 0\n");
        assert!(tokens.is_ok());
    }

    #[test]
    fn test_display_round_trips_text() {
        assert_eq!(Token::Number("-1.5".to_string()).to_string(), "-1.5");
        assert_eq!(Token::Hierarchy.to_string(), "HIERARCHY");
        assert!(Token::Site.is_keyword());
        assert!(!Token::Word("Hips".to_string()).is_keyword());
    }
}
