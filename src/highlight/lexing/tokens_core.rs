//! Raw token definitions for Python source
//!
//! The logos enum below only describes lexical shapes. Keywords are matched by the
//! identifier pattern and split off afterwards (see [crate::highlight::lexing::tokenize]),
//! so `define` and `def` never compete for priority.
use logos::{Lexer, Logos};

#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum RawToken {
    #[regex(r"[ \t\x0C]+")]
    Whitespace,

    #[token("\n")]
    #[token("\r\n")]
    Newline,

    // Lone carriage returns and backslash line continuations
    #[regex(r"\r|\\\r?\n")]
    LineJoin,

    #[regex(r"#[^\r\n]*")]
    Comment,

    #[regex(r"[\p{L}_][\p{L}\p{N}_]*")]
    Name,

    #[regex(r"0[xX][0-9a-fA-F_]+")]
    #[regex(r"0[bB][01_]+")]
    #[regex(r"0[oO][0-7_]+")]
    #[regex(r"[0-9][0-9_]*(\.[0-9_]*)?([eE][+-]?[0-9]+)?[jJ]?")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9]+)?[jJ]?")]
    Number,

    #[regex(r#""([^"\\\r\n]|\\(.|\r?\n))*""#)]
    #[regex(r#"'([^'\\\r\n]|\\(.|\r?\n))*'"#)]
    #[token(r#"""""#, |lex| close_triple(lex, r#"""""#))]
    #[token("'''", |lex| close_triple(lex, "'''"))]
    String,

    #[token("@")]
    Decorator,

    #[token("**=")]
    #[token("//=")]
    #[token(">>=")]
    #[token("<<=")]
    #[token("->")]
    #[token(":=")]
    #[token("==")]
    #[token("!=")]
    #[token("<=")]
    #[token(">=")]
    #[token("**")]
    #[token("//")]
    #[token("<<")]
    #[token(">>")]
    #[token("+=")]
    #[token("-=")]
    #[token("*=")]
    #[token("/=")]
    #[token("%=")]
    #[token("&=")]
    #[token("|=")]
    #[token("^=")]
    #[token("@=")]
    #[regex(r"[+\-*/%&|^~<>=]")]
    Operator,

    #[regex(r"[()\[\]{},:.;]")]
    Delimiter,
}

/// Consume up to and including the closing triple quote.
///
/// An unterminated string runs to the end of the input.
fn close_triple(lex: &mut Lexer<RawToken>, quote: &str) -> bool {
    let rest = lex.remainder();
    let mut offset = 0;
    loop {
        match rest[offset..].find(quote) {
            Some(found) => {
                let end = offset + found;
                let before = &rest[..end];
                let backslashes = before.chars().rev().take_while(|c| *c == '\\').count();
                if backslashes % 2 == 1 {
                    offset = end + 1;
                    continue;
                }
                lex.bump(end + quote.len());
                return true;
            }
            None => {
                lex.bump(rest.len());
                return true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Result<RawToken, ()>> {
        RawToken::lexer(source).collect()
    }

    #[test]
    fn test_names_and_whitespace() {
        assert_eq!(
            kinds("def  foo"),
            vec![
                Ok(RawToken::Name),
                Ok(RawToken::Whitespace),
                Ok(RawToken::Name),
            ]
        );
    }

    #[test]
    fn test_numbers() {
        for source in ["42", "3.14", "0xFF", "0b1010", "0o755", "1e-4", "2j", ".5"] {
            assert_eq!(kinds(source), vec![Ok(RawToken::Number)], "{source}");
        }
    }

    #[test]
    fn test_triple_quoted_string_spans_lines() {
        let mut lexer = RawToken::lexer("\"\"\"one\n\\\"\"\" two\"\"\"x");
        assert_eq!(lexer.next(), Some(Ok(RawToken::String)));
        assert_eq!(lexer.slice(), "\"\"\"one\n\\\"\"\" two\"\"\"");
        assert_eq!(lexer.next(), Some(Ok(RawToken::Name)));
    }

    #[test]
    fn test_single_quoted_string_with_line_continuation() {
        for source in ["'a\\\nb'", "\"a\\\r\nb\"", "'\\''"] {
            assert_eq!(kinds(source), vec![Ok(RawToken::String)], "{source:?}");
        }
    }

    #[test]
    fn test_unterminated_triple_string_runs_to_end() {
        let mut lexer = RawToken::lexer("'''open\nstill");
        assert_eq!(lexer.next(), Some(Ok(RawToken::String)));
        assert_eq!(lexer.slice(), "'''open\nstill");
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_operators_prefer_longest() {
        let mut lexer = RawToken::lexer("**=->");
        assert_eq!(lexer.next(), Some(Ok(RawToken::Operator)));
        assert_eq!(lexer.slice(), "**=");
        assert_eq!(lexer.next(), Some(Ok(RawToken::Operator)));
        assert_eq!(lexer.slice(), "->");
    }

    #[test]
    fn test_decorator_and_delimiters() {
        assert_eq!(
            kinds("@x()"),
            vec![
                Ok(RawToken::Decorator),
                Ok(RawToken::Name),
                Ok(RawToken::Delimiter),
                Ok(RawToken::Delimiter),
            ]
        );
    }

    #[test]
    fn test_unmatched_character_is_error() {
        assert_eq!(kinds("$"), vec![Err(())]);
    }
}
