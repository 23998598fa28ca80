//! Helpers for building token streams by hand in tests.
//!
//! Streams written as `(category, lexeme)` tables read much closer to the token listings in
//! bug reports than streams produced by the tokenizer, and they let tests feed the pipeline
//! inputs the tokenizer would never emit (unbalanced signatures, stray categories).

use crate::highlight::token::{Token, TokenCategory, TokenStream};

pub fn stream_of(pairs: &[(TokenCategory, &str)]) -> TokenStream {
    pairs
        .iter()
        .map(|(category, lexeme)| Token::new(*category, *lexeme))
        .collect()
}

/// `(category, lexeme)` view of a stream, for comparing against a table.
pub fn pairs_of(stream: &TokenStream) -> Vec<(TokenCategory, &str)> {
    stream
        .iter()
        .map(|token| (token.category(), token.lexeme()))
        .collect()
}

/// One `CATEGORY lexeme` line per token, skipping whitespace and newlines.
///
/// Used for inline snapshots of whole programs.
pub fn listing(stream: &TokenStream) -> String {
    stream
        .iter()
        .filter(|t| !t.is(TokenCategory::Whitespace) && !t.is(TokenCategory::Newline))
        .map(|t| format!("{} {}\n", t.category(), t.lexeme()))
        .collect()
}
