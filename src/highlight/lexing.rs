//! Tokenizer
//!
//! Turns Python source into the flat `(category, lexeme)` stream the pipeline consumes.
//!
//! Structure:
//!     The logos lexer in [tokens_core] recognizes lexical shapes. This module maps each raw
//!     token onto a [TokenCategory], splitting keywords off from names. Characters no
//!     pattern accepts become UNKNOWN tokens rather than errors.
//!
//! Guarantees the pipeline relies on:
//!     - Lossless: concatenating the lexemes gives back the source exactly
//!     - Whitespace runs and line breaks are their own tokens, never folded into neighbours
//!     - The decorator marker `@` is a DECORATOR token separate from the name it annotates
//!     - A backslash line continuation is WHITESPACE, so context lookups see through it

pub mod tokens_core;

use crate::highlight::token::{Token, TokenCategory, TokenStream};
use logos::Logos;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use tokens_core::RawToken;

pub const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class", "continue",
    "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if", "import",
    "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try", "while",
    "with", "yield",
];

static KEYWORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| PYTHON_KEYWORDS.iter().copied().collect());

pub fn is_keyword(name: &str) -> bool {
    KEYWORDS.contains(name)
}

/// Tokenize Python source.
pub fn tokenize(source: &str) -> TokenStream {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let lexeme = lexer.slice();
        let category = match result {
            Ok(raw) => categorize(raw, lexeme),
            Err(()) => TokenCategory::Unknown,
        };
        tokens.push(Token::new(category, lexeme));
    }

    tracing::debug!(tokens = tokens.len(), "tokenized source");
    TokenStream::new(tokens)
}

fn categorize(raw: RawToken, lexeme: &str) -> TokenCategory {
    match raw {
        RawToken::Whitespace | RawToken::LineJoin => TokenCategory::Whitespace,
        RawToken::Newline => TokenCategory::Newline,
        RawToken::Comment => TokenCategory::Comment,
        RawToken::Name if is_keyword(lexeme) => TokenCategory::Keyword,
        RawToken::Name => TokenCategory::Identifier,
        RawToken::Number => TokenCategory::Number,
        RawToken::String => TokenCategory::String,
        RawToken::Decorator => TokenCategory::Decorator,
        RawToken::Operator => TokenCategory::Operator,
        RawToken::Delimiter => TokenCategory::Delimiter,
    }
}
