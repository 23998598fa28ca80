//! Symbol discovery
//!
//! Read-only scan that collects every identifier introduced by the function-defining
//! keyword. The result feeds the user-call rule of the contextual pass, so a call to a
//! function defined further down the file is still recognized.
//!
//! # Logic
//!
//! For each IDENTIFIER token:
//! - Walk back over WHITESPACE to the nearest other token
//! - If that token is a KEYWORD spelled like the function keyword, record the lexeme

use crate::highlight::profile::{ContextKeywords, DefinedSymbols};
use crate::highlight::token::{TokenCategory, TokenStream};

pub fn discover_symbols(stream: &TokenStream, keywords: &ContextKeywords) -> DefinedSymbols {
    let mut symbols = DefinedSymbols::new();

    for (index, token) in stream.iter().enumerate() {
        if !token.is(TokenCategory::Identifier) {
            continue;
        }
        let follows_def = stream
            .prev_significant(index)
            .map(|prev| &stream[prev])
            .is_some_and(|prev| {
                prev.is(TokenCategory::Keyword) && prev.lexeme() == keywords.function
            });
        if follows_def {
            symbols.insert(token.lexeme());
        }
    }

    tracing::debug!(symbols = symbols.len(), "symbol discovery finished");
    symbols
}
