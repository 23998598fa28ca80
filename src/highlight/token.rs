//! Core token types shared by the tokenizer, the reclassification pipeline and the formats.
//!
//!     A token is a `(category, lexeme)` pair. The lexeme is the literal source text and is
//!     never modified once the tokenizer has produced it. The category starts out as one of
//!     the lexical labels (keyword, identifier, number, ...) and may be rewritten by the
//!     pipeline into one of the semantic labels (function name, parameter, builtin call, ...).
//!
//! Token Stream
//!
//!     The [TokenStream] is a flat, index-addressable sequence. Its length is fixed at
//!     construction: passes never insert, delete or reorder tokens, they only call
//!     [TokenStream::reclassify]. Context lookups are bounded linear walks that skip
//!     WHITESPACE tokens only, so context never crosses a NEWLINE.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category label attached to every token.
///
/// The first block is what the tokenizer emits; the second block is only ever produced by
/// the reclassification pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum TokenCategory {
    Keyword,
    Identifier,
    Number,
    String,
    Comment,
    Operator,
    Delimiter,
    Decorator,
    Whitespace,
    Newline,
    Unknown,

    ClassName,
    FunctionName,
    Parameter,
    /// Conventional first parameter of a method (`self` in Python).
    SelfParam,
    BuiltinFunction,
    FunctionCall,
}

pub const ALL_CATEGORIES: &[TokenCategory] = &[
    TokenCategory::Keyword,
    TokenCategory::Identifier,
    TokenCategory::Number,
    TokenCategory::String,
    TokenCategory::Comment,
    TokenCategory::Operator,
    TokenCategory::Delimiter,
    TokenCategory::Decorator,
    TokenCategory::Whitespace,
    TokenCategory::Newline,
    TokenCategory::Unknown,
    TokenCategory::ClassName,
    TokenCategory::FunctionName,
    TokenCategory::Parameter,
    TokenCategory::SelfParam,
    TokenCategory::BuiltinFunction,
    TokenCategory::FunctionCall,
];

impl TokenCategory {
    /// Wire label used by the CSV exchange format and as the HTML class name.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenCategory::Keyword => "KEYWORD",
            TokenCategory::Identifier => "IDENTIFIER",
            TokenCategory::Number => "NUMBER",
            TokenCategory::String => "STRING",
            TokenCategory::Comment => "COMMENT",
            TokenCategory::Operator => "OPERATOR",
            TokenCategory::Delimiter => "DELIMITER",
            TokenCategory::Decorator => "DECORATOR",
            TokenCategory::Whitespace => "WHITESPACE",
            TokenCategory::Newline => "NEWLINE",
            TokenCategory::Unknown => "UNKNOWN",
            TokenCategory::ClassName => "CLASS_NAME",
            TokenCategory::FunctionName => "FUNCTION_NAME",
            TokenCategory::Parameter => "PARAMETER",
            TokenCategory::SelfParam => "SELF_PARAM",
            TokenCategory::BuiltinFunction => "BUILTIN_FUNCTION",
            TokenCategory::FunctionCall => "FUNCTION_CALL",
        }
    }

    /// True for labels that only the pipeline assigns.
    pub fn is_reclassified(self) -> bool {
        matches!(
            self,
            TokenCategory::ClassName
                | TokenCategory::FunctionName
                | TokenCategory::Parameter
                | TokenCategory::SelfParam
                | TokenCategory::BuiltinFunction
                | TokenCategory::FunctionCall
        )
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label that does not name any [TokenCategory].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown token category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for TokenCategory {
    type Err = UnknownCategory;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        ALL_CATEGORIES
            .iter()
            .copied()
            .find(|category| category.as_str() == label)
            .ok_or_else(|| UnknownCategory(label.to_string()))
    }
}

/// A single `(category, lexeme)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    category: TokenCategory,
    lexeme: String,
}

impl Token {
    pub fn new(category: TokenCategory, lexeme: impl Into<String>) -> Self {
        Token {
            category,
            lexeme: lexeme.into(),
        }
    }

    pub fn category(&self) -> TokenCategory {
        self.category
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn is(&self, category: TokenCategory) -> bool {
        self.category == category
    }
}

/// Ordered, fixed-length sequence of tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenStream { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Rewrite the category of the token at `index`. Out-of-range indices are ignored.
    pub fn reclassify(&mut self, index: usize, category: TokenCategory) {
        if let Some(token) = self.tokens.get_mut(index) {
            token.category = category;
        }
    }

    /// Nearest token before `index` that is not WHITESPACE.
    ///
    /// NEWLINE is not skipped, so a declaration keyword on a previous line is never found.
    pub fn prev_significant(&self, index: usize) -> Option<usize> {
        let upper = index.min(self.tokens.len());
        self.tokens[..upper]
            .iter()
            .rposition(|token| !token.is(TokenCategory::Whitespace))
    }

    /// Nearest token after `index` that is not WHITESPACE.
    pub fn next_significant(&self, index: usize) -> Option<usize> {
        let start = index.checked_add(1)?;
        self.tokens
            .get(start..)?
            .iter()
            .position(|token| !token.is(TokenCategory::Whitespace))
            .map(|offset| start + offset)
    }

    pub fn categories(&self) -> Vec<TokenCategory> {
        self.tokens.iter().map(Token::category).collect()
    }

    pub fn lexemes(&self) -> Vec<&str> {
        self.tokens.iter().map(Token::lexeme).collect()
    }

    /// Concatenation of every lexeme. Equals the tokenized source for lossless tokenizers.
    pub fn source_text(&self) -> String {
        self.tokens.iter().map(Token::lexeme).collect()
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        TokenStream::new(tokens)
    }
}

impl FromIterator<Token> for TokenStream {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        TokenStream::new(iter.into_iter().collect())
    }
}

impl std::ops::Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
