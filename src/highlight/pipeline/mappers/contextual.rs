//! Contextual reclassification mapper
//!
//! Rewrites IDENTIFIER tokens using their immediate lexical context: a builtin or a
//! discovered symbol followed by the call delimiter becomes a call, a name right after a
//! declaration keyword becomes a declaration name.
//!
//! # Rule precedence
//!
//! The rules are data, not nested conditionals. [CONTEXT_RULES] lists them in the order
//! they are tried; the first rule that yields a category wins and the rest are skipped.
//! Tokens are visited left to right and each token is decided independently.
//!
//! 1. [ContextRule::BuiltinCall]: builtin name followed by `(` → BUILTIN_FUNCTION
//! 2. [ContextRule::UserCall]: discovered name followed by `(` → FUNCTION_CALL
//! 3. [ContextRule::DeclarationName]: name after `class` → CLASS_NAME, after `def` → FUNCTION_NAME
//!
//! The call rules never fire on a name in declaration position (right after the function
//! or class keyword), even though every `def` name is itself a discovered symbol.
//!
//! Lookahead and lookback skip WHITESPACE only.

use crate::highlight::pipeline::mapper::StreamMapper;
use crate::highlight::profile::{DefinedSymbols, LanguageProfile};
use crate::highlight::token::{TokenCategory, TokenStream};

/// Everything a rule may look at when deciding a single token.
pub struct RuleContext<'a> {
    pub stream: &'a TokenStream,
    pub index: usize,
    pub profile: &'a LanguageProfile,
    pub defined: &'a DefinedSymbols,
}

impl<'a> RuleContext<'a> {
    fn lexeme(&self) -> &'a str {
        self.stream[self.index].lexeme()
    }

    fn followed_by_call(&self) -> bool {
        let Some(next) = self.stream.next_significant(self.index) else {
            return false;
        };
        let delimiters = &self.profile.delimiters;
        delimiters.is_call_open(self.stream[next].lexeme())
    }

    /// Lexeme of the preceding token when that token is a KEYWORD.
    fn preceding_keyword(&self) -> Option<&'a str> {
        let prev = &self.stream[self.stream.prev_significant(self.index)?];
        prev.is(TokenCategory::Keyword).then(|| prev.lexeme())
    }

    fn in_declaration_position(&self) -> bool {
        let keywords = &self.profile.keywords;
        match self.preceding_keyword() {
            Some(keyword) => keyword == keywords.function || keyword == keywords.class,
            None => false,
        }
    }

    fn is_call(&self) -> bool {
        self.followed_by_call() && !self.in_declaration_position()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextRule {
    BuiltinCall,
    UserCall,
    DeclarationName,
}

/// Rules in precedence order.
pub const CONTEXT_RULES: &[ContextRule] = &[
    ContextRule::BuiltinCall,
    ContextRule::UserCall,
    ContextRule::DeclarationName,
];

impl ContextRule {
    pub fn name(self) -> &'static str {
        match self {
            ContextRule::BuiltinCall => "builtin-call",
            ContextRule::UserCall => "user-call",
            ContextRule::DeclarationName => "declaration-name",
        }
    }

    /// Category this rule assigns to the token under `ctx`, if it applies.
    pub fn evaluate(self, ctx: &RuleContext<'_>) -> Option<TokenCategory> {
        match self {
            ContextRule::BuiltinCall => {
                if ctx.profile.builtins.contains(ctx.lexeme()) && ctx.is_call() {
                    Some(TokenCategory::BuiltinFunction)
                } else {
                    None
                }
            }
            ContextRule::UserCall => {
                if ctx.defined.contains(ctx.lexeme()) && ctx.is_call() {
                    Some(TokenCategory::FunctionCall)
                } else {
                    None
                }
            }
            ContextRule::DeclarationName => {
                let keyword = ctx.preceding_keyword()?;
                let keywords = &ctx.profile.keywords;
                if keyword == keywords.class {
                    Some(TokenCategory::ClassName)
                } else if keyword == keywords.function {
                    Some(TokenCategory::FunctionName)
                } else {
                    None
                }
            }
        }
    }
}

/// First rule in [CONTEXT_RULES] that applies to the token under `ctx`.
pub fn classify(ctx: &RuleContext<'_>) -> Option<(ContextRule, TokenCategory)> {
    CONTEXT_RULES
        .iter()
        .find_map(|rule| rule.evaluate(ctx).map(|category| (*rule, category)))
}

/// Applies [CONTEXT_RULES] to every IDENTIFIER in the stream.
pub struct ContextMapper<'a> {
    profile: &'a LanguageProfile,
    defined: &'a DefinedSymbols,
}

impl<'a> ContextMapper<'a> {
    pub fn new(profile: &'a LanguageProfile, defined: &'a DefinedSymbols) -> Self {
        ContextMapper { profile, defined }
    }
}

impl StreamMapper for ContextMapper<'_> {
    fn name(&self) -> &'static str {
        "contextual"
    }

    fn map_flat(&mut self, mut stream: TokenStream) -> TokenStream {
        for index in 0..stream.len() {
            if !stream[index].is(TokenCategory::Identifier) {
                continue;
            }
            let ctx = RuleContext {
                stream: &stream,
                index,
                profile: self.profile,
                defined: self.defined,
            };
            if let Some((rule, category)) = classify(&ctx) {
                tracing::trace!(
                    index,
                    lexeme = stream[index].lexeme(),
                    rule = rule.name(),
                    %category,
                    "reclassified"
                );
                stream.reclassify(index, category);
            }
        }
        stream
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::profile::BuiltinRegistry;
    use crate::highlight::testing::stream_of;
    use TokenCategory::*;

    fn run(
        stream: TokenStream,
        profile: &LanguageProfile,
        defined: &DefinedSymbols,
    ) -> TokenStream {
        ContextMapper::new(profile, defined).map_flat(stream)
    }

    #[test]
    fn test_rule_order_is_fixed() {
        assert_eq!(
            CONTEXT_RULES,
            &[
                ContextRule::BuiltinCall,
                ContextRule::UserCall,
                ContextRule::DeclarationName,
            ]
        );
    }

    #[test]
    fn test_builtin_call_requires_open_paren() {
        let builtins = BuiltinRegistry::new(["len"]);
        let profile = LanguageProfile::python().with_builtins(builtins);
        let defined = DefinedSymbols::new();

        let out = run(
            stream_of(&[(Identifier, "len"), (Whitespace, " "), (Delimiter, "(")]),
            &profile,
            &defined,
        );
        assert_eq!(out[0].category(), BuiltinFunction);

        let out = run(
            stream_of(&[(Identifier, "len"), (Operator, "=")]),
            &profile,
            &defined,
        );
        assert_eq!(out[0].category(), Identifier);

        let out = run(stream_of(&[(Identifier, "len")]), &profile, &defined);
        assert_eq!(out[0].category(), Identifier);
    }

    #[test]
    fn test_builtin_beats_user_call() {
        // A user function shadowing a builtin still reads as a builtin call
        let profile = LanguageProfile::python();
        let mut defined = DefinedSymbols::new();
        defined.insert("print");

        let out = run(
            stream_of(&[(Identifier, "print"), (Delimiter, "(")]),
            &profile,
            &defined,
        );
        assert_eq!(out[0].category(), BuiltinFunction);
    }

    #[test]
    fn test_user_call_uses_discovered_symbols() {
        let profile = LanguageProfile::python();
        let mut defined = DefinedSymbols::new();
        defined.insert("fibonacci");

        let out = run(
            stream_of(&[
                (Identifier, "fibonacci"),
                (Delimiter, "("),
                (Identifier, "unknown"),
                (Delimiter, "("),
            ]),
            &profile,
            &defined,
        );
        assert_eq!(
            out.categories(),
            vec![FunctionCall, Delimiter, Identifier, Delimiter]
        );
    }

    #[test]
    fn test_declaration_names() {
        let profile = LanguageProfile::python();
        let defined = DefinedSymbols::new();

        let out = run(
            stream_of(&[
                (Keyword, "class"),
                (Whitespace, " "),
                (Identifier, "Widget"),
                (Delimiter, ":"),
                (Newline, "\n"),
                (Keyword, "def"),
                (Whitespace, " "),
                (Identifier, "draw"),
                (Delimiter, "("),
            ]),
            &profile,
            &defined,
        );
        assert_eq!(out[2].category(), ClassName);
        assert_eq!(out[7].category(), FunctionName);
    }

    #[test]
    fn test_declared_name_is_not_a_call() {
        let profile = LanguageProfile::python();
        let mut defined = DefinedSymbols::new();
        defined.insert("f");

        let out = run(
            stream_of(&[
                (Keyword, "def"),
                (Whitespace, " "),
                (Identifier, "f"),
                (Delimiter, "("),
                (Delimiter, ")"),
                (Newline, "\n"),
                (Keyword, "def"),
                (Whitespace, " "),
                (Identifier, "len"),
                (Delimiter, "("),
                (Newline, "\n"),
                (Keyword, "class"),
                (Whitespace, " "),
                (Identifier, "f"),
                (Delimiter, "("),
            ]),
            &profile,
            &defined,
        );
        assert_eq!(out[2].category(), FunctionName);
        assert_eq!(out[8].category(), FunctionName);
        assert_eq!(out[13].category(), ClassName);
    }

    #[test]
    fn test_call_after_other_keyword() {
        let profile = LanguageProfile::python();
        let mut defined = DefinedSymbols::new();
        defined.insert("f");

        let out = run(
            stream_of(&[
                (Keyword, "return"),
                (Whitespace, " "),
                (Identifier, "f"),
                (Delimiter, "("),
            ]),
            &profile,
            &defined,
        );
        assert_eq!(out[2].category(), FunctionCall);
    }

    #[test]
    fn test_context_does_not_cross_newline() {
        let profile = LanguageProfile::python();
        let defined = DefinedSymbols::new();

        let out = run(
            stream_of(&[
                (Keyword, "def"),
                (Newline, "\n"),
                (Identifier, "name"),
                (Identifier, "len"),
                (Newline, "\n"),
                (Delimiter, "("),
            ]),
            &profile,
            &defined,
        );
        assert_eq!(out[2].category(), Identifier);
        assert_eq!(out[3].category(), Identifier);
    }

    #[test]
    fn test_other_keywords_do_not_declare() {
        let profile = LanguageProfile::python();
        let defined = DefinedSymbols::new();
        let out = run(
            stream_of(&[(Keyword, "return"), (Whitespace, " "), (Identifier, "n")]),
            &profile,
            &defined,
        );
        assert_eq!(out[2].category(), Identifier);
    }

    #[test]
    fn test_custom_keywords() {
        let mut profile = LanguageProfile::python();
        profile.keywords.function = "fn".to_string();
        profile.keywords.class = "struct".to_string();
        let defined = DefinedSymbols::new();

        let out = run(
            stream_of(&[
                (Keyword, "struct"),
                (Whitespace, " "),
                (Identifier, "Point"),
                (Newline, "\n"),
                (Keyword, "fn"),
                (Whitespace, " "),
                (Identifier, "origin"),
            ]),
            &profile,
            &defined,
        );
        assert_eq!(out[2].category(), ClassName);
        assert_eq!(out[6].category(), FunctionName);
    }
}
