//! Parameter extraction mapper
//!
//! For every FUNCTION_NAME token, scans the parenthesized signature that follows it and
//! tags the identifiers sitting directly inside the outermost parenthesis.
//!
//! # Logic
//!
//! - The next non-WHITESPACE token after the name must be the call delimiter, otherwise
//!   the name has no signature and is skipped
//! - Depth starts at 1 inside that delimiter; every group-open delimiter raises it, every
//!   group-close delimiter lowers it, and the scan stops when it reaches 0
//! - An IDENTIFIER seen at depth 1 becomes SELF_PARAM when spelled like the conventional
//!   first parameter, PARAMETER otherwise; deeper identifiers are left alone
//! - Reaching the end of the stream with depth > 0 stops the scan silently
//!
//! A callee inside a default value (`def f(x=make(1))`) is still at depth 1 when it is
//! seen, because its own parenthesis has not opened yet, so it is tagged PARAMETER unless
//! an earlier pass already claimed it as a builtin or user call.

use crate::highlight::pipeline::mapper::StreamMapper;
use crate::highlight::profile::LanguageProfile;
use crate::highlight::token::{TokenCategory, TokenStream};

pub struct ParameterMapper<'a> {
    profile: &'a LanguageProfile,
}

impl<'a> ParameterMapper<'a> {
    pub fn new(profile: &'a LanguageProfile) -> Self {
        ParameterMapper { profile }
    }

    /// Tag the signature belonging to the function name at `name_index`.
    fn tag_signature(&self, stream: &mut TokenStream, name_index: usize) {
        let delimiters = &self.profile.delimiters;
        let open = match stream.next_significant(name_index) {
            Some(open) if delimiters.is_call_open(stream[open].lexeme()) => open,
            _ => return,
        };

        let mut depth = 1usize;
        for index in open + 1..stream.len() {
            let token = &stream[index];
            if delimiters.is_group_open(token.lexeme()) {
                depth += 1;
            } else if delimiters.is_group_close(token.lexeme()) {
                depth -= 1;
                if depth == 0 {
                    return;
                }
            } else if depth == 1 && token.is(TokenCategory::Identifier) {
                let category = if token.lexeme() == self.profile.keywords.self_param {
                    TokenCategory::SelfParam
                } else {
                    TokenCategory::Parameter
                };
                stream.reclassify(index, category);
            }
        }

        tracing::trace!(
            name = stream[name_index].lexeme(),
            depth,
            "signature not closed before end of stream"
        );
    }
}

impl StreamMapper for ParameterMapper<'_> {
    fn name(&self) -> &'static str {
        "parameters"
    }

    fn map_flat(&mut self, mut stream: TokenStream) -> TokenStream {
        for index in 0..stream.len() {
            if stream[index].is(TokenCategory::FunctionName) {
                self.tag_signature(&mut stream, index);
            }
        }
        stream
    }
}
