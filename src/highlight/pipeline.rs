//! Reclassification pipeline
//!
//! Composes the three passes in their fixed order:
//!
//! 1. Symbol discovery: read-only scan building the [DefinedSymbols] registry
//! 2. Contextual reclassification: builtin calls, user calls, declaration names
//! 3. Parameter extraction: parameters inside each function signature
//!
//! Every pass depends on the one before it, so the order is not configurable. The stream
//! comes in by value and goes out with the same length and lexemes; only categories change.
//! Registries are rebuilt on every run and nothing is carried between runs.
//!
//! Running the pipeline on its own output changes nothing: after one run no token still
//! carries the IDENTIFIER category in a position where a rule would fire.

pub mod mapper;
pub mod mappers;

pub use mapper::{walk_stream, StreamMapper};
pub use mappers::{
    classify, discover_symbols, ContextMapper, ContextRule, ParameterMapper, RuleContext,
    CONTEXT_RULES,
};

use crate::highlight::profile::{DefinedSymbols, LanguageProfile};
use crate::highlight::token::TokenStream;

/// Runs the reclassification passes with a fixed language profile.
#[derive(Debug, Clone, Default)]
pub struct Reclassifier {
    profile: LanguageProfile,
}

impl Reclassifier {
    pub fn new(profile: LanguageProfile) -> Self {
        Reclassifier { profile }
    }

    pub fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    /// Reclassify `stream` and return it.
    pub fn run(&self, stream: TokenStream) -> TokenStream {
        self.run_with_symbols(stream).0
    }

    /// Like [Reclassifier::run], also returning the symbols discovered on the way.
    pub fn run_with_symbols(&self, stream: TokenStream) -> (TokenStream, DefinedSymbols) {
        run_passes(stream, &self.profile)
    }
}

/// Reclassify a raw token stream using `profile`.
pub fn reclassify(stream: TokenStream, profile: &LanguageProfile) -> TokenStream {
    run_passes(stream, profile).0
}

fn run_passes(stream: TokenStream, profile: &LanguageProfile) -> (TokenStream, DefinedSymbols) {
    let _span = tracing::debug_span!("reclassify", tokens = stream.len()).entered();

    let defined = discover_symbols(&stream, &profile.keywords);
    let stream = walk_stream(stream, &mut ContextMapper::new(profile, &defined));
    let stream = walk_stream(stream, &mut ParameterMapper::new(profile));
    (stream, defined)
}
