//! Stream mapper trait and traversal infrastructure
//!
//! Passes that rewrite categories implement [StreamMapper]. A mapper takes ownership of the
//! stream, rewrites categories in place and hands the same stream back. Mappers never fail:
//! malformed context degrades to "leave the token alone".
//!
//! # Examples
//!
//! ```ignore
//! struct Shout;
//!
//! impl StreamMapper for Shout {
//!     fn name(&self) -> &'static str { "shout" }
//!
//!     fn map_flat(&mut self, mut stream: TokenStream) -> TokenStream {
//!         stream.reclassify(0, TokenCategory::Keyword);
//!         stream
//!     }
//! }
//!
//! let stream = walk_stream(stream, &mut Shout);
//! ```

use crate::highlight::token::TokenStream;

/// Trait for category-rewriting passes over a flat token stream.
pub trait StreamMapper {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Rewrite categories of `stream`. Length and lexemes must be left untouched.
    fn map_flat(&mut self, stream: TokenStream) -> TokenStream;
}

/// Run a mapper over a stream, logging how many categories it changed.
pub fn walk_stream(stream: TokenStream, mapper: &mut impl StreamMapper) -> TokenStream {
    let before = stream.categories();
    let after = mapper.map_flat(stream);
    debug_assert_eq!(before.len(), after.len(), "mapper changed stream length");

    let changed = before
        .iter()
        .zip(after.iter())
        .filter(|(old, token)| **old != token.category())
        .count();
    tracing::debug!(
        pass = mapper.name(),
        tokens = after.len(),
        reclassified = changed,
        "pass finished"
    );
    after
}
