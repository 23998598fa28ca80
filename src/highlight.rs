//! Main module for pyhighlight library functionality
//!
//! Data flows leaf-first through the submodules:
//!
//!     source ── lexing ──▶ TokenStream ── pipeline ──▶ TokenStream ── formats ──▶ output
//!                              ▲
//!                   io (token CSV from an external tokenizer)
//!
//! The [pipeline] is the only part that rewrites categories; everything else reads or
//! writes streams.

pub mod config;
pub mod error;
pub mod formats;
pub mod io;
pub mod lexing;
pub mod pipeline;
pub mod profile;
pub mod stats;
pub mod testing;
pub mod token;

pub use error::HighlightError;
pub use pipeline::{reclassify, Reclassifier};
pub use profile::{BuiltinRegistry, DefinedSymbols, LanguageProfile};
pub use token::{Token, TokenCategory, TokenStream};

/// Tokenize Python source and reclassify it with `profile`.
pub fn highlight_source(source: &str, profile: &LanguageProfile) -> TokenStream {
    reclassify(lexing::tokenize(source), profile)
}
