//! # pyhighlight
//!
//! Semantic syntax highlighting for Python source.
//!
//! A tokenizer produces `(category, lexeme)` pairs; the reclassification pipeline then
//! rewrites identifier categories from their context (declaration names, parameters,
//! builtin and user-defined calls) so a renderer can color more than lexical classes.
//! See [highlight::pipeline] for the passes.

pub mod highlight;
