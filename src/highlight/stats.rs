//! Per-category token counts shown alongside rendered output.

use crate::highlight::token::{TokenCategory, TokenStream};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryStats {
    pub total: usize,
    /// Counts in order of first appearance in the stream.
    pub counts: Vec<(TokenCategory, usize)>,
}

impl CategoryStats {
    pub fn collect(stream: &TokenStream) -> Self {
        let mut counts: Vec<(TokenCategory, usize)> = Vec::new();
        for token in stream {
            match counts.iter_mut().find(|(c, _)| *c == token.category()) {
                Some((_, n)) => *n += 1,
                None => counts.push((token.category(), 1)),
            }
        }
        CategoryStats {
            total: stream.len(),
            counts,
        }
    }

    pub fn count(&self, category: TokenCategory) -> usize {
        self.counts
            .iter()
            .find(|(c, _)| *c == category)
            .map_or(0, |(_, n)| *n)
    }
}
