//! JSON array of `{"category": ..., "lexeme": ...}` objects.

use super::registry::{FormatError, Formatter};
use crate::highlight::token::TokenStream;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, stream: &TokenStream) -> Result<String, FormatError> {
        serde_json::to_string_pretty(stream)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Tokens as a JSON array"
    }
}
