//! The token CSV exchange format as an output format.

use super::registry::{FormatError, Formatter};
use crate::highlight::io::tokens_to_csv;
use crate::highlight::token::TokenStream;

pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn name(&self) -> &str {
        "csv"
    }

    fn serialize(&self, stream: &TokenStream) -> Result<String, FormatError> {
        tokens_to_csv(stream).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Quoted CATEGORY,lexeme records"
    }
}
