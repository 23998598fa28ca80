//! Token CSV exchange format.
//!
//! One record per token, two fields, every field quoted: `"KEYWORD","def"`. Lexemes keep
//! their raw text, newlines included, so a stream survives a write/read cycle unchanged.
//! Records without exactly two fields are skipped; an unknown category label is an error.

use crate::highlight::error::{HighlightError, Result};
use crate::highlight::token::{Token, TokenCategory, TokenStream};
use std::io::{Read, Write};

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(false).flexible(true).quote(b'"');
    builder
}

pub fn read_tokens<R: Read>(reader: R) -> Result<TokenStream> {
    let mut tokens = Vec::new();

    for (index, record) in reader_builder().from_reader(reader).records().enumerate() {
        let record = record?;
        let number = index + 1;
        if record.len() != 2 {
            tracing::warn!(
                record = number,
                fields = record.len(),
                "skipping token record"
            );
            continue;
        }
        let label = &record[0];
        let Ok(category) = label.parse::<TokenCategory>() else {
            return Err(HighlightError::UnknownCategory {
                record: number,
                label: label.to_string(),
            });
        };
        tokens.push(Token::new(category, &record[1]));
    }

    Ok(TokenStream::new(tokens))
}

pub fn write_tokens<W: Write>(writer: W, stream: &TokenStream) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(writer);
    for token in stream {
        writer.write_record([token.category().as_str(), token.lexeme()])?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// CSV text for a stream.
pub fn tokens_to_csv(stream: &TokenStream) -> Result<String> {
    let mut buffer = Vec::new();
    write_tokens(&mut buffer, stream)?;
    // The writer only ever receives &str fields
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
