//! Output formats for reclassified token streams.
//!
//! Each format implements [Formatter] and is looked up by name in a [FormatRegistry].

pub mod html;
pub mod json;
pub mod registry;
pub mod token_csv;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use token_csv::CsvFormatter;
