//! Standalone HTML page with one styled `<span>` per token.
//!
//! The class of each span is the category's wire label, so the stylesheet below maps one
//! rule per category. WHITESPACE and NEWLINE tokens are written bare; the `<pre>` block
//! keeps them as they are.

use super::registry::{FormatError, Formatter};
use crate::highlight::stats::CategoryStats;
use crate::highlight::token::{TokenCategory, TokenStream, ALL_CATEGORIES};
use std::fmt::Write;

const PAGE_STYLE: &str = "\
body { font-family: 'Courier New', monospace; background: #f8f8f8; padding: 20px; line-height: 1.6; }
h1 { color: #333; text-align: center; margin-bottom: 30px; }
.container { max-width: 1200px; margin: 0 auto; }
.code-container { background: #272822; padding: 20px; border-radius: 8px; overflow: auto; }
pre { margin: 0; padding: 0; background: #272822; color: #f8f8f2; white-space: pre-wrap; }
.stats { margin-top: 30px; background: #fff; padding: 20px; border-radius: 8px; }
.stats-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 15px; }
.stat-item { background: #f1f1f1; padding: 10px; border-radius: 5px; }
.footer { text-align: center; color: #666; font-size: 0.9em; margin-top: 20px; }
";

fn category_style(category: TokenCategory) -> &'static str {
    match category {
        TokenCategory::Keyword => "color: #66d9ef; font-weight: bold;",
        TokenCategory::Identifier => "color: #f8f8f2;",
        TokenCategory::Number => "color: #ae81ff;",
        TokenCategory::String => "color: #e6db74;",
        TokenCategory::Comment => "color: #75715e; font-style: italic;",
        TokenCategory::Operator => "color: #f92672;",
        TokenCategory::Delimiter => "color: #a6e22e;",
        TokenCategory::Decorator => "color: #a1efe4; font-weight: bold;",
        TokenCategory::Unknown => "color: #fd971f;",
        TokenCategory::ClassName => "color: #a6e22e; text-decoration: underline;",
        TokenCategory::FunctionName => "color: #a6e22e; font-weight: bold;",
        TokenCategory::Parameter => "color: #fd971f; font-style: italic;",
        TokenCategory::SelfParam => "color: #fd971f; font-style: italic; font-weight: bold;",
        TokenCategory::BuiltinFunction => "color: #66d9ef;",
        TokenCategory::FunctionCall => "color: #a6e22e;",
        TokenCategory::Whitespace | TokenCategory::Newline => "",
    }
}

/// Escape text for HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub struct HtmlFormatter {
    title: String,
    show_statistics: bool,
    footer: Option<String>,
}

impl HtmlFormatter {
    pub fn new(title: impl Into<String>, show_statistics: bool) -> Self {
        HtmlFormatter {
            title: title.into(),
            show_statistics,
            footer: None,
        }
    }

    /// Closing line written under the code block, e.g. a generation timestamp.
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// The `<span>` sequence for the code block.
    pub fn render_code(stream: &TokenStream) -> String {
        let mut out = String::new();
        for token in stream {
            let text = escape_html(token.lexeme());
            match token.category() {
                TokenCategory::Whitespace | TokenCategory::Newline => out.push_str(&text),
                category => {
                    let _ = write!(out, "<span class=\"{category}\">{text}</span>");
                }
            }
        }
        out
    }

    fn render_stylesheet() -> String {
        let mut css = String::from(PAGE_STYLE);
        for category in ALL_CATEGORIES {
            let style = category_style(*category);
            if !style.is_empty() {
                let _ = writeln!(css, ".{category} {{ {style} }}");
            }
        }
        css
    }

    fn render_stats(stats: &CategoryStats) -> String {
        let mut out = String::from("<div class=\"stats\">\n<h2>Statistics</h2>\n");
        out.push_str("<div class=\"stats-grid\">\n");
        let _ = writeln!(
            out,
            "<div class=\"stat-item\"><strong>Total tokens:</strong> {}</div>",
            stats.total
        );
        for (category, count) in &stats.counts {
            let _ = writeln!(
                out,
                "<div class=\"stat-item\"><strong>{category}:</strong> {count}</div>"
            );
        }
        out.push_str("</div>\n</div>\n");
        out
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        HtmlFormatter::new("Python Syntax Highlighting", true)
    }
}

impl Formatter for HtmlFormatter {
    fn name(&self) -> &str {
        "html"
    }

    fn serialize(&self, stream: &TokenStream) -> Result<String, FormatError> {
        let title = escape_html(&self.title);
        let mut page = String::new();
        page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n");
        let _ = writeln!(page, "<title>{title}</title>");
        let _ = write!(page, "<style>\n{}</style>\n", Self::render_stylesheet());
        page.push_str("</head>\n<body>\n<div class=\"container\">\n");
        let _ = writeln!(page, "<h1>{title}</h1>");
        let _ = writeln!(
            page,
            "<div class=\"code-container\"><pre>{}</pre></div>",
            Self::render_code(stream)
        );
        if self.show_statistics {
            page.push_str(&Self::render_stats(&CategoryStats::collect(stream)));
        }
        if let Some(footer) = &self.footer {
            let _ = writeln!(page, "<p class=\"footer\">{}</p>", escape_html(footer));
        }
        page.push_str("</div>\n</body>\n</html>\n");
        Ok(page)
    }

    fn description(&self) -> &str {
        "Standalone HTML page with per-category styling"
    }
}
