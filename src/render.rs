//! Markdown to HTML rendering
//!
//! Rendering is the last pipeline stage and is treated as a pure, total
//! function. [`CommonMarkRenderer`] is the default and uses `pulldown-cmark`;
//! any other engine can be plugged in through [`MarkdownRenderer`].
//!
//! Raw HTML emitted by the extension converters is passed through untouched.

use pulldown_cmark::{Options, Parser, html};

/// Renders markdown text to HTML
pub trait MarkdownRenderer: Send + Sync {
    /// Render the markdown; never fails
    fn render(&self, markdown: &str) -> String;
}

/// Syntax extensions enabled on top of CommonMark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// GFM tables
    pub tables: bool,
    /// `~~strikethrough~~`
    pub strikethrough: bool,
    /// `[^1]` footnotes
    pub footnotes: bool,
    /// `- [x]` task lists
    pub tasklists: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            footnotes: true,
            tasklists: true,
        }
    }
}

impl RenderOptions {
    fn to_parser_options(self) -> Options {
        let mut options = Options::empty();
        if self.tables {
            options.insert(Options::ENABLE_TABLES);
        }
        if self.strikethrough {
            options.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.footnotes {
            options.insert(Options::ENABLE_FOOTNOTES);
        }
        if self.tasklists {
            options.insert(Options::ENABLE_TASKLISTS);
        }
        options
    }
}

/// CommonMark renderer backed by `pulldown-cmark`
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonMarkRenderer {
    options: RenderOptions,
}

impl CommonMarkRenderer {
    /// Create a renderer with all extensions enabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with custom syntax options
    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }
}

impl MarkdownRenderer for CommonMarkRenderer {
    fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options.to_parser_options());

        let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut html_output, parser);
        html_output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_rendering() {
        let html = CommonMarkRenderer::new().render("# Title\n\nSome *text* with [a link](/x.html).");

        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<em>text</em>"));
        assert!(html.contains("<a href=\"/x.html\">a link</a>"));
    }

    #[test]
    fn test_raw_html_passes_through() {
        let html = CommonMarkRenderer::new()
            .render("<section class=\"filelinks\">\n<h1>Files</h1>\n</section>\n");
        assert!(html.contains("<section class=\"filelinks\">"));
    }

    #[test]
    fn test_tables_follow_options() {
        let markdown = "| a | b |\n|---|---|\n| 1 | 2 |\n";

        let with_tables = CommonMarkRenderer::new().render(markdown);
        assert!(with_tables.contains("<table>"));

        let without_tables = CommonMarkRenderer::with_options(RenderOptions {
            tables: false,
            ..Default::default()
        })
        .render(markdown);
        assert!(!without_tables.contains("<table>"));
    }

    #[test]
    fn test_strikethrough() {
        let html = CommonMarkRenderer::new().render("~~gone~~");
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(CommonMarkRenderer::new().render(""), "");
    }
}
