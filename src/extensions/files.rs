//! File download listings
//!
//! Syntax: `files: [title](folder)` at the start of a line
//!
//! Lists every item file below `folder` as a download link, in item order.
//! A folder that holds none of the item's files is an error.

use super::{Extension, ExtensionContext, escape_html, replace_blocks};
use crate::error::ExtensionError;
use regex::Regex;
use std::sync::OnceLock;

fn files_pattern() -> Option<&'static Regex> {
    // files: [title](folder)
    static FILES_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    FILES_REGEX
        .get_or_init(|| Regex::new(r"(?m)^[ \t]*files:[ \t]*\[([^\]\n]*)\]\(([^)]+)\)").ok())
        .as_ref()
}

/// Renders `files:` blocks as download lists
#[derive(Debug, Default, Clone, Copy)]
pub struct FilesExtension;

impl FilesExtension {
    /// Create the extension
    pub fn new() -> Self {
        Self
    }
}

impl Extension for FilesExtension {
    fn name(&self) -> &str {
        "files"
    }

    fn convert(&self, markdown: &str, ctx: &ExtensionContext<'_>) -> Result<String, ExtensionError> {
        replace_blocks(markdown, files_pattern(), |title, folder| {
            render_file_list(title, folder, ctx)
        })
    }
}

fn render_file_list(
    title: &str,
    folder: &str,
    ctx: &ExtensionContext<'_>,
) -> Result<String, ExtensionError> {
    let entries: String = ctx
        .files
        .iter()
        .filter(|file| file.route().is_below(folder))
        .map(|file| {
            format!(
                "<li><a href=\"{}\">{}</a></li>\n",
                escape_html(&ctx.paths.path(file.route().value())),
                escape_html(file.name())
            )
        })
        .collect();

    if entries.is_empty() {
        return Err(ExtensionError::EmptyFolder {
            folder: folder.to_string(),
        });
    }

    Ok(format!(
        "<section class=\"filelinks\">\n<h1>{}</h1>\n<ol>\n{}</ol>\n</section>",
        escape_html(title),
        entries
    ))
}
