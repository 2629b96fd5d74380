//! Markdown extension converters
//!
//! Extensions are text-to-text transforms that run before link rewiring and
//! rendering. They turn custom block syntax into raw HTML that the markdown
//! renderer passes through:
//!
//! - [`AudioExtension`]: `audio: [title](track.mp3)` becomes an `<audio>` player
//! - [`FilesExtension`]: `files: [title](folder)` becomes a download list
//!
//! Every extension receives the item's files and the path provider through an
//! [`ExtensionContext`]. An extension either returns the complete converted
//! text or fails as a whole; partial output is never used.

pub mod audio;
pub mod files;

pub use audio::AudioExtension;
pub use files::FilesExtension;

use crate::error::ExtensionError;
use crate::model::File;
use crate::paths::PathProvider;
use regex::Regex;

/// Inputs shared by all extensions for one item
pub struct ExtensionContext<'a> {
    /// Resolves file routes to output paths
    pub paths: &'a dyn PathProvider,
    /// The item's files in order
    pub files: &'a [File],
}

/// A pluggable markdown-to-markdown transform
///
/// Extensions must be `Send + Sync` so one converter can be shared between
/// threads.
pub trait Extension: Send + Sync {
    /// Short name used in logs and warnings
    fn name(&self) -> &str;

    /// Convert the markdown
    ///
    /// # Errors
    ///
    /// Returns an error if any block cannot be converted. The caller then
    /// continues with the unconverted input.
    fn convert(&self, markdown: &str, ctx: &ExtensionContext<'_>) -> Result<String, ExtensionError>;
}

/// Replace every `pattern` occurrence with the rendered block
///
/// The pattern must capture a title and a target. Both are trimmed before
/// they are handed to `render`. A missing pattern leaves the text untouched.
pub(crate) fn replace_blocks<F>(
    markdown: &str,
    pattern: Option<&Regex>,
    mut render: F,
) -> Result<String, ExtensionError>
where
    F: FnMut(&str, &str) -> Result<String, ExtensionError>,
{
    let Some(pattern) = pattern else {
        return Ok(markdown.to_string());
    };

    let mut content = String::with_capacity(markdown.len());
    let mut last = 0;

    for captures in pattern.captures_iter(markdown) {
        let (Some(whole), Some(title), Some(target)) =
            (captures.get(0), captures.get(1), captures.get(2))
        else {
            continue;
        };

        content.push_str(&markdown[last..whole.start()]);
        content.push_str(&render(title.as_str().trim(), target.as_str().trim())?);
        last = whole.end();
    }
    content.push_str(&markdown[last..]);

    Ok(content)
}

/// Escape special HTML characters for text and attribute values
pub(crate) fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
