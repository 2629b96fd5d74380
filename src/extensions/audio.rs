//! Audio player embedding
//!
//! Syntax: `audio: [title](target)` at the start of a line
//!
//! When the target names one of the item's files the player points at the
//! file's output path and declares its media type. Any other target is
//! embedded as an external source.

use super::{Extension, ExtensionContext, escape_html, replace_blocks};
use crate::error::ExtensionError;
use crate::model::{File, find_matching_file};
use regex::Regex;
use std::sync::OnceLock;

fn audio_pattern() -> Option<&'static Regex> {
    // audio: [title](target)
    static AUDIO_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    AUDIO_REGEX
        .get_or_init(|| Regex::new(r"(?m)^[ \t]*audio:[ \t]*\[([^\]\n]*)\]\(([^)]+)\)").ok())
        .as_ref()
}

/// Media type for a lowercased audio file extension
pub fn audio_media_type(extension: &str) -> Option<&'static str> {
    match extension {
        "mp3" => Some("audio/mpeg"),
        "ogg" | "oga" => Some("audio/ogg"),
        "wav" => Some("audio/wav"),
        "m4a" => Some("audio/mp4"),
        "flac" => Some("audio/flac"),
        "weba" | "webm" => Some("audio/webm"),
        _ => None,
    }
}

/// Embeds `<audio>` players for `audio:` blocks
#[derive(Debug, Default, Clone, Copy)]
pub struct AudioExtension;

impl AudioExtension {
    /// Create the extension
    pub fn new() -> Self {
        Self
    }

    fn render(
        &self,
        title: &str,
        target: &str,
        ctx: &ExtensionContext<'_>,
    ) -> Result<String, ExtensionError> {
        match find_matching_file(ctx.files, target) {
            Some(file) => render_file_player(title, file, ctx),
            None => Ok(render_external_player(title, target)),
        }
    }
}

impl Extension for AudioExtension {
    fn name(&self) -> &str {
        "audio"
    }

    fn convert(&self, markdown: &str, ctx: &ExtensionContext<'_>) -> Result<String, ExtensionError> {
        replace_blocks(markdown, audio_pattern(), |title, target| {
            self.render(title, target, ctx)
        })
    }
}

fn render_file_player(
    title: &str,
    file: &File,
    ctx: &ExtensionContext<'_>,
) -> Result<String, ExtensionError> {
    let route = file.route();
    let extension = route.extension().unwrap_or_default();
    let Some(media_type) = audio_media_type(&extension) else {
        return Err(ExtensionError::UnsupportedMediaType {
            path: route.value().to_string(),
            extension,
        });
    };

    let path = escape_html(&ctx.paths.path(route.value()));
    let title = escape_html(title);

    Ok(format!(
        "<section class=\"audio audio-file\">\n\
         <h1><a href=\"{path}\" target=\"_blank\" title=\"{title}\">{title}</a></h1>\n\
         <audio controls>\n\
         <source src=\"{path}\" type=\"{media_type}\">\n\
         </audio>\n\
         </section>"
    ))
}

fn render_external_player(title: &str, target: &str) -> String {
    let source = escape_html(target);
    let title = escape_html(title);

    format!(
        "<section class=\"audio audio-external\">\n\
         <h1><a href=\"{source}\" target=\"_blank\" title=\"{title}\">{title}</a></h1>\n\
         <audio controls>\n\
         <source src=\"{source}\">\n\
         </audio>\n\
         </section>"
    )
}
