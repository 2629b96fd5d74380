//! Link rewiring for intra-site markdown links
//!
//! Authors link to an item's files with whatever path they had in mind when
//! writing (`[manual](files/manual.pdf)`, `[manual](./manual.pdf)`, ...). Once
//! the site is laid out for publishing those paths are rarely valid, so every
//! inline link whose target names one of the item's files is rewritten to the
//! output path computed by a [`PathProvider`].
//!
//! # Algorithm
//!
//! 1. Find all non-overlapping `[description](target)` occurrences in the
//!    input. Matching is purely lexical: links inside code spans are found as
//!    well, and the description may not span lines.
//! 2. Trim whitespace around the description and the target.
//! 3. Resolve the target against the item's files; the first file whose
//!    route matches wins. Unresolved links are left untouched.
//! 4. Replace the link with `[description](resolved path)`.
//!
//! Matches are computed once on the input; replacements are never re-scanned.
//!
//! # Replacement Strategies
//!
//! - [`ReplacementStrategy::FirstOccurrence`] substitutes the first literal
//!   occurrence of the link text in the current content. Every distinct
//!   link text is rewritten at most once, so when the same `[D](T)` appears
//!   twice only the first one is rewired.
//! - [`ReplacementStrategy::Positional`] substitutes exactly the matched span
//!   and therefore rewires every occurrence.
//!
//! # Examples
//!
//! ```rust
//! use markdown_html_converter::links::LinkRewriter;
//! use markdown_html_converter::model::File;
//!
//! let files = vec![File::new("docs/item/files/readme.md")];
//! let paths = |_: &str| "/out/readme.html".to_string();
//!
//! let rewriter = LinkRewriter::new(&paths, &files);
//! assert_eq!(
//!     rewriter.rewrite("See [doc](readme.md) for details."),
//!     "See [doc](/out/readme.html) for details."
//! );
//! ```

use crate::model::{File, find_matching_file};
use crate::paths::PathProvider;
use regex::Regex;
use std::collections::HashSet;
use std::ops::Range;
use std::sync::OnceLock;

/// How a resolved link is substituted back into the content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplacementStrategy {
    /// Replace the first literal occurrence of each distinct link text
    #[default]
    FirstOccurrence,
    /// Replace each matched span in place
    Positional,
}

/// A lexical markdown link occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownLink<'a> {
    /// Byte range of the full link text in the scanned content
    pub span: Range<usize>,
    /// The full link text as written
    pub text: &'a str,
    /// Description with surrounding whitespace trimmed
    pub description: &'a str,
    /// Target with surrounding whitespace trimmed
    pub target: &'a str,
}

fn link_pattern() -> Option<&'static Regex> {
    // [description](target)
    static LINK_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    LINK_REGEX
        .get_or_init(|| Regex::new(r"\[(.*?)\]\(([^)]+)\)").ok())
        .as_ref()
}

/// Find every `[description](target)` occurrence in document order
pub fn find_links(markdown: &str) -> Vec<MarkdownLink<'_>> {
    let Some(pattern) = link_pattern() else {
        return Vec::new();
    };

    pattern
        .captures_iter(markdown)
        .filter_map(|captures| {
            let whole = captures.get(0)?;
            let description = captures.get(1)?;
            let target = captures.get(2)?;

            Some(MarkdownLink {
                span: whole.range(),
                text: whole.as_str(),
                description: description.as_str().trim(),
                target: target.as_str().trim(),
            })
        })
        .collect()
}

/// Rewrites links that point at an item's files
pub struct LinkRewriter<'a> {
    paths: &'a dyn PathProvider,
    files: &'a [File],
    strategy: ReplacementStrategy,
}

impl<'a> LinkRewriter<'a> {
    /// Create a rewriter for the given files using the default strategy
    pub fn new(paths: &'a dyn PathProvider, files: &'a [File]) -> Self {
        Self {
            paths,
            files,
            strategy: ReplacementStrategy::default(),
        }
    }

    /// Use a different replacement strategy
    pub fn with_strategy(mut self, strategy: ReplacementStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Rewrite all resolvable links in the markdown
    pub fn rewrite(&self, markdown: &str) -> String {
        self.rewrite_counted(markdown).0
    }

    /// Rewrite all resolvable links and report how many were replaced
    pub fn rewrite_counted(&self, markdown: &str) -> (String, usize) {
        let links = find_links(markdown);
        if links.is_empty() {
            return (markdown.to_string(), 0);
        }

        match self.strategy {
            ReplacementStrategy::FirstOccurrence => {
                self.replace_first_occurrences(markdown, &links)
            }
            ReplacementStrategy::Positional => self.replace_spans(markdown, &links),
        }
    }

    fn replace_first_occurrences(
        &self,
        markdown: &str,
        links: &[MarkdownLink<'_>],
    ) -> (String, usize) {
        let mut content = markdown.to_string();
        let mut seen = HashSet::new();
        let mut replaced = 0;

        for link in links {
            if !seen.insert(link.text) {
                continue;
            }
            let Some(replacement) = self.resolve(link) else {
                continue;
            };
            if replacement == link.text {
                continue;
            }

            tracing::debug!(original = link.text, replacement = %replacement, "Replacing link");
            content = content.replacen(link.text, &replacement, 1);
            replaced += 1;
        }

        (content, replaced)
    }

    fn replace_spans(&self, markdown: &str, links: &[MarkdownLink<'_>]) -> (String, usize) {
        let mut content = String::with_capacity(markdown.len());
        let mut last = 0;
        let mut replaced = 0;

        for link in links {
            let Some(replacement) = self.resolve(link) else {
                continue;
            };
            if replacement == link.text {
                continue;
            }

            tracing::debug!(original = link.text, replacement = %replacement, "Replacing link");
            content.push_str(&markdown[last..link.span.start]);
            content.push_str(&replacement);
            last = link.span.end;
            replaced += 1;
        }
        content.push_str(&markdown[last..]);

        (content, replaced)
    }

    fn resolve(&self, link: &MarkdownLink<'_>) -> Option<String> {
        let file = find_matching_file(self.files, link.target)?;
        let path = self.paths.path(file.route().value());
        Some(format!("[{}]({})", link.description, path))
    }
}
