//! Markdown to HTML conversion pipeline
//!
//! The [`Converter`] turns one [`Item`] into publishable HTML. It runs a fixed
//! sequence of stages, each consuming the text produced by the previous one:
//!
//! 1. **Extensions**: every registered [`Extension`] in registration order
//!    (by default audio players, then file listings)
//! 2. **Link rewiring**: [`LinkRewriter`] points links at the item's files to
//!    their output paths
//! 3. **Rendering**: the [`MarkdownRenderer`] produces HTML, returned as-is
//!
//! # Failure Tolerance
//!
//! Extension failures are not fatal. A failing extension is logged, reported
//! as an [`ExtensionWarning`] on the [`Conversion`], and the content it was
//! given flows on unchanged. Unresolved links are left alone. As a result
//! [`Converter::convert`] currently always returns `Ok`.
//!
//! # Example
//!
//! ```rust
//! use markdown_html_converter::converter::Converter;
//! use markdown_html_converter::model::{File, Item};
//! use markdown_html_converter::paths::PrefixPathProvider;
//!
//! let item = Item::new("docs/guide", "Read the [manual](manual.pdf).")
//!     .with_files([File::new("docs/guide/files/manual.pdf")]);
//!
//! let converter = Converter::new();
//! let conversion = converter
//!     .convert(&PrefixPathProvider::new("/out"), &item)
//!     .expect("conversion never fails");
//!
//! assert!(conversion.html.contains("href=\"/out/docs/guide/files/manual.pdf\""));
//! assert_eq!(conversion.links_rewritten, 1);
//! assert!(conversion.warnings.is_empty());
//! ```

use crate::error::{ConversionError, ExtensionWarning};
use crate::extensions::{AudioExtension, Extension, ExtensionContext, FilesExtension};
use crate::links::{LinkRewriter, ReplacementStrategy};
use crate::model::Item;
use crate::paths::PathProvider;
use crate::render::{CommonMarkRenderer, MarkdownRenderer, RenderOptions};

/// Converter options
#[derive(Debug, Clone)]
pub struct ConverterOptions {
    /// Register the audio extension
    pub audio: bool,
    /// Register the file listing extension
    pub files: bool,
    /// How rewired links are substituted
    pub replacement: ReplacementStrategy,
    /// Markdown syntax extensions for the default renderer
    pub render: RenderOptions,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            audio: true,
            files: true,
            replacement: ReplacementStrategy::FirstOccurrence,
            render: RenderOptions::default(),
        }
    }
}

/// Result of converting one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Rendered HTML
    pub html: String,
    /// Extension failures that were skipped over, in pipeline order
    pub warnings: Vec<ExtensionWarning>,
    /// Number of links pointed at output paths
    pub links_rewritten: usize,
}

impl Conversion {
    /// Whether any extension stage failed
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Markdown to HTML converter for content items
///
/// A converter is immutable once built and can be shared between threads.
///
/// # Usage
///
/// ```rust
/// use markdown_html_converter::converter::{Converter, ConverterOptions};
/// use markdown_html_converter::links::ReplacementStrategy;
///
/// // Defaults: audio + files extensions, CommonMark rendering
/// let converter = Converter::new();
/// assert_eq!(converter.extension_names(), vec!["audio", "files"]);
///
/// // Custom options
/// let options = ConverterOptions {
///     audio: false,
///     replacement: ReplacementStrategy::Positional,
///     ..Default::default()
/// };
/// let converter = Converter::with_options(options);
/// assert_eq!(converter.extension_names(), vec!["files"]);
/// ```
pub struct Converter {
    extensions: Vec<Box<dyn Extension>>,
    renderer: Box<dyn MarkdownRenderer>,
    replacement: ReplacementStrategy,
}

impl Converter {
    /// Create a converter with default options
    pub fn new() -> Self {
        Self::with_options(ConverterOptions::default())
    }

    /// Create a converter with custom options
    pub fn with_options(options: ConverterOptions) -> Self {
        let mut extensions: Vec<Box<dyn Extension>> = Vec::new();
        if options.audio {
            extensions.push(Box::new(AudioExtension::new()));
        }
        if options.files {
            extensions.push(Box::new(FilesExtension::new()));
        }

        Self {
            extensions,
            renderer: Box::new(CommonMarkRenderer::with_options(options.render)),
            replacement: options.replacement,
        }
    }

    /// Replace the markdown renderer
    pub fn with_renderer(mut self, renderer: impl MarkdownRenderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    /// Append an extension; it runs after all previously registered ones
    pub fn push_extension(&mut self, extension: Box<dyn Extension>) {
        self.extensions.push(extension);
    }

    /// Names of the registered extensions in execution order
    pub fn extension_names(&self) -> Vec<&str> {
        self.extensions.iter().map(|e| e.name()).collect()
    }

    /// Convert an item's markdown to HTML
    ///
    /// # Arguments
    ///
    /// * `paths` - Resolves file routes to output paths
    /// * `item` - The item to convert; it is not modified
    ///
    /// # Errors
    ///
    /// Reserved for fatal failures; no current stage produces one.
    pub fn convert(
        &self,
        paths: &dyn PathProvider,
        item: &Item,
    ) -> Result<Conversion, ConversionError> {
        tracing::debug!(item = %item, "Converting item");

        let ctx = ExtensionContext {
            paths,
            files: item.files(),
        };
        let (content, warnings) = self.apply_extensions(item.content.clone(), &ctx);

        let (content, links_rewritten) = LinkRewriter::new(paths, item.files())
            .with_strategy(self.replacement)
            .rewrite_counted(&content);

        Ok(Conversion {
            html: self.renderer.render(&content),
            warnings,
            links_rewritten,
        })
    }

    /// Convert an item and return only the HTML
    pub fn convert_to_html(
        &self,
        paths: &dyn PathProvider,
        item: &Item,
    ) -> Result<String, ConversionError> {
        self.convert(paths, item).map(|conversion| conversion.html)
    }

    fn apply_extensions(
        &self,
        mut content: String,
        ctx: &ExtensionContext<'_>,
    ) -> (String, Vec<ExtensionWarning>) {
        let mut warnings = Vec::new();

        for extension in &self.extensions {
            match extension.convert(&content, ctx) {
                Ok(converted) => content = converted,
                Err(error) => {
                    tracing::warn!(
                        extension = extension.name(),
                        error = %error,
                        "Error while converting extensions"
                    );
                    warnings.push(ExtensionWarning {
                        extension: extension.name().to_string(),
                        error,
                    });
                }
            }
        }

        (content, warnings)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}
