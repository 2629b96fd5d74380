//! Markdown HTML Converter
//!
//! This library converts a content item's markdown body into HTML ready for
//! publishing, rewiring intra-site links so they stay valid once the site's
//! output layout is applied.
//!
//! # Architecture
//!
//! The library is structured into several modules:
//! - `model`: items, files and the routes that identify them
//! - `paths`: output path providers (prefix, relative, closures)
//! - `extensions`: pluggable pre-render transforms (audio players, file lists)
//! - `links`: link rewiring against the item's files
//! - `render`: markdown to HTML rendering using pulldown-cmark
//! - `converter`: the conversion pipeline tying the stages together
//! - `error`: error and warning types
//!
//! # Example
//!
//! ```rust
//! use markdown_html_converter::{Converter, File, Item, PrefixPathProvider};
//!
//! let item = Item::new("docs/intro", "See [doc](readme.md) for details.")
//!     .with_files([File::new("docs/intro/files/readme.md")]);
//!
//! let html = Converter::new()
//!     .convert_to_html(&PrefixPathProvider::new("/out"), &item)
//!     .expect("conversion never fails");
//!
//! assert_eq!(
//!     html,
//!     "<p>See <a href=\"/out/docs/intro/files/readme.md\">doc</a> for details.</p>\n"
//! );
//! ```

// Module declarations
pub mod converter;
pub mod error;
pub mod extensions;
pub mod links;
pub mod model;
pub mod paths;
pub mod render;

// Re-export main types for convenience
pub use converter::{Conversion, Converter, ConverterOptions};
pub use error::{ConversionError, ExtensionError, ExtensionWarning};
pub use extensions::{Extension, ExtensionContext};
pub use links::{LinkRewriter, ReplacementStrategy};
pub use model::{File, Item, Route};
pub use paths::{PathProvider, PrefixPathProvider, RelativePathProvider};
pub use render::{CommonMarkRenderer, MarkdownRenderer, RenderOptions};
