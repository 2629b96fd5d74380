//! Output path resolution
//!
//! A [`PathProvider`] maps an internal route value to the path that ends up in
//! the published HTML. Which one to use depends on where the output is served
//! from:
//!
//! - [`PrefixPathProvider`] produces absolute paths below a base prefix
//!   (`/out/docs/item/files/readme.md`, `https://example.com/docs/...`)
//! - [`RelativePathProvider`] produces paths relative to the item being
//!   rendered (`files/readme.md`)
//! - any `Fn(&str) -> String` closure can be used directly
//!
//! Providers must be deterministic: the same route value and base context
//! always yield the same path.
//!
//! Route values are stored decoded (`Slides v2.pptx`), so the bundled
//! providers percent-encode every segment again. A raw space or parenthesis
//! is not allowed in a CommonMark link destination.
//!
//! # Examples
//!
//! ```rust
//! use markdown_html_converter::model::Route;
//! use markdown_html_converter::paths::{PathProvider, PrefixPathProvider, RelativePathProvider};
//!
//! let absolute = PrefixPathProvider::new("/out");
//! assert_eq!(absolute.path("docs/readme.md"), "/out/docs/readme.md");
//!
//! let relative = RelativePathProvider::new(Route::new("docs"));
//! assert_eq!(relative.path("docs/readme.md"), "readme.md");
//!
//! let custom = |route: &str| format!("/static/{route}.html");
//! assert_eq!(custom.path("readme"), "/static/readme.html");
//!
//! assert_eq!(absolute.path("docs/my file.pdf"), "/out/docs/my%20file.pdf");
//! ```

use crate::model::Route;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters escaped inside a single path segment of a link destination
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'(')
    .add(b')')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b']')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Percent-encode each `/`-separated segment of a decoded route value
pub fn encode_route(route: &str) -> String {
    route
        .split('/')
        .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

/// Resolves a route value to an output path
pub trait PathProvider {
    /// Output path for the given route value
    fn path(&self, route: &str) -> String;
}

impl<F> PathProvider for F
where
    F: Fn(&str) -> String,
{
    fn path(&self, route: &str) -> String {
        self(route)
    }
}

/// Joins route values onto a fixed base prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixPathProvider {
    base: String,
}

impl PrefixPathProvider {
    /// Create a provider for the given base (`""` or `"/"` means site root)
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// The base prefix without trailing slash
    pub fn base(&self) -> &str {
        &self.base
    }
}

impl PathProvider for PrefixPathProvider {
    fn path(&self, route: &str) -> String {
        format!(
            "{}/{}",
            self.base,
            encode_route(route.trim_start_matches('/'))
        )
    }
}

/// Resolves routes relative to a base route
///
/// Routes below the base become relative paths; everything else falls back
/// to a root-absolute path so the link still resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativePathProvider {
    base: Route,
}

impl RelativePathProvider {
    /// Create a provider relative to the given route (usually the item's)
    pub fn new(base: Route) -> Self {
        Self { base }
    }
}

impl PathProvider for RelativePathProvider {
    fn path(&self, route: &str) -> String {
        let route = Route::new(route);
        match route.strip_prefix(&self.base) {
            Some(relative) if !relative.is_empty() => encode_route(relative),
            Some(_) => ".".to_string(),
            None => format!("/{}", encode_route(route.value())),
        }
    }
}
