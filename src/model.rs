//! Content model: routes, files and items
//!
//! An [`Item`] is a unit of content with a markdown body and an ordered list
//! of associated [`File`]s. Every file is identified by its [`Route`], a
//! normalized `/`-separated path that knows how to match the (often sloppy)
//! path strings authors write into link targets.
//!
//! # Route Normalization
//!
//! Both route values and candidate strings go through the same normalization:
//!
//! 1. Surrounding whitespace is trimmed
//! 2. Windows separators (`\`) become `/`
//! 3. Percent-escapes are decoded (`my%20file.pdf` -> `my file.pdf`)
//! 4. Empty and `.` segments are dropped, which removes leading `./` and `/`
//!    as well as trailing and doubled slashes
//!
//! # Examples
//!
//! ```rust
//! use markdown_html_converter::model::Route;
//!
//! let route = Route::new("/documents/Sample/files/readme.md");
//! assert_eq!(route.value(), "documents/Sample/files/readme.md");
//!
//! assert!(route.is_match("readme.md"));
//! assert!(route.is_match("./files/readme.md"));
//! assert!(route.is_match("files\\readme.md"));
//! assert!(!route.is_match("me.md"));
//! ```

use percent_encoding::percent_decode_str;
use std::fmt;

/// Normalized path identifying a file or item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Route {
    value: String,
}

impl Route {
    /// Create a route from a raw path, normalizing it
    pub fn new(path: &str) -> Self {
        Self {
            value: normalize(path),
        }
    }

    /// The normalized route value (no leading or trailing slash)
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether this is the root route
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Check whether a candidate path string refers to this route
    ///
    /// The candidate is normalized and compared as a suffix on a segment
    /// boundary: `files/readme.md` matches `docs/item/files/readme.md`, but
    /// `me.md` does not. An empty candidate never matches.
    pub fn is_match(&self, candidate: &str) -> bool {
        let candidate = normalize(candidate);
        if candidate.is_empty() {
            return false;
        }

        ends_with_segments(&self.value, &candidate)
    }

    /// Check whether this route lies strictly below a folder path
    ///
    /// The folder is matched the same way [`Route::is_match`] matches
    /// files, so `files` covers `docs/item/files/a.pdf`. An empty folder
    /// covers every non-root route.
    pub fn is_below(&self, folder: &str) -> bool {
        let folder = normalize(folder);
        if self.value.is_empty() {
            return false;
        }
        if folder.is_empty() {
            return true;
        }

        let mut ancestor = self.parent_value();
        while let Some(current) = ancestor {
            if ends_with_segments(current, &folder) {
                return true;
            }
            ancestor = current.rfind('/').map(|idx| &current[..idx]);
        }

        false
    }

    /// Last path segment, or an empty string for the root route
    pub fn last_segment(&self) -> &str {
        self.value.rsplit('/').next().unwrap_or_default()
    }

    /// File extension of the last segment, lowercased
    pub fn extension(&self) -> Option<String> {
        let segment = self.last_segment();
        let (stem, ext) = segment.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }

    /// Strip a base route from the front of this route
    ///
    /// Returns `None` when the route is not the base itself or below it.
    pub fn strip_prefix(&self, base: &Route) -> Option<&str> {
        if base.value.is_empty() {
            return Some(&self.value);
        }
        if self.value == base.value {
            return Some("");
        }
        self.value
            .strip_prefix(base.value.as_str())
            .and_then(|rest| rest.strip_prefix('/'))
    }

    fn parent_value(&self) -> Option<&str> {
        self.value.rfind('/').map(|idx| &self.value[..idx])
    }
}

impl From<&str> for Route {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.value)
    }
}

/// A file attached to an item
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct File {
    route: Route,
}

impl File {
    /// Create a file from its route
    pub fn new(route: impl Into<Route>) -> Self {
        Self {
            route: route.into(),
        }
    }

    /// The route identifying this file
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Display name (last route segment)
    pub fn name(&self) -> &str {
        self.route.last_segment()
    }
}

/// A content item: markdown body plus associated files
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Item {
    route: Route,
    /// Raw markdown content
    pub content: String,
    files: Vec<File>,
}

impl Item {
    /// Create an item with no files
    pub fn new(route: impl Into<Route>, content: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            content: content.into(),
            files: Vec::new(),
        }
    }

    /// Builder-style variant of [`Item::add_file`] for a whole list
    pub fn with_files(mut self, files: impl IntoIterator<Item = File>) -> Self {
        self.files.extend(files);
        self
    }

    /// Append a file (order is preserved)
    pub fn add_file(&mut self, file: File) {
        self.files.push(file);
    }

    /// The item's own route
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Associated files in insertion order
    pub fn files(&self) -> &[File] {
        &self.files
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.route)
    }
}

/// Return the first file whose route matches the target path
pub fn find_matching_file<'a>(files: &'a [File], target: &str) -> Option<&'a File> {
    files.iter().find(|file| file.route().is_match(target))
}

fn normalize(path: &str) -> String {
    let unified = path.trim().replace('\\', "/");
    let decoded = percent_decode_str(&unified).decode_utf8_lossy();

    decoded
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect::<Vec<_>>()
        .join("/")
}

fn ends_with_segments(value: &str, suffix: &str) -> bool {
    if value == suffix {
        return true;
    }
    value
        .strip_suffix(suffix)
        .is_some_and(|head| head.ends_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalization() {
        assert_eq!(Route::new("/a/b/c.md").value(), "a/b/c.md");
        assert_eq!(Route::new("  ./a//b/./c.md/ ").value(), "a/b/c.md");
        assert_eq!(Route::new("a\\b\\c.md").value(), "a/b/c.md");
        assert_eq!(Route::new("a/my%20file.pdf").value(), "a/my file.pdf");
        assert_eq!(Route::new("/").value(), "");
        assert!(Route::new("").is_empty());
    }

    #[test]
    fn test_is_match_exact_and_suffix() {
        let route = Route::new("docs/item/files/readme.md");

        assert!(route.is_match("docs/item/files/readme.md"));
        assert!(route.is_match("/docs/item/files/readme.md"));
        assert!(route.is_match("files/readme.md"));
        assert!(route.is_match("readme.md"));
        assert!(route.is_match(" readme.md "));
    }

    #[test]
    fn test_is_match_requires_segment_boundary() {
        let route = Route::new("docs/item/files/readme.md");

        assert!(!route.is_match("me.md"));
        assert!(!route.is_match("les/readme.md"));
        assert!(!route.is_match("other/readme.md"));
    }

    #[test]
    fn test_empty_candidate_never_matches() {
        let route = Route::new("docs/readme.md");

        assert!(!route.is_match(""));
        assert!(!route.is_match("   "));
        assert!(!route.is_match("/"));
        assert!(!route.is_match("./"));
    }

    #[test]
    fn test_is_match_decodes_candidates() {
        let route = Route::new("docs/my file.pdf");
        assert!(route.is_match("my%20file.pdf"));
        assert!(route.is_match("docs\\my file.pdf"));
    }

    #[test]
    fn test_is_below() {
        let route = Route::new("docs/item/files/audio/track.mp3");

        assert!(route.is_below("files"));
        assert!(route.is_below("files/audio"));
        assert!(route.is_below("/docs/item/"));
        assert!(route.is_below(""));
        assert!(!route.is_below("track.mp3"));
        assert!(!route.is_below("audio/track.mp3"));
        assert!(!route.is_below("iles"));
        assert!(!Route::new("").is_below(""));
    }

    #[test]
    fn test_segments_and_extension() {
        let route = Route::new("docs/files/Song.MP3");
        assert_eq!(route.last_segment(), "Song.MP3");
        assert_eq!(route.extension(), Some("mp3".to_string()));

        assert_eq!(Route::new("docs/README").extension(), None);
        assert_eq!(Route::new("docs/.hidden").extension(), None);
        assert_eq!(Route::new("").last_segment(), "");
    }

    #[test]
    fn test_strip_prefix() {
        let base = Route::new("docs/item");
        assert_eq!(
            Route::new("docs/item/files/a.pdf").strip_prefix(&base),
            Some("files/a.pdf")
        );
        assert_eq!(Route::new("docs/item").strip_prefix(&base), Some(""));
        assert_eq!(Route::new("docs/items/a.pdf").strip_prefix(&base), None);
        assert_eq!(
            Route::new("x/a.pdf").strip_prefix(&Route::default()),
            Some("x/a.pdf")
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Route::new("docs/item").to_string(), "/docs/item");
        let item = Item::new("docs/item", "# Title");
        assert_eq!(item.to_string(), "/docs/item");
    }

    #[test]
    fn test_find_matching_file_first_wins() {
        let files = vec![
            File::new("a/files/readme.md"),
            File::new("b/files/readme.md"),
            File::new("b/files/other.md"),
        ];

        let found = find_matching_file(&files, "readme.md").expect("should match");
        assert_eq!(found.route().value(), "a/files/readme.md");

        let found = find_matching_file(&files, "b/files/readme.md").expect("should match");
        assert_eq!(found.route().value(), "b/files/readme.md");

        assert!(find_matching_file(&files, "missing.md").is_none());
        assert!(find_matching_file(&[], "readme.md").is_none());
    }

    #[test]
    fn test_item_files_keep_order() {
        let mut item = Item::new("docs/item", "")
            .with_files([File::new("docs/item/files/b.pdf"), File::new("docs/item/files/a.pdf")]);
        item.add_file(File::new("docs/item/files/c.pdf"));

        let names: Vec<&str> = item.files().iter().map(File::name).collect();
        assert_eq!(names, vec!["b.pdf", "a.pdf", "c.pdf"]);
    }

    proptest! {
        #[test]
        fn prop_route_matches_its_own_value(segments in prop::collection::vec("[a-z0-9_-]{1,8}", 1..5)) {
            let path = segments.join("/");
            let route = Route::new(&path);

            prop_assert!(route.is_match(&path));
            let rooted = format!("/{path}");
            prop_assert!(route.is_match(&rooted));
            prop_assert!(route.is_match(route.last_segment()));
        }

        #[test]
        fn prop_normalization_is_idempotent(path in "[a-z./\\\\]{0,24}") {
            let once = Route::new(&path);
            let twice = Route::new(once.value());
            prop_assert_eq!(once, twice);
        }
    }
}
