#![no_main]

use libfuzzer_sys::fuzz_target;
use markdown_html_converter::links::{LinkRewriter, ReplacementStrategy, find_links};
use markdown_html_converter::model::File;
use markdown_html_converter::paths::PrefixPathProvider;

fuzz_target!(|data: &[u8]| {
    let Ok(markdown) = std::str::from_utf8(data) else {
        return;
    };

    // Every found link must be a valid span of the input
    for link in find_links(markdown) {
        assert_eq!(&markdown[link.span.clone()], link.text);
    }

    let files = [
        File::new("docs/item/files/readme.md"),
        File::new("docs/item/files/a b.pdf"),
        File::new("x"),
    ];
    let paths = PrefixPathProvider::new("/out");

    for strategy in [
        ReplacementStrategy::FirstOccurrence,
        ReplacementStrategy::Positional,
    ] {
        let (output, replaced) = LinkRewriter::new(&paths, &files)
            .with_strategy(strategy)
            .rewrite_counted(markdown);
        if replaced == 0 {
            assert_eq!(output, markdown);
        }
    }
});
