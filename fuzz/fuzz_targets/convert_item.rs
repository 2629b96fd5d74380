#![no_main]

use libfuzzer_sys::fuzz_target;
use markdown_html_converter::converter::Converter;
use markdown_html_converter::model::{File, Item};
use markdown_html_converter::paths::PrefixPathProvider;

fuzz_target!(|data: &[u8]| {
    let content = String::from_utf8_lossy(data);
    let item = Item::new("docs/item", content.into_owned()).with_files([
        File::new("docs/item/files/theme.mp3"),
        File::new("docs/item/files/notes.txt"),
        File::new("docs/item/files/readme.md"),
    ]);

    // Must never fail or panic, whatever the extensions run into
    let conversion = Converter::new().convert(&PrefixPathProvider::new("/out"), &item);
    assert!(conversion.is_ok());
});
