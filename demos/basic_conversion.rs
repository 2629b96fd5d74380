//! Basic conversion example demonstrating the markdown to HTML pipeline
//!
//! Run with `RUST_LOG=debug cargo run --example basic_conversion` to see the
//! link replacements and extension warnings as they happen.

use markdown_html_converter::converter::Converter;
use markdown_html_converter::model::{File, Item};
use markdown_html_converter::paths::{PrefixPathProvider, RelativePathProvider};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Markdown HTML Converter - Basic Examples ===\n");

    // Example 1: Link rewiring
    example_1();

    // Example 2: Audio and file listing extensions
    example_2();

    // Example 3: Failing extension
    example_3();
}

fn example_1() {
    println!("Example 1: Link rewiring with absolute and relative paths");
    let item = Item::new(
        "documents/guide",
        "See [the manual](manual.pdf) and [the website](https://example.com).",
    )
    .with_files([File::new("documents/guide/files/manual.pdf")]);
    println!("Input markdown:\n{}\n", item.content);

    let converter = Converter::new();
    let html = converter
        .convert_to_html(&PrefixPathProvider::new("/out"), &item)
        .expect("Conversion failed");
    println!("Output HTML (absolute):\n{}", html);

    let html = converter
        .convert_to_html(&RelativePathProvider::new(item.route().clone()), &item)
        .expect("Conversion failed");
    println!("Output HTML (relative):\n{}", html);
    println!("---\n");
}

fn example_2() {
    println!("Example 2: Audio and file listing extensions");
    let item = Item::new(
        "music/album",
        "# Album\n\naudio: [Opening](opening.mp3)\n\nfiles: [Downloads](files)\n",
    )
    .with_files([
        File::new("music/album/files/opening.mp3"),
        File::new("music/album/files/booklet.pdf"),
    ]);
    println!("Input markdown:\n{}\n", item.content);

    let conversion = Converter::new()
        .convert(&PrefixPathProvider::new("/out"), &item)
        .expect("Conversion failed");
    println!("Output HTML:\n{}", conversion.html);
    println!("---\n");
}

fn example_3() {
    println!("Example 3: Failing extension (content passes through)");
    let item = Item::new(
        "music/album",
        "audio: [Liner notes](notes.txt)\n\nRead the [notes](notes.txt).",
    )
    .with_files([File::new("music/album/files/notes.txt")]);
    println!("Input markdown:\n{}\n", item.content);

    let conversion = Converter::new()
        .convert(&PrefixPathProvider::new("/out"), &item)
        .expect("Conversion failed");
    println!("Output HTML:\n{}", conversion.html);
    for warning in &conversion.warnings {
        println!("Warning: {}", warning);
    }
    println!("---\n");
}
