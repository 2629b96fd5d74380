//! Benchmarks for link rewiring and the full conversion pipeline.
//!
//! Run with: cargo bench

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use markdown_html_converter::links::{LinkRewriter, ReplacementStrategy};
use markdown_html_converter::{Converter, File, Item, PrefixPathProvider};

/// Item with `files` attachments and a paragraph linking each of them.
fn sample_item(files: usize) -> Item {
    let mut content = String::from("# Benchmark\n\n");
    let mut attachments = Vec::with_capacity(files);

    for i in 0..files {
        content.push_str(&format!(
            "Paragraph {i} links to [attachment {i}](files/attachment-{i}.pdf) \
             and to [the web](https://example.com/{i}).\n\n"
        ));
        attachments.push(File::new(format!("docs/bench/files/attachment-{i}.pdf").as_str()));
    }

    Item::new("docs/bench", content).with_files(attachments)
}

fn bench_rewrite_first_occurrence(c: &mut Criterion) {
    let item = sample_item(100);
    let paths = PrefixPathProvider::new("/out");

    c.bench_function("rewrite_first_occurrence_100", |b| {
        b.iter(|| LinkRewriter::new(&paths, item.files()).rewrite(black_box(&item.content)));
    });
}

fn bench_rewrite_positional(c: &mut Criterion) {
    let item = sample_item(100);
    let paths = PrefixPathProvider::new("/out");

    c.bench_function("rewrite_positional_100", |b| {
        b.iter(|| {
            LinkRewriter::new(&paths, item.files())
                .with_strategy(ReplacementStrategy::Positional)
                .rewrite(black_box(&item.content))
        });
    });
}

fn bench_convert(c: &mut Criterion) {
    let item = sample_item(100);
    let paths = PrefixPathProvider::new("/out");
    let converter = Converter::new();

    c.bench_function("convert_100", |b| {
        b.iter(|| converter.convert(&paths, black_box(&item)));
    });
}

criterion_group!(
    benches,
    bench_rewrite_first_occurrence,
    bench_rewrite_positional,
    bench_convert
);
criterion_main!(benches);
