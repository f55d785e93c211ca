//! Benchmarks for readmark parsing and rendering performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic articles mixing every block kind.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Creates a synthetic article with the given number of sections.
fn create_test_article(section_count: usize) -> String {
    let mut content = String::new();

    for i in 0..section_count {
        content.push_str(&format!("## Section {} **Overview**\n\n", i + 1));
        content.push_str(
            "Readers skim long articles, so every section opens with a short\n\
             summary that links to [the reference](https://example.com/ref) and\n\
             calls out **key terms** inline.\n\n",
        );
        content.push_str(&format!("### Details for part {}\n\n", i + 1));
        content.push_str("> Quoted insight that spans\n> two source lines.\n\n");
        content.push_str("- First point\n- Second point with **bold**\n* Third point\n\n");
        content.push_str("1. Step one\n2. Step two\n3. Step [three](https://example.com/3)\n\n");
        content.push_str("---\n\n");
    }

    content
}

/// Benchmark slug generation.
fn bench_slug(c: &mut Criterion) {
    c.bench_function("slug_heading", |b| {
        b.iter(|| readmark::slug(black_box("The **Quick**, Brown Fox: Jumps Over 2 Lazy Dogs!")));
    });
}

/// Benchmark inline resolution.
fn bench_inline(c: &mut Criterion) {
    let text = "Mix of **bold**, [links](https://example.com) and plain text, \
                repeated **twice** with [another](https://example.org) link.";

    c.bench_function("resolve_inline", |b| {
        b.iter(|| readmark::resolve_inline(black_box(text)));
    });
}

/// Benchmark article assembly at various sizes.
fn bench_assemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble");

    for section_count in [1, 10, 100].iter() {
        let article = create_test_article(*section_count);

        group.bench_function(format!("{}_sections", section_count), |b| {
            b.iter(|| readmark::assemble(black_box(&article)));
        });
    }

    group.finish();
}

/// Benchmark HTML rendering with a table of contents.
fn bench_render_html(c: &mut Criterion) {
    let doc = readmark::assemble(&create_test_article(50));
    let options = readmark::RenderOptions::new().with_toc(true);

    c.bench_function("render_html_50_sections", |b| {
        b.iter(|| readmark::render::to_html(black_box(&doc), &options).unwrap());
    });
}

criterion_group!(
    benches,
    bench_slug,
    bench_inline,
    bench_assemble,
    bench_render_html,
);
criterion_main!(benches);
