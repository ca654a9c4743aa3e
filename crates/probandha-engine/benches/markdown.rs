use criterion::{Criterion, criterion_group, criterion_main};
use probandha_engine::render_markdown;
mod common;

fn bench_render_markdown(c: &mut Criterion) {
    let mut group = c.benchmark_group("markdown");
    group.sample_size(10);

    let prose = common::generate_prose(200);
    group.bench_function("render_markdown", |b| {
        b.iter(|| {
            let html = render_markdown(std::hint::black_box(&prose));
            std::hint::black_box(html);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_render_markdown);
criterion_main!(benches);
