// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use render_folio::gallery::PROJECTS;
use render_folio::ui::gallery_grid::{column_count, distribute};
use std::hint::black_box;

fn gallery_layout_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_layout");

    let heights: Vec<f32> = PROJECTS
        .iter()
        .flat_map(|project| project.items.iter())
        .map(|item| 400.0 * item.estimated_aspect())
        .collect();

    for width in [640.0_f32, 900.0, 1280.0] {
        let columns = column_count(width);
        group.bench_function(format!("distribute_{columns}_columns"), |b| {
            b.iter(|| black_box(distribute(black_box(&heights), columns)));
        });
    }

    let long: Vec<f32> = (0..500).map(|i| 200.0 + (i % 7) as f32 * 40.0).collect();
    group.bench_function("distribute_500_items", |b| {
        b.iter(|| black_box(distribute(black_box(&long), 3)));
    });

    group.finish();
}

criterion_group!(benches, gallery_layout_benchmark);
criterion_main!(benches);
