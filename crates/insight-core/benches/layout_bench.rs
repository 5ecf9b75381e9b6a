// File: crates/insight-core/benches/layout_bench.rs
// Summary: Layout planning and compaction throughput for growing dashboards.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use insight_core::{compact_vertical, compute_layouts, Breakpoint, GridConfig, GridMetrics, ResponsiveGrid, ViewDescriptor};

fn views(n: usize) -> Vec<ViewDescriptor> {
    let tags = ["bar", "pie", "threshold", "stacked-bar", "time-series"];
    (0..n).map(|i| ViewDescriptor::new(format!("view-{i}"), tags[i % tags.len()])).collect()
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    for &n in &[6usize, 60, 600] {
        let vs = views(n);
        group.bench_function(format!("compute_{n}"), |b| b.iter(|| black_box(compute_layouts(black_box(&vs)))));
        let table = compute_layouts(&vs);
        group.bench_function(format!("compact_lg_{n}"), |b| {
            b.iter(|| black_box(compact_vertical(black_box(table.entries(Breakpoint::Lg)))))
        });
    }
    group.finish();
}

fn bench_relayout(c: &mut Criterion) {
    let mut grid = ResponsiveGrid::new(GridConfig::default(), GridMetrics::default(), views(60)).expect("grid");
    let mut width = 900u32;
    c.bench_function("relayout_60", |b| {
        b.iter(|| {
            width = if width >= 1600 { 900 } else { width + 7 };
            black_box(grid.relayout(width))
        })
    });
}

criterion_group!(benches, bench_layout, bench_relayout);
criterion_main!(benches);
