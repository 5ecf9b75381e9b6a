use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use insight_core::{default_views, render_to_png_bytes, ChartKind, GridConfig, GridMetrics, RenderOptions, ResponsiveGrid, Theme};

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for kind in ChartKind::ALL {
        group.bench_function(kind.tag(), |b| {
            let chart = kind.component();
            let opts = RenderOptions { width: 800, height: 500, draw_labels: false, ..RenderOptions::default() };
            b.iter(|| -> Result<()> {
                let bytes = render_to_png_bytes(chart.as_ref(), &opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

fn bench_dashboard(c: &mut Criterion) {
    let mut grid = ResponsiveGrid::new(GridConfig::default(), GridMetrics::default(), default_views()).expect("grid");
    grid.relayout(1200);
    let theme = Theme::light();
    c.bench_function("dashboard_rgba_1200", |b| {
        b.iter(|| -> Result<()> {
            black_box(grid.render_to_rgba8(&theme, false)?);
            Ok(())
        })
    });
}

criterion_group!(benches, bench_render, bench_dashboard);
criterion_main!(benches);
