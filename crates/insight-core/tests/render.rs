// File: crates/insight-core/tests/render.rs
// Purpose: Every chart kind renders to PNG and RGBA at normal and degenerate sizes.

use insight_core::chart::{BarChart, GlyphKind, TimeSeriesChart};
use insight_core::data::BarContent;
use insight_core::{render_to_png_bytes, render_to_rgba8, ChartKind, GridConfig, GridMetrics, RenderOptions, ResponsiveGrid, Theme};

const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

fn opts(width: i32, height: i32) -> RenderOptions {
    RenderOptions { width, height, draw_labels: false, ..RenderOptions::default() }
}

#[test]
fn every_kind_renders_png() {
    for kind in ChartKind::ALL {
        let chart = kind.component();
        let bytes = render_to_png_bytes(chart.as_ref(), &opts(320, 240)).expect("render");
        assert!(bytes.starts_with(&PNG_MAGIC), "{kind} did not produce a PNG");
        let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
        assert_eq!(img.dimensions(), (320, 240));
    }
}

#[test]
fn every_kind_tolerates_degenerate_sizes() {
    for kind in ChartKind::ALL {
        let chart = kind.component();
        for (w, h) in [(0, 0), (0, 200), (200, 0), (-5, 100)] {
            let bytes = render_to_png_bytes(chart.as_ref(), &opts(w, h)).expect("render");
            assert!(bytes.is_empty(), "{kind} at {w}x{h}");
            let (px, pw, ph, stride) = render_to_rgba8(chart.as_ref(), &opts(w, h)).expect("rgba");
            assert!(px.is_empty());
            assert_eq!((pw, ph, stride), (0, 0, 0));
        }
        // smaller than the margins: background only, no panic
        let (px, ..) = render_to_rgba8(chart.as_ref(), &opts(12, 12)).expect("tiny");
        assert_eq!(px.len(), 12 * 12 * 4);
    }
}

#[test]
fn rgba_buffer_shape_and_background() {
    let chart = BarChart::default();
    let o = opts(200, 100);
    let (px, w, h, stride) = render_to_rgba8(&chart, &o).expect("rgba render");
    assert_eq!((w, h), (200, 100));
    assert_eq!(stride, w as usize * 4);
    assert_eq!(px.len(), stride * h as usize);

    // top-left pixel sits in the margin and carries the background color
    let bg = o.theme.background;
    assert_eq!(&px[..4], &[bg.r(), bg.g(), bg.b(), 255]);
}

#[test]
fn device_pixel_ratio_scales_the_surface() {
    let chart = TimeSeriesChart::default().with_glyph(GlyphKind::Star);
    let o = RenderOptions { dpr: 2.0, ..opts(150, 100) };
    let (_, w, h, _) = render_to_rgba8(&chart, &o).expect("rgba render");
    assert_eq!((w, h), (300, 200));
}

#[test]
fn content_override_changes_pixels() {
    let o = opts(300, 200);
    let default = render_to_rgba8(&BarChart::default(), &o).expect("default").0;
    let letters = render_to_rgba8(&BarChart::default().with_content(BarContent::letter_frequency()), &o).expect("letters").0;
    assert_ne!(default, letters);
}

#[test]
fn hovered_render_draws_tooltip() {
    let chart = BarChart::default();
    let plain = render_to_rgba8(&chart, &opts(387, 470)).expect("plain").0;
    let hovered = RenderOptions { pointer: Some((80.0, 420.0)), ..opts(387, 470) };
    let with_tip = render_to_rgba8(&chart, &hovered).expect("hovered").0;
    assert_ne!(plain, with_tip);
}

#[test]
fn dashboard_composites_into_one_frame() {
    let mut grid = ResponsiveGrid::new(GridConfig::default(), GridMetrics::default(), insight_core::default_views())
        .expect("grid");
    assert!(grid.render_to_png_bytes(&Theme::dark(), false).expect("empty frame").is_empty());

    grid.relayout(1000);
    let bytes = grid.render_to_png_bytes(&Theme::dark(), false).expect("frame");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (1000, grid.content_height()));

    let out = tempfile::tempdir().expect("temp dir");
    let path = out.path().join("nested/bar.png");
    insight_core::render_to_png(&BarChart::default(), &opts(120, 90), &path).expect("write png");
    assert!(std::fs::read(&path).expect("read png").starts_with(&PNG_MAGIC));
}
