// File: crates/insight-core/src/render.rs
// Summary: Headless rendering of a single chart using Skia CPU raster surfaces.

use anyhow::{Context, Result};
use skia_safe as skia;
use tracing::trace;

use crate::chart::{ChartComponent, DrawContext};
use crate::geometry::Point;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::tooltip::draw_tooltip;
use crate::types::{Size, HEIGHT, WIDTH};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub theme: Theme,
    pub draw_labels: bool,
    /// Device pixel ratio; the surface is `dpr` times the logical size.
    pub dpr: f32,
    /// Logical pointer position. When set, the chart's tooltip for that
    /// point is drawn on top.
    pub pointer: Option<(f32, f32)>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            theme: Theme::default(),
            draw_labels: true,
            dpr: 1.0,
            pointer: None,
        }
    }
}

impl RenderOptions {
    fn logical_size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }

    fn dpr(&self) -> f32 {
        if self.dpr.is_finite() && self.dpr > 0.0 { self.dpr } else { 1.0 }
    }

    /// Backing surface dimensions in device pixels, or None when empty.
    fn device_size(&self) -> Option<(i32, i32)> {
        if self.width <= 0 || self.height <= 0 {
            return None;
        }
        let dpr = self.dpr();
        let w = (self.width as f32 * dpr).round() as i32;
        let h = (self.height as f32 * dpr).round() as i32;
        (w > 0 && h > 0).then_some((w, h))
    }
}

/// Create a raster surface of `(w, h)` device pixels.
pub(crate) fn raster_surface(w: i32, h: i32) -> Result<skia::Surface> {
    skia::surfaces::raster_n32_premul((w, h)).ok_or_else(|| anyhow::anyhow!("failed to create raster surface {w}x{h}"))
}

/// Encode the surface contents as PNG.
pub(crate) fn encode_png(surface: &mut skia::Surface) -> Result<Vec<u8>> {
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Copy the surface out as tightly packed RGBA8: (pixels, width, height, stride).
pub(crate) fn read_rgba8(surface: &mut skia::Surface) -> Result<(Vec<u8>, u32, u32, usize)> {
    let (w, h) = (surface.width(), surface.height());
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Premul, None);
    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        anyhow::bail!("read_pixels failed for {w}x{h} surface");
    }
    Ok((pixels, w as u32, h as u32, stride))
}

/// Draw `chart` filling the logical size, plus its tooltip if a pointer is given.
fn paint(canvas: &skia::Canvas, chart: &dyn ChartComponent, opts: &RenderOptions) {
    let size = opts.logical_size();
    let text = TextShaper::new();
    canvas.clear(opts.theme.background);
    canvas.save();
    canvas.scale((opts.dpr(), opts.dpr()));

    let hover = opts.pointer.and_then(|(x, y)| chart.hit_test(size, Point::new(x, y)).map(|d| (Point::new(x, y), d)));
    let ctx = DrawContext { theme: &opts.theme, text: &text, draw_labels: opts.draw_labels, hover: hover.as_ref().map(|(_, d)| d) };
    chart.draw(canvas, size, &ctx);
    if let Some((at, data)) = &hover {
        draw_tooltip(canvas, &ctx, data.anchor.unwrap_or(*at), data, size);
    }
    canvas.restore();
    trace!(kind = %chart.kind(), width = opts.width, height = opts.height, "rendered chart");
}

/// Render to RGBA8 pixels. A zero-area request yields an empty buffer.
pub fn render_to_rgba8(chart: &dyn ChartComponent, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
    let Some((w, h)) = opts.device_size() else {
        return Ok((Vec::new(), 0, 0, 0));
    };
    let mut surface = raster_surface(w, h)?;
    paint(surface.canvas(), chart, opts);
    read_rgba8(&mut surface)
}

/// Render to PNG bytes. A zero-area request yields an empty vector.
pub fn render_to_png_bytes(chart: &dyn ChartComponent, opts: &RenderOptions) -> Result<Vec<u8>> {
    let Some((w, h)) = opts.device_size() else {
        return Ok(Vec::new());
    };
    let mut surface = raster_surface(w, h)?;
    paint(surface.canvas(), chart, opts);
    encode_png(&mut surface)
}

/// Render the chart to a PNG at `output_png_path`. Nothing is written for a
/// zero-area request.
pub fn render_to_png(
    chart: &dyn ChartComponent,
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let bytes = render_to_png_bytes(chart, opts)?;
    if bytes.is_empty() {
        return Ok(());
    }
    let path = output_png_path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    std::fs::write(path, &bytes).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
