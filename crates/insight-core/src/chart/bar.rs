// File: crates/insight-core/src/chart/bar.rs
// Summary: Category bar chart with grid, axes, and per-bar tooltips.

use skia_safe as skia;

use super::{fill_paint, ChartComponent, ChartKind, DrawContext};
use crate::axis::{draw_grid_columns, draw_grid_rows, format_tick, Axis, Tick};
use crate::data::BarContent;
use crate::geometry::Point;
use crate::scale::{BandScale, LinearScale};
use crate::tooltip::{TooltipData, TooltipLine};
use crate::types::{Margin, Size};

const Y_TICKS: usize = 10;

#[derive(Clone, Debug)]
pub struct BarChart {
    pub content: BarContent,
    pub margin: Margin,
}

impl Default for BarChart {
    fn default() -> Self {
        Self { content: BarContent::default(), margin: Margin::new(20, 20, 20, 40) }
    }
}

struct Frame {
    x: BandScale,
    y: LinearScale,
    x_max: f32,
    y_max: f32,
}

impl BarChart {
    /// Replace the default mock content.
    pub fn with_content(mut self, content: BarContent) -> Self {
        self.content = content;
        self
    }

    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    fn frame(&self, size: Size) -> Option<Frame> {
        if size.is_empty() {
            return None;
        }
        let (x_max, y_max) = self.margin.inner(size);
        if x_max <= 0.0 || y_max <= 0.0 {
            return None;
        }
        let x = BandScale::new(self.content.data.len(), (0.0, x_max), self.content.padding, true);
        let y = LinearScale::new((0.0, self.content.max_value()), (y_max, 0.0)).nice(Y_TICKS).round(true);
        Some(Frame { x, y, x_max, y_max })
    }

    /// Bar rectangle for datum `i`, plot-local.
    fn bar_rect(&self, f: &Frame, i: usize) -> Option<skia::Rect> {
        let d = self.content.data.get(i)?;
        let left = f.x.position(i)?;
        let bar_height = (f.y_max - f.y.map(d.value)).max(0.0);
        Some(skia::Rect::from_xywh(left, f.y_max - bar_height, f.x.bandwidth(), bar_height))
    }
}

impl ChartComponent for BarChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Bar
    }

    fn draw(&self, canvas: &skia::Canvas, size: Size, ctx: &DrawContext) {
        let Some(f) = self.frame(size) else { return };
        canvas.save();
        canvas.translate((self.margin.left as f32, self.margin.top as f32));

        let y_ticks = f.y.ticks(Y_TICKS);
        let rows: Vec<f32> = y_ticks.iter().map(|&v| f.y.map(v)).collect();
        let half = f.x.bandwidth() * 0.5;
        let cols: Vec<f32> = (0..f.x.len()).filter_map(|i| f.x.position(i)).map(|x| x + half).collect();
        draw_grid_rows(canvas, ctx, (0.0, f.x_max), &rows);
        draw_grid_columns(canvas, ctx, (0.0, f.y_max), &cols);

        let hovered = ctx.hover.map(|h| h.title.as_str());
        for (i, d) in self.content.data.iter().enumerate() {
            let Some(rect) = self.bar_rect(&f, i) else { continue };
            let mut paint = fill_paint(self.content.series.fill);
            if hovered == Some(d.name.as_str()) {
                paint.set_alpha_f(0.75);
            }
            canvas.draw_rect(rect, &paint);
        }

        let x_ticks: Vec<Tick> = self
            .content
            .data
            .iter()
            .enumerate()
            .filter_map(|(i, d)| f.x.position(i).map(|x| Tick::new(x + half, d.name.clone())))
            .collect();
        Axis::bottom().draw(canvas, ctx, f.y_max, (0.0, f.x_max), &x_ticks);
        let y_axis_ticks: Vec<Tick> = y_ticks.iter().map(|&v| Tick::new(f.y.map(v), format_tick(v))).collect();
        Axis::left().draw(canvas, ctx, 0.0, (0.0, f.y_max), &y_axis_ticks);

        canvas.restore();
    }

    fn hit_test(&self, size: Size, at: Point) -> Option<TooltipData> {
        let f = self.frame(size)?;
        let local = Point::new(at.x - self.margin.left as f32, at.y - self.margin.top as f32);
        let i = f.x.index_at(local.x)?;
        let rect = self.bar_rect(&f, i)?;
        if local.y < rect.top || local.y > rect.bottom {
            return None;
        }
        let d = &self.content.data[i];
        Some(
            TooltipData::new(d.name.clone())
                .line(TooltipLine::new(self.content.series.name.clone(), format_tick(d.value))),
        )
    }
}
