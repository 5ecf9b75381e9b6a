// File: crates/insight-core/src/chart/pie.rs
// Summary: Donut chart of browser usage with arc labels.

use skia_safe as skia;

use super::{stroke_paint, ChartComponent, ChartKind, DrawContext};
use crate::data::{browser_usage, BrowserUsage};
use crate::geometry::Point;
use crate::text::Anchor;
use crate::tooltip::{TooltipData, TooltipLine};
use crate::types::{Margin, Size};

const START_ANGLE: f32 = -90.0;
/// Arcs narrower than this many degrees get no label.
const MIN_LABEL_SWEEP: f32 = 12.0;

#[derive(Clone, Debug)]
pub struct PieChart {
    pub data: Vec<BrowserUsage>,
    pub margin: Margin,
    pub donut_thickness: f32,
}

impl Default for PieChart {
    fn default() -> Self {
        Self { data: browser_usage(), margin: Margin::new(20, 20, 20, 20), donut_thickness: 50.0 }
    }
}

struct Arc {
    index: usize,
    start: f32,
    sweep: f32,
}

struct Frame {
    center: Point,
    radius: f32,
    thickness: f32,
}

impl PieChart {
    pub fn with_data(mut self, data: Vec<BrowserUsage>) -> Self {
        self.data = data;
        self
    }

    fn frame(&self, size: Size) -> Option<Frame> {
        if size.is_empty() {
            return None;
        }
        let (w, h) = self.margin.inner(size);
        let radius = w.min(h) * 0.5;
        if radius <= 0.0 {
            return None;
        }
        let center = Point::new(self.margin.left as f32 + w * 0.5, self.margin.top as f32 + h * 0.5);
        Some(Frame { center, radius, thickness: self.donut_thickness.min(radius).max(1.0) })
    }

    fn arcs(&self) -> Vec<Arc> {
        let total: f64 = self.data.iter().map(|d| d.usage.max(0.0)).sum();
        if total <= 0.0 {
            return Vec::new();
        }
        let mut start = START_ANGLE;
        self.data
            .iter()
            .enumerate()
            .map(|(index, d)| {
                let sweep = (d.usage.max(0.0) / total * 360.0) as f32;
                let arc = Arc { index, start, sweep };
                start += sweep;
                arc
            })
            .collect()
    }
}

impl ChartComponent for PieChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Pie
    }

    fn draw(&self, canvas: &skia::Canvas, size: Size, ctx: &DrawContext) {
        let Some(f) = self.frame(size) else { return };
        let mid = f.radius - f.thickness * 0.5;
        let oval = skia::Rect::from_ltrb(f.center.x - mid, f.center.y - mid, f.center.x + mid, f.center.y + mid);
        let hovered = ctx.hover.map(|h| h.title.as_str());

        for arc in self.arcs() {
            if arc.sweep <= 0.0 {
                continue;
            }
            let d = &self.data[arc.index];
            let mut paint = stroke_paint(ctx.theme.series_color(arc.index), f.thickness);
            paint.set_stroke_cap(skia::paint::Cap::Butt);
            if hovered.is_some() && hovered != Some(d.label.as_str()) {
                paint.set_alpha_f(0.5);
            }
            canvas.draw_arc(oval, arc.start, arc.sweep, false, &paint);

            if ctx.draw_labels && arc.sweep >= MIN_LABEL_SWEEP {
                let a = (arc.start + arc.sweep * 0.5).to_radians();
                let (lx, ly) = (f.center.x + mid * a.cos(), f.center.y + mid * a.sin());
                ctx.text.draw(canvas, &d.label, lx, ly + 4.0, 11.0, ctx.theme.tooltip_text, Anchor::Middle);
            }
        }
    }

    fn hit_test(&self, size: Size, at: Point) -> Option<TooltipData> {
        let f = self.frame(size)?;
        let (dx, dy) = (at.x - f.center.x, at.y - f.center.y);
        let r = (dx * dx + dy * dy).sqrt();
        if r > f.radius || r < f.radius - f.thickness {
            return None;
        }
        let angle = (dy.atan2(dx).to_degrees() - START_ANGLE).rem_euclid(360.0);
        let arc = self
            .arcs()
            .into_iter()
            .find(|a| angle >= a.start - START_ANGLE && angle < a.start - START_ANGLE + a.sweep)?;
        let d = &self.data[arc.index];
        Some(TooltipData::new(d.label.clone()).line(TooltipLine::new("Usage", format!("{:.2}%", d.usage))))
    }
}
