// File: crates/insight-core/src/chart/threshold.rs
// Summary: Two-series threshold chart; shades the gap by which series is on top.

use skia_safe as skia;

use super::{fill_paint, stroke_paint, ChartComponent, ChartKind, DrawContext};
use crate::axis::{draw_grid_columns, draw_grid_rows, format_tick, Axis, Tick};
use crate::data::{city_temperature, City, CityTemperature};
use crate::geometry::Point;
use crate::scale::{LinearScale, TimeScale};
use crate::tooltip::{TooltipData, TooltipLine};
use crate::types::{Margin, Size};

#[derive(Clone, Debug)]
pub struct ThresholdChart {
    pub rows: Vec<CityTemperature>,
    /// Series whose excess over `lower` is shaded with the theme's `above` color.
    pub upper: City,
    pub lower: City,
    pub margin: Margin,
}

impl Default for ThresholdChart {
    fn default() -> Self {
        Self {
            rows: city_temperature().to_vec(),
            upper: City::NewYork,
            lower: City::SanFrancisco,
            margin: Margin::new(40, 30, 50, 40),
        }
    }
}

struct Frame {
    x: TimeScale,
    y: LinearScale,
    x_max: f32,
    y_max: f32,
}

impl ThresholdChart {
    pub fn with_rows(mut self, rows: Vec<CityTemperature>) -> Self {
        self.rows = rows;
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
        let first = self.rows.first()?;
        let last = self.rows.last()?;
        let (mut lo, mut hi) = (f64::INFINITY, f64::NEG_INFINITY);
        for r in &self.rows {
            for c in [self.upper, self.lower] {
                lo = lo.min(r.temperature(c));
                hi = hi.max(r.temperature(c));
            }
        }
        let x = TimeScale::new((first.date, last.date), (0.0, x_max));
        let y = LinearScale::new((lo, hi), (y_max, 0.0)).nice(8);
        Some(Frame { x, y, x_max, y_max })
    }

    fn points(&self, f: &Frame, city: City) -> Vec<(f32, f32)> {
        self.rows.iter().map(|r| (f.x.map(r.date), f.y.map(r.temperature(city)))).collect()
    }
}

/// Shade between two polylines segment by segment, splitting at crossings.
fn shade_between(canvas: &skia::Canvas, upper: &[(f32, f32)], lower: &[(f32, f32)], above: &skia::Paint, below: &skia::Paint) {
    for i in 1..upper.len().min(lower.len()) {
        let (u0, u1, l0, l1) = (upper[i - 1], upper[i], lower[i - 1], lower[i]);
        // screen y grows downward: upper is on top when its y is smaller
        let d0 = l0.1 - u0.1;
        let d1 = l1.1 - u1.1;
        let paint_for = |d: f32| if d >= 0.0 { above } else { below };
        if (d0 >= 0.0) == (d1 >= 0.0) || (d0 - d1).abs() < f32::EPSILON {
            let mut path = skia::PathBuilder::new();
            path.move_to(u0).line_to(u1).line_to(l1).line_to(l0).close();
            canvas.draw_path(&path.snapshot(), paint_for(d0 + d1));
        } else {
            let t = d0 / (d0 - d1);
            let cross = (u0.0 + (u1.0 - u0.0) * t, u0.1 + (u1.1 - u0.1) * t);
            let mut left = skia::PathBuilder::new();
            left.move_to(u0).line_to(cross).line_to(l0).close();
            canvas.draw_path(&left.snapshot(), paint_for(d0));
            let mut right = skia::PathBuilder::new();
            right.move_to(cross).line_to(u1).line_to(l1).close();
            canvas.draw_path(&right.snapshot(), paint_for(d1));
        }
    }
}

fn polyline(canvas: &skia::Canvas, pts: &[(f32, f32)], paint: &skia::Paint) {
    if pts.len() < 2 {
        return;
    }
    let mut path = skia::PathBuilder::new();
    path.move_to(pts[0]);
    for &p in &pts[1..] {
        path.line_to(p);
    }
    canvas.draw_path(&path.snapshot(), paint);
}

impl ChartComponent for ThresholdChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Threshold
    }

    fn draw(&self, canvas: &skia::Canvas, size: Size, ctx: &DrawContext) {
        let Some(f) = self.frame(size) else { return };
        canvas.save();
        canvas.translate((self.margin.left as f32, self.margin.top as f32));

        let y_ticks = f.y.ticks(8);
        let dates = f.x.ticks(6);
        let rows: Vec<f32> = y_ticks.iter().map(|&v| f.y.map(v)).collect();
        let cols: Vec<f32> = dates.iter().map(|&d| f.x.map(d)).collect();
        draw_grid_rows(canvas, ctx, (0.0, f.x_max), &rows);
        draw_grid_columns(canvas, ctx, (0.0, f.y_max), &cols);

        let upper = self.points(&f, self.upper);
        let lower = self.points(&f, self.lower);
        shade_between(canvas, &upper, &lower, &fill_paint(ctx.theme.above), &fill_paint(ctx.theme.below));

        polyline(canvas, &upper, &stroke_paint(ctx.theme.axis_line, 1.0));
        let mut dashed = stroke_paint(ctx.theme.axis_line, 1.0);
        dashed.set_path_effect(skia::PathEffect::dash(&[4.0, 2.0], 0.0));
        polyline(canvas, &lower, &dashed);

        if let Some(anchor) = ctx.hover.and_then(|h| h.anchor) {
            let x = anchor.x - self.margin.left as f32;
            canvas.draw_line((x, 0.0), (x, f.y_max), &stroke_paint(ctx.theme.crosshair, 1.0));
        }

        let x_ticks: Vec<Tick> = dates.iter().map(|&d| Tick::new(f.x.map(d), d.format("%b %d").to_string())).collect();
        Axis::bottom().draw(canvas, ctx, f.y_max, (0.0, f.x_max), &x_ticks);
        let y_axis_ticks: Vec<Tick> = y_ticks.iter().map(|&v| Tick::new(f.y.map(v), format_tick(v))).collect();
        Axis::left().with_label("Temperature (°F)").draw(canvas, ctx, 0.0, (0.0, f.y_max), &y_axis_ticks);

        canvas.restore();
    }

    fn hit_test(&self, size: Size, at: Point) -> Option<TooltipData> {
        let f = self.frame(size)?;
        let lx = at.x - self.margin.left as f32;
        let ly = at.y - self.margin.top as f32;
        if lx < 0.0 || lx > f.x_max || ly < 0.0 || ly > f.y_max {
            return None;
        }
        let row = self
            .rows
            .iter()
            .min_by(|a, b| (f.x.map(a.date) - lx).abs().total_cmp(&(f.x.map(b.date) - lx).abs()))?;
        let hi = row.temperature(self.upper);
        let lo = row.temperature(self.lower);
        let anchor = Point::new(f.x.map(row.date) + self.margin.left as f32, f.y.map(hi) + self.margin.top as f32);
        Some(
            TooltipData::new(row.date.format("%a %b %d %Y").to_string())
                .line(TooltipLine::new(self.upper.name(), format!("{hi}° F")))
                .line(TooltipLine::new(self.lower.name(), format!("{lo}° F")))
                .line(TooltipLine::new("Difference", format!("{}° F", format_tick(hi - lo))))
                .anchored_at(anchor),
        )
    }
}
