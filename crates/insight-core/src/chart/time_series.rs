// File: crates/insight-core/src/chart/time_series.rs
// Summary: XY time-series chart: three city temperature lines, glyphs, crosshair tooltip.

use skia_safe as skia;

use super::{fill_paint, stroke_paint, ChartComponent, ChartKind, DrawContext};
use crate::axis::{draw_grid_columns, draw_grid_rows, format_tick, Axis, Tick};
use crate::data::{city_temperature, temperature_extent, City, CityTemperature};
use crate::geometry::Point;
use crate::scale::{pad, LinearScale, TimeScale};
use crate::tooltip::{TooltipData, TooltipLine};
use crate::types::{Margin, Size};

const NUM_TICKS: usize = 4;

/// Marker drawn at each datum of the glyph series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GlyphKind {
    #[default]
    Circle,
    Star,
    Cross,
}

#[derive(Clone, Debug)]
pub struct TimeSeriesChart {
    pub rows: Vec<CityTemperature>,
    pub glyph: GlyphKind,
    /// City whose data points carry glyphs.
    pub glyph_series: City,
    pub margin: Margin,
}

impl Default for TimeSeriesChart {
    fn default() -> Self {
        Self {
            rows: city_temperature().to_vec(),
            glyph: GlyphKind::Circle,
            glyph_series: City::SanFrancisco,
            margin: Margin::new(10, 30, 30, 50),
        }
    }
}

struct Frame {
    x: TimeScale,
    y: LinearScale,
    x_max: f32,
    y_max: f32,
}

fn city_index(city: City) -> usize {
    City::ALL.iter().position(|&c| c == city).unwrap_or(0)
}

impl TimeSeriesChart {
    pub fn with_rows(mut self, rows: Vec<CityTemperature>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_glyph(mut self, glyph: GlyphKind) -> Self {
        self.glyph = glyph;
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
        let (first, last) = (self.rows.first()?, self.rows.last()?);
        let extent = temperature_extent(&self.rows)?;
        let x = TimeScale::new((first.date, last.date), (0.0, x_max));
        let y = LinearScale::new(pad(extent, 0.5), (y_max, 0.0)).nice(NUM_TICKS);
        Some(Frame { x, y, x_max, y_max })
    }

    fn draw_glyph(&self, canvas: &skia::Canvas, ctx: &DrawContext, (x, y): (f32, f32), color: skia::Color, size: f32) {
        let outline = stroke_paint(ctx.theme.glyph_outline, 2.0);
        match self.glyph {
            GlyphKind::Circle => {
                canvas.draw_circle((x, y), 4.0, &fill_paint(color));
                canvas.draw_circle((x, y), 4.0, &outline);
            }
            GlyphKind::Cross => {
                let r = size * 0.5;
                let w = r / 3.0;
                let mut path = skia::PathBuilder::new();
                path.add_rect(skia::Rect::from_ltrb(x - r, y - w, x + r, y + w), None, None);
                path.add_rect(skia::Rect::from_ltrb(x - w, y - r, x + w, y + r), None, None);
                canvas.draw_path(&path.snapshot(), &fill_paint(color));
            }
            GlyphKind::Star => {
                let outer = size * 0.5;
                let inner = outer * 0.4;
                let mut path = skia::PathBuilder::new();
                for i in 0..10 {
                    let r = if i % 2 == 0 { outer } else { inner };
                    let a = (-90.0f32 + 36.0 * i as f32).to_radians();
                    let p = (x + r * a.cos(), y + r * a.sin());
                    if i == 0 { path.move_to(p); } else { path.line_to(p); }
                }
                path.close();
                canvas.draw_path(&path.snapshot(), &fill_paint(color));
                canvas.draw_path(&path.snapshot(), &stroke_paint(ctx.theme.glyph_outline, 1.0));
            }
        }
    }
}

impl ChartComponent for TimeSeriesChart {
    fn kind(&self) -> ChartKind {
        ChartKind::TimeSeries
    }

    fn draw(&self, canvas: &skia::Canvas, size: Size, ctx: &DrawContext) {
        let Some(f) = self.frame(size) else { return };
        canvas.save();
        canvas.translate((self.margin.left as f32, self.margin.top as f32));

        let y_ticks = f.y.ticks(NUM_TICKS);
        let dates = f.x.ticks(6);
        let rows: Vec<f32> = y_ticks.iter().map(|&v| f.y.map(v)).collect();
        let cols: Vec<f32> = dates.iter().map(|&d| f.x.map(d)).collect();
        draw_grid_rows(canvas, ctx, (0.0, f.x_max), &rows);
        draw_grid_columns(canvas, ctx, (0.0, f.y_max), &cols);

        for (k, city) in City::ALL.iter().enumerate() {
            let mut path = skia::PathBuilder::new();
            for (i, r) in self.rows.iter().enumerate() {
                let p = (f.x.map(r.date), f.y.map(r.temperature(*city)));
                if i == 0 { path.move_to(p); } else { path.line_to(p); }
            }
            canvas.draw_path(&path.snapshot(), &stroke_paint(ctx.theme.series_color(k), 2.0));
        }

        let glyph_color = ctx.theme.series_color(city_index(self.glyph_series));
        for r in &self.rows {
            let p = (f.x.map(r.date), f.y.map(r.temperature(self.glyph_series)));
            self.draw_glyph(canvas, ctx, p, glyph_color, 10.0);
        }

        if let Some(anchor) = ctx.hover.and_then(|h| h.anchor) {
            let x = anchor.x - self.margin.left as f32;
            canvas.draw_line((x, 0.0), (x, f.y_max), &stroke_paint(ctx.theme.crosshair, 1.0));
            let y = anchor.y - self.margin.top as f32;
            canvas.draw_circle((x, y), 6.0, &stroke_paint(ctx.theme.crosshair, 2.0));
        }

        let x_ticks: Vec<Tick> = dates.iter().map(|&d| Tick::new(f.x.map(d), d.format("%b %d").to_string())).collect();
        Axis::bottom().with_stroke_width(2.0).draw(canvas, ctx, f.y_max, (0.0, f.x_max), &x_ticks);
        let y_axis_ticks: Vec<Tick> = y_ticks.iter().map(|&v| Tick::new(f.y.map(v), format_tick(v))).collect();
        Axis::left()
            .with_label("Temperature (°F)")
            .with_stroke_width(2.0)
            .draw(canvas, ctx, 0.0, (0.0, f.y_max), &y_axis_ticks);

        canvas.restore();
    }

    /// Snaps to the datum nearest in x, then to the city nearest in y.
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
        let nearest = City::ALL
            .into_iter()
            .min_by(|a, b| {
                let da = (f.y.map(row.temperature(*a)) - ly).abs();
                let db = (f.y.map(row.temperature(*b)) - ly).abs();
                da.total_cmp(&db)
            })
            .unwrap_or(City::SanFrancisco);

        let anchor = Point::new(
            f.x.map(row.date) + self.margin.left as f32,
            f.y.map(row.temperature(nearest)) + self.margin.top as f32,
        );
        let mut data = TooltipData::new(row.date.format("%a %b %d %Y").to_string()).anchored_at(anchor);
        for (k, city) in City::ALL.iter().enumerate() {
            let t = row.temperature(*city);
            let value = if t.is_nan() { "–".to_string() } else { format!("{t}° F") };
            data = data.line(
                TooltipLine::new(city.name(), value)
                    .with_series(k)
                    .emphasized(*city == nearest),
            );
        }
        Some(data)
    }
}
