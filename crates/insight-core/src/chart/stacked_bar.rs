// File: crates/insight-core/src/chart/stacked_bar.rs
// Summary: Per-date bars stacking each city's temperature, with a legend.

use skia_safe as skia;

use super::{fill_paint, ChartComponent, ChartKind, DrawContext};
use crate::axis::{format_tick, Axis, Tick};
use crate::data::{city_temperature, City, CityTemperature};
use crate::geometry::Point;
use crate::scale::{BandScale, LinearScale};
use crate::text::Anchor;
use crate::tooltip::{TooltipData, TooltipLine};
use crate::types::{Margin, Size};

/// Roughly this many date labels along the bottom axis.
const X_LABELS: usize = 6;

#[derive(Clone, Debug)]
pub struct StackedBarChart {
    pub rows: Vec<CityTemperature>,
    pub keys: Vec<City>,
    pub margin: Margin,
}

impl Default for StackedBarChart {
    fn default() -> Self {
        Self { rows: city_temperature().to_vec(), keys: City::ALL.to_vec(), margin: Margin::new(40, 10, 40, 40) }
    }
}

struct Frame {
    x: BandScale,
    y: LinearScale,
    x_max: f32,
    y_max: f32,
}

impl StackedBarChart {
    pub fn with_rows(mut self, rows: Vec<CityTemperature>) -> Self {
        self.rows = rows;
        self
    }

    fn total(&self, row: &CityTemperature) -> f64 {
        self.keys.iter().map(|&c| row.temperature(c).max(0.0)).sum()
    }

    fn frame(&self, size: Size) -> Option<Frame> {
        if size.is_empty() {
            return None;
        }
        let (x_max, y_max) = self.margin.inner(size);
        if x_max <= 0.0 || y_max <= 0.0 {
            return None;
        }
        let top = self.rows.iter().map(|r| self.total(r)).fold(0.0, f64::max);
        let x = BandScale::new(self.rows.len(), (0.0, x_max), 0.2, false);
        let y = LinearScale::new((0.0, top), (y_max, 0.0)).nice(5);
        Some(Frame { x, y, x_max, y_max })
    }

    /// Stacked segments of row `i` as (key index, rect), bottom first.
    fn segments(&self, f: &Frame, i: usize) -> Vec<(usize, skia::Rect)> {
        let (Some(row), Some(left)) = (self.rows.get(i), f.x.position(i)) else {
            return Vec::new();
        };
        let mut base = 0.0;
        self.keys
            .iter()
            .enumerate()
            .map(|(k, &city)| {
                let v = row.temperature(city).max(0.0);
                let (y0, y1) = (f.y.map(base), f.y.map(base + v));
                base += v;
                (k, skia::Rect::from_ltrb(left, y1, left + f.x.bandwidth(), y0))
            })
            .collect()
    }
}

impl ChartComponent for StackedBarChart {
    fn kind(&self) -> ChartKind {
        ChartKind::StackedBar
    }

    fn draw(&self, canvas: &skia::Canvas, size: Size, ctx: &DrawContext) {
        let Some(f) = self.frame(size) else { return };

        if ctx.draw_labels {
            let mut x = self.margin.left as f32;
            for (k, city) in self.keys.iter().enumerate() {
                canvas.draw_rect(skia::Rect::from_xywh(x, 12.0, 10.0, 10.0), &fill_paint(ctx.theme.series_color(k)));
                ctx.text.draw(canvas, city.name(), x + 14.0, 21.0, 11.0, ctx.theme.axis_label, Anchor::Start);
                x += 18.0 + ctx.text.measure_width(city.name(), 11.0) + 12.0;
            }
        }

        canvas.save();
        canvas.translate((self.margin.left as f32, self.margin.top as f32));

        let hovered = ctx.hover.map(|h| h.title.as_str());
        for (i, row) in self.rows.iter().enumerate() {
            let dim = hovered.is_some_and(|t| t != row.date.to_string());
            for (k, rect) in self.segments(&f, i) {
                let mut paint = fill_paint(ctx.theme.series_color(k));
                if dim {
                    paint.set_alpha_f(0.6);
                }
                canvas.draw_rect(rect, &paint);
            }
        }

        let every = self.rows.len().div_ceil(X_LABELS).max(1);
        let half = f.x.bandwidth() * 0.5;
        let x_ticks: Vec<Tick> = self
            .rows
            .iter()
            .enumerate()
            .step_by(every)
            .filter_map(|(i, r)| f.x.position(i).map(|x| Tick::new(x + half, r.date.format("%m/%d").to_string())))
            .collect();
        Axis::bottom().draw(canvas, ctx, f.y_max, (0.0, f.x_max), &x_ticks);
        let y_ticks: Vec<Tick> = f.y.ticks(5).into_iter().map(|v| Tick::new(f.y.map(v), format_tick(v))).collect();
        Axis::left().draw(canvas, ctx, 0.0, (0.0, f.y_max), &y_ticks);

        canvas.restore();
    }

    fn hit_test(&self, size: Size, at: Point) -> Option<TooltipData> {
        let f = self.frame(size)?;
        let local = Point::new(at.x - self.margin.left as f32, at.y - self.margin.top as f32);
        let i = f.x.index_at(local.x)?;
        let segments = self.segments(&f, i);
        let hit = segments.iter().find(|(_, r)| local.y >= r.top && local.y <= r.bottom)?.0;
        let row = &self.rows[i];
        let mut data = TooltipData::new(row.date.to_string());
        for (k, city) in self.keys.iter().enumerate() {
            data = data.line(
                TooltipLine::new(city.name(), format!("{}° F", row.temperature(*city)))
                    .with_series(k)
                    .emphasized(k == hit),
            );
        }
        Some(data)
    }
}
