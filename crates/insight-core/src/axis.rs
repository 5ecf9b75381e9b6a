// File: crates/insight-core/src/axis.rs
// Summary: Axis and grid-line drawing shared by the cartesian charts.

use skia_safe as skia;

use crate::chart::DrawContext;
use crate::text::Anchor;

const TICK_LEN: f32 = 8.0;
const TICK_FONT: f32 = 11.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Bottom,
    Left,
}

/// One tick: pixel offset along the axis and its label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub offset: f32,
    pub label: String,
}

impl Tick {
    pub fn new(offset: f32, label: impl Into<String>) -> Self {
        Self { offset, label: label.into() }
    }
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: Option<String>,
    pub orientation: Orientation,
    pub stroke_width: f32,
}

impl Axis {
    pub fn bottom() -> Self {
        Self { label: None, orientation: Orientation::Bottom, stroke_width: 1.0 }
    }

    pub fn left() -> Self {
        Self { label: None, orientation: Orientation::Left, stroke_width: 1.0 }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_stroke_width(mut self, w: f32) -> Self {
        self.stroke_width = w;
        self
    }

    /// Draw the axis line from `start` to `end` along the axis, placed at
    /// `position` across it (y for bottom axes, x for left axes).
    pub fn draw(&self, canvas: &skia::Canvas, ctx: &DrawContext, position: f32, (start, end): (f32, f32), ticks: &[Tick]) {
        let mut line = skia::Paint::default();
        line.set_color(ctx.theme.axis_line);
        line.set_anti_alias(true);
        line.set_stroke_width(self.stroke_width);

        let mut tick_paint = skia::Paint::default();
        tick_paint.set_color(ctx.theme.tick);
        tick_paint.set_anti_alias(true);
        tick_paint.set_stroke_width(1.0);

        match self.orientation {
            Orientation::Bottom => {
                canvas.draw_line((start, position), (end, position), &line);
                for t in ticks {
                    canvas.draw_line((t.offset, position), (t.offset, position + TICK_LEN), &tick_paint);
                    if ctx.draw_labels {
                        ctx.text.draw(canvas, &t.label, t.offset, position + TICK_LEN + TICK_FONT, TICK_FONT, ctx.theme.axis_label, Anchor::Middle);
                    }
                }
                if let (Some(label), true) = (&self.label, ctx.draw_labels) {
                    ctx.text.draw(canvas, label, (start + end) * 0.5, position + TICK_LEN + TICK_FONT * 2.8, 12.0, ctx.theme.axis_label, Anchor::Middle);
                }
            }
            Orientation::Left => {
                canvas.draw_line((position, start), (position, end), &line);
                for t in ticks {
                    canvas.draw_line((position - TICK_LEN, t.offset), (position, t.offset), &tick_paint);
                    if ctx.draw_labels {
                        ctx.text.draw(canvas, &t.label, position - TICK_LEN - 3.0, t.offset + TICK_FONT * 0.35, TICK_FONT, ctx.theme.axis_label, Anchor::End);
                    }
                }
                if let (Some(label), true) = (&self.label, ctx.draw_labels) {
                    canvas.save();
                    canvas.rotate(-90.0, Some(skia::Point::new(position, (start + end) * 0.5)));
                    ctx.text.draw(canvas, label, position, (start + end) * 0.5 - 38.0, 12.0, ctx.theme.axis_label, Anchor::Middle);
                    canvas.restore();
                }
            }
        }
    }
}

/// Horizontal grid lines across `[x0, x1]` at each y.
pub fn draw_grid_rows(canvas: &skia::Canvas, ctx: &DrawContext, (x0, x1): (f32, f32), ys: &[f32]) {
    let paint = grid_paint(ctx);
    for &y in ys {
        canvas.draw_line((x0, y), (x1, y), &paint);
    }
}

/// Vertical grid lines across `[y0, y1]` at each x.
pub fn draw_grid_columns(canvas: &skia::Canvas, ctx: &DrawContext, (y0, y1): (f32, f32), xs: &[f32]) {
    let paint = grid_paint(ctx);
    for &x in xs {
        canvas.draw_line((x, y0), (x, y1), &paint);
    }
}

fn grid_paint(ctx: &DrawContext) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(ctx.theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);
    paint
}

/// Label for a numeric tick: integers without decimals, otherwise trimmed.
pub fn format_tick(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        let s = format!("{v:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
