// File: crates/insight-core/src/tooltip.rs
// Summary: Per-instance tooltip state with a debounced hide, and tooltip drawing.
// Notes:
// - Each chart instance owns one controller. Leaving a datum schedules a hide
//   HIDE_DELAY later; moving onto a datum cancels it. Nothing is shared
//   between instances.

use std::time::{Duration, Instant};

use skia_safe as skia;

use crate::chart::DrawContext;
use crate::geometry::Point;
use crate::types::Size;

pub const HIDE_DELAY: Duration = Duration::from_millis(300);

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipLine {
    pub label: String,
    pub value: String,
    /// Palette index of the series this line describes, for its text color.
    pub series: Option<usize>,
    /// Underlined in the box, e.g. the series nearest the pointer.
    pub emphasized: bool,
}

impl TooltipLine {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { label: label.into(), value: value.into(), series: None, emphasized: false }
    }

    pub fn with_series(mut self, index: usize) -> Self {
        self.series = Some(index);
        self
    }

    pub fn emphasized(mut self, on: bool) -> Self {
        self.emphasized = on;
        self
    }
}

/// What a chart reports for the datum under the pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipData {
    pub title: String,
    pub lines: Vec<TooltipLine>,
    /// Optional point to snap the box and highlight glyph to, chart-local.
    pub anchor: Option<Point>,
}

impl TooltipData {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), lines: Vec::new(), anchor: None }
    }

    pub fn line(mut self, line: TooltipLine) -> Self {
        self.lines.push(line);
        self
    }

    pub fn anchored_at(mut self, p: Point) -> Self {
        self.anchor = Some(p);
        self
    }
}

#[derive(Debug, Default)]
pub struct TooltipController {
    open: Option<(Point, TooltipData)>,
    hide_at: Option<Instant>,
}

impl TooltipController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer moved inside the chart. `hit` is the datum under it, if any.
    pub fn pointer_move(&mut self, at: Point, hit: Option<TooltipData>, now: Instant) {
        match hit {
            Some(data) => {
                self.hide_at = None;
                self.open = Some((data.anchor.unwrap_or(at), data));
            }
            None => self.schedule_hide(now),
        }
    }

    /// Pointer left the chart or the datum it was over.
    pub fn schedule_hide(&mut self, now: Instant) {
        if self.open.is_some() && self.hide_at.is_none() {
            self.hide_at = Some(now + HIDE_DELAY);
        }
    }

    /// Apply a due hide. Returns true when the tooltip closed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.hide_at {
            Some(at) if now >= at => {
                self.hide_at = None;
                self.open = None;
                true
            }
            _ => false,
        }
    }

    /// Drop any pending hide without touching the open tooltip.
    pub fn cancel(&mut self) {
        self.hide_at = None;
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.hide_at
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn current(&self) -> Option<(Point, &TooltipData)> {
        self.open.as_ref().map(|(p, d)| (*p, d))
    }
}

const PAD: f32 = 8.0;
const FONT: f32 = 12.0;
const LINE_H: f32 = 16.0;
const OFFSET: f32 = 10.0;

/// Draw a tooltip box near `at`, flipped so it stays inside `bounds`.
pub fn draw_tooltip(canvas: &skia::Canvas, ctx: &DrawContext, at: Point, data: &TooltipData, bounds: Size) {
    if bounds.is_empty() {
        return;
    }
    let rows: Vec<String> = data.lines.iter().map(|l| format!("{} {}", l.label, l.value)).collect();
    let text_w = rows
        .iter()
        .map(|r| ctx.text.measure_width(r, FONT))
        .chain(std::iter::once(ctx.text.measure_width(&data.title, FONT)))
        .fold(60.0f32 - PAD * 2.0, f32::max);
    let w = text_w + PAD * 2.0;
    let h = LINE_H * (rows.len() + 1) as f32 + PAD * 2.0;

    let mut left = at.x + OFFSET;
    if left + w > bounds.width {
        left = at.x - OFFSET - w;
    }
    let mut top = at.y + OFFSET;
    if top + h > bounds.height {
        top = at.y - OFFSET - h;
    }
    let left = left.max(0.0);
    let top = top.max(0.0);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(ctx.theme.tooltip_fill);
    let rect = skia::Rect::from_xywh(left, top, w, h);
    canvas.draw_round_rect(rect, 3.0, 3.0, &fill);

    let x = left + PAD;
    let mut y = top + PAD + FONT;
    ctx.text.draw_bold(canvas, &data.title, x, y, FONT, ctx.theme.tooltip_text);
    for (line, row) in data.lines.iter().zip(&rows) {
        y += LINE_H;
        let color = line.series.map_or(ctx.theme.tooltip_text, |i| ctx.theme.series_color(i));
        ctx.text.draw(canvas, row, x, y, FONT, color, crate::text::Anchor::Start);
        if line.emphasized {
            let mut underline = skia::Paint::default();
            underline.set_color(color);
            underline.set_stroke_width(1.0);
            let lw = ctx.text.measure_width(&line.label, FONT);
            canvas.draw_line((x, y + 2.0), (x + lw, y + 2.0), &underline);
        }
    }
}
