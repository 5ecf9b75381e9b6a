// File: crates/insight-core/src/chart/mod.rs
// Summary: Chart registry; resolves a view's type tag to a drawable chart component.
// Notes:
// - The set of kinds is closed. Tags nothing claims resolve to the default
//   kind (Bar) without an error; the fallback is the `_` arm of `from_tag`.

use serde::{Deserialize, Serialize};
use skia_safe as skia;

use crate::geometry::Point;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::tooltip::TooltipData;
use crate::types::Size;

pub mod bar;
pub mod pie;
pub mod stacked_bar;
pub mod threshold;
pub mod time_series;

pub use bar::BarChart;
pub use pie::PieChart;
pub use stacked_bar::StackedBarChart;
pub use threshold::ThresholdChart;
pub use time_series::{GlyphKind, TimeSeriesChart};

/// Everything a chart needs besides its size.
pub struct DrawContext<'a> {
    pub theme: &'a Theme,
    pub text: &'a TextShaper,
    pub draw_labels: bool,
    /// Tooltip currently open on this chart, for hover highlights.
    pub hover: Option<&'a TooltipData>,
}

/// A chart that draws itself into exactly the size it is given.
///
/// Implementations draw in local coordinates (origin at the top-left of
/// their slot) and must tolerate empty sizes by drawing nothing.
pub trait ChartComponent {
    fn kind(&self) -> ChartKind;

    fn draw(&self, canvas: &skia::Canvas, size: Size, ctx: &DrawContext);

    /// Tooltip content for the datum under `at` (chart-local), if any.
    fn hit_test(&self, size: Size, at: Point) -> Option<TooltipData>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    #[default]
    Bar,
    Pie,
    Threshold,
    StackedBar,
    TimeSeries,
}

impl ChartKind {
    pub const ALL: [ChartKind; 5] = [
        ChartKind::Bar,
        ChartKind::Pie,
        ChartKind::Threshold,
        ChartKind::StackedBar,
        ChartKind::TimeSeries,
    ];

    pub const fn tag(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
            ChartKind::Threshold => "threshold",
            ChartKind::StackedBar => "stacked-bar",
            ChartKind::TimeSeries => "time-series",
        }
    }

    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "bar" => ChartKind::Bar,
            "pie" => ChartKind::Pie,
            "threshold" => ChartKind::Threshold,
            "stacked-bar" => ChartKind::StackedBar,
            "time-series" => ChartKind::TimeSeries,
            _ => ChartKind::default(),
        }
    }

    /// A fresh component of this kind with its default mock content.
    pub fn component(self) -> Box<dyn ChartComponent> {
        match self {
            ChartKind::Bar => Box::new(BarChart::default()),
            ChartKind::Pie => Box::new(PieChart::default()),
            ChartKind::Threshold => Box::new(ThresholdChart::default()),
            ChartKind::StackedBar => Box::new(StackedBarChart::default()),
            ChartKind::TimeSeries => Box::new(TimeSeriesChart::default()),
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

pub fn resolve_chart(tag: &str) -> Box<dyn ChartComponent> {
    ChartKind::from_tag(tag).component()
}

/// Stroke paint with anti-aliasing.
pub(crate) fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Stroke);
    p.set_stroke_width(width);
    p.set_color(color);
    p
}

/// Fill paint with anti-aliasing.
pub(crate) fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Fill);
    p.set_color(color);
    p
}
