// File: crates/insight-core/src/lib.rs
// Summary: Core library entry point; exports layout planning, the chart registry, the grid container, and rendering.

pub mod axis;
pub mod breakpoint;
pub mod chart;
pub mod config;
pub mod data;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod render;
pub mod scale;
pub mod sizer;
pub mod text;
pub mod theme;
pub mod tooltip;
pub mod types;

pub use breakpoint::{Breakpoint, BreakpointSpec};
pub use chart::{resolve_chart, ChartComponent, ChartKind, DrawContext};
pub use config::DashboardConfig;
pub use error::{LayoutError, Result};
pub use geometry::{Point, RectI32};
pub use grid::{GridMetrics, ResponsiveGrid};
pub use layout::{compact_vertical, compute_layouts, default_views, plan_layouts, GridConfig, LayoutEntry, LayoutTable, ViewDescriptor};
pub use render::{render_to_png, render_to_png_bytes, render_to_rgba8, RenderOptions};
pub use sizer::{MeasurementCache, Sizer};
pub use text::TextShaper;
pub use theme::Theme;
pub use tooltip::{TooltipController, TooltipData, TooltipLine};
pub use types::Size;
