// File: crates/insight-core/src/grid.rs
// Summary: Responsive grid container; places mounted charts in pixel slots and routes pointer input.
// Notes:
// - Placements are compacted vertically, then grid units become pixels the
//   way react-grid-layout computes them.
// - Each mounted instance owns its Sizer and TooltipController; unmounting
//   drops both, which cancels any pending hide.

use std::time::Instant;

use anyhow::Result as AnyResult;
use skia_safe as skia;
use tracing::{debug, trace};

use crate::breakpoint::Breakpoint;
use crate::chart::{ChartComponent, ChartKind, DrawContext};
use crate::error::Result;
use crate::geometry::{Point, RectI32};
use crate::layout::{compact_vertical, GridConfig, LayoutEntry, LayoutTable, ViewDescriptor};
use crate::render::{encode_png, raster_surface, read_rgba8};
use crate::sizer::{MeasurementCache, Sizer};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::tooltip::{draw_tooltip, TooltipController};

/// Pixel metrics of the grid, react-grid-layout defaults.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridMetrics {
    pub row_height: f32,
    /// Gap between items, both axes.
    pub margin: f32,
    /// Space between the container edge and the outer items.
    pub padding: f32,
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self { row_height: 150.0, margin: 10.0, padding: 10.0 }
    }
}

impl GridMetrics {
    fn col_width(&self, container_width: f32, cols: u32) -> f32 {
        let cols = cols.max(1) as f32;
        (container_width - self.margin * (cols - 1.0) - self.padding * 2.0) / cols
    }

    /// Pixel rect of `entry` in a container `container_width` wide.
    pub fn slot_rect(&self, entry: &LayoutEntry, container_width: f32, cols: u32) -> RectI32 {
        let cw = self.col_width(container_width, cols);
        let (x, y, w, h) = (entry.x as f32, entry.y as f32, entry.width as f32, entry.height as f32);
        let left = ((cw + self.margin) * x + self.padding).round();
        let top = ((self.row_height + self.margin) * y + self.padding).round();
        let width = (cw * w + (w - 1.0).max(0.0) * self.margin).round().max(0.0);
        let height = (self.row_height * h + (h - 1.0).max(0.0) * self.margin).round().max(0.0);
        RectI32::from_ltwh(left as i32, top as i32, width as i32, height as i32)
    }

    /// Container height needed for `rows` grid rows.
    pub fn content_height(&self, rows: u32) -> u32 {
        if rows == 0 {
            return 0;
        }
        let r = rows as f32;
        (r * self.row_height + (r - 1.0) * self.margin + self.padding * 2.0).round().max(0.0) as u32
    }
}

/// A mounted chart: its view, component, and per-instance listeners.
pub struct ChartInstance {
    pub view: ViewDescriptor,
    pub kind: ChartKind,
    chart: Box<dyn ChartComponent>,
    sizer: Sizer,
    tooltip: TooltipController,
    rect: RectI32,
}

impl ChartInstance {
    fn mount(view: ViewDescriptor) -> Self {
        let kind = ChartKind::from_tag(&view.chart_type);
        debug!(id = %view.id, tag = %view.chart_type, %kind, "mounted chart");
        Self {
            sizer: Sizer::new(view.id.clone()),
            chart: kind.component(),
            kind,
            view,
            tooltip: TooltipController::new(),
            rect: RectI32::from_ltwh(0, 0, 0, 0),
        }
    }

    pub fn rect(&self) -> RectI32 {
        self.rect
    }

    pub fn chart(&self) -> &dyn ChartComponent {
        self.chart.as_ref()
    }

    pub fn tooltip(&self) -> &TooltipController {
        &self.tooltip
    }
}

pub struct ResponsiveGrid {
    config: GridConfig,
    metrics: GridMetrics,
    table: LayoutTable,
    instances: Vec<ChartInstance>,
    cache: MeasurementCache,
    width: u32,
    breakpoint: Breakpoint,
    hovered: Option<usize>,
}

impl ResponsiveGrid {
    /// Plan layouts for `views` and mount one chart per view. Nothing is
    /// measured until the first `relayout`.
    pub fn new(config: GridConfig, metrics: GridMetrics, views: Vec<ViewDescriptor>) -> Result<Self> {
        let table = config.plan_layouts(&views)?;
        let instances = views.into_iter().map(ChartInstance::mount).collect();
        Ok(Self {
            config,
            metrics,
            table,
            instances,
            cache: MeasurementCache::new(),
            width: 0,
            breakpoint: Breakpoint::Xs,
            hovered: None,
        })
    }

    /// Replace the view list. Instances whose id and type survive are kept
    /// with their state; the rest are unmounted or freshly mounted. A kept
    /// instance that was hovered starts its hide delay at `now`.
    pub fn set_views(&mut self, views: Vec<ViewDescriptor>, now: Instant) -> Result<()> {
        self.table = self.config.plan_layouts(&views)?;
        if let Some(inst) = self.hovered.take().and_then(|i| self.instances.get_mut(i)) {
            inst.tooltip.schedule_hide(now);
        }
        let mut old = std::mem::take(&mut self.instances);
        for view in views {
            let kept = old.iter().position(|i| i.view == view).map(|p| old.swap_remove(p));
            self.instances.push(kept.unwrap_or_else(|| ChartInstance::mount(view)));
        }
        for gone in old {
            self.cache.remove(&gone.view.id);
            debug!(id = %gone.view.id, "unmounted chart");
        }
        if self.width > 0 {
            self.relayout(self.width);
        }
        Ok(())
    }

    /// Swap the component of a mounted view, e.g. to give it other content.
    /// Returns false when no view has `id`.
    pub fn set_component(&mut self, id: &str, chart: Box<dyn ChartComponent>) -> bool {
        match self.instances.iter_mut().find(|i| i.view.id == id) {
            Some(inst) => {
                inst.kind = chart.kind();
                inst.chart = chart;
                inst.tooltip = TooltipController::new();
                true
            }
            None => false,
        }
    }

    /// Recompute every slot for a container `width` px wide and let each
    /// Sizer observe its slot. Returns the ids whose size changed.
    pub fn relayout(&mut self, width: u32) -> Vec<String> {
        self.width = width;
        self.breakpoint = self.config.active_breakpoint(width);
        let cols = self.config.spec(self.breakpoint).columns;
        let entries = compact_vertical(self.table.entries(self.breakpoint));
        let mut changed = Vec::new();
        for inst in &mut self.instances {
            let Some(entry) = entries.iter().find(|e| e.key == inst.view.id) else { continue };
            inst.rect = self.metrics.slot_rect(entry, width as f32, cols);
            if inst.sizer.observe(inst.rect, &mut self.cache).is_some() {
                changed.push(inst.view.id.clone());
            }
        }
        debug!(width, breakpoint = %self.breakpoint, changed = changed.len(), "grid relayout");
        changed
    }

    /// Route a pointer move in container coordinates. Returns true when the
    /// pointer is over a mounted slot.
    pub fn pointer_move(&mut self, at: Point, now: Instant) -> bool {
        let over = self.instances.iter().position(|i| i.rect.contains(at));
        if self.hovered != over {
            if let Some(prev) = self.hovered.and_then(|i| self.instances.get_mut(i)) {
                prev.tooltip.schedule_hide(now);
            }
            self.hovered = over;
        }
        let Some(inst) = over.and_then(|i| self.instances.get_mut(i)) else { return false };
        let local = inst.rect.to_local(at);
        let hit = inst.chart.hit_test(inst.sizer.size(), local);
        inst.tooltip.pointer_move(local, hit, now);
        true
    }

    /// Pointer left the container.
    pub fn pointer_leave(&mut self, now: Instant) {
        if let Some(inst) = self.hovered.take().and_then(|i| self.instances.get_mut(i)) {
            inst.tooltip.schedule_hide(now);
        }
    }

    /// Apply due tooltip hides. Returns true when any tooltip closed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.instances.iter_mut().fold(false, |closed, i| i.tooltip.tick(now) | closed)
    }

    /// Earliest pending tooltip hide across all instances.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.instances.iter().filter_map(|i| i.tooltip.next_deadline()).min()
    }

    /// Unmount the view `id`, releasing its listeners and cached size. The
    /// remaining views are replanned so no empty slot is left behind.
    pub fn unmount(&mut self, id: &str) -> bool {
        let Some(pos) = self.instances.iter().position(|i| i.view.id == id) else { return false };
        self.instances.remove(pos);
        self.cache.remove(id);
        self.hovered = match self.hovered {
            Some(h) if h == pos => None,
            Some(h) if h > pos => Some(h - 1),
            other => other,
        };
        // ids stay unique after a removal
        let views: Vec<ViewDescriptor> = self.instances.iter().map(|i| i.view.clone()).collect();
        self.table = self.config.compute_layouts(&views);
        if self.width > 0 {
            self.relayout(self.width);
        }
        debug!(id, "unmounted chart");
        true
    }

    /// Pixel height of the laid-out grid at the current breakpoint.
    pub fn content_height(&self) -> u32 {
        self.metrics.content_height(self.table.rows(self.breakpoint))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    pub fn layouts(&self) -> &LayoutTable {
        &self.table
    }

    pub fn cache(&self) -> &MeasurementCache {
        &self.cache
    }

    pub fn instances(&self) -> &[ChartInstance] {
        &self.instances
    }

    pub fn instance(&self, id: &str) -> Option<&ChartInstance> {
        self.instances.iter().find(|i| i.view.id == id)
    }

    fn paint(&self, canvas: &skia::Canvas, theme: &Theme, draw_labels: bool) {
        let text = TextShaper::new();
        canvas.clear(theme.background);
        let mut panel = skia::Paint::default();
        panel.set_color(theme.panel);
        for inst in &self.instances {
            let size = inst.sizer.size();
            if size.is_empty() {
                continue;
            }
            let r = inst.rect;
            canvas.save();
            canvas.translate((r.left as f32, r.top as f32));
            let local = skia::Rect::from_wh(size.width, size.height);
            canvas.clip_rect(local, None, None);
            canvas.draw_rect(local, &panel);
            let open = inst.tooltip.current();
            let ctx = DrawContext { theme, text: &text, draw_labels, hover: open.map(|(_, d)| d) };
            inst.chart.draw(canvas, size, &ctx);
            if let Some((at, data)) = open {
                draw_tooltip(canvas, &ctx, at, data, size);
            }
            canvas.restore();
            trace!(id = %inst.view.id, kind = %inst.kind, "rendered slot");
        }
    }

    fn frame_size(&self) -> Option<(i32, i32)> {
        let (w, h) = (self.width as i32, self.content_height() as i32);
        (w > 0 && h > 0).then_some((w, h))
    }

    /// Composite every slot into one RGBA8 frame: (pixels, width, height, stride).
    /// Before the first relayout, or with no rows, the frame is empty.
    pub fn render_to_rgba8(&self, theme: &Theme, draw_labels: bool) -> AnyResult<(Vec<u8>, u32, u32, usize)> {
        let Some((w, h)) = self.frame_size() else {
            return Ok((Vec::new(), 0, 0, 0));
        };
        let mut surface = raster_surface(w, h)?;
        self.paint(surface.canvas(), theme, draw_labels);
        read_rgba8(&mut surface)
    }

    /// Composite every slot into one PNG.
    pub fn render_to_png_bytes(&self, theme: &Theme, draw_labels: bool) -> AnyResult<Vec<u8>> {
        let Some((w, h)) = self.frame_size() else {
            return Ok(Vec::new());
        };
        let mut surface = raster_surface(w, h)?;
        self.paint(surface.canvas(), theme, draw_labels);
        encode_png(&mut surface)
    }
}
