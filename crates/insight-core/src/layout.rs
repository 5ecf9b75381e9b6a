// File: crates/insight-core/src/layout.rs
// Summary: Layout planner; maps an ordered view list to grid placements per breakpoint.
// Notes:
// - Placement tiles left-to-right, top-to-bottom: entry i sits at column
//   (i * w) % columns and row floor(i * w / columns), w = columns / items_per_row.
// - `compute_layouts` is pure and does not check id uniqueness; `plan_layouts`
//   does, and is what config loading and the grid container call.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::breakpoint::{Breakpoint, BreakpointSpec};
use crate::error::{LayoutError, Result};

/// Grid rows every item starts with.
pub const DEFAULT_HEIGHT: u32 = 3;
/// Grid rows an item may shrink to.
pub const MIN_HEIGHT: u32 = 2;

/// One dashboard view: a stable id and the chart-kind tag to render it with.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewDescriptor {
    pub id: String,
    #[serde(rename = "type")]
    pub chart_type: String,
}

impl ViewDescriptor {
    pub fn new(id: impl Into<String>, chart_type: impl Into<String>) -> Self {
        Self { id: id.into(), chart_type: chart_type.into() }
    }
}

/// Placement of one view at one breakpoint, in grid units.
/// Field names on the wire follow react-grid-layout (`i`, `w`, `h`, `minW`, `minH`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutEntry {
    #[serde(rename = "i")]
    pub key: String,
    pub x: u32,
    pub y: u32,
    #[serde(rename = "w")]
    pub width: u32,
    #[serde(rename = "h")]
    pub height: u32,
    #[serde(rename = "minW")]
    pub min_width: u32,
    #[serde(rename = "minH")]
    pub min_height: u32,
}

/// Per-breakpoint placements, one entry per view in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutTable {
    pub xs: Vec<LayoutEntry>,
    pub sm: Vec<LayoutEntry>,
    pub md: Vec<LayoutEntry>,
    pub lg: Vec<LayoutEntry>,
}

impl LayoutTable {
    pub fn entries(&self, bp: Breakpoint) -> &[LayoutEntry] {
        match bp {
            Breakpoint::Xs => &self.xs,
            Breakpoint::Sm => &self.sm,
            Breakpoint::Md => &self.md,
            Breakpoint::Lg => &self.lg,
        }
    }

    fn entries_mut(&mut self, bp: Breakpoint) -> &mut Vec<LayoutEntry> {
        match bp {
            Breakpoint::Xs => &mut self.xs,
            Breakpoint::Sm => &mut self.sm,
            Breakpoint::Md => &mut self.md,
            Breakpoint::Lg => &mut self.lg,
        }
    }

    pub fn get(&self, bp: Breakpoint, key: &str) -> Option<&LayoutEntry> {
        self.entries(bp).iter().find(|e| e.key == key)
    }

    /// Number of grid rows the placements at `bp` occupy once compacted.
    pub fn rows(&self, bp: Breakpoint) -> u32 {
        compact_vertical(self.entries(bp)).iter().map(|e| e.y + e.height).max().unwrap_or(0)
    }
}

impl LayoutEntry {
    fn collides(&self, other: &LayoutEntry) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// Float entries upward until they touch the one above, react-grid-layout's
/// vertical compaction. Planned entries overlap vertically (row index `y`,
/// height `h`); this resolves them into a stacked grid. Output keeps input order.
pub fn compact_vertical(entries: &[LayoutEntry]) -> Vec<LayoutEntry> {
    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by_key(|&i| (entries[i].y, entries[i].x));

    let mut placed: Vec<LayoutEntry> = Vec::with_capacity(entries.len());
    let mut out = entries.to_vec();
    for i in order {
        let mut item = entries[i].clone();
        while item.y > 0 {
            let up = LayoutEntry { y: item.y - 1, ..item.clone() };
            if placed.iter().any(|p| p.collides(&up)) {
                break;
            }
            item.y -= 1;
        }
        while let Some(hit) = placed.iter().find(|p| p.collides(&item)) {
            item.y = hit.y + hit.height;
        }
        out[i] = item.clone();
        placed.push(item);
    }
    out
}

/// Validated grid configuration: one spec per breakpoint plus item heights.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridConfig {
    specs: [BreakpointSpec; 4],
    default_height: u32,
    min_height: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            specs: Breakpoint::ALL.map(BreakpointSpec::default_for),
            default_height: DEFAULT_HEIGHT,
            min_height: MIN_HEIGHT,
        }
    }
}

impl GridConfig {
    /// Build a config, rejecting column counts that do not split evenly
    /// and activation widths that are not strictly increasing.
    pub fn new(specs: [BreakpointSpec; 4], default_height: u32) -> Result<Self> {
        let mut previous: Option<u32> = None;
        for bp in Breakpoint::ALL {
            let spec = specs[bp.index()];
            if spec.items_per_row == 0 {
                return Err(LayoutError::ZeroItemsPerRow(bp));
            }
            if spec.columns == 0 || spec.columns % spec.items_per_row != 0 {
                return Err(LayoutError::UnevenColumns {
                    bp,
                    columns: spec.columns,
                    items_per_row: spec.items_per_row,
                });
            }
            if let Some(prev) = previous {
                if spec.min_width <= prev {
                    return Err(LayoutError::BreakpointOrder { bp, min_width: spec.min_width, previous: prev });
                }
            }
            previous = Some(spec.min_width);
        }
        Ok(Self { specs, default_height: default_height.max(1), min_height: MIN_HEIGHT })
    }

    pub fn spec(&self, bp: Breakpoint) -> &BreakpointSpec {
        &self.specs[bp.index()]
    }

    pub fn default_height(&self) -> u32 {
        self.default_height
    }

    /// Largest breakpoint whose min width is at most `width_px`.
    pub fn active_breakpoint(&self, width_px: u32) -> Breakpoint {
        Breakpoint::ALL
            .into_iter()
            .rev()
            .find(|bp| self.spec(*bp).min_width <= width_px)
            .unwrap_or(Breakpoint::Xs)
    }

    /// Place every view at every breakpoint. Pure: same input, same table.
    pub fn compute_layouts(&self, views: &[ViewDescriptor]) -> LayoutTable {
        let mut table = LayoutTable::default();
        for bp in Breakpoint::ALL {
            let spec = self.spec(bp);
            let width = spec.item_width();
            let entries = table.entries_mut(bp);
            entries.reserve(views.len());
            for (i, view) in views.iter().enumerate() {
                let offset = i as u32 * width;
                entries.push(LayoutEntry {
                    key: view.id.clone(),
                    x: offset % spec.columns,
                    y: offset / spec.columns,
                    width,
                    height: self.default_height,
                    min_width: spec.min_item_width,
                    min_height: self.min_height,
                });
            }
        }
        debug!(views = views.len(), "computed grid layouts");
        table
    }

    /// Reject duplicate ids, then place.
    pub fn plan_layouts(&self, views: &[ViewDescriptor]) -> Result<LayoutTable> {
        validate_views(views)?;
        Ok(self.compute_layouts(views))
    }
}

/// Placements under the default grid configuration.
pub fn compute_layouts(views: &[ViewDescriptor]) -> LayoutTable {
    GridConfig::default().compute_layouts(views)
}

/// Checked variant of [`compute_layouts`].
pub fn plan_layouts(views: &[ViewDescriptor]) -> Result<LayoutTable> {
    GridConfig::default().plan_layouts(views)
}

pub fn validate_views(views: &[ViewDescriptor]) -> Result<()> {
    let mut seen = HashSet::with_capacity(views.len());
    for view in views {
        if !seen.insert(view.id.as_str()) {
            return Err(LayoutError::DuplicateKey(view.id.clone()));
        }
    }
    Ok(())
}

/// The built-in dashboard: one view per chart kind. The last view carries a
/// tag no chart claims and renders as the default kind.
pub fn default_views() -> Vec<ViewDescriptor> {
    vec![
        ViewDescriptor::new("insight-bar", "bar"),
        ViewDescriptor::new("browser-share", "pie"),
        ViewDescriptor::new("temperature-threshold", "threshold"),
        ViewDescriptor::new("temperature-stacked", "stacked-bar"),
        ViewDescriptor::new("temperature-series", "time-series"),
        ViewDescriptor::new("legacy-widget", "scatter"),
    ]
}
