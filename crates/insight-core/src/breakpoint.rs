// File: crates/insight-core/src/breakpoint.rs
// Summary: Responsive breakpoint tiers and their per-tier grid settings.

use serde::{Deserialize, Serialize};

/// Responsive breakpoint tiers, ordered from narrowest to widest.
///
/// | Breakpoint | Min width | Columns | Items per row | Min item width |
/// |------------|-----------|---------|---------------|----------------|
/// | `Xs`       | 0 px      | 1       | 1             | 1              |
/// | `Sm`       | 576 px    | 6       | 2             | 2              |
/// | `Md`       | 768 px    | 8       | 2             | 3              |
/// | `Lg`       | 992 px    | 12      | 3             | 3              |
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
}

impl Breakpoint {
    /// All breakpoints in ascending order.
    pub const ALL: [Breakpoint; 4] = [Breakpoint::Xs, Breakpoint::Sm, Breakpoint::Md, Breakpoint::Lg];

    pub const fn index(self) -> usize {
        match self {
            Breakpoint::Xs => 0,
            Breakpoint::Sm => 1,
            Breakpoint::Md => 2,
            Breakpoint::Lg => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
        }
    }
}

impl std::fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Grid settings for one breakpoint tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakpointSpec {
    /// Minimum container width in pixels after which the tier is active.
    pub min_width: u32,
    pub columns: u32,
    pub items_per_row: u32,
    /// Minimum item width, in grid columns.
    pub min_item_width: u32,
}

impl BreakpointSpec {
    pub const fn new(min_width: u32, columns: u32, items_per_row: u32, min_item_width: u32) -> Self {
        Self { min_width, columns, items_per_row, min_item_width }
    }

    /// Item width in grid columns. Only exact once the spec has been validated.
    pub const fn item_width(&self) -> u32 {
        if self.items_per_row == 0 { self.columns } else { self.columns / self.items_per_row }
    }

    pub const fn default_for(bp: Breakpoint) -> Self {
        match bp {
            Breakpoint::Xs => Self::new(0, 1, 1, 1),
            Breakpoint::Sm => Self::new(576, 6, 2, 2),
            Breakpoint::Md => Self::new(768, 8, 2, 3),
            Breakpoint::Lg => Self::new(992, 12, 3, 3),
        }
    }
}
