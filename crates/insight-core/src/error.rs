// File: crates/insight-core/src/error.rs
// Summary: Error type for layout planning and dashboard configuration.

use crate::breakpoint::Breakpoint;

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("duplicate view id `{0}`")]
    DuplicateKey(String),

    #[error("breakpoint {bp}: {columns} columns do not split evenly into {items_per_row} items per row")]
    UnevenColumns { bp: Breakpoint, columns: u32, items_per_row: u32 },

    #[error("breakpoint {0}: items per row must be at least 1")]
    ZeroItemsPerRow(Breakpoint),

    #[error("breakpoint {bp}: min width {min_width}px must be greater than the previous breakpoint ({previous}px)")]
    BreakpointOrder { bp: Breakpoint, min_width: u32, previous: u32 },

    #[error("dashboard config: {0}")]
    Config(#[from] config::ConfigError),

    #[error("mock data: {0}")]
    Data(#[from] csv::Error),
}

pub type Result<T, E = LayoutError> = std::result::Result<T, E>;
