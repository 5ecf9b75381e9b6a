// File: crates/insight-core/src/sizer.rs
// Summary: Per-slot size observation and the shared measurement cache.
// Notes:
// - A Sizer watches exactly one grid slot. Only Sizers write the cache;
//   everything else reads it.

use std::collections::HashMap;

use tracing::debug;

use crate::geometry::RectI32;
use crate::types::Size;

/// Last measured size of each mounted slot, keyed by view id.
#[derive(Debug, Default)]
pub struct MeasurementCache {
    sizes: HashMap<String, Size>,
}

impl MeasurementCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<Size> {
        self.sizes.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub(crate) fn record(&mut self, key: &str, size: Size) {
        self.sizes.insert(key.to_owned(), size);
    }

    pub(crate) fn remove(&mut self, key: &str) {
        self.sizes.remove(key);
    }
}

/// Observer bound to one slot.
#[derive(Debug)]
pub struct Sizer {
    key: String,
    last: Option<Size>,
}

impl Sizer {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into(), last: None }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Last observed size, or zero before the first observation.
    pub fn size(&self) -> Size {
        self.last.unwrap_or(Size::ZERO)
    }

    /// Measure the slot rect. Returns the new size when it differs from the
    /// previous observation, writing it to `cache`; None otherwise.
    pub fn observe(&mut self, rect: RectI32, cache: &mut MeasurementCache) -> Option<Size> {
        let size = Size::new(rect.width().max(0) as f32, rect.height().max(0) as f32);
        if self.last == Some(size) {
            return None;
        }
        debug!(key = %self.key, width = size.width, height = size.height, "slot resized");
        self.last = Some(size);
        cache.record(&self.key, size);
        Some(size)
    }
}
