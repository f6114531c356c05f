#![forbid(unsafe_code)]

//! Container height measurement.
//!
//! Panels are stacked on top of each other, so the container takes the height
//! of the tallest measured panel. Reports are idempotent and the result does
//! not depend on the order in which panels report.

/// Per-panel measured heights.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeightProbe {
    heights: Vec<Option<u32>>,
}

impl HeightProbe {
    /// Create a probe for `len` panels.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            heights: vec![None; len],
        }
    }

    /// Record the measured height of panel `index`. Out-of-range reports are
    /// dropped.
    pub fn report(&mut self, index: usize, height: u32) {
        if let Some(slot) = self.heights.get_mut(index) {
            *slot = Some(height);
        }
    }

    /// Resize for a new panel count, keeping measurements that still apply.
    pub fn resize(&mut self, len: usize) {
        self.heights.resize(len, None);
    }

    /// Height of panel `index`, if measured.
    #[must_use]
    pub fn height_of(&self, index: usize) -> Option<u32> {
        self.heights.get(index).copied().flatten()
    }

    /// Container height: the tallest measured panel.
    #[must_use]
    pub fn container_height(&self) -> Option<u32> {
        self.heights.iter().flatten().copied().max()
    }
}
