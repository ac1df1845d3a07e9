/// Tracks which page section the scroll offset currently lands on.
///
/// The section is `round(offset / viewport_height)` clamped to the available
/// meshes, so a page taller than the mesh list never indexes past the end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionTracker {
    current: usize,
    count: usize,
}

impl SectionTracker {
    pub fn new(count: usize) -> Self {
        Self { current: 0, count }
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    #[inline]
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Section index for an offset, or `None` if it cannot be computed.
    pub fn section_for(&self, offset: f64, viewport_height: f64) -> Option<usize> {
        if self.count == 0 || !offset.is_finite() || viewport_height <= 0.0 {
            return None;
        }
        // Math.round semantics: halves round up
        let raw = (offset / viewport_height + 0.5).floor();
        let max = (self.count - 1) as f64;
        Some(raw.clamp(0.0, max) as usize)
    }

    /// Record a scroll offset. Returns the newly entered section when it
    /// differs from the current one.
    pub fn observe(&mut self, offset: f64, viewport_height: f64) -> Option<usize> {
        let next = self.section_for(offset, viewport_height)?;
        if next == self.current {
            return None;
        }
        self.current = next;
        Some(next)
    }
}
