/// Per-frame tick metadata handed to animation and render steps.
///
/// Frames are produced by the host's frame driver (one per display refresh);
/// everything that advances over time is stepped by frame, not by wall clock.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    /// 0-based frame index.
    pub index: u64,
    /// Fixed delta time (seconds).
    pub dt_s: f64,
}

impl Frame {
    pub const DEFAULT_DT_S: f64 = 1.0 / 60.0;

    pub fn new(index: u64, dt_s: f64) -> Self {
        Self { index, dt_s }
    }

    pub fn first() -> Self {
        Self::new(0, Self::DEFAULT_DT_S)
    }

    pub fn next(self) -> Self {
        Self::new(self.index + 1, self.dt_s)
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::first()
    }
}
