//! Sampled frame schedule.

/// One keyframed frame and its morph ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampledFrame {
    pub frame: u32,
    /// `frame / frame_count`.
    pub ratio: f64,
}

/// Frames `0, inc, 2*inc, ...` strictly below `frame_count`.
///
/// The end frame itself is not sampled, so the last ratio stays below 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSchedule {
    frame_count: u32,
    increment: u32,
}

impl FrameSchedule {
    /// An increment of zero is treated as one.
    #[must_use]
    pub fn new(frame_count: u32, increment: u32) -> Self {
        Self {
            frame_count,
            increment: increment.max(1),
        }
    }

    #[must_use]
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    #[must_use]
    pub fn increment(&self) -> u32 {
        self.increment
    }

    /// Number of sampled frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frame_count.div_ceil(self.increment) as usize
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frame_count == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = SampledFrame> + use<> {
        let frame_count = self.frame_count;
        (0..frame_count)
            .step_by(self.increment as usize)
            .map(move |frame| SampledFrame {
                frame,
                ratio: f64::from(frame) / f64::from(frame_count),
            })
    }
}

impl IntoIterator for &FrameSchedule {
    type Item = SampledFrame;
    type IntoIter = Box<dyn Iterator<Item = SampledFrame>>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
