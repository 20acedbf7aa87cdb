//! Fixed-size ring buffer of recent frame times.

use crate::core::time;

/// Ring buffer of the last [`FrameTimeHistory::CAPACITY`] frame times in milliseconds.
///
/// The backing array is exposed as-is together with the write offset, which is
/// the layout plotting widgets expect for a scrolling graph.
#[derive(Debug, Clone)]
pub struct FrameTimeHistory {
    samples: [f32; Self::CAPACITY],
    write_index: usize,
    count: usize, // caps at CAPACITY
}

impl FrameTimeHistory {
    pub const CAPACITY: usize = 120;

    pub fn new() -> Self {
        Self {
            samples: [0.0; Self::CAPACITY],
            write_index: 0,
            count: 0,
        }
    }

    /// Record one frame time (milliseconds)
    pub fn push(&mut self, frame_time_ms: f32) {
        self.samples[self.write_index] = frame_time_ms;
        self.write_index = (self.write_index + 1) % Self::CAPACITY;
        if self.count < Self::CAPACITY {
            self.count += 1;
        }
    }

    /// Raw backing storage, always `CAPACITY` long
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Index the next sample will be written to.
    /// Once the buffer is full this is also the oldest sample.
    pub fn offset(&self) -> usize {
        self.write_index
    }

    pub fn capacity(&self) -> usize {
        Self::CAPACITY
    }

    /// Number of valid samples
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    fn valid(&self) -> &[f32] {
        // Until the first wrap the valid samples are exactly the prefix.
        &self.samples[..self.count]
    }

    pub fn average(&self) -> f32 {
        if self.count == 0 {
            return 0.0;
        }
        self.valid().iter().sum::<f32>() / self.count as f32
    }

    pub fn minimum(&self) -> f32 {
        self.valid().iter().copied().reduce(f32::min).unwrap_or(0.0)
    }

    pub fn maximum(&self) -> f32 {
        self.valid().iter().copied().reduce(f32::max).unwrap_or(0.0)
    }

    /// Most recently pushed sample
    pub fn latest(&self) -> Option<f32> {
        if self.count == 0 {
            return None;
        }
        let index = (self.write_index + Self::CAPACITY - 1) % Self::CAPACITY;
        Some(self.samples[index])
    }

    /// Valid samples from oldest to newest
    pub fn iter_chronological(&self) -> impl Iterator<Item = f32> + '_ {
        let start = if self.count < Self::CAPACITY {
            0
        } else {
            self.write_index
        };
        (0..self.count).map(move |i| self.samples[(start + i) % Self::CAPACITY])
    }

    /// Frames per second derived from the average frame time
    pub fn average_fps(&self) -> f32 {
        time::fps_from_millis(self.average() as f64) as f32
    }

    pub fn clear(&mut self) {
        self.samples.fill(0.0);
        self.write_index = 0;
        self.count = 0;
    }
}

impl Default for FrameTimeHistory {
    fn default() -> Self {
        Self::new()
    }
}
