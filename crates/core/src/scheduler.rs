//! Frame scheduling for the simulation loop.
//!
//! The loop has no clock of its own: it runs one tick whenever the scheduler
//! grants a frame, so simulated time advances per displayed frame.

/// Grants frames to the simulation loop.
pub trait FrameScheduler {
    /// Called before every tick. Returns `false` to stop the loop.
    fn next_frame(&mut self) -> bool;
}

/// Grants a fixed number of frames, then stops.
#[derive(Debug, Clone, Copy)]
pub struct FixedFrames {
    remaining: u64,
}

impl FixedFrames {
    pub fn new(frames: u64) -> Self {
        Self { remaining: frames }
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl FrameScheduler for FixedFrames {
    fn next_frame(&mut self) -> bool {
        match self.remaining.checked_sub(1) {
            Some(left) => {
                self.remaining = left;
                true
            }
            None => false,
        }
    }
}
