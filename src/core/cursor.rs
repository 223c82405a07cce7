use glam::Vec2;

use super::constants::{CURSOR_DOT_LERP, CURSOR_RING_LERP};

/// Custom cursor follower: a dot and a trailing ring chase the pointer at
/// different rates, so the ring visibly lags the dot.
#[derive(Clone, Copy, Debug, Default)]
pub struct CursorFollower {
    pub dot: Vec2,
    pub ring: Vec2,
}

impl CursorFollower {
    pub fn new() -> Self {
        Self::default()
    }

    /// One tick of chase toward the pointer position (viewport pixels).
    pub fn update(&mut self, target: Vec2) {
        self.dot += (target - self.dot) * CURSOR_DOT_LERP;
        self.ring += (target - self.ring) * CURSOR_RING_LERP;
    }
}
