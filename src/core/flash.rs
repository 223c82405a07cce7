// Keyframed opacity timelines for the full-screen flash overlays fired at
// transition start and completion. The overlay itself is DOM-side; the
// timeline math lives here so it can be tested natively.

use smallvec::SmallVec;

#[derive(Clone, Copy, Debug)]
pub struct FlashKey {
    pub at_ms: f64,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashKind {
    Entry,
    Exit,
}

#[derive(Clone, Debug)]
pub struct FlashTimeline {
    pub kind: FlashKind,
    keys: SmallVec<[FlashKey; 6]>,
}

impl FlashTimeline {
    /// Double pulse fired when the tunnel starts: a hard pop, a beat of
    /// darkness, then a softer echo.
    pub fn transition_entry() -> Self {
        Self {
            kind: FlashKind::Entry,
            keys: SmallVec::from_slice(&[
                FlashKey {
                    at_ms: 0.0,
                    opacity: 0.0,
                },
                FlashKey {
                    at_ms: 100.0,
                    opacity: 1.0,
                },
                FlashKey {
                    at_ms: 300.0,
                    opacity: 0.0,
                },
                FlashKey {
                    at_ms: 800.0,
                    opacity: 0.0,
                },
                FlashKey {
                    at_ms: 950.0,
                    opacity: 0.7,
                },
                FlashKey {
                    at_ms: 1250.0,
                    opacity: 0.0,
                },
            ]),
        }
    }

    /// White-out fired at completion, fading over a second while the main
    /// screen takes over underneath.
    pub fn transition_exit() -> Self {
        Self {
            kind: FlashKind::Exit,
            keys: SmallVec::from_slice(&[
                FlashKey {
                    at_ms: 0.0,
                    opacity: 1.0,
                },
                FlashKey {
                    at_ms: 1000.0,
                    opacity: 0.0,
                },
            ]),
        }
    }

    /// Linear interpolation between surrounding keyframes; clamps to the
    /// first/last keyframe outside the timeline.
    pub fn opacity_at(&self, elapsed_ms: f64) -> f32 {
        let first = match self.keys.first() {
            Some(k) => k,
            None => return 0.0,
        };
        if elapsed_ms <= first.at_ms {
            return first.opacity;
        }
        for pair in self.keys.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if elapsed_ms <= b.at_ms {
                let span = (b.at_ms - a.at_ms).max(1e-9);
                let t = ((elapsed_ms - a.at_ms) / span) as f32;
                return a.opacity + (b.opacity - a.opacity) * t;
            }
        }
        self.keys.last().map(|k| k.opacity).unwrap_or(0.0)
    }

    pub fn duration_ms(&self) -> f64 {
        self.keys.last().map(|k| k.at_ms).unwrap_or(0.0)
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms()
    }
}
