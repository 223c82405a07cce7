// Scroll-triggered stat counter animation. Intermediate values overshoot
// with the elastic ease; the final text is always the exact target.

use super::constants::COUNTER_DURATION_MS;
use super::easing::ease_out_elastic;

#[derive(Clone, Copy, Debug)]
pub struct CounterAnimation {
    pub target: f64,
    pub started_at_ms: f64,
}

impl CounterAnimation {
    pub fn new(target: f64, now_ms: f64) -> Self {
        Self {
            target,
            started_at_ms: now_ms,
        }
    }

    /// Display text at `now_ms` plus whether the animation has ended.
    pub fn text_at(&self, now_ms: f64) -> (String, bool) {
        let progress = ((now_ms - self.started_at_ms) / COUNTER_DURATION_MS).clamp(0.0, 1.0);
        if progress >= 1.0 {
            (format_target(self.target), true)
        } else {
            let value = self.target * ease_out_elastic(progress as f32) as f64;
            (format_value(self.target, value), false)
        }
    }
}

/// Integer targets count in whole numbers; fractional targets show one
/// decimal place.
pub fn format_value(target: f64, value: f64) -> String {
    if target.fract() == 0.0 {
        format!("{}", value.floor() as i64)
    } else {
        format!("{:.1}", value)
    }
}

pub fn format_target(target: f64) -> String {
    if target.fract() == 0.0 {
        format!("{}", target as i64)
    } else {
        format!("{}", target)
    }
}
