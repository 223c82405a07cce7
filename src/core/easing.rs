/// Easing curves shared by the portal transition and the stat counters.
///
/// `ease_in_out_cubic` is the transition's progress remap and its boundary
/// values are load-bearing: f(0) == 0, f(0.5) == 0.5, f(1) == 1 exactly.
#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
    }
}

/// Elastic ease-out: overshoots the target, then settles with a damped wobble.
#[inline]
pub fn ease_out_elastic(t: f32) -> f32 {
    (-13.0 * (t + 1.0) * std::f32::consts::PI / 2.0).sin() * 2.0_f32.powf(-10.0 * t) + 1.0
}
