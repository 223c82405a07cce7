use glam::Vec2;

/// Last known pointer position in viewport pixels, written by the pointer
/// listeners and queried by the frame tick. Nothing else mutates it.
#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
}

/// Pointer position in normalized device coordinates (+y up).
#[inline]
pub fn pointer_ndc(mouse: &MouseState, viewport_w: f32, viewport_h: f32) -> Vec2 {
    Vec2::new(
        (mouse.x / viewport_w.max(1.0)) * 2.0 - 1.0,
        -((mouse.y / viewport_h.max(1.0)) * 2.0 - 1.0),
    )
}
