// Shared tuning constants for the portal experience. Names express intended
// behavior and keep magic numbers out of the code.

// Portal transition timing
pub const TRANSITION_DURATION_MS: f64 = 5000.0;
pub const COMPLETION_DELAY_MS: f64 = 500.0;

// Tunnel field composition and recycle bounds
pub const TUNNEL_RING_COUNT: usize = 50;
pub const SPIRAL_PARTICLE_COUNT: usize = 5000;
pub const RING_FORWARD_BOUND: f32 = 15.0;
pub const RING_RESET_Z: f32 = -200.0;
pub const PARTICLE_FORWARD_BOUND: f32 = 20.0;
pub const PARTICLE_RESET_Z: f32 = -150.0;

// Ambient field composition
pub const AMBIENT_PARTICLE_COUNT: usize = 2000;
pub const FLOATING_SHAPE_COUNT: usize = 8;
pub const FIELD_SEED: u64 = 12345;

// Camera rest pose and transition sweep
pub const CAMERA_REST_Z: f32 = 5.0;
pub const CAMERA_REST_FOV_DEG: f32 = 75.0;
pub const CAMERA_PULL_BACK: f32 = 15.0;
pub const CAMERA_FOV_WIDEN_DEG: f32 = 70.0;

// Idle pointer parallax
pub const PARALLAX_RANGE: f32 = 0.1;
pub const PARALLAX_LERP: f32 = 0.05;

// Cursor follower chase rates (per tick)
pub const CURSOR_DOT_LERP: f32 = 0.15;
pub const CURSOR_RING_LERP: f32 = 0.08;

// Loading splash
pub const LOADING_DURATION_MS: f64 = 3000.0;
pub const LOADING_HOLD_MS: f64 = 500.0;
pub const LOADING_FADE_MS: f64 = 1000.0;
pub const LOADING_BAR_LERP: f32 = 0.1;

// Stat counters
pub const COUNTER_DURATION_MS: f64 = 2000.0;

// Viewports narrower than this get the visuals-free degraded experience.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;
