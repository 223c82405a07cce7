/// Shell-side tuning constants and the element ids the shell binds to.
// Element ids
pub const CANVAS_ID: &str = "app-canvas";
pub const LOADING_SCREEN_ID: &str = "loading-screen";
pub const LOADING_BAR_ID: &str = "loading-bar";
pub const LOADING_STATUS_ID: &str = "loading-status";
pub const PORTAL_SCREEN_ID: &str = "portal-screen";
pub const MAIN_APP_ID: &str = "main-app";
pub const PORTAL_BUTTON_ID: &str = "portal-button";
pub const ACCESS_FORM_ID: &str = "access-form";
pub const CURSOR_ID: &str = "cursor";
pub const CURSOR_DOT_ID: &str = "cursor-dot";
pub const CURSOR_RING_ID: &str = "cursor-ring";

// Renderer capacity: tunnel rings + spiral particles, rounded up
pub const MAX_FIELD_INSTANCES: usize = 5056;

// Visual sizing (world units) and opacity per element class
pub const AMBIENT_PARTICLE_SIZE: f32 = 0.25;
pub const SPIRAL_PARTICLE_SIZE: f32 = 0.3;
pub const FLOATING_SHAPE_SIZE: f32 = 0.5;
pub const AMBIENT_PARTICLE_OPACITY: f32 = 0.6;
pub const SPIRAL_PARTICLE_OPACITY: f32 = 0.9;
pub const FLOATING_SHAPE_OPACITY: f32 = 0.3;

// Toast lifetime
pub const TOAST_VISIBLE_MS: i32 = 2500;
pub const TOAST_FADE_MS: i32 = 250;

// Form submission flow
pub const TRANSITION_KICKOFF_DELAY_MS: i32 = 400;
pub const BUTTON_RESTORE_DELAY_MS: i32 = 1500;
