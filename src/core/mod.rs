pub mod camera;
pub mod color;
pub mod constants;
pub mod counter;
pub mod cursor;
pub mod easing;
pub mod field;
pub mod flash;
pub mod lead;
pub mod loading;
pub mod transition;

pub use camera::{Camera, CameraRig};
pub use field::{AmbientField, FieldKind, SceneField, TunnelField};
pub use transition::{PortalTransition, Screen, TickOutput, TransitionState};

// Shaders bundled as string constants
pub static FIELD_WGSL: &str = include_str!("../../shaders/field.wgsl");
