// Camera types shared between the transition controller and the renderer.
//
// `CameraRig` is the pose the controller asks for each tick; `Camera` turns
// a rig plus the surface aspect into view/projection matrices. Nothing here
// touches platform APIs, so both sides compile natively for tests.

use glam::{Mat4, Vec3};

use super::constants::{CAMERA_REST_FOV_DEG, CAMERA_REST_Z};

/// Pose the transition controller wants the camera to adopt this tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraRig {
    pub position: Vec3,
    pub roll_radians: f32,
    pub fov_deg: f32,
}

impl CameraRig {
    /// Centered rest pose used while idle and restored on reset.
    pub fn rest() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, CAMERA_REST_Z),
            roll_radians: 0.0,
            fov_deg: CAMERA_REST_FOV_DEG,
        }
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::rest()
    }
}

/// Right-handed perspective camera looking down -Z, with an optional roll
/// about the view axis.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub roll_radians: f32,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn from_rig(rig: &CameraRig, aspect: f32) -> Self {
        Self {
            eye: rig.position,
            roll_radians: rig.roll_radians,
            aspect: aspect.max(1e-3),
            fovy_radians: rig.fov_deg.to_radians(),
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        let look = Mat4::look_at_rh(self.eye, self.eye + Vec3::NEG_Z, Vec3::Y);
        Mat4::from_rotation_z(-self.roll_radians) * look
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
