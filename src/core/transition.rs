// The portal transition controller: the one component with real state.
//
// Lifecycle: idle ambient background → `start()` builds the tunnel field
// and begins a fixed-duration, wall-clock-driven sweep → on completion a
// flash fires, the portal screen yields to the main screen after a short
// delay, and the scene resets to the ambient field, ready for another run.
//
// Progress is always derived from elapsed wall-clock time, never from tick
// counts, so a suspended frame loop (hidden tab) resumes without rewinding.

use glam::{Vec2, Vec3};

use super::camera::CameraRig;
use super::constants::*;
use super::easing::ease_in_out_cubic;
use super::field::{FieldKind, SceneField};
use super::flash::FlashTimeline;

/// Timed full-screen overlay; fire-and-forget, nothing is consumed back.
pub trait FlashOverlay {
    fn show(&mut self, timeline: FlashTimeline);
}

/// Top-level screen toggles. Implementations must be idempotent.
pub trait ScreenVisibility {
    fn hide(&mut self, screen: Screen);
    fn show(&mut self, screen: Screen);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Portal,
    Main,
}

/// Default capabilities for environments without the optional overlay/DOM
/// machinery; the controller still runs its full lifecycle against them.
#[derive(Default)]
pub struct NoopFlash;

impl FlashOverlay for NoopFlash {
    fn show(&mut self, _timeline: FlashTimeline) {}
}

#[derive(Default)]
pub struct NoopScreens;

impl ScreenVisibility for NoopScreens {
    fn hide(&mut self, _screen: Screen) {}
    fn show(&mut self, _screen: Screen) {}
}

/// Screen-space warp applied outside the scene while the transition runs.
/// Every magnitude scales with eased progress, so the warp deepens
/// monotonically until the cut.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Distortion {
    pub scale: f32,
    pub rotate_deg: f32,
    pub hue_deg: f32,
    pub saturate: f32,
    pub brightness: f32,
    pub blur_px: f32,
    pub tilt_x_deg: f32,
    pub tilt_y_deg: f32,
}

impl Distortion {
    pub fn at(eased: f32) -> Self {
        Self {
            scale: 1.0 + eased * 0.2,
            rotate_deg: eased * 10.0,
            hue_deg: eased * 360.0,
            saturate: 1.0 + eased * 2.0,
            brightness: 1.0 + eased * 0.3,
            blur_px: eased * 2.0,
            tilt_x_deg: eased * 15.0,
            tilt_y_deg: eased * 5.0,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TransitionState {
    pub is_active: bool,
    pub progress: f32,
    pub duration_ms: f64,
}

enum Phase {
    Idle,
    Animating { started_at_ms: f64 },
    Completing { swap_at_ms: f64 },
}

/// What the shell applies after a tick: the camera pose, and the screen
/// distortion while one is in force (`None` clears it).
#[derive(Clone, Copy, Debug)]
pub struct TickOutput {
    pub camera: CameraRig,
    pub distortion: Option<Distortion>,
}

pub struct PortalTransition {
    state: TransitionState,
    phase: Phase,
    scene: Option<SceneField>,
    parallax: Vec2,
    flash: Box<dyn FlashOverlay>,
    screens: Box<dyn ScreenVisibility>,
}

impl PortalTransition {
    /// `visuals` false builds the degraded controller: no scene is ever
    /// constructed, but the lifecycle (activation, flashes, screen swap)
    /// still runs so the page stays usable without a renderer.
    pub fn new(
        visuals: bool,
        flash: Box<dyn FlashOverlay>,
        screens: Box<dyn ScreenVisibility>,
    ) -> Self {
        Self {
            state: TransitionState {
                is_active: false,
                progress: 0.0,
                duration_ms: TRANSITION_DURATION_MS,
            },
            phase: Phase::Idle,
            scene: visuals.then(|| SceneField::ambient(FIELD_SEED)),
            parallax: Vec2::ZERO,
            flash,
            screens,
        }
    }

    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// Read-only guard for callers (button, keyboard shortcut) that want to
    /// skip redundant triggers.
    pub fn is_active(&self) -> bool {
        self.state.is_active
    }

    pub fn scene(&self) -> Option<&SceneField> {
        self.scene.as_ref()
    }

    pub fn field_kind(&self) -> Option<FieldKind> {
        self.scene.as_ref().map(SceneField::kind)
    }

    /// Start the transition. No-op while one is already running: repeated
    /// triggers (click plus keyboard) leave the state exactly as a single
    /// call would.
    pub fn start(&mut self, now_ms: f64) -> bool {
        if self.state.is_active {
            return false;
        }
        self.state.is_active = true;
        self.state.progress = 0.0;
        self.phase = Phase::Animating {
            started_at_ms: now_ms,
        };
        if let Some(scene) = &mut self.scene {
            *scene = SceneField::tunnel();
        }
        self.flash.show(FlashTimeline::transition_entry());
        true
    }

    /// One tick. `pointer_ndc` is the pointer in normalized device
    /// coordinates, used only for the idle parallax drift.
    pub fn tick(&mut self, now_ms: f64, pointer_ndc: Vec2) -> TickOutput {
        match self.phase {
            Phase::Idle => {
                if let Some(SceneField::Ambient(ambient)) = &mut self.scene {
                    ambient.advance(now_ms * 0.001);
                }
                self.parallax += (pointer_ndc * PARALLAX_RANGE - self.parallax) * PARALLAX_LERP;
                TickOutput {
                    camera: CameraRig {
                        position: Vec3::new(self.parallax.x, self.parallax.y, CAMERA_REST_Z),
                        ..CameraRig::rest()
                    },
                    distortion: None,
                }
            }
            Phase::Animating { started_at_ms } => {
                let elapsed = (now_ms - started_at_ms).max(0.0);
                let progress = (elapsed / self.state.duration_ms).clamp(0.0, 1.0) as f32;
                self.state.progress = self.state.progress.max(progress);
                let eased = ease_in_out_cubic(self.state.progress);

                if let Some(SceneField::Tunnel(tunnel)) = &mut self.scene {
                    tunnel.advance(eased, now_ms);
                }

                let output = TickOutput {
                    camera: transition_camera(eased),
                    distortion: Some(Distortion::at(eased)),
                };
                if self.state.progress >= 1.0 {
                    self.flash.show(FlashTimeline::transition_exit());
                    self.phase = Phase::Completing {
                        swap_at_ms: now_ms + COMPLETION_DELAY_MS,
                    };
                }
                output
            }
            Phase::Completing { swap_at_ms } => {
                if now_ms >= swap_at_ms {
                    self.complete();
                    TickOutput {
                        camera: CameraRig::rest(),
                        distortion: None,
                    }
                } else {
                    // Hold the end pose until the swap lands.
                    TickOutput {
                        camera: transition_camera(1.0),
                        distortion: Some(Distortion::at(1.0)),
                    }
                }
            }
        }
    }

    /// The reset step: swap screens, rebuild the ambient field, recenter
    /// the camera, and accept new starts.
    fn complete(&mut self) {
        self.screens.hide(Screen::Portal);
        self.screens.show(Screen::Main);
        if self.scene.is_some() {
            self.scene = Some(SceneField::ambient(FIELD_SEED));
        }
        self.parallax = Vec2::ZERO;
        self.state.is_active = false;
        self.phase = Phase::Idle;
    }
}

fn transition_camera(eased: f32) -> CameraRig {
    CameraRig {
        position: Vec3::new(0.0, 0.0, CAMERA_REST_Z - eased * CAMERA_PULL_BACK),
        roll_radians: eased * std::f32::consts::PI * 3.0,
        fov_deg: CAMERA_REST_FOV_DEG + eased * CAMERA_FOV_WIDEN_DEG,
    }
}
