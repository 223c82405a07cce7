// Host-side tests for the portal transition state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod portal {
    pub mod camera {
        include!("../src/core/camera.rs");
    }
    pub mod color {
        include!("../src/core/color.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod easing {
        include!("../src/core/easing.rs");
    }
    pub mod field {
        include!("../src/core/field.rs");
    }
    pub mod flash {
        include!("../src/core/flash.rs");
    }
    pub mod transition {
        include!("../src/core/transition.rs");
    }
}

use glam::Vec2;
use portal::constants::*;
use portal::field::{FieldKind, SceneField};
use portal::flash::{FlashKind, FlashTimeline};
use portal::transition::*;
use std::cell::RefCell;
use std::rc::Rc;

struct RecordingFlash {
    fired: Rc<RefCell<Vec<FlashKind>>>,
}

impl FlashOverlay for RecordingFlash {
    fn show(&mut self, timeline: FlashTimeline) {
        self.fired.borrow_mut().push(timeline.kind);
    }
}

struct RecordingScreens {
    events: Rc<RefCell<Vec<(&'static str, Screen)>>>,
}

impl ScreenVisibility for RecordingScreens {
    fn hide(&mut self, screen: Screen) {
        self.events.borrow_mut().push(("hide", screen));
    }
    fn show(&mut self, screen: Screen) {
        self.events.borrow_mut().push(("show", screen));
    }
}

type FlashLog = Rc<RefCell<Vec<FlashKind>>>;
type ScreenLog = Rc<RefCell<Vec<(&'static str, Screen)>>>;

fn make_controller(visuals: bool) -> (PortalTransition, FlashLog, ScreenLog) {
    let fired: FlashLog = Rc::new(RefCell::new(Vec::new()));
    let events: ScreenLog = Rc::new(RefCell::new(Vec::new()));
    let controller = PortalTransition::new(
        visuals,
        Box::new(RecordingFlash {
            fired: fired.clone(),
        }),
        Box::new(RecordingScreens {
            events: events.clone(),
        }),
    );
    (controller, fired, events)
}

fn no_pointer() -> Vec2 {
    Vec2::ZERO
}

#[test]
fn construction_yields_inactive_idle_with_ambient_field() {
    let (controller, fired, events) = make_controller(true);
    assert!(!controller.is_active());
    assert_eq!(controller.state().progress, 0.0);
    assert_eq!(controller.field_kind(), Some(FieldKind::Ambient));
    assert!(fired.borrow().is_empty());
    assert!(events.borrow().is_empty());
}

#[test]
fn start_activates_and_swaps_to_tunnel() {
    let (mut controller, fired, _) = make_controller(true);
    assert!(controller.start(0.0));
    assert!(controller.is_active());
    assert_eq!(controller.state().progress, 0.0);
    assert_eq!(controller.field_kind(), Some(FieldKind::Tunnel));
    assert_eq!(fired.borrow().as_slice(), &[FlashKind::Entry]);
}

#[test]
fn repeated_start_while_active_is_a_noop() {
    let (mut controller, fired, _) = make_controller(true);
    assert!(controller.start(0.0));
    controller.tick(1000.0, no_pointer());
    let progress_before = controller.state().progress;

    for t in [1001.0, 1500.0, 2000.0] {
        assert!(!controller.start(t));
    }
    assert_eq!(controller.state().progress, progress_before);
    assert_eq!(controller.field_kind(), Some(FieldKind::Tunnel));
    assert_eq!(fired.borrow().len(), 1, "entry flash must not refire");
}

#[test]
fn progress_is_monotone_and_bounded() {
    let (mut controller, _, _) = make_controller(true);
    controller.start(0.0);
    let mut prev = 0.0f32;
    let mut t = 0.0;
    while t < 7000.0 {
        controller.tick(t, no_pointer());
        let p = controller.state().progress;
        assert!((0.0..=1.0).contains(&p));
        assert!(p >= prev, "progress regressed at t={t}: {p} < {prev}");
        prev = p;
        t += 16.0;
    }
}

#[test]
fn progress_tracks_wall_clock_exactly() {
    let (mut controller, _, _) = make_controller(true);
    controller.start(0.0);
    controller.tick(2500.0, no_pointer());
    assert!((controller.state().progress - 0.5).abs() < 1e-6);
    controller.tick(5000.0, no_pointer());
    assert_eq!(controller.state().progress, 1.0);
}

#[test]
fn end_to_end_completion_swaps_screens_and_resets() {
    let (mut controller, fired, events) = make_controller(true);
    assert!(controller.start(0.0));
    controller.tick(2500.0, no_pointer());
    let out = controller.tick(5000.0, no_pointer());
    assert!(out.distortion.is_some());
    assert_eq!(
        fired.borrow().as_slice(),
        &[FlashKind::Entry, FlashKind::Exit]
    );
    // Still completing during the fixed delay.
    assert!(controller.is_active());
    assert!(events.borrow().is_empty());
    let out = controller.tick(5000.0 + COMPLETION_DELAY_MS - 1.0, no_pointer());
    assert!(out.distortion.is_some());
    assert!(controller.is_active());

    // Past the delay: screens swap, scene resets, controller idles.
    let out = controller.tick(5000.0 + COMPLETION_DELAY_MS + 1.0, no_pointer());
    assert!(out.distortion.is_none());
    assert_eq!(
        events.borrow().as_slice(),
        &[("hide", Screen::Portal), ("show", Screen::Main)]
    );
    assert!(!controller.is_active());
    assert_eq!(controller.field_kind(), Some(FieldKind::Ambient));

    // And a new run is accepted.
    assert!(controller.start(7000.0));
    assert_eq!(controller.field_kind(), Some(FieldKind::Tunnel));
}

#[test]
fn suspension_gap_is_absorbed_by_wall_clock_progress() {
    let (mut controller, _, _) = make_controller(true);
    controller.start(0.0);
    controller.tick(1000.0, no_pointer());
    assert!((controller.state().progress - 0.2).abs() < 1e-6);
    // Tab hidden: no ticks between t=1000 and t=4000.
    controller.tick(4000.0, no_pointer());
    assert!(
        (controller.state().progress - 0.8).abs() < 1e-6,
        "progress must reflect elapsed wall clock, not tick count"
    );
}

#[test]
fn recycle_invariants_hold_across_a_full_transition() {
    let (mut controller, _, _) = make_controller(true);
    controller.start(0.0);
    let mut t = 0.0;
    while t < TRANSITION_DURATION_MS {
        controller.tick(t, no_pointer());
        match controller.scene() {
            Some(SceneField::Tunnel(tunnel)) => {
                assert_eq!(tunnel.rings.len(), TUNNEL_RING_COUNT);
                assert_eq!(tunnel.particles.len(), SPIRAL_PARTICLE_COUNT);
                for ring in &tunnel.rings {
                    assert!(ring.z <= RING_FORWARD_BOUND);
                }
                for p in &tunnel.particles {
                    assert!(p.position.z <= PARTICLE_FORWARD_BOUND);
                }
            }
            other => panic!("expected tunnel mid-transition, got {:?}", other.map(|s| s.kind())),
        }
        t += 16.0;
    }
}

#[test]
fn camera_pulls_back_widens_and_recenters() {
    let (mut controller, _, _) = make_controller(true);
    controller.start(0.0);
    let mid = controller.tick(2500.0, no_pointer());
    assert!(mid.camera.position.z < CAMERA_REST_Z);
    assert!(mid.camera.fov_deg > CAMERA_REST_FOV_DEG);
    assert!(mid.camera.roll_radians > 0.0);

    controller.tick(5000.0, no_pointer());
    let done = controller.tick(5000.0 + COMPLETION_DELAY_MS, no_pointer());
    assert_eq!(done.camera.position.z, CAMERA_REST_Z);
    assert_eq!(done.camera.fov_deg, CAMERA_REST_FOV_DEG);
    assert_eq!(done.camera.roll_radians, 0.0);
}

#[test]
fn distortion_magnitudes_grow_with_progress() {
    let (mut controller, _, _) = make_controller(true);
    controller.start(0.0);
    let early = controller
        .tick(1000.0, no_pointer())
        .distortion
        .expect("distortion while animating");
    let late = controller
        .tick(4000.0, no_pointer())
        .distortion
        .expect("distortion while animating");
    assert!(late.scale > early.scale);
    assert!(late.rotate_deg > early.rotate_deg);
    assert!(late.hue_deg > early.hue_deg);
    assert!(late.saturate > early.saturate);
    assert!(late.brightness > early.brightness);
    assert!(late.blur_px > early.blur_px);
    assert!(late.tilt_x_deg > early.tilt_x_deg);
}

#[test]
fn idle_parallax_drifts_toward_the_pointer() {
    let (mut controller, _, _) = make_controller(true);
    let pointer = Vec2::new(1.0, 1.0);
    let mut out = controller.tick(0.0, pointer);
    for t in 1..500 {
        out = controller.tick(t as f64 * 16.0, pointer);
    }
    assert!((out.camera.position.x - PARALLAX_RANGE).abs() < 1e-3);
    assert!((out.camera.position.y - PARALLAX_RANGE).abs() < 1e-3);
    assert_eq!(out.camera.position.z, CAMERA_REST_Z);
    assert!(out.distortion.is_none());
}

#[test]
fn degraded_controller_runs_the_lifecycle_without_a_scene() {
    let (mut controller, fired, events) = make_controller(false);
    assert_eq!(controller.field_kind(), None);

    assert!(controller.start(0.0));
    assert!(controller.is_active());
    assert_eq!(controller.field_kind(), None, "no tunnel without visuals");
    controller.tick(2500.0, no_pointer());
    controller.tick(5000.0, no_pointer());
    controller.tick(5000.0 + COMPLETION_DELAY_MS, no_pointer());

    assert!(!controller.is_active());
    assert_eq!(controller.field_kind(), None);
    assert_eq!(
        fired.borrow().as_slice(),
        &[FlashKind::Entry, FlashKind::Exit]
    );
    assert_eq!(
        events.borrow().as_slice(),
        &[("hide", Screen::Portal), ("show", Screen::Main)]
    );
    assert!(controller.start(6000.0));
}

#[test]
fn completion_holds_end_pose_until_the_swap() {
    let (mut controller, _, _) = make_controller(true);
    controller.start(0.0);
    controller.tick(5000.0, no_pointer());
    let holding = controller.tick(5100.0, no_pointer());
    let d = holding.distortion.expect("distortion held during delay");
    assert_eq!(d.hue_deg, 360.0);
    assert_eq!(holding.camera.fov_deg, CAMERA_REST_FOV_DEG + CAMERA_FOV_WIDEN_DEG);
}
