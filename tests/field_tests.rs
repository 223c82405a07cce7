// Host-side tests for field generation and the recycle invariants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod portal {
    pub mod color {
        include!("../src/core/color.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod field {
        include!("../src/core/field.rs");
    }
}

use portal::color::hsl_to_rgb;
use portal::constants::*;
use portal::field::{AmbientField, SceneField, TunnelField};

#[test]
fn tunnel_ring_layout_follows_the_graded_formula() {
    let tunnel = TunnelField::generate();
    assert_eq!(tunnel.rings.len(), TUNNEL_RING_COUNT);
    for (i, ring) in tunnel.rings.iter().enumerate() {
        let fi = i as f32;
        assert!((ring.z - (-fi * 4.0)).abs() < 1e-4);
        assert!((ring.rotation - fi * 0.1).abs() < 1e-4);
        assert!((ring.hue - (0.55 + fi * 0.005)).abs() < 1e-5);
        assert!((ring.opacity - (0.8 - fi * 0.015)).abs() < 1e-5);
        assert!((ring.inner_radius - (1.0 + fi * 0.1)).abs() < 1e-4);
        assert!((ring.outer_radius - (ring.inner_radius + 0.5 + fi * 0.02)).abs() < 1e-4);
    }
}

#[test]
fn tunnel_spiral_expands_and_reaches_full_depth() {
    let tunnel = TunnelField::generate();
    assert_eq!(tunnel.particles.len(), SPIRAL_PARTICLE_COUNT);
    let mut prev_radius = 0.0f32;
    for (i, p) in tunnel.particles.iter().enumerate() {
        let radius = (p.position.x * p.position.x + p.position.y * p.position.y).sqrt();
        assert!(p.position.z <= 0.0 && p.position.z >= -150.0);
        if i > 0 {
            assert!(radius >= prev_radius - 1e-3, "spiral should expand");
        }
        prev_radius = radius;
    }
    let deepest = tunnel
        .particles
        .iter()
        .map(|p| p.position.z)
        .fold(f32::MAX, f32::min);
    assert!(deepest < -149.0);
}

#[test]
fn ring_recycle_keeps_count_and_bound() {
    let mut tunnel = TunnelField::generate();
    // Full-speed ticks; every ring must stay recycled below the bound.
    for tick in 0..1000 {
        tunnel.advance(1.0, tick as f64 * 16.0);
        assert_eq!(tunnel.rings.len(), TUNNEL_RING_COUNT);
        for ring in &tunnel.rings {
            assert!(
                ring.z <= RING_FORWARD_BOUND,
                "ring escaped to z={}",
                ring.z
            );
        }
    }
}

#[test]
fn particle_recycle_keeps_count_and_bound() {
    let mut tunnel = TunnelField::generate();
    for tick in 0..1000 {
        tunnel.advance(1.0, tick as f64 * 16.0);
        assert_eq!(tunnel.particles.len(), SPIRAL_PARTICLE_COUNT);
        for p in &tunnel.particles {
            assert!(
                p.position.z <= PARTICLE_FORWARD_BOUND,
                "particle escaped to z={}",
                p.position.z
            );
        }
    }
}

#[test]
fn ring_speed_scales_with_eased_progress() {
    let mut slow = TunnelField::generate();
    let mut fast = TunnelField::generate();
    // Ring 10 starts at z = -40, far enough back that neither step recycles.
    let start_z = slow.rings[10].z;
    slow.advance(0.0, 0.0);
    fast.advance(1.0, 0.0);
    let slow_dz = slow.rings[10].z - start_z;
    let fast_dz = fast.rings[10].z - start_z;
    assert!((slow_dz - 0.5).abs() < 1e-4);
    assert!((fast_dz - 20.5).abs() < 1e-3);
}

#[test]
fn ambient_field_composition_and_bounds() {
    let ambient = AmbientField::generate(FIELD_SEED);
    assert_eq!(ambient.particles.len(), AMBIENT_PARTICLE_COUNT);
    assert_eq!(ambient.shapes.len(), FLOATING_SHAPE_COUNT);
    for p in &ambient.particles {
        assert!(p.position.x.abs() <= 50.0);
        assert!(p.position.y.abs() <= 50.0);
        assert!(p.position.z.abs() <= 50.0);
        for c in p.color {
            assert!((0.0..=1.0).contains(&c));
        }
    }
    for s in &ambient.shapes {
        assert!(s.rotation_speed.x.abs() <= 0.01);
        assert!(s.float_speed >= 0.005 && s.float_speed <= 0.015);
    }
}

#[test]
fn ambient_generation_is_deterministic_per_seed() {
    let a = AmbientField::generate(FIELD_SEED);
    let b = AmbientField::generate(FIELD_SEED);
    for (pa, pb) in a.particles.iter().zip(&b.particles) {
        assert_eq!(pa.position, pb.position);
    }
    let c = AmbientField::generate(FIELD_SEED + 1);
    assert_ne!(a.particles[0].position, c.particles[0].position);
}

#[test]
fn ambient_advance_spins_and_bobs() {
    let mut ambient = AmbientField::generate(FIELD_SEED);
    let y0: Vec<f32> = ambient.shapes.iter().map(|s| s.rotation.y).collect();
    for tick in 0..100 {
        ambient.advance(tick as f64 * 0.016);
    }
    assert!((ambient.spin_y - 0.1).abs() < 1e-4);
    let moved = ambient
        .shapes
        .iter()
        .zip(&y0)
        .any(|(s, y)| (s.rotation.y - y).abs() > 1e-6);
    assert!(moved, "shapes should tumble");
}

#[test]
fn scene_field_kind_matches_variant() {
    assert_eq!(
        SceneField::ambient(FIELD_SEED).kind(),
        portal::field::FieldKind::Ambient
    );
    assert_eq!(SceneField::tunnel().kind(), portal::field::FieldKind::Tunnel);
}

#[test]
fn hsl_conversion_hits_known_colors() {
    let red = hsl_to_rgb(0.0, 1.0, 0.5);
    assert!((red[0] - 1.0).abs() < 1e-5 && red[1].abs() < 1e-5 && red[2].abs() < 1e-5);
    let green = hsl_to_rgb(1.0 / 3.0, 1.0, 0.5);
    assert!(green[1] > 0.99 && green[0] < 1e-4 && green[2] < 1e-4);
    let white = hsl_to_rgb(0.2, 0.7, 1.0);
    for c in white {
        assert!((c - 1.0).abs() < 1e-5);
    }
    // Hue wraps past 1.0
    let wrapped = hsl_to_rgb(1.25, 1.0, 0.5);
    let quarter = hsl_to_rgb(0.25, 1.0, 0.5);
    for (a, b) in wrapped.iter().zip(quarter.iter()) {
        assert!((a - b).abs() < 1e-5);
    }
}
