// The scene's visual field: either the idle ambient background or the
// transition tunnel. Exactly one field exists in a live scene; the
// transition controller swaps between them. Elements past their forward
// bound are recycled in place, never reallocated, so element counts stay
// constant for the life of a field.

use glam::Vec3;
use rand::prelude::*;

use super::color::hsl_to_rgb;
use super::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Ambient,
    Tunnel,
}

/// One tunnel ring. Geometry is an annulus facing the camera; `z` advances
/// toward the viewer each tick and teleports back past the far bound.
#[derive(Clone, Debug)]
pub struct Ring {
    pub z: f32,
    pub rotation: f32,
    pub scale: f32,
    pub hue: f32,
    pub opacity: f32,
    pub inner_radius: f32,
    pub outer_radius: f32,
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec3,
    pub color: [f32; 3],
}

/// Wireframe octahedron drifting in the idle background.
#[derive(Clone, Debug)]
pub struct FloatingShape {
    pub position: Vec3,
    pub rotation: Vec3,
    pub rotation_speed: Vec3,
    pub float_speed: f32,
    pub float_offset: f32,
}

#[derive(Clone, Debug)]
pub struct AmbientField {
    pub particles: Vec<Particle>,
    pub shapes: Vec<FloatingShape>,
    pub spin_y: f32,
}

impl AmbientField {
    pub fn generate(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..AMBIENT_PARTICLE_COUNT)
            .map(|_| {
                let position = Vec3::new(
                    (rng.gen::<f32>() - 0.5) * 100.0,
                    (rng.gen::<f32>() - 0.5) * 100.0,
                    (rng.gen::<f32>() - 0.5) * 100.0,
                );
                let color = hsl_to_rgb(
                    0.55 + rng.gen::<f32>() * 0.1,
                    1.0,
                    0.5 + rng.gen::<f32>() * 0.3,
                );
                Particle { position, color }
            })
            .collect();
        let shapes = (0..FLOATING_SHAPE_COUNT)
            .map(|_| FloatingShape {
                position: Vec3::new(
                    (rng.gen::<f32>() - 0.5) * 20.0,
                    (rng.gen::<f32>() - 0.5) * 20.0,
                    (rng.gen::<f32>() - 0.5) * 20.0,
                ),
                rotation: Vec3::ZERO,
                rotation_speed: Vec3::new(
                    (rng.gen::<f32>() - 0.5) * 0.02,
                    (rng.gen::<f32>() - 0.5) * 0.02,
                    (rng.gen::<f32>() - 0.5) * 0.02,
                ),
                float_speed: rng.gen::<f32>() * 0.01 + 0.005,
                float_offset: rng.gen::<f32>() * std::f32::consts::TAU,
            })
            .collect();
        Self {
            particles,
            shapes,
            spin_y: 0.0,
        }
    }

    /// One idle tick: slow background spin, shapes tumble and bob.
    pub fn advance(&mut self, now_sec: f64) {
        self.spin_y += 0.001;
        for shape in &mut self.shapes {
            shape.rotation += shape.rotation_speed;
            shape.position.y +=
                (now_sec as f32 * shape.float_speed + shape.float_offset).sin() * 0.01;
        }
    }
}

#[derive(Clone, Debug)]
pub struct TunnelField {
    pub rings: Vec<Ring>,
    pub particles: Vec<Particle>,
    pub spiral_rotation: f32,
}

impl TunnelField {
    /// Tunnel layout is fully deterministic: ring i sits at z = -4i with a
    /// graded hue and opacity; particles trace an expanding spiral reaching
    /// 150 units deep.
    pub fn generate() -> Self {
        let rings = (0..TUNNEL_RING_COUNT)
            .map(|i| {
                let fi = i as f32;
                let inner_radius = 1.0 + fi * 0.1;
                Ring {
                    z: -fi * 4.0,
                    rotation: fi * 0.1,
                    scale: 1.0,
                    hue: 0.55 + fi * 0.005,
                    opacity: 0.8 - fi * 0.015,
                    inner_radius,
                    outer_radius: inner_radius + 0.5 + fi * 0.02,
                }
            })
            .collect();
        let particles = (0..SPIRAL_PARTICLE_COUNT)
            .map(|i| {
                let t = i as f32 / SPIRAL_PARTICLE_COUNT as f32;
                let angle = t * std::f32::consts::PI * 40.0;
                let radius = 0.5 + t * 12.0;
                Particle {
                    position: Vec3::new(angle.cos() * radius, angle.sin() * radius, -t * 150.0),
                    color: hsl_to_rgb(0.45 + t * 0.3, 1.0, 0.5 + (t * 10.0).sin() * 0.3),
                }
            })
            .collect();
        Self {
            rings,
            particles,
            spiral_rotation: 0.0,
        }
    }

    /// One transition tick at eased progress `eased`. Rings and particles
    /// rush toward the viewer and recycle past their forward bounds; ring
    /// pulse scale follows a wall-clock sine offset per ring index.
    pub fn advance(&mut self, eased: f32, now_ms: f64) {
        for (i, ring) in self.rings.iter_mut().enumerate() {
            let speed = 0.5 + eased * 20.0;
            ring.z += speed;
            ring.rotation += 0.02 * speed;
            let pulse = (now_ms as f32 * 0.01 + i as f32 * 0.3).sin() * 0.3 + 1.0;
            ring.scale = pulse * (1.0 + eased * 0.5);
            if ring.z > RING_FORWARD_BOUND {
                ring.z = RING_RESET_Z;
            }
        }
        self.spiral_rotation += 0.01 * (1.0 + eased * 3.0);
        for particle in &mut self.particles {
            particle.position.z += (1.0 + eased * 2.0) * 0.8;
            if particle.position.z > PARTICLE_FORWARD_BOUND {
                particle.position.z = PARTICLE_RESET_Z;
            }
        }
    }
}

/// The one field a live scene holds. The enum makes the "never both, never
/// neither" invariant structural.
#[derive(Clone, Debug)]
pub enum SceneField {
    Ambient(AmbientField),
    Tunnel(TunnelField),
}

impl SceneField {
    pub fn ambient(seed: u64) -> Self {
        SceneField::Ambient(AmbientField::generate(seed))
    }

    pub fn tunnel() -> Self {
        SceneField::Tunnel(TunnelField::generate())
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            SceneField::Ambient(_) => FieldKind::Ambient,
            SceneField::Tunnel(_) => FieldKind::Tunnel,
        }
    }
}
