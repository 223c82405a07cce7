use glam::{Quat, Vec3};
use web_sys as web;

use crate::constants::*;
use crate::core::color::hsl_to_rgb;
use crate::core::{Camera, CameraRig, SceneField};

// ===================== WebGPU state =====================

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SceneUniforms {
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    time: f32,
    _pad: [f32; 3],
}

/// Per-element GPU instance. Matches the `Instance` struct in field.wgsl.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub pos_scale: [f32; 4],
    pub color: [f32; 4],
    pub params: [f32; 4],
}

const SHAPE_DOT: f32 = 0.0;
const SHAPE_RING: f32 = 1.0;
const SHAPE_WIRE: f32 = 2.0;

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    instance_buffer: wgpu::Buffer,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    camera_rig: CameraRig,
    time_accum: f32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("field_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::FIELD_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("field_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("field_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("field_pipeline"),
            layout: Some(&pl),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_field"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<InstanceRaw>() as u64,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &wgpu::vertex_attr_array![0 => Float32x4, 1 => Float32x4, 2 => Float32x4],
                }],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_field"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    // Premultiplied additive-ish glow, matching the shader output
                    blend: Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("field_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("field_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("field_instances"),
            size: (MAX_FIELD_INSTANCES * std::mem::size_of::<InstanceRaw>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            bind_group,
            instance_buffer,
            width,
            height,
            clear_color: wgpu::Color {
                r: 0.0,
                g: 0.0,
                b: 0.066,
                a: 1.0,
            },
            camera_rig: CameraRig::rest(),
            time_accum: 0.0,
        })
    }

    pub fn set_camera(&mut self, rig: CameraRig) {
        self.camera_rig = rig;
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    pub fn render(
        &mut self,
        dt_sec: f32,
        instances: &[InstanceRaw],
    ) -> Result<(), wgpu::SurfaceError> {
        self.time_accum += dt_sec.max(0.0);

        let aspect = self.width as f32 / self.height.max(1) as f32;
        let camera = Camera::from_rig(&self.camera_rig, aspect);
        let uniforms = SceneUniforms {
            view: camera.view_matrix().to_cols_array_2d(),
            proj: camera.projection_matrix().to_cols_array_2d(),
            time: self.time_accum,
            _pad: [0.0; 3],
        };
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let count = instances.len().min(MAX_FIELD_INSTANCES);
        self.queue.write_buffer(
            &self.instance_buffer,
            0,
            bytemuck::cast_slice(&instances[..count]),
        );

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("field_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.instance_buffer.slice(..));
            rpass.draw(0..6, 0..count as u32);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

/// Flatten the current scene field into GPU instances. The spiral and the
/// ambient background rotate as whole systems, so those rotations are baked
/// into positions here rather than per element in the field data.
pub fn field_instances(scene: &SceneField) -> Vec<InstanceRaw> {
    let mut out = Vec::new();
    match scene {
        SceneField::Ambient(ambient) => {
            out.reserve(ambient.particles.len() + ambient.shapes.len());
            let spin = Quat::from_rotation_y(ambient.spin_y);
            for p in &ambient.particles {
                out.push(InstanceRaw {
                    pos_scale: pack_pos(spin * p.position, AMBIENT_PARTICLE_SIZE),
                    color: [
                        p.color[0],
                        p.color[1],
                        p.color[2],
                        AMBIENT_PARTICLE_OPACITY,
                    ],
                    params: [0.0, 0.0, SHAPE_DOT, 0.0],
                });
            }
            for s in &ambient.shapes {
                out.push(InstanceRaw {
                    pos_scale: pack_pos(s.position, FLOATING_SHAPE_SIZE),
                    color: [0.0, 0.831, 1.0, FLOATING_SHAPE_OPACITY],
                    params: [s.rotation.z, 0.0, SHAPE_WIRE, 0.0],
                });
            }
        }
        SceneField::Tunnel(tunnel) => {
            out.reserve(tunnel.rings.len() + tunnel.particles.len());
            for ring in &tunnel.rings {
                let rgb = hsl_to_rgb(ring.hue, 1.0, 0.6);
                out.push(InstanceRaw {
                    pos_scale: pack_pos(
                        Vec3::new(0.0, 0.0, ring.z),
                        ring.outer_radius * ring.scale,
                    ),
                    color: [rgb[0], rgb[1], rgb[2], ring.opacity.max(0.0)],
                    params: [
                        ring.rotation,
                        ring.inner_radius / ring.outer_radius,
                        SHAPE_RING,
                        0.0,
                    ],
                });
            }
            let swirl = Quat::from_rotation_z(tunnel.spiral_rotation);
            for p in &tunnel.particles {
                out.push(InstanceRaw {
                    pos_scale: pack_pos(swirl * p.position, SPIRAL_PARTICLE_SIZE),
                    color: [p.color[0], p.color[1], p.color[2], SPIRAL_PARTICLE_OPACITY],
                    params: [0.0, 0.0, SHAPE_DOT, 0.0],
                });
            }
        }
    }
    out
}

fn pack_pos(position: Vec3, half_extent: f32) -> [f32; 4] {
    [position.x, position.y, position.z, half_extent]
}
