use wgpu::util::DeviceExt;

use super::pipeline_util;
use crate::assets::LoadedTexture;
use crate::gpu::render_context::RenderContext;
use crate::gpu::texture::PlanetTexture;
use crate::scene::mesh::{SphereMesh, SphereVertex};
use crate::scene::{SolarSystem, TextureState};

/// Sphere tessellation, matching a 64x64 segment UV sphere.
const SPHERE_SEGMENTS: u32 = 64;

/// GPU resources for one planet whose texture has arrived.
struct PlanetSlot {
    _texture: PlanetTexture,
    model_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// Draws textured, unlit planets. All planets share one unit sphere mesh;
/// each gets its own model uniform and texture bind group once loaded.
pub struct PlanetRenderer {
    pipeline: wgpu::RenderPipeline,
    model_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    slots: Vec<Option<PlanetSlot>>,
}

impl PlanetRenderer {
    /// Build the shared mesh and pipeline with an empty slot per body.
    #[must_use]
    pub fn new(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
        body_count: usize,
    ) -> Self {
        let mesh = SphereMesh::uv_sphere(SPHERE_SEGMENTS, SPHERE_SEGMENTS);
        let vertex_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Planet Vertex Buffer"),
                contents: bytemuck::cast_slice(&mesh.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            },
        );
        let index_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Planet Index Buffer"),
                contents: bytemuck::cast_slice(&mesh.indices),
                usage: wgpu::BufferUsages::INDEX,
            },
        );

        let model_layout = Self::create_model_layout(&context.device);
        let sampler = context.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Planet Sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        Self {
            pipeline: Self::create_pipeline(
                context,
                camera_layout,
                &model_layout,
            ),
            model_layout,
            sampler,
            vertex_buffer,
            index_buffer,
            index_count: mesh.index_count(),
            slots: (0..body_count).map(|_| None).collect(),
        }
    }

    fn create_model_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Planet Model Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float {
                            filterable: true,
                        },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(
                        wgpu::SamplerBindingType::Filtering,
                    ),
                    count: None,
                },
            ],
        })
    }

    fn create_pipeline(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
        model_layout: &wgpu::BindGroupLayout,
    ) -> wgpu::RenderPipeline {
        let shader = context.device.create_shader_module(wgpu::include_wgsl!(
            "../../assets/shaders/planet.wgsl"
        ));

        let pipeline_layout = context.device.create_pipeline_layout(
            &wgpu::PipelineLayoutDescriptor {
                label: Some("Planet Pipeline Layout"),
                bind_group_layouts: &[camera_layout, model_layout],
                push_constant_ranges: &[],
            },
        );

        context
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Planet Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[wgpu::VertexBufferLayout {
                        array_stride: size_of::<SphereVertex>()
                            as wgpu::BufferAddress,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &wgpu::vertex_attr_array![
                            0 => Float32x3,
                            1 => Float32x2,
                        ],
                    }],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &pipeline_util::surface_targets(context.format()),
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    cull_mode: Some(wgpu::Face::Back),
                    ..Default::default()
                },
                depth_stencil: Some(pipeline_util::depth_stencil_state()),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            })
    }

    /// Upload a decoded texture for body `index` and make it drawable.
    /// Out-of-range indices and images above the device texture limit are
    /// ignored.
    pub fn attach(
        &mut self,
        context: &RenderContext,
        index: usize,
        name: &str,
        image: &LoadedTexture,
    ) {
        let Some(slot) = self.slots.get_mut(index) else {
            return;
        };
        let max = context.device.limits().max_texture_dimension_2d;
        if image.width > max || image.height > max {
            log::warn!(
                "texture for {name} is {}x{}, above the device limit {max}",
                image.width,
                image.height
            );
            return;
        }

        let texture =
            PlanetTexture::upload(&context.device, &context.queue, name, image);
        let model_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Planet Model Buffer"),
                contents: bytemuck::cast_slice(
                    &glam::Mat4::IDENTITY.to_cols_array(),
                ),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );
        let bind_group =
            context.device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Planet Bind Group"),
                layout: &self.model_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: model_buffer.as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::TextureView(
                            &texture.view,
                        ),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: wgpu::BindingResource::Sampler(&self.sampler),
                    },
                ],
            });

        *slot = Some(PlanetSlot {
            _texture: texture,
            model_buffer,
            bind_group,
        });
    }

    /// Write current model matrices for every drawable planet.
    pub fn update(&self, queue: &wgpu::Queue, system: &SolarSystem) {
        for (slot, body) in self.slots.iter().zip(system.bodies()) {
            if let Some(slot) = slot {
                let matrix = body.model_matrix().to_cols_array();
                queue.write_buffer(
                    &slot.model_buffer,
                    0,
                    bytemuck::cast_slice(&matrix),
                );
            }
        }
    }

    /// Record draws for planets whose texture is ready. Expects the camera
    /// bind group at slot 0.
    pub fn draw(
        &self,
        pass: &mut wgpu::RenderPass<'_>,
        system: &SolarSystem,
    ) {
        pass.set_pipeline(&self.pipeline);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(
            self.index_buffer.slice(..),
            wgpu::IndexFormat::Uint32,
        );
        for (slot, body) in self.slots.iter().zip(system.bodies()) {
            let Some(slot) = slot else { continue };
            if body.texture_state() != TextureState::Ready {
                continue;
            }
            pass.set_bind_group(1, &slot.bind_group, &[]);
            pass.draw_indexed(0..self.index_count, 0, 0..1);
        }
    }
}
