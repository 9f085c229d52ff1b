//! Scene rendering: a camera uniform shared by the star and planet
//! pipelines, drawn into the surface with a depth buffer.

pub(crate) mod pipeline_util;
/// Textured planet spheres.
pub mod planets;
/// Star field point list.
pub mod stars;

use wgpu::util::DeviceExt;

use self::planets::PlanetRenderer;
use self::stars::StarRenderer;
use crate::assets::LoadedTexture;
use crate::camera::core::{Camera, CameraUniform};
use crate::gpu::render_context::RenderContext;
use crate::gpu::texture::DepthTexture;
use crate::scene::SolarSystem;

/// Owns every GPU resource needed to draw a [`SolarSystem`].
pub struct Renderer {
    camera_uniform: CameraUniform,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    depth: DepthTexture,
    stars: StarRenderer,
    planets: PlanetRenderer,
}

impl Renderer {
    /// Create pipelines and upload static geometry for `system`.
    #[must_use]
    pub fn new(context: &RenderContext, system: &SolarSystem) -> Self {
        let camera_uniform = CameraUniform::new();
        let camera_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[camera_uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );
        let camera_layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Layout"),
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
            },
        );
        let camera_bind_group =
            context.device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Camera Bind Group"),
                layout: &camera_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                }],
            });

        let (width, height) = context.size();
        Self {
            camera_uniform,
            camera_buffer,
            camera_bind_group,
            depth: DepthTexture::new(&context.device, width, height),
            stars: StarRenderer::new(context, &camera_layout, system.stars()),
            planets: PlanetRenderer::new(
                context,
                &camera_layout,
                system.bodies().len(),
            ),
        }
    }

    /// Recreate size-dependent attachments.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth = DepthTexture::new(device, width, height);
    }

    /// Upload a freshly loaded planet texture.
    pub fn attach_texture(
        &mut self,
        context: &RenderContext,
        system: &SolarSystem,
        index: usize,
        image: &LoadedTexture,
    ) {
        let name = system.bodies().get(index).map_or("Planet", |b| b.name());
        self.planets.attach(context, index, name, image);
    }

    /// Draw one frame.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if no swapchain texture could be
    /// acquired.
    pub fn render(
        &mut self,
        context: &RenderContext,
        camera: &Camera,
        system: &SolarSystem,
    ) -> Result<(), wgpu::SurfaceError> {
        self.camera_uniform.update_view_proj(camera);
        context.queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[self.camera_uniform]),
        );
        self.planets.update(&context.queue, system);

        let frame = context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = context.create_encoder();
        {
            let mut pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Scene Pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view: &view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                                store: wgpu::StoreOp::Store,
                            },
                            depth_slice: None,
                        },
                    )],
                    depth_stencil_attachment: Some(
                        wgpu::RenderPassDepthStencilAttachment {
                            view: &self.depth.view,
                            depth_ops: Some(wgpu::Operations {
                                load: wgpu::LoadOp::Clear(1.0),
                                store: wgpu::StoreOp::Store,
                            }),
                            stencil_ops: None,
                        },
                    ),
                    timestamp_writes: None,
                    occlusion_query_set: None,
                });
            pass.set_bind_group(0, &self.camera_bind_group, &[]);
            self.stars.draw(&mut pass);
            self.planets.draw(&mut pass, system);
        }
        context.submit(encoder);
        frame.present();
        Ok(())
    }
}
